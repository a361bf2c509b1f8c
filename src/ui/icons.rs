//! Icon glyphs for the player controls.
//!
//! Icons are plain Unicode symbols rendered with the default font stack;
//! the text shaper falls back to a system symbol font where the default
//! font lacks a glyph.

use iced::widget::Text;

use crate::player::TransportControl;

// ============================================================================
// Player Control Icons
// ============================================================================

/// Play - BLACK RIGHT-POINTING TRIANGLE (U+25B6)
pub const PLAY: char = '\u{25b6}';

/// Pause - DOUBLE VERTICAL BAR (U+23F8)
pub const PAUSE: char = '\u{23f8}';

/// Skip backward - BLACK LEFT-POINTING DOUBLE TRIANGLE WITH VERTICAL BAR (U+23EE)
pub const SKIP_BACK: char = '\u{23ee}';

/// Skip forward - BLACK RIGHT-POINTING DOUBLE TRIANGLE WITH VERTICAL BAR (U+23ED)
pub const SKIP_FORWARD: char = '\u{23ed}';

/// Shuffle - TWISTED RIGHTWARDS ARROWS (U+1F500)
pub const SHUFFLE: char = '\u{1f500}';

/// Repeat - CLOCKWISE RIGHTWARDS AND LEFTWARDS OPEN CIRCLE ARROWS (U+1F501)
pub const REPEAT: char = '\u{1f501}';

// ============================================================================
// Action Icons
// ============================================================================

/// Liked - BLACK HEART SUIT (U+2665)
pub const HEART_FILLED: char = '\u{2665}';

/// Not liked - WHITE HEART SUIT (U+2661)
pub const HEART_OUTLINE: char = '\u{2661}';

/// More - MIDLINE HORIZONTAL ELLIPSIS (U+22EF)
pub const MORE: char = '\u{22ef}';

/// Volume - SPEAKER WITH THREE SOUND WAVES (U+1F50A)
pub const VOLUME: char = '\u{1f50a}';

// ============================================================================
// Artwork Playback Badges
// ============================================================================

/// Muted - SPEAKER WITH CANCELLATION STROKE (U+1F507)
pub const MUTED: char = '\u{1f507}';

// ============================================================================
// Helper Functions
// ============================================================================

/// Glyph for a control. Play/pause and like depend on the current flags.
pub fn control_glyph(control: TransportControl, is_playing: bool, is_liked: bool) -> char {
    match control {
        TransportControl::Like if is_liked => HEART_FILLED,
        TransportControl::Like => HEART_OUTLINE,
        TransportControl::More => MORE,
        TransportControl::Shuffle => SHUFFLE,
        TransportControl::SkipBack => SKIP_BACK,
        TransportControl::PlayPause if is_playing => PAUSE,
        TransportControl::PlayPause => PLAY,
        TransportControl::SkipForward => SKIP_FORWARD,
        TransportControl::Repeat => REPEAT,
    }
}

/// Create an icon text element with specific size
pub fn icon_sized(c: char, size: u16) -> Text<'static> {
    Text::new(c.to_string()).size(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_button_shows_pause_while_playing() {
        assert_eq!(control_glyph(TransportControl::PlayPause, false, false), PLAY);
        assert_eq!(control_glyph(TransportControl::PlayPause, true, false), PAUSE);
    }

    #[test]
    fn heart_fills_when_liked() {
        assert_eq!(control_glyph(TransportControl::Like, false, false), HEART_OUTLINE);
        assert_eq!(control_glyph(TransportControl::Like, false, true), HEART_FILLED);
    }

    #[test]
    fn static_glyphs_ignore_flags() {
        for control in TransportControl::TRANSPORT {
            if control == TransportControl::PlayPause {
                continue;
            }
            assert_eq!(
                control_glyph(control, false, false),
                control_glyph(control, true, true)
            );
        }
    }
}
