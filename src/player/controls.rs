//! Transport and action controls shown on the player.
//!
//! Every control is drawn, but only some of them are wired to a handler.
//! The rest are placeholders: they render like buttons and do nothing when
//! pressed. Views must ask [`TransportControl::is_wired`] before attaching
//! a press handler.

/// A control drawn on the player surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportControl {
    Like,
    More,
    Shuffle,
    SkipBack,
    PlayPause,
    SkipForward,
    Repeat,
}

impl TransportControl {
    /// Controls under the song title, left to right.
    pub const ACTIONS: [TransportControl; 2] = [TransportControl::Like, TransportControl::More];

    /// Main transport row, left to right.
    pub const TRANSPORT: [TransportControl; 5] = [
        TransportControl::Shuffle,
        TransportControl::SkipBack,
        TransportControl::PlayPause,
        TransportControl::SkipForward,
        TransportControl::Repeat,
    ];

    /// Whether pressing this control changes any state.
    pub const fn is_wired(self) -> bool {
        matches!(self, TransportControl::Like | TransportControl::PlayPause)
    }

    /// Human-readable name, used in logs and tooltips.
    pub const fn label(self) -> &'static str {
        match self {
            TransportControl::Like => "Like",
            TransportControl::More => "More",
            TransportControl::Shuffle => "Shuffle",
            TransportControl::SkipBack => "Previous",
            TransportControl::PlayPause => "Play/Pause",
            TransportControl::SkipForward => "Next",
            TransportControl::Repeat => "Repeat",
        }
    }
}
