//! Animated artwork surfaces.
//!
//! Every artwork slot (the large frame and each Up Next thumbnail) is a
//! video surface with the same playback contract: autoplay, loop, muted,
//! inline. The contract does not depend on the song or on `is_playing`.
//!
//! iced has no video widget, so a surface is drawn as a gradient frame
//! standing in for the decoded frames. The stand-in is built from the
//! surface's asset and playback flags: it names the asset file and shows
//! one badge per active flag. Load failures are left to the platform;
//! there is no fallback image.

use iced::widget::{Space, column, container, row, stack, text};
use iced::{Alignment, Element, Length, Theme};

use crate::model::{Song, VideoAsset};
use crate::ui::icons::{self, icon_sized};
use crate::ui::messages::Message;
use crate::ui::theme::layout::{self, Breakpoint};
use crate::ui::theme::{self, color, spacing, typography};

/// Glyph size for badges on thumbnails.
const THUMBNAIL_BADGE_SIZE: u16 = 10;

/// Playback flags applied to an artwork video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoPlayback {
    pub autoplay: bool,
    pub looping: bool,
    pub muted: bool,
    /// Plays inside its frame, never fullscreen
    pub inline: bool,
}

/// The only playback mode artwork ever uses.
pub const ARTWORK_PLAYBACK: VideoPlayback = VideoPlayback {
    autoplay: true,
    looping: true,
    muted: true,
    inline: true,
};

/// Where an artwork surface is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkSlot {
    Main,
    Thumbnail,
}

/// A video surface bound to a song's artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtworkSurface {
    pub slot: ArtworkSlot,
    pub asset: VideoAsset,
    pub playback: VideoPlayback,
}

impl ArtworkSurface {
    pub fn for_song(song: &Song, slot: ArtworkSlot) -> Self {
        Self {
            slot,
            asset: song.artwork,
            playback: ARTWORK_PLAYBACK,
        }
    }

    /// File name of the asset, shown as the stand-in caption.
    pub fn caption(&self) -> &'static str {
        let path = self.asset.path();
        path.rsplit(['/', '\\']).next().unwrap_or(path)
    }

    /// One glyph per active playback flag: autoplay, loop, muted.
    ///
    /// Inline has no badge; every surface already plays inside its frame.
    pub fn badges(&self) -> Vec<char> {
        [
            (self.playback.autoplay, icons::PLAY),
            (self.playback.looping, icons::REPEAT),
            (self.playback.muted, icons::MUTED),
        ]
        .into_iter()
        .filter_map(|(on, glyph)| on.then_some(glyph))
        .collect()
    }

    fn size(&self, breakpoint: Breakpoint) -> (f32, f32) {
        match self.slot {
            ArtworkSlot::Main => breakpoint.artwork_size(),
            ArtworkSlot::Thumbnail => (layout::THUMBNAIL_SIZE, layout::THUMBNAIL_SIZE),
        }
    }

    /// Render the surface. The main slot gets a bottom scrim with the
    /// caption and badges; thumbnails only carry the badges.
    pub fn view(self, breakpoint: Breakpoint) -> Element<'static, Message> {
        let (width, height) = self.size(breakpoint);
        let style: fn(&Theme) -> container::Style = match self.slot {
            ArtworkSlot::Main => theme::artwork_frame,
            ArtworkSlot::Thumbnail => theme::thumbnail_frame,
        };
        let frame = container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .style(style);

        let badge_size = match self.slot {
            ArtworkSlot::Main => typography::SIZE_SMALL,
            ArtworkSlot::Thumbnail => THUMBNAIL_BADGE_SIZE,
        };
        let badges = row(
            self.badges()
                .into_iter()
                .map(|glyph| badge(glyph, badge_size)),
        )
        .spacing(spacing::XS);

        match self.slot {
            ArtworkSlot::Main => {
                let overlay = column![
                    Space::with_height(Length::Fill),
                    text(self.caption())
                        .size(typography::SIZE_SMALL)
                        .color(color::FOREGROUND),
                    badges,
                ]
                .spacing(spacing::XS)
                .padding(spacing::LG);

                stack![
                    frame,
                    container(overlay)
                        .width(Length::Fixed(width))
                        .height(Length::Fixed(height))
                        .style(theme::artwork_scrim),
                ]
                .into()
            }
            ArtworkSlot::Thumbnail => stack![
                frame,
                container(badges)
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(height))
                    .align_x(Alignment::Center)
                    .align_y(Alignment::End)
                    .padding(spacing::XS),
            ]
            .into(),
        }
    }
}

fn badge(glyph: char, size: u16) -> Element<'static, Message> {
    icon_sized(glyph, size)
        .color(color::with_alpha(color::FOREGROUND, 0.8))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CATALOG, TALL_ANIMATED_ARTWORK};

    #[test]
    fn every_surface_autoplays_loops_muted_inline() {
        for song in CATALOG {
            for slot in [ArtworkSlot::Main, ArtworkSlot::Thumbnail] {
                let surface = ArtworkSurface::for_song(song, slot);
                assert_eq!(surface.playback, ARTWORK_PLAYBACK);
                assert!(surface.playback.inline);
                assert_eq!(
                    surface.badges(),
                    vec![icons::PLAY, icons::REPEAT, icons::MUTED]
                );
            }
        }
    }

    #[test]
    fn thumbnails_share_one_asset() {
        for song in CATALOG {
            let surface = ArtworkSurface::for_song(song, ArtworkSlot::Thumbnail);
            assert_eq!(surface.asset, TALL_ANIMATED_ARTWORK);
            assert_eq!(surface.caption(), "tall_animated_artwork.mp4");
        }
    }

    #[test]
    fn rendering_follows_asset_and_flags() {
        let mut surface = ArtworkSurface::for_song(&CATALOG[0], ArtworkSlot::Main);
        surface.asset = VideoAsset::new("media\\loops\\other.webm");
        surface.playback = VideoPlayback {
            autoplay: false,
            looping: true,
            muted: false,
            inline: true,
        };

        assert_eq!(surface.caption(), "other.webm");
        assert_eq!(surface.badges(), vec![icons::REPEAT]);
        let _main = surface.view(Breakpoint::Compact);

        surface.slot = ArtworkSlot::Thumbnail;
        surface.playback.looping = false;
        assert!(surface.badges().is_empty());
        let _thumb = surface.view(Breakpoint::Wide);
    }

    #[test]
    fn caption_without_directory() {
        let mut surface = ArtworkSurface::for_song(&CATALOG[0], ArtworkSlot::Main);
        surface.asset = VideoAsset::new("clip.mp4");
        assert_eq!(surface.caption(), "clip.mp4");
    }

    #[test]
    fn main_slot_grows_on_wide_windows() {
        let main = ArtworkSurface::for_song(&CATALOG[0], ArtworkSlot::Main);
        let thumb = ArtworkSurface::for_song(&CATALOG[0], ArtworkSlot::Thumbnail);
        assert_eq!(
            main.size(Breakpoint::Compact),
            (layout::ARTWORK_WIDTH, layout::ARTWORK_HEIGHT)
        );
        assert_eq!(
            main.size(Breakpoint::Wide),
            (layout::ARTWORK_WIDTH_WIDE, layout::ARTWORK_HEIGHT_WIDE)
        );
        assert_eq!(thumb.size(Breakpoint::Compact), thumb.size(Breakpoint::Wide));
    }
}
