//! Current song details: artwork, title block and action buttons.

use iced::font::Weight;
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Font, Length, Theme};

use crate::player::{PlayerState, TransportControl};
use crate::ui::messages::Message;
use crate::ui::theme::layout::{self, Breakpoint};
use crate::ui::theme::{self, color, spacing, typography};

use super::artwork::{ArtworkSlot, ArtworkSurface};
use super::helpers::control_button;

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

const TITLE_FONT: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Large artwork for the current song.
pub fn artwork_section(state: &PlayerState, breakpoint: Breakpoint) -> Element<'static, Message> {
    let surface = ArtworkSurface::for_song(state.current_song(), ArtworkSlot::Main);
    container(surface.view(breakpoint))
        .center_x(Length::Fill)
        .into()
}

/// Title, artist, album and the like/more buttons.
pub fn song_info(state: &PlayerState, breakpoint: Breakpoint) -> Element<'static, Message> {
    let song = state.current_song();

    let details = column![
        text(song.title)
            .size(breakpoint.hero_text_size())
            .font(TITLE_FONT)
            .color(color::mix(color::PRIMARY, color::ACCENT, 0.35)),
        text(song.artist)
            .size(typography::SIZE_LARGE)
            .color(color::MUTED),
        text(song.album)
            .size(typography::SIZE_BODY)
            .color(color::MUTED),
    ]
    .spacing(spacing::SM)
    .align_x(Alignment::Center);

    // "Default" (filled) variant when liked, outline otherwise
    let like_style: ButtonStyle = if state.is_liked() {
        theme::button_filled
    } else {
        theme::button_outline
    };

    let actions = row(TransportControl::ACTIONS.into_iter().map(|control| {
        let style: ButtonStyle = match control {
            TransportControl::Like => like_style,
            _ => theme::button_outline,
        };
        control_button(
            control,
            state,
            layout::ACTION_BUTTON_SIZE,
            typography::ICON_SMALL,
            style,
        )
    }))
    .spacing(spacing::LG)
    .align_y(Alignment::Center);

    column![details, actions]
        .spacing(spacing::LG)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
}
