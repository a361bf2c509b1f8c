//! The "Up Next" list.
//!
//! Always lists `CATALOG[1..]`. The list is not filtered by the current
//! song, so a selected song stays visible here.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Font, Length, font};

use crate::model::Song;
use crate::player::PlayerState;
use crate::ui::messages::Message;
use crate::ui::theme::layout::Breakpoint;
use crate::ui::theme::{self, color, spacing, typography};

use super::artwork::{ArtworkSlot, ArtworkSurface};

/// Messages emitted by the Up Next cards, in display order.
pub fn card_messages(state: &PlayerState) -> Vec<Message> {
    state
        .up_next()
        .iter()
        .map(|song| Message::SelectSong(song.id))
        .collect()
}

/// Heading plus one card per Up Next song.
pub fn up_next_section(state: &PlayerState) -> Element<'static, Message> {
    let heading = text("Up Next").size(typography::SIZE_TITLE).font(Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    });

    let cards = column(
        state
            .up_next()
            .iter()
            .zip(card_messages(state))
            .map(|(song, on_press)| song_card(song, on_press)),
    )
    .spacing(spacing::MD)
    .width(Length::Fill);

    column![heading, cards]
        .spacing(spacing::XL)
        .width(Length::Fill)
        .into()
}

/// A clickable card: thumbnail, title/artist, duration.
fn song_card(song: &'static Song, on_press: Message) -> Element<'static, Message> {
    // Thumbnails keep one size at every breakpoint
    let thumbnail =
        ArtworkSurface::for_song(song, ArtworkSlot::Thumbnail).view(Breakpoint::Compact);

    // Title inherits the card's text color so it highlights on hover
    let labels = column![
        text(song.title).size(typography::SIZE_BODY),
        text(song.artist)
            .size(typography::SIZE_SMALL)
            .color(color::MUTED),
    ]
    .spacing(spacing::XS);

    let content = row![
        thumbnail,
        labels,
        Space::with_width(Length::Fill),
        text(song.duration)
            .size(typography::SIZE_SMALL)
            .color(color::MUTED),
    ]
    .spacing(spacing::LG)
    .align_y(Alignment::Center);

    button(container(content).width(Length::Fill))
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(theme::button_card)
        .on_press(on_press)
        .into()
}
