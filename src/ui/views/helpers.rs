//! Helper functions shared across view components.

use iced::widget::{button, container, text, tooltip};
use iced::{Element, Length, Theme};

use crate::player::{PlayerState, TransportControl};
use crate::ui::icons::{self, icon_sized};
use crate::ui::messages::Message;
use crate::ui::theme::{self, spacing, typography};

/// Message a control sends when pressed, or `None` for inert controls.
pub fn control_message(control: TransportControl) -> Option<Message> {
    if !control.is_wired() {
        return None;
    }
    match control {
        TransportControl::Like => Some(Message::ToggleLike),
        TransportControl::PlayPause => Some(Message::TogglePlay),
        _ => None,
    }
}

/// Round icon button for a player control.
///
/// Inert controls are drawn the same way but get no press handler. Every
/// control carries a hover tooltip with its name.
pub fn control_button(
    control: TransportControl,
    state: &PlayerState,
    diameter: f32,
    glyph_size: u16,
    style: fn(&Theme, button::Status) -> button::Style,
) -> Element<'static, Message> {
    let glyph = icons::control_glyph(control, state.is_playing(), state.is_liked());
    let btn = button(container(icon_sized(glyph, glyph_size)).center(Length::Fill))
        .width(Length::Fixed(diameter))
        .height(Length::Fixed(diameter))
        .padding(0)
        .style(style);

    let btn = match control_message(control) {
        Some(msg) => btn.on_press(msg),
        None => btn,
    };

    tooltip(
        btn,
        container(text(control.label()).size(typography::SIZE_SMALL))
            .padding([spacing::XS, spacing::SM])
            .style(theme::tooltip_style),
        tooltip::Position::Bottom,
    )
    .gap(f32::from(spacing::XS))
    .into()
}
