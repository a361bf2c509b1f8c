//! Progress bar, transport row and volume control.

use iced::widget::{Space, button, column, row, slider, text};
use iced::{Alignment, Element, Length, Theme};

use crate::player::{PlayerState, SliderValue, TransportControl};
use crate::ui::icons::{self, icon_sized};
use crate::ui::messages::Message;
use crate::ui::theme::{self, color, layout, spacing, typography};

use super::helpers::control_button;

/// Elapsed-time label under the progress bar. Fixed; there is no playback
/// clock to derive it from.
pub const ELAPSED_LABEL: &str = "0:54";

/// Progress slider with elapsed and total labels.
pub fn progress_section(state: &PlayerState) -> Element<'static, Message> {
    let bar = slider(
        SliderValue::MIN..=SliderValue::MAX,
        state.progress().get(),
        Message::ProgressChanged,
    )
    .step(1u8)
    .width(Length::Fill)
    .style(theme::slider_style);

    let labels = row![
        text(ELAPSED_LABEL)
            .size(typography::SIZE_SMALL)
            .color(color::MUTED),
        Space::with_width(Length::Fill),
        text(state.current_song().duration)
            .size(typography::SIZE_SMALL)
            .color(color::MUTED),
    ];

    column![bar, labels].spacing(spacing::LG).into()
}

/// Shuffle, previous, play/pause, next, repeat.
pub fn transport_row(state: &PlayerState) -> Element<'static, Message> {
    row(TransportControl::TRANSPORT.into_iter().map(|control| {
        let (diameter, glyph, style): (f32, u16, fn(&Theme, button::Status) -> button::Style) =
            match control {
                TransportControl::PlayPause => (
                    layout::PLAY_BUTTON_SIZE,
                    typography::ICON_LARGE,
                    theme::button_play,
                ),
                TransportControl::SkipBack | TransportControl::SkipForward => (
                    layout::ACTION_BUTTON_SIZE + 8.0,
                    typography::ICON_MEDIUM,
                    theme::button_ghost,
                ),
                _ => (
                    layout::ACTION_BUTTON_SIZE,
                    typography::ICON_SMALL,
                    theme::button_ghost,
                ),
            };
        control_button(control, state, diameter, glyph, style)
    }))
    .spacing(spacing::XL)
    .align_y(Alignment::Center)
    .into()
}

/// Speaker glyph followed by the volume slider.
pub fn volume_row(state: &PlayerState) -> Element<'static, Message> {
    row![
        icon_sized(icons::VOLUME, typography::ICON_SMALL).color(color::MUTED),
        slider(
            SliderValue::MIN..=SliderValue::MAX,
            state.volume().get(),
            Message::VolumeChanged,
        )
        .step(1u8)
        .width(Length::Fill)
        .style(theme::slider_style),
    ]
    .spacing(spacing::LG)
    .align_y(Alignment::Center)
    .into()
}
