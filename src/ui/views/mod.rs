//! View rendering functions for the UI components.
//!
//! This module is organized into submodules by concern:
//! - `artwork`: Video artwork surfaces (main frame and thumbnails)
//! - `now_playing`: Title block and like/more actions
//! - `controls`: Progress, transport and volume
//! - `up_next`: The Up Next card list

mod artwork;
mod controls;
mod helpers;
mod now_playing;
mod up_next;

use iced::widget::{Space, column, container, responsive, scrollable};
use iced::{Alignment, Element, Length};

use crate::player::PlayerState;
use crate::ui::messages::Message;
use crate::ui::theme::layout::{self, Breakpoint};
use crate::ui::theme::{self, spacing};

/// The whole window. Picks a [`Breakpoint`] from the viewport width on
/// every layout pass.
pub fn player_view(state: &PlayerState) -> Element<'static, Message> {
    let state = state.clone();
    responsive(move |size| player_page(&state, Breakpoint::from_width(size.width))).into()
}

/// The player page: player column on top, Up Next below a divider.
pub fn player_page(state: &PlayerState, breakpoint: Breakpoint) -> Element<'static, Message> {
    let controls = column![
        now_playing::song_info(state, breakpoint),
        controls::progress_section(state),
        controls::transport_row(state),
        controls::volume_row(state),
    ]
    .spacing(spacing::XXL)
    .align_x(Alignment::Center)
    .max_width(layout::CONTROLS_MAX_WIDTH)
    .width(Length::Fill);

    let player = column![now_playing::artwork_section(state, breakpoint), controls]
        .spacing(spacing::XXL)
        .align_x(Alignment::Center)
        .padding(spacing::XXL)
        .width(Length::Fill);

    let divider = container(Space::new(Length::Fill, Length::Fixed(1.0)))
        .width(Length::Fill)
        .style(theme::divider_style);

    let page = column![
        player,
        divider,
        container(up_next::up_next_section(state)).padding(spacing::XXL),
    ]
    .width(Length::Fill);

    container(scrollable(page).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::page_style)
        .into()
}
