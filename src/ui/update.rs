//! Update handlers for application messages.
//!
//! # Control Flow
//!
//! Every message flows through [`handle_message`], which applies exactly one
//! `PlayerState` setter. Nothing here spawns work: all changes are
//! synchronous and every handler returns `Task::none()`.

use iced::Task;

use crate::player::{PlayerState, SliderValue};

use super::debug::{DebugSummary, StateTransition};
use super::messages::Message;

/// Apply a message to the player state.
pub fn handle_message(state: &mut PlayerState, msg: Message) -> Task<Message> {
    crate::ui_trace_msg!(msg);

    match msg {
        Message::SelectSong(id) => select_song(state, id),
        Message::TogglePlay => {
            let transition = StateTransition::flag(
                "player",
                "play toggled",
                state.is_playing(),
                ("Playing", "Paused"),
            );
            state.toggle_play();
            tracing::debug!(target: "ui::state", "{}", transition);
        }
        Message::ToggleLike => {
            let transition = StateTransition::flag(
                "player",
                "like toggled",
                state.is_liked(),
                ("Liked", "Not liked"),
            );
            state.toggle_like();
            tracing::debug!(target: "ui::state", "{}", transition);
        }
        Message::ProgressChanged(value) => match SliderValue::new(value) {
            Some(v) => state.set_progress(v),
            None => tracing::warn!("Ignoring out-of-range progress value {}", value),
        },
        Message::VolumeChanged(value) => match SliderValue::new(value) {
            Some(v) => state.set_volume(v),
            None => tracing::warn!("Ignoring out-of-range volume value {}", value),
        },
    }

    crate::ui_trace_state!("player", "after update", state);
    Task::none()
}

/// Select a song from the Up Next list by id.
fn select_song(state: &mut PlayerState, id: u32) {
    let Some(song) = state.up_next().iter().find(|s| s.id == id) else {
        tracing::warn!("Song {} is not in Up Next, ignoring selection", id);
        return;
    };
    tracing::debug!(
        target: "ui::state",
        "[UI:player] selected {} - {}",
        song.artist,
        song.title
    );
    state.select_song(song);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CATALOG;

    fn apply(state: &mut PlayerState, msgs: &[Message]) {
        for msg in msgs {
            let _ = handle_message(state, *msg);
        }
    }

    #[test]
    fn select_song_by_id() {
        let mut state = PlayerState::default();
        apply(&mut state, &[Message::SelectSong(4)]);
        assert_eq!(state.current_song().title, "What a Time");
    }

    #[test]
    fn selecting_first_catalog_song_is_ignored() {
        // Song 1 is never listed under Up Next, so no card can select it
        let mut state = PlayerState::default();
        apply(&mut state, &[Message::SelectSong(3), Message::SelectSong(1)]);
        assert_eq!(state.current_song(), &CATALOG[2]);
    }

    #[test]
    fn unknown_song_is_ignored() {
        let mut state = PlayerState::default();
        apply(&mut state, &[Message::SelectSong(99)]);
        assert_eq!(state, PlayerState::default());
    }

    #[test]
    fn toggles_flip_flags() {
        let mut state = PlayerState::default();
        apply(&mut state, &[Message::TogglePlay, Message::ToggleLike]);
        assert!(state.is_playing());
        assert!(state.is_liked());

        apply(&mut state, &[Message::TogglePlay]);
        assert!(!state.is_playing());
        assert!(state.is_liked());
    }

    #[test]
    fn sliders_store_values() {
        let mut state = PlayerState::default();
        apply(
            &mut state,
            &[Message::ProgressChanged(0), Message::VolumeChanged(100)],
        );
        assert_eq!(state.progress().as_array(), [0]);
        assert_eq!(state.volume().as_array(), [100]);
        assert_eq!(state.current_song(), &CATALOG[0]);
    }

    #[test]
    fn out_of_range_slider_values_are_dropped() {
        let mut state = PlayerState::default();
        apply(
            &mut state,
            &[Message::ProgressChanged(101), Message::VolumeChanged(255)],
        );
        assert_eq!(state.progress().as_array(), [23]);
        assert_eq!(state.volume().as_array(), [75]);
    }

    #[test]
    fn selection_keeps_other_fields() {
        let mut state = PlayerState::default();
        apply(
            &mut state,
            &[
                Message::ToggleLike,
                Message::TogglePlay,
                Message::ProgressChanged(50),
                Message::VolumeChanged(10),
                Message::SelectSong(6),
            ],
        );
        assert_eq!(state.current_song().title, "All Your Exes");
        assert!(state.is_liked());
        assert!(state.is_playing());
        assert_eq!(state.progress().as_array(), [50]);
        assert_eq!(state.volume().as_array(), [10]);
    }
}
