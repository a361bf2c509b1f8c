//! Player state and slider value types.

use std::fmt;

use crate::model::{CATALOG, Song};

/// Progress shown on first mount.
pub const INITIAL_PROGRESS: u8 = 23;

/// Volume shown on first mount.
pub const INITIAL_VOLUME: u8 = 75;

/// A single-handle slider selection in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SliderValue(u8);

impl SliderValue {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    /// Wrap a value already inside the slider range.
    ///
    /// Returns `None` for anything above [`SliderValue::MAX`].
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// The selection as the one-element array the slider reports.
    pub const fn as_array(self) -> [u8; 1] {
        [self.0]
    }
}

impl fmt::Display for SliderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// View state for the now-playing screen.
///
/// Volatile: a fresh [`PlayerState::default`] is built on every mount and
/// nothing here is saved. None of the fields drive audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    current_song: &'static Song,
    is_playing: bool,
    progress: SliderValue,
    volume: SliderValue,
    is_liked: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            current_song: &CATALOG[0],
            is_playing: false,
            progress: SliderValue(INITIAL_PROGRESS),
            volume: SliderValue(INITIAL_VOLUME),
            is_liked: false,
        }
    }
}

impl PlayerState {
    pub fn current_song(&self) -> &'static Song {
        self.current_song
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn progress(&self) -> SliderValue {
        self.progress
    }

    pub fn volume(&self) -> SliderValue {
        self.volume
    }

    pub fn is_liked(&self) -> bool {
        self.is_liked
    }

    /// Songs listed under "Up Next".
    ///
    /// Always `CATALOG[1..]`, whatever the current song is. Selecting a song
    /// from this list leaves it in the list.
    pub fn up_next(&self) -> &'static [Song] {
        &CATALOG[1..]
    }

    /// Make `song` the current song. Nothing else changes.
    pub fn select_song(&mut self, song: &'static Song) {
        self.current_song = song;
    }

    /// Flip the play/pause flag. No media starts or stops.
    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Flip the like flag. Not tied to the current song.
    pub fn toggle_like(&mut self) {
        self.is_liked = !self.is_liked;
    }

    pub fn set_progress(&mut self, value: SliderValue) {
        self.progress = value;
    }

    pub fn set_volume(&mut self, value: SliderValue) {
        self.volume = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = PlayerState::default();
        assert_eq!(state.current_song(), &CATALOG[0]);
        assert!(!state.is_playing());
        assert!(!state.is_liked());
        assert_eq!(state.progress().as_array(), [23]);
        assert_eq!(state.volume().as_array(), [75]);
    }

    #[test]
    fn selecting_each_up_next_song_only_changes_current() {
        for song in PlayerState::default().up_next() {
            let mut state = PlayerState::default();
            state.toggle_like();
            state.toggle_play();
            let before = state.clone();

            state.select_song(song);

            assert_eq!(state.current_song(), song);
            assert_eq!(state.is_liked(), before.is_liked());
            assert_eq!(state.is_playing(), before.is_playing());
            assert_eq!(state.progress(), before.progress());
            assert_eq!(state.volume(), before.volume());
        }
    }

    #[test]
    fn toggle_play_twice_restores() {
        let mut state = PlayerState::default();
        state.toggle_play();
        assert!(state.is_playing());
        state.toggle_play();
        assert!(!state.is_playing());
    }

    #[test]
    fn like_survives_song_change() {
        let mut state = PlayerState::default();
        state.toggle_like();
        state.select_song(&CATALOG[2]);
        assert!(state.is_liked());
    }

    #[test]
    fn progress_change_leaves_song_and_playing_alone() {
        let mut state = PlayerState::default();
        state.set_progress(SliderValue::new(64).unwrap());
        assert_eq!(state.progress().as_array(), [64]);
        assert_eq!(state.current_song(), &CATALOG[0]);
        assert!(!state.is_playing());
    }

    // Up Next is never re-derived from the current song.
    #[test]
    fn up_next_ignores_current_song() {
        let mut state = PlayerState::default();
        for song in CATALOG.iter().skip(1).chain(CATALOG.iter().rev()) {
            state.select_song(song);
            assert_eq!(state.up_next().len(), CATALOG.len() - 1);
            assert_eq!(state.up_next(), &CATALOG[1..]);
        }
        state.select_song(&CATALOG[2]);
        assert!(state.up_next().contains(&CATALOG[2]));
    }

    #[test]
    fn slider_value_bounds() {
        assert_eq!(SliderValue::new(0).map(SliderValue::get), Some(0));
        assert_eq!(SliderValue::new(100).map(SliderValue::get), Some(100));
        assert!(SliderValue::new(101).is_none());
        assert_eq!(SliderValue::new(7).unwrap().to_string(), "[7]");
    }
}

/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Any sequence of operations a user can perform on the view
    #[derive(Debug, Clone)]
    enum Op {
        Select(usize),
        TogglePlay,
        ToggleLike,
        Progress(u8),
        Volume(u8),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..CATALOG.len() - 1).prop_map(Op::Select),
            Just(Op::TogglePlay),
            Just(Op::ToggleLike),
            (0..=100u8).prop_map(Op::Progress),
            (0..=100u8).prop_map(Op::Volume),
        ]
    }

    fn apply(state: &mut PlayerState, op: &Op) {
        match *op {
            Op::Select(i) => {
                let song = &state.up_next()[i];
                state.select_song(song);
            }
            Op::TogglePlay => state.toggle_play(),
            Op::ToggleLike => state.toggle_like(),
            Op::Progress(v) => state.set_progress(SliderValue::new(v).unwrap()),
            Op::Volume(v) => state.set_volume(SliderValue::new(v).unwrap()),
        }
    }

    proptest! {
        /// Up Next stays CATALOG[1..] after any interaction sequence
        #[test]
        fn up_next_is_stable(ops in prop::collection::vec(op(), 0..40)) {
            let mut state = PlayerState::default();
            for op in &ops {
                apply(&mut state, op);
                prop_assert_eq!(state.up_next(), &CATALOG[1..]);
            }
        }

        /// Toggling like flips exactly one field
        #[test]
        fn toggle_like_is_a_pure_flip(ops in prop::collection::vec(op(), 0..20)) {
            let mut state = PlayerState::default();
            for op in &ops {
                apply(&mut state, op);
            }
            let before = state.clone();
            state.toggle_like();

            prop_assert_eq!(state.is_liked(), !before.is_liked());
            prop_assert_eq!(state.current_song(), before.current_song());
            prop_assert_eq!(state.is_playing(), before.is_playing());
            prop_assert_eq!(state.progress(), before.progress());
            prop_assert_eq!(state.volume(), before.volume());
        }

        /// Toggling play twice is the identity
        #[test]
        fn toggle_play_pair_is_identity(ops in prop::collection::vec(op(), 0..20)) {
            let mut state = PlayerState::default();
            for op in &ops {
                apply(&mut state, op);
            }
            let before = state.clone();
            state.toggle_play();
            state.toggle_play();
            prop_assert_eq!(state, before);
        }

        /// Progress stores the dragged value verbatim
        #[test]
        fn progress_is_stored_verbatim(v in 0..=100u8) {
            let mut state = PlayerState::default();
            state.set_progress(SliderValue::new(v).unwrap());
            prop_assert_eq!(state.progress().as_array(), [v]);
            prop_assert_eq!(state.current_song(), &CATALOG[0]);
            prop_assert!(!state.is_playing());
        }
    }
}
