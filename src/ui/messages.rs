//! Message types for the player UI.

/// All possible messages that can be sent in the application.
///
/// Only wired controls produce messages. Shuffle, skip and repeat have no
/// variant on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// An Up Next card was pressed (carries the song id)
    SelectSong(u32),
    TogglePlay,
    ToggleLike,
    /// Progress slider dragged to a value in 0..=100
    ProgressChanged(u8),
    /// Volume slider dragged to a value in 0..=100
    VolumeChanged(u8),
}
