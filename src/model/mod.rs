//! Core data models for the player.
//!
//! Defines [`Song`], the shared artwork [`VideoAsset`], and the static
//! demo [`CATALOG`]. Everything here is immutable and lives for the whole
//! program; nothing is loaded or persisted.

use serde::Serialize;

/// Playable video asset used as animated artwork.
///
/// Treated as an opaque handle: the view hands it to a video surface and
/// never inspects the file itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VideoAsset {
    path: &'static str,
}

impl VideoAsset {
    pub const fn new(path: &'static str) -> Self {
        Self { path }
    }

    /// Asset path, relative to the application root.
    pub fn path(&self) -> &'static str {
        self.path
    }
}

/// The one artwork asset every demo song points at.
pub const TALL_ANIMATED_ARTWORK: VideoAsset = VideoAsset::new("assets/tall_animated_artwork.mp4");

/// A song in the demo catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Song {
    /// Stable reference key, unique and positive
    pub id: u32,
    pub title: &'static str,
    pub artist: &'static str,
    pub album: &'static str,
    /// Display string in `M:SS` form, not derived from any media
    pub duration: &'static str,
    pub artwork: VideoAsset,
}

/// The fixed demo catalog. Index 0 is the song shown on start-up.
pub const CATALOG: &[Song] = &[
    Song {
        id: 1,
        title: "Issues",
        artist: "Julia Michaels",
        album: "Nervous System",
        duration: "2:58",
        artwork: TALL_ANIMATED_ARTWORK,
    },
    Song {
        id: 2,
        title: "Heaven",
        artist: "Julia Michaels",
        album: "Inner Monologue Part 1",
        duration: "3:22",
        artwork: TALL_ANIMATED_ARTWORK,
    },
    Song {
        id: 3,
        title: "Anxiety",
        artist: "Julia Michaels ft. Selena Gomez",
        album: "Inner Monologue Part 1",
        duration: "3:26",
        artwork: TALL_ANIMATED_ARTWORK,
    },
    Song {
        id: 4,
        title: "What a Time",
        artist: "Julia Michaels ft. Niall Horan",
        album: "Inner Monologue Part 1",
        duration: "3:04",
        artwork: TALL_ANIMATED_ARTWORK,
    },
    Song {
        id: 5,
        title: "Little Did I Know",
        artist: "Julia Michaels",
        album: "Nervous System",
        duration: "3:15",
        artwork: TALL_ANIMATED_ARTWORK,
    },
    Song {
        id: 6,
        title: "All Your Exes",
        artist: "Julia Michaels",
        album: "Not in Chronological Order",
        duration: "2:45",
        artwork: TALL_ANIMATED_ARTWORK,
    },
];
