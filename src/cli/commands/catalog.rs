//! Catalog listing command.

use std::io::Write;

use super::OutputFormat;
use crate::error::{Result, ResultExt};
use crate::model::{CATALOG, Song};
use crate::player::PlayerState;

/// Print the demo catalog, split the way the player shows it on start-up.
pub fn cmd_catalog<W: Write>(out: &mut W, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, CATALOG)?;
            writeln!(out).with_context("writing catalog")?;
        }
        OutputFormat::Text => {
            let state = PlayerState::default();
            writeln!(out, "Now Playing").with_context("writing catalog")?;
            write_song(out, state.current_song())?;
            writeln!(out).with_context("writing catalog")?;
            writeln!(out, "Up Next").with_context("writing catalog")?;
            for song in state.up_next() {
                write_song(out, song)?;
            }
            writeln!(out).with_context("writing catalog")?;
            writeln!(out, "Artwork: {}", state.current_song().artwork.path())
                .with_context("writing catalog")?;
        }
    }
    Ok(())
}

fn write_song<W: Write>(out: &mut W, song: &Song) -> Result<()> {
    writeln!(
        out,
        "  {:>2}  {:<20} {:<32} {:<28} {:>5}",
        song.id, song.title, song.artist, song.album, song.duration
    )
    .with_context("writing catalog")
}
