//! Command-line interface for Now Playing.
//!
//! This module provides small helper commands that run without launching
//! the GUI.

mod commands;

pub use commands::{Cli, run_command};
