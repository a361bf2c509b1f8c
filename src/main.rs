//! Now Playing - a music player display surface.
//!
//! Shows a fixed demo catalog with play/pause and like toggles, progress and
//! volume sliders, and an "Up Next" list. There is no audio engine behind
//! it. Running without a subcommand opens the window; see `--help` for the
//! small helper commands.

// Hide console window on Windows when running as GUI
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod player;
pub mod ui;

use clap::Parser;
use iced::{Size, window};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use ui::NowPlaying;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // If running CLI commands on Windows, attach to console for output
    #[cfg(target_os = "windows")]
    if args.command.is_some() {
        attach_console();
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("now_playing=info".parse()?))
        .init();

    // Try to run a CLI command
    if cli::run_command(&args)? {
        return Ok(());
    }

    let config = config::load(args.config.as_deref());
    let window_settings = window::Settings {
        size: Size::new(config.window.width, config.window.height),
        min_size: Some(Size::new(config.window.min_width, config.window.min_height)),
        resizable: config.window.resizable,
        ..Default::default()
    };

    // No command specified, launch the GUI
    iced::application(NowPlaying::title, NowPlaying::update, NowPlaying::view)
        .theme(NowPlaying::theme)
        .scale_factor(NowPlaying::scale_factor)
        .window(window_settings)
        .run_with(move || NowPlaying::new(&config))
        .map_err(|e| error::Error::gui(e.to_string()).into())
}

/// Attach to parent console on Windows for CLI output.
/// This is needed because windows_subsystem = "windows" detaches from console.
#[cfg(target_os = "windows")]
fn attach_console() {
    use windows_sys::Win32::System::Console::{ATTACH_PARENT_PROCESS, AttachConsole};
    unsafe {
        // If that fails, we just won't have console output (acceptable for GUI launch)
        let _ = AttachConsole(ATTACH_PARENT_PROCESS);
    }
}
