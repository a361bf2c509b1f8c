//! CLI command definitions and dispatch.
//!
//! Running without a subcommand launches the GUI. The subcommands are
//! small helpers around it:
//! - `catalog`: print the demo catalog
//! - `init-config`: write a default config file

mod catalog;
mod config;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub use catalog::cmd_catalog;
pub use config::cmd_init_config;

/// Now Playing CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to the OS config directory)
    #[arg(long, global = true, env = "NOW_PLAYING_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the demo catalog
    Catalog {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Write a default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Output format for listing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Run the specified CLI command.
///
/// Returns `Ok(true)` if a command was run, `Ok(false)` if no command was specified
/// (meaning the GUI should launch).
pub fn run_command(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Some(Commands::Catalog { format }) => {
            let stdout = std::io::stdout();
            cmd_catalog(&mut stdout.lock(), *format)?;
            Ok(true)
        }
        Some(Commands::InitConfig { force }) => {
            let path = cmd_init_config(cli.config.as_deref(), *force)?;
            println!("Wrote default config to {}", path.display());
            Ok(true)
        }
        None => Ok(false),
    }
}
