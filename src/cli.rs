use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::daemon::{self, DaemonClient, PlayerCommand};
use crate::error::RemoteError;

/// cmote - terminal remote control for cmus
#[derive(Parser, Debug)]
#[command(name = "cmote")]
#[command(version)]
#[command(about = "Terminal remote control for cmus")]
#[command(long_about = "cmote shows what cmus is playing and lets you control it with the
keyboard and mouse: click or drag the seek bar, click the previous / play-pause / next
buttons, scroll to skip five seconds.

Keys: left/right seek 1s, home/end jump to start/end, space toggles pause,
n/p next/previous, +/- volume, q or Esc quits.

The cmus socket is taken from --socket, $CMUS_SOCKET, the config file, or
$XDG_RUNTIME_DIR/cmus-socket, in that order.")]
pub struct Cli {
    /// Path to config file (defaults to $XDG_CONFIG_HOME/cmote/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the cmus socket
    #[arg(long, env = "CMUS_SOCKET")]
    pub socket: Option<PathBuf>,

    /// Foreground color as #RRGGBB (overrides config file setting)
    #[arg(long)]
    pub fg: Option<String>,

    /// Background color as #RRGGBB (overrides config file setting)
    #[arg(long)]
    pub bg: Option<String>,

    /// Write a default config file and exit
    #[arg(long)]
    pub init: bool,

    /// Send a single command instead of starting the TUI
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// One-shot commands sent to cmus without starting the TUI
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the current playback status as JSON
    Status,
    /// Skip to the next track
    Next,
    /// Go back to the previous track
    Prev,
    /// Toggle between playing and paused
    Toggle,
    /// Seek to an absolute position in seconds
    Seek {
        /// Target position in seconds
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },
    /// Raise the volume by 1%
    VolUp,
    /// Lower the volume by 1%
    VolDown,
}

impl Commands {
    /// The protocol command this subcommand sends, None for queries
    pub fn player_command(&self) -> Option<PlayerCommand> {
        match self {
            Commands::Status => None,
            Commands::Next => Some(PlayerCommand::Next),
            Commands::Prev => Some(PlayerCommand::Previous),
            Commands::Toggle => Some(PlayerCommand::TogglePausePlay),
            Commands::Seek { seconds } => Some(PlayerCommand::Seek(*seconds)),
            Commands::VolUp => Some(PlayerCommand::VolumeUp),
            Commands::VolDown => Some(PlayerCommand::VolumeDown),
        }
    }
}

/// Socket precedence: --socket / $CMUS_SOCKET, then the config file, then the runtime dir
pub fn socket_path(cli: &Cli, config: &Config) -> Result<PathBuf, RemoteError> {
    let explicit = cli.socket.as_deref().or(config.socket.as_deref());
    daemon::resolve_from_env(explicit)
}

/// Write a default config file unless one already exists
pub fn init_config(config_path: &Path) -> anyhow::Result<()> {
    if config_path.exists() {
        println!("Config file {:?} already exists.", config_path);
        return Ok(());
    }

    Config::default()
        .save(config_path)
        .with_context(|| format!("Failed to write config to {:?}", config_path))?;

    println!("Created {:?}", config_path);
    println!("\nNext steps:");
    println!("  1. Edit the file to set colors, socket or layout");
    println!("  2. Run 'cmote' with cmus running");
    Ok(())
}

/// Connect, run one command and print the outcome.
///
/// Returns false when the daemon did not acknowledge the command.
pub async fn run_remote_command(
    command: &Commands,
    socket: &Path,
    timeout: Duration,
) -> anyhow::Result<bool> {
    let mut client = DaemonClient::connect(socket, timeout)
        .await
        .with_context(|| format!("Could not connect to cmus at {:?}. Is cmus running?", socket))?;

    let Some(player_command) = command.player_command() else {
        let status = client
            .status()
            .await
            .with_context(|| format!("Failed to query status from {:?}", socket))?;
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| anyhow!("Failed to serialize status: {}", e))?;
        println!("{}", json);
        return Ok(true);
    };

    let acked = client
        .send(player_command)
        .await
        .with_context(|| format!("Failed to send {} to cmus", player_command.name()))?;

    if acked {
        println!("{}: ok", player_command.name());
    } else {
        eprintln!("{}: not acknowledged", player_command.name());
    }
    Ok(acked)
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
