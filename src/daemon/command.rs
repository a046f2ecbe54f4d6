use std::fmt;

/// Commands the daemon acknowledges with a single byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    VolumeUp,
    VolumeDown,
    /// Absolute seek in seconds; not clamped on the client side
    Seek(i64),
    Next,
    Previous,
    TogglePausePlay,
}

impl PlayerCommand {
    /// The full request line, newline included
    pub fn wire_line(&self) -> String {
        format!("{}\n", self)
    }

    /// Short name used in logs and CLI output
    pub fn name(&self) -> &'static str {
        match self {
            PlayerCommand::VolumeUp => "vol-up",
            PlayerCommand::VolumeDown => "vol-down",
            PlayerCommand::Seek(_) => "seek",
            PlayerCommand::Next => "next",
            PlayerCommand::Previous => "prev",
            PlayerCommand::TogglePausePlay => "toggle",
        }
    }
}

impl fmt::Display for PlayerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerCommand::VolumeUp => f.write_str("vol +1%"),
            PlayerCommand::VolumeDown => f.write_str("vol -1%"),
            PlayerCommand::Seek(second) => write!(f, "seek {}", second),
            PlayerCommand::Next => f.write_str("player-next"),
            PlayerCommand::Previous => f.write_str("player-prev"),
            PlayerCommand::TogglePausePlay => f.write_str("player-pause"),
        }
    }
}
