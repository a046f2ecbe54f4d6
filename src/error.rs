use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while talking to the cmus daemon
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The socket path could not be determined
    #[error("cannot determine the cmus socket path: {0}")]
    Configuration(String),

    /// Dialing the socket failed
    #[error("failed to connect to cmus at {path:?}: {source}")]
    Connection {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading or writing the established connection failed (including deadline expiry)
    #[error("cmus transport error: {0}")]
    Transport(#[source] io::Error),

    /// A numeric field in a status block was malformed
    #[error("invalid {key} value {value:?} in status block: {source}")]
    Parse {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl RemoteError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn timed_out() -> Self {
        Self::Transport(io::Error::new(
            io::ErrorKind::TimedOut,
            "cmus did not answer before the read deadline",
        ))
    }

    pub fn not_connected() -> Self {
        Self::Transport(io::Error::new(
            io::ErrorKind::NotConnected,
            "connection to cmus failed earlier and is no longer usable",
        ))
    }

    /// io error kind for transport failures, used by callers that branch on timeouts
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Transport(e) | Self::Connection { source: e, .. } => Some(e.kind()),
            _ => None,
        }
    }
}

impl From<io::Error> for RemoteError {
    fn from(e: io::Error) -> Self {
        Self::Transport(e)
    }
}

pub type Result<T> = std::result::Result<T, RemoteError>;
