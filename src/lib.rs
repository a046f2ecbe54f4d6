// Library exports for cmote
// This allows the test suite to import modules

pub mod cli;
pub mod config;
pub mod daemon;
pub mod error;
pub mod event_handler;
pub mod logging;
pub mod ui;

pub use daemon::{DaemonClient, PlayerCommand, Status};
pub use error::RemoteError;
pub use event_handler::{InteractionState, InteractionStateMachine};
