//! Client side of the cmus remote protocol.
//!
//! Commands are single lines answered by one ack byte; queries are answered
//! by a blank-line-terminated block of `key value` lines.

pub mod client;
pub mod command;
pub mod lines;
pub mod socket;
pub mod status;

pub use client::{DaemonClient, DEFAULT_TIMEOUT};
pub use command::PlayerCommand;
pub use lines::{ResponseBlock, ResponseLine};
pub use socket::{resolve_from_env, resolve_socket_path};
pub use status::Status;
