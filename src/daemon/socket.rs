use std::path::{Path, PathBuf};

use crate::error::{RemoteError, Result};

/// File name cmus creates inside the runtime directory
pub const SOCKET_FILE_NAME: &str = "cmus-socket";

/// Environment variable holding an explicit socket path
pub const SOCKET_ENV: &str = "CMUS_SOCKET";

/// Environment variable holding the runtime directory base
pub const RUNTIME_DIR_ENV: &str = "XDG_RUNTIME_DIR";

/// Pick the socket path: an explicit override wins, otherwise the runtime
/// directory joined with `cmus-socket`.
///
/// Empty values count as absent.
pub fn resolve_socket_path(
    explicit: Option<&Path>,
    runtime_dir: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(path.to_path_buf());
    }

    match runtime_dir.filter(|p| !p.as_os_str().is_empty()) {
        Some(dir) => Ok(dir.join(SOCKET_FILE_NAME)),
        None => Err(RemoteError::configuration(format!(
            "no socket given and {} is not set",
            RUNTIME_DIR_ENV
        ))),
    }
}

/// Resolve using the process environment for the runtime directory
pub fn resolve_from_env(explicit: Option<&Path>) -> Result<PathBuf> {
    let runtime_dir = std::env::var_os(RUNTIME_DIR_ENV).map(PathBuf::from);
    resolve_socket_path(explicit, runtime_dir.as_deref())
}
