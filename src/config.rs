use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::ui::{HitGeometry, DEFAULT_BG, DEFAULT_FG};

const APP_DIR: &str = "cmote";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Explicit daemon socket; the runtime directory is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket: Option<PathBuf>,
    /// Read deadline for a single request/response exchange
    pub timeout_ms: u64,
    /// Delay between status polls
    pub poll_interval_ms: u64,
    /// Extra attempts after a failed status poll before giving up
    pub poll_retries: u32,
    /// tracing filter directive, overridden by CMOTE_LOG
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    pub colors: ColorConfig,
    pub layout: HitGeometry,

    // This field is not serialized, just used at runtime
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub fg: String,
    pub bg: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            fg: DEFAULT_FG.to_string(),
            bg: DEFAULT_BG.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            socket: None,
            timeout_ms: 2000,
            poll_interval_ms: 30,
            poll_retries: 0,
            log_filter: None,
            colors: ColorConfig::default(),
            layout: HitGeometry::default(),
            config_path: None,
        }
    }
}

impl Config {
    /// `$XDG_CONFIG_HOME/cmote/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {:?}", path))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {:?}", path))?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Load an explicit config file (which must exist), or the default one
    /// if present, or built-in defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.timeout_ms == 0 {
            anyhow::bail!("timeout_ms must be greater than zero");
        }
        if self.poll_interval_ms == 0 {
            anyhow::bail!("poll_interval_ms must be greater than zero");
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
