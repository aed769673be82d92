//! Configuration loading for autowin.
//!
//! Configuration is merged from two TOML files, later sources overriding
//! earlier ones; a missing file is not an error:
//!
//! 1. User config: `~/.autowin/config.toml`
//! 2. Project config: `./.autowin/config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! [wait]
//! default_timeout_secs = 10
//!
//! [selection]
//! use_clipboard = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Resolved configuration, all defaults applied.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AutowinConfig {
    #[serde(default)]
    pub wait: WaitConfig,

    #[serde(default)]
    pub selection: SelectionConfig,
}

/// Defaults for the blocking wait operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaitConfig {
    /// Default timeout in seconds for CLI wait commands. 0 waits
    /// indefinitely.
    #[serde(default = "default_wait_timeout")]
    pub default_timeout_secs: u32,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            default_timeout_secs: default_wait_timeout(),
        }
    }
}

fn default_wait_timeout() -> u32 {
    30
}

/// Which X selection the clipboard commands target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionConfig {
    /// Use the clipboard selection rather than the primary selection.
    #[serde(default = "default_use_clipboard")]
    pub use_clipboard: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            use_clipboard: default_use_clipboard(),
        }
    }
}

fn default_use_clipboard() -> bool {
    true
}

/// File-level view: absent sections leave the earlier layer untouched.
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    wait: Option<WaitConfig>,
    selection: Option<SelectionConfig>,
}

/// Load configuration from the hierarchy of config files.
///
/// Missing config files are not errors; parse failures are.
pub fn load_hierarchy() -> Result<AutowinConfig, ConfigError> {
    let mut config = AutowinConfig::default();

    if let Some(home) = dirs::home_dir() {
        if let Some(partial) = load_config_file(&home.join(".autowin").join("config.toml"))? {
            config = merge(config, partial);
        }
    }

    if let Some(partial) = load_config_file(&project_config_path())? {
        config = merge(config, partial);
    }

    Ok(config)
}

fn project_config_path() -> PathBuf {
    PathBuf::from(".autowin").join("config.toml")
}

/// Load one config file; `Ok(None)` when it does not exist.
fn load_config_file(path: &Path) -> Result<Option<PartialConfig>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::IoError {
                path: path.display().to_string(),
                source: e,
            });
        }
    };

    let partial = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(Some(partial))
}

fn merge(base: AutowinConfig, overlay: PartialConfig) -> AutowinConfig {
    AutowinConfig {
        wait: overlay.wait.unwrap_or(base.wait),
        selection: overlay.selection.unwrap_or(base.selection),
    }
}
