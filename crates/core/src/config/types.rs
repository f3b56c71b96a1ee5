//! Configuration types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::filter::FilterToggles;

/// On-disk configuration file shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    /// Root of the vault tree. Empty means unconfigured.
    #[serde(default)]
    pub vault_root: String,
    /// Command used to open `obsidian://` URIs.
    #[serde(default = "default_open_override")]
    pub open_override: String,
    #[serde(default = "default_filter_by_tags")]
    pub filter_by_tags: bool,
    #[serde(default)]
    pub filter_by_body: bool,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_open_override() -> String {
    "xdg-open".to_string()
}

fn default_filter_by_tags() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root of the vault tree (`~` already expanded). May be empty when the
    /// vault has not been configured yet.
    pub vault_root: PathBuf,
    /// Command used to open `obsidian://` URIs.
    pub open_override: String,
    pub filter_by_tags: bool,
    pub filter_by_body: bool,
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_root: PathBuf::new(),
            open_override: default_open_override(),
            filter_by_tags: default_filter_by_tags(),
            filter_by_body: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Filter toggles in the shape the filter builder takes.
    pub fn toggles(&self) -> FilterToggles {
        FilterToggles {
            filter_by_tags: self.filter_by_tags,
            filter_by_body: self.filter_by_body,
        }
    }

    /// Vault name used in `obsidian://` URIs: the root's final component.
    pub fn vault_name(&self) -> String {
        self.vault_root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Whitespace-split opener command, ready to take a URI argument.
    pub fn open_command(&self) -> Vec<String> {
        self.open_override.split_whitespace().map(str::to_string).collect()
    }
}

/// Side effects a settings change requires of the driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Effects {
    /// Write the new settings to disk.
    pub persist: bool,
    /// Stop the watcher and start one on the new root; the rebuild that
    /// follows repopulates the index.
    pub restart_watcher: bool,
}

/// Decide which side effects moving from `old` to `new` requires.
///
/// Pure: the caller executes the returned effects. Toggle changes persist but
/// never restart the watcher; only a root change does.
pub fn reconfigure(old: &Settings, new: &Settings) -> Effects {
    Effects {
        persist: old != new,
        restart_watcher: old.vault_root != new.vault_root,
    }
}
