//! Configuration persistence.

use std::fs;
use std::path::{Path, PathBuf};

use shellexpand::full;
use thiserror::Error;

use super::types::{ConfigFile, Settings};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("failed to write config file {0}: {1}")]
    WriteError(String, #[source] std::io::Error),

    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] toml::ser::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("cannot expand '{0}' (home directory not available?)")]
    BadPath(String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from `config_path` (or the default location).
    ///
    /// A missing file is not an error: the system starts with defaults and an
    /// empty vault root, degrading to an empty index until configured.
    pub fn load(config_path: Option<&Path>) -> Result<Settings, ConfigError> {
        let path = resolve_path(config_path);
        if !path.exists() {
            return Ok(Settings::default());
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        let vault_root = if cf.vault_root.is_empty() {
            PathBuf::new()
        } else {
            expand_path(&cf.vault_root)?
        };

        Ok(Settings {
            vault_root,
            open_override: cf.open_override,
            filter_by_tags: cf.filter_by_tags,
            filter_by_body: cf.filter_by_body,
            logging: cf.logging,
        })
    }

    /// Persist settings to `config_path` (or the default location).
    ///
    /// Called by the driver whenever a settings change carries the persist
    /// effect.
    pub fn save(settings: &Settings, config_path: Option<&Path>) -> Result<(), ConfigError> {
        let path = resolve_path(config_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::WriteError(path.display().to_string(), e))?;
        }

        let cf = ConfigFile {
            version: 1,
            vault_root: settings.vault_root.to_string_lossy().into_owned(),
            open_override: settings.open_override.clone(),
            filter_by_tags: settings.filter_by_tags,
            filter_by_body: settings.filter_by_body,
            logging: settings.logging.clone(),
        };

        let s = toml::to_string_pretty(&cf).map_err(ConfigError::SerializeError)?;
        fs::write(&path, s)
            .map_err(|e| ConfigError::WriteError(path.display().to_string(), e))
    }
}

fn resolve_path(config_path: Option<&Path>) -> PathBuf {
    match config_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path(),
    }
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vaultfind/config.toml")
}

fn expand_path(raw: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(raw).map_err(|_| ConfigError::BadPath(raw.to_string()))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nope/config.toml");
        let settings = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn load_full_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
version = 1
vault_root = "/tmp/vault"
open_override = "gio open"
filter_by_tags = false
filter_by_body = true

[logging]
level = "debug"
"#,
        )
        .unwrap();

        let settings = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(settings.vault_root, PathBuf::from("/tmp/vault"));
        assert_eq!(settings.open_override, "gio open");
        assert!(!settings.filter_by_tags);
        assert!(settings.filter_by_body);
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    fn defaults_fill_missing_keys() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "version = 1\nvault_root = \"/tmp/vault\"\n").unwrap();

        let settings = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(settings.open_override, "xdg-open");
        assert!(settings.filter_by_tags);
        assert!(!settings.filter_by_body);
    }

    #[test]
    fn bad_version_rejected() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "version = 7\n").unwrap();

        let err = ConfigLoader::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::BadVersion(7)));
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("sub/config.toml");

        let settings = Settings {
            vault_root: PathBuf::from("/tmp/vault"),
            open_override: "gio open".to_string(),
            filter_by_tags: false,
            filter_by_body: true,
            ..Default::default()
        };

        ConfigLoader::save(&settings, Some(&path)).unwrap();
        let loaded = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(loaded, settings);
    }
}
