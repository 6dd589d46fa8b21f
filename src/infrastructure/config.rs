//! Configuration management

use crate::domain::assets::{AssetPaths, DEFAULT_PLAYER, DEFAULT_PLUGIN_PATH};
use crate::domain::TagReplacer;
use crate::error::{MediaTagError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name
pub const CONFIG_FILE: &str = "mediatag.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document root that `{mp3}` paths are resolved against
    pub site_root: PathBuf,
    /// Base URL of the site, used for the video embed origin
    pub origin: String,
    /// URL path prefix of the site (empty when served from `/`)
    pub site_base_path: String,
    pub plugin_path: String,
    pub player: String,
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site_root: PathBuf::from("."),
            origin: "http://localhost/".to_string(),
            site_base_path: String::new(),
            plugin_path: DEFAULT_PLUGIN_PATH.to_string(),
            player: DEFAULT_PLAYER.to_string(),
            enabled: true,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MediaTagError::ConfigNotFound(path.to_path_buf())
            } else {
                MediaTagError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            MediaTagError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a TOML file, refusing to overwrite an existing one
    pub fn save_new(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(MediaTagError::AlreadyInitialized(path.to_path_buf()));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.origin.trim().is_empty() {
            return Err(MediaTagError::Config("origin must not be empty".to_string()));
        }
        if self.player.trim().is_empty() {
            return Err(MediaTagError::Config("player must not be empty".to_string()));
        }
        Ok(())
    }

    /// Relative `site_root` values are resolved against `base`
    pub fn resolve_site_root(&mut self, base: &Path) {
        if self.site_root.is_relative() {
            self.site_root = base.join(&self.site_root);
        }
    }

    pub fn asset_paths(&self) -> AssetPaths {
        AssetPaths {
            plugin_path: self.plugin_path.clone(),
            site_base_path: self.site_base_path.clone(),
            player: self.player.clone(),
        }
    }

    pub fn replacer(&self) -> TagReplacer {
        TagReplacer::new(self.site_root.clone(), self.asset_paths())
    }
}
