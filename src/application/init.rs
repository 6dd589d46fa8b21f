//! Initialize site configuration use case

use crate::error::Result;
use crate::infrastructure::{Config, CONFIG_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct InitService;

impl InitService {
    /// Write a default `mediatag.toml` into `dir`
    ///
    /// Returns the path of the written file.
    pub fn execute(dir: &Path, origin: Option<&str>) -> Result<PathBuf> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let mut config = Config::default();
        if let Some(origin) = origin {
            config.origin = origin.to_string();
        }
        config.validate()?;

        let path = dir.join(CONFIG_FILE);
        config.save_new(&path)?;
        info!(path = %path.display(), "wrote default config");

        println!("Initialized mediatag config at {}", path.display());
        println!("Origin: {}", config.origin);

        Ok(path)
    }
}
