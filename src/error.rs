//! Error types for mediatag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mediatag
///
/// Tag validation never produces one of these; rejected tags are reported
/// through [`crate::domain::ProcessOutput`] instead.
#[derive(Debug, Error)]
pub enum MediaTagError {
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Already initialized: {0}")]
    AlreadyInitialized(PathBuf),

    #[error("{0} tag(s) rejected")]
    Rejected(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MediaTagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MediaTagError::ConfigNotFound(_) => 2,
            MediaTagError::AlreadyInitialized(_) => 3,
            MediaTagError::Rejected(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MediaTagError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'mediatag init' to write a default mediatag.toml\n\
                    • Pass --config with the path to an existing file\n\
                    • Omit --config and pass --origin/--site-root directly",
                    path.display()
                )
            }
            MediaTagError::AlreadyInitialized(path) => {
                format!(
                    "Already initialized: {}\n\n\
                    Edit the existing file or remove it before running 'mediatag init' again.",
                    path.display()
                )
            }
            MediaTagError::Rejected(count) => {
                format!(
                    "{} tag(s) rejected\n\n\
                    Rejected tags are left verbatim in the rendered text.\n\
                    • {{mp3}} needs a .mp3 path relative to the site root that exists\n\
                    • {{youtube}} needs an 11-character video ID (A-Z, a-z, 0-9, _ or -)",
                    count
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MediaTagError
pub type Result<T> = std::result::Result<T, MediaTagError>;
