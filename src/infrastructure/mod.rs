//! Infrastructure layer - Configuration and host page integration

pub mod config;
pub mod document;

pub use config::{Config, CONFIG_FILE};
pub use document::{HostDocument, PageDocument, PluginHost};
