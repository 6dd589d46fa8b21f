//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, SiteArgs};
pub use output::{format_page, format_rejections};
