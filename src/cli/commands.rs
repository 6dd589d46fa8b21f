//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mediatag")]
#[command(about = "Rewrite mp3 and youtube media tags into Plyr player markup", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable info-level logging on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default mediatag.toml
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Site origin to store in the config
        #[arg(long)]
        origin: Option<String>,
    },

    /// Render content items of one page to stdout
    Render {
        /// Content files, one item each (default: read stdin)
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,

        #[command(flatten)]
        site: SiteArgs,

        /// Print the page's head assets before the items
        #[arg(long)]
        head: bool,
    },

    /// Report tags that would be left unchanged
    Check {
        /// Content files (default: read stdin)
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,

        #[command(flatten)]
        site: SiteArgs,
    },
}

/// Site settings shared by render and check
#[derive(Args, Debug, Clone, Default)]
pub struct SiteArgs {
    /// Config file (default: ./mediatag.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Site origin, overrides the config
    #[arg(long)]
    pub origin: Option<String>,

    /// Document root for audio files, overrides the config
    #[arg(long)]
    pub site_root: Option<PathBuf>,
}
