//! mediatag - media tag filter for rendered article content
//!
//! Rewrites `{mp3}...{/mp3}` and `{youtube}...{/youtube}` placeholder tags
//! into Plyr player markup and reports the stylesheet, script and init
//! snippet the host page has to load once.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{AssetBundle, ProcessOutput, TagReplacer};
pub use error::MediaTagError;
