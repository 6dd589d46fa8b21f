//! Tag scanning and substitution engine

use crate::domain::assets::{AssetBundle, AssetPaths};
use crate::domain::rule::{default_rules, TagRule};
use crate::domain::validation::{RejectReason, Validation, ValidationContext};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A matched tag that failed validation and was left verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub tag_name: String,
    pub full_span: String,
    pub reason: RejectReason,
}

/// Result of processing one text blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub text: String,
    /// Set whenever the text contained any recognised opening tag
    pub assets: Option<AssetBundle>,
    pub rejections: Vec<Rejection>,
}

impl ProcessOutput {
    fn unchanged(text: &str) -> Self {
        ProcessOutput {
            text: text.to_string(),
            assets: None,
            rejections: Vec::new(),
        }
    }

    pub fn assets_needed(&self) -> bool {
        self.assets.is_some()
    }
}

/// Rewrites media tags in article text into player markup
///
/// Holds only immutable configuration, so one instance can serve any number
/// of concurrent calls.
#[derive(Debug, Clone)]
pub struct TagReplacer {
    rules: Vec<TagRule>,
    site_root: PathBuf,
    asset_paths: AssetPaths,
}

impl TagReplacer {
    /// Replacer with the built-in `mp3` and `youtube` rules
    pub fn new(site_root: impl Into<PathBuf>, asset_paths: AssetPaths) -> Self {
        Self::with_rules(default_rules(), site_root, asset_paths)
    }

    pub fn with_rules(
        rules: Vec<TagRule>,
        site_root: impl Into<PathBuf>,
        asset_paths: AssetPaths,
    ) -> Self {
        TagReplacer {
            rules,
            site_root: site_root.into(),
            asset_paths,
        }
    }

    pub fn rules(&self) -> &[TagRule] {
        &self.rules
    }

    pub fn site_root(&self) -> &Path {
        &self.site_root
    }

    pub fn asset_paths(&self) -> &AssetPaths {
        &self.asset_paths
    }

    /// Whether `text` contains an opening delimiter of any rule
    pub fn has_tags(&self, text: &str) -> bool {
        self.rules.iter().any(|rule| rule.is_present(text))
    }

    /// Replace every valid tag in `text` and report the assets the page needs
    ///
    /// Invalid tags are left as they are and listed in `rejections`. Accepted
    /// spans are replaced by literal text, so identical duplicates of a span
    /// are all rewritten at once.
    pub fn process(&self, text: &str, origin: &str) -> ProcessOutput {
        if !self.has_tags(text) {
            return ProcessOutput::unchanged(text);
        }

        let ctx = ValidationContext::new(&self.site_root);
        let mut working = text.to_string();
        let mut rejections = Vec::new();

        for rule in &self.rules {
            for m in rule.scan(&working) {
                match rule.validate(&m.payload, &ctx) {
                    Validation::Accepted => {
                        let replacement = rule.render(&m.payload, origin);
                        working = working.replace(&m.full_span, &replacement);
                    }
                    Validation::Rejected(reason) => {
                        debug!(
                            tag = %m.tag_name,
                            payload = %m.payload,
                            reason = %reason,
                            "leaving tag verbatim"
                        );
                        rejections.push(Rejection {
                            tag_name: m.tag_name,
                            full_span: m.full_span,
                            reason,
                        });
                    }
                }
            }
        }

        ProcessOutput {
            text: working,
            assets: Some(self.asset_paths.bundle(origin)),
            rejections,
        }
    }
}
