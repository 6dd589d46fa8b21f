//! Tag rules: which tags are recognised and what they turn into

use crate::domain::validation::{validate_audio, validate_video, Validation, ValidationContext};
use crate::error::{MediaTagError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Markup for `{mp3}` tags
pub const AUDIO_TEMPLATE: &str =
    "<audio controls=\"controls\"><source type=\"audio/mpeg\" src=\"{SOURCE}\"/></audio>";

/// Markup for `{youtube}` tags
pub const VIDEO_TEMPLATE: &str = concat!(
    "<div class=\"embed-responsive embed-responsive-16by9  plyr-video mb-3\">",
    "<iframe class=\"embed-responsive-item\" ",
    "src=\"https://www.youtube-nocookie.com/embed/{SOURCE}",
    "?iv_load_policy=3&amp;modestbranding=1&amp;rel=0&amp;playsinline=1&amp;enablejsapi=1",
    "&amp;origin={ORIGIN}\" ",
    "width=\"760\" height=\"380\" allowfullscreen></iframe></div>"
);

/// Validator family a rule uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Local mp3 file, relative to the site root
    Audio,
    /// YouTube video ID
    Video,
}

/// A single occurrence of a tag in the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    /// Matched text including both delimiters
    pub full_span: String,
    /// Text between the delimiters, untrimmed
    pub payload: String,
    pub tag_name: String,
}

/// A recognised tag name with its template and validator
#[derive(Debug, Clone)]
pub struct TagRule {
    tag_name: String,
    template: String,
    kind: TagKind,
    opening: Regex,
    span: Regex,
}

impl TagRule {
    /// Build a rule for `{tag_name}...{/tag_name}`
    ///
    /// Tag names are limited to ASCII letters, digits and `_`.
    pub fn new(tag_name: &str, template: &str, kind: TagKind) -> Result<Self> {
        if tag_name.is_empty()
            || !tag_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(MediaTagError::Config(format!(
                "Invalid tag name: '{}'",
                tag_name
            )));
        }

        let name = regex::escape(tag_name);
        let opening = Regex::new(&format!(r"(?i)\{{{}\}}", name))
            .map_err(|e| MediaTagError::Config(format!("Invalid tag pattern: {}", e)))?;
        // Lazy capture: a span ends at the nearest closing delimiter
        let span = Regex::new(&format!(r"(?is)\{{{0}\}}(.*?)\{{/{0}\}}", name))
            .map_err(|e| MediaTagError::Config(format!("Invalid tag pattern: {}", e)))?;

        Ok(TagRule {
            tag_name: tag_name.to_string(),
            template: template.to_string(),
            kind,
            opening,
            span,
        })
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    /// Whether `text` contains this rule's opening delimiter (any case)
    pub fn is_present(&self, text: &str) -> bool {
        self.opening.is_match(text)
    }

    /// All non-overlapping spans of this tag in `text`, in order
    pub fn scan(&self, text: &str) -> Vec<TagMatch> {
        self.span
            .captures_iter(text)
            .map(|cap| TagMatch {
                full_span: cap[0].to_string(),
                payload: cap[1].to_string(),
                tag_name: self.tag_name.clone(),
            })
            .collect()
    }

    pub fn validate(&self, payload: &str, ctx: &ValidationContext<'_>) -> Validation {
        match self.kind {
            TagKind::Audio => validate_audio(payload, ctx),
            TagKind::Video => validate_video(payload),
        }
    }

    /// Fill the template: `{SOURCE}` first, then `{ORIGIN}`
    pub fn render(&self, payload: &str, origin: &str) -> String {
        self.template
            .replace("{SOURCE}", payload)
            .replace("{ORIGIN}", origin)
    }
}

/// The built-in `mp3` and `youtube` rules, in that order
pub fn default_rules() -> Vec<TagRule> {
    static RULES: OnceLock<Vec<TagRule>> = OnceLock::new();
    RULES
        .get_or_init(|| {
            vec![
                TagRule::new("mp3", AUDIO_TEMPLATE, TagKind::Audio).unwrap(),
                TagRule::new("youtube", VIDEO_TEMPLATE, TagKind::Video).unwrap(),
            ]
        })
        .clone()
}
