//! Render content items of a page
//!
//! Ties the tag replacer to the host: checks enablement, bails out when
//! there is no document to attach assets to, and registers the player assets
//! for any item that needs them.

use crate::domain::{ProcessOutput, TagReplacer};
use crate::infrastructure::{HostDocument, PluginHost};
use tracing::{debug, warn};

/// Handle the player stylesheet is registered under
pub const STYLE_HANDLE: &str = "plg_fwiepplyr.style";

/// Handle the player script is registered under
pub const SCRIPT_HANDLE: &str = "plg_fwiepplyr.script";

/// Service rendering content items against a host page
pub struct PageRenderer {
    replacer: TagReplacer,
}

impl PageRenderer {
    pub fn new(replacer: TagReplacer) -> Self {
        PageRenderer { replacer }
    }

    pub fn replacer(&self) -> &TagReplacer {
        &self.replacer
    }

    /// Render a single content item
    ///
    /// The text comes back untouched when the plugin is disabled, when it
    /// holds no tags, or when `document` is `None`.
    pub fn render_item<H, D>(
        &self,
        host: &H,
        document: Option<&mut D>,
        text: &str,
        origin: &str,
    ) -> ProcessOutput
    where
        H: PluginHost + ?Sized,
        D: HostDocument + ?Sized,
    {
        let untouched = || ProcessOutput {
            text: text.to_string(),
            assets: None,
            rejections: Vec::new(),
        };

        if !host.is_plugin_enabled() {
            debug!("plugin disabled, skipping content item");
            return untouched();
        }

        if !self.replacer.has_tags(text) {
            return untouched();
        }

        let Some(document) = document else {
            warn!("no document to attach player assets to, leaving content unchanged");
            return untouched();
        };

        let output = self.replacer.process(text, origin);

        if let Some(assets) = &output.assets {
            document.register_style(STYLE_HANDLE, &assets.stylesheet_url);
            document.register_script(SCRIPT_HANDLE, &assets.script_url);
            document.emit_inline_script(&assets.inline_script);
        }

        debug!(rejected = output.rejections.len(), "rendered content item");

        output
    }

    /// Render every item of one page against the same document
    pub fn render_page<H, D, S>(
        &self,
        host: &H,
        mut document: Option<&mut D>,
        items: &[S],
        origin: &str,
    ) -> Vec<ProcessOutput>
    where
        H: PluginHost + ?Sized,
        D: HostDocument + ?Sized,
        S: AsRef<str>,
    {
        items
            .iter()
            .map(|item| self.render_item(host, document.as_deref_mut(), item.as_ref(), origin))
            .collect()
    }
}
