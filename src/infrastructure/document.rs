//! Host page collaborators and an in-memory page document

use crate::infrastructure::Config;

/// Asset registration surface of the page being rendered
pub trait HostDocument {
    /// Register a stylesheet under `handle`
    fn register_style(&mut self, handle: &str, url: &str);

    /// Register a script under `handle`
    fn register_script(&mut self, handle: &str, url: &str);

    /// Add an inline script to the page
    fn emit_inline_script(&mut self, code: &str);
}

/// Enablement check of the content host
pub trait PluginHost {
    fn is_plugin_enabled(&self) -> bool;
}

impl PluginHost for Config {
    fn is_plugin_enabled(&self) -> bool {
        self.enabled
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Registration {
    handle: String,
    url: String,
}

/// Collects the assets of one page, each at most once
#[derive(Debug, Default)]
pub struct PageDocument {
    styles: Vec<Registration>,
    scripts: Vec<Registration>,
    inline_scripts: Vec<String>,
}

impl PageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style_urls(&self) -> Vec<&str> {
        self.styles.iter().map(|r| r.url.as_str()).collect()
    }

    pub fn script_urls(&self) -> Vec<&str> {
        self.scripts.iter().map(|r| r.url.as_str()).collect()
    }

    pub fn inline_scripts(&self) -> &[String] {
        &self.inline_scripts
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty() && self.scripts.is_empty() && self.inline_scripts.is_empty()
    }

    /// Render registered assets as `<head>` markup: styles, scripts, inline scripts
    pub fn head_html(&self) -> String {
        let mut output = String::new();
        for style in &self.styles {
            output.push_str(&format!(
                "<link rel=\"stylesheet\" href=\"{}\">\n",
                html_escape::encode_double_quoted_attribute(&style.url)
            ));
        }
        for script in &self.scripts {
            output.push_str(&format!(
                "<script src=\"{}\"></script>\n",
                html_escape::encode_double_quoted_attribute(&script.url)
            ));
        }
        for code in &self.inline_scripts {
            output.push_str(&format!("<script>{}</script>\n", code));
        }
        output
    }
}

impl HostDocument for PageDocument {
    fn register_style(&mut self, handle: &str, url: &str) {
        if !self.styles.iter().any(|r| r.handle == handle) {
            self.styles.push(Registration {
                handle: handle.to_string(),
                url: url.to_string(),
            });
        }
    }

    fn register_script(&mut self, handle: &str, url: &str) {
        if !self.scripts.iter().any(|r| r.handle == handle) {
            self.scripts.push(Registration {
                handle: handle.to_string(),
                url: url.to_string(),
            });
        }
    }

    fn emit_inline_script(&mut self, code: &str) {
        if !self.inline_scripts.iter().any(|c| c == code) {
            self.inline_scripts.push(code.to_string());
        }
    }
}
