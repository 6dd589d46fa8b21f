//! Stylesheet, script and init-snippet the page needs for the player

/// Default install location of the player assets, relative to the site
pub const DEFAULT_PLUGIN_PATH: &str = "plugins/content/fwiepplyr";

/// Default player library name, used in asset file names
pub const DEFAULT_PLAYER: &str = "plyr";

const INIT_SCRIPT_TEMPLATE: &str = r#"
function addPlyr(selector) {
	if (typeof Plyr == 'undefined') {
		return;
	}
	Plyr.setup(
		selector, {
			debug: false,
			iconUrl: '{ICON_URL}',
			settings: [],
			youtube: {
				noCookie: true,
				enablejsapi: 1,
				modestbranding: 1,
				iv_load_policy: 3,
				origin: '{ORIGIN}',
				playsinline: 1,
				rel: 0
			}
		}
	);
}
document.addEventListener("DOMContentLoaded", function(event) {
	'use strict';
	addPlyr('audio, .plyr-video');
});
"#;

/// Resources a page must load to render the generated markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBundle {
    pub stylesheet_url: String,
    pub script_url: String,
    pub inline_script: String,
}

/// Where the player assets live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    /// Asset directory relative to the site, e.g. `plugins/content/fwiepplyr`
    pub plugin_path: String,
    /// URL path prefix of the site (empty when served from `/`)
    pub site_base_path: String,
    pub player: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            plugin_path: DEFAULT_PLUGIN_PATH.to_string(),
            site_base_path: String::new(),
            player: DEFAULT_PLAYER.to_string(),
        }
    }
}

impl AssetPaths {
    pub fn stylesheet_url(&self) -> String {
        format!("{}/css/{}.min.css", self.plugin_path, self.player)
    }

    pub fn script_url(&self) -> String {
        format!("{}/js/{}.polyfilled.min.js", self.plugin_path, self.player)
    }

    /// Absolute path of the plugin directory, `<site_base_path>/<plugin_path>`
    pub fn public_plugin_path(&self) -> String {
        format!(
            "{}/{}",
            self.site_base_path.trim_end_matches('/'),
            self.plugin_path
        )
    }

    pub fn icon_url(&self) -> String {
        format!("{}/img/{}.svg", self.public_plugin_path(), self.player)
    }

    /// Player initialisation snippet for this site and origin
    pub fn init_script(&self, origin: &str) -> String {
        INIT_SCRIPT_TEMPLATE
            .replace("{ICON_URL}", &self.icon_url())
            .replace("{ORIGIN}", origin)
    }

    pub fn bundle(&self, origin: &str) -> AssetBundle {
        AssetBundle {
            stylesheet_url: self.stylesheet_url(),
            script_url: self.script_url(),
            inline_script: self.init_script(origin),
        }
    }
}
