//! Page rendering configuration.

use serde::{Deserialize, Serialize};

/// Settings for the rendered catalog page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Where `hookhub-cli render` writes the page by default.
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// Document `<title>`.
    #[serde(default = "default_title")]
    pub title: String,
    /// Script URL providing the Tailwind utility classes. Empty disables it.
    #[serde(default = "default_stylesheet_url")]
    pub stylesheet_url: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            title: default_title(),
            stylesheet_url: default_stylesheet_url(),
        }
    }
}

fn default_output_path() -> String {
    "dist/index.html".to_string()
}

fn default_title() -> String {
    "HookHub".to_string()
}

fn default_stylesheet_url() -> String {
    "https://cdn.tailwindcss.com".to_string()
}
