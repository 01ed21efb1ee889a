use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Plugin-local PDF configuration, as written in the `[pdf]` table.
///
/// Unknown keys are rejected so that typos surface when the file is parsed
/// rather than silently falling back to defaults.
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[builder(default, setter(into))]
#[serde(deny_unknown_fields)]
pub struct PluginConfig {
    /// Target output medium for styling
    #[serde(default = "default_media_type")]
    pub media_type: String,
    #[serde(default)]
    pub verbose: bool,
    /// Name of an environment variable that must be `1` for PDF generation to run
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    pub enabled_if_env: Option<String>,
    /// Path to a custom theme handler script
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    pub theme_handler_path: Option<String>,
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    pub author: Option<String>,
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    pub author_logo: Option<String>,
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    pub copyright: Option<String>,
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    pub disclaimer: Option<String>,
    #[serde(default = "default_true")]
    pub cover: bool,
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    pub cover_title: Option<String>,
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    pub cover_subtitle: Option<String>,
    /// Directory holding `cover.html` and `custom.css` overrides
    #[serde(default = "default_custom_template_path")]
    pub custom_template_path: String,
    #[serde(default = "default_true")]
    pub toc: bool,
    #[serde(default = "default_toc_title")]
    pub toc_title: String,
    /// Deepest heading level listed in the table of contents; negative levels
    /// are rejected when parsing
    #[serde(default = "default_toc_level")]
    pub toc_level: u32,
    /// Cover image overrides keyed by document type
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    pub cover_images: Option<BTreeMap<String, String>>,
}

pub const DEFAULT_MEDIA_TYPE: &str = "print";

fn default_media_type() -> String {
    DEFAULT_MEDIA_TYPE.to_string()
}
fn default_true() -> bool {
    true
}
fn default_custom_template_path() -> String {
    "templates".to_string()
}
fn default_toc_title() -> String {
    "Table of Contents".to_string()
}
fn default_toc_level() -> u32 {
    2
}

impl Default for PluginConfig {
    fn default() -> Self {
        PluginConfig {
            media_type: default_media_type(),
            verbose: false,
            enabled_if_env: None,
            theme_handler_path: None,
            author: None,
            author_logo: None,
            copyright: None,
            disclaimer: None,
            cover: default_true(),
            cover_title: None,
            cover_subtitle: None,
            custom_template_path: default_custom_template_path(),
            toc: default_true(),
            toc_title: default_toc_title(),
            toc_level: default_toc_level(),
            cover_images: None,
        }
    }
}

impl PluginConfig {
    /// Whether PDF generation should run in the current process environment.
    pub fn is_enabled(&self) -> bool {
        self.is_enabled_with(|name| std::env::var(name).ok())
    }

    /// Whether PDF generation should run, looking variables up with `lookup`.
    ///
    /// Without `enabled_if_env` generation always runs; with it, only when
    /// the variable is set to exactly `1`.
    pub fn is_enabled_with<F>(&self, lookup: F) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        match self.enabled_if_env.as_deref() {
            None | Some("") => true,
            Some(name) => lookup(name).as_deref() == Some("1"),
        }
    }
}
