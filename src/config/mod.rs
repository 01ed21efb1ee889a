//! Configuration file model.
//!
//! A `site-pdf.toml` carries the site-wide settings at the top level and the
//! PDF plugin's own settings under an optional `[pdf]` table, the same split
//! the host site generator makes between its global config and a plugin section.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod plugin;
pub use plugin::*;

mod site;
pub use site::*;

pub const DEFAULT_CONFIG_FILE: &str = "site-pdf.toml";

/// Complete configuration for a site-pdf project.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Configuration {
    #[serde(flatten)]
    pub site: SiteConfig,
    pub pdf: Option<PluginConfig>,
}

impl Configuration {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Configuration> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to load {} contents", path.display()))?;
        Configuration::parse(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Configuration> {
        toml::from_str(contents).with_context(|| "Failed to parse TOML")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn can_parse_configuration() {
        let config = Configuration::parse(
            r#"
site_name = "Docs"
site_url = "https://example.org/docs/"
site_author = "Site Author"
strict = true

[theme]
name = "material"
logo = "assets/logo.png"

[pdf]
cover_subtitle = "User Manual"
"#,
        )
        .expect("can parse configuration");

        assert_eq!(config.site.site_name, "Docs");
        assert_eq!(config.site.site_url.as_deref(), Some("https://example.org/docs/"));
        assert!(config.site.strict);
        assert_eq!(config.site.theme.name, "material");
        let pdf = config.pdf.expect("pdf section is present");
        assert_eq!(pdf.cover_subtitle.as_deref(), Some("User Manual"));
        assert!(pdf.toc);
    }

    #[test]
    fn pdf_section_is_optional() {
        let config = Configuration::parse(r#"site_name = "Docs""#).expect("can parse configuration");
        assert!(config.pdf.is_none());
    }

    #[test]
    fn bad_pdf_section_fails_to_parse() {
        let result = Configuration::parse(
            r#"
site_name = "Docs"
[pdf]
toc_level = "deep"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Configuration::load("does-not-exist/site-pdf.toml")
            .expect_err("missing file fails to load");
        assert!(format!("{err:#}").contains("does-not-exist/site-pdf.toml"));
    }
}
