//! Template handling for the rendering stage.
//!
//! Rendering itself happens elsewhere; this module only decides where the
//! override templates live and which theme handler adapts the output to the
//! active site theme.

use crate::config::SiteConfig;
use crate::options::Options;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub mod filters;

pub const COVER_TEMPLATE: &str = "cover.html";
pub const CUSTOM_STYLESHEET: &str = "custom.css";

/// How the output gets adapted to the site's theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ThemeHandler {
    /// Handler bundled for the named theme
    Builtin(String),
    /// User-supplied handler script
    Script(PathBuf),
}

#[derive(Debug, Clone, Serialize)]
pub struct Template {
    title: String,
    custom_template_path: PathBuf,
    handler: ThemeHandler,
    strict: bool,
}

impl Template {
    pub fn new(options: &Options, site: &SiteConfig) -> Template {
        let handler = match options.theme_handler_path() {
            Some(path) => ThemeHandler::Script(PathBuf::from(path)),
            None => ThemeHandler::Builtin(options.theme_name().to_string()),
        };

        Template {
            title: site.site_name.clone(),
            custom_template_path: PathBuf::from(options.custom_template_path()),
            handler,
            strict: site.strict,
        }
    }

    /// Document title, the site name
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn custom_template_path(&self) -> &Path {
        &self.custom_template_path
    }

    /// Location of a user-supplied cover page template
    pub fn cover_template_path(&self) -> PathBuf {
        self.custom_template_path.join(COVER_TEMPLATE)
    }

    /// Location of a user-supplied stylesheet
    pub fn custom_stylesheet_path(&self) -> PathBuf {
        self.custom_template_path.join(CUSTOM_STYLESHEET)
    }

    pub fn handler(&self) -> &ThemeHandler {
        &self.handler
    }

    /// Whether missing values should be treated as fatal while rendering
    pub fn strict(&self) -> bool {
        self.strict
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{PluginConfigBuilder, SiteConfigBuilder, Theme};

    #[test]
    fn builtin_handler_follows_theme() {
        let site = SiteConfigBuilder::default()
            .site_name("Docs")
            .theme(Theme::new("material"))
            .build()
            .expect("can build site");
        let options = Options::new(&Default::default(), &site);
        let template = options.template();

        assert_eq!(
            template.handler(),
            &ThemeHandler::Builtin("material".to_string())
        );
        assert_eq!(template.custom_template_path(), Path::new("templates"));
        assert_eq!(
            template.cover_template_path(),
            Path::new("templates").join("cover.html")
        );
        assert_eq!(
            template.custom_stylesheet_path(),
            Path::new("templates").join("custom.css")
        );
        assert!(!template.strict());
    }

    #[test]
    fn script_handler_when_path_resolves() {
        let local = PluginConfigBuilder::default()
            .theme_handler_path("handlers/material.py")
            .custom_template_path("pdf-templates")
            .build()
            .expect("can build plugin config");
        let site = SiteConfigBuilder::default()
            .site_name("Docs")
            .strict(true)
            .build()
            .expect("can build site");
        let options = Options::new(&local, &site);
        let template = options.template();

        assert_eq!(
            template.handler(),
            &ThemeHandler::Script(PathBuf::from("handlers/material.py"))
        );
        assert_eq!(template.custom_template_path(), Path::new("pdf-templates"));
        assert!(template.strict());
    }
}
