//! Resolved PDF options.
//!
//! `Options` merges the plugin's own settings with the site-wide ones. Values
//! the plugin leaves unset (or empty) fall back to their site counterparts:
//!
//! | option               | falls back to               |
//! |----------------------|-----------------------------|
//! | `author`             | `site_author`               |
//! | `copyright`          | `copyright`                 |
//! | `cover_title`        | `site_name`                 |
//! | `author_logo`        | `theme.logo`                |
//! | `theme_handler_path` | site `theme_handler_path`   |
//!
//! `disclaimer` and `cover_subtitle` never fall back. Cover and table of
//! contents fields are only resolved when their toggle is on.

use crate::config::{Logo, PluginConfig, SiteConfig};
use crate::templates::filters::UrlFilter;
use crate::templates::Template;
use log::Level;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct Options {
    strict: bool,
    verbose: bool,
    media_type: String,
    site_url: Option<String>,

    author: Option<String>,
    copyright: Option<String>,
    disclaimer: Option<String>,

    cover_images: Option<BTreeMap<String, String>>,

    cover: bool,
    cover_title: Option<String>,
    cover_subtitle: Option<String>,

    custom_template_path: String,

    toc: bool,
    toc_title: Option<String>,
    toc_level: Option<u32>,

    theme_name: String,
    theme_handler_path: Option<String>,

    author_logo: Option<Logo>,

    #[serde(skip)]
    user_config: SiteConfig,
}

/// Resolves one falling-back option, noting where the value came from.
struct Fallback {
    level: Level,
}

impl Fallback {
    fn message(field: &str, source: &str, found: bool) -> String {
        if found {
            format!("pdf option `{field}` not set, using site `{source}`")
        } else {
            format!("pdf option `{field}` not set and site `{source}` is empty too")
        }
    }

    fn note(&self, field: &str, source: &str, found: bool) {
        log::log!(self.level, "{}", Fallback::message(field, source, found));
    }

    /// The local value unless it is missing or empty, otherwise the site value.
    fn resolve(
        &self,
        field: &str,
        local: Option<&String>,
        source: &str,
        site: Option<&String>,
    ) -> Option<String> {
        match local {
            Some(local) if !local.is_empty() => Some(local.clone()),
            _ => {
                self.note(field, source, site.is_some_and(|site| !site.is_empty()));
                site.cloned()
            }
        }
    }
}

impl Options {
    pub fn new(local: &PluginConfig, site: &SiteConfig) -> Options {
        let fallback = Fallback {
            level: if local.verbose {
                Level::Info
            } else {
                Level::Debug
            },
        };

        let author = fallback.resolve(
            "author",
            local.author.as_ref(),
            "site_author",
            site.site_author.as_ref(),
        );
        let copyright = fallback.resolve(
            "copyright",
            local.copyright.as_ref(),
            "copyright",
            site.copyright.as_ref(),
        );

        let (cover_title, cover_subtitle) = if local.cover {
            (
                fallback.resolve(
                    "cover_title",
                    local.cover_title.as_ref(),
                    "site_name",
                    Some(&site.site_name),
                ),
                local.cover_subtitle.clone(),
            )
        } else {
            (None, None)
        };

        let (toc_title, toc_level) = if local.toc {
            (Some(local.toc_title.clone()), Some(local.toc_level))
        } else {
            (None, None)
        };

        let theme_handler_path = fallback
            .resolve(
                "theme_handler_path",
                local.theme_handler_path.as_ref(),
                "theme_handler_path",
                site.theme_handler_path.as_ref(),
            )
            .filter(|path| !path.is_empty());

        let author_logo = match local.author_logo.as_deref() {
            Some(logo) if !logo.is_empty() => Some(Logo::from(logo)),
            _ => {
                fallback.note("author_logo", "theme.logo", site.theme.logo.is_some());
                site.theme.logo.clone()
            }
        };

        let mut options = Options {
            strict: site.strict,
            verbose: local.verbose,
            media_type: local.media_type.clone(),
            site_url: site.site_url.clone(),
            author,
            copyright,
            disclaimer: local.disclaimer.clone(),
            cover_images: local.cover_images.clone(),
            cover: local.cover,
            cover_title,
            cover_subtitle,
            custom_template_path: local.custom_template_path.clone(),
            toc: local.toc,
            toc_title,
            toc_level,
            theme_name: site.theme.name.clone(),
            theme_handler_path,
            author_logo,
            user_config: site.clone(),
        };

        // logo paths are rewritten against the site once everything else is resolved
        let logo_filter = UrlFilter::new(&options, site);
        options.author_logo = options.author_logo.take().map(|logo| match logo {
            Logo::Path(path) => Logo::Path(logo_filter.apply(&path)),
            structured => structured,
        });

        log::log!(
            fallback.level,
            "resolved pdf options: cover={}, toc={}, theme={}, strict={}",
            options.cover,
            options.toc,
            options.theme_name,
            options.strict
        );

        options
    }

    pub fn strict(&self) -> bool {
        self.strict
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn site_url(&self) -> Option<&str> {
        self.site_url.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn copyright(&self) -> Option<&str> {
        self.copyright.as_deref()
    }

    pub fn disclaimer(&self) -> Option<&str> {
        self.disclaimer.as_deref()
    }

    pub fn cover_images(&self) -> Option<&BTreeMap<String, String>> {
        self.cover_images.as_ref()
    }

    /// Cover image override for a particular document type, if one is configured
    pub fn cover_image_for(&self, kind: &str) -> Option<&str> {
        self.cover_images
            .as_ref()
            .and_then(|images| images.get(kind))
            .map(String::as_str)
    }

    pub fn cover(&self) -> bool {
        self.cover
    }

    /// Only set when the cover page is enabled
    pub fn cover_title(&self) -> Option<&str> {
        self.cover_title.as_deref()
    }

    /// Only set when the cover page is enabled
    pub fn cover_subtitle(&self) -> Option<&str> {
        self.cover_subtitle.as_deref()
    }

    pub fn custom_template_path(&self) -> &str {
        &self.custom_template_path
    }

    pub fn toc(&self) -> bool {
        self.toc
    }

    /// Only set when the table of contents is enabled
    pub fn toc_title(&self) -> Option<&str> {
        self.toc_title.as_deref()
    }

    /// Only set when the table of contents is enabled
    pub fn toc_level(&self) -> Option<u32> {
        self.toc_level
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    pub fn theme_handler_path(&self) -> Option<&str> {
        self.theme_handler_path.as_deref()
    }

    /// Template handler for the rendering stage, built from these options
    pub fn template(&self) -> Template {
        Template::new(self, &self.user_config)
    }

    /// The site-wide configuration these options were resolved against
    pub fn user_config(&self) -> &SiteConfig {
        &self.user_config
    }

    pub fn author_logo(&self) -> Option<&Logo> {
        self.author_logo.as_ref()
    }
}
