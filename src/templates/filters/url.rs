use crate::config::SiteConfig;
use crate::options::Options;
use log::Level;
use url::{Position, Url};

/// Rewrites asset paths (logos, cover images) so they resolve against the
/// base path of the site URL.
///
/// Relative paths are joined onto the site URL, so `..` segments are resolved
/// and characters that are not valid in a URL path get percent-encoded.
#[derive(Debug, Clone)]
pub struct UrlFilter {
    /// `site_url` with its path ending in `/`
    base: Option<Url>,
    level: Level,
}

impl UrlFilter {
    pub fn new(options: &Options, site: &SiteConfig) -> UrlFilter {
        let level = if options.verbose() {
            Level::Info
        } else {
            Level::Debug
        };

        let base = site
            .site_url
            .as_deref()
            .filter(|site_url| !site_url.trim().is_empty())
            .and_then(|site_url| match Url::parse(site_url) {
                Ok(url) if !url.cannot_be_a_base() => Some(url),
                Ok(_) => {
                    log::warn!("Ignoring site_url `{site_url}`: not a base URL");
                    None
                }
                Err(e) => {
                    log::warn!("Ignoring site_url `{site_url}`: {e}");
                    None
                }
            })
            .map(|mut url| {
                if !url.path().ends_with('/') {
                    let path = format!("{}/", url.path());
                    url.set_path(&path);
                }
                url.set_query(None);
                url.set_fragment(None);
                url
            });

        UrlFilter { base, level }
    }

    /// Path component of the site URL, always ending in `/`
    pub fn base_path(&self) -> Option<&str> {
        self.base.as_ref().map(Url::path)
    }

    pub fn apply(&self, pathname: &str) -> String {
        if pathname.is_empty() {
            return String::new();
        }

        // hierarchical URLs (https://, file:///) and data URIs are left alone;
        // single letters are drive letters and `name:rest` is just a file name
        if let Ok(url) = Url::parse(pathname) {
            if url.scheme().len() > 1 && (!url.cannot_be_a_base() || url.scheme() == "data") {
                return pathname.to_string();
            }
        }

        if pathname.starts_with('/') {
            return pathname.to_string();
        }

        let Some(base) = &self.base else {
            return pathname.to_string();
        };

        let mut relative = pathname;
        while let Some(rest) = relative.strip_prefix("./") {
            relative = rest;
        }

        // the `./` prefix keeps colon-bearing names from parsing as a scheme
        match base.join(&format!("./{relative}")) {
            Ok(joined) => {
                let rewritten = joined[Position::BeforePath..].to_string();
                log::log!(self.level, "rewrote `{pathname}` to `{rewritten}`");
                rewritten
            }
            Err(e) => {
                log::warn!("Leaving `{pathname}` as is: {e}");
                pathname.to_string()
            }
        }
    }
}
