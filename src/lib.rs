//! Resolves the PDF output options of a documentation site.
//!
//! The PDF plugin has its own settings (`[pdf]`) but borrows a lot from the
//! site-wide configuration: author, copyright, site name, theme and logo.
//! [`Options`] merges the two once per build into an immutable value that the
//! rendering stage reads from.

pub mod config;
pub mod options;
pub mod templates;

pub use config::{Configuration, Logo, PluginConfig, SiteConfig, Theme};
pub use options::Options;
