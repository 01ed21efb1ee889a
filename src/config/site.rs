use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A theme logo.
///
/// Most themes take a path to an image, but some (Material's icon logos, for
/// example) take a table instead. Only paths get rewritten against the site URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Logo {
    Path(String),
    Structured(toml::Table),
}

impl Logo {
    pub fn as_path(&self) -> Option<&str> {
        match self {
            Logo::Path(path) => Some(path.as_str()),
            Logo::Structured(_) => None,
        }
    }
}

impl From<&str> for Logo {
    fn from(path: &str) -> Self {
        Logo::Path(path.to_string())
    }
}

impl From<String> for Logo {
    fn from(path: String) -> Self {
        Logo::Path(path)
    }
}

/// The active site theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ThemeRepr")]
pub struct Theme {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
}

impl Theme {
    pub fn new<S: ToString>(name: S) -> Theme {
        Theme {
            name: name.to_string(),
            logo: None,
        }
    }

    pub fn with_logo<L: Into<Logo>>(mut self, logo: L) -> Theme {
        self.logo = Some(logo.into());
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::new(default_theme_name())
    }
}

fn default_theme_name() -> String {
    "mkdocs".to_string()
}

/// A theme may be given as just its name (`theme = "material"`) or as a table.
#[derive(Deserialize)]
#[serde(untagged)]
enum ThemeRepr {
    Name(String),
    Table {
        #[serde(default = "default_theme_name")]
        name: String,
        #[serde(default)]
        logo: Option<Logo>,
    },
}

impl From<ThemeRepr> for Theme {
    fn from(repr: ThemeRepr) -> Self {
        match repr {
            ThemeRepr::Name(name) => Theme { name, logo: None },
            ThemeRepr::Table { name, logo } => Theme { name, logo },
        }
    }
}

/// Site-wide settings shared by every plugin.
#[derive(Builder, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[builder(default, setter(into))]
pub struct SiteConfig {
    pub site_name: String,
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    pub site_url: Option<String>,
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    pub site_author: Option<String>,
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    pub copyright: Option<String>,
    #[serde(default)]
    pub theme: Theme,
    /// Treat missing values as errors further down the pipeline
    #[serde(default)]
    pub strict: bool,
    /// Site-level fallback for the plugin's `theme_handler_path`
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    pub theme_handler_path: Option<String>,
}
