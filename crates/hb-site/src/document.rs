//! Site configuration document.
//!
//! [`SiteDocument`] is the single value handed to the site generator. It is
//! read from TOML, JSON or YAML (chosen by file extension) and exported as
//! JSON in the generator's camelCase shape.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::locale::{Locale, ROOT_LOCALE, normalize_base_path};
use crate::navigation::{NavLink, SidebarTree};
use crate::search::SearchConfig;
use crate::theme::ThemeExtension;

/// Error returned when a document cannot be read or written.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// I/O error reading the document.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// Document path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// File extension is not one of the supported formats.
    #[error("Unsupported document format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Serialization format of a document file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Detect the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Social link shown in the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name (e.g. `github`).
    pub icon: String,
    /// Target URL.
    pub link: String,
}

/// Page footer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Theme configuration consumed by the generator's default theme.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Top navigation bar.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nav: Vec<NavLink>,
    /// Sidebar trees keyed by locale base path.
    #[serde(skip_serializing_if = "SidebarTree::is_empty")]
    pub sidebar: SidebarTree,
    /// Social links.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<SocialLink>,
    /// Search widget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,
    /// Page footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
}

/// The complete site configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDocument {
    /// Site title.
    pub title: String,
    /// Site description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared locales keyed by locale key.
    ///
    /// An empty map means a single implicit root locale at `/`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub locales: BTreeMap<String, Locale>,
    /// Theme extension.
    #[serde(default)]
    pub theme: ThemeExtension,
    /// Theme configuration.
    #[serde(default)]
    pub theme_config: ThemeConfig,
}

impl SiteDocument {
    /// Create an empty document with only a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            locales: BTreeMap::new(),
            theme: ThemeExtension::default(),
            theme_config: ThemeConfig::default(),
        }
    }

    /// Load a document from a file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnsupportedFormat`] for unknown extensions,
    /// or an I/O or parse error.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let format = DocumentFormat::from_path(path)
            .ok_or_else(|| DocumentError::UnsupportedFormat(path.to_path_buf()))?;
        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let document = match format {
            DocumentFormat::Toml => Self::from_toml_str(&content)?,
            DocumentFormat::Json => Self::from_json_str(&content)?,
            DocumentFormat::Yaml => Self::from_yaml_str(&content)?,
        };

        tracing::debug!(
            path = %path.display(),
            locales = document.locales.len(),
            "Loaded site document"
        );
        Ok(document)
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, DocumentError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self, DocumentError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Serialize to the JSON consumed by the generator.
    pub fn to_json(&self, pretty: bool) -> Result<String, DocumentError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Locale keys with their base paths, in key order.
    ///
    /// Falls back to a single root locale at `/` when none are declared.
    #[must_use]
    pub fn base_paths(&self) -> Vec<(String, String)> {
        if self.locales.is_empty() {
            return vec![(ROOT_LOCALE.to_owned(), "/".to_owned())];
        }
        self.locales
            .iter()
            .map(|(key, locale)| (key.clone(), locale.base_path(key)))
            .collect()
    }

    /// Key of the locale whose base path equals `prefix`.
    #[must_use]
    pub fn locale_for_prefix(&self, prefix: &str) -> Option<String> {
        self.base_paths()
            .into_iter()
            .find(|(_, base)| base == prefix)
            .map(|(key, _)| key)
    }

    /// Key of the locale that owns `link`: the one with the longest base
    /// path that `link` starts with.
    ///
    /// Base paths are compared in normalized form, so `/en` owns `/en/foo`
    /// but not `/english/foo`.
    #[must_use]
    pub fn owning_locale(&self, link: &str) -> Option<String> {
        let mut owner: Option<(String, usize)> = None;
        for (key, base) in self.base_paths() {
            let base = normalize_base_path(&base);
            // Ties keep the first key so duplicate base paths resolve like `locale_for_prefix`.
            if link.starts_with(base.as_str())
                && owner.as_ref().is_none_or(|(_, len)| base.len() > *len)
            {
                owner = Some((key, base.len()));
            }
        }
        owner.map(|(key, _)| key)
    }
}
