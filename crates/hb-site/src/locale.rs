//! Locale definitions.

use serde::{Deserialize, Serialize};

/// Key of the default locale, served from the site root.
pub const ROOT_LOCALE: &str = "root";

/// A language variant of the site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    /// Label shown in the language switcher.
    pub label: String,
    /// BCP 47 language tag (e.g. `zh-CN`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Base path prefix. Derived from the locale key when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Localized site title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Localized site description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Locale {
    /// Create a locale with only a label set.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            lang: None,
            link: None,
            title: None,
            description: None,
        }
    }

    /// Base path owned by this locale.
    ///
    /// Uses the explicit `link` when present, otherwise `/` for the root
    /// locale and `/<key>/` for every other key.
    #[must_use]
    pub fn base_path(&self, key: &str) -> String {
        match &self.link {
            Some(link) => link.clone(),
            None if key == ROOT_LOCALE => "/".to_owned(),
            None => format!("/{key}/"),
        }
    }
}

/// Whether a base path starts and ends with `/`.
#[must_use]
pub fn is_well_formed_base_path(path: &str) -> bool {
    path.starts_with('/') && path.ends_with('/')
}

/// Base path with exactly one leading and trailing `/` (`"en"` and `"/en"`
/// become `"/en/"`, `""` becomes `"/"`), so matching works on whole segments.
#[must_use]
pub fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        format!("/{trimmed}/")
    }
}
