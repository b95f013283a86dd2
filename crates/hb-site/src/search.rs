//! Search widget configuration.
//!
//! Only the generator's built-in local search is supported. Translation
//! strings are optional per field; [`SearchLocaleText::resolved`] fills the
//! gaps with the generator's own defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Search provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side index built by the generator.
    #[default]
    Local,
}

/// Search configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search provider.
    #[serde(default)]
    pub provider: SearchProvider,
    /// Provider options.
    #[serde(default, skip_serializing_if = "SearchOptions::is_empty")]
    pub options: SearchOptions,
}

impl SearchConfig {
    /// Per-locale translations, if any are declared.
    #[must_use]
    pub fn translations(&self) -> Option<&BTreeMap<String, SearchLocaleText>> {
        (!self.options.locales.is_empty()).then_some(&self.options.locales)
    }
}

/// Provider options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Translation strings keyed by locale key.
    #[serde(default)]
    pub locales: BTreeMap<String, SearchLocaleText>,
}

impl SearchOptions {
    fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

/// Translation strings of the search widget for one locale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLocaleText {
    /// Translations.
    #[serde(default)]
    pub translations: SearchTranslations,
}

/// Translation groups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTranslations {
    /// Search button labels.
    #[serde(default)]
    pub button: ButtonTranslations,
    /// Search modal labels.
    #[serde(default)]
    pub modal: ModalTranslations,
}

/// Search button labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonTranslations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_aria_label: Option<String>,
}

/// Search modal labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalTranslations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_results_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_button_title: Option<String>,
    #[serde(default)]
    pub footer: FooterTranslations,
}

/// Keyboard hint labels in the modal footer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterTranslations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigate_text: Option<String>,
}

/// Fully resolved search labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSearchText {
    pub button_text: String,
    pub button_aria_label: String,
    pub no_results_text: String,
    pub reset_button_title: String,
    pub select_text: String,
    pub navigate_text: String,
}

impl Default for ResolvedSearchText {
    fn default() -> Self {
        Self {
            button_text: "Search".to_owned(),
            button_aria_label: "Search".to_owned(),
            no_results_text: "No results for".to_owned(),
            reset_button_title: "Reset search".to_owned(),
            select_text: "to select".to_owned(),
            navigate_text: "to navigate".to_owned(),
        }
    }
}

impl SearchLocaleText {
    /// Resolve every label, falling back to the generator defaults.
    #[must_use]
    pub fn resolved(&self) -> ResolvedSearchText {
        let defaults = ResolvedSearchText::default();
        let button = &self.translations.button;
        let modal = &self.translations.modal;

        ResolvedSearchText {
            button_text: button.button_text.clone().unwrap_or(defaults.button_text),
            button_aria_label: button
                .button_aria_label
                .clone()
                .unwrap_or(defaults.button_aria_label),
            no_results_text: modal
                .no_results_text
                .clone()
                .unwrap_or(defaults.no_results_text),
            reset_button_title: modal
                .reset_button_title
                .clone()
                .unwrap_or(defaults.reset_button_title),
            select_text: modal
                .footer
                .select_text
                .clone()
                .unwrap_or(defaults.select_text),
            navigate_text: modal
                .footer
                .navigate_text
                .clone()
                .unwrap_or(defaults.navigate_text),
        }
    }
}
