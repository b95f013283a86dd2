//! Configuration validation.
//!
//! [`validate_configuration`] walks a [`SiteDocument`] once and collects every
//! authoring mistake it finds instead of stopping at the first one, so all of
//! them can be fixed in a single pass.
//!
//! Errors are reported in a fixed order: malformed and duplicate locale base
//! paths, then each sidebar in prefix order (its unknown-locale error first,
//! then its nodes depth first), then search translations.

use std::collections::{BTreeSet, HashSet};

use crate::document::SiteDocument;
use crate::locale::{is_well_formed_base_path, normalize_base_path};
use crate::navigation::NavigationNode;

/// A single validation violation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A locale base path does not start and end with `/`.
    #[error("locale '{locale}' base path '{base_path}' must start and end with '/'")]
    MalformedLocalePrefix { locale: String, base_path: String },
    /// Two locales declare the same base path.
    #[error("locales '{first}' and '{second}' share base path '{prefix}'")]
    DuplicateLocalePrefix {
        prefix: String,
        first: String,
        second: String,
    },
    /// A sidebar is keyed by a prefix that no locale owns.
    #[error("sidebar '{prefix}' does not match any locale base path")]
    UnknownLocale { prefix: String },
    /// A leaf has an empty link.
    #[error("{location}: link is empty")]
    EmptyLink { location: String },
    /// A link belongs to a different locale than its sidebar.
    #[error("{location}: link '{link}' is outside locale '{locale}' ({base_path})")]
    LinkOutsideLocaleScope {
        locale: String,
        base_path: String,
        link: String,
        location: String,
    },
    /// Two siblings point at the same link.
    #[error("{location}: duplicate link '{link}'")]
    DuplicateLink { link: String, location: String },
    /// A group has no children.
    #[error("{location}: group has no items")]
    EmptyGroup { location: String },
    /// Search translations do not cover exactly the declared locales.
    #[error(
        "search translations do not match locales (missing: [{}], unexpected: [{}])",
        .missing.join(", "),
        .unexpected.join(", ")
    )]
    IncompleteSearchTranslations {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
}

/// Validate a site document.
///
/// Pure and deterministic: the same document always yields the same result.
///
/// # Errors
///
/// Returns every violation found, in reporting order.
pub fn validate_configuration(doc: &SiteDocument) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    check_locale_prefixes(doc, &mut errors);
    for (prefix, nodes) in doc.theme_config.sidebar.iter() {
        let scope = match doc.locale_for_prefix(prefix) {
            Some(locale) => Some(Scope {
                locale,
                base_path: prefix.to_owned(),
            }),
            None => {
                errors.push(ConfigError::UnknownLocale {
                    prefix: prefix.to_owned(),
                });
                None
            }
        };
        let mut walker = SidebarWalker {
            doc,
            scope: scope.as_ref(),
            errors: &mut errors,
        };
        walker.check_siblings(nodes, &format!("sidebar '{prefix}'"));
    }
    check_search_translations(doc, &mut errors);

    tracing::debug!(errors = errors.len(), "Validated site configuration");
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_locale_prefixes(doc: &SiteDocument, errors: &mut Vec<ConfigError>) {
    let paths = doc.base_paths();
    for (i, (key, base)) in paths.iter().enumerate() {
        if !is_well_formed_base_path(base) {
            errors.push(ConfigError::MalformedLocalePrefix {
                locale: key.clone(),
                base_path: base.clone(),
            });
        }
        let normalized = normalize_base_path(base);
        if let Some((first, _)) = paths[..i]
            .iter()
            .find(|(_, other)| normalize_base_path(other) == normalized)
        {
            errors.push(ConfigError::DuplicateLocalePrefix {
                prefix: base.clone(),
                first: first.clone(),
                second: key.clone(),
            });
        }
    }
}

fn check_search_translations(doc: &SiteDocument, errors: &mut Vec<ConfigError>) {
    let Some(translations) = doc
        .theme_config
        .search
        .as_ref()
        .and_then(|search| search.translations())
    else {
        return;
    };

    let declared: BTreeSet<String> = doc.base_paths().into_iter().map(|(key, _)| key).collect();
    let translated: BTreeSet<String> = translations.keys().cloned().collect();
    if declared == translated {
        return;
    }

    errors.push(ConfigError::IncompleteSearchTranslations {
        missing: declared.difference(&translated).cloned().collect(),
        unexpected: translated.difference(&declared).cloned().collect(),
    });
}

/// Locale a sidebar belongs to.
struct Scope {
    locale: String,
    base_path: String,
}

struct SidebarWalker<'a> {
    doc: &'a SiteDocument,
    /// `None` when the sidebar prefix matches no locale; scope checks are skipped.
    scope: Option<&'a Scope>,
    errors: &'a mut Vec<ConfigError>,
}

impl SidebarWalker<'_> {
    fn check_siblings(&mut self, nodes: &[NavigationNode], location: &str) {
        let mut seen = HashSet::new();
        for node in nodes {
            match node {
                NavigationNode::Link { link, .. } if link.is_empty() => {
                    self.errors.push(ConfigError::EmptyLink {
                        location: location.to_owned(),
                    });
                }
                NavigationNode::Link { link, .. } => {
                    self.check_scope(link, location);
                    if !seen.insert(link.as_str()) {
                        self.errors.push(ConfigError::DuplicateLink {
                            link: link.clone(),
                            location: location.to_owned(),
                        });
                    }
                }
                NavigationNode::Group { text, items, .. } => {
                    let location = format!("{location} > {text}");
                    if items.is_empty() {
                        self.errors.push(ConfigError::EmptyGroup { location });
                    } else {
                        self.check_siblings(items, &location);
                    }
                }
            }
        }
    }

    fn check_scope(&mut self, link: &str, location: &str) {
        let Some(scope) = self.scope else {
            return;
        };
        if self.doc.owning_locale(link).as_deref() != Some(scope.locale.as_str()) {
            self.errors.push(ConfigError::LinkOutsideLocaleScope {
                locale: scope.locale.clone(),
                base_path: scope.base_path.clone(),
                link: link.to_owned(),
                location: location.to_owned(),
            });
        }
    }
}
