//! Sidebar coverage across locales.
//!
//! Translations tend to lag behind the primary locale. These warnings point
//! out locales whose sidebar is missing or smaller than the most complete
//! one. They never make a document invalid.

use std::fmt;

use crate::document::SiteDocument;

/// Non-fatal sidebar coverage finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoverageWarning {
    /// Locale has no sidebar while other locales do.
    MissingSidebar { locale: String, base_path: String },
    /// Locale's sidebar has fewer entries than the most complete sidebar.
    IncompleteSidebar {
        locale: String,
        entries: usize,
        reference_locale: String,
        reference_entries: usize,
    },
}

impl fmt::Display for CoverageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSidebar { locale, base_path } => {
                write!(f, "locale '{locale}' has no sidebar at '{base_path}'")
            }
            Self::IncompleteSidebar {
                locale,
                entries,
                reference_locale,
                reference_entries,
            } => write!(
                f,
                "locale '{locale}' sidebar has {entries} entries, \
                 '{reference_locale}' has {reference_entries}"
            ),
        }
    }
}

/// Compare sidebar sizes across locales.
///
/// Returns an empty list when no sidebar is defined at all.
#[must_use]
pub fn sidebar_coverage(doc: &SiteDocument) -> Vec<CoverageWarning> {
    let sidebar = &doc.theme_config.sidebar;
    if sidebar.is_empty() {
        return Vec::new();
    }

    let counts: Vec<(String, String, usize)> = doc
        .base_paths()
        .into_iter()
        .map(|(key, base)| {
            let count = sidebar.leaf_count(&base);
            (key, base, count)
        })
        .collect();

    let mut reference: Option<(&str, usize)> = None;
    for (key, _, count) in &counts {
        if reference.is_none_or(|(_, best)| *count > best) {
            reference = Some((key.as_str(), *count));
        }
    }
    let Some((reference_locale, reference_entries)) =
        reference.map(|(key, count)| (key.to_owned(), count))
    else {
        return Vec::new();
    };

    counts
        .into_iter()
        .filter_map(|(locale, base_path, entries)| {
            if sidebar.get(&base_path).is_none() {
                Some(CoverageWarning::MissingSidebar { locale, base_path })
            } else if entries < reference_entries {
                Some(CoverageWarning::IncompleteSidebar {
                    locale,
                    entries,
                    reference_locale: reference_locale.clone(),
                    reference_entries,
                })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::navigation::NavigationNode as Node;
    use pretty_assertions::assert_eq;

    fn two_locales() -> SiteDocument {
        let mut doc = SiteDocument::new("Handbook");
        doc.locales.insert("root".to_owned(), Locale::new("中文"));
        doc.locales.insert("en".to_owned(), Locale::new("English"));
        doc
    }

    #[test]
    fn test_no_sidebar_no_warnings() {
        assert!(sidebar_coverage(&two_locales()).is_empty());
    }

    #[test]
    fn test_matching_sidebars_no_warnings() {
        let mut doc = two_locales();
        doc.theme_config
            .sidebar
            .insert("/", vec![Node::link("序言", "/zh/00")]);
        doc.theme_config
            .sidebar
            .insert("/en/", vec![Node::link("Preface", "/en/00")]);

        assert!(sidebar_coverage(&doc).is_empty());
    }

    #[test]
    fn test_missing_sidebar_warning() {
        let mut doc = two_locales();
        doc.theme_config
            .sidebar
            .insert("/", vec![Node::link("序言", "/zh/00")]);

        assert_eq!(
            sidebar_coverage(&doc),
            vec![CoverageWarning::MissingSidebar {
                locale: "en".to_owned(),
                base_path: "/en/".to_owned(),
            }]
        );
    }

    #[test]
    fn test_incomplete_sidebar_warning() {
        let mut doc = two_locales();
        doc.theme_config.sidebar.insert(
            "/",
            vec![
                Node::link("序言", "/zh/00"),
                Node::group(
                    "第一部分",
                    vec![Node::link("第一章", "/zh/01"), Node::link("第二章", "/zh/02")],
                ),
            ],
        );
        doc.theme_config
            .sidebar
            .insert("/en/", vec![Node::link("Preface", "/en/00")]);

        let warnings = sidebar_coverage(&doc);
        assert_eq!(
            warnings,
            vec![CoverageWarning::IncompleteSidebar {
                locale: "en".to_owned(),
                entries: 1,
                reference_locale: "root".to_owned(),
                reference_entries: 3,
            }]
        );
        assert_eq!(
            warnings[0].to_string(),
            "locale 'en' sidebar has 1 entries, 'root' has 3"
        );
    }
}
