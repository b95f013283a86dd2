//! Site configuration for the Frontend AI Handbook.
//!
//! Models the declarative configuration consumed by the external site
//! generator (locales, sidebar trees, search translations, social links,
//! footer and theme extension) and checks it for authoring mistakes before
//! a build.
//!
//! # Example
//!
//! ```
//! use hb_site::{ConfigError, NavigationNode, SiteDocument, validate_configuration};
//!
//! let mut doc = SiteDocument::from_toml_str(r#"
//! title = "Docs"
//!
//! [locales.root]
//! label = "中文"
//! link = "/"
//!
//! [locales.en]
//! label = "English"
//! link = "/en/"
//! "#).unwrap();
//!
//! doc.theme_config
//!     .sidebar
//!     .insert("/", vec![NavigationNode::link("Stray", "/en/foo")]);
//!
//! let errors = validate_configuration(&doc).unwrap_err();
//! assert!(matches!(errors[0], ConfigError::LinkOutsideLocaleScope { .. }));
//! ```

mod coverage;
mod document;
pub mod handbook;
mod locale;
mod navigation;
mod search;
mod theme;
mod validate;

pub use coverage::{CoverageWarning, sidebar_coverage};
pub use document::{DocumentError, DocumentFormat, Footer, SiteDocument, SocialLink, ThemeConfig};
pub use locale::{Locale, ROOT_LOCALE};
pub use navigation::{NavLink, NavigationNode, NodeShapeError, SidebarTree};
pub use search::{
    ButtonTranslations, FooterTranslations, ModalTranslations, ResolvedSearchText, SearchConfig,
    SearchLocaleText, SearchOptions, SearchProvider, SearchTranslations,
};
pub use theme::{AppContext, DEFAULT_THEME, DefaultTheme, Theme, ThemeExtension, setup_app};
pub use validate::{ConfigError, validate_configuration};
