//! The handbook's own site configuration.
//!
//! Embedded at compile time from `data/handbook.toml`; used whenever no
//! external document is configured.

use crate::document::{DocumentError, SiteDocument};
use crate::theme::Theme;

const HANDBOOK_TOML: &str = include_str!("../data/handbook.toml");

/// Parse the embedded handbook document.
pub fn document() -> Result<SiteDocument, DocumentError> {
    SiteDocument::from_toml_str(HANDBOOK_TOML)
}

/// Handbook theme: the default theme plus `custom.css`, no extra components.
#[derive(Debug, Default, Clone, Copy)]
pub struct HandbookTheme;

impl Theme for HandbookTheme {}
