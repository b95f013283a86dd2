//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod export;
pub(crate) mod locales;

use std::path::PathBuf;

use clap::Args;
use hb_config::Settings;
use hb_site::{SiteDocument, handbook};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use locales::LocalesArgs;

/// Where to find settings and the site document.
#[derive(Args, Debug, Default)]
pub(crate) struct SourceArgs {
    /// Path to settings file (default: auto-discover hb.toml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Site document (TOML, JSON or YAML; overrides settings).
    #[arg(short, long)]
    pub document: Option<PathBuf>,
}

/// A site document together with a description of where it came from.
pub(crate) struct LoadedDocument {
    pub document: SiteDocument,
    pub origin: String,
}

/// Load the document named by the settings, or the built-in handbook.
pub(crate) fn load_document(settings: &Settings) -> Result<LoadedDocument, CliError> {
    match &settings.site_resolved.document {
        Some(path) => Ok(LoadedDocument {
            document: SiteDocument::from_path(path)?,
            origin: path.display().to_string(),
        }),
        None => Ok(LoadedDocument {
            document: handbook::document()?,
            origin: "built-in handbook".to_owned(),
        }),
    }
}
