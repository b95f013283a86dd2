//! CLI error types.

use hb_config::SettingsError;
use hb_site::DocumentError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("{0}")]
    Document(#[from] DocumentError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("site configuration has {0} error(s)")]
    Invalid(usize),

    #[error("site configuration has {0} warning(s) and warnings are denied")]
    Warnings(usize),
}
