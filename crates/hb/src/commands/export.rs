//! `hb export` command implementation.

use std::path::PathBuf;

use clap::Args;
use hb_config::{CliSettings, Settings};
use hb_site::validate_configuration;

use super::{SourceArgs, load_document};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output file (default: stdout; overrides settings).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write compact JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, the document is invalid, or the
    /// output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            document: self.source.document,
            output: self.output,
            pretty: self.compact.then_some(false),
            ..CliSettings::default()
        };
        let settings = Settings::load(self.source.config.as_deref(), Some(&cli_settings))?;
        let loaded = load_document(&settings)?;

        if let Err(errors) = validate_configuration(&loaded.document) {
            output.violations(&errors);
            return Err(CliError::Invalid(errors.len()));
        }

        let json = loaded.document.to_json(settings.export_resolved.pretty)?;
        match &settings.export_resolved.output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, format!("{json}\n"))?;
                output.passed(&format!(
                    "Exported {} to {}",
                    loaded.origin,
                    path.display()
                ));
            }
            None => output.json(&json)?,
        }

        Ok(())
    }
}
