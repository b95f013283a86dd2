//! `hb check` command implementation.

use clap::Args;
use hb_config::{CliSettings, Settings};
use hb_site::{sidebar_coverage, validate_configuration};

use super::{SourceArgs, load_document};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Fail on sidebar coverage warnings (overrides settings).
    #[arg(long)]
    pub deny_warnings: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, the document has violations, or
    /// warnings are denied and coverage warnings were found.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            document: self.source.document,
            deny_warnings: self.deny_warnings.then_some(true),
            ..CliSettings::default()
        };
        let settings = Settings::load(self.source.config.as_deref(), Some(&cli_settings))?;
        let loaded = load_document(&settings)?;

        output.heading(&format!("Checking {}", loaded.origin));

        let result = validate_configuration(&loaded.document);
        if let Err(errors) = &result {
            output.violations(errors);
        }

        let warnings = sidebar_coverage(&loaded.document);
        output.coverage(&warnings);

        if let Err(errors) = result {
            return Err(CliError::Invalid(errors.len()));
        }
        if settings.check.deny_warnings && !warnings.is_empty() {
            return Err(CliError::Warnings(warnings.len()));
        }

        output.passed(&format!(
            "Site configuration is valid ({} locale(s), {} warning(s))",
            loaded.document.base_paths().len(),
            warnings.len()
        ));
        Ok(())
    }
}
