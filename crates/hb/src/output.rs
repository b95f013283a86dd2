//! Terminal reporting for site checks.

use console::{Style, Term};
use hb_site::{ConfigError, CoverageWarning};

use crate::error::CliError;

/// Report printer.
///
/// Diagnostics go to stderr so that [`Output::json`] keeps stdout clean for
/// piping the exported document.
pub(crate) struct Output {
    stderr: Term,
    stdout: Term,
    passed: Style,
    warned: Style,
    failed: Style,
    heading: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            stderr: Term::stderr(),
            stdout: Term::stdout(),
            passed: Style::new().green(),
            warned: Style::new().yellow(),
            failed: Style::new().red(),
            heading: Style::new().cyan().bold(),
        }
    }

    /// Section heading naming the document being processed.
    pub(crate) fn heading(&self, msg: &str) {
        self.styled(&self.heading, msg);
    }

    /// Plain line.
    pub(crate) fn line(&self, msg: &str) {
        let _ = self.stderr.write_line(msg);
    }

    /// One red line per validation violation.
    pub(crate) fn violations(&self, errors: &[ConfigError]) {
        for error in errors {
            self.styled(&self.failed, &violation_line(error));
        }
    }

    /// One yellow line per coverage warning.
    pub(crate) fn coverage(&self, warnings: &[CoverageWarning]) {
        for warning in warnings {
            self.styled(&self.warned, &coverage_line(warning));
        }
    }

    pub(crate) fn passed(&self, msg: &str) {
        self.styled(&self.passed, msg);
    }

    /// Final error of a failed command.
    pub(crate) fn failure(&self, err: &CliError) {
        self.styled(&self.failed, &format!("Error: {err}"));
    }

    /// Exported document, uncolored on stdout.
    pub(crate) fn json(&self, json: &str) -> std::io::Result<()> {
        self.stdout.write_line(json)
    }

    fn styled(&self, style: &Style, msg: &str) {
        let _ = self.stderr.write_line(&style.apply_to(msg).to_string());
    }
}

fn violation_line(error: &ConfigError) -> String {
    format!("  ✗ {error}")
}

fn coverage_line(warning: &CoverageWarning) -> String {
    format!("  ! {warning}")
}
