//! `hb locales` command implementation.

use clap::Args;
use hb_config::{CliSettings, Settings};
use hb_site::SiteDocument;

use super::{SourceArgs, load_document};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the locales command.
#[derive(Args, Debug)]
pub(crate) struct LocalesArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// One row of the locale summary.
#[derive(Debug, PartialEq, Eq)]
struct LocaleRow {
    key: String,
    base_path: String,
    label: String,
    lang: String,
    entries: usize,
    /// Resolved search button text, when the locale has search translations.
    search: Option<String>,
}

impl LocalesArgs {
    /// Execute the locales command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            document: self.source.document,
            ..CliSettings::default()
        };
        let settings = Settings::load(self.source.config.as_deref(), Some(&cli_settings))?;
        let loaded = load_document(&settings)?;

        output.heading(&format!("Locales in {}", loaded.origin));
        for row in locale_rows(&loaded.document) {
            output.line(&format!(
                "  {:<6} {:<6} {:<10} {:<8} {:>3} entries  search: {}",
                row.key,
                row.base_path,
                row.label,
                row.lang,
                row.entries,
                row.search.as_deref().unwrap_or("-")
            ));
        }
        Ok(())
    }
}

fn locale_rows(doc: &SiteDocument) -> Vec<LocaleRow> {
    let translations = doc
        .theme_config
        .search
        .as_ref()
        .and_then(|search| search.translations());

    doc.base_paths()
        .into_iter()
        .map(|(key, base_path)| {
            let locale = doc.locales.get(&key);
            LocaleRow {
                label: locale.map_or_else(|| key.clone(), |l| l.label.clone()),
                lang: locale.and_then(|l| l.lang.clone()).unwrap_or_default(),
                entries: doc.theme_config.sidebar.leaf_count(&base_path),
                search: translations
                    .and_then(|t| t.get(&key))
                    .map(|text| text.resolved().button_text),
                key,
                base_path,
            }
        })
        .collect()
}
