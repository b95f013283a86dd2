//! Project settings for the handbook tooling.
//!
//! Parses `hb.toml` settings files with serde and provides auto-discovery of
//! the file in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Path values support environment variable and `~` expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.document`
//! - `export.output`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override settings file values.
///
/// All fields are optional. Only non-None values override the loaded settings.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the site document path.
    pub document: Option<PathBuf>,
    /// Override the deny-warnings flag.
    pub deny_warnings: Option<bool>,
    /// Override the export output path.
    pub output: Option<PathBuf>,
    /// Override pretty-printing of exported JSON.
    pub pretty: Option<bool>,
}

/// Settings filename to search for.
const SETTINGS_FILENAME: &str = "hb.toml";

/// File extensions accepted for site documents.
const DOCUMENT_EXTENSIONS: &[&str] = &["toml", "json", "yaml", "yml"];

/// Project settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Site document settings (paths are relative strings from TOML).
    site: SiteSettingsRaw,
    /// Export settings (paths are relative strings from TOML).
    export: ExportSettingsRaw,
    /// Check settings.
    pub check: CheckSettings,

    /// Resolved site settings (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteSettings,
    /// Resolved export settings (set after loading).
    #[serde(skip)]
    pub export_resolved: ExportSettings,
    /// Path to the settings file (set after loading).
    #[serde(skip)]
    pub settings_path: Option<PathBuf>,
}

/// Raw site settings as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SiteSettingsRaw {
    document: Option<String>,
}

/// Resolved site settings with absolute paths.
#[derive(Debug, Default)]
pub struct SiteSettings {
    /// Site document to load. `None` selects the built-in handbook.
    pub document: Option<PathBuf>,
}

/// Check settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CheckSettings {
    /// Treat sidebar coverage warnings as failures.
    pub deny_warnings: bool,
}

/// Raw export settings as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ExportSettingsRaw {
    output: Option<String>,
    pretty: Option<bool>,
}

/// Resolved export settings with absolute paths.
#[derive(Debug)]
pub struct ExportSettings {
    /// Output file. `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// Pretty-print the JSON.
    pub pretty: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output: None,
            pretty: true,
        }
    }
}

/// Settings error.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// File not found.
    #[error("Settings file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Settings error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Settings field path (e.g., "`site.document`").
        field: String,
        /// Error message (e.g., "${`DOCS_DIR`} not set").
        message: String,
    },
}

impl Settings {
    /// Load settings from file with optional CLI settings.
    ///
    /// If `settings_path` is provided, loads from that file.
    /// Otherwise, searches for `hb.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading and path resolution.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `settings_path` doesn't exist or parsing fails.
    pub fn load(
        settings_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, SettingsError> {
        let mut settings = if let Some(path) = settings_path {
            if !path.exists() {
                return Err(SettingsError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover() {
            tracing::info!(path = %discovered.display(), "Using discovered settings file");
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(cli) = cli_settings {
            settings.apply_cli_settings(cli);
            settings.validate()?;
        }

        Ok(settings)
    }

    /// Apply CLI settings.
    fn apply_cli_settings(&mut self, cli: &CliSettings) {
        if let Some(document) = &cli.document {
            self.site_resolved.document = Some(document.clone());
        }
        if let Some(deny_warnings) = cli.deny_warnings {
            self.check.deny_warnings = deny_warnings;
        }
        if let Some(output) = &cli.output {
            self.export_resolved.output = Some(output.clone());
        }
        if let Some(pretty) = cli.pretty {
            self.export_resolved.pretty = pretty;
        }
    }

    /// Search for the settings file in current directory and parents.
    fn discover() -> Option<PathBuf> {
        Self::discover_from(&std::env::current_dir().ok()?)
    }

    /// Find the settings file in `start` or its nearest ancestor.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(SETTINGS_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load settings from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let mut settings: Self = toml::from_str(&content)?;

        settings.expand_env_vars()?;

        let settings_dir = path.parent().unwrap_or(Path::new("."));
        settings.resolve_paths(settings_dir);
        settings.settings_path = Some(path.to_path_buf());

        settings.validate()?;

        Ok(settings)
    }

    /// Validate settings values.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Validation` if the document path has an
    /// unsupported extension.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(document) = &self.site_resolved.document {
            let supported = document
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext));
            if !supported {
                return Err(SettingsError::Validation(format!(
                    "site.document must end in one of .{}: {}",
                    DOCUMENT_EXTENSIONS.join(", ."),
                    document.display()
                )));
            }
        }
        Ok(())
    }

    /// Expand environment variable references in path strings.
    fn expand_env_vars(&mut self) -> Result<(), SettingsError> {
        if let Some(ref document) = self.site.document {
            self.site.document = Some(expand::expand_env(document, "site.document")?);
        }
        if let Some(ref output) = self.export.output {
            self.export.output = Some(expand::expand_env(output, "export.output")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the settings file directory.
    fn resolve_paths(&mut self, settings_dir: &Path) {
        self.site_resolved = SiteSettings {
            document: self.site.document.as_deref().map(|d| settings_dir.join(d)),
        };
        self.export_resolved = ExportSettings {
            output: self.export.output.as_deref().map(|o| settings_dir.join(o)),
            pretty: self.export.pretty.unwrap_or(true),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_settings(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(SETTINGS_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.site_resolved.document.is_none());
        assert!(!settings.check.deny_warnings);
        assert!(settings.export_resolved.output.is_none());
        assert!(settings.export_resolved.pretty);
        assert!(settings.settings_path.is_none());
    }

    #[test]
    fn test_parse_empty_settings() {
        let settings: Settings = toml::from_str("").unwrap();
        assert!(settings.site.document.is_none());
        assert!(!settings.check.deny_warnings);
    }

    #[test]
    fn test_parse_check_settings() {
        let toml = r"
[check]
deny_warnings = true
";
        let settings: Settings = toml::from_str(toml).unwrap();
        assert!(settings.check.deny_warnings);
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[site]
document = "docs/site.toml"

[export]
output = "dist/site.json"
pretty = false
"#;
        let mut settings: Settings = toml::from_str(toml).unwrap();
        settings.resolve_paths(Path::new("/project"));

        assert_eq!(
            settings.site_resolved.document,
            Some(PathBuf::from("/project/docs/site.toml"))
        );
        assert_eq!(
            settings.export_resolved.output,
            Some(PathBuf::from("/project/dist/site.json"))
        );
        assert!(!settings.export_resolved.pretty);
    }

    #[test]
    fn test_resolve_absolute_path_kept() {
        let toml = r#"
[site]
document = "/etc/handbook/site.yaml"
"#;
        let mut settings: Settings = toml::from_str(toml).unwrap();
        settings.resolve_paths(Path::new("/project"));

        assert_eq!(
            settings.site_resolved.document,
            Some(PathBuf::from("/etc/handbook/site.yaml"))
        );
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(
            dir.path(),
            r#"
[site]
document = "site.json"

[check]
deny_warnings = true
"#,
        );

        let settings = Settings::load(Some(&path), None).unwrap();

        assert_eq!(
            settings.site_resolved.document,
            Some(dir.path().join("site.json"))
        );
        assert!(settings.check.deny_warnings);
        assert_eq!(settings.settings_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Settings::load(Some(Path::new("/nonexistent/hb.toml")), None).unwrap_err();
        assert!(matches!(err, SettingsError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(dir.path(), "[site\ndocument = ");

        let err = Settings::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_load_rejects_unsupported_document_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(
            dir.path(),
            r#"
[site]
document = "docs/.vitepress/config.ts"
"#,
        );

        let err = Settings::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, SettingsError::Validation(_)));
        assert!(err.to_string().contains("site.document"));
    }

    #[test]
    fn test_load_expands_env_vars() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("HB_TEST_DOCS_DIR", "/srv/docs");
        }

        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(
            dir.path(),
            r#"
[site]
document = "${HB_TEST_DOCS_DIR}/site.toml"
"#,
        );

        let settings = Settings::load(Some(&path), None).unwrap();
        assert_eq!(
            settings.site_resolved.document,
            Some(PathBuf::from("/srv/docs/site.toml"))
        );

        unsafe {
            std::env::remove_var("HB_TEST_DOCS_DIR");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MISSING_VAR_SETTINGS_TEST");
        }

        let toml = r#"
[export]
output = "${MISSING_VAR_SETTINGS_TEST}/site.json"
"#;
        let mut settings: Settings = toml::from_str(toml).unwrap();
        let err = settings.expand_env_vars().unwrap_err();

        assert!(matches!(err, SettingsError::EnvVar { .. }));
        assert!(err.to_string().contains("MISSING_VAR_SETTINGS_TEST"));
        assert!(err.to_string().contains("export.output"));
    }

    #[test]
    fn test_apply_cli_settings_document() {
        let mut settings = Settings::default();
        let cli = CliSettings {
            document: Some(PathBuf::from("/custom/site.yaml")),
            ..Default::default()
        };

        settings.apply_cli_settings(&cli);

        assert_eq!(
            settings.site_resolved.document,
            Some(PathBuf::from("/custom/site.yaml"))
        );
        assert!(settings.export_resolved.pretty); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_multiple() {
        let mut settings = Settings::default();
        let cli = CliSettings {
            deny_warnings: Some(true),
            output: Some(PathBuf::from("out.json")),
            pretty: Some(false),
            ..Default::default()
        };

        settings.apply_cli_settings(&cli);

        assert!(settings.check.deny_warnings);
        assert_eq!(
            settings.export_resolved.output,
            Some(PathBuf::from("out.json"))
        );
        assert!(!settings.export_resolved.pretty);
        assert!(settings.site_resolved.document.is_none()); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut settings = Settings::default();
        settings.apply_cli_settings(&CliSettings::default());

        assert!(settings.site_resolved.document.is_none());
        assert!(!settings.check.deny_warnings);
        assert!(settings.export_resolved.pretty);
    }

    #[test]
    fn test_discover_from_finds_settings_in_ancestor() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(dir.path(), "");
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(Settings::discover_from(&nested), Some(path));
    }

    #[test]
    fn test_discover_from_prefers_nearest_settings() {
        let dir = tempfile::tempdir().unwrap();
        write_settings(dir.path(), "");
        let nested = dir.path().join("a");
        std::fs::create_dir_all(&nested).unwrap();
        let near = write_settings(&nested, "");

        assert_eq!(Settings::discover_from(&nested.join("b")), Some(near));
    }

    #[test]
    fn test_discover_from_without_settings() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = Settings::discover_from(&nested);
        assert!(found.is_none_or(|path| !path.starts_with(dir.path())));
    }

    #[test]
    fn test_load_validates_cli_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(dir.path(), "");
        let cli = CliSettings {
            document: Some(PathBuf::from("site.md")),
            ..Default::default()
        };

        let err = Settings::load(Some(&path), Some(&cli)).unwrap_err();
        assert!(matches!(err, SettingsError::Validation(_)));
    }
}
