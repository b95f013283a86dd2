//! Environment variable expansion for settings values.

use std::borrow::Cow;

use crate::SettingsError;

/// Expand `${VAR}`, `${VAR:-default}`, `$VAR` and a leading `~` in `value`.
///
/// `field` names the settings key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, SettingsError> {
    shellexpand::full(value)
        .map(Cow::into_owned)
        .map_err(|e| SettingsError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(
            expand_env("docs/site.toml", "site.document").unwrap(),
            "docs/site.toml"
        );
    }

    #[test]
    fn test_braced_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("HB_EXPAND_TEST_DIR", "/srv/handbook");
        }

        assert_eq!(
            expand_env("${HB_EXPAND_TEST_DIR}/site.toml", "site.document").unwrap(),
            "/srv/handbook/site.toml"
        );

        unsafe {
            std::env::remove_var("HB_EXPAND_TEST_DIR");
        }
    }

    #[test]
    fn test_default_value_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("HB_EXPAND_TEST_UNSET");
        }

        assert_eq!(
            expand_env("${HB_EXPAND_TEST_UNSET:-dist}/site.json", "export.output").unwrap(),
            "dist/site.json"
        );
    }

    #[test]
    fn test_leading_tilde_expands_to_home() {
        let expanded = expand_env("~/site.json", "site.document").unwrap();

        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/site.json"));
    }

    #[test]
    fn test_missing_variable_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("HB_EXPAND_TEST_MISSING");
        }

        let err = expand_env("${HB_EXPAND_TEST_MISSING}", "export.output").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("HB_EXPAND_TEST_MISSING"));
        assert!(msg.contains("export.output"));
    }
}
