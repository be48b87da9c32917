//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a string.
///
/// Unset variables without a default are an error naming the config field.
/// Bare `$VAR` is left as-is so literal dollar signs survive.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| match std::env::var(var) {
        Ok(val) => Ok(Some(val)),
        Err(_) => Err(UnsetVar(var.to_owned())),
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_set_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("COMET_TEST_EXPAND_HOST", "0.0.0.0");
        }
        let result = expand_env("${COMET_TEST_EXPAND_HOST}", "server.host").unwrap();
        assert_eq!(result, "0.0.0.0");
        unsafe {
            std::env::remove_var("COMET_TEST_EXPAND_HOST");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("COMET_TEST_EXPAND_UNSET");
        }
        let result = expand_env("${COMET_TEST_EXPAND_UNSET:-docs-index}", "field").unwrap();
        assert_eq!(result, "docs-index");
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("COMET_TEST_EXPAND_MISSING");
        }
        let err = expand_env("${COMET_TEST_EXPAND_MISSING}", "advanced.search.algolia.api_key")
            .unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("COMET_TEST_EXPAND_MISSING"));
        assert!(err.to_string().contains("advanced.search.algolia.api_key"));
    }

    #[test]
    fn test_literal_and_bare_dollar_unchanged() {
        assert_eq!(expand_env("localhost", "f").unwrap(), "localhost");
        assert_eq!(expand_env("key$VALUE", "f").unwrap(), "key$VALUE");
    }
}
