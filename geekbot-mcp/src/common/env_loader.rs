//! Environment variable loading utilities
//!
//! Loads prefixed `GB_*` variables with type conversion. Unlike a plain
//! `unwrap_or(default)`, a variable that is present but unparsable is reported
//! as a [`ConfigError::InvalidValue`] instead of being silently replaced.

use crate::config::ConfigError;
use std::env;
use std::str::FromStr;

/// Read a variable, treating unset and blank values alike
fn read_non_blank(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Load a variable that must be present
pub fn load_env_required(key: &str) -> Result<String, ConfigError> {
    read_non_blank(key).ok_or_else(|| ConfigError::MissingVariable {
        name: key.to_string(),
    })
}

/// Load a variable with a string default
pub fn load_env_string(key: &str, default: &str) -> String {
    read_non_blank(key).unwrap_or_else(|| default.to_string())
}

/// Load a variable with type conversion, falling back to `default` when unset
pub fn load_env_parsed<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
{
    match read_non_blank(key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            field: key.to_string(),
            value: raw,
            hint: format!("expected a {}", std::any::type_name::<T>()),
        }),
    }
}

/// Builder for loading multiple environment variables with a consistent prefix
#[derive(Debug)]
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    /// Create a new environment loader with the given prefix
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    /// Full variable name for a suffix
    pub fn key(&self, suffix: &str) -> String {
        format!("{}_{}", self.prefix, suffix)
    }

    /// Load a required string value
    pub fn load_required(&self, suffix: &str) -> Result<String, ConfigError> {
        load_env_required(&self.key(suffix))
    }

    /// Load a string value with default
    pub fn load_string(&self, suffix: &str, default: &str) -> String {
        load_env_string(&self.key(suffix), default)
    }

    /// Load a parsed value with default
    pub fn load_parsed<T>(&self, suffix: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
    {
        load_env_parsed(&self.key(suffix), default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_env_required() {
        let key = "GEEKBOT_TEST_REQUIRED_VAR";

        env::remove_var(key);
        let err = load_env_required(key).unwrap_err();
        assert!(err.to_string().contains(key));

        // Whitespace-only counts as missing
        env::set_var(key, "   ");
        assert!(load_env_required(key).is_err());

        env::set_var(key, " secret ");
        assert_eq!(load_env_required(key).unwrap(), "secret");

        env::remove_var(key);
    }

    #[test]
    #[serial]
    fn test_load_env_parsed() {
        let key = "GEEKBOT_TEST_PARSED_VAR";

        env::remove_var(key);
        assert_eq!(load_env_parsed(key, 42u32).unwrap(), 42);

        env::set_var(key, "123");
        assert_eq!(load_env_parsed(key, 42u32).unwrap(), 123);

        env::set_var(key, "invalid");
        let err = load_env_parsed(key, 42u32).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref value, .. } if value == "invalid"));

        env::remove_var(key);
    }

    #[test]
    #[serial]
    fn test_env_loader() {
        let loader = EnvLoader::new("GEEKBOT_TEST");
        assert_eq!(loader.key("STRING"), "GEEKBOT_TEST_STRING");

        let key = "GEEKBOT_TEST_STRING";
        env::remove_var(key);
        assert_eq!(loader.load_string("STRING", "default"), "default");

        env::set_var(key, "value");
        assert_eq!(loader.load_string("STRING", "default"), "value");
        assert_eq!(loader.load_required("STRING").unwrap(), "value");

        env::remove_var(key);
    }
}
