//! Configuration management for the contact registry.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read first if present; real environment variables win over it.

use crate::domain::PhoneRules;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Required number of characters in a phone number (default: 10)
    pub phone_length: usize,

    /// Required phone number prefix (default: "0")
    pub phone_prefix: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_PHONE_LENGTH`: Required phone length (default: 10)
    /// - `CONTACT_PHONE_PREFIX`: Required phone prefix (default: "0")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let phone_length =
            Self::parse_env_usize("CONTACT_PHONE_LENGTH", PhoneRules::DEFAULT_LENGTH)?;
        if phone_length == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_PHONE_LENGTH".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        // Phone numbers are matched trimmed, so the prefix is too
        let phone_prefix = env::var("CONTACT_PHONE_PREFIX")
            .map(|prefix| prefix.trim().to_string())
            .unwrap_or_else(|_| PhoneRules::DEFAULT_PREFIX.to_string());
        if phone_prefix.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_PHONE_PREFIX".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }
        if phone_prefix.chars().count() > phone_length {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_PHONE_PREFIX".to_string(),
                reason: format!("Cannot be longer than {} characters", phone_length),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            phone_length,
            phone_prefix,
            log_level,
        })
    }

    /// Phone number rules described by this configuration.
    pub fn phone_rules(&self) -> PhoneRules {
        PhoneRules::new(self.phone_length, self.phone_prefix.clone())
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            phone_length: PhoneRules::DEFAULT_LENGTH,
            phone_prefix: PhoneRules::DEFAULT_PREFIX.to_string(),
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.phone_length, 10);
        assert_eq!(config.phone_prefix, "0");
        assert_eq!(config.log_level, "error");
        assert_eq!(config.phone_rules(), PhoneRules::default());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_PHONE_LENGTH", "12");
        guard.set("CONTACT_PHONE_PREFIX", "+30");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.phone_length, 12);
        assert_eq!(config.phone_prefix, "+30");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.phone_rules(), PhoneRules::new(12, "+30"));
    }

    #[test]
    #[serial]
    fn test_config_invalid_phone_length() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_PHONE_LENGTH", "ten");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_PHONE_LENGTH")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_zero_phone_length() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_PHONE_LENGTH", "0");

        let result = Config::from_env();
        assert!(result.is_err(), "Zero length should be rejected");
    }

    #[test]
    #[serial]
    fn test_config_empty_prefix() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_PHONE_PREFIX", "  ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_PHONE_PREFIX")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_prefix_is_trimmed() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_PHONE_PREFIX", " 0 ");

        let config = Config::from_env().unwrap();
        assert_eq!(config.phone_prefix, "0");
        assert!(config.phone_rules().check("0123456789").is_ok());
    }

    #[test]
    #[serial]
    fn test_config_prefix_longer_than_length() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_PHONE_LENGTH", "2");
        guard.set("CONTACT_PHONE_PREFIX", "012");

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_parse_env_usize() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_USIZE", "42");

        assert_eq!(Config::parse_env_usize("TEST_USIZE", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_usize("NONEXISTENT", 10).unwrap(), 10);
    }
}
