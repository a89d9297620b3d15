// src/core/env_source.rs

//! Read-only access to environment variables.
//!
//! Everything that consults the environment (configuration overrides, render
//! options, feature detection) goes through [`EnvSource`] instead of calling
//! `std::env::var` directly, so the same code runs against the real process
//! environment or an in-memory map.

use std::collections::HashMap;
use std::env;

/// A source of environment-style key/value pairs.
pub trait EnvSource {
    /// Returns the value for `key`, or `None` if it is unset.
    fn var(&self, key: &str) -> Option<String>;

    /// Like [`EnvSource::var`], but treats an empty value as unset.
    fn non_empty_var(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-unicode values are treated as unset.
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Truthy values accepted by configuration overrides.
const CONFIG_TRUTHY: &[&str] = &["true", "1", "yes"];

/// Truthy values accepted by menu rendering switches. These also accept `on`.
const RENDER_TRUTHY: &[&str] = &["true", "1", "yes", "on"];

/// Parses a configuration boolean. Never fails: unrecognized text is `false`.
pub fn parse_config_bool(value: &str) -> bool {
    is_one_of(value, CONFIG_TRUTHY)
}

/// Parses a menu rendering switch. Never fails: unrecognized text is `false`.
pub fn parse_render_switch(value: &str) -> bool {
    is_one_of(value, RENDER_TRUTHY)
}

fn is_one_of(value: &str, accepted: &[&str]) -> bool {
    let lowered = value.to_lowercase();
    accepted.contains(&lowered.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_bool_accepts_truthy_values_case_insensitively() {
        for value in ["true", "TRUE", "True", "1", "yes", "YeS"] {
            assert!(parse_config_bool(value), "'{}' should be true", value);
        }
    }

    #[test]
    fn test_config_bool_rejects_everything_else() {
        for value in ["false", "0", "no", "on", "", "enabled"] {
            assert!(!parse_config_bool(value), "'{}' should be false", value);
        }
    }

    #[test]
    fn test_render_switch_also_accepts_on() {
        assert!(parse_render_switch("on"));
        assert!(parse_render_switch("ON"));
        assert!(!parse_render_switch("off"));
    }

    #[test]
    fn test_map_source_and_empty_values() {
        let mut env = HashMap::new();
        env.insert("SET".to_string(), "value".to_string());
        env.insert("EMPTY".to_string(), String::new());

        assert_eq!(env.var("SET").as_deref(), Some("value"));
        assert_eq!(env.var("EMPTY").as_deref(), Some(""));
        assert_eq!(env.non_empty_var("EMPTY"), None);
        assert_eq!(env.var("MISSING"), None);
    }
}
