// src/core/feature_flags.rs

//! Decides which optional capabilities are available to the menu.

use crate::constants::{ENV_STEAM_API_KEY, FLAG_CHARTS_ENABLED, FLAG_ES_AVAILABLE};
use crate::core::env_source::{EnvSource, parse_config_bool};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors parsing a `--flag` argument.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FlagError {
    #[error("Flag name is empty in '{0}'.")]
    EmptyName(String),
    #[error("Flag '{name}' has an invalid value '{value}' (expected true/false).")]
    InvalidValue { name: String, value: String },
}

/// Detects the default flag set from the environment.
///
/// Charts need a Steam API key. The search backend has no detection and is off
/// unless enabled explicitly.
pub fn detect(env: &impl EnvSource) -> BTreeMap<String, bool> {
    let charts_enabled = env.non_empty_var(ENV_STEAM_API_KEY).is_some();
    log::debug!("Detected charts_enabled={}", charts_enabled);

    BTreeMap::from([
        (FLAG_CHARTS_ENABLED.to_string(), charts_enabled),
        (FLAG_ES_AVAILABLE.to_string(), false),
    ])
}

/// Parses a `NAME[=BOOL]` argument. A bare name means `true`.
pub fn parse_flag_arg(arg: &str) -> Result<(String, bool), FlagError> {
    let (name, value) = match arg.split_once('=') {
        Some((name, value)) => (name.trim(), Some(value.trim())),
        None => (arg.trim(), None),
    };

    if name.is_empty() {
        return Err(FlagError::EmptyName(arg.to_string()));
    }

    let enabled = match value {
        None => true,
        Some(v) if parse_config_bool(v) || v.eq_ignore_ascii_case("on") => true,
        Some(v) if ["false", "0", "no", "off"].contains(&v.to_lowercase().as_str()) => false,
        Some(v) => {
            return Err(FlagError::InvalidValue {
                name: name.to_string(),
                value: v.to_string(),
            });
        }
    };

    Ok((name.to_string(), enabled))
}

/// Detected flags with explicit `NAME[=BOOL]` arguments applied on top.
pub fn resolve(env: &impl EnvSource, args: &[String]) -> Result<BTreeMap<String, bool>, FlagError> {
    let mut flags = detect(env);
    for arg in args {
        let (name, enabled) = parse_flag_arg(arg)?;
        log::debug!("Flag '{}' set to {} from the command line", name, enabled);
        flags.insert(name, enabled);
    }
    Ok(flags)
}
