// src/core/config_resolver.rs

//! # Config Resolver
//!
//! Produces the [`AppConfig`] snapshot by layering three sources, lowest
//! precedence first:
//!
//! 1. **Defaults** hard-coded in the section structs (`Default` impls).
//! 2. **The TOML file**. Sections and fields that are present replace the
//!    defaults, one field at a time; unknown ones are ignored and a value of the
//!    wrong type is skipped. On first run the file does not exist and is
//!    created with the defaults.
//! 3. **Environment overrides**, a fixed table of variables each bound to one
//!    field.
//!
//! Resolution never fails. A file that cannot be read or is not valid TOML is reported in
//! the log and the defaults are used instead; the file itself is left alone.
//! A bad override value is reported and the previous value is kept.

use crate::constants::{
    ENV_CHEAPSHARK_RATE_LIMIT, ENV_DB_PATH, ENV_DEFAULT_COUNTRY, ENV_SCHEDULER_ENABLED,
    ENV_SCHEDULER_INTERVAL, ENV_STEAM_RATE_LIMIT,
};
use crate::core::env_source::{EnvSource, parse_config_bool};
use crate::models::AppConfig;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::num::{ParseFloatError, ParseIntError};
use std::path::Path;
use thiserror::Error;

/// Errors reading or writing the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read configuration file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not write configuration file '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Error parsing TOML in '{path}': {source}")]
    TomlParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Error serializing configuration: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Why a single environment override was skipped.
#[derive(Error, Debug)]
pub enum OverrideError {
    #[error("not a valid number: {0}")]
    Float(#[from] ParseFloatError),
    #[error("not a valid non-negative integer: {0}")]
    Integer(#[from] ParseIntError),
}

// --- Environment override table ---

/// Binds one environment variable to one configuration field.
struct EnvOverride {
    var: &'static str,
    field: &'static str,
    apply: fn(&mut AppConfig, &str) -> Result<(), OverrideError>,
}

/// The complete set of recognized overrides, applied in this order.
static ENV_OVERRIDES: &[EnvOverride] = &[
    EnvOverride {
        var: ENV_DB_PATH,
        field: "database.path",
        apply: set_database_path,
    },
    EnvOverride {
        var: ENV_STEAM_RATE_LIMIT,
        field: "steam_api.rate_limit_seconds",
        apply: set_steam_rate_limit,
    },
    EnvOverride {
        var: ENV_CHEAPSHARK_RATE_LIMIT,
        field: "cheapshark.rate_limit_seconds",
        apply: set_cheapshark_rate_limit,
    },
    EnvOverride {
        var: ENV_SCHEDULER_ENABLED,
        field: "scheduler.enabled",
        apply: set_scheduler_enabled,
    },
    EnvOverride {
        var: ENV_SCHEDULER_INTERVAL,
        field: "scheduler.interval_minutes",
        apply: set_scheduler_interval,
    },
    EnvOverride {
        var: ENV_DEFAULT_COUNTRY,
        field: "wishlist.default_country_code",
        apply: set_default_country,
    },
];

fn set_database_path(config: &mut AppConfig, value: &str) -> Result<(), OverrideError> {
    config.database.path = value.to_string();
    Ok(())
}

fn set_steam_rate_limit(config: &mut AppConfig, value: &str) -> Result<(), OverrideError> {
    config.steam_api.rate_limit_seconds = value.trim().parse()?;
    Ok(())
}

fn set_cheapshark_rate_limit(config: &mut AppConfig, value: &str) -> Result<(), OverrideError> {
    config.cheapshark.rate_limit_seconds = value.trim().parse()?;
    Ok(())
}

fn set_scheduler_enabled(config: &mut AppConfig, value: &str) -> Result<(), OverrideError> {
    config.scheduler.enabled = parse_config_bool(value);
    Ok(())
}

fn set_scheduler_interval(config: &mut AppConfig, value: &str) -> Result<(), OverrideError> {
    config.scheduler.interval_minutes = value.trim().parse()?;
    Ok(())
}

fn set_default_country(config: &mut AppConfig, value: &str) -> Result<(), OverrideError> {
    config.wishlist.default_country_code = value.to_string();
    Ok(())
}

// --- PUBLIC API ---

/// Resolves the configuration snapshot from defaults, the file at `path` and `env`.
///
/// If `path` does not exist it is created with the defaults (the environment
/// layer is applied to the returned snapshot only, never written).
pub fn resolve(path: &Path, env: &impl EnvSource) -> AppConfig {
    log::debug!("Resolving configuration from '{}'", path.display());

    let mut config = load_file_layer(path);
    apply_env_overrides(&mut config, env);
    config
}

/// Reads and parses the file layer.
///
/// Only a TOML syntax error fails. Missing fields take their defaults, and a
/// field whose value has the wrong type is logged and keeps its default
/// without affecting its neighbours.
pub fn read_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    let document: toml::Table = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.display().to_string(),
        source: e,
    })?;
    merge_document(&document, path)
}

/// Writes every section and field of `config` to `path`, replacing its contents.
/// Missing parent directories are created.
pub fn persist(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_string = toml::to_string_pretty(config)?;

    let write_error = |e| ConfigError::Write {
        path: path.display().to_string(),
        source: e,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, toml_string).map_err(write_error)?;

    log::info!("Configuration saved to '{}'", path.display());
    Ok(())
}

/// Applies every recognized, non-empty override in `env` to `config`.
/// Values that fail to parse are logged and skipped.
pub fn apply_env_overrides(config: &mut AppConfig, env: &impl EnvSource) {
    for override_def in ENV_OVERRIDES {
        let Some(value) = env.non_empty_var(override_def.var) else {
            continue;
        };
        match (override_def.apply)(config, &value) {
            Ok(()) => log::debug!(
                "Environment override {} applied to '{}'",
                override_def.var,
                override_def.field
            ),
            Err(e) => log::warn!(
                "Ignoring {}='{}' for '{}': {}",
                override_def.var,
                value,
                override_def.field,
                e
            ),
        }
    }
}

/// Human-readable summary of the most relevant settings.
pub fn describe(config: &AppConfig) -> String {
    let yes_no = |flag: bool| if flag { t!("common.yes") } else { t!("common.no") };
    let on_off = |flag: bool| {
        if flag {
            t!("common.enabled")
        } else {
            t!("common.disabled")
        }
    };

    let lines = [
        format!("📋 {}", t!("config.summary.title")),
        "=".repeat(50),
        format!("🗄️  {}: {}", t!("config.summary.database"), config.database.path),
        format!(
            "⏱️  {}: {}s",
            t!("config.summary.steam_rate_limit"),
            config.steam_api.rate_limit_seconds
        ),
        format!(
            "🛒 {}: {}s",
            t!("config.summary.cheapshark_rate_limit"),
            config.cheapshark.rate_limit_seconds
        ),
        format!(
            "🚀 {}: {}",
            t!("config.summary.scheduler"),
            on_off(config.scheduler.enabled)
        ),
        format!(
            "   └─ {}: {} {}",
            t!("config.summary.interval"),
            config.scheduler.interval_minutes,
            t!("common.minutes")
        ),
        format!(
            "   └─ {}: {}",
            t!("config.summary.batch_size"),
            config.scheduler.batch_size
        ),
        format!(
            "📥 {}: {}",
            t!("config.summary.bulk_import_method"),
            config.bulk_import.preferred_method
        ),
        format!(
            "🌍 {}: {}",
            t!("config.summary.default_country"),
            config.wishlist.default_country_code
        ),
        format!(
            "💰 {}: {}",
            t!("config.summary.cache_prices"),
            yes_no(config.wishlist.cache_prices)
        ),
        format!(
            "🎯 {}: {}",
            t!("config.summary.auto_mapping"),
            yes_no(config.wishlist.auto_schedule_mapping_default)
        ),
    ];
    lines.join("\n")
}

// --- File layer ---

/// Table names of the sections in [`AppConfig`].
const SECTIONS: &[&str] = &[
    "database",
    "steam_api",
    "cheapshark",
    "scheduler",
    "bulk_import",
    "wishlist",
];

fn merge_document(document: &toml::Table, path: &Path) -> Result<AppConfig, ConfigError> {
    for name in document.keys().filter(|name| !SECTIONS.contains(&name.as_str())) {
        log::debug!("Ignoring unknown section '[{}]' in '{}'", name, path.display());
    }

    Ok(AppConfig {
        database: merge_section(document, "database", path)?,
        steam_api: merge_section(document, "steam_api", path)?,
        cheapshark: merge_section(document, "cheapshark", path)?,
        scheduler: merge_section(document, "scheduler", path)?,
        bulk_import: merge_section(document, "bulk_import", path)?,
        wishlist: merge_section(document, "wishlist", path)?,
    })
}

/// Builds section `S` from its defaults, then applies each field of the file's
/// `[name]` table one at a time. A field is accepted only if the section still
/// deserializes with it.
fn merge_section<S>(document: &toml::Table, name: &str, path: &Path) -> Result<S, ConfigError>
where
    S: Default + Serialize + DeserializeOwned,
{
    let toml::Value::Table(mut merged) = toml::Value::try_from(S::default())? else {
        return Ok(S::default());
    };

    match document.get(name) {
        None => {}
        Some(toml::Value::Table(fields)) => {
            for (key, value) in fields {
                if !merged.contains_key(key) {
                    log::debug!("Ignoring unknown field '{}.{}'", name, key);
                    continue;
                }
                let mut candidate = merged.clone();
                candidate.insert(key.clone(), value.clone());
                match toml::Value::Table(candidate.clone()).try_into::<S>() {
                    Ok(_) => merged = candidate,
                    Err(e) => log::warn!(
                        "Ignoring '{}.{}' in '{}': {}. Keeping the default.",
                        name,
                        key,
                        path.display(),
                        e
                    ),
                }
            }
        }
        Some(other) => log::warn!(
            "'{}' in '{}' is a {}, not a table. Keeping its defaults.",
            name,
            path.display(),
            other.type_str()
        ),
    }

    toml::Value::Table(merged)
        .try_into()
        .map_err(|e| ConfigError::TomlParse {
            path: path.display().to_string(),
            source: e,
        })
}

fn load_file_layer(path: &Path) -> AppConfig {
    if !path.exists() {
        let defaults = AppConfig::default();
        match persist(&defaults, path) {
            Ok(()) => log::info!("Default configuration created at '{}'", path.display()),
            Err(e) => log::warn!("{}. Continuing with in-memory defaults.", e),
        }
        return defaults;
    }

    match read_config_file(path) {
        Ok(config) => {
            log::info!("Configuration loaded from '{}'", path.display());
            config
        }
        Err(e) => {
            log::warn!("{}. Using default configuration.", e);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DatabaseConfig, SteamApiConfig, WishlistConfig};
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn no_env() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = resolve(&path, &no_env());

        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
        assert_eq!(read_config_file(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_first_run_writes_defaults_but_returns_env_layer() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let env = env_of(&[(ENV_DEFAULT_COUNTRY, "US")]);

        let config = resolve(&path, &env);

        assert_eq!(config.wishlist.default_country_code, "US");
        let on_disk = read_config_file(&path).unwrap();
        assert_eq!(on_disk.wishlist.default_country_code, "DE");
    }

    #[test]
    fn test_partial_file_overrides_only_present_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[database]
path = "custom.db"

[scheduler]
enabled = true
max_workers = 8
unknown_field = "ignored"

[elasticsearch]
host = "localhost"
"#,
        )
        .unwrap();

        let config = resolve(&path, &no_env());

        assert_eq!(config.database.path, "custom.db");
        assert!(config.database.backup_enabled);
        assert_eq!(config.database.cleanup_days, 30);
        assert!(config.scheduler.enabled);
        assert_eq!(config.scheduler.max_workers, 8);
        assert_eq!(config.scheduler.interval_minutes, 10);
        assert_eq!(config.steam_api, SteamApiConfig::default());
        assert_eq!(config.wishlist, WishlistConfig::default());
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults_and_is_left_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let garbage = "[database\npath = = 'broken'";
        fs::write(&path, garbage).unwrap();

        let config = resolve(&path, &no_env());

        assert_eq!(config, AppConfig::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), garbage);
    }

    #[test]
    fn test_wrong_field_type_keeps_default_and_other_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[database]
path = "mine.db"
cleanup_days = -3

[wishlist]
default_country_code = "US"

[scheduler]
interval_minutes = 15.0
batch_size = "10"
max_workers = 6
"#,
        )
        .unwrap();

        let config = resolve(&path, &no_env());

        assert_eq!(config.database.path, "mine.db");
        assert_eq!(config.database.cleanup_days, 30);
        assert_eq!(config.wishlist.default_country_code, "US");
        assert_eq!(config.scheduler.interval_minutes, 10);
        assert_eq!(config.scheduler.batch_size, 10);
        assert_eq!(config.scheduler.max_workers, 6);
    }

    #[test]
    fn test_section_that_is_not_a_table_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "database = 5\n[wishlist]\ncache_prices = false\n").unwrap();

        let config = read_config_file(&path).unwrap();

        assert_eq!(config.database, DatabaseConfig::default());
        assert!(!config.wishlist.cache_prices);
    }

    #[test]
    fn test_integer_is_accepted_for_float_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[steam_api]\nrate_limit_seconds = 2\n").unwrap();

        let config = read_config_file(&path).unwrap();

        assert_eq!(config.steam_api.rate_limit_seconds, 2.0);
    }

    #[test]
    fn test_persist_then_resolve_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let env = env_of(&[(ENV_STEAM_RATE_LIMIT, "2.25")]);

        let mut custom = resolve(&path, &env);
        custom.database.path = "elsewhere.db".to_string();
        custom.cheapshark.rate_limit_seconds = 3.75;
        custom.bulk_import.preferred_method = "steamspy".to_string();
        custom.wishlist.cache_expiry_hours = 12;

        persist(&custom, &path).unwrap();
        let reloaded = resolve(&path, &env);

        assert_eq!(reloaded, custom);
    }

    #[test]
    fn test_env_value_beats_file_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[wishlist]\ndefault_country_code = \"US\"\n[steam_api]\nrate_limit_seconds = 2.0\n",
        )
        .unwrap();
        let env = env_of(&[
            (ENV_DEFAULT_COUNTRY, "FR"),
            (ENV_STEAM_RATE_LIMIT, "0.25"),
            (ENV_DB_PATH, "/tmp/override.db"),
        ]);

        let config = resolve(&path, &env);

        assert_eq!(config.wishlist.default_country_code, "FR");
        assert_eq!(config.steam_api.rate_limit_seconds, 0.25);
        assert_eq!(config.database.path, "/tmp/override.db");
    }

    #[test]
    fn test_unparsable_numeric_env_keeps_previous_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[scheduler]\ninterval_minutes = 45\n[cheapshark]\nrate_limit_seconds = 4.5\n",
        )
        .unwrap();
        let env = env_of(&[
            (ENV_SCHEDULER_INTERVAL, "every hour"),
            (ENV_CHEAPSHARK_RATE_LIMIT, "fast"),
            (ENV_STEAM_RATE_LIMIT, "slow"),
        ]);

        let config = resolve(&path, &env);

        assert_eq!(config.scheduler.interval_minutes, 45);
        assert_eq!(config.cheapshark.rate_limit_seconds, 4.5);
        assert_eq!(config.steam_api.rate_limit_seconds, 0.5);
    }

    #[test]
    fn test_scheduler_enabled_override_always_applies() {
        let mut config = AppConfig::default();
        config.scheduler.enabled = true;

        apply_env_overrides(&mut config, &env_of(&[(ENV_SCHEDULER_ENABLED, "nope")]));
        assert!(!config.scheduler.enabled);

        apply_env_overrides(&mut config, &env_of(&[(ENV_SCHEDULER_ENABLED, "YES")]));
        assert!(config.scheduler.enabled);
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let mut config = AppConfig::default();
        apply_env_overrides(
            &mut config,
            &env_of(&[(ENV_DB_PATH, ""), (ENV_SCHEDULER_ENABLED, "")]),
        );
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_persist_reports_failure_instead_of_panicking() {
        let dir = TempDir::new().unwrap();
        // The target is a directory, so the write must fail.
        let result = persist(&AppConfig::default(), dir.path());
        assert!(matches!(result, Err(ConfigError::Write { .. })));
    }

    #[test]
    fn test_persist_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("config.toml");

        persist(&AppConfig::default(), &path).unwrap();

        assert_eq!(read_config_file(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_persisted_file_contains_every_section() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        persist(&AppConfig::default(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        for section in [
            "[database]",
            "[steam_api]",
            "[cheapshark]",
            "[scheduler]",
            "[bulk_import]",
            "[wishlist]",
        ] {
            assert!(content.contains(section), "missing {}", section);
        }
        assert!(content.contains("priority_boost_for_wishlist"));
    }

    #[test]
    fn test_describe_mentions_key_settings() {
        let mut config = AppConfig::default();
        config.database.path = "tracked.db".to_string();
        config.wishlist.default_country_code = "AT".to_string();

        let summary = describe(&config);

        assert!(summary.contains("tracked.db"));
        assert!(summary.contains("AT"));
        assert!(summary.contains(t!("config.summary.title")));
    }
}
