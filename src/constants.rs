// src/constants.rs

/// Default name of the persisted configuration file (relative to the working directory).
pub const DEFAULT_CONFIG_FILENAME: &str = "config.toml";

// --- Configuration overrides (applied after the file layer) ---

/// Overrides `database.path`.
pub const ENV_DB_PATH: &str = "STEAM_WL_DB_PATH";
/// Overrides `steam_api.rate_limit_seconds`.
pub const ENV_STEAM_RATE_LIMIT: &str = "STEAM_WL_RATE_LIMIT";
/// Overrides `cheapshark.rate_limit_seconds`.
pub const ENV_CHEAPSHARK_RATE_LIMIT: &str = "CHEAPSHARK_RATE_LIMIT";
/// Overrides `scheduler.enabled`.
pub const ENV_SCHEDULER_ENABLED: &str = "STEAM_WL_SCHEDULER_ENABLED";
/// Overrides `scheduler.interval_minutes`.
pub const ENV_SCHEDULER_INTERVAL: &str = "STEAM_WL_SCHEDULER_INTERVAL";
/// Overrides `wishlist.default_country_code`.
pub const ENV_DEFAULT_COUNTRY: &str = "STEAM_WL_DEFAULT_COUNTRY";

// --- Menu rendering (read on every render) ---

pub const ENV_SHOW_MENU_DESCRIPTIONS: &str = "SHOW_MENU_DESCRIPTIONS";
pub const ENV_MENU_STYLE: &str = "MENU_STYLE";
pub const ENV_SHOW_CATEGORY_DESCRIPTIONS: &str = "SHOW_CATEGORY_DESCRIPTIONS";
pub const ENV_SHOW_OPTION_DESCRIPTIONS: &str = "SHOW_OPTION_DESCRIPTIONS";
pub const ENV_MENU_DESCRIPTION_SYMBOL: &str = "MENU_DESCRIPTION_SYMBOL";
pub const ENV_MENU_DESCRIPTION_INDENT: &str = "MENU_DESCRIPTION_INDENT";
pub const ENV_SHOW_MENU_DEBUG: &str = "SHOW_MENU_DEBUG";

// --- Feature flags ---

/// Presence of a Steam Web API key unlocks the charts integration.
pub const ENV_STEAM_API_KEY: &str = "STEAM_API_KEY";

pub const FLAG_CHARTS_ENABLED: &str = "charts_enabled";
pub const FLAG_ES_AVAILABLE: &str = "es_available";

// --- Menu dispatch ---

/// The only input that is never assigned to a real option.
pub const EXIT_CHOICE: &str = "0";

/// Handler identifier returned for [`EXIT_CHOICE`]; terminates the interactive loop.
pub const EXIT_HANDLER: &str = "exit";

// --- Build ---

/// Language the translation table was generated for, as chosen by `build.rs`.
pub const BUILD_LANGUAGE: &str = env!("STEAMWATCH_LANG_EFFECTIVE");

// --- Logging ---

/// `env_logger` filter for the binary. Defaults to `warn`.
pub const ENV_LOG_FILTER: &str = "STEAMWATCH_LOG";
