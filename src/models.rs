// src/models.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// --- CONFIGURATION MODELS (what is read from and written to `config.toml`) ---
//
// Every section derives `Default` with the built-in values and is deserialized
// with `#[serde(default)]`, so a field missing from the file keeps its default
// and an unknown field is simply ignored.

/// Local database settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
    pub backup_enabled: bool,
    pub backup_interval_hours: u32,
    pub cleanup_days: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "steam_wishlist.db".to_string(),
            backup_enabled: true,
            backup_interval_hours: 24,
            cleanup_days: 30,
        }
    }
}

/// Primary price source (Steam Web API and store API).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SteamApiConfig {
    pub base_url: String,
    pub store_url: String,
    pub rate_limit_seconds: f64,
    pub timeout_seconds: u32,
    pub retry_attempts: u32,
}

impl Default for SteamApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.steampowered.com".to_string(),
            store_url: "https://store.steampowered.com/api".to_string(),
            rate_limit_seconds: 0.5,
            timeout_seconds: 15,
            retry_attempts: 3,
        }
    }
}

/// Secondary, deal-aggregating price source.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CheapSharkConfig {
    pub base_url: String,
    pub rate_limit_seconds: f64,
    pub timeout_seconds: u32,
    pub retry_attempts: u32,
    pub max_consecutive_failures: u32,
}

impl Default for CheapSharkConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.cheapshark.com/api/1.0".to_string(),
            rate_limit_seconds: 1.5,
            timeout_seconds: 15,
            retry_attempts: 2,
            max_consecutive_failures: 5,
        }
    }
}

/// Background scheduler settings. The scheduler process itself lives elsewhere.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SchedulerConfig {
    pub enabled: bool,
    pub batch_size: u32,
    pub interval_minutes: u32,
    pub cleanup_interval_hours: u32,
    pub max_workers: u32,
    pub priority_boost_for_wishlist: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            batch_size: 10,
            interval_minutes: 10,
            cleanup_interval_hours: 24,
            max_workers: 3,
            priority_boost_for_wishlist: 3,
        }
    }
}

/// Bulk catalog import settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BulkImportConfig {
    /// One of `steam_api_v2`, `steam_store_service`, `steamspy`.
    pub preferred_method: String,
    pub batch_size: u32,
    pub enable_steamspy: bool,
    pub steamspy_max_pages: u32,
}

impl Default for BulkImportConfig {
    fn default() -> Self {
        Self {
            preferred_method: "steam_store_service".to_string(),
            batch_size: 1000,
            enable_steamspy: false,
            steamspy_max_pages: 10,
        }
    }
}

/// Wishlist processing defaults.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WishlistConfig {
    pub default_country_code: String,
    pub include_steam_prices_default: bool,
    pub include_cheapshark_default: bool,
    pub auto_schedule_mapping_default: bool,
    pub cache_prices: bool,
    pub cache_expiry_hours: u32,
}

impl Default for WishlistConfig {
    fn default() -> Self {
        Self {
            default_country_code: "DE".to_string(),
            include_steam_prices_default: true,
            include_cheapshark_default: true,
            auto_schedule_mapping_default: true,
            cache_prices: true,
            cache_expiry_hours: 6,
        }
    }
}

/// The fully merged configuration snapshot.
///
/// A snapshot is always complete: each layer (defaults, file, environment) only
/// ever replaces values, it never removes them. Callers that want a different
/// configuration clone a snapshot, change the clone and persist it; they never
/// mutate the snapshot other code is reading.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub steam_api: SteamApiConfig,
    pub cheapshark: CheapSharkConfig,
    pub scheduler: SchedulerConfig,
    pub bulk_import: BulkImportConfig,
    pub wishlist: WishlistConfig,
}

// --- MENU MODELS ---

/// A single selectable entry of the command menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub name: String,
    pub description: String,
    pub icon: String,
    /// Opaque identifier of the action this option dispatches to.
    pub handler: String,
    /// Flag names that must all be `true` for the option to be visible.
    pub requirements: Vec<String>,
}

impl MenuOption {
    /// Creates an option without requirements and with the generic tool icon.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            icon: "🔧".to_string(),
            handler: handler.into(),
            requirements: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn requires(mut self, flag: impl Into<String>) -> Self {
        self.requirements.push(flag.into());
        self
    }

    /// An option is visible when every requirement maps to `true`.
    /// Flags missing from `flags` count as `false`.
    pub fn is_visible(&self, flags: &BTreeMap<String, bool>) -> bool {
        self.requirements
            .iter()
            .all(|req| flags.get(req).copied().unwrap_or(false))
    }
}

/// An ordered group of options, displayed under a common header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCategory {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub options: Vec<MenuOption>,
}

impl MenuCategory {
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            description: description.into(),
            options: Vec::new(),
        }
    }

    /// Builder-style variant of pushing onto `options`, used to declare catalogs.
    pub fn with_option(mut self, option: MenuOption) -> Self {
        self.options.push(option);
        self
    }

    /// `(index, option)` pairs visible under `flags`, in declaration order.
    pub fn visible_options<'a>(
        &'a self,
        flags: &'a BTreeMap<String, bool>,
    ) -> impl Iterator<Item = (usize, &'a MenuOption)> + 'a {
        self.options
            .iter()
            .enumerate()
            .filter(move |(_, option)| option.is_visible(flags))
    }
}

/// One row of the numbering table. Its number is its position in the table plus one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedEntry {
    pub category_index: usize,
    pub option_index: usize,
    pub option_name: String,
    pub handler: String,
}

/// The outcome of resolving raw user input against the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Input `"0"`: leave the interactive loop.
    Exit,
    /// A numbered option was selected; carries its handler identifier.
    Handler(String),
    /// Anything else. The caller should re-prompt.
    Invalid,
}

/// Lifecycle of a [`crate::core::menu::CommandMenu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuState {
    /// Catalog built, no mutator called yet, numbering table empty.
    Uninitialized,
    /// At least one mutator ran; the numbering table reflects current flags.
    Ready,
}

/// Read-only introspection of the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuStatistics {
    pub total_categories: usize,
    pub available_categories: usize,
    pub total_options: usize,
    pub available_options: usize,
    pub current_flags: BTreeMap<String, bool>,
}
