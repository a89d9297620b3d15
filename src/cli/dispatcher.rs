// src/cli/dispatcher.rs

use anyhow::Result;
use thiserror::Error;

use crate::{cli::handlers, state::AppSession};

/// Errors raised while routing a menu choice to its action.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DispatchError {
    #[error("No action is registered for handler '{0}'.")]
    UnknownHandler(String),
}

// --- Handler Definition and Registry ---

/// Binds a menu handler identifier to the function that performs it.
/// The handler receives its own identifier so shared handlers know what was chosen.
struct HandlerDefinition {
    name: &'static str,
    handler: fn(&str, &mut AppSession) -> Result<()>,
}

/// The single source of truth for every action reachable from the menu.
static HANDLER_REGISTRY: &[HandlerDefinition] = &[
    // Basic
    HandlerDefinition {
        name: "menu_add_app_manually",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_import_wishlist",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_show_current_prices",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_show_best_deals",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_show_price_history",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_update_prices",
        handler: handlers::external::handle,
    },
    // Automation
    HandlerDefinition {
        name: "menu_toggle_scheduler",
        handler: handlers::scheduler::handle,
    },
    HandlerDefinition {
        name: "menu_update_names_all_apps",
        handler: handlers::external::handle,
    },
    // Management
    HandlerDefinition {
        name: "menu_manage_apps",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_remove_apps",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_csv_export",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_detailed_statistics",
        handler: handlers::external::handle,
    },
    // Charts
    HandlerDefinition {
        name: "menu_show_charts",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_update_charts_complete",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_charts_deals",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_charts_statistics",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_charts_automation",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_batch_charts_update",
        handler: handlers::external::handle,
    },
    // Search backend
    HandlerDefinition {
        name: "menu_elasticsearch_export",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_elasticsearch_dashboard",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_elasticsearch_analytics",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_elasticsearch_config",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_elasticsearch_sync",
        handler: handlers::external::handle,
    },
    // System
    HandlerDefinition {
        name: "menu_system_settings",
        handler: handlers::settings::handle,
    },
    HandlerDefinition {
        name: "menu_system_info",
        handler: handlers::info::handle,
    },
    HandlerDefinition {
        name: "menu_backup_export",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_backup_import",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_health_check",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_clean_database",
        handler: handlers::external::handle,
    },
    HandlerDefinition {
        name: "menu_dev_tools",
        handler: handlers::external::handle,
    },
];

fn find_handler(name: &str) -> Option<&'static HandlerDefinition> {
    HANDLER_REGISTRY.iter().find(|def| def.name == name)
}

/// Whether `name` has a registered action.
pub fn is_registered(name: &str) -> bool {
    find_handler(name).is_some()
}

/// Runs the action registered for `name`.
pub fn dispatch(name: &str, session: &mut AppSession) -> Result<()> {
    log::debug!("Dispatching handler '{}'", name);

    let definition =
        find_handler(name).ok_or_else(|| DispatchError::UnknownHandler(name.to_string()))?;
    (definition.handler)(name, session)
}
