// src/core/menu_catalog.rs

//! The built-in menu catalog. Display strings come from the translation table;
//! handler identifiers are fixed and must match the dispatcher registry.

use crate::constants::{FLAG_CHARTS_ENABLED, FLAG_ES_AVAILABLE};
use crate::models::{MenuCategory, MenuOption};

fn option(name: &str, description: &str, handler: &str, icon: &str) -> MenuOption {
    MenuOption::new(name, description, handler).with_icon(icon)
}

/// Builds the six standard categories in display order.
pub fn default_catalog() -> Vec<MenuCategory> {
    let basic = MenuCategory::new(
        t!("menu.category.basic.name"),
        "🏠",
        t!("menu.category.basic.desc"),
    )
    .with_option(option(
        t!("menu.option.add_app.name"),
        t!("menu.option.add_app.desc"),
        "menu_add_app_manually",
        "📱",
    ))
    .with_option(option(
        t!("menu.option.import_wishlist.name"),
        t!("menu.option.import_wishlist.desc"),
        "menu_import_wishlist",
        "📥",
    ))
    .with_option(option(
        t!("menu.option.current_prices.name"),
        t!("menu.option.current_prices.desc"),
        "menu_show_current_prices",
        "🔍",
    ))
    .with_option(option(
        t!("menu.option.best_deals.name"),
        t!("menu.option.best_deals.desc"),
        "menu_show_best_deals",
        "📊",
    ))
    .with_option(option(
        t!("menu.option.price_history.name"),
        t!("menu.option.price_history.desc"),
        "menu_show_price_history",
        "📈",
    ))
    .with_option(option(
        t!("menu.option.update_prices.name"),
        t!("menu.option.update_prices.desc"),
        "menu_update_prices",
        "🔄",
    ));

    let automation = MenuCategory::new(
        t!("menu.category.automation.name"),
        "🚀",
        t!("menu.category.automation.desc"),
    )
    .with_option(option(
        t!("menu.option.toggle_scheduler.name"),
        t!("menu.option.toggle_scheduler.desc"),
        "menu_toggle_scheduler",
        "🚀",
    ))
    .with_option(option(
        t!("menu.option.update_names.name"),
        t!("menu.option.update_names.desc"),
        "menu_update_names_all_apps",
        "📝",
    ));

    let management = MenuCategory::new(
        t!("menu.category.management.name"),
        "🎮",
        t!("menu.category.management.desc"),
    )
    .with_option(option(
        t!("menu.option.manage_apps.name"),
        t!("menu.option.manage_apps.desc"),
        "menu_manage_apps",
        "📋",
    ))
    .with_option(option(
        t!("menu.option.remove_apps.name"),
        t!("menu.option.remove_apps.desc"),
        "menu_remove_apps",
        "🗑️",
    ))
    .with_option(option(
        t!("menu.option.csv_export.name"),
        t!("menu.option.csv_export.desc"),
        "menu_csv_export",
        "📄",
    ))
    .with_option(option(
        t!("menu.option.detailed_statistics.name"),
        t!("menu.option.detailed_statistics.desc"),
        "menu_detailed_statistics",
        "📊",
    ));

    let charts = MenuCategory::new(
        t!("menu.category.charts.name"),
        "📊",
        t!("menu.category.charts.desc"),
    )
    .with_option(
        option(
            t!("menu.option.show_charts.name"),
            t!("menu.option.show_charts.desc"),
            "menu_show_charts",
            "📈",
        )
        .requires(FLAG_CHARTS_ENABLED),
    )
    .with_option(
        option(
            t!("menu.option.update_charts.name"),
            t!("menu.option.update_charts.desc"),
            "menu_update_charts_complete",
            "🔄",
        )
        .requires(FLAG_CHARTS_ENABLED),
    )
    .with_option(
        option(
            t!("menu.option.charts_deals.name"),
            t!("menu.option.charts_deals.desc"),
            "menu_charts_deals",
            "🎯",
        )
        .requires(FLAG_CHARTS_ENABLED),
    )
    .with_option(
        option(
            t!("menu.option.charts_statistics.name"),
            t!("menu.option.charts_statistics.desc"),
            "menu_charts_statistics",
            "📊",
        )
        .requires(FLAG_CHARTS_ENABLED),
    )
    .with_option(
        option(
            t!("menu.option.charts_automation.name"),
            t!("menu.option.charts_automation.desc"),
            "menu_charts_automation",
            "🤖",
        )
        .requires(FLAG_CHARTS_ENABLED),
    )
    .with_option(
        option(
            t!("menu.option.batch_charts.name"),
            t!("menu.option.batch_charts.desc"),
            "menu_batch_charts_update",
            "📦",
        )
        .requires(FLAG_CHARTS_ENABLED),
    );

    let elasticsearch = MenuCategory::new(
        t!("menu.category.elasticsearch.name"),
        "🔍",
        t!("menu.category.elasticsearch.desc"),
    )
    .with_option(
        option(
            t!("menu.option.es_export.name"),
            t!("menu.option.es_export.desc"),
            "menu_elasticsearch_export",
            "📤",
        )
        .requires(FLAG_ES_AVAILABLE),
    )
    .with_option(
        option(
            t!("menu.option.es_dashboard.name"),
            t!("menu.option.es_dashboard.desc"),
            "menu_elasticsearch_dashboard",
            "📊",
        )
        .requires(FLAG_ES_AVAILABLE),
    )
    .with_option(
        option(
            t!("menu.option.es_analytics.name"),
            t!("menu.option.es_analytics.desc"),
            "menu_elasticsearch_analytics",
            "🔬",
        )
        .requires(FLAG_ES_AVAILABLE),
    )
    .with_option(
        option(
            t!("menu.option.es_config.name"),
            t!("menu.option.es_config.desc"),
            "menu_elasticsearch_config",
            "⚙️",
        )
        .requires(FLAG_ES_AVAILABLE),
    )
    .with_option(
        option(
            t!("menu.option.es_sync.name"),
            t!("menu.option.es_sync.desc"),
            "menu_elasticsearch_sync",
            "🔄",
        )
        .requires(FLAG_ES_AVAILABLE),
    );

    let system = MenuCategory::new(
        t!("menu.category.system.name"),
        "🛠️",
        t!("menu.category.system.desc"),
    )
    .with_option(option(
        t!("menu.option.system_settings.name"),
        t!("menu.option.system_settings.desc"),
        "menu_system_settings",
        "⚙️",
    ))
    .with_option(option(
        t!("menu.option.system_info.name"),
        t!("menu.option.system_info.desc"),
        "menu_system_info",
        "📊",
    ))
    .with_option(option(
        t!("menu.option.backup_export.name"),
        t!("menu.option.backup_export.desc"),
        "menu_backup_export",
        "💾",
    ))
    .with_option(option(
        t!("menu.option.backup_import.name"),
        t!("menu.option.backup_import.desc"),
        "menu_backup_import",
        "📥",
    ))
    .with_option(option(
        t!("menu.option.health_check.name"),
        t!("menu.option.health_check.desc"),
        "menu_health_check",
        "🔍",
    ))
    .with_option(option(
        t!("menu.option.clean_database.name"),
        t!("menu.option.clean_database.desc"),
        "menu_clean_database",
        "🧹",
    ))
    .with_option(option(
        t!("menu.option.dev_tools.name"),
        t!("menu.option.dev_tools.desc"),
        "menu_dev_tools",
        "🔧",
    ));

    vec![basic, automation, management, charts, elasticsearch, system]
}
