// src/cli/handlers/settings.rs

use crate::{
    core::{config_resolver, env_source::ProcessEnv, env_source::parse_config_bool},
    models::AppConfig,
    state::AppSession,
};
use anyhow::{Context, Result, anyhow};
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

/// A setting that can be edited from the menu.
struct EditableSetting {
    label: &'static str,
    current: fn(&AppConfig) -> String,
    apply: fn(&mut AppConfig, &str) -> Result<()>,
}

static EDITABLE_SETTINGS: &[EditableSetting] = &[
    EditableSetting {
        label: t!("config.summary.database"),
        current: |c| c.database.path.clone(),
        apply: |c, v| {
            c.database.path = non_empty(v)?;
            Ok(())
        },
    },
    EditableSetting {
        label: t!("config.summary.steam_rate_limit"),
        current: |c| c.steam_api.rate_limit_seconds.to_string(),
        apply: |c, v| {
            c.steam_api.rate_limit_seconds = parse_seconds(v)?;
            Ok(())
        },
    },
    EditableSetting {
        label: t!("config.summary.cheapshark_rate_limit"),
        current: |c| c.cheapshark.rate_limit_seconds.to_string(),
        apply: |c, v| {
            c.cheapshark.rate_limit_seconds = parse_seconds(v)?;
            Ok(())
        },
    },
    EditableSetting {
        label: t!("config.summary.interval"),
        current: |c| c.scheduler.interval_minutes.to_string(),
        apply: |c, v| {
            c.scheduler.interval_minutes = v.trim().parse()?;
            Ok(())
        },
    },
    EditableSetting {
        label: t!("config.summary.batch_size"),
        current: |c| c.scheduler.batch_size.to_string(),
        apply: |c, v| {
            c.scheduler.batch_size = v.trim().parse()?;
            Ok(())
        },
    },
    EditableSetting {
        label: t!("config.summary.default_country"),
        current: |c| c.wishlist.default_country_code.clone(),
        apply: |c, v| {
            c.wishlist.default_country_code = non_empty(v)?.to_uppercase();
            Ok(())
        },
    },
    EditableSetting {
        label: t!("config.summary.cache_prices"),
        current: |c| c.wishlist.cache_prices.to_string(),
        apply: |c, v| {
            c.wishlist.cache_prices = parse_config_bool(v.trim());
            Ok(())
        },
    },
];

fn non_empty(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow!(t!("handler.settings.empty_value")));
    }
    Ok(trimmed.to_string())
}

fn parse_seconds(value: &str) -> Result<f64> {
    let seconds: f64 = value.trim().parse()?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(anyhow!(t!("handler.settings.negative_value")));
    }
    Ok(seconds)
}

/// Shows the configuration summary and optionally edits a single setting.
pub fn handle(_handler: &str, session: &mut AppSession) -> Result<()> {
    println!("\n{}", config_resolver::describe(session.config()));

    let theme = ColorfulTheme::default();
    if !Confirm::with_theme(&theme)
        .with_prompt(t!("handler.settings.confirm_edit"))
        .default(false)
        .interact()?
    {
        return Ok(());
    }

    let labels: Vec<&str> = EDITABLE_SETTINGS.iter().map(|s| s.label).collect();
    let selection = Select::with_theme(&theme)
        .with_prompt(t!("handler.settings.select_prompt"))
        .items(labels.as_slice())
        .default(0)
        .interact()?;
    let setting = EDITABLE_SETTINGS
        .get(selection)
        .ok_or_else(|| anyhow!("Invalid selection {}", selection))?;

    let raw: String = Input::with_theme(&theme)
        .with_prompt(setting.label)
        .default((setting.current)(session.config()))
        .interact_text()?;

    let updated = edited(session.config(), setting, &raw)?;
    session
        .replace_config(&updated, &ProcessEnv)
        .context(t!("handler.settings.save_failed"))?;

    println!("✅ {}", t!("handler.settings.saved"));
    Ok(())
}

/// Returns a copy of `config` with `raw` applied to `setting`. The session's own
/// snapshot is left alone.
fn edited(config: &AppConfig, setting: &EditableSetting, raw: &str) -> Result<AppConfig> {
    let mut updated = config.clone();
    (setting.apply)(&mut updated, raw)
        .with_context(|| format!(t!("handler.settings.invalid_value"), value = raw))?;
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setting(label: &str) -> &'static EditableSetting {
        EDITABLE_SETTINGS.iter().find(|s| s.label == label).unwrap()
    }

    #[test]
    fn test_edit_integer_setting() {
        let config = AppConfig::default();
        let updated = edited(&config, setting(t!("config.summary.interval")), " 30 ").unwrap();

        assert_eq!(updated.scheduler.interval_minutes, 30);
        assert_eq!(config.scheduler.interval_minutes, 10);
    }

    #[test]
    fn test_edit_rejects_bad_values() {
        let config = AppConfig::default();
        assert!(edited(&config, setting(t!("config.summary.interval")), "soon").is_err());
        assert!(edited(&config, setting(t!("config.summary.steam_rate_limit")), "-1").is_err());
        assert!(edited(&config, setting(t!("config.summary.database")), "   ").is_err());
    }

    #[test]
    fn test_edit_country_is_uppercased() {
        let updated = edited(
            &AppConfig::default(),
            setting(t!("config.summary.default_country")),
            "us",
        )
        .unwrap();
        assert_eq!(updated.wishlist.default_country_code, "US");
    }

    #[test]
    fn test_current_values_match_config() {
        let config = AppConfig::default();
        for s in EDITABLE_SETTINGS {
            let roundtrip = edited(&config, s, &(s.current)(&config)).unwrap();
            assert_eq!(roundtrip, config, "setting '{}'", s.label);
        }
    }
}
