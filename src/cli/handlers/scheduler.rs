// src/cli/handlers/scheduler.rs

use crate::{
    constants::ENV_SCHEDULER_ENABLED,
    core::env_source::{EnvSource, ProcessEnv},
    state::AppSession,
};
use anyhow::{Context, Result};
use colored::*;

/// Flips `scheduler.enabled` in the configuration file.
pub fn handle(_handler: &str, session: &mut AppSession) -> Result<()> {
    let enabled = toggle(session, &ProcessEnv)?;

    let status = if enabled {
        t!("common.enabled").green()
    } else {
        t!("common.disabled").yellow()
    };
    println!("\n🚀 {}: {}", t!("config.summary.scheduler"), status);
    Ok(())
}

/// Persists the flipped scheduler switch and returns the effective value after
/// re-resolution.
fn toggle(session: &mut AppSession, env: &impl EnvSource) -> Result<bool> {
    let mut updated = session.config().clone();
    updated.scheduler.enabled = !updated.scheduler.enabled;
    let requested = updated.scheduler.enabled;

    session
        .replace_config(&updated, env)
        .context(t!("handler.scheduler.save_failed"))?;

    let effective = session.config().scheduler.enabled;
    if effective != requested {
        println!(
            "{}",
            format!(t!("handler.scheduler.env_pinned"), var = ENV_SCHEDULER_ENABLED).yellow()
        );
    }
    Ok(effective)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config_resolver::read_config_file;
    use std::collections::{BTreeMap, HashMap};
    use tempfile::tempdir;

    #[test]
    fn test_toggle_flips_and_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let env: HashMap<String, String> = HashMap::new();
        let mut session = AppSession::load(&path, &env, BTreeMap::new());

        assert!(toggle(&mut session, &env).unwrap());
        assert!(read_config_file(&path).unwrap().scheduler.enabled);

        assert!(!toggle(&mut session, &env).unwrap());
        assert!(!read_config_file(&path).unwrap().scheduler.enabled);
    }

    #[test]
    fn test_environment_override_still_wins_after_toggle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let env: HashMap<String, String> =
            HashMap::from([(ENV_SCHEDULER_ENABLED.to_string(), "no".to_string())]);
        let mut session = AppSession::load(&path, &env, BTreeMap::new());

        let effective = toggle(&mut session, &env).unwrap();

        assert!(!effective);
        assert!(read_config_file(&path).unwrap().scheduler.enabled);
    }
}
