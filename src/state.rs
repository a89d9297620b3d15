// src/state.rs

use crate::core::config_resolver::{self, ConfigError};
use crate::core::env_source::EnvSource;
use crate::core::menu::CommandMenu;
use crate::models::AppConfig;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Everything an interactive session owns: where the configuration lives, the
/// current resolved snapshot and the command menu.
///
/// Built once in `main` and handed to handlers as `&mut`. There is no global
/// instance.
#[derive(Debug)]
pub struct AppSession {
    config_path: PathBuf,
    config: AppConfig,
    menu: CommandMenu,
}

impl AppSession {
    /// Resolves the configuration at `config_path` and builds the built-in menu
    /// with `flags` applied, so the menu starts out `Ready`.
    pub fn load(
        config_path: impl Into<PathBuf>,
        env: &impl EnvSource,
        flags: BTreeMap<String, bool>,
    ) -> Self {
        Self::with_menu(config_path, env, CommandMenu::new(), flags)
    }

    /// Like [`AppSession::load`] but over a caller-supplied menu.
    pub fn with_menu(
        config_path: impl Into<PathBuf>,
        env: &impl EnvSource,
        mut menu: CommandMenu,
        flags: BTreeMap<String, bool>,
    ) -> Self {
        let config_path = config_path.into();
        let config = config_resolver::resolve(&config_path, env);
        menu.update_flags(flags);
        Self {
            config_path,
            config,
            menu,
        }
    }

    /// The current resolved snapshot.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Where the snapshot is read from and saved to.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The session's command menu.
    pub fn menu(&self) -> &CommandMenu {
        &self.menu
    }

    /// Re-resolves the snapshot from file and environment.
    pub fn reload_config(&mut self, env: &impl EnvSource) {
        self.config = config_resolver::resolve(&self.config_path, env);
    }

    /// Persists `config` and then re-resolves, so the session sees exactly what
    /// a fresh start would (environment overrides included).
    ///
    /// On a write failure the current snapshot is kept.
    pub fn replace_config(
        &mut self,
        config: &AppConfig,
        env: &impl EnvSource,
    ) -> Result<(), ConfigError> {
        config_resolver::persist(config, &self.config_path)?;
        self.reload_config(env);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ENV_DB_PATH, FLAG_CHARTS_ENABLED};
    use crate::models::MenuState;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_load_creates_file_and_readies_menu() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let env: HashMap<String, String> = HashMap::new();

        let session = AppSession::load(&path, &env, BTreeMap::new());

        assert!(path.exists());
        assert_eq!(session.config(), &AppConfig::default());
        assert_eq!(session.menu().state(), MenuState::Ready);
        assert_eq!(session.menu().max_option_number(), 19);
    }

    #[test]
    fn test_flags_are_applied_on_load() {
        let dir = tempdir().unwrap();
        let env: HashMap<String, String> = HashMap::new();
        let flags = BTreeMap::from([(FLAG_CHARTS_ENABLED.to_string(), true)]);

        let session = AppSession::load(dir.path().join("config.toml"), &env, flags);

        assert_eq!(session.menu().max_option_number(), 25);
    }

    #[test]
    fn test_replace_config_persists_then_reapplies_environment() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut env: HashMap<String, String> = HashMap::new();
        let mut session = AppSession::load(&path, &env, BTreeMap::new());

        let mut updated = session.config().clone();
        updated.scheduler.enabled = true;
        updated.database.path = "from_edit.db".to_string();
        env.insert(ENV_DB_PATH.to_string(), "from_env.db".to_string());

        session.replace_config(&updated, &env).unwrap();

        assert!(session.config().scheduler.enabled);
        assert_eq!(session.config().database.path, "from_env.db");
        let on_disk = config_resolver::read_config_file(&path).unwrap();
        assert_eq!(on_disk.database.path, "from_edit.db");
    }

    #[test]
    fn test_replace_config_failure_keeps_snapshot() {
        let dir = tempdir().unwrap();
        // A directory where the file should be makes the write fail.
        let path = dir.path().join("config.toml");
        std::fs::create_dir(&path).unwrap();
        let env: HashMap<String, String> = HashMap::new();
        let mut session = AppSession::load(&path, &env, BTreeMap::new());

        let mut updated = session.config().clone();
        updated.scheduler.enabled = true;

        assert!(session.replace_config(&updated, &env).is_err());
        assert!(!session.config().scheduler.enabled);
    }
}
