// src/cli/handlers/info.rs

use crate::constants::BUILD_LANGUAGE;
use crate::{models::MenuStatistics, state::AppSession};
use anyhow::Result;
use colored::*;

/// Shows where the configuration lives and what the menu currently offers.
pub fn handle(_handler: &str, session: &mut AppSession) -> Result<()> {
    println!("\n--- {} ---", t!("info.header").yellow());
    for line in session_lines(session) {
        println!("{}", line);
    }
    print_statistics(&session.menu().statistics());
    Ok(())
}

fn session_lines(session: &AppSession) -> Vec<String> {
    vec![
        format!(
            "  {:<22} {}",
            t!("info.label.config_file"),
            session.config_path().display()
        ),
        format!(
            "  {:<22} {}",
            t!("info.label.database"),
            session.config().database.path
        ),
        format!("  {:<22} {}", t!("info.label.language"), BUILD_LANGUAGE),
    ]
}

/// Prints menu statistics as aligned labelled lines.
pub fn print_statistics(stats: &MenuStatistics) {
    for line in statistics_lines(stats) {
        println!("{}", line);
    }
}

fn statistics_lines(stats: &MenuStatistics) -> Vec<String> {
    let mut lines = vec![
        format!(
            "  {:<22} {}/{}",
            t!("info.label.categories"),
            stats.available_categories,
            stats.total_categories
        ),
        format!(
            "  {:<22} {}/{}",
            t!("info.label.options"),
            stats.available_options,
            stats.total_options
        ),
    ];

    if stats.current_flags.is_empty() {
        lines.push(format!("  {:<22} -", t!("info.label.flags")));
    } else {
        lines.push(format!("  {}", t!("info.label.flags")));
        for (name, enabled) in &stats.current_flags {
            let mark = if *enabled { "✅" } else { "❌" };
            lines.push(format!("    {} {}", mark, name));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};
    use tempfile::tempdir;

    #[test]
    fn test_session_lines_name_file_database_and_language() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let env: HashMap<String, String> = HashMap::new();
        let session = AppSession::load(&path, &env, BTreeMap::new());

        let lines = session_lines(&session);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(&path.display().to_string()));
        assert!(lines[1].ends_with(&session.config().database.path));
        assert!(lines[2].ends_with(BUILD_LANGUAGE));
        assert!(!BUILD_LANGUAGE.is_empty());
    }

    #[test]
    fn test_statistics_lines_list_flags_in_order() {
        let stats = MenuStatistics {
            total_categories: 6,
            available_categories: 4,
            total_options: 30,
            available_options: 19,
            current_flags: BTreeMap::from([
                ("es_available".to_string(), false),
                ("charts_enabled".to_string(), true),
            ]),
        };

        let lines = statistics_lines(&stats);

        assert!(lines[0].ends_with("4/6"));
        assert!(lines[1].ends_with("19/30"));
        assert_eq!(lines[3], "    ✅ charts_enabled");
        assert_eq!(lines[4], "    ❌ es_available");
    }

    #[test]
    fn test_statistics_lines_without_flags() {
        let stats = MenuStatistics {
            total_categories: 0,
            available_categories: 0,
            total_options: 0,
            available_options: 0,
            current_flags: BTreeMap::new(),
        };

        let lines = statistics_lines(&stats);
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with('-'));
    }
}
