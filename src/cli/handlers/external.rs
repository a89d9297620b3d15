// src/cli/handlers/external.rs

use crate::state::AppSession;
use anyhow::Result;
use colored::*;

/// Fallback for actions whose business logic is provided by other components
/// (price fetchers, chart services, backups). Reports the action and returns.
pub fn handle(handler: &str, session: &mut AppSession) -> Result<()> {
    let label = session
        .menu()
        .categories()
        .iter()
        .flat_map(|c| &c.options)
        .find(|o| o.handler == handler)
        .map(|o| o.name.clone())
        .unwrap_or_else(|| handler.to_string());

    log::info!("Action '{}' requested but not available in this build", handler);
    println!(
        "\n{}",
        format!(t!("handler.external.unavailable"), action = label).yellow()
    );
    Ok(())
}
