// src/cli/mod.rs

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

use crate::{
    constants::{DEFAULT_CONFIG_FILENAME, EXIT_HANDLER},
    core::{config_resolver, env_source::ProcessEnv, feature_flags},
    models::Choice,
    state::AppSession,
};

pub mod dispatcher;
pub mod handlers;

/// Builds the color-aware help string at runtime.
fn build_help_string() -> &'static str {
    // Replaces semantic tags like `<title>` in the translated template with ANSI styles.
    let use_colors = colored::control::SHOULD_COLORIZE.should_colorize();

    let template = t!("cli.help.template");

    let title = if use_colors { "\x1b[1;33m" } else { "" }; // Bold Yellow
    let hl = if use_colors { "\x1b[1;36m" } else { "" }; // Bold Cyan
    let dim = if use_colors { "\x1b[2m" } else { "" };
    let reset = if use_colors { "\x1b[0m" } else { "" };

    let formatted_string = template
        .replace("<title>", title)
        .replace("</title>", reset)
        .replace("<hl>", hl)
        .replace("</hl>", reset)
        .replace("<dim>", dim)
        .replace("</dim>", reset);

    Box::leak(formatted_string.into_boxed_str())
}

/// steamwatch: wishlist price tracker settings and command menu.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    help_template = { build_help_string() },
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Configuration file; created with defaults if missing. `~` and `$VAR` are expanded.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: String,

    /// Force a feature flag, e.g. `--flag es_available` or `--flag charts_enabled=false`.
    #[arg(long = "flag", value_name = "NAME[=BOOL]")]
    pub flags: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive menu loop (default).
    Menu,
    /// Print the configuration summary.
    Config,
    /// Print menu statistics.
    Stats {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Resolve one menu input and run its action.
    Choose {
        /// The number as it would be typed at the prompt.
        input: String,
    },
}

/// Entry point for the binary: builds the session and runs the selected command.
pub fn run(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let expanded = shellexpand::full(&cli.config)
        .with_context(|| format!(t!("cli.error.config_path"), path = cli.config))?;
    let config_path = PathBuf::from(expanded.as_ref());

    let flags = feature_flags::resolve(&ProcessEnv, &cli.flags)?;
    let mut session = AppSession::load(config_path, &ProcessEnv, flags);

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => run_interactive(&mut session),
        Command::Config => {
            println!("{}", config_resolver::describe(session.config()));
            Ok(())
        }
        Command::Stats { json } => {
            let stats = session.menu().statistics();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                handlers::info::print_statistics(&stats);
            }
            Ok(())
        }
        Command::Choose { input } => run_choice(&mut session, &input),
    }
}

/// Shows the menu, reads a choice and dispatches it until the user exits.
/// Errors from individual actions are reported and the loop continues.
fn run_interactive(session: &mut AppSession) -> Result<()> {
    loop {
        for line in session.menu().render_from_env(&ProcessEnv) {
            println!("{}", line);
        }

        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                t!("menu.prompt"),
                max = session.menu().max_option_number()
            ))
            .allow_empty(true)
            .interact_text()?;
        let input = input.trim();

        match session.menu().resolve_choice(input) {
            Choice::Exit => {
                log::debug!("'{}' selected", EXIT_HANDLER);
                println!("\n👋 {}", t!("menu.goodbye"));
                return Ok(());
            }
            Choice::Handler(handler) => {
                if let Err(e) = dispatcher::dispatch(&handler, session) {
                    eprintln!("\n{}: {:#}", "Error".red().bold(), e);
                }
            }
            Choice::Invalid => {
                println!(
                    "{}",
                    format!(
                        t!("menu.invalid_choice"),
                        input = input,
                        max = session.menu().max_option_number()
                    )
                    .yellow()
                );
            }
        }
    }
}

/// Non-interactive counterpart of a single loop iteration.
fn run_choice(session: &mut AppSession, input: &str) -> Result<()> {
    match session.menu().resolve_choice(input.trim()) {
        Choice::Exit => {
            println!("👋 {}", t!("menu.goodbye"));
            Ok(())
        }
        Choice::Handler(handler) => dispatcher::dispatch(&handler, session),
        Choice::Invalid => Err(anyhow!(format!(
            t!("menu.invalid_choice"),
            input = input.trim(),
            max = session.menu().max_option_number()
        ))),
    }
}
