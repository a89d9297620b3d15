// src/bin/steamwatch.rs

use clap::Parser;
use colored::*;
use steamwatch::{
    cli::{self, Cli},
    constants::ENV_LOG_FILTER,
};

/// Sets up logging, runs the CLI and reports any error in one place.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(ENV_LOG_FILTER, "warn"))
        .init();

    if let Err(e) = cli::run(Cli::parse()) {
        eprintln!("\n{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}
