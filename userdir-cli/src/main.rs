//! userdir CLI - an in-memory user directory in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod logging;
mod output;

use commands::{demo, init, shell};

/// ud - in-memory user directory
#[derive(Parser)]
#[command(name = "ud", version, about, long_about = None)]
struct Cli {
    /// Directory holding settings.json
    #[arg(long, global = true, env = "USERDIR_DIR")]
    data_dir: Option<PathBuf>,

    /// Log filter directive (overrides settings and USERDIR_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a few sample users and print the report
    Demo {
        /// Output the directory summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read directory commands from stdin, one per line
    Shell,

    /// Write a settings.json with defaults to the data directory
    Init {
        /// Reject users younger than this (18 or more)
        #[arg(long)]
        minimum_age: Option<i64>,
        /// Overwrite an existing settings.json
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = cli.data_dir.unwrap_or_else(commands::default_data_dir);

    // Runs before settings are loaded, so a broken file can be replaced.
    if let Commands::Init { minimum_age, force } = cli.command {
        return init::run(&data_dir, minimum_age, force);
    }

    let mut ctx = commands::get_context(&data_dir)?;

    let mut logging = ctx.config.logging.clone();
    if let Some(level) = cli.log_level {
        logging.level = Some(level);
    }
    logging::init_tracing(&logging);
    tracing::debug!(data_dir = ?data_dir, minimum_age = ctx.config.minimum_age, "settings loaded");

    match cli.command {
        Commands::Demo { json } => demo::run(&mut ctx, json),
        Commands::Shell => shell::run(&mut ctx),
        Commands::Init { .. } => unreachable!("handled before settings are loaded"),
    }
}
