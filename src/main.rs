mod cli;
mod commands;
mod errors;
mod input;
mod logging;
mod report;
mod stats;
mod utils;

use crate::errors::TxtStatResult;
use crate::utils::Config;
use clap::Parser;
use cli::Cli;
use commands::Outcome;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

const CONFIG_DIR_ENV: &str = "TXTSTAT_CONFIG_DIR";

fn load_config(cli: &Cli) -> TxtStatResult<Config> {
    let override_dir = cli
        .config_dir
        .clone()
        .or_else(|| std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from));

    match utils::config_dir(override_dir.as_deref()) {
        Some(dir) => Config::load(&dir),
        None => {
            tracing::debug!("No config directory available, using defaults");
            Ok(Config::default())
        }
    }
}

fn run(cli: Cli) -> TxtStatResult<Outcome> {
    let config = load_config(&cli)?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    commands::handle(cli, &config, stdin.lock(), interactive, io::stdout().lock())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    tracing::debug!("CLI starting up");

    let code = match run(cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            tracing::error!("{e}");
            e.exit_code()
        }
    };

    ExitCode::from(code)
}
