pub mod cli;
pub mod core;

use crate::cli::calc::CalcOptions;
use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::debug;

pub enum AppCommand {
    Calc(CalcOptions),
    Interactive,
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load_or_default()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Calc(options) => cli::calc::run(&config, &options),
        AppCommand::Interactive => cli::interactive::run(config.initial_state()),
    }
}
