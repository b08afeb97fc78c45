pub mod commands;
pub mod parser;


pub use parser::{BrowseArgs, Cli, Commands};

use crate::config::{Config, ConfigManager};
use crate::utils::{init_logging, PantryError, Result};

pub fn execute_command(cli: Cli) -> Result<()> {
    execute_command_with_config(cli, None)
}

pub fn execute_command_with_config(cli: Cli, test_config: Option<Config>) -> Result<()> {
    match cli.command {
        Some(Commands::Config(args)) => commands::config::execute(args),
        command => {
            let config = match test_config {
                Some(cfg) => cfg,
                None => ConfigManager::load_or_create().map_err(|e| {
                    PantryError::config_error(format!("Failed to load config: {}", e))
                })?,
            };

            match init_logging(&config, cli.verbose) {
                Ok(path) => log::debug!("Logging to {}", path.display()),
                Err(e) => eprintln!("pantry: logging disabled: {}", e),
            }

            run_command(config, command)
        }
    }
}

fn run_command(config: Config, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Browse(args)) => commands::browse::execute(config, args),
        Some(Commands::Export(args)) => {
            args.validate()?;
            commands::export::execute(config, args)
        }
        Some(Commands::Seed(args)) => commands::seed::execute(config, args),
        Some(Commands::Config(args)) => commands::config::execute(args),
        None => commands::browse::execute(config, BrowseArgs::default()),
    }
}

/// Apply a `--data-dir` override on top of the loaded configuration.
pub(crate) fn with_data_dir(mut config: Config, data_dir: Option<&std::path::Path>) -> Config {
    if let Some(dir) = data_dir {
        config.store.data_dir = dir.to_string_lossy().to_string();
    }
    config
}
