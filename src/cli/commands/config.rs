use crate::cli::parser::{ConfigArgs, ConfigCommands};
use crate::config::ConfigManager;
use crate::utils::{PantryError, Result};
use std::io::IsTerminal;

pub fn execute(args: ConfigArgs) -> Result<()> {
    match args.command {
        Some(ConfigCommands::Show) | None => execute_show(),
        Some(ConfigCommands::Path) => execute_path(),
        Some(ConfigCommands::Reset { yes }) => execute_reset(yes),
    }
}

fn execute_show() -> Result<()> {
    let config = ConfigManager::load_or_create()
        .map_err(|e| PantryError::config_error(format!("Failed to load configuration: {e}")))?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn execute_path() -> Result<()> {
    let config_path = ConfigManager::get_config_path()
        .map_err(|e| PantryError::config_error(format!("Failed to get config path: {e}")))?;
    println!("{config_path}");
    Ok(())
}

fn is_non_interactive() -> bool {
    std::env::var("PANTRY_NON_INTERACTIVE").is_ok()
        || std::env::var("CI").is_ok()
        || !std::io::stdin().is_terminal()
}

fn execute_reset(skip_confirmation: bool) -> Result<()> {
    use dialoguer::{theme::ColorfulTheme, Confirm};

    if !skip_confirmation {
        if is_non_interactive() {
            return Err(PantryError::invalid_args(
                "Cannot reset configuration in non-interactive mode. Pass --yes to confirm.",
            ));
        }

        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Reset configuration to defaults? This cannot be undone.")
            .default(false)
            .interact()
            .map_err(|e| PantryError::config_error(format!("Failed to read input: {e}")))?;

        if !confirmed {
            println!("❌ Configuration reset cancelled");
            return Ok(());
        }
    }

    let default_config = crate::config::defaults::default_config();
    ConfigManager::save(&default_config).map_err(|e| {
        PantryError::config_error(format!("Failed to save default configuration: {e}"))
    })?;

    println!("✅ Configuration reset to defaults successfully");
    Ok(())
}
