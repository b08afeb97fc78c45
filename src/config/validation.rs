use super::{Config, ConfigError, LoggingConfig, Result, StoreConfig, TableConfig};
use crate::ui::table::PAGE_SIZE_OPTIONS;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

pub fn validate_config(config: &Config) -> Result<()> {
    validate_table_config(&config.table)?;
    validate_store_config(&config.store)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

pub fn validate_table_config(table: &TableConfig) -> Result<()> {
    if !PAGE_SIZE_OPTIONS.contains(&table.default_page_size) {
        return Err(ConfigError::Validation(format!(
            "default_page_size must be one of {:?}, got {}",
            PAGE_SIZE_OPTIONS, table.default_page_size
        )));
    }

    if table.search_debounce_ms == 0 {
        return Err(ConfigError::Validation(
            "search_debounce_ms must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_store_config(store: &StoreConfig) -> Result<()> {
    if store.data_dir.trim().is_empty() {
        return Err(ConfigError::Validation(
            "data_dir cannot be empty".to_string(),
        ));
    }

    if store.export_dir.trim().is_empty() {
        return Err(ConfigError::Validation(
            "export_dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_logging_config(logging: &LoggingConfig) -> Result<()> {
    let level = logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::Validation(format!(
            "Unknown log level '{}'",
            logging.level
        )));
    }

    if let Some(file) = &logging.file {
        if file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "log file path cannot be empty when set".to_string(),
            ));
        }
    }

    Ok(())
}
