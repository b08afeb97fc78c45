use crate::config::defaults::get_default_log_file;
use crate::config::Config;
use crate::utils::Result;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;

/// Resolve where log output goes. The terminal belongs to the UI, so logs
/// always land in a file.
pub fn log_file_path(config: &Config) -> PathBuf {
    match &config.logging.file {
        Some(file) => PathBuf::from(file),
        None => get_default_log_file(),
    }
}

pub fn effective_level(config: &Config, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        config.log_level()
    }
}

pub fn init_logging(config: &Config, verbose: bool) -> Result<PathBuf> {
    let path = log_file_path(config);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let log_file = File::create(&path)?;
    let log_config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Off)
        .build();

    WriteLogger::init(effective_level(config, verbose), log_config, log_file)
        .map_err(|e| {
            crate::utils::PantryError::config_error(format!("Logger init failed: {}", e))
        })?;

    Ok(path)
}
