use super::{Config, LoggingConfig, StoreConfig, TableConfig};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

pub fn default_config() -> Config {
    Config {
        table: default_table_config(),
        store: default_store_config(),
        logging: default_logging_config(),
    }
}

pub fn default_table_config() -> TableConfig {
    TableConfig {
        default_page_size: DEFAULT_PAGE_SIZE,
        search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
    }
}

pub fn default_store_config() -> StoreConfig {
    let data_dir = get_default_data_dir();
    StoreConfig {
        export_dir: data_dir.join("exports").to_string_lossy().to_string(),
        data_dir: data_dir.to_string_lossy().to_string(),
    }
}

pub fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: "info".to_string(),
        file: None,
    }
}

pub fn get_default_config_dir() -> std::path::PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "pantry") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        fallback_home().join(".config").join("pantry")
    }
}

pub fn get_default_data_dir() -> std::path::PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "pantry") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        fallback_home().join(".local").join("share").join("pantry")
    }
}

pub fn get_default_log_file() -> std::path::PathBuf {
    get_default_data_dir().join("pantry.log")
}

pub fn get_config_file_path() -> std::path::PathBuf {
    // Allow environment variable override for config path (used in tests)
    if let Ok(config_path) = std::env::var("PANTRY_CONFIG_PATH") {
        return std::path::PathBuf::from(config_path);
    }

    get_default_config_dir().join("config.json")
}

fn fallback_home() -> std::path::PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| std::path::PathBuf::from("."))
}
