use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PantryError {
    #[error("Store operation failed: {message}")]
    Store { message: String },

    #[error("Record '{id}' not found in {collection}")]
    RecordNotFound { collection: String, id: String },

    #[error("Invalid record: {message}")]
    InvalidRecord { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Export failed: {message}")]
    Export { message: String },

    #[error("Terminal UI error: {message}")]
    Terminal { message: String },

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PantryError>;

impl PantryError {
    pub fn store_error(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    pub fn record_not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::RecordNotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }

    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn export_error(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    pub fn terminal_error(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }

    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

impl From<PathBuf> for PantryError {
    fn from(path: PathBuf) -> Self {
        Self::FileNotFound {
            path: path.to_string_lossy().to_string(),
        }
    }
}

impl From<crate::config::ConfigError> for PantryError {
    fn from(error: crate::config::ConfigError) -> Self {
        Self::Config {
            message: error.to_string(),
        }
    }
}
