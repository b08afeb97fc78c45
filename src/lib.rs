pub mod cli;
pub mod config;
pub mod core;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use core::records::{CatalogRecord, RecordKind};
pub use core::store::CatalogStore;
pub use ui::table::{DataTable, TableAction, TableEvent, TableRow};
pub use utils::{PantryError, Result};
