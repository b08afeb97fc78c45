//! CRUD admin screens built on the data table.

pub mod coordinator;
pub mod dialogs;
pub mod form;
pub mod screen;
pub mod types;

pub use coordinator::AdminCoordinator;
pub use form::{FormMode, FormOutcome, UpsertForm};
pub use screen::{AdminScreen, CatalogScreen};
pub use types::{StatusKind, StatusMessage};
