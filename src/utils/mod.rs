pub mod error;
pub mod logging;

pub use error::{PantryError, Result};
pub use logging::init_logging;
