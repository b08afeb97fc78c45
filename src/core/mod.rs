pub mod demo;
pub mod export;
pub mod records;
pub mod store;

pub use export::export_csv;
pub use records::{
    CatalogRecord, Location, Order, OrderStatus, Phone, Product, RecordKind, Transaction,
};
pub use store::CatalogStore;
