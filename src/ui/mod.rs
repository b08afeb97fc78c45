pub mod admin;
pub mod rendering;
pub mod table;
