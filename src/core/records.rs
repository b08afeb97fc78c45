use crate::ui::table::{ColumnDef, SortFn, TableRow};
use crate::utils::{PantryError, Result};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A catalog record kept in one collection of the store and shown on one
/// admin screen.
pub trait CatalogRecord: TableRow + DeserializeOwned + Default + 'static {
    const KIND: RecordKind;
    /// File stem of the collection in the data directory.
    const COLLECTION: &'static str;
    /// Table name, also used as the export file name.
    const TITLE: &'static str;

    fn columns() -> Vec<ColumnDef<Self>>;

    fn id(&self) -> Option<&str>;

    fn assign_id(&mut self, id: String);

    fn created_at(&self) -> Option<&str>;

    fn stamp_created(&mut self, at: DateTime<Utc>);

    fn stamp_updated(&mut self, _at: DateTime<Utc>) {}

    fn validate(&self) -> Result<()>;

    /// Collections listed newest first when loaded.
    fn newest_first() -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RecordKind {
    #[default]
    Products,
    Phones,
    Locations,
    Orders,
    Transactions,
}

impl RecordKind {
    pub fn all() -> [RecordKind; 5] {
        [
            RecordKind::Products,
            RecordKind::Phones,
            RecordKind::Locations,
            RecordKind::Orders,
            RecordKind::Transactions,
        ]
    }

    pub fn collection(&self) -> &'static str {
        match self {
            RecordKind::Products => Product::COLLECTION,
            RecordKind::Phones => Phone::COLLECTION,
            RecordKind::Locations => Location::COLLECTION,
            RecordKind::Orders => Order::COLLECTION,
            RecordKind::Transactions => Transaction::COLLECTION,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RecordKind::Products => Product::TITLE,
            RecordKind::Phones => Phone::TITLE,
            RecordKind::Locations => Location::TITLE,
            RecordKind::Orders => Order::TITLE,
            RecordKind::Transactions => Transaction::TITLE,
        }
    }

    pub fn tab_label(&self) -> &'static str {
        match self {
            RecordKind::Products => "Products",
            RecordKind::Phones => "Phones",
            RecordKind::Locations => "Locations",
            RecordKind::Orders => "Orders",
            RecordKind::Transactions => "Transactions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Canceled,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub image_src: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Phone {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub brand: String,
    pub price: f64,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub id: Option<String>,
    pub created_at: Option<String>,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<String>,
    pub created_at: Option<String>,
    pub customer_name: String,
    pub total_price: f64,
    pub status: OrderStatus,
}

/// One purchased line of an order, flattened for the transactions screen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Option<String>,
    pub order_id: String,
    pub product_name: String,
    pub image_src: Option<String>,
    pub quantity: i64,
    pub purchase_price: f64,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: Option<String>,
}

pub fn format_price(value: &Value) -> String {
    match value.as_f64() {
        Some(price) => format!("${:.2}", price),
        None => "-".to_string(),
    }
}

pub fn format_timestamp(value: &Value) -> String {
    value
        .as_str()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339()
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PantryError::invalid_record(format!("{} is required", field)));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PantryError::invalid_record(format!(
            "{} must be a non-negative number",
            field
        )));
    }
    Ok(())
}

impl TableRow for Product {
    fn row_id(&self) -> Option<String> {
        self.id.clone()
    }

    fn image_src(&self) -> Option<&str> {
        self.image_src.as_deref()
    }
}

impl CatalogRecord for Product {
    const KIND: RecordKind = RecordKind::Products;
    const COLLECTION: &'static str = "products";
    const TITLE: &'static str = "Products Table";

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::accessor("name", "Name").sort_by(SortFn::CaseInsensitive),
            ColumnDef::accessor("description", "Description").sort_by(SortFn::CaseInsensitive),
            ColumnDef::accessor("price", "Price")
                .cell(format_price)
                .sort_by(SortFn::Numeric),
            ColumnDef::accessor("stock", "Stock").sort_by(SortFn::Numeric),
        ]
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.created_at = Some(timestamp(at));
        self.updated_at = Some(timestamp(at));
    }

    fn stamp_updated(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(timestamp(at));
    }

    fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require_non_negative("price", self.price)?;
        if self.stock < 0 {
            return Err(PantryError::invalid_record("stock cannot be negative"));
        }
        Ok(())
    }
}

impl TableRow for Phone {
    fn row_id(&self) -> Option<String> {
        self.id.clone()
    }
}

impl CatalogRecord for Phone {
    const KIND: RecordKind = RecordKind::Phones;
    const COLLECTION: &'static str = "phones";
    const TITLE: &'static str = "Phones Table";

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::accessor("name", "Name").sort_by(SortFn::CaseInsensitive),
            ColumnDef::accessor("description", "Description").sort_by(SortFn::CaseInsensitive),
            ColumnDef::accessor("brand", "Brand").sort_by(SortFn::CaseInsensitive),
            ColumnDef::accessor("price", "Price")
                .cell(format_price)
                .sort_by(SortFn::Numeric),
            ColumnDef::accessor("created_at", "Created At")
                .cell(format_timestamp)
                .sort_by(SortFn::Datetime),
        ]
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.created_at = Some(timestamp(at));
    }

    fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("brand", &self.brand)?;
        require_non_negative("price", self.price)
    }
}

impl TableRow for Location {
    fn row_id(&self) -> Option<String> {
        self.id.clone()
    }
}

impl CatalogRecord for Location {
    const KIND: RecordKind = RecordKind::Locations;
    const COLLECTION: &'static str = "locations";
    const TITLE: &'static str = "Locations Table";

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::accessor("name", "Name").sort_by(SortFn::CaseInsensitive),
            ColumnDef::accessor("address", "Address").sort_by(SortFn::CaseInsensitive),
            ColumnDef::accessor("city", "City").sort_by(SortFn::CaseInsensitive),
            ColumnDef::accessor("state", "State").sort_by(SortFn::CaseInsensitive),
            ColumnDef::accessor("zip_code", "Zip Code").sort_by(SortFn::CaseInsensitive),
            ColumnDef::accessor("created_at", "Created At")
                .cell(format_timestamp)
                .sort_by(SortFn::Datetime),
        ]
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.created_at = Some(timestamp(at));
    }

    fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("address", &self.address)?;
        require("city", &self.city)
    }
}

impl TableRow for Order {
    fn row_id(&self) -> Option<String> {
        self.id.clone()
    }
}

fn order_status_text(value: &Value) -> String {
    value.as_str().unwrap_or("-").to_uppercase()
}

impl CatalogRecord for Order {
    const KIND: RecordKind = RecordKind::Orders;
    const COLLECTION: &'static str = "orders";
    const TITLE: &'static str = "Orders Table";

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::accessor("customer_name", "Customer").sort_by(SortFn::CaseInsensitive),
            ColumnDef::accessor("total_price", "Total")
                .cell(format_price)
                .sort_by(SortFn::Numeric),
            ColumnDef::accessor("status", "Status")
                .cell(order_status_text)
                .sort_by(SortFn::CaseInsensitive),
            ColumnDef::accessor("created_at", "Created At")
                .cell(format_timestamp)
                .sort_by(SortFn::Datetime),
        ]
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.created_at = Some(timestamp(at));
    }

    fn validate(&self) -> Result<()> {
        require("customer_name", &self.customer_name)?;
        require_non_negative("total_price", self.total_price)
    }

    fn newest_first() -> bool {
        true
    }
}

impl TableRow for Transaction {
    fn row_id(&self) -> Option<String> {
        self.id.clone()
    }

    fn image_src(&self) -> Option<&str> {
        self.image_src.as_deref()
    }
}

fn line_total(row: &Transaction) -> Value {
    serde_json::json!(row.purchase_price * row.quantity as f64)
}

impl CatalogRecord for Transaction {
    const KIND: RecordKind = RecordKind::Transactions;
    const COLLECTION: &'static str = "transactions";
    const TITLE: &'static str = "Transactions Table";

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::accessor("product_name", "Product").sort_by(SortFn::CaseInsensitive),
            ColumnDef::accessor("quantity", "Qty").sort_by(SortFn::Numeric),
            ColumnDef::accessor("purchase_price", "Unit Price")
                .cell(format_price)
                .sort_by(SortFn::Numeric),
            ColumnDef::computed("line_total", "Line Total", line_total)
                .cell(format_price)
                .sort_by(SortFn::Numeric),
            ColumnDef::accessor("status", "Status")
                .cell(order_status_text)
                .sort_by(SortFn::CaseInsensitive),
            ColumnDef::accessor("created_at", "Created At")
                .cell(format_timestamp)
                .sort_by(SortFn::Datetime),
        ]
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.created_at = Some(timestamp(at));
    }

    fn validate(&self) -> Result<()> {
        require("order_id", &self.order_id)?;
        require("product_name", &self.product_name)?;
        if self.quantity <= 0 {
            return Err(PantryError::invalid_record("quantity must be at least 1"));
        }
        require_non_negative("purchase_price", self.purchase_price)
    }

    fn newest_first() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(&json!(4.5)), "$4.50");
        assert_eq!(format_price(&json!(12)), "$12.00");
        assert_eq!(format_price(&Value::Null), "-");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp(&json!("2024-03-11T16:12:02+00:00")),
            "2024-03-11 16:12:02"
        );
        assert_eq!(format_timestamp(&json!("yesterday")), "-");
        assert_eq!(format_timestamp(&Value::Null), "-");
    }

    #[test]
    fn test_order_status_serialises_lowercase() {
        let order = Order {
            status: OrderStatus::Canceled,
            ..Default::default()
        };
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["status"], json!("canceled"));

        let parsed: OrderStatus = serde_json::from_value(json!("completed")).unwrap();
        assert_eq!(parsed, OrderStatus::Completed);
        assert!(serde_json::from_value::<OrderStatus>(json!("shipped")).is_err());
    }

    #[test]
    fn test_product_validation() {
        let mut product = Product {
            name: "Oat Milk".to_string(),
            price: 3.2,
            stock: 4,
            ..Default::default()
        };
        assert!(product.validate().is_ok());

        product.stock = -1;
        assert!(product.validate().is_err());

        product.stock = 1;
        product.name = "  ".to_string();
        let err = product.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid record: name is required");
    }

    #[test]
    fn test_transaction_line_total_column() {
        let row = Transaction {
            product_name: "Apples".to_string(),
            quantity: 3,
            purchase_price: 1.5,
            ..Default::default()
        };
        let columns = Transaction::columns();
        let total = columns
            .iter()
            .find(|column| column.id() == "line_total")
            .unwrap();
        assert_eq!(total.render(&row), "$4.50");
    }

    #[test]
    fn test_record_kind_metadata() {
        assert_eq!(RecordKind::Orders.collection(), "orders");
        assert_eq!(RecordKind::Phones.title(), "Phones Table");
        assert_eq!(RecordKind::all().len(), 5);
        assert!(Order::newest_first());
        assert!(!Product::newest_first());
    }

    #[test]
    fn test_stamp_created_sets_both_product_timestamps() {
        let mut product = Product::default();
        product.stamp_created(Utc::now());
        assert!(product.created_at.is_some());
        assert_eq!(product.created_at, product.updated_at);
    }
}
