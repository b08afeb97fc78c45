use serde::Serialize;

/// A record the table can display. Rows are serialised with serde for
/// filtering and accessor columns, so field declaration order matters.
pub trait TableRow: Serialize + Clone {
    fn row_id(&self) -> Option<String>;

    fn image_src(&self) -> Option<&str> {
        None
    }
}

/// Table identity of a row: its id when present, else a positional key.
pub fn row_key<T: TableRow>(row: &T, index: usize) -> String {
    match row.row_id() {
        Some(id) => id,
        None => format!("row-{}", index),
    }
}

/// Serialise a row into a JSON object. Non-object rows yield an empty map.
pub fn row_fields<T: TableRow>(row: &T) -> serde_json::Map<String, serde_json::Value> {
    match serde_json::to_value(row) {
        Ok(serde_json::Value::Object(map)) => map,
        Ok(_) => serde_json::Map::new(),
        Err(e) => {
            log::warn!("Row could not be serialised: {}", e);
            serde_json::Map::new()
        }
    }
}

/// Plain-text form of a JSON value as the filter and cells see it.
pub fn value_text(value: &serde_json::Value) -> String {
    use serde_json::Value;

    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        // Integral floats print without a trailing ".0".
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::Array(items) => items.iter().map(value_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod test_rows {
    use super::TableRow;
    use serde::Serialize;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct Item {
        pub id: Option<String>,
        pub name: String,
        pub price: f64,
        pub note: Option<String>,
        pub image_src: Option<String>,
    }

    impl TableRow for Item {
        fn row_id(&self) -> Option<String> {
            self.id.clone()
        }

        fn image_src(&self) -> Option<&str> {
            self.image_src.as_deref()
        }
    }

    pub fn item(id: &str, name: &str, price: f64) -> Item {
        Item {
            id: Some(id.to_string()),
            name: name.to_string(),
            price,
            note: None,
            image_src: None,
        }
    }

    /// Twelve rows with ids "r01".."r12" and prices 1.0..12.0.
    pub fn twelve_items() -> Vec<Item> {
        (1..=12)
            .map(|i| item(&format!("r{:02}", i), &format!("Item {}", i), i as f64))
            .collect()
    }
}
