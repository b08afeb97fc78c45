use super::row::{row_fields, value_text, TableRow};

/// Global contains-filter over every non-null field of the row object.
///
/// Field values are stringified in declaration order, joined with single
/// spaces and lowercased before the substring test, so hidden fields match
/// too. An empty term matches everything.
pub fn global_contains_filter<T: TableRow>(row: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    searchable_text(row).contains(&term.to_lowercase())
}

pub fn searchable_text<T: TableRow>(row: &T) -> String {
    row_fields(row)
        .values()
        .filter(|value| !value.is_null())
        .map(value_text)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
