use super::column::ColumnDef;
use super::row::{value_text, TableRow};
use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSort {
    pub column_id: String,
    pub descending: bool,
}

/// Ordered sort entries. The UI only ever keeps one; the first one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortingState {
    entries: Vec<ColumnSort>,
}

impl SortingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ColumnSort] {
        &self.entries
    }

    pub fn primary(&self) -> Option<&ColumnSort> {
        self.entries.first()
    }

    pub fn direction_of(&self, column_id: &str) -> Option<SortDirection> {
        self.primary()
            .filter(|sort| sort.column_id == column_id)
            .map(|sort| {
                if sort.descending {
                    SortDirection::Descending
                } else {
                    SortDirection::Ascending
                }
            })
    }

    /// Cycle `column_id` through unsorted, ascending, descending. A column
    /// that is not currently sorted replaces whatever was sorted before.
    pub fn toggle(&mut self, column_id: &str) {
        self.entries = match self.direction_of(column_id) {
            None => vec![ColumnSort {
                column_id: column_id.to_string(),
                descending: false,
            }],
            Some(SortDirection::Ascending) => vec![ColumnSort {
                column_id: column_id.to_string(),
                descending: true,
            }],
            Some(SortDirection::Descending) => Vec::new(),
        };
    }
}

/// Comparator used when a column is sorted.
pub enum SortFn<T> {
    /// Numbers numerically, strings lexicographically, null first.
    Auto,
    CaseInsensitive,
    Numeric,
    Datetime,
    Custom(fn(&T, &T) -> Ordering),
}

impl<T> Clone for SortFn<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SortFn<T> {}

impl<T> std::fmt::Debug for SortFn<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortFn::Auto => "Auto",
            SortFn::CaseInsensitive => "CaseInsensitive",
            SortFn::Numeric => "Numeric",
            SortFn::Datetime => "Datetime",
            SortFn::Custom(_) => "Custom",
        };
        f.write_str(name)
    }
}

impl<T> SortFn<T> {
    pub fn compare(&self, a_row: &T, b_row: &T, a: &Value, b: &Value) -> Ordering {
        match self {
            SortFn::Auto => compare_auto(a, b),
            SortFn::CaseInsensitive => value_text(a)
                .to_lowercase()
                .cmp(&value_text(b).to_lowercase()),
            SortFn::Numeric => numeric_value(a)
                .partial_cmp(&numeric_value(b))
                .unwrap_or(Ordering::Equal),
            SortFn::Datetime => datetime_value(a).cmp(&datetime_value(b)),
            SortFn::Custom(compare) => compare(a_row, b_row),
        }
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn compare_auto(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => match type_rank(a).cmp(&type_rank(b)) {
            Ordering::Equal => value_text(a).cmp(&value_text(b)),
            other => other,
        },
    }
}

fn numeric_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => 0.0,
    }
}

fn datetime_value(value: &Value) -> Option<NaiveDateTime> {
    let text = value.as_str()?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.naive_utc());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

/// Stable sort of `indices` (positions into `data`) by one column.
pub fn sort_indices<T: TableRow>(
    data: &[T],
    indices: &mut Vec<usize>,
    column: &ColumnDef<T>,
    descending: bool,
) {
    let sort_fn = column.sort_fn();
    let mut keyed: Vec<(usize, Value)> = indices
        .iter()
        .map(|&index| (index, column.value(&data[index])))
        .collect();

    keyed.sort_by(|(a_index, a_value), (b_index, b_value)| {
        let ordering = sort_fn.compare(&data[*a_index], &data[*b_index], a_value, b_value);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });

    *indices = keyed.into_iter().map(|(index, _)| index).collect();
}
