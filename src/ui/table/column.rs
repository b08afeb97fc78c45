use super::row::{row_fields, value_text, TableRow};
use super::sorting::SortFn;
use serde_json::Value;

pub type CellFn = fn(&Value) -> String;
pub type ValueFn<T> = fn(&T) -> Value;

/// One display field supplied by the caller.
pub enum ColumnDef<T> {
    /// Reads a field of the serialised row by key.
    Accessor {
        key: String,
        header: String,
        cell: Option<CellFn>,
        sort_fn: SortFn<T>,
        enable_sorting: bool,
    },
    /// Derives its value from the row with a function.
    Computed {
        id: String,
        header: String,
        value: ValueFn<T>,
        cell: Option<CellFn>,
        sort_fn: SortFn<T>,
        enable_sorting: bool,
    },
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        match self {
            ColumnDef::Accessor {
                key,
                header,
                cell,
                sort_fn,
                enable_sorting,
            } => ColumnDef::Accessor {
                key: key.clone(),
                header: header.clone(),
                cell: *cell,
                sort_fn: *sort_fn,
                enable_sorting: *enable_sorting,
            },
            ColumnDef::Computed {
                id,
                header,
                value,
                cell,
                sort_fn,
                enable_sorting,
            } => ColumnDef::Computed {
                id: id.clone(),
                header: header.clone(),
                value: *value,
                cell: *cell,
                sort_fn: *sort_fn,
                enable_sorting: *enable_sorting,
            },
        }
    }
}

impl<T> std::fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id())
            .field("header", &self.header())
            .field("sort_fn", &self.sort_fn())
            .field("enable_sorting", &self.can_sort())
            .finish()
    }
}

impl<T: TableRow> ColumnDef<T> {
    pub fn accessor(key: impl Into<String>, header: impl Into<String>) -> Self {
        ColumnDef::Accessor {
            key: key.into(),
            header: header.into(),
            cell: None,
            sort_fn: SortFn::Auto,
            enable_sorting: false,
        }
    }

    pub fn computed(id: impl Into<String>, header: impl Into<String>, value: ValueFn<T>) -> Self {
        ColumnDef::Computed {
            id: id.into(),
            header: header.into(),
            value,
            cell: None,
            sort_fn: SortFn::Auto,
            enable_sorting: false,
        }
    }

    pub fn cell(mut self, render: CellFn) -> Self {
        match &mut self {
            ColumnDef::Accessor { cell, .. } | ColumnDef::Computed { cell, .. } => {
                *cell = Some(render)
            }
        }
        self
    }

    pub fn sort_by(mut self, comparator: SortFn<T>) -> Self {
        match &mut self {
            ColumnDef::Accessor { sort_fn, .. } | ColumnDef::Computed { sort_fn, .. } => {
                *sort_fn = comparator
            }
        }
        self
    }

    pub fn sorting(mut self, enabled: bool) -> Self {
        match &mut self {
            ColumnDef::Accessor { enable_sorting, .. }
            | ColumnDef::Computed { enable_sorting, .. } => *enable_sorting = enabled,
        }
        self
    }

    pub fn value(&self, row: &T) -> Value {
        match self {
            ColumnDef::Accessor { key, .. } => row_fields(row)
                .get(key.as_str())
                .cloned()
                .unwrap_or(Value::Null),
            ColumnDef::Computed { value, .. } => value(row),
        }
    }

    pub fn render(&self, row: &T) -> String {
        let value = self.value(row);
        match self.cell_fn() {
            Some(render) => render(&value),
            None => value_text(&value),
        }
    }
}

impl<T> ColumnDef<T> {
    pub fn id(&self) -> &str {
        match self {
            ColumnDef::Accessor { key, .. } => key,
            ColumnDef::Computed { id, .. } => id,
        }
    }

    pub fn header(&self) -> &str {
        match self {
            ColumnDef::Accessor { header, .. } | ColumnDef::Computed { header, .. } => header,
        }
    }

    pub fn sort_fn(&self) -> SortFn<T> {
        match self {
            ColumnDef::Accessor { sort_fn, .. } | ColumnDef::Computed { sort_fn, .. } => *sort_fn,
        }
    }

    pub fn can_sort(&self) -> bool {
        match self {
            ColumnDef::Accessor { enable_sorting, .. }
            | ColumnDef::Computed { enable_sorting, .. } => *enable_sorting,
        }
    }

    fn cell_fn(&self) -> Option<CellFn> {
        match self {
            ColumnDef::Accessor { cell, .. } | ColumnDef::Computed { cell, .. } => *cell,
        }
    }
}

pub const SELECT_COLUMN_ID: &str = "select";
pub const IMAGE_COLUMN_ID: &str = "image_src";

/// A column as the table lays it out: two fixed leading columns followed by
/// the caller's data columns.
#[derive(Debug, Clone)]
pub enum TableColumn<T> {
    Select,
    Image,
    Data(ColumnDef<T>),
}

impl<T> TableColumn<T> {
    pub fn id(&self) -> &str {
        match self {
            TableColumn::Select => SELECT_COLUMN_ID,
            TableColumn::Image => IMAGE_COLUMN_ID,
            TableColumn::Data(def) => def.id(),
        }
    }

    pub fn header(&self) -> &str {
        match self {
            TableColumn::Select => "",
            TableColumn::Image => "Image",
            TableColumn::Data(def) => def.header(),
        }
    }

    pub fn can_sort(&self) -> bool {
        match self {
            TableColumn::Select | TableColumn::Image => false,
            TableColumn::Data(def) => def.can_sort(),
        }
    }
}

/// Prepend the checkbox and image columns and force every data column
/// sortable.
pub fn compose_columns<T: TableRow>(dynamic_columns: Vec<ColumnDef<T>>) -> Vec<TableColumn<T>> {
    let mut columns = Vec::with_capacity(dynamic_columns.len() + 2);
    columns.push(TableColumn::Select);
    columns.push(TableColumn::Image);
    columns.extend(
        dynamic_columns
            .into_iter()
            .map(|column| TableColumn::Data(column.sorting(true))),
    );
    columns
}
