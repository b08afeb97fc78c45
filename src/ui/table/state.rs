use super::debounce::Debouncer;
use super::pagination::PaginationState;
use super::sorting::SortingState;
use std::collections::HashMap;
use std::time::{Duration, Instant};

pub const DELETE_DIALOG_TITLE: &str = "Delete Confirmation";
pub const DELETE_DIALOG_BODY: &str = "Are you sure you want to delete the selected rows?";
pub const DELETE_CONFIRM_LABEL: &str = "Delete";
pub const DELETE_CANCEL_LABEL: &str = "Cancel";
pub const EMPTY_STATE_TEXT: &str = "No data found";
pub const SEARCH_PLACEHOLDER: &str = "Type to search data...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMode {
    Browse,
    Search,
    DeleteConfirm,
}

/// Every user action the table understands. Each one is a single
/// transition of [`TableViewState`].
#[derive(Debug, Clone, PartialEq)]
pub enum TableAction {
    ToggleRow(String),
    ToggleAll,
    ToggleSort(String),
    FocusNextColumn,
    FocusPreviousColumn,
    SetFilter(String),
    StartSearch,
    SearchInput(char, Instant),
    SearchBackspace(Instant),
    EndSearch,
    Tick(Instant),
    SetPage(usize),
    NextPage,
    PreviousPage,
    SetPageSize(usize),
    CyclePageSize,
    CursorUp,
    CursorDown,
    ToggleCursorRow,
    ActivateRow,
    OpenDeleteDialog,
    ConfirmDelete,
    CancelDelete,
    RequestEdit,
    RequestAdd,
    RequestExport,
}

/// Messages the table emits for its owner. The table itself never performs
/// I/O; the owner decides what each one means.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent<T> {
    SelectionChanged(Vec<T>),
    RowActivated(T),
    AddRequested,
    EditRequested(T),
    DeleteRequested(Vec<T>),
    ExportRequested { rows: Vec<T>, filename: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkControl {
    Search,
    ExportCsv,
    AddNew,
    EditData,
    DeleteData,
}

impl BulkControl {
    pub fn label(&self) -> &'static str {
        match self {
            BulkControl::Search => "Search",
            BulkControl::ExportCsv => "Export to CSV",
            BulkControl::AddNew => "Add New",
            BulkControl::EditData => "Edit Data",
            BulkControl::DeleteData => "Delete Data",
        }
    }
}

/// Controls shown for a given selection count.
pub fn visible_controls(selected_count: usize) -> Vec<BulkControl> {
    let mut controls = Vec::new();
    if selected_count == 0 {
        controls.extend([
            BulkControl::Search,
            BulkControl::ExportCsv,
            BulkControl::AddNew,
        ]);
    }
    if selected_count == 1 {
        controls.push(BulkControl::EditData);
    }
    if selected_count > 0 {
        controls.push(BulkControl::DeleteData);
    }
    controls
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckbox {
    Unchecked,
    Indeterminate,
    Checked,
}

impl HeaderCheckbox {
    pub fn glyph(&self) -> &'static str {
        match self {
            HeaderCheckbox::Unchecked => "[ ]",
            HeaderCheckbox::Indeterminate => "[-]",
            HeaderCheckbox::Checked => "[x]",
        }
    }
}

pub fn row_checkbox(selected: bool) -> &'static str {
    if selected {
        "[x]"
    } else {
        "[ ]"
    }
}

/// View state of one mounted table. Lives as long as the table and is never
/// persisted.
#[derive(Debug, Clone)]
pub struct TableViewState {
    pub row_selection: HashMap<String, bool>,
    pub sorting: SortingState,
    pub global_filter: String,
    pub search_input: String,
    pub search_debounce: Debouncer<String>,
    pub pagination: PaginationState,
    pub cursor: usize,
    /// Index into the sortable data columns, used by keyboard sorting.
    pub focused_column: usize,
    pub mode: TableMode,
}

impl TableViewState {
    pub fn new(page_size: usize, debounce: Duration) -> Self {
        Self {
            row_selection: HashMap::new(),
            sorting: SortingState::new(),
            global_filter: String::new(),
            search_input: String::new(),
            search_debounce: Debouncer::new(debounce),
            pagination: PaginationState::new(page_size),
            cursor: 0,
            focused_column: 0,
            mode: TableMode::Browse,
        }
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.row_selection.get(key).copied().unwrap_or(false)
    }

    /// Deselected keys are removed so the map only ever holds `true`.
    pub fn set_selected(&mut self, key: &str, selected: bool) {
        if selected {
            self.row_selection.insert(key.to_string(), true);
        } else {
            self.row_selection.remove(key);
        }
    }

    pub fn selected_count(&self) -> usize {
        self.row_selection.values().filter(|selected| **selected).count()
    }

    pub fn is_delete_dialog_open(&self) -> bool {
        self.mode == TableMode::DeleteConfirm
    }

    pub fn is_searching(&self) -> bool {
        self.mode == TableMode::Search
    }
}

impl Default for TableViewState {
    fn default() -> Self {
        Self::new(
            super::pagination::DEFAULT_PAGE_SIZE,
            super::debounce::DEFAULT_DEBOUNCE,
        )
    }
}
