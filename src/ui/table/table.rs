use super::column::{compose_columns, ColumnDef, TableColumn};
use super::filter::global_contains_filter;
use super::pagination::PAGE_SIZE_OPTIONS;
use super::row::{row_key, TableRow};
use super::sorting::sort_indices;
use super::state::{
    row_checkbox, visible_controls, BulkControl, HeaderCheckbox, TableAction, TableEvent,
    TableMode, TableViewState,
};
use std::collections::BTreeSet;
use std::time::Duration;

pub const IMAGE_PLACEHOLDER: &str = "-";
pub const IMAGE_THUMBNAIL: &str = "▣";

/// A row on the current page together with its table identity.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRow<'a, T> {
    pub key: String,
    pub row: &'a T,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody<'a, T> {
    /// Rendered as a single full-width "No data found" row.
    Empty,
    Rows(Vec<PageRow<'a, T>>),
}

/// Generic row-selectable table: selection, sorting, global filter and
/// pagination over a fixed list of rows.
pub struct DataTable<T: TableRow> {
    data: Vec<T>,
    keys: Vec<String>,
    table_name: String,
    columns: Vec<TableColumn<T>>,
    pub state: TableViewState,
}

impl<T: TableRow> DataTable<T> {
    pub fn new(
        table_name: impl Into<String>,
        data: Vec<T>,
        dynamic_columns: Vec<ColumnDef<T>>,
    ) -> Self {
        Self::with_options(
            table_name,
            data,
            dynamic_columns,
            super::pagination::DEFAULT_PAGE_SIZE,
            super::debounce::DEFAULT_DEBOUNCE,
        )
    }

    pub fn with_options(
        table_name: impl Into<String>,
        data: Vec<T>,
        dynamic_columns: Vec<ColumnDef<T>>,
        page_size: usize,
        debounce: Duration,
    ) -> Self {
        let keys = compute_keys(&data);
        Self {
            data,
            keys,
            table_name: table_name.into(),
            columns: compose_columns(dynamic_columns),
            state: TableViewState::new(page_size, debounce),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn columns(&self) -> &[TableColumn<T>] {
        &self.columns
    }

    /// Replace the rows. Selection entries for rows that disappeared are
    /// dropped and the page index is clamped.
    pub fn set_data(&mut self, data: Vec<T>) -> Vec<TableEvent<T>> {
        let before = self.selected_keys();
        self.data = data;
        self.keys = compute_keys(&self.data);

        let present: BTreeSet<&String> = self.keys.iter().collect();
        self.state
            .row_selection
            .retain(|key, selected| *selected && present.contains(key));

        let total = self.filtered_count();
        self.state.pagination.clamp(total);
        self.clamp_cursor();

        self.selection_events(before)
    }

    /// Apply one user action and return whatever the owner needs to hear.
    pub fn dispatch(&mut self, action: TableAction) -> Vec<TableEvent<T>> {
        let before = self.selected_keys();
        let mut events = Vec::new();

        match action {
            TableAction::ToggleRow(key) => self.toggle_row(&key),
            TableAction::ToggleAll => self.toggle_all(),
            TableAction::ToggleSort(column_id) => self.toggle_sort(&column_id),
            TableAction::FocusNextColumn => {
                let count = self.sortable_column_ids().len();
                if count > 0 {
                    self.state.focused_column = (self.state.focused_column + 1) % count;
                }
            }
            TableAction::FocusPreviousColumn => {
                let count = self.sortable_column_ids().len();
                if count > 0 {
                    self.state.focused_column = (self.state.focused_column + count - 1) % count;
                }
            }
            TableAction::SetFilter(term) => {
                self.state.search_debounce.cancel();
                self.state.search_input = term.clone();
                self.apply_filter(term);
            }
            TableAction::StartSearch => {
                if self.state.selected_count() == 0 && self.state.mode == TableMode::Browse {
                    self.state.mode = TableMode::Search;
                }
            }
            TableAction::SearchInput(c, now) => {
                if self.state.is_searching() {
                    self.state.search_input.push(c);
                    let input = self.state.search_input.clone();
                    self.state.search_debounce.push(input, now);
                }
            }
            TableAction::SearchBackspace(now) => {
                if self.state.is_searching() && self.state.search_input.pop().is_some() {
                    let input = self.state.search_input.clone();
                    self.state.search_debounce.push(input, now);
                }
            }
            TableAction::EndSearch => {
                if self.state.is_searching() {
                    self.state.mode = TableMode::Browse;
                }
            }
            TableAction::Tick(now) => {
                if let Some(term) = self.state.search_debounce.poll(now) {
                    self.apply_filter(term);
                }
            }
            TableAction::SetPage(page_index) => {
                let total = self.filtered_count();
                self.state.pagination.set_page(page_index, total);
                self.state.cursor = 0;
            }
            TableAction::NextPage => {
                let total = self.filtered_count();
                self.state.pagination.next_page(total);
                self.state.cursor = 0;
            }
            TableAction::PreviousPage => {
                self.state.pagination.previous_page();
                self.state.cursor = 0;
            }
            TableAction::SetPageSize(page_size) => {
                if self.state.pagination.set_page_size(page_size) {
                    self.state.cursor = 0;
                }
            }
            TableAction::CyclePageSize => {
                let current = self.state.pagination.page_size;
                let position = PAGE_SIZE_OPTIONS
                    .iter()
                    .position(|size| *size == current)
                    .unwrap_or(0);
                let next = PAGE_SIZE_OPTIONS[(position + 1) % PAGE_SIZE_OPTIONS.len()];
                self.state.pagination.set_page_size(next);
                self.state.cursor = 0;
            }
            TableAction::CursorUp => {
                self.state.cursor = self.state.cursor.saturating_sub(1);
            }
            TableAction::CursorDown => {
                let len = self.page_len();
                if self.state.cursor + 1 < len {
                    self.state.cursor += 1;
                }
            }
            TableAction::ToggleCursorRow => {
                if let Some(key) = self.cursor_key() {
                    self.toggle_row(&key);
                }
            }
            TableAction::ActivateRow => {
                if let Some(row) = self.cursor_row() {
                    events.push(TableEvent::RowActivated(row.clone()));
                }
            }
            TableAction::OpenDeleteDialog => {
                if self.state.selected_count() > 0 {
                    self.state.mode = TableMode::DeleteConfirm;
                }
            }
            TableAction::ConfirmDelete => {
                if self.state.is_delete_dialog_open() {
                    events.push(TableEvent::DeleteRequested(self.selected_rows()));
                    self.state.mode = TableMode::Browse;
                }
            }
            TableAction::CancelDelete => {
                if self.state.is_delete_dialog_open() {
                    self.state.mode = TableMode::Browse;
                }
            }
            TableAction::RequestEdit => {
                let mut selected = self.selected_rows();
                if selected.len() == 1 {
                    events.push(TableEvent::EditRequested(selected.remove(0)));
                }
            }
            TableAction::RequestAdd => events.push(TableEvent::AddRequested),
            TableAction::RequestExport => events.push(TableEvent::ExportRequested {
                rows: self.data.clone(),
                filename: self.table_name.clone(),
            }),
        }

        if self.state.selected_count() > 0 {
            self.drop_pending_search();
        }

        let mut selection = self.selection_events(before);
        selection.append(&mut events);
        selection
    }

    fn toggle_row(&mut self, key: &str) {
        if !self.keys.iter().any(|k| k == key) {
            log::debug!("Ignoring toggle for unknown row '{}'", key);
            return;
        }
        let selected = self.state.is_selected(key);
        self.state.set_selected(key, !selected);
    }

    fn toggle_all(&mut self) {
        let filtered: Vec<String> = self
            .filtered_indices()
            .into_iter()
            .map(|index| self.keys[index].clone())
            .collect();
        let select = self.header_checkbox() != HeaderCheckbox::Checked;
        for key in &filtered {
            self.state.set_selected(key, select);
        }
    }

    fn toggle_sort(&mut self, column_id: &str) {
        let sortable = self
            .columns
            .iter()
            .any(|column| column.id() == column_id && column.can_sort());
        if sortable {
            self.state.sorting.toggle(column_id);
            self.state.cursor = 0;
        }
    }

    pub fn sortable_column_ids(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|column| column.can_sort())
            .map(|column| column.id())
            .collect()
    }

    pub fn focused_column_id(&self) -> Option<&str> {
        self.sortable_column_ids()
            .get(self.state.focused_column)
            .copied()
    }

    /// The search box is hidden while rows are selected, so a term still
    /// waiting on the debounce must not land afterwards.
    fn drop_pending_search(&mut self) {
        if self.state.search_debounce.is_pending() {
            self.state.search_debounce.cancel();
            self.state.search_input = self.state.global_filter.clone();
        }
        if self.state.is_searching() {
            self.state.mode = TableMode::Browse;
        }
    }

    fn apply_filter(&mut self, term: String) {
        if term != self.state.global_filter {
            log::debug!("Filter for '{}' set to '{}'", self.table_name, term);
        }
        self.state.global_filter = term;
        self.state.pagination.reset();
        self.state.cursor = 0;
    }

    fn selected_keys(&self) -> BTreeSet<String> {
        self.state
            .row_selection
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(key, _)| key.clone())
            .collect()
    }

    fn selection_events(&self, before: BTreeSet<String>) -> Vec<TableEvent<T>> {
        if self.selected_keys() == before {
            Vec::new()
        } else {
            vec![TableEvent::SelectionChanged(self.selected_rows())]
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.page_len();
        if self.state.cursor >= len {
            self.state.cursor = len.saturating_sub(1);
        }
    }

    /// Positions of rows passing the global filter, in data order.
    pub fn filtered_indices(&self) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, row)| global_contains_filter(*row, &self.state.global_filter))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_indices().len()
    }

    /// Filter, then sort.
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut indices = self.filtered_indices();
        if let Some(sort) = self.state.sorting.primary() {
            let column = self.columns.iter().find_map(|column| match column {
                TableColumn::Data(def) if def.id() == sort.column_id => Some(def),
                _ => None,
            });
            if let Some(def) = column {
                sort_indices(&self.data, &mut indices, def, sort.descending);
            }
        }
        indices
    }

    /// Filter, sort, then slice the current page.
    pub fn page_rows(&self) -> Vec<PageRow<'_, T>> {
        let sorted = self.sorted_indices();
        let range = self.state.pagination.range(sorted.len());
        sorted[range]
            .iter()
            .map(|&index| PageRow {
                key: self.keys[index].clone(),
                row: &self.data[index],
                selected: self.state.is_selected(&self.keys[index]),
            })
            .collect()
    }

    pub fn body(&self) -> TableBody<'_, T> {
        let rows = self.page_rows();
        if rows.is_empty() {
            TableBody::Empty
        } else {
            TableBody::Rows(rows)
        }
    }

    fn page_len(&self) -> usize {
        self.state.pagination.range(self.filtered_count()).len()
    }

    fn cursor_key(&self) -> Option<String> {
        self.page_rows()
            .into_iter()
            .nth(self.state.cursor)
            .map(|page_row| page_row.key)
    }

    fn cursor_row(&self) -> Option<&T> {
        self.page_rows()
            .into_iter()
            .nth(self.state.cursor)
            .map(|page_row| page_row.row)
    }

    /// Selected rows as full objects, in data order.
    pub fn selected_rows(&self) -> Vec<T> {
        self.data
            .iter()
            .zip(&self.keys)
            .filter(|(_, key)| self.state.is_selected(key))
            .map(|(row, _)| row.clone())
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.state.selected_count()
    }

    pub fn visible_controls(&self) -> Vec<BulkControl> {
        visible_controls(self.selected_count())
    }

    pub fn header_checkbox(&self) -> HeaderCheckbox {
        let filtered = self.filtered_indices();
        let selected = filtered
            .iter()
            .filter(|&&index| self.state.is_selected(&self.keys[index]))
            .count();

        if !filtered.is_empty() && selected == filtered.len() {
            HeaderCheckbox::Checked
        } else if selected > 0 {
            HeaderCheckbox::Indeterminate
        } else {
            HeaderCheckbox::Unchecked
        }
    }

    /// Text for one cell. The leading columns render the checkbox and the
    /// thumbnail marker.
    pub fn cell_text(&self, column: &TableColumn<T>, page_row: &PageRow<'_, T>) -> String {
        match column {
            TableColumn::Select => row_checkbox(page_row.selected).to_string(),
            TableColumn::Image => match page_row.row.image_src() {
                Some(src) if !src.is_empty() => IMAGE_THUMBNAIL.to_string(),
                _ => IMAGE_PLACEHOLDER.to_string(),
            },
            TableColumn::Data(def) => def.render(page_row.row),
        }
    }

    pub fn pagination_summary(&self) -> String {
        self.state.pagination.summary(self.filtered_count())
    }
}

fn compute_keys<T: TableRow>(data: &[T]) -> Vec<String> {
    data.iter()
        .enumerate()
        .map(|(index, row)| row_key(row, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::table::row::test_rows::*;
    use crate::ui::table::sorting::SortFn;
    use crate::ui::table::state::EMPTY_STATE_TEXT;
    use std::time::Instant;

    fn columns() -> Vec<ColumnDef<Item>> {
        vec![
            ColumnDef::accessor("name", "Name").sort_by(SortFn::CaseInsensitive),
            ColumnDef::accessor("price", "Price").sort_by(SortFn::Numeric),
        ]
    }

    fn table_of(data: Vec<Item>) -> DataTable<Item> {
        DataTable::new("Items", data, columns())
    }

    fn page_ids(table: &DataTable<Item>) -> Vec<String> {
        table.page_rows().into_iter().map(|r| r.key).collect()
    }

    fn selection_of(events: &[TableEvent<Item>]) -> Option<Vec<String>> {
        events.iter().find_map(|event| match event {
            TableEvent::SelectionChanged(rows) => {
                Some(rows.iter().filter_map(|r| r.id.clone()).collect())
            }
            _ => None,
        })
    }

    #[test]
    fn test_select_all_counts_filtered_rows_only() {
        let mut table = table_of(twelve_items());
        table.dispatch(TableAction::SetFilter("item 1".to_string()));
        // "item 1", "item 10", "item 11", "item 12"
        assert_eq!(table.filtered_count(), 4);

        let events = table.dispatch(TableAction::ToggleAll);
        assert_eq!(table.selected_count(), 4);
        assert_eq!(table.header_checkbox(), HeaderCheckbox::Checked);
        assert_eq!(
            selection_of(&events),
            Some(vec![
                "r01".to_string(),
                "r10".to_string(),
                "r11".to_string(),
                "r12".to_string()
            ])
        );

        table.dispatch(TableAction::ToggleAll);
        assert_eq!(table.selected_count(), 0);
    }

    #[test]
    fn test_toggle_row_twice_restores_selection() {
        let mut table = table_of(twelve_items());
        table.dispatch(TableAction::ToggleRow("r03".to_string()));
        let before = table.state.row_selection.clone();

        let first = table.dispatch(TableAction::ToggleRow("r05".to_string()));
        let second = table.dispatch(TableAction::ToggleRow("r05".to_string()));

        assert_eq!(table.state.row_selection, before);
        assert_eq!(selection_of(&first).map(|ids| ids.len()), Some(2));
        assert_eq!(selection_of(&second), Some(vec!["r03".to_string()]));
    }

    #[test]
    fn test_unknown_row_toggle_is_ignored() {
        let mut table = table_of(twelve_items());
        let events = table.dispatch(TableAction::ToggleRow("nope".to_string()));
        assert!(events.is_empty());
        assert_eq!(table.selected_count(), 0);
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let data = twelve_items();
        let mut table = table_of(data.clone());
        table.dispatch(TableAction::SetFilter(String::new()));
        table.dispatch(TableAction::SetPageSize(15));

        let rows: Vec<Item> = table.page_rows().into_iter().map(|r| r.row.clone()).collect();
        assert_eq!(rows, data);
    }

    #[test]
    fn test_unmatched_filter_renders_empty_state() {
        let mut table = table_of(twelve_items());
        table.dispatch(TableAction::SetFilter("durian".to_string()));
        assert_eq!(table.filtered_count(), 0);
        assert_eq!(table.body(), TableBody::Empty);
        assert_eq!(EMPTY_STATE_TEXT, "No data found");
    }

    #[test]
    fn test_sort_reversal() {
        let data = vec![
            item("a", "Carrot", 3.0),
            item("b", "Apple", 10.0),
            item("c", "Bean", 1.5),
            item("d", "Date", 7.0),
        ];
        let mut table = table_of(data);

        table.dispatch(TableAction::ToggleSort("price".to_string()));
        let ascending: Vec<f64> = table.page_rows().iter().map(|r| r.row.price).collect();
        assert_eq!(ascending, vec![1.5, 3.0, 7.0, 10.0]);

        table.dispatch(TableAction::ToggleSort("price".to_string()));
        let descending: Vec<f64> = table.page_rows().iter().map(|r| r.row.price).collect();
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);

        table.dispatch(TableAction::ToggleSort("price".to_string()));
        assert_eq!(page_ids(&table), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_leading_columns_are_not_sortable() {
        let mut table = table_of(twelve_items());
        table.dispatch(TableAction::ToggleSort("select".to_string()));
        table.dispatch(TableAction::ToggleSort("image_src".to_string()));
        assert!(table.state.sorting.entries().is_empty());
    }

    #[test]
    fn test_column_focus_wraps() {
        let mut table = table_of(twelve_items());
        assert_eq!(table.sortable_column_ids(), vec!["name", "price"]);
        assert_eq!(table.focused_column_id(), Some("name"));

        table.dispatch(TableAction::FocusNextColumn);
        assert_eq!(table.focused_column_id(), Some("price"));
        table.dispatch(TableAction::FocusNextColumn);
        assert_eq!(table.focused_column_id(), Some("name"));
        table.dispatch(TableAction::FocusPreviousColumn);
        assert_eq!(table.focused_column_id(), Some("price"));
    }

    #[test]
    fn test_pagination_of_twelve_rows() {
        let mut table = table_of(twelve_items());
        table.dispatch(TableAction::SetPageSize(5));
        assert_eq!(page_ids(&table), vec!["r01", "r02", "r03", "r04", "r05"]);

        table.dispatch(TableAction::SetPage(1));
        assert_eq!(page_ids(&table), vec!["r06", "r07", "r08", "r09", "r10"]);

        table.dispatch(TableAction::SetPage(2));
        assert_eq!(page_ids(&table), vec!["r11", "r12"]);

        table.dispatch(TableAction::SetPageSize(10));
        assert_eq!(table.state.pagination.page_index, 0);
        assert_eq!(page_ids(&table).len(), 10);
        assert_eq!(page_ids(&table)[0], "r01");
        assert_eq!(page_ids(&table)[9], "r10");
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut table = table_of(twelve_items());
        table.dispatch(TableAction::SetPageSize(5));
        table.dispatch(TableAction::SetPage(2));
        table.dispatch(TableAction::SetFilter("item".to_string()));
        assert_eq!(table.state.pagination.page_index, 0);
    }

    #[test]
    fn test_cycle_page_size() {
        let mut table = table_of(twelve_items());
        assert_eq!(table.state.pagination.page_size, 10);
        table.dispatch(TableAction::CyclePageSize);
        assert_eq!(table.state.pagination.page_size, 15);
        table.dispatch(TableAction::CyclePageSize);
        assert_eq!(table.state.pagination.page_size, 5);
    }

    #[test]
    fn test_controls_follow_selection_count() {
        let mut table = table_of(twelve_items());
        let controls = table.visible_controls();
        assert!(controls.contains(&BulkControl::AddNew));
        assert!(controls.contains(&BulkControl::ExportCsv));
        assert!(!controls.contains(&BulkControl::EditData));
        assert!(!controls.contains(&BulkControl::DeleteData));

        table.dispatch(TableAction::ToggleRow("r01".to_string()));
        let controls = table.visible_controls();
        assert!(controls.contains(&BulkControl::EditData));
        assert!(controls.contains(&BulkControl::DeleteData));

        table.dispatch(TableAction::ToggleRow("r02".to_string()));
        let controls = table.visible_controls();
        assert!(!controls.contains(&BulkControl::EditData));
        assert!(controls.contains(&BulkControl::DeleteData));
    }

    #[test]
    fn test_confirm_delete_emits_selected_rows_and_closes() {
        let a = item("a", "Apple", 1.0);
        let b = item("b", "Bread", 2.0);
        let mut table = table_of(vec![a.clone(), b.clone(), item("c", "Corn", 3.0)]);
        table.dispatch(TableAction::ToggleRow("b".to_string()));
        table.dispatch(TableAction::ToggleRow("a".to_string()));

        table.dispatch(TableAction::OpenDeleteDialog);
        assert!(table.state.is_delete_dialog_open());

        let events = table.dispatch(TableAction::ConfirmDelete);
        assert_eq!(events, vec![TableEvent::DeleteRequested(vec![a, b])]);
        assert!(!table.state.is_delete_dialog_open());

        // A stray confirm with the dialog closed does nothing
        assert!(table.dispatch(TableAction::ConfirmDelete).is_empty());
    }

    #[test]
    fn test_cancel_delete_emits_nothing() {
        let mut table = table_of(twelve_items());
        table.dispatch(TableAction::ToggleRow("r01".to_string()));
        table.dispatch(TableAction::OpenDeleteDialog);
        let events = table.dispatch(TableAction::CancelDelete);
        assert!(events.is_empty());
        assert_eq!(table.state.mode, TableMode::Browse);
        assert_eq!(table.selected_count(), 1);
    }

    #[test]
    fn test_delete_dialog_needs_selection() {
        let mut table = table_of(twelve_items());
        table.dispatch(TableAction::OpenDeleteDialog);
        assert!(!table.state.is_delete_dialog_open());
    }

    #[test]
    fn test_edit_requires_exactly_one_selected() {
        let mut table = table_of(twelve_items());
        assert!(table.dispatch(TableAction::RequestEdit).is_empty());

        table.dispatch(TableAction::ToggleRow("r04".to_string()));
        let events = table.dispatch(TableAction::RequestEdit);
        assert_eq!(events, vec![TableEvent::EditRequested(twelve_items()[3].clone())]);

        table.dispatch(TableAction::ToggleRow("r05".to_string()));
        assert!(table.dispatch(TableAction::RequestEdit).is_empty());
    }

    #[test]
    fn test_export_and_add_requests() {
        let data = twelve_items();
        let mut table = table_of(data.clone());
        table.dispatch(TableAction::SetFilter("item 2".to_string()));

        let events = table.dispatch(TableAction::RequestExport);
        assert_eq!(
            events,
            vec![TableEvent::ExportRequested {
                rows: data,
                filename: "Items".to_string()
            }]
        );
        assert_eq!(
            table.dispatch(TableAction::RequestAdd),
            vec![TableEvent::AddRequested]
        );
    }

    #[test]
    fn test_checkbox_toggle_does_not_activate_row() {
        let mut table = table_of(twelve_items());
        table.dispatch(TableAction::CursorDown);
        let events = table.dispatch(TableAction::ToggleCursorRow);
        assert!(events
            .iter()
            .all(|event| !matches!(event, TableEvent::RowActivated(_))));
        assert!(table.state.is_selected("r02"));

        let events = table.dispatch(TableAction::ActivateRow);
        assert_eq!(events, vec![TableEvent::RowActivated(twelve_items()[1].clone())]);
    }

    #[test]
    fn test_cursor_stays_on_page() {
        let mut table = table_of(twelve_items());
        table.dispatch(TableAction::SetPageSize(5));
        for _ in 0..10 {
            table.dispatch(TableAction::CursorDown);
        }
        assert_eq!(table.state.cursor, 4);
        table.dispatch(TableAction::CursorUp);
        assert_eq!(table.state.cursor, 3);
    }

    #[test]
    fn test_header_checkbox_states() {
        let mut table = table_of(twelve_items());
        assert_eq!(table.header_checkbox(), HeaderCheckbox::Unchecked);
        table.dispatch(TableAction::ToggleRow("r01".to_string()));
        assert_eq!(table.header_checkbox(), HeaderCheckbox::Indeterminate);
        table.dispatch(TableAction::ToggleAll);
        assert_eq!(table.header_checkbox(), HeaderCheckbox::Checked);
        assert_eq!(table.selected_count(), 12);
    }

    #[test]
    fn test_debounced_search_applies_last_term() {
        let start = Instant::now();
        let mut table = DataTable::with_options(
            "Items",
            twelve_items(),
            columns(),
            10,
            Duration::from_millis(500),
        );
        table.dispatch(TableAction::StartSearch);
        assert!(table.state.is_searching());

        table.dispatch(TableAction::SearchInput('1', start));
        table.dispatch(TableAction::SearchInput('2', start + Duration::from_millis(200)));
        table.dispatch(TableAction::Tick(start + Duration::from_millis(600)));
        assert_eq!(table.state.global_filter, "");

        table.dispatch(TableAction::Tick(start + Duration::from_millis(700)));
        assert_eq!(table.state.global_filter, "12");
        assert_eq!(page_ids(&table), vec!["r12"]);
    }

    #[test]
    fn test_pending_search_dropped_when_rows_selected() {
        let start = Instant::now();
        let mut table = DataTable::with_options(
            "Items",
            twelve_items(),
            columns(),
            10,
            Duration::from_millis(500),
        );
        table.dispatch(TableAction::StartSearch);
        table.dispatch(TableAction::SearchInput('1', start));
        table.dispatch(TableAction::SearchInput('2', start));
        table.dispatch(TableAction::EndSearch);
        table.dispatch(TableAction::ToggleRow("r03".to_string()));

        table.dispatch(TableAction::Tick(start + Duration::from_millis(600)));
        assert_eq!(table.state.global_filter, "");
        assert_eq!(table.state.search_input, "");
        assert!(!table.state.search_debounce.is_pending());
        assert!(page_ids(&table).contains(&"r03".to_string()));
        assert_eq!(table.selected_count(), 1);
    }

    #[test]
    fn test_search_blocked_while_rows_selected() {
        let mut table = table_of(twelve_items());
        table.dispatch(TableAction::ToggleRow("r01".to_string()));
        table.dispatch(TableAction::StartSearch);
        assert!(!table.state.is_searching());
    }

    #[test]
    fn test_rows_without_id_use_positional_keys() {
        let mut first = item("x", "Plum", 1.0);
        first.id = None;
        let mut second = item("y", "Kiwi", 2.0);
        second.id = None;
        let mut table = table_of(vec![first, second]);
        assert_eq!(page_ids(&table), vec!["row-0", "row-1"]);

        table.dispatch(TableAction::ToggleRow("row-1".to_string()));
        assert_eq!(table.selected_rows()[0].name, "Kiwi");
    }

    #[test]
    fn test_set_data_prunes_selection() {
        let mut table = table_of(twelve_items());
        table.dispatch(TableAction::SetPageSize(5));
        table.dispatch(TableAction::ToggleRow("r11".to_string()));
        table.dispatch(TableAction::ToggleRow("r02".to_string()));
        table.dispatch(TableAction::SetPage(2));

        let remaining: Vec<Item> = twelve_items().into_iter().take(10).collect();
        let events = table.set_data(remaining);

        assert_eq!(selection_of(&events), Some(vec!["r02".to_string()]));
        assert_eq!(table.selected_count(), 1);
        assert_eq!(table.state.pagination.page_index, 1);
    }

    #[test]
    fn test_cell_text() {
        let mut with_image = item("a", "Apple", 1.25);
        with_image.image_src = Some("/img/apple.png".to_string());
        let mut empty_image = item("b", "Bread", 2.0);
        empty_image.image_src = Some(String::new());

        let mut table = table_of(vec![with_image, empty_image]);
        table.dispatch(TableAction::ToggleRow("a".to_string()));
        let rows = table.page_rows();
        let columns = table.columns();

        assert_eq!(table.cell_text(&columns[0], &rows[0]), "[x]");
        assert_eq!(table.cell_text(&columns[0], &rows[1]), "[ ]");
        assert_eq!(table.cell_text(&columns[1], &rows[0]), IMAGE_THUMBNAIL);
        assert_eq!(table.cell_text(&columns[1], &rows[1]), IMAGE_PLACEHOLDER);
        assert_eq!(table.cell_text(&columns[3], &rows[0]), "1.25");
    }
}
