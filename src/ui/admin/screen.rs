use super::dialogs::{render_detail_dialog, render_form_dialog};
use super::form::{FormMode, FormOutcome, UpsertForm};
use super::types::StatusMessage;
use crate::config::Config;
use crate::core::export::export_csv;
use crate::core::records::{CatalogRecord, RecordKind};
use crate::core::store::CatalogStore;
use crate::ui::table::{render_table, DataTable, TableEvent, TableKeyHandler, TableMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;
use std::time::Instant;

/// One tab of the admin app, type-erased so the coordinator can hold a
/// mixed list.
pub trait AdminScreen {
    fn kind(&self) -> RecordKind;

    fn handle_key(&mut self, key: KeyEvent, now: Instant);

    fn tick(&mut self, now: Instant);

    fn reload(&mut self);

    /// True while a dialog, form or search box owns the keyboard.
    fn is_capturing_input(&self) -> bool;

    fn status(&self) -> Option<&StatusMessage>;

    fn render(&self, f: &mut Frame, area: Rect);
}

enum ScreenMode<T> {
    Table,
    Form(UpsertForm<T>),
    Detail(T),
}

/// Owner of one [`DataTable`]: loads rows from the store and carries out
/// whatever the table asks for.
pub struct CatalogScreen<T: CatalogRecord> {
    table: DataTable<T>,
    store: CatalogStore,
    export_dir: PathBuf,
    key_handler: TableKeyHandler,
    selection: Vec<T>,
    mode: ScreenMode<T>,
    status: Option<StatusMessage>,
}

impl<T: CatalogRecord> CatalogScreen<T> {
    pub fn new(store: CatalogStore, config: &Config) -> Self {
        let table = DataTable::with_options(
            T::TITLE,
            Vec::new(),
            T::columns(),
            config.table.default_page_size,
            config.search_debounce(),
        );

        let mut screen = Self {
            table,
            store,
            export_dir: PathBuf::from(config.export_dir()),
            key_handler: TableKeyHandler::new(),
            selection: Vec::new(),
            mode: ScreenMode::Table,
            status: None,
        };
        screen.reload();
        screen
    }

    pub fn table(&self) -> &DataTable<T> {
        &self.table
    }

    pub fn selection(&self) -> &[T] {
        &self.selection
    }

    pub fn form(&self) -> Option<&UpsertForm<T>> {
        match &self.mode {
            ScreenMode::Form(form) => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut UpsertForm<T>> {
        match &mut self.mode {
            ScreenMode::Form(form) => Some(form),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&T> {
        match &self.mode {
            ScreenMode::Detail(record) => Some(record),
            _ => None,
        }
    }

    fn handle_events(&mut self, events: Vec<TableEvent<T>>) {
        for event in events {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: TableEvent<T>) {
        match event {
            TableEvent::SelectionChanged(rows) => {
                log::debug!("[{}] {} rows selected", T::COLLECTION, rows.len());
                self.selection = rows;
            }
            TableEvent::RowActivated(row) => self.mode = ScreenMode::Detail(row),
            TableEvent::AddRequested => self.mode = ScreenMode::Form(UpsertForm::for_add()),
            TableEvent::EditRequested(row) => {
                self.mode = ScreenMode::Form(UpsertForm::for_edit(&row))
            }
            TableEvent::DeleteRequested(rows) => self.delete_rows(rows),
            TableEvent::ExportRequested { rows, filename } => {
                self.status = Some(match export_csv(&rows, &self.export_dir, &filename) {
                    Ok(path) => StatusMessage::info(format!("Exported to {}", path.display())),
                    Err(e) => StatusMessage::error(e.to_string()),
                });
            }
        }
    }

    fn delete_rows(&mut self, rows: Vec<T>) {
        let ids: Vec<String> = rows
            .iter()
            .filter_map(|row| row.id().map(str::to_string))
            .collect();

        match self.store.delete::<T>(&ids) {
            Ok(removed) => {
                self.reload();
                self.status = Some(StatusMessage::info(format!(
                    "Deleted {} {}",
                    removed,
                    if removed == 1 { "record" } else { "records" }
                )));
            }
            Err(e) => self.status = Some(StatusMessage::error(e.to_string())),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let ScreenMode::Form(form) = &mut self.mode else {
            return;
        };

        match form.handle_key(key) {
            FormOutcome::Continue => {}
            FormOutcome::Cancel => self.mode = ScreenMode::Table,
            FormOutcome::Submit => self.submit_form(),
        }
    }

    fn submit_form(&mut self) {
        let ScreenMode::Form(form) = &mut self.mode else {
            return;
        };

        let saved = form.to_record().and_then(|record| match form.mode {
            FormMode::Add => self.store.insert(record),
            FormMode::Edit { .. } => self.store.update(record),
        });

        match saved {
            Ok(record) => {
                let verb = if form.is_edit() { "Updated" } else { "Added" };
                let message = format!("{} {}", verb, record.id().unwrap_or_default());
                self.mode = ScreenMode::Table;
                self.reload();
                self.status = Some(StatusMessage::info(message));
            }
            Err(e) => form.error = Some(e.to_string()),
        }
    }
}

impl<T: CatalogRecord> AdminScreen for CatalogScreen<T> {
    fn kind(&self) -> RecordKind {
        T::KIND
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match &self.mode {
            ScreenMode::Table => {
                self.status = None;
                if let Some(action) = self.key_handler.handle_key(key, &self.table, now) {
                    let events = self.table.dispatch(action);
                    self.handle_events(events);
                }
            }
            ScreenMode::Form(_) => self.handle_form_key(key),
            ScreenMode::Detail(_) => {
                let close = matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' '))
                    || (key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL));
                if close {
                    self.mode = ScreenMode::Table;
                }
            }
        }
    }

    fn tick(&mut self, now: Instant) {
        let events = self.table.dispatch(crate::ui::table::TableAction::Tick(now));
        self.handle_events(events);
    }

    fn reload(&mut self) {
        match self.store.load::<T>() {
            Ok(records) => {
                let events = self.table.set_data(records);
                self.handle_events(events);
            }
            Err(e) => {
                log::error!("[{}] reload failed: {}", T::COLLECTION, e);
                self.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }

    fn is_capturing_input(&self) -> bool {
        !matches!(self.mode, ScreenMode::Table) || self.table.state.mode != TableMode::Browse
    }

    fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    fn render(&self, f: &mut Frame, area: Rect) {
        render_table(f, area, &self.table);
        match &self.mode {
            ScreenMode::Table => {}
            ScreenMode::Form(form) => render_form_dialog(f, form),
            ScreenMode::Detail(record) => render_detail_dialog(f, record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::default_config;
    use crate::core::records::{Order, Product};
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn create_test_setup() -> (TempDir, Config, CatalogStore) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut config = default_config();
        config.store.data_dir = temp_dir.path().join("data").to_string_lossy().to_string();
        config.store.export_dir = temp_dir.path().join("exports").to_string_lossy().to_string();
        let store = CatalogStore::from_config(&config);
        store.seed_demo(false).expect("Failed to seed store");
        (temp_dir, config, store)
    }

    #[test]
    fn test_screen_loads_store_rows() {
        let (_temp_dir, config, store) = create_test_setup();
        let screen = CatalogScreen::<Product>::new(store.clone(), &config);

        let expected = store.load::<Product>().unwrap().len();
        assert_eq!(screen.table().data().len(), expected);
        assert_eq!(screen.table().table_name(), "Products Table");
        assert_eq!(screen.kind(), RecordKind::Products);
    }

    #[test]
    fn test_selection_changed_is_remembered() {
        let (_temp_dir, config, store) = create_test_setup();
        let mut screen = CatalogScreen::<Product>::new(store, &config);
        let now = Instant::now();

        screen.handle_key(key(KeyCode::Char(' ')), now);
        assert_eq!(screen.selection().len(), 1);

        screen.handle_key(key(KeyCode::Char(' ')), now);
        assert!(screen.selection().is_empty());
    }

    #[test]
    fn test_delete_flow_removes_rows_from_store() {
        let (_temp_dir, config, store) = create_test_setup();
        let mut screen = CatalogScreen::<Product>::new(store.clone(), &config);
        let now = Instant::now();
        let before = screen.table().data().len();

        screen.handle_key(key(KeyCode::Char(' ')), now);
        screen.handle_key(key(KeyCode::Down), now);
        screen.handle_key(key(KeyCode::Char(' ')), now);
        screen.handle_key(key(KeyCode::Char('d')), now);
        assert!(screen.is_capturing_input());
        screen.handle_key(key(KeyCode::Enter), now);

        assert_eq!(store.load::<Product>().unwrap().len(), before - 2);
        assert_eq!(screen.table().data().len(), before - 2);
        assert!(screen.selection().is_empty());
        assert_eq!(
            screen.status().map(|s| s.text.as_str()),
            Some("Deleted 2 records")
        );
        assert!(!screen.is_capturing_input());
    }

    #[test]
    fn test_delete_failure_becomes_error_status() {
        let (_temp_dir, config, store) = create_test_setup();
        let mut screen = CatalogScreen::<Product>::new(store.clone(), &config);
        let now = Instant::now();
        let before = screen.table().data().len();

        std::fs::write(store.collection_path::<Product>(), "{ not json")
            .expect("Failed to corrupt collection");

        screen.handle_key(key(KeyCode::Char(' ')), now);
        screen.handle_key(key(KeyCode::Char('d')), now);
        screen.handle_key(key(KeyCode::Enter), now);

        assert!(screen.status().is_some_and(|status| status.is_error()));
        assert!(!screen.is_capturing_input());
        assert_eq!(screen.table().data().len(), before);
        assert_eq!(screen.selection().len(), 1);
    }

    #[test]
    fn test_add_form_inserts_record() {
        let (_temp_dir, config, store) = create_test_setup();
        let mut screen = CatalogScreen::<Product>::new(store.clone(), &config);
        let now = Instant::now();
        let before = screen.table().data().len();

        screen.handle_key(key(KeyCode::Char('a')), now);
        let form = screen.form_mut().expect("form should be open");
        form.set_value("name", "Kale");
        form.set_value("price", "2.5");
        form.set_value("stock", "8");
        screen.handle_key(key(KeyCode::Enter), now);

        assert!(screen.form().is_none());
        assert_eq!(store.load::<Product>().unwrap().len(), before + 1);
        assert_eq!(screen.table().data().len(), before + 1);
        assert!(screen.status().unwrap().text.starts_with("Added "));
    }

    #[test]
    fn test_invalid_form_stays_open_with_error() {
        let (_temp_dir, config, store) = create_test_setup();
        let mut screen = CatalogScreen::<Product>::new(store, &config);
        let now = Instant::now();

        screen.handle_key(key(KeyCode::Char('a')), now);
        screen.handle_key(key(KeyCode::Enter), now);

        let form = screen.form().expect("form should still be open");
        assert_eq!(form.error.as_deref(), Some("Invalid record: name is required"));
    }

    #[test]
    fn test_edit_form_updates_record() {
        let (_temp_dir, config, store) = create_test_setup();
        let mut screen = CatalogScreen::<Order>::new(store.clone(), &config);
        let now = Instant::now();

        screen.handle_key(key(KeyCode::Char(' ')), now);
        screen.handle_key(key(KeyCode::Char('e')), now);
        let form = screen.form_mut().expect("edit form should be open");
        assert!(form.is_edit());
        form.set_value("customer_name", "Renamed Customer");
        screen.handle_key(key(KeyCode::Enter), now);

        let orders = store.load::<Order>().unwrap();
        assert!(orders.iter().any(|o| o.customer_name == "Renamed Customer"));
        assert!(screen.status().unwrap().text.starts_with("Updated "));
    }

    #[test]
    fn test_export_writes_csv_and_reports_path() {
        let (temp_dir, config, store) = create_test_setup();
        let mut screen = CatalogScreen::<Product>::new(store, &config);

        screen.handle_key(key(KeyCode::Char('x')), Instant::now());

        let path = temp_dir.path().join("exports").join("Products Table.csv");
        assert!(path.exists());
        assert!(screen.status().unwrap().text.contains("Products Table.csv"));
    }

    #[test]
    fn test_row_activation_opens_detail() {
        let (_temp_dir, config, store) = create_test_setup();
        let mut screen = CatalogScreen::<Product>::new(store, &config);
        let now = Instant::now();

        screen.handle_key(key(KeyCode::Enter), now);
        assert!(screen.detail().is_some());
        assert!(screen.selection().is_empty());

        screen.handle_key(key(KeyCode::Esc), now);
        assert!(screen.detail().is_none());
    }

    #[test]
    fn test_search_applies_after_tick() {
        let (_temp_dir, config, store) = create_test_setup();
        let mut screen = CatalogScreen::<Product>::new(store, &config);
        let start = Instant::now();

        screen.handle_key(key(KeyCode::Char('/')), start);
        for c in "honey".chars() {
            screen.handle_key(key(KeyCode::Char(c)), start);
        }
        screen.tick(start);
        assert!(screen.table().filtered_count() > 1);

        screen.tick(start + config.search_debounce());
        assert_eq!(screen.table().filtered_count(), 1);
    }
}
