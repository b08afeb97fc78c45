use super::row::TableRow;
use super::state::{BulkControl, TableAction, TableMode};
use super::table::DataTable;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Translates keyboard input into table actions.
///
/// Bulk-action keys are only bound while the matching control is visible,
/// mirroring what the toolbar shows.
#[derive(Default)]
pub struct TableKeyHandler;

impl TableKeyHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key<T: TableRow>(
        &self,
        key: KeyEvent,
        table: &DataTable<T>,
        now: Instant,
    ) -> Option<TableAction> {
        match table.state.mode {
            TableMode::Browse => self.handle_browse_key(key, table),
            TableMode::Search => self.handle_search_key(key, now),
            TableMode::DeleteConfirm => self.handle_delete_confirm_key(key),
        }
    }

    fn handle_browse_key<T: TableRow>(
        &self,
        key: KeyEvent,
        table: &DataTable<T>,
    ) -> Option<TableAction> {
        let controls = table.visible_controls();
        let shown = |control: BulkControl| controls.contains(&control);

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(TableAction::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(TableAction::CursorDown),
            KeyCode::Left | KeyCode::Char('h') => Some(TableAction::PreviousPage),
            KeyCode::Right | KeyCode::Char('l') => Some(TableAction::NextPage),
            KeyCode::Char(' ') => Some(TableAction::ToggleCursorRow),
            KeyCode::Char('*') => Some(TableAction::ToggleAll),
            KeyCode::Enter => Some(TableAction::ActivateRow),
            KeyCode::Char('p') => Some(TableAction::CyclePageSize),
            KeyCode::Char('[') => Some(TableAction::FocusPreviousColumn),
            KeyCode::Char(']') => Some(TableAction::FocusNextColumn),
            KeyCode::Char('s') => table
                .focused_column_id()
                .map(|id| TableAction::ToggleSort(id.to_string())),
            KeyCode::Char('/') if shown(BulkControl::Search) => Some(TableAction::StartSearch),
            KeyCode::Char('a') if shown(BulkControl::AddNew) => Some(TableAction::RequestAdd),
            KeyCode::Char('x') if shown(BulkControl::ExportCsv) => {
                Some(TableAction::RequestExport)
            }
            KeyCode::Char('e') if shown(BulkControl::EditData) => Some(TableAction::RequestEdit),
            KeyCode::Char('d') | KeyCode::Delete if shown(BulkControl::DeleteData) => {
                Some(TableAction::OpenDeleteDialog)
            }
            _ => None,
        }
    }

    fn handle_search_key(&self, key: KeyEvent, now: Instant) -> Option<TableAction> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(TableAction::EndSearch),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(TableAction::EndSearch)
            }
            KeyCode::Backspace => Some(TableAction::SearchBackspace(now)),
            KeyCode::Char(c) => Some(TableAction::SearchInput(c, now)),
            _ => None,
        }
    }

    fn handle_delete_confirm_key(&self, key: KeyEvent) -> Option<TableAction> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => Some(TableAction::ConfirmDelete),
            KeyCode::Esc | KeyCode::Char('n') => Some(TableAction::CancelDelete),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(TableAction::CancelDelete)
            }
            _ => None,
        }
    }
}
