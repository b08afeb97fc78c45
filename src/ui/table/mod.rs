//! Generic row-selectable table.
//!
//! - `row`: the [`TableRow`] contract and row identity
//! - `column`: caller column definitions and the fixed leading columns
//! - `filter`, `sorting`, `pagination`: the row projection pipeline
//! - `debounce`: deadline-based search debouncing
//! - `state`: view state, actions, events and control visibility
//! - `table`: [`DataTable`], the reducer tying it all together
//! - `event_handler`: keyboard mapping onto table actions
//! - `render`: ratatui rendering

pub mod column;
pub mod debounce;
pub mod event_handler;
pub mod filter;
pub mod pagination;
pub mod render;
pub mod row;
pub mod sorting;
pub mod state;
pub mod table;

pub use column::{ColumnDef, TableColumn};
pub use debounce::Debouncer;
pub use event_handler::TableKeyHandler;
pub use pagination::{PaginationState, PAGE_SIZE_OPTIONS};
pub use render::render_table;
pub use row::TableRow;
pub use sorting::{SortDirection, SortFn, SortingState};
pub use state::{BulkControl, TableAction, TableEvent, TableMode, TableViewState};
pub use table::{DataTable, PageRow, TableBody};
