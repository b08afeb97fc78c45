use super::column::TableColumn;
use super::row::TableRow;
use super::state::{
    BulkControl, DELETE_CANCEL_LABEL, DELETE_CONFIRM_LABEL, DELETE_DIALOG_BODY,
    DELETE_DIALOG_TITLE, EMPTY_STATE_TEXT, SEARCH_PLACEHOLDER,
};
use super::table::{DataTable, TableBody};
use crate::ui::rendering::*;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

pub fn render_table<T: TableRow>(f: &mut Frame, area: Rect, table: &DataTable<T>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    render_toolbar(f, layout[0], table);
    render_grid(f, layout[1], table);
    render_pagination(f, layout[2], table);

    if table.state.is_delete_dialog_open() {
        render_delete_dialog(f);
    }
}

fn render_toolbar<T: TableRow>(f: &mut Frame, area: Rect, table: &DataTable<T>) {
    let mut spans = vec![
        Span::styled("Rows ", Style::default().fg(COLOR_LIGHT_GRAY)),
        Span::styled(
            format!("[{}]", table.state.pagination.page_size),
            Style::default().fg(COLOR_WHITE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" (p)   ", Style::default().fg(COLOR_GRAY)),
    ];

    for control in table.visible_controls() {
        match control {
            BulkControl::Search => spans.extend(search_spans(table)),
            BulkControl::ExportCsv => {
                spans.extend(create_key_hint("x", control.label(), COLOR_LIGHT_GRAY))
            }
            BulkControl::AddNew => spans.extend(create_key_hint("a", control.label(), COLOR_BLUE)),
            BulkControl::EditData => {
                spans.extend(create_key_hint("e", control.label(), COLOR_ORANGE))
            }
            BulkControl::DeleteData => {
                spans.extend(create_key_hint("d", control.label(), COLOR_RED))
            }
        }
    }

    let selected = table.selected_count();
    if selected > 0 {
        spans.push(Span::styled(
            format!("{} selected", selected),
            Style::default().fg(COLOR_GREEN),
        ));
    }

    let toolbar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!(" {} ", table.table_name()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    f.render_widget(toolbar, area);
}

fn search_spans<T: TableRow>(table: &DataTable<T>) -> Vec<Span<'static>> {
    let input = &table.state.search_input;
    let (text, color) = if input.is_empty() && !table.state.is_searching() {
        (SEARCH_PLACEHOLDER.to_string(), COLOR_GRAY)
    } else if table.state.is_searching() {
        (format!("{input}_"), COLOR_WHITE)
    } else {
        (input.clone(), COLOR_NORMAL_TEXT)
    };

    vec![
        Span::styled("[/] ", Style::default().fg(COLOR_BLUE)),
        Span::styled(format!("{:<28}", text), Style::default().fg(color)),
        Span::raw("  "),
    ]
}

fn header_cell<T: TableRow>(table: &DataTable<T>, column: &TableColumn<T>) -> Cell<'static> {
    match column {
        TableColumn::Select => Cell::from(table.header_checkbox().glyph()),
        _ => {
            let indicator = table
                .state
                .sorting
                .direction_of(column.id())
                .map(|direction| format!(" {}", direction.indicator()))
                .unwrap_or_default();
            let mut style = Style::default()
                .fg(COLOR_LIGHT_GRAY)
                .add_modifier(Modifier::BOLD);
            if table.focused_column_id() == Some(column.id()) {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            Cell::from(format!("{}{}", column.header(), indicator)).style(style)
        }
    }
}

fn column_widths<T>(columns: &[TableColumn<T>]) -> Vec<Constraint> {
    columns
        .iter()
        .map(|column| match column {
            TableColumn::Select => Constraint::Length(3),
            TableColumn::Image => Constraint::Length(5),
            TableColumn::Data(_) => Constraint::Fill(1),
        })
        .collect()
}

fn render_grid<T: TableRow>(f: &mut Frame, area: Rect, table: &DataTable<T>) {
    let columns = table.columns();
    let header = Row::new(
        columns
            .iter()
            .map(|column| header_cell(table, column))
            .collect::<Vec<_>>(),
    )
    .height(1);

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));

    match table.body() {
        TableBody::Empty => {
            let grid = Table::new(Vec::<Row>::new(), column_widths(columns))
                .header(header)
                .block(block);
            f.render_widget(grid, area);

            // Full-width row under the header
            let empty_area = Rect {
                x: area.x,
                y: area.y.saturating_add(2).min(area.bottom().saturating_sub(1)),
                width: area.width,
                height: 1,
            };
            let empty = Paragraph::new(EMPTY_STATE_TEXT)
                .style(Style::default().fg(COLOR_GRAY))
                .alignment(Alignment::Center);
            f.render_widget(empty, empty_area);
        }
        TableBody::Rows(page_rows) => {
            let rows: Vec<Row> = page_rows
                .iter()
                .map(|page_row| {
                    let style = if page_row.selected {
                        Style::default().bg(COLOR_SELECTED_BG).fg(COLOR_WHITE)
                    } else {
                        Style::default().fg(COLOR_NORMAL_TEXT)
                    };
                    Row::new(
                        columns
                            .iter()
                            .map(|column| Cell::from(table.cell_text(column, page_row)))
                            .collect::<Vec<_>>(),
                    )
                    .style(style)
                })
                .collect();

            let grid = Table::new(rows, column_widths(columns))
                .header(header)
                .block(block)
                .highlight_style(Style::default().bg(COLOR_CURSOR_BG).add_modifier(Modifier::BOLD))
                .highlight_symbol("› ");

            let mut state = TableState::default();
            state.select(Some(table.state.cursor));
            f.render_stateful_widget(grid, area, &mut state);
        }
    }
}

fn render_pagination<T: TableRow>(f: &mut Frame, area: Rect, table: &DataTable<T>) {
    let total = table.filtered_count();
    let pagination = &table.state.pagination;
    let previous_color = if pagination.can_previous() { COLOR_WHITE } else { COLOR_GRAY };
    let next_color = if pagination.can_next(total) { COLOR_WHITE } else { COLOR_GRAY };

    let line = Line::from(vec![
        Span::styled(table.pagination_summary(), Style::default().fg(COLOR_LIGHT_GRAY)),
        Span::raw("   "),
        Span::styled("‹ ", Style::default().fg(previous_color)),
        Span::styled(
            format!(
                "Page {}/{}",
                pagination.page_index + 1,
                pagination.page_count(total)
            ),
            Style::default().fg(COLOR_NORMAL_TEXT),
        ),
        Span::styled(" ›", Style::default().fg(next_color)),
    ]);

    f.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}

fn render_delete_dialog(f: &mut Frame) {
    let area = create_dialog_area(f, 60, 30);

    let dialog = Paragraph::new(vec![
        Line::from(DELETE_DIALOG_BODY),
        Line::from(""),
        create_control_buttons_line(DELETE_CONFIRM_LABEL, DELETE_CANCEL_LABEL),
    ])
    .block(create_dialog_block(DELETE_DIALOG_TITLE, COLOR_RED))
    .style(create_dialog_style())
    .alignment(Alignment::Center)
    .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(dialog, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::table::column::ColumnDef;
    use crate::ui::table::row::test_rows::*;
    use crate::ui::table::state::TableAction;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(table: &DataTable<Item>) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_table(f, f.area(), table)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn create_test_table() -> DataTable<Item> {
        DataTable::new(
            "Items Table",
            twelve_items(),
            vec![
                ColumnDef::accessor("name", "Name"),
                ColumnDef::accessor("price", "Price"),
            ],
        )
    }

    #[test]
    fn test_renders_rows_and_controls() {
        let table = create_test_table();
        let text = rendered_text(&table);

        assert!(text.contains("Items Table"));
        assert!(text.contains("Item 1"));
        assert!(text.contains("Export to CSV"));
        assert!(text.contains("Add New"));
        assert!(!text.contains("Delete Data"));
        assert!(text.contains("Showing 1 to 10 of 12 entries"));
    }

    #[test]
    fn test_renders_single_empty_state_row() {
        let mut table = create_test_table();
        table.dispatch(TableAction::SetFilter("no such thing".to_string()));
        let text = rendered_text(&table);

        assert_eq!(text.matches(EMPTY_STATE_TEXT).count(), 1);
        assert!(!text.contains("Item 1"));
    }

    #[test]
    fn test_renders_sort_indicator() {
        let mut table = create_test_table();
        table.dispatch(TableAction::ToggleSort("price".to_string()));
        assert!(rendered_text(&table).contains("Price ▲"));

        table.dispatch(TableAction::ToggleSort("price".to_string()));
        assert!(rendered_text(&table).contains("Price ▼"));
    }

    #[test]
    fn test_renders_delete_dialog() {
        let mut table = create_test_table();
        table.dispatch(TableAction::ToggleRow("r01".to_string()));
        table.dispatch(TableAction::OpenDeleteDialog);
        let text = rendered_text(&table);

        assert!(text.contains(DELETE_DIALOG_TITLE));
        assert!(text.contains("Edit Data"));
        assert!(text.contains("Delete Data"));
    }
}
