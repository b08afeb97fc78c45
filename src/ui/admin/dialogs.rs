use super::form::{FieldKind, UpsertForm};
use crate::core::records::CatalogRecord;
use crate::ui::rendering::*;
use crate::ui::table::row::{row_fields, value_text};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const LABEL_WIDTH: usize = 16;

pub fn render_form_dialog<T: CatalogRecord>(f: &mut Frame, form: &UpsertForm<T>) {
    let area = create_dialog_area(f, 60, 60);
    let title = format!(" {} ", form.title());

    let mut lines = Vec::with_capacity(form.fields.len() + 4);
    for (index, field) in form.fields.iter().enumerate() {
        let focused = index == form.focused;
        let label_style = if focused {
            Style::default().fg(COLOR_BLUE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_LIGHT_GRAY)
        };
        let value = if focused {
            format!("{}_", field.value)
        } else if field.value.is_empty() && field.kind == FieldKind::OptionalText {
            "(none)".to_string()
        } else {
            field.value.clone()
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!(
                    "{:<width$}",
                    truncate_text(&field.label, LABEL_WIDTH),
                    width = LABEL_WIDTH
                ),
                label_style,
            ),
            Span::styled(value, Style::default().fg(COLOR_WHITE)),
        ]));
    }

    lines.push(Line::from(""));
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(COLOR_RED),
        )));
    }
    lines.push(Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(COLOR_BLUE)),
        Span::raw(" next field • "),
        Span::styled("[Enter]", Style::default().fg(COLOR_GREEN)),
        Span::raw(" save • "),
        Span::styled("[Esc]", Style::default().fg(COLOR_RED)),
        Span::raw(" cancel"),
    ]));

    let dialog = Paragraph::new(lines)
        .block(create_dialog_block(&title, COLOR_BLUE))
        .style(create_dialog_style());
    f.render_widget(dialog, area);
}

pub fn render_detail_dialog<T: CatalogRecord>(f: &mut Frame, record: &T) {
    let area = create_dialog_area(f, 60, 60);
    let title = format!(" {} detail ", T::KIND.tab_label());

    let mut lines: Vec<Line> = row_fields(record)
        .iter()
        .map(|(key, value)| {
            let text = value_text(value);
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", key, width = LABEL_WIDTH),
                    Style::default().fg(COLOR_LIGHT_GRAY),
                ),
                Span::styled(
                    if text.is_empty() { "-".to_string() } else { text },
                    Style::default().fg(COLOR_WHITE),
                ),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(COLOR_GREEN)),
        Span::raw(" or "),
        Span::styled("[Esc]", Style::default().fg(COLOR_GREEN)),
        Span::raw(" to close"),
    ]));

    let dialog = Paragraph::new(lines)
        .block(create_dialog_block(&title, COLOR_GREEN))
        .style(create_dialog_style())
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    f.render_widget(dialog, area);
}
