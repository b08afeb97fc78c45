use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear},
    Frame,
};

pub const COLOR_GREEN: Color = Color::Rgb(34, 197, 94);
pub const COLOR_RED: Color = Color::Rgb(239, 68, 68);
pub const COLOR_BLUE: Color = Color::Rgb(99, 102, 241);
pub const COLOR_GRAY: Color = Color::Rgb(107, 114, 128);
pub const COLOR_WHITE: Color = Color::Rgb(255, 255, 255);
pub const COLOR_LIGHT_GRAY: Color = Color::Rgb(156, 163, 175);
pub const COLOR_BORDER: Color = Color::Rgb(75, 85, 99);
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 41, 59);
pub const COLOR_CURSOR_BG: Color = Color::Rgb(51, 65, 85);
pub const COLOR_NORMAL_TEXT: Color = Color::Rgb(229, 231, 235);
pub const COLOR_ORANGE: Color = Color::Rgb(245, 158, 11);
pub const COLOR_BLACK: Color = Color::Rgb(0, 0, 0);

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn create_dialog_area(f: &mut Frame, width: u16, height: u16) -> Rect {
    let area = centered_rect(width, height, f.area());
    f.render_widget(Clear, area);
    area
}

pub fn create_dialog_block<'a>(title: &'a str, border_color: Color) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_BLACK))
}

pub fn create_dialog_style() -> Style {
    Style::default().fg(COLOR_WHITE)
}

pub fn create_control_buttons_line<'a>(confirm_text: &'a str, cancel_text: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(COLOR_GREEN)),
        Span::raw(format!(" {confirm_text} • ")),
        Span::styled("[Esc]", Style::default().fg(COLOR_RED)),
        Span::raw(format!(" {cancel_text}")),
    ])
}

pub fn create_key_hint<'a>(key: &'a str, label: &'a str, color: Color) -> Vec<Span<'a>> {
    vec![
        Span::styled(format!("[{key}]"), Style::default().fg(color)),
        Span::raw(format!(" {label}  ")),
    ]
}

pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
