use super::screen::{AdminScreen, CatalogScreen};
use crate::config::Config;
use crate::core::records::{Location, Order, Phone, Product, RecordKind, Transaction};
use crate::core::store::CatalogStore;
use crate::ui::rendering::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use std::time::Instant;

/// Top-level admin app: one screen per record kind, shown as tabs.
pub struct AdminCoordinator {
    screens: Vec<Box<dyn AdminScreen>>,
    active: usize,
    should_quit: bool,
}

impl AdminCoordinator {
    pub fn new(config: &Config, store: CatalogStore, initial: RecordKind) -> Self {
        let screens: Vec<Box<dyn AdminScreen>> = vec![
            Box::new(CatalogScreen::<Product>::new(store.clone(), config)),
            Box::new(CatalogScreen::<Phone>::new(store.clone(), config)),
            Box::new(CatalogScreen::<Location>::new(store.clone(), config)),
            Box::new(CatalogScreen::<Order>::new(store.clone(), config)),
            Box::new(CatalogScreen::<Transaction>::new(store, config)),
        ];
        let active = screens
            .iter()
            .position(|screen| screen.kind() == initial)
            .unwrap_or(0);

        Self {
            screens,
            active,
            should_quit: false,
        }
    }

    pub fn active_kind(&self) -> RecordKind {
        self.screens[self.active].kind()
    }

    pub fn active_screen(&self) -> &dyn AdminScreen {
        self.screens[self.active].as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if self.screens[self.active].is_capturing_input() {
            self.screens[self.active].handle_key(key, now);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Tab => self.activate((self.active + 1) % self.screens.len()),
            KeyCode::BackTab => {
                self.activate((self.active + self.screens.len() - 1) % self.screens.len())
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < self.screens.len() {
                    self.activate(index);
                }
            }
            _ => self.screens[self.active].handle_key(key, now),
        }
    }

    fn activate(&mut self, index: usize) {
        if index != self.active {
            self.active = index;
            self.screens[self.active].reload();
            log::debug!("Switched to {:?}", self.active_kind());
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.screens[self.active].tick(now);
    }

    pub fn render(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(2),
            ])
            .margin(1)
            .split(f.area());

        self.render_header(f, layout[0]);
        self.render_footer(f, layout[2]);
        // Dialogs of the screen draw over the whole frame, so the screen goes last.
        self.screens[self.active].render(f, layout[1]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let titles: Vec<Line> = self
            .screens
            .iter()
            .enumerate()
            .map(|(index, screen)| {
                Line::from(format!("{} {}", index + 1, screen.kind().tab_label()))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.active)
            .block(
                Block::default()
                    .title(" Pantry Admin ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(COLOR_BORDER)),
            )
            .style(Style::default().fg(COLOR_LIGHT_GRAY))
            .highlight_style(
                Style::default()
                    .fg(COLOR_WHITE)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        f.render_widget(tabs, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let status_line = match self.screens[self.active].status() {
            Some(status) => Line::from(Span::styled(
                status.text.clone(),
                Style::default().fg(if status.is_error() { COLOR_RED } else { COLOR_GREEN }),
            )),
            None => Line::from(""),
        };

        let mut hints = Vec::new();
        for (key, label) in [
            ("Tab", "Next tab"),
            ("Space", "Select"),
            ("*", "All"),
            ("Enter", "Details"),
            ("[ ]", "Column"),
            ("s", "Sort"),
            ("q", "Quit"),
        ] {
            hints.extend(create_key_hint(key, label, COLOR_BLUE));
        }

        f.render_widget(Paragraph::new(vec![status_line, Line::from(hints)]), area);
    }
}
