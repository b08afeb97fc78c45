use crate::cli::parser::BrowseArgs;
use crate::config::Config;
use crate::core::records::RecordKind;
use crate::core::store::CatalogStore;
use crate::ui::admin::AdminCoordinator;
use crate::utils::{PantryError, Result};
use anyhow::Result as AnyhowResult;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct App {
    coordinator: AdminCoordinator,
}

impl App {
    pub fn new(config: &Config, store: CatalogStore, screen: RecordKind) -> Self {
        Self {
            coordinator: AdminCoordinator::new(config, store, screen),
        }
    }

    pub fn run(&mut self) -> AnyhowResult<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AnyhowResult<()> {
        terminal.draw(|f| self.coordinator.render(f))?;

        loop {
            let mut dirty = false;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.coordinator.handle_key(key, Instant::now());
                        if self.coordinator.should_quit() {
                            break;
                        }
                        dirty = true;
                    }
                } else {
                    dirty = true;
                }
            }

            // Debounced search settles between keystrokes
            self.coordinator.tick(Instant::now());

            if dirty || self.coordinator.active_screen().is_capturing_input() {
                terminal.draw(|f| self.coordinator.render(f))?;
            }
        }
        Ok(())
    }
}

pub fn execute(config: Config, args: BrowseArgs) -> Result<()> {
    let config = crate::cli::with_data_dir(config, args.data_dir.as_deref());
    let store = CatalogStore::from_config(&config);
    log::info!(
        "Opening {:?} screen with data in {}",
        args.screen,
        store.data_dir().display()
    );

    let mut app = App::new(&config, store, args.screen);
    app.run().map_err(|e| {
        log::error!("Terminal UI failed: {}", e);
        PantryError::terminal_error(e.to_string())
    })
}
