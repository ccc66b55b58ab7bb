// File: ./src/tui/mod.rs
// Entry point and main loop for the TUI application.
pub mod action;
pub mod handlers;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::context::AppContext;
use crate::storage::LocalStorage;
use crate::store::EventStore;
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, time::Duration};

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

fn apply(action: Action, state: &mut AppState, ctx: &dyn AppContext) {
    match action {
        Action::OpenLink(link) => {
            log::info!("Opening {}", link);
            state.message = match open::that(&link) {
                Ok(()) => format!("Opened {}", link),
                Err(e) => {
                    log::warn!("Failed to open browser: {}. URL: {}", e, link);
                    format!("Could not open {}: {}", link, e)
                }
            };
        }
        Action::Reload => match LocalStorage::load(ctx) {
            Ok(events) => {
                let day = state.current_date();
                state.store.replace_all(events);
                state.refresh_dates(day);
                state.message = format!("Reloaded {} events.", state.store.len());
            }
            Err(e) => {
                log::error!("Reload failed: {:#}", e);
                state.message = format!("Error: {}", e);
            }
        },
        Action::Quit => {}
    }
}

pub fn run(ctx: &dyn AppContext, cfg: &Config) -> Result<()> {
    // --- 1. DATA ---
    let mut store = EventStore::new(cfg.priority_table());
    store.insert(LocalStorage::load(ctx)?);
    log::info!("Starting TUI with {} events", store.len());

    let mut app_state = AppState::new(store, cfg.timeline_axis()?, cfg.default_date);

    // Panic Hook: leave the terminal usable and keep a trace in the log.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        log::error!("PANIC: {}", info);
        default_hook(info);
    }));

    // --- 2. TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // --- 3. UI LOOP ---
    let result: Result<()> = (|| {
        loop {
            terminal.draw(|f| draw(f, &mut app_state))?;

            if !event::poll(Duration::from_millis(250))? {
                continue;
            }
            let action = match event::read()? {
                Event::Key(key) => {
                    // Filter out KeyRelease events to prevent double input on Windows
                    if key.kind == event::KeyEventKind::Release {
                        continue;
                    }
                    handlers::handle_key_event(key, &mut app_state)
                }
                Event::Mouse(mouse) => handlers::handle_mouse_event(mouse, &mut app_state),
                _ => None,
            };

            match action {
                Some(Action::Quit) => return Ok(()),
                Some(action) => apply(action, &mut app_state, ctx),
                None => {}
            }
        }
    })();

    // --- 4. CLEANUP ---
    restore_terminal();
    terminal.show_cursor()?;
    result
}
