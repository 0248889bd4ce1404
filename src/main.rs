//! DevVault - Code Snippet Vault
//!
//! A terminal front end for browsing, searching and writing code snippets. Built with
//! ratatui. All data is sample data held in memory; nothing is persisted.
//!
//! DevVault gives developers:
//! - A personal dashboard of their snippets with search and filters
//! - A community feed with featured developers
//! - A simulated AI search over a fixed result set
//! - A snippet editor with per-language templates

use crate::app::App;
use crate::config::Config;
use color_eyre::{Result, eyre::eyre};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::io;
use std::time::Duration;

mod app;
mod clipboard;
mod config;
mod error;
mod handlers;
mod logging;
mod models;
mod ui;

/// Application entry point and initialization
/// Logging and configuration are set up before the terminal switches to raw mode, so
/// problems there can still be reported on stderr.
fn main() -> Result<()> {
    color_eyre::install()?;

    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {:#}", e);
    }

    let config = Config::load();
    let mut app = App::new(config).map_err(|e| eyre!("{:#}", e))?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("DevVault exiting");

    result
}

fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut should_quit = false;

    while !should_quit {
        if app.needs_redraw {
            terminal.clear()?;
            app.needs_redraw = false;
        }
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                should_quit = handlers::keys::handle_key_events(key, app);
            }
        }
        app.tick();
    }

    Ok(())
}
