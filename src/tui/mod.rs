//! Terminal User Interface for carted
//!
//! Interactive list management: add, edit, toggle, delete, and filter
//! items without leaving the terminal. The store file is watched so
//! changes made by another process show up without restarting.

pub mod app;
pub mod msg; // message types (what happened)
pub mod state; // pure state transformations (functional core)
pub mod ui;
pub mod update; // state transitions

use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{poll, read, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::prelude::*;

use crate::config::Config;
use crate::store::{ItemStore, JsonFileStore};

use app::{App, Mode};
use msg::{key_to_msg, Msg};
use update::update;

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app, ensuring cleanup happens even on error
    let result = run_app_inner(&mut terminal, config);

    // Restore terminal - this MUST run even if app fails
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}

fn run_app_inner<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let store_path = config.store_path();

    // The watcher needs an existing file; persist the (empty) slot once
    let mut store = JsonFileStore::new(&store_path);
    if !store_path.exists() {
        store.save(&[])?;
    }

    let mut app = App::new(store, Duration::from_secs(config.ui.notice_secs))?;

    // Watch the store file so external writes refresh the view
    let (tx, rx) = mpsc::channel();
    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                if event.kind.is_modify() {
                    let _ = tx.send(());
                }
            }
        },
        notify::Config::default(),
    )?;
    watcher.watch(&store_path, RecursiveMode::NonRecursive)?;

    run_event_loop(terminal, &mut app, rx)
}

fn run_event_loop<B: Backend, S: ItemStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
    store_change_rx: mpsc::Receiver<()>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Handle input with timeout
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if poll(timeout)? {
            if let Event::Key(key) = read()? {
                let msg = key_to_msg(key.code, key.modifiers, app.mode == Mode::Input);
                if update(app, msg) {
                    return Ok(()); // Quit signal
                }
            }
        }

        // Check for external store changes (non-blocking)
        if store_change_rx.try_recv().is_ok() {
            app.reload_from_store()?;
        }

        // Tick for notice expiry
        if last_tick.elapsed() >= tick_rate {
            update(app, Msg::Tick);
            last_tick = Instant::now();
        }
    }
}
