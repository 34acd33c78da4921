mod api;
mod app;
mod config;
mod holidays;
mod logging;
mod ui;

use crate::api::{FetchManager, HttpHolidaysClient};
use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;

    let client = HttpHolidaysClient::from_config(&cfg.api)
        .context("Failed to build HTTP client")?;
    tracing::info!(base_url = client.base_url(), "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, cfg, client).await;

    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    client: HttpHolidaysClient,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms.max(10));
    let mut state = AppState::new(cfg);
    let fetcher = FetchManager::new(client, event_tx.clone());

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    let initial = state.start(chrono::Local::now().date_naive());
    dispatch(&mut state, &fetcher, initial);

    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        let actions = handler::handle_event(&mut state, event);
        dispatch(&mut state, &fetcher, actions);

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    tracing::info!("shutting down");
    Ok(())
}

fn dispatch<S: api::HolidaysSource>(
    state: &mut AppState,
    fetcher: &FetchManager<S>,
    actions: Vec<Action>,
) {
    for action in actions {
        match action {
            Action::FetchCountries {
                request_id,
                language_iso_code,
            } => fetcher.fetch_countries(request_id, language_iso_code),
            Action::FetchHolidays { request_id, query } => {
                fetcher.fetch_holidays(request_id, query)
            }
            Action::Quit => state.should_quit = true,
        }
    }
}
