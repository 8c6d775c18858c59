//! Coupon Form - terminal editor for a single coupon
//!
//! Hosts a reactive create/edit form state in a Ratatui view. Pass a coupon
//! JSON file as the first argument to open it in edit mode.

mod app;
mod config;
mod error;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::FormConfig;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::CouponData;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let config = FormConfig::load().context("failed to load configuration")?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let startup_coupon = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            let coupon = CouponData::from_file(&path)?;
            tracing::info!(path = %path.display(), id = %coupon.id, "loaded coupon");
            Some(coupon)
        }
        None => None,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config, startup_coupon);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    let json = app.form_state.form().get().to_json()?;
    println!("{json}");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Redraw only after form/title notifications or handled input
        if app.take_needs_redraw() {
            terminal.draw(|frame| ui::draw(frame, app))?;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                    app.request_redraw();
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
