//! school-console - A terminal admin console for a school
//!
//! This is the main entry point for the school-console application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::services::LoggingSink;
use crate::tui::{TermEvent, Tui};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Terminal console for lesson plans, admissions, fees, staff and more.
#[derive(Parser)]
#[command(name = "school-console", about = "School administration console")]
struct Cli {
    /// Config file (default: ~/.school-console/config.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory with <screen>.json datasets; built-in data when unset
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Rows per page for every list screen
    #[arg(long, value_name = "N")]
    page_size: Option<usize>,

    /// Log file (default: ~/.school-console/school-console.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Refuse every create, update and delete
    #[arg(long)]
    reject_mutations: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let mut config = config.with_overrides(cli.data_dir, cli.page_size, cli.log_file);
    config.reject_mutations |= cli.reject_mutations;

    // The terminal belongs to the TUI, so logs go to a file
    if let Some(log_file) = config.log_file.clone().or_else(Config::default_log_file) {
        if let Err(e) = logging::init(&log_file) {
            eprintln!("Logging disabled: {}", e);
        }
    }
    info!(
        page_size = config.default_page_size,
        data_dir = ?config.data_dir,
        reject_mutations = config.reject_mutations,
        "starting"
    );

    let sink = Arc::new(LoggingSink::new(config.reject_mutations));
    let mut app = App::new(config, sink);

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        error!(error = %err, "exited with error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("bye");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        let mut draw_result = Ok(());
        tui.draw(|frame| {
            draw_result = app.draw(frame, frame.area());
        })?;
        draw_result?;

        // Convert the next event to an action; ticks drive time-based updates
        let action = match tui.next_event()? {
            TermEvent::Key(key) => app.handle_key_event(key)?,
            TermEvent::Resize(w, h) => Some(Action::Resize(w, h)),
            TermEvent::Tick => Some(Action::Tick),
        };

        // Action might produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
