//! Terminal User Interface management
//!
//! Raw mode and the alternate screen on enter, restored on exit, on drop
//! and from the panic hook. Input is reduced to the few events the console
//! reacts to, with a `Tick` at least once per tick rate.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    panic,
    sync::Once,
    time::{Duration, Instant},
};

/// Terminal input the main loop acts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// No input within the tick rate
    Tick,
}

/// Keep key presses and resizes; drop releases, repeats, mouse and focus
fn classify(event: Event) -> Option<TermEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(TermEvent::Key(key)),
        Event::Resize(width, height) => Some(TermEvent::Resize(width, height)),
        _ => None,
    }
}

fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

static PANIC_HOOK: Once = Once::new();

/// Restore the terminal before the panic message is printed
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let original = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            original(info);
        }));
    });
}

/// Terminal wrapper for managing the TUI lifecycle
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Longest wait for input before a `Tick`
    pub tick_rate: Duration,
    active: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            tick_rate: Duration::from_millis(100),
            active: false,
        })
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Enter the alternate screen and enable raw mode
    pub fn enter(&mut self) -> Result<()> {
        install_panic_hook();
        terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        self.terminal.clear()?;
        self.active = true;
        Ok(())
    }

    /// Leave the alternate screen; a no-op when not entered
    pub fn exit(&mut self) -> Result<()> {
        if self.active {
            self.active = false;
            restore_terminal()?;
        }
        Ok(())
    }

    /// Wait for the next relevant event
    ///
    /// Ignored input does not restart the wait, so a stream of mouse moves
    /// still yields a `Tick` every tick rate.
    pub fn next_event(&self) -> Result<TermEvent> {
        let deadline = Instant::now() + self.tick_rate;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(TermEvent::Tick);
            }
            if let Some(event) = classify(event::read()?) {
                return Ok(event);
            }
        }
    }

    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
