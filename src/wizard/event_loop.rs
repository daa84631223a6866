//! Full-screen terminal driver.
//!
//! Owns the raw-mode/alternate-screen session and feeds crossterm events and
//! due timer ticks into a [`WizardApp`] one at a time. The only place the
//! loop blocks is `event::poll`, and never longer than the time to the next
//! timer deadline.

use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::catalog::Catalog;
use crate::error::{InitiatorError, Result};

use super::app::{Message, WizardApp};
use super::{WizardOptions, WizardOutcome};

/// Poll timeout when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn terminal_error(context: &str, err: io::Error) -> InitiatorError {
    InitiatorError::Terminal {
        message: format!("{}: {}", context, err),
    }
}

/// Raw mode plus alternate screen, undone on drop.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        enable_raw_mode().map_err(|e| terminal_error("failed to enable raw mode", e))?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(terminal_error("failed to enter alternate screen", e));
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(terminal_error("failed to create terminal", e));
            }
        };
        Ok(Self {
            terminal,
            restored: false,
        })
    }

    fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode().map_err(|e| terminal_error("failed to disable raw mode", e))?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| terminal_error("failed to leave alternate screen", e))?;
        self.terminal
            .show_cursor()
            .map_err(|e| terminal_error("failed to show cursor", e))
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!("{}", e);
        }
    }
}

/// Turn a crossterm event into a wizard message.
fn to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(Message::Key(key)),
        Event::Resize(width, height) => Some(Message::Resize(width, height)),
        _ => None,
    }
}

/// Run the full-screen wizard until the user finishes or cancels.
///
/// # Errors
///
/// Returns `Terminal` if the terminal cannot be set up or drawn to, and
/// `CatalogInvariant` if the catalog leaves a stage with nothing to pick.
pub fn run_wizard(catalog: Catalog, options: &WizardOptions) -> Result<WizardOutcome> {
    let mut session = TerminalSession::enter()?;
    let result = drive(&mut session.terminal, catalog, options);
    session.restore()?;
    result
}

fn drive(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    catalog: Catalog,
    options: &WizardOptions,
) -> Result<WizardOutcome> {
    let mut app = WizardApp::new(catalog, options);
    let mut inbox: VecDeque<Message> = VecDeque::new();

    let size = terminal
        .size()
        .map_err(|e| terminal_error("failed to read terminal size", e))?;
    inbox.push_back(Message::Resize(size.width, size.height));
    app.start(Instant::now());

    loop {
        while let Some(message) = inbox.pop_front() {
            app.handle(message, Instant::now())?;
            if app.is_finished() {
                break;
            }
        }
        if let Some(outcome) = app.outcome() {
            return Ok(outcome);
        }

        terminal
            .draw(|frame| {
                let area = frame.area();
                app.render(area, frame.buffer_mut());
            })
            .map_err(|e| terminal_error("failed to draw", e))?;

        let timeout = app
            .scheduler()
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);
        if event::poll(timeout).map_err(|e| terminal_error("failed to poll input", e))? {
            let event = event::read().map_err(|e| terminal_error("failed to read input", e))?;
            if let Some(message) = to_message(event) {
                inbox.push_back(message);
            }
        }

        let now = Instant::now();
        for tick in app.scheduler_mut().due(now) {
            inbox.push_back(Message::Tick(tick));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn key_press_becomes_message() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::empty());
        assert_eq!(to_message(Event::Key(key)), Some(Message::Key(key)));
    }

    #[test]
    fn key_release_is_dropped() {
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::empty());
        key.kind = KeyEventKind::Release;
        assert_eq!(to_message(Event::Key(key)), None);
    }

    #[test]
    fn resize_becomes_message() {
        assert_eq!(
            to_message(Event::Resize(120, 40)),
            Some(Message::Resize(120, 40))
        );
    }

    #[test]
    fn focus_events_are_ignored() {
        assert_eq!(to_message(Event::FocusGained), None);
    }
}
