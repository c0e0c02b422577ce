//! Interactive terminal interface.
//!
//! Four pages share one [`App`]: the input form, the prediction result, the
//! about text and the historical data view. Key handling is split between
//! pure action determination ([`actions`]) and execution ([`navigation`]).

pub mod actions;
pub mod animation;
pub mod app;
pub mod form;
pub mod layout;
pub mod navigation;
pub mod theme;
pub mod views;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use crate::observability::{set_phase, set_tui_active, Phase};
pub use app::App;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Owns the terminal for the lifetime of the interactive session.
pub struct Explorer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
}

impl Explorer {
    pub fn new(app: App) -> Result<Self> {
        enable_raw_mode()?;
        // Drop does not run when setup fails, so undo raw mode here
        let terminal = restore_on_error(
            || {
                let mut stdout = io::stdout();
                execute!(stdout, EnterAlternateScreen)?;
                Ok(Terminal::new(CrosstermBackend::new(stdout))?)
            },
            || {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
            },
        )?;
        set_tui_active(true);

        Ok(Self { terminal, app })
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let _phase = set_phase(Phase::Interactive);
        loop {
            self.app.tick(Instant::now());
            self.terminal.draw(|f| self.app.render(f))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if navigation::handle_key(&mut self.app, key, Instant::now())? {
                        break;
                    }
                }
            }
        }

        self.cleanup()?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        set_tui_active(false);
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for Explorer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Run `setup`, calling `restore` before propagating its error.
fn restore_on_error<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    match setup() {
        Ok(value) => Ok(value),
        Err(e) => {
            restore();
            Err(e)
        }
    }
}
