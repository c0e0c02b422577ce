//! Tracing subscriber setup.
//!
//! Events go to stderr, filtered by `MEDCOST_LOG` (falling back to
//! `RUST_LOG`, then `warn`). While the TUI owns the terminal, events are
//! dropped so they do not corrupt the screen.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

static TUI_ACTIVE: AtomicBool = AtomicBool::new(false);

pub const LOG_ENV_VAR: &str = "MEDCOST_LOG";

pub fn set_tui_active(active: bool) {
    TUI_ACTIVE.store(active, Ordering::SeqCst);
}

pub fn is_tui_active() -> bool {
    TUI_ACTIVE.load(Ordering::SeqCst)
}

/// Stderr writer that swallows output while the TUI is active.
#[derive(Clone, Copy, Default)]
pub struct TuiAwareWriter;

impl io::Write for TuiAwareWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if is_tui_active() {
            Ok(buf.len())
        } else {
            io::stderr().write(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

impl<'a> MakeWriter<'a> for TuiAwareWriter {
    type Writer = TuiAwareWriter;

    fn make_writer(&'a self) -> Self::Writer {
        *self
    }
}

/// Build the env filter, `-v` flags raise the default level.
pub fn build_filter(verbosity: u8) -> EnvFilter {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(format!("medcost={}", default_level)))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing(verbosity: u8) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(TuiAwareWriter)
        .with_target(false)
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
