//! Thread-local context tracking for crash reports.
//!
//! Records which phase and page medcost was in so the panic hook can say
//! what the user was doing. Guards restore the previous context on drop.

use std::cell::RefCell;
use std::path::PathBuf;

use crate::page::Page;

thread_local! {
    static CURRENT_CONTEXT: RefCell<AppContext> = const { RefCell::new(AppContext::new()) };
}

/// Context snapshot for the current operation.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    pub phase: Option<Phase>,
    pub page: Option<Page>,
    /// Data file being read, if any
    pub data_file: Option<PathBuf>,
}

impl AppContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            page: None,
            data_file: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Startup,
    Interactive,
    Estimating,
    LoadingData,
    WritingReport,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Startup => "startup",
            Self::Interactive => "interactive",
            Self::Estimating => "estimating",
            Self::LoadingData => "loading_data",
            Self::WritingReport => "writing_report",
        };
        f.pad(name)
    }
}

/// RAII guard restoring the previous context on drop.
pub struct ContextGuard {
    previous: AppContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update(f: impl FnOnce(&mut AppContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        f(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

#[must_use]
pub fn set_phase(phase: Phase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

/// Record the visible page. Not guarded: the page persists until replaced.
pub fn set_page(page: Page) {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow_mut().page = Some(page));
}

#[must_use]
pub fn set_data_file(path: impl Into<PathBuf>) -> ContextGuard {
    let path = path.into();
    update(|ctx| ctx.data_file = Some(path))
}

pub fn get_current_context() -> AppContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}
