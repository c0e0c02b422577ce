//! Interactive application state.

use super::animation::AnimationController;
use super::form::FormState;
use super::layout;
use crate::config::MedcostConfig;
use crate::core::{InputRecord, Submission};
use crate::data::{DataView, SimulatedDistribution};
use crate::errors::Result;
use crate::observability::{self, set_data_file, set_phase, Phase};
use crate::page::Page;
use crate::session::SessionStore;
use ratatui::Frame;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// A submitted record waiting out the processing delay.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub input: InputRecord,
    pub started: Instant,
}

pub struct App {
    page: Page,
    form: FormState,
    session: SessionStore,
    pending: Option<PendingSubmission>,
    delay: Duration,
    settings: MedcostConfig,
    data_file: PathBuf,
    data: Option<DataView>,
    distribution: SimulatedDistribution,
    data_scroll: usize,
    animation: AnimationController,
    status_message: Option<String>,
}

impl App {
    pub fn new(settings: MedcostConfig, data_file: PathBuf, delay: Duration) -> Result<Self> {
        let distribution = SimulatedDistribution::generate(&settings.simulation)?;
        observability::set_page(Page::default());
        Ok(Self {
            page: Page::default(),
            form: FormState::default(),
            session: SessionStore::new(),
            pending: None,
            delay,
            settings,
            data_file,
            data: None,
            distribution,
            data_scroll: 0,
            animation: AnimationController::new(),
            status_message: None,
        })
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Switch pages. Entering the data page reloads the data file.
    pub fn set_page(&mut self, page: Page) {
        self.page = page;
        observability::set_page(page);
        debug!(page = page.title(), "Page selected");
        if page == Page::Data {
            self.reload_data();
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn latest(&self) -> Option<&Submission> {
        self.session.latest()
    }

    pub fn pending(&self) -> Option<&PendingSubmission> {
        self.pending.as_ref()
    }

    pub fn is_processing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Queue the form contents for estimation at `now`.
    pub fn submit(&mut self, now: Instant) {
        if self.pending.is_some() {
            return;
        }
        match self.form.to_record() {
            Ok(input) => {
                debug!(?input, "Submission queued");
                self.pending = Some(PendingSubmission {
                    input,
                    started: now,
                });
                self.status_message = None;
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Advance animations and complete the pending submission once its
    /// delay has elapsed. Returns true when a submission completed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.animation.tick();

        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| now.saturating_duration_since(p.started) >= self.delay);
        if !due {
            return false;
        }

        let Some(pending) = self.pending.take() else {
            return false;
        };
        let _phase = set_phase(Phase::Estimating);
        let submission = self
            .session
            .submit(pending.input, self.settings.advice.obesity_bmi_threshold);
        info!(estimate = submission.estimate.value(), "Estimate computed");
        true
    }

    /// Drop a pending submission and the stored result.
    pub fn end_session(&mut self) {
        self.pending = None;
        self.session.clear();
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn data(&self) -> Option<&DataView> {
        self.data.as_ref()
    }

    pub fn reload_data(&mut self) {
        let _phase = set_phase(Phase::LoadingData);
        let _file = set_data_file(&self.data_file);
        self.data = Some(DataView::load(&self.data_file));
        self.data_scroll = 0;
    }

    pub fn distribution(&self) -> &SimulatedDistribution {
        &self.distribution
    }

    pub fn data_scroll(&self) -> usize {
        self.data_scroll
    }

    pub fn scroll_data(&mut self, delta: isize) {
        let rows = self
            .data
            .as_ref()
            .and_then(|d| d.table.as_ref())
            .map_or(0, |t| t.rows().len());
        let max = rows.saturating_sub(1);
        self.data_scroll = self.data_scroll.saturating_add_signed(delta).min(max);
    }

    pub fn spinner_char(&self) -> &'static str {
        self.animation.spinner_char()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    pub fn render(&self, frame: &mut Frame) {
        layout::render_app(frame, self);
    }
}
