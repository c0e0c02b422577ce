//! `medcost run`: the interactive terminal interface.

use crate::config::MedcostConfig;
use crate::tui::{App, Explorer};
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

pub struct RunConfig {
    pub settings: MedcostConfig,
    pub data_file: Option<PathBuf>,
    pub delay_ms: Option<u64>,
}

impl RunConfig {
    /// Build the app, applying command-line overrides on top of the config.
    pub fn into_app(self) -> Result<App> {
        let data_file = self
            .data_file
            .unwrap_or_else(|| self.settings.data_file.clone());
        let delay_ms = self.delay_ms.unwrap_or(self.settings.processing_delay_ms);
        info!(data_file = %data_file.display(), delay_ms, "Starting TUI");
        let delay = Duration::from_millis(delay_ms);
        Ok(App::new(self.settings, data_file, delay)?)
    }
}

pub fn handle_run(config: RunConfig) -> Result<()> {
    let app = config.into_app()?;
    let mut explorer = Explorer::new(app)?;
    explorer.run()
}
