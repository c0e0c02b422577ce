//! `medcost report`: self-contained HTML with the estimate and every chart.

use crate::config::MedcostConfig;
use crate::core::{InputRecord, Submission};
use crate::data::{DataView, SimulatedDistribution};
use crate::io::writers::{HtmlReportWriter, ReportContext};
use crate::observability::{set_data_file, set_phase, Phase};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::{info, info_span};

pub struct ReportConfig {
    pub record: InputRecord,
    pub data_file: PathBuf,
    pub output: PathBuf,
    pub settings: MedcostConfig,
}

pub fn handle_report(config: ReportConfig) -> Result<()> {
    let _phase = set_phase(Phase::WritingReport);
    let span = info_span!("report", output = %config.output.display());
    let _enter = span.enter();

    let submission = Submission::evaluate(
        config.record,
        config.settings.advice.obesity_bmi_threshold,
    );

    let data = {
        let _file = set_data_file(&config.data_file);
        DataView::load(&config.data_file)
    };
    if let Some(message) = data.error_message() {
        eprintln!("warning: {}", message);
    }

    let distribution = SimulatedDistribution::generate(&config.settings.simulation)?;

    if let Some(parent) = config.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        crate::io::ensure_dir(parent)?;
    }
    let file = File::create(&config.output)
        .with_context(|| format!("Failed to create {}", config.output.display()))?;

    let ctx = ReportContext {
        submission: &submission,
        data: &data,
        distribution: &distribution,
        generated_at: chrono::Local::now(),
    };
    HtmlReportWriter::new(BufWriter::new(file)).write_report(&ctx)?;

    info!("Report written");
    println!("Report written to {}", config.output.display());
    Ok(())
}
