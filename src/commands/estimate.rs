//! `medcost estimate`: one-shot estimate on the command line.

use crate::cli::OutputFormat;
use crate::core::{Categorical, InputRecord, Submission};
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use crate::observability::{set_phase, Phase};
use crate::page::{APP_TITLE, DISCLAIMER};
use crate::progress::{should_show_progress, simulate_processing};
use anyhow::Result;
use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

pub struct EstimateConfig {
    pub record: InputRecord,
    pub format: OutputFormat,
    pub delay: Duration,
    pub formatting: FormattingConfig,
    pub obesity_threshold: f64,
}

pub fn handle_estimate(config: EstimateConfig) -> Result<()> {
    let _phase = set_phase(Phase::Estimating);

    let show_spinner = config.format == OutputFormat::Terminal && should_show_progress();
    simulate_processing(config.delay, show_spinner);

    let submission = Submission::evaluate(config.record, config.obesity_threshold);
    info!(estimate = submission.estimate.value(), "Estimate computed");

    let output = match config.format {
        OutputFormat::Terminal => {
            let formatter = formatter_for(config.formatting);
            render_terminal(&submission, formatter.as_ref(), config.formatting)
        }
        OutputFormat::Json => render_json(&submission)?,
    };
    println!("{}", output);
    Ok(())
}

#[derive(Serialize)]
struct JsonEstimate<'a> {
    input: &'a InputRecord,
    estimate: f64,
    formatted: String,
    advice: Vec<&'static str>,
}

pub fn render_json(submission: &Submission) -> crate::errors::Result<String> {
    let body = JsonEstimate {
        input: &submission.input,
        estimate: submission.estimate.value(),
        formatted: submission.estimate.display_currency(),
        advice: submission.advice.iter().map(|a| a.message()).collect(),
    };
    Ok(serde_json::to_string_pretty(&body)?)
}

pub fn render_terminal(
    submission: &Submission,
    formatter: &dyn OutputFormatter,
    formatting: FormattingConfig,
) -> String {
    let mut lines = Vec::new();
    lines.push(formatter.header(APP_TITLE));
    lines.push(String::new());
    lines.push(input_table(&submission.input, formatting).to_string());
    lines.push(String::new());
    lines.push(format!(
        "{} {}",
        formatter.bold("Your Predicted Health Cost:"),
        formatter.success(&submission.estimate.display_currency())
    ));

    for advice in &submission.advice {
        lines.push(formatter.warning(&format!(
            "{} {}",
            formatter.emoji("⚠", "[WARN]"),
            advice.message()
        )));
    }

    lines.push(String::new());
    lines.push(formatter.dim(DISCLAIMER));
    lines.join("\n")
}

fn input_table(record: &InputRecord, formatting: FormattingConfig) -> Table {
    let mut table = Table::new();
    let preset = if formatting.emoji.should_use_emoji() {
        presets::UTF8_FULL
    } else {
        presets::ASCII_FULL
    };
    table
        .load_preset(preset)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Feature", "Value", "Code"]);

    table.add_row(vec!["Age".to_string(), record.age().to_string(), String::new()]);
    table.add_row(vec!["BMI".to_string(), format!("{:.1}", record.bmi()), String::new()]);
    table.add_row(vec![
        "Children".to_string(),
        record.children().to_string(),
        String::new(),
    ]);
    table.add_row(vec![
        "Sex".to_string(),
        record.sex().label().to_string(),
        record.sex().code().to_string(),
    ]);
    table.add_row(vec![
        "Smoker".to_string(),
        record.smoker().label().to_string(),
        record.smoker().code().to_string(),
    ]);
    table.add_row(vec![
        "Region".to_string(),
        record.region().label().to_string(),
        record.region().code().to_string(),
    ]);
    table
}
