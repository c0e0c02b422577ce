//! Spinner feedback for the cosmetic processing delay.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

const TEMPLATE_SPINNER: &str = "{spinner:.green} {msg}";
pub const PROCESSING_MESSAGE: &str = "Processing data and generating prediction...";

/// Whether a spinner should be drawn on stderr.
pub fn should_show_progress() -> bool {
    std::io::stderr().is_terminal() && std::env::var("MEDCOST_NO_PROGRESS").is_err()
}

/// Spinner with `msg`, hidden when `visible` is false.
pub fn create_spinner(msg: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    // The template is a constant; a parse failure falls back to the default style
    let style = ProgressStyle::default_spinner()
        .template(TEMPLATE_SPINNER)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Block for `delay` while a spinner runs.
pub fn simulate_processing(delay: Duration, visible: bool) {
    if delay.is_zero() {
        return;
    }
    let pb = create_spinner(PROCESSING_MESSAGE, visible);
    std::thread::sleep(delay);
    pb.finish_and_clear();
}
