//! Render tests for the terminal interface using ratatui's TestBackend.

mod common;

use common::{instant_app, render_to_string, write_csv};
use medcost::page::Page;
use std::path::PathBuf;
use std::time::Instant;
use tempfile::TempDir;

const WIDTH: u16 = 140;
const HEIGHT: u16 = 44;

#[test]
fn test_input_form_renders_fields_and_navigation() {
    let app = instant_app(PathBuf::from("missing.csv"));
    let screen = render_to_string(&app, WIDTH, HEIGHT);

    assert!(screen.contains("Health Cost Prediction"));
    for title in ["Input Data", "Prediction Result", "About", "User Data"] {
        assert!(screen.contains(title), "missing page {}", title);
    }
    assert!(screen.contains("BMI (Body Mass Index)"));
    assert!(screen.contains("[ 30 ]"));
    assert!(screen.contains("[ 25.0 ]"));
    assert!(screen.contains("◂ Male ▸"));
    assert!(screen.contains("◂ Java ▸"));
    assert!(screen.contains("Fill in the form and press Enter to predict."));
}

#[test]
fn test_processing_shows_spinner_message() {
    let mut app = medcost::tui::App::new(
        medcost::config::MedcostConfig::default(),
        PathBuf::from("missing.csv"),
        std::time::Duration::from_secs(2),
    )
    .unwrap();
    app.submit(Instant::now());
    let screen = render_to_string(&app, WIDTH, HEIGHT);
    assert!(screen.contains("Processing data and generating prediction..."));
}

#[test]
fn test_completed_submission_shows_advice_and_chart() {
    let mut app = instant_app(PathBuf::from("missing.csv"));
    let now = Instant::now();
    app.submit(now);
    app.tick(now);

    let screen = render_to_string(&app, WIDTH, HEIGHT);
    assert!(screen.contains("Reduce late nights to lower your health risk."));
    assert!(screen.contains("Input Data vs Predicted Medical Cost"));
    assert!(screen.contains("Children"));
}

#[test]
fn test_result_page_before_and_after_submission() {
    let mut app = instant_app(PathBuf::from("missing.csv"));
    app.set_page(Page::Result);
    let screen = render_to_string(&app, WIDTH, HEIGHT);
    assert!(screen.contains("Please enter your data first to see the prediction result."));

    let now = Instant::now();
    app.submit(now);
    app.tick(now);
    let screen = render_to_string(&app, WIDTH, HEIGHT);
    assert!(screen.contains("Your Predicted Health Cost: $9,500.00"));
}

#[test]
fn test_about_page() {
    let mut app = instant_app(PathBuf::from("missing.csv"));
    app.set_page(Page::About);
    let screen = render_to_string(&app, WIDTH, HEIGHT);
    assert!(screen.contains("professional medical advice"));
}

#[test]
fn test_data_page_missing_file_still_shows_histogram() {
    let temp = TempDir::new().unwrap();
    let mut app = instant_app(temp.path().join("Regression.csv"));
    app.set_page(Page::Data);

    let screen = render_to_string(&app, WIDTH, HEIGHT);
    assert!(screen.contains("File 'Regression.csv' was not found."));
    assert!(screen.contains("Medical Cost Distribution (Simulated)"));
}

#[test]
fn test_data_page_with_file_shows_table_and_scatter() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(
        temp.path(),
        "Regression.csv",
        "age,bmi,predicted_cost\n30,25.0,8500\n52,33.1,14710\n",
    );
    let mut app = instant_app(path);
    app.set_page(Page::Data);

    let screen = render_to_string(&app, WIDTH, HEIGHT);
    assert!(screen.contains("predicted_cost"));
    assert!(screen.contains("14710"));
    assert!(screen.contains("Age vs Predicted Health Cost"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut app = instant_app(PathBuf::from("missing.csv"));
    for page in Page::ALL {
        app.set_page(page);
        render_to_string(&app, 20, 6);
    }
}
