use super::svg::{feature_bar_chart, histogram_chart, scatter_chart};
use crate::core::{Categorical, Submission};
use crate::data::{DataView, HistoricalTable, SimulatedDistribution};
use crate::page::{ABOUT_TEXT, APP_TITLE, DATA_PAGE_TEXT};
use anyhow::Result;
use chrono::{DateTime, Local};
use html_escape::encode_text;
use std::collections::HashMap;
use std::io::Write;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PLACEHOLDER_OPEN: &str = "{{{";
const PLACEHOLDER_CLOSE: &str = "}}}";

/// Table rows beyond this are summarised instead of rendered.
pub const MAX_TABLE_ROWS: usize = 200;

pub const FEATURE_CHART_TITLE: &str = "Input Data vs Predicted Medical Cost";
pub const SCATTER_CHART_TITLE: &str = "Age vs Predicted Health Cost";
pub const HISTOGRAM_CHART_TITLE: &str = "Medical Cost Distribution (Simulated)";

/// Everything the report shows.
pub struct ReportContext<'a> {
    pub submission: &'a Submission,
    pub data: &'a DataView,
    pub distribution: &'a SimulatedDistribution,
    pub generated_at: DateTime<Local>,
}

/// Writes a self-contained HTML report.
pub struct HtmlReportWriter<W: Write> {
    writer: W,
    template: &'static str,
}

impl<W: Write> HtmlReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            template: include_str!("templates/report.html"),
        }
    }

    pub fn write_report(&mut self, ctx: &ReportContext<'_>) -> Result<()> {
        let html = self.render_html(ctx);
        write!(self.writer, "{}", html)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn render_html(&self, ctx: &ReportContext<'_>) -> String {
        let submission = ctx.submission;

        let values: HashMap<&str, String> = HashMap::from([
            ("TITLE", encode_text(APP_TITLE).into_owned()),
            (
                "TIMESTAMP",
                ctx.generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            ),
            ("INPUT_ROWS", render_input_rows(submission)),
            ("ADVICE", render_advice(submission)),
            (
                "FEATURE_CHART",
                feature_bar_chart(&submission.features(), FEATURE_CHART_TITLE),
            ),
            ("ESTIMATE", submission.estimate.display_currency()),
            ("DATA_TEXT", encode_text(DATA_PAGE_TEXT).into_owned()),
            ("DATA_SECTION", render_data_section(ctx.data)),
            (
                "HISTOGRAM_CHART",
                histogram_chart(ctx.distribution, HISTOGRAM_CHART_TITLE),
            ),
            ("ABOUT", encode_text(ABOUT_TEXT).into_owned()),
            ("VERSION", VERSION.to_string()),
        ]);

        fill_template(self.template, &values)
    }
}

/// Substitute every `{{{NAME}}}` in one pass over `template`.
///
/// Substituted text is never rescanned, so placeholders appearing inside
/// values stay as written. Unknown names are left in place.
fn fill_template(template: &str, values: &HashMap<&str, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(PLACEHOLDER_OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + PLACEHOLDER_OPEN.len()..];
        match after_open.find(PLACEHOLDER_CLOSE) {
            Some(end) => {
                let name = &after_open[..end];
                let token_end = start + PLACEHOLDER_OPEN.len() + end + PLACEHOLDER_CLOSE.len();
                match values.get(name) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&rest[start..token_end]),
                }
                rest = &rest[token_end..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

fn render_input_rows(submission: &Submission) -> String {
    let input = &submission.input;
    let rows = [
        ("Age (years)", input.age().to_string()),
        ("Body Mass Index", format!("{:.1}", input.bmi())),
        ("Number of Children", input.children().to_string()),
        ("Sex", input.sex().label().to_string()),
        ("Smoker", input.smoker().label().to_string()),
        ("Region", input.region().label().to_string()),
    ];

    rows.iter()
        .map(|(label, value)| {
            format!(
                "        <tr><th>{}</th><td>{}</td></tr>",
                encode_text(label),
                encode_text(value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_advice(submission: &Submission) -> String {
    submission
        .advice
        .iter()
        .map(|a| format!("    <div class=\"warning\">{}</div>", encode_text(a.message())))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_data_section(data: &DataView) -> String {
    let mut out = String::new();

    if let Some(table) = &data.table {
        out.push_str(&format!(
            "    <p>Data from file {}:</p>\n",
            encode_text(&table.path().display().to_string())
        ));
        out.push_str(&render_table(table));
    }

    match (&data.scatter, data.error_message()) {
        (_, Some(message)) => {
            out.push_str(&format!(
                "    <div class=\"error\">{}</div>\n",
                encode_text(&message)
            ));
        }
        (Some(points), None) => {
            out.push_str(&format!(
                "    <div class=\"chart\">{}</div>\n",
                scatter_chart(points, SCATTER_CHART_TITLE)
            ));
        }
        (None, None) => {}
    }

    out
}

fn render_table(table: &HistoricalTable) -> String {
    let header = table
        .headers()
        .iter()
        .map(|h| format!("<th>{}</th>", encode_text(h)))
        .collect::<String>();

    let body = table
        .rows()
        .iter()
        .take(MAX_TABLE_ROWS)
        .map(|row| {
            let cells = row
                .iter()
                .map(|c| format!("<td>{}</td>", encode_text(c)))
                .collect::<String>();
            format!("<tr>{}</tr>", cells)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut out = format!(
        "    <div class=\"table-wrap\"><table><thead><tr>{}</tr></thead><tbody>\n{}\n</tbody></table></div>\n",
        header, body
    );
    if table.rows().len() > MAX_TABLE_ROWS {
        out.push_str(&format!(
            "    <p>Showing {} of {} rows.</p>\n",
            MAX_TABLE_ROWS,
            table.rows().len()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::core::{InputRecord, Region, Sex, Smoker};
    use crate::errors::Error;
    use std::path::PathBuf;

    fn submission() -> Submission {
        let input = InputRecord::new(30, 25.0, 0, Sex::Male, Smoker::No, Region::Java).unwrap();
        Submission::evaluate(input, 30.0)
    }

    fn render(data: &DataView) -> String {
        let submission = submission();
        let distribution = SimulatedDistribution::generate(&SimulationConfig::default()).unwrap();
        let ctx = ReportContext {
            submission: &submission,
            data,
            distribution: &distribution,
            generated_at: Local::now(),
        };
        HtmlReportWriter::new(Vec::new()).render_html(&ctx)
    }

    #[test]
    fn test_all_placeholders_are_filled() {
        let data = DataView {
            table: None,
            scatter: None,
            error: Some(Error::DataFileMissing {
                path: PathBuf::from("Regression.csv"),
            }),
        };
        let html = render(&data);
        assert!(!html.contains("{{{"));
        assert!(html.contains("$8,500.00"));
        assert!(html.contains("File 'Regression.csv' was not found."));
    }

    #[test]
    fn test_table_cells_are_escaped() {
        let table = HistoricalTable::from_reader(
            "Regression.csv",
            "age,predicted_cost,note\n30,8500,<b>hi</b>\n".as_bytes(),
        )
        .unwrap();
        let points = table.scatter_points().unwrap();
        let data = DataView {
            table: Some(table),
            scatter: Some(points),
            error: None,
        };
        let html = render(&data);
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(!html.contains("<b>hi</b>"));
        assert!(html.contains("<circle"));
    }

    #[test]
    fn test_placeholder_text_in_cells_is_kept_literally() {
        let table = HistoricalTable::from_reader(
            "Regression.csv",
            "age,predicted_cost,note\n30,8500,{{{VERSION}}}\n".as_bytes(),
        )
        .unwrap();
        let data = DataView {
            table: Some(table),
            scatter: None,
            error: None,
        };
        let html = render(&data);
        assert!(html.contains("<td>{{{VERSION}}}</td>"));
        assert!(!html.contains(&format!("<td>{}</td>", VERSION)));
    }

    #[test]
    fn test_fill_template_single_pass() {
        let values = HashMap::from([("A", "{{{B}}}".to_string()), ("B", "b".to_string())]);
        assert_eq!(
            fill_template("x{{{A}}}y{{{B}}}z{{{C}}}{{{", &values),
            "x{{{B}}}ybz{{{C}}}{{{"
        );
    }

    #[test]
    fn test_write_report_writes_bytes() {
        let submission = submission();
        let distribution = SimulatedDistribution::generate(&SimulationConfig::default()).unwrap();
        let data = DataView {
            table: None,
            scatter: None,
            error: None,
        };
        let ctx = ReportContext {
            submission: &submission,
            data: &data,
            distribution: &distribution,
            generated_at: Local::now(),
        };
        let mut buffer = Vec::new();
        HtmlReportWriter::new(&mut buffer).write_report(&ctx).unwrap();
        let html = String::from_utf8(buffer).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
