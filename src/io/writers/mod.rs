pub mod html;
pub mod svg;

pub use html::{HtmlReportWriter, ReportContext};
