//! Report output in console, JSON, Markdown and HTML form

pub mod report;
pub mod formatter;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::AnalysisReport;
