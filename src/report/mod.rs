mod json;
mod markdown;

pub use json::JsonReport;
pub use markdown::MarkdownReport;

use crate::analyze::SprintReport;
use crate::error::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Markdown,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Json => "json",
        }
    }

    pub fn render(&self, report: &SprintReport) -> Result<String> {
        match self {
            ReportFormat::Markdown => report.render_markdown(),
            ReportFormat::Json => report.render_json(),
        }
    }
}
