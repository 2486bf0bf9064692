//! Export of analysis results as JSON, CSV or plain text.

mod text;
pub mod views;

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::analyzer::AnalysisResult;
use super::domain::Claim;

pub use text::TextReport;
use views::ConditionRow;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),
    #[error("report is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Json,
    Csv,
    Text,
}

impl ReportFormat {
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv; charset=utf-8",
            Self::Text => "text/plain; charset=utf-8",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown report format '{0}', expected json, csv or text")]
pub struct UnknownReportFormat(pub String);

impl FromStr for ReportFormat {
    type Err = UnknownReportFormat;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "text" | "txt" => Ok(Self::Text),
            other => Err(UnknownReportFormat(other.to_string())),
        }
    }
}

/// A claim paired with its analysis, ready to render.
#[derive(Debug, Clone)]
pub struct AnalysisReport<'a> {
    pub claim: &'a Claim,
    pub result: &'a AnalysisResult,
    pub generated_on: NaiveDate,
}

impl<'a> AnalysisReport<'a> {
    pub fn new(claim: &'a Claim, result: &'a AnalysisResult, generated_on: NaiveDate) -> Self {
        Self {
            claim,
            result,
            generated_on,
        }
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, ReportError> {
        match format {
            ReportFormat::Json => self.to_json(),
            ReportFormat::Csv => self.to_csv(),
            ReportFormat::Text => Ok(self.to_text()),
        }
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self.result)?)
    }

    /// One row per analysed condition. An empty claim yields only the header.
    pub fn to_csv(&self) -> Result<String, ReportError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record([
            "condition_id",
            "condition_name",
            "success_probability",
            "evidence_score",
            "average_rating",
            "evidence_complete",
            "gap_count",
            "weaknesses",
        ])?;
        for analysis in &self.result.condition_analysis {
            writer.serialize(ConditionRow::new(analysis, &self.result.evidence_gaps))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| csv::Error::from(err.into_error()))?;
        Ok(String::from_utf8(bytes)?)
    }

    pub fn to_text(&self) -> String {
        TextReport(self).to_string()
    }
}
