//! Report wrapper: an analysis result plus how and when it was produced

use crate::processing::analyzer::AnalysisResult;
use crate::processing::scoring::verdict;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub analyzer_version: String,
    pub resume_source: String,
    pub job_source: String,
    pub processing_time_ms: u64,
}

impl AnalysisReport {
    pub fn new(
        result: AnalysisResult,
        resume_source: impl Into<String>,
        job_source: impl Into<String>,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            result,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_source: resume_source.into(),
                job_source: job_source.into(),
                processing_time_ms,
            },
        }
    }

    pub fn verdict(&self) -> &'static str {
        verdict(self.result.score)
    }
}
