//! Report structures: the JSON wire shape and the rendered report envelope

use crate::error::{Result, ResumeCheckerError};
use crate::processing::faculty::Faculty;
use crate::processing::issue::{Category, Issue, IssueSummary};
use crate::processing::report::{AnalysisResult, ReportBuilder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON response shape consumed by API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub score: u8,
    pub faculty: Option<Faculty>,
    pub statistics: Statistics,
    pub summary: ResponseSummary,
    pub issues: Vec<Issue>,
    pub issues_by_category: BTreeMap<Category, Vec<Issue>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub word_count: usize,
    pub char_count: usize,
    pub faculty_adjustment: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSummary {
    pub total_issues: usize,
    pub critical: usize,
    pub warnings: usize,
    pub suggestions: usize,
}

impl From<&AnalysisResult> for AnalysisResponse {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            score: result.score,
            faculty: result.faculty,
            statistics: Statistics {
                word_count: result.word_count,
                char_count: result.char_count,
                faculty_adjustment: result.faculty_adjustment,
            },
            summary: ResponseSummary {
                total_issues: result.summary.total(),
                critical: result.summary.critical,
                warnings: result.summary.warnings,
                suggestions: result.summary.suggestions,
            },
            issues: result.issues.clone(),
            issues_by_category: result.issues_by_category.clone(),
        }
    }
}

impl TryFrom<AnalysisResponse> for AnalysisResult {
    type Error = ResumeCheckerError;

    /// Rebuild a result from its wire shape, rejecting responses whose summary
    /// or category buckets disagree with the issue list
    fn try_from(response: AnalysisResponse) -> Result<Self> {
        let summary = IssueSummary {
            critical: response.summary.critical,
            warnings: response.summary.warnings,
            suggestions: response.summary.suggestions,
        };

        if summary != IssueSummary::tally(&response.issues) || response.summary.total_issues != response.issues.len() {
            return Err(ResumeCheckerError::InvalidInput(
                "Response summary does not match its issue list".to_string(),
            ));
        }

        if response.issues_by_category != ReportBuilder::group_by_category(&response.issues) {
            return Err(ResumeCheckerError::InvalidInput(
                "Response category buckets do not match its issue list".to_string(),
            ));
        }

        Ok(AnalysisResult {
            score: response.score,
            faculty: response.faculty,
            faculty_adjustment: response.statistics.faculty_adjustment,
            word_count: response.statistics.word_count,
            char_count: response.statistics.char_count,
            summary,
            issues: response.issues,
            issues_by_category: response.issues_by_category,
        })
    }
}

/// Report metadata shown in human-readable outputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub resume_file: String,
    pub version: String,
}

/// An analysis result together with where and when it was produced
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub result: AnalysisResult,
    pub metadata: ReportMetadata,
}

impl CheckReport {
    pub fn new(result: AnalysisResult, resume_file: impl Into<String>) -> Self {
        Self {
            result,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                resume_file: resume_file.into(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}
