//! Assembles the final analysis result from issues, score and faculty outcome

use crate::processing::faculty::Faculty;
use crate::processing::issue::{Category, Issue, IssueSummary, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u8,
    pub faculty: Option<Faculty>,
    pub faculty_adjustment: i32,
    pub word_count: usize,
    pub char_count: usize,
    pub summary: IssueSummary,
    pub issues: Vec<Issue>,
    /// Non-empty buckets only, each preserving the order of `issues`
    pub issues_by_category: BTreeMap<Category, Vec<Issue>>,
}

impl AnalysisResult {
    pub fn has_critical_issues(&self) -> bool {
        self.summary.critical > 0
    }

    pub fn issues_with_severity(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |issue| issue.severity == severity)
    }
}

pub struct ReportBuilder;

impl ReportBuilder {
    pub fn build(
        issues: Vec<Issue>,
        score: u8,
        faculty: Option<Faculty>,
        faculty_adjustment: i32,
        word_count: usize,
        char_count: usize,
    ) -> AnalysisResult {
        let summary = IssueSummary::tally(&issues);
        let issues_by_category = Self::group_by_category(&issues);

        AnalysisResult {
            score,
            faculty,
            faculty_adjustment,
            word_count,
            char_count,
            summary,
            issues,
            issues_by_category,
        }
    }

    pub fn group_by_category(issues: &[Issue]) -> BTreeMap<Category, Vec<Issue>> {
        let mut grouped: BTreeMap<Category, Vec<Issue>> = BTreeMap::new();
        for issue in issues {
            grouped.entry(issue.category).or_default().push(issue.clone());
        }
        grouped
    }
}
