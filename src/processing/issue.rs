//! Findings produced by the rule catalog and the faculty matcher

use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgently an issue should be addressed.
///
/// Variants are declared in priority order, so the derived `Ord` agrees with
/// [`Severity::rank`]: `Critical < Warning < Suggestion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
    Suggestion,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Warning, Severity::Suggestion];

    /// Priority rank, 0 being the most urgent
    pub fn rank(self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::Warning => 1,
            Severity::Suggestion => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Area of the resume an issue belongs to. Declaration order is emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Sections,
    Formatting,
    Content,
    Keywords,
    Structure,
    CommonMistakes,
    FacultyFit,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Sections,
        Category::Formatting,
        Category::Content,
        Category::Keywords,
        Category::Structure,
        Category::CommonMistakes,
        Category::FacultyFit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Sections => "sections",
            Category::Formatting => "formatting",
            Category::Content => "content",
            Category::Keywords => "keywords",
            Category::Structure => "structure",
            Category::CommonMistakes => "common_mistakes",
            Category::FacultyFit => "faculty_fit",
        }
    }

    /// Human readable label for reports
    pub fn label(self) -> &'static str {
        match self {
            Category::Sections => "Sections",
            Category::Formatting => "Formatting",
            Category::Content => "Content",
            Category::Keywords => "Keywords",
            Category::Structure => "Structure",
            Category::CommonMistakes => "Common Mistakes",
            Category::FacultyFit => "Faculty Fit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    pub suggestion: String,
}

impl Issue {
    pub fn new(
        severity: Severity,
        category: Category,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        let message = message.into();
        let suggestion = suggestion.into();
        debug_assert!(!message.trim().is_empty(), "issue without a message");
        debug_assert!(
            !suggestion.trim().is_empty(),
            "issue without a suggestion: {message}"
        );

        Self {
            severity,
            category,
            message,
            suggestion,
        }
    }

    pub fn critical(category: Category, message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::new(Severity::Critical, category, message, suggestion)
    }

    pub fn warning(category: Category, message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::new(Severity::Warning, category, message, suggestion)
    }

    pub fn suggestion(category: Category, message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::new(Severity::Suggestion, category, message, suggestion)
    }
}

/// Per-severity tally of an issue list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub critical: usize,
    pub warnings: usize,
    pub suggestions: usize,
}

impl IssueSummary {
    pub fn tally(issues: &[Issue]) -> Self {
        issues.iter().fold(Self::default(), |mut summary, issue| {
            match issue.severity {
                Severity::Critical => summary.critical += 1,
                Severity::Warning => summary.warnings += 1,
                Severity::Suggestion => summary.suggestions += 1,
            }
            summary
        })
    }

    pub fn total(&self) -> usize {
        self.critical + self.warnings + self.suggestions
    }

    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::Warning => self.warnings,
            Severity::Suggestion => self.suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_rank_matches_ordering() {
        let mut severities = vec![Severity::Suggestion, Severity::Critical, Severity::Warning];
        severities.sort();
        assert_eq!(severities, Severity::ALL.to_vec());

        for pair in Severity::ALL.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::CommonMistakes).unwrap();
        assert_eq!(json, "\"common_mistakes\"");

        let parsed: Category = serde_json::from_str("\"faculty_fit\"").unwrap();
        assert_eq!(parsed, Category::FacultyFit);
    }

    #[test]
    fn test_summary_tally() {
        let issues = vec![
            Issue::critical(Category::Sections, "Missing skills", "Add a Skills section"),
            Issue::warning(Category::Content, "Few numbers", "Quantify results"),
            Issue::warning(Category::Structure, "Too short", "Expand"),
            Issue::suggestion(Category::Keywords, "Few keywords", "Add keywords"),
        ];

        let summary = IssueSummary::tally(&issues);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.warnings, 2);
        assert_eq!(summary.suggestions, 1);
        assert_eq!(summary.total(), issues.len());
        assert_eq!(summary.count(Severity::Warning), 2);
    }

    #[test]
    #[should_panic(expected = "issue without a suggestion")]
    #[cfg(debug_assertions)]
    fn test_empty_suggestion_is_a_defect() {
        let _ = Issue::warning(Category::Content, "Something is off", "  ");
    }
}
