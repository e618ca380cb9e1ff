//! Faculty-specific keyword matching and score adjustment

use crate::config::ScoringPolicy;
use crate::error::Result;
use crate::processing::issue::{Category, Issue};
use crate::processing::keyword_matcher::{Boundary, KeywordMatcher};
use crate::processing::lexicon::FacultyKeywords;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faculty {
    Sciences,
    Business,
    Engineering,
    Arts,
}

impl Faculty {
    pub const ALL: [Faculty; 4] = [
        Faculty::Sciences,
        Faculty::Business,
        Faculty::Engineering,
        Faculty::Arts,
    ];

    /// Parse a caller-supplied faculty name. Unknown names are not an error,
    /// they simply mean "no faculty".
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "sciences" | "science" => Some(Faculty::Sciences),
            "business" => Some(Faculty::Business),
            "engineering" => Some(Faculty::Engineering),
            "arts" | "art" => Some(Faculty::Arts),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Faculty::Sciences => "sciences",
            Faculty::Business => "business",
            Faculty::Engineering => "engineering",
            Faculty::Arts => "arts",
        }
    }

    fn profile_label(self) -> &'static str {
        match self {
            Faculty::Sciences => "a Sciences",
            Faculty::Business => "a Business",
            Faculty::Engineering => "an Engineering",
            Faculty::Arts => "an Arts",
        }
    }

    fn advice(self) -> &'static str {
        match self {
            Faculty::Sciences => "Highlight research, publications, lab work, methodology, or data analysis to strengthen your resume for science roles.",
            Faculty::Business => "Highlight leadership, strategy, revenue, growth, client work, or metrics (e.g. ROI, KPIs) to strengthen your resume for business roles.",
            Faculty::Engineering => "Highlight technical skills, projects, tools, and concrete outcomes to better match engineering expectations.",
            Faculty::Arts => "Include portfolio work, exhibitions, creative projects, or collaborative work to align with arts and design roles.",
        }
    }
}

impl fmt::Display for Faculty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of matching a resume against one faculty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacultyMatch {
    pub faculty: Option<Faculty>,
    pub matched_keywords: Vec<String>,
    pub adjustment: i32,
    pub issue: Option<Issue>,
}

impl FacultyMatch {
    fn none() -> Self {
        Self {
            faculty: None,
            matched_keywords: Vec::new(),
            adjustment: 0,
            issue: None,
        }
    }

    pub fn hits(&self) -> usize {
        self.matched_keywords.len()
    }
}

pub struct FacultyMatcher {
    sciences: KeywordMatcher,
    business: KeywordMatcher,
    engineering: KeywordMatcher,
    arts: KeywordMatcher,
    policy: ScoringPolicy,
}

impl FacultyMatcher {
    pub fn new(keywords: &FacultyKeywords, policy: &ScoringPolicy) -> Result<Self> {
        let build = |faculty| KeywordMatcher::new(keywords.for_faculty(faculty), Boundary::WordStart);

        Ok(Self {
            sciences: build(Faculty::Sciences)?,
            business: build(Faculty::Business)?,
            engineering: build(Faculty::Engineering)?,
            arts: build(Faculty::Arts)?,
            policy: policy.clone(),
        })
    }

    fn matcher(&self, faculty: Faculty) -> &KeywordMatcher {
        match faculty {
            Faculty::Sciences => &self.sciences,
            Faculty::Business => &self.business,
            Faculty::Engineering => &self.engineering,
            Faculty::Arts => &self.arts,
        }
    }

    pub fn evaluate(&self, text: &str, faculty: Option<Faculty>) -> FacultyMatch {
        let Some(faculty) = faculty else {
            return FacultyMatch::none();
        };

        let matcher = self.matcher(faculty);
        let matched_keywords = matcher.distinct_matches(text);
        let hits = matched_keywords.len();
        let adjustment = self.adjustment_for_hits(hits);

        let issue = (hits < self.policy.min_faculty_hits).then(|| {
            let examples: Vec<&str> = matcher
                .keywords()
                .iter()
                .filter(|k| !matched_keywords.contains(*k))
                .take(4)
                .map(String::as_str)
                .collect();

            Issue::suggestion(
                Category::FacultyFit,
                format!(
                    "Few {}-specific terms for {} profile (found {})",
                    faculty,
                    faculty.profile_label(),
                    hits
                ),
                format!("{} Consider terms such as: {}.", faculty.advice(), examples.join(", ")),
            )
        });

        FacultyMatch {
            faculty: Some(faculty),
            matched_keywords,
            adjustment,
            issue,
        }
    }

    /// Step function from keyword hits to a bounded score adjustment. Uses the
    /// highest step whose threshold is met.
    pub fn adjustment_for_hits(&self, hits: usize) -> i32 {
        let cap = self.policy.max_faculty_adjustment.abs();

        self.policy
            .faculty_steps
            .iter()
            .filter(|step| hits >= step.min_hits)
            .max_by_key(|step| step.min_hits)
            .map_or(0, |step| step.adjustment.clamp(-cap, cap))
    }
}
