//! Score aggregation: severity penalties plus a bounded faculty adjustment

use crate::config::ScoringPolicy;
use crate::processing::issue::{Issue, Severity};

pub const MIN_SCORE: u8 = 0;
pub const MAX_SCORE: u8 = 100;

pub struct ScoreAggregator {
    base: i64,
    critical: i64,
    warning: i64,
    suggestion: i64,
}

impl ScoreAggregator {
    pub fn new(policy: &ScoringPolicy) -> Self {
        Self {
            base: i64::from(policy.base_score),
            critical: i64::from(policy.critical_penalty),
            warning: i64::from(policy.warning_penalty),
            suggestion: i64::from(policy.suggestion_penalty),
        }
    }

    pub fn penalty(&self, severity: Severity) -> i64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::Warning => self.warning,
            Severity::Suggestion => self.suggestion,
        }
    }

    /// Final score in `MIN_SCORE..=MAX_SCORE`
    pub fn score(&self, issues: &[Issue], adjustment: i32) -> u8 {
        let penalties: i64 = issues.iter().map(|issue| self.penalty(issue.severity)).sum();
        let raw = self.base - penalties + i64::from(adjustment);
        let clamped = raw.clamp(i64::from(MIN_SCORE), i64::from(MAX_SCORE));

        log::debug!("score: base {} - penalties {} + adjustment {} = {} (clamped {})", self.base, penalties, adjustment, raw, clamped);

        clamped as u8
    }
}

impl Default for ScoreAggregator {
    fn default() -> Self {
        Self::new(&ScoringPolicy::default())
    }
}
