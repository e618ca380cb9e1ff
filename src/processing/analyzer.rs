//! Analysis engine combining feature extraction, the rule catalog, faculty
//! matching and scoring

use crate::config::{Config, RuleThresholds};
use crate::error::Result;
use crate::processing::document::ResumeText;
use crate::processing::faculty::{Faculty, FacultyMatcher};
use crate::processing::features::{FeatureExtractor, Facts};
use crate::processing::report::{AnalysisResult, ReportBuilder};
use crate::processing::rules::RuleCatalog;
use crate::processing::scoring::ScoreAggregator;
use std::time::Instant;

/// Main analysis engine. Holds the compiled lexicon and policy; immutable
/// after construction and safe to share across threads.
pub struct ResumeAnalyzer {
    extractor: FeatureExtractor,
    rules: RuleCatalog,
    thresholds: RuleThresholds,
    faculty_matcher: FacultyMatcher,
    aggregator: ScoreAggregator,
}

impl ResumeAnalyzer {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let analyzer = Self {
            extractor: FeatureExtractor::new(&config.lexicon, &config.thresholds)?,
            rules: RuleCatalog::default(),
            thresholds: config.thresholds.clone(),
            faculty_matcher: FacultyMatcher::new(&config.lexicon.faculty_keywords, &config.scoring)?,
            aggregator: ScoreAggregator::new(&config.scoring),
        };

        log::debug!("Resume analyzer ready with {} rules", analyzer.rules.rules().len());
        Ok(analyzer)
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(&Config::default())
    }

    /// Analyze resume text, optionally against a faculty profile
    pub fn analyze(&self, text: &str, faculty: Option<Faculty>) -> AnalysisResult {
        let start_time = Instant::now();
        let resume = ResumeText::new(text);

        // 1. Facts
        let facts = self.facts(&resume);

        // 2. Rules
        let mut issues = self.rules.evaluate(&facts, &self.thresholds);

        // 3. Faculty fit
        let faculty_match = self.faculty_matcher.evaluate(resume.content(), faculty);
        if let Some(issue) = faculty_match.issue {
            issues.push(issue);
        }

        // 4. Score
        let score = self.aggregator.score(&issues, faculty_match.adjustment);

        let result = ReportBuilder::build(
            issues,
            score,
            faculty_match.faculty,
            faculty_match.adjustment,
            resume.word_count(),
            resume.char_count(),
        );

        log::debug!(
            "Analysis finished in {}ms: score {}, {} issue(s), faculty {:?} ({} keyword hits, adjustment {})",
            start_time.elapsed().as_millis(),
            result.score,
            result.issues.len(),
            result.faculty,
            faculty_match.matched_keywords.len(),
            result.faculty_adjustment
        );

        result
    }

    /// Facts extracted from a resume, exposed for diagnostics
    pub fn facts(&self, resume: &ResumeText) -> Facts {
        self.extractor.extract(resume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::issue::{Category, Severity};

    #[test]
    fn test_analyzer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResumeAnalyzer>();
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let result = ResumeAnalyzer::with_defaults().unwrap().analyze("", None);

        assert_eq!(result.score, 0);
        assert_eq!(result.word_count, 0);
        assert_eq!(result.char_count, 0);
        assert!(result.summary.critical >= 4);
        assert_eq!(result.faculty_adjustment, 0);
    }

    #[test]
    fn test_faculty_issue_is_appended_last() {
        let result = ResumeAnalyzer::with_defaults()
            .unwrap()
            .analyze("Cashier at a grocery store", Some(Faculty::Sciences));

        let last = result.issues.last().unwrap();
        assert_eq!(last.category, Category::FacultyFit);
        assert_eq!(last.severity, Severity::Suggestion);
        assert!(result.faculty_adjustment < 0);
        assert_eq!(result.faculty, Some(Faculty::Sciences));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = Config::default();
        config.scoring.warning_penalty = 50;
        assert!(ResumeAnalyzer::new(&config).is_err());
    }

    #[test]
    fn test_custom_penalties_change_score() {
        let mut config = Config::default();
        config.scoring.suggestion_penalty = 0;
        config.scoring.warning_penalty = 0;
        config.scoring.critical_penalty = 1;

        let result = ResumeAnalyzer::new(&config).unwrap().analyze("", None);
        assert_eq!(result.score, 100 - result.summary.critical as u8);
    }
}
