//! Case-insensitive multi-keyword matching on word boundaries

use crate::error::{Result, ResumeCheckerError};
use aho_corasick::{AhoCorasick, MatchKind};

/// Where a keyword match has to sit relative to surrounding words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Both ends must fall on a word boundary ("go" does not match "good")
    WholeWord,
    /// Only the start must; inflections still match ("design" matches "designed")
    WordStart,
}

/// Aho-Corasick matcher over a fixed keyword list
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    automaton: AhoCorasick,
    keywords: Vec<String>,
    boundary: Boundary,
}

impl KeywordMatcher {
    pub fn new(keywords: &[String], boundary: Boundary) -> Result<Self> {
        let mut keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        keywords.sort();
        keywords.dedup();

        // Longest first so overlapping keywords prefer the longer phrase
        keywords.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keywords)
            .map_err(|e| ResumeCheckerError::Processing(format!("Failed to build keyword matcher: {}", e)))?;

        Ok(Self {
            automaton,
            keywords,
            boundary,
        })
    }

    /// Distinct keywords present in the text, in order of first occurrence
    pub fn distinct_matches(&self, text: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();

        for mat in self.automaton.find_iter(text) {
            if !self.on_boundary(text, mat.start(), mat.end()) {
                continue;
            }

            let keyword = &self.keywords[mat.pattern().as_usize()];
            if !found.contains(keyword) {
                found.push(keyword.clone());
            }
        }

        found
    }

    /// Total number of keyword occurrences
    pub fn count_occurrences(&self, text: &str) -> usize {
        self.automaton
            .find_iter(text)
            .filter(|mat| self.on_boundary(text, mat.start(), mat.end()))
            .count()
    }

    pub fn contains_any(&self, text: &str) -> bool {
        self.automaton
            .find_iter(text)
            .any(|mat| self.on_boundary(text, mat.start(), mat.end()))
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn on_boundary(&self, text: &str, start: usize, end: usize) -> bool {
        let starts_word = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        if !starts_word {
            return false;
        }

        match self.boundary {
            Boundary::WordStart => true,
            Boundary::WholeWord => text[end..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric()),
        }
    }
}
