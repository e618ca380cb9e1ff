//! Feature extraction: raw resume text to the fact bag the rules consume

use crate::config::RuleThresholds;
use crate::error::{Result, ResumeCheckerError};
use crate::processing::document::{
    classify_heading, starts_with_bullet, ResumeText, SectionAliases, SectionHeading, SectionKind,
};
use crate::processing::keyword_matcher::{Boundary, KeywordMatcher};
use crate::processing::lexicon::Lexicon;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;

/// Structural and lexical facts about one resume.
///
/// Length and density facts cover body lines only: a heading line adds a
/// section and nothing else, so removing one cannot shift any other threshold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Facts {
    /// Whitespace-delimited tokens in the whole document
    pub word_count: usize,
    /// Tokens on non-heading lines
    pub body_word_count: usize,
    /// Non-blank, non-heading lines
    pub line_count: usize,
    pub sections: Vec<SectionHeading>,
    pub has_email: bool,
    pub has_phone: bool,
    pub bullet_lines: usize,
    pub long_lines: usize,
    pub max_blank_run: usize,
    /// Lines pairing an action verb with a metric (percentage, amount, count)
    pub quantified_achievements: usize,
    pub action_verb_hits: usize,
    pub distinct_action_verbs: usize,
    pub filler_phrases: Vec<String>,
    pub pronoun_hits: usize,
    pub ats_keywords: Vec<String>,
    pub mentions_references: bool,
}

impl Facts {
    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|s| s.kind == kind)
    }

    pub fn section_line(&self, kind: SectionKind) -> Option<usize> {
        self.sections.iter().find(|s| s.kind == kind).map(|s| s.line)
    }

    pub fn bullet_density(&self) -> f32 {
        if self.line_count == 0 {
            0.0
        } else {
            self.bullet_lines as f32 / self.line_count as f32
        }
    }

    pub fn long_line_ratio(&self) -> f32 {
        if self.line_count == 0 {
            0.0
        } else {
            self.long_lines as f32 / self.line_count as f32
        }
    }

    pub fn action_verbs_per_100_words(&self) -> f32 {
        if self.body_word_count == 0 {
            0.0
        } else {
            self.action_verb_hits as f32 * 100.0 / self.body_word_count as f32
        }
    }
}

pub struct FeatureExtractor {
    sections: Vec<SectionAliases>,
    action_verbs: KeywordMatcher,
    filler_phrases: KeywordMatcher,
    ats_keywords: KeywordMatcher,
    pronouns: HashSet<String>,
    long_line_chars: usize,
    email_regex: Regex,
    phone_regex: Regex,
    quantity_regex: Regex,
    references_regex: Regex,
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| ResumeCheckerError::Processing(format!("Invalid regex '{}': {}", pattern, e)))
}

impl FeatureExtractor {
    pub fn new(lexicon: &Lexicon, thresholds: &RuleThresholds) -> Result<Self> {
        Ok(Self {
            sections: lexicon.sections.clone(),
            action_verbs: KeywordMatcher::new(&lexicon.action_verbs, Boundary::WholeWord)?,
            filler_phrases: KeywordMatcher::new(&lexicon.filler_phrases, Boundary::WholeWord)?,
            ats_keywords: KeywordMatcher::new(&lexicon.ats_keywords, Boundary::WholeWord)?,
            pronouns: lexicon.pronouns.iter().map(|p| p.trim().to_lowercase()).collect(),
            long_line_chars: thresholds.long_line_chars,
            email_regex: compile(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")?,
            phone_regex: compile(r"\+?\(?\d[\d \t().-]{8,}\d")?,
            // Bare digits are not enough: years and date ranges must not count
            quantity_regex: compile(concat!(
                r"[$€£]\s?\d",
                r"|\d\s?%",
                r"|\d\+",
                r"|\b\d+(?:\.\d+)?[xX]\b",
                r"|\b\d+(?:[.,]\d+)*[kKmMbB]\b",
                r"|\b\d+\s+(?:years?|months?|weeks?)\b",
                r"|\b\d{1,3}(?:,\d{3})*\s+[a-z]",
            ))?,
            references_regex: compile(r"(?i)\breferences\s+(?:are\s+)?available")?,
        })
    }

    pub fn extract(&self, resume: &ResumeText) -> Facts {
        let text = resume.content();
        let mut facts = Facts {
            word_count: resume.word_count(),
            sections: resume.detect_sections(&self.sections),
            has_email: self.email_regex.is_match(text),
            has_phone: self.has_phone(text),
            ..Facts::default()
        };

        self.scan_lines(text, &mut facts);

        facts.action_verb_hits = self.action_verbs.count_occurrences(text);
        facts.distinct_action_verbs = self.action_verbs.distinct_matches(text).len();
        facts.filler_phrases = self.filler_phrases.distinct_matches(text);
        facts.ats_keywords = self.ats_keywords.distinct_matches(text);
        facts.pronoun_hits = self.count_pronouns(text);
        facts.mentions_references =
            facts.has_section(SectionKind::References) || self.references_regex.is_match(text);

        facts
    }

    fn scan_lines(&self, text: &str, facts: &mut Facts) {
        let mut blank_run = 0;

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                blank_run += 1;
                facts.max_blank_run = facts.max_blank_run.max(blank_run);
                continue;
            }
            blank_run = 0;

            if classify_heading(trimmed, &self.sections).is_some() {
                continue;
            }

            facts.line_count += 1;
            facts.body_word_count += trimmed.split_whitespace().count();
            if starts_with_bullet(trimmed) {
                facts.bullet_lines += 1;
            }
            if trimmed.chars().count() > self.long_line_chars {
                facts.long_lines += 1;
            }
            if self.quantity_regex.is_match(trimmed) && self.action_verbs.contains_any(trimmed) {
                facts.quantified_achievements += 1;
            }
        }
    }

    fn has_phone(&self, text: &str) -> bool {
        self.phone_regex
            .find_iter(text)
            .flat_map(|mat| split_wide_gaps(mat.as_str()))
            .any(looks_like_phone)
    }

    fn count_pronouns(&self, text: &str) -> usize {
        let normalized = text.replace(['\u{2018}', '\u{2019}'], "'");
        normalized
            .unicode_words()
            .filter(|word| self.pronouns.contains(&word.to_lowercase()))
            .count()
    }
}

/// Split a candidate on runs of two or more whitespace characters, which
/// separate columns rather than digit groups.
fn split_wide_gaps(candidate: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut gap_start: Option<usize> = None;

    for (idx, ch) in candidate.char_indices() {
        if ch.is_whitespace() {
            if gap_start.is_none() {
                gap_start = Some(idx);
            }
            continue;
        }
        if let Some(gap) = gap_start.take() {
            if candidate[gap..idx].chars().count() >= 2 {
                parts.push(&candidate[start..gap]);
                start = idx;
            }
        }
    }
    parts.push(&candidate[start..]);
    parts
}

/// A phone number is some leading run of digit groups with 10 to 15 digits.
/// Shorter runs are tried so trailing digits such as a year do not push a
/// valid number over the limit. Runs made only of years are not phones.
fn looks_like_phone(candidate: &str) -> bool {
    let groups: Vec<&str> = candidate
        .split(|c: char| !c.is_ascii_digit())
        .filter(|group| !group.is_empty())
        .collect();

    let mut digits = 0;
    let mut only_years = true;
    for group in groups {
        digits += group.len();
        only_years &= is_year(group);
        if digits > MAX_PHONE_DIGITS {
            return false;
        }
        if digits >= MIN_PHONE_DIGITS && !only_years {
            return true;
        }
    }
    false
}

fn is_year(group: &str) -> bool {
    group.len() == 4 && (group.starts_with("19") || group.starts_with("20"))
}
