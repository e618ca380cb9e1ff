//! Resume text and section heading detection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Headings longer than this are treated as body text
const MAX_HEADING_WORDS: usize = 5;
const MAX_HEADING_CHARS: usize = 60;

/// Raw resume text as handed over by the ingestion layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeText {
    content: String,
    word_count: usize,
    char_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    References,
}

/// Header aliases for one section kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionAliases {
    pub kind: SectionKind,
    pub aliases: Vec<String>,
}

/// A detected section heading, with its zero-based line number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionHeading {
    pub kind: SectionKind,
    pub line: usize,
}

impl ResumeText {
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let word_count = content.split_whitespace().count();
        let char_count = content.chars().count();

        Self {
            content,
            word_count,
            char_count,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn is_blank(&self) -> bool {
        self.word_count == 0
    }

    /// Detect section headings in document order, keeping the first heading
    /// of each kind.
    pub fn detect_sections(&self, sections: &[SectionAliases]) -> Vec<SectionHeading> {
        let mut headings: Vec<SectionHeading> = Vec::new();

        for (line_idx, line) in self.content.lines().enumerate() {
            let Some(kind) = classify_heading(line, sections) else {
                continue;
            };

            if headings.iter().all(|h| h.kind != kind) {
                headings.push(SectionHeading { kind, line: line_idx });
            }
        }

        headings
    }
}

/// Decide whether a single line is a section heading and of which kind.
/// The longest matching alias wins.
pub fn classify_heading(line: &str, sections: &[SectionAliases]) -> Option<SectionKind> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_HEADING_CHARS {
        return None;
    }
    if starts_with_bullet(trimmed) {
        return None;
    }

    let normalized = trimmed
        .trim_start_matches('#')
        .trim()
        .trim_end_matches(':')
        .trim()
        .to_lowercase();

    if normalized.split_whitespace().count() > MAX_HEADING_WORDS {
        return None;
    }

    let mut best: Option<(SectionKind, usize)> = None;
    for section in sections {
        for alias in &section.aliases {
            let alias = alias.trim().to_lowercase();
            if alias.is_empty() || !heading_matches(&normalized, &alias) {
                continue;
            }
            if best.map_or(true, |(_, len)| alias.len() > len) {
                best = Some((section.kind, alias.len()));
            }
        }
    }

    best.map(|(kind, _)| kind)
}

fn heading_matches(normalized: &str, alias: &str) -> bool {
    if normalized == alias {
        return true;
    }

    normalized
        .strip_prefix(alias)
        .and_then(|rest| rest.chars().next())
        .map_or(false, |next| !next.is_alphanumeric())
}

/// Whether a trimmed line starts with a bullet glyph or list numbering
pub fn starts_with_bullet(trimmed: &str) -> bool {
    let mut chars = trimmed.chars();
    match chars.next() {
        Some('•' | '-' | '*' | '▪' | '◦' | '‣' | '●' | '–' | '>') => true,
        Some(c) if c.is_ascii_digit() => {
            let rest = trimmed.trim_start_matches(|c: char| c.is_ascii_digit());
            let mut rest_chars = rest.chars();
            matches!(rest_chars.next(), Some('.' | ')'))
                && rest_chars.next().map_or(false, char::is_whitespace)
        }
        _ => false,
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKind::Contact => write!(f, "Contact"),
            SectionKind::Summary => write!(f, "Summary"),
            SectionKind::Experience => write!(f, "Experience"),
            SectionKind::Education => write!(f, "Education"),
            SectionKind::Skills => write!(f, "Skills"),
            SectionKind::Projects => write!(f, "Projects"),
            SectionKind::Certifications => write!(f, "Certifications"),
            SectionKind::References => write!(f, "References"),
        }
    }
}
