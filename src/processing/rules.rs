//! Rule catalog: independent heuristics, each scoped to one category

use crate::config::RuleThresholds;
use crate::processing::document::SectionKind;
use crate::processing::features::Facts;
use crate::processing::issue::{Category, Issue};

/// A rule is a pure function of the facts and the thresholds
pub type RuleFn = fn(&Facts, &RuleThresholds) -> Vec<Issue>;

#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub category: Category,
    pub check: RuleFn,
}

/// Rules in emission order: category declaration order, then rule order
const DEFAULT_RULES: &[Rule] = &[
    Rule { name: "required_sections", category: Category::Sections, check: required_sections },
    Rule { name: "recommended_sections", category: Category::Sections, check: recommended_sections },
    Rule { name: "blank_lines", category: Category::Formatting, check: blank_lines },
    Rule { name: "long_lines", category: Category::Formatting, check: long_lines },
    Rule { name: "bullet_density", category: Category::Formatting, check: bullet_density },
    Rule { name: "near_empty", category: Category::Content, check: near_empty },
    Rule { name: "quantified_achievements", category: Category::Content, check: quantified_achievements },
    Rule { name: "action_verbs", category: Category::Content, check: action_verbs },
    Rule { name: "ats_keywords", category: Category::Keywords, check: ats_keywords },
    Rule { name: "heading_count", category: Category::Structure, check: heading_count },
    Rule { name: "document_length", category: Category::Structure, check: document_length },
    Rule { name: "section_order", category: Category::Structure, check: section_order },
    Rule { name: "contact_info", category: Category::CommonMistakes, check: contact_info },
    Rule { name: "filler_phrases", category: Category::CommonMistakes, check: filler_phrases },
    Rule { name: "personal_pronouns", category: Category::CommonMistakes, check: personal_pronouns },
    Rule { name: "references", category: Category::CommonMistakes, check: references },
];

pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }
}

impl RuleCatalog {
    /// Build a catalog; rules are stably reordered by category
    pub fn new(mut rules: Vec<Rule>) -> Self {
        rules.sort_by_key(|rule| rule.category);
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn evaluate(&self, facts: &Facts, thresholds: &RuleThresholds) -> Vec<Issue> {
        let mut issues = Vec::new();

        for rule in &self.rules {
            let found = (rule.check)(facts, thresholds);
            debug_assert!(
                found.iter().all(|issue| issue.category == rule.category),
                "rule {} emitted an issue outside its category",
                rule.name
            );
            if !found.is_empty() {
                log::debug!("rule {} produced {} issue(s)", rule.name, found.len());
            }
            issues.extend(found);
        }

        issues
    }
}

fn heading_text(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Contact => "\"Contact\"",
        SectionKind::Summary => "\"Summary\" or \"Objective\"",
        SectionKind::Experience => "\"Experience\" or \"Work History\"",
        SectionKind::Education => "\"Education\"",
        SectionKind::Skills => "\"Skills\" or \"Technical Skills\"",
        SectionKind::Projects => "\"Projects\"",
        SectionKind::Certifications => "\"Certifications\"",
        SectionKind::References => "\"References\"",
    }
}

fn section_purpose(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Contact => "with your email and phone number",
        SectionKind::Summary => "with a two or three line professional summary at the top",
        SectionKind::Experience => "listing roles, employers and dates with achievement bullets",
        SectionKind::Education => "listing your degrees and institutions",
        SectionKind::Skills => "listing relevant technical and soft skills",
        SectionKind::Projects => "describing notable projects and their outcomes",
        SectionKind::Certifications => "listing certifications and licenses",
        SectionKind::References => "only if the application asks for referees",
    }
}

// --- sections ---

fn required_sections(facts: &Facts, thresholds: &RuleThresholds) -> Vec<Issue> {
    thresholds
        .required_sections
        .iter()
        .filter(|kind| !facts.has_section(**kind))
        .map(|kind| {
            Issue::critical(
                Category::Sections,
                format!("{} section not found", kind),
                format!("Add a clear {} heading {}", heading_text(*kind), section_purpose(*kind)),
            )
        })
        .collect()
}

fn recommended_sections(facts: &Facts, thresholds: &RuleThresholds) -> Vec<Issue> {
    thresholds
        .recommended_sections
        .iter()
        .filter(|kind| !thresholds.required_sections.contains(*kind) && !facts.has_section(**kind))
        .map(|kind| {
            Issue::suggestion(
                Category::Sections,
                format!("No {} section found", kind.to_string().to_lowercase()),
                format!("Consider adding a {} heading {}", heading_text(*kind), section_purpose(*kind)),
            )
        })
        .collect()
}

// --- formatting ---

fn blank_lines(facts: &Facts, thresholds: &RuleThresholds) -> Vec<Issue> {
    if facts.max_blank_run < thresholds.excessive_blank_lines {
        return Vec::new();
    }

    vec![Issue::warning(
        Category::Formatting,
        format!("Excessive blank lines detected ({} in a row)", facts.max_blank_run),
        "Remove extra blank lines to improve readability",
    )]
}

fn long_lines(facts: &Facts, thresholds: &RuleThresholds) -> Vec<Issue> {
    if facts.line_count < thresholds.min_lines_for_long_line_check
        || facts.long_line_ratio() <= thresholds.max_long_line_ratio
    {
        return Vec::new();
    }

    vec![Issue::suggestion(
        Category::Formatting,
        format!("{} of {} lines are very long", facts.long_lines, facts.line_count),
        format!(
            "Break lines longer than {} characters into concise bullet points",
            thresholds.long_line_chars
        ),
    )]
}

fn bullet_density(facts: &Facts, thresholds: &RuleThresholds) -> Vec<Issue> {
    if facts.line_count < thresholds.min_lines_for_bullet_check {
        return Vec::new();
    }

    let density = facts.bullet_density();
    if density < thresholds.min_bullet_density {
        vec![Issue::warning(
            Category::Formatting,
            format!("Few bullet points ({:.0}% of lines)", density * 100.0),
            "Use bullet points (•, -, or *) to organize your experience and skills",
        )]
    } else if density > thresholds.max_bullet_density {
        vec![Issue::warning(
            Category::Formatting,
            format!("Nearly every line is a bullet point ({:.0}% of lines)", density * 100.0),
            "Group bullets under clear headings and role titles so the structure stays scannable",
        )]
    } else {
        Vec::new()
    }
}

// --- content ---

fn near_empty(facts: &Facts, thresholds: &RuleThresholds) -> Vec<Issue> {
    if facts.body_word_count >= thresholds.min_words {
        return Vec::new();
    }

    vec![Issue::critical(
        Category::Content,
        format!("Resume appears to be empty or nearly empty ({} words)", facts.body_word_count),
        format!(
            "Ensure your resume contains substantial content (at least {} words)",
            thresholds.brief_words
        ),
    )]
}

fn quantified_achievements(facts: &Facts, thresholds: &RuleThresholds) -> Vec<Issue> {
    let expected = thresholds
        .min_quantified_achievements
        .max(facts.body_word_count / thresholds.words_per_quantified_achievement.max(1));

    if facts.quantified_achievements >= expected {
        return Vec::new();
    }

    vec![Issue::warning(
        Category::Content,
        format!(
            "Limited quantified achievements (found {}, expected at least {})",
            facts.quantified_achievements, expected
        ),
        "Add specific numbers, percentages, or metrics to demonstrate impact (e.g., \"increased sales by 25%\", \"managed team of 5\")",
    )]
}

fn action_verbs(facts: &Facts, thresholds: &RuleThresholds) -> Vec<Issue> {
    if facts.distinct_action_verbs < thresholds.min_distinct_action_verbs {
        return vec![Issue::warning(
            Category::Content,
            "Limited use of action verbs",
            format!(
                "Use more action verbs (found {}). Examples: achieved, managed, developed, implemented, created",
                facts.distinct_action_verbs
            ),
        )];
    }

    let density = facts.action_verbs_per_100_words();
    if density < thresholds.min_action_verbs_per_100_words {
        return vec![Issue::suggestion(
            Category::Content,
            format!("Action verbs are sparse ({:.1} per 100 words)", density),
            "Start each achievement bullet with a strong action verb such as led, built, or reduced",
        )];
    }

    Vec::new()
}

// --- keywords ---

fn ats_keywords(facts: &Facts, thresholds: &RuleThresholds) -> Vec<Issue> {
    if facts.ats_keywords.len() >= thresholds.min_ats_keywords {
        return Vec::new();
    }

    vec![Issue::suggestion(
        Category::Keywords,
        format!(
            "Few industry keywords for applicant tracking systems (found {})",
            facts.ats_keywords.len()
        ),
        "Mirror the tools, technologies and skills named in job postings you target so ATS filters pick them up",
    )]
}

// --- structure ---

fn heading_count(facts: &Facts, thresholds: &RuleThresholds) -> Vec<Issue> {
    if facts.sections.len() >= thresholds.min_section_headings {
        return Vec::new();
    }

    vec![Issue::warning(
        Category::Structure,
        "Resume structure may be unclear",
        "Ensure your resume has clear section headers (e.g., EXPERIENCE, EDUCATION, SKILLS)",
    )]
}

fn document_length(facts: &Facts, thresholds: &RuleThresholds) -> Vec<Issue> {
    // Nearly empty documents are already reported under content
    if facts.body_word_count < thresholds.min_words {
        return Vec::new();
    }

    if facts.body_word_count < thresholds.brief_words {
        vec![Issue::warning(
            Category::Structure,
            "Resume may be too brief",
            format!(
                "Consider expanding your resume (currently ~{} words). Aim for 300-500 words for most positions",
                facts.body_word_count
            ),
        )]
    } else if facts.body_word_count > thresholds.max_words {
        vec![Issue::warning(
            Category::Structure,
            "Resume may be too long",
            format!(
                "Consider condensing your resume (currently ~{} words). Most resumes should be 1-2 pages",
                facts.body_word_count
            ),
        )]
    } else {
        Vec::new()
    }
}

fn section_order(facts: &Facts, _thresholds: &RuleThresholds) -> Vec<Issue> {
    match (
        facts.section_line(SectionKind::Summary),
        facts.section_line(SectionKind::Experience),
    ) {
        (Some(summary), Some(experience)) if summary > experience => vec![Issue::warning(
            Category::Structure,
            "Summary appears after the experience section",
            "Move your professional summary to the top so recruiters read it first",
        )],
        _ => Vec::new(),
    }
}

// --- common mistakes ---

fn contact_info(facts: &Facts, _thresholds: &RuleThresholds) -> Vec<Issue> {
    match (facts.has_email, facts.has_phone) {
        (false, false) => vec![Issue::critical(
            Category::CommonMistakes,
            "No contact information found",
            "Add a professional email address and phone number at the top of your resume",
        )],
        (false, true) => vec![Issue::warning(
            Category::CommonMistakes,
            "Email address not found",
            "Add a professional email address in your contact section",
        )],
        (true, false) => vec![Issue::suggestion(
            Category::CommonMistakes,
            "Phone number not found",
            "Consider adding a phone number for better contact options",
        )],
        (true, true) => Vec::new(),
    }
}

fn filler_phrases(facts: &Facts, _thresholds: &RuleThresholds) -> Vec<Issue> {
    if facts.filler_phrases.is_empty() {
        return Vec::new();
    }

    let quoted: Vec<String> = facts.filler_phrases.iter().map(|p| format!("\"{}\"", p)).collect();
    vec![Issue::warning(
        Category::CommonMistakes,
        format!("Weak or filler language detected: {}", quoted.join(", ")),
        "Replace weak phrases with strong action verbs and concrete outcomes",
    )]
}

fn personal_pronouns(facts: &Facts, _thresholds: &RuleThresholds) -> Vec<Issue> {
    if facts.pronoun_hits == 0 {
        return Vec::new();
    }

    vec![Issue::warning(
        Category::CommonMistakes,
        format!("Personal pronouns detected ({} occurrences)", facts.pronoun_hits),
        "Avoid using \"I\", \"me\", \"my\" in resumes. Use action verbs instead (e.g., \"Managed team\" instead of \"I managed a team\")",
    )]
}

fn references(facts: &Facts, _thresholds: &RuleThresholds) -> Vec<Issue> {
    if !facts.mentions_references {
        return Vec::new();
    }

    vec![Issue::suggestion(
        Category::CommonMistakes,
        "References section found",
        "Remove \"References available upon request\"; it's assumed and takes up valuable space",
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::SectionHeading;
    use crate::processing::issue::Severity;

    fn healthy_facts() -> Facts {
        let sections = [
            SectionKind::Summary,
            SectionKind::Experience,
            SectionKind::Education,
            SectionKind::Skills,
        ]
        .iter()
        .enumerate()
        .map(|(i, kind)| SectionHeading { kind: *kind, line: i * 10 })
        .collect();

        Facts {
            word_count: 404,
            body_word_count: 400,
            line_count: 30,
            sections,
            has_email: true,
            has_phone: true,
            bullet_lines: 12,
            long_lines: 2,
            max_blank_run: 1,
            quantified_achievements: 6,
            action_verb_hits: 10,
            distinct_action_verbs: 7,
            filler_phrases: Vec::new(),
            pronoun_hits: 0,
            ats_keywords: ["rust", "python", "docker", "aws", "sql", "agile"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            mentions_references: false,
        }
    }

    fn run(facts: &Facts) -> Vec<Issue> {
        RuleCatalog::default().evaluate(facts, &RuleThresholds::default())
    }

    #[test]
    fn test_healthy_resume_has_no_issues() {
        assert!(run(&healthy_facts()).is_empty());
    }

    #[test]
    fn test_catalog_is_ordered_by_category() {
        let catalog = RuleCatalog::default();
        let categories: Vec<Category> = catalog.rules().iter().map(|r| r.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
        assert!(catalog.rules().iter().all(|r| r.category != Category::FacultyFit));
    }

    #[test]
    fn test_missing_required_section_is_critical() {
        let mut facts = healthy_facts();
        facts.sections.retain(|s| s.kind != SectionKind::Skills);

        let issues = run(&facts);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Critical);
        assert_eq!(issues[0].category, Category::Sections);
        assert!(issues[0].message.contains("Skills"));
    }

    #[test]
    fn test_empty_facts_trigger_every_applicable_rule() {
        let issues = run(&Facts::default());

        let critical_sections = issues
            .iter()
            .filter(|i| i.category == Category::Sections && i.severity == Severity::Critical)
            .count();
        assert_eq!(critical_sections, 3);
        assert!(issues.iter().any(|i| i.message == "No contact information found"));
        assert!(issues.iter().any(|i| i.message.starts_with("Resume appears to be empty")));
        assert!(!issues.iter().any(|i| i.message.starts_with("Resume may be too brief")));
        assert!(issues.iter().all(|i| !i.suggestion.is_empty()));
    }

    #[test]
    fn test_emission_follows_category_order() {
        let issues = run(&Facts::default());
        let categories: Vec<Category> = issues.iter().map(|i| i.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }

    #[test]
    fn test_bullet_density_band() {
        let mut facts = healthy_facts();
        facts.bullet_lines = 1;
        let issues = run(&facts);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.starts_with("Few bullet points"));

        facts.bullet_lines = 29;
        let issues = run(&facts);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.starts_with("Nearly every line"));
    }

    #[test]
    fn test_length_thresholds() {
        let mut facts = healthy_facts();
        facts.body_word_count = 120;
        assert!(run(&facts).iter().any(|i| i.message == "Resume may be too brief"));

        facts.body_word_count = 1200;
        facts.quantified_achievements = 12;
        facts.action_verb_hits = 20;
        let issues = run(&facts);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Resume may be too long");
    }

    #[test]
    fn test_quantified_threshold_scales_with_length() {
        let mut facts = healthy_facts();
        facts.body_word_count = 900;
        facts.action_verb_hits = 20;
        facts.quantified_achievements = 6;

        let issues = run(&facts);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("expected at least 9"));
    }

    #[test]
    fn test_action_verb_density_suggestion() {
        let mut facts = healthy_facts();
        facts.action_verb_hits = 3;

        let issues = run(&facts);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Suggestion);
    }

    #[test]
    fn test_summary_after_experience() {
        let mut facts = healthy_facts();
        facts.sections[0].line = 25;

        let issues = run(&facts);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, Category::Structure);
    }

    #[test]
    fn test_contact_severity_ladder() {
        let mut facts = healthy_facts();
        facts.has_phone = false;
        assert_eq!(run(&facts)[0].severity, Severity::Suggestion);

        facts.has_phone = true;
        facts.has_email = false;
        assert_eq!(run(&facts)[0].severity, Severity::Warning);

        facts.has_phone = false;
        assert_eq!(run(&facts)[0].severity, Severity::Critical);
    }

    #[test]
    fn test_common_mistakes() {
        let mut facts = healthy_facts();
        facts.filler_phrases = vec!["helped".to_string(), "team player".to_string()];
        facts.pronoun_hits = 4;
        facts.mentions_references = true;

        let issues = run(&facts);
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.category == Category::CommonMistakes));
        assert!(issues[0].message.contains("\"team player\""));
    }
}
