//! Output formatters: console, JSON, Markdown and HTML renderings of a check

use crate::config::OutputFormat;
use crate::error::{Result, ResumeCheckerError};
use crate::output::report::{AnalysisResponse, CheckReport};
use crate::processing::issue::{Issue, Severity};
use crate::processing::report::AnalysisResult;
use askama::Template;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

const RULE_WIDTH: usize = 70;

/// Trait for formatting check reports
pub trait OutputFormatter {
    fn format_report(&self, report: &CheckReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and severity grouping
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter emitting the API response shape
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that dispatches to the formatter for a format
pub struct ReportGenerator {
    formatters: Vec<Box<dyn OutputFormatter>>,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Check Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; margin-bottom: 30px; border-bottom: 3px solid #007acc; padding-bottom: 20px; }
        .score-badge { display: inline-block; padding: 8px 16px; border-radius: 20px; font-weight: bold; color: white; margin-left: 10px; }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .summary { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 15px; margin: 20px 0; }
        .summary-item { background: #f8f9fa; padding: 15px; border-radius: 6px; border-left: 4px solid #007acc; }
        .issue { margin: 12px 0; padding: 12px 16px; border-radius: 6px; background: #f8f9fa; }
        .issue-critical { border-left: 4px solid #dc3545; }
        .issue-warning { border-left: 4px solid #ffc107; }
        .issue-suggestion { border-left: 4px solid #17a2b8; }
        .severity { font-size: 0.8em; font-weight: bold; text-transform: uppercase; }
        .metadata { margin-top: 30px; font-size: 0.85em; color: #6c757d; border-top: 1px solid #e9ecef; padding-top: 15px; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Resume Check Report</h1>
            <p>Score: {{ score }}/100 <span class="score-badge {{ score_class }}">{{ score_label }}</span></p>
            <p>{{ summary_line }}</p>
        </div>

        <div class="summary">
            <div class="summary-item"><strong>Critical</strong><br>{{ critical }}</div>
            <div class="summary-item"><strong>Warnings</strong><br>{{ warnings }}</div>
            <div class="summary-item"><strong>Suggestions</strong><br>{{ suggestions }}</div>
            <div class="summary-item"><strong>Words</strong><br>{{ word_count }}</div>
            <div class="summary-item"><strong>Characters</strong><br>{{ char_count }}</div>
            {% if has_faculty %}
            <div class="summary-item"><strong>Faculty</strong><br>{{ faculty }} ({{ faculty_adjustment }})</div>
            {% endif %}
        </div>

        {% if categories.is_empty() %}
        <p>No issues found. Your resume looks good!</p>
        {% endif %}
        {% for category in categories %}
        <div class="section">
            <h2>{{ category.label }}</h2>
            {% for issue in category.issues %}
            <div class="issue issue-{{ issue.severity }}">
                <span class="severity">{{ issue.severity }}</span>
                <p>{{ issue.message }}</p>
                <p><em>{{ issue.suggestion }}</em></p>
            </div>
            {% endfor %}
        </div>
        {% endfor %}

        <div class="metadata">
            <p><strong>Generated by resume-checker v{{ version }}</strong> on {{ generated_at }}</p>
            <p><strong>Resume:</strong> {{ resume_file }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate<'a> {
    include_styles: bool,
    score: u8,
    score_class: &'static str,
    score_label: &'static str,
    summary_line: String,
    critical: usize,
    warnings: usize,
    suggestions: usize,
    word_count: usize,
    char_count: usize,
    has_faculty: bool,
    faculty: String,
    faculty_adjustment: String,
    categories: Vec<HtmlCategory<'a>>,
    version: &'a str,
    generated_at: String,
    resume_file: &'a str,
}

struct HtmlCategory<'a> {
    label: &'static str,
    issues: Vec<HtmlIssue<'a>>,
}

struct HtmlIssue<'a> {
    severity: &'static str,
    message: &'a str,
    suggestion: &'a str,
}

/// One-line summary, e.g. "Found 3 issue(s): 1 critical, 2 warning(s)"
pub fn summary_line(result: &AnalysisResult) -> String {
    let summary = &result.summary;
    if summary.total() == 0 {
        return "No issues found. Resume looks good!".to_string();
    }

    let mut parts = Vec::new();
    if summary.critical > 0 {
        parts.push(format!("{} critical", summary.critical));
    }
    if summary.warnings > 0 {
        parts.push(format!("{} warning(s)", summary.warnings));
    }
    if summary.suggestions > 0 {
        parts.push(format!("{} suggestion(s)", summary.suggestions));
    }

    format!("Found {} issue(s): {}", summary.total(), parts.join(", "))
}

fn score_label(score: u8) -> &'static str {
    match score {
        90..=100 => "EXCELLENT",
        80..=89 => "VERY GOOD",
        70..=79 => "GOOD",
        60..=69 => "FAIR",
        50..=59 => "BELOW AVG",
        _ => "POOR",
    }
}

fn severity_heading(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "CRITICAL ISSUES",
        Severity::Warning => "WARNINGS",
        Severity::Suggestion => "SUGGESTIONS",
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn severity_color(severity: Severity) -> Color {
        match severity {
            Severity::Critical => Color::Red,
            Severity::Warning => Color::Yellow,
            Severity::Suggestion => Color::Cyan,
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let color = match score {
            90..=100 => Color::Green,
            80..=89 => Color::BrightGreen,
            70..=79 => Color::Yellow,
            60..=69 => Color::BrightYellow,
            50..=59 => Color::Red,
            _ => Color::BrightRed,
        };
        format!("[{}]", self.bold(score_label(score), color))
    }

    fn format_banner(&self, output: &mut String, title: &str) {
        output.push_str(&format!("\n{}\n", "=".repeat(RULE_WIDTH)));
        output.push_str(&self.bold(title, Color::Blue));
        output.push_str(&format!("\n{}\n\n", "=".repeat(RULE_WIDTH)));
    }

    fn format_issue_section(&self, output: &mut String, severity: Severity, issues: &[&Issue]) {
        let color = Self::severity_color(severity);
        output.push_str(&format!("\n{}\n{}\n", self.bold(severity_heading(severity), color), "-".repeat(RULE_WIDTH)));

        for (idx, issue) in issues.iter().enumerate() {
            output.push_str(&format!("\n{}. {}\n", idx + 1, issue.message));
            output.push_str(&format!("   Category: {}\n", issue.category.label()));
            output.push_str(&format!("   Suggestion: {}\n", issue.suggestion));
        }
    }

    fn format_success(&self, output: &mut String) {
        output.push_str(&self.colorize("✓ Excellent! No major issues found.", Color::Green));
        output.push_str("\n\nYour resume looks good! Keep up the great work.\n");
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &CheckReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        self.format_banner(&mut output, "RESUME ANALYSIS REPORT");

        output.push_str(&format!(
            "Resume: {} | Generated: {}\n\n",
            report.metadata.resume_file,
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str("Resume Statistics:\n");
        output.push_str(&format!("  • Word count: {}\n", result.word_count));
        output.push_str(&format!("  • Character count: {}\n", result.char_count));
        if let Some(faculty) = result.faculty {
            output.push_str(&format!(
                "  • Faculty: {} (adjustment {:+})\n",
                faculty, result.faculty_adjustment
            ));
        }
        output.push('\n');

        if result.issues.is_empty() {
            self.format_success(&mut output);
        } else {
            output.push_str("Issue Summary:\n");
            for severity in Severity::ALL {
                let label = match severity {
                    Severity::Critical => "Critical issues",
                    Severity::Warning => "Warnings",
                    Severity::Suggestion => "Suggestions",
                };
                let line = format!("  • {}: {}", label, result.summary.count(severity));
                output.push_str(&self.colorize(&line, Self::severity_color(severity)));
                output.push('\n');
            }

            for severity in Severity::ALL {
                let issues: Vec<&Issue> = result.issues_with_severity(severity).collect();
                if !issues.is_empty() {
                    self.format_issue_section(&mut output, severity, &issues);
                }
            }

            if self.detailed {
                output.push_str(&format!("\n{}\nISSUES BY CATEGORY\n{}\n", "-".repeat(RULE_WIDTH), "-".repeat(RULE_WIDTH)));
                for (category, issues) in &result.issues_by_category {
                    output.push_str(&format!("\n{}:\n", category.label().to_uppercase()));
                    for issue in issues {
                        let tag = format!("[{}]", issue.severity.as_str().to_uppercase());
                        output.push_str(&format!(
                            "  {} {}\n    → {}\n",
                            self.colorize(&tag, Self::severity_color(issue.severity)),
                            issue.message,
                            issue.suggestion
                        ));
                    }
                }
            }
        }

        output.push_str(&format!("\n{}\n", "=".repeat(RULE_WIDTH)));
        output.push_str(&format!(
            "OVERALL SCORE: {}/100 {}\n",
            result.score,
            self.format_score_badge(result.score)
        ));
        output.push_str(&format!("{}\n{}\n", summary_line(result), "=".repeat(RULE_WIDTH)));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &CheckReport) -> Result<String> {
        let response = AnalysisResponse::from(&report.result);
        if self.pretty {
            Ok(serde_json::to_string_pretty(&response)?)
        } else {
            Ok(serde_json::to_string(&response)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_severity(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => "🔴 Critical",
            Severity::Warning => "🟠 Warning",
            Severity::Suggestion => "🔵 Suggestion",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &CheckReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str("# Resume Check Report\n\n");

        if self.include_metadata {
            let file_name = Path::new(&report.metadata.resume_file)
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| report.metadata.resume_file.clone());
            output.push_str(&format!(
                "**Generated:** {} | **Resume:** `{}`\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                file_name
            ));
        }

        output.push_str(&format!("**Score:** {}/100 ({})\n\n", result.score, score_label(result.score)));
        output.push_str(&format!("{}\n\n", summary_line(result)));

        output.push_str("| Statistic | Value |\n");
        output.push_str("|-----------|-------|\n");
        output.push_str(&format!("| Word count | {} |\n", result.word_count));
        output.push_str(&format!("| Character count | {} |\n", result.char_count));
        output.push_str(&format!("| Critical issues | {} |\n", result.summary.critical));
        output.push_str(&format!("| Warnings | {} |\n", result.summary.warnings));
        output.push_str(&format!("| Suggestions | {} |\n", result.summary.suggestions));
        if let Some(faculty) = result.faculty {
            output.push_str(&format!("| Faculty | {} ({:+}) |\n", faculty, result.faculty_adjustment));
        }
        output.push('\n');

        for (category, issues) in &result.issues_by_category {
            output.push_str(&format!("## {}\n\n", category.label()));
            for issue in issues {
                output.push_str(&format!(
                    "- **{}:** {}\n  - {}\n",
                    Self::markdown_severity(issue.severity),
                    issue.message,
                    issue.suggestion
                ));
            }
            output.push('\n');
        }

        if self.include_metadata {
            output.push_str(&format!("---\n*Generated by resume-checker v{}*\n", report.metadata.version));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data<'a>(&self, report: &'a CheckReport) -> HtmlTemplate<'a> {
        let result = &report.result;
        let score_class = match result.score {
            90..=100 => "score-excellent",
            70..=89 => "score-good",
            60..=69 => "score-fair",
            _ => "score-poor",
        };

        let categories = result
            .issues_by_category
            .iter()
            .map(|(category, issues)| HtmlCategory {
                label: category.label(),
                issues: issues
                    .iter()
                    .map(|issue| HtmlIssue {
                        severity: issue.severity.as_str(),
                        message: &issue.message,
                        suggestion: &issue.suggestion,
                    })
                    .collect(),
            })
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            score: result.score,
            score_class,
            score_label: score_label(result.score),
            summary_line: summary_line(result),
            critical: result.summary.critical,
            warnings: result.summary.warnings,
            suggestions: result.summary.suggestions,
            word_count: result.word_count,
            char_count: result.char_count,
            has_faculty: result.faculty.is_some(),
            faculty: result.faculty.map(|f| f.to_string()).unwrap_or_default(),
            faculty_adjustment: format!("{:+}", result.faculty_adjustment),
            categories,
            version: &report.metadata.version,
            generated_at: report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            resume_file: &report.metadata.resume_file,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &CheckReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ResumeCheckerError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            formatters: vec![
                Box::new(ConsoleFormatter::new(use_colors, detailed)),
                Box::new(JsonFormatter::new(pretty_json)),
                Box::new(MarkdownFormatter::new(include_metadata)),
                Box::new(HtmlFormatter::new(true)),
            ],
        }
    }

    pub fn generate_report(&self, report: &CheckReport, format: OutputFormat) -> Result<String> {
        let formatter = self
            .formatters
            .iter()
            .find(|f| f.supports_format() == format)
            .ok_or_else(|| ResumeCheckerError::OutputFormatting(format!("No formatter registered for {:?}", format)))?;

        formatter.format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// Where `--save` writes: the path itself, or a generated file name when the
/// path is an existing directory
pub fn resolve_save_path(target: &Path, format: OutputFormat, resume_file: &str) -> PathBuf {
    if target.is_dir() {
        target.join(suggest_filename(format, resume_file, true))
    } else {
        target.to_path_buf()
    }
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_check{}.{}", base_name, timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::faculty::Faculty;
    use crate::processing::issue::Category;
    use crate::processing::report::ReportBuilder;
    use tempfile::TempDir;

    fn report_with_issues() -> CheckReport {
        let issues = vec![
            Issue::critical(Category::Sections, "Skills section not found", "Add a \"Skills\" heading"),
            Issue::warning(Category::Content, "Limited use of action verbs", "Use more action verbs"),
            Issue::warning(Category::CommonMistakes, "Personal pronouns detected (2 occurrences)", "Drop pronouns"),
        ];
        let result = ReportBuilder::build(issues, 64, Some(Faculty::Business), 1, 310, 2140);
        CheckReport::new(result, "resumes/jane_doe.pdf")
    }

    fn clean_report() -> CheckReport {
        CheckReport::new(ReportBuilder::build(Vec::new(), 100, None, 0, 420, 2900), "jane.txt")
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            summary_line(&report_with_issues().result),
            "Found 3 issue(s): 1 critical, 2 warning(s)"
        );
        assert_eq!(summary_line(&clean_report().result), "No issues found. Resume looks good!");
    }

    #[test]
    fn test_console_groups_by_severity() {
        let output = ConsoleFormatter::new(false, true).format_report(&report_with_issues()).unwrap();

        assert!(output.contains("RESUME ANALYSIS REPORT"));
        assert!(output.contains("• Critical issues: 1"));
        assert!(output.contains("CRITICAL ISSUES"));
        assert!(output.contains("WARNINGS"));
        assert!(!output.contains("SUGGESTIONS"));
        assert!(output.contains("ISSUES BY CATEGORY"));
        assert!(output.contains("COMMON MISTAKES:"));
        assert!(output.contains("OVERALL SCORE: 64/100 [FAIR]"));
        assert!(output.contains("Faculty: business (adjustment +1)"));
        assert!(output.contains("• Word count: 310"));
        assert!(output.contains("• Character count: 2140"));
    }

    #[test]
    fn test_console_success_report() {
        let output = ConsoleFormatter::new(false, false).format_report(&clean_report()).unwrap();
        assert!(output.contains("No major issues found"));
        assert!(output.contains("OVERALL SCORE: 100/100 [EXCELLENT]"));
        assert!(!output.contains("ISSUES BY CATEGORY"));
    }

    #[test]
    fn test_json_uses_wire_shape() {
        let output = JsonFormatter::new(false).format_report(&report_with_issues()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["score"], 64);
        assert_eq!(json["summary"]["total_issues"], 3);
        assert_eq!(json["issues_by_category"]["common_mistakes"][0]["severity"], "warning");
    }

    #[test]
    fn test_markdown_sections() {
        let output = MarkdownFormatter::new(true).format_report(&report_with_issues()).unwrap();

        assert!(output.starts_with("# Resume Check Report"));
        assert!(output.contains("`jane_doe.pdf`"));
        assert!(output.contains("## Sections"));
        assert!(output.contains("## Common Mistakes"));
        assert!(output.contains("| Faculty | business (+1) |"));
        assert!(output.contains("| Character count | 2140 |"));
    }

    #[test]
    fn test_html_escapes_issue_text() {
        let output = HtmlFormatter::new(false).format_report(&report_with_issues()).unwrap();

        assert!(output.contains("<h2>Sections</h2>"));
        assert!(output.contains("issue-critical"));
        assert!(!output.contains("Add a \"Skills\" heading"));
        assert!(!output.contains("<style>"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, true, false);
        let report = clean_report();

        for format in [OutputFormat::Console, OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Html] {
            assert!(!generator.generate_report(&report, format).unwrap().is_empty());
        }
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(OutputFormat::Json, "cv/jane_doe.pdf", false), "jane_doe_check.json");
        assert!(suggest_filename(OutputFormat::Html, "jane.md", true).ends_with(".html"));
    }

    #[test]
    fn test_save_into_directory_uses_suggested_name() {
        let dir = TempDir::new().unwrap();

        let path = resolve_save_path(dir.path(), OutputFormat::Markdown, "cv/jane_doe.pdf");
        assert_eq!(path.parent(), Some(dir.path()));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("jane_doe_check_"));
        assert!(name.ends_with(".md"));

        let explicit = dir.path().join("report.json");
        assert_eq!(resolve_save_path(&explicit, OutputFormat::Json, "jane.txt"), explicit);
    }

    #[test]
    fn test_save_report_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports").join("out.md");

        save_report_to_file("# report", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# report");
    }
}
