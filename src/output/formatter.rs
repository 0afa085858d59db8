//! Output formatters for analysis reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use crate::processing::ats_matcher::MatchResult;
use crate::processing::roadmap::PriorityAction;
use crate::processing::structure::SectionFlags;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
}

/// Console formatter with colors and optional detail
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter backed by an askama template
pub struct HtmlFormatter {
    include_styles: bool,
}

pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ATS Compatibility Report</title>
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
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .score-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .score-good { background: #28a745; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .section h2 {
            color: #007acc;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .present { color: #28a745; }
        .absent { color: #dc3545; }
        .action {
            background: #f8f9fa;
            padding: 15px;
            margin: 10px 0;
            border-radius: 6px;
            border-left: 4px solid #17a2b8;
        }
        .items { font-family: monospace; color: #495057; }
        .footer {
            text-align: center;
            margin-top: 40px;
            color: #6c757d;
            font-size: 0.9em;
        }
    </style>
    {% endif %}
</head>
<body>
<div class="container">
    <div class="header">
        <h1>ATS Compatibility Report</h1>
        <p>Generated {{ generated_at }} in {{ processing_time }}ms</p>
        <p><strong>ATS Score: {{ score }}%</strong>
            <span class="score-badge score-{{ score_class }}">{{ verdict }}</span></p>
        <p>Projected score after improvements: {{ estimated_score }}%</p>
    </div>

    <div class="section">
        <h2>Match Summary</h2>
        <ul>
            <li>Keywords: {{ keyword_summary }}</li>
            <li>Skills: {{ skill_summary }}</li>
        </ul>
        <h3>Sections</h3>
        <ul>
        {% for section in sections %}
            {% if section.present %}
            <li class="present">&#10003; {{ section.name }}</li>
            {% else %}
            <li class="absent">&#10007; {{ section.name }}</li>
            {% endif %}
        {% endfor %}
        </ul>
    </div>

    <div class="section">
        <h2>Feedback</h2>
        {% if !strengths.is_empty() %}
        <h3>Strengths</h3>
        <ul>{% for item in strengths %}<li>{{ item }}</li>{% endfor %}</ul>
        {% endif %}
        {% if !issues.is_empty() %}
        <h3>Issues</h3>
        <ul>{% for item in issues %}<li>{{ item }}</li>{% endfor %}</ul>
        {% endif %}
        {% if !suggestions.is_empty() %}
        <h3>Suggestions</h3>
        <ul>{% for item in suggestions %}<li>{{ item }}</li>{% endfor %}</ul>
        {% endif %}
    </div>

    {% if !actions.is_empty() %}
    <div class="section">
        <h2>Improvement Roadmap</h2>
        {% for action in actions %}
        <div class="action">
            <h3>{{ action.priority }}. {{ action.action }}</h3>
            <p><em>{{ action.category }}</em> &middot; {{ action.impact }}</p>
            {% if !action.items.is_empty() %}<p class="items">{{ action.items }}</p>{% endif %}
        </div>
        {% endfor %}
    </div>
    {% endif %}

    {% if !phrases.is_empty() %}
    <div class="section">
        <h2>Phrases to Mirror</h2>
        <ul>{% for phrase in phrases %}<li>{{ phrase }}</li>{% endfor %}</ul>
    </div>
    {% endif %}

    <div class="footer">Generated by ATS Analyzer</div>
</div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    processing_time: u64,
    score: u8,
    score_class: String,
    verdict: String,
    estimated_score: u8,
    keyword_summary: String,
    skill_summary: String,
    strengths: Vec<String>,
    issues: Vec<String>,
    suggestions: Vec<String>,
    sections: Vec<HtmlSection>,
    actions: Vec<HtmlAction>,
    phrases: Vec<String>,
}

#[derive(Debug, Clone)]
struct HtmlSection {
    name: String,
    present: bool,
}

#[derive(Debug, Clone)]
struct HtmlAction {
    priority: u8,
    category: String,
    action: String,
    impact: String,
    items: String,
}

fn section_rows(sections: &SectionFlags) -> Vec<(&'static str, bool)> {
    vec![
        ("Contact", sections.contact),
        ("Summary", sections.summary),
        ("Experience", sections.experience),
        ("Education", sections.education),
        ("Skills", sections.skills),
    ]
}

fn match_summary(label: &str, result: &MatchResult) -> String {
    format!(
        "{} of {} {} matched ({}%)",
        result.matched, result.total, label, result.percentage
    )
}

fn action_items(action: &PriorityAction) -> String {
    action.items.items().join(", ")
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

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8, verdict: &str) -> String {
        let color = match score {
            90..=100 => Color::Green,
            80..=89 => Color::BrightGreen,
            70..=79 => Color::Yellow,
            60..=69 => Color::BrightYellow,
            50..=59 => Color::Red,
            _ => Color::BrightRed,
        };

        let badge = verdict.to_uppercase();
        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_list(&self, output: &mut String, title: &str, items: &[String], color: Color) {
        if items.is_empty() {
            return;
        }
        output.push_str(&self.format_header(title, 3));
        for item in items {
            output.push_str(&format!("  • {}\n", self.colorize(item, color)));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str(&self.format_header("ATS COMPATIBILITY ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!(
            "ATS Score: {}% {}\n",
            result.score,
            self.format_score_badge(result.score, report.verdict())
        ));
        output.push_str(&format!(
            "Projected score after improvements: {}%\n",
            result.improvement_roadmap.estimated_score
        ));
        output.push_str(&format!("Keywords: {}\n", match_summary("keywords", &result.keyword_match)));
        output.push_str(&format!("Skills: {}\n", match_summary("skills", &result.skill_match)));

        output.push_str(&self.format_header("Sections", 3));
        for (name, present) in section_rows(&result.sections) {
            let mark = if present {
                self.colorize("✓", Color::Green)
            } else {
                self.colorize("✗", Color::Red)
            };
            output.push_str(&format!("  {} {}\n", mark, name));
        }

        self.format_list(&mut output, "Strengths", &result.feedback.strengths, Color::Green);
        self.format_list(&mut output, "Issues", &result.feedback.issues, Color::Red);
        self.format_list(&mut output, "Suggestions", &result.feedback.suggestions, Color::Yellow);

        if !result.improvement_roadmap.priority_actions.is_empty() {
            output.push_str(&self.format_header("Improvement Roadmap", 2));
            for action in &result.improvement_roadmap.priority_actions {
                output.push_str(&format!(
                    "{}. {} {}\n",
                    action.priority,
                    self.colorize(&action.action, Color::White),
                    self.colorize(&format!("({})", action.category), Color::BrightBlack)
                ));
                output.push_str(&format!("   {}\n", action.impact));
                if self.detailed {
                    output.push_str(&format!("   → {}\n", action_items(action)));
                }
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Detailed Analysis", 2));

            let components = &result.components;
            output.push_str(&format!(
                "Components: keywords {:.0} | skills {:.0} | sections {:.0} | verbs {:.0} | metrics {:.0} | experience {:.0} | education {:.0}\n",
                components.keywords,
                components.skills,
                components.sections,
                components.action_verbs,
                components.quantifiable,
                components.experience,
                components.education
            ));
            output.push_str(&format!(
                "Words: {} | Action verbs: {} | Numeric metrics: {}\n",
                result.stats.word_count, result.stats.action_verbs, result.stats.quantifiable_metrics
            ));

            if !result.keyword_match.matched_items.is_empty() {
                output.push_str(&format!(
                    "Matched keywords: {}\n",
                    result.keyword_match.matched_items.join(", ")
                ));
            }
            if !result.keyword_match.missing_items.is_empty() {
                output.push_str(&format!(
                    "Missing keywords: {}\n",
                    result.keyword_match.missing_items.join(", ")
                ));
            }
            if !result.skill_match.missing_items.is_empty() {
                output.push_str(&format!(
                    "Missing skills: {}\n",
                    result.skill_match.missing_items.join(", ")
                ));
            }
            if !result.improvement_roadmap.phrases_to_add.is_empty() {
                output.push_str(&format!(
                    "Phrases from the job description: {}\n",
                    result.improvement_roadmap.phrases_to_add.join(", ")
                ));
            }
        }

        output.push_str(&format!(
            "\nGenerated by ATS Analyzer v{}\n",
            report.metadata.analyzer_version
        ));

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            90..=100 => "🟢",
            70..=89 => "🟡",
            50..=69 => "🟠",
            _ => "🔴",
        }
    }

    fn push_list(output: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        output.push_str(&format!("### {}\n\n", title));
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str("# ATS Compatibility Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}`\n\n",
                report.metadata.resume_source, report.metadata.job_source
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**ATS Score:** {}% {} {}\n\n",
            result.score,
            Self::markdown_score_badge(result.score),
            report.verdict()
        ));
        output.push_str(&format!(
            "**Projected Score:** {}%\n\n",
            result.improvement_roadmap.estimated_score
        ));

        output.push_str("| Signal | Result |\n");
        output.push_str("|--------|--------|\n");
        output.push_str(&format!("| Keywords | {} |\n", match_summary("keywords", &result.keyword_match)));
        output.push_str(&format!("| Skills | {} |\n", match_summary("skills", &result.skill_match)));
        output.push_str(&format!("| Action verbs | {} |\n", result.stats.action_verbs));
        output.push_str(&format!("| Numeric metrics | {} |\n", result.stats.quantifiable_metrics));
        output.push_str(&format!("| Experience match | {} |\n", result.stats.experience_match));
        output.push_str(&format!("| Education match | {} |\n", result.stats.education_match));
        output.push_str(&format!("| Word count | {} |\n\n", result.stats.word_count));

        output.push_str("### Sections\n\n");
        for (name, present) in section_rows(&result.sections) {
            output.push_str(&format!("- [{}] {}\n", if present { "x" } else { " " }, name));
        }
        output.push('\n');

        Self::push_list(&mut output, "✅ Strengths", &result.feedback.strengths);
        Self::push_list(&mut output, "⚠️ Issues", &result.feedback.issues);
        Self::push_list(&mut output, "💡 Suggestions", &result.feedback.suggestions);

        if !result.improvement_roadmap.priority_actions.is_empty() {
            output.push_str("## Improvement Roadmap\n\n");
            for action in &result.improvement_roadmap.priority_actions {
                output.push_str(&format!(
                    "#### {}. {}\n\n**Category:** {} | **Impact:** {}\n\n",
                    action.priority, action.action, action.category, action.impact
                ));
                if !action.items.items().is_empty() {
                    output.push_str(&format!("`{}`\n\n", action.items.items().join("`, `")));
                }
            }
        }

        if !result.improvement_roadmap.phrases_to_add.is_empty() {
            output.push_str("### Phrases to Mirror\n\n");
            for phrase in &result.improvement_roadmap.phrases_to_add {
                output.push_str(&format!("- {}\n", phrase));
            }
            output.push('\n');
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by ATS Analyzer v{}*\n",
                report.metadata.analyzer_version
            ));
        }

        Ok(output)
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlTemplate {
        let result = &report.result;

        let score_class = match result.score {
            80..=100 => "good",
            60..=79 => "fair",
            _ => "poor",
        };

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            processing_time: report.metadata.processing_time_ms,
            score: result.score,
            score_class: score_class.to_string(),
            verdict: report.verdict().to_string(),
            estimated_score: result.improvement_roadmap.estimated_score,
            keyword_summary: match_summary("keywords", &result.keyword_match),
            skill_summary: match_summary("skills", &result.skill_match),
            strengths: result.feedback.strengths.clone(),
            issues: result.feedback.issues.clone(),
            suggestions: result.feedback.suggestions.clone(),
            sections: section_rows(&result.sections)
                .into_iter()
                .map(|(name, present)| HtmlSection {
                    name: name.to_string(),
                    present,
                })
                .collect(),
            actions: result
                .improvement_roadmap
                .priority_actions
                .iter()
                .map(|action| HtmlAction {
                    priority: action.priority,
                    category: action.category.to_string(),
                    action: action.action.clone(),
                    impact: action.impact.clone(),
                    items: action_items(action),
                })
                .collect(),
            phrases: result.improvement_roadmap.phrases_to_add.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        Ok(self.create_template_data(report).render()?)
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
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
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
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

    format!("{}_ats{}.{}", base_name, timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyze;

    const RESUME: &str = "Jane Doe\njane@example.com | (555) 123-4567\n\nSummary\nBackend engineer with 6 years of experience.\n\nExperience\nDeveloped Python services and reduced latency by 40%.\n\nEducation\nBachelor of Science, 2015\n\nSkills: Python, Docker, SQL";
    const JOB: &str = "Backend engineer. Python and Kubernetes required. 5 years of experience. Bachelor's degree.";

    fn sample_report() -> AnalysisReport {
        AnalysisReport::new(analyze(RESUME, JOB), "resume.txt", "job.txt", 3)
    }

    #[test]
    fn test_console_without_colors() {
        let report = sample_report();
        let output = ConsoleFormatter::new(false, true).format_report(&report).unwrap();

        assert!(output.contains("ATS COMPATIBILITY ANALYSIS"));
        assert!(output.contains(&format!("ATS Score: {}%", report.result.score)));
        assert!(output.contains(&format!("[{}]", report.verdict().to_uppercase())));
        assert!(output.contains("Detailed Analysis"));
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_json_roundtrip() {
        let report = sample_report();
        let json = JsonFormatter::new(false).format_report(&report).unwrap();

        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.result.score, report.result.score);
        assert_eq!(parsed.result.keyword_match, report.result.keyword_match);
        assert_eq!(parsed.result.improvement_roadmap.priority_actions, report.result.improvement_roadmap.priority_actions);
        assert_eq!(parsed.metadata.resume_source, "resume.txt");
    }

    #[test]
    fn test_markdown_sections() {
        let report = sample_report();
        let output = MarkdownFormatter::new(true).format_report(&report).unwrap();

        assert!(output.starts_with("# ATS Compatibility Report"));
        assert!(output.contains("- [x] Contact"));
        assert!(output.contains("**Resume:** `resume.txt`"));
    }

    #[test]
    fn test_html_render() {
        let report = sample_report();
        let output = HtmlFormatter::new(true).format_report(&report).unwrap();

        assert!(output.contains("<html"));
        assert!(output.contains(&format!("{}%", report.result.score)));
        assert!(output.contains("<style>"));
    }

    #[test]
    fn test_generator_dispatch() {
        let report = sample_report();
        let generator = ReportGenerator::with_options(false, false, true, false, false);

        let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));

        let markdown = generator.generate_report(&report, &OutputFormat::Markdown).unwrap();
        assert!(!markdown.contains("**Generated:**"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(&OutputFormat::Markdown, "cvs/jane_doe.txt", false),
            "jane_doe_ats.md"
        );
        assert!(suggest_filename(&OutputFormat::Json, "jane.txt", true).ends_with(".json"));
    }
}
