//! Output formatters: console, JSON and Markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::RecommendationReport;
use crate::processing::pipeline::MessageLevel;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting recommendation reports
pub trait OutputFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    show_skills: bool,
}

/// JSON formatter for scripting and API integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, show_skills: bool) -> Self {
        Self {
            use_colors,
            show_skills,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_level_badge(&self, level: MessageLevel) -> String {
        let (badge, color) = match level {
            MessageLevel::Success => ("OK", Color::Green),
            MessageLevel::Info => ("INFO", Color::Cyan),
            MessageLevel::Warning => ("WARNING", Color::Yellow),
            MessageLevel::Error => ("ERROR", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("CAREER RECOMMENDATIONS", 1));
        output.push_str(&format!(
            "Resume: {} | Generated: {} | Processing time: {}ms\n",
            report.source,
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.processing_time_ms
        ));

        output.push_str(&format!(
            "\n{} {}\n",
            self.format_level_badge(report.level),
            report.message
        ));

        if let Some(skills) = report.skills() {
            if self.show_skills {
                output.push_str(&self.format_header("Extracted Skills", 2));
                output.push_str(skills);
                output.push('\n');
            }
        }

        let jobs = report.jobs();
        if !jobs.is_empty() {
            output.push_str(&self.format_header("Recommended Jobs", 2));
            for (i, job) in jobs.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. {} at {}\n",
                    i + 1,
                    self.colorize(&job.job_title, Color::Cyan),
                    job.company_name
                ));
            }
        }

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
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Career Recommendations\n\n");

        if self.include_metadata {
            let file_name = Path::new(&report.source)
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| report.source.clone());
            output.push_str(&format!(
                "**Resume:** `{}` | **Generated:** {} | **Processing Time:** {}ms\n\n",
                file_name,
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.processing_time_ms
            ));
        }

        output.push_str(&format!("> **{}:** {}\n\n", report.level, report.message));

        if let Some(skills) = report.skills() {
            output.push_str("## Extracted Skills\n\n");
            output.push_str("```\n");
            output.push_str(skills);
            output.push_str("\n```\n\n");
        }

        let jobs = report.jobs();
        if !jobs.is_empty() {
            output.push_str("## Recommended Jobs\n\n");
            output.push_str("| # | Job Title | Company Name |\n");
            output.push_str("|---|-----------|--------------|\n");
            for (i, job) in jobs.iter().enumerate() {
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    i + 1,
                    job.job_title.replace('|', "\\|"),
                    job.company_name.replace('|', "\\|")
                ));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, true, true)
    }

    pub fn with_options(use_colors: bool, show_skills: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, show_skills),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &RecommendationReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
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

/// Report file name for a resume. The resume's extension is kept in the name
/// so `cv.pdf` and `cv.docx` never map to the same report.
pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let resume_path = Path::new(resume_name);
    let stem = resume_path.file_stem().unwrap_or_default().to_string_lossy();
    let base_name = match resume_path.extension() {
        Some(ext) => format!("{}_{}", stem, ext.to_string_lossy().to_lowercase()),
        None => stem.to_string(),
    };

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_careers{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_careers{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_careers{}.md", base_name, timestamp_suffix),
    }
}
