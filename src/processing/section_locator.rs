//! Skills section detection over free-form resume text

use log::debug;
use regex::Regex;

/// Headers that open a skills section, highest priority first
pub const SKILLS_HEADERS: [&str; 5] = [
    "skills",
    "technical skills",
    "professional skills",
    "core competencies",
    "expertise",
];

/// Headers that close a skills section
pub const STOP_SECTIONS: [&str; 6] = [
    "experience",
    "projects",
    "certifications",
    "education",
    "work history",
    "achievements",
];

/// Locates the skills section of a resume.
///
/// Matching is done on the lower-cased text and the returned section is
/// lower-cased. Headers are tried in priority order and the first one that
/// captures non-empty content wins; only the first occurrence of each header
/// is considered. The header's own line is skipped, so a header with nothing
/// after it on the following lines never matches.
pub struct SkillsLocator {
    patterns: Vec<(&'static str, Regex)>,
}

impl Default for SkillsLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillsLocator {
    pub fn new() -> Self {
        let stop = STOP_SECTIONS
            .iter()
            .map(|s| format!(r"\b{}\b", regex::escape(s)))
            .collect::<Vec<_>>()
            .join("|");

        let patterns = SKILLS_HEADERS
            .iter()
            .map(|&header| {
                let pattern = format!(
                    r"(?s)\b{}\b.*?\n(.*?)(?:{}|$)",
                    regex::escape(header),
                    stop
                );
                let regex = Regex::new(&pattern).expect("Invalid skills section regex");
                (header, regex)
            })
            .collect();

        Self { patterns }
    }

    pub fn locate(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        let text_lower = text.to_lowercase();

        for (header, regex) in &self.patterns {
            let Some(captures) = regex.captures(&text_lower) else {
                continue;
            };

            let section = captures.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            if !section.is_empty() {
                debug!("Skills section found under '{}' header ({} chars)", header, section.len());
                return Some(section.to_string());
            }
        }

        debug!("No skills section header matched");
        None
    }
}
