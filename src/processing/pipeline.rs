//! Per-document pipeline: extraction, skills location, recommendation

use crate::error::CareerMatchError;
use crate::input::manager::InputManager;
use crate::processing::document::Document;
use crate::processing::index::CorpusIndex;
use crate::processing::recommender::{CareerRecommender, Recommendation};
use crate::processing::section_locator::SkillsLocator;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageLevel::Success => write!(f, "success"),
            MessageLevel::Info => write!(f, "info"),
            MessageLevel::Warning => write!(f, "warning"),
            MessageLevel::Error => write!(f, "error"),
        }
    }
}

/// Result of processing one document, one variant per user-facing category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum PipelineOutcome {
    #[serde(rename = "ok")]
    Recommendations {
        skills: String,
        jobs: Vec<Recommendation>,
    },
    NoFile,
    BadType,
    ExtractFailed,
    NoSkillsSection,
    NoRecommendations,
    InternalError { detail: String },
}

impl PipelineOutcome {
    pub fn category(&self) -> &'static str {
        match self {
            PipelineOutcome::Recommendations { .. } => "ok",
            PipelineOutcome::NoFile => "no-file",
            PipelineOutcome::BadType => "bad-type",
            PipelineOutcome::ExtractFailed => "extract-failed",
            PipelineOutcome::NoSkillsSection => "no-skills-section",
            PipelineOutcome::NoRecommendations => "no-recommendations",
            PipelineOutcome::InternalError { .. } => "internal-error",
        }
    }

    pub fn level(&self) -> MessageLevel {
        match self {
            PipelineOutcome::Recommendations { .. } => MessageLevel::Success,
            PipelineOutcome::NoFile
            | PipelineOutcome::BadType
            | PipelineOutcome::InternalError { .. } => MessageLevel::Error,
            PipelineOutcome::ExtractFailed | PipelineOutcome::NoSkillsSection => MessageLevel::Warning,
            PipelineOutcome::NoRecommendations => MessageLevel::Info,
        }
    }

    pub fn message(&self) -> String {
        match self {
            PipelineOutcome::Recommendations { jobs, .. } => {
                format!("Found {} matching job recommendations.", jobs.len())
            }
            PipelineOutcome::NoFile => "No file uploaded!".to_string(),
            PipelineOutcome::BadType => {
                "Invalid file type! Only PDF and DOCX are allowed.".to_string()
            }
            PipelineOutcome::ExtractFailed => {
                "Failed to extract text from the resume. Try another format!".to_string()
            }
            PipelineOutcome::NoSkillsSection => {
                "No skills section found. Please check your resume format!".to_string()
            }
            PipelineOutcome::NoRecommendations => {
                "No job recommendations found. Try updating your resume with more skills!".to_string()
            }
            PipelineOutcome::InternalError { detail } => {
                format!("Error processing resume: {}", detail)
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PipelineOutcome::Recommendations { .. })
    }

    fn from_error(err: CareerMatchError) -> Self {
        match err {
            CareerMatchError::NotFound(_) => PipelineOutcome::NoFile,
            CareerMatchError::UnsupportedFormat(_) => PipelineOutcome::BadType,
            other => {
                error!("Resume processing failed: {}", other);
                PipelineOutcome::InternalError {
                    detail: other.to_string(),
                }
            }
        }
    }
}

/// Runs documents against a prebuilt, shared index
pub struct CareerPipeline<'a> {
    index: &'a CorpusIndex,
    locator: SkillsLocator,
    input: InputManager,
    top_k: usize,
}

impl<'a> CareerPipeline<'a> {
    pub fn new(index: &'a CorpusIndex, top_k: usize) -> Self {
        Self {
            index,
            locator: SkillsLocator::new(),
            input: InputManager::new(),
            top_k,
        }
    }

    pub async fn process_path(&self, path: &Path) -> PipelineOutcome {
        info!("Processing resume: {}", path.display());
        match self.input.load_document(path).await {
            Ok(document) => self.process_document(&document),
            Err(e) => {
                warn!("Could not load {}: {}", path.display(), e);
                PipelineOutcome::from_error(e)
            }
        }
    }

    pub fn process_document(&self, document: &Document) -> PipelineOutcome {
        let text = match self.input.extract_document(document) {
            Ok(Some(text)) => text,
            Ok(None) => {
                warn!("No text extracted from {}", document.source);
                return PipelineOutcome::ExtractFailed;
            }
            Err(e) => return PipelineOutcome::from_error(e),
        };

        self.process_text(&text)
    }

    pub fn process_text(&self, text: &str) -> PipelineOutcome {
        let Some(skills) = self.locator.locate(text) else {
            warn!("No skills section found");
            return PipelineOutcome::NoSkillsSection;
        };

        let jobs = CareerRecommender::new(self.index).recommend(&skills, self.top_k);
        if jobs.is_empty() {
            info!("No recommendations for extracted skills");
            return PipelineOutcome::NoRecommendations;
        }

        info!("Recommended {} jobs", jobs.len());
        PipelineOutcome::Recommendations { skills, jobs }
    }
}
