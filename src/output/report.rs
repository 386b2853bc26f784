//! Report structure for one processed resume

use crate::processing::pipeline::{MessageLevel, PipelineOutcome};
use crate::processing::recommender::Recommendation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Resume path as given by the caller
    pub source: String,

    pub generated_at: DateTime<Utc>,

    pub processing_time_ms: u64,

    pub level: MessageLevel,

    pub message: String,

    pub outcome: PipelineOutcome,
}

impl RecommendationReport {
    pub fn new(source: impl Into<String>, outcome: PipelineOutcome, elapsed: Duration) -> Self {
        Self {
            source: source.into(),
            generated_at: Utc::now(),
            processing_time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            level: outcome.level(),
            message: outcome.message(),
            outcome,
        }
    }

    pub fn category(&self) -> &'static str {
        self.outcome.category()
    }

    pub fn skills(&self) -> Option<&str> {
        match &self.outcome {
            PipelineOutcome::Recommendations { skills, .. } => Some(skills),
            _ => None,
        }
    }

    pub fn jobs(&self) -> &[Recommendation] {
        match &self.outcome {
            PipelineOutcome::Recommendations { jobs, .. } => jobs,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_carries_outcome_message() {
        let report = RecommendationReport::new("cv.pdf", PipelineOutcome::ExtractFailed, Duration::from_millis(3));
        assert_eq!(report.level, MessageLevel::Warning);
        assert_eq!(report.category(), "extract-failed");
        assert!(report.message.starts_with("Failed to extract text"));
        assert!(report.jobs().is_empty());
        assert_eq!(report.skills(), None);
        assert_eq!(report.processing_time_ms, 3);
    }

    #[test]
    fn test_processing_time_saturates() {
        let report = RecommendationReport::new("cv.pdf", PipelineOutcome::NoFile, Duration::MAX);
        assert_eq!(report.processing_time_ms, u64::MAX);
    }
}
