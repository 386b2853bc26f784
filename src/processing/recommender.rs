//! Nearest-neighbor career recommendation over the corpus index

use crate::processing::index::CorpusIndex;
use log::debug;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// One recommended posting. Only title and company are serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "Job Title")]
    pub job_title: String,
    #[serde(rename = "Company Name")]
    pub company_name: String,
    #[serde(skip)]
    pub distance: f32,
}

pub struct CareerRecommender<'a> {
    index: &'a CorpusIndex,
}

impl<'a> CareerRecommender<'a> {
    pub fn new(index: &'a CorpusIndex) -> Self {
        Self { index }
    }

    /// The `top_k` postings closest to `skills` by cosine distance.
    ///
    /// Ties keep catalog order. Empty when `skills` is blank, `top_k` is zero
    /// or the catalog is empty.
    pub fn recommend(&self, skills: &str, top_k: usize) -> Vec<Recommendation> {
        if skills.trim().is_empty() || top_k == 0 || self.index.is_empty() {
            return Vec::new();
        }

        let query = self.index.vocabulary().transform(skills);
        let distances = self.distances(&query);

        let mut ranked: Vec<(usize, f32)> = distances.into_iter().enumerate().collect();
        // stable, so equal distances stay in catalog order
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

        let n = top_k.min(self.index.len());
        debug!(
            "Ranking {} catalog rows, returning {} (query has {} known tokens)",
            ranked.len(),
            n,
            query.iter().filter(|&&v| v > 0.0).count()
        );

        ranked
            .into_iter()
            .take(n)
            .filter_map(|(row, distance)| {
                self.index.catalog().get(row).map(|job| Recommendation {
                    job_title: job.job_title.clone(),
                    company_name: job.company_name.clone(),
                    distance,
                })
            })
            .collect()
    }

    /// Cosine distance from `query` to every catalog row
    pub fn distances(&self, query: &Array1<f32>) -> Vec<f32> {
        let query_norm = query.dot(query).sqrt();
        let dots = self.index.features().dot(query);

        dots.iter()
            .zip(self.index.row_norms().iter())
            .map(|(&dot, &row_norm)| cosine_distance(dot, query_norm, row_norm))
            .collect()
    }
}

/// `1 - cos`, defined as 1.0 when either vector is all zeros
pub fn cosine_distance(dot: f32, norm_a: f32, norm_b: f32) -> f32 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }
    let similarity = (dot / (norm_a * norm_b)).clamp(-1.0, 1.0);
    1.0 - similarity
}
