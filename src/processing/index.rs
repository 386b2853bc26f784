//! Immutable bag-of-words index over the job catalog

use crate::error::Result;
use crate::processing::catalog::Catalog;
use crate::processing::vectorizer::VocabularyModel;
use log::info;
use ndarray::{Array1, Array2, Axis};
use std::path::Path;
use std::time::Instant;

/// Catalog, vocabulary and feature matrix, built once and only read afterwards.
///
/// Holds no interior mutability, so a single instance can be shared by
/// reference across any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    catalog: Catalog,
    vocabulary: VocabularyModel,
    features: Array2<f32>,
    row_norms: Array1<f32>,
}

impl CorpusIndex {
    pub fn build(catalog: Catalog) -> Self {
        let start_time = Instant::now();

        let vocabulary = VocabularyModel::fit(catalog.skills_column());
        let skills: Vec<&str> = catalog.skills_column().collect();
        let features = vocabulary.transform_all(&skills);
        let row_norms = features.map_axis(Axis(1), |row| row.dot(&row).sqrt());

        info!(
            "Built corpus index: {} jobs, {} vocabulary tokens in {:.2?}",
            catalog.len(),
            vocabulary.len(),
            start_time.elapsed()
        );

        Self {
            catalog,
            vocabulary,
            features,
            row_norms,
        }
    }

    /// Load a catalog CSV and build the index over it
    pub fn from_csv(path: &Path) -> Result<Self> {
        let catalog = Catalog::from_path(path)?;
        Ok(Self::build(catalog))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn vocabulary(&self) -> &VocabularyModel {
        &self.vocabulary
    }

    pub fn features(&self) -> &Array2<f32> {
        &self.features
    }

    pub fn row_norms(&self) -> &Array1<f32> {
        &self.row_norms
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Vocabulary tokens by total count across the catalog, most frequent
    /// first; ties keep vocabulary order
    pub fn top_tokens(&self, limit: usize) -> Vec<(String, usize)> {
        let totals = self.features.sum_axis(Axis(0));

        let mut ranked: Vec<(usize, f32)> = totals.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        ranked
            .into_iter()
            .take(limit)
            .filter_map(|(column, count)| {
                self.vocabulary
                    .token(column)
                    .map(|token| (token.to_string(), count as usize))
            })
            .collect()
    }
}
