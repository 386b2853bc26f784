//! Bag-of-words vectorization with a vocabulary fixed at fit time

use ndarray::{Array1, Array2};
use regex::Regex;
use std::collections::{BTreeSet, HashMap};

/// Token -> column mapping learned once from a corpus.
///
/// Tokens are lower-cased runs of two or more word characters. Columns follow
/// the lexicographic order of the tokens, and tokens outside the vocabulary are
/// dropped when transforming.
#[derive(Debug, Clone)]
pub struct VocabularyModel {
    vocabulary: HashMap<String, usize>,
    tokens: Vec<String>,
    token_regex: Regex,
}

impl VocabularyModel {
    pub fn fit<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let token_regex = Self::token_regex();

        let mut unique = BTreeSet::new();
        for doc in documents {
            for token in Self::tokens_with(&token_regex, doc.as_ref()) {
                unique.insert(token);
            }
        }

        let tokens: Vec<String> = unique.into_iter().collect();
        let vocabulary = tokens
            .iter()
            .enumerate()
            .map(|(idx, token)| (token.clone(), idx))
            .collect();

        Self {
            vocabulary,
            tokens,
            token_regex,
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        Self::tokens_with(&self.token_regex, text)
    }

    /// Count vector of `text` under the fitted vocabulary
    pub fn transform(&self, text: &str) -> Array1<f32> {
        let mut vector = Array1::<f32>::zeros(self.len());
        for token in self.tokenize(text) {
            if let Some(&column) = self.vocabulary.get(&token) {
                vector[column] += 1.0;
            }
        }
        vector
    }

    /// One count row per document
    pub fn transform_all<S: AsRef<str>>(&self, documents: &[S]) -> Array2<f32> {
        let mut matrix = Array2::<f32>::zeros((documents.len(), self.len()));
        for (row, doc) in documents.iter().enumerate() {
            for token in self.tokenize(doc.as_ref()) {
                if let Some(&column) = self.vocabulary.get(&token) {
                    matrix[[row, column]] += 1.0;
                }
            }
        }
        matrix
    }

    pub fn column(&self, token: &str) -> Option<usize> {
        self.vocabulary.get(token).copied()
    }

    pub fn token(&self, column: usize) -> Option<&str> {
        self.tokens.get(column).map(String::as_str)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn token_regex() -> Regex {
        Regex::new(r"\b\w\w+\b").expect("Invalid token regex")
    }

    fn tokens_with(regex: &Regex, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        regex
            .find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
