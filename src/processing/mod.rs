//! Skills location, bag-of-words index and career recommendation

pub mod document;
pub mod section_locator;
pub mod vectorizer;
pub mod catalog;
pub mod index;
pub mod recommender;
pub mod pipeline;
