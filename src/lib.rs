//! Career matcher library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{CareerMatchError, Result};
pub use processing::index::CorpusIndex;
pub use processing::pipeline::{CareerPipeline, PipelineOutcome};
