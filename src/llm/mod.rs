//! Name idea generation through an external text-generation CLI

pub mod generator;
pub mod prompt;

pub use generator::CliNameGenerator;
pub use prompt::{build_prompt, clean_candidate, parse_candidates, PRODUCT_CONTEXT};

use crate::error::Result;
use async_trait::async_trait;

/// Source of candidate names
#[async_trait]
pub trait NameGenerator: Send + Sync {
    /// Produce new candidate names given every name tested so far.
    ///
    /// An empty list means the batch failed in a recoverable way and may be
    /// retried. An error is fatal for the run.
    async fn generate(&self, history: &[String]) -> Result<Vec<String>>;

    /// Name of the generator, used in log output
    fn name(&self) -> &str;
}
