//! Mentor Common - the hint generation pipeline.
//!
//! Pure core (analyzer, prompt builder, hint normalizer) plus the provider
//! client and configuration. The CLI crate owns all rendering and I/O.

pub mod analysis;
pub mod config;
pub mod hints;
pub mod llm_client;
pub mod pipeline;
pub mod prompt;

pub use analysis::{analyze, Analysis, Difficulty, ProblemAnalyzer};
pub use config::{ConfigError, LlmConfig};
pub use hints::{normalize, HintNormalizer, HintSet, FALLBACK_HINT, HINT_COUNT, MAX_HINT_CHARS};
pub use llm_client::{
    CompletionProvider, FakeCompletionProvider, HttpCompletionProvider, ProviderError,
};
pub use pipeline::{generate_hints, HintReport, PipelineError};
pub use prompt::build_prompt;
