//! End-to-end hint generation.
//!
//! One pipeline instance per request: analyze, build the prompt, await the
//! provider once, normalize. A provider failure aborts the run; a partial
//! hint set is never produced.

use serde::Serialize;

use crate::analysis::{analyze, Analysis};
use crate::config::ConfigError;
use crate::hints::{normalize, HintSet};
use crate::llm_client::{CompletionProvider, ProviderError};
use crate::prompt::build_prompt;

/// Pipeline failures. The analyzer, prompt builder and normalizer are
/// infallible; only missing input, configuration and the provider call can
/// fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("no problem text provided")]
    MissingInput,

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("hint provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Terminal artifact of a pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct HintReport {
    pub analysis: Analysis,
    pub hints: HintSet,
}

/// Run the full pipeline for one problem statement.
pub async fn generate_hints(
    problem_text: &str,
    provider: &dyn CompletionProvider,
) -> Result<HintReport, PipelineError> {
    let text = problem_text.trim();
    if text.is_empty() {
        return Err(PipelineError::MissingInput);
    }

    let analysis = analyze(text);
    tracing::debug!(
        difficulty = %analysis.difficulty,
        topics = analysis.topics.len(),
        "analyzed problem statement"
    );

    let prompt = build_prompt(text, &analysis);
    let reply = provider.complete(&prompt).await?;
    tracing::debug!(reply_chars = reply.len(), "received provider reply");

    Ok(HintReport {
        analysis,
        hints: normalize(&reply),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Difficulty;
    use crate::hints::FALLBACK_HINT;
    use crate::llm_client::FakeCompletionProvider;

    const PROBLEM: &str = "Two Sum (Easy)\n\nGiven an array of integers, return indices of \
                           the two numbers that add up to a target.\n\nExample 1: ...";

    #[tokio::test]
    async fn test_well_formed_reply_round_trip() {
        let provider = FakeCompletionProvider::always(
            "1. Notice the order.\n2. This reveals a pattern.\n3. Track the flow.",
        );

        let report = generate_hints(PROBLEM, &provider).await.unwrap();
        assert_eq!(report.analysis.difficulty, Difficulty::Easy);
        assert!(report.analysis.topics.contains(&"Arrays".to_string()));
        assert!(report.analysis.has_examples);
        assert_eq!(
            report.hints.as_slice(),
            ["Notice the order.", "This reveals a pattern.", "Track the flow."]
        );
    }

    #[tokio::test]
    async fn test_blank_input_short_circuits() {
        let provider = FakeCompletionProvider::always("never used");
        let err = generate_hints("   \n  ", &provider).await.unwrap_err();
        assert_eq!(err, PipelineError::MissingInput);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_aborts_run() {
        let provider = FakeCompletionProvider::always_error(ProviderError::Status(503));
        let err = generate_hints(PROBLEM, &provider).await.unwrap_err();
        assert_eq!(err, PipelineError::Provider(ProviderError::Status(503)));
    }

    #[tokio::test]
    async fn test_unstructured_reply_still_yields_three_hints() {
        let provider = FakeCompletionProvider::always("think harder");
        let report = generate_hints(PROBLEM, &provider).await.unwrap();
        assert_eq!(report.hints.as_slice()[0], "think harder");
        assert_eq!(report.hints.as_slice()[1], FALLBACK_HINT);
        assert_eq!(report.hints.as_slice()[2], FALLBACK_HINT);
    }

    #[test]
    fn test_report_serializes_for_json_output() {
        let report = HintReport {
            analysis: crate::analysis::analyze("Easy array problem"),
            hints: normalize("1. a\n2. b\n3. c"),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"difficulty\":\"Easy\""));
        assert!(json.contains("\"hints\""));
    }
}
