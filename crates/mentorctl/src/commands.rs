//! Command implementations for mentorctl.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use mentor_common::{generate_hints, HttpCompletionProvider, LlmConfig, PipelineError};

use crate::display;

/// Read the problem statement from a file, or stdin when no file is given.
fn read_problem_text(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read problem from {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read problem from stdin")?;
            Ok(buffer)
        }
    }
}

pub async fn hints(file: Option<PathBuf>, reveal: usize, json: bool) -> Result<()> {
    let problem_text = read_problem_text(file)?;

    // Configuration is checked before any request goes out.
    let config = LlmConfig::from_env().map_err(PipelineError::Configuration)?;
    let provider = HttpCompletionProvider::new(config).map_err(PipelineError::Provider)?;

    let spinner = display::spinner("Analyzing problem and generating hints...");
    let result = generate_hints(&problem_text, &provider).await;
    spinner.finish_and_clear();

    let report = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    display::print_analysis(&report.analysis);
    display::print_hints(&report.hints, reveal);
    Ok(())
}

pub fn analyze(file: Option<PathBuf>, json: bool) -> Result<()> {
    let problem_text = read_problem_text(file)?;
    if problem_text.trim().is_empty() {
        return Err(PipelineError::MissingInput.into());
    }

    let analysis = mentor_common::analyze(problem_text.trim());

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    display::print_analysis(&analysis);
    Ok(())
}

pub fn config() -> Result<()> {
    match LlmConfig::from_env() {
        Ok(config) => display::print_config(&config),
        Err(e) => {
            println!("Configuration error: {e}");
            println!("Set TOGETHER_API_KEY to a valid Together AI credential.");
        }
    }
    Ok(())
}
