//! Terminal rendering for the analysis badge and hint sets.

use std::time::Duration;

use indicatif::ProgressBar;
use mentor_common::{Analysis, Difficulty, HintSet, LlmConfig, HINT_COUNT};
use owo_colors::OwoColorize;

/// Topics shown on the badge before the ellipsis
const BADGE_TOPIC_LIMIT: usize = 3;

/// Spinner shown while the provider call is in flight
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

pub fn print_analysis(analysis: &Analysis) {
    let label = format!("{} Problem", analysis.difficulty);
    match analysis.difficulty {
        Difficulty::Easy => println!("{}", label.green().bold()),
        Difficulty::Medium => println!("{}", label.yellow().bold()),
        Difficulty::Hard => println!("{}", label.red().bold()),
        Difficulty::VeryHard => println!("{}", label.purple().bold()),
    }

    if !analysis.topics.is_empty() {
        println!("Topics: {}", format_topics(&analysis.topics));
    }
    if analysis.has_examples {
        println!("{}", "Examples provided in the statement".dimmed());
    }
    if !analysis.constraints.is_empty() {
        println!("{} {}", "Constraints:".dimmed(), analysis.constraints);
    }
    println!();
}

pub fn print_hints(hints: &HintSet, reveal: usize) {
    let reveal = clamp_reveal(reveal);
    for (idx, hint) in hints.iter().enumerate() {
        let number = idx + 1;
        println!("{}", format!("Hint {number}").bold());
        if idx < reveal {
            println!("  {hint}");
        } else {
            println!(
                "  {}",
                format!("(hidden - rerun with --reveal {number} to show)").dimmed()
            );
        }
        println!();
    }
}

pub fn print_config(config: &LlmConfig) {
    let kw = 12;
    print_kv("endpoint", &config.endpoint, kw);
    print_kv("model", &config.model, kw);
    print_kv("timeout", &format!("{}s", config.timeout_secs), kw);
    print_kv("api_key", &mask_key(&config.api_key), kw);
}

fn print_kv(key: &str, value: &str, width: usize) {
    println!("{:width$} {}", key, value, width = width);
}

/// Cap the badge at three topics, with an ellipsis for the rest.
fn format_topics(topics: &[String]) -> String {
    let mut shown = topics[..topics.len().min(BADGE_TOPIC_LIMIT)].join(", ");
    if topics.len() > BADGE_TOPIC_LIMIT {
        shown.push_str("...");
    }
    shown
}

fn clamp_reveal(reveal: usize) -> usize {
    reveal.clamp(1, HINT_COUNT)
}

/// Show enough of the credential to recognize it, never the whole value.
fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    format!("{visible}... (configured)")
}
