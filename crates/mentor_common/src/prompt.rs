//! Prompt assembly for the hint provider.
//!
//! Pure string building: the template is fixed, only the difficulty
//! guidance, the topic clause and the embedded problem text vary.

use crate::analysis::{Analysis, Difficulty};

/// Guidance sentence keyed by detected difficulty
fn difficulty_guidance(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => {
            "Focus on intuitive approaches and fundamental concepts. Guide toward simple, working solutions."
        }
        Difficulty::Medium => {
            "Balance efficiency with clarity. Highlight key algorithmic patterns and data structure choices."
        }
        Difficulty::Hard => {
            "Emphasize crucial insights and advanced techniques. Focus on optimization and edge cases."
        }
        Difficulty::VeryHard => {
            "Provide deep algorithmic insights and complex pattern recognition. Highlight sophisticated approaches."
        }
    }
}

/// Build the instruction prompt for a problem statement and its analysis.
pub fn build_prompt(problem_text: &str, analysis: &Analysis) -> String {
    let topic_clause = if analysis.topics.is_empty() {
        String::new()
    } else {
        format!("Key topics: {}. ", analysis.topics.join(", "))
    };

    format!(
        r#"You are an expert competitive programmer and mentor. Analyze this {difficulty} problem and provide exactly 3 progressive, connected hints.

{guidance}
{topic_clause}

CRITICAL REQUIREMENTS:
- Keep each hint SHORT (1 sentence maximum)
- NEVER give away the solution or detailed steps
- Each hint must BUILD ON the previous one
- Create a CONNECTED story that guides thinking step by step
- Focus on asking the right questions, not giving answers

PROGRESSIVE STRUCTURE:
1. **What to Notice**: Point out a key observation about the problem
2. **What This Means**: Build on hint 1 - what does that observation suggest?
3. **What to Focus On**: Build on hint 2 - what specific aspect should they consider?

EXAMPLES OF GOOD CONNECTED HINTS:
Hint 1: "Notice what happens when you process elements in a specific order"
Hint 2: "This ordering reveals a pattern in how information flows"
Hint 3: "Focus on what information you need to track during this flow"

EXAMPLES OF BAD HINTS (DON'T DO THIS):
- Long explanations or multiple sentences
- Unconnected random suggestions
- Specific implementation details

Problem:
{problem_text}

Generate exactly 3 numbered hints (1 sentence each) that connect and build understanding step by step:"#,
        difficulty = analysis.difficulty,
        guidance = difficulty_guidance(analysis.difficulty),
        topic_clause = topic_clause,
        problem_text = problem_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn test_prompt_embeds_problem_text_verbatim() {
        let text = "Two Sum\n\nGiven an array of integers...";
        let prompt = build_prompt(text, &analyze(text));
        assert!(prompt.contains("Problem:\nTwo Sum\n\nGiven an array of integers..."));
        assert!(prompt.contains("exactly 3 progressive, connected hints"));
    }

    #[test]
    fn test_prompt_names_detected_difficulty() {
        let text = "a very hard problem from a contest";
        let prompt = build_prompt(text, &analyze(text));
        assert!(prompt.contains("Analyze this Very Hard problem"));
        assert!(prompt.contains("Provide deep algorithmic insights"));
    }

    #[test]
    fn test_topic_clause_present_when_topics_matched() {
        let text = "Given a graph and a tree";
        let prompt = build_prompt(text, &analyze(text));
        assert!(prompt.contains("Key topics: Trees, Graphs. "));
    }

    #[test]
    fn test_topic_clause_absent_without_topics() {
        let text = "just words with no signal";
        let prompt = build_prompt(text, &analyze(text));
        assert!(!prompt.contains("Key topics:"));
    }

    #[test]
    fn test_default_difficulty_uses_medium_guidance() {
        let prompt = build_prompt("statement", &Analysis::default());
        assert!(prompt.contains("Analyze this Medium problem"));
        assert!(prompt.contains("Balance efficiency with clarity"));
    }
}
