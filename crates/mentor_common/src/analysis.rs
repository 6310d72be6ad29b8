//! Problem analysis - difficulty and topic classification.
//!
//! Pure pattern matching over the scraped problem statement. Absence of a
//! match falls back to defaults; analysis never fails.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Problem difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
            Difficulty::VeryHard => write!(f, "Very Hard"),
        }
    }
}

/// Result of analyzing a problem statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Detected difficulty (platform labels win over keyword guesses)
    pub difficulty: Difficulty,
    /// Matched topic labels, in table order
    pub topics: Vec<String>,
    /// Whether the statement mentions examples or sample I/O
    pub has_examples: bool,
    /// Text of the constraints section, empty when absent
    pub constraints: String,
}

impl Default for Analysis {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            topics: Vec::new(),
            has_examples: false,
            constraints: String::new(),
        }
    }
}

/// A difficulty keyword pattern
struct DifficultyPattern {
    pattern: Regex,
    level: Difficulty,
}

impl DifficultyPattern {
    fn new(pattern: &str, level: Difficulty) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("Invalid difficulty pattern"),
            level,
        }
    }
}

/// A topic keyword pattern mapped to its display label
struct TopicPattern {
    pattern: Regex,
    label: &'static str,
}

impl TopicPattern {
    fn new(pattern: &str, label: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("Invalid topic pattern"),
            label,
        }
    }
}

/// Classifier for problem statements, holding the compiled pattern tables
pub struct ProblemAnalyzer {
    difficulty_patterns: Vec<DifficultyPattern>,
    literal_label: Regex,
    topic_patterns: Vec<TopicPattern>,
    examples: Regex,
    constraints_label: Regex,
}

impl ProblemAnalyzer {
    pub fn new() -> Self {
        // First match wins. The very-hard pattern sits before the generic
        // hard pattern so `\bhard\b` does not shadow "very hard" text.
        let difficulty_patterns = vec![
            DifficultyPattern::new(r"(?i)\b(easy|simple|basic|trivial)\b", Difficulty::Easy),
            DifficultyPattern::new(
                r"(?i)\b(medium|moderate|intermediate)\b",
                Difficulty::Medium,
            ),
            DifficultyPattern::new(
                r"(?i)\b(very hard|extremely hard|contest)\b",
                Difficulty::VeryHard,
            ),
            DifficultyPattern::new(
                r"(?i)\b(hard|difficult|challenging|complex)\b",
                Difficulty::Hard,
            ),
        ];

        let topic_patterns = vec![
            TopicPattern::new(r"(?i)\b(array|list|sort|search)\b", "Arrays"),
            TopicPattern::new(r"(?i)\b(tree|binary tree|bst)\b", "Trees"),
            TopicPattern::new(r"(?i)\b(graph|node|edge|dfs|bfs)\b", "Graphs"),
            TopicPattern::new(
                r"(?i)\b(dynamic programming|dp|memoization)\b",
                "Dynamic Programming",
            ),
            TopicPattern::new(r"(?i)\b(string|substring|palindrome)\b", "Strings"),
            TopicPattern::new(r"(?i)\b(hash|map|dictionary)\b", "Hash Tables"),
            TopicPattern::new(r"(?i)\b(linked list|node|pointer)\b", "Linked Lists"),
            TopicPattern::new(r"(?i)\b(stack|queue|deque)\b", "Stacks & Queues"),
            TopicPattern::new(r"(?i)\b(recursive|recursion|backtrack)\b", "Recursion"),
            TopicPattern::new(
                r"(?i)\b(greedy|optimal|minimum|maximum)\b",
                "Greedy Algorithms",
            ),
        ];

        Self {
            difficulty_patterns,
            // Case-sensitive: platform badges capitalize their labels
            literal_label: Regex::new(r"\b(Easy|Medium|Hard)\b").expect("Invalid label pattern"),
            topic_patterns,
            examples: Regex::new(r"(?i)example|input|output").expect("Invalid examples pattern"),
            constraints_label: Regex::new(r"(?i)constraints?:?").expect("Invalid constraints pattern"),
        }
    }

    /// Classify a problem statement. Total: unmatched text yields defaults.
    pub fn analyze(&self, text: &str) -> Analysis {
        let mut analysis = Analysis::default();

        for entry in &self.difficulty_patterns {
            if entry.pattern.is_match(text) {
                analysis.difficulty = entry.level;
                break;
            }
        }

        // A platform-supplied literal label is more authoritative than the
        // keyword guess above.
        if let Some(caps) = self.literal_label.captures(text) {
            analysis.difficulty = match &caps[1] {
                "Easy" => Difficulty::Easy,
                "Medium" => Difficulty::Medium,
                _ => Difficulty::Hard,
            };
        }

        for entry in &self.topic_patterns {
            if entry.pattern.is_match(text) {
                analysis.topics.push(entry.label.to_string());
            }
        }

        analysis.has_examples = self.examples.is_match(text);
        analysis.constraints = self.extract_constraints(text);

        analysis
    }

    /// Capture the text after the first "constraint(s):" label, up to a
    /// blank line or a newline that opens a capitalized line.
    fn extract_constraints(&self, text: &str) -> String {
        let label = match self.constraints_label.find(text) {
            Some(m) => m,
            None => return String::new(),
        };

        let rest = text[label.end()..].trim_start();
        let mut end = rest.len();
        for (idx, ch) in rest.char_indices() {
            if ch == '\n' {
                let next = rest[idx + 1..].chars().next();
                if next == Some('\n') || next.is_some_and(|c| c.is_ascii_uppercase()) {
                    end = idx;
                    break;
                }
            }
        }

        rest[..end].trim().to_string()
    }
}

impl Default for ProblemAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze a problem statement with a fresh pattern table.
pub fn analyze(text: &str) -> Analysis {
    ProblemAnalyzer::new().analyze(text)
}
