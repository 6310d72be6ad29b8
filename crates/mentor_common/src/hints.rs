//! Hint normalization - turns a raw model reply into exactly three hints.
//!
//! The provider reply has no reliable shape: numbered lists in several
//! styles, prose paragraphs, markdown emphasis, or nothing usable at all.
//! Normalization cascades through split strategies until three candidates
//! exist, then bounds each hint to a complete thought of at most 180
//! characters. Total over all inputs: the empty string still yields three
//! (padded) hints.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number of hints in a normalized set
pub const HINT_COUNT: usize = 3;

/// Upper bound on a single hint, in characters
pub const MAX_HINT_CHARS: usize = 180;

/// A lone candidate longer than this is split into sentence groups
/// instead of being padded
const LONG_CANDIDATE_CHARS: usize = 200;

/// Hint used to pad a reply that yielded fewer than three candidates
pub const FALLBACK_HINT: &str = "Think about this problem step by step.";

/// Exactly three normalized hints, in discovery order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintSet {
    hints: [String; HINT_COUNT],
}

impl HintSet {
    pub fn as_slice(&self) -> &[String] {
        &self.hints
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.hints.iter().map(String::as_str)
    }
}

/// Parser for raw provider replies, holding the compiled split patterns
pub struct HintNormalizer {
    /// Splits that consume the numbering ("\n1. ", "\n1: ", "\n1) ")
    delimiter_splits: Vec<Regex>,
    /// Splits that cut before a marker, keeping it for the cleanup pass
    boundary_splits: Vec<Regex>,
    /// A trimmed line opening a new hint in the accumulation fallback
    numbered_line: Regex,
    /// Leading "1. " / "1) " / "1: " / "hint 1:" prefix on a hint body
    prefix: Regex,
    /// Markdown bold markers
    bold: Regex,
}

impl HintNormalizer {
    pub fn new() -> Self {
        Self {
            delimiter_splits: vec![
                Regex::new(r"\n\d+\.\s+").expect("Invalid split pattern"),
                Regex::new(r"\n\d+:\s+").expect("Invalid split pattern"),
                Regex::new(r"\n\d+\)\s+").expect("Invalid split pattern"),
            ],
            boundary_splits: vec![
                Regex::new(r"\n\d+[.):\s]").expect("Invalid split pattern"),
                Regex::new(r"(?i)\nhint\s*\d+").expect("Invalid split pattern"),
            ],
            numbered_line: Regex::new(r"^\d+[.):\s]").expect("Invalid line pattern"),
            prefix: Regex::new(r"(?i)^(?:\d+[.):]\s*)?(?:hint\s*\d+:\s*)?")
                .expect("Invalid prefix pattern"),
            bold: Regex::new(r"\*\*(.*?)\*\*").expect("Invalid bold pattern"),
        }
    }

    /// Normalize a raw reply into exactly three bounded hints.
    pub fn normalize(&self, reply: &str) -> HintSet {
        let candidates = match self.split_structured(reply) {
            Some(candidates) => candidates,
            None => self.accumulate_numbered_lines(reply),
        };

        let reconciled = self.reconcile_count(candidates);
        let cleaned: Vec<String> = reconciled.iter().map(|hint| self.clean_hint(hint)).collect();

        let hints: [String; HINT_COUNT] =
            cleaned.try_into().expect("reconciled to exactly three hints");
        HintSet { hints }
    }

    /// Stage 1: try each split pattern in priority order; the first one
    /// yielding three or more non-blank fragments wins.
    fn split_structured(&self, reply: &str) -> Option<Vec<String>> {
        for re in &self.delimiter_splits {
            let parts = non_blank(re.split(reply).map(str::to_string));
            if parts.len() >= HINT_COUNT {
                return Some(parts);
            }
        }
        for re in &self.boundary_splits {
            let parts = non_blank(split_before(reply, re).into_iter());
            if parts.len() >= HINT_COUNT {
                return Some(parts);
            }
        }
        None
    }

    /// Stage 2: scan line by line. A numbered line opens a new accumulator;
    /// anything before the first numbered line flushes as its own candidate.
    fn accumulate_numbered_lines(&self, reply: &str) -> Vec<String> {
        let mut hints = Vec::new();
        let mut current = String::new();

        for line in reply.lines() {
            if self.numbered_line.is_match(line.trim()) {
                if !current.trim().is_empty() {
                    hints.push(current.trim().to_string());
                }
                current = line.to_string();
            } else {
                current.push('\n');
                current.push_str(line);
            }
        }
        if !current.trim().is_empty() {
            hints.push(current.trim().to_string());
        }

        hints
    }

    /// Stage 3: force the candidate list to exactly three entries.
    fn reconcile_count(&self, mut candidates: Vec<String>) -> Vec<String> {
        if candidates.len() > HINT_COUNT {
            candidates.truncate(HINT_COUNT);
            return candidates;
        }

        if candidates.len() < HINT_COUNT {
            if candidates.len() == 1 && candidates[0].chars().count() > LONG_CANDIDATE_CHARS {
                return split_sentence_groups(&candidates[0]);
            }
            while candidates.len() < HINT_COUNT {
                candidates.push(FALLBACK_HINT.to_string());
            }
        }

        candidates
    }

    /// Stage 4: strip numbering and markdown, then bound the length.
    fn clean_hint(&self, hint: &str) -> String {
        let trimmed = hint.trim();
        let stripped = self.prefix.replace(trimmed, "");
        let unbolded = self.bold.replace_all(&stripped, "$1");
        let hint = unbolded.trim();

        if hint.chars().count() <= MAX_HINT_CHARS {
            return hint.to_string();
        }
        truncate_hint(hint)
    }
}

impl Default for HintNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a raw reply with a fresh pattern table.
pub fn normalize(reply: &str) -> HintSet {
    HintNormalizer::new().normalize(reply)
}

fn non_blank<I: Iterator<Item = String>>(parts: I) -> Vec<String> {
    parts.filter(|part| !part.trim().is_empty()).collect()
}

/// Split at each match start, dropping the match's leading newline but
/// keeping the rest of the marker for the cleanup pass.
fn split_before(text: &str, re: &Regex) -> Vec<String> {
    let mut parts = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        parts.push(text[last..m.start()].to_string());
        last = m.start() + 1;
    }
    parts.push(text[last..].to_string());
    parts
}

/// Split one long candidate into three ceil(n/3)-sized groups of sentences.
fn split_sentence_groups(text: &str) -> Vec<String> {
    let sentences: Vec<&str> = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .collect();

    let len = sentences.len();
    let group = (len + HINT_COUNT - 1) / HINT_COUNT;
    let first = group.min(len);
    let second = (group * 2).min(len);

    vec![
        format!("{}.", sentences[..first].join(".")),
        format!("{}.", sentences[first..second].join(".")),
        format!("{}.", sentences[second..].join(".")),
    ]
}

/// Bound an over-long hint: longest whole-sentence prefix first, longest
/// whole-word prefix second, character cut as the last resort. The result
/// is never empty and never exceeds the limit.
fn truncate_hint(hint: &str) -> String {
    let sentences: Vec<&str> = hint.split(['.', '!', '?']).collect();
    let mut result = String::new();
    for (idx, sentence) in sentences.iter().enumerate() {
        let sep = if idx + 1 < sentences.len() { "." } else { "" };
        let candidate = format!("{result}{sentence}{sep}");
        if candidate.chars().count() <= MAX_HINT_CHARS {
            result = candidate;
        } else {
            break;
        }
    }
    if !result.is_empty() && result.ends_with('.') {
        return result;
    }

    let mut result = String::new();
    for word in hint.split(' ') {
        let candidate = if result.is_empty() {
            word.to_string()
        } else {
            format!("{result} {word}")
        };
        if candidate.chars().count() <= MAX_HINT_CHARS {
            result = candidate;
        } else {
            break;
        }
    }

    let mut result = result.trim().to_string();
    if result.is_empty() {
        // No word boundary inside the limit: cut at the character bound.
        let cut: String = hint.chars().take(MAX_HINT_CHARS - 1).collect();
        return format!("{}.", cut.trim_end());
    }

    if !result.ends_with(['.', '!', '?']) {
        // Make room for the closing period so the bound stays strict.
        while result.chars().count() + 1 > MAX_HINT_CHARS {
            match result.rfind(' ') {
                Some(idx) => result.truncate(idx),
                None => break,
            }
            result = result.trim_end().to_string();
        }
        result.push('.');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(set: &HintSet) {
        assert_eq!(set.as_slice().len(), HINT_COUNT);
        for hint in set.iter() {
            assert!(!hint.is_empty());
            assert!(hint.chars().count() <= MAX_HINT_CHARS, "too long: {hint}");
        }
    }

    #[test]
    fn test_numbered_list_parses_in_order() {
        let reply = "1. Notice the order.\n2. This reveals a pattern.\n3. Track the flow.";
        let set = normalize(reply);
        assert_eq!(
            set.as_slice(),
            ["Notice the order.", "This reveals a pattern.", "Track the flow."]
        );
    }

    #[test]
    fn test_empty_reply_pads_with_fallback() {
        let set = normalize("");
        assert_eq!(set.as_slice(), [FALLBACK_HINT, FALLBACK_HINT, FALLBACK_HINT]);
    }

    #[test]
    fn test_colon_and_paren_numbering() {
        let set = normalize("1: First thing\n2: Second thing\n3: Third thing");
        assert_eq!(set.as_slice()[0], "First thing");

        let set = normalize("1) Alpha\n2) Beta\n3) Gamma");
        assert_eq!(set.as_slice(), ["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_hint_word_numbering() {
        let reply = "Hint 1: Look at the ends.\nHint 2: Move inward.\nHint 3: Stop when they meet.";
        let set = normalize(reply);
        assert_eq!(set.as_slice()[0], "Look at the ends.");
        assert_eq!(set.as_slice()[2], "Stop when they meet.");
    }

    #[test]
    fn test_earlier_pattern_wins() {
        // Both "\n<n>. " and the generic boundary split would work; the
        // dotted delimiter has priority and consumes the numbering.
        let reply = "1. One.\n2. Two.\n3. Three.";
        assert_eq!(normalize(reply).as_slice()[1], "Two.");
    }

    #[test]
    fn test_excess_candidates_are_discarded() {
        let reply = "1. A\n2. B\n3. C\n4. D\n5. E";
        let set = normalize(reply);
        assert_eq!(set.as_slice(), ["A", "B", "C"]);
    }

    #[test]
    fn test_two_candidates_get_one_pad() {
        let set = normalize("1. Only this.\n2. And this.");
        assert_eq!(set.as_slice()[0], "Only this.");
        assert_eq!(set.as_slice()[1], "And this.");
        assert_eq!(set.as_slice()[2], FALLBACK_HINT);
    }

    #[test]
    fn test_multiline_hints_accumulate() {
        let reply = "1. First line\nstill the first hint\n2. Second";
        let set = normalize(reply);
        assert_eq!(set.as_slice()[0], "First line\nstill the first hint");
        assert_eq!(set.as_slice()[1], "Second");
        assert_eq!(set.as_slice()[2], FALLBACK_HINT);
    }

    #[test]
    fn test_long_paragraph_splits_into_sentence_groups() {
        let sentence = "This paragraph keeps going with more detail about the approach";
        let reply = vec![sentence; 10].join(". ") + ".";
        assert!(reply.len() > 600);

        let set = normalize(&reply);
        assert_well_formed(&set);
        for hint in set.iter() {
            assert!(hint.contains("paragraph keeps going"));
            assert!(hint.ends_with('.'));
        }
    }

    #[test]
    fn test_bold_markers_are_unwrapped() {
        let reply = "1. **Notice** the order.\n2. This is **key**.\n3. Track it.";
        let set = normalize(reply);
        assert_eq!(set.as_slice()[0], "Notice the order.");
        assert_eq!(set.as_slice()[1], "This is key.");
    }

    #[test]
    fn test_overlong_hint_keeps_whole_sentences() {
        let long = format!(
            "1. {}\n2. b\n3. c",
            "Short lead. Second sentence here. ".repeat(10)
        );
        let set = normalize(&long);
        let first = &set.as_slice()[0];
        assert!(first.chars().count() <= MAX_HINT_CHARS);
        assert!(first.ends_with('.'));
        assert!(first.starts_with("Short lead."));
    }

    #[test]
    fn test_overlong_single_sentence_cuts_on_word() {
        let long = format!("1. {}\n2. b\n3. c", "word ".repeat(60).trim_end());
        let set = normalize(&long);
        let first = &set.as_slice()[0];
        assert!(first.chars().count() <= MAX_HINT_CHARS);
        assert!(first.ends_with('.'));
        assert!(!first.contains(".."));
    }

    #[test]
    fn test_cleanup_is_idempotent() {
        let normalizer = HintNormalizer::new();
        for raw in [
            "2. **Focus** on the invariant that survives each step.",
            "hint 3: keep a running total",
            "A plain hint without any markers.",
        ] {
            let once = normalizer.clean_hint(raw);
            let twice = normalizer.clean_hint(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_always_three_bounded_hints() {
        let paragraph = "No numbering at all just prose that wanders on and on. ".repeat(12);
        for reply in [
            "",
            "word",
            "***",
            "1. a\n2. b\n3. c\n4. d",
            "1) x",
            "Hint 1: go",
            paragraph.as_str(),
        ] {
            assert_well_formed(&normalize(reply));
        }
    }
}
