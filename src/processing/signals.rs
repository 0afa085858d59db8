//! Action verb and quantified-achievement signals

use crate::processing::lexicon::ACTION_VERBS;
use aho_corasick::AhoCorasick;
use regex::Regex;
use std::collections::HashSet;

/// Verb count that earns the full verb score.
pub const TARGET_VERB_COUNT: usize = 10;

/// Numeric-token count that earns the full quantifiable score.
pub const FULL_QUANTIFIABLE_COUNT: usize = 3;

pub struct SignalScanner {
    verb_matcher: AhoCorasick,
    number_regex: Regex,
}

impl Default for SignalScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalScanner {
    pub fn new() -> Self {
        // Standard match kind so overlapping verbs ("led" inside "enabled") are all reported
        let verb_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(ACTION_VERBS)
            .expect("Invalid action verb patterns");

        let number_regex = Regex::new(r"[0-9]+").expect("Invalid number regex");

        Self {
            verb_matcher,
            number_regex,
        }
    }

    /// Action verbs occurring anywhere in the text, substrings included.
    /// Returned in vocabulary order.
    pub fn find_action_verbs(&self, text: &str) -> Vec<String> {
        let found: HashSet<usize> = self
            .verb_matcher
            .find_overlapping_iter(text)
            .map(|mat| mat.pattern().as_usize())
            .collect();

        ACTION_VERBS
            .iter()
            .enumerate()
            .filter(|(id, _)| found.contains(id))
            .map(|(_, verb)| verb.to_string())
            .collect()
    }

    /// Number of maximal digit runs.
    pub fn count_numbers(&self, text: &str) -> usize {
        self.number_regex.find_iter(text).count()
    }
}

pub fn verb_score(found: usize) -> f64 {
    (found as f64 / TARGET_VERB_COUNT as f64 * 100.0).min(100.0)
}

pub fn quantifiable_score(numbers: usize) -> f64 {
    if numbers >= FULL_QUANTIFIABLE_COUNT {
        100.0
    } else {
        numbers as f64 * 33.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbs_match_as_substrings() {
        let scanner = SignalScanner::new();
        let verbs = scanner.find_action_verbs("Mismanaged nothing; Developed tools and enabled teams");

        assert!(verbs.contains(&"managed".to_string()));
        assert!(verbs.contains(&"developed".to_string()));
        assert!(verbs.contains(&"led".to_string()));
        assert_eq!(verbs.len(), 3);
    }

    #[test]
    fn test_verb_score_caps_at_100() {
        assert_eq!(verb_score(0), 0.0);
        assert_eq!(verb_score(4), 40.0);
        assert_eq!(verb_score(25), 100.0);
    }

    #[test]
    fn test_number_runs() {
        let scanner = SignalScanner::new();
        assert_eq!(scanner.count_numbers("Grew revenue 25% to $1,200 in 2023"), 4);
        assert_eq!(scanner.count_numbers("no digits"), 0);
    }

    #[test]
    fn test_quantifiable_score() {
        assert_eq!(quantifiable_score(0), 0.0);
        assert_eq!(quantifiable_score(2), 66.0);
        assert_eq!(quantifiable_score(3), 100.0);
    }
}
