//! Lexical extraction: keywords, skills and key phrases

use crate::processing::lexicon::{
    FILLER_PHRASES, SKILL_LIST_PATTERN, SKILL_LIST_SEPARATORS, SKILL_PATTERNS, STOP_WORDS,
    TECHNICAL_TERMS,
};
use regex::Regex;
use std::collections::{HashMap, HashSet};

pub const MAX_KEYWORDS: usize = 50;
pub const MAX_SKILLS: usize = 50;
pub const MAX_KEY_PHRASES: usize = 15;

pub struct TextProcessor {
    stop_words: HashSet<&'static str>,
    technical_terms: HashSet<&'static str>,
    keyword_regex: Regex,
    phrase_word_regex: Regex,
    sentence_regex: Regex,
    skill_patterns: Vec<Regex>,
    skill_list_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        let keyword_regex = Regex::new(r"(?-u:\b)[a-z]{4,}(?-u:\b)").expect("Invalid keyword regex");
        let phrase_word_regex = Regex::new(r"(?-u:\b)[a-z]{3,}(?-u:\b)").expect("Invalid phrase word regex");
        let sentence_regex = Regex::new(r"[.!?]\s+").expect("Invalid sentence regex");

        let skill_patterns = SKILL_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).expect("Invalid skill regex"))
            .collect();

        let skill_list_regex = Regex::new(SKILL_LIST_PATTERN).expect("Invalid skill list regex");

        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            technical_terms: TECHNICAL_TERMS.iter().copied().collect(),
            keyword_regex,
            phrase_word_regex,
            sentence_regex,
            skill_patterns,
            skill_list_regex,
        }
    }

    /// Extract keywords ranked by descending frequency.
    ///
    /// A word qualifies when it is at least four letters, is not a stop word,
    /// and either repeats or is a known technical term. Ties keep the order of
    /// first appearance.
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut first_seen: Vec<&str> = Vec::new();
        let mut word_freq: HashMap<&str, usize> = HashMap::new();

        for mat in self.keyword_regex.find_iter(&lowered) {
            let word = mat.as_str();
            if self.stop_words.contains(word) {
                continue;
            }
            let count = word_freq.entry(word).or_insert(0);
            if *count == 0 {
                first_seen.push(word);
            }
            *count += 1;
        }

        let mut keywords: Vec<(&str, usize)> = first_seen
            .into_iter()
            .map(|word| (word, word_freq[word]))
            .filter(|(word, count)| *count >= 2 || self.technical_terms.contains(word))
            .collect();

        // sort_by is stable, so equal counts stay in first-seen order
        keywords.sort_by(|a, b| b.1.cmp(&a.1));

        keywords
            .into_iter()
            .take(MAX_KEYWORDS)
            .map(|(word, _)| word.to_string())
            .collect()
    }

    /// Extract the set of skills mentioned in text, lowercased and deduplicated.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let mut skills = Vec::new();
        let mut seen = HashSet::new();

        for pattern in &self.skill_patterns {
            for mat in pattern.find_iter(text) {
                let skill = mat.as_str().trim().to_lowercase();
                if seen.insert(skill.clone()) {
                    skills.push(skill);
                }
            }
        }

        for cap in self.skill_list_regex.captures_iter(text) {
            let Some(list) = cap.get(1) else { continue };
            for part in list.as_str().split(SKILL_LIST_SEPARATORS) {
                let skill = part.trim().to_lowercase();
                if skill.chars().count() > 2 && seen.insert(skill.clone()) {
                    skills.push(skill);
                }
            }
        }

        skills.truncate(MAX_SKILLS);
        skills
    }

    /// Extract two- and three-word phrases from a job description.
    pub fn extract_key_phrases(&self, text: &str) -> Vec<String> {
        let mut phrases = Vec::new();
        let mut seen = HashSet::new();

        for sentence in self.sentence_regex.split(text) {
            let lowered = sentence.to_lowercase();
            let words: Vec<&str> = self
                .phrase_word_regex
                .find_iter(&lowered)
                .map(|m| m.as_str())
                .collect();

            let bigrams = words.windows(2).map(|w| w.join(" ")).filter(|p| (9..30).contains(&p.len()));
            let trigrams = words.windows(3).map(|w| w.join(" ")).filter(|p| (13..40).contains(&p.len()));

            for phrase in bigrams.chain(trigrams) {
                if seen.insert(phrase.clone()) {
                    phrases.push(phrase);
                }
            }
        }

        phrases
            .into_iter()
            .filter(|phrase| !FILLER_PHRASES.iter().any(|filler| phrase.contains(filler)))
            .take(MAX_KEY_PHRASES)
            .collect()
    }

    /// Count whitespace-separated words.
    pub fn word_count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_frequency_ordering() {
        let processor = TextProcessor::new();
        let text = "Rust rust RUST tooling tooling compilers compilers compilers compilers";

        let keywords = processor.extract_keywords(text);

        assert_eq!(keywords, vec!["compilers", "rust", "tooling"]);
    }

    #[test]
    fn test_keywords_require_repeat_or_technical_term() {
        let processor = TextProcessor::new();
        let text = "Python developer wanted for banana work";

        let keywords = processor.extract_keywords(text);

        assert!(keywords.contains(&"python".to_string()));
        assert!(!keywords.contains(&"banana".to_string()));
        assert!(!keywords.contains(&"developer".to_string()));
    }

    #[test]
    fn test_keywords_skip_stop_words_and_short_words() {
        let processor = TextProcessor::new();
        let text = "should should would would api api code code";

        let keywords = processor.extract_keywords(text);

        assert_eq!(keywords, vec!["code"]);
    }

    #[test]
    fn test_keyword_cap() {
        let processor = TextProcessor::new();
        let text: String = (0..80)
            .map(|i| {
                let word: String = format!("{:04}", i)
                    .chars()
                    .map(|c| (b'a' + c.to_digit(10).unwrap_or(0) as u8) as char)
                    .collect();
                format!("word{word} word{word} ")
            })
            .collect();

        let keywords = processor.extract_keywords(&text);

        assert_eq!(keywords.len(), MAX_KEYWORDS);
    }

    #[test]
    fn test_skill_extraction_dedupes_case() {
        let processor = TextProcessor::new();
        let skills = processor.extract_skills("Python developer. Also python and PYTHON scripting.");

        assert_eq!(skills.iter().filter(|s| s.as_str() == "python").count(), 1);
    }

    #[test]
    fn test_skill_list_harvesting() {
        let processor = TextProcessor::new();
        let text = "Technical Skills: Rust, Terraform; Elixir • Go\nOther line";

        let skills = processor.extract_skills(text);

        assert!(skills.contains(&"rust".to_string()));
        assert!(skills.contains(&"terraform".to_string()));
        assert!(skills.contains(&"elixir".to_string()));
        // two characters or fewer are dropped
        assert!(!skills.contains(&"go".to_string()));
    }

    #[test]
    fn test_key_phrases() {
        let processor = TextProcessor::new();
        let text = "We build distributed systems daily. The team values code review!";

        let phrases = processor.extract_key_phrases(text);

        assert!(phrases.contains(&"distributed systems".to_string()));
        assert!(phrases.contains(&"build distributed systems".to_string()));
        assert!(phrases.contains(&"code review".to_string()));
        assert!(phrases.iter().all(|p| !p.contains("the team")));
        assert!(phrases.len() <= MAX_KEY_PHRASES);
    }

    #[test]
    fn test_accented_letters_split_words() {
        let processor = TextProcessor::new();

        assert_eq!(
            processor.extract_keywords("développement développement"),
            vec!["veloppement"]
        );
        assert!(processor
            .extract_key_phrases("équipe logicielle agile")
            .contains(&"quipe logicielle".to_string()));
    }

    #[test]
    fn test_key_phrase_length_limits() {
        let processor = TextProcessor::new();
        let run = |c: char, n: usize| c.to_string().repeat(n);

        let cases = [
            // two words: 9 to 29 characters
            (vec![run('a', 3), run('b', 4)], false),
            (vec![run('a', 4), run('b', 4)], true),
            (vec![run('a', 14), run('b', 14)], true),
            (vec![run('a', 14), run('b', 15)], false),
            // three words: 13 to 39 characters
            (vec![run('a', 3), run('b', 3), run('c', 4)], false),
            (vec![run('a', 3), run('b', 4), run('c', 4)], true),
            (vec![run('a', 13), run('b', 12), run('c', 12)], true),
            (vec![run('a', 13), run('b', 13), run('c', 12)], false),
        ];

        for (words, kept) in cases {
            let text = words.join(" ");
            let phrases = processor.extract_key_phrases(&text);
            assert_eq!(phrases.contains(&text), kept, "{} ({} chars)", text, text.len());
        }
    }

    #[test]
    fn test_word_count() {
        let processor = TextProcessor::new();
        assert_eq!(processor.word_count("  one two\nthree\tfour "), 4);
        assert_eq!(processor.word_count(""), 0);
    }
}
