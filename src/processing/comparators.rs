//! Experience and education requirement comparators
//!
//! Both comparators score the candidate against a requirement found in the
//! target text. When the target states no requirement the score is neutral.

use crate::processing::lexicon::{BACHELOR_TERMS, DEGREE_TERMS, MASTER_TERMS, PHD_TERMS};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Score when the target text states no requirement.
pub const NEUTRAL_SCORE: u8 = 75;

/// Score when the target requires years but the candidate mentions none.
pub const NO_YEARS_SCORE: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EducationLevel {
    Degree,
    Bachelor,
    Master,
    Phd,
}

impl EducationLevel {
    fn terms(self) -> &'static [&'static str] {
        match self {
            EducationLevel::Phd => PHD_TERMS,
            EducationLevel::Master => MASTER_TERMS,
            EducationLevel::Bachelor => BACHELOR_TERMS,
            EducationLevel::Degree => DEGREE_TERMS,
        }
    }

    /// Whether any term of this tier occurs in already-lowercased text.
    fn mentioned_in(self, lowered: &str) -> bool {
        self.terms().iter().any(|term| contains_term(lowered, term))
    }
}

impl std::fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EducationLevel::Degree => write!(f, "Degree"),
            EducationLevel::Bachelor => write!(f, "Bachelor"),
            EducationLevel::Master => write!(f, "Master"),
            EducationLevel::Phd => write!(f, "PhD"),
        }
    }
}

pub struct ExperienceComparator {
    years_regex: Regex,
}

impl Default for ExperienceComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperienceComparator {
    pub fn new() -> Self {
        let years_regex =
            Regex::new(r"(?i)([0-9]+)[\s-]*(?:years?|yrs?|year)[\s-]*(?:of|experience|exp)")
                .expect("Invalid years regex");

        Self { years_regex }
    }

    /// First year requirement stated in the text.
    pub fn required_years(&self, text: &str) -> Option<u64> {
        self.years_regex
            .captures_iter(text)
            .filter_map(|cap| parse_years(cap.get(1)?.as_str()))
            .next()
    }

    /// Largest year count mentioned anywhere in the text.
    pub fn max_years(&self, text: &str) -> Option<u64> {
        self.years_regex
            .captures_iter(text)
            .filter_map(|cap| parse_years(cap.get(1)?.as_str()))
            .max()
    }

    pub fn compare(&self, candidate: &str, target: &str) -> u8 {
        let Some(required) = self.required_years(target) else {
            return NEUTRAL_SCORE;
        };

        let Some(mentioned) = self.max_years(candidate) else {
            return NO_YEARS_SCORE;
        };

        let required = required as f64;
        let mentioned = mentioned as f64;

        if mentioned >= required {
            100
        } else if mentioned >= required * 0.8 {
            80
        } else if mentioned >= required * 0.6 {
            60
        } else {
            40
        }
    }
}

/// Digit runs too long for u64 saturate rather than being dropped.
fn parse_years(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u64::MAX))
}

#[derive(Debug, Default)]
pub struct EducationComparator;

impl EducationComparator {
    pub fn new() -> Self {
        Self
    }

    /// Highest tier mentioned in the target, checked from PhD downwards.
    pub fn required_level(&self, target: &str) -> Option<EducationLevel> {
        let lowered = target.to_lowercase();
        [
            EducationLevel::Phd,
            EducationLevel::Master,
            EducationLevel::Bachelor,
            EducationLevel::Degree,
        ]
        .into_iter()
        .find(|level| level.mentioned_in(&lowered))
    }

    pub fn compare(&self, candidate: &str, target: &str) -> u8 {
        let Some(required) = self.required_level(target) else {
            return NEUTRAL_SCORE;
        };

        let cv = candidate.to_lowercase();
        let has = |level: EducationLevel| level.mentioned_in(&cv);

        match required {
            EducationLevel::Phd if has(EducationLevel::Phd) => 100,
            EducationLevel::Phd if has(EducationLevel::Master) => 70,
            EducationLevel::Phd => 40,
            EducationLevel::Master if has(EducationLevel::Master) => 100,
            EducationLevel::Master if has(EducationLevel::Bachelor) => 60,
            EducationLevel::Master => 30,
            EducationLevel::Bachelor if has(EducationLevel::Bachelor) || has(EducationLevel::Master) => 100,
            EducationLevel::Bachelor => 50,
            EducationLevel::Degree if has(EducationLevel::Degree) => 100,
            EducationLevel::Degree => 60,
        }
    }
}

/// Term containment that may not start or end inside a longer word.
/// A plural `s` directly after the term is allowed ("masters", "bachelors").
fn contains_term(haystack: &str, term: &str) -> bool {
    haystack.match_indices(term).any(|(start, matched)| {
        let rest = &haystack[start + matched.len()..];
        let rest = rest.strip_prefix('s').unwrap_or(rest);
        let before = haystack[..start].chars().next_back();
        let after = rest.chars().next();
        !before.is_some_and(|c| c.is_ascii_alphanumeric())
            && !after.is_some_and(|c| c.is_ascii_alphanumeric())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_YEARS: &str = "We need 5 years of experience with Rust.";

    #[test]
    fn test_experience_neutral_without_requirement() {
        let comparator = ExperienceComparator::new();
        assert_eq!(comparator.compare("10 years of experience", "Rust engineer"), NEUTRAL_SCORE);
    }

    #[test]
    fn test_experience_tiers() {
        let comparator = ExperienceComparator::new();

        assert_eq!(comparator.compare("6 years of experience", FIVE_YEARS), 100);
        assert_eq!(comparator.compare("4 years experience", FIVE_YEARS), 80);
        assert_eq!(comparator.compare("3 years of experience", FIVE_YEARS), 60);
        assert_eq!(comparator.compare("1 year of experience", FIVE_YEARS), 40);
        assert_eq!(comparator.compare("Lots of experience", FIVE_YEARS), NO_YEARS_SCORE);
    }

    #[test]
    fn test_experience_uses_max_candidate_mention() {
        let comparator = ExperienceComparator::new();
        let cv = "2 years of exp in Go, 7 yrs experience in Rust";
        assert_eq!(comparator.max_years(cv), Some(7));
        assert_eq!(comparator.compare(cv, FIVE_YEARS), 100);
    }

    #[test]
    fn test_education_required_level() {
        let comparator = EducationComparator::new();

        assert_eq!(comparator.required_level("PhD preferred, MSc accepted"), Some(EducationLevel::Phd));
        assert_eq!(comparator.required_level("a bachelor's degree"), Some(EducationLevel::Bachelor));
        assert_eq!(comparator.required_level("relevant diploma"), Some(EducationLevel::Degree));
        assert_eq!(comparator.required_level("team management"), None);
    }

    #[test]
    fn test_education_scores() {
        let comparator = EducationComparator::new();

        assert_eq!(comparator.compare("MBA, 2019", "Master's required"), 100);
        assert_eq!(comparator.compare("B.S. Computer Science", "Master's required"), 60);
        assert_eq!(comparator.compare("Self taught", "Master's required"), 30);
        assert_eq!(comparator.compare("Master of Science", "Bachelor's degree"), 100);
        assert_eq!(comparator.compare("", "Bachelor's degree"), 50);
        assert_eq!(comparator.compare("MSc Physics", "PhD in physics"), 70);
        assert_eq!(comparator.compare("Certificate in AWS", "Diploma or equivalent"), 100);
        assert_eq!(comparator.compare("", "Diploma or equivalent"), 60);
        assert_eq!(comparator.compare("", "Rust engineer"), NEUTRAL_SCORE);
    }

    #[test]
    fn test_contains_term_respects_boundaries() {
        assert!(contains_term("holds an ms in cs", "ms"));
        assert!(!contains_term("systems management", "ms"));
        assert!(!contains_term("systems management", "ma"));
        assert!(contains_term("b.s. in math", "b.s."));
        assert!(contains_term("masters degree", "master"));
        assert!(contains_term("two bachelors", "bachelor"));
        assert!(!contains_term("mastered kubernetes", "master"));
    }

    #[test]
    fn test_education_accepts_plural_degree_names() {
        let comparator = EducationComparator::new();

        assert_eq!(comparator.required_level("Masters degree required"), Some(EducationLevel::Master));
        assert_eq!(comparator.compare("Masters in CS", "Masters degree required"), 100);
        assert_eq!(comparator.compare("Bachelors in CS", "Bachelor's degree required"), 100);
        assert_eq!(comparator.compare("Bachelors in CS", "Masters degree required"), 60);
        assert_eq!(comparator.required_level("Degrees in physics"), Some(EducationLevel::Degree));
    }
}
