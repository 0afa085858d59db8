//! Weighted composite score

use crate::config::ScoringConfig;
use crate::processing::signal_bundle::SignalBundle;
use serde::{Deserialize, Serialize};

/// Section count is scored out of six although five sections are detected.
pub const SECTION_DIVISOR: f64 = 6.0;

/// Each component on a 0-100 scale, before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub keywords: f64,
    pub skills: f64,
    pub sections: f64,
    pub action_verbs: f64,
    pub quantifiable: f64,
    pub experience: f64,
    pub education: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBundle {
    pub score: u8,
    pub components: ComponentScores,
}

pub struct Scorer {
    weights: ScoringConfig,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl Scorer {
    pub fn new(weights: ScoringConfig) -> Self {
        Self { weights }
    }

    pub fn components(&self, signals: &SignalBundle) -> ComponentScores {
        ComponentScores {
            keywords: signals.keyword_percentage() as f64,
            skills: signals.skill_percentage() as f64,
            sections: signals.section_count() as f64 / SECTION_DIVISOR * 100.0,
            action_verbs: signals.verb_score(),
            quantifiable: signals.quantifiable_score(),
            experience: signals.experience_score as f64,
            education: signals.education_score as f64,
        }
    }

    pub fn score(&self, signals: &SignalBundle) -> ScoreBundle {
        let components = self.components(signals);
        let w = &self.weights;

        let raw = components.keywords * w.keyword_weight
            + components.skills * w.skill_weight
            + components.sections * w.section_weight
            + components.action_verbs * w.action_verb_weight
            + components.quantifiable * w.quantifiable_weight
            + components.experience * w.experience_weight
            + components.education * w.education_weight;

        ScoreBundle {
            score: raw.clamp(0.0, 100.0).round() as u8,
            components,
        }
    }
}

/// Presentation label for a 0-100 score.
pub fn verdict(score: u8) -> &'static str {
    match score {
        90..=100 => "Excellent",
        80..=89 => "Very Good",
        70..=79 => "Good",
        60..=69 => "Fair",
        50..=59 => "Below Average",
        _ => "Poor",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::ats_matcher::TermPartition;
    use crate::processing::structure::SectionFlags;

    fn strings(prefix: &str, n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{prefix}{i}")).collect()
    }

    #[test]
    fn test_empty_signals_score_only_comparators() {
        let signals = SignalBundle {
            experience_score: 50,
            education_score: 50,
            ..SignalBundle::default()
        };

        let bundle = Scorer::default().score(&signals);

        assert_eq!(bundle.score, 5);
    }

    #[test]
    fn test_strong_signals_weighted_sum() {
        let signals = SignalBundle {
            keywords: TermPartition { matched: strings("k", 10), missing: vec![] },
            skills: TermPartition { matched: strings("s", 4), missing: vec![] },
            sections: SectionFlags {
                contact: false,
                summary: true,
                experience: true,
                education: true,
                skills: true,
            },
            action_verbs: strings("v", 10),
            numeric_tokens: 8,
            word_count: 500,
            experience_score: 100,
            education_score: 100,
            key_phrases: vec![],
        };

        let bundle = Scorer::default().score(&signals);

        // 30 + 25 + 10 + 10 + 10 + 5 + 5
        assert_eq!(bundle.score, 95);
        assert!((bundle.components.sections - 66.667).abs() < 0.01);
    }

    #[test]
    fn test_verdict_bands() {
        assert_eq!(verdict(95), "Excellent");
        assert_eq!(verdict(80), "Very Good");
        assert_eq!(verdict(42), "Poor");
    }
}
