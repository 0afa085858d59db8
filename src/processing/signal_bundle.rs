//! Signals gathered from one candidate/target pair.
//!
//! Produced once by the analyzer and read by the scorer, the feedback
//! generator and the roadmap planner.

use crate::processing::ats_matcher::TermPartition;
use crate::processing::signals::{quantifiable_score, verb_score};
use crate::processing::structure::SectionFlags;

#[derive(Debug, Clone, Default)]
pub struct SignalBundle {
    pub keywords: TermPartition,
    pub skills: TermPartition,
    pub sections: SectionFlags,
    pub action_verbs: Vec<String>,
    pub numeric_tokens: usize,
    pub word_count: usize,
    pub experience_score: u8,
    pub education_score: u8,
    pub key_phrases: Vec<String>,
}

impl SignalBundle {
    pub fn keyword_percentage(&self) -> u8 {
        self.keywords.percentage()
    }

    pub fn skill_percentage(&self) -> u8 {
        self.skills.percentage()
    }

    pub fn section_count(&self) -> usize {
        self.sections.count()
    }

    pub fn verb_score(&self) -> f64 {
        verb_score(self.action_verbs.len())
    }

    pub fn quantifiable_score(&self) -> f64 {
        quantifiable_score(self.numeric_tokens)
    }
}
