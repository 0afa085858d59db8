//! Analysis engine: runs every stage over one resume/job pair
//!
//! The engine holds only compiled patterns and weights, so a single instance
//! can serve any number of analyses. Every call is independent and
//! deterministic.

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::processing::ats_matcher::{
    ATSMatcher, MatchResult, KEYWORD_MATCHED_CAP, KEYWORD_MISSING_CAP, SKILL_MATCHED_CAP,
    SKILL_MISSING_CAP,
};
use crate::processing::comparators::{EducationComparator, ExperienceComparator};
use crate::processing::feedback::{Feedback, FeedbackGenerator};
use crate::processing::roadmap::{ImprovementRoadmap, RoadmapPlanner};
use crate::processing::scoring::{ComponentScores, Scorer};
use crate::processing::signal_bundle::SignalBundle;
use crate::processing::signals::SignalScanner;
use crate::processing::structure::{SectionChecker, SectionFlags};
use crate::processing::text_processor::TextProcessor;
use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref DEFAULT_ENGINE: AnalysisEngine = AnalysisEngine::new();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub word_count: usize,
    pub action_verbs: usize,
    pub quantifiable_metrics: usize,
    pub experience_match: u8,
    pub education_match: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u8,
    pub components: ComponentScores,
    pub keyword_match: MatchResult,
    pub skill_match: MatchResult,
    pub sections: SectionFlags,
    pub feedback: Feedback,
    pub improvement_roadmap: ImprovementRoadmap,
    pub stats: AnalysisStats,
}

pub struct AnalysisEngine {
    text_processor: TextProcessor,
    section_checker: SectionChecker,
    signal_scanner: SignalScanner,
    experience: ExperienceComparator,
    education: EducationComparator,
    ats_matcher: ATSMatcher,
    scorer: Scorer,
    feedback: FeedbackGenerator,
    planner: RoadmapPlanner,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self::build(ScoringConfig::default())
    }

    /// Engine with custom scoring weights. Weights must sum to 1.0.
    pub fn with_weights(weights: ScoringConfig) -> Result<Self> {
        weights.validate()?;
        Ok(Self::build(weights))
    }

    fn build(weights: ScoringConfig) -> Self {
        Self {
            text_processor: TextProcessor::new(),
            section_checker: SectionChecker::new(),
            signal_scanner: SignalScanner::new(),
            experience: ExperienceComparator::new(),
            education: EducationComparator::new(),
            ats_matcher: ATSMatcher::new(),
            scorer: Scorer::new(weights),
            feedback: FeedbackGenerator::new(),
            planner: RoadmapPlanner::new(weights),
        }
    }

    /// Gather every signal for one resume/job pair.
    pub fn collect_signals(&self, resume: &str, job: &str) -> SignalBundle {
        let job_keywords = self.text_processor.extract_keywords(job);
        let keywords = self.ats_matcher.match_keywords(&job_keywords, resume);
        debug!(
            "Keywords: {} of {} job keywords found in resume",
            keywords.matched.len(),
            keywords.total()
        );

        let job_skills = self.text_processor.extract_skills(job);
        let resume_skills = self.text_processor.extract_skills(resume);
        let skills = self.ats_matcher.match_skills(&job_skills, &resume_skills);
        debug!(
            "Skills: {} of {} job skills found among {} resume skills",
            skills.matched.len(),
            skills.total(),
            resume_skills.len()
        );

        let sections = self.section_checker.check_sections(resume);
        let action_verbs = self.signal_scanner.find_action_verbs(resume);
        let numeric_tokens = self.signal_scanner.count_numbers(resume);
        debug!(
            "Structure: {} sections, {} action verbs, {} numeric tokens",
            sections.count(),
            action_verbs.len(),
            numeric_tokens
        );

        let experience_score = self.experience.compare(resume, job);
        let education_score = self.education.compare(resume, job);
        debug!(
            "Requirements: experience {} / education {}",
            experience_score, education_score
        );

        SignalBundle {
            keywords,
            skills,
            sections,
            action_verbs,
            numeric_tokens,
            word_count: self.text_processor.word_count(resume),
            experience_score,
            education_score,
            key_phrases: self.text_processor.extract_key_phrases(job),
        }
    }

    /// Score a resume against a job description. Never fails; empty input
    /// simply produces low scores and neutral comparator values.
    pub fn analyze(&self, resume: &str, job: &str) -> AnalysisResult {
        let signals = self.collect_signals(resume, job);
        let score = self.scorer.score(&signals);
        let feedback = self.feedback.generate(&signals);
        let improvement_roadmap = self.planner.plan(&signals, score.score);

        debug!(
            "Score {} (projected {} after {} actions)",
            score.score,
            improvement_roadmap.estimated_score,
            improvement_roadmap.priority_actions.len()
        );

        AnalysisResult {
            score: score.score,
            components: score.components,
            keyword_match: signals.keywords.to_match_result(KEYWORD_MATCHED_CAP, KEYWORD_MISSING_CAP),
            skill_match: signals.skills.to_match_result(SKILL_MATCHED_CAP, SKILL_MISSING_CAP),
            sections: signals.sections,
            feedback,
            improvement_roadmap,
            stats: AnalysisStats {
                word_count: signals.word_count,
                action_verbs: signals.action_verbs.len(),
                quantifiable_metrics: signals.numeric_tokens,
                experience_match: signals.experience_score,
                education_match: signals.education_score,
            },
        }
    }
}

/// Analyze with the default weights, reusing one shared engine.
pub fn analyze(resume: &str, job: &str) -> AnalysisResult {
    DEFAULT_ENGINE.analyze(resume, job)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB: &str = "Looking for a Python developer with 5 years experience and a bachelor's degree.";

    #[test]
    fn test_empty_resume_scores_low() {
        let result = analyze("", JOB);

        assert!(result.keyword_match.total > 0);
        assert_eq!(result.keyword_match.matched, 0);
        assert_eq!(result.stats.experience_match, 50);
        assert_eq!(result.stats.education_match, 50);
        assert_eq!(result.score, 5);
    }

    #[test]
    fn test_identical_texts_match_fully() {
        let text = "Senior Python engineer. Skills: Rust, Docker, Kubernetes. \
                    Built data platforms on AWS with Agile teams. Python and SQL daily.";

        let result = analyze(text, text);

        assert_eq!(result.keyword_match.percentage, 100);
        assert_eq!(result.skill_match.percentage, 100);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let resume = "Jane Doe jane@example.com (555) 123-4567. Developed Python services for 6 years of experience.";
        assert_eq!(analyze(resume, JOB), analyze(resume, JOB));
    }

    #[test]
    fn test_both_empty_inputs_are_tolerated() {
        let result = analyze("", "");

        assert_eq!(result.keyword_match.total, 0);
        assert_eq!(result.keyword_match.percentage, 0);
        assert_eq!(result.stats.experience_match, 75);
        assert_eq!(result.stats.education_match, 75);
        assert!(result.score <= 100);
    }

    #[test]
    fn test_custom_weights_are_validated() {
        let bad = ScoringConfig {
            keyword_weight: 0.5,
            ..ScoringConfig::default()
        };
        assert!(AnalysisEngine::with_weights(bad).is_err());

        let keyword_only = ScoringConfig {
            keyword_weight: 1.0,
            skill_weight: 0.0,
            section_weight: 0.0,
            action_verb_weight: 0.0,
            quantifiable_weight: 0.0,
            experience_weight: 0.0,
            education_weight: 0.0,
        };
        let engine = AnalysisEngine::with_weights(keyword_only).unwrap();
        let result = engine.analyze("python developer", "python python developer developer");
        assert_eq!(result.score, 100);
    }
}
