//! Improvement roadmap: prioritised actions and a projected score
//!
//! Impact figures are projections that assume every action is fully carried
//! out. Each category's ceiling is its scoring weight expressed in points.

use crate::config::ScoringConfig;
use crate::processing::lexicon::{QUANTIFIABLE_EXAMPLES, RECOMMENDED_VERBS};
use crate::processing::scoring::SECTION_DIVISOR;
use crate::processing::signal_bundle::SignalBundle;
use crate::processing::signals::TARGET_VERB_COUNT;
use serde::{Deserialize, Serialize};
use std::fmt;

const KEYWORDS_TO_ADD: usize = 15;
const SKILLS_TO_ADD: usize = 10;
const VERBS_TO_ADD: usize = 10;
const PHRASES_TO_ADD: usize = 10;
const TARGET_METRIC_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoadmapCategory {
    Keywords,
    Skills,
    Structure,
    #[serde(rename = "Action Verbs")]
    ActionVerbs,
    #[serde(rename = "Quantifiable Achievements")]
    QuantifiableAchievements,
}

impl fmt::Display for RoadmapCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoadmapCategory::Keywords => "Keywords",
            RoadmapCategory::Skills => "Skills",
            RoadmapCategory::Structure => "Structure",
            RoadmapCategory::ActionVerbs => "Action Verbs",
            RoadmapCategory::QuantifiableAchievements => "Quantifiable Achievements",
        };
        f.write_str(label)
    }
}

/// The concrete items an action asks the candidate to add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionItems {
    Keywords(Vec<String>),
    Skills(Vec<String>),
    Sections(Vec<String>),
    Verbs(Vec<String>),
    Examples(Vec<String>),
}

impl ActionItems {
    pub fn items(&self) -> &[String] {
        match self {
            ActionItems::Keywords(items)
            | ActionItems::Skills(items)
            | ActionItems::Sections(items)
            | ActionItems::Verbs(items)
            | ActionItems::Examples(items) => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityAction {
    /// 1 is the highest impact.
    pub priority: u8,
    pub category: RoadmapCategory,
    pub action: String,
    pub impact: String,
    pub impact_points: u32,
    #[serde(flatten)]
    pub items: ActionItems,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImprovementRoadmap {
    pub priority_actions: Vec<PriorityAction>,
    pub keywords_to_add: Vec<String>,
    pub phrases_to_add: Vec<String>,
    pub skills_to_add: Vec<String>,
    pub sections_to_add: Vec<String>,
    pub action_verbs_to_use: Vec<String>,
    pub quantifiable_examples: Vec<String>,
    pub estimated_score: u8,
}

pub struct RoadmapPlanner {
    weights: ScoringConfig,
}

impl Default for RoadmapPlanner {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl RoadmapPlanner {
    pub fn new(weights: ScoringConfig) -> Self {
        Self { weights }
    }

    pub fn plan(&self, signals: &SignalBundle, current_score: u8) -> ImprovementRoadmap {
        let mut roadmap = ImprovementRoadmap::default();
        let mut projected_gain = 0.0;

        // Priority 1: keywords
        let missing_keywords = &signals.keywords.missing;
        if signals.keyword_percentage() < 100 && !missing_keywords.is_empty() {
            let to_add: Vec<String> = missing_keywords.iter().take(KEYWORDS_TO_ADD).cloned().collect();
            let ceiling = points(self.weights.keyword_weight);
            let gain = (to_add.len() as f64 / missing_keywords.len() as f64 * ceiling).min(ceiling);
            projected_gain += gain;

            roadmap.keywords_to_add = to_add.clone();
            roadmap.priority_actions.push(action(
                1,
                RoadmapCategory::Keywords,
                format!("Add {} missing keywords from job description", to_add.len()),
                gain,
                ActionItems::Keywords(to_add),
            ));
        }

        // Priority 2: skills
        let missing_skills = &signals.skills.missing;
        if signals.skill_percentage() < 100 && !missing_skills.is_empty() {
            let to_add: Vec<String> = missing_skills.iter().take(SKILLS_TO_ADD).cloned().collect();
            let missing = missing_skills.len() as f64;
            let matched_fraction = signals.skill_percentage() as f64 / 100.0;
            let ceiling = points(self.weights.skill_weight);
            let gain = (missing / (missing + matched_fraction * missing) * ceiling).min(ceiling);
            projected_gain += gain;

            roadmap.skills_to_add = to_add.clone();
            roadmap.priority_actions.push(action(
                2,
                RoadmapCategory::Skills,
                format!("Add {} missing skills from job requirements", missing_skills.len()),
                gain,
                ActionItems::Skills(to_add),
            ));
        }

        // Priority 3: sections
        let missing_sections = signals.sections.missing_labels();
        if !missing_sections.is_empty() {
            let ceiling = points(self.weights.section_weight);
            let gain = (missing_sections.len() as f64 / SECTION_DIVISOR * ceiling).min(ceiling);
            projected_gain += gain;

            roadmap.sections_to_add = missing_sections.clone();
            roadmap.priority_actions.push(action(
                3,
                RoadmapCategory::Structure,
                format!("Add {} missing resume sections", missing_sections.len()),
                gain,
                ActionItems::Sections(missing_sections),
            ));
        }

        // Priority 4: action verbs
        let verbs_to_add: Vec<String> = RECOMMENDED_VERBS
            .iter()
            .filter(|verb| !signals.action_verbs.iter().any(|found| found == *verb))
            .take(VERBS_TO_ADD)
            .map(|verb| verb.to_string())
            .collect();
        if !verbs_to_add.is_empty() {
            let ceiling = points(self.weights.action_verb_weight);
            let gain = (verbs_to_add.len() as f64 / TARGET_VERB_COUNT as f64 * ceiling).min(ceiling);
            projected_gain += gain;

            roadmap.action_verbs_to_use = verbs_to_add.clone();
            roadmap.priority_actions.push(action(
                4,
                RoadmapCategory::ActionVerbs,
                format!(
                    "Use more action verbs (currently {}, aim for {}+)",
                    signals.action_verbs.len(),
                    TARGET_VERB_COUNT
                ),
                gain,
                ActionItems::Verbs(verbs_to_add),
            ));
        }

        // Priority 5: quantifiable metrics
        if signals.numeric_tokens < TARGET_METRIC_COUNT {
            let shortfall = (TARGET_METRIC_COUNT - signals.numeric_tokens) as f64;
            let ceiling = points(self.weights.quantifiable_weight);
            let gain = (shortfall / TARGET_METRIC_COUNT as f64 * ceiling).min(ceiling);
            projected_gain += gain;

            let examples: Vec<String> = QUANTIFIABLE_EXAMPLES.iter().map(|e| e.to_string()).collect();
            roadmap.quantifiable_examples = examples.clone();
            roadmap.priority_actions.push(action(
                5,
                RoadmapCategory::QuantifiableAchievements,
                format!(
                    "Add more numbers and metrics (currently {}, aim for {}+)",
                    signals.numeric_tokens, TARGET_METRIC_COUNT
                ),
                gain,
                ActionItems::Examples(examples),
            ));
        }

        roadmap.phrases_to_add = signals.key_phrases.iter().take(PHRASES_TO_ADD).cloned().collect();
        roadmap.estimated_score = (current_score as f64 + projected_gain).min(100.0).round() as u8;

        roadmap
    }
}

fn points(weight: f64) -> f64 {
    weight * 100.0
}

fn action(priority: u8, category: RoadmapCategory, text: String, gain: f64, items: ActionItems) -> PriorityAction {
    let impact_points = gain.round() as u32;
    PriorityAction {
        priority,
        category,
        action: text,
        impact: format!("Will increase score by approximately {} points", impact_points),
        impact_points,
        items,
    }
}
