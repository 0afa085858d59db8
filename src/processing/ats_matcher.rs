//! ATS (Applicant Tracking System) keyword and skill matching

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const KEYWORD_MATCHED_CAP: usize = 30;
pub const KEYWORD_MISSING_CAP: usize = 20;
pub const SKILL_MATCHED_CAP: usize = 20;
pub const SKILL_MISSING_CAP: usize = 15;

/// Outcome of matching the target's terms against the candidate.
///
/// `matched` and `missing` count every term; the item lists are truncated
/// for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub total: usize,
    pub matched: usize,
    pub missing: usize,
    pub percentage: u8,
    pub matched_items: Vec<String>,
    pub missing_items: Vec<String>,
}

/// Full partition of target terms, before truncation.
#[derive(Debug, Clone, Default)]
pub struct TermPartition {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl TermPartition {
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    pub fn percentage(&self) -> u8 {
        match_percentage(self.matched.len(), self.total())
    }

    pub fn to_match_result(&self, matched_cap: usize, missing_cap: usize) -> MatchResult {
        MatchResult {
            total: self.total(),
            matched: self.matched.len(),
            missing: self.missing.len(),
            percentage: self.percentage(),
            matched_items: self.matched.iter().take(matched_cap).cloned().collect(),
            missing_items: self.missing.iter().take(missing_cap).cloned().collect(),
        }
    }
}

pub fn match_percentage(matched: usize, total: usize) -> u8 {
    if total == 0 {
        0
    } else {
        (matched as f64 / total as f64 * 100.0).round() as u8
    }
}

#[derive(Debug, Default)]
pub struct ATSMatcher;

impl ATSMatcher {
    pub fn new() -> Self {
        Self
    }

    /// A target keyword is matched when it occurs anywhere in the candidate text.
    pub fn match_keywords(&self, target_keywords: &[String], candidate_text: &str) -> TermPartition {
        let candidate_lower = candidate_text.to_lowercase();
        let (matched, missing) = target_keywords
            .iter()
            .cloned()
            .partition(|keyword| candidate_lower.contains(&keyword.to_lowercase()));

        TermPartition { matched, missing }
    }

    /// A target skill is matched when the candidate's skill set contains it.
    pub fn match_skills(&self, target_skills: &[String], candidate_skills: &[String]) -> TermPartition {
        let candidate: HashSet<String> = candidate_skills.iter().map(|s| s.to_lowercase()).collect();
        let (matched, missing) = target_skills
            .iter()
            .cloned()
            .partition(|skill| candidate.contains(&skill.to_lowercase()));

        TermPartition { matched, missing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_keyword_substring_matching() {
        let matcher = ATSMatcher::new();
        let keywords = strings(&["python", "kubernetes", "design"]);

        let partition = matcher.match_keywords(&keywords, "Python developer, designed APIs");

        assert_eq!(partition.matched, strings(&["python", "design"]));
        assert_eq!(partition.missing, strings(&["kubernetes"]));
        assert_eq!(partition.percentage(), 67);
    }

    #[test]
    fn test_match_result_counts_are_uncapped() {
        let partition = TermPartition {
            matched: (0..40).map(|i| format!("m{i}")).collect(),
            missing: (0..25).map(|i| format!("x{i}")).collect(),
        };

        let result = partition.to_match_result(KEYWORD_MATCHED_CAP, KEYWORD_MISSING_CAP);

        assert_eq!(result.total, 65);
        assert_eq!(result.matched + result.missing, result.total);
        assert_eq!(result.matched_items.len(), KEYWORD_MATCHED_CAP);
        assert_eq!(result.missing_items.len(), KEYWORD_MISSING_CAP);
        assert_eq!(result.percentage, 62);
    }

    #[test]
    fn test_empty_target_has_zero_percentage() {
        let matcher = ATSMatcher::new();
        let partition = matcher.match_skills(&[], &strings(&["rust"]));

        let result = partition.to_match_result(SKILL_MATCHED_CAP, SKILL_MISSING_CAP);

        assert_eq!(result.total, 0);
        assert_eq!(result.percentage, 0);
    }

    #[test]
    fn test_skill_set_matching() {
        let matcher = ATSMatcher::new();
        let partition = matcher.match_skills(&strings(&["docker", "jira"]), &strings(&["Docker", "git"]));

        assert_eq!(partition.matched, strings(&["docker"]));
        assert_eq!(partition.missing, strings(&["jira"]));
        assert_eq!(partition.percentage(), 50);
    }
}
