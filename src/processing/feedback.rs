//! Rule-based feedback: strengths, issues and suggestions

use crate::processing::signal_bundle::SignalBundle;
use serde::{Deserialize, Serialize};

/// Missing keywords are only listed when there are at most this many.
pub const MAX_LISTED_MISSING_KEYWORDS: usize = 10;
/// Missing skills are only listed when there are at most this many.
pub const MAX_LISTED_MISSING_SKILLS: usize = 8;
const INLINE_LIST_LEN: usize = 5;

const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 1000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub strengths: Vec<String>,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Default)]
pub struct FeedbackGenerator;

impl FeedbackGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, signals: &SignalBundle) -> Feedback {
        let mut feedback = Feedback::default();

        self.keyword_feedback(signals, &mut feedback);
        self.skill_feedback(signals, &mut feedback);
        self.section_feedback(signals, &mut feedback);
        self.verb_feedback(signals, &mut feedback);
        self.metric_feedback(signals, &mut feedback);
        self.missing_term_feedback(signals, &mut feedback);
        self.length_feedback(signals, &mut feedback);
        self.requirement_feedback(signals, &mut feedback);

        feedback
    }

    fn keyword_feedback(&self, signals: &SignalBundle, feedback: &mut Feedback) {
        let pct = signals.keyword_percentage();
        let matched = signals.keywords.matched.len();
        let total = signals.keywords.total();

        if pct >= 70 {
            feedback.strengths.push(format!(
                "Excellent keyword match: {} out of {} keywords found ({}%)",
                matched, total, pct
            ));
        } else if pct >= 50 {
            feedback.suggestions.push(format!(
                "Good keyword match ({}%), but could be improved. Consider adding more relevant keywords from the job description.",
                pct
            ));
        } else {
            feedback.issues.push(format!(
                "Low keyword match: Only {} out of {} keywords found ({}%). This significantly reduces ATS compatibility.",
                matched, total, pct
            ));
        }
    }

    fn skill_feedback(&self, signals: &SignalBundle, feedback: &mut Feedback) {
        let pct = signals.skill_percentage();
        let matched = signals.skills.matched.len();
        let total = signals.skills.total();

        if pct >= 70 {
            feedback.strengths.push(format!(
                "Strong skills alignment: {} out of {} required skills found ({}%)",
                matched, total, pct
            ));
        } else if pct >= 50 {
            feedback.suggestions.push(format!(
                "Moderate skills match ({}%). Consider highlighting more relevant skills from the job description.",
                pct
            ));
        } else if total > 0 {
            feedback.issues.push(format!(
                "Missing key skills: Only {} out of {} required skills found ({}%).",
                matched, total, pct
            ));
        }
    }

    fn section_feedback(&self, signals: &SignalBundle, feedback: &mut Feedback) {
        let count = signals.section_count();

        if count >= 5 {
            feedback.strengths.push("Well-structured resume with all essential sections".to_string());
        } else if count >= 3 {
            feedback.suggestions.push(format!(
                "Resume structure is good but could include more sections (currently {} out of 6 key sections)",
                count
            ));
        } else {
            feedback.issues.push(format!(
                "Resume is missing important sections. Only {} out of 6 key sections found.",
                count
            ));
        }

        if !signals.sections.contact {
            feedback.issues.push("Missing contact information (email, phone)".to_string());
        }

        if !signals.sections.summary {
            feedback.suggestions.push("Add a professional summary or objective at the top of your resume".to_string());
        }
    }

    fn verb_feedback(&self, signals: &SignalBundle, feedback: &mut Feedback) {
        let count = signals.action_verbs.len();

        if count >= 8 {
            feedback.strengths.push(format!("Strong use of action verbs ({} found)", count));
        } else if count >= 5 {
            feedback.suggestions.push(format!(
                "Good use of action verbs, but could use more ({} found)",
                count
            ));
        } else {
            feedback.suggestions.push(
                "Use more action verbs to describe your accomplishments (e.g., \"achieved\", \"managed\", \"developed\")"
                    .to_string(),
            );
        }
    }

    fn metric_feedback(&self, signals: &SignalBundle, feedback: &mut Feedback) {
        let count = signals.numeric_tokens;

        if count >= 5 {
            feedback.strengths.push("Excellent use of quantifiable achievements and metrics".to_string());
        } else if count >= 3 {
            feedback.suggestions.push("Add more numbers and metrics to quantify your achievements".to_string());
        } else {
            feedback.issues.push(
                "Missing quantifiable achievements. Add specific numbers, percentages, or metrics to demonstrate impact."
                    .to_string(),
            );
        }
    }

    fn missing_term_feedback(&self, signals: &SignalBundle, feedback: &mut Feedback) {
        let missing_keywords = &signals.keywords.missing;
        if (1..=MAX_LISTED_MISSING_KEYWORDS).contains(&missing_keywords.len()) {
            feedback.suggestions.push(format!(
                "Consider adding these keywords: {}",
                inline_list(missing_keywords)
            ));
        }

        let missing_skills = &signals.skills.missing;
        if (1..=MAX_LISTED_MISSING_SKILLS).contains(&missing_skills.len()) {
            feedback.issues.push(format!(
                "Missing important skills: {}",
                inline_list(missing_skills)
            ));
        }
    }

    fn length_feedback(&self, signals: &SignalBundle, feedback: &mut Feedback) {
        let words = signals.word_count;

        if words < MIN_WORDS {
            feedback.issues.push(
                "Resume is too short (less than 200 words). Add more detail about your experience and achievements."
                    .to_string(),
            );
        } else if words > MAX_WORDS {
            feedback.suggestions.push(
                "Resume may be too long (over 1000 words). Consider condensing while keeping key information."
                    .to_string(),
            );
        } else {
            feedback.strengths.push(format!("Appropriate resume length ({} words)", words));
        }
    }

    fn requirement_feedback(&self, signals: &SignalBundle, feedback: &mut Feedback) {
        if signals.experience_score >= 80 {
            feedback.strengths.push("Experience level appears to match job requirements".to_string());
        } else if signals.experience_score < 50 {
            feedback.issues.push(
                "Experience level may not match job requirements. Review years of experience mentioned.".to_string(),
            );
        }

        if signals.education_score >= 80 {
            feedback.strengths.push("Education requirements appear to be met".to_string());
        } else if signals.education_score < 50 {
            feedback.suggestions.push(
                "Review education requirements in the job description and ensure they are clearly stated in your resume"
                    .to_string(),
            );
        }
    }
}

/// First few items joined, with an ellipsis when more remain.
fn inline_list(items: &[String]) -> String {
    let shown = items
        .iter()
        .take(INLINE_LIST_LEN)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if items.len() > INLINE_LIST_LEN {
        format!("{}...", shown)
    } else {
        shown
    }
}
