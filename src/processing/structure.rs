//! Detection of the canonical resume sections

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionFlags {
    pub contact: bool,
    pub summary: bool,
    pub experience: bool,
    pub education: bool,
    pub skills: bool,
}

impl SectionFlags {
    /// Number of sections present.
    pub fn count(&self) -> usize {
        [self.contact, self.summary, self.experience, self.education, self.skills]
            .iter()
            .filter(|present| **present)
            .count()
    }

    /// Human-readable names of the absent sections, in display order.
    pub fn missing_labels(&self) -> Vec<String> {
        [
            (self.contact, "Contact Information (email, phone)"),
            (self.summary, "Professional Summary or Objective"),
            (self.experience, "Work Experience"),
            (self.education, "Education"),
            (self.skills, "Skills Section"),
        ]
        .iter()
        .filter(|(present, _)| !present)
        .map(|(_, label)| label.to_string())
        .collect()
    }
}

pub struct SectionChecker {
    email_regex: Regex,
    phone_regex: Regex,
    intl_phone_regex: Regex,
    summary_regex: Regex,
    experience_regex: Regex,
    education_regex: Regex,
    skills_regex: Regex,
}

impl Default for SectionChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionChecker {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b")
            .expect("Invalid email regex");

        let phone_regex = Regex::new(r"(\+?[0-9]{1,3}[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}")
            .expect("Invalid phone regex");

        let intl_phone_regex = Regex::new(r"\+[0-9]{10,15}").expect("Invalid phone regex");

        let summary_regex = Regex::new(r"(?i)(summary|objective|profile|about|overview)")
            .expect("Invalid summary regex");

        let experience_regex = Regex::new(
            r"(?i)(experience|work history|employment|professional experience|work experience)",
        )
        .expect("Invalid experience regex");

        let education_regex = Regex::new(
            r"(?i)(education|academic|degree|university|college|bachelor|master|phd)",
        )
        .expect("Invalid education regex");

        let skills_regex = Regex::new(
            r"(?i)(skills|technical skills|competencies|qualifications|abilities)",
        )
        .expect("Invalid skills regex");

        Self {
            email_regex,
            phone_regex,
            intl_phone_regex,
            summary_regex,
            experience_regex,
            education_regex,
            skills_regex,
        }
    }

    pub fn check_sections(&self, text: &str) -> SectionFlags {
        SectionFlags {
            contact: self.has_contact_info(text),
            summary: self.summary_regex.is_match(text),
            experience: self.experience_regex.is_match(text),
            education: self.education_regex.is_match(text),
            skills: self.skills_regex.is_match(text),
        }
    }

    /// Contact info needs both an email address and a phone number.
    pub fn has_contact_info(&self, text: &str) -> bool {
        let has_email = self.email_regex.is_match(text);
        let has_phone = self.phone_regex.is_match(text) || self.intl_phone_regex.is_match(text);
        has_email && has_phone
    }
}
