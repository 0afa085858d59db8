//! Input acquisition
//! Handles file detection, text extraction, and validation before analysis

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

use crate::error::{AtsError, Result};

/// Reject missing resume or job text before it reaches the analyzer.
pub fn validate_inputs(resume: &str, job: &str) -> Result<()> {
    let missing: Vec<&str> = [("resume", resume), ("job description", job)]
        .iter()
        .filter(|(_, text)| text.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AtsError::InvalidInput(format!(
            "required input missing: {}",
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_inputs() {
        assert!(validate_inputs("resume text", "job text").is_ok());

        let err = validate_inputs("  \n", "job text").unwrap_err();
        assert!(err.to_string().contains("required input missing: resume"));

        let err = validate_inputs("", "").unwrap_err();
        assert!(err.to_string().contains("resume, job description"));
    }
}
