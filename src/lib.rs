//! ATS analyzer library
//!
//! Scores a resume against a job description the way an applicant tracking
//! system might, and explains how to raise the score.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{AtsError, Result};
pub use processing::{analyze, AnalysisEngine, AnalysisResult};
