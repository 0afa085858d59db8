//! Text analysis and scoring pipeline

pub mod lexicon;
pub mod text_processor;
pub mod structure;
pub mod signals;
pub mod comparators;
pub mod ats_matcher;
pub mod signal_bundle;
pub mod scoring;
pub mod feedback;
pub mod roadmap;
pub mod analyzer;

pub use analyzer::{analyze, AnalysisEngine, AnalysisResult};
