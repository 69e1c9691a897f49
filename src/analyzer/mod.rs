//! Analyzer module - readability analysis engine

pub mod engine;
pub mod scoring;
pub mod segmenter;
pub mod syllables;

pub use engine::{AggregateStats, AnalysisEngine};
pub use scoring::{ReadabilityScorer, ScoreError};
