//! Legible: Readability Analyzer
//!
//! This library segments plain text into sentences, estimates syllable counts
//! with a rule-based heuristic and turns the totals into a Flesch Reading-Ease
//! score with a coarse grade-level label.

pub mod analyzer;
pub mod config;
pub mod reporter;

pub use analyzer::scoring::compute_readability;
pub use analyzer::segmenter::segment_sentences;
pub use analyzer::syllables::estimate_syllables;

use serde::{Deserialize, Serialize};

/// Flesch Reading-Ease score with its grade label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityResult {
    /// Clamped score (0-100)
    pub score: f64,
    /// Grade level derived from the score
    pub grade: GradeLevel,
}

impl ReadabilityResult {
    pub fn new(score: f64) -> Self {
        let grade = GradeLevel::from_score(score);
        Self { score, grade }
    }

    /// Result reported for degenerate input (no sentences or no words)
    pub fn zero() -> Self {
        Self::new(0.0)
    }
}

impl Default for ReadabilityResult {
    fn default() -> Self {
        Self::zero()
    }
}

/// Reading grade level, easiest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GradeLevel {
    #[serde(rename = "5th Grade")]
    FifthGrade,
    #[serde(rename = "6th Grade")]
    SixthGrade,
    #[serde(rename = "7th Grade")]
    SeventhGrade,
    #[serde(rename = "8th-9th Grade")]
    EighthNinthGrade,
    #[serde(rename = "10th-12th Grade")]
    TenthTwelfthGrade,
    #[serde(rename = "College")]
    College,
    #[serde(rename = "College Graduate")]
    CollegeGraduate,
}

/// Lower score bound of each grade, evaluated top-down
const GRADE_BREAKPOINTS: [(f64, GradeLevel); 6] = [
    (90.0, GradeLevel::FifthGrade),
    (80.0, GradeLevel::SixthGrade),
    (70.0, GradeLevel::SeventhGrade),
    (60.0, GradeLevel::EighthNinthGrade),
    (50.0, GradeLevel::TenthTwelfthGrade),
    (30.0, GradeLevel::College),
];

impl GradeLevel {
    pub fn from_score(score: f64) -> Self {
        GRADE_BREAKPOINTS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, grade)| *grade)
            .unwrap_or(GradeLevel::CollegeGraduate)
    }

    /// Fixed label, as shown to readers
    pub fn label(&self) -> &'static str {
        match self {
            GradeLevel::FifthGrade => "5th Grade",
            GradeLevel::SixthGrade => "6th Grade",
            GradeLevel::SeventhGrade => "7th Grade",
            GradeLevel::EighthNinthGrade => "8th-9th Grade",
            GradeLevel::TenthTwelfthGrade => "10th-12th Grade",
            GradeLevel::College => "College",
            GradeLevel::CollegeGraduate => "College Graduate",
        }
    }

    /// Short description of who can comfortably read text at this level
    pub fn description(&self) -> &'static str {
        match self {
            GradeLevel::FifthGrade => "Very easy - understood by an average 11-year-old",
            GradeLevel::SixthGrade => "Easy - conversational English for consumers",
            GradeLevel::SeventhGrade => "Fairly easy",
            GradeLevel::EighthNinthGrade => "Plain English - understood by 13 to 15-year-olds",
            GradeLevel::TenthTwelfthGrade => "Fairly difficult to read",
            GradeLevel::College => "Difficult to read",
            GradeLevel::CollegeGraduate => {
                "Very difficult - best understood by university graduates"
            }
        }
    }
}

impl std::fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Counts gathered while scoring a text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub sentences: usize,
    pub words: usize,
    /// Sum of per-word estimates (not floored, may undercount)
    pub syllables: i64,
    /// Non-whitespace characters
    pub characters: usize,
    pub words_per_sentence: f64,
    pub syllables_per_word: f64,
}

/// Score of a single sentence, in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceScore {
    /// Position in the segmented text (0-indexed)
    pub index: usize,
    pub text: String,
    pub score: f64,
    pub grade: GradeLevel,
}

/// The main result of analyzing a text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysis {
    /// File path, or "<stdin>"
    pub source: String,
    pub readability: ReadabilityResult,
    pub stats: TextStats,
    /// Per-sentence scores in input order
    pub sentences: Vec<SentenceScore>,
    /// Indices of sentences scoring below the sentence threshold
    pub hard_sentences: Vec<usize>,
    /// Threshold in effect for this text, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u8>,
}

impl TextAnalysis {
    /// Whether this text falls below its threshold
    pub fn below_threshold(&self) -> bool {
        self.threshold
            .is_some_and(|t| self.readability.score < f64::from(t))
    }
}
