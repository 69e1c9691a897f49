//! Flesch Reading-Ease scoring

use crate::{GradeLevel, ReadabilityResult, SentenceScore, TextStats};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use super::segmenter::segment_sentences;
use super::syllables::estimate_syllables;

const BASE_SCORE: f64 = 206.835;
const SENTENCE_LENGTH_WEIGHT: f64 = 1.015;
const WORD_LENGTH_WEIGHT: f64 = 84.6;

/// Words per sentence above which readers start to struggle
const LONG_SENTENCE_WORDS: f64 = 20.0;
/// Syllables per word above which vocabulary reads as technical
const DENSE_WORD_SYLLABLES: f64 = 1.6;

/// Reasons a text cannot be scored. Callers of [`compute_readability`] see
/// these as a zero score.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("text contains no sentences")]
    NoSentences,
    #[error("text contains no words")]
    NoWords,
    #[error("formula produced a non-finite score ({0})")]
    NonFiniteScore(f64),
}

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[A-Za-z0-9_]+").unwrap())
}

/// Maximal runs of ASCII letters, digits and underscores, in order
pub fn tokenize_words(text: &str) -> Vec<&str> {
    word_pattern().find_iter(text).map(|m| m.as_str()).collect()
}

/// Calculator for readability scores
pub struct ReadabilityScorer;

impl ReadabilityScorer {
    /// Gather sentence, word and syllable totals for a text.
    /// Words are counted over the whole text, not per sentence.
    pub fn count(text: &str) -> TextStats {
        let sentences = segment_sentences(text).len();
        Self::count_with_sentences(text, sentences)
    }

    /// Same as [`Self::count`] for a text that has already been segmented
    pub fn count_with_sentences(text: &str, sentences: usize) -> TextStats {
        let words = tokenize_words(text);
        let syllables: i64 = words.iter().map(|w| i64::from(estimate_syllables(w))).sum();
        let word_count = words.len();

        TextStats {
            sentences,
            words: word_count,
            syllables,
            characters: text.chars().filter(|c| !c.is_whitespace()).count(),
            words_per_sentence: ratio(word_count as f64, sentences as f64),
            syllables_per_word: ratio(syllables as f64, word_count as f64),
        }
    }

    /// Unclamped Flesch Reading-Ease for the given totals
    pub fn flesch(stats: &TextStats) -> Result<f64, ScoreError> {
        if stats.sentences == 0 {
            return Err(ScoreError::NoSentences);
        }
        if stats.words == 0 {
            return Err(ScoreError::NoWords);
        }
        let words = stats.words as f64;
        let raw = BASE_SCORE
            - SENTENCE_LENGTH_WEIGHT * (words / stats.sentences as f64)
            - WORD_LENGTH_WEIGHT * (stats.syllables as f64 / words);
        if raw.is_finite() {
            Ok(raw)
        } else {
            Err(ScoreError::NonFiniteScore(raw))
        }
    }

    /// Clamped score and grade for already-counted totals
    pub fn score_stats(stats: &TextStats) -> Result<ReadabilityResult, ScoreError> {
        let raw = Self::flesch(stats)?;
        Ok(ReadabilityResult::new(raw.clamp(0.0, 100.0)))
    }

    /// Score a text, reporting why it could not be scored
    pub fn try_score(text: &str) -> Result<ReadabilityResult, ScoreError> {
        Self::score_stats(&Self::count(text))
    }

    /// Score each sentence on its own, keeping input order
    pub fn score_sentences(sentences: &[String]) -> Vec<SentenceScore> {
        sentences
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let stats = Self::count_with_sentences(text, 1);
                let result = Self::score_stats(&stats).unwrap_or_default();
                SentenceScore {
                    index,
                    text: text.clone(),
                    score: result.score,
                    grade: result.grade,
                }
            })
            .collect()
    }

    /// Get recommendations for making a text easier to read
    pub fn recommendations(stats: &TextStats, grade: GradeLevel) -> Vec<String> {
        let mut recs = Vec::new();

        if stats.words_per_sentence > LONG_SENTENCE_WORDS {
            recs.push(format!(
                "Split long sentences - they average {:.1} words (aim for under {})",
                stats.words_per_sentence, LONG_SENTENCE_WORDS
            ));
        }

        if stats.syllables_per_word > DENSE_WORD_SYLLABLES {
            recs.push(format!(
                "Prefer shorter words - they average {:.2} syllables (aim for under {})",
                stats.syllables_per_word, DENSE_WORD_SYLLABLES
            ));
        }

        if grade >= GradeLevel::College && recs.is_empty() {
            recs.push("Rewrite the hardest sentences first (see --verbose)".to_string());
        }

        if recs.is_empty() {
            recs.push("Text reads comfortably for a general audience.".to_string());
        }

        recs
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Flesch Reading-Ease score and grade for a text. Degenerate input (no
/// sentences, no words) scores 0.
pub fn compute_readability(text: &str) -> ReadabilityResult {
    match ReadabilityScorer::try_score(text) {
        Ok(result) => result,
        Err(e) => {
            log::debug!("scoring fell back to zero: {}", e);
            ReadabilityResult::zero()
        }
    }
}
