//! Analysis engine - scores whole texts and files

use crate::config::{Config, EffectiveConfig};
use crate::{ReadabilityResult, TextAnalysis};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::segmenter::segment_sentences;
use super::ReadabilityScorer;

/// Label used for text read from standard input
pub const STDIN_SOURCE: &str = "<stdin>";

/// Main analysis engine that runs segmentation, counting and scoring
pub struct AnalysisEngine {
    /// Whether to score every sentence on its own
    score_sentences: bool,
}

impl AnalysisEngine {
    /// Create a new analysis engine
    pub fn new() -> Self {
        Self {
            score_sentences: true,
        }
    }

    /// Skip per-sentence scoring
    pub fn without_sentence_scores(mut self) -> Self {
        self.score_sentences = false;
        self
    }

    /// Analyze a text file and return the result
    pub fn analyze(&self, path: &Path, config: Option<&Config>) -> Result<TextAnalysis> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read text file: {}", path.display()))?;

        let effective = config
            .map(|c| c.effective_for_file(path))
            .unwrap_or_default();

        Ok(self.analyze_text(&path.display().to_string(), &text, &effective))
    }

    /// Analyze in-memory text. Never fails: degenerate text scores 0.
    pub fn analyze_text(&self, source: &str, text: &str, config: &EffectiveConfig) -> TextAnalysis {
        let sentences = segment_sentences(text);
        let stats = ReadabilityScorer::count_with_sentences(text, sentences.len());
        let readability = ReadabilityScorer::score_stats(&stats).unwrap_or_else(|e| {
            log::debug!("{}: {}", source, e);
            ReadabilityResult::zero()
        });

        log::debug!(
            "{}: {} sentences, {} words, {} syllables -> {:.1}",
            source,
            stats.sentences,
            stats.words,
            stats.syllables,
            readability.score
        );

        let sentence_scores = if self.score_sentences {
            ReadabilityScorer::score_sentences(&sentences)
        } else {
            Vec::new()
        };

        let sentence_threshold = f64::from(config.sentence_threshold);
        let hard_sentences = sentence_scores
            .iter()
            .filter(|s| s.score < sentence_threshold)
            .map(|s| s.index)
            .collect();

        TextAnalysis {
            source: source.to_string(),
            readability,
            stats,
            sentences: sentence_scores,
            hard_sentences,
            threshold: config.threshold,
        }
    }

    /// Calculate aggregate statistics from multiple results
    pub fn aggregate_stats(results: &[TextAnalysis]) -> AggregateStats {
        if results.is_empty() {
            return AggregateStats::default();
        }

        let total_score: f64 = results.iter().map(|r| r.readability.score).sum();
        let average = total_score / results.len() as f64;

        AggregateStats {
            files_analyzed: results.len(),
            average_score: ReadabilityResult::new(average),
            total_sentences: results.iter().map(|r| r.stats.sentences).sum(),
            total_words: results.iter().map(|r| r.stats.words).sum(),
            hard_sentences: results.iter().map(|r| r.hard_sentences.len()).sum(),
            below_threshold: results.iter().filter(|r| r.below_threshold()).count(),
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate statistics from multiple text analyses
#[derive(Debug, Default)]
pub struct AggregateStats {
    /// Number of texts analyzed
    pub files_analyzed: usize,
    /// Average score across all texts
    pub average_score: ReadabilityResult,
    pub total_sentences: usize,
    pub total_words: usize,
    /// Sentences below their sentence threshold, across all texts
    pub hard_sentences: usize,
    /// Texts scoring below their threshold
    pub below_threshold: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GradeLevel;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn make_text_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".txt").unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_analyze_file() {
        let file = make_text_file("The children played outside. They were happy.");
        let result = AnalysisEngine::new().analyze(file.path(), None).unwrap();

        assert_eq!(result.stats.sentences, 2);
        assert_eq!(result.stats.words, 7);
        assert_eq!(result.readability.grade, GradeLevel::SixthGrade);
        assert_eq!(result.sentences.len(), 2);
        assert!(result.hard_sentences.is_empty());
        assert_eq!(result.threshold, None);
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = AnalysisEngine::new()
            .analyze(Path::new("does-not-exist.txt"), None)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read text file"));
    }

    #[test]
    fn test_config_threshold_applies() {
        let file = make_text_file("The cat sat on the mat.");
        let config: Config = serde_json::from_str(r#"{ "threshold": 80 }"#).unwrap();
        let result = AnalysisEngine::new()
            .analyze(file.path(), Some(&config))
            .unwrap();
        assert_eq!(result.threshold, Some(80));
        assert!(!result.below_threshold());
    }

    #[test]
    fn test_hard_sentences_flagged() {
        let text = "The cat sat on the mat. Unfortunately, institutional considerations \
                    necessitated comprehensive reorganization.";
        let result =
            AnalysisEngine::new().analyze_text("memo", text, &EffectiveConfig::default());
        assert_eq!(result.sentences.len(), 2);
        assert_eq!(result.hard_sentences, vec![1]);
    }

    #[test]
    fn test_without_sentence_scores() {
        let result = AnalysisEngine::new().without_sentence_scores().analyze_text(
            STDIN_SOURCE,
            "One. Two. Three.",
            &EffectiveConfig::default(),
        );
        assert!(result.sentences.is_empty());
        assert!(result.hard_sentences.is_empty());
        assert_eq!(result.stats.sentences, 3);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let result =
            AnalysisEngine::new().analyze_text(STDIN_SOURCE, "   ", &EffectiveConfig::default());
        assert_eq!(result.readability.score, 0.0);
        assert_eq!(result.readability.grade, GradeLevel::CollegeGraduate);
        assert!(result.sentences.is_empty());
    }

    #[test]
    fn test_aggregate_stats_empty() {
        let stats = AnalysisEngine::aggregate_stats(&[]);
        assert_eq!(stats.files_analyzed, 0);
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.average_score.score, 0.0);
    }

    #[test]
    fn test_aggregate_stats_multiple() {
        let engine = AnalysisEngine::new();
        let config = EffectiveConfig {
            threshold: Some(50),
            sentence_threshold: 30,
        };
        let easy = engine.analyze_text("easy", "The cat sat on the mat.", &config);
        let hard = engine.analyze_text(
            "hard",
            "Unfortunately, institutional considerations necessitated comprehensive reorganization.",
            &config,
        );

        let stats = AnalysisEngine::aggregate_stats(&[easy, hard]);
        assert_eq!(stats.files_analyzed, 2);
        assert_eq!(stats.average_score.score, 50.0);
        assert_eq!(stats.average_score.grade, GradeLevel::TenthTwelfthGrade);
        assert_eq!(stats.total_sentences, 2);
        assert_eq!(stats.total_words, 12);
        assert_eq!(stats.hard_sentences, 1);
        assert_eq!(stats.below_threshold, 1);
    }
}
