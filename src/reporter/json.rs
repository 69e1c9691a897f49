//! JSON reporter for machine-readable output

use crate::analyzer::AggregateStats;
use crate::TextAnalysis;
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T, fallback: &str) -> String {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.unwrap_or_else(|_| fallback.to_string())
    }

    /// Report a single analysis result as JSON
    pub fn report(&self, result: &TextAnalysis) -> String {
        self.to_json(result, "{}")
    }

    /// Report multiple results as JSON array
    pub fn report_many(&self, results: &[TextAnalysis]) -> String {
        self.to_json(results, "[]")
    }

    /// Report with summary
    pub fn report_with_summary(&self, results: &[TextAnalysis], stats: &AggregateStats) -> String {
        let output = JsonOutput {
            results,
            summary: JsonSummary {
                files_analyzed: stats.files_analyzed,
                average_score: stats.average_score.score,
                average_grade: stats.average_score.grade.to_string(),
                total_sentences: stats.total_sentences,
                total_words: stats.total_words,
                hard_sentences: stats.hard_sentences,
                below_threshold: stats.below_threshold,
            },
        };
        self.to_json(&output, "{}")
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: &'a [TextAnalysis],
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    files_analyzed: usize,
    average_score: f64,
    average_grade: String,
    total_sentences: usize,
    total_words: usize,
    hard_sentences: usize,
    below_threshold: usize,
}
