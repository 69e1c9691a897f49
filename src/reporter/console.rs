//! Console reporter with colored output

use crate::analyzer::{AggregateStats, ReadabilityScorer};
use crate::{GradeLevel, SentenceScore, TextAnalysis};
use colored::{Color, Colorize};

/// How many sentences verbose mode lists
const MAX_SENTENCES_SHOWN: usize = 10;
/// Longer sentences are cut in listings
const SENTENCE_PREVIEW_CHARS: usize = 72;

/// Display colour for each grade, easiest first
pub fn grade_color(grade: GradeLevel) -> Color {
    match grade {
        GradeLevel::FifthGrade | GradeLevel::SixthGrade => Color::Green,
        GradeLevel::SeventhGrade => Color::BrightGreen,
        GradeLevel::EighthNinthGrade => Color::Yellow,
        GradeLevel::TenthTwelfthGrade => Color::BrightYellow,
        GradeLevel::College => Color::Red,
        GradeLevel::CollegeGraduate => Color::BrightRed,
    }
}

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single analysis result
    pub fn report(&self, result: &TextAnalysis) {
        print!("{}", self.render(result));
    }

    /// Report multiple results with summary
    pub fn report_many(&self, results: &[TextAnalysis], stats: &AggregateStats) {
        for result in results {
            self.report(result);
            println!("{}", "─".repeat(60));
        }

        print!("{}", self.render_summary(stats));
    }

    /// Report in quiet mode (just score)
    pub fn report_quiet(&self, result: &TextAnalysis) {
        println!("{}", self.render_quiet(result));
    }

    pub fn render_quiet(&self, result: &TextAnalysis) -> String {
        format!(
            "{}: {:.1} ({})",
            result.source,
            result.readability.score,
            self.colorize_grade(result.readability.grade)
        )
    }

    /// Full report for one text
    pub fn render(&self, result: &TextAnalysis) -> String {
        let mut out = String::new();
        self.render_header(&mut out, result);
        self.render_score(&mut out, result);

        if self.verbose && !result.sentences.is_empty() {
            self.render_sentences_hardest_first(&mut out, &result.sentences);
        } else if !result.hard_sentences.is_empty() {
            out.push_str(&format!(
                "   {} {} hard-to-read sentences (use --verbose to show)\n\n",
                self.paint("ℹ", Color::Blue),
                result.hard_sentences.len()
            ));
        }

        self.render_recommendations(&mut out, result);
        out.push('\n');
        out
    }

    fn render_header(&self, out: &mut String, result: &TextAnalysis) {
        out.push('\n');
        out.push_str(&format!(
            "{}\n",
            self.bold(&format!("📖 Readability Analysis: {}", result.source))
        ));
        out.push_str(&format!(
            "   Sentences: {} | Words: {} | Syllables: {}\n",
            result.stats.sentences, result.stats.words, result.stats.syllables
        ));
        out.push_str(&format!(
            "   {:.1} words/sentence | {:.2} syllables/word\n\n",
            result.stats.words_per_sentence, result.stats.syllables_per_word
        ));
    }

    fn render_score(&self, out: &mut String, result: &TextAnalysis) {
        let grade = result.readability.grade;
        let score_bar = self.create_score_bar(result.readability.score);

        out.push_str(&format!(
            "   Score: {} {}\n",
            score_bar,
            self.bold(&self.colorize_grade(grade))
        ));
        out.push_str(&format!("   {}\n", self.dimmed(grade.description())));
        if let Some(threshold) = result.threshold {
            let verdict = if result.below_threshold() {
                self.paint(&format!("below threshold {}", threshold), Color::Red)
            } else {
                self.paint(&format!("meets threshold {}", threshold), Color::Green)
            };
            out.push_str(&format!("   {}\n", verdict));
        }
        out.push('\n');
    }

    fn render_sentences_hardest_first(&self, out: &mut String, sentences: &[SentenceScore]) {
        out.push_str(&format!("   {}\n", self.bold("Sentences (hardest first):")));
        let mut sorted: Vec<&SentenceScore> = sentences.iter().collect();
        sorted.sort_by(|a, b| a.score.total_cmp(&b.score).then_with(|| a.index.cmp(&b.index)));
        for sentence in sorted.iter().take(MAX_SENTENCES_SHOWN) {
            out.push_str(&format!(
                "   {} {:>5.1} {} {}\n",
                self.dimmed(&format!("#{}", sentence.index + 1)),
                sentence.score,
                self.colorize_grade(sentence.grade),
                preview(&sentence.text)
            ));
        }
        if sorted.len() > MAX_SENTENCES_SHOWN {
            out.push_str(&format!(
                "   {} more\n",
                self.dimmed(&format!("… {}", sorted.len() - MAX_SENTENCES_SHOWN))
            ));
        }
        out.push('\n');
    }

    fn render_recommendations(&self, out: &mut String, result: &TextAnalysis) {
        if result.readability.score >= 60.0 {
            return;
        }
        let recs = ReadabilityScorer::recommendations(&result.stats, result.readability.grade);
        out.push_str(&format!("   {}\n", self.bold("Recommendations:")));
        for rec in recs.iter().take(3) {
            out.push_str(&format!("   {} {}\n", self.paint("→", Color::Cyan), rec));
        }
    }

    /// Summary block for several texts
    pub fn render_summary(&self, stats: &AggregateStats) -> String {
        let mut out = String::new();
        out.push('\n');
        out.push_str(&format!("{}\n", "═".repeat(60)));
        out.push_str(&format!("{}\n", self.bold("Summary")));
        out.push_str(&format!("{}\n", "═".repeat(60)));
        out.push_str(&format!(
            "   Files analyzed:  {}\n",
            self.bold(&stats.files_analyzed.to_string())
        ));
        out.push_str(&format!(
            "   Average score:   {} ({})\n",
            self.bold(&format!("{:.1}", stats.average_score.score)),
            self.colorize_grade(stats.average_score.grade)
        ));
        out.push_str(&format!("   Total sentences: {}\n", stats.total_sentences));
        out.push_str(&format!("   Total words:     {}\n", stats.total_words));
        out.push_str(&format!("   Hard sentences:  {}\n", stats.hard_sentences));
        if stats.below_threshold > 0 {
            out.push_str(&format!(
                "   Below threshold: {}\n",
                self.paint(&stats.below_threshold.to_string(), Color::Red)
            ));
        }
        out.push('\n');
        out
    }

    fn colorize_grade(&self, grade: GradeLevel) -> String {
        let s = grade.label();
        if !self.use_colors {
            return s.to_string();
        }
        match grade {
            GradeLevel::FifthGrade | GradeLevel::CollegeGraduate => {
                s.color(grade_color(grade)).bold().to_string()
            }
            _ => s.color(grade_color(grade)).to_string(),
        }
    }

    fn create_score_bar(&self, score: f64) -> String {
        let filled = ((score.clamp(0.0, 100.0) * 20.0) / 100.0) as usize;
        let empty = 20 - filled;

        let bar = format!(
            "[{}{}] {:>5.1}",
            "█".repeat(filled),
            "░".repeat(empty),
            score
        );

        if score >= 70.0 {
            self.paint(&bar, Color::Green)
        } else if score >= 50.0 {
            self.paint(&bar, Color::Yellow)
        } else {
            self.paint(&bar, Color::Red)
        }
    }

    fn paint(&self, s: &str, color: Color) -> String {
        if self.use_colors {
            s.color(color).to_string()
        } else {
            s.to_string()
        }
    }

    fn bold(&self, s: &str) -> String {
        if self.use_colors {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn dimmed(&self, s: &str) -> String {
        if self.use_colors {
            s.dimmed().to_string()
        } else {
            s.to_string()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() <= SENTENCE_PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(SENTENCE_PREVIEW_CHARS - 1).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::AnalysisEngine;
    use crate::config::EffectiveConfig;

    fn analyze(text: &str, threshold: Option<u8>) -> TextAnalysis {
        let config = EffectiveConfig {
            threshold,
            ..EffectiveConfig::default()
        };
        AnalysisEngine::new().analyze_text("sample.txt", text, &config)
    }

    #[test]
    fn test_quiet_line() {
        let reporter = ConsoleReporter::new().without_colors();
        let line = reporter.render_quiet(&analyze("The cat sat on the mat.", None));
        assert_eq!(line, "sample.txt: 100.0 (5th Grade)");
    }

    #[test]
    fn test_render_contains_score_and_grade() {
        let reporter = ConsoleReporter::new().without_colors();
        let out = reporter.render(&analyze("The children played outside. They were happy.", None));
        assert!(out.contains("Readability Analysis: sample.txt"));
        assert!(out.contains("Sentences: 2 | Words: 7 | Syllables: 10"));
        assert!(out.contains("82.4"));
        assert!(out.contains("6th Grade"));
        assert!(!out.contains("Recommendations"));
    }

    #[test]
    fn test_threshold_verdict() {
        let reporter = ConsoleReporter::new().without_colors();
        let out = reporter.render(&analyze("The cat sat on the mat.", Some(90)));
        assert!(out.contains("meets threshold 90"));

        let hard = "Unfortunately, institutional considerations necessitated comprehensive reorganization.";
        let out = reporter.render(&analyze(hard, Some(90)));
        assert!(out.contains("below threshold 90"));
        assert!(out.contains("Recommendations:"));
        assert!(out.contains("1 hard-to-read sentences"));
    }

    #[test]
    fn test_verbose_lists_hardest_first() {
        let reporter = ConsoleReporter::new().without_colors().verbose();
        let text = "The cat sat on the mat. Unfortunately, institutional considerations \
                    necessitated comprehensive reorganization.";
        let out = reporter.render(&analyze(text, None));
        let hard_pos = out.find("#2").unwrap();
        let easy_pos = out.find("#1").unwrap();
        assert!(hard_pos < easy_pos, "hardest sentence should be listed first");
    }

    #[test]
    fn test_summary() {
        let reporter = ConsoleReporter::new().without_colors();
        let results = vec![
            analyze("The cat sat on the mat.", Some(60)),
            analyze("They were happy.", Some(60)),
        ];
        let stats = AnalysisEngine::aggregate_stats(&results);
        let out = reporter.render_summary(&stats);
        assert!(out.contains("Files analyzed:  2"));
        assert!(out.contains("Total words:     9"));
        assert!(!out.contains("Below threshold"));
    }

    #[test]
    fn test_preview_truncates_long_sentences() {
        let long = "word ".repeat(40);
        let shown = preview(long.trim());
        assert!(shown.ends_with('…'));
        assert!(shown.chars().count() <= SENTENCE_PREVIEW_CHARS);
        assert_eq!(preview("Short one."), "Short one.");
    }

    #[test]
    fn test_every_grade_has_a_color() {
        assert_eq!(grade_color(GradeLevel::FifthGrade), Color::Green);
        assert_eq!(grade_color(GradeLevel::CollegeGraduate), Color::BrightRed);
    }
}
