//! Edge case tests: degenerate inputs must not panic.

use legible::analyzer::AnalysisEngine;
use legible::{compute_readability, segment_sentences, GradeLevel, TextAnalysis};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn analyze_path(path: &Path) -> Result<TextAnalysis, anyhow::Error> {
    AnalysisEngine::new().analyze(path, None)
}

fn write_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".txt").unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

fn assert_in_range(result: &TextAnalysis) {
    let score = result.readability.score;
    assert!(score.is_finite());
    assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
}

#[test]
fn empty_file_no_panic() {
    let file = write_file(b"");
    let r = analyze_path(file.path()).unwrap();
    assert_eq!(r.stats.sentences, 0);
    assert_eq!(r.readability.score, 0.0);
    assert_eq!(r.readability.grade, GradeLevel::CollegeGraduate);
}

#[test]
fn whitespace_only_no_panic() {
    let file = write_file(b"   \n\t\n  ");
    let r = analyze_path(file.path()).unwrap();
    assert_eq!(r.stats.sentences, 0);
    assert_eq!(r.stats.words, 0);
    assert_eq!(r.readability.score, 0.0);
}

#[test]
fn punctuation_only_scores_zero() {
    let file = write_file(b"...!!!???");
    let r = analyze_path(file.path()).unwrap();
    assert_eq!(r.stats.sentences, 1);
    assert_eq!(r.stats.words, 0);
    assert_eq!(r.readability.score, 0.0);
}

#[test]
fn invalid_utf8_is_error_not_panic() {
    let file = write_file(&[0xff, 0xfe, 0x00, 0x41]);
    let err = analyze_path(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read text file"));
}

#[test]
fn non_ascii_text_no_panic() {
    let file = write_file("Café au lait. Ünïcödé ärgert. 日本語のテキスト。".as_bytes());
    let r = analyze_path(file.path()).unwrap();
    assert_in_range(&r);
    assert!(r.stats.words > 0);
}

#[test]
fn emoji_and_symbols_no_panic() {
    let r = compute_readability("🚀🚀 Launch now! 🎉 Party time.");
    assert!((0.0..=100.0).contains(&r.score));
}

#[test]
fn very_long_sentence_is_clamped_to_zero() {
    let text = format!("{}.", "institutional ".repeat(500).trim_end());
    let r = compute_readability(&text);
    assert_eq!(r.score, 0.0);
    assert_eq!(r.grade, GradeLevel::CollegeGraduate);
}

#[test]
fn many_tiny_sentences_are_clamped_to_hundred() {
    let text = "Go. ".repeat(200);
    let r = compute_readability(&text);
    assert_eq!(r.score, 100.0);
    assert_eq!(r.grade, GradeLevel::FifthGrade);
}

#[test]
fn numbers_only_no_panic() {
    let r = compute_readability("123 456. 789.");
    assert!(r.score.is_finite());
}

#[test]
fn private_use_text_is_preserved_exactly() {
    let text = "XM\u{E000}0\u{E000} token here. Dr. Who arrived.";
    let sentences = segment_sentences(text);
    assert_eq!(
        sentences,
        vec!["XM\u{E000}0\u{E000} token here.", "Dr. Who arrived."]
    );
    let kept: String = sentences.concat().chars().filter(|c| !c.is_whitespace()).collect();
    let original: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(kept, original);
}

#[test]
fn crlf_line_endings_split() {
    let sentences = segment_sentences("First line.\r\nSecond line.\r\n");
    assert_eq!(sentences, vec!["First line.", "Second line."]);
}

#[test]
fn hard_sentence_threshold_zero_flags_nothing() {
    let text = "Unfortunately, institutional considerations necessitated comprehensive reorganization.";
    let config = legible::config::EffectiveConfig {
        threshold: None,
        sentence_threshold: 0,
    };
    let r = AnalysisEngine::new().analyze_text("memo", text, &config);
    assert!(r.hard_sentences.is_empty());
    assert_in_range(&r);
}
