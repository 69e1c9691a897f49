//! Sentence segmentation with abbreviation protection

use regex::Regex;
use std::sync::OnceLock;

/// Abbreviations whose periods never end a sentence, matched in list order
pub const ABBREVIATIONS: [&str; 14] = [
    "Mr.", "Mrs.", "Dr.", "Prof.", "Sr.", "Jr.", "e.g.", "i.e.", "etc.", "vs.", "U.S.", "U.K.",
    "A.M.", "P.M.",
];

fn boundary_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Mark, whitespace run, then the upper-case letter opening the next sentence
    PATTERN.get_or_init(|| Regex::new(r"[.!?]\s+[A-Z]").unwrap())
}

/// Byte range of an abbreviation occurrence in the input
type Span = std::ops::Range<usize>;

/// Locate every abbreviation occurrence. Earlier list entries win; a later
/// entry overlapping an already protected span is skipped.
fn protected_spans(text: &str) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    for abbreviation in ABBREVIATIONS {
        for (offset, found) in text.match_indices(abbreviation) {
            let span = offset..offset + found.len();
            if !spans.iter().any(|s| s.start < span.end && span.start < s.end) {
                spans.push(span);
            }
        }
    }
    spans
}

/// Split text into trimmed sentences, in input order.
///
/// A sentence ends at `.`, `!` or `?` when whitespace and an upper-case letter
/// follow. The mark stays with the sentence it closes and the whitespace is
/// dropped. Marks inside a listed abbreviation never end a sentence. Empty or
/// whitespace-only input yields no sentences.
pub fn segment_sentences(text: &str) -> Vec<String> {
    let spans = protected_spans(text);
    let mut fragments = Vec::new();
    let mut start = 0;

    for boundary in boundary_pattern().find_iter(text) {
        let mark = boundary.start();
        if spans.iter().any(|s| s.contains(&mark)) {
            continue;
        }
        // Both the mark and the upper-case letter are single-byte ASCII
        fragments.push(&text[start..mark + 1]);
        start = boundary.end() - 1;
    }
    fragments.push(&text[start..]);

    fragments
        .into_iter()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_string)
        .collect()
}
