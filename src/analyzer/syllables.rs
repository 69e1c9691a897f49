//! Syllable estimation by an ordered cascade of spelling rules.
//!
//! Each rule looks at the lower-cased word and bumps one of three counters.
//! The estimate is `vowels - discard + add`. No floor is applied, so a word
//! full of vowel clusters can come out at zero or below; callers sum the raw
//! values.

use regex::Regex;
use std::sync::OnceLock;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Words ending in "le" whose final "e" is still silent
const SILENT_LE_WORDS: [&str; 12] = [
    "whole", "mobile", "pole", "male", "female", "hale", "pale", "tale", "sale", "aisle", "whale",
    "while",
];

const CO_TWO_SYLLABLE_PREFIXES: [&str; 3] = ["coapt", "coed", "coinci"];

const CO_ONE_SYLLABLE_PREFIXES: [&str; 14] = [
    "cool", "coach", "coat", "coal", "count", "coin", "coarse", "coup", "coif", "cook", "coign",
    "coiffe", "coof", "court",
];

const PRE_ONE_SYLLABLE_PREFIX: &str = "preach";

const NEGATIVE_CONTRACTIONS: [&str; 5] = ["doesn't", "isn't", "shouldn't", "couldn't", "wouldn't"];

/// Endings exempt from the trailing "es"/"ed" discard
const KEPT_ES_ED_ENDINGS: [&str; 5] = ["ted", "tes", "ses", "ied", "ies"];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

fn vowel_pair_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[aeiou][aeiou]").unwrap())
}

fn vowel_triple_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[aeiou][aeiou][aeiou]").unwrap())
}

fn vowel_consonant_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[aeiou][^aeiou]").unwrap())
}

/// Leftmost, non-overlapping match count
fn count_matches(pattern: &Regex, word: &str) -> i32 {
    pattern.find_iter(word).count() as i32
}

/// Running counters shared by every rule
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyllableTally {
    pub vowels: i32,
    pub add: i32,
    pub discard: i32,
}

impl SyllableTally {
    pub fn estimate(&self) -> i32 {
        self.vowels - self.discard + self.add
    }
}

/// The word being estimated, lower-cased, with its characters split out
/// for positional checks
pub struct Word<'a> {
    pub text: &'a str,
    chars: Vec<char>,
}

impl<'a> Word<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.chars().collect(),
        }
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    fn vowel_at(&self, index: usize) -> bool {
        self.char_at(index).is_some_and(is_vowel)
    }
}

/// A single step of the cascade
pub type SyllableRule = fn(&Word<'_>, &mut SyllableTally);

/// The cascade, in application order. Reordering changes the estimates.
pub const RULES: [(&str, SyllableRule); 13] = [
    ("trailing-es-ed", trailing_es_ed),
    ("trailing-silent-e", trailing_silent_e),
    ("vowel-clusters", vowel_clusters),
    ("base-vowels", base_vowels),
    ("mc-prefix", mc_prefix),
    ("trailing-y", trailing_y),
    ("internal-y", internal_y),
    ("tri-bi-prefix", tri_bi_prefix),
    ("ian-suffix", ian_suffix),
    ("co-prefix", co_prefix),
    ("pre-prefix", pre_prefix),
    ("negative-contraction", negative_contraction),
    ("exception-words", exception_words),
];

fn trailing_es_ed(word: &Word<'_>, tally: &mut SyllableTally) {
    let text = word.text;
    if !(text.ends_with("es") || text.ends_with("ed")) {
        return;
    }
    let clustered = count_matches(vowel_pair_pattern(), text) > 1
        || count_matches(vowel_consonant_pattern(), text) > 1;
    if clustered && !KEPT_ES_ED_ENDINGS.iter().any(|e| text.ends_with(e)) {
        tally.discard += 1;
    }
}

fn trailing_silent_e(word: &Word<'_>, tally: &mut SyllableTally) {
    let text = word.text;
    if !text.ends_with('e') {
        return;
    }
    let sounded_le = text.ends_with("le") && !SILENT_LE_WORDS.contains(&text);
    if !sounded_le {
        tally.discard += 1;
    }
}

// A triple is counted once by each scan.
fn vowel_clusters(word: &Word<'_>, tally: &mut SyllableTally) {
    tally.discard += count_matches(vowel_pair_pattern(), word.text);
    tally.discard += count_matches(vowel_triple_pattern(), word.text);
}

fn base_vowels(word: &Word<'_>, tally: &mut SyllableTally) {
    tally.vowels = word.chars.iter().filter(|c| is_vowel(**c)).count() as i32;
}

fn mc_prefix(word: &Word<'_>, tally: &mut SyllableTally) {
    if word.text.starts_with("mc") {
        tally.add += 1;
    }
}

fn trailing_y(word: &Word<'_>, tally: &mut SyllableTally) {
    let len = word.chars.len();
    if len >= 2 && word.chars[len - 1] == 'y' && !is_vowel(word.chars[len - 2]) {
        tally.add += 1;
    }
}

fn internal_y(word: &Word<'_>, tally: &mut SyllableTally) {
    let len = word.chars.len();
    for i in 1..len.saturating_sub(1) {
        if word.chars[i] == 'y' && !is_vowel(word.chars[i - 1]) && !is_vowel(word.chars[i + 1]) {
            tally.add += 1;
        }
    }
}

fn tri_bi_prefix(word: &Word<'_>, tally: &mut SyllableTally) {
    if word.text.starts_with("tri") && word.vowel_at(3) {
        tally.add += 1;
    }
    if word.text.starts_with("bi") && word.vowel_at(2) {
        tally.add += 1;
    }
}

fn ian_suffix(word: &Word<'_>, tally: &mut SyllableTally) {
    let text = word.text;
    if text.ends_with("ian") && !(text.ends_with("cian") || text.ends_with("tian")) {
        tally.add += 1;
    }
}

fn co_prefix(word: &Word<'_>, tally: &mut SyllableTally) {
    let text = word.text;
    if !(text.starts_with("co") && word.vowel_at(2)) {
        return;
    }
    if CO_TWO_SYLLABLE_PREFIXES.iter().any(|p| text.starts_with(p)) {
        tally.add += 1;
    } else if CO_ONE_SYLLABLE_PREFIXES.iter().any(|p| text.starts_with(p)) {
        // "coach", "court": the vowel pair is one syllable
    } else {
        tally.add += 1;
    }
}

fn pre_prefix(word: &Word<'_>, tally: &mut SyllableTally) {
    let text = word.text;
    if text.starts_with("pre") && word.vowel_at(3) && !text.starts_with(PRE_ONE_SYLLABLE_PREFIX) {
        tally.add += 1;
    }
}

fn negative_contraction(word: &Word<'_>, tally: &mut SyllableTally) {
    if word.text.ends_with("n't") && NEGATIVE_CONTRACTIONS.contains(&word.text) {
        tally.add += 1;
    }
}

fn exception_words(word: &Word<'_>, tally: &mut SyllableTally) {
    match word.text {
        "fortunately" | "unfortunately" => tally.discard += 1,
        "serious" | "crucial" => tally.add += 1,
        _ => {}
    }
}

/// Run the cascade and return the counters. Words of three characters or
/// fewer skip the cascade and count as one vowel.
pub fn tally_syllables(word: &str) -> SyllableTally {
    let lower = word.to_lowercase();
    let word = Word::new(&lower);
    let mut tally = SyllableTally::default();

    if word.chars.len() <= 3 {
        tally.vowels = 1;
        return tally;
    }

    for (_, rule) in RULES.iter() {
        rule(&word, &mut tally);
    }
    tally
}

/// Estimate the syllable count of one word. May be zero or negative.
pub fn estimate_syllables(word: &str) -> i32 {
    tally_syllables(word).estimate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_words_are_one_syllable() {
        assert_eq!(estimate_syllables("cat"), 1);
        assert_eq!(estimate_syllables("a"), 1);
        assert_eq!(estimate_syllables(""), 1);
        assert_eq!(estimate_syllables("eye"), 1);
        assert_eq!(estimate_syllables("Ooo"), 1);
    }

    #[test]
    fn test_input_is_lowercased() {
        assert_eq!(estimate_syllables("McDonald"), estimate_syllables("mcdonald"));
        assert_eq!(estimate_syllables("TABLE"), 2);
    }

    #[test]
    fn test_mc_prefix_bonus() {
        // o, a plus the "mc" bonus
        assert_eq!(estimate_syllables("mcdonald"), 3);
        let tally = tally_syllables("mcdonald");
        assert_eq!(tally.add, 1);
    }

    #[test]
    fn test_fortunately_exception_discard() {
        let tally = tally_syllables("fortunately");
        assert_eq!(tally.vowels, 4);
        assert_eq!(tally.discard, 1);
        assert_eq!(estimate_syllables("fortunately"), 4);
        assert_eq!(estimate_syllables("unfortunately"), 5);
    }

    #[test]
    fn test_serious_and_crucial_bonus() {
        assert_eq!(estimate_syllables("serious"), 3);
        assert_eq!(estimate_syllables("crucial"), 3);
    }

    #[test]
    fn test_trailing_e() {
        assert_eq!(estimate_syllables("cake"), 1);
        assert_eq!(estimate_syllables("table"), 2);
        // listed "le" words keep the silent e
        assert_eq!(estimate_syllables("whole"), 1);
        assert_eq!(estimate_syllables("female"), 2);
    }

    #[test]
    fn test_trailing_es_ed() {
        assert_eq!(estimate_syllables("jumped"), 1);
        assert_eq!(estimate_syllables("wanted"), 2);
        assert_eq!(estimate_syllables("horses"), 2);
    }

    #[test]
    fn test_triple_vowel_counted_by_both_scans() {
        // "eau" is one pair match and one triple match
        let tally = tally_syllables("beautiful");
        assert_eq!(tally.discard, 2);
        assert_eq!(estimate_syllables("beautiful"), 3);
    }

    #[test]
    fn test_estimate_is_not_floored() {
        // four vowels, silent e, two pairs and one triple
        let tally = tally_syllables("queue");
        assert_eq!(tally.vowels, 4);
        assert_eq!(tally.discard, 4);
        assert_eq!(estimate_syllables("queue"), 0);
    }

    #[test]
    fn test_y_rules() {
        assert_eq!(estimate_syllables("happy"), 2);
        assert_eq!(estimate_syllables("rhythm"), 1);
        assert_eq!(estimate_syllables("toy"), 1);
        // "y" after a vowel adds nothing
        assert_eq!(estimate_syllables("monkey"), 2);
    }

    #[test]
    fn test_tri_and_bi_prefixes() {
        assert_eq!(estimate_syllables("triangle"), 3);
        assert_eq!(estimate_syllables("biology"), 4);
        assert_eq!(tally_syllables("tribe").add, 0);
    }

    #[test]
    fn test_ian_suffix() {
        assert_eq!(estimate_syllables("canadian"), 4);
        assert_eq!(estimate_syllables("musician"), 3);
        assert_eq!(tally_syllables("martian").add, 0);
    }

    #[test]
    fn test_co_prefix() {
        assert_eq!(estimate_syllables("coordinate"), 4);
        assert_eq!(estimate_syllables("coach"), 1);
        assert_eq!(tally_syllables("coapted").add, 1);
        assert_eq!(tally_syllables("coincide").add, 1);
        assert_eq!(tally_syllables("court").add, 0);
        assert_eq!(tally_syllables("cobalt").add, 0);
    }

    #[test]
    fn test_pre_prefix() {
        assert_eq!(estimate_syllables("preorder"), 3);
        assert_eq!(estimate_syllables("preach"), 1);
        assert_eq!(tally_syllables("preacher").add, 0);
        assert_eq!(tally_syllables("prevent").add, 0);
    }

    #[test]
    fn test_negative_contractions() {
        assert_eq!(estimate_syllables("doesn't"), 2);
        assert_eq!(tally_syllables("wouldn't").add, 1);
        // not in the list
        assert_eq!(tally_syllables("haven't").add, 0);
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let names: Vec<&str> = RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.first(), Some(&"trailing-es-ed"));
        assert_eq!(names.last(), Some(&"exception-words"));
        assert_eq!(names.len(), 13);
    }
}
