//! Config schema and deserialization

use serde::Deserialize;
use std::path::Path;

/// Sentences scoring below this are reported as hard to read
pub const DEFAULT_SENTENCE_THRESHOLD: u8 = 30;

/// Upper bound of a Flesch score threshold
const MAX_SCORE: u8 = 100;

/// Per-path override configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverride {
    /// Glob patterns this override applies to
    pub files: Vec<String>,

    /// Optional threshold override for matched files
    #[serde(default)]
    pub threshold: Option<u8>,

    /// Optional sentence threshold override for matched files
    #[serde(default)]
    pub sentence_threshold: Option<u8>,
}

/// Root config structure for .legiblerc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Minimum Flesch score (exit 1 if any text is below). Default: none
    #[serde(default)]
    pub threshold: Option<u8>,

    /// File name suffixes collected when walking a directory
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Glob patterns for files/directories to exclude from analysis
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Per-sentence score under which a sentence is flagged
    #[serde(default)]
    pub sentence_threshold: Option<u8>,

    /// Per-path configuration overrides
    #[serde(default)]
    pub overrides: Vec<ConfigOverride>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_threshold: Option<u8>) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        self
    }

    /// Effective config for text that has no path (stdin)
    pub fn effective(&self) -> EffectiveConfig {
        EffectiveConfig {
            threshold: self.threshold,
            sentence_threshold: self
                .sentence_threshold
                .unwrap_or(DEFAULT_SENTENCE_THRESHOLD),
        }
    }

    /// Get effective config for a specific file path, applying overrides
    pub fn effective_for_file(&self, file_path: &Path) -> EffectiveConfig {
        let mut effective = self.effective();

        // Apply matching overrides in order
        for override_cfg in &self.overrides {
            if Self::matches_override(file_path, &override_cfg.files) {
                if let Some(threshold) = override_cfg.threshold {
                    effective.threshold = Some(threshold);
                }
                if let Some(sentence_threshold) = override_cfg.sentence_threshold {
                    effective.sentence_threshold = sentence_threshold;
                }
            }
        }

        effective
    }

    /// Check if a file path matches any of the override patterns
    fn matches_override(file_path: &Path, patterns: &[String]) -> bool {
        patterns.iter().any(|pattern| match globset::Glob::new(pattern) {
            Ok(glob) => glob.compile_matcher().is_match(file_path),
            Err(e) => {
                log::warn!("ignoring invalid override pattern {}: {}", pattern, e);
                false
            }
        })
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        // Base values are overridden by this config's values
        if self.threshold.is_none() {
            self.threshold = base.threshold;
        }
        if self.sentence_threshold.is_none() {
            self.sentence_threshold = base.sentence_threshold;
        }
        if self.extends.is_none() {
            self.extends = base.extends;
        }

        if self.extensions.is_empty() {
            self.extensions = base.extensions;
        }

        // Merge ignore patterns
        let mut all_ignores = base.ignore;
        all_ignores.append(&mut self.ignore);
        self.ignore = all_ignores;

        // Prepend base overrides
        let mut all_overrides = base.overrides;
        all_overrides.append(&mut self.overrides);
        self.overrides = all_overrides;
    }

    /// Reject scores outside the 0-100 Flesch range
    pub fn validate(&self) -> anyhow::Result<()> {
        check_score("threshold", self.threshold)?;
        check_score("sentenceThreshold", self.sentence_threshold)?;
        for (i, override_cfg) in self.overrides.iter().enumerate() {
            check_score(&format!("overrides[{}].threshold", i), override_cfg.threshold)?;
            check_score(
                &format!("overrides[{}].sentenceThreshold", i),
                override_cfg.sentence_threshold,
            )?;
        }
        Ok(())
    }

    /// Get file name suffixes to collect, falling back to common prose formats
    pub fn get_extensions(&self) -> Vec<&str> {
        if self.extensions.is_empty() {
            vec![".txt", ".md", ".markdown", ".text"]
        } else {
            self.extensions.iter().map(|s| s.as_str()).collect()
        }
    }
}

fn check_score(field: &str, value: Option<u8>) -> anyhow::Result<()> {
    match value {
        Some(v) if v > MAX_SCORE => {
            anyhow::bail!("{} must be between 0 and {}, got {}", field, MAX_SCORE, v)
        }
        _ => Ok(()),
    }
}

/// Effective configuration for a specific file (after applying overrides)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub threshold: Option<u8>,
    pub sentence_threshold: u8,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            threshold: None,
            sentence_threshold: DEFAULT_SENTENCE_THRESHOLD,
        }
    }
}
