//! Extractor tunables.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Word bounds, confidence weights and negation vocabulary used by
/// [`PhraseExtractor`](crate::PhraseExtractor).
///
/// Loaded from RON; fields left out take their defaults:
///
/// ```
/// use layered_phrases::ExtractorConfig;
///
/// let config = ExtractorConfig::from_ron_string("(max_words: 12)").unwrap();
/// assert_eq!(config.max_words, 12);
/// assert_eq!(config.min_words, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Fewest words a kept phrase may have
    pub min_words: usize,
    /// Most words a kept phrase may have
    pub max_words: usize,
    pub base_confidence: f64,
    /// Added for a subject followed by a verb
    pub structure_bonus: f64,
    /// Added when the phrase opens with a question word
    pub question_word_bonus: f64,
    /// Added when the phrase opens with a verb
    pub imperative_bonus: f64,
    /// Subtracted below `short_phrase_words`
    pub short_penalty: f64,
    pub short_phrase_words: usize,
    /// Subtracted above `long_phrase_words`
    pub long_penalty: f64,
    pub long_phrase_words: usize,
    /// Words that mark a phrase as negative
    pub negation_words: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_words: 3,
            max_words: 15,
            base_confidence: 0.5,
            structure_bonus: 0.2,
            question_word_bonus: 0.2,
            imperative_bonus: 0.1,
            short_penalty: 0.2,
            short_phrase_words: 3,
            long_penalty: 0.1,
            long_phrase_words: 10,
            negation_words: ["no", "not", "never", "none"]
                .iter()
                .map(|word| word.to_string())
                .collect(),
        }
    }
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_word_bounds(mut self, min_words: usize, max_words: usize) -> Self {
        self.min_words = min_words;
        self.max_words = max_words;
        self
    }

    pub fn with_base_confidence(mut self, base_confidence: f64) -> Self {
        self.base_confidence = base_confidence;
        self
    }

    pub fn with_negation_words(mut self, words: &[&str]) -> Self {
        self.negation_words = words.iter().map(|word| word.to_lowercase()).collect();
        self
    }

    /// Deserialize from a RON string and validate.
    pub fn from_ron_string(s: &str) -> Result<Self, ConfigError> {
        let config: ExtractorConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a RON string.
    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_words > self.max_words {
            return Err(ConfigError::InvertedBounds {
                min: self.min_words,
                max: self.max_words,
            });
        }

        check_range("base_confidence", self.base_confidence, 0.0, 1.0)?;
        for &(name, value) in [
            ("structure_bonus", self.structure_bonus),
            ("question_word_bonus", self.question_word_bonus),
            ("imperative_bonus", self.imperative_bonus),
            ("short_penalty", self.short_penalty),
            ("long_penalty", self.long_penalty),
        ]
        .iter()
        {
            check_range(name, value, -1.0, 1.0)?;
        }
        Ok(())
    }
}

fn check_range(name: &'static str, value: f64, low: f64, high: f64) -> Result<(), ConfigError> {
    if value >= low && value <= high {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            low,
            high,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!((config.min_words, config.max_words), (3, 15));
        assert_eq!(config.negation_words, vec!["no", "not", "never", "none"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ron_round_trip_keeps_overrides() {
        let config = ExtractorConfig::new()
            .with_word_bounds(4, 8)
            .with_negation_words(&["Nope", "never"]);
        let ron = config.to_ron_string().unwrap();
        assert_eq!(ExtractorConfig::from_ron_string(&ron).unwrap(), config);
    }

    #[test]
    fn test_ron_partial_and_named() {
        let config =
            ExtractorConfig::from_ron_string("ExtractorConfig(long_phrase_words: 8, long_penalty: 0.3)")
                .unwrap();
        assert_eq!(config.long_phrase_words, 8);
        assert!((config.long_penalty - 0.3).abs() < 1e-9);
        assert!((config.base_confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_invalid_configs() {
        assert!(matches!(
            ExtractorConfig::from_ron_string("(min_words: 9, max_words: 4)"),
            Err(ConfigError::InvertedBounds { min: 9, max: 4 })
        ));
        assert!(matches!(
            ExtractorConfig::from_ron_string("(base_confidence: 1.5)"),
            Err(ConfigError::OutOfRange {
                name: "base_confidence",
                ..
            })
        ));
        assert!(matches!(
            ExtractorConfig::from_ron_string("(imperative_bonus: -2.0)"),
            Err(ConfigError::OutOfRange {
                name: "imperative_bonus",
                ..
            })
        ));
        assert!(matches!(
            ExtractorConfig::from_ron_string("(min_words: \"three\")"),
            Err(ConfigError::Ron(_))
        ));
    }
}
