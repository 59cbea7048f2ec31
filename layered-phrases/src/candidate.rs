//! Phrase candidates and their located word spans.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Communicative function of a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhraseType {
    Question,
    Command,
    Negative,
    Statement,
}

impl PhraseType {
    pub fn name(self) -> &'static str {
        match self {
            PhraseType::Question => "question",
            PhraseType::Command => "command",
            PhraseType::Negative => "negative",
            PhraseType::Statement => "statement",
        }
    }
}

impl fmt::Display for PhraseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A contiguous stretch of transcript text worth offering as a reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseCandidate {
    /// Whitespace-normalized text as it appears in the transcript.
    pub text: String,
    #[serde(rename = "type")]
    pub phrase_type: PhraseType,
    /// Heuristic score in `[0, 1]`.
    pub confidence: f64,
}

impl PhraseCandidate {
    pub fn word_count(&self) -> usize {
        word_count(&self.text)
    }
}

/// Inclusive range of transcript word indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSpan {
    pub start_index: usize,
    pub end_index: usize,
}

impl WordSpan {
    /// Number of words covered, always at least one. An inverted span
    /// counts as one word.
    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index) + 1
    }

    /// The same span shifted right by `offset` words.
    pub fn offset_by(self, offset: usize) -> WordSpan {
        WordSpan {
            start_index: self.start_index + offset,
            end_index: self.end_index + offset,
        }
    }
}

/// A phrase resolved to the transcript words it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedPhrase {
    pub text: String,
    pub start_index: usize,
    pub end_index: usize,
    #[serde(rename = "type")]
    pub phrase_type: PhraseType,
}

impl IndexedPhrase {
    pub fn new(text: impl Into<String>, span: WordSpan, phrase_type: PhraseType) -> Self {
        IndexedPhrase {
            text: text.into(),
            start_index: span.start_index,
            end_index: span.end_index,
            phrase_type,
        }
    }

    pub fn span(&self) -> WordSpan {
        WordSpan {
            start_index: self.start_index,
            end_index: self.end_index,
        }
    }
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let candidate = PhraseCandidate {
            text: "bring me the book now".to_string(),
            phrase_type: PhraseType::Command,
            confidence: 0.6,
        };
        assert_eq!(
            serde_json::to_string(&candidate).unwrap(),
            r#"{"text":"bring me the book now","type":"command","confidence":0.6}"#
        );

        let indexed = IndexedPhrase::new(
            "see you tomorrow",
            WordSpan {
                start_index: 2,
                end_index: 4,
            },
            PhraseType::Statement,
        );
        assert_eq!(
            serde_json::to_string(&indexed).unwrap(),
            r#"{"text":"see you tomorrow","startIndex":2,"endIndex":4,"type":"statement"}"#
        );
    }

    #[test]
    fn test_span_arithmetic() {
        let span = WordSpan {
            start_index: 2,
            end_index: 4,
        };
        assert_eq!(span.len(), 3);
        assert_eq!(
            span.offset_by(30),
            WordSpan {
                start_index: 32,
                end_index: 34
            }
        );
        assert_eq!(word_count("  see  you\ttomorrow "), 3);

        let inverted = WordSpan {
            start_index: 5,
            end_index: 2,
        };
        assert_eq!(inverted.len(), 1);
    }
}
