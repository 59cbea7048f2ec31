//! The tagging capability the extractor is written against.

use layered_part_of_speech::{phrase_text, sentence_ranges, tag_text, PatternQuery, TagError};
use layered_transcript::LLLine;

/// Everything the extractor needs from a part-of-speech tagger.
///
/// Implementations must be deterministic: tagging the same text twice yields
/// the same sentences and matches.
pub trait Tagger {
    type Tagged;
    type Error: std::error::Error + Send + Sync + 'static;

    fn tag(&self, text: &str) -> Result<Self::Tagged, Self::Error>;

    /// Text of each sentence, in order.
    fn sentences(&self, tagged: &Self::Tagged) -> Vec<String>;

    /// Text of each match of `query`, left to right, never overlapping.
    fn matches(&self, tagged: &Self::Tagged, query: &PatternQuery) -> Vec<String>;

    fn found(&self, tagged: &Self::Tagged, query: &PatternQuery) -> bool {
        !self.matches(tagged, query).is_empty()
    }

    fn is_question(&self, tagged: &Self::Tagged) -> bool;
}

/// [`Tagger`] backed by the lexicon tagger of `layered-part-of-speech`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosTagger;

impl PosTagger {
    pub fn new() -> Self {
        PosTagger
    }
}

impl Tagger for PosTagger {
    type Tagged = LLLine;
    type Error = TagError;

    fn tag(&self, text: &str) -> Result<LLLine, TagError> {
        tag_text(text)
    }

    fn sentences(&self, line: &LLLine) -> Vec<String> {
        sentence_ranges(line)
            .into_iter()
            .map(|range| phrase_text(line, range))
            .collect()
    }

    fn matches(&self, line: &LLLine, query: &PatternQuery) -> Vec<String> {
        query.find_texts(line)
    }

    fn found(&self, line: &LLLine, query: &PatternQuery) -> bool {
        query.is_found(line)
    }

    fn is_question(&self, line: &LLLine) -> bool {
        layered_part_of_speech::is_question(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_and_matches() {
        let tagger = PosTagger::new();
        let line = tagger.tag("Where did you put the keys? Bring me the keys.").unwrap();
        assert_eq!(
            tagger.sentences(&line),
            vec!["Where did you put the keys?", "Bring me the keys."]
        );

        let imperative: PatternQuery = "#Verb #Noun+".parse().unwrap();
        assert_eq!(tagger.matches(&line, &imperative), vec!["did you", "Bring me"]);
        assert!(tagger.found(&line, &imperative));
        assert!(tagger.is_question(&line));
    }

    #[test]
    fn test_refuses_blank_text() {
        assert_eq!(PosTagger.tag(" \n ").unwrap_err(), TagError::Empty);
    }
}
