#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Reply phrases for assistive communication.
//!
//! A transcript of what was said to the user goes in; short phrases the user
//! might want to answer with come out, ranked and located by word index so
//! they can be highlighted in place.
//!
//! ```
//! use layered_phrases::{extract_phrases, index_phrases, PhraseType};
//!
//! let transcript = "Where did you put the keys? Bring me the keys.";
//! let phrases = extract_phrases(transcript).unwrap();
//! assert_eq!(phrases[0].text, "Where did you put the keys?");
//! assert_eq!(phrases[0].phrase_type, PhraseType::Question);
//!
//! let indexed = index_phrases(transcript, &phrases);
//! assert_eq!((indexed[0].start_index, indexed[0].end_index), (0, 5));
//! ```
//!
//! [`PhraseExtractor`] works against any [`Tagger`]; [`PosTagger`] wraps the
//! lexicon tagger from `layered-part-of-speech`.

mod candidate;
mod config;
mod errors;
mod extractor;
mod locator;
pub mod rules;
mod tagger;

pub use candidate::{word_count, IndexedPhrase, PhraseCandidate, PhraseType, WordSpan};
pub use config::ExtractorConfig;
pub use errors::{ConfigError, FragmentError};
pub use extractor::PhraseExtractor;
pub use locator::{index_phrases, locate, parse_fragments, PageWindow, DEFAULT_WORDS_PER_PAGE};
pub use tagger::{PosTagger, Tagger};

pub use layered_part_of_speech::TagError;

/// Extract phrases with the bundled tagger and default settings.
pub fn extract_phrases(transcript: &str) -> Result<Vec<PhraseCandidate>, TagError> {
    PhraseExtractor::new().extract(transcript)
}

#[cfg(test)]
mod tests {
    mod mock_tagger;
    mod properties;
    mod scenarios;
}
