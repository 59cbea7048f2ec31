#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Part-of-speech tagging for layered-transcript.
//!
//! ```
//! use layered_part_of_speech::{tag_text, PatternQuery};
//!
//! let line = tag_text("I will see you tomorrow").unwrap();
//! let subject_verb: PatternQuery = "(#Pronoun|#Noun) #Verb+".parse().unwrap();
//! assert_eq!(subject_verb.find_texts(&line), vec!["I will see"]);
//! ```
//!
//! ## Layers
//!
//! - [`SentenceBoundaryResolver`] marks terminal punctuation as [`SentenceBoundary`]
//! - [`POSTagResolver`] attaches one or more [`Tag`]s to every word and number
//!
//! [`PatternQuery`] then runs tag patterns over the tagged line, one sentence
//! at a time.

mod errors;
mod lexicon;
mod pattern;
mod pos_tag_resolver;
mod sentence_boundary;
mod tag;

pub use errors::{PatternError, TagError};
pub use pattern::{
    normalize_whitespace, phrase_text, PatternQuery, PatternTerm, Quantifier, TermChoice,
};
pub use pos_tag_resolver::POSTagResolver;
pub use sentence_boundary::{
    sentence_ranges, SentenceBoundary, SentenceBoundaryResolver, SentenceConfidence,
};
pub use tag::Tag;

use layered_transcript::{create_line_from_string, LLLine, TextTag};

/// Split, sentence-segment and tag `text`.
///
/// Control characters other than whitespace read as spaces. Fails only
/// when nothing but whitespace is left.
pub fn tag_text(text: &str) -> Result<LLLine, TagError> {
    let text: String = text
        .chars()
        .map(|ch| {
            if ch.is_control() && !ch.is_whitespace() {
                ' '
            } else {
                ch
            }
        })
        .collect();
    if text.trim().is_empty() {
        return Err(TagError::Empty);
    }

    Ok(create_line_from_string(text)
        .run(&SentenceBoundaryResolver::new())
        .run(&POSTagResolver::new()))
}

/// Contracted negations ("don't", "can't", "isn't") the lexicon knows.
///
/// Each stands for an implicit "not".
pub fn negated_contractions() -> impl Iterator<Item = &'static str> {
    lexicon::NEGATED_CONTRACTIONS.iter().flat_map(|words| words.iter().copied())
}

/// Whether any sentence of a tagged line reads as a question.
///
/// A sentence is a question when it ends with `?`, opens with a question
/// word, or opens with an auxiliary or copula directly followed by a
/// pronoun or determiner ("can you…", "is the…").
pub fn is_question(line: &LLLine) -> bool {
    sentence_ranges(line).into_iter().any(|(start, end)| {
        let closes_with_question_mark = line.ll_tokens()[start..=end]
            .iter()
            .rev()
            .find(|token| token.tag() != TextTag::SPACE)
            .map_or(false, |token| token.text() == "?");
        if closes_with_question_mark {
            return true;
        }

        let words: Vec<Vec<Tag>> = line.ll_tokens()[start..=end]
            .iter()
            .filter(|token| matches!(token.tag(), TextTag::WORD | TextTag::NATN))
            .take(2)
            .map(|token| {
                let idx = token.token_idx();
                line.attrs_at::<Tag>((idx, idx)).copied().collect()
            })
            .collect();

        match words.as_slice() {
            [first, ..] if first.contains(&Tag::QuestionWord) => true,
            [first, second] => {
                (first.contains(&Tag::Auxiliary) || first.contains(&Tag::Copula))
                    && (second.contains(&Tag::Pronoun) || second.contains(&Tag::Determiner))
            }
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    mod patterns;
    mod questions;
}
