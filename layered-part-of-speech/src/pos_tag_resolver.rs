//! Lexicon-driven part-of-speech tagging.
//!
//! Each word is looked up in the built-in lexicon; unknown words are guessed
//! from their shape. Ambiguous noun/verb words ("call", "walk") read as
//! nouns after a determiner, possessive or adjective. Every tag is emitted
//! together with its ancestors, so a single token usually carries several
//! [`Tag`] attributes.

use layered_transcript::{x, LLCursorAssignment, LLSelection, Resolver, TextTag};

use crate::lexicon::{self, NOUN_VERBS, POSSESSIVES};
use crate::Tag;

#[derive(Debug, Clone, Default)]
pub struct POSTagResolver;

impl POSTagResolver {
    pub fn new() -> Self {
        Self
    }
}

/// Lowercase and fold typographic apostrophes so "Don’t" finds "don't".
pub(crate) fn normalize_word(text: &str) -> String {
    text.to_lowercase().replace('\u{2019}', "'")
}

/// The nearest non-whitespace token before `sel`, if any.
fn previous_non_space<'l>(sel: &LLSelection<'l>) -> Option<&'l str> {
    let mut current = *sel;
    while let Some((extended, text)) = current.match_first_backwards(&x::token_text()) {
        if !text.trim().is_empty() {
            return Some(text);
        }
        current = extended;
    }
    None
}

fn is_sentence_initial(sel: &LLSelection) -> bool {
    match previous_non_space(sel) {
        None => true,
        Some(prev) => matches!(prev, "." | "?" | "!"),
    }
}

fn noun_context(prev: &str) -> bool {
    let lower = normalize_word(prev);
    POSSESSIVES.contains(&lower.as_str())
        || lexicon::lookup(&lower).map_or(false, |tags| {
            tags.contains(&Tag::Determiner) || tags.contains(&Tag::Adjective)
        })
}

impl POSTagResolver {
    fn word_tags(&self, sel: &LLSelection, text: &str) -> Vec<Tag> {
        let lower = normalize_word(text);

        let base: Vec<Tag> = match lexicon::lookup(&lower) {
            Some(tags) => {
                if NOUN_VERBS.contains(&lower.as_str())
                    && previous_non_space(sel).map_or(false, noun_context)
                {
                    vec![Tag::Noun]
                } else {
                    tags.to_vec()
                }
            }
            None => vec![lexicon::guess(text, is_sentence_initial(sel))],
        };

        let mut tags = Vec::new();
        for tag in base.into_iter().flat_map(Tag::with_ancestors) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }
}

impl Resolver for POSTagResolver {
    type Attr = Tag;

    fn go(&self, sel: LLSelection) -> Vec<LLCursorAssignment<Self::Attr>> {
        let mut assignments = Vec::new();

        for (word_sel, (_, text)) in
            sel.find_by(&x::all((x::attr_eq(&TextTag::WORD), x::token_text())))
        {
            for tag in self.word_tags(&word_sel, text) {
                assignments.push(word_sel.finish_with_attr(tag));
            }
        }

        for (num_sel, _) in sel.find_by(&x::attr_eq(&TextTag::NATN)) {
            assignments.push(num_sel.finish_with_attr(Tag::Value));
        }

        assignments
    }
}
