//! Sentence boundary detection.
//!
//! Boundaries are placed on terminal punctuation (period, question mark,
//! exclamation point, and optionally semicolons). A run of terminal
//! punctuation ("?!", "...") yields one boundary on its last mark, and
//! periods after common abbreviations ("Dr.", "Mr.") are skipped.

use std::collections::HashSet;

use layered_transcript::{x, LLCursorAssignment, LLLine, LLSelection, LRange, Resolver, TextTag};

/// A detected sentence boundary.
#[derive(Clone, PartialEq, Eq)]
pub struct SentenceBoundary {
    pub confidence: SentenceConfidence,
}

impl std::fmt::Debug for SentenceBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SentenceBoundary({:?})", self.confidence)
    }
}

/// Confidence level for a detected sentence boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentenceConfidence {
    /// Terminal punctuation followed by a capitalized word
    High,
    /// Terminal punctuation at the end of the line, or a semicolon
    Medium,
    /// Terminal punctuation followed by a lowercase word
    Low,
}

pub struct SentenceBoundaryResolver {
    abbreviations: HashSet<String>,
    /// When true, treat semicolons as sentence boundaries
    include_semicolons: bool,
}

impl SentenceBoundaryResolver {
    pub fn new() -> Self {
        let abbreviations = [
            "dr", "mr", "mrs", "ms", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "p.m",
            "a.m", "approx", "appt", "min", "hr",
        ]
        .iter()
        .map(|abbrev| abbrev.to_string())
        .collect();

        SentenceBoundaryResolver {
            abbreviations,
            include_semicolons: false,
        }
    }

    /// Enable semicolon detection as sentence boundaries.
    pub fn with_semicolons(mut self) -> Self {
        self.include_semicolons = true;
        self
    }

    pub fn with_custom_abbreviations(mut self, abbreviations: &[&str]) -> Self {
        for abbrev in abbreviations {
            self.abbreviations.insert(abbrev.to_lowercase());
        }
        self
    }

    fn is_sentence_ending_punctuation(&self, text: &str) -> bool {
        matches!(text, "." | "?" | "!" | "\u{2026}") || (self.include_semicolons && text == ";")
    }

    fn is_abbreviation(&self, text: &str) -> bool {
        let normalized = text.trim_end_matches('.').to_lowercase();
        self.abbreviations.contains(&normalized)
    }

    fn starts_with_uppercase(text: &str) -> bool {
        text.chars().next().map_or(false, |c| c.is_uppercase())
    }
}

impl Default for SentenceBoundaryResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver for SentenceBoundaryResolver {
    type Attr = SentenceBoundary;

    fn go(&self, selection: LLSelection) -> Vec<LLCursorAssignment<Self::Attr>> {
        let punctuation_matches =
            selection.find_by(&x::all((x::attr_eq(&TextTag::PUNC), x::token_text())));

        let mut assignments = Vec::new();

        for (punc_sel, (_, punc_text)) in punctuation_matches {
            if !self.is_sentence_ending_punctuation(punc_text) {
                continue;
            }

            // Only the last mark of "?!" or "..." closes the sentence
            if let Some((_, next_text)) = punc_sel.match_first_forwards(&x::token_text()) {
                if self.is_sentence_ending_punctuation(next_text) {
                    continue;
                }
            }

            if punc_text == "." {
                if let Some((_, prev_text)) = punc_sel.match_first_backwards(&x::token_text()) {
                    if self.is_abbreviation(prev_text) {
                        continue;
                    }
                }
            }

            if punc_text == ";" {
                assignments.push(punc_sel.finish_with_attr(SentenceBoundary {
                    confidence: SentenceConfidence::Medium,
                }));
                continue;
            }

            let next_word = punc_sel.after().and_then(|after_punc| {
                after_punc
                    .find_first_by(&x::all((x::attr_eq(&TextTag::WORD), x::token_text())))
                    .map(|(_, (_, word))| word)
            });

            let confidence = match next_word {
                Some(word) if Self::starts_with_uppercase(word) => SentenceConfidence::High,
                Some(_) => SentenceConfidence::Low,
                None => SentenceConfidence::Medium,
            };

            assignments.push(punc_sel.finish_with_attr(SentenceBoundary { confidence }));
        }

        assignments
    }
}

/// Token ranges of each sentence in a line that has been run through
/// [`SentenceBoundaryResolver`].
///
/// Each range ends on its closing punctuation (if any) and has outer
/// whitespace trimmed. Stretches with no word or number token, such as a
/// stray "?", are not sentences.
pub fn sentence_ranges(line: &LLLine) -> Vec<LRange> {
    let token_count = line.ll_tokens().len();
    if token_count == 0 {
        return Vec::new();
    }

    let mut ends: Vec<usize> = line
        .attrs_by::<SentenceBoundary>()
        .into_iter()
        .map(|((_, end), _)| end)
        .collect();
    if ends.last() != Some(&(token_count - 1)) {
        ends.push(token_count - 1);
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    for end in ends {
        if let Some(sentence) = line.selection_for((start, end)) {
            let has_terms = !sentence
                .find_by(&x::any_of((
                    x::attr_eq(&TextTag::WORD),
                    x::attr_eq(&TextTag::NATN),
                )))
                .is_empty();
            if has_terms {
                if let Some(trimmed) = sentence.trim(&x::whitespace()) {
                    ranges.push(trimmed.range());
                }
            }
        }
        start = end + 1;
    }
    ranges
}
