//! Tag patterns: a small query language over tagged words.
//!
//! ```text
//! (#Pronoun|#Noun) #Verb+        subject followed by one or more verbs
//! ^(#QuestionWord|#Modal)        sentence starts with a question word or modal
//! #Verb #Noun?                   a verb, optionally followed by a noun
//! (no|not|never)                 one of these literal words
//! ```
//!
//! Terms are separated by whitespace. `#Name` matches a [`Tag`] (including
//! tags inherited through the hierarchy), a bare word matches that word
//! case-insensitively, `(a|b)` matches any alternative, and a trailing `?`
//! or `+` makes a term optional or repeatable. A leading `^` anchors the
//! pattern to the start of a sentence.
//!
//! Only word and number tokens are terms: whitespace and punctuation between
//! them are skipped, and matches never cross a sentence boundary. Matching is
//! greedy with backtracking; within a sentence, matches are reported left to
//! right without overlapping.

use std::fmt;
use std::str::FromStr;

use layered_transcript::{x, LLLine, LRange, TextTag};

use crate::errors::PatternError;
use crate::pos_tag_resolver::normalize_word;
use crate::sentence_boundary::sentence_ranges;
use crate::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    One,
    Optional,
    OneOrMore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermChoice {
    Tag(Tag),
    /// Lowercased literal word
    Word(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTerm {
    choices: Vec<TermChoice>,
    quantifier: Quantifier,
}

impl PatternTerm {
    pub fn tag(tag: Tag) -> Self {
        Self::any_of(vec![TermChoice::Tag(tag)])
    }

    pub fn word(word: &str) -> Self {
        Self::any_of(vec![TermChoice::Word(normalize_word(word))])
    }

    pub fn any_of(choices: Vec<TermChoice>) -> Self {
        PatternTerm {
            choices,
            quantifier: Quantifier::One,
        }
    }

    pub fn optional(mut self) -> Self {
        self.quantifier = Quantifier::Optional;
        self
    }

    pub fn one_or_more(mut self) -> Self {
        self.quantifier = Quantifier::OneOrMore;
        self
    }

    pub fn choices(&self) -> &[TermChoice] {
        &self.choices
    }

    pub fn quantifier(&self) -> Quantifier {
        self.quantifier
    }

    fn accepts(&self, word: &Word) -> bool {
        self.choices.iter().any(|choice| match choice {
            TermChoice::Tag(tag) => word.tags.contains(tag),
            TermChoice::Word(text) => word.lower == *text,
        })
    }
}

/// A parsed tag pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternQuery {
    anchored: bool,
    terms: Vec<PatternTerm>,
}

/// A word or number token of a tagged line, with its tags.
struct Word {
    idx: usize,
    lower: String,
    tags: Vec<Tag>,
}

impl PatternQuery {
    pub fn new(terms: Vec<PatternTerm>) -> Self {
        PatternQuery {
            anchored: false,
            terms,
        }
    }

    /// Only match at the start of a sentence.
    pub fn anchored(mut self) -> Self {
        self.anchored = true;
        self
    }

    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    pub fn terms(&self) -> &[PatternTerm] {
        &self.terms
    }

    /// Token ranges of every match, sentence by sentence.
    ///
    /// Each range starts on the first matched word and ends on the last.
    pub fn find_ranges(&self, line: &LLLine) -> Vec<LRange> {
        let mut found = Vec::new();
        for sentence in sentence_ranges(line) {
            let words = words_in(line, sentence);
            let mut start = 0;
            while start < words.len() {
                match self.match_at(&words, start) {
                    Some(end) if end > start => {
                        found.push((words[start].idx, words[end - 1].idx));
                        start = end;
                    }
                    _ => start += 1,
                }
                if self.anchored {
                    break;
                }
            }
        }
        found
    }

    /// Text of every match, with attached punctuation and normalized spacing.
    pub fn find_texts(&self, line: &LLLine) -> Vec<String> {
        self.find_ranges(line)
            .into_iter()
            .map(|range| phrase_text(line, range))
            .collect()
    }

    /// Whether the pattern matches anywhere in the line.
    pub fn is_found(&self, line: &LLLine) -> bool {
        sentence_ranges(line).into_iter().any(|sentence| {
            let words = words_in(line, sentence);
            let starts = if self.anchored {
                words.len().min(1)
            } else {
                words.len()
            };
            (0..starts).any(|start| matches!(self.match_at(&words, start), Some(end) if end > start))
        })
    }

    fn match_at(&self, words: &[Word], start: usize) -> Option<usize> {
        match_terms(&self.terms, words, start)
    }
}

/// Greedy match of `terms` against `words[at..]`, returning the exclusive end.
fn match_terms(terms: &[PatternTerm], words: &[Word], at: usize) -> Option<usize> {
    let (term, rest) = match terms.split_first() {
        Some(split) => split,
        None => return Some(at),
    };

    match term.quantifier {
        Quantifier::One => {
            if at < words.len() && term.accepts(&words[at]) {
                match_terms(rest, words, at + 1)
            } else {
                None
            }
        }
        Quantifier::Optional => {
            if at < words.len() && term.accepts(&words[at]) {
                if let Some(end) = match_terms(rest, words, at + 1) {
                    return Some(end);
                }
            }
            match_terms(rest, words, at)
        }
        Quantifier::OneOrMore => {
            let run = words[at.min(words.len())..]
                .iter()
                .take_while(|word| term.accepts(word))
                .count();
            (1..=run)
                .rev()
                .find_map(|len| match_terms(rest, words, at + len))
        }
    }
}

fn words_in(line: &LLLine, range: LRange) -> Vec<Word> {
    let sel = match line.selection_for(range) {
        Some(sel) => sel,
        None => return Vec::new(),
    };
    sel.find_by(&x::all((
        x::any_of((x::attr_eq(&TextTag::WORD), x::attr_eq(&TextTag::NATN))),
        x::token_text(),
    )))
    .into_iter()
    .map(|(word_sel, (_, text))| {
        let idx = word_sel.start_idx();
        Word {
            idx,
            lower: normalize_word(text),
            tags: line.attrs_at::<Tag>((idx, idx)).copied().collect(),
        }
    })
    .collect()
}

/// Source text of `range`, widened over punctuation touching either end
/// ("me?" rather than "me"), with whitespace runs collapsed to one space.
pub fn phrase_text(line: &LLLine, range: LRange) -> String {
    let tokens = line.ll_tokens();
    let attached = |idx: usize| {
        matches!(
            tokens.get(idx).map(|t| t.tag()),
            Some(TextTag::PUNC) | Some(TextTag::SYMB)
        )
    };

    let (mut start, mut end) = range;
    while start > 0 && attached(start - 1) {
        start -= 1;
    }
    while attached(end + 1) {
        end += 1;
    }

    normalize_whitespace(line.text_of((start, end)))
}

pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl FromStr for PatternQuery {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut anchored = false;
        let mut terms = Vec::new();

        for (i, raw) in s.split_whitespace().enumerate() {
            let mut body = raw;
            if let Some(rest) = body.strip_prefix('^') {
                if i != 0 {
                    return Err(PatternError::MisplacedAnchor(raw.to_string()));
                }
                anchored = true;
                body = rest;
            }

            let quantifier = if let Some(rest) = body.strip_suffix('+') {
                body = rest;
                Quantifier::OneOrMore
            } else if let Some(rest) = body.strip_suffix('?') {
                body = rest;
                Quantifier::Optional
            } else {
                Quantifier::One
            };

            let alternatives = if let Some(inner) = body.strip_prefix('(') {
                inner
                    .strip_suffix(')')
                    .ok_or_else(|| PatternError::UnbalancedGroup(raw.to_string()))?
            } else {
                body
            };
            if alternatives.contains(|c: char| matches!(c, '(' | ')' | '^'))
                || (alternatives.contains('|') && !body.starts_with('('))
            {
                return Err(PatternError::UnbalancedGroup(raw.to_string()));
            }

            let choices = alternatives
                .split('|')
                .map(|alt| parse_choice(alt, raw))
                .collect::<Result<Vec<_>, _>>()?;

            terms.push(PatternTerm {
                choices,
                quantifier,
            });
        }

        if terms.is_empty() {
            return Err(PatternError::Empty);
        }

        Ok(PatternQuery { anchored, terms })
    }
}

fn parse_choice(alt: &str, raw: &str) -> Result<TermChoice, PatternError> {
    if alt.is_empty() {
        return Err(PatternError::EmptyAlternative(raw.to_string()));
    }
    match alt.strip_prefix('#') {
        Some(name) => name
            .parse::<Tag>()
            .map(TermChoice::Tag)
            .map_err(PatternError::UnknownTag),
        None => Ok(TermChoice::Word(normalize_word(alt))),
    }
}

impl fmt::Display for TermChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermChoice::Tag(tag) => write!(f, "#{}", tag),
            TermChoice::Word(word) => f.write_str(word),
        }
    }
}

impl fmt::Display for PatternTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.choices.len() == 1 {
            write!(f, "{}", self.choices[0])?;
        } else {
            let alternatives: Vec<String> = self.choices.iter().map(|c| c.to_string()).collect();
            write!(f, "({})", alternatives.join("|"))?;
        }
        match self.quantifier {
            Quantifier::One => Ok(()),
            Quantifier::Optional => f.write_str("?"),
            Quantifier::OneOrMore => f.write_str("+"),
        }
    }
}

impl fmt::Display for PatternQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.anchored {
            f.write_str("^")?;
        }
        let terms: Vec<String> = self.terms.iter().map(|t| t.to_string()).collect();
        f.write_str(&terms.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_groups_quantifiers_and_anchor() {
        let query: PatternQuery = "^(#QuestionWord|#Modal|#Verb) #Pronoun? #Verb? #Noun+"
            .parse()
            .unwrap();
        assert!(query.is_anchored());
        assert_eq!(query.terms().len(), 4);
        assert_eq!(
            query.terms()[0].choices(),
            &[
                TermChoice::Tag(Tag::QuestionWord),
                TermChoice::Tag(Tag::Modal),
                TermChoice::Tag(Tag::Verb)
            ][..]
        );
        assert_eq!(query.terms()[1].quantifier(), Quantifier::Optional);
        assert_eq!(query.terms()[3].quantifier(), Quantifier::OneOrMore);
        assert_eq!(
            query.to_string(),
            "^(#QuestionWord|#Modal|#Verb) #Pronoun? #Verb? #Noun+"
        );
    }

    #[test]
    fn parses_literal_words() {
        let query: PatternQuery = "(No|not|never|none)".parse().unwrap();
        assert_eq!(
            query.terms()[0].choices()[0],
            TermChoice::Word("no".to_string())
        );
    }

    #[test]
    fn builder_matches_parsed_form() {
        let built = PatternQuery::new(vec![
            PatternTerm::tag(Tag::Verb),
            PatternTerm::tag(Tag::Noun).one_or_more(),
        ]);
        assert_eq!(built, "#Verb #Noun+".parse::<PatternQuery>().unwrap());
    }

    #[test]
    fn rejects_malformed_patterns() {
        assert_eq!("".parse::<PatternQuery>(), Err(PatternError::Empty));
        assert_eq!(
            "#Gerund".parse::<PatternQuery>(),
            Err(PatternError::UnknownTag("Gerund".to_string()))
        );
        assert_eq!(
            "(#Noun|#Verb".parse::<PatternQuery>(),
            Err(PatternError::UnbalancedGroup("(#Noun|#Verb".to_string()))
        );
        assert_eq!(
            "#Noun|#Verb".parse::<PatternQuery>(),
            Err(PatternError::UnbalancedGroup("#Noun|#Verb".to_string()))
        );
        assert_eq!(
            "(#Noun|)".parse::<PatternQuery>(),
            Err(PatternError::EmptyAlternative("(#Noun|)".to_string()))
        );
        assert_eq!(
            "#Noun ^#Verb".parse::<PatternQuery>(),
            Err(PatternError::MisplacedAnchor("^#Verb".to_string()))
        );
    }

    #[test]
    fn normalize_whitespace_collapses_runs() {
        assert_eq!(normalize_whitespace("  see \t you\n soon "), "see you soon");
    }
}
