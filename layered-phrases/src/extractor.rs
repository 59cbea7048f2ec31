//! Candidate reply phrases from a transcript.

use std::cmp::Ordering;
use std::collections::HashSet;

use layered_part_of_speech::{
    negated_contractions, normalize_whitespace, PatternQuery, PatternTerm, TermChoice,
};
use tracing::{debug, trace};

use crate::candidate::word_count;
use crate::rules::RULES;
use crate::{ExtractorConfig, IndexedPhrase, PhraseCandidate, PhraseType, PosTagger, Tagger};

/// Unique candidate texts in first-seen order.
#[derive(Debug, Default)]
struct CandidateSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateSet {
    fn insert(&mut self, text: &str) {
        let text = normalize_whitespace(text);
        if text.is_empty() || self.seen.contains(&text) {
            return;
        }
        self.seen.insert(text.clone());
        self.ordered.push(text);
    }

    fn len(&self) -> usize {
        self.ordered.len()
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

/// Finds, classifies and ranks reply phrases in a transcript.
///
/// ```
/// use layered_phrases::{PhraseExtractor, PhraseType};
///
/// let phrases = PhraseExtractor::new().extract("I do not want that").unwrap();
/// assert_eq!(phrases[0].text, "I do not want that");
/// assert_eq!(phrases[0].phrase_type, PhraseType::Negative);
/// ```
#[derive(Debug, Clone)]
pub struct PhraseExtractor<T = PosTagger> {
    tagger: T,
    config: ExtractorConfig,
    negation: Option<PatternQuery>,
}

impl PhraseExtractor<PosTagger> {
    pub fn new() -> Self {
        Self::with_tagger(PosTagger)
    }
}

impl Default for PhraseExtractor<PosTagger> {
    fn default() -> Self {
        Self::new()
    }
}

/// Any of `words`, plus every n't contraction when "not" is among them.
fn negation_query(words: &[String]) -> Option<PatternQuery> {
    let mut words: Vec<String> = words
        .iter()
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect();
    if words.iter().any(|word| word == "not") {
        words.extend(negated_contractions().map(String::from));
    }
    if words.is_empty() {
        return None;
    }

    let choices = words.into_iter().map(TermChoice::Word).collect();
    Some(PatternQuery::new(vec![PatternTerm::any_of(choices)]))
}

/// Nothing a tagger could read: whitespace and control characters only.
fn is_blank(text: &str) -> bool {
    text.chars().all(|ch| ch.is_whitespace() || ch.is_control())
}

impl<T: Tagger> PhraseExtractor<T> {
    pub fn with_tagger(tagger: T) -> Self {
        let config = ExtractorConfig::default();
        PhraseExtractor {
            negation: negation_query(&config.negation_words),
            tagger,
            config,
        }
    }

    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.negation = negation_query(&config.negation_words);
        self.config = config;
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    /// Candidate phrases of `transcript`, best first.
    ///
    /// Whole sentences and matches of the extraction rules are collected
    /// without duplicates, filtered on length, verb presence and structure,
    /// then classified and scored. Ties keep the order in which candidates
    /// were first found.
    ///
    /// Blank transcripts yield no phrases without consulting the tagger; any
    /// other tagger failure is returned as is.
    pub fn extract(&self, transcript: &str) -> Result<Vec<PhraseCandidate>, T::Error> {
        if is_blank(transcript) {
            return Ok(Vec::new());
        }

        let tagged = self.tagger.tag(transcript)?;
        let mut candidates = CandidateSet::default();
        for sentence in self.tagger.sentences(&tagged) {
            candidates.insert(&sentence);
        }
        for compiled in &RULES.extraction {
            for text in self.tagger.matches(&tagged, &compiled.query) {
                candidates.insert(&text);
            }
        }

        let raw_count = candidates.len();
        let mut phrases = Vec::new();
        for text in candidates.into_vec() {
            if let Some(phrase) = self.evaluate(text)? {
                phrases.push(phrase);
            }
        }

        // `sort_by` is stable
        phrases.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
        });

        debug!(
            words = word_count(transcript),
            candidates = raw_count,
            kept = phrases.len(),
            "extracted phrases"
        );
        Ok(phrases)
    }

    /// Filter, classify and score one candidate text.
    fn evaluate(&self, text: String) -> Result<Option<PhraseCandidate>, T::Error> {
        let words = word_count(&text);
        if words < self.config.min_words || words > self.config.max_words {
            trace!(%text, words, "dropped candidate: word count out of bounds");
            return Ok(None);
        }

        let tagged = self.tagger.tag(&text)?;
        if !self.tagger.found(&tagged, &RULES.has_verb.query) {
            trace!(%text, "dropped candidate: no verb");
            return Ok(None);
        }
        let structured = RULES
            .structure
            .iter()
            .any(|compiled| self.tagger.found(&tagged, &compiled.query));
        if !structured {
            trace!(%text, "dropped candidate: no grammatical structure");
            return Ok(None);
        }

        Ok(Some(PhraseCandidate {
            phrase_type: self.classify_tagged(&tagged),
            confidence: self.score_tagged(&tagged, words),
            text,
        }))
    }

    /// The phrase type of arbitrary text, using the same rules as [`extract`](Self::extract).
    pub fn classify(&self, text: &str) -> Result<PhraseType, T::Error> {
        let tagged = self.tagger.tag(text)?;
        Ok(self.classify_tagged(&tagged))
    }

    fn classify_tagged(&self, tagged: &T::Tagged) -> PhraseType {
        if self.tagger.is_question(tagged) {
            PhraseType::Question
        } else if self.tagger.found(tagged, &RULES.opens_with_verb.query) {
            PhraseType::Command
        } else if self
            .negation
            .as_ref()
            .map_or(false, |negation| self.tagger.found(tagged, negation))
        {
            PhraseType::Negative
        } else {
            PhraseType::Statement
        }
    }

    fn score_tagged(&self, tagged: &T::Tagged, words: usize) -> f64 {
        let config = &self.config;
        let mut score = config.base_confidence;

        if self.tagger.found(tagged, &RULES.full_clause.query) {
            score += config.structure_bonus;
        }
        if self.tagger.found(tagged, &RULES.opens_with_question_word.query) {
            score += config.question_word_bonus;
        }
        if self.tagger.found(tagged, &RULES.opens_with_verb.query) {
            score += config.imperative_bonus;
        }
        if words < config.short_phrase_words {
            score -= config.short_penalty;
        }
        if words > config.long_phrase_words {
            score -= config.long_penalty;
        }

        // Four decimals keep equal sums equal regardless of addition order.
        (score.max(0.0).min(1.0) * 10_000.0).round() / 10_000.0
    }

    /// Resolve externally supplied phrase fragments against `words`.
    ///
    /// Spans are shifted by `offset`, the absolute index of `words[0]` in the
    /// full transcript. Fragments that cannot be placed are dropped.
    pub fn index_fragments<S: AsRef<str>>(
        &self,
        words: &[S],
        fragments: &[String],
        offset: usize,
    ) -> Result<Vec<IndexedPhrase>, T::Error> {
        let mut indexed = Vec::new();
        for fragment in fragments {
            let needle: Vec<&str> = fragment.split_whitespace().collect();
            match crate::locate(words, &needle) {
                Some(span) => {
                    let text = needle.join(" ");
                    let phrase_type = self.classify(&text)?;
                    indexed.push(IndexedPhrase::new(text, span.offset_by(offset), phrase_type));
                }
                None => trace!(%fragment, offset, "dropped fragment: not found in transcript"),
            }
        }
        Ok(indexed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_set_dedups_in_order() {
        let mut set = CandidateSet::default();
        set.insert("can you help me");
        set.insert("  can you\nhelp me ");
        set.insert("help me");
        set.insert("   ");
        assert_eq!(set.into_vec(), vec!["can you help me", "help me"]);
    }

    #[test]
    fn test_scores_are_clamped_and_rounded() {
        let extractor = PhraseExtractor::new()
            .with_config(ExtractorConfig::new().with_base_confidence(0.95));
        let phrases = extractor.extract("Where did you put the keys?").unwrap();
        assert_eq!(phrases[0].confidence, 1.0);

        let phrases = PhraseExtractor::new()
            .extract("can you help me please")
            .unwrap();
        assert_eq!(phrases[0].confidence, 0.8);
    }

    #[test]
    fn test_classify_order() {
        let extractor = PhraseExtractor::new();
        assert_eq!(extractor.classify("do not touch that?").unwrap(), PhraseType::Question);
        assert_eq!(extractor.classify("do not touch that").unwrap(), PhraseType::Command);
        assert_eq!(extractor.classify("I never said that").unwrap(), PhraseType::Negative);
        assert_eq!(extractor.classify("I said that").unwrap(), PhraseType::Statement);
    }

    #[test]
    fn test_contractions_count_as_not() {
        let extractor = PhraseExtractor::new();
        assert_eq!(extractor.classify("I can't find my shoes").unwrap(), PhraseType::Negative);
        assert_eq!(extractor.classify("I don\u{2019}t like it").unwrap(), PhraseType::Negative);
        assert_eq!(extractor.classify("it isn't ready").unwrap(), PhraseType::Negative);

        let extractor = PhraseExtractor::new()
            .with_config(ExtractorConfig::new().with_negation_words(&["never"]));
        assert_eq!(extractor.classify("I can't find my shoes").unwrap(), PhraseType::Statement);
    }

    #[test]
    fn test_blank_means_whitespace_and_control_characters() {
        assert!(is_blank(" \t\n"));
        assert!(is_blank("\u{0}\u{7} "));
        assert!(!is_blank("\u{7}hi"));
    }

    #[test]
    fn test_custom_negation_words() {
        let extractor =
            PhraseExtractor::new().with_config(ExtractorConfig::new().with_negation_words(&["nope"]));
        assert_eq!(extractor.classify("I said nope").unwrap(), PhraseType::Negative);
        assert_eq!(extractor.classify("I said not").unwrap(), PhraseType::Statement);

        let extractor =
            PhraseExtractor::new().with_config(ExtractorConfig::new().with_negation_words(&[]));
        assert_eq!(extractor.classify("I do not know").unwrap(), PhraseType::Statement);
    }
}
