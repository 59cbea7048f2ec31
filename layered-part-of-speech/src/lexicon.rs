//! Closed-class word lists plus a small open-class vocabulary of everyday
//! conversational words. Anything not listed here is guessed from its shape.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::Tag;

const PRONOUNS: &[&str] = &[
    "i", "me", "myself", "you", "yourself", "yourselves", "he", "him", "himself", "she", "her",
    "herself", "it", "itself", "we", "us", "ourselves", "they", "them", "themselves", "my", "mine",
    "your", "yours", "his", "hers", "its", "our", "ours", "their", "theirs", "someone", "somebody",
    "anyone", "anybody", "everyone", "everybody", "something", "anything", "everything",
];

/// Possessives behave like determiners when choosing between noun and verb readings.
pub(crate) const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

const QUESTION_WORDS: &[&str] = &[
    "who", "whom", "whose", "what", "which", "where", "when", "why", "how",
];

const MODALS: &[&str] = &[
    "can", "could", "will", "would", "shall", "should", "may", "might", "must",
];

const NEGATIVE_MODALS: &[&str] = &[
    "can't", "cannot", "couldn't", "won't", "wouldn't", "shouldn't", "mustn't",
];

const AUXILIARIES: &[&str] = &["do", "does", "did", "have", "has", "had"];

const NEGATIVE_AUXILIARIES: &[&str] = &["don't", "doesn't", "didn't", "haven't", "hasn't", "hadn't"];

const COPULAS: &[&str] = &["is", "am", "are", "was", "were", "be", "been", "being"];

const NEGATIVE_COPULAS: &[&str] = &["isn't", "aren't", "wasn't", "weren't"];

/// Every n't form, across modals, auxiliaries and copulas.
pub(crate) const NEGATED_CONTRACTIONS: &[&[&str]] =
    &[NEGATIVE_MODALS, NEGATIVE_AUXILIARIES, NEGATIVE_COPULAS];

/// Pronoun + copula/auxiliary contractions.
const PRONOUN_CONTRACTIONS: &[&str] = &[
    "i'm", "you're", "we're", "they're", "he's", "she's", "it's", "that's", "there's", "i've",
    "you've", "we've", "they've", "i'll", "you'll", "we'll", "they'll", "i'd", "you'd", "let's",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "so", "because", "if", "although", "though", "while", "unless", "yet",
    "nor",
];

const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "to", "for", "with", "from", "by", "about", "of", "into", "over", "under",
    "after", "before", "up", "down", "out", "off", "near", "through", "without", "around",
    "between", "until",
];

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "some", "any", "every", "each", "another",
    "all", "both",
];

const NEGATIVES: &[&str] = &["not", "never", "nothing", "nobody", "nowhere"];

const ADVERBS: &[&str] = &[
    "now", "then", "here", "there", "today", "tonight", "tomorrow", "yesterday", "later", "soon",
    "again", "always", "often", "sometimes", "really", "very", "too", "also", "just", "still",
    "already", "maybe", "only", "even", "well", "away", "back",
];

const EXPRESSIONS: &[&str] = &[
    "please", "hi", "hello", "hey", "yes", "yeah", "ok", "okay", "thanks", "bye", "goodbye", "oh",
    "um", "uh", "wow", "sorry",
];

const ADJECTIVES: &[&str] = &[
    "good", "bad", "happy", "sad", "hot", "cold", "warm", "big", "small", "little", "hungry",
    "thirsty", "tired", "sick", "ready", "fine", "new", "old", "nice", "great", "busy", "late",
    "early", "right", "wrong", "loud", "quiet", "comfortable", "uncomfortable", "important",
];

/// Verbs whose bare form is also a common noun ("a walk", "the call").
pub(crate) const NOUN_VERBS: &[&str] = &[
    "call", "walk", "drink", "work", "help", "play", "look", "love", "watch", "turn", "visit",
    "stop", "start", "wait", "move", "show", "use", "talk", "cook", "sleep", "rest", "smile",
    "change", "answer", "break", "kiss", "hug", "wash", "dream", "run", "ride", "swim",
];

const VERBS: &[&str] = &[
    // base forms
    "want", "need", "go", "come", "get", "give", "take", "make", "bring", "see", "know", "think",
    "feel", "like", "eat", "sit", "stand", "say", "tell", "ask", "open", "close", "put", "hear",
    "listen", "read", "write", "find", "keep", "let", "leave", "meet", "pay", "send", "try",
    "forget", "remember", "understand", "hurt", "buy", "carry", "clean", "drive", "fix", "hold",
    "pick", "sing", "speak", "stay", "repeat", "explain", "wear", "lie", "dress", "brush", "bathe",
    "wake", "feed", "miss", "hope", "mean", "believe", "sound", "seem", "become", "fall", "hate",
    "prefer", "finish", "learn", "teach", "check", "charge",
    // inflected forms
    "wants", "needs", "goes", "comes", "gets", "gives", "takes", "makes", "brings", "sees",
    "knows", "thinks", "feels", "likes", "eats", "says", "tells", "asks", "hurts", "means",
    "went", "came", "got", "gave", "took", "made", "brought", "saw", "seen", "knew", "known",
    "thought", "felt", "said", "told", "ate", "eaten", "drank", "slept", "sat", "heard", "found",
    "kept", "left", "met", "paid", "sent", "forgot", "forgotten", "bought", "held", "spoke",
    "wore", "woke", "fell", "gone", "done", "taught", "understood", "ran", "rode", "swam",
];

static LEXICON: Lazy<HashMap<&'static str, Vec<Tag>>> = Lazy::new(|| {
    let mut lexicon: HashMap<&'static str, Vec<Tag>> = HashMap::new();
    let mut add = |words: &[&'static str], tags: &[Tag]| {
        for word in words {
            let entry = lexicon.entry(*word).or_insert_with(Vec::new);
            for tag in tags {
                if !entry.contains(tag) {
                    entry.push(*tag);
                }
            }
        }
    };

    // Closed classes first so their readings come before open-class ones.
    add(PRONOUNS, &[Tag::Pronoun]);
    add(QUESTION_WORDS, &[Tag::QuestionWord]);
    add(MODALS, &[Tag::Modal]);
    add(NEGATIVE_MODALS, &[Tag::Modal, Tag::Negative]);
    add(AUXILIARIES, &[Tag::Auxiliary]);
    add(NEGATIVE_AUXILIARIES, &[Tag::Auxiliary, Tag::Negative]);
    add(COPULAS, &[Tag::Copula]);
    add(NEGATIVE_COPULAS, &[Tag::Copula, Tag::Negative]);
    add(PRONOUN_CONTRACTIONS, &[Tag::Pronoun, Tag::Copula]);
    add(CONJUNCTIONS, &[Tag::Conjunction]);
    add(PREPOSITIONS, &[Tag::Preposition]);
    add(DETERMINERS, &[Tag::Determiner]);
    add(&["no"], &[Tag::Determiner, Tag::Negative]);
    add(&["none"], &[Tag::Pronoun, Tag::Negative]);
    add(NEGATIVES, &[Tag::Negative]);
    add(ADVERBS, &[Tag::Adverb]);
    add(EXPRESSIONS, &[Tag::Expression]);
    add(ADJECTIVES, &[Tag::Adjective]);
    add(NOUN_VERBS, &[Tag::Verb]);
    add(VERBS, &[Tag::Verb]);

    lexicon
});

/// Lexicon tags for a lowercased word, without hierarchy expansion.
pub(crate) fn lookup(lower: &str) -> Option<&'static [Tag]> {
    LEXICON.get(lower).map(Vec::as_slice)
}

/// Guess tags for a word the lexicon does not know.
///
/// `sentence_initial` suppresses the proper-noun reading of capitalized words.
pub(crate) fn guess(word: &str, sentence_initial: bool) -> Tag {
    let lower = word.to_lowercase();
    let len = lower.chars().count();

    if !sentence_initial && word.chars().next().map_or(false, char::is_uppercase) {
        Tag::ProperNoun
    } else if len > 4 && lower.ends_with("ing") {
        Tag::Verb
    } else if len > 3 && lower.ends_with("ed") {
        Tag::Verb
    } else if len > 3 && lower.ends_with("ly") {
        Tag::Adverb
    } else if lower.ends_with("n't") {
        Tag::Negative
    } else {
        Tag::Noun
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_class_lookup() {
        assert_eq!(lookup("you"), Some(&[Tag::Pronoun][..]));
        assert_eq!(lookup("can"), Some(&[Tag::Modal][..]));
        assert_eq!(lookup("don't"), Some(&[Tag::Auxiliary, Tag::Negative][..]));
        assert_eq!(lookup("no"), Some(&[Tag::Determiner, Tag::Negative][..]));
        assert_eq!(lookup("zebra"), None);
    }

    #[test]
    fn guesses_from_shape() {
        assert_eq!(guess("Sarah", false), Tag::ProperNoun);
        assert_eq!(guess("Yesterday", true), Tag::Noun);
        assert_eq!(guess("painting", false), Tag::Verb);
        assert_eq!(guess("painted", false), Tag::Verb);
        assert_eq!(guess("slowly", false), Tag::Adverb);
        assert_eq!(guess("table", false), Tag::Noun);
    }
}
