use std::fmt;
use std::str::FromStr;

/// Part-of-speech tag attached to a word token.
///
/// Tags form a shallow hierarchy: a token tagged with a child tag also
/// carries every ancestor, so `#Verb` matches modals and `#Noun` matches
/// pronouns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Noun,
    ProperNoun,
    Pronoun,
    Verb,
    Auxiliary,
    Modal,
    Copula,
    QuestionWord,
    Conjunction,
    Preposition,
    Determiner,
    Adjective,
    Adverb,
    Negative,
    /// Interjections and politeness markers ("please", "hello")
    Expression,
    /// Numbers
    Value,
}

impl Tag {
    pub const ALL: [Tag; 16] = [
        Tag::Noun,
        Tag::ProperNoun,
        Tag::Pronoun,
        Tag::Verb,
        Tag::Auxiliary,
        Tag::Modal,
        Tag::Copula,
        Tag::QuestionWord,
        Tag::Conjunction,
        Tag::Preposition,
        Tag::Determiner,
        Tag::Adjective,
        Tag::Adverb,
        Tag::Negative,
        Tag::Expression,
        Tag::Value,
    ];

    /// The immediate parent in the tag hierarchy.
    pub fn parent(self) -> Option<Tag> {
        match self {
            Tag::Pronoun | Tag::ProperNoun => Some(Tag::Noun),
            Tag::Modal => Some(Tag::Auxiliary),
            Tag::Auxiliary | Tag::Copula => Some(Tag::Verb),
            _ => None,
        }
    }

    /// `self` followed by all of its ancestors.
    pub fn with_ancestors(self) -> Vec<Tag> {
        let mut tags = vec![self];
        let mut current = self;
        while let Some(parent) = current.parent() {
            tags.push(parent);
            current = parent;
        }
        tags
    }

    pub fn name(self) -> &'static str {
        match self {
            Tag::Noun => "Noun",
            Tag::ProperNoun => "ProperNoun",
            Tag::Pronoun => "Pronoun",
            Tag::Verb => "Verb",
            Tag::Auxiliary => "Auxiliary",
            Tag::Modal => "Modal",
            Tag::Copula => "Copula",
            Tag::QuestionWord => "QuestionWord",
            Tag::Conjunction => "Conjunction",
            Tag::Preposition => "Preposition",
            Tag::Determiner => "Determiner",
            Tag::Adjective => "Adjective",
            Tag::Adverb => "Adverb",
            Tag::Negative => "Negative",
            Tag::Expression => "Expression",
            Tag::Value => "Value",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .iter()
            .copied()
            .find(|tag| tag.name() == s)
            .ok_or_else(|| s.to_string())
    }
}
