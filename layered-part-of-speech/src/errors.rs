//! Error types for tagging and tag patterns.

use thiserror::Error;

/// Errors produced while parsing a tag pattern such as `"(#Pronoun|#Noun) #Verb+"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The pattern has no terms.
    #[error("pattern is empty")]
    Empty,

    /// A `#Name` that is not a known tag.
    #[error("unknown tag `#{0}`")]
    UnknownTag(String),

    /// A group that opens without closing, or closes without opening.
    #[error("unbalanced group in `{0}`")]
    UnbalancedGroup(String),

    /// An empty alternative, as in `(#Noun|)`.
    #[error("empty alternative in `{0}`")]
    EmptyAlternative(String),

    /// `^` anywhere but the first term.
    #[error("`^` may only anchor the first term, found in `{0}`")]
    MisplacedAnchor(String),
}

/// Errors produced when text cannot be tagged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// Nothing but whitespace and control characters.
    #[error("no text to tag")]
    Empty,
}
