mod display;
mod ll_selection;
pub mod x;

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::Debug;

pub use display::LLLineDisplay;
pub use ll_selection::LLSelection;
use x::XMatch;

/// Inclusive `(start, end)` token indices.
pub type LRange = (usize, usize);

/// Coarse token class assigned while splitting text.
///
/// Every token also carries its `TextTag` as an attribute, so resolvers can
/// match it with `x::attr_eq(&TextTag::WORD)`.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTag {
    /// Natural number
    NATN,
    /// Punctuation
    PUNC,
    /// Symbol
    SYMB,
    /// Whitespace
    SPACE,
    /// Word (anything containing a letter)
    WORD,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LLToken {
    pub(crate) token_idx: usize,
    /// Byte offset of the first character in the line text
    pub(crate) pos_starts_at: usize,
    /// Byte offset one past the last character in the line text
    pub(crate) pos_ends_at: usize,
    pub(crate) text: String,
    pub(crate) tag: TextTag,
}

impl LLToken {
    pub fn token_idx(&self) -> usize {
        self.token_idx
    }

    pub fn pos_starts_at(&self) -> usize {
        self.pos_starts_at
    }

    pub fn pos_ends_at(&self) -> usize {
        self.pos_ends_at
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tag(&self) -> TextTag {
        self.tag
    }
}

/// An attribute waiting to be attached to a token range.
#[derive(Debug, Clone, PartialEq)]
pub struct LLCursorAssignment<Attr> {
    pub(crate) range: LRange,
    pub(crate) value: Attr,
}

impl<Attr> LLCursorAssignment<Attr> {
    pub fn range(&self) -> LRange {
        self.range
    }

    pub fn value(&self) -> &Attr {
        &self.value
    }
}

/// A pass over a line that produces attributes of one type.
pub trait Resolver {
    type Attr: Debug + Send + Sync + 'static;

    fn go(&self, sel: LLSelection) -> Vec<LLCursorAssignment<Self::Attr>>;
}

/// A match produced by [`LLLine::find`].
#[derive(Debug, Clone, PartialEq)]
pub struct LLFound<O> {
    range: LRange,
    attr: O,
}

impl<O> LLFound<O> {
    pub fn range(&self) -> LRange {
        self.range
    }

    pub fn attr(&self) -> &O {
        &self.attr
    }

    pub fn into_attr(self) -> O {
        self.attr
    }
}

struct TypedLayer<T> {
    entries: Vec<(LRange, T)>,
}

trait AnyLayer: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn debug_entries(&self) -> Vec<(LRange, String)>;
}

impl<T: Debug + Send + Sync + 'static> AnyLayer for TypedLayer<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn debug_entries(&self) -> Vec<(LRange, String)> {
        self.entries
            .iter()
            .map(|(range, value)| (*range, format!("{:?}", value)))
            .collect()
    }
}

/// A tokenized line plus every attribute layer resolved onto it.
pub struct LLLine {
    text: String,
    ll_tokens: Vec<LLToken>,
    layers: HashMap<TypeId, Box<dyn AnyLayer>>,
}

impl Debug for LLLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLLine")
            .field("text", &self.text)
            .field("ll_tokens", &self.ll_tokens.len())
            .field("layers", &self.layers.len())
            .finish()
    }
}

impl LLLine {
    pub(crate) fn new(text: String, ll_tokens: Vec<LLToken>) -> Self {
        let mut line = LLLine {
            text,
            ll_tokens,
            layers: HashMap::new(),
        };
        let text_tags: Vec<(LRange, TextTag)> = line
            .ll_tokens
            .iter()
            .map(|token| ((token.token_idx, token.token_idx), token.tag))
            .collect();
        for (range, tag) in text_tags {
            line.insert(range, tag);
        }
        line
    }

    /// The original text the line was built from.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn ll_tokens(&self) -> &[LLToken] {
        &self.ll_tokens
    }

    /// Run a resolver over the whole line and attach what it produced.
    pub fn run<R: Resolver>(mut self, resolver: &R) -> Self {
        if self.ll_tokens.is_empty() {
            return self;
        }
        let assignments = resolver.go(LLSelection::new(&self, 0, self.ll_tokens.len() - 1));

        for LLCursorAssignment { range, value } in assignments {
            self.insert(range, value);
        }

        self
    }

    /// A selection covering every token, or `None` for an empty line.
    pub fn selection(&self) -> Option<LLSelection<'_>> {
        self.selection_for((0, self.ll_tokens.len().checked_sub(1)?))
    }

    /// A selection over `range`, if the range lies inside the line.
    pub fn selection_for(&self, range: LRange) -> Option<LLSelection<'_>> {
        if range.0 <= range.1 && range.1 < self.ll_tokens.len() {
            Some(LLSelection::new(self, range.0, range.1))
        } else {
            None
        }
    }

    /// Source text covered by an inclusive token range.
    pub fn text_of(&self, range: LRange) -> &str {
        match (self.ll_tokens.get(range.0), self.ll_tokens.get(range.1)) {
            (Some(start), Some(end)) if range.0 <= range.1 => {
                &self.text[start.pos_starts_at..end.pos_ends_at]
            }
            _ => "",
        }
    }

    /// Every attribute of type `T`, ordered by range.
    pub fn attrs_by<T: 'static>(&self) -> Vec<(LRange, &T)> {
        let mut found: Vec<(LRange, &T)> = self
            .layer::<T>()
            .map(|layer| layer.entries.iter().map(|(r, v)| (*r, v)).collect())
            .unwrap_or_default();
        found.sort_by_key(|(range, _)| *range);
        found
    }

    /// Attributes of type `T` attached to exactly `range`.
    pub fn attrs_at<T: 'static>(&self, range: LRange) -> impl Iterator<Item = &T> + '_ {
        self.layer::<T>()
            .into_iter()
            .flat_map(|layer| layer.entries.iter())
            .filter(move |(r, _)| *r == range)
            .map(|(_, v)| v)
    }

    /// Match `matcher` against every token of the line.
    pub fn find<'l, M: XMatch<'l>>(&'l self, matcher: &M) -> Vec<LLFound<M::Out>> {
        match self.selection() {
            Some(sel) => sel
                .find_by(matcher)
                .into_iter()
                .map(|(sel, attr)| LLFound {
                    range: sel.range(),
                    attr,
                })
                .collect(),
            None => Vec::new(),
        }
    }

    pub(crate) fn debug_entries<T: 'static>(&self) -> Vec<(LRange, String)> {
        let mut entries = self
            .layers
            .get(&TypeId::of::<T>())
            .map(|layer| layer.debug_entries())
            .unwrap_or_default();
        entries.sort_by_key(|(range, _)| *range);
        entries
    }

    fn layer<T: 'static>(&self) -> Option<&TypedLayer<T>> {
        self.layers
            .get(&TypeId::of::<T>())
            .and_then(|layer| layer.as_any().downcast_ref::<TypedLayer<T>>())
    }

    fn insert<T: Debug + Send + Sync + 'static>(&mut self, range: LRange, value: T) {
        let layer = self
            .layers
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(TypedLayer::<T> { entries: Vec::new() }));
        if let Some(layer) = layer.as_any_mut().downcast_mut::<TypedLayer<T>>() {
            layer.entries.push((range, value));
        }
    }
}
