//! Single-token matchers used with [`LLSelection`](super::LLSelection) and
//! [`LLLine::find`](super::LLLine::find).

use std::marker::PhantomData;

use super::{LLLine, TextTag};

/// Something that can be checked against the token at `idx`.
pub trait XMatch<'l> {
    type Out;

    fn go(&self, ll_line: &'l LLLine, idx: usize) -> Option<Self::Out>;
}

pub struct TokenText;

/// Matches any token and yields its text.
pub fn token_text() -> TokenText {
    TokenText
}

impl<'l> XMatch<'l> for TokenText {
    type Out = &'l str;

    fn go(&self, ll_line: &'l LLLine, idx: usize) -> Option<Self::Out> {
        ll_line.ll_tokens.get(idx).map(|token| token.text.as_str())
    }
}

pub struct Whitespace;

/// Matches whitespace tokens.
pub fn whitespace() -> Whitespace {
    Whitespace
}

impl<'l> XMatch<'l> for Whitespace {
    type Out = ();

    fn go(&self, ll_line: &'l LLLine, idx: usize) -> Option<Self::Out> {
        match ll_line.ll_tokens.get(idx) {
            Some(token) if token.tag == TextTag::SPACE => Some(()),
            _ => None,
        }
    }
}

pub struct TokenHasAny<'a>(&'a [char]);

/// Matches a token whose text contains any of `chars`, yielding the first hit.
pub fn token_has_any(chars: &[char]) -> TokenHasAny<'_> {
    TokenHasAny(chars)
}

impl<'l, 'a> XMatch<'l> for TokenHasAny<'a> {
    type Out = char;

    fn go(&self, ll_line: &'l LLLine, idx: usize) -> Option<Self::Out> {
        let token = ll_line.ll_tokens.get(idx)?;
        token.text.chars().find(|c| self.0.contains(c))
    }
}

pub struct Attr<T>(PhantomData<fn() -> T>);

/// Matches a token carrying an attribute of type `T`, yielding the first one.
pub fn attr<T: 'static>() -> Attr<T> {
    Attr(PhantomData)
}

impl<'l, T: 'static> XMatch<'l> for Attr<T> {
    type Out = &'l T;

    fn go(&self, ll_line: &'l LLLine, idx: usize) -> Option<Self::Out> {
        ll_line.attrs_at::<T>((idx, idx)).next()
    }
}

pub struct AttrEq<'a, T>(&'a T);

/// Matches a token carrying an attribute equal to `value`.
pub fn attr_eq<T: PartialEq + 'static>(value: &T) -> AttrEq<'_, T> {
    AttrEq(value)
}

impl<'l, 'a, T: PartialEq + 'static> XMatch<'l> for AttrEq<'a, T> {
    type Out = ();

    fn go(&self, ll_line: &'l LLLine, idx: usize) -> Option<Self::Out> {
        if ll_line.attrs_at::<T>((idx, idx)).any(|value| value == self.0) {
            Some(())
        } else {
            None
        }
    }
}

pub struct All<M>(M);

/// Matches when every matcher in the tuple matches the same token.
pub fn all<M>(matchers: M) -> All<M> {
    All(matchers)
}

impl<'l, A: XMatch<'l>, B: XMatch<'l>> XMatch<'l> for All<(A, B)> {
    type Out = (A::Out, B::Out);

    fn go(&self, ll_line: &'l LLLine, idx: usize) -> Option<Self::Out> {
        let a = (self.0).0.go(ll_line, idx)?;
        let b = (self.0).1.go(ll_line, idx)?;
        Some((a, b))
    }
}

impl<'l, A: XMatch<'l>, B: XMatch<'l>, C: XMatch<'l>> XMatch<'l> for All<(A, B, C)> {
    type Out = (A::Out, B::Out, C::Out);

    fn go(&self, ll_line: &'l LLLine, idx: usize) -> Option<Self::Out> {
        let a = (self.0).0.go(ll_line, idx)?;
        let b = (self.0).1.go(ll_line, idx)?;
        let c = (self.0).2.go(ll_line, idx)?;
        Some((a, b, c))
    }
}

pub struct AnyOf<M>(M);

/// Matches when either matcher matches, preferring the first.
pub fn any_of<M>(matchers: M) -> AnyOf<M> {
    AnyOf(matchers)
}

impl<'l, O, A: XMatch<'l, Out = O>, B: XMatch<'l, Out = O>> XMatch<'l> for AnyOf<(A, B)> {
    type Out = O;

    fn go(&self, ll_line: &'l LLLine, idx: usize) -> Option<Self::Out> {
        (self.0)
            .0
            .go(ll_line, idx)
            .or_else(|| (self.0).1.go(ll_line, idx))
    }
}
