use std::fmt;

use super::x::XMatch;
use super::{LLCursorAssignment, LLLine, LRange};

/// A contiguous, non-empty run of tokens within an [`LLLine`].
#[derive(Clone, Copy)]
pub struct LLSelection<'l> {
    ll_line: &'l LLLine,
    start_idx: usize,
    end_idx: usize,
}

impl<'l> fmt::Debug for LLSelection<'l> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LLSelection")
            .field("start_idx", &self.start_idx)
            .field("end_idx", &self.end_idx)
            .field("text", &self.text())
            .finish()
    }
}

impl<'l> PartialEq for LLSelection<'l> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.ll_line, other.ll_line)
            && self.start_idx == other.start_idx
            && self.end_idx == other.end_idx
    }
}

impl<'l> LLSelection<'l> {
    pub(crate) fn new(ll_line: &'l LLLine, start_idx: usize, end_idx: usize) -> Self {
        debug_assert!(start_idx <= end_idx && end_idx < ll_line.ll_tokens.len());
        LLSelection {
            ll_line,
            start_idx,
            end_idx,
        }
    }

    pub fn ll_line(&self) -> &'l LLLine {
        self.ll_line
    }

    pub fn start_idx(&self) -> usize {
        self.start_idx
    }

    pub fn end_idx(&self) -> usize {
        self.end_idx
    }

    pub fn range(&self) -> LRange {
        (self.start_idx, self.end_idx)
    }

    /// Source text spanned by the selection, including inner whitespace.
    pub fn text(&self) -> &'l str {
        self.ll_line.text_of(self.range())
    }

    /// Every single-token selection inside `self` that `matcher` accepts.
    pub fn find_by<M: XMatch<'l>>(&self, matcher: &M) -> Vec<(LLSelection<'l>, M::Out)> {
        (self.start_idx..=self.end_idx)
            .filter_map(|idx| {
                matcher
                    .go(self.ll_line, idx)
                    .map(|out| (LLSelection::new(self.ll_line, idx, idx), out))
            })
            .collect()
    }

    pub fn find_first_by<M: XMatch<'l>>(&self, matcher: &M) -> Option<(LLSelection<'l>, M::Out)> {
        (self.start_idx..=self.end_idx).find_map(|idx| {
            matcher
                .go(self.ll_line, idx)
                .map(|out| (LLSelection::new(self.ll_line, idx, idx), out))
        })
    }

    /// Extend the selection by the next token if `matcher` accepts it.
    pub fn match_first_forwards<M: XMatch<'l>>(
        &self,
        matcher: &M,
    ) -> Option<(LLSelection<'l>, M::Out)> {
        let idx = self.end_idx + 1;
        if idx >= self.ll_line.ll_tokens.len() {
            return None;
        }
        matcher
            .go(self.ll_line, idx)
            .map(|out| (LLSelection::new(self.ll_line, self.start_idx, idx), out))
    }

    /// Extend the selection by the previous token if `matcher` accepts it.
    pub fn match_first_backwards<M: XMatch<'l>>(
        &self,
        matcher: &M,
    ) -> Option<(LLSelection<'l>, M::Out)> {
        let idx = self.start_idx.checked_sub(1)?;
        matcher
            .go(self.ll_line, idx)
            .map(|out| (LLSelection::new(self.ll_line, idx, self.end_idx), out))
    }

    /// Everything after the selection, to the end of the line.
    pub fn after(&self) -> Option<LLSelection<'l>> {
        let last = self.ll_line.ll_tokens.len().checked_sub(1)?;
        if self.end_idx < last {
            Some(LLSelection::new(self.ll_line, self.end_idx + 1, last))
        } else {
            None
        }
    }

    /// Everything before the selection, from the start of the line.
    pub fn before(&self) -> Option<LLSelection<'l>> {
        if self.start_idx > 0 {
            Some(LLSelection::new(self.ll_line, 0, self.start_idx - 1))
        } else {
            None
        }
    }

    /// Drop leading and trailing tokens accepted by `matcher`.
    ///
    /// Returns `None` when every token is trimmed away.
    pub fn trim<M: XMatch<'l>>(&self, matcher: &M) -> Option<LLSelection<'l>> {
        let mut start = self.start_idx;
        let mut end = self.end_idx;
        while start <= end && matcher.go(self.ll_line, start).is_some() {
            start += 1;
        }
        while end > start && matcher.go(self.ll_line, end).is_some() {
            end -= 1;
        }
        if start > end {
            None
        } else {
            Some(LLSelection::new(self.ll_line, start, end))
        }
    }

    pub fn finish_with_attr<Attr>(&self, value: Attr) -> LLCursorAssignment<Attr> {
        LLCursorAssignment {
            range: self.range(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{create_line_from_string, x, TextTag};

    #[test]
    fn match_first_forwards_extends_by_one_token() {
        let line = create_line_from_string("see you");
        let sel = line.selection_for((0, 0)).unwrap();
        let (sel, _) = sel.match_first_forwards(&x::whitespace()).unwrap();
        let (sel, text) = sel.match_first_forwards(&x::token_text()).unwrap();
        assert_eq!(text, "you");
        assert_eq!(sel.range(), (0, 2));
        assert!(sel.match_first_forwards(&x::token_text()).is_none());
    }

    #[test]
    fn match_first_backwards_stops_at_line_start() {
        let line = create_line_from_string("hi there");
        let sel = line.selection_for((2, 2)).unwrap();
        let (sel, _) = sel.match_first_backwards(&x::whitespace()).unwrap();
        assert_eq!(sel.range(), (1, 2));
        let (sel, word) = sel.match_first_backwards(&x::token_text()).unwrap();
        assert_eq!((sel.range(), word), ((0, 2), "hi"));
        assert!(sel.match_first_backwards(&x::token_text()).is_none());
    }

    #[test]
    fn trim_drops_outer_whitespace_and_punctuation() {
        let line = create_line_from_string(" hello there. ");
        let sel = line.selection().unwrap();
        let trimmed = sel
            .trim(&x::any_of((x::attr_eq(&TextTag::SPACE), x::attr_eq(&TextTag::PUNC))))
            .unwrap();
        assert_eq!(trimmed.text(), "hello there");

        let blank = create_line_from_string("  ");
        assert!(blank.selection().unwrap().trim(&x::whitespace()).is_none());
    }

    #[test]
    fn after_and_before() {
        let line = create_line_from_string("a b c");
        let middle = line.selection_for((2, 2)).unwrap();
        assert_eq!(middle.before().unwrap().text(), "a ");
        assert_eq!(middle.after().unwrap().text(), " c");
        assert!(line.selection().unwrap().after().is_none());
    }
}
