//! Word-index lookup of phrases inside a transcript.
//!
//! Transcripts and phrases are both split on whitespace, and words compare
//! case-insensitively but otherwise exactly, so "keys?" never matches "keys".

use tracing::trace;

use crate::{IndexedPhrase, PhraseCandidate, WordSpan};

/// Words shown per transcript page.
pub const DEFAULT_WORDS_PER_PAGE: usize = 30;

fn same_word(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// First window of `haystack` equal to `needle`, word for word.
///
/// An empty needle, or one longer than the haystack, is never found.
///
/// ```
/// use layered_phrases::{locate, WordSpan};
///
/// let transcript = ["I", "will", "see", "you", "tomorrow", "at", "noon"];
/// assert_eq!(
///     locate(&transcript, &["See", "you", "tomorrow"]),
///     Some(WordSpan { start_index: 2, end_index: 4 })
/// );
/// assert_eq!(locate(&transcript, &["not", "present"]), None);
/// ```
pub fn locate<H: AsRef<str>, N: AsRef<str>>(haystack: &[H], needle: &[N]) -> Option<WordSpan> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    (0..=haystack.len() - needle.len())
        .find(|&start| {
            needle
                .iter()
                .zip(&haystack[start..])
                .all(|(n, h)| same_word(n.as_ref(), h.as_ref()))
        })
        .map(|start| WordSpan {
            start_index: start,
            end_index: start + needle.len() - 1,
        })
}

/// Attach transcript word indices to extracted phrases, dropping any that
/// cannot be placed.
pub fn index_phrases(transcript: &str, candidates: &[PhraseCandidate]) -> Vec<IndexedPhrase> {
    let words: Vec<&str> = transcript.split_whitespace().collect();
    candidates
        .iter()
        .filter_map(|candidate| {
            let needle: Vec<&str> = candidate.text.split_whitespace().collect();
            match locate(&words, &needle) {
                Some(span) => Some(IndexedPhrase::new(
                    candidate.text.clone(),
                    span,
                    candidate.phrase_type,
                )),
                None => {
                    trace!(text = %candidate.text, "dropped phrase: not found in transcript");
                    None
                }
            }
        })
        .collect()
}

/// Read a fragment payload: a JSON array of phrase strings, optionally
/// wrapped in a markdown code fence.
///
/// ```
/// use layered_phrases::parse_fragments;
///
/// let fenced = "```json\n[\"see you\", \"at noon\"]\n```";
/// assert_eq!(parse_fragments(fenced).unwrap(), vec!["see you", "at noon"]);
/// ```
pub fn parse_fragments(json: &str) -> Result<Vec<String>, crate::FragmentError> {
    Ok(serde_json::from_str(strip_code_fence(json))?)
}

/// The body of a ```` ``` ```` or ```` ```json ```` fence, or `payload` trimmed.
fn strip_code_fence(payload: &str) -> &str {
    let trimmed = payload.trim();
    let opened = match trimmed.strip_prefix("```") {
        Some(opened) => opened,
        None => return trimmed,
    };
    // Skip the info string ("json") up to the end of the opening line.
    let body = match opened.find('\n') {
        Some(newline) => &opened[newline + 1..],
        None => opened,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// A page of the transcript plus the pages after it that phrase lookup may
/// reach into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub words_per_page: usize,
    /// Pages covered, counting the current one
    pub span: usize,
}

impl PageWindow {
    /// The current page and the next one.
    pub fn new(page: usize) -> Self {
        PageWindow {
            page,
            words_per_page: DEFAULT_WORDS_PER_PAGE,
            span: 2,
        }
    }

    pub fn with_words_per_page(mut self, words_per_page: usize) -> Self {
        self.words_per_page = words_per_page;
        self
    }

    pub fn with_span(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    pub fn page_count(&self, total_words: usize) -> usize {
        if self.words_per_page == 0 {
            0
        } else {
            (total_words + self.words_per_page - 1) / self.words_per_page
        }
    }

    /// Absolute index of the window's first word.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.words_per_page)
    }

    /// The words inside the window; empty past the end of the transcript.
    pub fn slice<'w, S>(&self, words: &'w [S]) -> &'w [S] {
        let start = self.offset().min(words.len());
        let end = self
            .offset()
            .saturating_add(self.span.saturating_mul(self.words_per_page))
            .min(words.len());
        &words[start..end]
    }

    /// Find `needle` inside the window, reporting transcript-absolute indices.
    pub fn locate<H: AsRef<str>, N: AsRef<str>>(
        &self,
        words: &[H],
        needle: &[N],
    ) -> Option<WordSpan> {
        locate(self.slice(words), needle).map(|span| span.offset_by(self.offset()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAYSTACK: [&str; 7] = ["I", "will", "see", "you", "tomorrow", "at", "noon"];

    #[test]
    fn test_first_window_wins() {
        let words = ["go", "home", "and", "go", "home"];
        assert_eq!(
            locate(&words, &["go", "home"]),
            Some(WordSpan {
                start_index: 0,
                end_index: 1
            })
        );
        assert_eq!(
            locate(&words, &["home", "and", "go"]),
            Some(WordSpan {
                start_index: 1,
                end_index: 3
            })
        );
    }

    #[test]
    fn test_not_found_cases() {
        let empty: [&str; 0] = [];
        assert_eq!(locate(&HAYSTACK, &empty), None);
        assert_eq!(locate(&["one"], &["one", "two"]), None);
        assert_eq!(locate(&empty, &["one"]), None);
        assert_eq!(locate(&["keys?"], &["keys"]), None);
    }

    #[test]
    fn test_every_slice_is_found_no_later_than_itself() {
        let words = ["a", "b", "a", "b", "c", "a"];
        for start in 0..words.len() {
            for len in 1..=words.len() - start {
                let needle = &words[start..start + len];
                let span = locate(&words, needle).unwrap();
                assert!(span.start_index <= start);
                assert_eq!(span.len(), len);
                assert_eq!(&words[span.start_index..=span.end_index], needle);
            }
        }
    }

    #[test]
    fn test_parse_fragments() {
        assert_eq!(
            parse_fragments(r#"["see you", "at noon"]"#).unwrap(),
            vec!["see you", "at noon"]
        );
        assert!(parse_fragments("[]").unwrap().is_empty());
        assert!(parse_fragments(r#"{"phrases": []}"#).is_err());
        assert!(parse_fragments("[1, 2]").is_err());
        assert!(parse_fragments("not json").is_err());
    }

    #[test]
    fn test_parse_fenced_fragments() {
        assert_eq!(
            parse_fragments("```json\n[\"see you\"]\n```").unwrap(),
            vec!["see you"]
        );
        assert_eq!(
            parse_fragments("  ```\n[\"at noon\", \"bring it\"]\n```\n").unwrap(),
            vec!["at noon", "bring it"]
        );
        assert_eq!(parse_fragments("```json\n[]```").unwrap(), Vec::<String>::new());
        assert!(parse_fragments("```json\n{\"phrases\": []}\n```").is_err());
    }

    #[test]
    fn test_page_window() {
        let words: Vec<String> = (0..75).map(|i| format!("w{}", i)).collect();
        let window = PageWindow::new(1);
        assert_eq!(window.offset(), 30);
        assert_eq!(window.page_count(words.len()), 3);
        assert_eq!(window.slice(&words).len(), 45);
        assert_eq!(
            window.locate(&words, &["w40", "w41"]),
            Some(WordSpan {
                start_index: 40,
                end_index: 41
            })
        );
        assert_eq!(window.locate(&words, &["w5"]), None);
        assert!(PageWindow::new(4).slice(&words).is_empty());
        assert_eq!(PageWindow::new(0).with_words_per_page(0).page_count(10), 0);
        assert_eq!(PageWindow::new(0).page_count(0), 0);
    }
}
