use unicode_segmentation::UnicodeSegmentation;

use crate::ll_line::{LLLine, LLToken, TextTag};

/// Split `text` on Unicode word boundaries and build an untagged line.
///
/// Every byte of the input belongs to exactly one token, so joining the
/// token texts reproduces `text`. Whitespace runs become [`TextTag::SPACE`]
/// tokens; contractions such as "don't" stay a single [`TextTag::WORD`].
pub fn create_line_from_string<T: AsRef<str>>(text: T) -> LLLine {
    let text = text.as_ref();
    let ll_tokens = text
        .split_word_bound_indices()
        .enumerate()
        .map(|(token_idx, (start, part))| LLToken {
            token_idx,
            pos_starts_at: start,
            pos_ends_at: start + part.len(),
            tag: classify(part),
            text: part.to_string(),
        })
        .collect();

    LLLine::new(text.to_string(), ll_tokens)
}

fn classify(part: &str) -> TextTag {
    if part.chars().all(char::is_whitespace) {
        TextTag::SPACE
    } else if part.chars().all(|c| c.is_numeric()) {
        TextTag::NATN
    } else if part.chars().any(char::is_alphanumeric) {
        TextTag::WORD
    } else if part.chars().all(|c| c.is_ascii_punctuation() || is_unicode_punctuation(c)) {
        TextTag::PUNC
    } else {
        TextTag::SYMB
    }
}

fn is_unicode_punctuation(c: char) -> bool {
    matches!(
        c,
        '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}' | '\u{2026}' | '\u{2013}' | '\u{2014}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<(String, TextTag)> {
        create_line_from_string(text)
            .ll_tokens()
            .iter()
            .map(|t| (t.text().to_string(), t.tag()))
            .collect()
    }

    #[test]
    fn splits_words_space_and_punctuation() {
        assert_eq!(
            tags("Can you help me?"),
            vec![
                ("Can".to_string(), TextTag::WORD),
                (" ".to_string(), TextTag::SPACE),
                ("you".to_string(), TextTag::WORD),
                (" ".to_string(), TextTag::SPACE),
                ("help".to_string(), TextTag::WORD),
                (" ".to_string(), TextTag::SPACE),
                ("me".to_string(), TextTag::WORD),
                ("?".to_string(), TextTag::PUNC),
            ]
        );
    }

    #[test]
    fn keeps_contractions_and_numbers_whole() {
        let tags = tags("I don't have 30 minutes");
        assert!(tags.contains(&("don't".to_string(), TextTag::WORD)));
        assert!(tags.contains(&("30".to_string(), TextTag::NATN)));
    }

    #[test]
    fn offsets_cover_the_source() {
        let text = "see  you\ttomorrow, ok";
        let line = create_line_from_string(text);
        let rebuilt: String = line.ll_tokens().iter().map(|t| t.text()).collect();
        assert_eq!(rebuilt, text);
        for token in line.ll_tokens() {
            assert_eq!(&text[token.pos_starts_at()..token.pos_ends_at()], token.text());
        }
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(create_line_from_string("").ll_tokens().is_empty());
    }
}
