use std::fmt::Write;

use super::*;
use unicode_width::UnicodeWidthStr;

/// Internal representation of an included attribute for display.
struct IncludedAttr {
    range: LRange,
    debug_value: String,
}

/// Renders a line with its attributes drawn underneath the tokens.
///
/// ```text
/// can     you     help
/// ╰─╯Modal
///         ╰─╯Pronoun
/// ```
pub struct LLLineDisplay<'a> {
    ll_line: &'a LLLine,
    include_attrs: Vec<IncludedAttr>,
}

impl<'a> std::fmt::Display for LLLineDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut token_idx_to_start_display_char_idx = Vec::new();
        let mut token_idx_to_end_display_char_idx = Vec::new();
        // write opening display text
        let mut opening_line = String::new();
        {
            // for skipping padding at beginning
            let mut is_first = true;
            for ll_token in self.ll_line.ll_tokens.iter() {
                if is_first {
                    is_first = false;
                } else {
                    opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
                }

                token_idx_to_start_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
                opening_line.push_str(&ll_token.text);
                token_idx_to_end_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
            }
        }

        f.write_str(&opening_line)?;

        for attr in self.include_attrs.iter() {
            f.write_char('\n')?;

            let start_char_idx = token_idx_to_start_display_char_idx[attr.range.0];
            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let end_char_idx = token_idx_to_end_display_char_idx[attr.range.1];
            let char_len = end_char_idx - start_char_idx;
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&attr.debug_value)?;
        }

        Ok(())
    }
}

impl<'a> LLLineDisplay<'a> {
    pub fn new(ll_line: &'a LLLine) -> Self {
        LLLineDisplay {
            ll_line,
            include_attrs: Vec::new(),
        }
    }

    /// Draw every attribute of type `T`, ordered by range.
    pub fn include<T: 'static>(&mut self) {
        for (range, debug_value) in self.ll_line.debug_entries::<T>() {
            if range.1 < self.ll_line.ll_tokens.len() {
                self.include_attrs.push(IncludedAttr { range, debug_value });
            }
        }
    }

    /// Takes self
    pub fn with<T: 'static>(mut self) -> Self {
        self.include::<T>();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_line_from_string;

    #[test]
    fn renders_text_tags() {
        let line = create_line_from_string("hi, you");
        let display = LLLineDisplay::new(&line).with::<TextTag>();

        insta::assert_snapshot!(display.to_string(), @r###"
        hi  ,     you
        ╰╯WORD
            ╰PUNC
               ╰SPACE
                  ╰─╯WORD
        "###);
    }
}
