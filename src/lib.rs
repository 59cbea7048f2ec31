#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Token lines with typed attribute layers.
//!
//! A transcript is split into an [`LLLine`] of tokens (words, numbers,
//! punctuation, whitespace). [`Resolver`]s read the line through an
//! [`LLSelection`] and attach typed attributes to token ranges; later
//! resolvers can match on what earlier ones produced.
//!
//! ```
//! use layered_transcript::{create_line_from_string, x, LLCursorAssignment, LLSelection, Resolver};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Greeting;
//!
//! struct GreetingResolver;
//!
//! impl Resolver for GreetingResolver {
//!     type Attr = Greeting;
//!
//!     fn go(&self, sel: LLSelection) -> Vec<LLCursorAssignment<Greeting>> {
//!         sel.find_by(&x::token_text())
//!             .into_iter()
//!             .filter(|(_, text)| text.eq_ignore_ascii_case("hello"))
//!             .map(|(sel, _)| sel.finish_with_attr(Greeting))
//!             .collect()
//!     }
//! }
//!
//! let line = create_line_from_string("Hello there").run(&GreetingResolver);
//! assert_eq!(line.attrs_by::<Greeting>().len(), 1);
//! ```

mod create_tokens;
mod ll_line;

pub use create_tokens::create_line_from_string;
pub use ll_line::{
    x, LLCursorAssignment, LLFound, LLLine, LLLineDisplay, LLSelection, LLToken, LRange,
    Resolver, TextTag,
};
