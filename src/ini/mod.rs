//! INI text parsing and binding.
//!
//! The format is line based:
//!
//! ```ini
//! ; comment
//! # comment
//! [section]
//! key = value
//! ```
//!
//! Lines end with `\r\n` or `\n`. Whitespace around names, keys and values is
//! ignored; whitespace inside them is kept. There is no quoting, escaping or
//! line continuation, and a value runs to the end of its line.

mod binder;
mod error;
mod lines;

pub use binder::bind;
pub use error::{ParseError, SyntaxErrorKind};
pub use lines::{classify, split_lines, Line};
