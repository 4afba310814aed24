//! Line-oriented SQL tokenization.
//!
//! Each physical line of a script is treated as one statement candidate and
//! reduced to its lowercase words. This is **not** a SQL parser: there is no
//! AST, no comment or string-literal handling, and no notion of statements
//! spanning several lines.
//!
//! Modules:
//! - `keyword`   : Modifier keywords that shift where a table name appears.
//! - `token`     : `Token` (word + span) and `TokenSequence` (one line).
//! - `tokenizer` : Single pass tokenizer producing a `TokenSequence`.
//!
//! Example:
//! ```rust,ignore
//! use sqlcheck::sql::prelude::*;
//!
//! let tokens = tokenize("DROP TABLE IF EXISTS tmp_cache;");
//! assert!(tokens.has(Keyword::Exists));
//! assert_eq!(tokens.word(4), Some("tmp_cache"));
//! ```

pub mod keyword;
pub mod token;
pub mod tokenizer;

pub use keyword::Keyword;
pub use token::{Token, TokenSequence};
pub use tokenizer::tokenize;

/// Convenience prelude re-exporting the most commonly used items.
pub mod prelude {
    pub use super::{Keyword, Token, TokenSequence, tokenize};
}
