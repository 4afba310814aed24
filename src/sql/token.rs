//! Token model for the line tokenizer.
//!
//! A `Token` is a lowercase word plus the byte span it occupies in the
//! lower-cased line it came from. A `TokenSequence` is every token of one
//! line, in source order.
use crate::sql::keyword::Keyword;
use itertools::Itertools as _;

/// A lowercase word with its inclusive start and exclusive end byte offsets.
///
/// Offsets refer to the *lower-cased* line produced during tokenization,
/// which may differ in byte length from the raw line for non-ASCII input.
///
/// Invariants:
/// - `text` is never empty
/// - `end - start == text.len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte length of this token (`end - start`).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the token's length is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if this token is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.text == kw.as_str()
    }

    /// Convenience: convert to a `(start, end)` tuple.
    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered tokens of a single line.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    derive_more::Deref,
    derive_more::From,
    derive_more::IntoIterator,
)]
#[into_iterator(owned, ref)]
pub struct TokenSequence(Vec<Token>);

impl TokenSequence {
    /// Text of the token at `index`, if the line is long enough.
    pub fn word(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(Token::as_str)
    }

    /// True if the token at `index` is `kw`.
    pub fn is_at(&self, index: usize, kw: Keyword) -> bool {
        self.0.get(index).is_some_and(|t| t.is_keyword(kw))
    }

    /// True if `kw` appears anywhere in the line.
    pub fn has(&self, kw: Keyword) -> bool {
        self.0.iter().any(|t| t.is_keyword(kw))
    }
}

impl std::fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}
