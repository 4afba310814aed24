use crate::sql::token::{Token, TokenSequence};

/// Line tokenizer producing the lowercase words of one line of SQL.
///
/// Behavior:
/// - Lower-cases the whole line first.
/// - Aggregates maximal runs of letters, digits, `_` and `'` into tokens.
///   Letters and digits are Unicode aware.
/// - Everything else (whitespace, commas, parentheses, operators, `;`) only
///   separates tokens and is dropped.
///
/// Quoted strings are not understood: `'abc def'` yields `'abc` and `def'`.
///
/// Guarantees:
/// - Never fails and never panics; empty input yields an empty sequence.
/// - No token is empty or contains a separator character.
pub fn tokenize(line: &str) -> TokenSequence {
    let lower = line.to_lowercase();
    let mut out = Vec::new();
    let mut chars = lower.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if !is_word_char(c) {
            continue;
        }

        let mut end = start + c.len_utf8();
        while let Some(&(i, cc)) = chars.peek() {
            if !is_word_char(cc) {
                break;
            }
            end = i + cc.len_utf8();
            chars.next();
        }
        out.push(Token::new(&lower[start..end], start, end));
    }

    out.into()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}
