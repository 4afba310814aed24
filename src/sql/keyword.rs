//! Modifier keywords that shift the position of a table name.
//!
//! Only the words the positional table rules look for are modelled here. The
//! leading statement keyword is classified separately as an `Action`.
//!
//! Keywords are matched against already lower-cased token text, so
//! `from_lower` never allocates.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Table,
    Temporary,
    Exists,
    LowPriority,
    Quick,
    Ignore,
}

impl Keyword {
    pub const ALL: [Self; 6] = [
        Keyword::Table,
        Keyword::Temporary,
        Keyword::Exists,
        Keyword::LowPriority,
        Keyword::Quick,
        Keyword::Ignore,
    ];

    /// Attempt to classify a *lower-cased* word into a `Keyword`.
    ///
    /// NOTE: The caller is responsible for lower-casing the input; tokens
    /// produced by `tokenize` already are.
    pub fn from_lower(word: &str) -> Option<Self> {
        use Keyword::*;
        let kw = match word {
            "table" => Table,
            "temporary" => Temporary,
            "exists" => Exists,
            "low_priority" => LowPriority,
            "quick" => Quick,
            "ignore" => Ignore,
            _ => return None,
        };
        Some(kw)
    }

    /// Canonical lowercase string form of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Table => "table",
            Temporary => "temporary",
            Exists => "exists",
            LowPriority => "low_priority",
            Quick => "quick",
            Ignore => "ignore",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_known_keywords() {
        for w in [
            "table",
            "temporary",
            "exists",
            "low_priority",
            "quick",
            "ignore",
        ] {
            assert!(Keyword::from_lower(w).is_some(), "{w} should be recognized");
        }
    }

    #[test]
    fn rejects_unknown_words() {
        for w in ["temp", "if", "not", "lowpriority", "TABLE", "tables"] {
            assert!(
                Keyword::from_lower(w).is_none(),
                "{w} should NOT be recognized"
            );
        }
    }

    #[test]
    fn as_str_round_trips_through_from_lower() {
        for kw in Keyword::ALL {
            assert_eq!(Keyword::from_lower(kw.as_str()), Some(kw));
            assert_eq!(kw.to_string(), kw.as_str());
        }
    }
}
