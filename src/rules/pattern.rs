//! Declarative table-name positions.
//!
//! Optional modifiers such as `TEMPORARY`, `IF [NOT] EXISTS` or
//! `LOW_PRIORITY` push the table name further right. A `TablePattern` starts
//! from a base index and adds a fixed shift for every `Offset` whose keyword
//! is present. Offsets are evaluated in order and independently.
use crate::*;

/// One optional modifier and how far it shifts the table name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    /// Shifts by `shift` when the token at `position` is `keyword`.
    At {
        position: usize,
        keyword: Keyword,
        shift: usize,
    },
    /// Shifts by `shift` when `keyword` appears anywhere in the line.
    Anywhere { keyword: Keyword, shift: usize },
}

impl Offset {
    pub fn applies(&self, tokens: &TokenSequence) -> bool {
        match *self {
            Offset::At {
                position, keyword, ..
            } => tokens.is_at(position, keyword),
            Offset::Anywhere { keyword, .. } => tokens.has(keyword),
        }
    }

    pub const fn shift(&self) -> usize {
        match *self {
            Offset::At { shift, .. } | Offset::Anywhere { shift, .. } => shift,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablePattern {
    pub base: usize,
    pub offsets: &'static [Offset],
}

impl TablePattern {
    /// `CREATE [TEMPORARY] TABLE [IF NOT EXISTS] tbl_name ...`
    pub const CREATE: Self = Self::new(
        2,
        &[
            Offset::At {
                position: 1,
                keyword: Keyword::Temporary,
                shift: 1,
            },
            // `if`, `not` and `exists` are three separate words
            Offset::Anywhere {
                keyword: Keyword::Exists,
                shift: 3,
            },
        ],
    );

    /// `ALTER TABLE tbl_name ...`
    pub const ALTER: Self = Self::new(2, &[]);

    /// `DROP [TEMPORARY] TABLE [IF EXISTS] tbl_name [, tbl_name] ...`
    pub const DROP: Self = Self::new(
        2,
        &[
            Offset::Anywhere {
                keyword: Keyword::Temporary,
                shift: 1,
            },
            Offset::Anywhere {
                keyword: Keyword::Exists,
                shift: 2,
            },
        ],
    );

    /// `TRUNCATE [TABLE] tbl_name`
    pub const TRUNCATE: Self = Self::new(
        1,
        &[Offset::At {
            position: 1,
            keyword: Keyword::Table,
            shift: 1,
        }],
    );

    /// `DELETE [LOW_PRIORITY] [QUICK] [IGNORE] FROM tbl_name ...`
    ///
    /// Multi-table deletes and `DELETE FROM ... USING ...` are read as if
    /// they were this single-table form.
    pub const DELETE: Self = Self::new(
        2,
        &[
            Offset::Anywhere {
                keyword: Keyword::LowPriority,
                shift: 1,
            },
            Offset::Anywhere {
                keyword: Keyword::Quick,
                shift: 1,
            },
            Offset::Anywhere {
                keyword: Keyword::Ignore,
                shift: 1,
            },
        ],
    );

    pub const fn new(base: usize, offsets: &'static [Offset]) -> Self {
        Self { base, offsets }
    }

    /// Index at which the table name is expected. May be out of range.
    pub fn index(&self, tokens: &TokenSequence) -> usize {
        self.base
            + self
                .offsets
                .iter()
                .filter(|o| o.applies(tokens))
                .map(Offset::shift)
                .sum::<usize>()
    }

    /// The table name token, or `None` when the line is too short.
    pub fn locate<'t>(&self, tokens: &'t TokenSequence) -> Option<&'t Token> {
        tokens.get(self.index(tokens))
    }
}
