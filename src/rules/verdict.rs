use crate::*;

/// Why a line was flagged. The display text is the reason reported to users.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ViolationKind {
    #[display("illegal action on non-temporary table")]
    NonTemporaryTable { action: Action, table: String },
    #[display("delete without WHERE condition")]
    DeleteWithoutWhere,
    /// The line ends before the position where the table name should be.
    #[display("malformed statement")]
    MalformedStatement {
        action: Action,
        index: usize,
        tokens: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{kind} at line {line_number}: {line}")]
pub struct Violation {
    pub kind: ViolationKind,
    /// 1-based.
    pub line_number: usize,
    pub line: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Violation(Violation),
}

impl Verdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }

    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Verdict::Ok => None,
            Verdict::Violation(v) => Some(v),
        }
    }

    pub fn into_violation(self) -> Option<Violation> {
        match self {
            Verdict::Ok => None,
            Verdict::Violation(v) => Some(v),
        }
    }
}
