use crate::*;

pub const DEFAULT_TABLE_PREFIX: &str = "tmp";

/// What counts as a table that may be mutated freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    table_prefix: String,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            table_prefix: DEFAULT_TABLE_PREFIX.to_string(),
        }
    }
}

impl Policy {
    pub fn new(table_prefix: impl Into<String>) -> Result<Self> {
        let table_prefix = table_prefix.into().to_lowercase();
        if table_prefix.is_empty() {
            return Err(Error::InvalidPolicy(
                "table prefix must not be empty".to_string(),
            ));
        }
        Ok(Self { table_prefix })
    }

    pub fn table_prefix(&self) -> &str {
        &self.table_prefix
    }

    /// `table` must already be lower-cased, as tokens are.
    pub fn is_temporary(&self, table: &str) -> bool {
        table.starts_with(&self.table_prefix)
    }
}
