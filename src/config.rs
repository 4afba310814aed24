use crate::*;
use confique::Config as _;

/// Settings read from the environment. Command line flags are applied on top
/// by the caller.
#[derive(Debug, confique::Config)]
pub struct Config {
    /// Tables whose name starts with this prefix may be created, altered,
    /// dropped and truncated.
    #[config(env = "SQLCHECK_TABLE_PREFIX", default = "tmp")]
    pub table_prefix: String,
    /// Exit with a non-zero status when at least one violation is found.
    #[config(env = "SQLCHECK_FAIL_ON_VIOLATION", default = true)]
    pub fail_on_violation: bool,
    /// Log filter used when `RUST_LOG` is not set.
    #[config(env = "SQLCHECK_LOG", default = "warn")]
    pub log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config::builder().env().load()?)
    }

    pub fn policy(&self) -> Result<Policy> {
        Policy::new(&self.table_prefix)
    }
}
