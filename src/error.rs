use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl From<confique::Error> for Error {
    fn from(value: confique::Error) -> Self {
        Error::Config(value.to_string())
    }
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
