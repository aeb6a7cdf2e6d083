use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed search index: {0}")]
    MalformedIndex(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedIndex(msg.into())
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedIndex(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
