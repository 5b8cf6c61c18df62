use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexisError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A backend could not complete a write, e.g. the slot file could not be replaced.
    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("Lookup failed: {0}")]
    Lookup(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LexisError>;
