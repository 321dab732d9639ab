use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
