use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Invalid menu data: {0}")]
    InvalidMenu(String),

    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
