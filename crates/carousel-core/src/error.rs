use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid increment: {0} (must be a positive integer)")]
    InvalidIncrement(i64),

    #[error("Carousel mount point has no parent container: {0}")]
    MissingContainer(String),

    #[error("Deck parsing error: {0}")]
    DeckParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
