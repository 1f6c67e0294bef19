use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {0}")]
    NotFound(String),

    #[error("Parse error on line {line}: {value:?} is not a valid integer")]
    Parse { line: usize, value: String },

    #[error("Insufficient data: need at least 2 exponents to fit a trend, got {0}")]
    InsufficientData(usize),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
