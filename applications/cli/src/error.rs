/// Shell error types
use thiserror::Error;

/// Result type alias using `CliError`
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command line could not be parsed (message is clap's rendered output)
    #[error("{0}")]
    Usage(String),

    #[error("Unterminated quote in: {0}")]
    UnterminatedQuote(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
