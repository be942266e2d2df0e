use thiserror::Error;

/// Errors surfaced by the RPC client, the chain accessors and the dispatcher
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExplorerError {
    /// Network failure, bad HTTP status or a body that is not JSON
    #[error("transport error: {0}")]
    Transport(String),

    /// The node answered with a JSON-RPC `error` object
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The node returned `null` for an entity the caller required
    #[error("{0} not found")]
    NotFound(String),

    /// Search input that matches no known shape
    #[error("{0}")]
    Validation(String),

    /// A result whose shape does not match the expected type
    #[error("malformed RPC result: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;

impl From<reqwest::Error> for ExplorerError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}
