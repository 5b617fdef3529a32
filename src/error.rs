//! Unified error type for the community-detection core.
//!
//! Library modules return `GraphError`; the CLI boundary (`main.rs`) wraps it
//! in `anyhow` the way the rest of the toolkit splits typed library errors
//! from `anyhow` at the application edge.

use thiserror::Error;

/// Errors surfaced by the CSR graph, the Girvan-Newman loop, and the edge-list I/O.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Malformed edge line, empty graph, or an out-of-range `k`.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// File could not be opened, read, or written.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The graph could not be split into `k` components: no positive-betweenness
    /// edge remains. Not a hard error — callers report the best partition reached.
    #[error("unsatisfiable: {0}")]
    Unsatisfiable(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
