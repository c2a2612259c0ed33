use thiserror::Error;

/// Errors surfaced by graph operations and edge-list parsing.
///
/// Every variant is fatal: this is a batch transformation with no
/// partial-failure or retry semantics.
#[derive(Debug, Error)]
pub enum UnchopError {
    /// An operation referenced a vertex symbol that is not currently live
    /// (removed, or never inserted).
    #[error("vertex `{0}` not found in graph")]
    VertexNotFound(String),
    /// An input line did not split into exactly two tab-separated tokens.
    #[error("{path}:{line_no}: malformed edge line (expected SOURCE<TAB>TARGET): {line:?}")]
    MalformedLine {
        path: String,
        line_no: usize,
        line: String,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
