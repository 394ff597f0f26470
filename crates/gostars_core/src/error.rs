use thiserror::Error;

/// Failure to resolve an import path through an oracle.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("go toolchain not found: {0}")]
    ToolchainMissing(String),

    #[error("cannot resolve {path}: {message}")]
    Unresolved { path: String, message: String },

    #[error("running go list: {0}")]
    Io(#[from] std::io::Error),

    #[error("decoding go list output: {0}")]
    Decode(#[from] serde_json::Error),
}
