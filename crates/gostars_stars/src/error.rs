use thiserror::Error;

/// Outcome of a failed star lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The repository is private, unpublished or deleted. Callers skip it.
    #[error("repository not found")]
    NotFound,

    #[error("expected 2XX status code, got {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] ureq::Error),

    #[error("decoding github response to json: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
#[error("expected github import path to be at least 3 parts, got {segments}: {path}")]
pub struct MalformedPathError {
    pub path: String,
    pub segments: usize,
}
