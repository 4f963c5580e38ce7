use thiserror::Error;

/// Terminal failure surface for the excluded retrieval-and-parsing
/// collaborator (sheet fetch, delimiter parsing).
///
/// Malformed *data* never produces one of these: per-field problems degrade
/// to `None`/sentinel values downstream. A failed retrieval attempt surfaces
/// exactly one terminal error; retrying is the caller's responsibility.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to fetch sheet: status {status}")]
    Fetch { status: u16 },

    #[error("source payload was not tabular text: {0}")]
    MalformedPayload(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SourceError>;
