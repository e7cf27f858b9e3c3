use thiserror::Error;

/// Failures at the file boundary of the CLI. The fill engine itself is total.
#[derive(Debug, Error)]
pub enum AutofillError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid page snapshot {path}: {source}")]
    PageParse {
        path: String,
        source: serde_json::Error,
    },

    #[error("cannot serialize page snapshot: {0}")]
    PageSerialize(#[source] serde_json::Error),

    #[error("{0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, AutofillError>;
