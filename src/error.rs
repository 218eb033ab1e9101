use std::path::PathBuf;
use thiserror::Error;

/// Error type produced by caller-supplied predicates.
///
/// Whatever a predicate returns here is carried through the stream unmodified
/// as the source of [`FinderError::Predicate`].
pub type PredicateError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum FinderError {
    #[error("invalid filename pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("cannot access directory {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("walk error: {0}")]
    Walk(String),
    #[error("predicate failed: {0}")]
    Predicate(#[source] PredicateError),
}

impl FinderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FinderError::Io {
            path: path.into(),
            source,
        }
    }

    /// Folds a walker error into the crate error type, keeping the failing
    /// path and underlying I/O error whenever the walker recorded them.
    pub(crate) fn from_walk(err: ignore::Error) -> Self {
        match err {
            ignore::Error::WithPath { path, err } => match *err {
                ignore::Error::Io(source) => FinderError::DirectoryAccess { path, source },
                other => FinderError::from_walk(other),
            },
            ignore::Error::WithDepth { err, .. } => FinderError::from_walk(*err),
            other => FinderError::Walk(other.to_string()),
        }
    }
}
