//! Error types for organizing imports and building class indexes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while organizing files or working with class indexes.
#[derive(Debug, Error)]
pub enum Error {
    /// An import path matched none of the configured group prefixes.
    /// This signals a gap in the group configuration, not bad input:
    /// every legal prefix should have a covering entry, including the
    /// empty-string catch-all.
    #[error("no grouping for import '{0}'")]
    UnknownGroup(String),

    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },

    #[error("invalid index file '{path}': {source}")]
    Index {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Error {
    /// True when a directory walk should report this error and keep
    /// going rather than abort the whole invocation.
    pub fn is_per_file(&self) -> bool {
        matches!(self, Error::Read { .. } | Error::Write { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_group_names_the_import() {
        let err = Error::UnknownGroup("weird.vendor.Thing;".to_string());
        assert!(
            err.to_string().contains("weird.vendor.Thing;"),
            "message should name the offending import: {}",
            err
        );
    }

    #[test]
    fn test_io_errors_are_per_file() {
        let err = Error::Read {
            path: PathBuf::from("a.as"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_per_file());
        assert!(!Error::UnknownGroup("x.Y".to_string()).is_per_file());
    }
}
