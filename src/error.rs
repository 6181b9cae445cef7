use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathKitError {
    // Filesystem
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("IO error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Caller input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Third-party extensibility
    #[error("probe error: {0}")]
    Probe(String),

    #[error("reader error: {0}")]
    Reader(String),
}

impl PathKitError {
    /// Map an I/O error raised at `path` onto the crate error.
    pub(crate) fn from_io(path: impl AsRef<Path>, err: std::io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match err.kind() {
            std::io::ErrorKind::NotFound         => Self::NotFound(path),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _                                    => Self::Io { path, source: err },
        }
    }

    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::NotFound(p)
            | Self::PermissionDenied(p)
            | Self::NotADirectory(p)
            | Self::Io { path: p, .. } => Some(p),
            _ => None,
        }
    }

    /// Whether this error means "nothing there" rather than a hard failure.
    ///
    /// Exhausted lookups and missing paths both report `NotFound`; callers
    /// that treat absence as an expected outcome test this instead of
    /// matching on variants.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_map_by_kind() {
        let err = PathKitError::from_io("/x", std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(err.is_not_found());
        assert_eq!(err.path(), Some(&PathBuf::from("/x")));

        let err = PathKitError::from_io("/y", std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(matches!(err, PathKitError::PermissionDenied(_)));

        let err = PathKitError::from_io("/z", std::io::Error::other("boom"));
        assert!(matches!(err, PathKitError::Io { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn non_path_errors_have_no_path() {
        assert!(PathKitError::InvalidInput("x".into()).path().is_none());
        assert!(PathKitError::Probe("x".into()).path().is_none());
    }
}
