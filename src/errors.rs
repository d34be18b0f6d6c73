//! Typed error definitions for file_sorter.
//! Every failure carries the offending path so the reporter can log it without extra context.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fs_ops::helpers::hint_for;

/// Step of a single-file copy that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStage {
    CreateBucket,
    OpenSource,
    CreateTemp,
    Read,
    Write,
    Finalize,
}

impl fmt::Display for CopyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CopyStage::CreateBucket => "create bucket directory",
            CopyStage::OpenSource => "open source file",
            CopyStage::CreateTemp => "create temporary file",
            CopyStage::Read => "read source file",
            CopyStage::Write => "write destination file",
            CopyStage::Finalize => "rename into bucket",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum SortError {
    #[error("cannot list directory '{}': {}{}", .path.display(), .source, hint_for(.source))]
    Enumerate { path: PathBuf, source: io::Error },

    #[error("{} '{}': {}{}", .stage, .path.display(), .source, hint_for(.source))]
    Copy {
        path: PathBuf,
        stage: CopyStage,
        source: io::Error,
    },

    #[error("copy of '{}' interrupted by shutdown request", .0.display())]
    Interrupted(PathBuf),

    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SortError {
    pub(crate) fn copy(path: impl Into<PathBuf>, stage: CopyStage, source: io::Error) -> Self {
        SortError::Copy {
            path: path.into(),
            stage,
            source,
        }
    }

    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            SortError::Enumerate { .. } => 10,
            SortError::Copy { .. } => 20,
            SortError::Interrupted(_) => 30,
            SortError::WorkerPool(_) => 40,
            SortError::Config(_) => 50,
        }
    }

    /// Short machine-friendly label, paired with `code()` in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            SortError::Enumerate { .. } => "enumerate_failed",
            SortError::Copy { .. } => "copy_failed",
            SortError::Interrupted(_) => "interrupted",
            SortError::WorkerPool(_) => "worker_pool",
            SortError::Config(_) => "config_invalid",
        }
    }

    /// Path the failure is attributed to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            SortError::Enumerate { path, .. } | SortError::Copy { path, .. } => Some(path),
            SortError::Interrupted(path) => Some(path),
            SortError::WorkerPool(_) | SortError::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_error_names_stage_and_path() {
        let err = SortError::copy(
            "/src/a.txt",
            CopyStage::OpenSource,
            io::Error::from(io::ErrorKind::NotFound),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("open source file '/src/a.txt'"), "msg was: {msg}");
        assert!(msg.contains("path not found"), "msg was: {msg}");
        assert_eq!(err.kind(), "copy_failed");
    }

    #[test]
    fn enumerate_error_exposes_path() {
        let err = SortError::Enumerate {
            path: PathBuf::from("/src/locked"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.path(), Some(std::path::Path::new("/src/locked")));
        assert_eq!(err.code(), 10);
        assert!(err.to_string().contains("cannot list directory '/src/locked'"));
    }
}
