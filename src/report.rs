//! Diagnostics sink.
//!
//! Walks and copies never return outcomes to their parent; they report them here.
//! `ConsoleReporter` is what the CLI uses: failures go to the tracing log, successes
//! to stdout as one notice per file. `RecordingReporter` keeps everything in memory.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, error, info, warn};

use crate::errors::SortError;
use crate::output as out;

/// Receives one call per settled unit of work. Called concurrently from worker threads.
pub trait Reporter: Send + Sync {
    /// `file` was copied into `bucket_dir`.
    fn copied(&self, file: &Path, bucket_dir: &Path);

    /// Work attributed to `path` was abandoned: a directory that could not be listed,
    /// or a file that could not be copied.
    fn failed(&self, path: &Path, error: &SortError);

    /// Entry that is neither a regular file nor a directory.
    fn skipped(&self, path: &Path) {
        debug!(path = %path.display(), "Skipped entry: not a regular file or directory");
    }

    /// Dry-run: `file` would have been copied into `bucket_dir`.
    fn planned(&self, file: &Path, bucket_dir: &Path) {
        info!(file = %file.display(), bucket = %bucket_dir.display(), "dry-run: would copy");
    }
}

/// Failures to the log sink, successes to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn copied(&self, file: &Path, bucket_dir: &Path) {
        let name = file.file_name().unwrap_or(file.as_os_str()).to_string_lossy();
        out::print_user(&format!("Copied: {} -> {}", name, bucket_dir.display()));
        debug!(src = %file.display(), bucket = %bucket_dir.display(), "File copied");
    }

    fn failed(&self, path: &Path, err: &SortError) {
        let code = err.code();
        let kind = err.kind();
        match err {
            SortError::Enumerate { .. } => {
                error!(code, kind, path = %path.display(), error = %err, "Cannot list directory; skipping subtree")
            }
            SortError::Copy { stage, .. } => {
                error!(code, kind, path = %path.display(), stage = %stage, error = %err, "Copy failed")
            }
            SortError::Interrupted(_) => {
                warn!(code, kind, path = %path.display(), "Copy interrupted")
            }
            _ => error!(code, kind, path = %path.display(), error = %err, "Sort failed"),
        }
    }

    fn planned(&self, file: &Path, bucket_dir: &Path) {
        out::print_info(&format!(
            "Dry-run: would copy '{}' -> '{}'",
            file.display(),
            bucket_dir.display()
        ));
    }
}

/// One reporter call, as captured by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Copied { file: PathBuf, bucket_dir: PathBuf },
    Failed { path: PathBuf, kind: &'static str, message: String },
    Skipped(PathBuf),
    Planned { file: PathBuf, bucket_dir: PathBuf },
}

/// Keeps every event in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, ev: Event) {
        // A poisoned lock only means another recorder thread panicked; keep recording.
        let mut guard = self.events.lock().unwrap_or_else(|p| p.into_inner());
        guard.push(ev);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    /// Source paths of successful copies.
    pub fn copied_files(&self) -> Vec<PathBuf> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Copied { file, .. } => Some(file),
                _ => None,
            })
            .collect()
    }

    /// `(path, kind)` of every failure.
    pub fn failures(&self) -> Vec<(PathBuf, &'static str)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Failed { path, kind, .. } => Some((path, kind)),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn copied(&self, file: &Path, bucket_dir: &Path) {
        self.push(Event::Copied {
            file: file.to_path_buf(),
            bucket_dir: bucket_dir.to_path_buf(),
        });
    }

    fn failed(&self, path: &Path, error: &SortError) {
        self.push(Event::Failed {
            path: path.to_path_buf(),
            kind: error.kind(),
            message: error.to_string(),
        });
    }

    fn skipped(&self, path: &Path) {
        self.push(Event::Skipped(path.to_path_buf()));
    }

    fn planned(&self, file: &Path, bucket_dir: &Path) {
        self.push(Event::Planned {
            file: file.to_path_buf(),
            bucket_dir: bucket_dir.to_path_buf(),
        });
    }
}

/// Totals for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub copied: usize,
    pub planned: usize,
    pub copy_failures: usize,
    pub walk_failures: usize,
    pub interrupted: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn failures(&self) -> usize {
        self.copy_failures + self.walk_failures + self.interrupted
    }
}

/// Lock-free counters behind [`RunSummary`].
#[derive(Debug, Default)]
pub(crate) struct Tally {
    copied: AtomicUsize,
    planned: AtomicUsize,
    copy_failures: AtomicUsize,
    walk_failures: AtomicUsize,
    interrupted: AtomicUsize,
    skipped: AtomicUsize,
}

impl Tally {
    pub(crate) fn copied(&self) {
        self.copied.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn planned(&self) {
        self.planned.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn skipped(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn failed(&self, err: &SortError) {
        let counter = match err {
            SortError::Enumerate { .. } => &self.walk_failures,
            SortError::Interrupted(_) => &self.interrupted,
            _ => &self.copy_failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn summary(&self) -> RunSummary {
        RunSummary {
            copied: self.copied.load(Ordering::Relaxed),
            planned: self.planned.load(Ordering::Relaxed),
            copy_failures: self.copy_failures.load(Ordering::Relaxed),
            walk_failures: self.walk_failures.load(Ordering::Relaxed),
            interrupted: self.interrupted.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
        }
    }
}
