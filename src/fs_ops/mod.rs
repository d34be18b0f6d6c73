//! Filesystem operations: listing, bucketing, chunked copy and the recursive walk.

pub mod bucket;
mod classify;
pub mod entry;
pub mod helpers;
pub mod io_copy;
mod walk;

pub use bucket::{NO_EXTENSION, bucket_name, ensure_bucket};
pub use entry::{DirectoryEntry, EntryKind, list_entries};
pub use helpers::{hint_for, io_error_with_help_io};
pub use io_copy::{CHUNK_SIZE, copy_chunked};

pub(crate) use walk::walk;

use std::path::Path;

use crate::errors::SortError;
use crate::report::{Reporter, Tally};
use crate::shutdown::ShutdownFlag;

/// Everything a walk or copy task needs; shared by reference across the whole task tree.
pub(crate) struct SortContext<'a> {
    pub dest_root: &'a Path,
    pub reporter: &'a dyn Reporter,
    pub tally: &'a Tally,
    pub shutdown: &'a ShutdownFlag,
    pub dry_run: bool,
}

impl SortContext<'_> {
    fn copied(&self, file: &Path, bucket_dir: &Path) {
        self.tally.copied();
        self.reporter.copied(file, bucket_dir);
    }

    fn planned(&self, file: &Path, bucket_dir: &Path) {
        self.tally.planned();
        self.reporter.planned(file, bucket_dir);
    }

    fn skipped(&self, path: &Path) {
        self.tally.skipped();
        self.reporter.skipped(path);
    }

    fn failed(&self, path: &Path, err: &SortError) {
        self.tally.failed(err);
        self.reporter.failed(path, err);
    }
}
