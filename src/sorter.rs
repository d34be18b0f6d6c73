//! Run entry points.
//! `run` sorts with the console reporter on rayon's global pool; `Sorter` lets callers
//! inject their own reporter, worker count, dry-run mode and shutdown flag.

use std::path::Path;

use rayon::ThreadPoolBuilder;
use tracing::info;

use crate::errors::SortError;
use crate::fs_ops::{SortContext, walk};
use crate::report::{ConsoleReporter, Reporter, RunSummary, Tally};
use crate::shutdown::ShutdownFlag;

/// Sort every regular file under `source_root` into `dest_root/<extension>/`.
///
/// `source_root` should be an existing directory that does not contain `dest_root`;
/// checking that is the caller's job. Per-item failures are logged, never returned.
pub fn run(source_root: &Path, dest_root: &Path) -> Result<RunSummary, SortError> {
    Sorter::new(&ConsoleReporter).run(source_root, dest_root)
}

/// Configurable sort run.
pub struct Sorter<'r> {
    reporter: &'r dyn Reporter,
    workers: Option<usize>,
    dry_run: bool,
    shutdown: ShutdownFlag,
}

impl<'r> Sorter<'r> {
    pub fn new(reporter: &'r dyn Reporter) -> Self {
        Self {
            reporter,
            workers: None,
            dry_run: false,
            shutdown: ShutdownFlag::new(),
        }
    }

    /// Run on a dedicated pool of `n` threads instead of rayon's global pool.
    pub fn workers(mut self, n: usize) -> Self {
        self.workers = Some(n);
        self
    }

    /// Walk and classify, report what would be copied, write nothing.
    pub fn dry_run(mut self, yes: bool) -> Self {
        self.dry_run = yes;
        self
    }

    pub fn shutdown_flag(mut self, flag: ShutdownFlag) -> Self {
        self.shutdown = flag;
        self
    }

    /// Walk `source_root` and return once every scheduled walk and copy has settled.
    ///
    /// Errors only for setup problems (bad worker count, pool creation).
    pub fn run(&self, source_root: &Path, dest_root: &Path) -> Result<RunSummary, SortError> {
        let tally = Tally::default();
        let ctx = SortContext {
            dest_root,
            reporter: self.reporter,
            tally: &tally,
            shutdown: &self.shutdown,
            dry_run: self.dry_run,
        };

        info!(
            source = %source_root.display(),
            dest = %dest_root.display(),
            workers = ?self.workers,
            dry_run = self.dry_run,
            "Sort started"
        );

        match self.workers {
            Some(0) => return Err(SortError::Config("workers must be at least 1".into())),
            Some(n) => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("file-sorter-{i}"))
                    .build()
                    .map_err(|e| SortError::WorkerPool(e.to_string()))?;
                pool.install(|| walk(&ctx, source_root));
            }
            None => walk(&ctx, source_root),
        }

        let summary = tally.summary();
        info!(
            copied = summary.copied,
            planned = summary.planned,
            copy_failures = summary.copy_failures,
            walk_failures = summary.walk_failures,
            interrupted = summary.interrupted,
            skipped = summary.skipped,
            "Sort finished"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RecordingReporter;
    use assert_fs::prelude::*;

    #[test]
    fn zero_workers_is_rejected() {
        let src = assert_fs::TempDir::new().unwrap();
        let dst = assert_fs::TempDir::new().unwrap();
        let rec = RecordingReporter::new();
        let err = Sorter::new(&rec).workers(0).run(src.path(), dst.path()).unwrap_err();
        assert!(matches!(err, SortError::Config(_)));
    }

    #[test]
    fn dry_run_writes_nothing() {
        let src = assert_fs::TempDir::new().unwrap();
        src.child("a.txt").write_str("a").unwrap();
        src.child("sub").create_dir_all().unwrap();
        src.child("sub/b.RS").write_str("b").unwrap();
        let dst = assert_fs::TempDir::new().unwrap();
        let out = dst.path().join("sorted");

        let rec = RecordingReporter::new();
        let summary = Sorter::new(&rec).dry_run(true).run(src.path(), &out).unwrap();

        assert_eq!(summary.planned, 2);
        assert_eq!(summary.copied, 0);
        assert!(!out.exists(), "dry-run must not create the output root");
    }

    #[test]
    fn requested_shutdown_copies_nothing() {
        let src = assert_fs::TempDir::new().unwrap();
        src.child("a.txt").write_str("a").unwrap();
        let dst = assert_fs::TempDir::new().unwrap();

        let flag = ShutdownFlag::new();
        flag.request();
        let rec = RecordingReporter::new();
        let summary = Sorter::new(&rec)
            .shutdown_flag(flag)
            .run(src.path(), dst.path())
            .unwrap();
        assert_eq!(summary.copied, 0);
        assert!(!dst.path().join("txt").exists());
    }
}
