//! Core library for `file_sorter`.
//!
//! Walks a source tree and copies every regular file into `<output>/<extension>/`,
//! keeping only the base name. Directories are walked concurrently on a rayon pool:
//! each directory spawns one task per entry and waits for all of them before it
//! returns, so the run ends exactly when the whole tree has been drained.
//!
//! Failures stay local. A directory that cannot be listed loses its subtree, a file
//! that cannot be copied is skipped, and both are reported through a [`Reporter`]
//! while the rest of the walk carries on.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let summary = file_sorter::run(Path::new("/data/unsorted"), Path::new("/data/sorted"))?;
//! println!("{} copied, {} failed", summary.copied, summary.failures());
//! # Ok::<(), file_sorter::SortError>(())
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod report;
pub mod shutdown;
mod sorter;

pub use config::{Config, LogLevel, SortPaths, default_config_path, path_has_symlink_ancestor};
pub use errors::{CopyStage, SortError};
pub use fs_ops::{CHUNK_SIZE, NO_EXTENSION, bucket_name};
pub use report::{ConsoleReporter, RecordingReporter, Reporter, RunSummary};
pub use shutdown::ShutdownFlag;
pub use sorter::{Sorter, run};

/// Commonly used items for embedding the sorter.
pub mod prelude {
    pub use crate::config::{Config, LogLevel};
    pub use crate::errors::{CopyStage, SortError as Error};
    pub use crate::report::{ConsoleReporter, RecordingReporter, Reporter, RunSummary};
    pub use crate::shutdown::ShutdownFlag;
    pub use crate::sorter::{Sorter, run};
    pub use crate::{NO_EXTENSION, bucket_name};

    /// Crate-wide result alias.
    pub type SortResult<T> = std::result::Result<T, Error>;
}
