//! Config validation logic.
//! Checks the source is a readable directory, the output is usable, the two trees are
//! disjoint, and the worker count is sane. Runs once in the CLI, before any walk starts.

use anyhow::{Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::fs_ops::io_error_with_help_io;

use super::types::Config;

/// Source and output roots after validation (source canonicalized).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortPaths {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl Config {
    /// Validate settings and return the roots to sort between.
    pub fn validate(&self) -> Result<SortPaths> {
        let Some(src) = self.source.as_deref() else {
            bail!("no source directory given; pass --source or set <source> in the config file");
        };
        let Some(out) = self.output.as_deref() else {
            bail!("no output directory given; pass --output or set <output> in the config file");
        };

        // 1) Source: must exist, be a directory, and be listable.
        ensure_dir_exists_and_is_dir(src, "source")?;
        fs::read_dir(src).map_err(io_error_with_help_io("read source directory", src))?;
        debug!("source readable: {}", src.display());

        // 2) Output: may be missing (buckets create it), but must not be a file.
        if out.exists() && !out.is_dir() {
            error!("output exists but isn't a directory: {}", out.display());
            bail!("output exists but isn't a directory: {}", out.display());
        }

        // 3) Trees must be disjoint, otherwise the walk would re-sort its own output.
        let src_real = fs::canonicalize(src)?;
        let out_real = canonicalize_lenient(out);
        if out_real == src_real {
            bail!(
                "source and output resolve to the same path: '{}'",
                src_real.display()
            );
        }
        if out_real.starts_with(&src_real) {
            bail!(
                "output '{}' must not be inside source '{}'",
                out_real.display(),
                src_real.display()
            );
        }
        if src_real.starts_with(&out_real) {
            bail!(
                "source '{}' must not be inside output '{}'",
                src_real.display(),
                out_real.display()
            );
        }

        if self.workers == Some(0) {
            bail!("workers must be at least 1");
        }

        info!(
            "Config validated: source='{}' output='{}' workers={} dry_run={}",
            src_real.display(),
            out.display(),
            self.workers
                .map(|n| n.to_string())
                .unwrap_or_else(|| "auto".into()),
            self.dry_run
        );
        Ok(SortPaths {
            source: src_real,
            output: out.to_path_buf(),
        })
    }
}

/// Ensure path exists and is a directory; emit clear errors with path context.
fn ensure_dir_exists_and_is_dir(path: &Path, name: &str) -> Result<()> {
    if !path.exists() {
        error!("{name} does not exist: {}", path.display());
        bail!("{name} does not exist: {}", path.display());
    }
    if !path.is_dir() {
        error!("{name} is not a directory: {}", path.display());
        bail!("{name} is not a directory: {}", path.display());
    }
    Ok(())
}

/// Canonicalize the longest existing prefix of `path` and re-append the rest,
/// so a not-yet-created output can still be compared against the source.
fn canonicalize_lenient(path: &Path) -> PathBuf {
    let mut missing = Vec::new();
    let mut cur = path;
    loop {
        if let Ok(real) = fs::canonicalize(cur) {
            let mut full = real;
            for part in missing.iter().rev() {
                full.push(part);
            }
            return full;
        }
        match (cur.parent(), cur.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                cur = if parent.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    parent
                };
            }
            _ => return path.to_path_buf(),
        }
    }
}
