//! Recursive tree walk.
//!
//! Each directory is one rayon scope: every child (a copy for a file, a nested walk for a
//! subdirectory) is spawned before any is awaited, and the scope does not close until all
//! of them, and everything they spawned, have settled. Waiting on a scope runs other
//! queued jobs, so nesting depth never exhausts the pool.

use std::path::Path;
use tracing::debug;

use crate::errors::SortError;

use super::SortContext;
use super::classify::copy_into_bucket;
use super::entry::{EntryKind, list_entries};

/// Walk `dir`, copying every regular file beneath it into its bucket.
///
/// A directory that cannot be listed is reported once and its subtree abandoned;
/// siblings elsewhere in the tree carry on.
pub(crate) fn walk(ctx: &SortContext<'_>, dir: &Path) {
    if ctx.shutdown.is_requested() {
        debug!(dir = %dir.display(), "Shutdown requested; not walking");
        return;
    }

    let entries = match list_entries(dir) {
        Ok(entries) => entries,
        Err(source) => {
            let err = SortError::Enumerate {
                path: dir.to_path_buf(),
                source,
            };
            ctx.failed(dir, &err);
            return;
        }
    };
    debug!(dir = %dir.display(), entries = entries.len(), "Walking directory");

    rayon::scope(|s| {
        for entry in entries {
            if ctx.shutdown.is_requested() {
                break;
            }
            match entry.kind {
                EntryKind::File => s.spawn(move |_| copy_into_bucket(ctx, &entry.path)),
                EntryKind::Directory => s.spawn(move |_| walk(ctx, &entry.path)),
                EntryKind::Other => ctx.skipped(&entry.path),
            }
        }
    });
}
