//! Single-file classification and copy.
//! Derives the bucket from the extension, makes sure it exists, then streams the file in.

use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::errors::{CopyStage, SortError};

use super::SortContext;
use super::bucket::{bucket_name, ensure_bucket};
use super::io_copy::copy_chunked;

/// Copy `file` into `dest_root/<bucket>/<file name>` and report the outcome.
/// Never fails outward: the result goes to the reporter and nowhere else.
pub(crate) fn copy_into_bucket(ctx: &SortContext<'_>, file: &Path) {
    if ctx.shutdown.is_requested() {
        ctx.failed(file, &SortError::Interrupted(file.to_path_buf()));
        return;
    }

    let bucket = bucket_name(file);
    if ctx.dry_run {
        ctx.planned(file, &ctx.dest_root.join(&bucket));
        return;
    }

    match copy_file(ctx, file, &bucket) {
        Ok(bucket_dir) => ctx.copied(file, &bucket_dir),
        Err(e) => ctx.failed(file, &e),
    }
}

fn copy_file(ctx: &SortContext<'_>, file: &Path, bucket: &str) -> Result<PathBuf, SortError> {
    let name = file.file_name().ok_or_else(|| {
        SortError::copy(
            file,
            CopyStage::OpenSource,
            io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;

    let bucket_dir = ensure_bucket(ctx.dest_root, bucket, file)?;
    let dest = bucket_dir.join(name);
    trace!(src = %file.display(), dest = %dest.display(), "Copying");

    let bytes = copy_chunked(file, &dest, ctx.shutdown)?;
    debug!(src = %file.display(), dest = %dest.display(), bytes, "Copied file into bucket");
    Ok(bucket_dir)
}
