//! Bucket naming and creation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{CopyStage, SortError};

/// Bucket used for files whose name carries no extension.
pub const NO_EXTENSION: &str = "no_extension";

/// Bucket name for `file`: the lower-cased suffix after the last `.` of its name.
///
/// `archive.tar.gz` -> `gz`, `REPORT.TXT` -> `txt`. Names without a usable suffix
/// (`Makefile`, `.gitignore`, `notes.`) map to [`NO_EXTENSION`].
pub fn bucket_name(file: &Path) -> String {
    match file.extension() {
        Some(ext) if !ext.is_empty() => ext.to_string_lossy().to_lowercase(),
        _ => NO_EXTENSION.to_string(),
    }
}

/// Create `dest_root/<bucket>` (and any missing parents) if needed.
///
/// Safe to call concurrently for the same bucket: `create_dir_all` treats a directory
/// created by a racing caller as success.
pub fn ensure_bucket(dest_root: &Path, bucket: &str, file: &Path) -> Result<PathBuf, SortError> {
    let dir = dest_root.join(bucket);
    fs::create_dir_all(&dir).map_err(|e| SortError::copy(file, CopyStage::CreateBucket, e))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use tempfile::tempdir;

    #[test]
    fn plain_extension() {
        assert_eq!(bucket_name(Path::new("/a/b/photo.jpg")), "jpg");
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(bucket_name(Path::new("REPORT.TXT")), "txt");
        assert_eq!(bucket_name(Path::new("Mixed.TxT")), "txt");
    }

    #[test]
    fn only_last_segment_counts() {
        assert_eq!(bucket_name(Path::new("archive.tar.gz")), "gz");
        assert_eq!(bucket_name(Path::new(".env.LOCAL")), "local");
    }

    #[test]
    fn names_without_suffix_use_sentinel() {
        assert_eq!(bucket_name(Path::new("Makefile")), NO_EXTENSION);
        assert_eq!(bucket_name(Path::new(".gitignore")), NO_EXTENSION);
        assert_eq!(bucket_name(Path::new("notes.")), NO_EXTENSION);
    }

    #[test]
    fn ensure_bucket_is_idempotent() {
        let td = tempdir().unwrap();
        let root = td.path().join("missing_parent").join("out");
        let a = ensure_bucket(&root, "txt", Path::new("a.txt")).unwrap();
        let b = ensure_bucket(&root, "txt", Path::new("b.txt")).unwrap();
        assert_eq!(a, b);
        assert!(a.is_dir());
    }

    #[test]
    fn ensure_bucket_races_do_not_fail() {
        let td = tempdir().unwrap();
        let root = Arc::new(td.path().join("out"));
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let root = Arc::clone(&root);
                thread::spawn(move || ensure_bucket(&root, "log", Path::new(&format!("{i}.log"))))
            })
            .collect();
        for h in handles {
            h.join().unwrap().expect("concurrent bucket creation must succeed");
        }
        assert!(root.join("log").is_dir());
    }

    #[test]
    fn bucket_blocked_by_file_is_copy_error() {
        let td = tempdir().unwrap();
        std::fs::write(td.path().join("txt"), b"not a dir").unwrap();
        let err = ensure_bucket(td.path(), "txt", Path::new("a.txt")).unwrap_err();
        match err {
            SortError::Copy { stage, .. } => assert_eq!(stage, CopyStage::CreateBucket),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
