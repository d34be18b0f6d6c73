//! Directory listing for the walker.
//! Lists one level of a directory and tags every entry with its kind, without following symlinks.

use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What the walker does with an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file: copied into its bucket.
    File,
    /// Directory: walked recursively.
    Directory,
    /// Symlink, device, socket, fifo: skipped, never followed.
    Other,
}

impl EntryKind {
    pub fn of(file_type: &std::fs::FileType) -> Self {
        if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// List the immediate entries of `dir`, sorted by file name.
///
/// All-or-nothing: an error on the directory itself or on any single entry fails the
/// whole listing, so the caller never schedules work for a half-read directory.
pub fn list_entries(dir: &Path) -> io::Result<Vec<DirectoryEntry>> {
    let mut it = WalkDir::new(dir)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    // First item is `dir` itself.
    match it.next() {
        Some(Ok(root)) if root.file_type().is_dir() => {}
        Some(Ok(_)) => {
            return Err(io::Error::new(io::ErrorKind::NotADirectory, "not a directory"));
        }
        Some(Err(e)) => return Err(e.into()),
        None => return Ok(Vec::new()),
    }

    it.map(|res| {
        let entry = res.map_err(io::Error::from)?;
        Ok(DirectoryEntry {
            kind: EntryKind::of(&entry.file_type()),
            path: entry.into_path(),
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn lists_one_level_with_kinds() {
        let root = assert_fs::TempDir::new().unwrap();
        root.child("a.txt").write_str("a").unwrap();
        root.child("sub").create_dir_all().unwrap();
        root.child("sub/deep.txt").write_str("deep").unwrap();

        let entries = list_entries(root.path()).unwrap();
        assert_eq!(entries.len(), 2, "only immediate entries: {entries:?}");
        assert_eq!(entries[0].path, root.path().join("a.txt"));
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[1].path, root.path().join("sub"));
        assert_eq!(entries[1].kind, EntryKind::Directory);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_other() {
        let root = assert_fs::TempDir::new().unwrap();
        let target = root.child("real.txt");
        target.write_str("x").unwrap();
        std::os::unix::fs::symlink(target.path(), root.path().join("link.txt")).unwrap();
        std::os::unix::fs::symlink(root.path(), root.path().join("loop")).unwrap();

        let entries = list_entries(root.path()).unwrap();
        let kind_of = |name: &str| {
            entries
                .iter()
                .find(|e| e.path.file_name().unwrap() == name)
                .map(|e| e.kind)
                .unwrap()
        };
        assert_eq!(kind_of("link.txt"), EntryKind::Other);
        assert_eq!(kind_of("loop"), EntryKind::Other);
        assert_eq!(kind_of("real.txt"), EntryKind::File);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let root = assert_fs::TempDir::new().unwrap();
        let err = list_entries(&root.path().join("nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn file_is_not_listable() {
        let root = assert_fs::TempDir::new().unwrap();
        let f = root.child("plain.txt");
        f.write_str("x").unwrap();
        let err = list_entries(f.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotADirectory);
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let root = assert_fs::TempDir::new().unwrap();
        assert!(list_entries(root.path()).unwrap().is_empty());
    }
}
