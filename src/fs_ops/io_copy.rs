//! Chunked streaming copy.
//!
//! - Reads the source in fixed 4 KiB chunks and writes each chunk before reading the next,
//!   so memory use does not depend on file size.
//! - Writes into a fresh temp file next to the destination and renames it into place only
//!   once the last chunk is written. A failed or cancelled copy removes the temp file and
//!   never leaves a truncated file under the final name.
//! - Renaming over an existing destination replaces it (last writer wins).

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::errors::{CopyStage, SortError};
use crate::shutdown::ShutdownFlag;

/// Size of each read/write step.
pub const CHUNK_SIZE: usize = 4096;

const TEMP_PREFIX: &str = ".file_sorter.";
const TEMP_SUFFIX: &str = ".tmp";

static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Temp file that deletes itself unless `persist` succeeds.
struct TempFile {
    path: PathBuf,
    keep: bool,
}

impl TempFile {
    fn create_in(dir: &Path) -> io::Result<(Self, File)> {
        let pid = std::process::id();
        let mut last_err = None;
        for _ in 0..4 {
            let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
            let path = dir.join(format!("{TEMP_PREFIX}{pid}.{seq}{TEMP_SUFFIX}"));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((TempFile { path, keep: false }, file)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => last_err = Some(e),
                Err(e) => return Err(e),
            }
        }
        Err(last_err.unwrap_or_else(|| io::Error::from(io::ErrorKind::AlreadyExists)))
    }

    fn persist(mut self, dest: &Path) -> io::Result<()> {
        fs::rename(&self.path, dest)?;
        self.keep = true;
        Ok(())
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if !self.keep {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// True for names produced by the temp-file allocator above.
pub fn is_temp_name(name: &str) -> bool {
    name.starts_with(TEMP_PREFIX) && name.ends_with(TEMP_SUFFIX)
}

/// Copy `src` to `dest` in [`CHUNK_SIZE`] steps; returns the number of bytes copied.
///
/// `dest`'s parent directory must already exist. Errors are attributed to `src`.
/// `shutdown` is checked between chunks.
pub fn copy_chunked(src: &Path, dest: &Path, shutdown: &ShutdownFlag) -> Result<u64, SortError> {
    let mut reader = File::open(src).map_err(|e| SortError::copy(src, CopyStage::OpenSource, e))?;

    let dir = dest.parent().unwrap_or_else(|| Path::new("."));
    let (temp, mut writer) =
        TempFile::create_in(dir).map_err(|e| SortError::copy(src, CopyStage::CreateTemp, e))?;

    let mut buf = [0u8; CHUNK_SIZE];
    let mut total: u64 = 0;
    loop {
        if shutdown.is_requested() {
            return Err(SortError::Interrupted(src.to_path_buf()));
        }
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(SortError::copy(src, CopyStage::Read, e)),
        };
        writer
            .write_all(&buf[..n])
            .map_err(|e| SortError::copy(src, CopyStage::Write, e))?;
        total += n as u64;
    }
    writer
        .flush()
        .map_err(|e| SortError::copy(src, CopyStage::Write, e))?;
    drop(writer);

    temp.persist(dest)
        .map_err(|e| SortError::copy(src, CopyStage::Finalize, e))?;
    Ok(total)
}
