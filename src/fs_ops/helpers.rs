//! I/O error hints.
//!
//! Appends an actionable hint (and the raw OS code, when there is one) to
//! error messages so a failure line in the log says what to check.
//!
//! Usage:
//!   format!("{}{}", err, hint_for(&err))
//!   fs::create_dir_all(dir).map_err(io_error_with_help_io("create bucket", dir))?;

use std::io;
use std::path::Path;

fn hint_by_code(code: i32) -> Option<&'static str> {
    #[cfg(unix)]
    {
        let hint = match code {
            libc::EACCES | libc::EPERM => "permission denied; check ownership and read/write bits",
            libc::ENOENT => "path not found; it may have been removed during the walk",
            libc::ENOTDIR => "a path component is not a directory",
            libc::EEXIST => "already exists and is not a directory",
            libc::ENOSPC => "insufficient space on the output device",
            libc::EROFS => "read-only filesystem; choose another output directory",
            libc::ELOOP => "too many levels of symbolic links",
            libc::ENAMETOOLONG => "file name or path too long",
            libc::EMFILE => "process file descriptor limit reached; lower --workers or raise the limit",
            libc::ENFILE => "system-wide file table overflow; lower --workers",
            libc::EIO => "low-level I/O error; the device may be failing",
            _ => return None,
        };
        Some(hint)
    }
    #[cfg(windows)]
    {
        let hint = match code {
            5 => "access denied; check permissions",
            2 | 3 => "path not found; it may have been removed during the walk",
            32 => "sharing violation; the file is open elsewhere",
            112 => "insufficient space on the output device",
            19 => "write protected media",
            206 => "file name or path too long",
            4 => "too many open files; lower --workers",
            _ => return None,
        };
        Some(hint)
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = code;
        None
    }
}

fn hint_by_kind(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and read/write bits"),
        io::ErrorKind::NotFound => Some("path not found; it may have been removed during the walk"),
        io::ErrorKind::AlreadyExists => Some("already exists and is not a directory"),
        io::ErrorKind::Interrupted => Some("interrupted; the run was asked to stop"),
        _ => None,
    }
}

/// Suffix for an error message: `" (hint) [os code: N]"`, or empty when nothing useful is known.
pub fn hint_for(e: &io::Error) -> String {
    match e.raw_os_error() {
        Some(code) => match hint_by_code(code) {
            Some(h) => format!(" ({h}) [os code: {code}]"),
            None => format!(" [os code: {code}]"),
        },
        None => hint_by_kind(e.kind())
            .map(|h| format!(" ({h})"))
            .unwrap_or_default(),
    }
}

/// Adapter for io::Result code: wraps the error with op/path/hint while preserving its ErrorKind.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| {
        let msg = format!("{} '{}': {}{}", op, path.display(), e, hint_for(&e));
        io::Error::new(e.kind(), msg)
    }
}
