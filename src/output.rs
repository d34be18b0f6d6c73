//! User-facing notices (not logs).
//! Per-file copy notices and the final summary go to stdout; warnings and errors to stderr.
//! Labels are colored only when the target stream is a terminal.

use owo_colors::OwoColorize;

#[derive(Clone, Copy)]
enum Notice {
    Info,
    Ok,
    Warn,
    Error,
}

impl Notice {
    fn to_stderr(self) -> bool {
        matches!(self, Notice::Warn | Notice::Error)
    }

    fn label(self) -> &'static str {
        match self {
            Notice::Info => "info:",
            Notice::Ok => "ok:",
            Notice::Warn => "warn:",
            Notice::Error => "error:",
        }
    }
}

fn is_tty(stderr: bool) -> bool {
    if stderr {
        atty::is(atty::Stream::Stderr)
    } else {
        atty::is(atty::Stream::Stdout)
    }
}

fn emit(kind: Notice, msg: &str) {
    let stderr = kind.to_stderr();
    let label = kind.label();
    let line = if is_tty(stderr) {
        let colored = match kind {
            Notice::Info => label.cyan().bold().to_string(),
            Notice::Ok => label.green().bold().to_string(),
            Notice::Warn => label.yellow().bold().to_string(),
            Notice::Error => label.red().bold().to_string(),
        };
        format!("{colored} {msg}")
    } else {
        format!("{label} {msg}")
    };
    if stderr {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn print_info(msg: &str) {
    emit(Notice::Info, msg);
}

pub fn print_success(msg: &str) {
    emit(Notice::Ok, msg);
}

pub fn print_warn(msg: &str) {
    emit(Notice::Warn, msg);
}

pub fn print_error(msg: &str) {
    emit(Notice::Error, msg);
}

/// Plain line, no label. Used for the per-file "Copied: ..." notices scripts may parse.
pub fn print_user(msg: &str) {
    println!("{msg}");
}
