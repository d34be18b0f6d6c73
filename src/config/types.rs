//! Core configuration types.
//! - Config holds runtime settings merged from the XML file and CLI flags.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors (one line per failed file or directory)
    Quiet,
    /// Start/finish lines and warnings (default)
    #[default]
    Normal,
    /// Adds per-directory and per-file detail
    Info,
    /// Everything, including trace-level copy steps
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for one sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Tree to sort
    pub source: Option<PathBuf>,
    /// Root under which the per-extension buckets are created
    pub output: Option<PathBuf>,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Worker threads; None uses one per logical CPU
    pub workers: Option<usize>,
    /// If true, report what would be copied but do not write anything
    pub dry_run: bool,
}

impl Config {
    /// Construct a Config with explicit source/output; other fields use defaults.
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(source.into()),
            output: Some(output.into()),
            ..Default::default()
        }
    }
}
