//! Config file location and symlink checks.

use dirs::config_dir;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FILE_SORTER_CONFIG";

/// Where the config file comes from; decides whether a missing file is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// `--config <PATH>`
    Flag(PathBuf),
    /// `$FILE_SORTER_CONFIG`
    Env(PathBuf),
    /// OS config dir; optional
    Default(PathBuf),
}

impl ConfigLocation {
    pub fn path(&self) -> &Path {
        match self {
            ConfigLocation::Flag(p) | ConfigLocation::Env(p) | ConfigLocation::Default(p) => p,
        }
    }

    /// Explicitly named files must exist; the default one may be absent.
    pub fn is_explicit(&self) -> bool {
        !matches!(self, ConfigLocation::Default(_))
    }
}

/// OS-appropriate default config path: `<config dir>/file_sorter/config.xml`.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(mut base) = config_dir() {
        base.push("file_sorter");
        base.push("config.xml");
        Some(base)
    } else {
        env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("file_sorter")
                .join("config.xml")
        })
    }
}

/// Resolve the config file. Precedence: `--config`, then `$FILE_SORTER_CONFIG`, then the default.
pub fn resolve_config_location(flag: Option<&Path>) -> Option<ConfigLocation> {
    if let Some(p) = flag {
        return Some(ConfigLocation::Flag(p.to_path_buf()));
    }
    if let Some(p) = env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(ConfigLocation::Env(PathBuf::from(p)));
    }
    default_config_path().map(ConfigLocation::Default)
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    for anc in path.ancestors().skip(1) {
        if anc.as_os_str().is_empty() {
            continue;
        }
        match fs::symlink_metadata(anc) {
            Ok(meta) if meta.file_type().is_symlink() => return Ok(true),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
    }
    Ok(false)
}
