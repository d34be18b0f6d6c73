//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Unknown elements are rejected so typos surface instead of being ignored.
//!
//! Example:
//! <config>
//!   <source>/data/unsorted</source>
//!   <output>/data/sorted</output>
//!   <log_level>normal</log_level>
//!   <log_file>/var/log/file_sorter.log</log_file>
//!   <workers>8</workers>
//!   <dry_run>false</dry_run>
//! </config>

use anyhow::{Context, Result, anyhow};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::{ConfigLocation, resolve_config_location};
use super::types::{Config, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    source: Option<String>,
    output: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
    #[serde(default, deserialize_with = "de_usize_trimmed_opt")]
    workers: Option<usize>,
    dry_run: Option<bool>,
}

// Tolerates surrounding whitespace; rejects non-numbers instead of dropping them.
fn de_usize_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<usize>()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("workers: '{s}': {e}"))),
    }
}

fn non_empty_path(s: Option<&str>) -> Option<PathBuf> {
    s.map(str::trim).filter(|t| !t.is_empty()).map(PathBuf::from)
}

fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let log_level = match parsed.log_level.as_deref().map(str::trim) {
        None | Some("") => LogLevel::default(),
        Some(s) => s.parse::<LogLevel>().map_err(|e| anyhow!(e))?,
    };
    Ok(Config {
        source: non_empty_path(parsed.source.as_deref()),
        output: non_empty_path(parsed.output.as_deref()),
        log_level,
        log_file: non_empty_path(parsed.log_file.as_deref()),
        workers: parsed.workers,
        dry_run: parsed.dry_run.unwrap_or(false),
    })
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid value in '{}'", path.display()))
}

/// Load the config file chosen by [`resolve_config_location`].
///
/// Returns `Ok(None)` when no file applies (the default location is absent).
/// A file named by `--config` or `$FILE_SORTER_CONFIG` must exist.
pub fn load_config(flag: Option<&Path>) -> Result<Option<(ConfigLocation, Config)>> {
    let Some(loc) = resolve_config_location(flag) else {
        return Ok(None);
    };
    if !loc.path().exists() {
        if loc.is_explicit() {
            return Err(anyhow!("config file not found: {}", loc.path().display()));
        }
        debug!(path = %loc.path().display(), "No config file at default location");
        return Ok(None);
    }
    let cfg = load_config_from_xml_path(loc.path())?;
    Ok(Some((loc, cfg)))
}
