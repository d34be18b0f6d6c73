//! Config module.
//! Provides configuration types, config file location, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{
    CONFIG_ENV, ConfigLocation, default_config_path, path_has_symlink_ancestor,
    resolve_config_location,
};
pub use types::{Config, LogLevel};
pub use validate::SortPaths;
pub use xml::{load_config, load_config_from_xml_path};
