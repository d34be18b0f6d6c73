use file_sorter::config::{CONFIG_ENV, ConfigLocation, load_config, resolve_config_location};
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

struct EnvGuard;

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            std::env::remove_var(CONFIG_ENV);
        }
    }
}

fn set_env(value: &Path) -> EnvGuard {
    unsafe {
        std::env::set_var(CONFIG_ENV, value);
    }
    EnvGuard
}

#[test]
#[serial]
fn env_var_selects_config_file() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("custom.xml");
    fs::write(&cfg, "<config><workers>5</workers></config>").unwrap();
    let _env = set_env(&cfg);

    assert_eq!(
        resolve_config_location(None),
        Some(ConfigLocation::Env(cfg.clone()))
    );
    let (loc, loaded) = load_config(None).unwrap().unwrap();
    assert!(loc.is_explicit());
    assert_eq!(loaded.workers, Some(5));
}

#[test]
#[serial]
fn flag_beats_env_var() {
    let td = tempdir().unwrap();
    let from_env = td.path().join("env.xml");
    let from_flag = td.path().join("flag.xml");
    let _env = set_env(&from_env);

    assert_eq!(
        resolve_config_location(Some(&from_flag)),
        Some(ConfigLocation::Flag(from_flag))
    );
}

#[test]
#[serial]
fn missing_env_file_is_an_error() {
    let td = tempdir().unwrap();
    let _env = set_env(&td.path().join("absent.xml"));
    assert!(load_config(None).is_err());
}
