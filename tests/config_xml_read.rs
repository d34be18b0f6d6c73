use file_sorter::config::{LogLevel, load_config, load_config_from_xml_path};
use file_sorter::config::ConfigLocation;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn reads_config_file_from_disk() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(
        &cfg_path,
        r#"<config>
  <source>/data/unsorted</source>
  <output>/data/sorted</output>
  <log_level>info</log_level>
  <workers>3</workers>
</config>"#,
    )
    .unwrap();

    let cfg = load_config_from_xml_path(&cfg_path).unwrap();
    assert_eq!(cfg.source, Some(PathBuf::from("/data/unsorted")));
    assert_eq!(cfg.output, Some(PathBuf::from("/data/sorted")));
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert_eq!(cfg.workers, Some(3));
    assert_eq!(cfg.log_file, None);
    assert!(!cfg.dry_run);
}

#[test]
fn malformed_xml_names_the_file() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("broken.xml");
    fs::write(&cfg_path, "<config><source>/x</output>").unwrap();

    let err = load_config_from_xml_path(&cfg_path).unwrap_err();
    assert!(
        format!("{err:#}").contains("broken.xml"),
        "error should mention the file: {err:#}"
    );
}

#[test]
fn explicit_flag_file_must_exist() {
    let td = tempdir().unwrap();
    let missing = td.path().join("nope.xml");
    let err = load_config(Some(&missing)).unwrap_err();
    assert!(err.to_string().contains("config file not found"), "{err}");
}

#[test]
fn explicit_flag_file_is_loaded() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("flag.xml");
    fs::write(&cfg_path, "<config><dry_run>true</dry_run></config>").unwrap();

    let (loc, cfg) = load_config(Some(&cfg_path)).unwrap().unwrap();
    assert_eq!(loc, ConfigLocation::Flag(cfg_path));
    assert!(cfg.dry_run);
}
