use file_sorter::{RecordingReporter, Sorter};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use walkdir::WalkDir;

/// Relative path -> bytes for every file under `root`.
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            (rel, fs::read(e.path()).unwrap())
        })
        .collect()
}

#[test]
fn second_run_produces_identical_output() -> Result<(), Box<dyn std::error::Error>> {
    let src = tempdir()?;
    let out = tempdir()?;
    for (i, dir) in ["", "x", "x/y", "z"].iter().enumerate() {
        let d = src.path().join(dir);
        fs::create_dir_all(&d)?;
        fs::write(d.join(format!("f{i}.txt")), format!("text {i}"))?;
        fs::write(d.join(format!("g{i}.BIN")), vec![i as u8; 5000 + i])?;
        fs::write(d.join(format!("README{i}")), "plain")?;
    }

    let rec = RecordingReporter::new();
    let first = Sorter::new(&rec).run(src.path(), out.path())?;
    let after_first = snapshot(out.path());
    let second = Sorter::new(&rec).run(src.path(), out.path())?;
    let after_second = snapshot(out.path());

    assert_eq!(first, second);
    assert_eq!(first.copied, 12);
    assert_eq!(after_first, after_second);
    assert_eq!(after_first.len(), 12);
    assert_eq!(after_first[&PathBuf::from("bin/g3.BIN")], vec![3u8; 5003]);
    Ok(())
}

// Many files racing into the same bucket: bucket creation must never fail.
#[test]
fn shared_bucket_under_heavy_fan_out() -> Result<(), Box<dyn std::error::Error>> {
    let src = tempdir()?;
    let out = tempdir()?;
    for d in 0..20 {
        let dir = src.path().join(format!("dir_{d:02}"));
        fs::create_dir_all(&dir)?;
        for f in 0..25 {
            let mut file = fs::File::create(dir.join(format!("d{d:02}_f{f:02}.log")))?;
            write!(file, "{d}:{f}")?;
        }
    }

    let rec = RecordingReporter::new();
    let summary = Sorter::new(&rec).workers(8).run(src.path(), out.path())?;

    assert_eq!(summary.copied, 500);
    assert_eq!(summary.failures(), 0, "failures: {:?}", rec.failures());
    assert_eq!(fs::read_dir(out.path())?.count(), 1, "only the log bucket");
    assert_eq!(fs::read_dir(out.path().join("log"))?.count(), 500);
    assert_eq!(
        fs::read_to_string(out.path().join("log/d07_f13.log"))?,
        "7:13"
    );
    Ok(())
}

// Depth larger than the worker count: nested scopes must not starve the pool.
#[test]
fn deep_tree_with_single_worker() -> Result<(), Box<dyn std::error::Error>> {
    let src = tempdir()?;
    let out = tempdir()?;
    let mut dir = src.path().to_path_buf();
    for level in 0..40 {
        dir.push(format!("l{level}"));
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("at_{level}.md")), level.to_string())?;
    }

    let rec = RecordingReporter::new();
    let summary = Sorter::new(&rec).workers(1).run(src.path(), out.path())?;

    assert_eq!(summary.copied, 40);
    assert_eq!(fs::read_to_string(out.path().join("md/at_39.md"))?, "39");
    Ok(())
}
