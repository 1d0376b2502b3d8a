use super::*;
use crate::error::CorpusError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn config(input_dir: &Path, output_file: PathBuf) -> ConcatConfig {
    ConcatConfig {
        input_dir: input_dir.to_path_buf(),
        output_file,
        delimiter: DEFAULT_DELIMITER.to_string(),
    }
}

#[test]
fn test_concat_two_files_default_delimiter() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::write(dir.path().join("b.txt"), "world").unwrap();
    let output = dir.path().join("combined.dat");

    let report = run_concat(&config(dir.path(), output.clone())).unwrap();
    assert_eq!(report.written, 2);
    assert!(report.skipped.is_empty());

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "=== File: a.txt ===\n\nhello\n\n=== File: b.txt ===\n\nworld\n\n"
    );
}

#[test]
fn test_concat_sorts_by_file_name() {
    let dir = tempdir().unwrap();
    // Created out of order on purpose
    fs::write(dir.path().join("c.txt"), "3").unwrap();
    fs::write(dir.path().join("a.txt"), "1").unwrap();
    fs::write(dir.path().join("b.txt"), "2").unwrap();
    let output = dir.path().join("out.dat");

    run_concat(&config(dir.path(), output.clone())).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let pos_a = text.find("File: a.txt").unwrap();
    let pos_b = text.find("File: b.txt").unwrap();
    let pos_c = text.find("File: c.txt").unwrap();
    assert!(pos_a < pos_b && pos_b < pos_c);
}

#[test]
fn test_concat_custom_delimiter() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    let output = dir.path().join("out.dat");

    let report = run_concat(&ConcatConfig {
        input_dir: dir.path().to_path_buf(),
        output_file: output.clone(),
        delimiter: "###".to_string(),
    })
    .unwrap();
    assert_eq!(report.written, 1);

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "### File: a.txt ###\n\nhello\n\n"
    );
}

#[test]
fn test_concat_prefers_txt_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "text").unwrap();
    fs::write(dir.path().join("b.md"), "markdown").unwrap();
    let output = dir.path().join("out.dat");

    let report = run_concat(&config(dir.path(), output.clone())).unwrap();
    assert_eq!(report.written, 1);

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("File: a.txt"));
    assert!(!text.contains("File: b.md"));
}

#[test]
fn test_concat_falls_back_to_all_files() {
    // Without any .txt file, every regular file is taken
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.md"), "one").unwrap();
    fs::write(dir.path().join("b.rst"), "two").unwrap();
    let output = dir.path().join("out.dat");

    let report = run_concat(&config(dir.path(), output.clone())).unwrap();
    assert_eq!(report.written, 2);

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("File: a.md"));
    assert!(text.contains("File: b.rst"));
}

#[test]
fn test_concat_does_not_descend_into_subdirectories() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("top.txt"), "top").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("nested.txt"), "nested").unwrap();
    let output = dir.path().join("out.dat");

    let report = run_concat(&config(dir.path(), output.clone())).unwrap();
    assert_eq!(report.written, 1);
    assert!(!fs::read_to_string(&output).unwrap().contains("nested.txt"));
}

#[test]
fn test_concat_skips_non_utf8_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("good.txt"), "fine").unwrap();
    fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0x00]).unwrap();
    let output = dir.path().join("out.dat");

    let report = run_concat(&config(dir.path(), output.clone())).unwrap();
    assert_eq!(report.written, 1);
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].ends_with("bad.txt"));

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("File: good.txt"));
    assert!(!text.contains("File: bad.txt"));
}

#[test]
fn test_concat_all_files_skipped_is_empty_input() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.txt"), [0xff, 0xfe]).unwrap();
    let output = dir.path().join("out.dat");

    let result = run_concat(&config(dir.path(), output.clone()));
    assert!(matches!(result, Err(CorpusError::EmptyInput(_))));
    assert!(!output.exists());
}

#[test]
fn test_concat_empty_directory() {
    let dir = tempdir().unwrap();
    let result = run_concat(&config(dir.path(), dir.path().join("out.dat")));
    assert!(matches!(result, Err(CorpusError::EmptyInput(_))));
}

#[test]
fn test_concat_missing_directory() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let result = run_concat(&config(&missing, dir.path().join("out.dat")));
    assert!(matches!(result, Err(CorpusError::NotFound(_))));
}

#[test]
fn test_concat_unwritable_output_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    // Parent of the output path is a regular file, so the write must fail
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let result = run_concat(&config(dir.path(), blocker.join("out.dat")));
    assert!(matches!(result, Err(CorpusError::Write { .. })));
}

#[test]
fn test_concat_overwrites_existing_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "new").unwrap();
    let output = dir.path().join("out.dat");
    fs::write(&output, "stale content that should vanish").unwrap();

    run_concat(&config(dir.path(), output.clone())).unwrap();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "=== File: a.txt ===\n\nnew\n\n"
    );
}
