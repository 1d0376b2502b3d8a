#[cfg(test)]
mod tests;

use crate::error::CorpusError;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default marker string wrapping each file-name header
pub const DEFAULT_DELIMITER: &str = "===";

/// Resolved options for one concatenation run
#[derive(Debug, Clone)]
pub struct ConcatConfig {
    /// Directory containing the input text files
    pub input_dir: PathBuf,
    /// Path of the single output file
    pub output_file: PathBuf,
    /// Marker string wrapping each file-name header
    pub delimiter: String,
}

/// Outcome of a concatenation run
#[derive(Debug, Clone)]
pub struct ConcatReport {
    /// Number of files written into the output
    pub written: usize,
    /// Files skipped because their content was not valid UTF-8
    pub skipped: Vec<PathBuf>,
}

/// Concatenate the text files of a directory into one output file.
///
/// Files directly under `input_dir` with a `.txt` extension are selected;
/// if there are none, every regular file in the directory is taken instead.
/// Selection is sorted by file name so repeated runs produce identical
/// output. Each file is written as a `<delimiter> File: <name> <delimiter>`
/// header, a blank line, the file content, and a trailing blank line.
///
/// Files that are not valid UTF-8 are skipped and reported; the run fails
/// with `EmptyInput` only if nothing at all could be written.
pub fn run_concat(config: &ConcatConfig) -> Result<ConcatReport, CorpusError> {
    let files = collect_text_files(&config.input_dir)?;

    let mut output = String::new();
    let mut written = 0;
    let mut skipped = Vec::new();

    for path in &files {
        let raw = fs::read(path).map_err(|e| CorpusError::Read {
            path: path.clone(),
            source: e,
        })?;
        let content = match String::from_utf8(raw) {
            Ok(text) => text,
            Err(_) => {
                skipped.push(path.clone());
                continue;
            }
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        output.push_str(&format!("{0} File: {1} {0}\n\n", config.delimiter, name));
        output.push_str(&content);
        output.push_str("\n\n");
        written += 1;
    }

    if written == 0 {
        return Err(CorpusError::EmptyInput(config.input_dir.clone()));
    }

    fs::write(&config.output_file, output).map_err(|e| CorpusError::Write {
        path: config.output_file.clone(),
        source: e,
    })?;

    Ok(ConcatReport { written, skipped })
}

/// Enumerate eligible files directly under `dir`, sorted by name.
///
/// Non-recursive by design: subdirectories are not descended into.
fn collect_text_files(dir: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    if !dir.is_dir() {
        return Err(CorpusError::NotFound(dir.to_path_buf()));
    }

    let mut all_files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| CorpusError::Read {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        if entry.file_type().is_file() {
            all_files.push(entry.into_path());
        }
    }

    let mut selected: Vec<PathBuf> = all_files
        .iter()
        .filter(|p| has_txt_extension(p))
        .cloned()
        .collect();

    // No .txt files at all: take every regular file in the directory
    if selected.is_empty() {
        selected = all_files;
    }

    if selected.is_empty() {
        return Err(CorpusError::EmptyInput(dir.to_path_buf()));
    }

    selected.sort();
    Ok(selected)
}

fn has_txt_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
}
