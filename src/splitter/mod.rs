mod chunker;


pub use chunker::{Chunk, chunk_text};

use crate::error::CorpusError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Resolved options for one split run
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Input text file to split
    pub input: PathBuf,
    /// Target size per output file, in bytes
    pub target_size: u64,
    /// Output directory; defaults to the input file's parent
    pub output_dir: Option<PathBuf>,
    /// Output filename prefix; defaults to the input filename without extension
    pub prefix: Option<String>,
}

/// One output file produced by a split run
#[derive(Debug, Clone)]
pub struct SplitPart {
    pub path: PathBuf,
    pub size: u64,
}

/// Outcome of a split run
#[derive(Debug, Clone)]
pub struct SplitReport {
    /// Total input size in bytes
    pub input_size: u64,
    /// Output files in index order
    pub parts: Vec<SplitPart>,
}

/// Split the configured input file into paragraph-aligned parts.
///
/// Parts are written as `<prefix>_part<NNN><ext>` with a 1-based index,
/// zero-padded to at least three digits (wider if the part count needs it).
/// The extension is carried over from the input file (`.txt` when it has
/// none). An empty input produces no output files.
pub fn run_split(config: &SplitConfig) -> Result<SplitReport, CorpusError> {
    if config.target_size == 0 {
        return Err(CorpusError::InvalidArgument(
            "target size must be at least 1 byte".to_string(),
        ));
    }
    if !config.input.is_file() {
        return Err(CorpusError::NotFound(config.input.clone()));
    }

    let raw = fs::read(&config.input).map_err(|e| read_error(&config.input, e))?;
    let text = String::from_utf8(raw).map_err(|_| CorpusError::Decode(config.input.clone()))?;

    let output_dir = match &config.output_dir {
        Some(dir) => {
            // Created on demand so callers can point at a fresh directory
            fs::create_dir_all(dir).map_err(|e| CorpusError::Write {
                path: dir.clone(),
                source: e,
            })?;
            dir.clone()
        }
        None => config
            .input
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    let prefix = match &config.prefix {
        Some(p) => p.clone(),
        None => config
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "part".to_string()),
    };

    let extension = config
        .input
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_else(|| ".txt".to_string());

    let chunks = chunk_text(&text, config.target_size as usize);

    // Pad indices to the part count, never narrower than three digits
    let width = chunks.len().to_string().len().max(3);

    let mut parts = Vec::with_capacity(chunks.len());
    for (i, chunk) in chunks.iter().enumerate() {
        let name = format!("{}_part{:0width$}{}", prefix, i + 1, extension, width = width);
        let path = output_dir.join(name);
        fs::write(&path, &chunk.text).map_err(|e| CorpusError::Write {
            path: path.clone(),
            source: e,
        })?;
        parts.push(SplitPart {
            path,
            size: chunk.text.len() as u64,
        });
    }

    Ok(SplitReport {
        input_size: text.len() as u64,
        parts,
    })
}

fn read_error(path: &Path, source: io::Error) -> CorpusError {
    if source.kind() == io::ErrorKind::NotFound {
        CorpusError::NotFound(path.to_path_buf())
    } else {
        CorpusError::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}
