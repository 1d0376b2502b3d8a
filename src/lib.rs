// Public API exports
pub mod concat;
pub mod error;
pub mod size;
pub mod splitter;

// Re-export main types for convenience
pub use concat::{ConcatConfig, ConcatReport, DEFAULT_DELIMITER, run_concat};
pub use error::CorpusError;
pub use size::{format_size, parse_size};
pub use splitter::{Chunk, SplitConfig, SplitPart, SplitReport, chunk_text, run_split};
