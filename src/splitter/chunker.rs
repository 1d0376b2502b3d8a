/// A contiguous slice of the source text assigned to one output file
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    /// The text content of this chunk
    pub text: String,
    /// Byte offset in the original text (start, inclusive)
    pub start_offset: usize,
    /// Byte offset in the original text (end, exclusive)
    pub end_offset: usize,
}

/// Split text into chunks at paragraph boundaries.
///
/// A paragraph boundary is any position immediately following two or more
/// consecutive `\n` bytes. Each chunk stays at or below `target_size` bytes
/// when a boundary exists within that budget; a single paragraph larger than
/// the budget produces one oversized chunk spanning to the next boundary
/// (never a mid-paragraph cut). Concatenating the chunk texts in order
/// reproduces the input byte-for-byte.
///
/// Empty input produces no chunks.
pub fn chunk_text(text: &str, target_size: usize) -> Vec<Chunk> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut chunks = Vec::new();
    let mut cursor = 0;

    while cursor < len {
        let candidate = (cursor + target_size).min(len);

        let cut = if candidate == len {
            // Remainder fits in the budget; end-of-text is always a valid cut
            len
        } else {
            match boundary_at_or_before(bytes, cursor, candidate) {
                Some(boundary) => boundary,
                // Oversized paragraph: extend past the budget to the next
                // boundary so the paragraph is never truncated
                None => boundary_after(bytes, candidate).unwrap_or(len),
            }
        };

        // Cuts land immediately after '\n' bytes or at end-of-text, both of
        // which are valid UTF-8 char boundaries
        chunks.push(Chunk {
            text: text[cursor..cut].to_string(),
            start_offset: cursor,
            end_offset: cut,
        });
        cursor = cut;
    }

    chunks
}

/// True if `pos` sits immediately after two consecutive `\n` bytes
fn is_paragraph_boundary(bytes: &[u8], pos: usize) -> bool {
    pos >= 2 && bytes[pos - 1] == b'\n' && bytes[pos - 2] == b'\n'
}

/// Nearest paragraph boundary at or before `candidate`, strictly after `cursor`
fn boundary_at_or_before(bytes: &[u8], cursor: usize, candidate: usize) -> Option<usize> {
    (cursor + 1..=candidate)
        .rev()
        .find(|&pos| is_paragraph_boundary(bytes, pos))
}

/// First paragraph boundary strictly after `candidate`
fn boundary_after(bytes: &[u8], candidate: usize) -> Option<usize> {
    (candidate + 1..bytes.len()).find(|&pos| is_paragraph_boundary(bytes, pos))
}
