use crate::error::CorpusError;

/// Parse a human-readable size string into bytes.
///
/// Accepts an optional unit suffix (`B`, `KB`, `MB`, `GB`), case-insensitive,
/// with powers-of-two multipliers (1 KB = 1024 B). A bare number is taken as
/// bytes. Fractional values like "1.5MB" are allowed; the result is truncated
/// to whole bytes. Zero and negative sizes are rejected.
pub fn parse_size(input: &str) -> Result<u64, CorpusError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CorpusError::InvalidArgument(
            "size must not be empty".to_string(),
        ));
    }

    let upper = trimmed.to_uppercase();
    // Check longer suffixes first so "KB" isn't matched as "B"
    let units: [(&str, u64); 4] = [
        ("KB", 1024),
        ("MB", 1024 * 1024),
        ("GB", 1024 * 1024 * 1024),
        ("B", 1),
    ];

    let (number_part, multiplier) = units
        .iter()
        .find(|(suffix, _)| upper.ends_with(suffix))
        .map(|(suffix, mult)| (&upper[..upper.len() - suffix.len()], *mult))
        .unwrap_or((upper.as_str(), 1));

    let value: f64 = number_part.trim().parse().map_err(|_| {
        CorpusError::InvalidArgument(format!("invalid size format: {}", input))
    })?;

    if !value.is_finite() || value <= 0.0 {
        return Err(CorpusError::InvalidArgument(format!(
            "size must be positive: {}",
            input
        )));
    }

    let bytes = (value * multiplier as f64) as u64;
    if bytes == 0 {
        return Err(CorpusError::InvalidArgument(format!(
            "size rounds to zero bytes: {}",
            input
        )));
    }

    Ok(bytes)
}

/// Format a byte count as a human-readable size with two decimals
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in ["B", "KB", "MB"] {
        if size < 1024.0 {
            return format!("{:.2}{}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.2}GB", size)
}
