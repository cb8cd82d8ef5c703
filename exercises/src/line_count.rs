//! Meaningful line counting
//!
//! A line is meaningful when it has something other than whitespace on it
//! and does not start with a comment marker. Files are read in one go,
//! either into a `String` or through a read-only memory map.

use std::fs;
#[cfg(feature = "mmap")]
use std::fs::File;
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::MmapOptions;
use tracing::{debug, warn};

use crate::config::LineCountConfig;
use crate::error::{LineCountError, Result};

/// Count meaningful lines in already loaded text
pub fn count_meaningful_lines(text: &str, config: &LineCountConfig) -> usize {
    text.lines().filter(|line| config.is_meaningful(line)).count()
}

/// Count lines in the file at `path` that are non-empty after trimming and
/// do not start with `#`
///
/// Fails with [`LineCountError::NotFound`] when the path does not resolve.
pub fn meaningful_line_count<P: AsRef<Path>>(path: P) -> Result<usize> {
    meaningful_line_count_with_config(path, &LineCountConfig::default())
}

/// Count meaningful lines using a custom configuration
pub fn meaningful_line_count_with_config<P: AsRef<Path>>(
    path: P,
    config: &LineCountConfig,
) -> Result<usize> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        warn!(path = %path.display(), error = %e, "Failed to read file");
        LineCountError::from_io(path.to_path_buf(), e)
    })?;

    let count = count_meaningful_lines(&text, config);
    debug!(path = %path.display(), bytes = text.len(), count, "Counted meaningful lines");
    Ok(count)
}

/// Count meaningful lines through a read-only memory map
#[cfg(feature = "mmap")]
pub fn meaningful_line_count_mmap<P: AsRef<Path>>(
    path: P,
    config: &LineCountConfig,
) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        warn!(path = %path.display(), error = %e, "Failed to open file");
        LineCountError::from_io(path.to_path_buf(), e)
    })?;

    let len = file
        .metadata()
        .map_err(|e| LineCountError::from_io(path.to_path_buf(), e))?
        .len();
    if len == 0 {
        debug!(path = %path.display(), "Empty file");
        return Ok(0);
    }

    // SAFETY: Read-only mapping; the map lives until the count is done
    let mmap = unsafe {
        MmapOptions::new()
            .map(&file)
            .map_err(|e| LineCountError::from_io(path.to_path_buf(), e))?
    };

    let text = std::str::from_utf8(&mmap).map_err(|_| LineCountError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    let count = count_meaningful_lines(text, config);
    debug!(path = %path.display(), bytes = mmap.len(), count, "Counted meaningful lines (mmap)");
    Ok(count)
}
