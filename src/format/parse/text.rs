//! Line-oriented text files.
//!
//! mesoSPIM writes its metadata as one `[Marker] value` pair per line. The
//! reader here returns those lines as an ordered list, optionally trimmed,
//! filtered and naturally sorted.

use std::fs;
use std::ops::Range;
use std::path::Path;

use crate::error::ParseError;

use super::natural::natural_sort;

/// How lines are cleaned up after reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLineOptions {
    /// Trim leading and trailing whitespace from every line
    pub strip: bool,

    /// Sort lines in natural order
    pub sort: bool,

    /// Drop lines that are empty (after stripping, if enabled)
    pub remove_empty_lines: bool,
}

impl Default for TextLineOptions {
    fn default() -> Self {
        TextLineOptions {
            strip: true,
            sort: false,
            remove_empty_lines: true,
        }
    }
}

impl TextLineOptions {
    /// Enable or disable natural sorting.
    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Enable or disable stripping whitespace.
    pub fn with_strip(mut self, strip: bool) -> Self {
        self.strip = strip;
        self
    }

    /// Enable or disable dropping empty lines.
    pub fn with_remove_empty_lines(mut self, remove: bool) -> Self {
        self.remove_empty_lines = remove;
        self
    }
}

/// Read all lines from a text file.
pub fn get_text_lines(path: &Path, options: &TextLineOptions) -> Result<Vec<String>, ParseError> {
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_lines(&text, options))
}

/// Read a single line (after cleanup) by index.
pub fn get_text_line(
    path: &Path,
    index: usize,
    options: &TextLineOptions,
) -> Result<String, ParseError> {
    let mut lines = get_text_lines(path, options)?;
    let len = lines.len();
    if index >= len {
        return Err(ParseError::LineOutOfRange { index, len });
    }
    Ok(lines.swap_remove(index))
}

/// Read a range of lines (after cleanup).
///
/// The range is clamped to the number of available lines.
pub fn get_text_line_range(
    path: &Path,
    range: Range<usize>,
    options: &TextLineOptions,
) -> Result<Vec<String>, ParseError> {
    let lines = get_text_lines(path, options)?;
    let end = range.end.min(lines.len());
    let start = range.start.min(end);
    Ok(lines.into_iter().skip(start).take(end - start).collect())
}

/// Split text into cleaned-up lines.
pub fn split_lines(text: &str, options: &TextLineOptions) -> Vec<String> {
    let mut lines: Vec<String> = text
        .lines()
        .map(|line| if options.strip { line.trim() } else { line })
        .filter(|line| !options.remove_empty_lines || !line.is_empty())
        .map(str::to_string)
        .collect();

    if options.sort {
        natural_sort(&mut lines);
    }
    lines
}
