use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use super::error::{Result, SortError};

/// Splits `text` into lines, each one keeping its trailing `'\n'`.
///
/// The last line is returned as is if the text doesn't end with a newline.
/// `"\r\n"` terminators are kept intact as the `'\r'` stays part of the line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(String::from).collect()
}

/// Reads the whole file at `path` and splits it into lines.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| SortError::MissingInput {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| SortError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = split_lines(&text);
    tracing::debug!(lines = lines.len(), bytes = text.len(), "read {}", path.display());
    Ok(lines)
}

/// Sorts the lines in place. The sort is stable and compares lines byte-wise.
pub fn sort_lines(lines: &mut [String]) {
    lines.sort();
}

/// Concatenates `lines` and writes them to `path` in a single write,
/// truncating the file if it exists.
pub fn write_lines<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<()> {
    let path = path.as_ref();
    let content = lines.concat();
    let to_err = |source: io::Error| SortError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(to_err)?;
    file.write_all(content.as_bytes()).map_err(to_err)?;
    file.flush().map_err(to_err)
}

/// Returns `true` if no line is greater than the one after it.
pub fn is_sorted(lines: &[String]) -> bool {
    lines.windows(2).all(|pair| pair[0] <= pair[1])
}
