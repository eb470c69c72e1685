pub mod output;

pub use output::{create_writer, result_line, OutputFormat, ReportWriter};

use crate::errors::{AdReachError, Result};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| AdReachError::io(path, e))
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Print `prompt` without a newline and read one line of the answer.
///
/// Returns an empty string at end of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> std::io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
