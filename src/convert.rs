//! Top-level conversion entry points.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::markdown::parse_markdown;
use crate::pptx::{validate_output_path, write_pptx};

/// Convert Markdown content to a PPTX file at `output`.
///
/// The output path is validated before any parsing, so a bad extension
/// never leaves a partial file behind; conversion is all-or-nothing.
/// Returns the absolute path of the written file.
///
/// # Example
///
/// ```no_run
/// let path = mdeck::convert("# Hello\n\n## World\n\n- a slide", "hello.pptx")?;
/// # Ok::<(), mdeck::Error>(())
/// ```
pub fn convert<P: AsRef<Path>>(content: &str, output: P) -> Result<PathBuf> {
    let output = output.as_ref();
    validate_output_path(output)?;
    let slides = parse_markdown(content)?;
    write_pptx(&slides, output)
}

/// Convert a Markdown file to a PPTX file.
///
/// With no explicit `output`, the result lands next to the input with a
/// `.pptx` extension. The input must exist, be a regular file, and decode
/// as UTF-8.
pub fn convert_file<P: AsRef<Path>>(input: P, output: Option<&Path>) -> Result<PathBuf> {
    let input = input.as_ref();
    if !input.exists() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }
    if !input.is_file() {
        return Err(Error::validation(format!(
            "input path is not a file: {}",
            input.display()
        )));
    }

    let content = String::from_utf8(fs::read(input)?)?;
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension("pptx"),
    };
    convert(&content, output)
}
