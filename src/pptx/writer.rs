//! PPTX container assembly.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::deck::Slide;
use crate::error::{Error, Result};

use super::parts;
use super::slide::slide_xml;

/// Write slides to a `.pptx` file on disk, overwriting any existing file.
///
/// The output path must carry a `.pptx` extension (case-insensitive);
/// missing parent directories are created. Returns the absolute path of
/// the written file.
///
/// # Example
///
/// ```no_run
/// use mdeck::{parse_markdown, write_pptx};
///
/// let slides = parse_markdown("## Hello\n\n- world")?;
/// write_pptx(&slides, "hello.pptx")?;
/// # Ok::<(), mdeck::Error>(())
/// ```
pub fn write_pptx<P: AsRef<Path>>(slides: &[Slide], path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    validate_output_path(path)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    write_pptx_to_writer(slides, file)?;
    Ok(std::path::absolute(path)?)
}

/// Write slides as a PPTX package to any [`Write`] + [`Seek`] destination.
///
/// Useful for writing to memory buffers. Output is byte-deterministic for
/// identical input: no timestamps or random identifiers are embedded.
pub fn write_pptx_to_writer<W: Write + Seek>(slides: &[Slide], writer: W) -> Result<()> {
    let mut zip = ZipWriter::new(writer);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let deck_title = slides.first().map(|s| s.title.as_str()).unwrap_or_default();
    let count = slides.len();

    let mut part = |name: &str, content: String| -> Result<()> {
        zip.start_file(name, options)?;
        zip.write_all(content.as_bytes())?;
        Ok(())
    };

    part("[Content_Types].xml", parts::content_types(count))?;
    part("_rels/.rels", parts::root_rels())?;
    part("docProps/core.xml", parts::core_props(deck_title))?;
    part("docProps/app.xml", parts::app_props(count))?;
    part("ppt/presentation.xml", parts::presentation(count))?;
    part("ppt/_rels/presentation.xml.rels", parts::presentation_rels(count))?;
    part("ppt/presProps.xml", parts::pres_props())?;
    part("ppt/theme/theme1.xml", parts::theme())?;
    part("ppt/slideMasters/slideMaster1.xml", parts::slide_master())?;
    part(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        parts::slide_master_rels(),
    )?;
    part("ppt/slideLayouts/slideLayout1.xml", parts::slide_layout())?;
    part(
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        parts::slide_layout_rels(),
    )?;

    for (index, slide) in slides.iter().enumerate() {
        let n = index + 1;
        part(&format!("ppt/slides/slide{n}.xml"), slide_xml(slide))?;
        part(
            &format!("ppt/slides/_rels/slide{n}.xml.rels"),
            parts::slide_rels(),
        )?;
    }

    zip.finish()?;
    Ok(())
}

/// Reject output paths without a `.pptx` extension before any work happens.
pub(crate) fn validate_output_path(path: &Path) -> Result<()> {
    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pptx"));
    if !has_extension {
        return Err(Error::validation(format!(
            "output path must have a .pptx extension: {}",
            path.display()
        )));
    }
    Ok(())
}
