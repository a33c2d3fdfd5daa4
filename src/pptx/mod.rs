//! PPTX (PresentationML) generation.
//!
//! A `.pptx` package is a zip archive of XML parts: a presentation part
//! listing the slides, one slide master with a single blank layout, a
//! theme, and one part per slide. This module generates the whole package
//! directly rather than driving a presentation library:
//!
//! - [`parts`]: fixed package plumbing (content types, relationships,
//!   master, layout, theme, document properties)
//! - [`slide`]: per-slide shape trees (text boxes, paragraphs, runs,
//!   bullets, ordinals, auto-fit)
//! - [`writer`]: zip assembly and output-path validation
//!
//! Rendering is deterministic: identical slide input produces a
//! byte-identical package.

mod parts;
mod slide;
mod writer;

pub use writer::{write_pptx, write_pptx_to_writer};
pub(crate) use writer::validate_output_path;
