//! # mdeck
//!
//! Convert a constrained subset of Markdown into a PowerPoint (`.pptx`)
//! presentation without touching a presentation editor.
//!
//! ## Grammar
//!
//! - `# Title` — the (single, leading) title slide; following text lines
//!   become the subtitle
//! - `## Heading` — one content slide per heading
//! - `- item` / `1. item` — bulleted and numbered lists, nested by
//!   indentation (two spaces per level)
//! - `**bold**`, `*italic*`, `***both***` (and the `_` equivalents)
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdeck::convert;
//!
//! let markdown = "# My Deck\n\nA subtitle\n\n## First Slide\n\n- one\n- two";
//! let path = convert(markdown, "deck.pptx")?;
//! # Ok::<(), mdeck::Error>(())
//! ```
//!
//! ## Working with the slide model
//!
//! [`parse_markdown`] exposes the intermediate representation, a flat
//! sequence of [`Slide`] records:
//!
//! ```
//! use mdeck::parse_markdown;
//!
//! let slides = parse_markdown("## Agenda\n\n- intro\n- demo").unwrap();
//! assert_eq!(slides.len(), 1);
//! assert_eq!(slides[0].title, "Agenda");
//! ```
//!
//! [`write_pptx`] renders any slide sequence to disk; the two stages are
//! independent and both deterministic.

pub mod convert;
pub mod deck;
pub mod error;
pub mod markdown;
pub mod pptx;

pub use convert::{convert, convert_file};
pub use deck::{ListItem, Slide, SlideContent, TextRun};
pub use error::{Error, Result};
pub use markdown::parse_markdown;
pub use pptx::{write_pptx, write_pptx_to_writer};
