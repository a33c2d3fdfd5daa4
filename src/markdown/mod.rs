//! Markdown parsing into the slide model.
//!
//! The grammar is a small, line-oriented Markdown subset:
//!
//! - `# Title` — opens the (single, leading) title slide
//! - `## Heading` — opens a content slide
//! - `- item` / `* item` / `+ item` — unordered list entry
//! - `1. item` / `1) item` — ordered list entry
//! - anything else — a loose body line (or subtitle text on the title slide)
//!
//! Indentation maps to list nesting at two spaces per level. Bold and italic
//! emphasis (`**`/`__`, `*`/`_`, and the combined `***`/`___`) is resolved
//! per line into [`TextRun`](crate::deck::TextRun) spans; everything else is
//! passed through literally.
//!
//! The design separates the three concerns of the grammar:
//!
//! - [`line`]: per-line block classification (headings, list entries, text)
//! - [`inline`]: emphasis tokenization within a single line
//! - [`parser`]: the slide-building state machine over classified lines

pub(crate) mod inline;
pub(crate) mod line;
mod parser;

pub use parser::parse_markdown;
