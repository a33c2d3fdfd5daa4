//! Intermediate representation of a slide deck.
//!
//! The parser produces a flat sequence of [`Slide`] values; the PPTX writer
//! consumes them without mutation. Construction happens once during parsing,
//! so everything here is plain owned data with no interior mutability.

/// A contiguous span of text sharing one formatting state.
///
/// Runs are ordered within their parent; concatenating the `text` of all
/// runs for a line reproduces that line with emphasis markers stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl TextRun {
    pub fn new(text: impl Into<String>, bold: bool, italic: bool) -> Self {
        Self {
            text: text.into(),
            bold,
            italic,
        }
    }

    /// A run with no formatting applied.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, false, false)
    }
}

/// One list entry with zero-based nesting depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub content: Vec<TextRun>,
    pub level: usize,
    pub ordered: bool,
    /// Literal numeral from the source, e.g. the `5` in `5. item`.
    ///
    /// Kept for inspection only: the writer assigns its own sequential
    /// ordinals and never consults this value.
    pub number: Option<u32>,
}

/// One element of a slide body, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideContent {
    /// A loose body line; becomes a single paragraph with one run per span.
    Text(Vec<TextRun>),
    /// A bulleted or numbered list entry.
    Item(ListItem),
}

/// A single slide prior to rendering.
///
/// The first slide of a document is the title slide if the document opens
/// with a level-1 heading; every other slide is a content slide keyed by a
/// level-2 heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub content: Vec<SlideContent>,
    pub is_title_slide: bool,
    /// Only ever set on the title slide.
    pub subtitle: Option<String>,
}

impl Slide {
    /// Create the (unique, leading) title slide.
    pub fn title_slide(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Vec::new(),
            is_title_slide: true,
            subtitle: None,
        }
    }

    /// Create a content slide keyed by a level-2 heading.
    pub fn content_slide(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Vec::new(),
            is_title_slide: false,
            subtitle: None,
        }
    }
}
