//! The slide-building state machine.

use crate::deck::{ListItem, Slide, SlideContent};
use crate::error::{Error, Result};

use super::inline::format_line;
use super::line::{Line, classify};

/// Where the builder is in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No heading seen yet; loose content here has no slide to land on.
    NoSlideYet,
    /// Inside the leading title slide, accumulating subtitle lines.
    InTitleSlide,
    /// Inside a content slide.
    InContentSlide,
}

/// Parse a Markdown document into an ordered sequence of slides.
///
/// The first `# Title` heading (and only that one) opens a title slide;
/// every `## Heading` opens a content slide. A document without any heading
/// has no addressable slide boundary and fails validation.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the input is empty, contains no
/// heading, or contains a level-2 heading with no title text.
pub fn parse_markdown(content: &str) -> Result<Vec<Slide>> {
    if content.trim().is_empty() {
        return Err(Error::validation("document cannot be empty"));
    }

    let mut builder = SlideBuilder::new();
    for line in content.lines() {
        builder.push_line(line)?;
    }
    builder.finish()
}

struct SlideBuilder {
    slides: Vec<Slide>,
    state: State,
    /// Subtitle lines collected while inside the title slide.
    subtitle: Vec<String>,
    /// Level of the previous list item on the current slide, for clamping.
    last_level: Option<usize>,
}

impl SlideBuilder {
    fn new() -> Self {
        Self {
            slides: Vec::new(),
            state: State::NoSlideYet,
            subtitle: Vec::new(),
            last_level: None,
        }
    }

    fn push_line(&mut self, raw: &str) -> Result<()> {
        match classify(raw) {
            Line::Blank => {}

            // Only the first H1 of the document is privileged; any later
            // one is ordinary text content.
            Line::Heading1(title) if self.state == State::NoSlideYet => {
                self.slides.push(Slide::title_slide(title));
                self.state = State::InTitleSlide;
            }

            Line::Heading2(title) => {
                if title.is_empty() {
                    return Err(Error::validation("slide title cannot be empty"));
                }
                self.finish_subtitle();
                self.slides.push(Slide::content_slide(title));
                self.state = State::InContentSlide;
                self.last_level = None;
            }

            Line::Item {
                text,
                level,
                ordered,
                number,
            } if self.state == State::InContentSlide => {
                let level = self.clamp_level(level);
                self.push_content(SlideContent::Item(ListItem {
                    content: format_line(text),
                    level,
                    ordered,
                    number,
                }));
            }

            // Text lines, stray H1s, and (on the title slide) list syntax.
            other => match self.state {
                // Content before the first heading is dropped.
                State::NoSlideYet => {}
                State::InTitleSlide => self.subtitle.push(raw.trim().to_string()),
                State::InContentSlide => {
                    let text = match other {
                        Line::Text(text) => text,
                        _ => raw.trim(),
                    };
                    self.push_content(SlideContent::Text(format_line(text)));
                }
            },
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<Slide>> {
        self.finish_subtitle();
        if self.slides.is_empty() {
            return Err(Error::validation(
                "document must contain at least one heading (# or ##)",
            ));
        }
        Ok(self.slides)
    }

    fn push_content(&mut self, content: SlideContent) {
        if let Some(slide) = self.slides.last_mut() {
            slide.content.push(content);
        }
    }

    /// A nesting level may grow by at most one step relative to the
    /// previous item, regardless of how far the indentation jumps.
    fn clamp_level(&mut self, level: usize) -> usize {
        let clamped = match self.last_level {
            Some(last) => level.min(last + 1),
            None => 0,
        };
        self.last_level = Some(clamped);
        clamped
    }

    fn finish_subtitle(&mut self) {
        if self.subtitle.is_empty() {
            return;
        }
        let text = self.subtitle.join(" ").trim().to_string();
        self.subtitle.clear();
        if let Some(first) = self.slides.first_mut()
            && first.is_title_slide
        {
            first.subtitle = Some(text);
        }
    }
}
