//! Per-line block classification.

/// Number of leading spaces that make up one list nesting level.
pub(crate) const INDENT_UNIT: usize = 2;

/// The block-level role of a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// `# Title`
    Heading1(&'a str),
    /// `## Heading`
    Heading2(&'a str),
    /// `- item`, `* item`, `+ item`, `1. item`, `1) item`
    Item {
        text: &'a str,
        /// Raw nesting level from indentation; the slide builder clamps it
        /// against the previous item before use.
        level: usize,
        ordered: bool,
        /// Literal numeral for ordered entries.
        number: Option<u32>,
    },
    /// Empty or whitespace-only.
    Blank,
    /// Anything else: a plain body line.
    Text(&'a str),
}

/// Classify one source line.
///
/// Headings take precedence over list markers, list markers over plain
/// text. Lines that merely resemble a construct (`#foo`, `###`, a bare `-`)
/// fall through to [`Line::Text`].
pub(crate) fn classify(line: &str) -> Line<'_> {
    let body = line.trim_start();
    if body.trim().is_empty() {
        return Line::Blank;
    }

    if let Some(heading) = classify_heading(body) {
        return heading;
    }

    let indent = line.chars().take_while(|c| c.is_whitespace()).count();
    let level = indent / INDENT_UNIT;

    if let Some(rest) = body.strip_prefix(['-', '*', '+'])
        && rest.starts_with(char::is_whitespace)
        && !rest.trim().is_empty()
    {
        return Line::Item {
            text: rest.trim(),
            level,
            ordered: false,
            number: None,
        };
    }

    if let Some((numeral, rest)) = split_numeral(body)
        && let Some(rest) = rest.strip_prefix(['.', ')'])
        && rest.starts_with(char::is_whitespace)
        && !rest.trim().is_empty()
    {
        return Line::Item {
            text: rest.trim(),
            level,
            ordered: true,
            number: numeral.parse().ok(),
        };
    }

    Line::Text(body.trim_end())
}

/// Recognize `#`/`##` headings. Exactly one or two hashes followed by
/// whitespace; deeper headings are not modeled and classify as text.
///
/// The heading text may be empty (`## ` with nothing after it); the slide
/// builder rejects that case with a validation error rather than silently
/// producing an untitled slide.
fn classify_heading(body: &str) -> Option<Line<'_>> {
    let hashes = body.chars().take_while(|&c| c == '#').count();
    let rest = &body[hashes..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    match hashes {
        1 => Some(Line::Heading1(rest.trim())),
        2 => Some(Line::Heading2(rest.trim())),
        _ => None,
    }
}

/// Split a leading run of ASCII digits off `body`, if any.
fn split_numeral(body: &str) -> Option<(&str, &str)> {
    let digits = body.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    Some(body.split_at(digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        assert_eq!(classify("# Title"), Line::Heading1("Title"));
        assert_eq!(classify("## Section"), Line::Heading2("Section"));
        assert_eq!(classify("  ## Indented"), Line::Heading2("Indented"));
    }

    #[test]
    fn test_deeper_headings_are_text() {
        assert_eq!(classify("### Too deep"), Line::Text("### Too deep"));
        assert_eq!(classify("#### Way too deep"), Line::Text("#### Way too deep"));
    }

    #[test]
    fn test_hash_without_space_is_text() {
        assert_eq!(classify("#hashtag"), Line::Text("#hashtag"));
        assert_eq!(classify("##also"), Line::Text("##also"));
    }

    #[test]
    fn test_empty_heading_text_is_still_a_heading() {
        // The builder turns this into a validation error.
        assert_eq!(classify("## "), Line::Heading2(""));
    }

    #[test]
    fn test_unordered_markers() {
        for marker in ["-", "*", "+"] {
            assert_eq!(
                classify(&format!("{marker} item")),
                Line::Item {
                    text: "item",
                    level: 0,
                    ordered: false,
                    number: None,
                }
            );
        }
    }

    #[test]
    fn test_ordered_markers() {
        assert_eq!(
            classify("1. first"),
            Line::Item {
                text: "first",
                level: 0,
                ordered: true,
                number: Some(1),
            }
        );
        assert_eq!(
            classify("42) forty-two"),
            Line::Item {
                text: "forty-two",
                level: 0,
                ordered: true,
                number: Some(42),
            }
        );
    }

    #[test]
    fn test_indent_maps_to_level() {
        assert_eq!(
            classify("  - nested"),
            Line::Item {
                text: "nested",
                level: 1,
                ordered: false,
                number: None,
            }
        );
        assert_eq!(
            classify("    - deeper"),
            Line::Item {
                text: "deeper",
                level: 2,
                ordered: false,
                number: None,
            }
        );
        // Odd indentation rounds down.
        assert_eq!(
            classify("   - odd"),
            Line::Item {
                text: "odd",
                level: 1,
                ordered: false,
                number: None,
            }
        );
    }

    #[test]
    fn test_bare_markers_are_text() {
        assert_eq!(classify("-"), Line::Text("-"));
        assert_eq!(classify("- "), Line::Text("-"));
        assert_eq!(classify("1."), Line::Text("1."));
        assert_eq!(classify("3untitled"), Line::Text("3untitled"));
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify("   \t "), Line::Blank);
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(classify("Just a sentence."), Line::Text("Just a sentence."));
        assert_eq!(classify("  indented text  "), Line::Text("indented text"));
    }
}
