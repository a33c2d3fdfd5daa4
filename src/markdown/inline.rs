//! Inline emphasis tokenization.
//!
//! Splits one line of text into [`TextRun`] spans, resolving `*`/`_`
//! emphasis markers. Markers pair non-greedily with the nearest identical
//! closer; an unpaired marker is literal text, never an error.

use crate::deck::TextRun;

/// Tokenize a single line into formatted runs.
///
/// Longer delimiters win at any given position: `***`/`___` opens
/// bold+italic, `**`/`__` bold, `*`/`_` italic. Different families nest
/// (the inner span is re-tokenized with the outer flags merged in), while
/// markers of an already-active family are literal. A zero-length span
/// such as `****` consumes its delimiters and produces no run.
///
/// Concatenating the `text` of the returned runs reproduces `line` with
/// all paired markers removed.
pub(crate) fn format_line(line: &str) -> Vec<TextRun> {
    format_spans(line, false, false)
}

fn format_spans(text: &str, bold: bool, italic: bool) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some(span) = open_span(rest, bold, italic) {
            if !literal.is_empty() {
                runs.push(TextRun::new(std::mem::take(&mut literal), bold, italic));
            }
            if !span.inner.is_empty() {
                runs.extend(format_spans(
                    span.inner,
                    bold || span.bold,
                    italic || span.italic,
                ));
            }
            rest = span.rest;
        } else {
            // Not an opening delimiter here; consume one char literally.
            let mut chars = rest.chars();
            match chars.next() {
                Some(c) => literal.push(c),
                None => break,
            }
            rest = chars.as_str();
        }
    }

    if !literal.is_empty() {
        runs.push(TextRun::new(literal, bold, italic));
    }
    runs
}

/// A successfully paired emphasis span at the start of the input.
struct Span<'a> {
    inner: &'a str,
    rest: &'a str,
    bold: bool,
    italic: bool,
}

/// Try to open an emphasis span at the start of `text`.
///
/// Candidate delimiters are tried longest-first; a candidate only opens if
/// the exact same marker string occurs again later in the text, and only if
/// it would add a flag that is not already active.
fn open_span(text: &str, bold: bool, italic: bool) -> Option<Span<'_>> {
    let marker_char = match text.bytes().next() {
        Some(b'*') => '*',
        Some(b'_') => '_',
        _ => return None,
    };
    let available = text.chars().take_while(|&c| c == marker_char).count();

    for len in (1..=available.min(3)).rev() {
        let (adds_bold, adds_italic) = match len {
            3 => (true, true),
            2 => (true, false),
            _ => (false, true),
        };
        // Same-family nesting is not supported: once bold is open, `**`
        // and `***` are literal (likewise italic and `*`).
        if (adds_bold && bold) || (adds_italic && italic) {
            continue;
        }

        let (marker, after) = text.split_at(len);
        if let Some(close) = after.find(marker) {
            // A zero-length span (`****`) swallows its delimiters, but a
            // lone `*`/`_` pairing with itself would turn any unpaired
            // double marker into nothing; keep that case literal.
            if close == 0 && len == 1 {
                continue;
            }
            return Some(Span {
                inner: &after[..close],
                rest: &after[close + len..],
                bold: adds_bold,
                italic: adds_italic,
            });
        }
    }
    None
}
