//! Per-slide XML generation.
//!
//! Each slide is rendered onto the blank layout as manually placed text
//! boxes: a title box, plus either a subtitle box (title slide) or a body
//! box (content slides). Geometry is fixed for the 13.333" x 7.5" canvas.

use quick_xml::escape::escape;

use crate::deck::{ListItem, Slide, SlideContent, TextRun};

use super::parts::{NS_TRIPLE, XML_DECL};

// All lengths in EMU (914400 per inch), sizes in hundredths of a point.
const MARGIN: i64 = 457_200; // 0.5"
const BOX_WIDTH: i64 = 12_192_000 - 2 * MARGIN;

const TITLE_SLIDE_TITLE_TOP: i64 = 2_286_000; // 2.5"
const TITLE_SLIDE_TITLE_HEIGHT: i64 = 1_371_600; // 1.5"
const SUBTITLE_TOP: i64 = 3_840_480; // 4.2"
const SUBTITLE_HEIGHT: i64 = 914_400; // 1.0"

const CONTENT_TITLE_TOP: i64 = 365_760; // 0.4"
const CONTENT_TITLE_HEIGHT: i64 = 731_520; // 0.8"
const BODY_TOP: i64 = 1_280_160; // 1.4"
const BODY_HEIGHT: i64 = 5_121_360; // 5.6"

const INDENT_PER_LEVEL: i64 = 457_200; // 0.5"
const HANGING_INDENT: i64 = 228_600; // 0.25"

const SIZE_H1: u32 = 3200;
const SIZE_H2: u32 = 2400;
const SIZE_BODY: u32 = 1100;

const FONT_HEADING: &str = "Montserrat";
const FONT_BODY: &str = "Open Sans";
const COLOR_TEXT: &str = "111417";
const COLOR_BACKGROUND: &str = "F8FAFC";

/// Bullet glyphs by nesting level; deeper levels reuse the last glyph.
const BULLET_CHARS: [char; 4] = ['\u{2022}', '\u{2013}', '\u{25e6}', '\u{25aa}'];

/// PresentationML allows paragraph levels 0..=8.
const MAX_PARAGRAPH_LEVEL: usize = 8;

/// Render one slide part.
pub(crate) fn slide_xml(slide: &Slide) -> String {
    let mut shapes = String::new();
    if slide.is_title_slide {
        title_box(
            &mut shapes,
            2,
            "Title",
            &slide.title,
            TITLE_SLIDE_TITLE_TOP,
            TITLE_SLIDE_TITLE_HEIGHT,
            SIZE_H1,
            true,
        );
        if let Some(subtitle) = &slide.subtitle {
            subtitle_box(&mut shapes, subtitle);
        }
    } else {
        title_box(
            &mut shapes,
            2,
            "Title",
            &slide.title,
            CONTENT_TITLE_TOP,
            CONTENT_TITLE_HEIGHT,
            SIZE_H2,
            false,
        );
        if !slide.content.is_empty() {
            body_box(&mut shapes, &slide.content);
        }
    }

    format!(
        "{XML_DECL}\n<p:sld {NS_TRIPLE}>\
<p:cSld>\
<p:bg><p:bgPr><a:solidFill><a:srgbClr val=\"{COLOR_BACKGROUND}\"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>\
<p:spTree>\
<p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
<p:grpSpPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/><a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm></p:grpSpPr>\
{shapes}\
</p:spTree>\
</p:cSld>\
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\
</p:sld>"
    )
}

fn title_box(
    out: &mut String,
    id: u32,
    name: &str,
    text: &str,
    top: i64,
    height: i64,
    size: u32,
    centered: bool,
) {
    let align = if centered { "<a:pPr algn=\"ctr\"/>" } else { "" };
    let mut paragraph = String::from("<a:p>");
    paragraph.push_str(align);
    run(&mut paragraph, text, size, true, false, FONT_HEADING);
    paragraph.push_str("</a:p>");
    shape(out, id, name, MARGIN, top, BOX_WIDTH, height, "", &paragraph);
}

fn subtitle_box(out: &mut String, subtitle: &str) {
    let mut paragraph = String::from("<a:p><a:pPr algn=\"ctr\"/>");
    run(&mut paragraph, subtitle, SIZE_H2, false, false, FONT_BODY);
    paragraph.push_str("</a:p>");
    shape(
        out,
        3,
        "Subtitle",
        MARGIN,
        SUBTITLE_TOP,
        BOX_WIDTH,
        SUBTITLE_HEIGHT,
        "",
        &paragraph,
    );
}

fn body_box(out: &mut String, content: &[SlideContent]) {
    let mut paragraphs = String::new();
    let mut ordinals = OrdinalCounters::new();

    for entry in content {
        match entry {
            SlideContent::Text(runs) => {
                paragraphs.push_str("<a:p>");
                for text_run in runs {
                    body_run(&mut paragraphs, text_run);
                }
                paragraphs.push_str("</a:p>");
            }
            SlideContent::Item(item) => {
                let level = item.level.min(MAX_PARAGRAPH_LEVEL);
                let ordinal = item.ordered.then(|| ordinals.next(level));
                if !item.ordered {
                    ordinals.observe(level);
                }
                item_paragraph(&mut paragraphs, item, level, ordinal);
            }
        }
    }

    let autofit = autofit_xml(content);
    let body_pr = format!("<a:bodyPr wrap=\"square\">{autofit}</a:bodyPr>");
    shape(out, 4, "Body", MARGIN, BODY_TOP, BOX_WIDTH, BODY_HEIGHT, &body_pr, &paragraphs);
}

fn item_paragraph(out: &mut String, item: &ListItem, level: usize, ordinal: Option<u32>) {
    let margin_left = INDENT_PER_LEVEL * (level as i64 + 1);
    out.push_str(&format!(
        "<a:p><a:pPr marL=\"{margin_left}\" indent=\"-{HANGING_INDENT}\" lvl=\"{level}\">"
    ));
    match ordinal {
        // Ordinals are rendered as literal text, so suppress the inherited
        // bullet instead of using autonumbering.
        Some(_) => out.push_str("<a:buNone/>"),
        None => {
            let glyph = BULLET_CHARS[level.min(BULLET_CHARS.len() - 1)];
            out.push_str(&format!("<a:buChar char=\"{glyph}\"/>"));
        }
    }
    out.push_str("</a:pPr>");

    if let Some(n) = ordinal {
        run(out, &format!("{n}. "), SIZE_BODY, false, false, FONT_BODY);
    }
    for text_run in &item.content {
        body_run(out, text_run);
    }
    out.push_str("</a:p>");
}

fn body_run(out: &mut String, text_run: &TextRun) {
    run(
        out,
        &text_run.text,
        SIZE_BODY,
        text_run.bold,
        text_run.italic,
        FONT_BODY,
    );
}

fn run(out: &mut String, text: &str, size: u32, bold: bool, italic: bool, font: &str) {
    out.push_str(&format!("<a:r><a:rPr lang=\"en-US\" sz=\"{size}\""));
    if bold {
        out.push_str(" b=\"1\"");
    }
    if italic {
        out.push_str(" i=\"1\"");
    }
    out.push_str(&format!(
        "><a:solidFill><a:srgbClr val=\"{COLOR_TEXT}\"/></a:solidFill>\
<a:latin typeface=\"{font}\"/></a:rPr><a:t>{}</a:t></a:r>",
        escape(text)
    ));
}

fn shape(
    out: &mut String,
    id: u32,
    name: &str,
    x: i64,
    y: i64,
    cx: i64,
    cy: i64,
    body_pr: &str,
    paragraphs: &str,
) {
    let body_pr = if body_pr.is_empty() {
        "<a:bodyPr wrap=\"square\"/>"
    } else {
        body_pr
    };
    out.push_str(&format!(
        "<p:sp>\
<p:nvSpPr><p:cNvPr id=\"{id}\" name=\"{name}\"/><p:cNvSpPr txBox=\"1\"/><p:nvPr/></p:nvSpPr>\
<p:spPr><a:xfrm><a:off x=\"{x}\" y=\"{y}\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>\
<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom></p:spPr>\
<p:txBody>{body_pr}<a:lstStyle/>{paragraphs}</p:txBody>\
</p:sp>"
    ));
}

/// Per-level ordinal counters for ordered items.
///
/// Counters for deeper levels reset whenever the level decreases, so a
/// sublist restarts at 1 each time it is re-entered; source numerals are
/// never consulted.
struct OrdinalCounters {
    counters: Vec<u32>,
    last_level: Option<usize>,
}

impl OrdinalCounters {
    fn new() -> Self {
        Self {
            counters: Vec::new(),
            last_level: None,
        }
    }

    fn next(&mut self, level: usize) -> u32 {
        self.observe(level);
        if self.counters.len() <= level {
            self.counters.resize(level + 1, 0);
        }
        self.counters[level] += 1;
        self.counters[level]
    }

    /// Track level movement for unordered items too, so an ordered sublist
    /// under a fresh bullet restarts numbering.
    fn observe(&mut self, level: usize) {
        if let Some(last) = self.last_level
            && level < last
        {
            self.counters.truncate(level + 1);
        }
        self.last_level = Some(level);
    }
}

/// Stepped auto-fit heuristic.
///
/// An approximation of "does this still fit in the body box", keyed on
/// paragraph count and character volume rather than measured text layout,
/// so the output stays deterministic.
fn autofit_xml(content: &[SlideContent]) -> &'static str {
    let paragraphs = content.len();
    let chars: usize = content
        .iter()
        .map(|entry| match entry {
            SlideContent::Text(runs) => runs.iter().map(|r| r.text.len()).sum(),
            SlideContent::Item(item) => item.content.iter().map(|r| r.text.len()).sum::<usize>(),
        })
        .sum();

    if paragraphs > 18 || chars > 1200 {
        "<a:normAutofit fontScale=\"62500\" lnSpcReduction=\"20000\"/>"
    } else if paragraphs > 12 || chars > 800 {
        "<a:normAutofit fontScale=\"75000\" lnSpcReduction=\"10000\"/>"
    } else if paragraphs > 8 || chars > 500 {
        "<a:normAutofit fontScale=\"90000\"/>"
    } else {
        ""
    }
}
