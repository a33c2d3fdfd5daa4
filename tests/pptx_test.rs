use std::io::{Cursor, Read};

use mdeck::{parse_markdown, write_pptx_to_writer};
use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

/// Render a document and reopen the package for inspection.
fn package(markdown: &str) -> ZipArchive<Cursor<Vec<u8>>> {
    let slides = parse_markdown(markdown).expect("Failed to parse");
    let mut buffer = Cursor::new(Vec::new());
    write_pptx_to_writer(&slides, &mut buffer).expect("Failed to write PPTX");
    buffer.set_position(0);
    ZipArchive::new(buffer).expect("Failed to reopen package")
}

fn read_part(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut part = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing part: {name}"));
    let mut content = String::new();
    part.read_to_string(&mut content).expect("Failed to read part");
    content
}

fn assert_well_formed(xml: &str) {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML at {}: {e}", reader.buffer_position()),
        }
    }
}

#[test]
fn test_package_inventory() {
    let mut archive = package("# T\n\nSub\n\n## S1\n\n- a\n- b");

    for name in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "docProps/app.xml",
        "ppt/presentation.xml",
        "ppt/_rels/presentation.xml.rels",
        "ppt/presProps.xml",
        "ppt/theme/theme1.xml",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        "ppt/slides/slide1.xml",
        "ppt/slides/_rels/slide1.xml.rels",
        "ppt/slides/slide2.xml",
        "ppt/slides/_rels/slide2.xml.rels",
    ] {
        assert!(archive.by_name(name).is_ok(), "missing part: {name}");
    }
}

#[test]
fn test_slide_count_matches_headings() {
    let mut archive = package("# Deck\n\n## One\n\n## Two\n\n## Three");
    let presentation = read_part(&mut archive, "ppt/presentation.xml");
    assert_eq!(presentation.matches("<p:sldId ").count(), 4);
    assert!(archive.by_name("ppt/slides/slide4.xml").is_ok());
    assert!(archive.by_name("ppt/slides/slide5.xml").is_err());
}

#[test]
fn test_all_parts_are_well_formed_xml() {
    let doc = "# T\n\nSub & more\n\n## S1\n\n- a <tag>\n  - \"quoted\"\n\n1. x";
    let mut archive = package(doc);
    let names: Vec<String> = archive.file_names().map(String::from).collect();
    for name in names {
        let content = read_part(&mut archive, &name);
        assert_well_formed(&content);
    }
}

#[test]
fn test_title_slide_content() {
    let mut archive = package("# T\n\nSub\n\n## S1\n\n- a\n- b");
    let slide1 = read_part(&mut archive, "ppt/slides/slide1.xml");
    assert!(slide1.contains("<a:t>T</a:t>"));
    assert!(slide1.contains("<a:t>Sub</a:t>"));

    let slide2 = read_part(&mut archive, "ppt/slides/slide2.xml");
    assert!(slide2.contains("<a:t>S1</a:t>"));
    assert!(slide2.contains("<a:t>a</a:t>"));
    assert!(slide2.contains("<a:t>b</a:t>"));
}

#[test]
fn test_document_without_h1_has_no_title_slide() {
    let mut archive = package("## Only");
    let slide1 = read_part(&mut archive, "ppt/slides/slide1.xml");
    assert!(slide1.contains("<a:t>Only</a:t>"));
    // Content-slide titles sit at the top of the canvas, not the center.
    assert!(slide1.contains("y=\"365760\""));
    assert!(archive.by_name("ppt/slides/slide2.xml").is_err());
}

#[test]
fn test_ordered_lists_are_renumbered() {
    let mut archive = package("## S\n\n5. x\n9. y");
    let slide = read_part(&mut archive, "ppt/slides/slide1.xml");
    assert!(slide.contains("<a:t>1. </a:t>"));
    assert!(slide.contains("<a:t>2. </a:t>"));
    assert!(!slide.contains("<a:t>5. </a:t>"));
    assert!(!slide.contains("<a:t>9. </a:t>"));
}

#[test]
fn test_formatting_flags_reach_the_runs() {
    let mut archive = package("## S\n\n**bold** and *italic*");
    let slide = read_part(&mut archive, "ppt/slides/slide1.xml");
    assert!(slide.contains("b=\"1\""));
    assert!(slide.contains("i=\"1\""));
    assert!(slide.contains("<a:t>bold</a:t>"));
    assert!(slide.contains("<a:t> and </a:t>"));
    assert!(slide.contains("<a:t>italic</a:t>"));
}

#[test]
fn test_autofit_kicks_in_for_long_slides() {
    let mut doc = String::from("## Packed\n\n");
    for i in 0..24 {
        doc.push_str(&format!("- bullet point number {i}\n"));
    }
    let mut archive = package(&doc);
    let slide = read_part(&mut archive, "ppt/slides/slide1.xml");
    assert!(slide.contains("normAutofit"));

    let mut small = package("## Sparse\n\n- one");
    let slide = read_part(&mut small, "ppt/slides/slide1.xml");
    assert!(!slide.contains("normAutofit"));
}

#[test]
fn test_output_is_deterministic() {
    let doc = "# T\n\nSub\n\n## S1\n\n- a\n  - b\n\n1. x";
    let slides = parse_markdown(doc).unwrap();

    let mut first = Cursor::new(Vec::new());
    write_pptx_to_writer(&slides, &mut first).unwrap();
    let mut second = Cursor::new(Vec::new());
    write_pptx_to_writer(&slides, &mut second).unwrap();

    assert_eq!(first.into_inner(), second.into_inner());
}

#[test]
fn test_deck_title_lands_in_core_properties() {
    let mut archive = package("# My Deck\n\n## S");
    let core = read_part(&mut archive, "docProps/core.xml");
    assert!(core.contains("<dc:title>My Deck</dc:title>"));

    let app = read_part(&mut archive, "docProps/app.xml");
    assert!(app.contains("<Slides>2</Slides>"));
}
