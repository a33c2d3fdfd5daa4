use std::fs;
use std::path::Path;

use mdeck::{Error, convert, convert_file, parse_markdown};
use tempfile::TempDir;

#[test]
fn test_convert_end_to_end() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("deck.pptx");

    let path = convert("# T\n\nSub\n\n## S1\n\n- a\n- b", &output).unwrap();
    assert!(path.is_absolute());
    assert!(path.exists());
    assert!(fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn test_convert_rejects_wrong_extension() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("deck.docx");

    let err = convert("## S", &output).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(!output.exists());
}

#[test]
fn test_convert_rejects_headingless_input_before_writing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("deck.pptx");

    let err = convert("no headings, just prose", &output).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    // Validation failed before rendering; nothing may be left behind.
    assert!(!output.exists());
}

#[test]
fn test_convert_overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("deck.pptx");
    fs::write(&output, b"stale").unwrap();

    convert("## S", &output).unwrap();
    assert!(fs::metadata(&output).unwrap().len() > 5);
}

#[test]
fn test_convert_file_derives_output_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("talk.md");
    fs::write(&input, "# Talk\n\n## Intro\n\n- hi").unwrap();

    let path = convert_file(&input, None).unwrap();
    assert_eq!(path.file_name().unwrap(), "talk.pptx");
    assert!(path.exists());
}

#[test]
fn test_convert_file_honors_explicit_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("talk.md");
    let output = dir.path().join("elsewhere").join("out.pptx");
    fs::write(&input, "## Intro").unwrap();

    let path = convert_file(&input, Some(&output)).unwrap();
    assert!(path.exists());
    assert_eq!(path.file_name().unwrap(), "out.pptx");
}

#[test]
fn test_convert_file_missing_input() {
    let err = convert_file(Path::new("/nonexistent/talk.md"), None).unwrap_err();
    assert!(matches!(err, Error::InputNotFound(_)));
}

#[test]
fn test_convert_file_rejects_directory_input() {
    let dir = TempDir::new().unwrap();
    let err = convert_file(dir.path(), None).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn test_convert_file_rejects_non_utf8_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("binary.md");
    fs::write(&input, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let err = convert_file(&input, None).unwrap_err();
    assert!(matches!(err, Error::Utf8(_)));
}

#[test]
fn test_parse_then_convert_agree_on_structure() {
    let doc = "# T\n\n## A\n\n## B";
    let slides = parse_markdown(doc).unwrap();
    assert_eq!(slides.len(), 3);

    let dir = TempDir::new().unwrap();
    let first = convert(doc, dir.path().join("a.pptx")).unwrap();
    let second = convert(doc, dir.path().join("b.pptx")).unwrap();
    assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
}
