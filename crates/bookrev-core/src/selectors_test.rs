use std::io::Write;

use super::*;

#[test]
fn empty_document_yields_defaults() {
    let set = parse_selector_set("").unwrap();
    assert_eq!(set, SelectorSet::default());
}

#[test]
fn partial_document_keeps_other_defaults() {
    let set = parse_selector_set("review_card: \"li.review\"\n").unwrap();
    assert_eq!(set.review_card, "li.review");
    assert_eq!(set.title, SelectorSet::default().title);
    assert_eq!(set.rating_label_attr, "aria-label");
}

#[test]
fn unknown_key_is_rejected() {
    let result = parse_selector_set("review_cards: \"li.review\"\n");
    assert!(
        matches!(result, Err(ConfigError::SelectorFileParse(_))),
        "expected SelectorFileParse, got: {result:?}"
    );
}

#[test]
fn blank_selector_fails_validation() {
    let result = parse_selector_set("content: \"  \"\n");
    match result {
        Err(ConfigError::Validation(msg)) => assert!(msg.contains("content"), "got: {msg}"),
        other => panic!("expected Validation error, got: {other:?}"),
    }
}

#[test]
fn default_set_passes_validation() {
    assert!(validate_selector_set(&SelectorSet::default()).is_ok());
}

#[test]
fn load_selector_set_reads_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "title: \"h1.book\"").unwrap();
    writeln!(file, "author: \"a.author\"").unwrap();

    let set = load_selector_set(file.path()).unwrap();
    assert_eq!(set.title, "h1.book");
    assert_eq!(set.author, "a.author");
    assert_eq!(set.review_list, "div.ReviewsList");
}

#[test]
fn load_selector_set_missing_file_is_io_error() {
    let result = load_selector_set(Path::new("/nonexistent/bookrev/selectors.yaml"));
    assert!(
        matches!(result, Err(ConfigError::FileIo { .. })),
        "expected FileIo, got: {result:?}"
    );
}
