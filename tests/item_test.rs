use explore_digest::RepositoryItem;

#[test]
fn test_item_line_detection() {
    assert!(RepositoryItem::is_item_line("1. https://github.com/foo/bar Go"));
    assert!(RepositoryItem::is_item_line("12."));
    assert!(RepositoryItem::is_item_line("3.anything"));
}

#[test]
fn test_item_line_detection_negatives() {
    assert!(!RepositoryItem::is_item_line("Trending Repositories"));
    assert!(!RepositoryItem::is_item_line("A. not a number"));
    assert!(!RepositoryItem::is_item_line("1 no period"));
    assert!(!RepositoryItem::is_item_line(""));
}

#[test]
fn test_parse_item_with_kind() {
    let item = RepositoryItem::parse("2. https://github.com/person/example2 Java").unwrap();
    assert_eq!(item.url, "https://github.com/person/example2");
    assert_eq!(item.name, "person/example2");
    assert_eq!(item.kind.as_deref(), Some("Java"));
}

#[test]
fn test_parse_item_without_kind() {
    let item = RepositoryItem::parse("1. https://github.com/person/example ").unwrap();
    assert_eq!(item.url, "https://github.com/person/example");
    assert_eq!(item.name, "person/example");
    assert!(item.kind.is_none());
}

#[test]
fn test_parse_item_multi_digit_index() {
    let item = RepositoryItem::parse("25. https://github.com/rust-lang/rust Rust").unwrap();
    assert_eq!(item.name, "rust-lang/rust");
}

#[test]
fn test_parse_item_requires_github_url() {
    assert!(RepositoryItem::parse("1. not a repository line").is_none());
    assert!(RepositoryItem::parse("1. https://example.com/foo/bar Go").is_none());
}

#[test]
fn test_parse_item_without_trailing_space() {
    // The item format always carries a space after the URL; without it
    // the line does not decompose.
    assert!(RepositoryItem::parse("3. https://github.com/foo/qux").is_none());
}

#[test]
fn test_parse_plain_prose_line() {
    assert!(RepositoryItem::parse("A sample description").is_none());
}
