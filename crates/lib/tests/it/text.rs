//! Text helper integration tests

use sundry::text;

#[test]
fn test_slug_default_separator() {
    assert_eq!(text::slug("Hello World", "-"), "hello-world");
    assert_eq!(text::slug("  Ünïcödé  títle_with__flip ", "-"), "unicode-title-with-flip");
    assert_eq!(text::slug("What's up?", "-"), "whats-up");
}

#[test]
fn test_slug_custom_separator() {
    assert_eq!(text::slug("Hello-World again", "_"), "hello_world_again");
    assert_eq!(text::slug("a.b c", "."), "a.b.c");
}

#[test]
fn test_studly_and_camel() {
    assert_eq!(text::studly("hello world"), "HelloWorld");
    assert_eq!(text::studly("hello_world"), "Helloworld");
    assert_eq!(text::camel("Hello big world"), "helloBigWorld");
    assert_eq!(text::camel(""), "");
}

#[test]
fn test_limit_truncates_and_trims() {
    assert_eq!(text::limit("Lorem ipsum dolor", 6, "..."), "Lorem...");
    assert_eq!(text::limit("Lorem ipsum dolor", 100, "..."), "Lorem ipsum dolor");
    assert_eq!(text::limit("日本語テキスト", 3, ""), "日本語");
}

#[test]
fn test_case_helpers() {
    assert_eq!(text::lower("ÀBC"), "àbc");
    assert_eq!(text::upper("straße"), "STRASSE");
    assert_eq!(text::title("the QUICK brown fox"), "The Quick Brown Fox");
    assert_eq!(text::lcfirst("Élan"), "élan");
    assert_eq!(text::ascii("Ærøskøbing"), "AEroskobing");
}

#[test]
fn test_contains_any_needle() {
    assert!(text::contains("The quick brown fox", &["dog", "fox"]));
    assert!(!text::contains("The quick brown fox", &["dog", "cat"]));
    assert!(!text::contains("anything", &["", ""]));
}

#[test]
fn test_random_tokens() {
    let a = text::random(32).unwrap();
    let b = text::random(32).unwrap();
    assert_eq!(a.len(), 32);
    assert_ne!(a, b);
    assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));

    assert_eq!(text::random(500).unwrap().len(), 500);
    assert_eq!(text::random_or_quick(12).len(), 12);
}

#[test]
fn test_quick_random_draws_from_pool() {
    let token = text::quick_random(40);
    assert_eq!(token.len(), 40);
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(text::quick_random(0), "");
}
