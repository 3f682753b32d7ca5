// Tests for ordered multi-pattern substitution
use crate::*;

fn table(pairs: &[(&str, &str)]) -> PatternTable {
    PatternTable::from_pairs(pairs.iter().copied()).unwrap()
}

#[test]
fn test_replace_multiple_patterns() {
    let t = table(&[("ab", "X"), ("cd", "Y")]);
    assert_eq!(replace("ab cd", &t), "X Y");
}

#[test]
fn test_first_listed_pattern_wins() {
    let t = table(&[("ab", "X"), ("abc", "Z")]);
    assert_eq!(replace("abcd", &t), "Xcd");

    // Listing the longer pattern first flips the outcome
    let t = table(&[("abc", "Z"), ("ab", "X")]);
    assert_eq!(replace("abcd", &t), "Zd");
}

#[test]
fn test_matches_do_not_overlap() {
    let t = table(&[("aa", "b")]);
    assert_eq!(replace("aaa", &t), "ba");
    assert_eq!(replace("aaaa", &t), "bb");
}

#[test]
fn test_replacement_text_is_not_rescanned() {
    let t = table(&[("a", "aa")]);
    assert_eq!(replace("aba", &t), "aabaa");
}

#[test]
fn test_replace_is_not_idempotent() {
    let t = table(&[("a", "b"), ("b", "c")]);
    let once = replace("ab", &t);
    let twice = replace(&once, &t);
    assert_eq!(once, "bc");
    assert_eq!(twice, "cc");
    assert_ne!(once, twice);
}

#[test]
fn test_replace_multibyte() {
    let t = table(&[("é", "e"), ("日本", "Japan")]);
    assert_eq!(replace("café 日本語", &t), "cafe Japan語");
    assert_eq!(replace("ééé", &table(&[("éé", "-")])), "-é");
}

#[test]
fn test_replace_no_match_and_empty_input() {
    let t = table(&[("xyz", "!")]);
    assert_eq!(replace("hello", &t), "hello");
    assert_eq!(replace("", &t), "");
    assert_eq!(replace("hello", &PatternTable::new()), "hello");
}

#[test]
fn test_replace_all_is_single_entry_table() {
    assert_eq!(replace_all("a-b-c", "-", "+").unwrap(), "a+b+c");
    assert_eq!(
        replace_all("a-b-c", "-", "+").unwrap(),
        replace("a-b-c", &table(&[("-", "+")]))
    );
    assert_eq!(replace_all("aaa", "a", "").unwrap(), "");
}

#[test]
fn test_empty_search_rejected() {
    assert_eq!(
        replace_all("abc", "", "x"),
        Err(PatternError::EmptySearch { index: 0 })
    );

    let err = PatternTable::from_pairs([("a", "b"), ("", "c")]).unwrap_err();
    assert_eq!(err, PatternError::EmptySearch { index: 1 });

    let err = PatternTable::try_from(vec![
        ("x".to_string(), "y".to_string()),
        (String::new(), "z".to_string()),
    ])
    .unwrap_err();
    assert_eq!(err.to_string(), "pattern #1 has an empty search string");
}

#[test]
fn test_table_order_is_preserved() {
    let t = PatternTable::new()
        .with("b", "2")
        .unwrap()
        .with("a", "1")
        .unwrap();
    let pairs: Vec<_> = t.iter().collect();
    assert_eq!(pairs, vec![("b", "2"), ("a", "1")]);
    assert_eq!(t.len(), 2);
    assert!(!t.is_empty());
}
