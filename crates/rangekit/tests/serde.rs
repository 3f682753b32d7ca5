//! Serialization of ranges and pattern tables (`serde` feature)
#![cfg(feature = "serde")]

use rangekit::{Mode, PatternError, PatternTable, normalize};

#[test]
fn test_pattern_table_roundtrip_keeps_order() {
    let table = PatternTable::from_pairs([("ab", "X"), ("abc", "Z")]).unwrap();
    let json = serde_json::to_string(&table).unwrap();
    assert_eq!(json, r#"[["ab","X"],["abc","Z"]]"#);

    let back: PatternTable = serde_json::from_str(&json).unwrap();
    assert_eq!(back, table);
}

#[test]
fn test_pattern_table_rejects_empty_search() {
    let err = serde_json::from_str::<PatternTable>(r#"[["a","b"],["","c"]]"#).unwrap_err();
    assert!(
        err.to_string()
            .contains(&PatternError::EmptySearch { index: 1 }.to_string())
    );
}

#[test]
fn test_normalized_range_serializes() {
    let r = normalize(-10, 50, 100, Mode::Clamped).unwrap();
    assert_eq!(
        serde_json::to_string(&r).unwrap(),
        r#"{"start":90,"count":10}"#
    );
    assert_eq!(serde_json::to_string(&Mode::Strict).unwrap(), r#""Strict""#);
}
