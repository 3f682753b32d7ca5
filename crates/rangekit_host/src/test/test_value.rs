// Tests for value conversions
use std::borrow::Cow;

use crate::*;

#[test]
fn test_to_text() {
    let value = Value::from("abc");
    assert!(matches!(value.to_text(), Some(Cow::Borrowed("abc"))));
    assert_eq!(Value::Int(-17).to_text().as_deref(), Some("-17"));
    assert_eq!(Value::Bool(true).to_text(), None);
    assert_eq!(Value::Nil.to_text(), None);
}

#[test]
fn test_to_integer() {
    assert_eq!(Value::Int(5).to_integer(), Ok(5));
    assert_eq!(Value::from(" -12 ").to_integer(), Ok(-12));
    assert_eq!(
        Value::from("1.5").to_integer(),
        Err("number has no integer representation")
    );
    assert_eq!(Value::Bytes(vec![1]).to_integer(), Err("number expected"));
}

#[test]
fn test_display() {
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::Int(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(Value::Bytes(b"hi".to_vec()).to_string(), "hi");
    assert_eq!(
        Value::Array(vec![Value::Int(1), "a".into(), Value::Bool(false)]).to_string(),
        "[1, a, false]"
    );
}

#[test]
fn test_type_names() {
    assert_eq!(Value::default().type_name(), "nil");
    assert_eq!(Value::str_array(["a"]).type_name(), "arr");
    assert_eq!(Value::from(vec![0u8]).type_name(), "buf");
    assert!(Value::Nil.is_nil());
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Int(3).as_integer(), Some(3));
}
