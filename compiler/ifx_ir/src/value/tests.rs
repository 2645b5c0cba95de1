use super::*;
use pretty_assertions::assert_eq;
use std::str::FromStr;

#[test]
fn numbers_compare_by_value() {
    let parsed = BigDecimal::from_str("6.0").unwrap_or_default();
    assert_eq!(Value::Number(parsed), Value::from(6));
}

#[test]
fn display_renders_decimal_text() {
    let n = BigDecimal::from_str("34.5").unwrap_or_default();
    assert_eq!(Value::Number(n).to_string(), "34.5");
    assert_eq!(Value::from(12).to_string(), "12");
    assert_eq!(Value::symbol("foo").to_string(), "foo");
}

#[test]
fn kinds() {
    assert_eq!(Value::from(1).kind(), ValueKind::Number);
    assert_eq!(Value::symbol("ab").kind(), ValueKind::Symbol);
    assert_eq!(Value::block([]).kind(), ValueKind::Block);
    assert_eq!(ValueKind::Block.to_string(), "block");
}

#[test]
fn accessors_match_variant() {
    let v = Value::block([Value::from(1), Value::from(2)]);
    assert!(v.as_number().is_none());
    assert!(v.as_symbol().is_none());
    assert_eq!(v.as_block().map(Block::len), Some(2));

    let s = Value::symbol("__do0");
    assert!(s.as_symbol().is_some_and(|sym| *sym == "__do0"));
}

#[test]
fn debug_is_compact() {
    let v = Value::block([Value::from(1), Value::symbol("ac")]);
    assert_eq!(format!("{v:?}"), "Block([Number(1), Symbol(ac)])");
}
