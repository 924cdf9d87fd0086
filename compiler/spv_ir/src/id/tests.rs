use super::*;
use pretty_assertions::assert_eq;

#[test]
fn none_sentinel_works() {
    assert!(Id::NONE.is_none());
    assert!(!Id::from_raw(1).is_none());
    assert_eq!(Id::default(), Id::NONE);
}

#[test]
fn raw_roundtrip() {
    assert_eq!(Id::from_raw(42).raw(), 42);
    assert_eq!(Id::from(7), Id::from_raw(7));
}

#[test]
fn to_option_drops_sentinel() {
    assert_eq!(Id::NONE.to_option(), None);
    assert_eq!(Id::from_raw(3).to_option(), Some(Id::from_raw(3)));
}

#[test]
fn display_uses_percent_prefix() {
    assert_eq!(Id::from_raw(12).to_string(), "%12");
    assert_eq!(Id::NONE.to_string(), "%<none>");
    assert_eq!(format!("{:?}", Id::from_raw(12)), "Id(12)");
}
