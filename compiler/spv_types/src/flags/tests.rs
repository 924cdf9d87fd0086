use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_enables_everything() {
    let flags = ValidationFlags::default();
    assert!(flags.contains(ValidationFlags::CHECK_WORD_COUNT));
    assert!(flags.contains(ValidationFlags::RECURSIVE));
    assert!(flags.contains(ValidationFlags::STRICT_OPENCL_IMAGES));
}

#[test]
fn parse_single() {
    assert_eq!(
        ValidationFlags::parse("recursive"),
        ValidationFlags::RECURSIVE
    );
}

#[test]
fn parse_list_trims_and_ignores_case() {
    assert_eq!(
        ValidationFlags::parse(" Word-Count , strict-images"),
        ValidationFlags::CHECK_WORD_COUNT | ValidationFlags::STRICT_OPENCL_IMAGES
    );
}

#[test]
fn parse_all_and_none() {
    assert_eq!(ValidationFlags::parse("all"), ValidationFlags::DEFAULT);
    assert_eq!(ValidationFlags::parse("none"), ValidationFlags::empty());
    assert_eq!(ValidationFlags::parse(""), ValidationFlags::empty());
}

#[test]
fn parse_ignores_unknown() {
    assert_eq!(
        ValidationFlags::parse("recursive,bogus"),
        ValidationFlags::RECURSIVE
    );
}
