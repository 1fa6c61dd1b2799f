use crate::is_valid_name;
use proptest::prelude::*;

#[test]
fn accepts_typical_names() {
    for name in ["a", "_", "__typename", "user_id", "Query", "_1x1_1x1_", "f2"] {
        assert!(is_valid_name(name), "expected `{name}` to be valid");
    }
}

#[test]
fn rejects_empty_string() {
    assert!(!is_valid_name(""));
}

/// Verifies that non-ASCII letters, punctuation, and whitespace are rejected
/// anywhere in the name, including right after an otherwise valid prefix.
#[test]
fn rejects_characters_outside_the_name_alphabet() {
    for name in ["我", "_我", "x-x", "x x", "x ", " x", "a.b", "Lets_Have_An_Alias看", "é"] {
        assert!(!is_valid_name(name), "expected `{name}` to be invalid");
    }
}

#[test]
fn rejects_leading_digit() {
    assert!(!is_valid_name("1"));
    assert!(!is_valid_name("1abc"));
    assert!(is_valid_name("abc1"));
}

proptest! {
    #[test]
    fn every_pattern_match_is_valid(name in "[_A-Za-z][_0-9A-Za-z]{0,32}") {
        prop_assert!(is_valid_name(&name));
    }

    #[test]
    fn leading_digit_is_invalid(name in "[0-9][_0-9A-Za-z]{0,32}") {
        prop_assert!(!is_valid_name(&name));
    }

    #[test]
    fn foreign_character_is_invalid(
        name in "[_A-Za-z][_0-9A-Za-z]{0,8}[^_0-9A-Za-z][_0-9A-Za-z]{0,8}",
    ) {
        prop_assert!(!is_valid_name(&name));
    }

    #[test]
    fn validity_is_deterministic(name in "\\PC{0,16}") {
        prop_assert_eq!(is_valid_name(&name), is_valid_name(&name));
    }
}
