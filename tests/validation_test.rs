//! Integration tests for form validation and message sanitization
//!
//! These tests verify the documented validation contracts: the permissive
//! email shape check, the four password composition rules, and the
//! control-character policy for notification text.

use flashtui::utils::validation::{
    sanitize_message, validate_email, validate_password, PasswordAssessment,
};

#[test]
fn test_validate_email_accepts_reasonable_addresses() {
    let valid_inputs = vec![
        "user@example.com",
        "a@b.c",
        "first.last@example.co.uk",
        "user+tag@example.com",
        "123@456.789",
    ];

    for input in valid_inputs {
        assert!(validate_email(input), "Should accept: {}", input);
    }
}

#[test]
fn test_validate_email_rejects_malformed_addresses() {
    let invalid_inputs = vec![
        "",
        "plainaddress",
        "no-at-sign.com",
        "user@@nodomain",
        "@example.com",
        "user@",
        "user@nodot",
        "user@domain.",
        "user@.tld",
        "user name@example.com",
        "user@exam ple.com",
        "user@example.com ",
    ];

    for input in invalid_inputs {
        assert!(!validate_email(input), "Should reject: {}", input);
    }
}

#[test]
fn test_validate_email_anything_without_at_is_false() {
    for input in ["abc", "a.b.c", "   ", "1234", "word.word.word"] {
        assert!(!validate_email(input), "No @, must be false: {}", input);
    }
}

#[test]
fn test_validate_password_reports_each_rule() {
    let assessment = validate_password("abc");
    assert_eq!(
        assessment,
        PasswordAssessment {
            has_length: false,
            has_upper: false,
            has_lower: true,
            has_number: false,
        }
    );
    assert!(!assessment.is_valid());
}

#[test]
fn test_validate_password_full_strength() {
    let assessment = validate_password("Str0ngPass");
    assert!(assessment.has_length);
    assert!(assessment.has_upper);
    assert!(assessment.has_lower);
    assert!(assessment.has_number);
    assert!(assessment.is_valid());
}

#[test]
fn test_validate_password_removing_any_property_invalidates() {
    // Each input satisfies exactly three of the four rules
    let nearly_valid = vec![
        ("Ab1defg", "too short"),
        ("ab1defgh", "no uppercase"),
        ("AB1DEFGH", "no lowercase"),
        ("Abcdefgh", "no digit"),
    ];

    for (input, reason) in nearly_valid {
        let assessment = validate_password(input);
        assert!(!assessment.is_valid(), "{}: {}", reason, input);
        assert_eq!(assessment.failed_rules().len(), 1, "{}", input);
    }
}

#[test]
fn test_validate_password_counts_characters_not_bytes() {
    // 6 characters but 9 bytes; the length rule counts characters
    assert!(!validate_password("Aé1béé").has_length);
    // Letter classes are ASCII: accented caps do not count as uppercase
    assert!(!validate_password("éABC1234").has_lower);
}

#[test]
fn test_sanitize_message_neutralizes_escape_sequences() {
    let sanitized = sanitize_message("ok\x1b[2J\x07done");
    assert!(!sanitized.contains('\x1b'));
    assert!(!sanitized.contains('\x07'));
    assert_eq!(sanitized, "ok [2J done");
}

#[test]
fn test_sanitize_message_flattens_newlines() {
    assert_eq!(sanitize_message("a\r\nb"), "a  b");
}

#[test]
fn test_sanitize_message_keeps_printable_unicode() {
    assert_eq!(sanitize_message("héllo ✓ wörld"), "héllo ✓ wörld");
}
