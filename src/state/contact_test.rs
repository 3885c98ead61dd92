use super::*;

// =============================================================
// Check order and short-circuiting
// =============================================================

#[test]
fn empty_name_fails_first() {
    let result = validate("", "a@b.co", "hi", true);
    assert_eq!(result, Err(ContactError::NameRequired));
}

#[test]
fn whitespace_name_fails() {
    let result = validate("   ", "a@b.co", "hi", true);
    assert_eq!(result, Err(ContactError::NameRequired));
}

#[test]
fn bad_email_fails_before_message_check() {
    // Message is also empty, but the email check runs first.
    let result = validate("Ana", "not-an-email", "", true);
    assert_eq!(result, Err(ContactError::EmailInvalid));
}

#[test]
fn empty_email_fails_with_email_message() {
    let result = validate("Ana", "", "hi", true);
    assert_eq!(result, Err(ContactError::EmailInvalid));
}

#[test]
fn empty_message_fails() {
    let result = validate("Ana", "a@b.co", "", true);
    assert_eq!(result, Err(ContactError::MessageRequired));
}

#[test]
fn missing_consent_fails_last() {
    let result = validate("Ana", "a@b.co", "hi", false);
    assert_eq!(result, Err(ContactError::ConsentRequired));
}

#[test]
fn all_fields_valid_passes() {
    assert_eq!(validate("Ana", "a@b.co", "hi", true), Ok(()));
}

#[test]
fn fields_are_trimmed_before_checking() {
    assert_eq!(validate("  Ana  ", "  a@b.co  ", "  hi  ", true), Ok(()));
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_accepts_simple_address() {
    assert!(email_has_valid_shape("a@b.co"));
    assert!(email_has_valid_shape("first.last@example.org"));
}

#[test]
fn email_tld_is_case_insensitive() {
    assert!(email_has_valid_shape("a@b.CO"));
    assert!(email_has_valid_shape("a@b.OrG"));
}

#[test]
fn email_rejects_missing_at() {
    assert!(!email_has_valid_shape("not-an-email"));
}

#[test]
fn email_rejects_missing_dot_in_domain() {
    assert!(!email_has_valid_shape("a@localhost"));
}

#[test]
fn email_rejects_spaces() {
    assert!(!email_has_valid_shape("a b@c.co"));
    assert!(!email_has_valid_shape("a@b c.co"));
}

#[test]
fn email_rejects_empty_local_part() {
    assert!(!email_has_valid_shape("@b.co"));
}

#[test]
fn email_rejects_empty_host() {
    assert!(!email_has_valid_shape("a@.co"));
}

#[test]
fn email_tld_length_bounds() {
    assert!(!email_has_valid_shape("a@b.c"));
    assert!(email_has_valid_shape("a@b.io"));
    assert!(email_has_valid_shape("a@b.museum"));
    assert!(!email_has_valid_shape("a@b.toolong"));
}

#[test]
fn email_rejects_digits_in_tld() {
    assert!(!email_has_valid_shape("a@b.c0m"));
}

#[test]
fn email_splits_on_last_at_and_last_dot() {
    // The shape check is deliberately permissive: extra @ or dots to the
    // left are tolerated as long as the tail is well formed.
    assert!(email_has_valid_shape("a@b@c.com"));
    assert!(email_has_valid_shape("a@b.c.nz"));
}

// =============================================================
// Messages
// =============================================================

#[test]
fn each_error_has_distinct_message() {
    let errors = [
        ContactError::NameRequired,
        ContactError::EmailInvalid,
        ContactError::MessageRequired,
        ContactError::ConsentRequired,
    ];
    for (i, a) in errors.iter().enumerate() {
        for (j, b) in errors.iter().enumerate() {
            if i != j {
                assert_ne!(a.message(), b.message());
            }
        }
    }
}
