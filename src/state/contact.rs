//! Contact form validation.
//!
//! Four checks run in fixed order and the first failure wins: name present,
//! email present and plausibly shaped, message present, consent given. The
//! caller surfaces the failure's message and cancels the submission.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// The first validation failure for a submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactError {
    NameRequired,
    EmailInvalid,
    MessageRequired,
    ConsentRequired,
}

impl ContactError {
    /// User-facing text shown in the blocking alert.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NameRequired => "Name is required.",
            Self::EmailInvalid => "Please enter a valid email address.",
            Self::MessageRequired => "Message is required.",
            Self::ConsentRequired => "You must agree to the processing of personal data.",
        }
    }
}

/// Validate a submission attempt. Fields are trimmed before checking.
pub fn validate(
    name: &str,
    email: &str,
    message: &str,
    consent: bool,
) -> Result<(), ContactError> {
    if name.trim().is_empty() {
        return Err(ContactError::NameRequired);
    }
    let email = email.trim();
    if email.is_empty() || !email_has_valid_shape(email) {
        return Err(ContactError::EmailInvalid);
    }
    if message.trim().is_empty() {
        return Err(ContactError::MessageRequired);
    }
    if !consent {
        return Err(ContactError::ConsentRequired);
    }
    Ok(())
}

/// Shape check for `localpart@domain.tld`: no spaces, a non-empty local part
/// before the last `@`, a non-empty host, and a final dot segment of 2–6
/// ASCII letters (case-insensitive).
#[must_use]
pub fn email_has_valid_shape(email: &str) -> bool {
    if email.contains(' ') {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if host.is_empty() {
        return false;
    }
    (2..=6).contains(&tld.len()) && tld.chars().all(|c| c.is_ascii_alphabetic())
}
