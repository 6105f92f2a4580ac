//! Input validation for sign-up and sign-in
//!
//! Every rule is checked and every failure reported, so a caller can log the full list
//! even though the screen only shows a single generic message.
//!
//! Sign-up rejects usernames and passwords with leading or trailing whitespace. Sign-in
//! only requires the fields to be non-blank and leaves trimming to the lookup.

use std::fmt;

/// Minimum password length, in UTF-16 code units, after trimming.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A single failed validation rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationIssue {
    UsernameRequired,
    PasswordRequired,
    VerifyPasswordRequired,
    UsernameHasSurroundingSpaces,
    PasswordHasSurroundingSpaces,
    PasswordTooShort,
    PasswordsDoNotMatch,
}

impl ValidationIssue {
    /// Human-readable reason.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationIssue::UsernameRequired => "Username is required",
            ValidationIssue::PasswordRequired => "Password is required",
            ValidationIssue::VerifyPasswordRequired => "Verify password is required",
            ValidationIssue::UsernameHasSurroundingSpaces => {
                "Username cannot start or end with spaces"
            }
            ValidationIssue::PasswordHasSurroundingSpaces => {
                "Password cannot start or end with spaces"
            }
            ValidationIssue::PasswordTooShort => "Password must be at least 6 characters",
            ValidationIssue::PasswordsDoNotMatch => "Passwords do not match",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of validating a form: the list of failed rules, in check order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// True when no rule failed.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn contains(&self, issue: ValidationIssue) -> bool {
        self.issues.contains(&issue)
    }

    /// The reasons as display strings.
    pub fn messages(&self) -> Vec<&'static str> {
        self.issues.iter().map(ValidationIssue::message).collect()
    }

    fn push_if(&mut self, failed: bool, issue: ValidationIssue) {
        if failed {
            self.issues.push(issue);
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Length of the trimmed password in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts as two.
fn password_length(password: &str) -> usize {
    password.trim().encode_utf16().count()
}

/// Validates the sign-up form.
///
/// Rules that compare or measure a field only run when that field is non-empty as
/// typed, so an empty password reports "required" and nothing else.
pub fn validate_sign_up(username: &str, password: &str, verify_password: &str) -> ValidationReport {
    let mut report = ValidationReport::default();

    report.push_if(is_blank(username), ValidationIssue::UsernameRequired);
    report.push_if(is_blank(password), ValidationIssue::PasswordRequired);
    report.push_if(
        is_blank(verify_password),
        ValidationIssue::VerifyPasswordRequired,
    );

    report.push_if(
        !username.is_empty() && username != username.trim(),
        ValidationIssue::UsernameHasSurroundingSpaces,
    );
    report.push_if(
        !password.is_empty() && password != password.trim(),
        ValidationIssue::PasswordHasSurroundingSpaces,
    );

    report.push_if(
        !password.is_empty() && password_length(password) < MIN_PASSWORD_LENGTH,
        ValidationIssue::PasswordTooShort,
    );

    report.push_if(
        !password.is_empty()
            && !verify_password.is_empty()
            && password.trim() != verify_password.trim(),
        ValidationIssue::PasswordsDoNotMatch,
    );

    report
}

/// Validates the sign-in form: both fields must be non-blank.
pub fn validate_sign_in(username: &str, password: &str) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.push_if(is_blank(username), ValidationIssue::UsernameRequired);
    report.push_if(is_blank(password), ValidationIssue::PasswordRequired);
    report
}
