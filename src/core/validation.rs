//! # Field Validators
//!
//! Pure predicates over raw field text. No I/O, no state.
//!
//! Two password policies live side by side and are deliberately *not* unified:
//!
//! | Policy | Rule                                                        |
//! |--------|-------------------------------------------------------------|
//! | Login  | length ≥ 6, at least one letter, at least one digit         |
//! | Signup | non-empty, length ≥ 6, at least one uppercase, one digit    |
//!
//! The signup form also uses a looser email check than the login form.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// `local-part@domain.tld` with a 2+ letter final label.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Anything shaped like `x@y.z` (no anchoring, no character classes).
static LOOSE_EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("loose email pattern compiles")
});

/// Minimum password length shared by both policies.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Returns true if `s` is a syntactically valid email address.
///
/// No DNS or mailbox verification happens here.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_PATTERN.is_match(s)
}

/// The signup form's lenient check: `\S+@\S+\.\S+` anywhere in the string.
pub fn looks_like_email(s: &str) -> bool {
    LOOSE_EMAIL_PATTERN.is_match(s)
}

/// Which password rules to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordPolicy {
    Login,
    Signup,
}

/// Result of running a single validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(String),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(msg) => Some(msg),
        }
    }
}

pub const LOGIN_PASSWORD_MESSAGE: &str =
    "Password must be at least 6 characters long and contain both letters and numbers.";

/// Validates `s` against the given password policy.
pub fn validate_password(s: &str, policy: PasswordPolicy) -> ValidationOutcome {
    match policy {
        PasswordPolicy::Login => login_password(s),
        PasswordPolicy::Signup => signup_password(s),
    }
}

fn login_password(s: &str) -> ValidationOutcome {
    let long_enough = s.chars().count() >= MIN_PASSWORD_LEN;
    let has_letter = s.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = s.chars().any(|c| c.is_ascii_digit());

    if long_enough && has_letter && has_digit {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::Invalid(LOGIN_PASSWORD_MESSAGE.to_string())
    }
}

/// First failing rule wins.
fn signup_password(s: &str) -> ValidationOutcome {
    let message = if s.is_empty() {
        "Password is required."
    } else if s.chars().count() < MIN_PASSWORD_LEN {
        "Password must be at least 6 characters long."
    } else if !s.chars().any(|c| c.is_ascii_uppercase()) {
        "Password must contain at least one uppercase letter."
    } else if !s.chars().any(|c| c.is_ascii_digit()) {
        "Password must contain at least one number."
    } else {
        return ValidationOutcome::Valid;
    };
    ValidationOutcome::Invalid(message.to_string())
}

// ============================================================================
// Validation Result
// ============================================================================

/// A form field that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Password => "Password",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One field's error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

/// Per-field error messages, kept in evaluation order.
///
/// Built fresh on every submit. A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for `field`, replacing any earlier one for the same field.
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        let message = message.into();
        if let Some(existing) = self.errors.iter_mut().find(|e| e.field == field) {
            existing.message = message;
        } else {
            self.errors.push(FieldError { field, message });
        }
    }

    /// Records the outcome's message (if any) for `field`.
    pub fn record(&mut self, field: FormField, outcome: ValidationOutcome) {
        if let ValidationOutcome::Invalid(message) = outcome {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Fields with errors, in the order they were evaluated.
    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.errors.iter().map(|e| e.field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}
