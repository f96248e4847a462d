//! # Form Controllers
//!
//! `LoginForm` and `SignupForm` own their field text and the error state
//! shown under each field. `submit()` re-validates every field from scratch.
//!
//! ```text
//! submit()
//!   ├── validate every field (fixed order, no short-circuit)
//!   ├── errors replaced wholesale
//!   └── no errors?
//!         ├── Login:  on_success(Credentials) right away
//!         └── Signup: park the profile until acknowledge(on_confirmed)
//! ```
//!
//! Navigation is never performed here. Callers pass the continuation.

use log::debug;

use crate::core::validation::{
    FormField, PasswordPolicy, ValidationResult, is_valid_email, looks_like_email,
    validate_password,
};

pub const LOGIN_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Validated login input handed to the success continuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Validated signup input handed to the success continuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupProfile {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// What happened on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields valid.
    Accepted,
    /// At least one field has an error; see the form's `errors()`.
    Rejected,
}

/// A single text edit applied to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Paste(String),
    Backspace,
    Clear,
}

impl FieldEdit {
    pub fn apply(&self, buffer: &mut String) {
        match self {
            FieldEdit::Insert(c) => buffer.push(*c),
            // Single-line fields: drop newlines from pasted text
            FieldEdit::Paste(text) => {
                buffer.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'))
            }
            FieldEdit::Backspace => {
                buffer.pop();
            }
            FieldEdit::Clear => buffer.clear(),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    errors: ValidationResult,
}

impl LoginForm {
    pub const FIELDS: [FormField; 2] = [FormField::Email, FormField::Password];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Email => Some(&mut self.email),
            FormField::Password => Some(&mut self.password),
            FormField::Name => None,
        }
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Runs both validators against the current field values.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        if !is_valid_email(&self.email) {
            result.insert(FormField::Email, LOGIN_EMAIL_MESSAGE);
        }
        result.record(
            FormField::Password,
            validate_password(&self.password, PasswordPolicy::Login),
        );
        result
    }

    /// Validates and, when clean, calls `on_success` exactly once.
    pub fn submit<F>(&mut self, on_success: F) -> SubmitOutcome
    where
        F: FnOnce(Credentials),
    {
        self.errors = self.validate();
        if !self.errors.is_empty() {
            debug!("Login rejected: {} field error(s)", self.errors.len());
            return SubmitOutcome::Rejected;
        }

        on_success(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        });
        SubmitOutcome::Accepted
    }
}

// ============================================================================
// Signup
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    errors: ValidationResult,
    /// Set between a successful submit and the user's acknowledgment.
    pending: Option<SignupProfile>,
}

impl SignupForm {
    pub const FIELDS: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Password];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Password => Some(&mut self.password),
        }
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    /// True while a valid profile waits for the confirmation step.
    pub fn is_awaiting_confirmation(&self) -> bool {
        self.pending.is_some()
    }

    /// Runs name, email and password validators, in that order.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        if self.name.is_empty() {
            result.insert(FormField::Name, "Name is required.");
        }

        if self.email.is_empty() {
            result.insert(FormField::Email, "Email is required.");
        } else if !looks_like_email(&self.email) {
            result.insert(FormField::Email, "Invalid email format.");
        }

        result.record(
            FormField::Password,
            validate_password(&self.password, PasswordPolicy::Signup),
        );
        result
    }

    /// Validates; on success parks the profile until `acknowledge`.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors = self.validate();
        if !self.errors.is_empty() {
            self.pending = None;
            debug!("Signup rejected: {} field error(s)", self.errors.len());
            return SubmitOutcome::Rejected;
        }

        self.pending = Some(SignupProfile {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        });
        SubmitOutcome::Accepted
    }

    /// Completes a pending signup, calling `on_confirmed` once.
    ///
    /// Returns false (and calls nothing) if no signup is pending.
    pub fn acknowledge<F>(&mut self, on_confirmed: F) -> bool
    where
        F: FnOnce(SignupProfile),
    {
        match self.pending.take() {
            Some(profile) => {
                on_confirmed(profile);
                true
            }
            None => false,
        }
    }
}
