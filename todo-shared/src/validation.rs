//! Client-side validation for the account forms.
//!
//! Two password checks live here and they intentionally disagree:
//! [`password_strength_score`] drives the strength bar and ignores lowercase
//! letters, while [`is_password_strong`] is the policy gate and requires them.
//! Only the gate may block a submission.

use thiserror::Error;

use crate::models::RegisterRequest;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validation errors that stop a form before any request is sent.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// Field is required but empty
    #[error("{0} is required.")]
    Required(&'static str),
    /// Email address is missing an '@'
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    /// Password fails the strength policy
    #[error(
        "Password must be at least 8 characters, include uppercase, lowercase, digit, and special character."
    )]
    WeakPassword,
    /// New password and its confirmation differ
    #[error("New passwords do not match!")]
    PasswordsDoNotMatch,
    /// Priority outside `0..=4`
    #[error("Priority must be between 0 and 4.")]
    PriorityOutOfRange,
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

fn has_special(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}

fn long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Scores a password from 0 to 4 for the strength bar.
///
/// One point each for: at least 8 characters, an uppercase letter, a digit,
/// and a character that is not an ASCII letter or digit. Lowercase letters
/// are not scored.
#[must_use]
pub fn password_strength_score(password: &str) -> u8 {
    [
        long_enough(password),
        has_uppercase(password),
        has_digit(password),
        has_special(password),
    ]
    .into_iter()
    .map(u8::from)
    .sum()
}

/// The password policy gate used by registration and password change.
#[must_use]
pub fn is_password_strong(password: &str) -> bool {
    long_enough(password)
        && has_uppercase(password)
        && has_lowercase(password)
        && has_digit(password)
        && has_special(password)
}

/// Presentation bucket for a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    /// Maps a score to its bucket; scores above 4 count as strong.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => Self::VeryWeak,
            1 => Self::Weak,
            2 => Self::Fair,
            3 => Self::Good,
            _ => Self::Strong,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    /// Progress bar colour class.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::VeryWeak | Self::Weak => "bg-danger",
            Self::Fair => "bg-warning",
            Self::Good => "bg-info",
            Self::Strong => "bg-success",
        }
    }
}

/// Everything the strength bar needs for one password value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthMeter {
    pub score: u8,
    pub percent: u8,
    pub level: StrengthLevel,
    /// Caption under the bar; empty when the password is empty.
    pub text: String,
}

impl StrengthMeter {
    #[must_use]
    pub fn measure(password: &str) -> Self {
        let score = password_strength_score(password);
        let percent = score * 25;
        let level = StrengthLevel::from_score(score);
        let text = if password.is_empty() {
            String::new()
        } else {
            format!("Strength: {} ({percent}%)", level.label())
        };
        Self {
            score,
            percent,
            level,
            text,
        }
    }
}

/// Validates an email address.
///
/// # Errors
/// [`ValidationError::Required`] when blank, [`ValidationError::InvalidEmail`]
/// when there is no '@'.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required("Email"));
    }

    if !trimmed.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Checks a password against the strength policy.
///
/// # Errors
/// [`ValidationError::WeakPassword`] when [`is_password_strong`] rejects it.
pub fn validate_password_policy(password: &str) -> Result<(), ValidationError> {
    if is_password_strong(password) {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword)
    }
}

/// Validates a registration form before it is sent.
///
/// Only the password is gated; the server owns the rules for the other fields.
///
/// # Errors
/// [`ValidationError::WeakPassword`] when the password fails the policy.
pub fn validate_registration(request: &RegisterRequest) -> Result<(), ValidationError> {
    validate_password_policy(&request.password)
}

/// Validates the new password pair of the change-password form.
///
/// The confirmation is compared first so a typo is reported before policy.
///
/// # Errors
/// [`ValidationError::PasswordsDoNotMatch`] or [`ValidationError::WeakPassword`].
pub fn validate_new_password(new_password: &str, confirm: &str) -> Result<(), ValidationError> {
    if new_password != confirm {
        return Err(ValidationError::PasswordsDoNotMatch);
    }
    validate_password_policy(new_password)
}

/// Validates a todo description and priority before submission.
///
/// # Errors
/// [`ValidationError::Required`] for a blank description,
/// [`ValidationError::PriorityOutOfRange`] for a priority above 4.
pub fn validate_todo(description: &str, priority: u8) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::Required("Description"));
    }
    if priority > crate::models::MAX_PRIORITY {
        return Err(ValidationError::PriorityOutOfRange);
    }
    Ok(())
}
