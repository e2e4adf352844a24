//! Domain errors. The `Display` text of each variant is the message shown to
//! the user, so the session renders them as-is.

use thiserror::Error;

/// Why a credentials line was rejected. Checks run in declaration order and
/// the first failure wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Incorrect credentials.")]
    TooFewTokens,

    #[error("Incorrect first name.")]
    InvalidFirstName,

    #[error("Incorrect last name.")]
    InvalidLastName,

    #[error("Incorrect email.")]
    InvalidEmail,

    #[error("This email is already taken.")]
    DuplicateEmail,
}

/// Why a points line was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointsError {
    #[error("Incorrect points format.")]
    IncorrectFormat,

    #[error("No student is found for id={0}.")]
    UnknownStudent(String),
}

/// Failed lookups of students or courses
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("No student is found for id={0}.")]
    StudentNotFound(String),

    #[error("Unknown course.")]
    UnknownCourse(String),
}

impl RegistrationError {
    /// Stable machine-readable code, used by the JSON reporter
    pub fn code(&self) -> &'static str {
        match self {
            RegistrationError::TooFewTokens => "too-few-tokens",
            RegistrationError::InvalidFirstName => "invalid-first-name",
            RegistrationError::InvalidLastName => "invalid-last-name",
            RegistrationError::InvalidEmail => "invalid-email",
            RegistrationError::DuplicateEmail => "duplicate-email",
        }
    }
}

impl PointsError {
    pub fn code(&self) -> &'static str {
        match self {
            PointsError::IncorrectFormat => "incorrect-format",
            PointsError::UnknownStudent(_) => "unknown-student",
        }
    }
}

impl LookupError {
    pub fn code(&self) -> &'static str {
        match self {
            LookupError::StudentNotFound(_) => "student-not-found",
            LookupError::UnknownCourse(_) => "unknown-course",
        }
    }
}
