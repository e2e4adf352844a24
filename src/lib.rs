//! Progress Tracker: learning progress engine
//!
//! This library tracks student enrollment and points across a fixed catalog
//! of courses, ranks the courses against each other and notifies students
//! once per completed course.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod ledger;
pub mod notify;
pub mod platform;
pub mod registry;
pub mod reporter;
pub mod session;
pub mod validation;

pub use error::{LookupError, PointsError, RegistrationError};
pub use platform::LearningPlatform;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// First id handed out by a fresh registry
pub const FIRST_STUDENT_ID: u64 = 10000;

/// Courses offered by the platform, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Course {
    Java,
    #[serde(rename = "DSA")]
    Dsa,
    Databases,
    Spring,
}

impl Course {
    /// Full catalog, in the order points lines list their columns
    pub const ALL: [Course; 4] = [Course::Java, Course::Dsa, Course::Databases, Course::Spring];

    pub fn name(self) -> &'static str {
        match self {
            Course::Java => "Java",
            Course::Dsa => "DSA",
            Course::Databases => "Databases",
            Course::Spring => "Spring",
        }
    }

    /// Points at or above which the course counts as completed
    pub fn points_to_finish(self) -> u32 {
        match self {
            Course::Java => 600,
            Course::Dsa => 400,
            Course::Databases => 480,
            Course::Spring => 550,
        }
    }

    /// Position in [`Course::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Course {
    type Err = LookupError;

    /// Case-insensitive lookup by course name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Course::ALL
            .into_iter()
            .find(|course| course.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LookupError::UnknownCourse(wanted.to_string()))
    }
}

/// Platform-assigned student identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(u64);

impl StudentId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(StudentId)
            .map_err(|_| LookupError::StudentNotFound(s.to_string()))
    }
}

/// A registered student. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    /// All last-name tokens joined without a separator
    pub last_name: String,
    pub email: String,
}

impl Student {
    /// Name as shown in notifications
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
