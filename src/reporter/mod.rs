//! Reporter module for output formatting

pub mod console;
pub mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

use crate::analyzer::CourseStatistics;
use crate::platform::{CourseReport, NotificationSummary, StudentProgress};
use crate::StudentId;

/// Prompts shown when entering a sub-mode of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Credentials,
    Points,
    FindStudent,
    CourseDetails,
}

impl Prompt {
    pub fn text(self) -> &'static str {
        match self {
            Prompt::Credentials => "Enter student credentials or 'back' to return",
            Prompt::Points => "Enter an id and points or 'back' to return",
            Prompt::FindStudent => "Enter an id or 'back' to return",
            Prompt::CourseDetails => "Type the name of a course to see details or 'back' to quit:",
        }
    }
}

/// Everything the session shows to the user
#[derive(Debug)]
pub enum Event<'a> {
    Banner,
    Bye,
    NoInput,
    UnknownCommand,
    /// `back` typed at the top level
    ExitHint,
    Prompt(Prompt),
    StudentAdded(StudentId),
    StudentsAddedTotal(usize),
    PointsUpdated(StudentId),
    Progress(&'a StudentProgress),
    Students(&'a [StudentId]),
    Statistics(&'a CourseStatistics),
    CourseReport(&'a CourseReport),
    Notifications(&'a NotificationSummary),
    /// Rejected input, with a stable code and the user-facing message
    Rejected { code: &'static str, message: String },
}

/// Output format of a session
#[derive(Debug)]
pub enum Reporter {
    Console(ConsoleReporter),
    Json(JsonReporter),
}

impl Reporter {
    /// Render an event; `None` when the format has nothing to show for it
    pub fn render(&self, event: &Event<'_>) -> Option<String> {
        match self {
            Reporter::Console(console) => Some(console.render(event)),
            Reporter::Json(json) => json.render(event),
        }
    }
}
