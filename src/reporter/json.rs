//! JSON reporter for machine-readable output
//!
//! Every result becomes one JSON object tagged with an `event` field.
//! Cosmetic output (banner, prompts, hints) is not emitted.

use super::Event;
use serde_json::{json, Value};

/// Reporter for JSON output
#[derive(Debug)]
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Render an event, or `None` for purely cosmetic events
    pub fn render(&self, event: &Event<'_>) -> Option<String> {
        let value = match event {
            Event::Banner | Event::Bye | Event::ExitHint | Event::Prompt(_) => return None,
            Event::NoInput => json!({ "event": "noInput" }),
            Event::UnknownCommand => json!({ "event": "unknownCommand" }),
            Event::StudentAdded(id) => json!({ "event": "studentAdded", "id": id }),
            Event::StudentsAddedTotal(n) => json!({ "event": "studentsAdded", "total": n }),
            Event::PointsUpdated(id) => json!({ "event": "pointsUpdated", "id": id }),
            Event::Progress(progress) => {
                let points: serde_json::Map<String, Value> = progress
                    .points
                    .iter()
                    .map(|(course, points)| (course.name().to_string(), json!(points)))
                    .collect();
                json!({ "event": "student", "id": progress.id, "points": points })
            }
            Event::Students(ids) => json!({ "event": "students", "ids": ids }),
            Event::Statistics(stats) => json!({ "event": "statistics", "statistics": stats }),
            Event::CourseReport(report) => json!({
                "event": "topLearners",
                "course": report.course,
                "learners": report.learners,
            }),
            Event::Notifications(summary) => json!({
                "event": "notified",
                "notifiedStudents": summary.notified_students,
                "messages": summary.messages,
            }),
            Event::Rejected { code, message } => json!({
                "event": "error",
                "code": code,
                "message": message,
            }),
        };
        Some(self.to_string(&value))
    }

    fn to_string(&self, value: &Value) -> String {
        if self.pretty {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{CourseStatistics, Ranking};
    use crate::platform::StudentProgress;
    use crate::reporter::Prompt;
    use crate::{Course, StudentId};

    fn parse(s: &str) -> Value {
        serde_json::from_str(s).expect("valid JSON")
    }

    #[test]
    fn test_cosmetic_events_are_skipped() {
        let reporter = JsonReporter::new();
        assert!(reporter.render(&Event::Banner).is_none());
        assert!(reporter.render(&Event::Prompt(Prompt::Points)).is_none());
        assert!(reporter.render(&Event::Bye).is_none());
    }

    #[test]
    fn test_student_added() {
        let out = JsonReporter::new()
            .render(&Event::StudentAdded(StudentId::new(10000)))
            .unwrap();
        assert_eq!(out, r#"{"event":"studentAdded","id":10000}"#);
    }

    #[test]
    fn test_progress_keys_by_course_name() {
        let progress = StudentProgress {
            id: StudentId::new(10000),
            points: vec![(Course::Java, 1), (Course::Dsa, 2), (Course::Databases, 0), (Course::Spring, 4)],
        };
        let value = parse(&JsonReporter::new().render(&Event::Progress(&progress)).unwrap());
        assert_eq!(value["points"]["DSA"], 2);
        assert_eq!(value["points"]["Spring"], 4);
    }

    #[test]
    fn test_statistics_uses_camel_case() {
        let stats = CourseStatistics {
            most_popular: Ranking::Courses(vec![Course::Java]),
            least_popular: Ranking::NotAvailable,
            highest_activity: Ranking::Courses(vec![Course::Java]),
            lowest_activity: Ranking::NotAvailable,
            easiest: Ranking::Courses(vec![Course::Java]),
            hardest: Ranking::NotAvailable,
        };
        let value = parse(&JsonReporter::new().render(&Event::Statistics(&stats)).unwrap());
        assert_eq!(value["statistics"]["mostPopular"], "Java");
        assert_eq!(value["statistics"]["hardest"], "n/a");
    }

    #[test]
    fn test_error_event() {
        let event = Event::Rejected {
            code: "unknown-course",
            message: "Unknown course.".to_string(),
        };
        let value = parse(&JsonReporter::new().pretty().render(&event).unwrap());
        assert_eq!(value["event"], "error");
        assert_eq!(value["code"], "unknown-course");
    }
}
