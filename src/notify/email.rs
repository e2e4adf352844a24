//! Email channel

use super::NotificationSender;
use crate::{Course, Student};
use serde::Serialize;

const SUBJECT: &str = "Your Learning Progress";

/// A composed completion email
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotification {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub course: Course,
}

impl EmailNotification {
    pub fn compose(course: Course, student: &Student) -> Self {
        Self {
            to: student.email.clone(),
            subject: SUBJECT.to_string(),
            body: format!(
                "Hello, {}! You have accomplished our {} course!",
                student.full_name(),
                course
            ),
            course,
        }
    }
}

impl std::fmt::Display for EmailNotification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "To: {}\nRe: {}\n{}", self.to, self.subject, self.body)
    }
}

/// Collects composed emails in an outbox until the caller drains it
#[derive(Debug, Default)]
pub struct EmailNotifier {
    outbox: Vec<EmailNotification>,
}

impl EmailNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[EmailNotification] {
        &self.outbox
    }

    pub fn drain(&mut self) -> Vec<EmailNotification> {
        std::mem::take(&mut self.outbox)
    }
}

impl NotificationSender for EmailNotifier {
    fn send(&mut self, course: Course, student: &Student) {
        let email = EmailNotification::compose(course, student);
        tracing::info!(to = %email.to, course = %course, "completion email composed");
        self.outbox.push(email);
    }
}
