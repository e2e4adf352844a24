//! Learning platform - the engine behind every tracker command

use crate::analyzer::{CourseStatistics, StatisticsAnalyzer};
use crate::error::{LookupError, PointsError, RegistrationError};
use crate::ledger::{CourseLedger, TopLearner};
use crate::notify::{
    EmailNotification, NotificationChannel, NotificationSender, NotificationTracker, Notifier,
};
use crate::registry::StudentRegistry;
use crate::validation::parse_points_line;
use crate::{Course, StudentId};
use serde::Serialize;

/// Points of one student in every course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProgress {
    pub id: StudentId,
    /// Earned points per course, in catalog order
    pub points: Vec<(Course, u64)>,
}

impl StudentProgress {
    pub fn points_in(&self, course: Course) -> u64 {
        self.points
            .iter()
            .find(|(c, _)| *c == course)
            .map_or(0, |(_, p)| *p)
    }
}

/// Top learners of one course
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseReport {
    pub course: Course,
    pub learners: Vec<TopLearner>,
}

/// Result of one notification sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSummary {
    /// Distinct students notified by this sweep
    pub notified_students: usize,
    /// Messages composed by the sweep, in delivery order
    pub messages: Vec<EmailNotification>,
}

/// All state of a tracking session: registered students, one ledger per
/// course and the notification history.
///
/// Each operation runs to completion before the next one starts; mutating
/// operations take `&mut self`.
#[derive(Debug)]
pub struct LearningPlatform {
    registry: StudentRegistry,
    ledgers: Vec<CourseLedger>,
    tracker: NotificationTracker,
    notifier: Notifier,
}

impl LearningPlatform {
    /// Create an empty platform notifying by email
    pub fn new() -> Self {
        Self::with_channel(NotificationChannel::Email)
    }

    /// Create an empty platform notifying through `channel`
    pub fn with_channel(channel: NotificationChannel) -> Self {
        Self {
            registry: StudentRegistry::new(),
            ledgers: Course::ALL.into_iter().map(CourseLedger::new).collect(),
            tracker: NotificationTracker::new(),
            notifier: Notifier::for_channel(channel),
        }
    }

    /// Ledgers of every course, in catalog order
    pub fn ledgers(&self) -> &[CourseLedger] {
        &self.ledgers
    }

    pub fn ledger(&self, course: Course) -> &CourseLedger {
        &self.ledgers[course.index()]
    }

    pub fn notification_tracker(&self) -> &NotificationTracker {
        &self.tracker
    }

    /// Register a student from `<first> <last...> <email>`
    pub fn register_student(&mut self, credentials: &str) -> Result<StudentId, RegistrationError> {
        let result = self.registry.register(credentials);
        match &result {
            Ok(id) => tracing::debug!(%id, "student registered"),
            Err(e) => tracing::debug!(reason = e.code(), "registration rejected"),
        }
        result
    }

    /// Apply a points line `<id> <java> <dsa> <databases> <spring>`.
    ///
    /// Zero columns are skipped, so they neither enroll the student nor count
    /// as a submission.
    pub fn add_points(&mut self, line: &str) -> Result<StudentId, PointsError> {
        let parsed = parse_points_line(line.trim()).ok_or(PointsError::IncorrectFormat)?;
        let id = self
            .registry
            .resolve(parsed.student)
            .map(|s| s.id)
            .ok_or_else(|| PointsError::UnknownStudent(parsed.student.to_string()))?;

        for (course, amount) in parsed.nonzero() {
            self.ledgers[course.index()].add_points(id, amount);
            tracing::debug!(%id, %course, amount, "points added");
        }
        Ok(id)
    }

    /// Points of a student in every course. Only the first token of `query`
    /// is used as the id.
    pub fn find_student(&self, query: &str) -> Result<StudentProgress, LookupError> {
        let token = query.split_whitespace().next().unwrap_or("");
        let student = self
            .registry
            .resolve(token)
            .ok_or_else(|| LookupError::StudentNotFound(token.to_string()))?;
        Ok(self.progress_of(student.id))
    }

    /// Ids in registration order
    pub fn list_students(&self) -> &[StudentId] {
        self.registry.list_ids()
    }

    pub fn course_statistics(&self) -> CourseStatistics {
        StatisticsAnalyzer::new(&self.ledgers).statistics()
    }

    /// Top learners of the course named `course_name` (case-insensitive)
    pub fn top_learners(&self, course_name: &str) -> Result<CourseReport, LookupError> {
        let course: Course = course_name.parse()?;
        Ok(CourseReport {
            course,
            learners: self.ledger(course).top_learners(),
        })
    }

    /// Notify newly finished students through the configured channel
    pub fn notify_sweep(&mut self) -> NotificationSummary {
        let notified_students =
            self.tracker
                .sweep(&self.ledgers, &self.registry, &mut self.notifier);
        tracing::info!(notified_students, "notification sweep finished");
        NotificationSummary {
            notified_students,
            messages: self.notifier.drain(),
        }
    }

    /// Notify newly finished students through a caller-supplied sender
    pub fn notify_sweep_with(&mut self, sender: &mut dyn NotificationSender) -> usize {
        self.tracker.sweep(&self.ledgers, &self.registry, sender)
    }

    fn progress_of(&self, id: StudentId) -> StudentProgress {
        StudentProgress {
            id,
            points: self
                .ledgers
                .iter()
                .map(|l| (l.course(), l.earned_points(id)))
                .collect(),
        }
    }
}

impl Default for LearningPlatform {
    fn default() -> Self {
        Self::new()
    }
}
