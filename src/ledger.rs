//! Per-course ledger of earned points and submissions

use crate::{Course, StudentId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One student's standing in one course
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub earned_points: u64,
    pub submission_count: u64,
}

/// Row of the top learners table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopLearner {
    pub id: StudentId,
    pub points: u64,
    /// Completion percentage (0.0-100.0, one decimal)
    pub completed: f64,
}

/// Points and submissions of every student enrolled in one course.
///
/// A student is enrolled once they have earned points in the course at least
/// once; entries are never removed and their counters never decrease.
#[derive(Debug, Clone)]
pub struct CourseLedger {
    course: Course,
    entries: BTreeMap<StudentId, LedgerEntry>,
}

impl CourseLedger {
    pub fn new(course: Course) -> Self {
        Self {
            course,
            entries: BTreeMap::new(),
        }
    }

    pub fn course(&self) -> Course {
        self.course
    }

    /// Record one submission worth `amount` points, enrolling the student on
    /// first touch. The caller checks that the student is registered.
    pub fn add_points(&mut self, student: StudentId, amount: u32) {
        let entry = self.entries.entry(student).or_default();
        entry.earned_points = entry.earned_points.saturating_add(u64::from(amount));
        entry.submission_count += 1;
    }

    pub fn entry(&self, student: StudentId) -> Option<&LedgerEntry> {
        self.entries.get(&student)
    }

    /// Earned points, zero when the student is not enrolled
    pub fn earned_points(&self, student: StudentId) -> u64 {
        self.entry(student).map_or(0, |e| e.earned_points)
    }

    pub fn submissions(&self, student: StudentId) -> u64 {
        self.entry(student).map_or(0, |e| e.submission_count)
    }

    pub fn is_finished(&self, student: StudentId) -> bool {
        self.earned_points(student) >= u64::from(self.course.points_to_finish())
    }

    /// Completion percentage rounded half-up to one decimal place
    pub fn completion_percent(&self, student: StudentId) -> f64 {
        if self.is_finished(student) {
            return 100.0;
        }
        let threshold = u64::from(self.course.points_to_finish());
        // tenths of a percent: earned * 1000 / threshold, rounded half-up
        let tenths = (2000 * self.earned_points(student) + threshold) / (2 * threshold);
        tenths as f64 / 10.0
    }

    pub fn enrolled_count(&self) -> usize {
        self.entries.len()
    }

    pub fn total_submissions(&self) -> u64 {
        self.entries.values().map(|e| e.submission_count).sum()
    }

    pub fn total_earned_points(&self) -> u64 {
        self.entries.values().map(|e| e.earned_points).sum()
    }

    /// Average points per submission, `None` when nothing was submitted
    pub fn average_grade_per_submission(&self) -> Option<f64> {
        let submissions = self.total_submissions();
        if submissions == 0 {
            return None;
        }
        Some(self.total_earned_points() as f64 / submissions as f64)
    }

    /// Students ranked by earned points (descending), ties by id string
    pub fn top_learners(&self) -> Vec<TopLearner> {
        let mut ranked: Vec<(&StudentId, &LedgerEntry)> = self.entries.iter().collect();
        ranked.sort_by(|(a_id, a), (b_id, b)| {
            b.earned_points
                .cmp(&a.earned_points)
                .then_with(|| a_id.to_string().cmp(&b_id.to_string()))
        });
        ranked
            .into_iter()
            .map(|(id, entry)| TopLearner {
                id: *id,
                points: entry.earned_points,
                completed: self.completion_percent(*id),
            })
            .collect()
    }

    /// Students at or above the completion threshold, ascending id
    pub fn finished_students(&self) -> Vec<StudentId> {
        self.entries
            .keys()
            .copied()
            .filter(|id| self.is_finished(*id))
            .collect()
    }
}
