//! At-most-once bookkeeping for completion notifications

use super::NotificationSender;
use crate::ledger::CourseLedger;
use crate::registry::StudentRegistry;
use crate::{Course, StudentId};
use std::collections::{BTreeSet, HashMap};

/// Remembers which students were already notified for which course.
///
/// Entries are only ever added: a student is told about a completed course
/// once, no matter how many sweeps run or how many points arrive later.
#[derive(Debug, Default)]
pub struct NotificationTracker {
    notified: HashMap<Course, BTreeSet<StudentId>>,
}

impl NotificationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notify every student who finished a course and has not been told yet.
    ///
    /// Returns the number of distinct students notified by this sweep; a
    /// student finishing two courses gets two notices but counts once.
    pub fn sweep(
        &mut self,
        ledgers: &[CourseLedger],
        registry: &StudentRegistry,
        sender: &mut dyn NotificationSender,
    ) -> usize {
        let mut newly_notified = BTreeSet::new();

        for ledger in ledgers {
            let course = ledger.course();
            let already = self.notified.entry(course).or_default();
            for id in ledger.finished_students() {
                if already.contains(&id) {
                    continue;
                }
                let Some(student) = registry.find_by_id(id) else {
                    tracing::warn!(%id, %course, "finished student missing from registry");
                    continue;
                };
                already.insert(id);
                sender.send(course, student);
                newly_notified.insert(id);
            }
        }

        newly_notified.len()
    }

    pub fn was_notified(&self, course: Course, student: StudentId) -> bool {
        self.notified
            .get(&course)
            .is_some_and(|ids| ids.contains(&student))
    }

    pub fn notified_count(&self, course: Course) -> usize {
        self.notified.get(&course).map_or(0, |ids| ids.len())
    }
}
