//! Course statistics - popularity, activity and difficulty

use super::ranking::{rank, Extreme, Ranking};
use crate::ledger::CourseLedger;
use crate::Course;
use serde::Serialize;

/// Metric courses are compared by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Number of enrolled students
    Popularity,
    /// Number of submissions
    Activity,
    /// Average points per submission. Courses without submissions are not
    /// ranked.
    AverageGrade,
}

/// The six comparative statistics shown by the `statistics` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStatistics {
    pub most_popular: Ranking,
    pub least_popular: Ranking,
    pub highest_activity: Ranking,
    pub lowest_activity: Ranking,
    pub easiest: Ranking,
    pub hardest: Ranking,
}

/// Compares course ledgers against each other
pub struct StatisticsAnalyzer<'a> {
    ledgers: &'a [CourseLedger],
}

impl<'a> StatisticsAnalyzer<'a> {
    pub fn new(ledgers: &'a [CourseLedger]) -> Self {
        Self { ledgers }
    }

    /// Rank by `metric`; `n/a` when no student is enrolled anywhere
    pub fn rank_by(&self, metric: Metric, extreme: Extreme) -> Ranking {
        if !self.has_enrollments() {
            return Ranking::NotAvailable;
        }
        rank(&self.values(metric), extreme)
    }

    pub fn most_popular(&self) -> Ranking {
        self.rank_by(Metric::Popularity, Extreme::Highest)
    }

    pub fn least_popular(&self) -> Ranking {
        self.rank_by(Metric::Popularity, Extreme::Lowest)
    }

    pub fn highest_activity(&self) -> Ranking {
        self.rank_by(Metric::Activity, Extreme::Highest)
    }

    pub fn lowest_activity(&self) -> Ranking {
        self.rank_by(Metric::Activity, Extreme::Lowest)
    }

    /// Highest average grade per submission
    pub fn easiest(&self) -> Ranking {
        self.rank_by(Metric::AverageGrade, Extreme::Highest)
    }

    /// Lowest average grade per submission
    pub fn hardest(&self) -> Ranking {
        self.rank_by(Metric::AverageGrade, Extreme::Lowest)
    }

    pub fn statistics(&self) -> CourseStatistics {
        CourseStatistics {
            most_popular: self.most_popular(),
            least_popular: self.least_popular(),
            highest_activity: self.highest_activity(),
            lowest_activity: self.lowest_activity(),
            easiest: self.easiest(),
            hardest: self.hardest(),
        }
    }

    fn has_enrollments(&self) -> bool {
        self.ledgers.iter().any(|l| l.enrolled_count() != 0)
    }

    fn values(&self, metric: Metric) -> Vec<(Course, f64)> {
        self.ledgers
            .iter()
            .filter_map(|ledger| {
                let value = match metric {
                    Metric::Popularity => Some(ledger.enrolled_count() as f64),
                    Metric::Activity => Some(ledger.total_submissions() as f64),
                    Metric::AverageGrade => ledger.average_grade_per_submission(),
                };
                value.map(|v| (ledger.course(), v))
            })
            .collect()
    }
}
