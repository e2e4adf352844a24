//! Ranking of courses by a single metric with deterministic ties

use crate::Course;
use serde::{Serialize, Serializer};

/// Which end of the ranking to report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Highest,
    Lowest,
}

/// Outcome of ranking the courses by one metric
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ranking {
    /// Nothing meaningful to report (`n/a`)
    NotAvailable,
    /// Courses sharing the extreme value, in catalog order
    Courses(Vec<Course>),
}

impl Ranking {
    pub fn is_available(&self) -> bool {
        matches!(self, Ranking::Courses(_))
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ranking::NotAvailable => write!(f, "n/a"),
            Ranking::Courses(courses) => {
                let names: Vec<&str> = courses.iter().map(|c| c.name()).collect();
                write!(f, "{}", names.join(", "))
            }
        }
    }
}

impl Serialize for Ranking {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Pick the courses holding the highest or lowest value.
///
/// `values` lists the ranked courses in catalog order. Every course equal to
/// the extreme is reported. On the lowest side a value shared by every ranked
/// course yields [`Ranking::NotAvailable`], so a flat field is never reported
/// as both best and worst.
pub fn rank(values: &[(Course, f64)], extreme: Extreme) -> Ranking {
    let mut iter = values.iter().map(|(_, v)| *v);
    let Some(first) = iter.next() else {
        return Ranking::NotAvailable;
    };
    let target = match extreme {
        Extreme::Highest => iter.fold(first, f64::max),
        Extreme::Lowest => iter.fold(first, f64::min),
    };

    let tied: Vec<Course> = values
        .iter()
        .filter(|(_, v)| *v == target)
        .map(|(course, _)| *course)
        .collect();

    if extreme == Extreme::Lowest && tied.len() == values.len() {
        return Ranking::NotAvailable;
    }
    Ranking::Courses(tied)
}
