//! Analyzer module - cross-course statistics

pub mod ranking;
pub mod statistics;

pub use ranking::{rank, Extreme, Ranking};
pub use statistics::{CourseStatistics, Metric, StatisticsAnalyzer};
