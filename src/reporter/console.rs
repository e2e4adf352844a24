//! Console reporter with colored output

use super::Event;
use crate::analyzer::{CourseStatistics, Ranking};
use crate::platform::{CourseReport, NotificationSummary, StudentProgress};
use crate::StudentId;
use colored::Colorize;

/// Reporter for terminal output
#[derive(Debug)]
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output (completion bars in course reports)
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Render one session event as text, possibly spanning several lines
    pub fn render(&self, event: &Event<'_>) -> String {
        match event {
            Event::Banner => self.bold("Learning Progress Tracker"),
            Event::Bye => "Bye!".to_string(),
            Event::NoInput => "No input.".to_string(),
            Event::UnknownCommand => self.error("Unknown command!"),
            Event::ExitHint => "Enter 'exit' to exit the program.".to_string(),
            Event::Prompt(prompt) => prompt.text().to_string(),
            Event::StudentAdded(_) => self.success("The student has been added."),
            Event::StudentsAddedTotal(n) => format!("Total {} students have been added.", n),
            Event::PointsUpdated(_) => self.success("Points updated."),
            Event::Progress(progress) => self.progress(progress),
            Event::Students(ids) => self.student_list(ids),
            Event::Statistics(stats) => self.statistics(stats),
            Event::CourseReport(report) => self.course_report(report),
            Event::Notifications(summary) => self.notifications(summary),
            Event::Rejected { message, .. } => self.error(message),
        }
    }

    fn progress(&self, progress: &StudentProgress) -> String {
        let columns: Vec<String> = progress
            .points
            .iter()
            .map(|(course, points)| format!("{}={}", course, points))
            .collect();
        format!("{} points: {}", progress.id, columns.join("; "))
    }

    fn student_list(&self, ids: &[StudentId]) -> String {
        if ids.is_empty() {
            return "No students found.".to_string();
        }
        let mut lines = vec![self.bold("Students:")];
        lines.extend(ids.iter().map(|id| id.to_string()));
        lines.join("\n")
    }

    fn statistics(&self, stats: &CourseStatistics) -> String {
        let rows = [
            ("Most popular", &stats.most_popular),
            ("Least popular", &stats.least_popular),
            ("Highest activity", &stats.highest_activity),
            ("Lowest activity", &stats.lowest_activity),
            ("Easiest course", &stats.easiest),
            ("Hardest course", &stats.hardest),
        ];
        rows.iter()
            .map(|(label, ranking)| format!("{}: {}", label, self.ranking(ranking)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn ranking(&self, ranking: &Ranking) -> String {
        let text = ranking.to_string();
        if self.use_colors && !ranking.is_available() {
            text.dimmed().to_string()
        } else {
            text
        }
    }

    fn course_report(&self, report: &CourseReport) -> String {
        let mut lines = vec![self.bold(report.course.name())];
        lines.push(format!("{:<6}{:<10}{:<9}", "id", "points", "completed"));
        for learner in &report.learners {
            let mut row = format!(
                "{:<6}{:<10}{:.1}%",
                learner.id.to_string(),
                learner.points,
                learner.completed
            );
            if self.verbose {
                row.push(' ');
                row.push_str(&self.create_completion_bar(learner.completed));
            }
            lines.push(row);
        }
        lines.join("\n")
    }

    fn notifications(&self, summary: &NotificationSummary) -> String {
        let mut lines: Vec<String> = summary.messages.iter().map(|m| m.to_string()).collect();
        lines.push(format!(
            "Total {} students have been notified.",
            summary.notified_students
        ));
        lines.join("\n")
    }

    fn create_completion_bar(&self, completed: f64) -> String {
        let filled = ((completed / 10.0).floor() as usize).min(10);
        let bar = format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled));
        if self.use_colors && filled == 10 {
            bar.green().to_string()
        } else {
            bar
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn success(&self, text: &str) -> String {
        if self.use_colors {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn error(&self, text: &str) -> String {
        if self.use_colors {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
