//! Interactive command session
//!
//! Reads one command per line and drives a [`LearningPlatform`]. Sub-modes
//! (`add students`, `add points`, `find`, `statistics`) keep reading lines
//! until `back`. End of input ends the session the same way `exit` does,
//! minus the farewell.

use crate::platform::LearningPlatform;
use crate::reporter::{Event, Prompt, Reporter};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const BACK: &str = "back";

/// Writes rendered events to the session output
struct Output<W> {
    writer: W,
    reporter: Reporter,
}

impl<W: Write> Output<W> {
    fn emit(&mut self, event: &Event<'_>) -> Result<()> {
        if let Some(text) = self.reporter.render(event) {
            writeln!(self.writer, "{}", text).context("Failed to write session output")?;
        }
        Ok(())
    }
}

/// Why a sub-mode stopped reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModeEnd {
    Back,
    EndOfInput,
}

/// A running tracker session over any line source and sink
pub struct Session<R, W> {
    input: R,
    out: Output<W>,
    platform: LearningPlatform,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, platform: LearningPlatform, reporter: Reporter) -> Self {
        Self {
            input,
            out: Output {
                writer: output,
                reporter,
            },
            platform,
        }
    }

    /// Run until `exit` or end of input and hand back the platform state
    pub fn run(mut self) -> Result<LearningPlatform> {
        self.out.emit(&Event::Banner)?;

        while let Some(line) = self.read_line()? {
            let command = line.trim();
            tracing::debug!(command, "command received");
            match command {
                "exit" => {
                    self.out.emit(&Event::Bye)?;
                    break;
                }
                "" => self.out.emit(&Event::NoInput)?,
                BACK => self.out.emit(&Event::ExitHint)?,
                "add students" => self.add_students()?,
                "list" => self.out.emit(&Event::Students(self.platform.list_students()))?,
                "add points" => self.add_points()?,
                "find" => self.find()?,
                "statistics" => self.statistics()?,
                "notify" => self.notify()?,
                _ => self.out.emit(&Event::UnknownCommand)?,
            }
        }

        self.out.writer.flush().context("Failed to flush session output")?;
        Ok(self.platform)
    }

    fn add_students(&mut self) -> Result<()> {
        self.out.emit(&Event::Prompt(Prompt::Credentials))?;
        let mut added = 0;
        let end = self.each_line(|session, line| {
            match session.platform.register_student(line) {
                Ok(id) => {
                    added += 1;
                    session.out.emit(&Event::StudentAdded(id))
                }
                Err(e) => session.out.emit(&Event::Rejected {
                    code: e.code(),
                    message: e.to_string(),
                }),
            }
        })?;
        if end == ModeEnd::Back {
            self.out.emit(&Event::StudentsAddedTotal(added))?;
        }
        Ok(())
    }

    fn add_points(&mut self) -> Result<()> {
        self.out.emit(&Event::Prompt(Prompt::Points))?;
        self.each_line(|session, line| match session.platform.add_points(line) {
            Ok(id) => session.out.emit(&Event::PointsUpdated(id)),
            Err(e) => session.out.emit(&Event::Rejected {
                code: e.code(),
                message: e.to_string(),
            }),
        })?;
        Ok(())
    }

    fn find(&mut self) -> Result<()> {
        self.out.emit(&Event::Prompt(Prompt::FindStudent))?;
        self.each_line(|session, line| match session.platform.find_student(line) {
            Ok(progress) => session.out.emit(&Event::Progress(&progress)),
            Err(e) => session.out.emit(&Event::Rejected {
                code: e.code(),
                message: e.to_string(),
            }),
        })?;
        Ok(())
    }

    fn statistics(&mut self) -> Result<()> {
        self.out.emit(&Event::Prompt(Prompt::CourseDetails))?;
        let stats = self.platform.course_statistics();
        self.out.emit(&Event::Statistics(&stats))?;
        self.each_line(|session, line| match session.platform.top_learners(line.trim()) {
            Ok(report) => session.out.emit(&Event::CourseReport(&report)),
            Err(e) => session.out.emit(&Event::Rejected {
                code: e.code(),
                message: e.to_string(),
            }),
        })?;
        Ok(())
    }

    fn notify(&mut self) -> Result<()> {
        let summary = self.platform.notify_sweep();
        self.out.emit(&Event::Notifications(&summary))
    }

    /// Feed every line to `handle` until `back` or end of input
    fn each_line<F>(&mut self, mut handle: F) -> Result<ModeEnd>
    where
        F: FnMut(&mut Self, &str) -> Result<()>,
    {
        while let Some(line) = self.read_line()? {
            if line.trim() == BACK {
                return Ok(ModeEnd::Back);
            }
            handle(self, &line)?;
        }
        Ok(ModeEnd::EndOfInput)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read session input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Run a whole session with the given platform and reporter
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: W,
    platform: LearningPlatform,
    reporter: Reporter,
) -> Result<LearningPlatform> {
    Session::new(input, output, platform, reporter).run()
}
