//! Input validation for credentials and points lines

use crate::Course;
use regex::Regex;
use std::sync::OnceLock;

/// Letters optionally joined by single hyphens or apostrophes. The first
/// character may be anything except a separator.
const NAME_PATTERN: &str = r"^[^-']([A-Za-z]*[-']?[A-Za-z])+$";
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.]+@[A-Za-z0-9_]+\.[A-Za-z0-9_]+$";
const POINTS_PATTERN: &str = r"^[A-Za-z0-9_]+(?-u:\s)(?:[0-9]+(?-u:\s)){3}[0-9]+$";

struct Patterns {
    name: Regex,
    email: Regex,
    points: Regex,
}

/// Compiled patterns (compile once per process).
fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        name: Regex::new(NAME_PATTERN).expect("name pattern compiles"),
        email: Regex::new(EMAIL_PATTERN).expect("email pattern compiles"),
        points: Regex::new(POINTS_PATTERN).expect("points pattern compiles"),
    })
}

/// Check a first name or a single last-name token
pub fn is_valid_name(token: &str) -> bool {
    patterns().name.is_match(token)
}

pub fn is_valid_email(token: &str) -> bool {
    patterns().email.is_match(token)
}

/// Check the shape of `<id> <java> <dsa> <databases> <spring>`
pub fn is_valid_points_line(line: &str) -> bool {
    patterns().points.is_match(line)
}

/// A points line that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsLine<'a> {
    /// Raw id token, not yet resolved against the registry
    pub student: &'a str,
    /// One amount per course, in catalog order
    pub points: [u32; 4],
}

impl PointsLine<'_> {
    /// Courses with a non-zero amount, paired with that amount
    pub fn nonzero(&self) -> impl Iterator<Item = (Course, u32)> + '_ {
        Course::ALL
            .into_iter()
            .zip(self.points)
            .filter(|(_, amount)| *amount != 0)
    }
}

/// ASCII whitespace as matched by `(?-u:\s)`, vertical tab included
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Validate and split a points line. Amounts that do not fit in `u32` are
/// treated as malformed.
pub fn parse_points_line(line: &str) -> Option<PointsLine<'_>> {
    if !is_valid_points_line(line) {
        return None;
    }
    // the pattern allows exactly one separator between tokens
    let mut tokens = line.split(is_separator);
    let student = tokens.next()?;
    let mut points = [0u32; 4];
    for slot in points.iter_mut() {
        *slot = tokens.next()?.parse().ok()?;
    }
    Some(PointsLine { student, points })
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn validators_never_panic(ref input in ".{0,80}") {
            let _ = is_valid_name(input);
            let _ = is_valid_email(input);
            let _ = parse_points_line(input);
        }

        #[test]
        fn well_formed_points_lines_parse(id in "[a-z0-9]{1,8}", pts in prop::array::uniform4(0u32..100_000)) {
            let line = format!("{} {} {} {} {}", id, pts[0], pts[1], pts[2], pts[3]);
            let parsed = parse_points_line(&line).expect("well-formed line parses");
            prop_assert_eq!(parsed.student, id.as_str());
            prop_assert_eq!(parsed.points, pts);
        }
    }
}
