//! End-to-end behavior of the platform: registration, points, statistics
//! and notification sweeps.

use progress_tracker::notify::NotificationSender;
use progress_tracker::{Course, LearningPlatform, RegistrationError, Student, StudentId};
use proptest::prelude::*;

fn platform_with(credentials: &[&str]) -> LearningPlatform {
    let mut platform = LearningPlatform::new();
    for line in credentials {
        platform.register_student(line).unwrap();
    }
    platform
}

#[test]
fn duplicate_email_rejected_regardless_of_name() {
    let mut platform = platform_with(&["John Doe jdoe@mail.net"]);
    assert_eq!(
        platform.register_student("Completely Different Person jdoe@mail.net"),
        Err(RegistrationError::DuplicateEmail)
    );
    assert_eq!(platform.list_students().len(), 1);
}

#[test]
fn rejected_registration_does_not_consume_an_id() {
    let mut platform = LearningPlatform::new();
    assert!(platform.register_student("J. Doe name@domain.com").is_err());
    let id = platform.register_student("Jean-Clause van Helsing jc@mail.org").unwrap();
    assert_eq!(id, StudentId::new(10000));
}

#[test]
fn most_popular_with_single_leader() {
    let mut platform = platform_with(&["Ann Aa a@x.io", "Bob Bb b@x.io"]);
    platform.add_points("10000 0 1 0 1").unwrap();
    platform.add_points("10001 0 0 1 1").unwrap();
    let stats = platform.course_statistics();
    assert_eq!(stats.most_popular.to_string(), "Spring");
    assert_eq!(stats.least_popular.to_string(), "Java");
}

#[test]
fn equal_enrollment_everywhere_leaves_least_popular_empty() {
    let mut platform = platform_with(&["Ann Aa a@x.io"]);
    platform.add_points("10000 1 1 1 1").unwrap();
    let stats = platform.course_statistics();
    assert_eq!(stats.most_popular.to_string(), "Java, DSA, Databases, Spring");
    assert_eq!(stats.least_popular.to_string(), "n/a");
    assert_eq!(stats.lowest_activity.to_string(), "n/a");
}

#[test]
fn no_enrollment_reports_everything_unavailable() {
    let platform = platform_with(&["Ann Aa a@x.io"]);
    let stats = platform.course_statistics();
    for ranking in [
        &stats.most_popular,
        &stats.least_popular,
        &stats.highest_activity,
        &stats.lowest_activity,
        &stats.easiest,
        &stats.hardest,
    ] {
        assert_eq!(ranking.to_string(), "n/a");
    }
}

#[test]
fn easiest_and_hardest_by_average_grade() {
    let mut platform = platform_with(&["Ann Aa a@x.io", "Bob Bb b@x.io"]);
    platform.add_points("10000 10 4 0 0").unwrap();
    platform.add_points("10001 2 4 0 0").unwrap();
    let stats = platform.course_statistics();
    // Java averages 6 per submission, DSA 4
    assert_eq!(stats.easiest.to_string(), "Java");
    assert_eq!(stats.hardest.to_string(), "DSA");
}

#[test]
fn top_learners_breaks_ties_by_id() {
    let mut platform = platform_with(&["Ann Aa a@x.io", "Bob Bb b@x.io", "Cid Cc c@x.io"]);
    platform.add_points("10002 0 150 0 0").unwrap();
    platform.add_points("10001 0 150 0 0").unwrap();
    platform.add_points("10000 0 100 0 0").unwrap();
    let report = platform.top_learners("DSA").unwrap();
    let ids: Vec<u64> = report.learners.iter().map(|l| l.id.value()).collect();
    assert_eq!(ids, vec![10001, 10002, 10000]);
    assert_eq!(report.learners[0].completed, 37.5);
}

#[derive(Default)]
struct Outbox {
    sent: Vec<(Course, String)>,
}

impl NotificationSender for Outbox {
    fn send(&mut self, course: Course, student: &Student) {
        self.sent.push((course, student.email.clone()));
    }
}

#[test]
fn custom_sender_receives_completions_once() {
    let mut platform = platform_with(&["Ann Aa a@x.io"]);
    platform.add_points("10000 0 0 480 0").unwrap();

    let mut outbox = Outbox::default();
    assert_eq!(platform.notify_sweep_with(&mut outbox), 1);
    assert_eq!(platform.notify_sweep_with(&mut outbox), 0);
    assert_eq!(outbox.sent, vec![(Course::Databases, "a@x.io".to_string())]);
    assert!(platform
        .notification_tracker()
        .was_notified(Course::Databases, StudentId::new(10000)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn ids_strictly_increase(count in 1usize..30) {
        let mut platform = LearningPlatform::new();
        let ids: Vec<u64> = (0..count)
            .map(|n| platform.register_student(&format!("Some One s{}@x.io", n)).unwrap().value())
            .collect();
        prop_assert_eq!(ids[0], 10000);
        prop_assert!(ids.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn finished_never_reverts_and_sweep_is_idempotent(
        amounts in proptest::collection::vec(1u32..200, 1..20)
    ) {
        let mut platform = platform_with(&["Ann Aa a@x.io"]);
        let id = StudentId::new(10000);
        let mut was_finished = false;
        for amount in &amounts {
            platform.add_points(&format!("10000 {} 0 0 0", amount)).unwrap();
            let finished = platform.ledger(Course::Java).is_finished(id);
            prop_assert!(finished || !was_finished);
            was_finished = finished;
            platform.notify_sweep();
            prop_assert_eq!(platform.notify_sweep().notified_students, 0);
        }
        prop_assert_eq!(platform.ledger(Course::Java).submissions(id), amounts.len() as u64);
        prop_assert_eq!(
            platform.notification_tracker().notified_count(Course::Java),
            usize::from(was_finished)
        );
    }
}
