//! Completion notifications
//!
//! The tracker decides *who* gets notified; a [`NotificationSender`] decides
//! *how*. Channels form a closed set picked once when the platform is built.

pub mod email;
pub mod tracker;

pub use email::{EmailNotification, EmailNotifier};
pub use tracker::NotificationTracker;

use crate::{Course, Student};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Delivers a completion notice for one (course, student) pair
pub trait NotificationSender {
    fn send(&mut self, course: Course, student: &Student);
}

/// Available notification channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    #[default]
    Email,
}

impl FromStr for NotificationChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "email" => Ok(NotificationChannel::Email),
            other => Err(format!("Unknown notification channel: {}", other)),
        }
    }
}

impl std::fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationChannel::Email => write!(f, "email"),
        }
    }
}

/// Sender for the configured channel
#[derive(Debug)]
pub enum Notifier {
    Email(EmailNotifier),
}

impl Notifier {
    pub fn for_channel(channel: NotificationChannel) -> Self {
        match channel {
            NotificationChannel::Email => Notifier::Email(EmailNotifier::new()),
        }
    }

    pub fn channel(&self) -> NotificationChannel {
        match self {
            Notifier::Email(_) => NotificationChannel::Email,
        }
    }

    /// Take every message composed since the last drain
    pub fn drain(&mut self) -> Vec<EmailNotification> {
        match self {
            Notifier::Email(email) => email.drain(),
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::for_channel(NotificationChannel::default())
    }
}

impl NotificationSender for Notifier {
    fn send(&mut self, course: Course, student: &Student) {
        match self {
            Notifier::Email(email) => email.send(course, student),
        }
    }
}
