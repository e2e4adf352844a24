//! Config schema and deserialization

use crate::notify::NotificationChannel;
use serde::{Deserialize, Serialize};

/// Output format of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable transcript (default)
    #[default]
    Text,
    /// One JSON object per result
    Json,
}

/// Root config structure for .trackerrc.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Channel used by `notify`. Default: email
    #[serde(default)]
    pub notifications: NotificationChannel,

    /// Colored console output. Default: true
    #[serde(default = "default_color")]
    pub color: bool,

    /// Output format (text or json)
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty_json: bool,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notifications: NotificationChannel::default(),
            color: default_color(),
            format: OutputFormat::default(),
            pretty_json: false,
        }
    }
}

impl Config {
    /// Merge CLI overrides into config. CLI flags only ever switch a
    /// setting on, so an absent flag keeps the file value.
    pub fn merge_with_cli(mut self, cli_json: bool, cli_no_color: bool) -> Self {
        if cli_json {
            self.format = OutputFormat::Json;
        }
        if cli_no_color {
            self.color = false;
        }
        self
    }
}
