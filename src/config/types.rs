//! Configuration types for the timecard audit.
//!
//! Thresholds are fixed and deliberately absent here; configuration only
//! chooses where the timecards come from and how the report is printed.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::Deserialize;

/// How the report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// The three labeled sections, one line per flagged employee.
    #[default]
    Text,
    /// A JSON document including counts and the classification trace.
    Json,
}

/// Contents of an optional YAML configuration file.
///
/// ```yaml
/// input: ./timecards.csv
/// format: json
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Path to the timecard file.
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Report format.
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// Values given on the command line or through the environment.
///
/// These take precedence over the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Path to the timecard file.
    pub input: Option<PathBuf>,
    /// Report format.
    pub format: Option<OutputFormat>,
}

/// Fully resolved settings for one audit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Path to the timecard file.
    pub input: PathBuf,
    /// Report format.
    pub format: OutputFormat,
}
