//! Configuration for the timecard audit.
//!
//! Settings come from the command line, the environment, and an optional
//! YAML file, in that order of precedence.
//!
//! # Example
//!
//! ```no_run
//! use timecard_audit::config::{AuditConfig, ConfigOverrides};
//!
//! let settings = AuditConfig::load("./audit.yaml")
//!     .unwrap()
//!     .resolve(ConfigOverrides::default())
//!     .unwrap();
//! println!("Auditing {}", settings.input.display());
//! ```

mod loader;
mod types;

pub use types::{AuditConfig, ConfigOverrides, OutputFormat, RunSettings};
