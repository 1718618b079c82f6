//! Configuration loading and resolution.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{AuditError, AuditResult};

use super::types::{AuditConfig, ConfigOverrides, RunSettings};

impl AuditConfig {
    /// Loads a YAML configuration file.
    ///
    /// # Errors
    ///
    /// - [`AuditError::ConfigNotFound`] if the file cannot be read
    /// - [`AuditError::ConfigParseError`] if it is not valid YAML or has
    ///   unknown keys
    ///
    /// # Example
    ///
    /// ```no_run
    /// use timecard_audit::config::AuditConfig;
    ///
    /// let config = AuditConfig::load("./audit.yaml")?;
    /// # Ok::<(), timecard_audit::error::AuditError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> AuditResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AuditError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&path_str, &content)
    }

    fn from_yaml(path: &str, content: &str) -> AuditResult<Self> {
        // An empty file deserializes to YAML null, which means "no settings".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| AuditError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Combines this file configuration with command line overrides.
    ///
    /// Overrides win field by field. The format falls back to text.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::MissingInput`] if neither source names an input
    /// file.
    ///
    /// # Example
    ///
    /// ```
    /// use timecard_audit::config::{AuditConfig, ConfigOverrides, OutputFormat};
    /// use std::path::PathBuf;
    ///
    /// let overrides = ConfigOverrides {
    ///     input: Some(PathBuf::from("timecards.csv")),
    ///     format: None,
    /// };
    /// let settings = AuditConfig::default().resolve(overrides)?;
    /// assert_eq!(settings.format, OutputFormat::Text);
    /// # Ok::<(), timecard_audit::error::AuditError>(())
    /// ```
    pub fn resolve(self, overrides: ConfigOverrides) -> AuditResult<RunSettings> {
        let input = overrides
            .input
            .or(self.input)
            .ok_or(AuditError::MissingInput)?;
        let format = overrides.format.or(self.format).unwrap_or_default();

        debug!(input = %input.display(), ?format, "Resolved run settings");

        Ok(RunSettings { input, format })
    }
}
