//! Report configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::kind::Severity;

/// Controls which exceptions [`Reporter`](crate::Reporter) logs and how
///
/// ```toml
/// enabled = true
/// min_severity = "error"
/// include_backend = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Emit events at all
    pub enabled: bool,
    /// Exceptions below this severity are dropped
    pub min_severity: Severity,
    /// Attach the backend name to events whose message embeds it
    pub include_backend: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_severity: Severity::Warning,
            include_backend: true,
        }
    }
}

impl ReportConfig {
    /// Parse from a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Configuration that never emits
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Whether an exception of `severity` passes the filter
    pub fn accepts(&self, severity: Severity) -> bool {
        self.enabled && severity >= self.min_severity
    }
}
