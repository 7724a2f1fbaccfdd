//! Logging of constructed exceptions through `tracing`

use crate::backend::RuntimeBackend;
use crate::config::ReportConfig;
use crate::exception::Exception;
use crate::kind::Severity;

/// Emits `tracing` events for exceptions handed to it
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Log `exception` if the configuration accepts its severity.
    ///
    /// Returns whether an event was emitted.
    pub fn report(&self, exception: &Exception) -> bool {
        let severity = exception.severity();
        if !self.config.accepts(severity) {
            return false;
        }

        let kind = exception.kind().name();
        let backend = exception
            .backend()
            .filter(|_| self.config.include_backend)
            .map(RuntimeBackend::name);
        let message = exception.message();

        match severity {
            Severity::Info => tracing::info!(kind, backend, "{}", message),
            Severity::Warning => tracing::warn!(kind, backend, "{}", message),
            Severity::Error => tracing::error!(kind, backend, "{}", message),
            Severity::Fatal => tracing::error!(kind, backend, fatal = true, "{}", message),
        }
        true
    }
}
