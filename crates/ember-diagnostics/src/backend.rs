//! Managed-runtime backend selection
//!
//! The engine is built against at most one managed runtime. Which one is
//! decided by Cargo features at compile time:
//!
//! - `mono`: Mono
//! - `coreclr`: .NET Core
//! - neither: unknown
//!
//! When both features are enabled `mono` takes precedence.

use std::fmt;

/// Managed-runtime backend the engine embeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeBackend {
    /// Mono runtime
    Mono,
    /// .NET Core (CoreCLR) runtime
    CoreClr,
    /// No recognized backend configured
    Unknown,
}

/// Display labels, one entry per backend. `Unknown` is the fallback entry.
const LABELS: [(RuntimeBackend, &str, &str); 3] = [
    (RuntimeBackend::Mono, "mono", "Mono"),
    (RuntimeBackend::CoreClr, "coreclr", ".NET Core"),
    (RuntimeBackend::Unknown, "unknown", "Unknown engine"),
];

impl RuntimeBackend {
    /// Backend selected for this build
    #[cfg(feature = "mono")]
    pub const ACTIVE: RuntimeBackend = RuntimeBackend::Mono;

    /// Backend selected for this build
    #[cfg(all(feature = "coreclr", not(feature = "mono")))]
    pub const ACTIVE: RuntimeBackend = RuntimeBackend::CoreClr;

    /// Backend selected for this build
    #[cfg(not(any(feature = "mono", feature = "coreclr")))]
    pub const ACTIVE: RuntimeBackend = RuntimeBackend::Unknown;

    /// All backends, in table order
    pub const ALL: [RuntimeBackend; 3] = [
        RuntimeBackend::Mono,
        RuntimeBackend::CoreClr,
        RuntimeBackend::Unknown,
    ];

    const fn entry(self) -> (RuntimeBackend, &'static str, &'static str) {
        match self {
            RuntimeBackend::Mono => LABELS[0],
            RuntimeBackend::CoreClr => LABELS[1],
            RuntimeBackend::Unknown => LABELS[2],
        }
    }

    /// Human-readable label embedded in diagnostic messages
    pub const fn label(self) -> &'static str {
        self.entry().2
    }

    /// Short machine name, used as a structured logging field
    pub const fn name(self) -> &'static str {
        self.entry().1
    }

    /// Whether this build has a recognized backend
    pub const fn is_configured(self) -> bool {
        !matches!(self, RuntimeBackend::Unknown)
    }
}

impl fmt::Display for RuntimeBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label of the backend selected for this build
pub const ACTIVE_LABEL: &str = RuntimeBackend::ACTIVE.label();
