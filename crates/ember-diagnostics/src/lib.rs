//! Diagnostic exceptions for the Ember engine
//!
//! Failures crossing the managed-runtime interop boundary are surfaced as
//! [`Exception`] values. Every exception has a [`ExceptionKind`] whose template
//! supplies the primary message; callers add optional context which is
//! appended as `"{primary}: {info}"`.
//!
//! ## Usage
//!
//! ```rust
//! use ember_diagnostics::{Exception, Reporter, Result};
//!
//! fn invoke_script() -> Result<()> {
//!     Err(Exception::inner_runtime_with("null reference"))
//! }
//!
//! let err = invoke_script().unwrap_err();
//! assert!(err.message().ends_with("has thrown an inner exception: null reference"));
//! Reporter::default().report(&err);
//! ```
//!
//! ## Feature Flags
//!
//! The managed-runtime backend named in messages is fixed at build time:
//!
//! - `mono`: messages name "Mono"
//! - `coreclr`: messages name ".NET Core"
//! - neither: messages name "Unknown engine"

mod backend;
mod config;
mod error;
mod exception;
mod kind;
mod report;

pub use backend::{RuntimeBackend, ACTIVE_LABEL};
pub use config::ReportConfig;
pub use error::{ConfigError, ConfigResult};
pub use exception::{Exception, Result};
pub use kind::{ExceptionKind, KindSpec, Severity, Template};
pub use report::Reporter;
