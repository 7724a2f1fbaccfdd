//! Exception kinds and their message templates

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::backend::RuntimeBackend;
use crate::error::ConfigError;

/// Severity of a diagnostic, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational
    Info,
    /// Recoverable problem
    Warning,
    /// Failed operation
    Error,
    /// The engine cannot continue
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        };
        f.write_str(s)
    }
}

/// Primary message template of a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Message does not vary
    Fixed(&'static str),
    /// `head` + backend label + `tail`
    Backend {
        /// Text before the label
        head: &'static str,
        /// Text after the label
        tail: &'static str,
    },
    /// `head` + subject + `tail`, or `bare` when there is no subject
    Subject {
        /// Text before the subject
        head: &'static str,
        /// Text after the subject
        tail: &'static str,
        /// Message used when the subject is missing or empty
        bare: &'static str,
    },
}

impl Template {
    /// Render the primary message.
    ///
    /// `subject` is ignored by `Fixed` and `Backend` templates.
    pub fn render(self, backend: RuntimeBackend, subject: Option<&str>) -> Cow<'static, str> {
        match self {
            Template::Fixed(text) => Cow::Borrowed(text),
            Template::Backend { head, tail } => {
                Cow::Owned(join(head, backend.label(), tail))
            }
            Template::Subject { head, tail, bare } => match subject {
                Some(subject) if !subject.is_empty() => Cow::Owned(join(head, subject, tail)),
                _ => Cow::Borrowed(bare),
            },
        }
    }

    /// Whether the rendered message embeds the backend label
    pub fn has_backend_slot(self) -> bool {
        matches!(self, Template::Backend { .. })
    }
}

fn join(head: &str, middle: &str, tail: &str) -> String {
    let mut out = String::with_capacity(head.len() + middle.len() + tail.len());
    out.push_str(head);
    out.push_str(middle);
    out.push_str(tail);
    out
}

/// Table entry for a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSpec {
    /// Stable snake_case name, used in config and log fields
    pub name: &'static str,
    /// Primary message template
    pub template: Template,
    /// Default severity
    pub severity: Severity,
}

/// Discriminant of the diagnostic exception family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionKind {
    /// Base exception carrying a caller-supplied message
    General,
    /// A managed-runtime call raised an inner exception
    InnerRuntime,
    /// A value could not cross the interop boundary
    Marshaling,
    /// A managed method could not be resolved
    MissingMethod,
    /// An argument has an invalid value
    Argument,
    /// A required argument was null
    ArgumentNull,
    /// An argument is outside its valid range
    ArgumentOutOfRange,
    /// The target object is in an invalid state
    InvalidOperation,
    /// The operation has no implementation
    NotImplemented,
    /// The operation is not supported
    NotSupported,
    /// The current platform is not supported
    PlatformNotSupported,
    /// An index is outside a collection's bounds
    IndexOutOfRange,
    /// Arithmetic or conversion overflow
    Overflow,
    /// An operation timed out
    Timeout,
    /// A file does not exist
    FileNotFound,
    /// Generic I/O failure
    Io,
    /// A path exceeds the platform limit
    PathTooLong,
    /// JSON input could not be parsed
    JsonParse,
}

impl ExceptionKind {
    /// Every kind, in declaration order
    pub const ALL: [ExceptionKind; 18] = [
        Self::General,
        Self::InnerRuntime,
        Self::Marshaling,
        Self::MissingMethod,
        Self::Argument,
        Self::ArgumentNull,
        Self::ArgumentOutOfRange,
        Self::InvalidOperation,
        Self::NotImplemented,
        Self::NotSupported,
        Self::PlatformNotSupported,
        Self::IndexOutOfRange,
        Self::Overflow,
        Self::Timeout,
        Self::FileNotFound,
        Self::Io,
        Self::PathTooLong,
        Self::JsonParse,
    ];

    /// Template table lookup
    pub const fn spec(self) -> KindSpec {
        use Severity::*;
        use Template::*;

        let (name, template, severity) = match self {
            Self::General => ("general", Fixed("An exception has occurred"), Warning),
            Self::InnerRuntime => (
                "inner_runtime",
                Backend {
                    head: "Current ",
                    tail: " method has thrown an inner exception",
                },
                Error,
            ),
            Self::Marshaling => (
                "marshaling",
                Subject {
                    head: "Value of type ",
                    tail: " cannot be marshaled across the runtime boundary",
                    bare: "Value cannot be marshaled across the runtime boundary",
                },
                Error,
            ),
            Self::MissingMethod => (
                "missing_method",
                Subject {
                    head: "Method ",
                    tail: " was not found",
                    bare: "Requested method was not found",
                },
                Error,
            ),
            Self::Argument => (
                "argument",
                Subject {
                    head: "Argument ",
                    tail: " has an invalid value",
                    bare: "Argument has an invalid value",
                },
                Warning,
            ),
            Self::ArgumentNull => (
                "argument_null",
                Subject {
                    head: "Argument ",
                    tail: " cannot be null",
                    bare: "Argument cannot be null",
                },
                Warning,
            ),
            Self::ArgumentOutOfRange => (
                "argument_out_of_range",
                Subject {
                    head: "Argument ",
                    tail: " is out of range",
                    bare: "Argument is out of range",
                },
                Warning,
            ),
            Self::InvalidOperation => (
                "invalid_operation",
                Fixed("Current object does not exist or its state is invalid"),
                Error,
            ),
            Self::NotImplemented => (
                "not_implemented",
                Fixed("Current method or operation is not implemented"),
                Warning,
            ),
            Self::NotSupported => (
                "not_supported",
                Fixed("Current method or operation is not supported"),
                Warning,
            ),
            Self::PlatformNotSupported => (
                "platform_not_supported",
                Fixed("Current platform is not supported"),
                Fatal,
            ),
            Self::IndexOutOfRange => (
                "index_out_of_range",
                Fixed("Index is outside the bounds of the collection"),
                Error,
            ),
            Self::Overflow => (
                "overflow",
                Fixed("Arithmetic, casting or conversion operation resulted in an overflow"),
                Error,
            ),
            Self::Timeout => ("timeout", Fixed("Current operation has timed out"), Warning),
            Self::FileNotFound => (
                "file_not_found",
                Subject {
                    head: "File ",
                    tail: " was not found",
                    bare: "File was not found",
                },
                Error,
            ),
            Self::Io => ("io", Fixed("An I/O error has occurred"), Error),
            Self::PathTooLong => (
                "path_too_long",
                Subject {
                    head: "Path ",
                    tail: " is too long",
                    bare: "Path is too long",
                },
                Error,
            ),
            Self::JsonParse => (
                "json_parse",
                Subject {
                    head: "Failed to parse JSON at ",
                    tail: "",
                    bare: "Failed to parse JSON",
                },
                Error,
            ),
        };

        KindSpec {
            name,
            template,
            severity,
        }
    }

    /// Stable snake_case name
    pub const fn name(self) -> &'static str {
        self.spec().name
    }

    /// Default severity
    pub const fn severity(self) -> Severity {
        self.spec().severity
    }

    /// Primary message for the backend selected at build time
    pub fn primary_message(self, subject: Option<&str>) -> Cow<'static, str> {
        self.spec().template.render(RuntimeBackend::ACTIVE, subject)
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExceptionKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ConfigError::UnknownKind(s.to_string()))
    }
}
