//! Diagnostic exception value
//!
//! An [`Exception`] is a snapshot of a failure. Its message is composed once
//! at construction from a primary message and optional additional info:
//!
//! - info empty: `"{primary}"`
//! - info present: `"{primary}: {info}"`
//!
//! Construction never fails and has no side effects. Logging is left to
//! [`Reporter`](crate::Reporter).

use std::borrow::Cow;
use std::path::Path;

use thiserror::Error;

use crate::backend::RuntimeBackend;
use crate::kind::{ExceptionKind, Severity};

const SEPARATOR: &str = ": ";

/// Result type for operations that fail with a diagnostic exception
pub type Result<T> = std::result::Result<T, Exception>;

/// Diagnostic exception raised at the engine's interop boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct Exception {
    kind: ExceptionKind,
    backend: Option<RuntimeBackend>,
    message: String,
    primary_len: usize,
}

impl Exception {
    /// Create a base exception with no additional info
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_info(message, "")
    }

    /// Create a base exception with additional info
    pub fn with_info(message: impl Into<String>, additional_info: impl AsRef<str>) -> Self {
        Self::compose(
            ExceptionKind::General,
            None,
            Cow::Owned(message.into()),
            additional_info.as_ref(),
        )
    }

    /// Create an exception of `kind` using its template without a subject
    pub fn of_kind(kind: ExceptionKind) -> Self {
        Self::of_kind_with(kind, "")
    }

    /// Create an exception of `kind` with additional info
    pub fn of_kind_with(kind: ExceptionKind, additional_info: impl AsRef<str>) -> Self {
        Self::build(kind, RuntimeBackend::ACTIVE, None, additional_info.as_ref())
    }

    /// Create an exception of `kind` whose template names `subject`
    ///
    /// An empty subject falls back to the kind's bare message. Kinds without a
    /// subject slot ignore it.
    pub fn for_subject(
        kind: ExceptionKind,
        subject: &str,
        additional_info: impl AsRef<str>,
    ) -> Self {
        Self::build(
            kind,
            RuntimeBackend::ACTIVE,
            Some(subject),
            additional_info.as_ref(),
        )
    }

    /// The current managed-runtime method has thrown an inner exception
    pub fn inner_runtime() -> Self {
        Self::inner_runtime_with("")
    }

    /// Inner runtime failure with additional info
    pub fn inner_runtime_with(additional_info: impl AsRef<str>) -> Self {
        Self::inner_runtime_on(RuntimeBackend::ACTIVE, additional_info)
    }

    /// Inner runtime failure reported against an explicit backend
    pub fn inner_runtime_on(backend: RuntimeBackend, additional_info: impl AsRef<str>) -> Self {
        Self::build(
            ExceptionKind::InnerRuntime,
            backend,
            None,
            additional_info.as_ref(),
        )
    }

    /// Value of `type_name` could not cross the interop boundary
    pub fn marshaling(type_name: &str, additional_info: impl AsRef<str>) -> Self {
        Self::for_subject(ExceptionKind::Marshaling, type_name, additional_info)
    }

    /// Managed method `method` could not be resolved
    pub fn missing_method(method: &str, additional_info: impl AsRef<str>) -> Self {
        Self::for_subject(ExceptionKind::MissingMethod, method, additional_info)
    }

    pub fn argument(name: &str, additional_info: impl AsRef<str>) -> Self {
        Self::for_subject(ExceptionKind::Argument, name, additional_info)
    }

    pub fn argument_null(name: &str, additional_info: impl AsRef<str>) -> Self {
        Self::for_subject(ExceptionKind::ArgumentNull, name, additional_info)
    }

    pub fn argument_out_of_range(name: &str, additional_info: impl AsRef<str>) -> Self {
        Self::for_subject(ExceptionKind::ArgumentOutOfRange, name, additional_info)
    }

    pub fn file_not_found(path: impl AsRef<Path>, additional_info: impl AsRef<str>) -> Self {
        let path = path.as_ref().display().to_string();
        Self::for_subject(ExceptionKind::FileNotFound, &path, additional_info)
    }

    /// JSON parse failure at `location` (an offset, line or pointer)
    pub fn json_parse(location: &str, additional_info: impl AsRef<str>) -> Self {
        Self::for_subject(ExceptionKind::JsonParse, location, additional_info)
    }

    fn build(
        kind: ExceptionKind,
        backend: RuntimeBackend,
        subject: Option<&str>,
        additional_info: &str,
    ) -> Self {
        let template = kind.spec().template;
        let recorded = template.has_backend_slot().then_some(backend);
        Self::compose(
            kind,
            recorded,
            template.render(backend, subject),
            additional_info,
        )
    }

    fn compose(
        kind: ExceptionKind,
        backend: Option<RuntimeBackend>,
        primary: Cow<'static, str>,
        additional_info: &str,
    ) -> Self {
        let primary_len = primary.len();
        let message = if additional_info.is_empty() {
            primary.into_owned()
        } else {
            let mut message = primary.into_owned();
            message.reserve(SEPARATOR.len() + additional_info.len());
            message.push_str(SEPARATOR);
            message.push_str(additional_info);
            message
        };

        Self {
            kind,
            backend,
            message,
            primary_len,
        }
    }

    /// Composed message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Message without the additional info
    pub fn primary_message(&self) -> &str {
        &self.message[..self.primary_len]
    }

    /// Caller-supplied context, empty when none was given
    pub fn additional_info(&self) -> &str {
        self.message
            .get(self.primary_len + SEPARATOR.len()..)
            .unwrap_or_default()
    }

    pub fn kind(&self) -> ExceptionKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// Backend named in the message, for kinds that embed one
    pub fn backend(&self) -> Option<RuntimeBackend> {
        self.backend
    }
}

impl From<std::io::Error> for Exception {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ExceptionKind::FileNotFound,
            _ => ExceptionKind::Io,
        };
        Self::of_kind_with(kind, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_without_info() {
        let err = Exception::new("Renderer failed");
        assert_eq!(err.message(), "Renderer failed");
        assert_eq!(err.primary_message(), "Renderer failed");
        assert_eq!(err.additional_info(), "");
        assert_eq!(err.kind(), ExceptionKind::General);
        assert_eq!(err.severity(), Severity::Warning);
    }

    #[test]
    fn test_base_with_info() {
        let err = Exception::with_info("Renderer failed", "device lost");
        assert_eq!(err.message(), "Renderer failed: device lost");
        assert_eq!(err.primary_message(), "Renderer failed");
        assert_eq!(err.additional_info(), "device lost");
    }

    #[test]
    fn test_empty_info_adds_no_separator() {
        let err = Exception::with_info("Renderer failed", "");
        assert_eq!(err.message(), "Renderer failed");
        assert_eq!(err, Exception::new("Renderer failed"));
    }

    #[test]
    fn test_display_is_message() {
        let err = Exception::with_info("Renderer failed", "device lost");
        assert_eq!(err.to_string(), err.message());
    }

    #[test]
    fn test_inner_runtime_forms_match() {
        assert_eq!(Exception::inner_runtime(), Exception::inner_runtime_with(""));
        assert_eq!(
            Exception::inner_runtime().message(),
            format!(
                "Current {} method has thrown an inner exception",
                RuntimeBackend::ACTIVE.label()
            )
        );
    }

    #[test]
    fn test_inner_runtime_per_backend() {
        let cases = [
            (
                RuntimeBackend::Mono,
                "Current Mono method has thrown an inner exception: null reference",
            ),
            (
                RuntimeBackend::CoreClr,
                "Current .NET Core method has thrown an inner exception: null reference",
            ),
            (
                RuntimeBackend::Unknown,
                "Current Unknown engine method has thrown an inner exception: null reference",
            ),
        ];

        for (backend, expected) in cases {
            let err = Exception::inner_runtime_on(backend, "null reference");
            assert_eq!(err.message(), expected);
            assert_eq!(err.backend(), Some(backend));
            assert_eq!(err.severity(), Severity::Error);
        }
    }

    #[test]
    fn test_inner_runtime_records_active_backend() {
        let err = Exception::inner_runtime_with("boom");
        assert_eq!(err.backend(), Some(RuntimeBackend::ACTIVE));
        assert_eq!(err.kind(), ExceptionKind::InnerRuntime);
    }

    #[test]
    fn test_kinds_without_backend_slot_record_none() {
        assert_eq!(Exception::of_kind(ExceptionKind::Timeout).backend(), None);
        assert_eq!(Exception::new("plain").backend(), None);
    }

    #[test]
    fn test_subject_shortcuts() {
        assert_eq!(
            Exception::argument_null("actor", "").message(),
            "Argument actor cannot be null"
        );
        assert_eq!(
            Exception::missing_method("OnStart", "script Player").message(),
            "Method OnStart was not found: script Player"
        );
        assert_eq!(
            Exception::marshaling("Vector3", "").message(),
            "Value of type Vector3 cannot be marshaled across the runtime boundary"
        );
        assert_eq!(
            Exception::argument_out_of_range("index", "5 >= 3").message(),
            "Argument index is out of range: 5 >= 3"
        );
        assert_eq!(
            Exception::argument("scale", "").message(),
            "Argument scale has an invalid value"
        );
        assert_eq!(
            Exception::json_parse("offset 7", "unexpected token").message(),
            "Failed to parse JSON at offset 7: unexpected token"
        );
    }

    #[test]
    fn test_file_not_found_uses_path() {
        let err = Exception::file_not_found(Path::new("Content/scene.json"), "");
        assert_eq!(err.message(), "File Content/scene.json was not found");
    }

    #[test]
    fn test_empty_subject_uses_bare_message() {
        let err = Exception::for_subject(ExceptionKind::ArgumentNull, "", "");
        assert_eq!(err.message(), "Argument cannot be null");
    }

    #[test]
    fn test_of_kind_general() {
        let err = Exception::of_kind(ExceptionKind::General);
        assert_eq!(err.message(), "An exception has occurred");
    }

    #[test]
    fn test_primary_and_info_split_when_info_contains_separator() {
        let err = Exception::of_kind_with(ExceptionKind::Io, "read: broken pipe");
        assert_eq!(err.primary_message(), "An I/O error has occurred");
        assert_eq!(err.additional_info(), "read: broken pipe");
    }

    #[test]
    fn test_message_is_stable_across_queries() {
        let err = Exception::inner_runtime_with("null reference");
        let first = err.message().to_string();
        assert_eq!(err.message(), first);
        assert_eq!(err.message(), first);
        assert_eq!(err.clone().message(), first);
    }

    #[test]
    fn test_from_io_error() {
        let not_found = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Exception::from(not_found);
        assert_eq!(err.kind(), ExceptionKind::FileNotFound);
        assert_eq!(err.message(), "File was not found: missing");

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Exception::from(denied);
        assert_eq!(err.kind(), ExceptionKind::Io);
        assert_eq!(err.message(), "An I/O error has occurred: denied");
    }

    #[test]
    fn test_question_mark_propagation() {
        fn load() -> Result<()> {
            std::fs::read("/definitely/not/here/ember.bin")?;
            Ok(())
        }

        let err = load().unwrap_err();
        assert_eq!(err.kind(), ExceptionKind::FileNotFound);
    }
}
