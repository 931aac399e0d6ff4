//! Diagnostics collection for name resolution.
//!
//! This module provides types for collecting and reporting warnings produced while resolving
//! class names, type spellings and parameter identifiers. Problems in attribute metadata never
//! stop resolution: the resolver falls back to a usable spelling and records what it ignored.
//!
//! # Architecture
//!
//! Diagnostics flow through two containers:
//! - **[`DiagnosticBuffer`]**: owned, ordered buffer scoped to one resolution call. The
//!   resolver appends to it; the caller decides when to flush.
//! - **[`Diagnostics`]**: run-wide sink shared by a [`crate::BindingSession`]. It uses
//!   `boxcar::Vec` for lock-free appends, so buffers from parallel resolution tasks can be
//!   flushed without synchronization.
//!
//! A flushed buffer keeps its internal order. No ordering is guaranteed between buffers
//! flushed from different threads.
//!
//! # Key Components
//!
//! - [`Diagnostic`] - Individual diagnostic entry with code, severity and context
//! - [`DiagnosticCode`] - The warning codes `W1`..`W7`
//! - [`DiagnosticSeverity`] - Severity level (Info, Warning, Error)
//! - [`DiagnosticCategory`] - Category of the diagnostic source
//!
//! # Usage Examples
//!
//! ```rust
//! use dotbind::metadata::diagnostics::{
//!     DiagnosticBuffer, DiagnosticCategory, DiagnosticCode, Diagnostics,
//! };
//!
//! let sink = Diagnostics::new();
//!
//! let mut buffer = DiagnosticBuffer::new();
//! buffer.warning(
//!     DiagnosticCode::UnsupportedOption,
//!     DiagnosticCategory::CustomAttribute,
//!     "App.Widget",
//!     "SkipRegistration is not supported and is ignored for type 'App.Widget'",
//! );
//! buffer.flush_into(&sink);
//!
//! assert!(buffer.is_empty());
//! assert_eq!(sink.warning_count(), 1);
//! assert_eq!(sink.by_code(DiagnosticCode::UnsupportedOption).len(), 1);
//! ```

use std::fmt::{self, Write};

/// Severity level of a diagnostic entry.
///
/// Determines how the diagnostic should be treated and displayed. The naming engine only
/// produces warnings; the other levels exist for hosts that route their own messages
/// through the same sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    /// Informational message, not indicating a problem.
    Info,

    /// Warning about metadata that was ignored or replaced by a default.
    ///
    /// The generated binding is still usable, but may not carry the name the author
    /// asked for.
    Warning,

    /// Error indicating the binding can not be generated as requested.
    Error,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Info => write!(f, "INFO"),
            DiagnosticSeverity::Warning => write!(f, "WARN"),
            DiagnosticSeverity::Error => write!(f, "ERROR"),
        }
    }
}

/// Category indicating the source of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    /// Issues with registration attribute arguments.
    CustomAttribute,

    /// Issues with type spelling.
    Type,

    /// Issues with parameter naming.
    Parameter,

    /// General issues not fitting other categories.
    General,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::CustomAttribute => write!(f, "CustomAttribute"),
            DiagnosticCategory::Type => write!(f, "Type"),
            DiagnosticCategory::Parameter => write!(f, "Parameter"),
            DiagnosticCategory::General => write!(f, "General"),
        }
    }
}

/// The warning codes reported by the class name resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// W1 - The name argument is not string-typed
    InvalidArgumentType,
    /// W2 - The registration attribute constructor has an unexpected number of arguments
    UnexpectedArity,
    /// W3 - Constructor name and `Name` property disagree, the property wins
    ConflictingName,
    /// W4 - `SkipRegistration` is not supported and is ignored
    UnsupportedOption,
    /// W5 - An unknown named argument is ignored
    UnsupportedNamedArgument,
    /// W6 - No usable name was provided, the default convention is used
    MissingName,
    /// W7 - More than one registration attribute is attached, the first is used
    DuplicateRegistration,
}

impl DiagnosticCode {
    /// Numeric value of the code
    #[must_use]
    pub fn code(self) -> u32 {
        match self {
            DiagnosticCode::InvalidArgumentType => 1,
            DiagnosticCode::UnexpectedArity => 2,
            DiagnosticCode::ConflictingName => 3,
            DiagnosticCode::UnsupportedOption => 4,
            DiagnosticCode::UnsupportedNamedArgument => 5,
            DiagnosticCode::MissingName => 6,
            DiagnosticCode::DuplicateRegistration => 7,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.code())
    }
}

/// A single diagnostic entry with context information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Warning code.
    pub code: DiagnosticCode,

    /// Severity level of this diagnostic.
    pub severity: DiagnosticSeverity,

    /// Category indicating the source of this diagnostic.
    pub category: DiagnosticCategory,

    /// Human-readable description of the issue.
    ///
    /// Always embeds the fully-qualified name of the offending type and the offending values.
    pub message: String,

    /// Optional fully-qualified name of the type the diagnostic is about.
    pub type_name: Option<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic entry.
    ///
    /// # Arguments
    ///
    /// * `code` - Warning code
    /// * `severity` - Severity level of the diagnostic
    /// * `category` - Category of the diagnostic source
    /// * `message` - Human-readable description
    pub fn new(
        code: DiagnosticCode,
        severity: DiagnosticSeverity,
        category: DiagnosticCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            severity,
            category,
            message: message.into(),
            type_name: None,
        }
    }

    /// Adds the type the diagnostic is about.
    #[must_use]
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}: {}",
            self.severity, self.code, self.category, self.message
        )
    }
}

/// Ordered diagnostics of a single resolution call.
///
/// The buffer is owned by whoever starts the call. Resolution only appends; nothing is
/// reported until [`DiagnosticBuffer::flush_into`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticBuffer {
    entries: Vec<Diagnostic>,
}

impl DiagnosticBuffer {
    /// Creates a new empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a warning about `type_name`.
    pub fn warning(
        &mut self,
        code: DiagnosticCode,
        category: DiagnosticCategory,
        type_name: &str,
        message: impl Into<String>,
    ) {
        self.push(
            Diagnostic::new(code, DiagnosticSeverity::Warning, category, message)
                .with_type(type_name),
        );
    }

    /// Appends a diagnostic entry directly.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Number of buffered diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the buffered diagnostics, in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Moves every buffered diagnostic into `sink`, preserving order.
    pub fn flush_into(&mut self, sink: &Diagnostics) {
        if self.entries.is_empty() {
            return;
        }

        log::debug!("flushing {} diagnostic(s)", self.entries.len());
        sink.extend(self.entries.drain(..));
    }

    /// Consumes the buffer and returns the diagnostics.
    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

/// Thread-safe container for the diagnostics of a whole generation run.
///
/// Uses `boxcar::Vec` internally for lock-free concurrent append operations.
///
/// # Example
///
/// ```rust
/// use dotbind::metadata::diagnostics::{Diagnostics, DiagnosticCategory, DiagnosticCode};
/// use std::sync::Arc;
///
/// let diagnostics = Arc::new(Diagnostics::new());
///
/// let diag_clone = Arc::clone(&diagnostics);
/// std::thread::spawn(move || {
///     diag_clone.warning(
///         DiagnosticCode::MissingName,
///         DiagnosticCategory::CustomAttribute,
///         "No name for 'App.Widget'",
///     );
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(diagnostics.count(), 1);
/// ```
#[derive(Debug)]
pub struct Diagnostics {
    entries: boxcar::Vec<Diagnostic>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostics {
    /// Creates a new empty diagnostics container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: boxcar::Vec::new(),
        }
    }

    /// Adds a warning diagnostic.
    pub fn warning(
        &self,
        code: DiagnosticCode,
        category: DiagnosticCategory,
        message: impl Into<String>,
    ) {
        self.push(Diagnostic::new(
            code,
            DiagnosticSeverity::Warning,
            category,
            message,
        ));
    }

    /// Adds a diagnostic entry directly.
    pub fn push(&self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Adds several diagnostics, in iteration order.
    pub fn extend(&self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.entries.push(diagnostic);
        }
    }

    /// Returns true if any diagnostics have been collected.
    pub fn has_any(&self) -> bool {
        self.entries.count() > 0
    }

    /// Returns true if any error-level diagnostics have been collected.
    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, d)| d.severity == DiagnosticSeverity::Error)
    }

    /// Returns true if any warning-level diagnostics have been collected.
    pub fn has_warnings(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, d)| d.severity == DiagnosticSeverity::Warning)
    }

    /// Returns the total number of diagnostics.
    pub fn count(&self) -> usize {
        self.entries.count()
    }

    /// Returns the number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.count_severity(DiagnosticSeverity::Error)
    }

    /// Returns the number of warning-level diagnostics.
    pub fn warning_count(&self) -> usize {
        self.count_severity(DiagnosticSeverity::Warning)
    }

    /// Returns the number of info-level diagnostics.
    pub fn info_count(&self) -> usize {
        self.count_severity(DiagnosticSeverity::Info)
    }

    fn count_severity(&self, severity: DiagnosticSeverity) -> usize {
        self.entries
            .iter()
            .filter(|(_, d)| d.severity == severity)
            .count()
    }

    /// Returns an iterator over all diagnostics.
    ///
    /// Note: Uses boxcar's iterator which yields `(index, &Diagnostic)` tuples.
    /// The index is dropped here.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().map(|(_, d)| d)
    }

    /// Returns all warnings as a vector.
    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.iter()
            .filter(|d| d.severity == DiagnosticSeverity::Warning)
            .collect()
    }

    /// Returns diagnostics with the given code.
    pub fn by_code(&self, code: DiagnosticCode) -> Vec<&Diagnostic> {
        self.iter().filter(|d| d.code == code).collect()
    }

    /// Returns diagnostics filtered by category.
    pub fn by_category(&self, category: DiagnosticCategory) -> Vec<&Diagnostic> {
        self.iter().filter(|d| d.category == category).collect()
    }

    /// Returns diagnostics about a given type.
    pub fn by_type(&self, type_name: &str) -> Vec<&Diagnostic> {
        self.iter()
            .filter(|d| d.type_name.as_deref() == Some(type_name))
            .collect()
    }

    /// Formats a summary of all diagnostics for display.
    pub fn summary(&self) -> String {
        let mut output = String::new();

        let error_count = self.error_count();
        let warning_count = self.warning_count();
        let info_count = self.info_count();

        let _ = writeln!(
            output,
            "Diagnostics: {} error(s), {} warning(s), {} info(s)",
            error_count, warning_count, info_count
        );

        if error_count + warning_count + info_count > 0 {
            output.push('\n');
            for diag in self.iter() {
                let _ = writeln!(output, "  {diag}");
            }
        }

        output
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_diagnostic_creation() {
        let diag = Diagnostic::new(
            DiagnosticCode::ConflictingName,
            DiagnosticSeverity::Warning,
            DiagnosticCategory::CustomAttribute,
            "Test message",
        );

        assert_eq!(diag.code, DiagnosticCode::ConflictingName);
        assert_eq!(diag.severity, DiagnosticSeverity::Warning);
        assert_eq!(diag.message, "Test message");
        assert!(diag.type_name.is_none());
        assert_eq!(diag.with_type("App.Foo").type_name.as_deref(), Some("App.Foo"));
    }

    #[test]
    fn test_codes() {
        assert_eq!(DiagnosticCode::InvalidArgumentType.to_string(), "W1");
        assert_eq!(DiagnosticCode::MissingName.code(), 6);
        assert_eq!(DiagnosticCode::DuplicateRegistration.to_string(), "W7");
    }

    #[test]
    fn test_buffer_flush_preserves_order() {
        let sink = Diagnostics::new();
        let mut buffer = DiagnosticBuffer::new();

        buffer.warning(
            DiagnosticCode::UnexpectedArity,
            DiagnosticCategory::CustomAttribute,
            "App.Foo",
            "first",
        );
        buffer.warning(
            DiagnosticCode::MissingName,
            DiagnosticCategory::CustomAttribute,
            "App.Foo",
            "second",
        );
        assert_eq!(buffer.len(), 2);
        assert_eq!(sink.count(), 0);

        buffer.flush_into(&sink);
        assert!(buffer.is_empty());

        let messages: Vec<_> = sink.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert_eq!(sink.by_type("App.Foo").len(), 2);
    }

    #[test]
    fn test_diagnostics_thread_safety() {
        let diagnostics = Arc::new(Diagnostics::new());
        let mut handles = vec![];

        for i in 0..10 {
            let diag_clone = Arc::clone(&diagnostics);
            handles.push(thread::spawn(move || {
                let mut buffer = DiagnosticBuffer::new();
                buffer.warning(
                    DiagnosticCode::UnsupportedNamedArgument,
                    DiagnosticCategory::CustomAttribute,
                    &format!("App.T{i}"),
                    format!("Thread {} warning", i),
                );
                buffer.flush_into(&diag_clone);
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(diagnostics.count(), 10);
        assert_eq!(diagnostics.warning_count(), 10);
        assert!(!diagnostics.has_errors());
    }

    #[test]
    fn test_diagnostics_filters() {
        let diagnostics = Diagnostics::new();

        diagnostics.warning(
            DiagnosticCode::MissingName,
            DiagnosticCategory::CustomAttribute,
            "a",
        );
        diagnostics.warning(
            DiagnosticCode::MissingName,
            DiagnosticCategory::CustomAttribute,
            "b",
        );
        diagnostics.push(Diagnostic::new(
            DiagnosticCode::UnsupportedOption,
            DiagnosticSeverity::Info,
            DiagnosticCategory::General,
            "c",
        ));

        assert_eq!(diagnostics.by_code(DiagnosticCode::MissingName).len(), 2);
        assert_eq!(diagnostics.by_category(DiagnosticCategory::General).len(), 1);
        assert_eq!(diagnostics.info_count(), 1);
        assert_eq!(diagnostics.warnings().len(), 2);
        assert!(diagnostics.has_warnings());
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(
            DiagnosticCode::ConflictingName,
            DiagnosticSeverity::Warning,
            DiagnosticCategory::CustomAttribute,
            "Parse failed",
        );

        let display = format!("{}", diag);
        assert_eq!(display, "[WARN] W3 CustomAttribute: Parse failed");

        let diagnostics = Diagnostics::new();
        diagnostics.push(diag);
        let summary = diagnostics.summary();
        assert!(summary.contains("0 error(s), 1 warning(s), 0 info(s)"));
        assert!(summary.contains("Parse failed"));
    }
}
