//! Diagnostic module - Warning and error reporting infrastructure.
//!
//! This module provides types for creating, formatting, and reporting
//! compiler diagnostics. The lexer has no fatal failure modes, so the
//! handler mostly carries warnings (reader usage faults) while keeping
//! room for error-level reports from later phases.
//!
//! # Examples
//!
//! ```
//! use cmc_util::diagnostic::{DiagnosticBuilder, Handler};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("cannot push back more than once in succession")
//!     .note("the earlier pending character is kept")
//!     .emit(&handler);
//!
//! assert_eq!(handler.warning_count(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level.
///
/// # Examples
///
/// ```
/// use cmc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that prevents further processing.
    Error,
    /// A warning that does not stop processing.
    Warning,
    /// Additional information attached to another diagnostic.
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with a severity level and optional notes.
///
/// # Examples
///
/// ```
/// use cmc_util::diagnostic::{Diagnostic, Level};
///
/// let diag = Diagnostic::warning("unused pushback");
/// assert_eq!(diag.level, Level::Warning);
/// ```
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level.
    pub level: Level,
    /// Main diagnostic message.
    pub message: String,
    /// Additional notes for context.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Add a note to the diagnostic.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmc_util::diagnostic::Diagnostic;
    ///
    /// let diag = Diagnostic::warning("double pushback ignored")
    ///     .with_note("only one character of lookahead is supported");
    /// assert_eq!(diag.notes.len(), 1);
    /// ```
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;
        for note in &self.notes {
            write!(f, "\nnote: {}", note)?;
        }
        Ok(())
    }
}

/// Fluent builder for diagnostics.
///
/// This is the recommended way to construct and emit diagnostics.
///
/// # Examples
///
/// ```
/// use cmc_util::diagnostic::{DiagnosticBuilder, Handler};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::warning("no character has been previously read")
///     .emit(&handler);
/// ```
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Start building an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::error(message),
        }
    }

    /// Start building a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::warning(message),
        }
    }

    /// Attach a note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic = self.diagnostic.with_note(note);
        self
    }

    /// Finish building and return the diagnostic.
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Finish building and emit through the given handler.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.diagnostic);
    }
}

/// Handler for collecting and reporting diagnostics.
///
/// The handler collects diagnostics behind a `RefCell` so that several
/// components holding a shared `&Handler` (the tokenizer and the reader
/// it owns) can report through it. It can be configured to panic on
/// errors for testing.
///
/// # Examples
///
/// ```
/// use cmc_util::diagnostic::Handler;
///
/// let handler = Handler::new();
/// assert!(!handler.has_errors());
/// assert_eq!(handler.warning_count(), 0);
/// ```
#[derive(Debug)]
pub struct Handler {
    /// Collected diagnostics.
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether to panic on errors (for testing).
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler.
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: false,
        }
    }

    /// Create a handler that panics on errors (for testing).
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: true,
        }
    }

    /// Emit a pre-built diagnostic.
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.level == Level::Error {
            panic!("Diagnostic error: {}", diagnostic.message);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Get a clone of all collected diagnostics, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Write every collected diagnostic to stderr.
    pub fn print_all(&self) {
        for diag in self.diagnostics.borrow().iter() {
            eprintln!("{}", diag);
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Error.to_string(), "error");
        assert_eq!(Level::Warning.to_string(), "warning");
        assert_eq!(Level::Note.to_string(), "note");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::warning("something looks off");
        assert_eq!(diag.to_string(), "warning: something looks off");
    }

    #[test]
    fn test_diagnostic_display_with_notes() {
        let diag = Diagnostic::warning("double pushback ignored")
            .with_note("only one character of lookahead is supported");
        assert_eq!(
            diag.to_string(),
            "warning: double pushback ignored\nnote: only one character of lookahead is supported"
        );
    }

    #[test]
    fn test_handler_collects_in_order() {
        let handler = Handler::new();
        DiagnosticBuilder::warning("first").emit(&handler);
        DiagnosticBuilder::error("second").emit(&handler);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].message, "first");
        assert_eq!(diags[1].message, "second");
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        assert_eq!(handler.error_count(), 0);
        assert_eq!(handler.warning_count(), 0);

        DiagnosticBuilder::warning("w1").emit(&handler);
        DiagnosticBuilder::warning("w2").emit(&handler);
        DiagnosticBuilder::error("e1").emit(&handler);

        assert_eq!(handler.warning_count(), 2);
        assert_eq!(handler.error_count(), 1);
        assert!(handler.has_errors());
    }

    #[test]
    #[should_panic(expected = "Diagnostic error: boom")]
    fn test_panicking_handler() {
        let handler = Handler::new_panicking();
        DiagnosticBuilder::error("boom").emit(&handler);
    }

    #[test]
    fn test_panicking_handler_allows_warnings() {
        let handler = Handler::new_panicking();
        DiagnosticBuilder::warning("fine").emit(&handler);
        assert_eq!(handler.warning_count(), 1);
    }

    #[test]
    fn test_builder_build() {
        let diag = DiagnosticBuilder::error("bad input")
            .note("try something else")
            .build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.notes, vec!["try something else".to_string()]);
    }
}
