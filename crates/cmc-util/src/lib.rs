//! cmc-util - Shared Utilities for the C-Minus Compiler
//!
//! This crate provides the infrastructure shared by all phases of the
//! C-Minus compiler. At the moment that is the diagnostic subsystem:
//! a [`Handler`] that collects warnings and errors, and a fluent
//! [`DiagnosticBuilder`] for constructing them.
//!
//! # Example
//!
//! ```
//! use cmc_util::{DiagnosticBuilder, Handler};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("pushed back with no character previously read")
//!     .emit(&handler);
//!
//! assert_eq!(handler.warning_count(), 1);
//! assert!(!handler.has_errors());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
