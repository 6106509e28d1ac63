//! cmc-lex - Lexical Analyzer for the C-Minus Language
//!
//! This crate turns C-Minus source text into a stream of classified
//! tokens for consumption by a parser. Tokenization is driven by a
//! deterministic finite automaton over characters pulled from a reader
//! with exactly one character of pushback, which is how the automaton
//! peeks one character past a token boundary and hands it back to the
//! stream unconsumed.
//!
//! # Example Usage
//!
//! ```
//! use cmc_lex::{Tokenizer, TokenKind};
//! use cmc_util::Handler;
//!
//! let handler = Handler::new();
//! let tokenizer = Tokenizer::new("while (x <= 9) x = x + 1;", &handler);
//!
//! for token in tokenizer {
//!     println!("{}", token); // "WHILE: while", "LP: (", ...
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token types and the fixed lexeme lookup table
//! - [`reader`] - Character reader with single-slot pushback
//! - [`tokenizer`] - The DFA tokenizer
//!
//! # Token Vocabulary
//!
//! **Keywords**: `else`, `if`, `int`, `return`, `void`, `while`
//!
//! **Operators**: `+`, `-`, `*`, `/`, `<`, `<=`, `>`, `>=`, `==`, `!=`, `=`
//!
//! **Punctuation**: `;`, `,`, `(`, `)`, `[`, `]`, `{`, `}`
//!
//! **Derived**: `NUM` (maximal digit run), `ID` (maximal letter run that
//! is not a keyword), `ERROR` (unrecognized lexeme, carrying a
//! diagnostic message)
//!
//! Comments (`/* ... */`, not nested) and whitespace separate tokens and
//! produce none themselves.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod reader;
pub mod token;
pub mod tokenizer;

// Re-export main types for convenience
pub use reader::Reader;
pub use token::{kind_from_lexeme, Token, TokenKind};
pub use tokenizer::Tokenizer;
