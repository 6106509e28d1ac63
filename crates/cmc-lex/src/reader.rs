//! Character reader with one character of pushback.
//!
//! The DFA frequently has to read one character past the end of a token
//! (a digit run only ends once a non-digit shows up) and must hand that
//! character back for the next token's run to consume. A single-slot
//! pushback is the minimal mechanism that supports this without a
//! general lookahead buffer, so the reader state is exactly two fields:
//! the last character returned and a pending flag.

use cmc_util::{DiagnosticBuilder, Handler};

/// A character source with exactly one character of pushback.
///
/// The reader owns the character stream until exhaustion, at which point
/// the underlying iterator is dropped and every later read returns
/// `None`. Misusing the pushback slot (pushing back before any read, or
/// twice in succession) is reported through the diagnostic handler and
/// otherwise ignored; the slot is never corrupted.
///
/// # Example
///
/// ```
/// use cmc_lex::Reader;
/// use cmc_util::Handler;
///
/// let handler = Handler::new();
/// let mut reader = Reader::new("ab", &handler);
///
/// assert_eq!(reader.next_char(), Some('a'));
/// reader.push_back();
/// assert_eq!(reader.next_char(), Some('a'));
/// assert_eq!(reader.next_char(), Some('b'));
/// assert_eq!(reader.next_char(), None);
/// assert!(reader.finished());
/// ```
pub struct Reader<'a> {
    /// The live character stream; `None` once exhausted.
    chars: Option<std::str::Chars<'a>>,

    /// The last character returned, needed to service a pushback.
    last: Option<char>,

    /// Whether a pushback is pending redelivery.
    pending: bool,

    /// Diagnostic handler for usage-fault warnings.
    handler: &'a Handler,
}

impl<'a> Reader<'a> {
    /// Creates a reader over the given source text.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            chars: Some(source.chars()),
            last: None,
            pending: false,
            handler,
        }
    }

    /// Returns the next character, or `None` once the stream is
    /// exhausted.
    ///
    /// A pending pushback is redelivered first, without touching the
    /// underlying stream. The first read past the end drops the stream;
    /// every read after that keeps returning `None`.
    pub fn next_char(&mut self) -> Option<char> {
        if self.pending {
            self.pending = false;
            return self.last;
        }

        match self.chars.as_mut()?.next() {
            Some(c) => {
                self.last = Some(c);
                Some(c)
            },
            None => {
                self.chars = None;
                None
            },
        }
    }

    /// Marks the previously returned character for redelivery on the
    /// next [`next_char`](Self::next_char) call.
    ///
    /// Only one character of lookahead is supported. Pushing back before
    /// anything has been read, or twice without an intervening read, is
    /// a usage fault: it is reported as a diagnostic and the request is
    /// ignored, leaving the pending slot as it was.
    pub fn push_back(&mut self) {
        if self.last.is_none() {
            DiagnosticBuilder::warning("no character has been previously read")
                .emit(self.handler);
            return;
        }
        if self.pending {
            DiagnosticBuilder::warning("cannot push back more than once in succession")
                .note("the earlier pending character is kept")
                .emit(self.handler);
            return;
        }
        self.pending = true;
    }

    /// Returns true once the underlying stream has been exhausted and
    /// released.
    pub fn finished(&self) -> bool {
        self.chars.is_none()
    }
}
