//! The DFA tokenizer.
//!
//! `next_token` drives a deterministic finite automaton character by
//! character over a [`Reader`]. Each state handler decides the next
//! state and whether the just-read character joins the pending lexeme
//! buffer; when the automaton reaches `Done`, the buffer is finalized
//! against the fixed lookup table into one classified [`Token`].

use cmc_util::Handler;

use crate::reader::Reader;
use crate::token::{kind_from_lexeme, Token, TokenKind};

/// The states of the tokenizer's automaton.
///
/// Exactly one DFA run is alive per `next_token` call; no state
/// persists across calls except the reader's position in the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Seeking the start of a token, discarding whitespace.
    Start,
    /// Inside a maximal digit run.
    InNumber,
    /// Inside a maximal letter run.
    InIdentifier,
    /// Just read one of `< > = !`, deciding on a two-character operator.
    InRelop,
    /// Just read `/`, deciding between division and a comment opener.
    InSlash,
    /// Inside a `/* ... */` comment.
    InComment,
    /// Just read `*` inside a comment, watching for the closing `/`.
    OutComment,
    /// The current run is complete.
    Done,
}

/// The C-Minus tokenizer.
///
/// Owns one [`Reader`] per input and lives for the duration of
/// tokenization. The token sequence is lazy, forward-only, and single
/// pass: construct a fresh tokenizer to re-tokenize.
///
/// # Example
///
/// ```
/// use cmc_lex::{Tokenizer, TokenKind};
/// use cmc_util::Handler;
///
/// let handler = Handler::new();
/// let mut tokenizer = Tokenizer::new("while (x)", &handler);
///
/// assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::While);
/// assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::Lp);
/// ```
pub struct Tokenizer<'a> {
    /// Character source with single-slot pushback.
    reader: Reader<'a>,

    /// Pending lexeme buffer for the current DFA run.
    buf: String,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over the given source text.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            reader: Reader::new(source, handler),
            buf: String::new(),
        }
    }

    /// Runs one DFA pass and returns the next token.
    ///
    /// Returns `None` once the stream is exhausted with nothing pending,
    /// which ends the token sequence. Lexical faults do not end it: an
    /// unrecognized lexeme comes back as an [`TokenKind::Error`] token
    /// and the next call resumes from the current stream position.
    pub fn next_token(&mut self) -> Option<Token> {
        self.buf.clear();
        let mut state = State::Start;
        let mut kind = None;

        while state != State::Done {
            let c = self.reader.next_char();
            let (next_state, save) = match state {
                State::Start => self.handle_start(c),
                State::InNumber => {
                    let step = self.handle_in_number(c);
                    if step.0 == State::Done {
                        kind = Some(TokenKind::Num);
                    }
                    step
                },
                State::InIdentifier => {
                    let step = self.handle_in_identifier(c);
                    if step.0 == State::Done {
                        kind = Some(TokenKind::Id);
                    }
                    step
                },
                State::InRelop => self.handle_in_relop(c),
                State::InSlash => self.handle_in_slash(c),
                State::InComment => self.handle_in_comment(c),
                State::OutComment => self.handle_out_comment(c),
                State::Done => break,
            };

            state = next_state;
            if save {
                if let Some(c) = c {
                    self.buf.push(c);
                }
            }
            // End of stream ends the run no matter the state.
            if c.is_none() {
                state = State::Done;
            }
        }

        if self.buf.is_empty() {
            return None;
        }

        // The fixed table overrides the DFA's classification; this is
        // what turns identifier-shaped keywords into keyword tokens.
        match kind_from_lexeme(&self.buf).or(kind) {
            Some(kind) => Some(Token::new(kind, self.buf.clone())),
            None => Some(Token::new(
                TokenKind::Error,
                format!("token not recognized: {}", self.buf),
            )),
        }
    }

    fn handle_start(&mut self, c: Option<char>) -> (State, bool) {
        let Some(c) = c else {
            return (State::Done, false);
        };

        if c.is_ascii_digit() {
            (State::InNumber, true)
        } else if c.is_alphabetic() {
            (State::InIdentifier, true)
        } else if matches!(c, '<' | '>' | '=' | '!') {
            (State::InRelop, true)
        } else if c == '/' {
            // Saved for now; the buffer is reset if `*` upgrades this
            // to a comment opener, so a lone `/` keeps its lexeme.
            (State::InSlash, true)
        } else if c.is_whitespace() {
            (State::Start, false)
        } else {
            // Single-character token, classified by the lookup table.
            (State::Done, true)
        }
    }

    fn handle_in_number(&mut self, c: Option<char>) -> (State, bool) {
        match c {
            Some(c) if c.is_ascii_digit() => (State::InNumber, true),
            Some(_) => {
                self.reader.push_back();
                (State::Done, false)
            },
            None => (State::Done, false),
        }
    }

    fn handle_in_identifier(&mut self, c: Option<char>) -> (State, bool) {
        match c {
            Some(c) if c.is_alphabetic() => (State::InIdentifier, true),
            Some(_) => {
                self.reader.push_back();
                (State::Done, false)
            },
            None => (State::Done, false),
        }
    }

    fn handle_in_relop(&mut self, c: Option<char>) -> (State, bool) {
        match c {
            Some('=') => (State::Done, true),
            Some(_) => {
                self.reader.push_back();
                (State::Done, false)
            },
            None => (State::Done, false),
        }
    }

    fn handle_in_slash(&mut self, c: Option<char>) -> (State, bool) {
        match c {
            Some('*') => {
                // The `/*` opener is not part of any token.
                self.buf.clear();
                (State::InComment, false)
            },
            Some(_) => {
                self.reader.push_back();
                (State::Done, false)
            },
            None => (State::Done, false),
        }
    }

    fn handle_in_comment(&mut self, c: Option<char>) -> (State, bool) {
        match c {
            Some('*') => (State::OutComment, false),
            Some(_) => (State::InComment, false),
            None => (State::Done, false),
        }
    }

    fn handle_out_comment(&mut self, c: Option<char>) -> (State, bool) {
        match c {
            Some('/') => (State::Start, false),
            Some(_) => (State::InComment, false),
            None => (State::Done, false),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        Tokenizer::new(source, &handler).collect()
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(lex_all("   \t\n  \r\n  ").is_empty());
    }

    #[test]
    fn test_number_run() {
        let tokens = lex_all("12345");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0], Token::new(TokenKind::Num, "12345"));
    }

    #[test]
    fn test_number_bounded_by_nondigit() {
        let tokens = lex_all("42;");
        assert_eq!(tokens[0], Token::new(TokenKind::Num, "42"));
        assert_eq!(tokens[1], Token::new(TokenKind::Semicolon, ";"));
    }

    #[test]
    fn test_identifier_run() {
        let tokens = lex_all("counter");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0], Token::new(TokenKind::Id, "counter"));
    }

    #[test]
    fn test_keywords_reclassified() {
        let tokens = lex_all("if else int return void while");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::If,
                TokenKind::Else,
                TokenKind::Int,
                TokenKind::Return,
                TokenKind::Void,
                TokenKind::While,
            ]
        );
    }

    #[test]
    fn test_unicode_letter_run_is_identifier() {
        // Letters are classified Unicode-wide, not just ASCII.
        let tokens = lex_all("αβ");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0], Token::new(TokenKind::Id, "αβ"));

        let tokens = lex_all("größe = 1;");
        assert_eq!(tokens[0], Token::new(TokenKind::Id, "größe"));
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Id,
                TokenKind::Assign,
                TokenKind::Num,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let tokens = lex_all("iff whiles");
        assert_eq!(tokens[0], Token::new(TokenKind::Id, "iff"));
        assert_eq!(tokens[1], Token::new(TokenKind::Id, "whiles"));
    }

    #[test]
    fn test_relop_maximal_munch() {
        let tokens = lex_all("<=");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0], Token::new(TokenKind::Le, "<="));
    }

    #[test]
    fn test_relop_single_then_identifier() {
        let tokens = lex_all("<x");
        assert_eq!(tokens[0], Token::new(TokenKind::Lt, "<"));
        assert_eq!(tokens[1], Token::new(TokenKind::Id, "x"));
    }

    #[test]
    fn test_all_two_char_operators() {
        let tokens = lex_all("<= >= == !=");
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Le, TokenKind::Ge, TokenKind::Eq, TokenKind::Ne]
        );
    }

    #[test]
    fn test_assign_vs_eq() {
        let tokens = lex_all("= ==");
        assert_eq!(tokens[0], Token::new(TokenKind::Assign, "="));
        assert_eq!(tokens[1], Token::new(TokenKind::Eq, "=="));
    }

    #[test]
    fn test_relop_at_end_of_stream() {
        let tokens = lex_all("<");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0], Token::new(TokenKind::Lt, "<"));
    }

    #[test]
    fn test_bang_without_equals_is_error() {
        // `!` alone matches no lookup entry and no DFA-derived kind.
        let tokens = lex_all("!");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].lexeme, "token not recognized: !");
    }

    #[test]
    fn test_division_keeps_lexeme() {
        let tokens = lex_all("a/b");
        assert_eq!(tokens[0], Token::new(TokenKind::Id, "a"));
        assert_eq!(tokens[1], Token::new(TokenKind::Div, "/"));
        assert_eq!(tokens[2], Token::new(TokenKind::Id, "b"));
    }

    #[test]
    fn test_slash_at_end_of_stream() {
        let tokens = lex_all("/");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0], Token::new(TokenKind::Div, "/"));
    }

    #[test]
    fn test_comment_elision() {
        let tokens = lex_all("a/*xx<=yy*/b");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], Token::new(TokenKind::Id, "a"));
        assert_eq!(tokens[1], Token::new(TokenKind::Id, "b"));
    }

    #[test]
    fn test_comment_only() {
        assert!(lex_all("/* just a comment */").is_empty());
    }

    #[test]
    fn test_star_inside_comment_does_not_close() {
        let tokens = lex_all("/* a * b */x");
        assert_eq!(tokens, vec![Token::new(TokenKind::Id, "x")]);
    }

    #[test]
    fn test_unterminated_comment_ends_sequence() {
        assert!(lex_all("/* never closed").is_empty());
        let tokens = lex_all("x /* never closed");
        assert_eq!(tokens, vec![Token::new(TokenKind::Id, "x")]);
    }

    #[test]
    fn test_no_nested_comments() {
        // The first */ closes the comment regardless of nesting depth.
        let tokens = lex_all("/* outer /* inner */ x");
        assert_eq!(tokens, vec![Token::new(TokenKind::Id, "x")]);
    }

    #[test]
    fn test_unrecognized_character_is_error_and_lexing_continues() {
        let tokens = lex_all("@ x");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].lexeme, "token not recognized: @");
        assert_eq!(tokens[1], Token::new(TokenKind::Id, "x"));
    }

    #[test]
    fn test_punctuation() {
        let tokens = lex_all("( ) [ ] { } , ;");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Lp,
                TokenKind::Rp,
                TokenKind::Lb,
                TokenKind::Rb,
                TokenKind::Lcurly,
                TokenKind::Rcurly,
                TokenKind::Comma,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_arithmetic_operators() {
        let tokens = lex_all("+ - *");
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Plus, TokenKind::Minus, TokenKind::Mult]
        );
    }

    #[test]
    fn test_adjacent_tokens_without_whitespace() {
        let tokens = lex_all("x=y<=3");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Id,
                TokenKind::Assign,
                TokenKind::Id,
                TokenKind::Le,
                TokenKind::Num,
            ]
        );
    }

    #[test]
    fn test_number_identifier_boundary() {
        // `123abc` is a digit run followed by a letter run.
        let tokens = lex_all("123abc");
        assert_eq!(tokens[0], Token::new(TokenKind::Num, "123"));
        assert_eq!(tokens[1], Token::new(TokenKind::Id, "abc"));
    }

    #[test]
    fn test_end_to_end_statement() {
        let tokens = lex_all("if (x == 0) return x+1;");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::If,
                TokenKind::Lp,
                TokenKind::Id,
                TokenKind::Eq,
                TokenKind::Num,
                TokenKind::Rp,
                TokenKind::Return,
                TokenKind::Id,
                TokenKind::Plus,
                TokenKind::Num,
                TokenKind::Semicolon,
            ]
        );
        assert_eq!(tokens[2].lexeme, "x");
        assert_eq!(tokens[4].lexeme, "0");
        assert_eq!(tokens[9].lexeme, "1");
    }

    #[test]
    fn test_sequence_is_not_restartable() {
        let handler = Handler::new();
        let mut tokenizer = Tokenizer::new("x", &handler);
        assert!(tokenizer.next_token().is_some());
        assert!(tokenizer.next_token().is_none());
        // Once exhausted, the sequence stays ended.
        assert!(tokenizer.next_token().is_none());
    }

    #[test]
    fn test_no_reader_faults_during_normal_lexing() {
        let handler = Handler::new();
        let tokenizer = Tokenizer::new("int x = 42; /* c */ while (x <= 9) x = x + 1;", &handler);
        let _tokens: Vec<Token> = tokenizer.collect();
        assert_eq!(handler.warning_count(), 0);
        assert!(!handler.has_errors());
    }

    // ------------------------------------------------------------------
    // Property-based tests
    // ------------------------------------------------------------------

    #[test]
    fn test_property_digit_runs_lex_to_one_num() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,40}")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::Num);
            prop_assert_eq!(&tokens[0].lexeme, &input);
        });
    }

    #[test]
    fn test_property_letter_runs_lex_to_one_token() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z]{1,40}")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 1);
            // Either a keyword or an identifier, never anything else.
            let kind = kind_from_lexeme(&input).unwrap_or(TokenKind::Id);
            prop_assert_eq!(tokens[0].kind, kind);
        });
    }

    #[test]
    fn test_property_whitespace_padding_is_irrelevant() {
        use proptest::prelude::*;

        proptest!(|(pad in "[ \t\n]{0,10}")| {
            let source = format!("{pad}42{pad}x{pad}");
            let tokens = lex_all(&source);
            prop_assert_eq!(kinds(&tokens), vec![TokenKind::Num, TokenKind::Id]);
        });
    }
}
