//! Token type definitions and the fixed lexeme lookup table.
//!
//! A token pairs a [`TokenKind`] with the verbatim lexeme text that
//! produced it. The lookup table maps the fixed keyword, operator, and
//! punctuation vocabulary of C-Minus to its kinds; kinds the table cannot
//! name (`Num`, `Id`, `Error`) are assigned by the tokenizer itself.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// The kind of a lexical token.
///
/// This is a closed enumeration: the C-Minus token vocabulary is fixed
/// and the lexer never produces a kind outside it. `Error` is a
/// pseudo-kind whose token carries a diagnostic message rather than
/// source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    /// `else`
    Else,
    /// `if`
    If,
    /// `int`
    Int,
    /// `return`
    Return,
    /// `void`
    Void,
    /// `while`
    While,

    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mult,
    /// `/`
    Div,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `=`
    Assign,

    // Punctuation
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `(`
    Lp,
    /// `)`
    Rp,
    /// `[`
    Lb,
    /// `]`
    Rb,
    /// `{`
    Lcurly,
    /// `}`
    Rcurly,

    // Derived kinds, classified by the DFA rather than the lookup table
    /// A maximal run of decimal digits.
    Num,
    /// A maximal run of letters that is not a keyword.
    Id,
    /// An unrecognized lexeme; the token text is a diagnostic message.
    Error,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Else => "ELSE",
            TokenKind::If => "IF",
            TokenKind::Int => "INT",
            TokenKind::Return => "RETURN",
            TokenKind::Void => "VOID",
            TokenKind::While => "WHILE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mult => "MULT",
            TokenKind::Div => "DIV",
            TokenKind::Lt => "LT",
            TokenKind::Le => "LE",
            TokenKind::Gt => "GT",
            TokenKind::Ge => "GE",
            TokenKind::Eq => "EQ",
            TokenKind::Ne => "NE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Lp => "LP",
            TokenKind::Rp => "RP",
            TokenKind::Lb => "LB",
            TokenKind::Rb => "RB",
            TokenKind::Lcurly => "LCURLY",
            TokenKind::Rcurly => "RCURLY",
            TokenKind::Num => "NUM",
            TokenKind::Id => "ID",
            TokenKind::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// A classified lexical token.
///
/// Created exactly once per completed DFA run and never mutated
/// afterwards; ownership passes to the consumer of the token stream.
///
/// # Example
///
/// ```
/// use cmc_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Num, "42");
/// assert_eq!(token.to_string(), "NUM: 42");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The classified kind.
    pub kind: TokenKind,
    /// The lexeme text as consumed, verbatim. For `Error` tokens this is
    /// a diagnostic message instead of the offending source text.
    pub lexeme: String,
}

impl Token {
    /// Creates a new token from a kind and its lexeme text.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.lexeme)
    }
}

/// The fixed keyword/operator/punctuation table.
static LOOKUP: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    FxHashMap::from_iter([
        ("else", TokenKind::Else),
        ("if", TokenKind::If),
        ("int", TokenKind::Int),
        ("return", TokenKind::Return),
        ("void", TokenKind::Void),
        ("while", TokenKind::While),
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Mult),
        ("/", TokenKind::Div),
        ("<", TokenKind::Lt),
        ("<=", TokenKind::Le),
        (">", TokenKind::Gt),
        (">=", TokenKind::Ge),
        ("==", TokenKind::Eq),
        ("!=", TokenKind::Ne),
        ("=", TokenKind::Assign),
        (";", TokenKind::Semicolon),
        (",", TokenKind::Comma),
        ("(", TokenKind::Lp),
        (")", TokenKind::Rp),
        ("[", TokenKind::Lb),
        ("]", TokenKind::Rb),
        ("{", TokenKind::Lcurly),
        ("}", TokenKind::Rcurly),
    ])
});

/// Looks up the kind for an exact keyword, operator, or punctuation
/// lexeme.
///
/// Matching is exact and case-sensitive. A hit overrides whatever kind
/// the DFA assigned, which is how identifier-shaped keywords such as
/// `if` and `while` are separated from ordinary identifiers.
///
/// # Example
///
/// ```
/// use cmc_lex::{kind_from_lexeme, TokenKind};
///
/// assert_eq!(kind_from_lexeme("while"), Some(TokenKind::While));
/// assert_eq!(kind_from_lexeme("<="), Some(TokenKind::Le));
/// assert_eq!(kind_from_lexeme("counter"), None);
/// ```
pub fn kind_from_lexeme(text: &str) -> Option<TokenKind> {
    LOOKUP.get(text).copied()
}
