//! logos-based tokenizer for partition encodings.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `S12` as [`Token::Label`] beats `S` + `12`)
//! 2. For equal length matches, earlier-defined variants win
//!
//! [`Token::Word`] excludes `S` and digits so that a label glued to a
//! coefficient (`2S1[3]`) still splits into `Integer`, `Label`, ...
//! A lone `S` not followed by digits matches nothing and surfaces as a
//! lexer error, which the parser only tolerates inside a coefficient.

use logos::Logos;

/// Token produced by the encoding lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// Slot label: `S1`, `S12`.
    #[regex(r"S[0-9]+")]
    Label,

    /// Unsigned integer literal.
    #[regex(r"[0-9]+")]
    Integer,

    /// Free text, only meaningful as (part of) a coefficient.
    #[regex(r"[^ \t\n\r\fS0-9+\-\[\],]+")]
    Word,

    /// `+`
    #[token("+")]
    Plus,

    /// `-`
    #[token("-")]
    Minus,

    /// `[`
    #[token("[")]
    BracketOpen,

    /// `]`
    #[token("]")]
    BracketClose,

    /// `,`
    #[token(",")]
    Comma,
}

impl Token {
    /// Whether this token separates two groups.
    pub fn is_sign(self) -> bool {
        matches!(self, Token::Plus | Token::Minus)
    }
}

/// A lexed token with its byte span in the source.
///
/// `token` is `None` for input the lexer could not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Option<Token>,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Tokenize an encoding string, keeping spans and lexer errors.
pub fn tokenize(input: &str) -> Vec<Spanned> {
    Token::lexer(input)
        .spanned()
        .map(|(result, span)| Spanned {
            token: result.ok(),
            text: input[span.clone()].to_string(),
            start: span.start,
            end: span.end,
        })
        .collect()
}
