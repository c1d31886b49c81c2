//! Recursive descent parser for partition encodings.
//!
//! Parses text of the form
//!
//! ```text
//! [+|-] [coef] S1[a, b] S2[c] ... (+|-) [coef] S1[..] ...
//! ```
//!
//! into an [`Encoding`]. Uses the logos-based tokenizer from
//! [`crate::encoding::tokenizer`]. Input is first cut into sign/body pieces
//! at every `+` and `-`; each body is then parsed on its own.

use tracing::{debug, trace};

use crate::encoding::model::{Encoding, Group, Partition, Sign};
use crate::encoding::tokenizer::{tokenize, Spanned, Token};

/// Errors from decoding an input string. Positions are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("input contains no groups")]
    EmptyInput,
    #[error("expected sign/body pairs, found {pieces} pieces")]
    UnpairedSign { pieces: usize },
    #[error("malformed label '{text}' at position {position}")]
    MalformedLabel { position: usize, text: String },
    #[error("unbalanced bracket opened at position {position}")]
    UnbalancedBracket { position: usize },
    #[error("non-integer partition entry '{text}' at position {position}")]
    InvalidEntry { position: usize, text: String },
    #[error("unexpected token at position {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
}

/// One piece of the sign split: a sign, or the body between two signs.
#[derive(Debug, Clone, Copy)]
enum Piece<'t> {
    Sign(Sign),
    Body(Body<'t>),
}

/// Tokens between two signs along with the byte range they were cut from.
#[derive(Debug, Clone, Copy)]
struct Body<'t> {
    tokens: &'t [Spanned],
    start: usize,
    end: usize,
}

impl Body<'_> {
    fn is_blank(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Parse an encoding string into an [`Encoding`].
///
/// A bare leading group gets an implicit `+`. Groups without any labeled
/// partition are kept; see [`crate::encoding::validate::check_groups`].
pub fn parse(input: &str) -> Result<Encoding, DecodeError> {
    let tokens = tokenize(input);
    let pieces = normalize_leading(split_on_signs(input, &tokens));

    if pieces.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    if pieces.len() % 2 != 0 {
        return Err(DecodeError::UnpairedSign {
            pieces: pieces.len(),
        });
    }

    let mut groups = Vec::with_capacity(pieces.len() / 2);
    for pair in pieces.chunks_exact(2) {
        match (pair[0], pair[1]) {
            (Piece::Sign(sign), Piece::Body(body)) => {
                groups.push(parse_group(input, sign, body)?);
            }
            _ => {
                return Err(DecodeError::UnpairedSign {
                    pieces: pieces.len(),
                })
            }
        }
    }

    debug!(groups = groups.len(), "parsed encoding");
    Ok(Encoding::new(groups))
}

/// Cut the token stream at every sign, keeping the signs as pieces.
///
/// Always yields `body (sign body)*`.
fn split_on_signs<'t>(input: &str, tokens: &'t [Spanned]) -> Vec<Piece<'t>> {
    let mut pieces = Vec::new();
    let mut body_first = 0;
    let mut body_start = 0;

    for (i, tok) in tokens.iter().enumerate() {
        let sign = match tok.token {
            Some(Token::Plus) => Sign::Plus,
            Some(Token::Minus) => Sign::Minus,
            _ => continue,
        };
        pieces.push(Piece::Body(Body {
            tokens: &tokens[body_first..i],
            start: body_start,
            end: tok.start,
        }));
        pieces.push(Piece::Sign(sign));
        body_first = i + 1;
        body_start = tok.end;
    }

    pieces.push(Piece::Body(Body {
        tokens: &tokens[body_first..],
        start: body_start,
        end: input.len(),
    }));
    pieces
}

/// Drop a blank leading body, or give a non-blank one an implicit `+`.
fn normalize_leading(mut pieces: Vec<Piece<'_>>) -> Vec<Piece<'_>> {
    match pieces.first().copied() {
        Some(Piece::Body(body)) if body.is_blank() => {
            pieces.remove(0);
        }
        Some(Piece::Body(_)) => pieces.insert(0, Piece::Sign(Sign::Plus)),
        _ => {}
    }
    pieces
}

/// Parse one group body: an opaque coefficient followed by labeled partitions.
fn parse_group(input: &str, sign: Sign, body: Body<'_>) -> Result<Group, DecodeError> {
    let first_label = body
        .tokens
        .iter()
        .position(|t| t.token == Some(Token::Label));

    let coefficient_end = first_label.map_or(body.end, |i| body.tokens[i].start);
    let coefficient = input[body.start..coefficient_end].trim().to_string();

    let mut labeled = Vec::new();
    if let Some(first) = first_label {
        let mut parser = GroupParser {
            tokens: &body.tokens[first..],
            cursor: 0,
            end: body.end,
        };
        while !parser.is_eof() {
            labeled.push(parser.parse_labeled_partition()?);
        }
    }

    // Stable: equal labels keep source order.
    labeled.sort_by_key(|(label, _)| *label);
    trace!(%sign, %coefficient, partitions = labeled.len(), "parsed group");

    Ok(Group {
        sign,
        coefficient,
        partitions: labeled.into_iter().map(|(_, p)| p).collect(),
    })
}

/// Cursor over the labeled-partition tokens of one group body.
struct GroupParser<'t> {
    tokens: &'t [Spanned],
    cursor: usize,
    /// Byte offset where the body ends, for end-of-input errors.
    end: usize,
}

impl<'t> GroupParser<'t> {
    fn is_eof(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    fn peek(&self) -> Option<&'t Spanned> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<&'t Spanned> {
        let tok = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(tok)
    }

    /// Parse `S<n> [ int, int, ... ]`.
    fn parse_labeled_partition(&mut self) -> Result<(u64, Partition), DecodeError> {
        let label_tok = self
            .advance()
            .ok_or_else(|| DecodeError::UnexpectedEof("expected label".into()))?;
        if label_tok.token != Some(Token::Label) {
            return Err(unexpected(label_tok, "expected label"));
        }
        let label = label_tok.text[1..]
            .parse::<u64>()
            .map_err(|_| DecodeError::MalformedLabel {
                position: label_tok.start,
                text: label_tok.text.clone(),
            })?;

        let open = match self.advance() {
            Some(tok) if tok.token == Some(Token::BracketOpen) => tok,
            Some(tok) => {
                return Err(DecodeError::MalformedLabel {
                    position: label_tok.start,
                    text: format!("{}{}", label_tok.text, tok.text),
                })
            }
            None => {
                return Err(DecodeError::UnexpectedEof(format!(
                    "expected '[' after label '{}' at position {}",
                    label_tok.text, self.end
                )))
            }
        };

        let parts = self.parse_int_list(open)?;
        Ok((label, Partition::new(parts)))
    }

    /// Parse the entries after `[` up to and including the matching `]`.
    ///
    /// An immediately closed bracket yields an empty list.
    fn parse_int_list(&mut self, open: &Spanned) -> Result<Vec<usize>, DecodeError> {
        let unbalanced = || DecodeError::UnbalancedBracket {
            position: open.start,
        };

        let mut parts = Vec::new();
        if self
            .peek()
            .is_some_and(|t| t.token == Some(Token::BracketClose))
        {
            self.advance();
            return Ok(parts);
        }

        loop {
            let entry = self.advance().ok_or_else(unbalanced)?;
            match entry.token {
                Some(Token::Integer) => {
                    let value = entry.text.parse::<usize>().map_err(|_| invalid(entry))?;
                    parts.push(value);
                }
                Some(Token::Label | Token::BracketOpen) => return Err(unbalanced()),
                _ => return Err(invalid(entry)),
            }

            let sep = self.advance().ok_or_else(unbalanced)?;
            match sep.token {
                Some(Token::Comma) => continue,
                Some(Token::BracketClose) => break,
                Some(Token::Label | Token::BracketOpen) => return Err(unbalanced()),
                _ => return Err(invalid(sep)),
            }
        }

        Ok(parts)
    }
}

fn invalid(tok: &Spanned) -> DecodeError {
    DecodeError::InvalidEntry {
        position: tok.start,
        text: tok.text.clone(),
    }
}

fn unexpected(tok: &Spanned, expected: &str) -> DecodeError {
    let found = match tok.token {
        Some(token) => format!("{token:?}"),
        None => "unrecognized input".to_string(),
    };
    DecodeError::UnexpectedToken {
        position: tok.start,
        message: format!("{expected}, got {found} '{}'", tok.text),
    }
}
