//! Structural parser: tokens to a nested value tree.
//!
//! Each nesting level collects its values in source order and hands them
//! back reversed. The result is a program stack: its last element is the
//! first value written, which is what the evaluator runs first. A `{ ... }`
//! region becomes one [`Block`] holding its own reversed level.
//!
//! Malformed nesting is not diagnosed. An unclosed `{` is closed at end of
//! input, and a `}` with no matching `{` ends the parse, leaving the rest of
//! the input unread.

use std::str::FromStr;

use ifx_ir::{BigDecimal, Block, Value};
use ifx_lexer::{tokenize, Token, TokenKind};
use ifx_stack::ensure_sufficient_stack;
use thiserror::Error;
use tracing::debug;

/// Error raised while building the value tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A number token that is not a decimal literal.
    #[error("invalid number literal `{text}` at offset {offset}")]
    InvalidNumber { offset: usize, text: String },
}

/// How a nesting level ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LevelEnd {
    QuoteClose,
    EndOfInput,
}

struct Parser<I> {
    tokens: I,
    depth: usize,
}

impl<'src, I> Parser<I>
where
    I: Iterator<Item = Token<'src>>,
{
    fn new(tokens: I) -> Self {
        Parser { tokens, depth: 0 }
    }

    /// Parse one level, up to its `}` or the end of input.
    fn parse_level(&mut self) -> Result<(Vec<Value>, LevelEnd), ParseError> {
        ensure_sufficient_stack(|| {
            let mut values = Vec::new();
            while let Some(token) = self.tokens.next() {
                match token.kind {
                    TokenKind::Number => values.push(Value::Number(parse_number(&token)?)),
                    TokenKind::QuoteOpen => {
                        self.depth += 1;
                        let (inner, end) = self.parse_level()?;
                        self.depth -= 1;
                        if end == LevelEnd::EndOfInput {
                            debug!(offset = token.offset, "unclosed block closed at end of input");
                        }
                        values.push(Value::Block(Block::from_stack(inner)));
                    }
                    TokenKind::QuoteClose => {
                        if self.depth == 0 {
                            debug!(offset = token.offset, "unmatched `}}` ends the program");
                        }
                        values.reverse();
                        return Ok((values, LevelEnd::QuoteClose));
                    }
                    TokenKind::Word => values.push(Value::symbol(token.text)),
                    TokenKind::Whitespace => {}
                }
            }
            values.reverse();
            Ok((values, LevelEnd::EndOfInput))
        })
    }
}

fn parse_number(token: &Token<'_>) -> Result<BigDecimal, ParseError> {
    BigDecimal::from_str(token.text).map_err(|_| ParseError::InvalidNumber {
        offset: token.offset,
        text: token.text.to_string(),
    })
}

/// Build the program stack from a token stream.
pub fn parse<'src, I>(tokens: I) -> Result<Vec<Value>, ParseError>
where
    I: IntoIterator<Item = Token<'src>>,
{
    let mut parser = Parser::new(tokens.into_iter());
    let (values, _) = parser.parse_level()?;
    Ok(values)
}

/// `parse(tokenize(source))`.
pub fn parse_source(source: &str) -> Result<Vec<Value>, ParseError> {
    parse(tokenize(source))
}
