//! Tokenizer for ifexpr using logos.
//!
//! [`tokenize`] returns a lazy, single-pass iterator. Every token carries its
//! byte offset, byte length, source text and [`TokenKind`]. Whitespace is
//! emitted as a token of its own; it is the parser that ignores it.
//!
//! Two quirks of the grammar are kept on purpose:
//! - A word is at least two characters long. A lone `a` or `$` is not a word.
//! - Characters that start no token (`-`, `+`, `.`, a single letter, ...) are
//!   skipped without an error.

use std::fmt;
use std::ops::Range;

use logos::Logos;
use tracing::trace;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r"[a-zA-Z_*$#@!%^&][a-zA-Z_*$#@!%^&0-9]+")]
    Word,

    #[token("{")]
    QuoteOpen,

    #[token("}")]
    QuoteClose,

    #[regex(r"\s+")]
    Whitespace,

    // The fraction is taken by hand so that `12.` and `12.x` still yield `12`.
    #[regex(r"[0-9]+", decimal_fraction)]
    Number,
}

/// Extend a digit run over `.digits` when a fraction follows.
fn decimal_fraction(lex: &mut logos::Lexer<'_, RawToken>) {
    let rest = lex.remainder().as_bytes();
    if rest.first() != Some(&b'.') {
        return;
    }
    let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits > 0 {
        lex.bump(1 + digits);
    }
}

/// Lexical category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier-like word, dispatched as a symbol.
    Word,
    /// `{`
    QuoteOpen,
    /// `}`
    QuoteClose,
    /// One or more whitespace characters.
    Whitespace,
    /// Unsigned decimal literal: `12` or `34.5`.
    Number,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Word => "word",
            TokenKind::QuoteOpen => "quote-open",
            TokenKind::QuoteClose => "quote-close",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Number => "number",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Word => TokenKind::Word,
            RawToken::QuoteOpen => TokenKind::QuoteOpen,
            RawToken::QuoteClose => TokenKind::QuoteClose,
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::Number => TokenKind::Number,
        }
    }
}

/// A token borrowed from the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    /// Byte offset of the first character.
    pub offset: usize,
    /// Byte length of `text`.
    pub len: usize,
    pub text: &'src str,
    pub kind: TokenKind,
}

impl Token<'_> {
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} {} {:?}", self.offset, self.offset + self.len, self.kind, self.text)
    }
}

/// Lazy token stream over a source string.
///
/// Not restartable: each call to `next` advances through the source once.
pub struct Tokens<'src> {
    inner: logos::Lexer<'src, RawToken>,
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        loop {
            let raw = self.inner.next()?;
            let span = self.inner.span();
            match raw {
                Ok(raw) => {
                    return Some(Token {
                        offset: span.start,
                        len: span.len(),
                        text: self.inner.slice(),
                        kind: raw.into(),
                    });
                }
                Err(()) => {
                    trace!(start = span.start, end = span.end, "skipping unrecognized input");
                }
            }
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Tokenize `source` lazily.
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens {
        inner: RawToken::lexer(source),
    }
}

/// Tokenize `source` eagerly.
pub fn lex_all(source: &str) -> Vec<Token<'_>> {
    tokenize(source).collect()
}
