//! The scanner splitting input text into tokens.

use crate::parse::error::ErrorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// A run of whitespace, possibly including comments.
    Whitespace,
    LeftParen,
    RightParen,
    /// A bare or double-quoted string.
    Atom,
    Eof,
}

/// A single token. `text` is the exact input slice the token was
/// scanned from, quotes included, so the parser can both unquote it
/// and account for its length.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Splits the input into tokens, with room for a single token of
/// lookahead.
pub(crate) struct Scanner<'a> {
    input: &'a str,
    /// Byte offset of the furthest position reached. Error locations
    /// are computed from this.
    pos: usize,
    putback: Option<Token<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Scanner {
            input,
            pos: 0,
            putback: None,
        }
    }

    /// Returns the next token, consuming it.
    ///
    /// Whitespace and comments form tokens of their own; the parser
    /// decides where they are significant as separators.
    pub fn next_token(&mut self) -> Result<Token<'a>, ErrorCode> {
        if let Some(token) = self.putback.take() {
            return Ok(token);
        }
        let rest = self.input.as_bytes();
        match rest.get(self.pos).copied() {
            None => Ok(Token {
                kind: TokenKind::Eof,
                text: "",
            }),
            Some(b'"') => self.scan_quoted(),
            Some(b'(') => Ok(self.scan_single(TokenKind::LeftParen)),
            Some(b')') => Ok(self.scan_single(TokenKind::RightParen)),
            Some(b';') => Ok(self.scan_whitespace()),
            Some(b' ' | b'\t' | b'\r' | b'\n') => Ok(self.scan_whitespace()),
            Some(_) => Ok(self.scan_bare()),
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Result<Token<'a>, ErrorCode> {
        let token = self.next_token()?;
        debug_assert!(self.putback.is_none());
        self.putback = Some(token);
        Ok(token)
    }

    /// Consumes the next token if it has the given kind.
    pub fn accept(&mut self, kind: TokenKind) -> Result<Option<Token<'a>>, ErrorCode> {
        let token = self.next_token()?;
        if token.kind == kind {
            Ok(Some(token))
        } else {
            debug_assert!(self.putback.is_none());
            self.putback = Some(token);
            Ok(None)
        }
    }

    /// Byte offset of the end of the consumed input, excluding any
    /// token put back for lookahead.
    pub fn byte_offset(&self) -> usize {
        let putback_len = self.putback.map_or(0, |token| token.text.len());
        self.pos - putback_len
    }

    /// Line and column of the furthest position the scanner reached.
    pub fn location(&self) -> (usize, usize) {
        location_of(&self.input.as_bytes()[..self.pos])
    }

    fn scan_single(&mut self, kind: TokenKind) -> Token<'a> {
        let start = self.pos;
        self.pos += 1;
        Token {
            kind,
            text: &self.input[start..self.pos],
        }
    }

    /// Scans a run of whitespace. A `;` comment counts as whitespace
    /// through the end of its line.
    fn scan_whitespace(&mut self) -> Token<'a> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while let Some(&b) = bytes.get(self.pos) {
            match b {
                b' ' | b'\t' | b'\r' | b'\n' => self.pos += 1,
                b';' => {
                    while let Some(&b) = bytes.get(self.pos) {
                        self.pos += 1;
                        if b == b'\n' {
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
        Token {
            kind: TokenKind::Whitespace,
            text: &self.input[start..self.pos],
        }
    }

    /// Scans a bare string, which runs until whitespace, a
    /// parenthesis, a double quote, or end of input. A `;` inside a
    /// bare token is literal data, not the start of a comment.
    fn scan_bare(&mut self) -> Token<'a> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while let Some(&b) = bytes.get(self.pos) {
            match b {
                b' ' | b'\t' | b'\r' | b'\n' | b'(' | b')' | b'"' => break,
                _ => self.pos += 1,
            }
        }
        Token {
            kind: TokenKind::Atom,
            text: &self.input[start..self.pos],
        }
    }

    /// Scans a double-quoted string. A doubled `""` inside the quotes
    /// stands for a single quote character and does not close the
    /// token.
    fn scan_quoted(&mut self) -> Result<Token<'a>, ErrorCode> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        self.pos += 1;
        loop {
            match bytes.get(self.pos).copied() {
                None => {
                    // Report the error at end of input, past the text
                    // the open quote swallowed.
                    self.pos = self.input.len();
                    return Err(ErrorCode::UnterminatedQuote);
                }
                Some(b'"') => {
                    self.pos += 1;
                    if bytes.get(self.pos) == Some(&b'"') {
                        self.pos += 1;
                    } else {
                        return Ok(Token {
                            kind: TokenKind::Atom,
                            text: &self.input[start..self.pos],
                        });
                    }
                }
                Some(_) => self.pos += 1,
            }
        }
    }
}

/// Computes the 1-based line and 0-based column of the position just
/// past `prefix`.
pub(crate) fn location_of(prefix: &[u8]) -> (usize, usize) {
    let line = 1 + prefix.iter().filter(|&&b| b == b'\n').count();
    let column = prefix
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(prefix.len(), |nl| prefix.len() - nl - 1);
    (line, column)
}
