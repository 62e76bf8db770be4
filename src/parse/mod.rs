//! Parse S-expression text into a `Value`.

use crate::value::Value;
use crate::List;

pub mod error;

mod scan;


pub use self::error::{Category, Error, Location, Result};

use self::error::ErrorCode;
use self::scan::{Scanner, Token, TokenKind};

/// Maximum nesting depth of lists the parser accepts.
///
/// Parsing is recursive, so unchecked nesting would allow crafted
/// input to overflow the stack.
const DEFAULT_DEPTH_LIMIT: u8 = 128;

/// A parser producing values from S-expression text.
///
/// The convenience functions [`from_str`] and [`from_slice`] cover the
/// common case of a buffer holding exactly one expression. A `Parser`
/// is for the general case: it yields the expressions in the input one
/// at a time and leaves the decision about leftover bytes to the
/// caller.
///
/// ```
/// use minexpr::parse::Parser;
///
/// let mut parser = Parser::from_str("(a b) (c) final");
/// let mut count = 0;
/// while let Some(value) = parser.parse().unwrap() {
///     count += 1;
///     println!("{}", value);
/// }
/// assert_eq!(count, 3);
/// ```
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    remaining_depth: u8,
}

impl<'a> Parser<'a> {
    /// Creates a parser reading from a string.
    pub fn from_str(input: &'a str) -> Self {
        Parser {
            scanner: Scanner::new(input),
            remaining_depth: DEFAULT_DEPTH_LIMIT,
        }
    }

    /// Parses the next expression from the input.
    ///
    /// Consumes the expression and any whitespace and comments
    /// immediately following it. Returns `Ok(None)` once only
    /// whitespace remains.
    pub fn parse(&mut self) -> Result<Option<Value>> {
        self.skip_whitespace()?;
        if self.peek()?.kind == TokenKind::Eof {
            return Ok(None);
        }
        let value = self.parse_expr()?;
        self.skip_whitespace()?;
        Ok(Some(value))
    }

    /// Checks that the input has been fully consumed.
    ///
    /// Returns an error if non-whitespace bytes remain. Whether
    /// leftover input is acceptable is the caller's decision; call
    /// this when it is not.
    pub fn end(&mut self) -> Result<()> {
        self.skip_whitespace()?;
        if self.peek()?.kind == TokenKind::Eof {
            Ok(())
        } else {
            Err(self.error(ErrorCode::TrailingCharacters))
        }
    }

    /// Byte offset of the first unconsumed byte of the input.
    ///
    /// After a successful [`parse`](Parser::parse) this is the
    /// position just past the expression and its trailing whitespace.
    pub fn byte_offset(&self) -> usize {
        self.scanner.byte_offset()
    }

    fn parse_expr(&mut self) -> Result<Value> {
        let token = self.peek()?;
        match token.kind {
            TokenKind::Atom => {
                let token = self.next_token()?;
                Ok(Value::String(unquote(token.text)))
            }
            TokenKind::LeftParen => self.parse_list(),
            TokenKind::RightParen => Err(self.error(ErrorCode::ExpectedValue)),
            TokenKind::Eof => Err(self.error(ErrorCode::EofWhileParsingValue)),
            // Callers skip whitespace before expecting an expression.
            TokenKind::Whitespace => Err(self.error(ErrorCode::InternalError)),
        }
    }

    fn parse_list(&mut self) -> Result<Value> {
        if self.next_token()?.kind != TokenKind::LeftParen {
            return Err(self.error(ErrorCode::InternalError));
        }
        if self.remaining_depth == 0 {
            return Err(self.error(ErrorCode::RecursionLimitExceeded));
        }
        self.remaining_depth -= 1;
        let result = self.parse_list_elements();
        self.remaining_depth += 1;
        result.map(Value::List)
    }

    /// Parses the elements of a list up to and including the closing
    /// parenthesis. The opening parenthesis has already been consumed.
    fn parse_list_elements(&mut self) -> Result<List> {
        self.skip_whitespace()?;
        if self.accept(TokenKind::RightParen)?.is_some() {
            return Ok(List::new());
        }
        let mut list = List::new();
        loop {
            if self.peek()?.kind == TokenKind::Eof {
                return Err(self.error(ErrorCode::EofWhileParsingList));
            }
            let value = self.parse_expr()?;
            if list.try_push(value).is_err() {
                return Err(self.error(ErrorCode::OutOfMemory));
            }
            let have_separator = self.skip_whitespace()?;
            match self.peek()?.kind {
                TokenKind::RightParen => {
                    self.next_token()?;
                    return Ok(list);
                }
                TokenKind::Eof => return Err(self.error(ErrorCode::EofWhileParsingList)),
                // An item may abut a following list, but not a
                // following string.
                TokenKind::LeftParen => {}
                _ if !have_separator => return Err(self.error(ErrorCode::MissingSeparator)),
                _ => {}
            }
        }
    }

    /// Consumes any run of whitespace and comment tokens. Returns
    /// whether anything was consumed.
    fn skip_whitespace(&mut self) -> Result<bool> {
        let mut skipped = false;
        while self.accept(TokenKind::Whitespace)?.is_some() {
            skipped = true;
        }
        Ok(skipped)
    }

    fn next_token(&mut self) -> Result<Token<'a>> {
        match self.scanner.next_token() {
            Ok(token) => Ok(token),
            Err(code) => Err(self.error(code)),
        }
    }

    fn peek(&mut self) -> Result<Token<'a>> {
        match self.scanner.peek() {
            Ok(token) => Ok(token),
            Err(code) => Err(self.error(code)),
        }
    }

    fn accept(&mut self, kind: TokenKind) -> Result<Option<Token<'a>>> {
        match self.scanner.accept(kind) {
            Ok(token) => Ok(token),
            Err(code) => Err(self.error(code)),
        }
    }

    fn error(&self, code: ErrorCode) -> Error {
        let (line, column) = self.scanner.location();
        Error::syntax(code, line, column)
    }
}

/// Recovers the text of a string token.
///
/// A quoted token loses its surrounding quotes and every doubled `""`
/// collapses to a single quote character. A bare token is its own
/// text.
fn unquote(text: &str) -> String {
    if !text.starts_with('"') {
        return text.to_owned();
    }
    let inner = &text[1..text.len() - 1];
    let mut unquoted = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        unquoted.push(ch);
        if ch == '"' {
            // The scanner only passes through doubled quotes, so the
            // character skipped here is the second of a pair.
            chars.next();
        }
    }
    unquoted
}

/// Parses a string holding exactly one S-expression.
///
/// Whitespace and comments around the expression are fine; any other
/// leftover bytes are an error. Use a [`Parser`] to read several
/// expressions from one buffer, or to permit trailing content.
///
/// ```
/// let value = minexpr::from_str("(hello \"big world\")").unwrap();
/// assert_eq!(value.get(0).and_then(|v| v.as_str()), Some("hello"));
/// ```
pub fn from_str(input: &str) -> Result<Value> {
    let mut parser = Parser::from_str(input);
    match parser.parse()? {
        Some(value) => {
            parser.end()?;
            Ok(value)
        }
        None => Err(parser.error(ErrorCode::EofWhileParsingValue)),
    }
}

/// Parses a byte slice holding exactly one UTF-8 encoded S-expression.
pub fn from_slice(input: &[u8]) -> Result<Value> {
    match std::str::from_utf8(input) {
        Ok(text) => from_str(text),
        Err(utf8_error) => {
            let (line, column) = scan::location_of(&input[..utf8_error.valid_up_to()]);
            Err(Error::syntax(ErrorCode::InvalidUtf8, line, column))
        }
    }
}
