//! When parsing S-expressions goes wrong.

use std::error;
use std::fmt::{self, Debug, Display};
use std::result;

/// This type represents the possible errors when parsing S-expression
/// data.
pub struct Error {
    /// This `Box` keeps the size of `Error` as small as possible, so
    /// that the `Result`s threaded through the parser stay cheap to
    /// pass around.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `minexpr::parse::Error`.
pub type Result<T> = result::Result<T, Error>;

/// Location of a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    line: usize,
    column: usize,
}

impl Location {
    /// One-based line number at which the error was detected.
    ///
    /// Characters in the first line of the input (before the first
    /// newline character) are in line 1.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Zero-based column offset at which the error was detected.
    ///
    /// The first character of the input, and any character immediately
    /// following a newline character, are in column 0. The reported
    /// offset is that of the furthest byte the scanner reached, which
    /// for errors detected at end of input is one past the last byte.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl Error {
    /// Location of the error in the input.
    pub fn location(&self) -> Location {
        self.err.location
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Syntax` - input that is not a syntactically valid
    ///   S-expression
    /// - `Category::Eof` - unexpected end of the input data
    /// - `Category::Memory` - a buffer failed to grow
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::MissingSeparator
            | ErrorCode::ExpectedValue
            | ErrorCode::TrailingCharacters
            | ErrorCode::InvalidUtf8
            | ErrorCode::RecursionLimitExceeded
            | ErrorCode::InternalError => Category::Syntax,
            ErrorCode::UnterminatedQuote
            | ErrorCode::EofWhileParsingList
            | ErrorCode::EofWhileParsingValue => Category::Eof,
            ErrorCode::OutOfMemory => Category::Memory,
        }
    }

    /// Returns true if this error was caused by input that was not a
    /// syntactically valid S-expression.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by prematurely reaching
    /// the end of the input data.
    ///
    /// Callers that process streaming input may be interested in
    /// retrying the parse once more data is available.
    pub fn is_eof(&self) -> bool {
        self.classify() == Category::Eof
    }

    /// Returns true if this error was caused by a failed buffer
    /// growth.
    pub fn is_memory(&self) -> bool {
        self.classify() == Category::Memory
    }
}

/// Categorizes the cause of a `minexpr::parse::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by input that was not a syntactically
    /// valid S-expression.
    Syntax,

    /// The error was caused by prematurely reaching the end of the
    /// input data.
    Eof,

    /// The error was caused by a buffer that failed to grow.
    Memory,
}

impl Error {
    pub(crate) fn syntax(code: ErrorCode, line: usize, column: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code,
                location: Location { line, column },
            }),
        }
    }

    #[cfg(test)]
    pub(crate) fn code(&self) -> &ErrorCode {
        &self.err.code
    }
}

struct ErrorImpl {
    code: ErrorCode,
    location: Location,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    /// A double-quoted string was still open at end of input.
    UnterminatedQuote,

    /// Two successive list items with no whitespace between them.
    MissingSeparator,

    /// Expected a string or a list.
    ExpectedValue,

    /// EOF while parsing a list.
    EofWhileParsingList,

    /// EOF while a value was expected.
    EofWhileParsingValue,

    /// The S-expression has non-whitespace trailing characters after
    /// the value.
    TrailingCharacters,

    /// The input is not valid UTF-8.
    InvalidUtf8,

    /// Encountered lists nested more than 128 levels deep.
    RecursionLimitExceeded,

    /// A buffer failed to grow.
    OutOfMemory,

    /// The scanner and parser disagree; this indicates a bug in this
    /// crate, not in the input.
    InternalError,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ErrorCode::UnterminatedQuote => f.write_str("unterminated double-quoted string"),
            ErrorCode::MissingSeparator => {
                f.write_str("missing whitespace separator between list items")
            }
            ErrorCode::ExpectedValue => f.write_str("expected a string or list"),
            ErrorCode::EofWhileParsingList => f.write_str("EOF while parsing a list"),
            ErrorCode::EofWhileParsingValue => f.write_str("EOF while parsing a value"),
            ErrorCode::TrailingCharacters => f.write_str("trailing characters"),
            ErrorCode::InvalidUtf8 => f.write_str("invalid UTF-8"),
            ErrorCode::RecursionLimitExceeded => f.write_str("recursion limit exceeded"),
            ErrorCode::OutOfMemory => f.write_str("out of memory"),
            ErrorCode::InternalError => f.write_str("internal parser error"),
        }
    }
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {} column {}",
            self.code, self.location.line, self.location.column
        )
    }
}

// Remove two layers of verbosity from the debug representation. Humans
// often end up seeing this representation because it is what unwrap()
// shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error({:?}, line: {}, column: {})",
            self.err.code.to_string(),
            self.err.location.line,
            self.err.location.column,
        )
    }
}
