//! Serialize a `Value` into S-expression text.

use std::io;

use crate::buffer::Accumulator;
use crate::value::Value;


/// Decides whether a string must be rendered in quoted form.
///
/// Quoting is required for the empty string and for any string
/// containing a byte that is not graphic ASCII, or a parenthesis, or a
/// double quote. Everything else round-trips as a bare token.
fn needs_quoting(text: &str) -> bool {
    text.is_empty()
        || text
            .bytes()
            .any(|b| !b.is_ascii_graphic() || matches!(b, b'(' | b')' | b'"'))
}

/// A serializer writing S-expression text to an [`io::Write`] sink.
///
/// The output is round-trip safe: parsing it reproduces the original
/// value, with strings quoted exactly when their content requires it.
/// Lists render with a single space between elements and no space
/// inside the parentheses.
pub struct Printer<W> {
    writer: W,
}

impl<W: io::Write> Printer<W> {
    /// Creates a printer writing to `writer`.
    pub fn new(writer: W) -> Self {
        Printer { writer }
    }

    /// Unwraps the printer, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes the serialized form of `value`.
    pub fn print(&mut self, value: &Value) -> io::Result<()> {
        match value {
            Value::String(text) => self.print_string(text),
            Value::List(list) => {
                self.writer.write_all(b"(")?;
                for (i, element) in list.iter().enumerate() {
                    if i > 0 {
                        self.writer.write_all(b" ")?;
                    }
                    self.print(element)?;
                }
                self.writer.write_all(b")")
            }
        }
    }

    fn print_string(&mut self, text: &str) -> io::Result<()> {
        if !needs_quoting(text) {
            return self.writer.write_all(text.as_bytes());
        }
        self.writer.write_all(b"\"")?;
        let mut rest = text;
        // Copy runs up to and including each quote, then double it.
        while let Some(idx) = rest.find('"') {
            self.writer.write_all(rest[..=idx].as_bytes())?;
            self.writer.write_all(b"\"")?;
            rest = &rest[idx + 1..];
        }
        self.writer.write_all(rest.as_bytes())?;
        self.writer.write_all(b"\"")
    }
}

/// Serializes `value` into the given writer.
pub fn to_writer<W: io::Write>(writer: W, value: &Value) -> io::Result<()> {
    let mut printer = Printer::new(writer);
    printer.print(value)
}

/// Serializes `value` into a byte vector.
///
/// A growth failure of the output buffer is reported as an error of
/// kind [`io::ErrorKind::OutOfMemory`] instead of aborting.
pub fn to_vec(value: &Value) -> io::Result<Vec<u8>> {
    let mut printer = Printer::new(Accumulator::new());
    printer.print(value)?;
    Ok(printer.into_inner().into_inner())
}

/// Serializes `value` into a `String`.
///
/// ```
/// use minexpr::Value;
///
/// let value = Value::list(["hello", "big world"]);
/// assert_eq!(minexpr::to_string(&value).unwrap(), "(hello \"big world\")");
/// ```
pub fn to_string(value: &Value) -> io::Result<String> {
    let bytes = to_vec(value)?;
    // We never emit invalid UTF-8: output is made of string contents,
    // which are UTF-8, and ASCII punctuation.
    Ok(unsafe { String::from_utf8_unchecked(bytes) })
}
