#![deny(missing_docs)]

//! This crate provides a minimal S-expression data interchange format:
//! parenthesized lists whose leaves are bare or double-quoted strings.
//! It is intended as a building block for embedding structured text
//! data in a larger application, not as a reader for any particular
//! Lisp dialect -- there are no numbers, symbols, dotted pairs or
//! reader macros, just strings and lists.
//!
//! ```text
//! (config
//!  (name "deep thought")    ; quoted strings may contain anything
//!  (answer unknown)
//!  (tags (a b c)))
//! ```
//!
//! # Syntax
//!
//! An expression is either a string or a list:
//!
//! - A *bare* string is the longest run of bytes containing no
//!   whitespace, parentheses or double quotes; a `;` inside a bare
//!   string is literal data, not the start of a comment.
//! - A *quoted* string is delimited by `"` characters; an interior
//!   quote is written as two consecutive `"` characters. Any byte may
//!   appear between the delimiters, including newlines.
//! - A *list* is a parenthesized sequence of expressions. Successive
//!   items are separated by whitespace; the separator may be omitted
//!   before a nested `(` and before the closing `)`.
//! - A `;` starts a comment running to the end of the line; comments
//!   count as whitespace.
//!
//! # Parsing and printing
//!
//! Parsed text becomes a [`Value`], a tree of strings and lists.
//! Printing a `Value` with [`to_string`] quotes exactly those strings
//! that need it, so any value round-trips through its textual form:
//!
//! ```
//! use minexpr::{parse, Value};
//!
//! fn example() -> Result<(), parse::Error> {
//!     let value = minexpr::from_str(r#"(greeting "hello, world")"#)?;
//!     let items = value.as_list().unwrap();
//!     assert_eq!(items.get_str(0), Some("greeting"));
//!     assert_eq!(items.get_str(1), Some("hello, world"));
//!
//!     let text = minexpr::to_string(&value).unwrap();
//!     assert_eq!(text, r#"(greeting "hello, world")"#);
//!     assert_eq!(minexpr::from_str(&text)?, value);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! Parse failures carry a message and a location (1-based line,
//! 0-based column):
//!
//! ```
//! let err = minexpr::from_str("(a\n  \"unterminated)").unwrap_err();
//! assert!(err.is_eof());
//! assert_eq!(err.location().line(), 2);
//! ```
//!
//! # Manipulating values
//!
//! [`Value`] and [`List`] are plain owned data structures: cloning
//! duplicates a whole subtree, comparing is structural, and dropping a
//! value releases everything it owns. The [`walk`] module provides
//! pre-order and post-order traversals whose callbacks can replace
//! elements in place.

mod buffer;
pub mod list;
pub mod parse;
pub mod print;
pub mod value;
pub mod walk;

#[doc(inline)]
pub use self::parse::{from_slice, from_str, Parser};

#[doc(inline)]
pub use self::print::{to_string, to_vec, to_writer, Printer};

#[doc(inline)]
pub use self::list::List;

#[doc(inline)]
pub use self::value::Value;

#[cfg(test)]
mod tests;
