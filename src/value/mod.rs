//! The Value enum, a dynamically typed representation of any tree in
//! the interchange format.

use std::fmt;
use std::str::FromStr;

use crate::{parse, print, List};

/// Represents a tree in the interchange format.
///
/// Every value is either a string leaf or a list of child values;
/// there are no other variants. A value exclusively owns everything
/// below it: cloning duplicates the whole subtree, dropping releases
/// it recursively, and equality compares both operands structurally.
///
/// ```
/// use minexpr::Value;
///
/// let value = Value::list(["a", "b"]);
/// assert!(value.is_list());
/// assert_eq!(value.as_list().unwrap().len(), 2);
///
/// let copy = value.clone();
/// assert_eq!(copy, value);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A leaf holding text.
    ///
    /// The text is a length-counted Rust string, so embedded NUL
    /// bytes are representable; they serialize in quoted form.
    String(String),

    /// An ordered sequence of child values.
    List(List),
}

impl Value {
    /// Constructs a string value.
    ///
    /// ```
    /// # use minexpr::Value;
    /// let v = Value::string("hello");
    /// assert_eq!(v.as_str(), Some("hello"));
    /// ```
    pub fn string(text: impl Into<String>) -> Self {
        Value::String(text.into())
    }

    /// Constructs a list value from elements convertible into `Value`.
    ///
    /// ```
    /// # use minexpr::Value;
    /// let v = Value::list(["a", "b", "c"]);
    /// assert_eq!(minexpr::to_string(&v).unwrap(), "(a b c)");
    /// ```
    pub fn list<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::List(elements.into_iter().collect())
    }

    /// Constructs an empty list value.
    pub fn empty_list() -> Self {
        Value::List(List::new())
    }

    /// Returns true if the value is a string.
    pub fn is_string(&self) -> bool {
        self.as_str().is_some()
    }

    /// If the value is a string, returns its text. Returns `None`
    /// otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            Value::List(_) => None,
        }
    }

    /// Returns true if the value is a list.
    pub fn is_list(&self) -> bool {
        self.as_list().is_some()
    }

    /// If the value is a list, returns a reference to it. Returns
    /// `None` otherwise.
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            Value::String(_) => None,
        }
    }

    /// If the value is a list, returns a mutable reference to it.
    /// Returns `None` otherwise.
    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(list) => Some(list),
            Value::String(_) => None,
        }
    }

    /// If the value is a list, returns it, consuming `self`. Returns
    /// `Err(self)` for strings, so the value is not lost.
    pub fn into_list(self) -> Result<List, Value> {
        match self {
            Value::List(list) => Ok(list),
            value => Err(value),
        }
    }

    /// If the value is a list, returns a reference to the element at
    /// `index`. Returns `None` for strings and out-of-range indices.
    ///
    /// ```
    /// # use minexpr::Value;
    /// let v = minexpr::from_str("(a (b c))").unwrap();
    /// assert_eq!(v.get(0), Some(&Value::string("a")));
    /// assert_eq!(v.get(1).and_then(|nested| nested.get(0)), Some(&Value::string("b")));
    /// assert_eq!(v.get(2), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.as_list().and_then(|list| list.get(index))
    }
}

impl Default for Value {
    /// The default value is the empty string.
    fn default() -> Self {
        Value::String(String::new())
    }
}

impl fmt::Display for Value {
    /// Displays the value in its serialized text form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = print::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for Value {
    type Err = parse::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::from_str(s)
    }
}

mod from;
