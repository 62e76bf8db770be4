//! The `List` container holding the children of a compound value.

use std::collections::TryReserveError;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice;

use crate::buffer;
use crate::Value;

/// Headroom added on top of the geometric factor when a list grows.
const GROWTH_SLACK: usize = 4;

/// An ordered sequence of exclusively owned [`Value`]s.
///
/// A `List` is the sole owner of its elements; there is no sharing and
/// no cycles, so cloning duplicates a whole subtree and dropping a
/// list releases everything below it. Comparing two lists compares
/// their elements pairwise, in order.
///
/// The backing store grows geometrically (one-and-a-half times the
/// current capacity plus a small constant), so building a large list
/// element by element stays amortized linear.
///
/// ```
/// use minexpr::{List, Value};
///
/// let mut list = List::new();
/// list.push("a");
/// list.push(Value::list(["b", "c"]));
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get_str(0), Some("a"));
/// assert_eq!(minexpr::to_string(&Value::List(list)).unwrap(), "(a (b c))");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct List {
    elements: Vec<Value>,
}

impl List {
    /// Constructs a new, empty list.
    ///
    /// No allocation happens until the first element is appended.
    pub fn new() -> Self {
        List {
            elements: Vec::new(),
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements the list can hold before its
    /// backing store needs to grow again.
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns a reference to the element at `index`, or `None` if
    /// `index` is out of range.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or
    /// `None` if `index` is out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.elements.get_mut(index)
    }

    /// If the element at `index` is a string, returns its text.
    ///
    /// Returns `None` both for an out-of-range index and for an
    /// element that is a list.
    pub fn get_str(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(Value::as_str)
    }

    /// Appends a value to the end of the list.
    ///
    /// Accepts anything convertible into a [`Value`], so both
    /// constructed values and raw strings can be appended directly.
    pub fn push(&mut self, value: impl Into<Value>) {
        if self.elements.len() == self.elements.capacity() {
            let target = buffer::next_capacity(self.elements.capacity(), GROWTH_SLACK);
            self.elements.reserve_exact(target - self.elements.len());
        }
        self.elements.push(value.into());
    }

    /// Appends a value, reporting growth failure instead of aborting.
    ///
    /// On failure the value is dropped, releasing any subtree it owns,
    /// and the list is left unchanged.
    pub fn try_push(&mut self, value: impl Into<Value>) -> Result<(), TryReserveError> {
        if self.elements.len() == self.elements.capacity() {
            let target = buffer::next_capacity(self.elements.capacity(), GROWTH_SLACK);
            self.elements.try_reserve_exact(target - self.elements.len())?;
        }
        self.elements.push(value.into());
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the
    /// elements after it to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Value {
        self.elements.remove(index)
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[Value] {
        &self.elements
    }

    /// Returns an iterator over references to the elements.
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.elements.iter()
    }

    /// Returns an iterator over mutable references to the elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Value> {
        self.elements.iter_mut()
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl From<Vec<Value>> for List {
    fn from(elements: Vec<Value>) -> Self {
        List { elements }
    }
}

impl<T: Into<Value>> FromIterator<T> for List {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut List {
    type Item = &'a mut Value;
    type IntoIter = slice::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl Index<usize> for List {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.elements[index]
    }
}

impl IndexMut<usize> for List {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.elements[index]
    }
}
