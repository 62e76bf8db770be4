use std::borrow::Cow;

use crate::{List, Value};

impl From<&str> for Value {
    #[inline]
    fn from(text: &str) -> Self {
        Value::String(text.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(text: String) -> Self {
        Value::String(text)
    }
}

impl<'a> From<Cow<'a, str>> for Value {
    #[inline]
    fn from(text: Cow<'a, str>) -> Self {
        Value::String(text.into_owned())
    }
}

impl From<List> for Value {
    #[inline]
    fn from(list: List) -> Self {
        Value::List(list)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::List(List::from(elements))
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::List(iter.into_iter().collect())
    }
}
