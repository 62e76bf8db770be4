//! Ordered traversal over a value tree.
//!
//! Both walks hand the callback a mutable parent list and the index of
//! the value being visited, so a visit can inspect the value, replace
//! it in place, or edit its siblings. To make the root addressable the
//! walk temporarily moves it into a synthetic one-element list, so the
//! callback sees the root as element 0 of that list and can replace
//! even the root itself.
//!
//! A callback returning `Err` aborts the walk immediately; no later
//! node is visited and the error is returned to the caller.

use std::mem;

use crate::{List, Value};

/// Visits `root` and every value below it, parents before children,
/// siblings in list order.
///
/// ```
/// use minexpr::{walk, Value};
///
/// let mut value = minexpr::from_str("(a (b c) d)").unwrap();
/// let mut seen = Vec::new();
/// walk::preorder::<(), _>(&mut value, |parent, index| {
///     if let Some(text) = parent.get_str(index) {
///         seen.push(text.to_owned());
///     }
///     Ok(())
/// })
/// .unwrap();
/// assert_eq!(seen, ["a", "b", "c", "d"]);
/// ```
pub fn preorder<E, F>(root: &mut Value, mut visit: F) -> Result<(), E>
where
    F: FnMut(&mut List, usize) -> Result<(), E>,
{
    let mut wrapper = List::new();
    wrapper.push(mem::take(root));
    let result = walk_pre(&mut wrapper, 0, &mut visit);
    if !wrapper.is_empty() {
        *root = wrapper.remove(0);
    }
    result
}

/// Visits `root` and every value below it, children before parents,
/// siblings in list order.
pub fn postorder<E, F>(root: &mut Value, mut visit: F) -> Result<(), E>
where
    F: FnMut(&mut List, usize) -> Result<(), E>,
{
    let mut wrapper = List::new();
    wrapper.push(mem::take(root));
    let result = walk_post(&mut wrapper, 0, &mut visit);
    if !wrapper.is_empty() {
        *root = wrapper.remove(0);
    }
    result
}

fn walk_pre<E, F>(parent: &mut List, index: usize, visit: &mut F) -> Result<(), E>
where
    F: FnMut(&mut List, usize) -> Result<(), E>,
{
    visit(parent, index)?;
    let mut i = 0;
    loop {
        // Re-fetch on every step; the callback may have replaced the
        // value at this slot or edited the list being walked.
        let list = match parent.get_mut(index) {
            Some(Value::List(list)) => list,
            _ => return Ok(()),
        };
        if i >= list.len() {
            return Ok(());
        }
        walk_pre(list, i, visit)?;
        i += 1;
    }
}

fn walk_post<E, F>(parent: &mut List, index: usize, visit: &mut F) -> Result<(), E>
where
    F: FnMut(&mut List, usize) -> Result<(), E>,
{
    let mut i = 0;
    loop {
        let list = match parent.get_mut(index) {
            Some(Value::List(list)) => list,
            _ => break,
        };
        if i >= list.len() {
            break;
        }
        walk_post(list, i, visit)?;
        i += 1;
    }
    visit(parent, index)
}
