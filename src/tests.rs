//! Basic sanity checking on the `Value` type.
//!
//! These tests primarily test the round-trip (i.e converting to text
//! and back) behavior of `Value` using quickcheck.

use quickcheck::{Arbitrary, Gen, QuickCheck};
use quickcheck_macros::quickcheck;

use crate as minexpr;

use minexpr::{walk, List, Value};

enum ValueKind {
    String,
    List,
}

fn gen_value(g: &mut Gen, depth: usize) -> Value {
    use ValueKind::*;
    let choices = if depth >= g.size() {
        &[String] as &[ValueKind]
    } else {
        &[String, List]
    };
    match g.choose(choices).unwrap() {
        String => {
            // Cover every branch of the quoting rule.
            let choices = [
                "", "foo", "two words", "\"", "a\"b", "(", ")", "\t", "\x01", "a;b", "h\u{e9}llo",
            ];
            Value::string(*g.choose(&choices).unwrap())
        }
        List => {
            let len = usize::arbitrary(g) % 4;
            Value::List((0..len).map(|_| gen_value(g, depth + 1)).collect())
        }
    }
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        gen_value(g, 0)
    }
}

#[test]
fn print_parse_roundtrip() {
    fn prop(input: Value) -> bool {
        let string = minexpr::to_string(&input).expect("conversion to string failed");
        let output = minexpr::from_str(&string).expect("parsing failed");
        input == output
    }
    QuickCheck::new()
        .tests(1000)
        .max_tests(2000)
        .gen(Gen::new(4))
        .quickcheck(prop as fn(Value) -> bool);
}

#[quickcheck]
fn write_parse_roundtrip(input: Value) -> bool {
    let bytes = minexpr::to_vec(&input).expect("conversion to bytes failed");
    let parsed = minexpr::from_slice(&bytes).expect("parsing failed");
    input == parsed
}

#[quickcheck]
fn clone_equals_original(input: Value) -> bool {
    input.clone() == input
}

#[test]
fn test_clone_is_independent() {
    let original = minexpr::from_str("(a (b c))").unwrap();
    let mut copy = original.clone();
    copy.as_list_mut().unwrap()[1]
        .as_list_mut()
        .unwrap()
        .push("d");
    assert_ne!(copy, original);
    assert_eq!(original, minexpr::from_str("(a (b c))").unwrap());
}

#[test]
fn test_equality() {
    assert_eq!(Value::string("a"), Value::string("a"));
    assert_ne!(Value::string("a"), Value::string("b"));
    assert_ne!(Value::list(["a"]), Value::list(["b"]));
    assert_ne!(Value::list(["a"]), Value::list(["a", "a"]));
    // A string and a list are never equal, whatever their contents.
    assert_ne!(Value::string(""), Value::empty_list());
}

#[test]
fn test_display() {
    let value = minexpr::from_str(r#"(a "b c" (d))"#).unwrap();
    assert_eq!(value.to_string(), r#"(a "b c" (d))"#);
    let parsed: Value = r#"(a "b c" (d))"#.parse().unwrap();
    assert_eq!(parsed, value);
}

#[test]
fn test_list_index() {
    let list: List = ["a", "b", "c"].into_iter().collect();
    assert_eq!(list[0], Value::string("a"));
    assert_eq!(list[2], Value::string("c"));
    assert_eq!(list.get(3), None);
    assert_eq!(list.get_str(1), Some("b"));
}

#[test]
fn test_list_growth() {
    let mut list = List::new();
    assert_eq!(list.capacity(), 0);
    list.push("x");
    assert_eq!(list.capacity(), 4);
    for i in 0..4 {
        list.push(i.to_string());
    }
    // 4 * 1.5 + 4
    assert_eq!(list.capacity(), 10);
    for i in 0..95 {
        list.try_push(i.to_string()).unwrap();
        assert!(list.len() <= list.capacity());
    }
    assert_eq!(list.len(), 100);
}

#[test]
fn test_accumulator_growth() {
    let mut acc = crate::buffer::Accumulator::new();
    acc.put(b"x").unwrap();
    // The first growth lands on the capacity floor.
    assert_eq!(acc.capacity(), 16);
    acc.put(&[b'y'; 100]).unwrap();
    assert_eq!(&acc.into_inner()[..2], b"xy");
}

#[test]
fn test_preorder_visits_parents_first() {
    let mut value = minexpr::from_str("(a (b c) d)").unwrap();
    let mut seen = Vec::new();
    walk::preorder::<(), _>(&mut value, |parent, index| {
        seen.push(parent[index].to_string());
        Ok(())
    })
    .unwrap();
    assert_eq!(seen, ["(a (b c) d)", "a", "(b c)", "b", "c", "d"]);
}

#[test]
fn test_postorder_visits_children_first() {
    let mut value = minexpr::from_str("(a (b c) d)").unwrap();
    let mut seen = Vec::new();
    walk::postorder::<(), _>(&mut value, |parent, index| {
        seen.push(parent[index].to_string());
        Ok(())
    })
    .unwrap();
    assert_eq!(seen, ["a", "b", "c", "(b c)", "d", "(a (b c) d)"]);
}

#[test]
fn test_walk_abort() {
    let mut value = minexpr::from_str("(a (b c) d)").unwrap();
    let mut visits = 0;
    let result = walk::preorder(&mut value, |parent, index| {
        visits += 1;
        if parent.get_str(index) == Some("b") {
            Err("stop")
        } else {
            Ok(())
        }
    });
    assert_eq!(result, Err("stop"));
    // Neither c nor d was visited after the abort.
    assert_eq!(visits, 4);
    // The tree is intact after an aborted walk.
    assert_eq!(value, minexpr::from_str("(a (b c) d)").unwrap());
}

#[test]
fn test_walk_replaces_in_place() {
    let mut value = minexpr::from_str("(a b)").unwrap();
    let mut seen = Vec::new();
    walk::preorder::<(), _>(&mut value, |parent, index| {
        if parent.get_str(index) == Some("b") {
            parent[index] = Value::list(["x", "y"]);
        }
        seen.push(parent[index].to_string());
        Ok(())
    })
    .unwrap();
    assert_eq!(value, minexpr::from_str("(a (x y))").unwrap());
    // The walk descends into the replacement.
    assert_eq!(seen, ["(a b)", "a", "(x y)", "x", "y"]);
}

#[test]
fn test_walk_replaces_root() {
    let mut value = Value::string("a");
    walk::preorder::<(), _>(&mut value, |parent, index| {
        if parent.get_str(index) == Some("a") {
            parent[index] = Value::list(["x"]);
        }
        Ok(())
    })
    .unwrap();
    assert_eq!(value, minexpr::from_str("(x)").unwrap());
}

#[test]
fn test_into_list() {
    let value = minexpr::from_str("(a b)").unwrap();
    let list = value.into_list().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(Value::string("x").into_list(), Err(Value::string("x")));
}

#[test]
fn test_default_value() {
    assert_eq!(Value::default(), Value::string(""));
}
