//! Integration tests for entities_data_handling crate
//!
//! These tests verify that values, objects and coercions work together.

use entities_data_handling::*;
use proptest::prelude::*;
use std::collections::HashMap;

#[test]
fn test_objects_nested_in_values() {
    let mut inner = Object::new();
    inner.insert("n", Value::from(1));
    let mut outer = Object::new();
    outer.insert("inner", Value::Object(inner.clone()));
    outer.insert("list", Value::from(values![1, 2]));

    let value = Value::Object(outer);
    assert_eq!(value.get_field("inner"), Value::Object(inner));
    assert_eq!(value.get_field("list").get_field("0"), Value::from(1));
}

#[test]
fn test_values_as_hash_keys() {
    let mut counts: HashMap<Value, usize> = HashMap::new();
    for value in values![1, 1.0, "1", f64::NAN, f64::NAN, values![1]] {
        *counts.entry(value).or_insert(0) += 1;
    }
    assert_eq!(counts[&Value::from(1)], 2);
    assert_eq!(counts[&Value::from("1")], 1);
    assert_eq!(counts[&Value::from(f64::NAN)], 2);
    assert_eq!(counts[&Value::from(values![1])], 1);
}

#[test]
fn test_array_string_form_round_trips_through_to_number() {
    let single = Value::from(values![42]);
    assert_eq!(single.to_string(), "42");
    assert_eq!(single.to_number(), 42.0);
}

#[test]
fn test_function_values() {
    let constant = Callable::named("seven", |_: &[Value]| Value::from(7));
    let value = Value::from(constant.clone());
    assert!(value.is_function());
    assert!(value.is_truthy());
    assert_eq!(value.type_name(), "function");
    assert_eq!(value.as_callable().map(|c| c.call(&[])), Some(Value::from(7)));
    assert_eq!(value, Value::Function(constant));
}

proptest! {
    #[test]
    fn prop_number_display_parses_back(n in -1.0e15f64..1.0e15f64) {
        let rendered = coercion::number_to_string(n);
        prop_assert_eq!(coercion::string_to_number(&rendered), n);
    }

    #[test]
    fn prop_falsey_numbers_are_zero(n in any::<f64>()) {
        prop_assert_eq!(Value::from(n).is_falsey(), n == 0.0 || n.is_nan());
    }
}
