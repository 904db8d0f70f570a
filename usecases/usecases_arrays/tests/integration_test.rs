//! Integration tests for usecases_arrays crate
//!
//! These tests run the documented sample invocations end to end and check
//! that operations from different groups compose.

use entities_data_handling::{values, Callable, Object, Value};
use usecases_arrays::*;

#[test]
fn test_sample_invocations() {
    let chunks = ShapingOps::chunk(&values![1, 2, 3, 4, 5, 6, 7, 8, 9], 2).unwrap();
    assert_eq!(
        chunks,
        vec![values![1, 2], values![3, 4], values![5, 6], values![7, 8], values![9]]
    );

    assert_eq!(
        ShapingOps::fill(&values![1, 2, 3, 4, 5], &Value::from(5), 2, 3),
        values![1, 2, 5, 5, 5]
    );

    let falsey = values![false, Value::Null, 0, "", Value::Undefined, f64::NAN];
    assert_eq!(ShapingOps::compact(&falsey), values![]);
}

#[test]
fn test_set_laws() {
    assert_eq!(SetOps::union(&[values![1, 2], values![2, 3]]), values![1, 2, 3]);
    assert_eq!(SetOps::intersect(&[values![1, 2, 3], values![2, 3, 4]]), values![2, 3]);
    assert_eq!(
        SetOps::difference(&values![1, 0, 3], &values![values![1, 2]]),
        values![0, 3]
    );
    assert_eq!(SetOps::xor(&[values![1, 2], values![2, 3]]), values![1, 3]);
    assert_eq!(
        SetOps::xor_odd(&[values![1, 2], values![2, 3], values![3, 4]]),
        values![1, 4]
    );
}

#[test]
fn test_zip_round_trip() {
    let a = values![1, 2, 3];
    let b = values!["x", "y", "z"];
    let zipped = RecombineOps::zip(&[a.clone(), b.clone()]);
    assert_eq!(RecombineOps::unzip(&zipped), vec![a, b]);
}

#[test]
fn test_search_samples() {
    assert_eq!(SearchOps::sorted_index(&values![1, 3, 5], &Value::from(4)), 2);
    assert_eq!(SearchOps::sorted_index_last(&values![1, 3, 3, 5], &Value::from(3)), 3);
}

#[test]
fn test_statistics_samples() {
    assert_eq!(NumericOps::mean(&values![1, 2, 3, "x"]), 2.0);
    assert_eq!(NumericOps::median(&values![1, 3, 2]), 2.0);
    assert_eq!(NumericOps::median(&values![1, 2, 3, 4]), 2.5);
}

#[test]
fn test_empty_boundaries_never_panic() {
    assert_eq!(AccessOps::head(&[]), None);
    assert_eq!(AccessOps::last(&[]), None);
    assert!(NumericOps::mean(&[]).is_nan());
    assert!(NumericOps::median(&[]).is_nan());
}

#[test]
fn test_drop_while_from_dynamic_values() {
    let seq = values![1, 2, 3, 4];
    let below_three = Callable::new(|args: &[Value]| {
        Value::from(args.first().map_or(f64::NAN, Value::to_number) < 3.0)
    });

    let predicate = Predicate::try_from(Value::from(below_three)).unwrap();
    assert_eq!(AccessOps::drop_while(&seq, &predicate), values![3, 4]);

    let members = Predicate::try_from(Value::from(values![1])).unwrap();
    assert_eq!(AccessOps::drop_while(&seq, &members), values![2, 3, 4]);

    let pattern = Predicate::try_from(Value::Object(Object::new())).unwrap();
    assert!(AccessOps::drop_while(&seq, &pattern).is_empty());

    let error = Predicate::try_from(Value::from(7)).unwrap_err();
    assert_eq!(
        error.to_string(),
        "invalid argument: Predicate must be a function, an object, or an array"
    );
}

#[test]
fn test_pairs_round_trip_through_objects() {
    let keys = values!["a", "b"];
    let vals = values![1, 2];
    let zipped = RecombineOps::zip(&[keys.clone(), vals.clone()]);
    let pairs: Vec<Value> = zipped.into_iter().map(Value::from).collect();

    assert_eq!(
        RecombineOps::from_pairs(&pairs),
        RecombineOps::zip_object(&keys, &vals)
    );
}

#[test]
fn test_pull_at_then_sort() {
    let seq = values![5, 1, 4, 2, 3];
    let pulled = RecombineOps::pull_at(seq, &values![0]);
    assert_eq!(OrderingOps::sort(&pulled), values![1, 2, 3, 4]);
    assert_eq!(OrderingOps::reverse_sort(&pulled), values![4, 3, 2, 1]);
}

#[test]
fn test_flatten_feeds_numeric() {
    let nested = values![1, values![2, values![3]]];
    assert_eq!(
        NumericOps::sum_flat(&nested),
        ShapingOps::flatten(&nested).iter().filter_map(Value::as_number).sum::<f64>()
    );
}

#[test]
fn test_misc_samples() {
    assert_eq!(MiscOps::repeat("a", 3), "aaaa");
    assert_eq!(MiscOps::join(&values!["a", "b"], misc::DEFAULT_SEPARATOR), "a,b");
    assert_eq!(MiscOps::times(&Value::Null, 1), None);
}
