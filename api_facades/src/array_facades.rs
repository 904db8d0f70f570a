//! Array Facades
//!
//! One function per array operation, with default arguments applied.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 *
 * Creation productivity increased for code in this file by using AALang and GAB.
 * See https://github.com/yenrab/AALang-Gab
 */

use entities_data_handling::{Object, Value};
use malachite::Integer;
use usecases_arrays::misc::DEFAULT_SEPARATOR;
use usecases_arrays::{
    AccessOps, ArrayResult, MiscOps, NumericOps, OrderingOps, Predicate, RecombineOps, SearchOps,
    SetOps, ShapingOps,
};

/// Default group size for [`chunk`]
pub const DEFAULT_CHUNK_SIZE: usize = 1;
/// Default count for the take/drop family and [`times`]
pub const DEFAULT_COUNT: usize = 1;

// ---------------------------------------------------------------------------
// Partitioning / shaping
// ---------------------------------------------------------------------------

/// Split into groups of `size` (default 1)
///
/// # Examples
/// ```
/// use api_facades::{chunk, values};
///
/// let groups = chunk(&values![1, 2, 3], Some(2)).unwrap();
/// assert_eq!(groups, vec![values![1, 2], values![3]]);
/// assert!(chunk(&values![1], Some(0)).is_err());
/// ```
pub fn chunk(seq: &[Value], size: Option<usize>) -> ArrayResult<Vec<Vec<Value>>> {
    ShapingOps::chunk(seq, size.unwrap_or(DEFAULT_CHUNK_SIZE))
}

pub fn flatten(seq: &[Value]) -> Vec<Value> {
    ShapingOps::flatten(seq)
}

pub fn flatten_one(seq: &[Value]) -> Vec<Value> {
    ShapingOps::flatten_one(seq)
}

pub fn flatten_depth(seq: &[Value], depth: usize) -> Vec<Value> {
    ShapingOps::flatten_depth(seq, depth)
}

pub fn compact(seq: &[Value]) -> Vec<Value> {
    ShapingOps::compact(seq)
}

/// Replace positions `start..=end` with `value`
///
/// `start` defaults to 0 and `end` to the sequence length.
pub fn fill(seq: &[Value], value: &Value, start: Option<usize>, end: Option<usize>) -> Vec<Value> {
    ShapingOps::fill(seq, value, start.unwrap_or(0), end.unwrap_or(seq.len()))
}

// ---------------------------------------------------------------------------
// Positional access
// ---------------------------------------------------------------------------

/// First element; `None` for an absent or empty sequence
pub fn head(seq: Option<&[Value]>) -> Option<Value> {
    seq.and_then(AccessOps::head)
}

/// Alias of [`head`]
pub fn first(seq: Option<&[Value]>) -> Option<Value> {
    head(seq)
}

/// Last element; `None` for an absent or empty sequence
pub fn last(seq: Option<&[Value]>) -> Option<Value> {
    seq.and_then(AccessOps::last)
}

/// Element at `n` (default 0); negative `n` counts from the end
pub fn nth(seq: &[Value], n: Option<i64>) -> Option<Value> {
    AccessOps::nth(seq, n.unwrap_or(0))
}

pub fn initial(seq: &[Value]) -> Vec<Value> {
    AccessOps::initial(seq)
}

/// All but the first element; `None` for an absent sequence
pub fn tail(seq: Option<&[Value]>) -> Option<Vec<Value>> {
    seq.map(AccessOps::tail)
}

pub fn take(seq: &[Value], n: Option<usize>) -> Vec<Value> {
    AccessOps::take(seq, n.unwrap_or(DEFAULT_COUNT))
}

pub fn take_right(seq: &[Value], n: Option<usize>) -> Vec<Value> {
    AccessOps::take_right(seq, n.unwrap_or(DEFAULT_COUNT))
}

pub fn drop(seq: &[Value], n: Option<usize>) -> Vec<Value> {
    AccessOps::drop(seq, n.unwrap_or(DEFAULT_COUNT))
}

pub fn drop_right(seq: &[Value], n: Option<usize>) -> Vec<Value> {
    AccessOps::drop_right(seq, n.unwrap_or(DEFAULT_COUNT))
}

/// Drop leading elements while `predicate` holds
///
/// `predicate` may be a function, a partial-match object, or an array of
/// allowed values. Anything else is an invalid argument.
///
/// # Examples
/// ```
/// use api_facades::{drop_while, values, Value};
///
/// let rest = drop_while(&values![1, 1, 2, 1], &Value::from(values![1])).unwrap();
/// assert_eq!(rest, values![2, 1]);
/// assert!(drop_while(&values![1], &Value::from("nope")).is_err());
/// ```
pub fn drop_while(seq: &[Value], predicate: &Value) -> ArrayResult<Vec<Value>> {
    let predicate = Predicate::try_from(predicate)?;
    Ok(AccessOps::drop_while(seq, &predicate))
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

pub fn index_of(seq: &[Value], value: &Value, from_index: Option<usize>) -> Option<usize> {
    SearchOps::index_of(seq, value, from_index.unwrap_or(0))
}

pub fn indexes_of(seq: &[Value], value: &Value, from_index: Option<usize>) -> Vec<usize> {
    SearchOps::indexes_of(seq, value, from_index.unwrap_or(0))
}

/// Scan right to left from `from_index` (default: the last index)
pub fn last_index_of(seq: &[Value], value: &Value, from_index: Option<usize>) -> Option<usize> {
    SearchOps::last_index_of(seq, value, from_index)
}

pub fn sorted_index(seq: &[Value], value: &Value) -> usize {
    SearchOps::sorted_index(seq, value)
}

pub fn sorted_index_last(seq: &[Value], value: &Value) -> usize {
    SearchOps::sorted_index_last(seq, value)
}

// ---------------------------------------------------------------------------
// Set algebra
// ---------------------------------------------------------------------------

pub fn union<S: AsRef<[Value]>>(seqs: &[S]) -> Vec<Value> {
    SetOps::union(seqs)
}

pub fn intersect<S: AsRef<[Value]>>(seqs: &[S]) -> Vec<Value> {
    SetOps::intersect(seqs)
}

pub fn difference(seq: &[Value], values: &[Value]) -> Vec<Value> {
    SetOps::difference(seq, values)
}

pub fn unique(seq: &[Value]) -> Vec<Value> {
    SetOps::unique(seq)
}

/// Drop adjacent duplicates; the input must already be sorted
pub fn sorted_unique(seq: &[Value]) -> Vec<Value> {
    SetOps::sorted_unique(seq)
}

pub fn xor<S: AsRef<[Value]>>(seqs: &[S]) -> Vec<Value> {
    SetOps::xor(seqs)
}

pub fn xor_odd<S: AsRef<[Value]>>(seqs: &[S]) -> Vec<Value> {
    SetOps::xor_odd(seqs)
}

// ---------------------------------------------------------------------------
// Recombination
// ---------------------------------------------------------------------------

pub fn zip<S: AsRef<[Value]>>(seqs: &[S]) -> Vec<Vec<Value>> {
    RecombineOps::zip(seqs)
}

pub fn unzip<R: AsRef<[Value]>>(rows: &[R]) -> Vec<Vec<Value>> {
    RecombineOps::unzip(rows)
}

pub fn zip_object(keys: &[Value], values: &[Value]) -> Object {
    RecombineOps::zip_object(keys, values)
}

pub fn from_pairs(seq: &[Value]) -> Object {
    RecombineOps::from_pairs(seq)
}

pub fn concat(args: &[Value]) -> Vec<Value> {
    RecombineOps::concat(args)
}

pub fn pull(seq: &[Value], values: &[Value]) -> Vec<Value> {
    RecombineOps::pull(seq, values)
}

pub fn pull_all(seq: &[Value], values: &[Value]) -> Vec<Value> {
    RecombineOps::pull_all(seq, values)
}

/// Remove the elements at `indexes`, returning the same vector
pub fn pull_at(seq: Vec<Value>, indexes: &[Value]) -> Vec<Value> {
    RecombineOps::pull_at(seq, indexes)
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

pub fn sort(seq: &[Value]) -> Vec<Value> {
    OrderingOps::sort(seq)
}

pub fn reverse_sort(seq: &[Value]) -> Vec<Value> {
    OrderingOps::reverse_sort(seq)
}

/// Keep elements that continue the run; ascending by default
pub fn stalin(seq: &[Value], ascending: Option<bool>) -> Vec<Value> {
    OrderingOps::stalin(seq, ascending.unwrap_or(true))
}

// ---------------------------------------------------------------------------
// Aggregation / numeric
// ---------------------------------------------------------------------------

/// Alias of [`sum_flat`]
pub fn sum_array(seq: &[Value]) -> f64 {
    sum_flat(seq)
}

pub fn sum_flat(seq: &[Value]) -> f64 {
    NumericOps::sum_flat(seq)
}

pub fn to_number(seq: &[Value]) -> Option<Integer> {
    NumericOps::to_number(seq)
}

pub fn mean(seq: &[Value]) -> f64 {
    NumericOps::mean(seq)
}

pub fn median(seq: &[Value]) -> f64 {
    NumericOps::median(seq)
}

pub fn range(seq: &[Value]) -> f64 {
    NumericOps::range(seq)
}

pub fn range_sorted(seq: &[Value]) -> f64 {
    NumericOps::range_sorted(seq)
}

pub fn add_arrays<S: AsRef<[Value]>>(seqs: &[S]) -> Vec<f64> {
    NumericOps::add_arrays(seqs)
}

pub fn subtract_arrays<S: AsRef<[Value]>>(seqs: &[S]) -> Vec<f64> {
    NumericOps::subtract_arrays(seqs)
}

pub fn mult_arrays<S: AsRef<[Value]>>(seqs: &[S]) -> Vec<f64> {
    NumericOps::mult_arrays(seqs)
}

pub fn divide_arrays<S: AsRef<[Value]>>(seqs: &[S]) -> Vec<f64> {
    NumericOps::divide_arrays(seqs)
}

pub fn pow(seq: &[Value]) -> f64 {
    NumericOps::pow(seq)
}

pub fn is_ascending(seq: &[Value]) -> bool {
    NumericOps::is_ascending(seq)
}

// ---------------------------------------------------------------------------
// Misc
// ---------------------------------------------------------------------------

pub fn array(values: &[Value]) -> Vec<Value> {
    MiscOps::array(values)
}

/// Join with `separator` (default `","`); an absent sequence joins to `""`
pub fn join(seq: Option<&[Value]>, separator: Option<&str>) -> String {
    seq.map_or_else(String::new, |seq| {
        MiscOps::join(seq, separator.unwrap_or(DEFAULT_SEPARATOR))
    })
}

/// `s` (default `""`) followed by `n` more copies
pub fn repeat(s: Option<&str>, n: usize) -> String {
    MiscOps::repeat(s.unwrap_or_default(), n)
}

/// Call `callback` `n` times (default 1); `None` if it is not a function
pub fn times(callback: &Value, n: Option<usize>) -> Option<Vec<Value>> {
    MiscOps::times(callback, n.unwrap_or(DEFAULT_COUNT))
}

pub fn is_array(value: &Value) -> bool {
    MiscOps::is_array(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_data_handling::{values, Callable};

    #[test]
    fn test_chunk_default_size() {
        let groups = chunk(&values![1, 2], None).unwrap();
        assert_eq!(groups, vec![values![1], values![2]]);
    }

    #[test]
    fn test_fill_defaults_cover_everything() {
        assert_eq!(fill(&values![1, 2, 3], &Value::from(0), None, None), values![0, 0, 0]);
        assert_eq!(
            fill(&values![1, 2, 3], &Value::from(0), Some(1), None),
            values![1, 0, 0]
        );
    }

    #[test]
    fn test_head_last_tail_absent() {
        assert_eq!(head(None), None);
        assert_eq!(first(Some(&[] as &[Value])), None);
        assert_eq!(last(None), None);
        assert_eq!(last(Some(&[] as &[Value])), None);
        assert_eq!(tail(None), None);
        assert_eq!(tail(Some(values![1, 2].as_slice())), Some(values![2]));
    }

    #[test]
    fn test_nth_default_and_negative() {
        let seq = values!["a", "b", "c"];
        assert_eq!(nth(&seq, None), Some(Value::from("a")));
        assert_eq!(nth(&seq, Some(-1)), Some(Value::from("c")));
    }

    #[test]
    fn test_take_drop_defaults() {
        let seq = values![1, 2, 3];
        assert_eq!(take(&seq, None), values![1]);
        assert_eq!(take_right(&seq, None), values![3]);
        assert_eq!(drop(&seq, None), values![2, 3]);
        assert_eq!(drop_right(&seq, None), values![1, 2]);
        assert_eq!(seq, values![1, 2, 3]);
    }

    #[test]
    fn test_drop_while_function_predicate() {
        let small = Callable::new(|args: &[Value]| Value::from(args[0].to_number() < 2.0));
        assert_eq!(
            drop_while(&values![0, 1, 2, 0], &Value::from(small)).unwrap(),
            values![2, 0]
        );
    }

    #[test]
    fn test_index_defaults() {
        let seq = values![1, 2, 1];
        assert_eq!(index_of(&seq, &Value::from(1), None), Some(0));
        assert_eq!(indexes_of(&seq, &Value::from(1), None), vec![0, 2]);
        assert_eq!(last_index_of(&seq, &Value::from(1), None), Some(2));
    }

    #[test]
    fn test_stalin_default_ascending() {
        assert_eq!(stalin(&values![1, 3, 2, 4], None), values![1, 3, 4]);
        assert_eq!(stalin(&values![4, 5, 2, 1], Some(false)), values![4, 2, 1]);
    }

    #[test]
    fn test_sum_array_alias() {
        let nested = values![1, values![2, "x"], 3];
        assert_eq!(sum_array(&nested), 6.0);
        assert_eq!(sum_array(&nested), sum_flat(&nested));
    }

    #[test]
    fn test_join_defaults() {
        assert_eq!(join(None, None), "");
        assert_eq!(join(Some(values![1, 2].as_slice()), None), "1,2");
        assert_eq!(join(Some(values![1, 2].as_slice()), Some(" ")), "1 2");
    }

    #[test]
    fn test_repeat_and_times_defaults() {
        assert_eq!(repeat(None, 3), "");
        assert_eq!(repeat(Some("ab"), 1), "abab");
        let one = Callable::new(|_: &[Value]| Value::from(1));
        assert_eq!(times(&Value::from(one), None), Some(values![1]));
        assert_eq!(times(&Value::from(3), None), None);
    }

    #[test]
    fn test_to_number() {
        assert_eq!(to_number(&values![1, "x", 2, 3]), Some(Integer::from(123)));
        assert_eq!(to_number(&values!["x"]), None);
    }
}
