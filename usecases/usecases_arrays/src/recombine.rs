//! Recombination Operations
//!
//! Provides operations that regroup or splice sequences:
//! - zip, unzip
//! - zip_object, from_pairs (build objects)
//! - concat
//! - pull, pull_all, pull_at (removal by value or by index)

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

use crate::shaping::ShapingOps;
use entities_data_handling::{Object, Value};
use std::collections::HashSet;

/// Recombination operations
pub struct RecombineOps;

impl RecombineOps {
    /// Group the i-th elements of every sequence
    ///
    /// Produces one group per position of the longest sequence; positions a
    /// shorter sequence lacks are `undefined`.
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::values;
    /// use usecases_arrays::recombine::RecombineOps;
    ///
    /// let zipped = RecombineOps::zip(&[values![1, 2], values![3, 4], values![5, 6]]);
    /// assert_eq!(zipped, vec![values![1, 3, 5], values![2, 4, 6]]);
    /// ```
    pub fn zip<S: AsRef<[Value]>>(seqs: &[S]) -> Vec<Vec<Value>> {
        let width = seqs.iter().map(|seq| seq.as_ref().len()).max().unwrap_or(0);
        (0..width)
            .map(|idx| {
                seqs.iter()
                    .map(|seq| seq.as_ref().get(idx).cloned().unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    /// Inverse of [`RecombineOps::zip`] for rectangular input
    ///
    /// The first row's length sets the number of output sequences. Ragged
    /// rows are outside the contract; missing cells read as `undefined`.
    pub fn unzip<R: AsRef<[Value]>>(rows: &[R]) -> Vec<Vec<Value>> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        (0..width)
            .map(|col| {
                rows.iter()
                    .map(|row| row.as_ref().get(col).cloned().unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    /// Pair `keys[i]` with `values[i]` into an object
    ///
    /// Runs to the longer of the two inputs; a missing key stringifies as
    /// `"undefined"` and a missing value is `undefined`. Later duplicate keys
    /// overwrite earlier ones.
    pub fn zip_object(keys: &[Value], values: &[Value]) -> Object {
        let width = keys.len().max(values.len());
        (0..width)
            .map(|idx| {
                let key = keys
                    .get(idx)
                    .map_or_else(|| Value::Undefined.to_key_string(), Value::to_key_string);
                (key, values.get(idx).cloned().unwrap_or_default())
            })
            .collect()
    }

    /// Build an object from `[key, value]` pairs
    ///
    /// Elements that are not arrays are skipped. Later duplicate keys
    /// overwrite earlier ones.
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::{values, Value};
    /// use usecases_arrays::recombine::RecombineOps;
    ///
    /// let object = RecombineOps::from_pairs(&values![values!["a", 1], values!["a", 2]]);
    /// assert_eq!(object.get("a"), Some(&Value::from(2)));
    /// ```
    pub fn from_pairs(seq: &[Value]) -> Object {
        seq.iter()
            .filter_map(Value::as_array)
            .map(|pair| {
                let key = pair.first().cloned().unwrap_or_default().to_key_string();
                (key, pair.get(1).cloned().unwrap_or_default())
            })
            .collect()
    }

    /// Splice array arguments in and append everything else
    pub fn concat(args: &[Value]) -> Vec<Value> {
        let mut result = Vec::new();
        for arg in args {
            match arg {
                Value::Array(items) => result.extend_from_slice(items),
                other => result.push(other.clone()),
            }
        }
        result
    }

    /// Remove every element equal to one of `values`
    pub fn pull(seq: &[Value], values: &[Value]) -> Vec<Value> {
        let removed: HashSet<&Value> = values.iter().collect();
        seq.iter()
            .filter(|item| !removed.contains(item))
            .cloned()
            .collect()
    }

    /// Same as [`RecombineOps::pull`], taking the values as one sequence
    pub fn pull_all(seq: &[Value], values: &[Value]) -> Vec<Value> {
        Self::pull(seq, values)
    }

    /// Remove the elements at the given indexes and hand the sequence back
    ///
    /// This is the one destructive operation: it consumes `seq`, removes in
    /// place and returns the same vector. Index arguments are flattened
    /// fully and removed highest first so earlier removals do not shift later
    /// ones. Duplicate, negative, fractional and out-of-range indexes are
    /// ignored.
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::values;
    /// use usecases_arrays::recombine::RecombineOps;
    ///
    /// let seq = values!["a", "b", "c", "d"];
    /// let pulled = RecombineOps::pull_at(seq, &values![1, values![3]]);
    /// assert_eq!(pulled, values!["a", "c"]);
    /// ```
    pub fn pull_at(mut seq: Vec<Value>, indexes: &[Value]) -> Vec<Value> {
        let len = seq.len();
        let mut positions: Vec<usize> = ShapingOps::flatten(indexes)
            .iter()
            .filter_map(Value::as_number)
            .filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n < len as f64)
            .map(|n| n as usize)
            .collect();
        positions.sort_unstable_by(|a, b| b.cmp(a));
        positions.dedup();
        for position in positions {
            seq.remove(position);
        }
        seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_data_handling::values;

    #[test]
    fn test_zip_uneven() {
        let zipped = RecombineOps::zip(&[values![1, 2], values!["a"]]);
        assert_eq!(zipped, vec![values![1, "a"], values![2, Value::Undefined]]);
    }

    #[test]
    fn test_zip_nothing() {
        let none: [Vec<Value>; 0] = [];
        assert!(RecombineOps::zip(&none).is_empty());
    }

    #[test]
    fn test_unzip() {
        let rows = vec![values![1, "a", true], values![2, "b", false]];
        let columns = RecombineOps::unzip(&rows);
        assert_eq!(columns, vec![values![1, 2], values!["a", "b"], values![true, false]]);
    }

    #[test]
    fn test_unzip_ragged_reads_undefined() {
        let rows = vec![values![1, 2], values![3]];
        let columns = RecombineOps::unzip(&rows);
        assert_eq!(columns[1], values![2, Value::Undefined]);
    }

    #[test]
    fn test_zip_object() {
        let object = RecombineOps::zip_object(&values!["a", "b"], &values![1, 2]);
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(object.get("b"), Some(&Value::from(2)));
    }

    #[test]
    fn test_zip_object_uneven() {
        let more_keys = RecombineOps::zip_object(&values!["a", "b"], &values![1]);
        assert_eq!(more_keys.get("b"), Some(&Value::Undefined));

        let more_values = RecombineOps::zip_object(&values!["a"], &values![1, 2]);
        assert_eq!(more_values.get("undefined"), Some(&Value::from(2)));
    }

    #[test]
    fn test_zip_object_stringifies_keys() {
        let object = RecombineOps::zip_object(&values![1, true], &values!["x", "y"]);
        assert_eq!(object.get("1"), Some(&Value::from("x")));
        assert_eq!(object.get("true"), Some(&Value::from("y")));
    }

    #[test]
    fn test_from_pairs_order_and_overwrite() {
        let object = RecombineOps::from_pairs(&values![
            values!["a", 1],
            values!["b", 2],
            values!["a", 3]
        ]);
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(object.get("a"), Some(&Value::from(3)));
    }

    #[test]
    fn test_from_pairs_short_pair_and_non_arrays() {
        let object = RecombineOps::from_pairs(&values![values!["solo"], 5, "ab"]);
        assert_eq!(object.len(), 1);
        assert_eq!(object.get("solo"), Some(&Value::Undefined));
    }

    #[test]
    fn test_concat() {
        let result = RecombineOps::concat(&values![values![1], 2, values![3, values![4]]]);
        assert_eq!(result, values![1, 2, 3, values![4]]);
    }

    #[test]
    fn test_pull() {
        let seq = values!["a", "b", "c", "a", "b", "c"];
        assert_eq!(RecombineOps::pull(&seq, &values!["a", "c"]), values!["b", "b"]);
        assert_eq!(RecombineOps::pull_all(&seq, &values!["a", "c"]), values!["b", "b"]);
    }

    #[test]
    fn test_pull_at_ignores_bad_indexes() {
        let seq = values![10, 20, 30];
        let pulled = RecombineOps::pull_at(seq, &values![1, 1, -1, 0.5, 7, "x"]);
        assert_eq!(pulled, values![10, 30]);
    }

    #[test]
    fn test_pull_at_unsorted_indexes() {
        let seq = values![0, 1, 2, 3, 4];
        let pulled = RecombineOps::pull_at(seq, &values![0, values![4, values![2]]]);
        assert_eq!(pulled, values![1, 3]);
    }
}
