//! Search Operations
//!
//! Provides lookups by value:
//! - Linear scans with strict equality (index_of, indexes_of, last_index_of)
//! - Binary search for insertion points in sorted input (sorted_index,
//!   sorted_index_last)
//!
//! Strict equality means `NaN` is never found by the linear scans.

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

use entities_data_handling::Value;
use std::cmp::Ordering;

/// Search operations
pub struct SearchOps;

impl SearchOps {
    /// First index at or after `from_index` holding `value`
    pub fn index_of(seq: &[Value], value: &Value, from_index: usize) -> Option<usize> {
        seq.iter()
            .enumerate()
            .skip(from_index)
            .find(|(_, item)| item.strict_eq(value))
            .map(|(idx, _)| idx)
    }

    /// Every index at or after `from_index` holding `value`, ascending
    pub fn indexes_of(seq: &[Value], value: &Value, from_index: usize) -> Vec<usize> {
        seq.iter()
            .enumerate()
            .skip(from_index)
            .filter(|(_, item)| item.strict_eq(value))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Last index at or before `from_index` holding `value`
    ///
    /// `from_index` defaults to the last position and is clamped to it. The
    /// scan runs down to index 0 inclusive.
    pub fn last_index_of(seq: &[Value], value: &Value, from_index: Option<usize>) -> Option<usize> {
        let last = seq.len().checked_sub(1)?;
        let start = from_index.map_or(last, |from| from.min(last));
        (0..=start).rev().find(|&idx| seq[idx].strict_eq(value))
    }

    /// Leftmost insertion point for `value` in a sorted sequence
    ///
    /// Returns the first position whose element is not less than `value`.
    /// The input must already be sorted ascending; the result is meaningless
    /// otherwise. Runs in O(log n).
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::{values, Value};
    /// use usecases_arrays::search::SearchOps;
    ///
    /// assert_eq!(SearchOps::sorted_index(&values![1, 3, 5], &Value::from(4)), 2);
    /// ```
    pub fn sorted_index(seq: &[Value], value: &Value) -> usize {
        Self::insertion_point(seq, |item| item.loose_cmp(value) == Some(Ordering::Less))
    }

    /// Rightmost insertion point for `value` in a sorted sequence
    ///
    /// Returns the first position whose element is greater than `value`.
    /// Same precondition as [`SearchOps::sorted_index`].
    pub fn sorted_index_last(seq: &[Value], value: &Value) -> usize {
        Self::insertion_point(seq, |item| {
            matches!(item.loose_cmp(value), Some(Ordering::Less | Ordering::Equal))
        })
    }

    // First index where `before` stops holding.
    fn insertion_point<F>(seq: &[Value], before: F) -> usize
    where
        F: Fn(&Value) -> bool,
    {
        let (mut low, mut high) = (0, seq.len());
        while low < high {
            let mid = low + (high - low) / 2;
            if before(&seq[mid]) {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_data_handling::values;

    #[test]
    fn test_index_of_found() {
        let seq = values![1, 2, 1, 2];
        assert_eq!(SearchOps::index_of(&seq, &Value::from(2), 0), Some(1));
        assert_eq!(SearchOps::index_of(&seq, &Value::from(2), 2), Some(3));
    }

    #[test]
    fn test_index_of_missing() {
        let seq = values![1, 2];
        assert_eq!(SearchOps::index_of(&seq, &Value::from(3), 0), None);
        assert_eq!(SearchOps::index_of(&seq, &Value::from(1), 5), None);
    }

    #[test]
    fn test_index_of_strict() {
        let seq = values!["1", f64::NAN];
        assert_eq!(SearchOps::index_of(&seq, &Value::from(1), 0), None);
        assert_eq!(SearchOps::index_of(&seq, &Value::from(f64::NAN), 0), None);
    }

    #[test]
    fn test_indexes_of() {
        let seq = values!["a", "b", "a", "a"];
        assert_eq!(SearchOps::indexes_of(&seq, &Value::from("a"), 0), vec![0, 2, 3]);
        assert_eq!(SearchOps::indexes_of(&seq, &Value::from("a"), 1), vec![2, 3]);
        assert!(SearchOps::indexes_of(&seq, &Value::from("z"), 0).is_empty());
    }

    #[test]
    fn test_last_index_of_reaches_zero() {
        let seq = values![7, 1, 2];
        assert_eq!(SearchOps::last_index_of(&seq, &Value::from(7), None), Some(0));
    }

    #[test]
    fn test_last_index_of_from_index() {
        let seq = values![1, 2, 1, 2];
        assert_eq!(SearchOps::last_index_of(&seq, &Value::from(2), None), Some(3));
        assert_eq!(SearchOps::last_index_of(&seq, &Value::from(2), Some(2)), Some(1));
        assert_eq!(SearchOps::last_index_of(&seq, &Value::from(2), Some(99)), Some(3));
    }

    #[test]
    fn test_last_index_of_empty() {
        assert_eq!(SearchOps::last_index_of(&[], &Value::from(1), None), None);
    }

    #[test]
    fn test_sorted_index() {
        let seq = values![1, 3, 5];
        assert_eq!(SearchOps::sorted_index(&seq, &Value::from(4)), 2);
        assert_eq!(SearchOps::sorted_index(&seq, &Value::from(0)), 0);
        assert_eq!(SearchOps::sorted_index(&seq, &Value::from(9)), 3);
        assert_eq!(SearchOps::sorted_index(&[], &Value::from(1)), 0);
    }

    #[test]
    fn test_sorted_index_duplicates() {
        let seq = values![1, 3, 3, 5];
        assert_eq!(SearchOps::sorted_index(&seq, &Value::from(3)), 1);
        assert_eq!(SearchOps::sorted_index_last(&seq, &Value::from(3)), 3);
    }

    #[test]
    fn test_sorted_index_strings() {
        let seq = values!["apple", "cherry"];
        assert_eq!(SearchOps::sorted_index(&seq, &Value::from("banana")), 1);
    }
}
