//! Ordering Operations
//!
//! Provides numeric sorting and the lossy single-pass "stalin" sort.

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

/// Total order over numbers: `NaN` after every other number
pub(crate) fn numeric_order(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Ordering operations
pub struct OrderingOps;

impl OrderingOps {
    /// Sort ascending by numeric value
    ///
    /// Only meaningful for numeric elements; others compare by their numeric
    /// coercion, and anything coercing to `NaN` ends up last. The sort is
    /// stable and returns a new sequence.
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::values;
    /// use usecases_arrays::ordering::OrderingOps;
    ///
    /// assert_eq!(OrderingOps::sort(&values![10, 9, 1, 100]), values![1, 9, 10, 100]);
    /// ```
    pub fn sort(seq: &[Value]) -> Vec<Value> {
        let mut result = seq.to_vec();
        result.sort_by(|a, b| numeric_order(a.to_number(), b.to_number()));
        result
    }

    /// Sort descending by numeric value (the exact reverse of [`OrderingOps::sort`])
    pub fn reverse_sort(seq: &[Value]) -> Vec<Value> {
        let mut result = seq.to_vec();
        result.sort_by(|a, b| numeric_order(b.to_number(), a.to_number()));
        result
    }

    /// Keep only elements that continue the run of kept elements
    ///
    /// One left-to-right pass: an element is kept when it is not below
    /// (ascending) or not above (descending) the last kept element. Dropped
    /// elements never come back, so this is lossy and not a true sort.
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::values;
    /// use usecases_arrays::ordering::OrderingOps;
    ///
    /// let seq = values![1, 2, 5, 3, 4, 6];
    /// assert_eq!(OrderingOps::stalin(&seq, true), values![1, 2, 5, 6]);
    /// ```
    pub fn stalin(seq: &[Value], ascending: bool) -> Vec<Value> {
        let mut kept: Vec<Value> = Vec::new();
        for item in seq {
            let keep = match kept.last() {
                None => true,
                Some(last) => match item.loose_cmp(last) {
                    Some(Ordering::Equal) => true,
                    Some(Ordering::Greater) => ascending,
                    Some(Ordering::Less) => !ascending,
                    None => false,
                },
            };
            if keep {
                kept.push(item.clone());
            }
        }
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_data_handling::values;

    #[test]
    fn test_sort_numeric_not_lexicographic() {
        assert_eq!(OrderingOps::sort(&values![10, 2, 1]), values![1, 2, 10]);
    }

    #[test]
    fn test_sort_leaves_input() {
        let seq = values![3, 1, 2];
        let _ = OrderingOps::sort(&seq);
        assert_eq!(seq, values![3, 1, 2]);
    }

    #[test]
    fn test_sort_nan_last() {
        let sorted = OrderingOps::sort(&values![f64::NAN, 2, -1]);
        assert_eq!(sorted, values![-1, 2, f64::NAN]);
    }

    #[test]
    fn test_sort_coerces_strings() {
        assert_eq!(OrderingOps::sort(&values!["10", 9]), values![9, "10"]);
    }

    #[test]
    fn test_reverse_sort() {
        assert_eq!(OrderingOps::reverse_sort(&values![1, 10, 2]), values![10, 2, 1]);
    }

    #[test]
    fn test_stalin_descending() {
        let seq = values![5, 6, 4, 4, 1, 3];
        assert_eq!(OrderingOps::stalin(&seq, false), values![5, 4, 4, 1]);
    }

    #[test]
    fn test_stalin_compares_to_last_kept() {
        // 3 is dropped; 4 is compared with 5, not with 3
        let seq = values![1, 5, 3, 4, 7];
        assert_eq!(OrderingOps::stalin(&seq, true), values![1, 5, 7]);
    }

    #[test]
    fn test_stalin_empty() {
        assert!(OrderingOps::stalin(&[], true).is_empty());
    }

    #[test]
    fn test_numeric_order_is_total() {
        assert_eq!(numeric_order(f64::NAN, f64::NAN), Ordering::Equal);
        assert_eq!(numeric_order(f64::NAN, f64::INFINITY), Ordering::Greater);
        assert_eq!(numeric_order(-0.0, 0.0), Ordering::Equal);
    }
}
