//! Set Algebra Operations
//!
//! Provides set-like operations over sequences:
//! - union, intersect, difference
//! - unique, sorted_unique
//! - xor (exactly once overall), xor_odd (odd number of sequences)
//!
//! Membership uses value equality, under which `NaN` equals `NaN`. Results
//! keep first-seen order.

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
use entities_data_handling::Value;
use std::collections::{HashMap, HashSet};

/// Set algebra operations
pub struct SetOps;

impl SetOps {
    /// Every distinct element of all sequences, in first-seen order
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::values;
    /// use usecases_arrays::sets::SetOps;
    ///
    /// assert_eq!(SetOps::union(&[values![1, 2], values![2, 3]]), values![1, 2, 3]);
    /// ```
    pub fn union<S: AsRef<[Value]>>(seqs: &[S]) -> Vec<Value> {
        Self::distinct(seqs.iter().flat_map(|seq| seq.as_ref().iter()))
    }

    /// Distinct elements present in every sequence
    ///
    /// Output follows the first sequence's order. No sequences yields an
    /// empty result.
    pub fn intersect<S: AsRef<[Value]>>(seqs: &[S]) -> Vec<Value> {
        let Some((first, rest)) = seqs.split_first() else {
            return Vec::new();
        };
        let others: Vec<HashSet<&Value>> = rest
            .iter()
            .map(|seq| seq.as_ref().iter().collect())
            .collect();
        Self::distinct(
            first
                .as_ref()
                .iter()
                .filter(|item| others.iter().all(|set| set.contains(item))),
        )
    }

    /// Elements of `seq` not present in any of `values`
    ///
    /// `values` are the excluded arguments; array arguments are flattened
    /// one level so both `difference(seq, [[1, 2]])` and
    /// `difference(seq, [1, 2])` exclude `1` and `2`.
    pub fn difference(seq: &[Value], values: &[Value]) -> Vec<Value> {
        let excluded: HashSet<Value> = ShapingOps::flatten_one(values).into_iter().collect();
        seq.iter()
            .filter(|item| !excluded.contains(*item))
            .cloned()
            .collect()
    }

    /// Drop repeated elements, keeping the first occurrence
    pub fn unique(seq: &[Value]) -> Vec<Value> {
        Self::distinct(seq.iter())
    }

    /// Drop adjacent repeated elements
    ///
    /// The input must already be sorted; on unsorted input only adjacent
    /// duplicates are removed.
    pub fn sorted_unique(seq: &[Value]) -> Vec<Value> {
        let mut result = seq.to_vec();
        result.dedup();
        result
    }

    /// Elements occurring exactly once across all sequences combined
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::values;
    /// use usecases_arrays::sets::SetOps;
    ///
    /// assert_eq!(SetOps::xor(&[values![1, 2], values![2, 3]]), values![1, 3]);
    /// ```
    pub fn xor<S: AsRef<[Value]>>(seqs: &[S]) -> Vec<Value> {
        let all = seqs.iter().flat_map(|seq| seq.as_ref().iter());
        Self::by_count(all, |count| count == 1)
    }

    /// Elements found in an odd number of the sequences
    ///
    /// Repeats within one sequence count once.
    pub fn xor_odd<S: AsRef<[Value]>>(seqs: &[S]) -> Vec<Value> {
        let per_sequence: Vec<Vec<&Value>> = seqs
            .iter()
            .map(|seq| {
                let mut seen = HashSet::new();
                seq.as_ref().iter().filter(|item| seen.insert(*item)).collect()
            })
            .collect();
        Self::by_count(per_sequence.into_iter().flatten(), |count| count % 2 == 1)
    }

    fn distinct<'a, I>(items: I) -> Vec<Value>
    where
        I: Iterator<Item = &'a Value>,
    {
        let mut seen = HashSet::new();
        items.filter(|item| seen.insert(*item)).cloned().collect()
    }

    // Counts occurrences, then keeps first-seen elements whose count passes.
    fn by_count<'a, I, F>(items: I, keep: F) -> Vec<Value>
    where
        I: Iterator<Item = &'a Value>,
        F: Fn(usize) -> bool,
    {
        let mut order: Vec<&Value> = Vec::new();
        let mut counts: HashMap<&Value, usize> = HashMap::new();
        for item in items {
            let count = counts.entry(item).or_insert(0);
            if *count == 0 {
                order.push(item);
            }
            *count += 1;
        }
        order
            .into_iter()
            .filter(|item| keep(counts[item]))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_data_handling::values;

    #[test]
    fn test_union_first_seen_order() {
        let result = SetOps::union(&[values![3, 1], values![1, 2, 3], values![4]]);
        assert_eq!(result, values![3, 1, 2, 4]);
    }

    #[test]
    fn test_union_deduplicates_within_sequence() {
        assert_eq!(SetOps::union(&[values![1, 1, 1]]), values![1]);
    }

    #[test]
    fn test_intersect() {
        let result = SetOps::intersect(&[values![1, 2, 3], values![2, 3, 4]]);
        assert_eq!(result, values![2, 3]);
    }

    #[test]
    fn test_intersect_three_and_duplicates() {
        let result = SetOps::intersect(&[values![2, 2, 1, 5], values![5, 2], values![2, 5, 9]]);
        assert_eq!(result, values![2, 5]);
    }

    #[test]
    fn test_intersect_empty_inputs() {
        let none: [Vec<Value>; 0] = [];
        assert!(SetOps::intersect(&none).is_empty());
        assert!(SetOps::intersect(&[values![1], values![]]).is_empty());
    }

    #[test]
    fn test_difference_nested_argument() {
        let result = SetOps::difference(&values![1, 0, 3], &values![values![1, 2]]);
        assert_eq!(result, values![0, 3]);
    }

    #[test]
    fn test_difference_plain_arguments() {
        let result = SetOps::difference(&values![1, 2, 3, 4], &values![2, values![4]]);
        assert_eq!(result, values![1, 3]);
    }

    #[test]
    fn test_difference_finds_nan() {
        let result = SetOps::difference(&values![f64::NAN, 1], &values![f64::NAN]);
        assert_eq!(result, values![1]);
    }

    #[test]
    fn test_unique() {
        assert_eq!(SetOps::unique(&values![1, "1", 1, 2, "1"]), values![1, "1", 2]);
    }

    #[test]
    fn test_sorted_unique() {
        assert_eq!(SetOps::sorted_unique(&values![1, 1, 2, 3, 3]), values![1, 2, 3]);
    }

    #[test]
    fn test_sorted_unique_unsorted_input_only_adjacent() {
        assert_eq!(SetOps::sorted_unique(&values![1, 2, 1]), values![1, 2, 1]);
    }

    #[test]
    fn test_xor() {
        assert_eq!(SetOps::xor(&[values![1, 2], values![2, 3]]), values![1, 3]);
    }

    #[test]
    fn test_xor_counts_repeats_within_sequence() {
        assert_eq!(SetOps::xor(&[values![1, 1, 2]]), values![2]);
    }

    #[test]
    fn test_xor_odd() {
        let result = SetOps::xor_odd(&[values![1, 2], values![2, 3], values![3, 4]]);
        assert_eq!(result, values![1, 4]);
    }

    #[test]
    fn test_xor_odd_three_sequences_share_element() {
        let result = SetOps::xor_odd(&[values![1, 1], values![1], values![1, 2]]);
        assert_eq!(result, values![1, 2]);
    }
}
