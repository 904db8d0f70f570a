//! Shaping Operations
//!
//! Provides operations that change the shape of a sequence:
//! - Splitting into fixed-size groups (chunk)
//! - Flattening nested arrays (flatten, flatten_one, flatten_depth)
//! - Removing falsey values (compact)
//! - Overwriting a range with a value (fill)
//!
//! Every operation borrows its input and returns a new sequence.

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

use crate::error::{ArrayError, ArrayResult};
use entities_data_handling::Value;
use tracing::trace;

/// Shaping operations
pub struct ShapingOps;

impl ShapingOps {
    /// Split a sequence into consecutive groups of `size`
    ///
    /// The last group holds the remainder when the length is not a multiple
    /// of `size`.
    ///
    /// # Returns
    /// * `Ok(Vec<Vec<Value>>)` - The groups, empty for an empty input
    /// * `Err(ArrayError)` - If `size` is zero
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::values;
    /// use usecases_arrays::shaping::ShapingOps;
    ///
    /// let chunks = ShapingOps::chunk(&values![1, 2, 3, 4, 5], 2).unwrap();
    /// assert_eq!(chunks, vec![values![1, 2], values![3, 4], values![5]]);
    /// ```
    pub fn chunk(seq: &[Value], size: usize) -> ArrayResult<Vec<Vec<Value>>> {
        if size == 0 {
            trace!("rejected chunk size 0");
            return Err(ArrayError::InvalidArgument(
                "Chunk size must be greater than zero".to_string(),
            ));
        }
        Ok(seq.chunks(size).map(<[Value]>::to_vec).collect())
    }

    /// Flatten every level of nesting, preserving left-to-right order
    pub fn flatten(seq: &[Value]) -> Vec<Value> {
        let mut result = Vec::new();
        Self::flatten_into(seq, usize::MAX, 1, &mut result);
        result
    }

    /// Flatten exactly one level; non-array elements pass through
    pub fn flatten_one(seq: &[Value]) -> Vec<Value> {
        Self::flatten_depth(seq, 1)
    }

    /// Flatten up to `depth` levels
    ///
    /// Arrays nested deeper than `depth` stay nested. A depth of zero copies
    /// the sequence unchanged.
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::values;
    /// use usecases_arrays::shaping::ShapingOps;
    ///
    /// let nested = values![1, values![2, values![3, values![4]]], 5];
    /// assert_eq!(
    ///     ShapingOps::flatten_depth(&nested, 2),
    ///     values![1, 2, 3, values![4], 5]
    /// );
    /// ```
    pub fn flatten_depth(seq: &[Value], depth: usize) -> Vec<Value> {
        let mut result = Vec::new();
        Self::flatten_into(seq, depth, 1, &mut result);
        result
    }

    // `level` counts the array being expanded, starting at 1.
    fn flatten_into(seq: &[Value], depth: usize, level: usize, result: &mut Vec<Value>) {
        for item in seq {
            match item {
                Value::Array(inner) if level <= depth => {
                    Self::flatten_into(inner, depth, level.saturating_add(1), result);
                }
                other => result.push(other.clone()),
            }
        }
    }

    /// Remove every falsey value
    ///
    /// Falsey values are `false`, `null`, `0`, `""`, `undefined` and `NaN`.
    /// Decisions are made in one forward pass over the input, so runs of
    /// adjacent falsey values are all removed.
    pub fn compact(seq: &[Value]) -> Vec<Value> {
        seq.iter().filter(|item| item.is_truthy()).cloned().collect()
    }

    /// Replace positions `start..=end` with `value`
    ///
    /// Both bounds are inclusive. The result has the input's length;
    /// positions outside the range keep their original value.
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::{values, Value};
    /// use usecases_arrays::shaping::ShapingOps;
    ///
    /// let filled = ShapingOps::fill(&values![1, 2, 3, 4, 5], &Value::from(5), 2, 3);
    /// assert_eq!(filled, values![1, 2, 5, 5, 5]);
    /// ```
    pub fn fill(seq: &[Value], value: &Value, start: usize, end: usize) -> Vec<Value> {
        seq.iter()
            .enumerate()
            .map(|(idx, item)| {
                if (start..=end).contains(&idx) {
                    value.clone()
                } else {
                    item.clone()
                }
            })
            .collect()
    }
}
