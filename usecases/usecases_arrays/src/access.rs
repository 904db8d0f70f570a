//! Positional Access Operations
//!
//! Provides reads by position:
//! - Single elements (head/first, last, nth)
//! - Slices from either end (initial, tail, take, take_right, drop, drop_right)
//! - Predicate-driven dropping (drop_while)
//!
//! All reads are non-destructive; counts larger than the sequence saturate.

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

use crate::predicate::Predicate;
use entities_data_handling::Value;

/// Positional access operations
pub struct AccessOps;

impl AccessOps {
    /// First element, or `None` for an empty sequence
    pub fn head(seq: &[Value]) -> Option<Value> {
        seq.first().cloned()
    }

    /// Alias of [`AccessOps::head`]
    pub fn first(seq: &[Value]) -> Option<Value> {
        Self::head(seq)
    }

    /// Last element, or `None` for an empty sequence
    pub fn last(seq: &[Value]) -> Option<Value> {
        seq.last().cloned()
    }

    /// Element at `n`; negative `n` counts from the end
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::{values, Value};
    /// use usecases_arrays::access::AccessOps;
    ///
    /// let seq = values!["a", "b", "c"];
    /// assert_eq!(AccessOps::nth(&seq, 1), Some(Value::from("b")));
    /// assert_eq!(AccessOps::nth(&seq, -1), Some(Value::from("c")));
    /// assert_eq!(AccessOps::nth(&seq, 3), None);
    /// ```
    pub fn nth(seq: &[Value], n: i64) -> Option<Value> {
        let index = if n >= 0 {
            usize::try_from(n).ok()?
        } else {
            let back = usize::try_from(n.unsigned_abs()).ok()?;
            seq.len().checked_sub(back)?
        };
        seq.get(index).cloned()
    }

    /// All but the last element
    pub fn initial(seq: &[Value]) -> Vec<Value> {
        Self::drop_right(seq, 1)
    }

    /// All but the first element
    pub fn tail(seq: &[Value]) -> Vec<Value> {
        Self::drop(seq, 1)
    }

    /// The first `n` elements
    pub fn take(seq: &[Value], n: usize) -> Vec<Value> {
        seq[..n.min(seq.len())].to_vec()
    }

    /// The last `n` elements
    pub fn take_right(seq: &[Value], n: usize) -> Vec<Value> {
        seq[seq.len().saturating_sub(n)..].to_vec()
    }

    /// Everything after the first `n` elements
    pub fn drop(seq: &[Value], n: usize) -> Vec<Value> {
        seq[n.min(seq.len())..].to_vec()
    }

    /// Everything before the last `n` elements
    pub fn drop_right(seq: &[Value], n: usize) -> Vec<Value> {
        seq[..seq.len().saturating_sub(n)].to_vec()
    }

    /// Drop leading elements while the predicate holds
    ///
    /// Returns the suffix starting at the first element for which the
    /// predicate is false, or an empty sequence if it holds for all of them.
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::{values, Value};
    /// use usecases_arrays::access::AccessOps;
    /// use usecases_arrays::predicate::Predicate;
    ///
    /// let seq = values![1, 2, 3, 1];
    /// let below_three = Predicate::test(|item, _, _| item.to_number() < 3.0);
    /// assert_eq!(AccessOps::drop_while(&seq, &below_three), values![3, 1]);
    ///
    /// let members = Predicate::OneOf(values![1, 2]);
    /// assert_eq!(AccessOps::drop_while(&seq, &members), values![3, 1]);
    /// ```
    pub fn drop_while(seq: &[Value], predicate: &Predicate) -> Vec<Value> {
        let drop_index = seq
            .iter()
            .enumerate()
            .position(|(idx, item)| !predicate.evaluate(item, idx, seq))
            .unwrap_or(seq.len());
        seq[drop_index..].to_vec()
    }
}
