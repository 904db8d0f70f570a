//! Miscellaneous Operations
//!
//! Provides the small helpers that do not fit another group: the variadic
//! array constructor, join, repeat, times and the array type check.

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
use tracing::trace;

/// Default separator for [`MiscOps::join`]
pub const DEFAULT_SEPARATOR: &str = ",";

/// Miscellaneous operations
pub struct MiscOps;

impl MiscOps {
    /// Collect the given values into a new sequence
    pub fn array(values: &[Value]) -> Vec<Value> {
        values.to_vec()
    }

    /// Join the string forms of the elements with `separator`
    ///
    /// `null` and `undefined` elements contribute an empty string.
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::{values, Value};
    /// use usecases_arrays::misc::MiscOps;
    ///
    /// assert_eq!(MiscOps::join(&values!["a", 1, Value::Null, 2.5], "-"), "a-1--2.5");
    /// ```
    pub fn join(seq: &[Value], separator: &str) -> String {
        seq.iter()
            .map(|item| {
                if item.is_nullish() {
                    String::new()
                } else {
                    item.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// The string followed by `n` more copies of itself
    ///
    /// The result holds `n + 1` copies: `repeat("ab", 2)` is `"ababab"`.
    pub fn repeat(s: &str, n: usize) -> String {
        s.repeat(n.saturating_add(1))
    }

    /// Call `callback` `n` times with no arguments
    ///
    /// Returns the results of every call, or `None` if `callback` is not a
    /// function.
    pub fn times(callback: &Value, n: usize) -> Option<Vec<Value>> {
        let Some(callable) = callback.as_callable() else {
            trace!(kind = callback.type_name(), "times called with a non-function");
            return None;
        };
        Some((0..n).map(|_| callable.call(&[])).collect())
    }

    /// Whether the value is an array
    pub fn is_array(value: &Value) -> bool {
        value.is_array()
    }
}
