//! Numeric Operations
//!
//! Provides aggregation and arithmetic over sequences:
//! - Sums over nested sequences (sum_flat)
//! - Digit concatenation (to_number)
//! - Statistics (mean, median, range, range_sorted)
//! - Elementwise arithmetic (add_arrays, subtract_arrays, mult_arrays,
//!   divide_arrays)
//! - pow, is_ascending
//!
//! Empty or non-numeric input yields `NaN` rather than panicking.

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

use crate::ordering::numeric_order;
use entities_data_handling::coercion::{leading_integer, number_to_string};
use entities_data_handling::Value;
use malachite::Integer;

/// Numeric operations
pub struct NumericOps;

impl NumericOps {
    /// Sum every number at any depth, ignoring non-numeric leaves
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::values;
    /// use usecases_arrays::numeric::NumericOps;
    ///
    /// assert_eq!(NumericOps::sum_flat(&values![1, values![2, values![3, "x"]]]), 6.0);
    /// ```
    pub fn sum_flat(seq: &[Value]) -> f64 {
        seq.iter()
            .map(|item| match item {
                Value::Number(n) => *n,
                Value::Array(inner) => Self::sum_flat(inner),
                _ => 0.0,
            })
            .sum()
    }

    /// Concatenate the string forms of the numbers and read the leading integer
    ///
    /// Non-numeric elements are ignored. The concatenation is read up to the
    /// first character that cannot continue an integer, so
    /// `[1, 2.5, 3]` reads `"12.53"` as `12`. The result is unbounded.
    /// Returns `None` when no digit leads the concatenation.
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::values;
    /// use malachite::Integer;
    /// use usecases_arrays::numeric::NumericOps;
    ///
    /// assert_eq!(NumericOps::to_number(&values![1, "a", 2, 3]), Some(Integer::from(123)));
    /// assert_eq!(NumericOps::to_number(&values!["a"]), None);
    /// ```
    pub fn to_number(seq: &[Value]) -> Option<Integer> {
        let digits: String = seq
            .iter()
            .filter_map(Value::as_number)
            .map(number_to_string)
            .collect();
        let literal = leading_integer(&digits)?;
        literal.trim_start_matches('+').parse::<Integer>().ok()
    }

    /// Arithmetic mean of the numeric elements
    ///
    /// Non-numeric elements count in neither the sum nor the divisor.
    pub fn mean(seq: &[Value]) -> f64 {
        let numbers = Self::numbers(seq);
        numbers.iter().sum::<f64>() / numbers.len() as f64
    }

    /// Middle value of the numeric elements
    ///
    /// Sorts a copy; an even count averages the two middle values.
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::values;
    /// use usecases_arrays::numeric::NumericOps;
    ///
    /// assert_eq!(NumericOps::median(&values![1, 3, 2]), 2.0);
    /// assert_eq!(NumericOps::median(&values![1, 2, 3, 4]), 2.5);
    /// assert!(NumericOps::median(&[]).is_nan());
    /// ```
    pub fn median(seq: &[Value]) -> f64 {
        let mut numbers = Self::numbers(seq);
        if numbers.is_empty() {
            return f64::NAN;
        }
        numbers.sort_by(|a, b| numeric_order(*a, *b));
        let mid = numbers.len() / 2;
        if numbers.len() % 2 == 0 {
            (numbers[mid - 1] + numbers[mid]) / 2.0
        } else {
            numbers[mid]
        }
    }

    /// Largest minus smallest numeric element
    pub fn range(seq: &[Value]) -> f64 {
        let mut numbers = Self::numbers(seq);
        numbers.sort_by(|a, b| numeric_order(*a, *b));
        match (numbers.first(), numbers.last()) {
            (Some(min), Some(max)) => max - min,
            _ => f64::NAN,
        }
    }

    /// Last minus first numeric element of an already sorted sequence
    ///
    /// The numeric elements must be sorted ascending; non-numeric elements
    /// are skipped as in [`range`](Self::range).
    pub fn range_sorted(seq: &[Value]) -> f64 {
        let numbers = Self::numbers(seq);
        match (numbers.first(), numbers.last()) {
            (Some(min), Some(max)) => max - min,
            _ => f64::NAN,
        }
    }

    /// Elementwise sum; missing positions count as 0
    pub fn add_arrays<S: AsRef<[Value]>>(seqs: &[S]) -> Vec<f64> {
        Self::fold_columns(seqs, 0.0, |acc, n| acc + n)
    }

    /// Elementwise product; missing positions count as 1
    pub fn mult_arrays<S: AsRef<[Value]>>(seqs: &[S]) -> Vec<f64> {
        Self::fold_columns(seqs, 1.0, |acc, n| acc * n)
    }

    /// Subtract every other sequence from the longest one
    ///
    /// The longest sequence (the first of equal-longest) is the base; missing
    /// positions in the others count as 0.
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::values;
    /// use usecases_arrays::numeric::NumericOps;
    ///
    /// let result = NumericOps::subtract_arrays(&[values![1], values![10, 20]]);
    /// assert_eq!(result, vec![9.0, 20.0]);
    /// ```
    pub fn subtract_arrays<S: AsRef<[Value]>>(seqs: &[S]) -> Vec<f64> {
        Self::apply_to_longest(seqs, |acc, operand| acc - operand.unwrap_or(0.0))
    }

    /// Divide the longest sequence by every other sequence
    ///
    /// Same base rule as [`NumericOps::subtract_arrays`]. Missing, zero and
    /// `NaN` divisors are skipped.
    pub fn divide_arrays<S: AsRef<[Value]>>(seqs: &[S]) -> Vec<f64> {
        Self::apply_to_longest(seqs, |acc, operand| match operand {
            Some(divisor) if divisor != 0.0 && !divisor.is_nan() => acc / divisor,
            _ => acc,
        })
    }

    /// `seq[0]` raised to `seq[1]`
    ///
    /// A missing operand is `NaN`, and so is any `NaN` exponent, including
    /// `1 ** NaN`.
    pub fn pow(seq: &[Value]) -> f64 {
        let base = seq.first().map_or(f64::NAN, Value::to_number);
        let exponent = seq.get(1).map_or(f64::NAN, Value::to_number);
        if exponent.is_nan() || (base.abs() == 1.0 && exponent.is_infinite()) {
            return f64::NAN;
        }
        base.powf(exponent)
    }

    /// Whether the sequence rises more than it falls
    ///
    /// Sums every positive step and every negative step between neighbours
    /// and returns true only when the total rise strictly exceeds the total
    /// fall. A heuristic, not a monotonicity check.
    pub fn is_ascending(seq: &[Value]) -> bool {
        let (rise, fall) = seq
            .windows(2)
            .map(|pair| pair[1].to_number() - pair[0].to_number())
            .fold((0.0, 0.0), |(rise, fall), step| {
                if step > 0.0 {
                    (rise + step, fall)
                } else if step < 0.0 {
                    (rise, fall - step)
                } else {
                    (rise, fall)
                }
            });
        rise > fall
    }

    fn numbers(seq: &[Value]) -> Vec<f64> {
        seq.iter().filter_map(Value::as_number).collect()
    }

    fn fold_columns<S, F>(seqs: &[S], identity: f64, op: F) -> Vec<f64>
    where
        S: AsRef<[Value]>,
        F: Fn(f64, f64) -> f64,
    {
        let width = seqs.iter().map(|seq| seq.as_ref().len()).max().unwrap_or(0);
        (0..width)
            .map(|idx| {
                seqs.iter().fold(identity, |acc, seq| {
                    op(acc, seq.as_ref().get(idx).map_or(identity, Value::to_number))
                })
            })
            .collect()
    }

    fn apply_to_longest<S, F>(seqs: &[S], op: F) -> Vec<f64>
    where
        S: AsRef<[Value]>,
        F: Fn(f64, Option<f64>) -> f64,
    {
        let mut base_idx = 0;
        for (idx, seq) in seqs.iter().enumerate() {
            if seq.as_ref().len() > seqs[base_idx].as_ref().len() {
                base_idx = idx;
            }
        }
        let Some(base) = seqs.get(base_idx) else {
            return Vec::new();
        };

        let mut result: Vec<f64> = base.as_ref().iter().map(Value::to_number).collect();
        for (idx, other) in seqs.iter().enumerate() {
            if idx == base_idx {
                continue;
            }
            let other = other.as_ref();
            for (pos, acc) in result.iter_mut().enumerate() {
                *acc = op(*acc, other.get(pos).map(Value::to_number));
            }
        }
        result
    }
}
