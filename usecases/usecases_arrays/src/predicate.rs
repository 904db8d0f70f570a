//! Predicates
//!
//! The three predicate shapes accepted by `drop_while`:
//! - a test function `(element, index, sequence) -> bool`
//! - a partial-match object (every key must equal the element's field)
//! - a membership list (the element must be one of the listed values)
//!
//! Dynamic values convert with `Predicate::try_from`, which rejects any
//! other kind of value with `ArrayError::InvalidArgument`.

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

use crate::error::ArrayError;
use entities_data_handling::{Object, Value};
use std::fmt;
use tracing::trace;

/// Signature of a predicate test function
pub type PredicateFn = dyn Fn(&Value, usize, &[Value]) -> bool + Send + Sync;

/// Predicate accepted by `drop_while`
pub enum Predicate {
    /// Test function receiving the element, its index and the whole sequence
    Test(Box<PredicateFn>),
    /// Partial match: every key of the object equals the element's field
    Matches(Object),
    /// Membership: the element is one of these values
    OneOf(Vec<Value>),
}

impl Predicate {
    /// Build a test predicate from a closure
    pub fn test<F>(func: F) -> Self
    where
        F: Fn(&Value, usize, &[Value]) -> bool + Send + Sync + 'static,
    {
        Predicate::Test(Box::new(func))
    }

    /// Evaluate the predicate for `item` at `index` of `seq`
    pub fn evaluate(&self, item: &Value, index: usize, seq: &[Value]) -> bool {
        match self {
            Predicate::Test(func) => func(item, index, seq),
            Predicate::Matches(pattern) => match item.as_object() {
                Some(object) => object.matches(pattern),
                None => pattern
                    .iter()
                    .all(|(key, expected)| item.get_field(key) == *expected),
            },
            Predicate::OneOf(allowed) => allowed.contains(item),
        }
    }
}

impl TryFrom<&Value> for Predicate {
    type Error = ArrayError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Function(callable) => {
                let callable = callable.clone();
                Ok(Predicate::test(move |item, index, seq| {
                    callable
                        .call(&[item.clone(), Value::from(index), Value::from(seq)])
                        .is_truthy()
                }))
            }
            Value::Object(pattern) => Ok(Predicate::Matches(pattern.clone())),
            Value::Array(allowed) => Ok(Predicate::OneOf(allowed.clone())),
            other => {
                trace!(kind = other.type_name(), "rejected predicate");
                Err(ArrayError::InvalidArgument(
                    "Predicate must be a function, an object, or an array".to_string(),
                ))
            }
        }
    }
}

impl TryFrom<Value> for Predicate {
    type Error = ArrayError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Predicate::try_from(&value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Test(_) => f.write_str("Predicate::Test(<fn>)"),
            Predicate::Matches(pattern) => {
                f.debug_tuple("Predicate::Matches").field(pattern).finish()
            }
            Predicate::OneOf(allowed) => {
                f.debug_tuple("Predicate::OneOf").field(allowed).finish()
            }
        }
    }
}
