//! Entities Layer: Data Handling
//!
//! This crate provides the value model shared by every other layer of the
//! array utilities workspace.
//!
//! ## Overview
//!
//! The `entities_data_handling` crate is the innermost layer of the CLEAN
//! architecture layout. It has no dependencies on other crates in the system.
//!
//! ## Modules
//!
//! - **[`value`](value/index.html)**: The dynamic `Value` type and `Callable`
//!   closures, with truthiness, ToNumber, ToString and loose ordering.
//!
//! - **[`object`](object/index.html)**: Insertion-ordered, string-keyed
//!   `Object` mapping with last-write-wins inserts.
//!
//! - **[`coercion`](coercion/index.html)**: Number/string conversions shared by
//!   `Value` and the numeric operations.
//!
//! ## Usage
//!
//! ```rust
//! use entities_data_handling::{values, Object, Value};
//!
//! let seq = values![1, "two", Value::Null, values![3, 4]];
//! assert_eq!(seq.len(), 4);
//! assert!(seq[2].is_falsey());
//!
//! let mut object = Object::new();
//! object.insert("a", Value::from(1));
//! assert_eq!(Value::Object(object).get_field("a"), Value::from(1));
//! ```
//!
//! ## See Also
//!
//! - [`usecases_arrays`](../usecases_arrays/index.html): Operations over sequences of values

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

pub mod coercion;
pub mod object;
pub mod value;

pub use object::Object;
pub use value::{Callable, NativeFn, Value};

/// Build a `Vec<Value>` from anything convertible into `Value`
///
/// ```
/// use entities_data_handling::{values, Value};
///
/// let seq = values![1, 2.5, "x", true, values![Value::Null]];
/// assert_eq!(seq[1], Value::Number(2.5));
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($item)),+]
    };
}
