//! Value Module
//!
//! Provides the dynamic value every array operation consumes and produces:
//! - `Value`: undefined, null, bool, number, string, array, object, function
//! - `Callable`: a shared native closure that can travel inside a `Value`
//! - Truthiness, ToNumber, ToString and loose ordering
//!
//! Equality is structural. `NaN` equals `NaN` so that it can be found,
//! deduplicated, and hashed; `-0` equals `0`. Functions are equal only to
//! clones of themselves.

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

use crate::coercion::{number_to_string, string_to_number};
use crate::object::Object;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Signature of a native function stored in a `Value`
pub type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A callable value
///
/// Clones share the same closure; equality and hashing use that identity.
#[derive(Clone)]
pub struct Callable {
    name: Option<String>,
    func: Arc<NativeFn>,
}

impl Callable {
    /// Wrap an anonymous closure
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: None,
            func: Arc::new(func),
        }
    }

    /// Wrap a closure with a display name
    pub fn named<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            func: Arc::new(func),
        }
    }

    /// Invoke the closure
    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }

    /// Display name, if one was given
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn address(&self) -> usize {
        Arc::as_ptr(&self.func).cast::<()>() as usize
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }
}

impl Eq for Callable {}

impl Hash for Callable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Callable({name})"),
            None => write!(f, "Callable(<anonymous>)"),
        }
    }
}

/// Dynamic value
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The "absent" sentinel
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Object),
    Function(Callable),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => {
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Undefined => state.write_u8(0),
            Value::Null => state.write_u8(1),
            Value::Bool(b) => {
                state.write_u8(2);
                b.hash(state);
            }
            Value::Number(n) => {
                state.write_u8(3);
                // Keep hashing consistent with equality: one NaN, one zero.
                let canonical = if n.is_nan() {
                    f64::NAN
                } else if *n == 0.0 {
                    0.0
                } else {
                    *n
                };
                canonical.to_bits().hash(state);
            }
            Value::String(s) => {
                state.write_u8(4);
                s.hash(state);
            }
            Value::Array(items) => {
                state.write_u8(5);
                items.len().hash(state);
                for item in items {
                    item.hash(state);
                }
            }
            Value::Object(object) => {
                state.write_u8(6);
                object.hash(state);
            }
            Value::Function(callable) => {
                state.write_u8(7);
                callable.hash(state);
            }
        }
    }
}

impl Value {
    /// Check if value is the absent sentinel
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if value is null or undefined
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Check if value is a number (including NaN)
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Check if value is a string
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Check if value is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Check if value is an object
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Check if value is callable
    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Borrow the elements of an array value
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get the number held by a number value
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Borrow the text of a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the object of an object value
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Borrow the callable of a function value
    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Function(callable) => Some(callable),
            _ => None,
        }
    }

    /// Name of the value's type, as `typeof` would report it
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null | Value::Array(_) | Value::Object(_) => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Function(_) => "function",
        }
    }

    /// Check if value is falsey
    ///
    /// The falsey set is `false`, `null`, `0`, `-0`, `""`, `undefined`, `NaN`.
    pub fn is_falsey(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => *n == 0.0 || n.is_nan(),
            Value::String(s) => s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Function(_) => false,
        }
    }

    /// Check if value is truthy
    pub fn is_truthy(&self) -> bool {
        !self.is_falsey()
    }

    /// Convert to a number with loose-language ToNumber semantics
    ///
    /// # Examples
    /// ```
    /// use entities_data_handling::{values, Value};
    ///
    /// assert_eq!(Value::Null.to_number(), 0.0);
    /// assert_eq!(Value::from(" 7 ").to_number(), 7.0);
    /// assert_eq!(Value::from(values![5]).to_number(), 5.0);
    /// assert!(Value::Undefined.to_number().is_nan());
    /// ```
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::String(s) => string_to_number(s),
            Value::Array(_) => string_to_number(&self.to_string()),
            Value::Object(_) | Value::Function(_) => f64::NAN,
        }
    }

    /// Stringify for use as an object key
    pub fn to_key_string(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Read a named field
    ///
    /// Objects return the stored value, arrays and strings answer numeric
    /// indexes and `length`; everything else reads as `undefined`. String
    /// positions count UTF-16 code units.
    pub fn get_field(&self, key: &str) -> Value {
        match self {
            Value::Object(object) => object.get(key).cloned().unwrap_or_default(),
            Value::Array(items) if key == "length" => Value::from(items.len()),
            Value::Array(items) => key
                .parse::<usize>()
                .ok()
                .and_then(|idx| items.get(idx))
                .cloned()
                .unwrap_or_default(),
            Value::String(s) if key == "length" => Value::from(s.encode_utf16().count()),
            Value::String(s) => key
                .parse::<usize>()
                .ok()
                .and_then(|idx| s.encode_utf16().nth(idx))
                .map_or(Value::Undefined, |unit| {
                    Value::String(String::from_utf16_lossy(&[unit]))
                }),
            _ => Value::Undefined,
        }
    }

    /// Strict equality
    ///
    /// Same as `==` except that `NaN` is never strictly equal to anything,
    /// itself included. Used by the positional searches.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.strict_eq(y))
            }
            _ => self == other,
        }
    }

    /// Loose relational comparison
    ///
    /// Two strings compare lexicographically; any other pairing compares
    /// numerically after coercion. Returns `None` when either side is `NaN`.
    pub fn loose_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            _ => self.to_number().partial_cmp(&other.to_number()),
        }
    }
}

/// Render a value as an array element: `null` and `undefined` become empty
fn write_element(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    if value.is_nullish() {
        Ok(())
    } else {
        write!(f, "{value}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&number_to_string(*n)),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    write_element(f, item)?;
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object Object]"),
            Value::Function(callable) => match callable.name() {
                Some(name) => write!(f, "function {name}() {{ [native code] }}"),
                None => f.write_str("function () { [native code] }"),
            },
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<&[Value]> for Value {
    fn from(items: &[Value]) -> Self {
        Value::Array(items.to_vec())
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Value::Function(callable)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}
