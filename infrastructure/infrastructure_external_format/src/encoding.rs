//! Encoding Module
//!
//! Converts values to JSON text. Values that JSON cannot express follow the
//! usual stringify conventions: `undefined` and functions drop out of objects,
//! become `null` inside arrays, and are rejected at the top level.

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
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Largest magnitude still written as a JSON integer
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Errors that can occur while encoding a value
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The value has no JSON form
    #[error("value of type {0} cannot be encoded as JSON")]
    Unsupported(&'static str),
    /// serde_json failed
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Borrowed view of a value that serializes with JSON conventions
#[derive(Debug, Clone, Copy)]
pub struct JsonValue<'a>(pub &'a Value);

impl Serialize for JsonValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serialize_number(*n, serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    if item.is_function() {
                        seq.serialize_element(&())?;
                    } else {
                        seq.serialize_element(&JsonValue(item))?;
                    }
                }
                seq.end()
            }
            Value::Object(object) => {
                let mut map = serializer.serialize_map(None)?;
                for (key, value) in object.iter() {
                    if value.is_undefined() || value.is_function() {
                        continue;
                    }
                    map.serialize_entry(key, &JsonValue(value))?;
                }
                map.end()
            }
            Value::Function(_) => Err(S::Error::custom("functions cannot be encoded as JSON")),
        }
    }
}

fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !n.is_finite() {
        return serializer.serialize_unit();
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        // -0 lands here and is written as 0
        return serializer.serialize_i64(n as i64);
    }
    serializer.serialize_f64(n)
}

/// Encode a value as compact JSON text
///
/// # Examples
/// ```
/// use entities_data_handling::{values, Value};
/// use infrastructure_external_format::encode_value;
///
/// let text = encode_value(&Value::from(values![1, 2.5, "x", Value::Null])).unwrap();
/// assert_eq!(text, r#"[1,2.5,"x",null]"#);
/// ```
pub fn encode_value(value: &Value) -> Result<String, EncodeError> {
    check_top_level(value)?;
    Ok(serde_json::to_string(&JsonValue(value))?)
}

fn check_top_level(value: &Value) -> Result<(), EncodeError> {
    match value {
        Value::Undefined | Value::Function(_) => Err(EncodeError::Unsupported(value.type_name())),
        _ => Ok(()),
    }
}
