//! Decoding Module
//!
//! Parses JSON text into values. Object key order is kept as written.

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

use entities_data_handling::{Object, Value};
use thiserror::Error;

/// Errors that can occur while decoding JSON text
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Malformed JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert a `serde_json::Value` tree into a value
pub fn from_json(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => Value::Array(items.into_iter().map(from_json).collect()),
        serde_json::Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, from_json(value)))
                .collect::<Object>(),
        ),
    }
}

/// Decode JSON text into a value
///
/// # Examples
/// ```
/// use entities_data_handling::{values, Value};
/// use infrastructure_external_format::decode_value;
///
/// assert_eq!(decode_value("[1, \"a\"]").unwrap(), Value::from(values![1, "a"]));
/// ```
pub fn decode_value(text: &str) -> Result<Value, DecodeError> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    Ok(from_json(json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_scalars() {
        assert_eq!(decode_value("null").unwrap(), Value::Null);
        assert_eq!(decode_value("false").unwrap(), Value::Bool(false));
        assert_eq!(decode_value("2.5").unwrap(), Value::from(2.5));
        assert_eq!(decode_value("\"hi\"").unwrap(), Value::from("hi"));
    }

    #[test]
    fn test_decode_object_keeps_key_order() {
        let value = decode_value(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_decode_nested() {
        let value = decode_value(r#"{"list": [1, [2]], "flag": true}"#).unwrap();
        assert_eq!(value.get_field("flag"), Value::Bool(true));
        assert_eq!(value.get_field("list").get_field("length"), Value::from(2));
    }

    #[test]
    fn test_decode_invalid() {
        assert!(matches!(decode_value("[1,"), Err(DecodeError::Json(_))));
        assert!(decode_value("").is_err());
    }
}
