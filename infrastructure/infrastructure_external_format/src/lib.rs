//! Infrastructure Layer: External Format
//!
//! Provides JSON encoding/decoding of values. This is the "JSON-serializable"
//! contract used by the storage adapter when values are persisted.
//!
//! ## Modules
//!
//! - **[`encoding`](encoding/index.html)**: `Value` to JSON text
//! - **[`decoding`](decoding/index.html)**: JSON text to `Value`
//!
//! ## Mapping
//!
//! | Value | JSON |
//! |-------|------|
//! | `null`, `undefined` in arrays | `null` |
//! | `undefined` / functions as object fields | omitted |
//! | functions in arrays | `null` |
//! | integral numbers below 2^53 | integer |
//! | other finite numbers | float |
//! | `NaN`, `Infinity` | `null` |
//!
//! A top-level `undefined` or function cannot be encoded.
//!
//! ## See Also
//!
//! - [`adapters_storage`](../../adapters/adapters_storage/index.html): Persistence wrapper

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

pub mod decoding;
pub mod encoding;

pub use decoding::{decode_value, from_json, DecodeError};
pub use encoding::{encode_value, EncodeError, JsonValue};
