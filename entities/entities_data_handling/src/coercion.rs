//! Coercion Module
//!
//! Number/string conversions with loose-language semantics:
//! - Number to string (`2` not `2.0`, `NaN`, `Infinity`, `1e+21`)
//! - String to number (trimmed, empty is `0`, garbage is `NaN`)
//! - Leading-integer extraction used by `to_number` over sequences

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

/// Magnitudes at or above this switch to exponent notation
const EXPONENT_UPPER: f64 = 1e21;
/// Magnitudes below this (and non-zero) switch to exponent notation
const EXPONENT_LOWER: f64 = 1e-6;

/// Render a number the way the loose language prints it
///
/// # Examples
/// ```
/// use entities_data_handling::coercion::number_to_string;
///
/// assert_eq!(number_to_string(2.0), "2");
/// assert_eq!(number_to_string(2.5), "2.5");
/// assert_eq!(number_to_string(f64::NAN), "NaN");
/// assert_eq!(number_to_string(1e21), "1e+21");
/// ```
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // covers -0 as well
        return "0".to_string();
    }

    let abs = n.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&abs) {
        return format!("{n}");
    }

    let rendered = format!("{n:e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered,
    }
}

/// Parse a string the way the loose language's unary `+` does
///
/// Surrounding whitespace is ignored and an empty string is `0`. Anything that
/// is not a complete decimal, hex, or `Infinity` literal is `NaN`.
pub fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        return u64::from_str_radix(hex, 16).map_or(f64::NAN, |v| v as f64);
    }

    // Rust accepts "inf" and "nan" spellings, the loose language does not.
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Extract the leading integer literal of a string
///
/// Skips leading whitespace, accepts one optional sign, then takes digits up
/// to the first non-digit. Returns `None` when no digit follows.
///
/// # Examples
/// ```
/// use entities_data_handling::coercion::leading_integer;
///
/// assert_eq!(leading_integer("12.53"), Some("12"));
/// assert_eq!(leading_integer("-7x"), Some("-7"));
/// assert_eq!(leading_integer("x7"), None);
/// ```
pub fn leading_integer(s: &str) -> Option<&str> {
    let trimmed = s.trim_start();
    let sign_len = usize::from(trimmed.starts_with('+') || trimmed.starts_with('-'));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        None
    } else {
        Some(&trimmed[..sign_len + digits])
    }
}
