//! Object Module
//!
//! Provides the insertion-ordered string-keyed mapping used for objects.
//!
//! Keys keep the position of their first insertion. Inserting an existing
//! key overwrites its value in place (last write wins), which is what
//! `from_pairs` and `zip_object` rely on.

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

use crate::value::Value;
use std::hash::{Hash, Hasher};

/// Object data structure
///
/// Stores key-value pairs as a vector so iteration follows insertion order.
/// Keys are unique.
#[derive(Clone, Debug, Default)]
pub struct Object {
    pairs: Vec<(String, Value)>,
}

impl Object {
    /// Create a new empty object
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Number of key-value pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the object has no keys
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Get a value by key, returning None if the key doesn't exist
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.find_index(key).map(|idx| &self.pairs[idx].1)
    }

    /// Insert a key-value pair
    ///
    /// If the key already exists its value is replaced and its position is
    /// kept. Returns the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        if let Some(idx) = self.find_index(&key) {
            Some(std::mem::replace(&mut self.pairs[idx].1, value))
        } else {
            self.pairs.push((key, value));
            None
        }
    }

    /// Remove a key, returning its value if it existed
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.find_index(key).map(|idx| self.pairs.remove(idx).1)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    /// Values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.pairs.iter().map(|(_, v)| v)
    }

    /// Iterate over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Create an object from `(key, value)` pairs
    ///
    /// If duplicate keys exist, the last value for each key is kept.
    pub fn from_list(pairs: Vec<(String, Value)>) -> Self {
        pairs.into_iter().collect()
    }

    /// Check that every key of `pattern` is present here with an equal value
    ///
    /// A key missing on this side reads as `undefined`, so a pattern value of
    /// `undefined` matches an absent key.
    pub fn matches(&self, pattern: &Object) -> bool {
        pattern.iter().all(|(key, expected)| match self.get(key) {
            Some(actual) => actual == expected,
            None => expected.is_undefined(),
        })
    }

    fn find_index(&self, key: &str) -> Option<usize> {
        self.pairs.iter().position(|(k, _)| k == key)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| v == value))
    }
}

impl Eq for Object {}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equality ignores order, so hash in key order.
        let mut entries: Vec<&(String, Value)> = self.pairs.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries.len().hash(state);
        for (key, value) in entries {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut object = Self::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_creation() {
        let object = Object::new();
        assert!(object.is_empty());
        assert_eq!(object.len(), 0);
    }

    #[test]
    fn test_object_insert_and_get() {
        let mut object = Object::new();
        assert_eq!(object.insert("a", Value::from(1)), None);
        assert_eq!(object.get("a"), Some(&Value::from(1)));
        assert_eq!(object.get("b"), None);
    }

    #[test]
    fn test_object_overwrite_keeps_position() {
        let mut object = Object::new();
        object.insert("a", Value::from(1));
        object.insert("b", Value::from(2));
        let previous = object.insert("a", Value::from(3));

        assert_eq!(previous, Some(Value::from(1)));
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(object.get("a"), Some(&Value::from(3)));
    }

    #[test]
    fn test_object_remove() {
        let mut object = Object::from_list(vec![("a".to_string(), Value::Null)]);
        assert_eq!(object.remove("a"), Some(Value::Null));
        assert_eq!(object.remove("a"), None);
        assert!(object.is_empty());
    }

    #[test]
    fn test_object_from_list_duplicates() {
        let object = Object::from_list(vec![
            ("k".to_string(), Value::from(1)),
            ("k".to_string(), Value::from(2)),
        ]);
        assert_eq!(object.len(), 1);
        assert_eq!(object.get("k"), Some(&Value::from(2)));
    }

    #[test]
    fn test_object_equality_ignores_order() {
        let left = Object::from_list(vec![
            ("a".to_string(), Value::from(1)),
            ("b".to_string(), Value::from(2)),
        ]);
        let right = Object::from_list(vec![
            ("b".to_string(), Value::from(2)),
            ("a".to_string(), Value::from(1)),
        ]);
        assert_eq!(left, right);
    }

    #[test]
    fn test_object_matches() {
        let item = Object::from_list(vec![
            ("user".to_string(), Value::from("barney")),
            ("active".to_string(), Value::from(false)),
        ]);
        let hit = Object::from_list(vec![("active".to_string(), Value::from(false))]);
        let miss = Object::from_list(vec![("active".to_string(), Value::from(true))]);
        let absent = Object::from_list(vec![("age".to_string(), Value::Undefined)]);

        assert!(item.matches(&hit));
        assert!(!item.matches(&miss));
        assert!(item.matches(&absent));
        assert!(item.matches(&Object::new()));
    }
}
