//! Storage Facades
//!
//! `store`/`get` against the process-wide in-memory store, plus variants that
//! take an explicit [`Persistence`] for callers that want a file store.

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

use adapters_storage::{KeyValueStore, Persistence, StoreResult};
use entities_data_handling::Value;

/// Persist `data` under `key`, reporting success
///
/// # Examples
/// ```
/// use api_facades::{get, store, values, Value};
///
/// assert!(store(&Value::from(values![1, 2]), "facade_doc"));
/// assert_eq!(get("facade_doc").unwrap(), Value::from(values![1, 2]));
/// ```
pub fn store(data: &Value, key: &str) -> bool {
    Persistence::global().store(data, key)
}

/// Retrieve the value under `key`, or the failure
pub fn get(key: &str) -> StoreResult<Value> {
    Persistence::global().get(key)
}

/// [`store`] against a specific backend
pub fn store_in<S: KeyValueStore>(persistence: &Persistence<S>, data: &Value, key: &str) -> bool {
    persistence.store(data, key)
}

/// [`get`] against a specific backend
pub fn get_from<S: KeyValueStore>(persistence: &Persistence<S>, key: &str) -> StoreResult<Value> {
    persistence.get(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapters_storage::MemoryStore;
    use entities_data_handling::{values, Callable};

    #[test]
    fn test_store_get_global() {
        assert!(store(&Value::from("text"), "storage_facade_test"));
        assert_eq!(get("storage_facade_test").unwrap(), Value::from("text"));
    }

    #[test]
    fn test_get_missing_surfaces_error() {
        assert!(get("storage_facade_never_written").unwrap_err().is_not_found());
    }

    #[test]
    fn test_store_unserializable_is_false() {
        let f = Value::from(Callable::new(|_: &[Value]| Value::Null));
        assert!(!store(&f, "storage_facade_function"));
    }

    #[test]
    fn test_explicit_backend() {
        let persistence = Persistence::new(MemoryStore::new());
        assert!(store_in(&persistence, &Value::from(values![true]), "k"));
        assert_eq!(get_from(&persistence, "k").unwrap(), Value::from(values![true]));
    }
}
