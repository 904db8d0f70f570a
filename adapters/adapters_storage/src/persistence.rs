//! Persistence Module
//!
//! `store`/`get` of JSON-serializable values over any [`KeyValueStore`].
//! `store` reports success as a boolean; `get` returns the decoded value or
//! the failure itself.

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

use crate::error::{StoreError, StoreResult};
use crate::memory::MemoryStore;
use crate::KeyValueStore;
use entities_data_handling::Value;
use infrastructure_external_format::{decode_value, encode_value};
use tracing::{debug, warn};

/// Value persistence over a key-value backend
#[derive(Clone, Debug, Default)]
pub struct Persistence<S> {
    backend: S,
}

impl Persistence<MemoryStore> {
    /// Persistence over the process-wide memory store
    pub fn global() -> Self {
        Self::new(MemoryStore::global().clone())
    }
}

impl<S: KeyValueStore> Persistence<S> {
    /// Wrap a backend
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// The wrapped backend
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Encode `data` and write it under `key`
    pub fn try_store(&self, data: &Value, key: &str) -> StoreResult<()> {
        let text = encode_value(data)?;
        self.backend.set(key, &text)?;
        debug!(key, bytes = text.len(), "stored value");
        Ok(())
    }

    /// Store `data` under `key`
    ///
    /// # Returns
    /// * `true` - The value was encoded and written
    /// * `false` - Encoding or the backend failed
    ///
    /// # Examples
    /// ```
    /// use adapters_storage::{MemoryStore, Persistence};
    /// use entities_data_handling::{values, Value};
    ///
    /// let persistence = Persistence::new(MemoryStore::new());
    /// assert!(persistence.store(&Value::from(values![1, 2]), "pair"));
    /// assert!(!persistence.store(&Value::Undefined, "nothing"));
    /// ```
    pub fn store(&self, data: &Value, key: &str) -> bool {
        match self.try_store(data, key) {
            Ok(()) => true,
            Err(err) => {
                warn!(key, error = %err, "store failed");
                false
            }
        }
    }

    /// Read and decode the value under `key`
    ///
    /// # Examples
    /// ```
    /// use adapters_storage::{MemoryStore, Persistence};
    /// use entities_data_handling::{values, Value};
    ///
    /// let persistence = Persistence::new(MemoryStore::new());
    /// persistence.store(&Value::from(values!["a"]), "letters");
    /// assert_eq!(persistence.get("letters").unwrap(), Value::from(values!["a"]));
    /// assert!(persistence.get("missing").is_err());
    /// ```
    pub fn get(&self, key: &str) -> StoreResult<Value> {
        let result = self
            .backend
            .get(key)
            .and_then(|text| decode_value(&text).map_err(StoreError::from));
        match &result {
            Ok(_) => debug!(key, "loaded value"),
            Err(err) => warn!(key, error = %err, "get failed"),
        }
        result
    }

    /// Remove `key`, returning whether something was removed
    pub fn remove(&self, key: &str) -> bool {
        match self.backend.remove(key) {
            Ok(removed) => removed,
            Err(err) => {
                warn!(key, error = %err, "remove failed");
                false
            }
        }
    }
}
