//! Memory Store Module
//!
//! In-process key-value store. Clones share the same map, and a process-wide
//! instance is available through [`MemoryStore::global`].

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
use crate::KeyValueStore;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

/// Thread-safe in-memory key-value store
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the process-wide store, created on first access
    pub fn global() -> &'static MemoryStore {
        static INSTANCE: OnceLock<MemoryStore> = OnceLock::new();
        INSTANCE.get_or_init(MemoryStore::new)
    }
}

impl KeyValueStore for MemoryStore {
    fn set(&self, key: &str, text: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().map_err(StoreError::lock)?;
        entries.insert(key.to_string(), text.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> StoreResult<String> {
        let entries = self.entries.read().map_err(StoreError::lock)?;
        entries
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::not_found(key))
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        let mut entries = self.entries.write().map_err(StoreError::lock)?;
        Ok(entries.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();
        store.set("a", "[1]").unwrap();
        assert_eq!(store.get("a").unwrap(), "[1]");
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap(), "2");
    }

    #[test]
    fn test_get_missing() {
        let store = MemoryStore::new();
        assert!(store.get("missing").unwrap_err().is_not_found());
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        assert!(store.remove("a").unwrap());
        assert!(!store.remove("a").unwrap());
        assert!(store.get("a").unwrap_err().is_not_found());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();
        handle.set("shared", "true").unwrap();
        assert_eq!(store.get("shared").unwrap(), "true");
    }

    #[test]
    fn test_global_is_shared() {
        MemoryStore::global().set("memory_global_test", "1").unwrap();
        assert_eq!(MemoryStore::global().get("memory_global_test").unwrap(), "1");
    }
}
