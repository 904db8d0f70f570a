//! Adapters Layer: Storage
//!
//! Persists JSON-serializable values behind a string-keyed key-value store.
//!
//! ## Overview
//!
//! The store itself is an outside collaborator: anything implementing
//! [`KeyValueStore`] can hold the encoded text. [`Persistence`] sits on top
//! and turns failures into the shapes callers expect: `store` reports a
//! boolean, `get` hands back the error.
//!
//! ## Modules
//!
//! - **[`error`](error/index.html)**: `StoreError`
//! - **[`memory`](memory/index.html)**: In-process store
//! - **[`file`](file/index.html)**: One JSON file per key under a root directory
//! - **[`persistence`](persistence/index.html)**: `store`/`get` over any backend

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

pub mod error;
pub mod file;
pub mod memory;
pub mod persistence;

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use persistence::Persistence;

/// A string-keyed mapping of encoded values
///
/// Backends must be usable through a shared reference; the memory store
/// locks internally and the file store relies on the filesystem.
pub trait KeyValueStore: Send + Sync {
    /// Insert or replace the text stored under `key`
    fn set(&self, key: &str, text: &str) -> StoreResult<()>;

    /// Fetch the text stored under `key`
    ///
    /// Returns `StoreError::NotFound` when the key is absent.
    fn get(&self, key: &str) -> StoreResult<String>;

    /// Delete `key`, returning whether it existed
    fn remove(&self, key: &str) -> StoreResult<bool>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn set(&self, key: &str, text: &str) -> StoreResult<()> {
        (**self).set(key, text)
    }

    fn get(&self, key: &str) -> StoreResult<String> {
        (**self).get(key)
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        (**self).remove(key)
    }
}
