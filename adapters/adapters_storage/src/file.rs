//! File Store Module
//!
//! Directory-backed key-value store. Each key lives in `<root>/<key>.json`;
//! bytes outside `[A-Za-z0-9_-]` are percent-escaped so a key can never name a
//! path outside the root. Escaped keys too long for one filename are cut to a
//! prefix and suffixed with `~<md5 of the key>`.

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
use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const EXTENSION: &str = "json";
/// Longest escaped key used verbatim as a file stem
const MAX_STEM_LEN: usize = 200;
/// Escaped prefix kept in front of the digest for long keys
const DIGEST_PREFIX_LEN: usize = 64;

/// Key-value store writing one file per key
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Root directory of the store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path holding `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.{EXTENSION}", file_stem(key)))
    }
}

// `~` is always escaped, so digest stems never equal a verbatim stem.
fn file_stem(key: &str) -> String {
    let mut stem = escape_key(key);
    if stem.len() > MAX_STEM_LEN {
        stem.truncate(DIGEST_PREFIX_LEN);
        let _ = write!(stem, "~{:x}", md5::compute(key.as_bytes()));
    }
    stem
}

fn escape_key(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            escaped.push(char::from(byte));
        } else {
            // writing to a String cannot fail
            let _ = write!(escaped, "%{byte:02X}");
        }
    }
    escaped
}

impl KeyValueStore for FileStore {
    fn set(&self, key: &str, text: &str) -> StoreResult<()> {
        fs::write(self.path_for(key), text)?;
        Ok(())
    }

    fn get(&self, key: &str) -> StoreResult<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(StoreError::not_found(key)),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(StoreError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_escape_key() {
        assert_eq!(escape_key("plain_key-1"), "plain_key-1");
        assert_eq!(escape_key("../etc/passwd"), "%2E%2E%2Fetc%2Fpasswd");
        assert_eq!(escape_key("a b"), "a%20b");
        assert_eq!(escape_key("é"), "%C3%A9");
    }

    #[test]
    fn test_file_stem_short_key_is_escaped_verbatim() {
        assert_eq!(file_stem("a/b"), "a%2Fb");
        let limit = "k".repeat(MAX_STEM_LEN);
        assert_eq!(file_stem(&limit), limit);
    }

    #[test]
    fn test_file_stem_long_key_uses_digest() {
        let key = "a/".repeat(70);
        let stem = file_stem(&key);
        assert!(stem.len() <= DIGEST_PREFIX_LEN + 1 + 32);
        assert!(stem.starts_with("a%2Fa%2F"));
        assert!(stem.contains('~'));
        assert_ne!(file_stem(&"a/".repeat(71)), stem);
    }

    #[test]
    fn test_long_and_multibyte_keys_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        let long = "a/".repeat(70);
        let multibyte = "数据键".repeat(30);
        store.set(&long, "1").unwrap();
        store.set(&multibyte, "2").unwrap();
        assert_eq!(store.get(&long).unwrap(), "1");
        assert_eq!(store.get(&multibyte).unwrap(), "2");
        assert!(store.remove(&multibyte).unwrap());
        assert!(store.get(&multibyte).unwrap_err().is_not_found());
    }

    #[test]
    fn test_path_stays_under_root() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        let path = store.path_for("../../escape");
        assert_eq!(path.parent(), Some(dir.path()));
    }

    #[test]
    fn test_open_creates_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("store");
        let store = FileStore::open(&root).unwrap();
        assert!(store.root().is_dir());
    }

    #[test]
    fn test_set_get_remove() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.set("numbers", "[1,2,3]").unwrap();
        assert_eq!(store.get("numbers").unwrap(), "[1,2,3]");
        assert!(store.path_for("numbers").is_file());
        assert!(store.remove("numbers").unwrap());
        assert!(!store.remove("numbers").unwrap());
    }

    #[test]
    fn test_get_missing() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.get("absent").unwrap_err().is_not_found());
    }
}
