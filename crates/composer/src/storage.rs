// Copyright 2026 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Persistence: the document ⇄ record mapping and the key-value stores
//! it is written through.
//!
//! The whole document is serialised to one JSON record under a single
//! fixed key and overwritten wholesale on every save. The record carries
//! a schema version so a future format change fails loudly instead of
//! being misread.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::{Block, BlockKey, BlockKind, Document, StyleRange};

/// The fixed key the document record is stored under.
pub const STORAGE_KEY: &str = "composer-content";

/// Version written into every record; loads of any other version fail
/// with [`StorageError::UnsupportedSchema`].
pub const SCHEMA_VERSION: u32 = 1;

/// Failures of the persistence layer. All of them are recoverable: a
/// failed save leaves the live session intact, and a failed load falls
/// back to an empty document at the call site.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read saved content")]
    Read(#[source] io::Error),

    #[error("failed to write saved content")]
    Write(#[source] io::Error),

    #[error("saved content is malformed: {0}")]
    Deserialization(String),

    #[error("saved content has unsupported schema version {0}")]
    UnsupportedSchema(u32),
}

// ────────────────────────────────────────────────────────────────────────────
// Key-value backends
// ────────────────────────────────────────────────────────────────────────────

/// Minimal synchronous key-value contract the adapter writes through.
///
/// Writes are whole-value overwrites; there is never more than one
/// writer, so no locking is required of implementations.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> io::Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// In-memory store, for tests and for hosts that bring their own
/// storage and only need the serialization contract.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an entry, bypassing the document mapping. Useful for
    /// staging malformed records in tests.
    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one `<key>.json` file per key inside a directory.
/// The native-host stand-in for the browser's local storage.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// The persisted record
// ────────────────────────────────────────────────────────────────────────────

/// Flat, JSON-serialisable image of a [`Document`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord {
    pub schema_version: u32,
    pub blocks: Vec<PersistedBlock>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedBlock {
    pub key: String,
    pub kind: BlockKind,
    pub text: String,
    pub style_ranges: Vec<StyleRange>,
}

impl PersistedRecord {
    pub fn from_document(document: &Document) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            blocks: document
                .blocks()
                .iter()
                .map(|b| PersistedBlock {
                    key: b.key().as_str().to_string(),
                    kind: b.kind().clone(),
                    text: b.text().to_string(),
                    style_ranges: b.style_ranges().to_vec(),
                })
                .collect(),
        }
    }

    /// Validate and rebuild the document. Any violation (empty block
    /// list, out-of-bounds or inverted style range) is a deserialization
    /// failure; a partially valid record never yields a document.
    pub fn into_document(self) -> Result<Document, StorageError> {
        let mut blocks = Vec::with_capacity(self.blocks.len());
        for pb in self.blocks {
            let text_len = pb.text.encode_utf16().count();
            for range in &pb.style_ranges {
                if !range.is_valid_for(text_len) {
                    return Err(StorageError::Deserialization(format!(
                        "style range {}..{} is invalid for block {:?} of \
                         length {text_len}",
                        range.start, range.end, pb.key,
                    )));
                }
            }
            blocks.push(Block::from_parts(
                BlockKey::new(pb.key),
                pb.kind,
                pb.text,
                pb.style_ranges,
            ));
        }
        Document::from_blocks(blocks).ok_or_else(|| {
            StorageError::Deserialization(
                "record contains no blocks".to_string(),
            )
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// The adapter
// ────────────────────────────────────────────────────────────────────────────

/// Serialises documents in and out of a [`KeyValueStore`] under
/// [`STORAGE_KEY`].
pub struct ContentStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ContentStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Overwrite the record with the given document.
    pub fn save(&mut self, document: &Document) -> Result<(), StorageError> {
        let record = PersistedRecord::from_document(document);
        let json = serde_json::to_string(&record)
            .map_err(|e| StorageError::Write(io::Error::other(e)))?;
        self.store
            .write(STORAGE_KEY, &json)
            .map_err(StorageError::Write)
    }

    /// Read the record back, if any.
    ///
    /// `Ok(None)` means nothing has been saved yet; the caller supplies
    /// its own fallback. A record that exists but cannot be decoded into
    /// a valid document is an error, never a partial document.
    pub fn load(&self) -> Result<Option<Document>, StorageError> {
        let Some(raw) =
            self.store.read(STORAGE_KEY).map_err(StorageError::Read)?
        else {
            return Ok(None);
        };

        let record: PersistedRecord = serde_json::from_str(&raw)
            .map_err(|e| StorageError::Deserialization(e.to_string()))?;
        if record.schema_version != SCHEMA_VERSION {
            return Err(StorageError::UnsupportedSchema(record.schema_version));
        }
        record.into_document().map(Some)
    }
}
