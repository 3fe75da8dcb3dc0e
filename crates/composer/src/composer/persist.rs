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

//! Seeding from, and saving to, the content store.

use log::warn;

use crate::document::Document;
use crate::selection::Selection;
use crate::snapshot::EditorSnapshot;
use crate::storage::{ContentStore, KeyValueStore, StorageError};

use super::Composer;

impl Composer {
    /// Seed a composer from the persisted record.
    ///
    /// An absent record yields the empty document. A record that cannot
    /// be decoded is logged and likewise falls back to empty; a bad
    /// saved copy must never prevent the editing session from starting.
    pub fn from_store<S: KeyValueStore>(store: &ContentStore<S>) -> Self {
        let document = match store.load() {
            Ok(Some(document)) => document,
            Ok(None) => Document::new(),
            Err(e) => {
                warn!("discarding unreadable saved content: {e}");
                Document::new()
            }
        };
        let selection =
            Selection::collapsed(document.first_block().key().clone(), 0);
        Self::from_snapshot(EditorSnapshot::new(document, selection))
    }

    /// Persist the current document, overwriting any previous record.
    ///
    /// On failure the in-memory snapshot is untouched and editing
    /// continues; only the persisted copy is stale.
    pub fn save_to<S: KeyValueStore>(
        &self,
        store: &mut ContentStore<S>,
    ) -> Result<(), StorageError> {
        store.save(self.current.document())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{BlockKind, StyleTag};
    use crate::storage::{MemoryStore, STORAGE_KEY};

    fn store() -> ContentStore<MemoryStore> {
        ContentStore::new(MemoryStore::new())
    }

    // ===================================================================
    // Seeding
    // ===================================================================

    #[test]
    fn empty_store_seeds_an_empty_document() {
        let composer = Composer::from_store(&store());
        let doc = composer.snapshot().document();
        assert_eq!(doc.blocks().len(), 1);
        assert_eq!(doc.first_block().text(), "");
        assert!(composer.snapshot().selection().is_at_block_start());
    }

    #[test]
    fn corrupt_record_falls_back_to_empty() {
        let mut kv = MemoryStore::new();
        kv.insert(STORAGE_KEY, "not json at all");
        let composer = Composer::from_store(&ContentStore::new(kv));
        assert_eq!(composer.snapshot().document(), &Document::new());
    }

    // ===================================================================
    // Save / reload
    // ===================================================================

    #[test]
    fn save_then_reload_round_trips_the_session() {
        let mut store = store();
        let mut composer = Composer::new();
        composer.before_input("#");
        let typed = composer.snapshot().with_document(
            composer.snapshot().document().with_replaced_block(
                composer.snapshot().document().first_block().with_text("Title"),
            ),
        );
        composer.replace_snapshot(typed);
        composer.before_input("*");
        composer.save_to(&mut store).unwrap();

        let reloaded = Composer::from_store(&store);
        let block = reloaded.snapshot().document().first_block();
        assert_eq!(block.kind(), &BlockKind::HeaderOne);
        assert_eq!(block.text(), "Title");
        assert_eq!(block.style_ranges().len(), 1);
        assert_eq!(block.style_ranges()[0].tag, StyleTag::Bold);
    }
}
