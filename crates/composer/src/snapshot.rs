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

//! The immutable `(Document, Selection)` pair the editor transitions over.

use crate::document::Document;
use crate::selection::Selection;

/// The editor's state at one instant.
///
/// Snapshots are immutable: every transition produces a new value, which
/// is what makes history retention by the host (undo stacks and the like)
/// a matter of keeping old snapshots around.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorSnapshot {
    document: Document,
    selection: Selection,
}

impl EditorSnapshot {
    pub fn new(document: Document, selection: Selection) -> Self {
        Self {
            document,
            selection,
        }
    }

    /// An empty document with the cursor at the start of its single block.
    pub fn empty() -> Self {
        let document = Document::new();
        let selection =
            Selection::collapsed(document.first_block().key().clone(), 0);
        Self {
            document,
            selection,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// New snapshot with a replaced document and the selection carried
    /// over unchanged.
    pub fn with_document(&self, document: Document) -> Self {
        Self {
            document,
            selection: self.selection.clone(),
        }
    }
}
