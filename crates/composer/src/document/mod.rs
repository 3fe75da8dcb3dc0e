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

//! The content model: an immutable, ordered, never-empty list of blocks.

mod block;
mod style;

pub use block::{Block, BlockKey, BlockKind};
pub use style::{StyleRange, StyleTag};

/// An ordered sequence of [`Block`]s.
///
/// Invariant: a document always contains at least one block, even when
/// that block has no text. Every constructor upholds this, so accessors
/// such as [`Document::first_block`] are total.
///
/// Documents are immutable snapshots; mutation-shaped methods return a
/// new `Document`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// A document holding a single empty paragraph block.
    pub fn new() -> Self {
        Self {
            blocks: vec![Block::new(
                BlockKey::new("b0"),
                BlockKind::Paragraph,
                "",
            )],
        }
    }

    /// Build a document from blocks. Returns `None` when `blocks` is
    /// empty, which would violate the never-empty invariant.
    pub fn from_blocks(blocks: Vec<Block>) -> Option<Self> {
        if blocks.is_empty() {
            None
        } else {
            Some(Self { blocks })
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The first block. Total thanks to the never-empty invariant.
    pub fn first_block(&self) -> &Block {
        &self.blocks[0]
    }

    /// Look up a block by key.
    pub fn block(&self, key: &BlockKey) -> Option<&Block> {
        self.blocks.iter().find(|b| b.key() == key)
    }

    /// New document with the block of matching key replaced.
    ///
    /// If no block carries the replacement's key the document is returned
    /// unchanged; block order is preserved either way.
    pub fn with_replaced_block(&self, replacement: Block) -> Self {
        let blocks = self
            .blocks
            .iter()
            .map(|b| {
                if b.key() == replacement.key() {
                    replacement.clone()
                } else {
                    b.clone()
                }
            })
            .collect();
        Self { blocks }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
