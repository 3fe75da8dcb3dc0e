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

//! Selection state: anchor and focus points over the document.

use crate::document::BlockKey;

/// An anchor/focus pair of `(block key, UTF-16 offset)` points.
///
/// A collapsed selection (anchor == focus) is a pure cursor. Trigger
/// detection only ever fires for collapsed selections at offset 0 of the
/// anchor block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub anchor_key: BlockKey,
    pub anchor_offset: usize,
    pub focus_key: BlockKey,
    pub focus_offset: usize,
}

impl Selection {
    /// A cursor at `offset` within the block identified by `key`.
    pub fn collapsed(key: BlockKey, offset: usize) -> Self {
        Self {
            anchor_key: key.clone(),
            anchor_offset: offset,
            focus_key: key,
            focus_offset: offset,
        }
    }

    /// A ranged selection between two points.
    pub fn range(
        anchor_key: BlockKey,
        anchor_offset: usize,
        focus_key: BlockKey,
        focus_offset: usize,
    ) -> Self {
        Self {
            anchor_key,
            anchor_offset,
            focus_key,
            focus_offset,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor_key == self.focus_key
            && self.anchor_offset == self.focus_offset
    }

    /// Collapsed and sitting at the very start of the anchor block, the
    /// only position at which autoformat triggers are considered.
    pub fn is_at_block_start(&self) -> bool {
        self.is_collapsed() && self.anchor_offset == 0
    }

    /// Span of the selection within the anchor block, normalised so start
    /// <= end. `None` when the selection crosses block boundaries.
    pub fn span_in_anchor_block(&self) -> Option<(usize, usize)> {
        if self.anchor_key != self.focus_key {
            return None;
        }
        let start = self.anchor_offset.min(self.focus_offset);
        let end = self.anchor_offset.max(self.focus_offset);
        Some((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> BlockKey {
        BlockKey::new("b0")
    }

    #[test]
    fn collapsed_selection_has_equal_points() {
        let sel = Selection::collapsed(key(), 3);
        assert!(sel.is_collapsed());
        assert_eq!(sel.anchor_offset, 3);
        assert_eq!(sel.focus_offset, 3);
    }

    #[test]
    fn block_start_requires_collapsed_and_zero_offset() {
        assert!(Selection::collapsed(key(), 0).is_at_block_start());
        assert!(!Selection::collapsed(key(), 1).is_at_block_start());
        assert!(!Selection::range(key(), 0, key(), 2).is_at_block_start());
    }

    #[test]
    fn span_is_normalised() {
        let sel = Selection::range(key(), 4, key(), 1);
        assert_eq!(sel.span_in_anchor_block(), Some((1, 4)));
    }

    #[test]
    fn cross_block_selection_has_no_anchor_span() {
        let sel = Selection::range(key(), 0, BlockKey::new("b1"), 2);
        assert!(!sel.is_collapsed());
        assert_eq!(sel.span_in_anchor_block(), None);
    }
}
