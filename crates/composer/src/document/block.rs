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

//! Blocks: the structural units of a document.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::style::{StyleRange, StyleTag};

/// Stable identity of a block. Keys persist across edits; re-keying only
/// happens when a block is split or merged, which is outside this model.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockKey(String);

impl BlockKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The structural kind of a block. Kebab-case wire names match the block
/// type strings the host rendering layer understands (`"paragraph"`,
/// `"header-one"`, `"code-block"`); anything else rides in
/// [`BlockKind::Custom`].
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum BlockKind {
    #[strum(serialize = "paragraph")]
    Paragraph,
    #[strum(serialize = "header-one")]
    HeaderOne,
    #[strum(serialize = "code-block")]
    CodeBlock,
    #[strum(default)]
    Custom(String),
}

impl From<String> for BlockKind {
    fn from(s: String) -> Self {
        Self::from_str(&s).unwrap_or(Self::Custom(s))
    }
}

impl From<BlockKind> for String {
    fn from(kind: BlockKind) -> Self {
        kind.to_string()
    }
}

/// A structural unit of the document: a run of text with a kind and a set
/// of inline style ranges over UTF-16 offsets into that text.
///
/// Blocks are immutable; the `with_*` methods return a modified copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    key: BlockKey,
    kind: BlockKind,
    text: String,
    style_ranges: Vec<StyleRange>,
}

impl Block {
    pub fn new(key: BlockKey, kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            key,
            kind,
            text: text.into(),
            style_ranges: Vec::new(),
        }
    }

    pub fn key(&self) -> &BlockKey {
        &self.key
    }

    pub fn kind(&self) -> &BlockKind {
        &self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style_ranges(&self) -> &[StyleRange] {
        &self.style_ranges
    }

    /// The text length in UTF-16 code units.
    pub fn text_len(&self) -> usize {
        self.text.encode_utf16().count()
    }

    /// Copy of this block with a different kind. Text, key and style
    /// ranges are untouched.
    pub fn with_kind(&self, kind: BlockKind) -> Self {
        let mut block = self.clone();
        block.kind = kind;
        block
    }

    /// Copy of this block with different text. Style ranges are kept as-is;
    /// callers replacing text wholesale are expected to rebuild them.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        let mut block = self.clone();
        block.text = text.into();
        block
    }

    /// Copy of this block with one more style range appended.
    pub fn with_style_range(&self, range: StyleRange) -> Self {
        let mut block = self.clone();
        block.style_ranges.push(range);
        block
    }

    /// Whether `tag` covers every code unit of `[start, end)`.
    ///
    /// Walks the tag's ranges in offset order, tracking the covered
    /// frontier; any gap means the span is not fully covered. An empty
    /// span is never considered covered.
    pub fn style_covers(&self, tag: &StyleTag, start: usize, end: usize) -> bool {
        if start >= end {
            return false;
        }
        let mut spans: Vec<(usize, usize)> = self
            .style_ranges
            .iter()
            .filter(|r| r.tag == *tag)
            .map(|r| (r.start, r.end))
            .collect();
        spans.sort_unstable();

        let mut frontier = start;
        for (s, e) in spans {
            if s > frontier {
                break;
            }
            frontier = frontier.max(e);
        }
        frontier >= end
    }

    /// Whether `tag` covers the full span of this block's text.
    pub fn style_covers_all(&self, tag: &StyleTag) -> bool {
        self.style_covers(tag, 0, self.text_len())
    }

    /// Flip membership of `tag` over `[start, end)`.
    ///
    /// If the tag already covers the whole span it is removed from it,
    /// splitting any ranges that extend past the span boundaries.
    /// Otherwise the span gains the tag, absorbing overlapping or adjacent
    /// ranges of the same tag into one. Ranges of other tags are untouched.
    ///
    /// Out-of-bounds offsets are clamped to the text length; an empty
    /// clamped span returns the block unchanged.
    pub fn with_style_toggled_over(
        &self,
        tag: &StyleTag,
        start: usize,
        end: usize,
    ) -> Self {
        let len = self.text_len();
        let start = start.min(len);
        let end = end.min(len);
        if start >= end {
            return self.clone();
        }

        let mut block = self.clone();
        if self.style_covers(tag, start, end) {
            let mut kept = Vec::with_capacity(block.style_ranges.len());
            for r in &block.style_ranges {
                if r.tag != *tag || r.end <= start || r.start >= end {
                    kept.push(r.clone());
                    continue;
                }
                if r.start < start {
                    kept.push(StyleRange::new(r.start, start, tag.clone()));
                }
                if r.end > end {
                    kept.push(StyleRange::new(end, r.end, tag.clone()));
                }
            }
            block.style_ranges = kept;
        } else {
            let mut merged_start = start;
            let mut merged_end = end;
            let mut kept = Vec::with_capacity(block.style_ranges.len());
            for r in &block.style_ranges {
                if r.tag == *tag && r.start <= merged_end && r.end >= merged_start {
                    merged_start = merged_start.min(r.start);
                    merged_end = merged_end.max(r.end);
                } else {
                    kept.push(r.clone());
                }
            }
            kept.push(StyleRange::new(merged_start, merged_end, tag.clone()));
            block.style_ranges = kept;
        }
        block
    }

    /// Flip membership of `tag` over the block's entire text.
    ///
    /// This is the autoformat-trigger effect: fully covered means all
    /// ranges carrying the tag are dropped; otherwise the tag's ranges
    /// collapse into a single full-span range. On an empty block this is
    /// a structural no-op.
    pub fn with_style_toggled(&self, tag: &StyleTag) -> Self {
        self.with_style_toggled_over(tag, 0, self.text_len())
    }

    /// Rebuild a block from persisted parts. Range validation is the
    /// caller's job (see the storage layer).
    pub(crate) fn from_parts(
        key: BlockKey,
        kind: BlockKind,
        text: String,
        style_ranges: Vec<StyleRange>,
    ) -> Self {
        Self {
            key,
            kind,
            text,
            style_ranges,
        }
    }
}
