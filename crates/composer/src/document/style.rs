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

//! Inline style tags and the ranges that carry them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// An inline formatting attribute applied to a sub-span of a block's text.
///
/// The built-in set is closed; interpreter-defined tags outside it are
/// carried through [`StyleTag::Custom`] so an unknown tag survives a
/// save/load round-trip instead of being dropped.
///
/// Wire names are the SCREAMING_SNAKE strings the host key-command
/// interpreter produces (`"BOLD"`, `"ITALIC"`, ...).
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum StyleTag {
    #[strum(serialize = "BOLD")]
    Bold,
    #[strum(serialize = "ITALIC")]
    Italic,
    #[strum(serialize = "UNDERLINE")]
    Underline,
    #[strum(serialize = "REDLINE")]
    Redline,
    /// Any tag outside the built-in set.
    #[strum(default)]
    Custom(String),
}

impl From<String> for StyleTag {
    fn from(s: String) -> Self {
        // The default variant makes parsing total.
        Self::from_str(&s).unwrap_or(Self::Custom(s))
    }
}

impl From<StyleTag> for String {
    fn from(tag: StyleTag) -> Self {
        tag.to_string()
    }
}

/// A `(start, end, tag)` triple marking a formatting attribute over a
/// sub-span of a block's text.
///
/// Offsets are UTF-16 code units. A range is well-formed when
/// `start < end <= text length`; [`crate::Document`] construction and the
/// persistence layer enforce this.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRange {
    pub start: usize,
    pub end: usize,
    pub tag: StyleTag,
}

impl StyleRange {
    pub fn new(start: usize, end: usize, tag: StyleTag) -> Self {
        Self { start, end, tag }
    }

    /// Whether this range is well-formed for a text of `len` code units.
    pub fn is_valid_for(&self, len: usize) -> bool {
        self.start < self.end && self.end <= len
    }
}
