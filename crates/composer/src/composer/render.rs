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

//! The rendering-layer contract.
//!
//! The model never touches a rendering surface directly; the host hands
//! it a [`RenderSurface`] when it wants imperative behaviour (today just
//! focus) and reads presentation hints through [`block_style_name`].

use crate::document::BlockKind;

/// Imperative capabilities of the host rendering surface.
pub trait RenderSurface {
    /// Ask the host to move input focus to the editor widget.
    fn request_focus(&mut self);
}

/// Presentation hint for a block kind: the style class the rendering
/// layer should apply, if any.
///
/// Kept next to the trigger table on purpose: every kind a trigger can
/// introduce must be renderable.
pub fn block_style_name(kind: &BlockKind) -> Option<&'static str> {
    match kind {
        BlockKind::CodeBlock => Some("code-block-style"),
        _ => None,
    }
}
