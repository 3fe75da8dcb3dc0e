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

//! Model code to power an autoformatting rich text editor.
//!
//! The crate is the model layer only: it owns the document/selection state,
//! decides whether a typed character is a markdown-style formatting trigger,
//! and persists the document to a local key-value store. Rendering, raw key
//! events and the editable widget itself live in the host platform layer,
//! which drives the model through [`Composer`]'s two interception hooks
//! ([`Composer::key_command`] and [`Composer::before_input`]) and reads the
//! current [`EditorSnapshot`] back for display.
//!
//! All text offsets are UTF-16 code units, matching platform text APIs.

pub mod autoformat;
pub mod composer;
pub mod document;
pub mod selection;
pub mod snapshot;
pub mod storage;

pub use autoformat::{evaluate, TriggerResult};
pub use composer::{
    block_style_name, Composer, InputOutcome, KeyCommandInterpreter,
    RenderSurface, RichKeyCommands,
};
pub use document::{Block, BlockKey, BlockKind, Document, StyleRange, StyleTag};
pub use selection::Selection;
pub use snapshot::EditorSnapshot;
pub use storage::{
    ContentStore, FileStore, KeyValueStore, MemoryStore, PersistedRecord,
    StorageError, SCHEMA_VERSION, STORAGE_KEY,
};
