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

//! The editor state controller.
//!
//! [`Composer`] owns the single current [`EditorSnapshot`] and mediates
//! between raw host input and the autoformat trigger engine. Transitions
//! happen only through [`Composer::key_command`], [`Composer::before_input`]
//! (on a handled trigger), [`Composer::replace_snapshot`] (the host content
//! model's own default-insertion path) and explicit save/load. Every
//! transition is synchronous and yields a complete snapshot.

mod input;
mod key_commands;
mod persist;
mod render;

pub use input::InputOutcome;
pub use key_commands::{KeyCommandInterpreter, RichKeyCommands};
pub use render::{block_style_name, RenderSurface};

use crate::snapshot::EditorSnapshot;

use input::TriggerRun;

/// Owns the current editor snapshot and the transient trigger-run state.
pub struct Composer {
    /// The one piece of mutable editor state.
    pub(crate) current: EditorSnapshot,

    /// Active run of consecutive handled trigger keystrokes, if any.
    pub(crate) trigger_run: Option<TriggerRun>,

    /// Interpreter for the host's standard key commands.
    pub(crate) key_commands: Box<dyn KeyCommandInterpreter>,
}

impl Composer {
    /// A composer over an empty document, using the built-in
    /// [`RichKeyCommands`] interpreter.
    pub fn new() -> Self {
        Self::from_snapshot(EditorSnapshot::empty())
    }

    /// A composer seeded with an existing snapshot.
    pub fn from_snapshot(snapshot: EditorSnapshot) -> Self {
        Self {
            current: snapshot,
            trigger_run: None,
            key_commands: Box::new(RichKeyCommands),
        }
    }

    /// Swap in a different key-command interpreter.
    pub fn with_interpreter(
        mut self,
        interpreter: Box<dyn KeyCommandInterpreter>,
    ) -> Self {
        self.key_commands = interpreter;
        self
    }

    /// Read accessor for the rendering layer.
    pub fn snapshot(&self) -> &EditorSnapshot {
        &self.current
    }

    /// Commit a snapshot produced by the host content model itself: the
    /// default-insertion path after a pass-through, or a selection change.
    ///
    /// Either way the user did something other than extend a trigger run,
    /// so any active run ends here.
    pub fn replace_snapshot(&mut self, snapshot: EditorSnapshot) {
        self.trigger_run = None;
        self.current = snapshot;
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}
