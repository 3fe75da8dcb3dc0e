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

//! Pre-insertion interception and trigger-run accumulation.
//!
//! `*`, `**` and `***` are all triggers sharing a prefix, so three `*`
//! keystrokes must land on the `***` effect rather than toggling bold
//! three times. The controller resolves this with a *trigger run*: while
//! consecutive keystrokes keep matching the table, their accumulated text
//! is re-evaluated against the snapshot from before the run began, and
//! each result replaces the previous one. Anything that is not a
//! continuation (a pass-through, a key command, an external snapshot)
//! ends the run.

use crate::autoformat::{evaluate, TriggerResult};
use crate::snapshot::EditorSnapshot;

use super::Composer;

/// What the controller tells the host about a `before_input` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// The input was absorbed as a trigger; the host must suppress its
    /// default insertion.
    Handled,
    /// Not a trigger; the host performs default insertion and reports the
    /// resulting snapshot back via [`Composer::replace_snapshot`].
    PassThrough,
}

/// A run of consecutive handled trigger keystrokes.
pub(crate) struct TriggerRun {
    /// Snapshot from before the first keystroke of the run.
    pub(crate) base: EditorSnapshot,
    /// Accumulated trigger text so far.
    pub(crate) text: String,
}

impl Composer {
    /// Intercept text about to be inserted at the current selection.
    ///
    /// On [`InputOutcome::Handled`] the transformed snapshot has been
    /// committed and the characters must not be inserted. On
    /// [`InputOutcome::PassThrough`] nothing changed here; the host
    /// inserts the text through its own content-model path.
    pub fn before_input(&mut self, text: &str) -> InputOutcome {
        // Try to extend an active run first: its accumulated text plus
        // the new keystroke, evaluated against the pre-run snapshot.
        if let Some(run) = self.trigger_run.take() {
            let combined = format!("{}{}", run.text, text);
            if let TriggerResult::Handled(snapshot) =
                evaluate(&run.base, &combined)
            {
                self.current = snapshot;
                self.trigger_run = Some(TriggerRun {
                    base: run.base,
                    text: combined,
                });
                return InputOutcome::Handled;
            }
            // The combined text no longer matches; the run is over and
            // the keystroke is judged on its own against current state.
        }

        match evaluate(&self.current, text) {
            TriggerResult::Handled(snapshot) => {
                self.trigger_run = Some(TriggerRun {
                    base: self.current.clone(),
                    text: text.to_string(),
                });
                self.current = snapshot;
                InputOutcome::Handled
            }
            TriggerResult::PassThrough => InputOutcome::PassThrough,
        }
    }
}
