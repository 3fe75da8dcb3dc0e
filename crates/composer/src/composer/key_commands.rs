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

//! Standard key-command handling.
//!
//! The host's key-event plumbing maps raw keystrokes to command names
//! (`"bold"`, `"italic"`, ...) before they reach the model. The
//! controller delegates those names to a [`KeyCommandInterpreter`]; if
//! the interpreter produces a snapshot the command is committed, and if
//! not the host lets the widget handle the key natively.

use crate::document::StyleTag;
use crate::snapshot::EditorSnapshot;

use super::Composer;

/// The seam through which the host's standard key commands reach the
/// model. Implementations are pure: a command either maps the snapshot
/// to a new one or declines with `None`.
pub trait KeyCommandInterpreter {
    fn interpret(
        &self,
        snapshot: &EditorSnapshot,
        command: &str,
    ) -> Option<EditorSnapshot>;
}

/// Built-in interpreter for the standard rich-text commands.
///
/// `"bold"`, `"italic"` and `"underline"` toggle the corresponding style
/// over the selected span of the anchor block. Collapsed selections,
/// cross-block selections and unknown commands decline, leaving the key
/// to the host widget.
pub struct RichKeyCommands;

impl RichKeyCommands {
    fn tag_for(command: &str) -> Option<StyleTag> {
        match command {
            "bold" => Some(StyleTag::Bold),
            "italic" => Some(StyleTag::Italic),
            "underline" => Some(StyleTag::Underline),
            _ => None,
        }
    }
}

impl KeyCommandInterpreter for RichKeyCommands {
    fn interpret(
        &self,
        snapshot: &EditorSnapshot,
        command: &str,
    ) -> Option<EditorSnapshot> {
        let tag = Self::tag_for(command)?;

        let selection = snapshot.selection();
        let (start, end) = selection.span_in_anchor_block()?;
        if start == end {
            return None;
        }
        let block = snapshot.document().block(&selection.anchor_key)?;

        let toggled = block.with_style_toggled_over(&tag, start, end);
        Some(
            snapshot
                .with_document(snapshot.document().with_replaced_block(toggled)),
        )
    }
}

impl Composer {
    /// Feed a key command through the configured interpreter.
    ///
    /// Returns `true` when the command produced and committed a new
    /// snapshot; `false` tells the host to let the widget handle the raw
    /// key natively. A key command is never part of a trigger run, so any
    /// active run ends here either way.
    pub fn key_command(&mut self, command: &str) -> bool {
        self.trigger_run = None;
        match self.key_commands.interpret(&self.current, command) {
            Some(snapshot) => {
                self.current = snapshot;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Block, BlockKey, BlockKind, Document, StyleRange};
    use crate::selection::Selection;

    fn composer_with_selection(text: &str, start: usize, end: usize) -> Composer {
        let block = Block::new(BlockKey::new("b0"), BlockKind::Paragraph, text);
        let key = block.key().clone();
        Composer::from_snapshot(EditorSnapshot::new(
            Document::from_blocks(vec![block]).unwrap(),
            Selection::range(key.clone(), start, key, end),
        ))
    }

    // ===================================================================
    // RichKeyCommands
    // ===================================================================

    #[test]
    fn bold_command_toggles_bold_over_the_selection() {
        let mut composer = composer_with_selection("hello", 1, 4);
        assert!(composer.key_command("bold"));
        assert_eq!(
            composer.snapshot().document().first_block().style_ranges(),
            &[StyleRange::new(1, 4, StyleTag::Bold)],
        );
    }

    #[test]
    fn bold_command_twice_toggles_back_off() {
        let mut composer = composer_with_selection("hello", 1, 4);
        composer.key_command("bold");
        assert!(composer.key_command("bold"));
        assert!(composer
            .snapshot()
            .document()
            .first_block()
            .style_ranges()
            .is_empty());
    }

    #[test]
    fn italic_and_underline_commands_map_to_their_tags() {
        let mut composer = composer_with_selection("hello", 0, 5);
        assert!(composer.key_command("italic"));
        assert!(composer.key_command("underline"));
        let ranges = composer
            .snapshot()
            .document()
            .first_block()
            .style_ranges()
            .to_vec();
        assert!(ranges.contains(&StyleRange::new(0, 5, StyleTag::Italic)));
        assert!(ranges.contains(&StyleRange::new(0, 5, StyleTag::Underline)));
    }

    #[test]
    fn unknown_command_reports_false() {
        let mut composer = composer_with_selection("hello", 1, 4);
        let before = composer.snapshot().clone();
        assert!(!composer.key_command("delete-word"));
        assert_eq!(composer.snapshot(), &before);
    }

    #[test]
    fn collapsed_selection_declines() {
        let mut composer = composer_with_selection("hello", 2, 2);
        assert!(!composer.key_command("bold"));
    }

    #[test]
    fn key_command_breaks_a_trigger_run() {
        let mut composer = composer_with_selection("hello", 0, 0);
        composer.before_input("*");
        // Even a declined command ends the run.
        composer.key_command("unknown");
        composer.before_input("*");
        // Fresh run: the second star toggles bold back off instead of
        // accumulating to redline.
        assert!(composer
            .snapshot()
            .document()
            .first_block()
            .style_ranges()
            .is_empty());
    }
}
