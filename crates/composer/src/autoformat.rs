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

//! The autoformat trigger engine.
//!
//! [`evaluate`] is a pure function of `(snapshot, candidate text)`: it
//! either produces the transformed snapshot ([`TriggerResult::Handled`],
//! meaning the candidate characters are suppressed and never inserted) or
//! declines ([`TriggerResult::PassThrough`], meaning the caller performs
//! ordinary insertion through the host content model).
//!
//! Trigger table, first match wins:
//!
//! | Trigger | Effect                                      |
//! |---------|---------------------------------------------|
//! | `***`   | toggle `UNDERLINE` over the block's content |
//! | `**`    | toggle `REDLINE`                            |
//! | `*`     | toggle `BOLD`                               |
//! | `#`     | set the block kind to `header-one`          |
//!
//! Longer triggers come first so the shared-`*` prefixes resolve to the
//! most specific match of the *exact* accumulated text. The engine itself
//! keeps no lookback state; accumulating a run of trigger keystrokes is
//! the state controller's job (see `composer::input`).

use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::document::{BlockKind, StyleTag};
use crate::snapshot::EditorSnapshot;

/// What a matched trigger does to the anchor block.
#[derive(Clone, Debug, PartialEq, Eq)]
enum TriggerEffect {
    ToggleStyle(StyleTag),
    SetBlockKind(BlockKind),
}

/// Ordered trigger table. Longer triggers sharing a prefix with shorter
/// ones must come first.
static TRIGGERS: Lazy<Vec<(&'static str, TriggerEffect)>> = Lazy::new(|| {
    vec![
        ("***", TriggerEffect::ToggleStyle(StyleTag::Underline)),
        ("**", TriggerEffect::ToggleStyle(StyleTag::Redline)),
        ("*", TriggerEffect::ToggleStyle(StyleTag::Bold)),
        ("#", TriggerEffect::SetBlockKind(BlockKind::HeaderOne)),
    ]
});

/// Outcome of evaluating a candidate insertion against the trigger table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TriggerResult {
    /// The text was a trigger; the transformed snapshot should be
    /// committed and the characters suppressed.
    Handled(EditorSnapshot),
    /// Not a trigger here; the caller inserts the text verbatim.
    PassThrough,
}

/// Decide whether `inserted` is a formatting trigger at the snapshot's
/// current selection.
///
/// Triggers only fire for a collapsed selection at offset 0 of the anchor
/// block; any other cursor position passes through, so characters typed
/// mid-line are never intercepted. A selection naming a block that does
/// not exist is defensive territory: it is logged and passed through
/// rather than treated as a fault.
pub fn evaluate(snapshot: &EditorSnapshot, inserted: &str) -> TriggerResult {
    let selection = snapshot.selection();
    if !selection.is_at_block_start() {
        return TriggerResult::PassThrough;
    }

    let Some(block) = snapshot.document().block(&selection.anchor_key) else {
        warn!(
            "selection anchors block {} which is not in the document; \
             passing input through",
            selection.anchor_key,
        );
        return TriggerResult::PassThrough;
    };

    let Some((trigger, effect)) =
        TRIGGERS.iter().find(|(text, _)| *text == inserted)
    else {
        return TriggerResult::PassThrough;
    };

    let transformed = match effect {
        TriggerEffect::SetBlockKind(kind) => block.with_kind(kind.clone()),
        TriggerEffect::ToggleStyle(tag) => block.with_style_toggled(tag),
    };
    debug!("trigger {trigger:?} applied to block {}", block.key());

    TriggerResult::Handled(
        snapshot
            .with_document(snapshot.document().with_replaced_block(transformed)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Block, BlockKey, Document, StyleRange};
    use crate::selection::Selection;

    fn snapshot_with_text(text: &str) -> EditorSnapshot {
        let block = Block::new(BlockKey::new("b0"), BlockKind::Paragraph, text);
        let key = block.key().clone();
        EditorSnapshot::new(
            Document::from_blocks(vec![block]).unwrap(),
            Selection::collapsed(key, 0),
        )
    }

    fn handled(result: TriggerResult) -> EditorSnapshot {
        match result {
            TriggerResult::Handled(snapshot) => snapshot,
            TriggerResult::PassThrough => panic!("expected Handled"),
        }
    }

    // ===================================================================
    // Position gating
    // ===================================================================

    #[test]
    fn trigger_only_fires_at_offset_zero() {
        let snapshot = snapshot_with_text("hello");
        let mid = EditorSnapshot::new(
            snapshot.document().clone(),
            Selection::collapsed(BlockKey::new("b0"), 2),
        );
        assert_eq!(evaluate(&mid, "#"), TriggerResult::PassThrough);
        assert_eq!(evaluate(&mid, "*"), TriggerResult::PassThrough);
    }

    #[test]
    fn trigger_requires_collapsed_selection() {
        let snapshot = snapshot_with_text("hello");
        let ranged = EditorSnapshot::new(
            snapshot.document().clone(),
            Selection::range(BlockKey::new("b0"), 0, BlockKey::new("b0"), 3),
        );
        assert_eq!(evaluate(&ranged, "#"), TriggerResult::PassThrough);
    }

    #[test]
    fn missing_anchor_block_passes_through() {
        let snapshot = EditorSnapshot::new(
            Document::new(),
            Selection::collapsed(BlockKey::new("ghost"), 0),
        );
        assert_eq!(evaluate(&snapshot, "#"), TriggerResult::PassThrough);
    }

    #[test]
    fn ordinary_characters_pass_through() {
        let snapshot = snapshot_with_text("hello");
        assert_eq!(evaluate(&snapshot, "h"), TriggerResult::PassThrough);
        assert_eq!(evaluate(&snapshot, " "), TriggerResult::PassThrough);
        assert_eq!(evaluate(&snapshot, "##"), TriggerResult::PassThrough);
        assert_eq!(evaluate(&snapshot, "****"), TriggerResult::PassThrough);
    }

    // ===================================================================
    // `#`: block kind
    // ===================================================================

    #[test]
    fn hash_sets_block_kind_to_header_one() {
        let snapshot = snapshot_with_text("hello");
        let next = handled(evaluate(&snapshot, "#"));
        let block = next.document().first_block();
        assert_eq!(block.kind(), &BlockKind::HeaderOne);
        assert_eq!(block.text(), "hello");
        assert_eq!(next.selection(), snapshot.selection());
    }

    #[test]
    fn hash_on_header_block_stays_header_one() {
        let snapshot = snapshot_with_text("title");
        let once = handled(evaluate(&snapshot, "#"));
        let twice = handled(evaluate(&once, "#"));
        assert_eq!(twice.document().first_block().kind(), &BlockKind::HeaderOne);
        assert_eq!(twice, once);
    }

    #[test]
    fn hash_on_empty_block_changes_kind_only() {
        let snapshot = snapshot_with_text("");
        let next = handled(evaluate(&snapshot, "#"));
        let block = next.document().first_block();
        assert_eq!(block.kind(), &BlockKind::HeaderOne);
        assert_eq!(block.text(), "");
        assert!(block.style_ranges().is_empty());
    }

    // ===================================================================
    // Star triggers: style toggles
    // ===================================================================

    #[test]
    fn single_star_toggles_bold_over_existing_content() {
        let snapshot = snapshot_with_text("hello");
        let next = handled(evaluate(&snapshot, "*"));
        assert_eq!(
            next.document().first_block().style_ranges(),
            &[StyleRange::new(0, 5, StyleTag::Bold)],
        );
    }

    #[test]
    fn single_star_twice_toggles_bold_back_off() {
        let snapshot = snapshot_with_text("hello");
        let on = handled(evaluate(&snapshot, "*"));
        let off = handled(evaluate(&on, "*"));
        assert_eq!(off.document(), snapshot.document());
    }

    #[test]
    fn double_star_toggles_redline() {
        let snapshot = snapshot_with_text("hello");
        let next = handled(evaluate(&snapshot, "**"));
        assert_eq!(
            next.document().first_block().style_ranges(),
            &[StyleRange::new(0, 5, StyleTag::Redline)],
        );
    }

    #[test]
    fn triple_star_toggles_underline() {
        let snapshot = snapshot_with_text("hello");
        let next = handled(evaluate(&snapshot, "***"));
        assert_eq!(
            next.document().first_block().style_ranges(),
            &[StyleRange::new(0, 5, StyleTag::Underline)],
        );
    }

    #[test]
    fn exact_text_resolves_most_specific_trigger() {
        // "***" must land on Underline, not on Bold three times or
        // Redline-then-Bold.
        let snapshot = snapshot_with_text("x");
        let next = handled(evaluate(&snapshot, "***"));
        let tags: Vec<_> = next
            .document()
            .first_block()
            .style_ranges()
            .iter()
            .map(|r| r.tag.clone())
            .collect();
        assert_eq!(tags, vec![StyleTag::Underline]);
    }

    #[test]
    fn star_on_empty_block_is_handled_but_structural_noop() {
        let snapshot = snapshot_with_text("");
        let next = handled(evaluate(&snapshot, "*"));
        assert_eq!(next.document(), snapshot.document());
    }

    #[test]
    fn style_toggle_does_not_move_the_selection() {
        let snapshot = snapshot_with_text("hello");
        let next = handled(evaluate(&snapshot, "**"));
        assert_eq!(next.selection(), snapshot.selection());
    }

    // ===================================================================
    // Pass-through leaves the document alone
    // ===================================================================

    #[test]
    fn pass_through_never_alters_the_snapshot() {
        let snapshot = snapshot_with_text("hello");
        let before = snapshot.clone();
        let _ = evaluate(&snapshot, "q");
        assert_eq!(snapshot, before);
    }
}
