//! Question List Editor
//!
//! Owns the ordered questions of one scenario while it is being edited:
//! - entry: persisted vs. new question rows
//! - reconcile: `save`, replaying the list onto the Scenario Store
//! - error: editor error taxonomy
//!
//! The list here is the only source of truth for order. A presentation layer
//! renders `entries()` and reports gestures back through the methods below.

mod entry;
mod error;
mod reconcile;


use std::sync::Arc;

use list_dragdrop::{DragState, DropTarget, ItemBox};

use crate::repository::QuestionRepository;

pub use entry::QuestionEntry;
pub use error::{EditorError, EditorResult};
pub use reconcile::{Change, SaveReport};

/// Editing session for the questions of a single scenario
pub struct QuestionEditor {
    repo: Arc<dyn QuestionRepository>,
    /// Scenario the entries belong to; `None` while creating a new scenario
    scenario_id: Option<u32>,
    entries: Vec<QuestionEntry>,
    drag: DragState,
}

impl QuestionEditor {
    /// Empty editor for a scenario that does not exist yet
    pub fn new(repo: Arc<dyn QuestionRepository>) -> Self {
        Self {
            repo,
            scenario_id: None,
            entries: Vec::new(),
            drag: DragState::new(),
        }
    }

    /// Editor loaded with the questions of `scenario_id`
    pub async fn open(repo: Arc<dyn QuestionRepository>, scenario_id: u32) -> EditorResult<Self> {
        let mut editor = Self::new(repo);
        editor.load(scenario_id).await?;
        Ok(editor)
    }

    // ========================
    // Accessors
    // ========================

    pub fn entries(&self) -> &[QuestionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn scenario_id(&self) -> Option<u32> {
        self.scenario_id
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn drag_source(&self) -> Option<usize> {
        self.drag.dragging()
    }

    pub fn hover_target(&self) -> Option<DropTarget> {
        self.drag.drop_target()
    }

    /// `(id, position-derived sort order)` per entry, as `save` would send them
    pub fn positions(&self) -> Vec<(Option<u32>, u32)> {
        self.entries
            .iter()
            .zip(1u32..)
            .map(|(entry, order)| (entry.id, order))
            .collect()
    }

    // ========================
    // List Operations
    // ========================

    /// Replace the list with the questions of `scenario_id`.
    ///
    /// Order and `sort_order` are kept as returned, including the backend's
    /// default of 0. On failure the editor
    /// keeps its previous scenario and entries.
    pub async fn load(&mut self, scenario_id: u32) -> EditorResult<()> {
        let questions = self.repo.list_by_scenario(scenario_id).await.map_err(|e| {
            log::warn!("loading questions of scenario {} failed: {}", scenario_id, e);
            EditorError::Remote(e)
        })?;

        self.entries = questions.iter().map(QuestionEntry::persisted).collect();
        self.scenario_id = Some(scenario_id);
        self.drag.end();
        log::info!("loaded {} questions for scenario {}", self.entries.len(), scenario_id);
        Ok(())
    }

    /// Append a new question. Blank text is rejected.
    pub fn add(&mut self, text: &str) -> EditorResult<&QuestionEntry> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EditorError::Validation("question text is empty".to_string()));
        }

        let index = self.entries.len();
        let sort_order = index as i32 + 1;
        self.entries.push(QuestionEntry::new(text, sort_order));
        log::debug!("added question #{}: {}", sort_order, text);
        Ok(&self.entries[index])
    }

    /// Replace the text of an entry in place. Any text is accepted here.
    pub fn update_text(&mut self, index: usize, text: impl Into<String>) -> EditorResult<()> {
        self.check_index(index)?;
        self.entries[index].text = text.into();
        Ok(())
    }

    /// Remove an entry.
    ///
    /// A persisted entry is deleted on the backend first and only dropped
    /// locally once that succeeded. Callers confirm with the user before
    /// calling this. Remaining entries keep their `sort_order` until the next
    /// renumbering.
    pub async fn remove(&mut self, index: usize) -> EditorResult<QuestionEntry> {
        self.check_index(index)?;

        if let Some(id) = self.entries[index].id {
            self.repo.delete(id).await.map_err(|e| {
                log::warn!("deleting question {} failed: {}", id, e);
                EditorError::Remote(e)
            })?;
            log::info!("deleted question {}", id);
        }

        // Indices held by a drag session are stale now
        self.drag.end();
        Ok(self.entries.remove(index))
    }

    // ========================
    // Drag & Drop
    // ========================

    /// Pointer pressed on the entry at `index`. Dragging starts only once
    /// the pointer moves past the threshold, so a plain click never drags.
    pub fn press(&mut self, index: usize, x: f64, y: f64) -> EditorResult<()> {
        self.check_index(index)?;
        self.drag.press(index, x, y);
        Ok(())
    }

    /// Pointer moved; returns true when this movement started a drag
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.drag.pointer_move(x, y)
    }

    /// Pointer left the list; the preview is dropped, the drag continues
    pub fn pointer_leave(&mut self) {
        self.drag.leave();
    }

    /// True right after a drag ended, so the click that follows the
    /// release can be ignored
    pub fn drag_just_ended(&self) -> bool {
        self.drag.just_ended()
    }

    /// Start dragging the entry at `index`
    pub fn begin_drag(&mut self, index: usize) -> EditorResult<()> {
        self.check_index(index)?;
        self.drag.start(index);
        Ok(())
    }

    /// Preview the insertion point while the pointer is over `target_index`.
    /// Never changes the list.
    pub fn drag_over(&mut self, target_index: usize, pointer_y: f64, boxes: &[ItemBox]) -> Option<DropTarget> {
        self.drag.hover(target_index, pointer_y, boxes)
    }

    /// Drop the dragged entry onto `target_index`.
    ///
    /// The entry is reinserted immediately before the one at `target_index`,
    /// or becomes last when `target_index` is the last index. Returns
    /// `Ok(false)` without changes when no drag is active or the entry is
    /// already in that place.
    pub fn drop_at(&mut self, target_index: usize) -> EditorResult<bool> {
        self.check_index(target_index)?;
        let Some(source) = self.drag.dragging() else {
            return Ok(false);
        };

        let len = self.entries.len();
        let Some(to) = list_dragdrop::resolve_target(DropTarget::onto(target_index, len), source, len) else {
            return Ok(false);
        };
        let moved = list_dragdrop::move_item(&mut self.entries, source, to);
        if moved {
            // Keep the session on the dragged entry
            self.drag.start(to);
            log::debug!("moved question from {} to {}", source + 1, to + 1);
        }
        Ok(moved)
    }

    /// Drop at the last previewed insertion point, then end the drag.
    /// Returns whether the list changed.
    pub fn release_drag(&mut self) -> EditorResult<bool> {
        let Some((source, target)) = self.drag.release() else {
            self.renumber();
            return Ok(false);
        };

        let moved = match list_dragdrop::resolve_target(target, source, self.entries.len()) {
            Some(to) => list_dragdrop::move_item(&mut self.entries, source, to),
            None => false,
        };
        self.renumber();
        Ok(moved)
    }

    /// Leave the drag session, dropped or cancelled, and renumber from position
    pub fn end_drag(&mut self) {
        self.drag.end();
        self.renumber();
    }

    // ========================
    // Helpers
    // ========================

    /// Entry at position `i` gets `sort_order = i + 1`
    fn renumber(&mut self) {
        for (entry, order) in self.entries.iter_mut().zip(1i32..) {
            entry.sort_order = order;
        }
    }

    fn check_index(&self, index: usize) -> EditorResult<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(EditorError::Index {
                index,
                len: self.entries.len(),
            })
        }
    }
}
