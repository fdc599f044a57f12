//! List DragDrop Utilities
//!
//! Drag-and-drop session state for a flat, reorderable list.
//! Uses a movement threshold to distinguish click from drag.
//! Rendering and event wiring stay with the caller: it feeds pointer
//! positions and item boxes in, and reads the session state back out.

use serde::{Deserialize, Serialize};

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropTarget {
    /// Insert before the item currently at this index
    Index(usize),
    /// Drop after the last item
    End,
}

impl DropTarget {
    /// Target for a drop onto the item at `index` in a list of `len`.
    /// The dragged item goes before it, except that dropping onto the last
    /// item places the dragged one after it.
    pub fn onto(index: usize, len: usize) -> Self {
        if index + 1 >= len {
            DropTarget::End
        } else {
            DropTarget::Index(index)
        }
    }
}

/// Vertical extent of a rendered item, as reported by the presentation layer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemBox {
    pub top: f64,
    pub height: f64,
}

impl ItemBox {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Pressed but not yet dragging
#[derive(Clone, Copy, Debug, PartialEq)]
struct Pending {
    index: usize,
    start_x: f64,
    start_y: f64,
}

/// DnD state for one list
#[derive(Clone, Debug, Default)]
pub struct DragState {
    pending: Option<Pending>,
    dragging: Option<usize>,
    drop_target: Option<DropTarget>,
    just_ended: bool,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index being dragged, if a drag is active
    pub fn dragging(&self) -> Option<usize> {
        self.dragging
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    pub fn drop_target(&self) -> Option<DropTarget> {
        self.drop_target
    }

    /// True right after a drag ended, until the next press.
    /// Lets the caller swallow the click that follows a release.
    pub fn just_ended(&self) -> bool {
        self.just_ended
    }

    /// Record a pending drag with its start position
    pub fn press(&mut self, index: usize, x: f64, y: f64) {
        self.just_ended = false;
        self.pending = Some(Pending {
            index,
            start_x: x,
            start_y: y,
        });
    }

    /// Start dragging if the pointer moved far enough since `press`.
    /// Returns true when this call promoted the pending press into a drag.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        if self.dragging.is_some() {
            return false;
        }
        let Some(pending) = self.pending else {
            return false;
        };

        let dx = (x - pending.start_x).abs();
        let dy = (y - pending.start_y).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            self.dragging = Some(pending.index);
            return true;
        }
        false
    }

    /// Begin dragging immediately, skipping the threshold
    pub fn start(&mut self, index: usize) {
        self.just_ended = false;
        self.pending = None;
        self.drop_target = None;
        self.dragging = Some(index);
    }

    /// Update the drop target from the pointer position.
    ///
    /// `hovered` is the index under the pointer; it is ignored when it is the
    /// dragged item itself. The insertion slot comes from [`insertion_hint`].
    pub fn hover(&mut self, hovered: usize, pointer_y: f64, boxes: &[ItemBox]) -> Option<DropTarget> {
        let dragging = self.dragging?;
        // Don't allow dropping on self
        if hovered == dragging {
            self.drop_target = None;
            return None;
        }

        let target = match insertion_hint(boxes, dragging, pointer_y) {
            Some(index) => DropTarget::Index(index),
            None => DropTarget::End,
        };
        self.drop_target = Some(target);
        Some(target)
    }

    /// Pointer left the list
    pub fn leave(&mut self) {
        if self.dragging.is_some() {
            self.drop_target = None;
        }
    }

    /// Finish the gesture. Returns the dragged index and target only when a
    /// drag was active and had a target; the state is idle afterwards either way.
    pub fn release(&mut self) -> Option<(usize, DropTarget)> {
        let result = match (self.dragging, self.drop_target) {
            (Some(dragged), Some(target)) => Some((dragged, target)),
            _ => None,
        };
        self.end();
        result
    }

    /// End drag operation
    pub fn end(&mut self) {
        self.just_ended = self.dragging.is_some();
        self.pending = None;
        self.dragging = None;
        self.drop_target = None;
    }
}

/// Midpoint heuristic: among all boxes except `dragging`, the first whose
/// vertical midpoint lies below `pointer_y`. `None` means past the last item.
pub fn insertion_hint(boxes: &[ItemBox], dragging: usize, pointer_y: f64) -> Option<usize> {
    boxes
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != dragging)
        .find(|(_, b)| pointer_y < b.midpoint())
        .map(|(index, _)| index)
}

/// Move the element at `from` so that it ends up at index `to`.
///
/// The element is removed first and reinserted into the shortened list, so
/// moving down places it after the element previously at `to`, and moving to
/// the last index makes it last. Returns false (list untouched) when either
/// index is out of range or they are equal.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// Final index of the dragged item when it is dropped on `target`,
/// suitable for [`move_item`]. Moving down past `Index(i)` lands at `i - 1`
/// because the dragged item no longer occupies its old slot.
pub fn resolve_target(target: DropTarget, from: usize, len: usize) -> Option<usize> {
    match target {
        DropTarget::Index(index) if index >= len => None,
        DropTarget::Index(index) if from < index => Some(index - 1),
        DropTarget::Index(index) => Some(index),
        DropTarget::End => len.checked_sub(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxes(n: usize) -> Vec<ItemBox> {
        (0..n).map(|i| ItemBox::new(i as f64 * 40.0, 40.0)).collect()
    }

    #[test]
    fn test_press_without_movement_is_not_a_drag() {
        let mut state = DragState::new();
        state.press(2, 100.0, 100.0);
        assert!(!state.pointer_move(103.0, 104.0));
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_movement_past_threshold_starts_drag() {
        let mut state = DragState::new();
        state.press(1, 10.0, 10.0);
        assert!(state.pointer_move(10.0, 16.0));
        assert_eq!(state.dragging(), Some(1));
        // Already dragging, no second promotion
        assert!(!state.pointer_move(10.0, 40.0));
    }

    #[test]
    fn test_hover_on_self_clears_target() {
        let mut state = DragState::new();
        state.start(1);
        assert_eq!(state.hover(1, 50.0, &boxes(3)), None);
        assert_eq!(state.drop_target(), None);
    }

    #[test]
    fn test_hover_uses_midpoint() {
        let mut state = DragState::new();
        state.start(0);
        // Box 1 spans 40..80, midpoint 60
        assert_eq!(state.hover(1, 55.0, &boxes(3)), Some(DropTarget::Index(1)));
        assert_eq!(state.hover(1, 65.0, &boxes(3)), Some(DropTarget::Index(2)));
        assert_eq!(state.hover(2, 119.0, &boxes(3)), Some(DropTarget::End));
    }

    #[test]
    fn test_insertion_hint_skips_dragged_box() {
        // Pointer above the dragged item's midpoint still resolves to the next one
        assert_eq!(insertion_hint(&boxes(3), 1, 45.0), Some(2));
        assert_eq!(insertion_hint(&boxes(3), 1, 10.0), Some(0));
    }

    #[test]
    fn test_release_without_target_returns_none() {
        let mut state = DragState::new();
        state.start(0);
        assert_eq!(state.release(), None);
        assert!(!state.is_dragging());
        assert!(state.just_ended());
    }

    #[test]
    fn test_release_with_target() {
        let mut state = DragState::new();
        state.start(0);
        state.hover(2, 70.0, &boxes(3));
        assert_eq!(state.release(), Some((0, DropTarget::Index(2))));
        assert_eq!(state.dragging(), None);
        assert_eq!(state.drop_target(), None);
    }

    #[test]
    fn test_leave_clears_target_only() {
        let mut state = DragState::new();
        state.start(2);
        state.hover(0, 5.0, &boxes(3));
        state.leave();
        assert_eq!(state.drop_target(), None);
        assert_eq!(state.dragging(), Some(2));
    }

    #[test]
    fn test_move_item_down_and_to_end() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        assert!(move_item(&mut v, 0, 2));
        assert_eq!(v, vec!['b', 'c', 'a', 'd']);

        let mut v = vec!['a', 'b', 'c', 'd'];
        assert!(move_item(&mut v, 1, 3));
        assert_eq!(v, vec!['a', 'c', 'd', 'b']);
    }

    #[test]
    fn test_move_item_up() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        assert!(move_item(&mut v, 3, 1));
        assert_eq!(v, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_move_item_rejects_bad_indices() {
        let mut v = vec![1, 2, 3];
        assert!(!move_item(&mut v, 1, 1));
        assert!(!move_item(&mut v, 3, 0));
        assert!(!move_item(&mut v, 0, 5));
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(resolve_target(DropTarget::End, 0, 4), Some(3));
        assert_eq!(resolve_target(DropTarget::End, 0, 0), None);
        // Moving up: lands on the hinted slot
        assert_eq!(resolve_target(DropTarget::Index(1), 3, 4), Some(1));
        // Moving down: lands just before the hinted item
        assert_eq!(resolve_target(DropTarget::Index(3), 0, 4), Some(2));
        assert_eq!(resolve_target(DropTarget::Index(4), 0, 4), None);
    }

    #[test]
    fn test_drop_onto_item() {
        assert_eq!(DropTarget::onto(2, 4), DropTarget::Index(2));
        assert_eq!(DropTarget::onto(3, 4), DropTarget::End);
        assert_eq!(DropTarget::onto(0, 1), DropTarget::End);

        // Moving down onto 'c' ends right before it
        let mut v = vec!['a', 'b', 'c', 'd'];
        let to = resolve_target(DropTarget::onto(2, v.len()), 0, v.len()).unwrap();
        assert!(move_item(&mut v, 0, to));
        assert_eq!(v, vec!['b', 'a', 'c', 'd']);

        // Onto the next neighbour is already in place
        assert_eq!(resolve_target(DropTarget::onto(1, 4), 0, 4), Some(0));
    }

    #[test]
    fn test_hint_then_move_places_item_before_hinted_one() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        let to = resolve_target(DropTarget::Index(3), 0, v.len()).unwrap();
        assert!(move_item(&mut v, 0, to));
        assert_eq!(v, vec!['b', 'c', 'a', 'd']);
    }
}
