//! Reorder engine: drag/drop and keyboard state machine without I/O.
//!
//! The engine holds only ephemeral gesture state (the dragged item and the
//! current drop target). The collection itself is passed in on every command
//! and the reordered result leaves through the `on_reorder` callback.

use crate::geometry::{Orientation, Point, Rect};
use std::fmt::Debug;
use tierlist_types::KeyEvent;
use tracing::debug;

/// Where the dragged item lands relative to the hovered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPosition {
    Before,
    After,
}

impl DropPosition {
    /// Resolves the drop position from the pointer and the hovered item's
    /// bounds. Only the hovered item's own midpoint is consulted.
    #[must_use]
    pub fn from_pointer(pointer: Point, bounds: Rect, orientation: Orientation) -> Self {
        if pointer.along(orientation) < bounds.midpoint(orientation) {
            DropPosition::Before
        } else {
            DropPosition::After
        }
    }
}

/// Candidate insertion point while a drag is in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget<K> {
    pub key: K,
    pub position: DropPosition,
}

/// Per-item view state for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemState {
    pub is_dragging: bool,
    pub drop_indicator: Option<DropPosition>,
}

/// Result of a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The dragged item moved from one index to another.
    Reordered { from: usize, to: usize },
    /// Nothing changed: no drag in progress, no target, a self-drop, or a key
    /// that is no longer in the collection.
    Cancelled,
}

type KeyFn<E, K> = Box<dyn Fn(&E) -> K>;
type ReorderFn<E> = Box<dyn FnMut(Vec<E>)>;
type Listener = Box<dyn FnMut()>;

/// Reordering engine over a caller-owned sequence of `E` keyed by `K`.
///
/// One drag session may be active per engine. Starting a new drag while one
/// is active replaces the dragged item; hosts are expected not to start a
/// second drag before the first ends, and the engine does not enforce it.
pub struct Reorderable<E, K> {
    key: KeyFn<E, K>,
    on_reorder: ReorderFn<E>,
    orientation: Orientation,
    /// The item being dragged (drag session).
    active: Option<E>,
    drop_target: Option<DropTarget<K>>,
    listeners: Vec<Listener>,
}

impl<E, K> Reorderable<E, K>
where
    E: Clone,
    K: PartialEq + Clone + Debug,
{
    /// Creates an idle engine with vertical orientation.
    pub fn new(
        key: impl Fn(&E) -> K + 'static,
        on_reorder: impl FnMut(Vec<E>) + 'static,
    ) -> Self {
        Self {
            key: Box::new(key),
            on_reorder: Box::new(on_reorder),
            orientation: Orientation::default(),
            active: None,
            drop_target: None,
            listeners: Vec::new(),
        }
    }

    /// Sets the drag axis.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Registers a listener invoked after every drag-state transition.
    pub fn on_change(&mut self, listener: impl FnMut() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ── Queries ──────────────────────────────────────────────────

    /// The item currently being dragged.
    pub fn active_item(&self) -> Option<&E> {
        self.active.as_ref()
    }

    /// The current drop target, if the pointer is over a candidate.
    pub fn drop_target(&self) -> Option<&DropTarget<K>> {
        self.drop_target.as_ref()
    }

    /// Returns true while a drag session exists.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// View state for one item.
    pub fn item_state(&self, item: &E) -> ItemState {
        let key = (self.key)(item);
        ItemState {
            is_dragging: self
                .active
                .as_ref()
                .is_some_and(|active| (self.key)(active) == key),
            drop_indicator: self
                .drop_target
                .as_ref()
                .filter(|target| target.key == key)
                .map(|target| target.position),
        }
    }

    /// Event handlers bound to one item.
    pub fn handlers<'a>(&'a mut self, item: &'a E) -> ItemHandlers<'a, E, K> {
        ItemHandlers { engine: self, item }
    }

    // ── Drag commands ────────────────────────────────────────────

    /// Starts a drag session for `item`.
    pub fn drag_start(&mut self, item: &E) {
        debug!(key = ?(self.key)(item), "drag started");
        self.active = Some(item.clone());
        self.notify();
    }

    /// Updates the drop target while hovering `item`.
    ///
    /// Returns true when the hover was accepted as a drop candidate (the host
    /// should then suppress its default drag-over handling).
    pub fn drag_over(&mut self, item: &E, pointer: Point, bounds: Rect) -> bool {
        if self.active.is_none() {
            return false;
        }
        let target = DropTarget {
            key: (self.key)(item),
            position: DropPosition::from_pointer(pointer, bounds, self.orientation),
        };
        if self.drop_target.as_ref() != Some(&target) {
            self.drop_target = Some(target);
            self.notify();
        }
        true
    }

    /// Clears the drop target when the pointer leaves the targeted item.
    /// The drag session continues.
    pub fn drag_leave(&mut self, item: &E) {
        let key = (self.key)(item);
        if self
            .drop_target
            .as_ref()
            .is_some_and(|target| target.key == key)
        {
            self.drop_target = None;
            self.notify();
        }
    }

    /// Completes the drag by moving the dragged item to the drop target.
    ///
    /// The dragged item is removed first, then the target is located in the
    /// reduced sequence; `After` inserts one past it.
    pub fn finish_drop(&mut self, items: &[E]) -> DragOutcome {
        let outcome = self.apply_drop(items);
        self.clear();
        outcome
    }

    /// Ends the drag without a drop. The collection is left untouched.
    pub fn drag_end(&mut self) {
        if self.active.is_some() || self.drop_target.is_some() {
            debug!("drag ended without drop");
            self.clear();
        }
    }

    fn apply_drop(&mut self, items: &[E]) -> DragOutcome {
        let (Some(active), Some(target)) = (self.active.as_ref(), self.drop_target.as_ref()) else {
            return DragOutcome::Cancelled;
        };
        let active_key = (self.key)(active);
        if active_key == target.key {
            return DragOutcome::Cancelled;
        }

        let Some(from) = self.index_of(items, &active_key) else {
            return DragOutcome::Cancelled;
        };
        let mut next = items.to_vec();
        let moved = next.remove(from);

        let Some(mut to) = next.iter().position(|i| (self.key)(i) == target.key) else {
            return DragOutcome::Cancelled;
        };
        if target.position == DropPosition::After {
            to += 1;
        }
        next.insert(to, moved);

        debug!(key = ?active_key, from, to, "drop reordered collection");
        (self.on_reorder)(next);
        DragOutcome::Reordered { from, to }
    }

    // ── Keyboard ─────────────────────────────────────────────────

    /// Handles Alt+Arrow on a focused item. Returns the item's new index, or
    /// `None` when the key is not a move key or the move was refused.
    pub fn key_down(&mut self, items: &[E], item: &E, event: &KeyEvent) -> Option<usize> {
        if !event.alt {
            return None;
        }
        let delta = if event.key == self.orientation.prev_key() {
            -1
        } else if event.key == self.orientation.next_key() {
            1
        } else {
            return None;
        };
        self.move_item(items, item, delta)
    }

    /// Moves `item` by `delta` positions.
    ///
    /// Returns the new index, or `None` ("not moved") when the item is not in
    /// `items` or the destination falls outside `[0, len)`. Out-of-range
    /// moves are refused, never clamped or wrapped.
    pub fn move_item(&mut self, items: &[E], item: &E, delta: isize) -> Option<usize> {
        let key = (self.key)(item);
        let from = self.index_of(items, &key)?;
        let to = from
            .checked_add_signed(delta)
            .filter(|to| *to < items.len())?;

        if from != to {
            let mut next = items.to_vec();
            let moved = next.remove(from);
            next.insert(to, moved);
            debug!(key = ?key, from, to, "keyboard move");
            (self.on_reorder)(next);
        }
        Some(to)
    }

    // ── Internals ────────────────────────────────────────────────

    fn index_of(&self, items: &[E], key: &K) -> Option<usize> {
        items.iter().position(|i| (self.key)(i) == *key)
    }

    fn clear(&mut self) {
        self.active = None;
        self.drop_target = None;
        self.notify();
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener();
        }
    }
}

/// Event handlers for a single item, mirroring the DOM drag events.
pub struct ItemHandlers<'a, E, K> {
    engine: &'a mut Reorderable<E, K>,
    item: &'a E,
}

impl<E, K> ItemHandlers<'_, E, K>
where
    E: Clone,
    K: PartialEq + Clone + Debug,
{
    /// Items are always draggable.
    pub fn draggable(&self) -> bool {
        true
    }

    pub fn on_drag_start(self) {
        self.engine.drag_start(self.item);
    }

    pub fn on_drag_over(self, pointer: Point, bounds: Rect) -> bool {
        self.engine.drag_over(self.item, pointer, bounds)
    }

    pub fn on_drag_leave(self) {
        self.engine.drag_leave(self.item);
    }

    /// The drop applies to the current drop target, not necessarily the item
    /// the event fired on.
    pub fn on_drop(self, items: &[E]) -> DragOutcome {
        self.engine.finish_drop(items)
    }

    pub fn on_drag_end(self) {
        self.engine.drag_end();
    }

    pub fn on_key_down(self, items: &[E], event: &KeyEvent) -> Option<usize> {
        self.engine.key_down(items, self.item, event)
    }
}
