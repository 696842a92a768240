//! Reordering engine for ordered collections.
//!
//! [`Reorderable`] mutates a caller-owned sequence in response to pointer
//! drag events and keyboard move commands:
//!
//! - a drag session records the dragged item, drag-over events compute a
//!   [`DropTarget`] from the pointer position relative to the hovered item's
//!   midpoint, and a drop splices the dragged item into place;
//! - Alt+Arrow keys (or [`Reorderable::move_item`]) shift an item by one
//!   position, refusing moves that would leave the sequence.
//!
//! The engine never owns the collection. Every command receives the current
//! items, finds entries through the caller's key function, and hands the new
//! sequence to the `on_reorder` callback. It has no opinion on reactivity:
//! hosts register [`Reorderable::on_change`] listeners to re-render.

mod engine;
mod geometry;

pub use engine::{DragOutcome, DropPosition, DropTarget, ItemHandlers, ItemState, Reorderable};
pub use geometry::{Orientation, Point, Rect};
