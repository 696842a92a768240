//! The tier board: everything behind the roster page that is not markup.
//!
//! [`TierBoard`] composes the filter pipeline, the debounced search input,
//! the persisted preferences and the reorder engine driving the tier
//! navigator. [`NavigatorPanel`] handles the navigator overlay's open state,
//! focus trapping and first-run tour.

mod board;
mod config;
mod navigator;

pub use board::{NavigatorItem, TierBoard, TierSection};
pub use config::BoardConfig;
pub use navigator::NavigatorPanel;
