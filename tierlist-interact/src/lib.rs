//! Interaction primitives shared by the roster views.
//!
//! - [`Debounced`]: an (immediate, settled) value pair; the settled side
//!   follows the immediate one after a quiet period
//! - [`FocusTrap`]: confines Tab / Shift+Tab to an overlay and handles
//!   Escape, against any document model implementing [`FocusHost`]
//! - [`ScrollHidden`] and [`ScrollDirection`]: sticky-bar visibility from
//!   scroll positions
//!
//! Everything here runs on the UI thread. The debounce timer is the only
//! asynchronous piece and uses the ambient tokio runtime.

mod debounce;
mod focus;
mod scroll;

pub use debounce::{DEFAULT_DELAY, Debounced};
pub use focus::{ElementInfo, FocusHost, FocusTrap, FocusTree, KeyDisposition, NodeId};
pub use scroll::{ScrollDirection, ScrollHidden};
