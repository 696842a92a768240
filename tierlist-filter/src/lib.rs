//! Filter and tier-grouping pipeline.
//!
//! Turns a flat, pre-sorted entity list plus a [`FilterCriteria`] into view
//! data:
//!
//! - [`derive_grouped`]: tier → entities, skipping unranked entities
//! - [`derive_flat`]: the filtered list itself
//!
//! Both are pure: identical inputs give structurally equal outputs, input
//! order is preserved within each group, and the [`DisplayOrder`] used to
//! walk the groups is never read or modified by the derivation.
//!
//! [`DisplayOrder`]: tierlist_types::DisplayOrder

mod criteria;
mod pipeline;

pub use criteria::{CrewFilter, FREE_AGENT_SENTINEL, FilterCriteria};
pub use pipeline::{Filterable, GroupedRoster, derive_flat, derive_grouped};
