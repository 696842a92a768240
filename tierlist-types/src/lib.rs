//! Core type definitions for the tier list.
//!
//! This crate defines the domain vocabulary shared by every other crate:
//! - [`Tier`] and the canonical tier set, plus the validated [`DisplayOrder`]
//! - [`Player`] and its enumerated attributes ([`Race`], [`Gender`], [`Tag`])
//! - [`CardLayout`] for the roster card variants
//! - [`KeyEvent`] for host-agnostic keyboard input
//!
//! Nothing here knows about rendering, storage or timers.

mod input;
mod layout;
mod player;
mod tier;

pub use input::{Key, KeyEvent};
pub use layout::CardLayout;
pub use player::{Gender, Player, Race, Tag, initials};
pub use tier::{DisplayOrder, Tier};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown tier: {0}")]
    UnknownTier(String),

    #[error("unknown race: {0}")]
    UnknownRace(String),

    #[error("unknown gender: {0}")]
    UnknownGender(String),

    #[error("unknown card layout: {0}")]
    UnknownLayout(String),

    #[error("invalid display order: {0}")]
    InvalidDisplayOrder(String),
}
