use serde::{Deserialize, Serialize};
use tierlist_types::Key;

/// Axis along which items are laid out and dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Key that moves an item towards the start of the sequence.
    #[must_use]
    pub fn prev_key(&self) -> Key {
        match self {
            Orientation::Vertical => Key::ArrowUp,
            Orientation::Horizontal => Key::ArrowLeft,
        }
    }

    /// Key that moves an item towards the end of the sequence.
    #[must_use]
    pub fn next_key(&self) -> Key {
        match self {
            Orientation::Vertical => Key::ArrowDown,
            Orientation::Horizontal => Key::ArrowRight,
        }
    }
}

/// Pointer position in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The coordinate on the given axis.
    #[must_use]
    pub fn along(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Vertical => self.y,
            Orientation::Horizontal => self.x,
        }
    }
}

/// Bounding box of a rendered item in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Midpoint of the box on the given axis.
    #[must_use]
    pub fn midpoint(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Vertical => self.top + self.height / 2.0,
            Orientation::Horizontal => self.left + self.width / 2.0,
        }
    }
}
