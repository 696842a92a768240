//! Host-agnostic keyboard input.

/// A key, named after the DOM `KeyboardEvent.key` values the core reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Tab,
    Escape,
    Enter,
    Other(String),
}

impl Key {
    /// Maps a DOM key name to a [`Key`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Tab" => Key::Tab,
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            other => Key::Other(other.to_string()),
        }
    }
}

/// A key press together with the modifiers the core inspects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub alt: bool,
    pub shift: bool,
}

impl KeyEvent {
    /// A key press with no modifiers held.
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            alt: false,
            shift: false,
        }
    }

    /// Marks the Alt modifier as held.
    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Marks the Shift modifier as held.
    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}
