use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How player cards are laid out inside a tier section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardLayout {
    #[default]
    Compact,
    Full,
    List,
}

impl CardLayout {
    pub const ALL: [CardLayout; 3] = [CardLayout::Compact, CardLayout::Full, CardLayout::List];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CardLayout::Compact => "compact",
            CardLayout::Full => "full",
            CardLayout::List => "list",
        }
    }
}

impl fmt::Display for CardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardLayout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CardLayout::ALL
            .into_iter()
            .find(|layout| layout.as_str() == s)
            .ok_or_else(|| Error::UnknownLayout(s.to_string()))
    }
}
