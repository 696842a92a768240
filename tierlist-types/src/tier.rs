//! Skill tiers and the user-controlled order in which they are displayed.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named skill bracket. Players are grouped by tier.
///
/// Variants are declared in canonical order, so the derived `Ord` sorts
/// tiers the way the league publishes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    God,
    King,
    Jack,
    Joker,
    Spade,
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    Baby,
}

impl Tier {
    /// The canonical tier set, in canonical order.
    pub const ALL: [Tier; 15] = [
        Tier::God,
        Tier::King,
        Tier::Jack,
        Tier::Joker,
        Tier::Spade,
        Tier::Zero,
        Tier::One,
        Tier::Two,
        Tier::Three,
        Tier::Four,
        Tier::Five,
        Tier::Six,
        Tier::Seven,
        Tier::Eight,
        Tier::Baby,
    ];

    /// Returns the tier's wire name (`"God"`, `"0"`, `"Baby"`, ...).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Tier::God => "God",
            Tier::King => "King",
            Tier::Jack => "Jack",
            Tier::Joker => "Joker",
            Tier::Spade => "Spade",
            Tier::Zero => "0",
            Tier::One => "1",
            Tier::Two => "2",
            Tier::Three => "3",
            Tier::Four => "4",
            Tier::Five => "5",
            Tier::Six => "6",
            Tier::Seven => "7",
            Tier::Eight => "8",
            Tier::Baby => "Baby",
        }
    }

    /// Short description of the competitive level a tier corresponds to.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Tier::God => "메이저 프로리그, K리그 최상위",
            Tier::King => "K리그, H리그 중상위, ASL 24강급",
            Tier::Jack => "K리그, H리그 중하위, 아마고수 중상위",
            Tier::Joker => "조커리그, 젓갈리그, 아마고수 중하위",
            Tier::Spade => "스페이드 리그 중상위, 아재리그",
            Tier::Zero => "퀸메프, 스페이드 리그 중하위",
            Tier::One => "중메프 중상위권",
            Tier::Two => "중메프 중하위권, 퀸티어",
            Tier::Three => "안진마리그, LASL 본선급",
            Tier::Four => "사막리그",
            Tier::Five => "소나무리그",
            Tier::Six => "6부리그",
            Tier::Seven => "햄스터리그",
            Tier::Eight => "스타크루 유스 유입",
            Tier::Baby => "스타크래프트 입문단계",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| Error::UnknownTier(s.to_string()))
    }
}

/// The order in which tier sections are displayed.
///
/// Always a permutation of [`Tier::ALL`]: the only constructors validate
/// their input, and persisted data that fails validation is replaced with
/// the canonical order by [`DisplayOrder::from_persisted`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tier>", into = "Vec<Tier>")]
pub struct DisplayOrder(Vec<Tier>);

impl DisplayOrder {
    /// The canonical order.
    #[must_use]
    pub fn canonical() -> Self {
        Self(Tier::ALL.to_vec())
    }

    /// Validates that `tiers` is a full permutation of the canonical set.
    pub fn new(tiers: Vec<Tier>) -> Result<Self> {
        if tiers.len() != Tier::ALL.len() {
            return Err(Error::InvalidDisplayOrder(format!(
                "expected {} tiers, got {}",
                Tier::ALL.len(),
                tiers.len()
            )));
        }
        // Equal length plus full coverage rules out duplicates.
        if let Some(missing) = Tier::ALL.iter().find(|t| !tiers.contains(t)) {
            return Err(Error::InvalidDisplayOrder(format!("missing tier {missing}")));
        }
        Ok(Self(tiers))
    }

    /// Parses a JSON array of tier names.
    pub fn parse_json(raw: &str) -> Result<Self> {
        let tiers: Vec<Tier> = serde_json::from_str(raw)?;
        Self::new(tiers)
    }

    /// Parses persisted JSON, substituting the canonical order when the data
    /// is malformed, partial or not an array.
    #[must_use]
    pub fn from_persisted(raw: &str) -> Self {
        Self::parse_json(raw).unwrap_or_default()
    }

    /// Serializes the order as a JSON array of tier names.
    #[must_use]
    pub fn to_json(&self) -> String {
        let names: Vec<&str> = self.0.iter().map(Tier::as_str).collect();
        // A Vec<&str> always serializes.
        serde_json::to_string(&names).unwrap_or_default()
    }

    /// Returns the tiers in display order.
    #[must_use]
    pub fn as_slice(&self) -> &[Tier] {
        &self.0
    }

    /// Iterates the tiers in display order.
    pub fn iter(&self) -> impl Iterator<Item = Tier> + '_ {
        self.0.iter().copied()
    }

    /// Returns the display position of a tier.
    #[must_use]
    pub fn position(&self, tier: Tier) -> Option<usize> {
        self.0.iter().position(|t| *t == tier)
    }

    /// Returns true if this is the canonical order.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.0 == Tier::ALL
    }
}

impl Default for DisplayOrder {
    fn default() -> Self {
        Self::canonical()
    }
}

impl TryFrom<Vec<Tier>> for DisplayOrder {
    type Error = Error;

    fn try_from(tiers: Vec<Tier>) -> Result<Self> {
        Self::new(tiers)
    }
}

impl From<DisplayOrder> for Vec<Tier> {
    fn from(order: DisplayOrder) -> Self {
        order.0
    }
}
