use crate::{Error, Result, Tier};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A player's in-game race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Race {
    #[serde(rename = "T")]
    Terran,
    #[serde(rename = "Z")]
    Zerg,
    #[serde(rename = "P")]
    Protoss,
}

impl Race {
    pub const ALL: [Race; 3] = [Race::Terran, Race::Zerg, Race::Protoss];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Race::Terran => "T",
            Race::Zerg => "Z",
            Race::Protoss => "P",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Race {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Race::ALL
            .into_iter()
            .find(|race| race.as_str() == s)
            .ok_or_else(|| Error::UnknownRace(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            other => Err(Error::UnknownGender(other.to_string())),
        }
    }
}

/// Status badge shown next to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "승급임박")]
    PromotionImminent,
    #[serde(rename = "상승")]
    Rising,
    #[serde(rename = "new")]
    New,
    #[serde(rename = "inactive")]
    Inactive,
}

impl Tag {
    /// Returns the badge text as stored by the data source.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Tag::PromotionImminent => "승급임박",
            Tag::Rising => "상승",
            Tag::New => "new",
            Tag::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A roster entry as supplied by the entity source.
///
/// `id` is the stable key. `tier` is `None` for unranked players, who are
/// left out of the tier-grouped view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub nickname: String,
    pub race: Race,
    pub tier: Option<Tier>,
    pub gender: Gender,
    #[serde(default)]
    pub crew_id: Option<i64>,
    #[serde(default)]
    pub crew_name: Option<String>,
    /// Free agent, i.e. not affiliated with any crew.
    #[serde(default)]
    pub is_fa: bool,
    #[serde(default)]
    pub tag: Option<Tag>,
    #[serde(default)]
    pub status: String,
}

impl Player {
    /// Avatar initials for this player's nickname.
    #[must_use]
    pub fn initials(&self) -> String {
        initials(&self.nickname)
    }
}

/// Extracts avatar initials from a nickname.
///
/// A Hangul first syllable is used on its own; otherwise nicknames of up to
/// two characters are upper-cased whole, longer ones contribute their first
/// two characters.
#[must_use]
pub fn initials(nickname: &str) -> String {
    let Some(first) = nickname.chars().next() else {
        return String::new();
    };

    if ('\u{AC00}'..='\u{D7A3}').contains(&first) {
        return first.to_string();
    }
    nickname.chars().take(2).collect::<String>().to_uppercase()
}
