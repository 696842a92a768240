//! Filter criteria and their query-string form.

use crate::pipeline::Filterable;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tierlist_types::{Gender, Race, Tier};

/// Query-string token selecting players without a crew.
pub const FREE_AGENT_SENTINEL: &str = "FA";

/// Crew constraint. Matching is OR within the field: a free agent passes
/// when free agents are included, a crew member passes when their crew is
/// named. With nothing selected the field does not constrain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewFilter {
    #[serde(default)]
    pub include_free_agents: bool,
    #[serde(default)]
    pub names: Vec<String>,
}

impl CrewFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.include_free_agents && self.names.is_empty()
    }

    pub fn matches<E: Filterable + ?Sized>(&self, entity: &E) -> bool {
        if self.is_empty() {
            return true;
        }
        let free_agent = self.include_free_agents && entity.is_unaffiliated();
        let member = entity
            .crew_name()
            .is_some_and(|crew| self.names.iter().any(|name| name == crew));
        free_agent || member
    }
}

/// Independent, optional predicates combined with AND.
///
/// An empty list or `None` means "no constraint on that field", never
/// "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub races: Vec<Race>,
    #[serde(default)]
    pub tiers: Vec<Tier>,
    #[serde(default)]
    pub crews: CrewFilter,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Case-insensitive substring of the display name.
    #[serde(default)]
    pub search: Option<String>,
}

impl FilterCriteria {
    /// Criteria that match everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_races(mut self, races: impl IntoIterator<Item = Race>) -> Self {
        self.races = races.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_tiers(mut self, tiers: impl IntoIterator<Item = Tier>) -> Self {
        self.tiers = tiers.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_crews<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.crews.names = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_free_agents(mut self) -> Self {
        self.crews.include_free_agents = true;
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Returns true if any field constrains the result.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.races.is_empty()
            || !self.tiers.is_empty()
            || !self.crews.is_empty()
            || self.gender.is_some()
            || self.search_needle().is_some()
    }

    /// Lower-cased search text, or `None` when the search is blank.
    pub(crate) fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Tests a single entity against every field.
    pub fn matches<E: Filterable + ?Sized>(&self, entity: &E) -> bool {
        self.matches_with(entity, self.search_needle().as_deref())
    }

    pub(crate) fn matches_with<E: Filterable + ?Sized>(
        &self,
        entity: &E,
        needle: Option<&str>,
    ) -> bool {
        if !self.races.is_empty() && !self.races.contains(&entity.race()) {
            return false;
        }
        if !self.tiers.is_empty() {
            match entity.tier() {
                Some(tier) if self.tiers.contains(&tier) => {}
                _ => return false,
            }
        }
        if !self.crews.matches(entity) {
            return false;
        }
        if self.gender.is_some_and(|g| g != entity.gender()) {
            return false;
        }
        if let Some(needle) = needle {
            if !entity.display_name().to_lowercase().contains(needle) {
                return false;
            }
        }
        true
    }

    // ── Query string ─────────────────────────────────────────────

    /// Parses `race=T,Z&tier=God&crew=FA,Alpha&gender=M&search=text`.
    ///
    /// Lists are comma-separated. Unknown keys and values are ignored, and
    /// `gender=ALL` leaves gender unconstrained.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut criteria = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "race" => criteria.races = parse_list(raw),
                "tier" => criteria.tiers = parse_list(raw),
                "crew" => {
                    for token in decode_list(raw) {
                        if token == FREE_AGENT_SENTINEL {
                            criteria.crews.include_free_agents = true;
                        } else {
                            criteria.crews.names.push(token);
                        }
                    }
                }
                "gender" => criteria.gender = decode(raw).and_then(|v| v.parse().ok()),
                "search" => criteria.search = decode(raw).filter(|v| !v.is_empty()),
                _ => {}
            }
        }
        criteria
    }

    /// Renders the criteria back into query-string form, omitting fields
    /// that do not constrain.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut params = Vec::new();

        if !self.races.is_empty() {
            params.push(format!("race={}", join(self.races.iter().map(Race::as_str))));
        }
        if !self.tiers.is_empty() {
            params.push(format!("tier={}", join(self.tiers.iter().map(Tier::as_str))));
        }
        if !self.crews.is_empty() {
            let sentinel = self
                .crews
                .include_free_agents
                .then_some(FREE_AGENT_SENTINEL);
            let names = sentinel
                .into_iter()
                .chain(self.crews.names.iter().map(String::as_str));
            params.push(format!("crew={}", join(names)));
        }
        if let Some(gender) = self.gender {
            params.push(format!("gender={}", gender.as_str()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(format!("search={}", urlencoding::encode(search)));
        }
        params.join("&")
    }
}

/// Decodes one query value, treating `+` as a space. Malformed
/// percent-escapes yield `None`.
fn decode(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|v| v.into_owned())
}

/// Splits a comma-separated value before decoding, so an encoded `%2C`
/// stays inside its token.
fn decode_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',')
        .filter_map(decode)
        .filter(|token| !token.is_empty())
}

fn parse_list<T: FromStr>(raw: &str) -> Vec<T> {
    decode_list(raw)
        .filter_map(|token| token.parse().ok())
        .collect()
}

fn join<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values
        .map(|v| urlencoding::encode(v).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}
