use crate::criteria::FilterCriteria;
use std::collections::BTreeMap;
use tierlist_types::{DisplayOrder, Gender, Player, Race, Tier};
use tracing::trace;

/// The fields the pipeline reads from an entity.
pub trait Filterable {
    fn race(&self) -> Race;
    /// `None` for unranked entities.
    fn tier(&self) -> Option<Tier>;
    fn gender(&self) -> Gender;
    fn crew_name(&self) -> Option<&str>;
    /// True when the entity belongs to no crew.
    fn is_unaffiliated(&self) -> bool;
    fn display_name(&self) -> &str;
}

impl Filterable for Player {
    fn race(&self) -> Race {
        self.race
    }

    fn tier(&self) -> Option<Tier> {
        self.tier
    }

    fn gender(&self) -> Gender {
        self.gender
    }

    fn crew_name(&self) -> Option<&str> {
        self.crew_name.as_deref()
    }

    fn is_unaffiliated(&self) -> bool {
        self.is_fa
    }

    fn display_name(&self) -> &str {
        &self.nickname
    }
}

/// Entities bucketed by tier. Tiers with no entities are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedRoster<E> {
    groups: BTreeMap<Tier, Vec<E>>,
}

impl<E> Default for GroupedRoster<E> {
    fn default() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }
}

impl<E> GroupedRoster<E> {
    /// The bucket for a tier, if it received any entity.
    pub fn get(&self, tier: Tier) -> Option<&[E]> {
        self.groups.get(&tier).map(Vec::as_slice)
    }

    /// Number of entities in a tier's bucket.
    pub fn count(&self, tier: Tier) -> usize {
        self.groups.get(&tier).map_or(0, Vec::len)
    }

    /// Total number of grouped entities.
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Number of non-empty tiers.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Non-empty buckets in the caller's display order.
    pub fn sections<'a>(
        &'a self,
        order: &'a DisplayOrder,
    ) -> impl Iterator<Item = (Tier, &'a [E])> + 'a {
        order
            .iter()
            .filter_map(|tier| self.get(tier).map(|entities| (tier, entities)))
    }

    /// Returns true if any tier in `order` has at least one entity.
    pub fn has_any_results(&self, order: &DisplayOrder) -> bool {
        self.sections(order).next().is_some()
    }

    pub fn into_map(self) -> BTreeMap<Tier, Vec<E>> {
        self.groups
    }
}

/// Groups the entities passing `criteria` by tier.
///
/// Unranked entities are skipped. Relative input order is kept inside each
/// bucket; no re-sorting happens here.
pub fn derive_grouped<E>(entities: &[E], criteria: &FilterCriteria) -> GroupedRoster<E>
where
    E: Filterable + Clone,
{
    let needle = criteria.search_needle();
    let mut groups: BTreeMap<Tier, Vec<E>> = BTreeMap::new();

    for entity in entities {
        let Some(tier) = entity.tier() else {
            continue;
        };
        if criteria.matches_with(entity, needle.as_deref()) {
            groups.entry(tier).or_default().push(entity.clone());
        }
    }

    trace!(
        input = entities.len(),
        groups = groups.len(),
        "derived tier groups"
    );
    GroupedRoster { groups }
}

/// Filters entities into a flat list, keeping input order. Unranked entities
/// are kept unless a tier constraint excludes them.
pub fn derive_flat<E>(entities: &[E], criteria: &FilterCriteria) -> Vec<E>
where
    E: Filterable + Clone,
{
    let needle = criteria.search_needle();
    let matched: Vec<E> = entities
        .iter()
        .filter(|entity| criteria.matches_with(*entity, needle.as_deref()))
        .cloned()
        .collect();

    trace!(input = entities.len(), matched = matched.len(), "derived flat list");
    matched
}
