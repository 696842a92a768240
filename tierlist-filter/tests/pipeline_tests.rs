mod common;

use common::{female, ids, player, roster, unranked};
use pretty_assertions::assert_eq;
use tierlist_filter::{FilterCriteria, derive_flat, derive_grouped};
use tierlist_types::{DisplayOrder, Gender, Race, Tier};

#[test]
fn empty_criteria_groups_every_ranked_player() {
    let grouped = derive_grouped(&roster(), &FilterCriteria::new());
    assert_eq!(grouped.total(), 7);
    assert_eq!(ids(grouped.get(Tier::God).unwrap()), vec![1, 2]);
    assert_eq!(ids(grouped.get(Tier::King).unwrap()), vec![3, 4]);
    assert_eq!(grouped.count(Tier::Spade), 0);
    assert!(grouped.get(Tier::Spade).is_none());
}

#[test]
fn unranked_players_are_skipped_when_grouping() {
    let players = vec![unranked(1, "a"), unranked(2, "b")];
    let grouped = derive_grouped(&players, &FilterCriteria::new());
    assert!(grouped.is_empty());
}

#[test]
fn unranked_players_stay_in_flat_list() {
    let flat = derive_flat(&roster(), &FilterCriteria::new());
    assert_eq!(flat.len(), 8);
    assert!(flat.iter().any(|p| p.id == 7));
}

#[test]
fn race_filter_keeps_members_only() {
    let criteria = FilterCriteria::new().with_races([Race::Zerg]);
    let flat = derive_flat(&roster(), &criteria);
    assert_eq!(ids(&flat), vec![2, 6]);
}

#[test]
fn tier_filter_excludes_unranked() {
    let criteria = FilterCriteria::new().with_tiers([Tier::King, Tier::Baby]);
    let flat = derive_flat(&roster(), &criteria);
    assert_eq!(ids(&flat), vec![3, 4, 8]);
}

#[test]
fn crew_names_without_sentinel_exclude_free_agents() {
    let criteria = FilterCriteria::new().with_crews(["Alpha"]);
    let flat = derive_flat(&roster(), &criteria);
    assert_eq!(ids(&flat), vec![1, 4]);
}

#[test]
fn sentinel_alone_selects_free_agents() {
    let criteria = FilterCriteria::new().with_free_agents();
    let grouped = derive_grouped(&roster(), &criteria);
    assert_eq!(grouped.total(), 3);
    assert_eq!(ids(grouped.get(Tier::God).unwrap()), vec![2]);
}

#[test]
fn crew_field_is_or_internally() {
    let criteria = FilterCriteria::new().with_free_agents().with_crews(["Beta"]);
    let flat = derive_flat(&roster(), &criteria);
    assert_eq!(ids(&flat), vec![2, 3, 6, 7, 8]);
}

#[test]
fn gender_is_exact_match() {
    let criteria = FilterCriteria::new().with_gender(Gender::Female);
    let flat = derive_flat(&roster(), &criteria);
    assert_eq!(ids(&flat), vec![5, 8]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let criteria = FilterCriteria::new().with_search("TOSS");
    let flat = derive_flat(&roster(), &criteria);
    assert_eq!(ids(&flat), vec![5]);

    let criteria = FilterCriteria::new().with_search("s");
    let flat = derive_flat(&roster(), &criteria);
    assert_eq!(ids(&flat), vec![1, 3, 4, 5]);
}

#[test]
fn blank_search_does_not_constrain() {
    let criteria = FilterCriteria::new().with_search("");
    assert!(!criteria.is_active());
    assert_eq!(derive_flat(&roster(), &criteria).len(), 8);
}

#[test]
fn fields_combine_with_and() {
    let criteria = FilterCriteria::new()
        .with_races([Race::Protoss])
        .with_crews(["Alpha", "Gamma"])
        .with_gender(Gender::Male);
    let flat = derive_flat(&roster(), &criteria);
    assert_eq!(ids(&flat), vec![4]);
}

#[test]
fn composition_requires_sentinel_for_unaffiliated() {
    let players = vec![
        player(1, "x", Race::Terran, Tier::God, Some("X")),
        player(2, "z", Race::Zerg, Tier::God, None),
    ];
    let criteria = FilterCriteria::new()
        .with_races([Race::Terran, Race::Zerg])
        .with_crews(["X"]);
    let grouped = derive_grouped(&players, &criteria);
    assert_eq!(grouped.len(), 1);
    assert_eq!(ids(grouped.get(Tier::God).unwrap()), vec![1]);
}

#[test]
fn derivation_is_idempotent() {
    let criteria = FilterCriteria::new().with_free_agents().with_search("e");
    let first = derive_grouped(&roster(), &criteria);
    let second = derive_grouped(&roster(), &criteria);
    assert_eq!(first, second);
    assert_eq!(derive_flat(&roster(), &criteria), derive_flat(&roster(), &criteria));
}

#[test]
fn sections_follow_display_order_and_skip_empty() {
    let grouped = derive_grouped(&roster(), &FilterCriteria::new());
    let mut tiers = Tier::ALL.to_vec();
    tiers.reverse();
    let order = DisplayOrder::new(tiers).unwrap();

    let sections: Vec<Tier> = grouped.sections(&order).map(|(tier, _)| tier).collect();
    assert_eq!(
        sections,
        vec![Tier::Baby, Tier::Zero, Tier::Jack, Tier::King, Tier::God]
    );
    // Deriving does not touch the order it is walked with.
    assert_eq!(order.position(Tier::Baby), Some(0));
}

#[test]
fn has_any_results_reflects_filter() {
    let order = DisplayOrder::canonical();
    let hit = derive_grouped(&roster(), &FilterCriteria::new().with_search("flash"));
    assert!(hit.has_any_results(&order));

    let miss = derive_grouped(&roster(), &FilterCriteria::new().with_search("nobody"));
    assert!(!miss.has_any_results(&order));
}

#[test]
fn matches_single_entity() {
    let p = female(player(9, "Queen", Race::Zerg, Tier::One, None));
    assert!(FilterCriteria::new().matches(&p));
    assert!(FilterCriteria::new().with_free_agents().matches(&p));
    assert!(!FilterCriteria::new().with_tiers([Tier::Two]).matches(&p));
}
