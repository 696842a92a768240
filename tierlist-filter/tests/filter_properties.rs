mod common;

use common::roster;
use proptest::prelude::*;
use tierlist_filter::{FilterCriteria, derive_flat, derive_grouped};
use tierlist_types::{Gender, Race, Tier};

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        proptest::sample::subsequence(Race::ALL.to_vec(), 0..=3),
        proptest::sample::subsequence(Tier::ALL.to_vec(), 0..=4),
        proptest::sample::subsequence(vec!["Alpha", "Beta", "Gamma", "Omega"], 0..=2),
        any::<bool>(),
        proptest::option::of(prop_oneof![Just(Gender::Male), Just(Gender::Female)]),
        proptest::option::of(prop_oneof![Just(""), Just("s"), Just("FL"), Just("go")]),
    )
        .prop_map(|(races, tiers, crews, fa, gender, search)| {
            let mut criteria = FilterCriteria::new()
                .with_races(races)
                .with_tiers(tiers)
                .with_crews(crews);
            criteria.crews.include_free_agents = fa;
            criteria.gender = gender;
            criteria.search = search.map(str::to_string);
            criteria
        })
}

proptest! {
    #[test]
    fn grouping_filtered_input_changes_nothing(criteria in arb_criteria()) {
        let players = roster();
        let once = derive_grouped(&players, &criteria);
        let filtered = derive_flat(&players, &criteria);
        prop_assert_eq!(derive_grouped(&filtered, &criteria), once);
    }

    #[test]
    fn grouped_entities_match_and_keep_input_order(criteria in arb_criteria()) {
        let players = roster();
        let grouped = derive_grouped(&players, &criteria);
        let ranked_matches = derive_flat(&players, &criteria)
            .iter()
            .filter(|p| p.tier.is_some())
            .count();
        prop_assert_eq!(grouped.total(), ranked_matches);

        for (tier, bucket) in grouped.into_map() {
            prop_assert!(bucket.iter().all(|p| p.tier == Some(tier) && criteria.matches(p)));
            prop_assert!(bucket.windows(2).all(|w| w[0].id < w[1].id));
        }
    }

    #[test]
    fn query_string_round_trips(criteria in arb_criteria()) {
        let reparsed = FilterCriteria::from_query(&criteria.to_query());
        let players = roster();
        prop_assert_eq!(derive_flat(&players, &reparsed), derive_flat(&players, &criteria));
    }
}
