use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tierlist_filter::{FilterCriteria, derive_flat, derive_grouped};
use tierlist_types::{Gender, Player, Race, Tier};

fn synthetic_roster(size: usize) -> Vec<Player> {
    (0..size)
        .map(|i| Player {
            id: i as i64,
            nickname: format!("player{i:05}"),
            race: Race::ALL[i % Race::ALL.len()],
            tier: (i % 17 != 0).then(|| Tier::ALL[i % Tier::ALL.len()]),
            gender: if i % 3 == 0 { Gender::Female } else { Gender::Male },
            crew_id: (i % 4 != 0).then_some((i % 12) as i64),
            crew_name: (i % 4 != 0).then(|| format!("crew{}", i % 12)),
            is_fa: i % 4 == 0,
            tag: None,
            status: "active".to_string(),
        })
        .collect()
}

fn bench_derive_grouped(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_grouped");
    let criteria = FilterCriteria::new()
        .with_races([Race::Terran, Race::Zerg])
        .with_free_agents()
        .with_crews(["crew1", "crew5"])
        .with_search("PLAYER0");

    for size in [100, 1_000, 10_000] {
        let roster = synthetic_roster(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| black_box(derive_grouped(black_box(roster), &criteria)));
        });
    }
    group.finish();
}

fn bench_derive_flat_unfiltered(c: &mut Criterion) {
    let roster = synthetic_roster(1_000);
    let criteria = FilterCriteria::new();

    c.bench_function("derive_flat::unfiltered_1000", |b| {
        b.iter(|| black_box(derive_flat(black_box(&roster), &criteria)));
    });
}

criterion_group!(benches, bench_derive_grouped, bench_derive_flat_unfiltered);
criterion_main!(benches);
