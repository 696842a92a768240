use tierlist_types::{Gender, Player, Race, Tier};

/// Builds a ranked player. `crew: None` makes them a free agent.
pub fn player(id: i64, nickname: &str, race: Race, tier: Tier, crew: Option<&str>) -> Player {
    Player {
        id,
        nickname: nickname.to_string(),
        race,
        tier: Some(tier),
        gender: Gender::Male,
        crew_id: crew.map(|_| id * 10),
        crew_name: crew.map(str::to_string),
        is_fa: crew.is_none(),
        tag: None,
        status: "active".to_string(),
    }
}

pub fn unranked(id: i64, nickname: &str) -> Player {
    Player {
        tier: None,
        ..player(id, nickname, Race::Protoss, Tier::Baby, None)
    }
}

pub fn female(mut p: Player) -> Player {
    p.gender = Gender::Female;
    p
}

/// A small roster, pre-sorted the way the data source delivers it.
pub fn roster() -> Vec<Player> {
    vec![
        player(1, "Flash", Race::Terran, Tier::God, Some("Alpha")),
        player(2, "Jaedong", Race::Zerg, Tier::God, None),
        player(3, "Bisu", Race::Protoss, Tier::King, Some("Beta")),
        player(4, "Stork", Race::Protoss, Tier::King, Some("Alpha")),
        female(player(5, "Tossgirl", Race::Protoss, Tier::Zero, Some("Gamma"))),
        player(6, "Effort", Race::Zerg, Tier::Jack, None),
        unranked(7, "Newbie"),
        female(player(8, "Ddanggu", Race::Terran, Tier::Baby, None)),
    ]
}

pub fn ids(players: &[Player]) -> Vec<i64> {
    players.iter().map(|p| p.id).collect()
}
