//! Roster loading and plain-text rendering for the `tierlist` binary.

use anyhow::{Context, Result};
use std::path::Path;
use tierlist_board::{NavigatorItem, TierBoard, TierSection};
use tierlist_prefs::PreferenceStore;
use tierlist_types::{CardLayout, Player};
use tracing::debug;

/// Reads a JSON array of players.
pub fn load_roster(path: &Path) -> Result<Vec<Player>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster {}", path.display()))?;
    let players: Vec<Player> = serde_json::from_str(&contents)
        .with_context(|| format!("invalid roster JSON in {}", path.display()))?;
    debug!(players = players.len(), "roster loaded");
    Ok(players)
}

/// Renders the visible sections in the board's card layout.
pub fn render_board<S: PreferenceStore + 'static>(board: &TierBoard<S>) -> String {
    let mut out = String::new();
    let layout = board.card_layout();

    for section in board.sections() {
        render_section(&mut out, &section, layout);
    }
    if board.show_empty_state() {
        out.push_str("필터 조건에 맞는 선수가 없습니다.\n");
    }
    out
}

fn render_section(out: &mut String, section: &TierSection, layout: CardLayout) {
    out.push_str(&format!(
        "{} ({}명) {}\n",
        section.tier,
        section.count(),
        section.description
    ));
    for player in &section.players {
        out.push_str(&format!("  {}\n", render_player(player, layout)));
    }
    out.push('\n');
}

fn render_player(player: &Player, layout: CardLayout) -> String {
    let crew = player.crew_name.as_deref().unwrap_or("FA");
    match layout {
        CardLayout::Compact => format!("[{}] {}", player.initials(), player.nickname),
        CardLayout::List => format!("{} {} {}", player.nickname, player.race, crew),
        CardLayout::Full => {
            let mut line = format!(
                "[{}] {} {} {} {}",
                player.initials(),
                player.nickname,
                player.race,
                player.gender,
                crew
            );
            if let Some(tag) = player.tag {
                line.push_str(&format!(" #{tag}"));
            }
            line
        }
    }
}

/// Renders the navigator: every tier in display order with its count.
pub fn render_navigator(items: &[NavigatorItem]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{:>2}. {}\n", index + 1, item.label()))
        .collect()
}
