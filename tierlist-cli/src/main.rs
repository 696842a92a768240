//! Tier list viewer
//!
//! Prints a roster grouped by tier, in the user's saved tier order, with the
//! same filters the web board offers.
//!
//! Usage:
//!   tierlist --roster players.json show --race P --crew FA,Alpha
//!   tierlist --roster players.json order move King -1

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tierlist_board::{BoardConfig, TierBoard};
use tierlist_cli::{load_roster, render_board, render_navigator};
use tierlist_prefs::{JsonFileStore, Preferences};
use tierlist_types::{CardLayout, Gender, Race, Tier};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "tierlist")]
#[command(about = "Tier list roster viewer")]
struct Args {
    /// JSON array of players
    #[arg(short, long)]
    roster: PathBuf,

    /// Preference file (tier order, card layout)
    #[arg(short, long, default_value = "tierlist-prefs.json")]
    prefs: PathBuf,

    /// Board config file
    #[arg(short, long, default_value = "board.toml")]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the filtered tier sections
    Show {
        /// Filters as a query string, e.g. "race=T,Z&crew=FA"
        #[arg(short, long)]
        query: Option<String>,

        #[arg(long, value_delimiter = ',')]
        race: Vec<Race>,

        #[arg(long, value_delimiter = ',')]
        tier: Vec<Tier>,

        /// Crew names; FA selects free agents
        #[arg(long, value_delimiter = ',')]
        crew: Vec<String>,

        /// M or F
        #[arg(long)]
        gender: Option<Gender>,

        #[arg(short, long)]
        search: Option<String>,

        /// Card layout to use and remember
        #[arg(long)]
        layout: Option<CardLayout>,
    },
    /// Inspect or change the tier display order
    Order {
        #[command(subcommand)]
        action: Option<OrderAction>,
    },
}

#[derive(Subcommand, Debug)]
enum OrderAction {
    /// Move a tier by DELTA places
    Move {
        tier: Tier,
        #[arg(allow_hyphen_values = true)]
        delta: isize,
    },
    /// Restore the default order
    Reset,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let config = BoardConfig::load_from(&args.config);
    let players = load_roster(&args.roster)?;
    let store = JsonFileStore::open(&args.prefs);
    let mut board = TierBoard::new(players, Preferences::load(store), &config);

    match args.command {
        Command::Show {
            query,
            race,
            tier,
            crew,
            gender,
            search,
            layout,
        } => {
            if let Some(query) = query {
                board.apply_query(&query);
            }
            if !race.is_empty() {
                board.set_races(race);
            }
            if !tier.is_empty() {
                board.set_tiers(tier);
            }
            if !crew.is_empty() {
                let include_free_agents = crew.iter().any(|c| c == "FA");
                let names = crew.into_iter().filter(|c| c != "FA").collect();
                board.set_crews(names, include_free_agents);
            }
            if gender.is_some() {
                board.set_gender(gender);
            }
            if let Some(search) = search {
                board.set_search(search);
                board.flush_search();
            }
            if let Some(layout) = layout {
                board.set_card_layout(layout);
            }

            info!("Showing {}", display_query(&board.query_string()));
            print!("{}", render_board(&board));
        }
        Command::Order { action } => {
            match action {
                Some(OrderAction::Move { tier, delta }) => {
                    match board.move_tier(tier, delta) {
                        Some(index) => info!("Moved {} to position {}", tier, index + 1),
                        None => warn!("Cannot move {} by {}", tier, delta),
                    }
                }
                Some(OrderAction::Reset) => board.reset_tier_order(),
                None => {}
            }
            print!("{}", render_navigator(&board.navigator_items()));
        }
    }

    Ok(())
}

fn display_query(query: &str) -> &str {
    if query.is_empty() { "all players" } else { query }
}
