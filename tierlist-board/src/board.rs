use crate::config::BoardConfig;
use std::cell::RefCell;
use std::rc::Rc;
use tierlist_filter::{FilterCriteria, GroupedRoster, derive_grouped};
use tierlist_interact::{Debounced, ScrollHidden};
use tierlist_prefs::{PreferenceStore, Preferences};
use tierlist_reorder::{DragOutcome, ItemState, Point, Rect, Reorderable};
use tierlist_types::{CardLayout, DisplayOrder, Gender, KeyEvent, Player, Race, Tier};
use tokio::sync::watch;
use tracing::{debug, warn};

/// One rendered tier: heading, blurb and the players under it.
#[derive(Debug, Clone, PartialEq)]
pub struct TierSection {
    pub tier: Tier,
    pub description: &'static str,
    pub players: Vec<Player>,
}

impl TierSection {
    pub fn count(&self) -> usize {
        self.players.len()
    }

    /// Element id the navigator scrolls to.
    pub fn anchor(&self) -> String {
        anchor_for(self.tier)
    }
}

pub(crate) fn anchor_for(tier: Tier) -> String {
    format!("tier-{tier}")
}

/// One row in the tier navigator. Every tier is listed, even when empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorItem {
    pub tier: Tier,
    pub count: usize,
    pub state: ItemState,
}

impl NavigatorItem {
    /// Accessible label, e.g. `"King 3명"`.
    pub fn label(&self) -> String {
        if self.count > 0 {
            format!("{} {}명", self.tier, self.count)
        } else {
            self.tier.to_string()
        }
    }
}

/// The roster page state.
///
/// Filters other than search apply immediately. The search text goes
/// through a [`Debounced`] pair and only its settled value filters. The tier
/// order lives in [`Preferences`] and is rewritten by the navigator's
/// reorder engine.
pub struct TierBoard<S> {
    players: Vec<Player>,
    criteria: FilterCriteria,
    search: Debounced<String>,
    prefs: Rc<RefCell<Preferences<S>>>,
    navigator: Reorderable<Tier, Tier>,
    sticky: ScrollHidden,
}

impl<S: PreferenceStore + 'static> TierBoard<S> {
    pub fn new(players: Vec<Player>, prefs: Preferences<S>, config: &BoardConfig) -> Self {
        let prefs = Rc::new(RefCell::new(prefs));
        let sink = Rc::clone(&prefs);
        let navigator = Reorderable::new(
            |tier: &Tier| *tier,
            move |tiers: Vec<Tier>| match DisplayOrder::new(tiers) {
                Ok(order) => sink.borrow_mut().set_tier_order(order),
                Err(e) => warn!(error = %e, "reorder produced an invalid tier order"),
            },
        )
        .with_orientation(config.orientation);

        Self {
            players,
            criteria: FilterCriteria::default(),
            search: Debounced::new(String::new(), config.search_delay()),
            prefs,
            navigator,
            sticky: ScrollHidden::new(config.sticky_hide_threshold)
                .with_delta(config.scroll_delta),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn set_players(&mut self, players: Vec<Player>) {
        self.players = players;
    }

    // ── Filters ──────────────────────────────────────────────────

    /// The criteria currently applied, with the settled search text.
    pub fn criteria(&self) -> FilterCriteria {
        let search = self.search.settled();
        FilterCriteria {
            search: (!search.is_empty()).then_some(search),
            ..self.criteria.clone()
        }
    }

    /// Replaces every filter from a query string. Search applies at once.
    pub fn apply_query(&mut self, query: &str) {
        let mut criteria = FilterCriteria::from_query(query);
        let search = criteria.search.take().unwrap_or_default();
        debug!(query, "filters replaced from query");
        self.criteria = criteria;
        self.search.clear(search);
    }

    /// The applied filters in query-string form.
    pub fn query_string(&self) -> String {
        self.criteria().to_query()
    }

    pub fn set_races(&mut self, races: Vec<Race>) {
        self.criteria.races = races;
    }

    pub fn set_tiers(&mut self, tiers: Vec<Tier>) {
        self.criteria.tiers = tiers;
    }

    pub fn set_crews(&mut self, names: Vec<String>, include_free_agents: bool) {
        self.criteria.crews.names = names;
        self.criteria.crews.include_free_agents = include_free_agents;
    }

    /// `None` is "all genders".
    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.criteria.gender = gender;
    }

    /// Updates the search box. Filtering follows after the debounce delay.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search.set(text.into());
    }

    /// Applies the typed search text now (e.g. on Enter).
    pub fn flush_search(&mut self) {
        self.search.flush();
    }

    /// The search box contents, ahead of the applied search.
    pub fn search_input(&self) -> &str {
        self.search.value()
    }

    /// Observes applied search changes.
    pub fn subscribe_search(&self) -> watch::Receiver<String> {
        self.search.subscribe()
    }

    /// Clears every filter, including a pending search.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.search.clear(String::new());
    }

    pub fn has_active_filter(&self) -> bool {
        self.criteria().is_active()
    }

    // ── Sections ─────────────────────────────────────────────────

    pub fn grouped(&self) -> GroupedRoster<Player> {
        derive_grouped(&self.players, &self.criteria())
    }

    /// Non-empty tiers in the persisted display order.
    pub fn sections(&self) -> Vec<TierSection> {
        let grouped = self.grouped();
        let order = self.tier_order();
        grouped
            .sections(&order)
            .map(|(tier, players)| TierSection {
                tier,
                description: tier.description(),
                players: players.to_vec(),
            })
            .collect()
    }

    pub fn has_any_results(&self) -> bool {
        self.grouped().has_any_results(&self.tier_order())
    }

    /// True when filters are set and nothing matches them.
    pub fn show_empty_state(&self) -> bool {
        self.has_active_filter() && !self.has_any_results()
    }

    // ── Preferences ──────────────────────────────────────────────

    pub fn tier_order(&self) -> DisplayOrder {
        self.prefs.borrow().tier_order().clone()
    }

    pub fn reset_tier_order(&mut self) {
        debug!("tier order reset");
        self.prefs.borrow_mut().reset_tier_order();
    }

    pub fn card_layout(&self) -> CardLayout {
        self.prefs.borrow().card_layout()
    }

    pub fn set_card_layout(&mut self, layout: CardLayout) {
        self.prefs.borrow_mut().set_card_layout(layout);
    }

    /// True until the navigator tour has been completed once.
    pub fn should_tour(&self) -> bool {
        !self.prefs.borrow().tour_done()
    }

    pub fn complete_tour(&mut self) {
        self.prefs.borrow_mut().mark_tour_done();
    }

    // ── Navigator ────────────────────────────────────────────────

    /// Every tier in display order with its filtered count.
    pub fn navigator_items(&self) -> Vec<NavigatorItem> {
        let grouped = self.grouped();
        self.tier_order()
            .iter()
            .map(|tier| NavigatorItem {
                tier,
                count: grouped.count(tier),
                state: self.navigator.item_state(&tier),
            })
            .collect()
    }

    /// Registers a listener for navigator drag-state changes.
    pub fn on_navigator_change(&mut self, listener: impl FnMut() + 'static) {
        self.navigator.on_change(listener);
    }

    pub fn drag_start(&mut self, tier: Tier) {
        self.navigator.drag_start(&tier);
    }

    pub fn drag_over(&mut self, tier: Tier, pointer: Point, bounds: Rect) -> bool {
        self.navigator.drag_over(&tier, pointer, bounds)
    }

    pub fn drag_leave(&mut self, tier: Tier) {
        self.navigator.drag_leave(&tier);
    }

    pub fn drop_tier(&mut self) -> DragOutcome {
        let order = self.tier_order();
        self.navigator.finish_drop(order.as_slice())
    }

    pub fn drag_end(&mut self) {
        self.navigator.drag_end();
    }

    /// Moves a tier by `delta` places. Returns its new index so the host can
    /// keep focus on it.
    pub fn move_tier(&mut self, tier: Tier, delta: isize) -> Option<usize> {
        let order = self.tier_order();
        self.navigator.move_item(order.as_slice(), &tier, delta)
    }

    /// Alt+Arrow on a focused navigator row.
    pub fn tier_key_down(&mut self, tier: Tier, event: &KeyEvent) -> Option<usize> {
        let order = self.tier_order();
        self.navigator.key_down(order.as_slice(), &tier, event)
    }

    // ── Sticky bar ───────────────────────────────────────────────

    /// Feeds the page scroll offset; returns whether the filter bar hides.
    pub fn on_scroll(&mut self, y: f64) -> bool {
        self.sticky.on_scroll(y)
    }

    pub fn sticky_hidden(&self) -> bool {
        self.sticky.is_hidden()
    }
}
