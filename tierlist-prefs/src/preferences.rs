use crate::persisted::Persisted;
use crate::store::PreferenceStore;
use tierlist_types::{CardLayout, DisplayOrder};

pub const TIER_ORDER_KEY: &str = "tierOrder";
pub const CARD_LAYOUT_KEY: &str = "cardVariant";
pub const TOUR_DONE_KEY: &str = "tierNav:tourDone";

/// Everything the board remembers between sessions.
pub struct Preferences<S> {
    store: S,
    tier_order: Persisted<DisplayOrder>,
    card_layout: Persisted<CardLayout>,
    tour_done: Persisted<bool>,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn load(store: S) -> Self {
        let tier_order = Persisted::load(&store, TIER_ORDER_KEY, DisplayOrder::canonical());
        let card_layout = Persisted::load(&store, CARD_LAYOUT_KEY, CardLayout::default());
        let tour_done = Persisted::load(&store, TOUR_DONE_KEY, false);
        Self {
            store,
            tier_order,
            card_layout,
            tour_done,
        }
    }

    pub fn tier_order(&self) -> &DisplayOrder {
        self.tier_order.get()
    }

    pub fn set_tier_order(&mut self, order: DisplayOrder) {
        self.tier_order.set(&mut self.store, order);
    }

    /// Restores and persists the canonical order.
    pub fn reset_tier_order(&mut self) {
        self.set_tier_order(DisplayOrder::canonical());
    }

    pub fn card_layout(&self) -> CardLayout {
        *self.card_layout.get()
    }

    pub fn set_card_layout(&mut self, layout: CardLayout) {
        self.card_layout.set(&mut self.store, layout);
    }

    pub fn tour_done(&self) -> bool {
        *self.tour_done.get()
    }

    pub fn mark_tour_done(&mut self) {
        self.tour_done.set(&mut self.store, true);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
