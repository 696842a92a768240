use tierlist_interact::{ScrollDirection, ScrollHidden};

// ── ScrollHidden ─────────────────────────────────────────────────

#[test]
fn always_visible_above_threshold() {
    let mut bar = ScrollHidden::new(200.0);
    assert!(!bar.on_scroll(50.0));
    assert!(!bar.on_scroll(190.0));
}

#[test]
fn hides_on_scroll_down_and_shows_on_scroll_up() {
    let mut bar = ScrollHidden::new(200.0);
    bar.on_scroll(150.0);
    assert!(bar.on_scroll(300.0));
    assert!(bar.on_scroll(400.0));
    assert!(!bar.on_scroll(380.0));
}

#[test]
fn small_moves_accumulate_until_past_delta() {
    let mut bar = ScrollHidden::new(200.0).starting_at(300.0);
    assert!(!bar.on_scroll(305.0));
    // Reference stays at 300, so 305 -> 310 is a 10px move.
    assert!(bar.on_scroll(310.0));
    assert!(bar.on_scroll(304.0));
    assert!(!bar.on_scroll(300.0));
}

#[test]
fn returning_to_top_reveals() {
    let mut bar = ScrollHidden::new(200.0).starting_at(500.0);
    assert!(bar.on_scroll(800.0));
    assert!(!bar.on_scroll(100.0));
    assert!(!bar.is_hidden());
}

// ── ScrollDirection ──────────────────────────────────────────────

#[test]
fn direction_tracks_every_position() {
    let mut bar = ScrollDirection::default();
    assert!(bar.is_visible());
    assert!(!bar.on_scroll(20.0));
    assert!(!bar.on_scroll(23.0));
    // Last position always advances: 23 -> 20 is only 3px.
    assert!(!bar.on_scroll(20.0));
    assert!(bar.on_scroll(10.0));
}

#[test]
fn sticky_anchor_keeps_bar_visible() {
    let mut bar = ScrollDirection::new(5.0, Some(400.0));
    assert!(bar.on_scroll(200.0));
    assert!(bar.on_scroll(400.0));
    assert!(!bar.on_scroll(500.0));
    assert!(bar.on_scroll(300.0));
}
