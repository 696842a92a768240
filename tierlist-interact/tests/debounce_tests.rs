use pretty_assertions::assert_eq;
use std::time::Duration;
use tierlist_interact::Debounced;
use tokio::time::sleep;

fn search() -> Debounced<String> {
    Debounced::new(String::new(), Duration::from_millis(300))
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ── Timer ────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn value_updates_immediately_settled_waits() {
    let mut input = search();
    input.set("pro".into());
    assert_eq!(input.value(), "pro");
    assert_eq!(input.settled(), "");
    assert!(input.is_pending());

    sleep(ms(301)).await;
    assert_eq!(input.settled(), "pro");
    assert!(!input.is_pending());
}

#[tokio::test(start_paused = true)]
async fn rapid_sets_settle_once_with_last_value() {
    let mut input = search();
    let mut rx = input.subscribe();

    input.set("a".into());
    sleep(ms(100)).await;
    input.set("b".into());

    sleep(ms(250)).await; // t = 350
    assert_eq!(input.settled(), "");
    assert!(!rx.has_changed().unwrap());

    sleep(ms(60)).await; // t = 410
    assert_eq!(input.settled(), "b");
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), "b");

    sleep(ms(1_000)).await;
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn flush_settles_now_and_cancels_timer() {
    let mut input = search();
    let mut rx = input.subscribe();

    input.set("a".into());
    sleep(ms(100)).await;
    input.set("b".into());
    sleep(ms(50)).await; // t = 150

    input.flush();
    assert_eq!(input.settled(), "b");
    assert_eq!(*rx.borrow_and_update(), "b");

    sleep(ms(1_000)).await;
    assert!(!rx.has_changed().unwrap());
    assert_eq!(input.settled(), "b");
}

#[tokio::test(start_paused = true)]
async fn clear_resets_both_sides_and_preempts_timer() {
    let mut input = search();
    input.set("zerg".into());
    sleep(ms(100)).await;
    input.set("zergling".into());
    input.flush();

    let mut rx = input.subscribe();
    input.set("zz".into());
    input.clear(String::new());
    assert_eq!(input.value(), "");
    assert_eq!(input.settled(), "");
    assert_eq!(*rx.borrow_and_update(), "");

    sleep(ms(1_000)).await;
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn dropping_pair_cancels_pending_timer() {
    let mut input = search();
    let mut rx = input.subscribe();
    input.set("gone".into());
    drop(input);

    sleep(ms(1_000)).await;
    // The pending value never lands, whether or not the channel has closed.
    assert!(!matches!(rx.has_changed(), Ok(true)));
    assert_eq!(*rx.borrow_and_update(), "");
}

// ── Without a runtime ────────────────────────────────────────────

#[test]
fn without_runtime_settles_immediately() {
    let mut input = search();
    input.set("terran".into());
    assert_eq!(input.value(), "terran");
    assert_eq!(input.settled(), "terran");
    assert!(!input.is_pending());
}
