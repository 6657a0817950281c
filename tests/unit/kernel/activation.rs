use super::*;

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

#[test]
fn single_fires_after_window() {
    let mut tracker = ActivationTracker::new(300);
    let t0 = Instant::now();

    assert_eq!(tracker.press(id("a"), t0), None);
    assert!(tracker.is_pending());
    assert_eq!(tracker.poll(t0 + Duration::from_millis(100)), None);
    assert_eq!(
        tracker.poll(t0 + Duration::from_millis(301)),
        Some(Activation::Single(id("a")))
    );
    assert!(!tracker.is_pending());
    assert_eq!(tracker.poll(t0 + Duration::from_millis(900)), None);
}

#[test]
fn second_press_upgrades_to_double() {
    let mut tracker = ActivationTracker::new(300);
    let t0 = Instant::now();

    tracker.press(id("a"), t0);
    assert_eq!(
        tracker.press(id("a"), t0 + Duration::from_millis(200)),
        Some(Activation::Double(id("a")))
    );
    assert!(!tracker.is_pending());
    assert_eq!(tracker.poll(t0 + Duration::from_millis(1000)), None);
}

#[test]
fn late_second_press_starts_new_pending() {
    let mut tracker = ActivationTracker::new(300);
    let t0 = Instant::now();

    tracker.press(id("a"), t0);
    assert_eq!(
        tracker.press(id("a"), t0 + Duration::from_millis(400)),
        Some(Activation::Single(id("a")))
    );
    assert!(tracker.is_pending());
}

#[test]
fn press_on_other_row_flushes_pending_single() {
    let mut tracker = ActivationTracker::new(300);
    let t0 = Instant::now();

    tracker.press(id("a"), t0);
    assert_eq!(
        tracker.press(id("b"), t0 + Duration::from_millis(50)),
        Some(Activation::Single(id("a")))
    );
    assert_eq!(
        tracker.poll(t0 + Duration::from_millis(400)),
        Some(Activation::Single(id("b")))
    );
}

#[test]
fn cancel_drops_pending() {
    let mut tracker = ActivationTracker::new(300);
    let t0 = Instant::now();
    tracker.press(id("a"), t0);
    tracker.cancel();
    assert_eq!(tracker.poll(t0 + Duration::from_secs(1)), None);
}
