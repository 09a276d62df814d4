use crate::*;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use std::sync::Mutex;
use std::vec::Vec;

use elastic::{EdgeAdapter, ElasticCoordinator, ElasticOptions, Orientation, Phase};

type Changes = Arc<Mutex<Vec<(EdgeState, i32, String)>>>;

fn recorded_header(required: i32) -> (HeaderAdapter, Changes) {
    let changes: Changes = Arc::new(Mutex::new(Vec::new()));
    let adapter = HeaderAdapter::new(required).with_on_change({
        let changes = Arc::clone(&changes);
        move |state, distance, status| {
            changes.lock().unwrap().push((state, distance, String::from(status)));
        }
    });
    (adapter, changes)
}

#[test]
fn header_walks_the_state_machine() {
    let mut h = HeaderAdapter::new(80);
    assert_eq!(h.state(), EdgeState::Idle);
    assert_eq!(h.status(), "Pull down to refresh");
    assert!(!h.is_busy());

    h.progress(40);
    h.pulling();
    assert_eq!(h.state(), EdgeState::Pulling);
    assert_eq!(h.distance(), 40);
    assert_eq!(h.fraction(), 0.5);
    assert!(!h.arrow_flipped());

    h.progress(90);
    h.releasable();
    assert_eq!(h.state(), EdgeState::Releasable);
    assert_eq!(h.status(), "Release to refresh");
    assert!(h.arrow_flipped());

    h.start();
    assert_eq!(h.state(), EdgeState::Busy);
    assert_eq!(h.status(), "Refreshing");
    assert!(h.is_busy());
    assert!(!h.arrow_flipped());

    h.finished("Refreshed 7 items");
    assert_eq!(h.state(), EdgeState::Done);
    assert_eq!(h.status(), "Refreshed 7 items");
    assert!(!h.is_busy());

    // The next pull reopens the cycle.
    h.progress(10);
    h.pulling();
    assert_eq!(h.state(), EdgeState::Pulling);
    assert_eq!(h.status(), "Pull down to refresh");
}

#[test]
fn finished_while_not_busy_is_noop() {
    let mut h = HeaderAdapter::new(80);
    h.finished("too early");
    assert_eq!(h.state(), EdgeState::Idle);
    assert_eq!(h.status(), "Pull down to refresh");

    h.progress(90);
    h.releasable();
    h.finished("still not busy");
    assert_eq!(h.state(), EdgeState::Releasable);
}

#[test]
fn cancelled_resets_to_idle() {
    let mut h = HeaderAdapter::new(80);
    h.progress(90);
    h.releasable();
    h.cancelled();
    assert_eq!(h.state(), EdgeState::Idle);
    assert_eq!(h.status(), "Pull down to refresh");
}

#[test]
fn fraction_clamps_past_threshold() {
    let mut h = HeaderAdapter::new(80);
    h.progress(200);
    assert_eq!(h.fraction(), 1.0);
    h.progress(0);
    assert_eq!(h.fraction(), 0.0);
}

#[test]
fn footer_mirrors_header_with_its_own_labels() {
    let mut f = FooterAdapter::new(60);
    assert_eq!(f.required_offset(), 60);
    assert_eq!(f.status(), "Pull up to load more");

    f.progress(70);
    f.releasable();
    assert_eq!(f.status(), "Release to load");

    f.start();
    assert_eq!(f.status(), "Loading");
    assert!(f.is_busy());

    f.finished("No more items");
    assert_eq!(f.state(), EdgeState::Done);
    assert_eq!(f.status(), "No more items");
}

#[test]
fn defaults() {
    let h = HeaderAdapter::default();
    assert_eq!(h.required_offset(), HeaderAdapter::DEFAULT_REQUIRED_OFFSET);
    let f = FooterAdapter::default();
    assert_eq!(f.required_offset(), FooterAdapter::DEFAULT_REQUIRED_OFFSET);
}

#[test]
fn observer_sees_distance_and_transitions() {
    let (mut h, changes) = recorded_header(80);
    h.progress(40);
    h.pulling();
    h.pulling(); // same state, no extra notification
    h.progress(40); // same distance, no extra notification
    h.progress(90);
    h.releasable();

    let seen = changes.lock().unwrap().clone();
    assert_eq!(seen.len(), 4);
    assert_eq!(seen[0], (EdgeState::Idle, 40, String::from("Pull down to refresh")));
    assert_eq!(seen[1], (EdgeState::Pulling, 40, String::from("Pull down to refresh")));
    assert_eq!(seen[2], (EdgeState::Pulling, 90, String::from("Pull down to refresh")));
    assert_eq!(seen[3], (EdgeState::Releasable, 90, String::from("Release to refresh")));
}

#[test]
fn drives_a_full_refresh_cycle_through_the_coordinator() {
    let (adapter, changes) = recorded_header(80);
    let options = ElasticOptions::new(Orientation::Vertical, |_, _| false);
    let mut c = ElasticCoordinator::new(options).unwrap();
    c.set_header_adapter(Box::new(adapter)).unwrap();

    c.on_scroll_start(Orientation::Vertical);
    c.on_pre_scroll(0, -240, Phase::Touch, 0);
    c.on_scroll_stopped(Phase::Touch, 16);
    c.tick(116);
    assert!(c.is_refreshing());

    c.finish_refresh("Refreshed", 500);
    c.tick(800);
    c.tick(1000);
    assert_eq!(c.offset(), 0);
    assert!(!c.is_refreshing());

    let states: Vec<EdgeState> = changes.lock().unwrap().iter().map(|(s, _, _)| *s).collect();
    assert_eq!(
        states,
        [EdgeState::Idle, EdgeState::Releasable, EdgeState::Busy, EdgeState::Done]
    );
    let last_status = changes.lock().unwrap().last().unwrap().2.clone();
    assert_eq!(last_status, "Refreshed");
}
