// Example: a scripted pull-to-refresh gesture driven on a simulated frame clock.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use elastic::{
    EdgeAdapter, ElasticCoordinator, ElasticEvent, ElasticOptions, Orientation, Phase,
};

/// A header that prints its state transitions, the way a UI one would redraw.
struct PrintHeader;

impl EdgeAdapter for PrintHeader {
    fn required_offset(&self) -> i32 {
        80
    }

    fn is_busy(&self) -> bool {
        false
    }

    fn pulling(&mut self) {
        println!("  header: pull down to refresh");
    }

    fn releasable(&mut self) {
        println!("  header: release to refresh");
    }

    fn start(&mut self) {
        println!("  header: refreshing...");
    }

    fn finished(&mut self, message: &str) {
        println!("  header: {message}");
    }
}

fn main() {
    let refreshed = Arc::new(AtomicBool::new(false));

    // The child cannot scroll further up, so downward pulls land on the
    // coordinator. A real host would ask its scrollable instead.
    let options = ElasticOptions::new(Orientation::Vertical, |_dx, dy| dy > 0).with_on_event({
        let refreshed = Arc::clone(&refreshed);
        move |event| {
            if event == ElasticEvent::Refresh {
                refreshed.store(true, Ordering::Relaxed);
            }
        }
    });

    let mut c = ElasticCoordinator::new(options).expect("valid configuration");
    c.set_header_adapter(Box::new(PrintHeader)).expect("empty slot");

    // Drag down in 16ms frames, then lift the finger past the threshold.
    c.on_scroll_start(Orientation::Vertical);
    let mut now_ms = 0u64;
    for _ in 0..12 {
        now_ms += 16;
        c.on_pre_scroll(0, -24, Phase::Touch, now_ms);
        println!("t={now_ms}ms offset={}", c.offset());
    }
    c.on_scroll_stopped(Phase::Touch, now_ms);

    // Frame loop: the spring settles onto the trigger offset, the work
    // "completes" 500ms in, and the coordinator springs back to rest.
    let mut finished = false;
    loop {
        now_ms += 16;
        if let Some(offset) = c.tick(now_ms) {
            println!("t={now_ms}ms offset={offset} (animating)");
        }
        if refreshed.load(Ordering::Relaxed) && !finished && now_ms >= 500 {
            finished = true;
            c.finish_refresh("Refreshed 3 items", now_ms);
        }
        if finished && !c.is_animating() && c.offset() == 0 && now_ms > 1200 {
            break;
        }
    }

    println!("done: offset={} refreshing={}", c.offset(), c.is_refreshing());
}
