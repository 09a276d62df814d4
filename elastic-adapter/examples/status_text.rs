// Example: rendering indicator status text from on_change notifications.
use elastic::{ElasticCoordinator, ElasticOptions, Orientation, Phase};
use elastic_adapter::{FooterAdapter, HeaderAdapter};

fn main() {
    let header = HeaderAdapter::default().with_on_change(|state, distance, status| {
        println!("header {state:?} ({distance}px): {status}");
    });
    let footer = FooterAdapter::default().with_on_change(|state, distance, status| {
        println!("footer {state:?} ({distance}px): {status}");
    });

    let options = ElasticOptions::new(Orientation::Vertical, |_, _| false);
    let mut c = ElasticCoordinator::new(options).expect("valid configuration");
    c.set_header_adapter(Box::new(header)).expect("empty slot");
    c.set_footer_adapter(Box::new(footer)).expect("empty slot");

    // Pull down in steps, lift past the threshold, finish, settle.
    c.on_scroll_start(Orientation::Vertical);
    for frame in 1..=6u64 {
        c.on_pre_scroll(0, -40, Phase::Touch, frame * 16);
    }
    c.on_scroll_stopped(Phase::Touch, 112);
    let mut now_ms = 112;
    while c.tick(now_ms).is_some() {
        now_ms += 16;
    }

    c.finish_refresh("Refreshed 3 items", now_ms);
    now_ms += 300;
    loop {
        let animating = c.tick(now_ms).is_some();
        now_ms += 16;
        if !animating && c.offset() == 0 {
            break;
        }
    }

    // Pull up to load more, then cancel the release.
    c.on_scroll_start(Orientation::Vertical);
    c.on_pre_scroll(0, 100, Phase::Touch, now_ms);
    c.cancel_loading(120);
    c.on_scroll_stopped(Phase::Touch, now_ms);
    now_ms += 16;
    while c.tick(now_ms).is_some() {
        now_ms += 16;
    }

    println!("done: offset={}", c.offset());
}
