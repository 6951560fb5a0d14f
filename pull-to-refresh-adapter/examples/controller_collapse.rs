// Example: adapter-driven gesture with an animated collapse after release.
use pull_to_refresh::{PullToRefresh, PullToRefreshOptions, ScrollHost, Touch};
use pull_to_refresh_adapter::{Controller, Easing, EventRoot, TouchInput};

#[derive(Debug, Default)]
struct Feed {
    offset: f32,
    scroll_enabled: bool,
}

impl ScrollHost for Feed {
    fn distance_from_start(&self) -> f32 {
        self.offset
    }

    fn disable_scroll(&mut self) {
        self.scroll_enabled = false;
    }

    fn enable_scroll(&mut self) {
        self.scroll_enabled = true;
    }

    fn reverse(&self) -> bool {
        false
    }
}

#[derive(Debug, Default)]
struct Document {
    listeners: usize,
}

impl EventRoot for Document {
    fn attach_gesture_listeners(&mut self) {
        self.listeners += 1;
        println!("document: +touchmove +touchend");
    }

    fn detach_gesture_listeners(&mut self) {
        self.listeners -= 1;
        println!("document: -touchmove -touchend");
    }
}

fn main() {
    let opts = PullToRefreshOptions::new(|p| if p.drag >= 1.0 { "release" } else { "pull" })
        .with_on_refresh(Some(|| println!("refresh!")));
    let feed = Feed {
        offset: 0.0,
        scroll_enabled: true,
    };
    let mut c = Controller::from_parts(PullToRefresh::new(opts), feed, (), Document::default())
        .with_easing(Easing::SmoothStep);

    let mut now_ms = 0u64;
    c.dispatch(TouchInput::Start(Touch::new(120.0)), now_ms);
    for y in [140.0, 220.0, 320.0, 400.0] {
        now_ms += 16;
        let disposition = c.dispatch(TouchInput::Move(Touch::new(y)), now_ms).disposition;
        let layout = c.layout(now_ms);
        println!(
            "t={now_ms}ms height={:.1} {} prevent_default={}",
            layout.height,
            layout.content,
            disposition.is_prevented()
        );
    }

    now_ms += 16;
    let end = c.dispatch(TouchInput::End, now_ms);
    println!("released: {:?}", end.release);

    // Simulate a 60fps "tick" until the reveal area is closed.
    while c.is_animating() {
        now_ms += 16;
        if let Some(height) = c.tick(now_ms) {
            println!("t={now_ms}ms collapsing height={height:.1}");
        }
    }

    println!(
        "done: listeners={} scroll_enabled={}",
        c.root().listeners,
        c.host().scroll_enabled
    );
}
