// Example: a chat view whose content grows from the bottom, with an upward "pull to load older".
use pull_to_refresh::{Anchor, PullConfig, PullToRefresh, PullToRefreshOptions, ScrollHost, Touch};

struct ChatView {
    distance_to_oldest: f32,
}

impl ScrollHost for ChatView {
    fn distance_from_start(&self) -> f32 {
        self.distance_to_oldest
    }

    fn disable_scroll(&mut self) {}

    fn enable_scroll(&mut self) {}

    fn reverse(&self) -> bool {
        true
    }
}

fn main() {
    let config = PullConfig {
        accept_threshold: 8.0,
        refresh_threshold: 40.0,
        ..PullConfig::default()
    };
    let opts = PullToRefreshOptions::from_config(config, |p| p.drag)
        .with_on_refresh(Some(|| println!("loading older messages")));
    let mut ptr = PullToRefresh::new(opts);
    let mut chat = ChatView {
        distance_to_oldest: 0.0,
    };

    ptr.touch_start(&chat, Touch::new(600.0));
    for y in [595.0, 560.0, 480.0, 380.0] {
        ptr.touch_move(&mut chat, &mut (), Touch::new(y));
        let layout = ptr.render(chat.reverse());
        assert_eq!(layout.anchor, Anchor::Top);
        println!("y={y} phase={:?} drag={:.2}", ptr.phase(), layout.content);
    }
    println!("{:?}", ptr.touch_end(&mut chat, &mut ()));
}
