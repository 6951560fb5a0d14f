use pull_to_refresh::{PullProgress, PullToRefresh, PullToRefreshOptions, ScrollHost, Touch};

struct ListView {
    offset: f32,
    scroll_enabled: bool,
}

impl ScrollHost for ListView {
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

fn indicator(p: PullProgress) -> String {
    let filled = (p.drag * 10.0) as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled))
}

fn main() {
    let opts = PullToRefreshOptions::new(indicator)
        .with_on_refresh(Some(|| println!("refreshing...")));
    let mut ptr = PullToRefresh::new(opts);
    let mut list = ListView {
        offset: 0.0,
        scroll_enabled: true,
    };

    ptr.touch_start(&list, Touch::new(100.0));
    for y in (100..=400).step_by(50) {
        let disposition = ptr.touch_move(&mut list, &mut (), Touch::new(y as f32));
        let layout = ptr.render(list.reverse());
        println!(
            "y={y} height={:.1} prevent_default={} scroll_enabled={} {}",
            layout.height,
            disposition.is_prevented(),
            list.scroll_enabled,
            layout.content
        );
    }

    let outcome = ptr.touch_end(&mut list, &mut ());
    println!("released: {outcome:?} scroll_enabled={}", list.scroll_enabled);
}
