use crate::*;

use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
struct MockHost {
    distance: f32,
    reverse: bool,
    scroll_enabled: bool,
    disable_calls: usize,
    enable_calls: usize,
}

impl MockHost {
    fn at_top() -> Self {
        Self {
            distance: 0.0,
            reverse: false,
            scroll_enabled: true,
            disable_calls: 0,
            enable_calls: 0,
        }
    }

    fn reversed() -> Self {
        Self {
            reverse: true,
            ..Self::at_top()
        }
    }
}

impl ScrollHost for MockHost {
    fn distance_from_start(&self) -> f32 {
        self.distance
    }

    fn disable_scroll(&mut self) {
        self.scroll_enabled = false;
        self.disable_calls += 1;
    }

    fn enable_scroll(&mut self) {
        self.scroll_enabled = true;
        self.enable_calls += 1;
    }

    fn reverse(&self) -> bool {
        self.reverse
    }
}

#[derive(Debug, Default)]
struct MockHints {
    suppressed: bool,
    suppress_calls: usize,
    restore_calls: usize,
}

impl PlatformHints for MockHints {
    fn suppress_momentum_scroll(&mut self) {
        self.suppressed = true;
        self.suppress_calls += 1;
    }

    fn restore_momentum_scroll(&mut self) {
        self.suppressed = false;
        self.restore_calls += 1;
    }
}

fn options() -> PullToRefreshOptions<PullProgress> {
    PullToRefreshOptions::new(|p| p)
}

fn with_refresh_counter(
    opts: PullToRefreshOptions<PullProgress>,
) -> (PullToRefreshOptions<PullProgress>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let opts = opts.with_on_refresh(Some({
        let calls = Arc::clone(&calls);
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
        }
    }));
    (opts, calls)
}

fn drag(
    p: &mut PullToRefresh<PullProgress>,
    host: &mut MockHost,
    hints: &mut MockHints,
    from: f32,
    moves: &[f32],
) {
    assert!(p.touch_start(&*host, Touch::new(from)));
    for &y in moves {
        p.touch_move(&mut *host, &mut *hints, Touch::new(y));
    }
}

#[test]
fn defaults_match_documented_values() {
    let c = PullConfig::default();
    assert_eq!(c.accept_threshold, 0.0);
    assert_eq!(c.refresh_threshold, 50.0);
    assert_eq!(c.max_pull, None);
    assert_eq!(c.resistance, 4.0);
    assert_eq!(options().config(), c);
}

#[test]
fn drag_within_accept_threshold_keeps_tracking() {
    let mut p = PullToRefresh::new(options().with_accept_threshold(10.0));
    let mut host = MockHost::at_top();
    let mut hints = MockHints::default();

    assert!(p.touch_start(&host, Touch::new(100.0)));
    assert_eq!(p.phase(), Phase::Tracking);

    for y in [102.0, 105.0, 110.0, 95.0] {
        let d = p.touch_move(&mut host, &mut hints, Touch::new(y));
        assert_eq!(d, EventDisposition::Pass);
        assert_eq!(p.phase(), Phase::Tracking);
        assert_eq!(p.height(), 0.0);
    }
    assert_eq!(host.disable_calls, 0);
    assert_eq!(hints.suppress_calls, 0);
}

#[test]
fn accepting_move_disables_scroll_once() {
    let mut p = PullToRefresh::new(options());
    let mut host = MockHost::at_top();
    let mut hints = MockHints::default();

    assert!(p.touch_start(&host, Touch::new(100.0)));
    let d = p.touch_move(&mut host, &mut hints, Touch::new(101.0));
    assert!(d.is_prevented());
    assert_eq!(p.phase(), Phase::Accepted);

    p.touch_move(&mut host, &mut hints, Touch::new(150.0));
    p.touch_move(&mut host, &mut hints, Touch::new(300.0));
    assert_eq!(host.disable_calls, 1);
    assert!(!host.scroll_enabled);
    assert_eq!(hints.suppress_calls, 1);
    assert!(hints.suppressed);
}

#[test]
fn drag_past_refresh_threshold_refreshes_on_release() {
    let (opts, calls) = with_refresh_counter(options());
    let mut p = PullToRefresh::new(opts);
    let mut host = MockHost::at_top();
    let mut hints = MockHints::default();

    drag(&mut p, &mut host, &mut hints, 100.0, &[400.0]);
    assert_eq!(p.height(), 75.0);
    assert!(p.will_refresh());
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let out = p.touch_end(&mut host, &mut hints);
    assert_eq!(out, ReleaseOutcome::RefreshRequested);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(p.height(), 0.0);
    assert_eq!(p.phase(), Phase::Idle);
    assert_eq!(host.enable_calls, 1);
    assert!(host.scroll_enabled);
    assert_eq!(hints.restore_calls, 1);
    assert!(!hints.suppressed);

    let s = p.state();
    assert_eq!(s.initial_touch_y, None);
    assert_eq!(s.transition, Some(Transition::COLLAPSE));
    assert!(!p.is_listening());
}

#[test]
fn short_drag_collapses_without_refresh() {
    let (opts, calls) = with_refresh_counter(options());
    let mut p = PullToRefresh::new(opts);
    let mut host = MockHost::at_top();
    let mut hints = MockHints::default();

    drag(&mut p, &mut host, &mut hints, 100.0, &[200.0]);
    assert_eq!(p.height(), 25.0);
    assert!(!p.will_refresh());

    assert_eq!(p.touch_end(&mut host, &mut hints), ReleaseOutcome::Collapsed);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(p.height(), 0.0);
}

#[test]
fn reversed_container_flips_drag_sign() {
    let mut p = PullToRefresh::new(options());
    let mut host = MockHost::reversed();
    let mut hints = MockHints::default();

    drag(&mut p, &mut host, &mut hints, 400.0, &[100.0]);
    assert_eq!(p.phase(), Phase::Accepted);
    assert_eq!(p.height(), 75.0);
    assert!(p.will_refresh());
}

#[test]
fn downward_drag_in_reversed_container_is_not_accepted() {
    let mut p = PullToRefresh::new(options());
    let mut host = MockHost::reversed();
    let mut hints = MockHints::default();

    drag(&mut p, &mut host, &mut hints, 100.0, &[400.0]);
    assert_eq!(p.phase(), Phase::Tracking);
    assert_eq!(p.height(), 0.0);
    assert_eq!(host.disable_calls, 0);
}

#[test]
fn max_pull_is_a_literal_lower_bound() {
    let mut p = PullToRefresh::new(options().with_max_pull(Some(-40.0)));
    let mut host = MockHost::at_top();
    let mut hints = MockHints::default();
    drag(&mut p, &mut host, &mut hints, 100.0, &[400.0]);
    assert_eq!(p.height(), 75.0);

    // Only binds heights below the bound.
    let c = PullConfig {
        max_pull: Some(-40.0),
        ..PullConfig::default()
    };
    assert_eq!(c.pull_height(-400.0), -40.0);
    assert_eq!(c.pull_height(-100.0), -25.0);

    let unbounded = PullConfig::default();
    assert_eq!(unbounded.pull_height(-400.0), 0.0);
    assert_eq!(unbounded.pull_height(400.0), 100.0);
}

#[test]
fn dragging_back_past_start_floors_height_at_zero() {
    let (opts, calls) = with_refresh_counter(options());
    let mut p = PullToRefresh::new(opts);
    let mut host = MockHost::at_top();
    let mut hints = MockHints::default();

    drag(&mut p, &mut host, &mut hints, 100.0, &[110.0, 0.0, -200.0]);
    assert_eq!(p.phase(), Phase::Accepted);
    assert_eq!(p.height(), 0.0);
    assert!(!p.will_refresh());

    let layout = p.render(false);
    assert_eq!(layout.height, 0.0);
    assert_eq!(layout.content.drag, 0.0);

    assert_eq!(p.touch_end(&mut host, &mut hints), ReleaseOutcome::Collapsed);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn reversed_drag_back_past_start_floors_height_at_zero() {
    let mut p = PullToRefresh::new(options());
    let mut host = MockHost::reversed();
    let mut hints = MockHints::default();

    drag(&mut p, &mut host, &mut hints, 400.0, &[300.0, 700.0]);
    assert_eq!(p.phase(), Phase::Accepted);
    assert_eq!(p.height(), 0.0);
}

#[test]
fn max_pull_binds_upward_drags_once_accepted() {
    let opts = options()
        .with_accept_threshold(-1000.0)
        .with_max_pull(Some(-40.0));
    let mut p = PullToRefresh::new(opts);
    let mut host = MockHost {
        distance: -1000.0,
        ..MockHost::at_top()
    };
    let mut hints = MockHints::default();

    drag(&mut p, &mut host, &mut hints, 500.0, &[100.0]);
    assert_eq!(p.phase(), Phase::Accepted);
    assert_eq!(p.height(), -40.0);
}

#[test]
fn will_refresh_is_recomputed_every_move() {
    let (opts, calls) = with_refresh_counter(options());
    let mut p = PullToRefresh::new(opts);
    let mut host = MockHost::at_top();
    let mut hints = MockHints::default();

    drag(&mut p, &mut host, &mut hints, 0.0, &[300.0]);
    assert!(p.will_refresh());
    p.touch_move(&mut host, &mut hints, Touch::new(150.0));
    assert_eq!(p.height(), 37.5);
    assert!(!p.will_refresh());

    assert_eq!(p.touch_end(&mut host, &mut hints), ReleaseOutcome::Collapsed);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn refresh_threshold_comparison_is_strict() {
    let mut p = PullToRefresh::new(options());
    let mut host = MockHost::at_top();
    let mut hints = MockHints::default();

    drag(&mut p, &mut host, &mut hints, 0.0, &[200.0]);
    assert_eq!(p.height(), 50.0);
    assert!(!p.will_refresh());

    p.touch_move(&mut host, &mut hints, Touch::new(201.0));
    assert!(p.will_refresh());
}

#[test]
fn touch_start_requires_start_edge() {
    let mut p = PullToRefresh::new(options());
    let mut hints = MockHints::default();

    let mut host = MockHost {
        distance: 1.5,
        ..MockHost::at_top()
    };
    assert!(!p.touch_start(&host, Touch::new(0.0)));
    assert!(!p.is_listening());

    // Without an active gesture, move/end are ignored entirely.
    let d = p.touch_move(&mut host, &mut hints, Touch::new(300.0));
    assert_eq!(d, EventDisposition::Pass);
    assert_eq!(p.touch_end(&mut host, &mut hints), ReleaseOutcome::Ignored);
    assert_eq!(host.enable_calls, 0);
    assert_eq!(hints.restore_calls, 0);

    host.distance = 1.0;
    assert!(p.touch_start(&host, Touch::new(0.0)));
}

#[test]
fn touch_start_tolerance_follows_accept_threshold() {
    let mut p = PullToRefresh::new(options().with_accept_threshold(20.0));
    let host = MockHost {
        distance: 21.0,
        ..MockHost::at_top()
    };
    assert!(p.touch_start(&host, Touch::new(0.0)));
}

#[test]
fn second_touch_start_during_gesture_is_ignored() {
    let mut p = PullToRefresh::new(options());
    let mut host = MockHost::at_top();
    let mut hints = MockHints::default();

    drag(&mut p, &mut host, &mut hints, 100.0, &[200.0]);
    assert!(!p.touch_start(&host, Touch::new(50.0)));
    assert_eq!(p.state().initial_touch_y, Some(100.0));
    assert_eq!(p.height(), 25.0);
}

#[test]
fn unaccepted_gesture_still_restores_host_on_end() {
    let mut p = PullToRefresh::new(options().with_accept_threshold(10.0));
    let mut host = MockHost::at_top();
    let mut hints = MockHints::default();

    drag(&mut p, &mut host, &mut hints, 100.0, &[105.0]);
    assert_eq!(p.touch_end(&mut host, &mut hints), ReleaseOutcome::Collapsed);
    assert_eq!(host.disable_calls, 0);
    assert_eq!(host.enable_calls, 1);
    assert_eq!(hints.restore_calls, 1);
}

#[test]
fn armed_state_does_not_leak_into_next_gesture() {
    let (opts, calls) = with_refresh_counter(options());
    let mut p = PullToRefresh::new(opts);
    let mut host = MockHost::at_top();
    let mut hints = MockHints::default();

    drag(&mut p, &mut host, &mut hints, 0.0, &[400.0]);
    p.touch_end(&mut host, &mut hints);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Tap without moving.
    assert!(p.touch_start(&host, Touch::new(0.0)));
    assert_eq!(p.touch_end(&mut host, &mut hints), ReleaseOutcome::Collapsed);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn missing_on_refresh_is_tolerated() {
    let mut p = PullToRefresh::new(options());
    let mut host = MockHost::at_top();
    let mut hints = MockHints::default();

    drag(&mut p, &mut host, &mut hints, 0.0, &[400.0]);
    assert_eq!(
        p.touch_end(&mut host, &mut hints),
        ReleaseOutcome::RefreshRequested
    );
    assert_eq!(p.phase(), Phase::Idle);
}

#[test]
fn abort_restores_host_without_refresh() {
    let (opts, calls) = with_refresh_counter(options());
    let mut p = PullToRefresh::new(opts);
    let mut host = MockHost::at_top();
    let mut hints = MockHints::default();

    assert!(!p.abort(&mut host, &mut hints));

    drag(&mut p, &mut host, &mut hints, 0.0, &[400.0]);
    assert!(p.abort(&mut host, &mut hints));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(host.enable_calls, 1);
    assert!(host.scroll_enabled);
    assert_eq!(p.height(), 0.0);
    assert_eq!(p.touch_end(&mut host, &mut hints), ReleaseOutcome::Ignored);
}

#[test]
fn project_clamps_drag_progress() {
    assert_eq!(project(25.0, 50.0).drag, 0.5);
    assert_eq!(project(75.0, 50.0).drag, 1.0);
    assert_eq!(project(-10.0, 50.0).drag, 0.0);
    assert_eq!(project(0.0, 50.0).height, 0.0);
}

#[test]
fn render_anchors_and_transitions() {
    let mut p = PullToRefresh::new(options());
    let mut host = MockHost::at_top();
    let mut hints = MockHints::default();

    let idle = p.render(false);
    assert_eq!(idle.height, 0.0);
    assert_eq!(idle.anchor, Anchor::Bottom);
    assert_eq!(idle.transition, None);
    assert!(idle.clip);

    drag(&mut p, &mut host, &mut hints, 0.0, &[100.0]);
    let dragging = p.render(false);
    assert_eq!(dragging.height, 25.0);
    assert_eq!(dragging.transition, None);
    assert_eq!(
        dragging.content,
        PullProgress {
            height: 25.0,
            drag: 0.5
        }
    );
    assert_eq!(p.render(true).anchor, Anchor::Top);

    p.touch_end(&mut host, &mut hints);
    let collapsing = p.render(false);
    assert_eq!(collapsing.height, 0.0);
    assert_eq!(collapsing.transition, Some(Transition::COLLAPSE));
    assert_eq!(collapsing.transition.map(|t| t.duration_ms), Some(500));

    // A new gesture drops the collapse transition.
    assert!(p.touch_start(&host, Touch::new(0.0)));
    assert_eq!(p.render(false).transition, None);
}

#[test]
fn render_at_uses_given_height() {
    let p = PullToRefresh::new(PullToRefreshOptions::new(|pr: PullProgress| pr.drag));
    let layout = p.render_at(12.5, true);
    assert_eq!(layout.height, 12.5);
    assert_eq!(layout.content, 0.25);
    assert_eq!(layout.anchor, Anchor::Top);
}

#[test]
fn on_change_fires_for_state_changes() {
    let changes = Arc::new(AtomicUsize::new(0));
    let opts = options()
        .with_accept_threshold(10.0)
        .with_on_change(Some({
            let changes = Arc::clone(&changes);
            move |_: &GestureState| {
                changes.fetch_add(1, Ordering::SeqCst);
            }
        }));
    let mut p = PullToRefresh::new(opts);
    let mut host = MockHost::at_top();
    let mut hints = MockHints::default();

    assert!(p.touch_start(&host, Touch::new(0.0)));
    assert_eq!(changes.load(Ordering::SeqCst), 1);

    // Tracking moves do not change the state.
    p.touch_move(&mut host, &mut hints, Touch::new(5.0));
    assert_eq!(changes.load(Ordering::SeqCst), 1);

    p.touch_move(&mut host, &mut hints, Touch::new(50.0));
    p.touch_move(&mut host, &mut hints, Touch::new(60.0));
    assert_eq!(changes.load(Ordering::SeqCst), 3);

    p.touch_end(&mut host, &mut hints);
    assert_eq!(changes.load(Ordering::SeqCst), 4);
}

#[test]
fn update_options_mid_gesture_applies_from_next_move() {
    let mut p = PullToRefresh::new(options());
    let mut host = MockHost::at_top();
    let mut hints = MockHints::default();

    drag(&mut p, &mut host, &mut hints, 0.0, &[300.0]);
    assert!(p.will_refresh());

    p.update_options(|o| o.refresh_threshold = 100.0);
    assert_eq!(p.phase(), Phase::Accepted);
    assert!(p.will_refresh());

    p.touch_move(&mut host, &mut hints, Touch::new(300.0));
    assert!(!p.will_refresh());
    assert_eq!(p.options().refresh_threshold, 100.0);
}

#[test]
fn from_config_round_trips_numeric_options() {
    let config = PullConfig {
        accept_threshold: 5.0,
        refresh_threshold: 80.0,
        max_pull: Some(-20.0),
        resistance: 2.0,
    };
    let opts = PullToRefreshOptions::from_config(config, |_| ());
    assert_eq!(opts.config(), config);
    assert_eq!(options().with_config(config).config(), config);
    assert_eq!(config.pull_height(100.0), 50.0);
}

#[test]
fn zero_resistance_degrades_without_panicking() {
    let mut p = PullToRefresh::new(options().with_resistance(0.0));
    let mut host = MockHost::at_top();
    let mut hints = MockHints::default();

    drag(&mut p, &mut host, &mut hints, 0.0, &[10.0]);
    assert!(p.height().is_infinite());
    assert!(p.will_refresh());
    assert_eq!(p.progress().drag, 1.0);
}

#[test]
fn host_and_hints_can_be_borrowed() {
    let mut p = PullToRefresh::new(options());
    let mut host = MockHost::at_top();

    {
        let mut borrowed = &mut host;
        assert!(p.touch_start(&borrowed, Touch::new(0.0)));
        p.touch_move(&mut borrowed, &mut (), Touch::new(100.0));
        p.touch_end(&mut borrowed, &mut ());
    }
    assert_eq!(host.disable_calls, 1);
    assert_eq!(host.enable_calls, 1);
}
