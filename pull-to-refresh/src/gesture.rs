use crate::projection::{project, reversable};
use crate::{
    Anchor, EventDisposition, GestureState, Phase, PlatformHints, PullConfig, PullProgress,
    PullToRefreshOptions, ReleaseOutcome, RevealLayout, ScrollHost, Touch, Transition,
};

/// A headless pull-to-refresh gesture recognizer.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold the scroll container; every handler borrows a [`ScrollHost`].
/// - Your adapter forwards touch start/move/end and applies the returned [`EventDisposition`].
/// - Rendering is exposed via [`PullToRefresh::render`], which calls the configured render
///   callback and returns a [`RevealLayout`].
///
/// Touch start is expected to be delivered from the scroll container. Move/end are only handled
/// while a gesture holds its listener scope (between an accepted start and the matching end), so
/// adapters can route root-level events unconditionally.
///
/// For listener scoping, collapse animation and unmount handling, see the
/// `pull-to-refresh-adapter` crate.
#[derive(Clone, Debug)]
pub struct PullToRefresh<R> {
    options: PullToRefreshOptions<R>,
    state: GestureState,
    listening: bool,
}

impl<R> PullToRefresh<R> {
    pub fn new(options: PullToRefreshOptions<R>) -> Self {
        plog!(DEBUG,
            accept_threshold = options.accept_threshold,
            refresh_threshold = options.refresh_threshold,
            resistance = options.resistance,
            "PullToRefresh::new"
        );
        options.config().warn_if_degenerate();
        Self {
            options,
            state: GestureState::default(),
            listening: false,
        }
    }

    pub fn options(&self) -> &PullToRefreshOptions<R> {
        &self.options
    }

    /// Replaces the options. An in-flight gesture keeps its state and continues with the new
    /// thresholds from the next event on.
    pub fn set_options(&mut self, options: PullToRefreshOptions<R>) {
        self.options = options;
        plog!(TRACE,
            accept_threshold = self.options.accept_threshold,
            refresh_threshold = self.options.refresh_threshold,
            resistance = self.options.resistance,
            "PullToRefresh::set_options"
        );
        self.options.config().warn_if_degenerate();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut PullToRefreshOptions<R>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn config(&self) -> PullConfig {
        self.options.config()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn height(&self) -> f32 {
        self.state.height
    }

    /// Whether releasing now would request a refresh.
    pub fn will_refresh(&self) -> bool {
        self.state.phase == Phase::Accepted && self.state.will_refresh
    }

    /// Whether move/end events are currently handled.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn progress(&self) -> PullProgress {
        project(self.state.height, self.options.refresh_threshold)
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(&self.state);
        }
    }

    /// Handles a touch start delivered by the scroll container.
    ///
    /// Starts tracking only while idle and when the container is within `accept_threshold + 1`
    /// of its start edge. Returns `true` when a gesture started; the adapter should then begin
    /// delivering move/end events.
    pub fn touch_start<S: ScrollHost + ?Sized>(&mut self, host: &S, touch: Touch) -> bool {
        if self.listening {
            plog!(TRACE, client_y = touch.client_y, "touch_start: gesture already active");
            return false;
        }

        let distance = host.distance_from_start();
        let at_start = distance <= self.options.accept_threshold + 1.0;
        if !at_start {
            plog!(TRACE, distance, "touch_start: away from start edge");
            return false;
        }

        self.listening = true;
        self.state = GestureState {
            phase: Phase::Tracking,
            initial_touch_y: Some(touch.client_y),
            height: 0.0,
            transition: None,
            will_refresh: false,
        };
        plog!(DEBUG, client_y = touch.client_y, distance, "gesture tracking");
        self.notify();
        true
    }

    /// Handles a touch move for the active gesture.
    ///
    /// Returns [`EventDisposition::PreventDefault`] once the gesture is accepted; the host must
    /// then suppress its default scroll for this event.
    pub fn touch_move<S, P>(&mut self, host: &mut S, hints: &mut P, touch: Touch) -> EventDisposition
    where
        S: ScrollHost + ?Sized,
        P: PlatformHints + ?Sized,
    {
        if !self.listening {
            return EventDisposition::Pass;
        }
        debug_assert!(
            self.state.initial_touch_y.is_some(),
            "listening without an initial touch"
        );
        let Some(initial_touch_y) = self.state.initial_touch_y else {
            return EventDisposition::Pass;
        };

        let config = self.options.config();
        let drag_distance = reversable(touch.client_y - initial_touch_y, host.reverse());
        let height = config.pull_height(drag_distance);
        plog!(TRACE, client_y = touch.client_y, drag_distance, height, "touch_move");

        if self.state.phase == Phase::Tracking && drag_distance > config.accept_threshold {
            self.state.phase = Phase::Accepted;
            host.disable_scroll();
            hints.suppress_momentum_scroll();
            plog!(DEBUG, drag_distance, "gesture accepted");
        }

        if self.state.phase != Phase::Accepted {
            return EventDisposition::Pass;
        }

        self.state.height = height;
        self.state.transition = None;
        self.state.will_refresh = height > config.refresh_threshold;
        self.notify();
        EventDisposition::PreventDefault
    }

    /// Handles the touch end of the active gesture.
    ///
    /// Re-enables host scrolling, resets the state with a collapse transition and, if the gesture
    /// was armed, calls `on_refresh` once after the reset.
    pub fn touch_end<S, P>(&mut self, host: &mut S, hints: &mut P) -> ReleaseOutcome
    where
        S: ScrollHost + ?Sized,
        P: PlatformHints + ?Sized,
    {
        if !self.listening {
            return ReleaseOutcome::Ignored;
        }
        let will_refresh = self.will_refresh();
        self.release(host, hints);

        if !will_refresh {
            return ReleaseOutcome::Collapsed;
        }
        plog!(DEBUG, has_callback = self.options.on_refresh.is_some(), "refresh requested");
        if let Some(on_refresh) = &self.options.on_refresh {
            on_refresh();
        }
        ReleaseOutcome::RefreshRequested
    }

    /// Tears down an active gesture without refreshing, e.g. when the view is unmounted
    /// mid-gesture.
    ///
    /// Returns `false` when no gesture was active.
    pub fn abort<S, P>(&mut self, host: &mut S, hints: &mut P) -> bool
    where
        S: ScrollHost + ?Sized,
        P: PlatformHints + ?Sized,
    {
        if !self.listening {
            return false;
        }
        plog!(DEBUG, phase = ?self.state.phase, "gesture aborted");
        self.release(host, hints);
        true
    }

    fn release<S, P>(&mut self, host: &mut S, hints: &mut P)
    where
        S: ScrollHost + ?Sized,
        P: PlatformHints + ?Sized,
    {
        self.listening = false;
        hints.restore_momentum_scroll();
        host.enable_scroll();
        self.state = GestureState {
            phase: Phase::Idle,
            initial_touch_y: None,
            height: 0.0,
            transition: Some(Transition::COLLAPSE),
            will_refresh: false,
        };
        self.notify();
    }

    /// Projects the current state through the render callback.
    pub fn render(&self, reverse: bool) -> RevealLayout<R> {
        self.render_at(self.state.height, reverse)
    }

    /// Like [`PullToRefresh::render`], with an explicit height.
    ///
    /// Adapters that animate the collapse themselves pass the sampled height here.
    pub fn render_at(&self, height: f32, reverse: bool) -> RevealLayout<R> {
        let progress = project(height, self.options.refresh_threshold);
        RevealLayout {
            height,
            clip: true,
            anchor: Anchor::for_reverse(reverse),
            transition: self.state.transition,
            content: (self.options.render)(progress),
        }
    }
}
