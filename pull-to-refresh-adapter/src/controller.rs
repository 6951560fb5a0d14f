use pull_to_refresh::{
    EventDisposition, PlatformHints, PullToRefresh, PullToRefreshOptions, ReleaseOutcome,
    RevealLayout, ScrollHost, Touch, Transition,
};

use crate::root::ListenerScope;
use crate::{Easing, EventRoot, Tween};

/// A raw touch event as delivered by the UI layer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchInput {
    /// A touch went down on the scroll container.
    Start(Touch),
    /// A touch moved anywhere in the document.
    Move(Touch),
    /// A touch was lifted anywhere in the document.
    End,
}

/// What [`Controller::dispatch`] did with a [`TouchInput`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchOutcome {
    /// Apply this to the native event.
    pub disposition: EventDisposition,
    /// `true` when a `Start` began a gesture.
    pub started: bool,
    /// Set for every `End`, including ignored ones.
    pub release: Option<ReleaseOutcome>,
}

impl DispatchOutcome {
    const PASS: Self = Self {
        disposition: EventDisposition::Pass,
        started: false,
        release: None,
    };

    /// Whether this event released a gesture past `refresh_threshold`.
    pub fn refresh_requested(&self) -> bool {
        self.release == Some(ReleaseOutcome::RefreshRequested)
    }
}

/// A framework-neutral controller that wraps a `pull_to_refresh::PullToRefresh` together with
/// the host it is attached to.
///
/// This type does not hold any UI objects beyond the host capabilities you hand it. Adapters
/// drive it by calling:
/// - `on_touch_start` / `on_touch_move` / `on_touch_end` (or `dispatch`) when UI events occur
/// - `tick(now_ms)` each frame while `is_animating()` (for the collapse after a release)
///
/// Root-level listeners are attached through [`EventRoot`] only for the duration of a gesture.
/// Dropping the controller mid-gesture releases the gesture: scrolling is re-enabled, platform
/// hints are restored and root listeners are detached.
pub struct Controller<S: ScrollHost, R, P: PlatformHints = (), E: EventRoot = ()> {
    ptr: PullToRefresh<R>,
    host: S,
    hints: P,
    root: E,
    scope: ListenerScope,
    collapse: Option<Tween>,
    easing: Easing,
}

impl<S: ScrollHost, R> Controller<S, R> {
    pub fn new(options: PullToRefreshOptions<R>, host: S) -> Self {
        Self::from_parts(PullToRefresh::new(options), host, (), ())
    }
}

impl<S: ScrollHost, R, P: PlatformHints, E: EventRoot> Controller<S, R, P, E> {
    pub fn from_parts(ptr: PullToRefresh<R>, host: S, hints: P, root: E) -> Self {
        Self {
            ptr,
            host,
            hints,
            root,
            scope: ListenerScope::default(),
            collapse: None,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn recognizer(&self) -> &PullToRefresh<R> {
        &self.ptr
    }

    pub fn host(&self) -> &S {
        &self.host
    }

    /// Mutable access to the host, e.g. to update its scroll position between gestures.
    pub fn host_mut(&mut self) -> &mut S {
        &mut self.host
    }

    pub fn hints(&self) -> &P {
        &self.hints
    }

    pub fn root(&self) -> &E {
        &self.root
    }

    pub fn set_options(&mut self, options: PullToRefreshOptions<R>) {
        self.ptr.set_options(options);
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut PullToRefreshOptions<R>)) {
        self.ptr.update_options(f);
    }

    /// Whether root-level move/end listeners are currently attached.
    pub fn is_gesture_active(&self) -> bool {
        self.scope.is_attached()
    }

    pub fn is_animating(&self) -> bool {
        self.collapse.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.collapse = None;
    }

    /// Call this when a touch goes down on the scroll container.
    ///
    /// Returns `true` when a gesture started. This cancels a running collapse.
    pub fn on_touch_start(&mut self, touch: Touch) -> bool {
        if !self.ptr.touch_start(&self.host, touch) {
            return false;
        }
        self.cancel_animation();
        self.scope.acquire(&mut self.root);
        plog!(DEBUG, client_y = touch.client_y, "root listeners attached");
        true
    }

    /// Call this for every root-level touch move. Apply the returned disposition to the native
    /// event.
    pub fn on_touch_move(&mut self, touch: Touch) -> EventDisposition {
        if !self.scope.is_attached() {
            return EventDisposition::Pass;
        }
        self.ptr.touch_move(&mut self.host, &mut self.hints, touch)
    }

    /// Call this for every root-level touch end.
    ///
    /// Releases the gesture, detaches root listeners and starts the collapse animation from the
    /// released height.
    pub fn on_touch_end(&mut self, now_ms: u64) -> ReleaseOutcome {
        if !self.scope.is_attached() {
            return ReleaseOutcome::Ignored;
        }
        let released_height = self.ptr.height();
        let outcome = self.ptr.touch_end(&mut self.host, &mut self.hints);
        self.scope.release(&mut self.root);
        plog!(DEBUG, ?outcome, released_height, "root listeners detached");

        let duration_ms = self
            .ptr
            .state()
            .transition
            .unwrap_or(Transition::COLLAPSE)
            .duration_ms;
        let easing = self.easing;
        self.collapse = (released_height != 0.0)
            .then(|| Tween::new(released_height, 0.0, now_ms, duration_ms, easing));
        outcome
    }

    /// Routes a raw touch event to the matching handler.
    pub fn dispatch(&mut self, input: TouchInput, now_ms: u64) -> DispatchOutcome {
        plog!(TRACE, ?input, now_ms, "dispatch");
        match input {
            TouchInput::Start(touch) => DispatchOutcome {
                started: self.on_touch_start(touch),
                ..DispatchOutcome::PASS
            },
            TouchInput::Move(touch) => DispatchOutcome {
                disposition: self.on_touch_move(touch),
                ..DispatchOutcome::PASS
            },
            TouchInput::End => DispatchOutcome {
                release: Some(self.on_touch_end(now_ms)),
                ..DispatchOutcome::PASS
            },
        }
    }

    /// Advances the collapse animation.
    ///
    /// Returns the sampled height while a collapse is running, `None` otherwise.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let tween = self.collapse?;
        let height = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.collapse = None;
        }
        Some(height)
    }

    /// The reveal-area height to draw at `now_ms`, including a running collapse.
    pub fn display_height(&self, now_ms: u64) -> f32 {
        match self.collapse {
            Some(tween) => tween.sample(now_ms),
            None => self.ptr.height(),
        }
    }

    /// Projects the current frame through the render callback.
    ///
    /// The collapse is already applied to `height`, so the returned layout never carries a
    /// transition. Hosts that prefer native height transitions should render through
    /// [`Controller::recognizer`] instead.
    pub fn layout(&self, now_ms: u64) -> RevealLayout<R> {
        let mut layout = self
            .ptr
            .render_at(self.display_height(now_ms), self.host.reverse());
        layout.transition = None;
        layout
    }
}

impl<S: ScrollHost, R, P: PlatformHints, E: EventRoot> Drop for Controller<S, R, P, E> {
    fn drop(&mut self) {
        if self.ptr.abort(&mut self.host, &mut self.hints) {
            plog!(WARN, "Controller dropped during an active gesture");
        }
        self.scope.release(&mut self.root);
    }
}

impl<S, R, P, E> core::fmt::Debug for Controller<S, R, P, E>
where
    S: ScrollHost + core::fmt::Debug,
    P: PlatformHints + core::fmt::Debug,
    E: EventRoot + core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("state", &self.ptr.state())
            .field("host", &self.host)
            .field("hints", &self.hints)
            .field("root", &self.root)
            .field("scope", &self.scope)
            .field("collapse", &self.collapse)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}
