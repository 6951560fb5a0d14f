/// The scroll container the recognizer is attached to.
///
/// The host owns real scrolling; the recognizer only queries the distance to the start edge and
/// toggles scrolling for the duration of an accepted gesture.
pub trait ScrollHost {
    /// Distance between the current scroll position and the container's start edge.
    fn distance_from_start(&self) -> f32;

    fn disable_scroll(&mut self);

    fn enable_scroll(&mut self);

    /// `true` when content grows from the opposite edge (e.g. chat views); drag distances are
    /// negated.
    fn reverse(&self) -> bool;
}

impl<T: ScrollHost + ?Sized> ScrollHost for &mut T {
    fn distance_from_start(&self) -> f32 {
        (**self).distance_from_start()
    }

    fn disable_scroll(&mut self) {
        (**self).disable_scroll();
    }

    fn enable_scroll(&mut self) {
        (**self).enable_scroll();
    }

    fn reverse(&self) -> bool {
        (**self).reverse()
    }
}

/// Platform rendering hints toggled alongside host scrolling.
///
/// On touch browsers this is the body's momentum ("overflow") scrolling style. Hosts without such
/// a concept use `()`.
pub trait PlatformHints {
    /// Called once when a gesture is accepted.
    fn suppress_momentum_scroll(&mut self);

    /// Called on every gesture end, accepted or not.
    fn restore_momentum_scroll(&mut self);
}

impl PlatformHints for () {
    fn suppress_momentum_scroll(&mut self) {}

    fn restore_momentum_scroll(&mut self) {}
}

impl<T: PlatformHints + ?Sized> PlatformHints for &mut T {
    fn suppress_momentum_scroll(&mut self) {
        (**self).suppress_momentum_scroll();
    }

    fn restore_momentum_scroll(&mut self) {
        (**self).restore_momentum_scroll();
    }
}
