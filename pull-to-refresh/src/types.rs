/// Phase of the pull gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A touch started at the start edge but has not moved past `accept_threshold` yet.
    Tracking,
    /// The drag is committed: host scrolling is suppressed and the reveal area follows the finger.
    Accepted,
}

/// A single touch point, in the host's client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Touch {
    pub client_y: f32,
}

impl Touch {
    pub fn new(client_y: f32) -> Self {
        Self { client_y }
    }
}

/// What the host should do with the native event after the recognizer handled it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventDisposition {
    /// Let the host run its default behavior (scrolling).
    Pass,
    /// The recognizer consumed the event; suppress the host's default scroll.
    PreventDefault,
}

impl EventDisposition {
    pub fn is_prevented(self) -> bool {
        matches!(self, Self::PreventDefault)
    }
}

/// Result of a touch end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReleaseOutcome {
    /// No gesture listeners were active; nothing happened.
    Ignored,
    /// The gesture ended without arming a refresh.
    Collapsed,
    /// The gesture ended past `refresh_threshold`. `on_refresh` (if any) has been called.
    RefreshRequested,
}

/// Edge the rendered content sticks to inside the reveal area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Anchor {
    Top,
    Bottom,
}

impl Anchor {
    /// Bottom-anchored for a normal container, top-anchored for a reversed one.
    pub fn for_reverse(reverse: bool) -> Self {
        if reverse { Self::Top } else { Self::Bottom }
    }
}

/// An animated height transition the host should apply to the reveal area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub duration_ms: u64,
}

impl Transition {
    /// The collapse-back-to-zero animation applied after a release.
    pub const COLLAPSE: Self = Self { duration_ms: 500 };
}

/// Values handed to the render callback.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PullProgress {
    /// Current height of the reveal area.
    pub height: f32,
    /// `height / refresh_threshold`, clamped to `0.0..=1.0`.
    pub drag: f32,
}

/// Layout of the reveal area for one frame.
///
/// The host sizes a clipping container to `height`, places `content` against `anchor`, and
/// animates height changes only when `transition` is set.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealLayout<R> {
    pub height: f32,
    /// Content overflowing `height` is clipped.
    pub clip: bool,
    pub anchor: Anchor,
    pub transition: Option<Transition>,
    pub content: R,
}
