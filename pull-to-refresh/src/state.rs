use crate::{Phase, Transition};

/// A lightweight snapshot of the recognizer's gesture state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureState {
    pub phase: Phase,
    /// Client Y of the touch that started the gesture; `None` outside a gesture.
    pub initial_touch_y: Option<f32>,
    /// Height of the reveal area. Reset to 0 on touch start and touch end.
    pub height: f32,
    /// Set only while the reveal area collapses after a release.
    pub transition: Option<Transition>,
    /// Whether releasing now would refresh. Only meaningful in [`Phase::Accepted`].
    pub will_refresh: bool,
}

impl GestureState {
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }
}
