use crate::PullProgress;

/// Maps a reveal-area height to the values passed to the render callback.
///
/// `drag` is `height / refresh_threshold` clamped to `0.0..=1.0`. A non-positive threshold is not
/// rejected; the division yields inf/NaN just like any other degenerate configuration.
pub fn project(height: f32, refresh_threshold: f32) -> PullProgress {
    let drag = (height / refresh_threshold).clamp(0.0, 1.0);
    PullProgress { height, drag }
}

/// Negates a drag distance for reversed containers.
pub(crate) fn reversable(distance: f32, reverse: bool) -> f32 {
    if reverse { -distance } else { distance }
}
