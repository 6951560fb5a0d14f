use alloc::sync::Arc;

use crate::{GestureState, PullProgress};

/// A zero-argument callback fired when a released gesture had passed `refresh_threshold`.
pub type OnRefreshCallback = Arc<dyn Fn() + Send + Sync>;

/// Builds the content placed in the reveal area from the current [`PullProgress`].
pub type RenderCallback<R> = Arc<dyn Fn(PullProgress) -> R + Send + Sync>;

/// A callback fired after every handled touch event that changed the gesture state.
pub type OnChangeCallback = Arc<dyn Fn(&GestureState) + Send + Sync>;

/// The numeric part of the configuration.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, so it can be loaded
/// from an app's settings and turned into options with [`PullToRefreshOptions::from_config`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PullConfig {
    /// Signed drag distance (before resistance) a touch must exceed to be accepted.
    pub accept_threshold: f32,
    /// Height (after resistance) a release must exceed to refresh.
    pub refresh_threshold: f32,
    /// Lower bound applied as `max(height, max_pull)`. `None` floors the height at 0.
    pub max_pull: Option<f32>,
    /// Divisor from finger distance to height.
    pub resistance: f32,
}

impl PullConfig {
    pub const DEFAULT_ACCEPT_THRESHOLD: f32 = 0.0;
    pub const DEFAULT_REFRESH_THRESHOLD: f32 = 50.0;
    pub const DEFAULT_RESISTANCE: f32 = 4.0;

    /// Converts a sign-adjusted drag distance into a reveal-area height.
    ///
    /// Without `max_pull` the height never goes below 0, even when an accepted drag moves back
    /// past its starting point. An explicit `max_pull` replaces that floor with a plain
    /// `max(height, max_pull)`, so a negative bound lets the height go negative down to it.
    pub fn pull_height(&self, drag_distance: f32) -> f32 {
        let height = drag_distance / self.resistance;
        height.max(self.max_pull.unwrap_or(0.0))
    }

    pub(crate) fn warn_if_degenerate(&self) {
        let resistance_ok = self.resistance > 0.0 && self.resistance.is_finite();
        if !resistance_ok {
            plog!(WARN,
                resistance = self.resistance,
                "PullConfig: non-positive or non-finite resistance"
            );
        }
        let refresh_ok = self.refresh_threshold > 0.0;
        if !refresh_ok {
            plog!(WARN,
                refresh_threshold = self.refresh_threshold,
                "PullConfig: non-positive refresh_threshold"
            );
        }
    }
}

impl Default for PullConfig {
    fn default() -> Self {
        Self {
            accept_threshold: Self::DEFAULT_ACCEPT_THRESHOLD,
            refresh_threshold: Self::DEFAULT_REFRESH_THRESHOLD,
            max_pull: None,
            resistance: Self::DEFAULT_RESISTANCE,
        }
    }
}

/// Configuration for [`crate::PullToRefresh`].
///
/// Callbacks are stored in `Arc`s so adapters can clone the options, tweak a threshold and call
/// `PullToRefresh::set_options` without reallocating closures.
pub struct PullToRefreshOptions<R> {
    pub accept_threshold: f32,
    pub refresh_threshold: f32,
    pub max_pull: Option<f32>,
    pub resistance: f32,

    pub on_refresh: Option<OnRefreshCallback>,
    pub render: RenderCallback<R>,

    /// Optional callback fired whenever the gesture state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl<R> Clone for PullToRefreshOptions<R> {
    fn clone(&self) -> Self {
        Self {
            accept_threshold: self.accept_threshold,
            refresh_threshold: self.refresh_threshold,
            max_pull: self.max_pull,
            resistance: self.resistance,
            on_refresh: self.on_refresh.clone(),
            render: Arc::clone(&self.render),
            on_change: self.on_change.clone(),
        }
    }
}

impl<R> PullToRefreshOptions<R> {
    /// Creates options with the default thresholds.
    ///
    /// `render` receives the current height and normalized drag progress and returns whatever the
    /// UI layer places in the reveal area.
    pub fn new(render: impl Fn(PullProgress) -> R + Send + Sync + 'static) -> Self {
        Self::from_config(PullConfig::default(), render)
    }

    pub fn from_config(
        config: PullConfig,
        render: impl Fn(PullProgress) -> R + Send + Sync + 'static,
    ) -> Self {
        Self {
            accept_threshold: config.accept_threshold,
            refresh_threshold: config.refresh_threshold,
            max_pull: config.max_pull,
            resistance: config.resistance,
            on_refresh: None,
            render: Arc::new(render),
            on_change: None,
        }
    }

    pub fn config(&self) -> PullConfig {
        PullConfig {
            accept_threshold: self.accept_threshold,
            refresh_threshold: self.refresh_threshold,
            max_pull: self.max_pull,
            resistance: self.resistance,
        }
    }

    pub fn with_config(mut self, config: PullConfig) -> Self {
        self.accept_threshold = config.accept_threshold;
        self.refresh_threshold = config.refresh_threshold;
        self.max_pull = config.max_pull;
        self.resistance = config.resistance;
        self
    }

    pub fn with_accept_threshold(mut self, accept_threshold: f32) -> Self {
        self.accept_threshold = accept_threshold;
        self
    }

    pub fn with_refresh_threshold(mut self, refresh_threshold: f32) -> Self {
        self.refresh_threshold = refresh_threshold;
        self
    }

    /// Sets the lower bound for the computed height.
    ///
    /// The bound is applied as a plain `max(height, max_pull)`, not as a magnitude cap. For a
    /// normal container it only binds negative heights (an upward drag).
    pub fn with_max_pull(mut self, max_pull: Option<f32>) -> Self {
        self.max_pull = max_pull;
        self
    }

    pub fn with_resistance(mut self, resistance: f32) -> Self {
        self.resistance = resistance;
        self
    }

    pub fn with_on_refresh(mut self, on_refresh: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_refresh = on_refresh.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_render(mut self, render: impl Fn(PullProgress) -> R + Send + Sync + 'static) -> Self {
        self.render = Arc::new(render);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&GestureState) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<R> core::fmt::Debug for PullToRefreshOptions<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PullToRefreshOptions")
            .field("accept_threshold", &self.accept_threshold)
            .field("refresh_threshold", &self.refresh_threshold)
            .field("max_pull", &self.max_pull)
            .field("resistance", &self.resistance)
            .field("on_refresh", &self.on_refresh.is_some())
            .finish_non_exhaustive()
    }
}
