//! A headless pull-to-refresh gesture engine.
//!
//! For adapter-level utilities (listener scoping, collapse animation), see the
//! `pull-to-refresh-adapter` crate.
//!
//! The crate turns a vertical touch drag that starts at the top of a scroll container into a
//! growing "reveal" area, and requests a refresh when the user releases past a threshold.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`ScrollHost`]: distance to the start edge, scroll enable/disable, orientation
//! - touch start/move/end events
//! - a render callback that turns [`PullProgress`] into visual content
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod gesture;
mod host;
mod options;
mod projection;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use gesture::PullToRefresh;
pub use host::{PlatformHints, ScrollHost};
pub use options::{
    OnChangeCallback, OnRefreshCallback, PullConfig, PullToRefreshOptions, RenderCallback,
};
pub use projection::project;
pub use state::GestureState;
pub use types::{
    Anchor, EventDisposition, Phase, PullProgress, ReleaseOutcome, RevealLayout, Touch, Transition,
};
