//! Adapter utilities for the `pull-to-refresh` crate.
//!
//! The `pull-to-refresh` crate is UI-agnostic and focuses on the gesture state machine. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A [`Controller`] that owns the host and scopes root-level listeners to a single gesture
//! - Tween-based collapse of the reveal area after a release (optional; adapter-driven)
//!
//! This crate is intentionally framework-agnostic (no DOM/winit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod root;
mod tween;


pub use controller::{Controller, DispatchOutcome, TouchInput};
pub use root::EventRoot;
pub use tween::{Easing, Tween};
