//! Adapter utilities for the `rcarousel` crate.
//!
//! The `rcarousel` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - An owner-side cursor controller (navigation buttons, "go to slide K", range re-clamping)
//! - Swipe recognition on top of already-captured pointer movement
//! - Per-slot tweens that consume the engine's `{ d, immediate }` targets
//! - A `Controller` wiring all of the above to a `Carousel`
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod cursor;
mod swipe;
mod tween;


pub use controller::Controller;
pub use cursor::CursorController;
pub use swipe::{DragUpdate, SwipeConfig, SwipeTracker, THRESHOLD_EPSILON_PX};
pub use tween::{ActorAnimator, Easing, Tween};
