//! A headless, actor-recycling carousel engine.
//!
//! For adapter-level utilities (cursor controller, swipe glue, slot tweens), see the
//! `rcarousel-adapter` crate.
//!
//! A carousel over an arbitrarily large collection only ever needs three pages of rendering
//! slots ("actors"): the page before the viewport, the visible page and the page after. This
//! crate owns the arithmetic that keeps those slots alive across cursor moves:
//! - clamping and infinite/loop wrap of an unbounded cursor
//! - the window snapshot for a shifted cursor
//! - a rotating role assignment so a slot keeps its slide (and its in-flight animation) while
//!   the window slides
//! - per-slot animation targets, including which recycled slots must snap instead of animate
//!
//! It is UI-agnostic. A rendering layer is expected to provide:
//! - the container size (and viewport width for responsive display rules)
//! - the slide count
//! - the cursor, or committed swipe steps
//!
//! and to animate each slot towards its target offset.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anim;
mod carousel;
mod cursor;
mod display;
mod error;
mod layout;
mod options;
mod remap;
mod snapshot;
mod types;
mod unit;

#[cfg(test)]
mod tests;

pub use anim::{AnimTarget, AnimTo, Rotation};
pub use carousel::{Carousel, CursorSource, slide_count_shift};
pub use cursor::{
    CursorRange, MAX_SAFE_CURSOR, WrapMode, clamp_cursor, local_index, validate_cursor,
};
pub use display::{DisplayCount, DisplayRule, validate_count};
pub use error::{Error, Result, SizeKind};
pub use layout::Layout;
pub use options::{
    CarouselOptions, OnCursorChange, OnRangeChange, OnSwipe, OnVisibleCountChange,
};
pub use remap::{Actor, ActorPool, PoolState, Relocation, RemapInput, calc_actors};
pub use snapshot::{snapshot, snapshot_into};
pub use types::{Axis, ChangeReason, Direction, Size, SlotView, Step};
pub use unit::UnitValue;
