use rcarousel::{Axis, Layout};

/// Tolerance subtracted from the swipe threshold when a drag is released.
pub const THRESHOLD_EPSILON_PX: f64 = 1.0;

/// Sizes the swipe recognizer needs, usually taken from the engine's [`Layout`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwipeConfig {
    pub axis: Axis,
    pub item_size_px: f64,
    pub threshold_px: f64,
    pub visible: usize,
    pub slides_to_swipe: Option<usize>,
}

impl SwipeConfig {
    pub fn from_layout(layout: &Layout, axis: Axis) -> Self {
        Self {
            axis,
            item_size_px: layout.item_size_px,
            threshold_px: layout.swipe_threshold_px,
            visible: layout.visible,
            slides_to_swipe: layout.slides_to_swipe,
        }
    }
}

/// What the renderer should do after one drag frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    /// The drag is live: offset every slot by this many slide lengths.
    Follow(f64),
    /// Request a move by this many slides (negative is backwards).
    Commit(i64),
    /// Animate every slot back to its current target.
    SnapBack,
    /// Nothing to do.
    Ignored,
}

/// Turns a stream of drag frames into follow / commit / snap-back intents.
///
/// Frames carry the total pointer movement since the drag started and whether the pointer is
/// still down. Once a drag commits or is canceled, the rest of that gesture is ignored; the
/// next frame with the pointer up ends it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwipeTracker {
    active: bool,
    canceled: bool,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while a drag is being followed.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn on_drag(&mut self, cfg: &SwipeConfig, movement: [f64; 2], down: bool) -> DragUpdate {
        if self.canceled {
            if !down {
                self.canceled = false;
            }
            return DragUpdate::Ignored;
        }
        if !(cfg.item_size_px > 0.0) || cfg.visible == 0 {
            cwarn!(
                item_size_px = cfg.item_size_px,
                visible = cfg.visible,
                "SwipeTracker::on_drag: layout not measured"
            );
            self.active = false;
            return DragUpdate::Ignored;
        }

        let m = movement[cfg.axis.index()];
        let distance = abs(m);
        let pages = distance / cfg.item_size_px;

        let released_past_threshold =
            !down && distance >= cfg.threshold_px - THRESHOLD_EPSILON_PX;
        if (released_past_threshold || pages >= cfg.visible as f64) && m != 0.0 {
            let count = match cfg.slides_to_swipe {
                Some(n) => i64::try_from(n).unwrap_or(i64::MAX),
                None => round_non_negative(pages).max(1),
            };
            let step = if m > 0.0 { -count } else { count };
            self.active = false;
            self.canceled = down;
            cdebug!(movement = m, step, down, "SwipeTracker::on_drag: commit");
            return DragUpdate::Commit(step);
        }

        if down {
            self.active = true;
            DragUpdate::Follow(m / cfg.item_size_px)
        } else {
            self.active = false;
            DragUpdate::SnapBack
        }
    }

    /// Aborts the current drag (e.g. the gesture turned out to be on the cross axis).
    ///
    /// The cursor is untouched; the caller only has to animate back.
    pub fn cancel(&mut self) -> DragUpdate {
        self.canceled = self.active;
        self.active = false;
        DragUpdate::SnapBack
    }

    /// Forgets any in-progress or canceled gesture.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

/// Round-half-up for non-negative values, usable without `std`.
fn round_non_negative(v: f64) -> i64 {
    if !(v > 0.0) {
        return 0;
    }
    (v + 0.5) as i64
}
