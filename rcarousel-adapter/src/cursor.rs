use rcarousel::{CursorRange, clamp_cursor, local_index};

/// Owner-side cursor state for a carousel running in external cursor mode.
///
/// Tracks an unbounded global cursor together with the last reported range and slide count,
/// and exposes the navigation operations a UI binds to buttons and indicators. Until the
/// first `on_range_change` the range is `[0, 0]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CursorController {
    global_cursor: i64,
    from: i64,
    to: i64,
    slides_count: usize,
    step: i64,
}

impl Default for CursorController {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl CursorController {
    /// Creates a controller starting at `init`; `next`/`back` move by `step` slides.
    pub fn new(init: i64, step: i64) -> Self {
        Self {
            global_cursor: init,
            from: 0,
            to: 0,
            slides_count: 0,
            step,
        }
    }

    pub fn global_cursor(&self) -> i64 {
        self.global_cursor
    }

    /// First valid global cursor.
    pub fn from(&self) -> i64 {
        self.from
    }

    /// Last valid global cursor.
    pub fn to(&self) -> i64 {
        self.to
    }

    pub fn slides_count(&self) -> usize {
        self.slides_count
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn set_step(&mut self, step: i64) {
        self.step = step;
    }

    /// Slide index under the cursor.
    pub fn local_cursor(&self) -> usize {
        local_index(self.global_cursor, self.slides_count)
    }

    /// Applies `f` to the global cursor, optionally clamping the result into the range.
    ///
    /// Returns the new global cursor.
    pub fn update_global(&mut self, f: impl FnOnce(i64) -> i64, clamp: bool) -> i64 {
        let next = f(self.global_cursor);
        self.global_cursor = if clamp {
            clamp_cursor(next, self.from, self.to)
        } else {
            next
        };
        ctrace!(
            cursor = self.global_cursor,
            clamp,
            "CursorController::update_global"
        );
        self.global_cursor
    }

    /// Sets the global cursor, clamped into the range.
    pub fn set_global(&mut self, value: i64) -> i64 {
        self.update_global(|_| value, true)
    }

    /// Moves to a local slide index computed by `f` from the global cursor.
    ///
    /// The result is clamped into `[0, length - 1]` (`length` defaults to the slide count)
    /// and applied relative to the current lap, so "go to slide K" works the same in every
    /// wrap mode.
    pub fn update_local(&mut self, f: impl FnOnce(i64) -> i64, length: Option<usize>) -> i64 {
        let length = length.unwrap_or(self.slides_count);
        let last = i64::try_from(length).unwrap_or(i64::MAX).saturating_sub(1);
        let local = self.local_cursor() as i64;
        let target = clamp_cursor(f(self.global_cursor), 0, last);
        self.global_cursor = self.global_cursor.saturating_add(target - local);
        ctrace!(
            cursor = self.global_cursor,
            target,
            "CursorController::update_local"
        );
        self.global_cursor
    }

    pub fn go_to(&mut self, local: usize, length: Option<usize>) -> i64 {
        let local = i64::try_from(local).unwrap_or(i64::MAX);
        self.update_local(|_| local, length)
    }

    /// Adopts a new range reported by the engine and re-clamps the cursor into it.
    pub fn on_range_change(&mut self, range: CursorRange, slides_count: usize) {
        self.from = range.min;
        self.to = range.max;
        self.slides_count = slides_count;
        self.global_cursor = clamp_cursor(self.global_cursor, range.min, range.max);
    }

    /// `true` when `next` cannot move a full step.
    pub fn is_max(&self) -> bool {
        !self
            .global_cursor
            .checked_add(self.step)
            .is_some_and(|c| c <= self.to)
    }

    /// `true` when `back` cannot move a full step.
    pub fn is_min(&self) -> bool {
        !self
            .global_cursor
            .checked_sub(self.step)
            .is_some_and(|c| c >= self.from)
    }

    pub fn next(&mut self) -> i64 {
        self.move_by(self.step)
    }

    pub fn back(&mut self) -> i64 {
        self.move_by(self.step.saturating_neg())
    }

    pub fn move_by(&mut self, step: i64) -> i64 {
        self.update_global(|c| c.saturating_add(step), true)
    }
}
