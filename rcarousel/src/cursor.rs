use crate::{Error, Result};

/// Largest cursor magnitude the engine accepts (`2^53 - 1`).
///
/// Cursors are consumed by animation layers as floating point offsets, so anything beyond the
/// exactly-representable integer range of an `f64` is rejected up front.
pub const MAX_SAFE_CURSOR: i64 = (1 << 53) - 1;

/// Clamps `cursor` into `[from, to]`, treating a negative `to` as `0`.
///
/// A degenerate upper bound (e.g. an empty collection) leaves exactly one valid position: `0`.
/// The lower bound is applied last, so an inverted range resolves to `from`.
pub fn clamp_cursor(cursor: i64, from: i64, to: i64) -> i64 {
    let to = if to < 0 { 0 } else { to };
    let c = if cursor <= to { cursor } else { to };
    if c >= from { c } else { from }
}

/// Maps an unbounded global index onto `[0, length)` (Euclidean modulo).
///
/// Returns `0` for an empty collection.
pub fn local_index(global_index: i64, length: usize) -> usize {
    if length == 0 {
        return 0;
    }
    let length = i64::try_from(length).unwrap_or(i64::MAX);
    global_index.rem_euclid(length) as usize
}

/// Rejects cursors whose arithmetic relative to `count` would leave the safe integer domain.
pub fn validate_cursor(cursor: i64, count: usize) -> Result<()> {
    let invalid = Error::InvalidCursor { cursor, count };
    let count = i64::try_from(count).map_err(|_| invalid)?;
    let in_range =
        |v: Option<i64>| v.is_some_and(|v| (-MAX_SAFE_CURSOR..=MAX_SAFE_CURSOR).contains(&v));
    if in_range(cursor.checked_add(count)) && in_range(cursor.checked_sub(count)) {
        Ok(())
    } else {
        Err(invalid)
    }
}

/// How the cursor behaves at the ends of the collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrapMode {
    /// The cursor stays within `[0, count - 1]`.
    #[default]
    Bounded,
    /// The cursor is unbounded forward (`[0, +∞)`); slides repeat.
    Infinite,
    /// The cursor is unbounded in both directions; slides repeat.
    Loop,
}

/// The valid cursor range plus the range of global indexes that resolve to content.
///
/// Unbounded ends are `i64::MIN` / `i64::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CursorRange {
    pub min: i64,
    pub max: i64,
    /// Exclusive end of the content range (`min..content_end`). Equal to `min` when the
    /// collection is empty.
    pub content_end: i64,
}

impl Default for CursorRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: 0,
            content_end: 0,
        }
    }
}

impl CursorRange {
    /// Derives the range for a collection of `count` slides showing `visible` at once.
    ///
    /// Endless modes only take effect once the collection fills the viewport
    /// (`count >= visible`). With `trim_end`, the last page is not scrolled past, so the final
    /// position shows the last `visible` slides.
    pub fn for_collection(mode: WrapMode, count: usize, visible: usize, trim_end: bool) -> Self {
        let endless = mode != WrapMode::Bounded && count >= visible;
        let min = if endless && mode == WrapMode::Loop {
            i64::MIN
        } else {
            0
        };
        let count_i = i64::try_from(count).unwrap_or(i64::MAX);
        let content_max = if endless {
            i64::MAX
        } else {
            count_i.saturating_sub(1).max(0)
        };
        let max = if trim_end && content_max != i64::MAX {
            let visible_i = i64::try_from(visible).unwrap_or(i64::MAX);
            content_max
                .saturating_sub(visible_i.saturating_sub(1))
                .max(0)
        } else {
            content_max
        };
        let content_end = if count == 0 {
            min
        } else {
            content_max.saturating_add(1)
        };
        Self {
            min,
            max,
            content_end,
        }
    }

    pub fn clamp(&self, cursor: i64) -> i64 {
        clamp_cursor(cursor, self.min, self.max)
    }

    pub fn is_bounded_below(&self) -> bool {
        self.min != i64::MIN
    }

    pub fn is_bounded_above(&self) -> bool {
        self.max != i64::MAX
    }

    /// Returns `true` when `global_index` maps to real content.
    ///
    /// With an unbounded upper end every index past `min` is content.
    pub fn contains_content(&self, global_index: i64) -> bool {
        if global_index < self.min {
            return false;
        }
        if self.content_end == i64::MAX {
            return true;
        }
        global_index < self.content_end
    }

    /// Resolves a global index to a slide index, or `None` for an empty slot.
    pub fn resolve_slide(&self, global_index: i64, count: usize) -> Option<usize> {
        if count == 0 || !self.contains_content(global_index) {
            return None;
        }
        Some(local_index(global_index, count))
    }
}
