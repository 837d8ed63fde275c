/// Where an actor should move to, in slide widths relative to the cursor, and whether the
/// transition should snap instead of animate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimTarget {
    pub d: i64,
    pub immediate: bool,
}

/// A rotation of `0..total`: entry `i` is `(i + offset) % total`.
///
/// The remapper describes the physical slot that plays window role `i` with this permutation.
/// Because it is a pure rotation, lookups in both directions are O(1) and never materialize
/// the array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    offset: usize,
    total: usize,
}

impl Rotation {
    pub fn new(offset: usize, total: usize) -> Self {
        Self {
            offset: if total == 0 { 0 } else { offset % total },
            total,
        }
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Entry `i` of the rotation.
    pub fn get(&self, i: usize) -> usize {
        debug_assert!(i < self.total, "Rotation::get out of bounds (i={i}, total={})", self.total);
        (i + self.offset) % self.total
    }

    /// Position of `value` in the rotation (the inverse of [`Rotation::get`]).
    pub fn position_of(&self, value: usize) -> usize {
        debug_assert!(
            value < self.total,
            "Rotation::position_of out of bounds (value={value}, total={})",
            self.total
        );
        (value + self.total - self.offset) % self.total
    }

    /// Returns `true` when `value` appears within entries `range`.
    pub fn slice_contains(&self, range: core::ops::Range<usize>, value: usize) -> bool {
        range.contains(&self.position_of(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.total).map(|i| self.get(i))
    }
}

/// Computes per-slot animation targets for one remap.
#[derive(Clone, Copy, Debug)]
pub struct AnimTo {
    pub delta: i64,
    pub cur_roles: Rotation,
    pub next_roles: Rotation,
    pub relocated: bool,
}

impl AnimTo {
    pub fn target(&self, slot: usize) -> AnimTarget {
        let total = self.next_roles.len();
        let visible = total / 3;
        let d = self.next_roles.position_of(slot) as i64 - visible as i64;

        // A slot leaving the trailing page is recycled to the leading edge; animating it would
        // sweep it across the whole window.
        let recycled = if self.delta >= 1 {
            self.cur_roles.slice_contains(0..visible, slot)
        } else {
            self.cur_roles.slice_contains(total - visible..total, slot)
        };

        AnimTarget {
            d,
            immediate: self.relocated || recycled,
        }
    }
}
