use alloc::vec::Vec;

use crate::anim::{AnimTarget, AnimTo, Rotation};
use crate::snapshot::snapshot_into;

/// A pooled rendering slot and the slide it currently represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    /// Unbounded slide index; may be negative or past the collection end.
    pub global_index: i64,
    pub anim: AnimTarget,
}

/// Why a remap recomputed the whole window instead of sliding it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relocation {
    /// First remap of a pool, or an explicit [`ActorPool::relocate`].
    Initial,
    /// The pool size changed, so no slot can keep its role.
    VisibleCountChanged,
    /// The cursor did not move; the window is recentered without animation.
    Stationary,
    /// The cursor moved by more than one page.
    Jump,
}

/// Per-call input of [`calc_actors`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemapInput {
    pub cursor: i64,
    pub visible_items_count: usize,
    /// Additional cursor delta applied atomically with this update (e.g. slides were added
    /// before the cursor and the window must move with them).
    pub shift: i64,
}

impl RemapInput {
    pub fn new(cursor: i64, visible_items_count: usize) -> Self {
        Self {
            cursor,
            visible_items_count,
            shift: 0,
        }
    }

    pub fn with_shift(mut self, shift: i64) -> Self {
        self.shift = shift;
        self
    }
}

/// The state threaded from one remap to the next.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolState {
    pub actors: Vec<Actor>,
    /// Ring offset: physical slot `(i + actors_state) % total` plays window role `i`.
    pub actors_state: usize,
    /// Effective cursor of the last remap; `None` before the first one.
    pub cursor: Option<i64>,
    /// Visible count of the last remap.
    pub visible: usize,
    /// Set when the last remap recomputed the whole window.
    pub relocation: Option<Relocation>,
}

impl PoolState {
    pub fn total(&self) -> usize {
        self.actors.len()
    }
}

/// Remaps the actor pool for a new cursor.
///
/// Slots never move in the returned `actors` array; instead the ring offset rotates by the
/// (clamped) cursor delta, so the actor that showed slide `k` before an incremental move still
/// shows slide `k` afterwards and can keep animating. Only the `|delta|` actors falling off the
/// trailing page are recycled to the leading edge, and those snap (`immediate`).
///
/// Moves larger than one page, non-moves, pool size changes and the first call all relocate:
/// the whole window is rebuilt around the new cursor and every actor snaps.
pub fn calc_actors(previous: &PoolState, input: RemapInput) -> PoolState {
    calc_actors_inner(previous, input, None)
}

fn calc_actors_inner(
    previous: &PoolState,
    input: RemapInput,
    forced: Option<Relocation>,
) -> PoolState {
    let RemapInput {
        cursor: new_cursor,
        visible_items_count: visible,
        shift,
    } = input;
    let total = visible.saturating_mul(3);
    let visible_i = i64::try_from(visible).unwrap_or(i64::MAX);

    let forced = forced.or(match previous.cursor {
        None => Some(Relocation::Initial),
        Some(_) if previous.visible != visible => Some(Relocation::VisibleCountChanged),
        Some(_) => None,
    });
    let prev_cursor = previous.cursor.unwrap_or(new_cursor);
    // A forced relocation recenters on the new cursor as if nothing moved.
    let delta = if forced.is_some() {
        0
    } else {
        new_cursor.saturating_sub(prev_cursor)
    };
    let delta_sign = delta.signum();

    let relocation = forced.or(if delta == 0 {
        Some(Relocation::Stationary)
    } else if delta.unsigned_abs() > visible as u64 {
        Some(Relocation::Jump)
    } else {
        None
    });
    let relocated = relocation.is_some();
    let clamped_delta = delta.clamp(-visible_i, visible_i);

    let center = if relocated {
        new_cursor
            .saturating_add(shift)
            .saturating_sub(visible_i.saturating_mul(delta_sign))
    } else {
        prev_cursor.saturating_add(shift)
    };
    let mut window = Vec::with_capacity(total);
    snapshot_into(&mut window, center, clamped_delta, total);

    let prev_state = if total == 0 {
        previous.actors_state
    } else {
        previous.actors_state % total
    };
    let actors_state = if total == 0 {
        previous.actors_state
    } else {
        (prev_state as i64 + clamped_delta).rem_euclid(total as i64) as usize
    };

    let cur_roles = Rotation::new(prev_state, total);
    let next_roles = Rotation::new(actors_state, total);

    // Re-seat: window cell `i` belongs to the slot that played role `i` before this update.
    let mut seated = alloc::vec![0i64; total];
    for (i, &global_index) in window.iter().enumerate() {
        seated[cur_roles.get(i)] = global_index;
    }

    let to = AnimTo {
        delta: clamped_delta,
        cur_roles,
        next_roles,
        relocated,
    };

    let actors = seated
        .into_iter()
        .enumerate()
        .map(|(slot, global_index)| Actor {
            global_index,
            anim: to.target(slot),
        })
        .collect();

    let cursor = new_cursor.saturating_add(shift);
    ctrace!(
        cursor,
        delta,
        shift,
        total,
        actors_state,
        relocated,
        "calc_actors"
    );
    if relocated {
        cdebug!(reason = ?relocation, cursor, total, "calc_actors: relocated");
    }

    PoolState {
        actors,
        actors_state,
        cursor: Some(cursor),
        visible,
        relocation,
    }
}

/// An owned actor pool: [`PoolState`] plus the update entry points.
///
/// This is the type a carousel instance keeps across frames. Updates must be serialized; each
/// consumes the state produced by the previous one.
#[derive(Clone, Debug, Default)]
pub struct ActorPool {
    state: PoolState,
}

impl ActorPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: PoolState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &PoolState {
        &self.state
    }

    pub fn into_state(self) -> PoolState {
        self.state
    }

    pub fn actors(&self) -> &[Actor] {
        &self.state.actors
    }

    pub fn actors_state(&self) -> usize {
        self.state.actors_state
    }

    pub fn cursor(&self) -> Option<i64> {
        self.state.cursor
    }

    pub fn visible(&self) -> usize {
        self.state.visible
    }

    pub fn total(&self) -> usize {
        self.state.total()
    }

    pub fn last_relocation(&self) -> Option<Relocation> {
        self.state.relocation
    }

    /// Applies one cursor update. Returns the effective cursor (`input.cursor + input.shift`,
    /// saturating).
    pub fn remap(&mut self, input: RemapInput) -> i64 {
        self.state = calc_actors(&self.state, input);
        input.cursor.saturating_add(input.shift)
    }

    /// Rebuilds the window around `input.cursor` regardless of the previous cursor.
    ///
    /// The ring offset is kept, so physical slots stay stable for the renderer.
    pub fn relocate(&mut self, input: RemapInput) -> i64 {
        self.state = calc_actors_inner(&self.state, input, Some(Relocation::Initial));
        input.cursor.saturating_add(input.shift)
    }

    /// Forgets the previous cursor; the next remap relocates.
    pub fn reset(&mut self) {
        self.state = PoolState::default();
    }
}
