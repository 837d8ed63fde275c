use alloc::vec::Vec;

use rcarousel::Actor;

/// A small tween over a slot offset (in slide lengths), driven by adapter timestamps.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);
        self.from + (self.to - self.from) * eased
    }

    pub fn retarget(&mut self, now_ms: u64, new_to: f64, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    #[default]
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct SlotAnim {
    global_index: i64,
    target: f64,
    value: f64,
    tween: Option<Tween>,
}

impl SlotAnim {
    fn at(global_index: i64, value: f64) -> Self {
        Self {
            global_index,
            target: value,
            value,
            tween: None,
        }
    }

    fn sample(&self, now_ms: u64) -> f64 {
        match &self.tween {
            Some(t) => t.sample(now_ms),
            None => self.value,
        }
    }

    fn jump(&mut self, global_index: i64, value: f64) {
        *self = Self::at(global_index, value);
    }

    fn animate(
        &mut self,
        global_index: i64,
        to: f64,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) {
        let from = self.sample(now_ms);
        self.global_index = global_index;
        self.target = to;
        self.value = to;
        self.tween = Some(Tween::new(from, to, now_ms, duration_ms, easing));
    }
}

/// Drives one offset per actor slot towards the targets produced by the engine.
///
/// Offsets are in slide lengths relative to the cursor (multiply by `Layout::item_size_px`
/// for pixels). Slots are indexed like `Carousel::actors`.
#[derive(Clone, Debug)]
pub struct ActorAnimator {
    slots: Vec<SlotAnim>,
    duration_ms: u64,
    easing: Easing,
}

impl Default for ActorAnimator {
    fn default() -> Self {
        Self::new(300, Easing::default())
    }
}

impl ActorAnimator {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            slots: Vec::new(),
            duration_ms,
            easing,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn set_timing(&mut self, duration_ms: u64, easing: Easing) {
        self.duration_ms = duration_ms;
        self.easing = easing;
    }

    /// Applies a new set of targets.
    ///
    /// Immediate targets jump; the others tween from their current value. A slot whose slide
    /// and target are unchanged keeps its in-flight tween. A change in pool size resets every
    /// slot to its target.
    pub fn retarget(&mut self, actors: &[Actor], now_ms: u64) {
        if self.reset_if_resized(actors) {
            return;
        }
        let (duration_ms, easing) = (self.duration_ms, self.easing);
        for (slot, actor) in self.slots.iter_mut().zip(actors) {
            let to = actor.anim.d as f64;
            if slot.global_index == actor.global_index && slot.target == to {
                continue;
            }
            if actor.anim.immediate {
                slot.jump(actor.global_index, to);
            } else {
                slot.animate(actor.global_index, to, now_ms, duration_ms, easing);
            }
        }
        ctrace!(slots = self.slots.len(), now_ms, "ActorAnimator::retarget");
    }

    /// Animates every slot back to its target, including slots the last remap marked
    /// immediate.
    pub fn snap_back(&mut self, actors: &[Actor], now_ms: u64) {
        if self.reset_if_resized(actors) {
            return;
        }
        let (duration_ms, easing) = (self.duration_ms, self.easing);
        for (slot, actor) in self.slots.iter_mut().zip(actors) {
            let to = actor.anim.d as f64;
            if slot.tween.is_none() && slot.value == to {
                continue;
            }
            slot.animate(actor.global_index, to, now_ms, duration_ms, easing);
        }
    }

    /// Places every slot at its target shifted by `offset` slide lengths, following the
    /// pointer without animation.
    pub fn follow(&mut self, actors: &[Actor], offset: f64) {
        self.reset_if_resized(actors);
        for (slot, actor) in self.slots.iter_mut().zip(actors) {
            slot.jump(actor.global_index, actor.anim.d as f64 + offset);
        }
    }

    /// Current offset of `slot`, or `None` if the slot does not exist.
    pub fn sample(&self, slot: usize, now_ms: u64) -> Option<f64> {
        self.slots.get(slot).map(|s| s.sample(now_ms))
    }

    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.slots
            .iter()
            .any(|s| s.tween.is_some_and(|t| !t.is_done(now_ms)))
    }

    /// Drops finished tweens. Returns `true` while any slot is still animating.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let mut animating = false;
        for slot in &mut self.slots {
            if let Some(t) = slot.tween {
                if t.is_done(now_ms) {
                    slot.tween = None;
                } else {
                    animating = true;
                }
            }
        }
        animating
    }

    fn reset_if_resized(&mut self, actors: &[Actor]) -> bool {
        if self.slots.len() == actors.len() {
            return false;
        }
        cdebug!(
            from = self.slots.len(),
            to = actors.len(),
            "ActorAnimator: pool resized"
        );
        self.slots.clear();
        self.slots.extend(
            actors
                .iter()
                .map(|a| SlotAnim::at(a.global_index, a.anim.d as f64)),
        );
        true
    }
}
