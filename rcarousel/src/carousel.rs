use crate::cursor::{local_index, validate_cursor};
use crate::{
    Actor, ActorPool, CarouselOptions, ChangeReason, CursorRange, Direction, Error, Layout,
    RemapInput, Result, Size, SlotView, Step,
};

/// Who owns the logical cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CursorSource {
    /// The engine owns the cursor, starting at the given value; committed swipes and slide
    /// count shifts are applied immediately.
    Internal(i64),
    /// The caller owns the cursor. The engine only reports requested changes through
    /// `on_cursor_change` and waits for `set_cursor`.
    External(i64),
}

impl CursorSource {
    fn value(self) -> i64 {
        match self {
            Self::Internal(v) | Self::External(v) => v,
        }
    }
}

/// A headless carousel engine.
///
/// This type is UI-agnostic:
/// - It does not hold any slide content or UI objects, only the slide count.
/// - Your adapter drives it with container sizes, the viewport width, the slide count and the
///   cursor.
/// - Rendering reads a fixed pool of `3 * visible` actor slots (`for_each_slot`); a slot's index
///   never changes, only the slide it shows and its target offset.
///
/// Every setter re-runs a single update pass: layout, cursor range, slide count shift, actor
/// remap, then change notifications. Use `batch_update` to coalesce several setters.
///
/// For gesture handling and animation driving, see the `rcarousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    internal_cursor: bool,
    cursor: i64,
    container: Size,
    slides_count: usize,

    layout: Layout,
    range: CursorRange,
    pool: ActorPool,
    prev_slides_count: Option<usize>,
    notified_range: Option<(CursorRange, usize)>,
    notified_visible: Option<usize>,

    batch_depth: usize,
    update_pending: bool,
}

impl Carousel {
    /// Creates an engine for `slides_count` slides and runs the first update.
    ///
    /// With no `initial_size` the container is unmeasured: the visible count is zero (unless
    /// fixed) and no actors exist until `set_container_size`.
    pub fn new(
        options: CarouselOptions,
        source: CursorSource,
        slides_count: usize,
    ) -> Result<Self> {
        let container = options.initial_size.unwrap_or_default();
        cdebug!(
            slides_count,
            wrap = ?options.wrap,
            source = ?source,
            "Carousel::new"
        );
        let mut c = Self {
            options,
            internal_cursor: matches!(source, CursorSource::Internal(_)),
            cursor: source.value(),
            container,
            slides_count,
            layout: Layout::default(),
            range: CursorRange::default(),
            pool: ActorPool::new(),
            prev_slides_count: None,
            notified_range: None,
            notified_visible: None,
            batch_depth: 0,
            update_pending: false,
        };
        c.update()?;
        Ok(c)
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CarouselOptions) -> Result<()> {
        self.options = options;
        ctrace!(wrap = ?self.options.wrap, "Carousel::set_options");
        self.request_update()
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) -> Result<()> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    /// Coalesces several setters into one update pass.
    ///
    /// Errors returned by `f` abort the batch; the deferred update still runs on the next
    /// setter or explicit `update`.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        self.batch_depth = self.batch_depth.saturating_add(1);
        let res = f(self);
        debug_assert!(self.batch_depth > 0, "batch_depth underflow");
        self.batch_depth = self.batch_depth.saturating_sub(1);
        res?;

        if self.batch_depth == 0 && core::mem::take(&mut self.update_pending) {
            self.update()?;
        }
        Ok(())
    }

    fn request_update(&mut self) -> Result<()> {
        if self.batch_depth > 0 {
            self.update_pending = true;
            return Ok(());
        }
        self.update()
    }

    pub fn is_internal(&self) -> bool {
        self.internal_cursor
    }

    pub fn set_container_size(&mut self, size: Size) -> Result<()> {
        if self.container == size {
            return Ok(());
        }
        self.container = size;
        self.request_update()
    }

    pub fn container_size(&self) -> Size {
        self.container
    }

    pub fn set_viewport_width(&mut self, viewport_width: f64) -> Result<()> {
        if self.options.viewport_width == viewport_width {
            return Ok(());
        }
        self.options.viewport_width = viewport_width;
        self.request_update()
    }

    pub fn set_slides_count(&mut self, slides_count: usize) -> Result<()> {
        if self.slides_count == slides_count {
            return Ok(());
        }
        self.slides_count = slides_count;
        self.request_update()
    }

    pub fn slides_count(&self) -> usize {
        self.slides_count
    }

    /// Sets the requested cursor. Values outside the range are clamped by the update.
    pub fn set_cursor(&mut self, cursor: i64) -> Result<()> {
        if self.cursor == cursor && self.pool.cursor().is_some() {
            return Ok(());
        }
        self.cursor = cursor;
        self.request_update()
    }

    /// The requested cursor, as set by the owner or adopted by the engine.
    pub fn requested_cursor(&self) -> i64 {
        self.cursor
    }

    /// The effective cursor the actors are laid out around.
    pub fn cursor(&self) -> i64 {
        self.pool.cursor().unwrap_or_else(|| self.range.clamp(self.cursor))
    }

    /// The slide index under the effective cursor.
    pub fn local_cursor(&self) -> usize {
        local_index(self.cursor(), self.slides_count)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn range(&self) -> CursorRange {
        self.range
    }

    pub fn visible_count(&self) -> usize {
        self.layout.visible
    }

    pub fn pool(&self) -> &ActorPool {
        &self.pool
    }

    pub fn actors(&self) -> &[Actor] {
        self.pool.actors()
    }

    /// Runs one update pass.
    ///
    /// Setters call this automatically; calling it directly recenters the window without
    /// changing any input.
    pub fn update(&mut self) -> Result<()> {
        let count = self.slides_count;
        validate_cursor(self.cursor, count)?;

        let layout = Layout::resolve(
            &self.options,
            self.container.main(self.options.axis),
            self.options.viewport_width,
        )?;
        let range = CursorRange::for_collection(
            self.options.wrap,
            count,
            layout.visible,
            self.options.trim_end,
        );

        let prev_count = self.prev_slides_count.unwrap_or(count);
        let anchor = range.clamp(self.pool.cursor().unwrap_or(self.cursor));
        let shift = slide_count_shift(anchor, prev_count, count);

        // The shifted cursor must stay in the safe domain before any state changes.
        let requested = range.clamp(self.cursor);
        let shifted = requested.checked_add(shift).ok_or(Error::InvalidCursor {
            cursor: requested.saturating_add(shift),
            count,
        })?;
        validate_cursor(shifted, count)?;

        let effective = self
            .pool
            .remap(RemapInput::new(requested, layout.visible).with_shift(shift));
        ctrace!(
            cursor = self.cursor,
            effective,
            shift,
            visible = layout.visible,
            count,
            "Carousel::update"
        );

        self.layout = layout;
        self.range = range;
        self.prev_slides_count = Some(count);

        if shift != 0 {
            cdebug!(
                prev_count,
                count,
                shift,
                effective,
                "Carousel::update: slide count shift"
            );
            if self.internal_cursor {
                self.cursor = effective;
            }
            self.emit_cursor_change(effective, ChangeReason::Shift);
        }

        if self.notified_range != Some((range, count)) {
            self.notified_range = Some((range, count));
            if let Some(cb) = &self.options.on_range_change {
                cb(range, count);
            }
        }

        if self.notified_visible != Some(layout.visible) {
            self.notified_visible = Some(layout.visible);
            if let Some(cb) = &self.options.on_visible_count_change {
                cb(layout.visible);
            }
        }

        Ok(())
    }

    /// Requests a move by `step` slides (a committed swipe, a "next" button, ...).
    ///
    /// The target is clamped into the range. When it differs from the current cursor,
    /// `on_cursor_change(target, UserSwipe)` fires and, in internal mode, the move is applied.
    /// A zero `delta` in the result means the move hit a boundary and the renderer should
    /// animate back to the current targets.
    pub fn move_by(&mut self, step: i64) -> Result<Step> {
        let current = self.cursor();
        let target = self.range.clamp(current.saturating_add(step));
        let delta = target - current;

        if let Some(cb) = &self.options.on_swipe {
            match step.signum() {
                1 => cb(Direction::Forward),
                -1 => cb(Direction::Backward),
                _ => {}
            }
        }

        if delta != 0 {
            self.emit_cursor_change(target, ChangeReason::UserSwipe);
            if self.internal_cursor {
                self.cursor = target;
                self.request_update()?;
            }
        }

        Ok(Step {
            delta,
            cursor: target,
        })
    }

    fn emit_cursor_change(&self, cursor: i64, reason: ChangeReason) {
        if let Some(cb) = &self.options.on_cursor_change {
            cb(cursor, reason);
        }
    }

    /// Returns the renderer's view of one slot.
    pub fn slot(&self, slot: usize) -> Option<SlotView> {
        let actor = self.pool.actors().get(slot)?;
        Some(self.view(slot, actor))
    }

    /// Iterates over all actor slots in physical order without allocations.
    pub fn for_each_slot(&self, mut f: impl FnMut(SlotView)) {
        for (slot, actor) in self.pool.actors().iter().enumerate() {
            f(self.view(slot, actor));
        }
    }

    fn view(&self, slot: usize, actor: &Actor) -> SlotView {
        SlotView {
            slot,
            global_index: actor.global_index,
            slide: self.range.resolve_slide(actor.global_index, self.slides_count),
            anim: actor.anim,
        }
    }
}

/// How far the cursor must move so the same content stays in view when the slide count
/// changes from `prev_count` to `count`.
///
/// With repeating content, every full lap before the cursor grows or shrinks by the count
/// difference.
pub fn slide_count_shift(cursor: i64, prev_count: usize, count: usize) -> i64 {
    if prev_count == 0 || prev_count == count {
        return 0;
    }
    let prev = i64::try_from(prev_count).unwrap_or(i64::MAX);
    let next = i64::try_from(count).unwrap_or(i64::MAX);
    cursor.div_euclid(prev).saturating_mul(next - prev)
}
