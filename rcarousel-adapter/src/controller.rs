use rcarousel::{Carousel, CarouselOptions, CursorSource, Result, Size, SlotView};

use crate::{ActorAnimator, CursorController, DragUpdate, Easing, SwipeConfig, SwipeTracker};

/// A framework-neutral controller that wraps an `rcarousel::Carousel` and provides the common
/// adapter workflows (navigation, drag handling, slot animation).
///
/// The engine runs in external cursor mode; the controller owns the cursor through a
/// [`CursorController`] and feeds it back after every change. This type does not hold any UI
/// objects. Adapters drive it by calling:
/// - `on_container_size` / `on_viewport_width` when layout changes
/// - `on_drag` for every drag frame, `cancel_drag` when the gesture is abandoned
/// - `tick(now_ms)` each frame, then `for_each_slot` to position slots
#[derive(Clone, Debug)]
pub struct Controller {
    carousel: Carousel,
    cursor: CursorController,
    swipe: SwipeTracker,
    animator: ActorAnimator,
}

impl Controller {
    /// Creates a controller for `slides_count` slides starting at global cursor `init`.
    pub fn new(options: CarouselOptions, slides_count: usize, init: i64) -> Result<Self> {
        let carousel = Carousel::new(options, CursorSource::External(init), slides_count)?;
        let mut c = Self {
            carousel,
            cursor: CursorController::new(init, 1),
            swipe: SwipeTracker::new(),
            animator: ActorAnimator::default(),
        };
        c.sync(0)?;
        Ok(c)
    }

    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.animator.set_timing(duration_ms, easing);
        self
    }

    /// Sets how many slides `next` / `back` move.
    pub fn with_step(mut self, step: i64) -> Self {
        self.cursor.set_step(step);
        self
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn cursor(&self) -> &CursorController {
        &self.cursor
    }

    pub fn animator(&self) -> &ActorAnimator {
        &self.animator
    }

    pub fn is_dragging(&self) -> bool {
        self.swipe.is_active()
    }

    pub fn on_container_size(&mut self, size: Size, now_ms: u64) -> Result<()> {
        self.carousel.set_container_size(size)?;
        self.sync(now_ms)
    }

    pub fn on_viewport_width(&mut self, viewport_width: f64, now_ms: u64) -> Result<()> {
        self.carousel.set_viewport_width(viewport_width)?;
        self.sync(now_ms)
    }

    pub fn set_slides_count(&mut self, slides_count: usize, now_ms: u64) -> Result<()> {
        self.carousel.set_slides_count(slides_count)?;
        self.sync(now_ms)
    }

    pub fn next(&mut self, now_ms: u64) -> Result<i64> {
        self.cursor.next();
        self.apply_cursor(now_ms)
    }

    pub fn back(&mut self, now_ms: u64) -> Result<i64> {
        self.cursor.back();
        self.apply_cursor(now_ms)
    }

    /// Moves to slide `local` within the current lap.
    pub fn go_to(&mut self, local: usize, now_ms: u64) -> Result<i64> {
        self.cursor.go_to(local, None);
        self.apply_cursor(now_ms)
    }

    /// Sets the global cursor directly (clamped into the range).
    pub fn set_cursor(&mut self, cursor: i64, now_ms: u64) -> Result<i64> {
        self.cursor.set_global(cursor);
        self.apply_cursor(now_ms)
    }

    /// Feeds one drag frame: the total pointer movement since the drag started and whether the
    /// pointer is still down.
    pub fn on_drag(
        &mut self,
        movement: [f64; 2],
        down: bool,
        now_ms: u64,
    ) -> Result<DragUpdate> {
        let axis = self.carousel.options().axis;
        let cfg = SwipeConfig::from_layout(&self.carousel.layout(), axis);
        let update = self.swipe.on_drag(&cfg, movement, down);
        match update {
            DragUpdate::Follow(offset) => self.animator.follow(self.carousel.actors(), offset),
            DragUpdate::Commit(step) => {
                let moved = self.carousel.move_by(step)?;
                if moved.delta == 0 {
                    self.animator.snap_back(self.carousel.actors(), now_ms);
                } else {
                    self.cursor.set_global(moved.cursor);
                    self.apply_cursor(now_ms)?;
                }
            }
            DragUpdate::SnapBack => self.animator.snap_back(self.carousel.actors(), now_ms),
            DragUpdate::Ignored => {}
        }
        Ok(update)
    }

    /// Abandons the current drag and animates back; the cursor is untouched.
    pub fn cancel_drag(&mut self, now_ms: u64) {
        self.swipe.cancel();
        self.animator.snap_back(self.carousel.actors(), now_ms);
    }

    /// Advances slot animations. Returns `true` while any slot is still moving.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.animator.advance(now_ms)
    }

    /// Visits every slot with its current offset in pixels along the slide axis.
    pub fn for_each_slot(&self, now_ms: u64, mut f: impl FnMut(SlotView, f64)) {
        let item_size_px = self.carousel.layout().item_size_px;
        self.carousel.for_each_slot(|view| {
            let d = self
                .animator
                .sample(view.slot, now_ms)
                .unwrap_or(view.anim.d as f64);
            f(view, d * item_size_px);
        });
    }

    fn apply_cursor(&mut self, now_ms: u64) -> Result<i64> {
        self.carousel.set_cursor(self.cursor.global_cursor())?;
        self.sync(now_ms)?;
        Ok(self.cursor.global_cursor())
    }

    /// Pulls range and shift changes out of the engine into the cursor controller, then
    /// retargets the animator unless a drag is live.
    fn sync(&mut self, now_ms: u64) -> Result<()> {
        let range = self.carousel.range();
        let effective = self.carousel.cursor();
        let shifted = effective != range.clamp(self.carousel.requested_cursor());

        self.cursor.on_range_change(range, self.carousel.slides_count());
        if shifted {
            cdebug!(effective, "Controller::sync: adopting shifted cursor");
            self.cursor.set_global(effective);
        }
        if self.cursor.global_cursor() != self.carousel.requested_cursor() {
            self.carousel.set_cursor(self.cursor.global_cursor())?;
        }

        if !self.swipe.is_active() {
            self.animator.retarget(self.carousel.actors(), now_ms);
        }
        Ok(())
    }
}
