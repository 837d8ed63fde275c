use alloc::sync::Arc;

use crate::{Axis, ChangeReason, CursorRange, Direction, DisplayCount, Size, UnitValue, WrapMode};

/// A callback fired when the engine moves the cursor on its own (committed swipe or slide
/// count shift).
///
/// In external cursor mode this is the only way the new cursor reaches the owner.
pub type OnCursorChange = Arc<dyn Fn(i64, ChangeReason) + Send + Sync>;

/// A callback fired when the valid cursor range or the slide count changes.
pub type OnRangeChange = Arc<dyn Fn(CursorRange, usize) + Send + Sync>;

/// A callback fired when the number of visible slides changes.
pub type OnVisibleCountChange = Arc<dyn Fn(usize) + Send + Sync>;

/// A callback fired on every move request, before clamping.
pub type OnSwipe = Arc<dyn Fn(Direction) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: callbacks are stored in `Arc`s, so adapters can tweak a field and call
/// `Carousel::set_options` every frame.
#[derive(Clone)]
pub struct CarouselOptions {
    /// Slides shown at once. `Auto` derives it from `max_item_size`.
    pub display_count: DisplayCount,

    /// Upper bound for one slide's length, relative to the container. Only used with
    /// `DisplayCount::Auto`.
    pub max_item_size: UnitValue,

    /// Minimum drag distance that commits a swipe on release, relative to one slide.
    pub swipe_threshold: UnitValue,

    pub wrap: WrapMode,

    /// Stop at the last full page instead of scrolling the last slide to the first position.
    pub trim_end: bool,

    pub axis: Axis,

    /// Container size to assume before the first measurement.
    pub initial_size: Option<Size>,

    /// Viewport width used for responsive display rules.
    pub viewport_width: f64,

    pub on_cursor_change: Option<OnCursorChange>,
    pub on_range_change: Option<OnRangeChange>,
    pub on_visible_count_change: Option<OnVisibleCountChange>,
    pub on_swipe: Option<OnSwipe>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self {
            display_count: DisplayCount::Auto,
            max_item_size: UnitValue::Percent(100.0),
            swipe_threshold: UnitValue::Percent(50.0),
            wrap: WrapMode::Bounded,
            trim_end: false,
            axis: Axis::Horizontal,
            initial_size: None,
            viewport_width: 0.0,
            on_cursor_change: None,
            on_range_change: None,
            on_visible_count_change: None,
            on_swipe: None,
        }
    }

    pub fn with_display_count(mut self, display_count: impl Into<DisplayCount>) -> Self {
        self.display_count = display_count.into();
        self
    }

    pub fn with_max_item_size(mut self, max_item_size: impl Into<UnitValue>) -> Self {
        self.max_item_size = max_item_size.into();
        self
    }

    pub fn with_swipe_threshold(mut self, swipe_threshold: impl Into<UnitValue>) -> Self {
        self.swipe_threshold = swipe_threshold.into();
        self
    }

    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_trim_end(mut self, trim_end: bool) -> Self {
        self.trim_end = trim_end;
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the container size assumed until the adapter reports a measurement.
    pub fn with_initial_size(mut self, initial_size: Option<Size>) -> Self {
        self.initial_size = initial_size;
        self
    }

    pub fn with_viewport_width(mut self, viewport_width: f64) -> Self {
        self.viewport_width = viewport_width;
        self
    }

    pub fn with_on_cursor_change(
        mut self,
        on_cursor_change: Option<impl Fn(i64, ChangeReason) + Send + Sync + 'static>,
    ) -> Self {
        self.on_cursor_change = on_cursor_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_range_change(
        mut self,
        on_range_change: Option<impl Fn(CursorRange, usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_range_change = on_range_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_visible_count_change(
        mut self,
        on_visible_count_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_visible_count_change = on_visible_count_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_swipe(
        mut self,
        on_swipe: Option<impl Fn(Direction) + Send + Sync + 'static>,
    ) -> Self {
        self.on_swipe = on_swipe.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("display_count", &self.display_count)
            .field("max_item_size", &self.max_item_size)
            .field("swipe_threshold", &self.swipe_threshold)
            .field("wrap", &self.wrap)
            .field("trim_end", &self.trim_end)
            .field("axis", &self.axis)
            .field("initial_size", &self.initial_size)
            .field("viewport_width", &self.viewport_width)
            .finish_non_exhaustive()
    }
}
