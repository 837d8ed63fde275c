use crate::error::SizeKind;
use crate::unit::ceil_non_negative;
use crate::{CarouselOptions, Error, Result, validate_count};

/// Sizes derived from the configuration and the measured container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Slides shown at once; `0` until the container is measured (unless fixed).
    pub visible: usize,
    /// Container length along the slide axis.
    pub container_px: f64,
    /// Length of one slide along the slide axis.
    pub item_size_px: f64,
    /// Length of one slide as a fraction of the container (`1 / visible`).
    pub item_fraction: f64,
    pub swipe_threshold_px: f64,
    pub slides_to_swipe: Option<usize>,
}

impl Layout {
    /// Resolves the layout for a container `container_px` long on a viewport
    /// `viewport_width` wide.
    ///
    /// Size checks are skipped while their reference length is still zero (not yet measured).
    pub fn resolve(
        options: &CarouselOptions,
        container_px: f64,
        viewport_width: f64,
    ) -> Result<Self> {
        let max_item = options.max_item_size.resolve(container_px);
        if container_px > 0.0 && !(max_item > 0.0) {
            cwarn!(max_item, container_px, "Layout::resolve: invalid max_item_size");
            return Err(Error::InvalidSize {
                what: SizeKind::MaxItemSize,
                value: max_item,
            });
        }

        let rule = options.display_count.resolve(viewport_width);
        if let Some(rule) = &rule {
            rule.validate()?;
        }

        let item_limit = if max_item > container_px {
            container_px
        } else {
            max_item
        };

        let visible = match &rule {
            Some(rule) => rule.value,
            None if item_limit > 0.0 => ceil_non_negative(container_px / item_limit),
            None => 0,
        };
        if rule.is_none() && visible > 0 {
            validate_count(visible)?;
        }

        let item_size_px = if visible > 0 {
            container_px / visible as f64
        } else {
            0.0
        };
        let item_fraction = if visible > 0 {
            1.0 / visible as f64
        } else {
            0.0
        };

        let swipe_threshold_px = options.swipe_threshold.resolve(item_size_px);
        if item_size_px > 0.0 && !(swipe_threshold_px > 0.0) {
            cwarn!(
                swipe_threshold_px,
                item_size_px,
                "Layout::resolve: invalid swipe_threshold"
            );
            return Err(Error::InvalidSize {
                what: SizeKind::SwipeThreshold,
                value: swipe_threshold_px,
            });
        }

        Ok(Self {
            visible,
            container_px,
            item_size_px,
            item_fraction,
            swipe_threshold_px,
            slides_to_swipe: rule.and_then(|r| r.slides_to_swipe),
        })
    }

    /// Number of actor slots this layout needs (three pages).
    pub fn total_actors(&self) -> usize {
        self.visible * 3
    }
}
