use alloc::vec::Vec;

use crate::{Error, MAX_SAFE_CURSOR, Result};

/// One entry of a responsive display table.
///
/// A rule applies once the viewport is at least `breakpoint` wide (a missing breakpoint
/// always applies).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayRule {
    pub breakpoint: Option<f64>,
    /// Number of slides shown at once.
    pub value: usize,
    /// Overrides how many slides one committed swipe advances.
    pub slides_to_swipe: Option<usize>,
}

impl DisplayRule {
    pub fn new(value: usize) -> Self {
        Self {
            breakpoint: None,
            value,
            slides_to_swipe: None,
        }
    }

    pub fn with_breakpoint(mut self, breakpoint: f64) -> Self {
        self.breakpoint = Some(breakpoint);
        self
    }

    pub fn with_slides_to_swipe(mut self, slides_to_swipe: usize) -> Self {
        self.slides_to_swipe = Some(slides_to_swipe);
        self
    }

    fn breakpoint_or_min(&self) -> f64 {
        self.breakpoint.unwrap_or(f64::NEG_INFINITY)
    }

    pub fn validate(&self) -> Result<()> {
        validate_count(self.value)
    }
}

/// Checks that a display count is positive and that its three-page actor pool stays within
/// the safe integer domain.
pub fn validate_count(value: usize) -> Result<()> {
    let pool_fits = value
        .checked_mul(3)
        .and_then(|total| i64::try_from(total).ok())
        .is_some_and(|total| total <= MAX_SAFE_CURSOR);
    if value == 0 || !pool_fits {
        return Err(Error::InvalidCount { value });
    }
    Ok(())
}

/// How many slides are displayed at once.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayCount {
    /// Derived from the container size and `max_item_size`.
    #[default]
    Auto,
    Fixed(usize),
    Responsive(Vec<DisplayRule>),
}

impl DisplayCount {
    /// Resolves the rule that applies at `viewport_width`.
    ///
    /// For a responsive table the rule with the largest breakpoint not exceeding the width
    /// wins; among equal breakpoints the last one wins. When nothing matches, the implicit
    /// default `{ value: 1 }` applies.
    pub fn resolve(&self, viewport_width: f64) -> Option<DisplayRule> {
        match self {
            Self::Auto => None,
            Self::Fixed(n) => Some(DisplayRule::new(*n)),
            Self::Responsive(rules) => Some(rules.iter().fold(DisplayRule::new(1), |best, rule| {
                let bp = rule.breakpoint_or_min();
                if viewport_width >= bp && bp >= best.breakpoint_or_min() {
                    *rule
                } else {
                    best
                }
            })),
        }
    }
}

impl From<usize> for DisplayCount {
    fn from(n: usize) -> Self {
        Self::Fixed(n)
    }
}

impl From<Vec<DisplayRule>> for DisplayCount {
    fn from(rules: Vec<DisplayRule>) -> Self {
        Self::Responsive(rules)
    }
}
