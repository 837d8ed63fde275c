use core::convert::Infallible;
use core::str::FromStr;

/// A length expressed either in pixels or as a percentage of some reference length.
///
/// Parsing never fails: malformed input degrades to `Px(NaN)`, which layout validation
/// rejects once a reference size is known.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitValue {
    Px(f64),
    Percent(f64),
}

impl UnitValue {
    /// Parses `"12px"`, `"50%"` or a bare number (`"12"`, treated as pixels).
    pub fn parse(input: &str) -> Self {
        let s = input.trim();
        if let Some(px) = s.strip_suffix("px") {
            return Self::Px(coerce_number(px));
        }
        if let Some(pct) = s.strip_suffix('%') {
            return Self::Percent(coerce_number(pct));
        }
        Self::Px(coerce_number(s))
    }

    /// Resolves the value to pixels against `reference_px`.
    pub fn resolve(self, reference_px: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(p) => reference_px * (p / 100.0),
        }
    }
}

impl Default for UnitValue {
    fn default() -> Self {
        Self::Percent(100.0)
    }
}

impl From<f64> for UnitValue {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

impl FromStr for UnitValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

fn coerce_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// `ceil` for the non-negative ratios layout works with, usable without `std`.
pub(crate) fn ceil_non_negative(v: f64) -> usize {
    if !(v > 0.0) {
        return 0;
    }
    let truncated = v as usize;
    if (truncated as f64) < v {
        truncated.saturating_add(1)
    } else {
        truncated
    }
}
