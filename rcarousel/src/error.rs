use core::fmt;

/// Which configured size failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeKind {
    MaxItemSize,
    SwipeThreshold,
}

impl fmt::Display for SizeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxItemSize => f.write_str("max_item_size"),
            Self::SwipeThreshold => f.write_str("swipe_threshold"),
        }
    }
}

/// Precondition violations surfaced by configuration and update calls.
///
/// None of these are transient: they indicate a programming or configuration error on the
/// caller's side and are never retried internally.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// `cursor ± count` leaves the safe integer domain the modular arithmetic relies on.
    #[error("cursor is not valid, got {cursor} (slides: {count})")]
    InvalidCursor { cursor: i64, count: usize },

    /// A resolved pixel size is not positive while a reference size is available.
    #[error("{what} must be positive, got {value}")]
    InvalidSize { what: SizeKind, value: f64 },

    /// A resolved display count is not a positive integer.
    #[error("display count must be a positive integer, got {value}")]
    InvalidCount { value: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
