// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors for gradient brushes.

use core::fmt;

/// Error returned when a [`LinearGradientBrush`](crate::LinearGradientBrush)
/// cannot be built from the supplied arguments.
///
/// Every variant describes a caller mistake; nothing here is transient and
/// retrying with the same arguments fails the same way.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GradientError {
    /// The start and end anchors are the same point, so the gradient has no
    /// direction.
    EqualAnchors,
    /// Fewer than two color stops were supplied.
    TooFewStops {
        /// Number of stops that were supplied.
        count: usize,
    },
    /// The color and offset slices have different lengths.
    MismatchedLengths {
        /// Length of the color slice.
        colors: usize,
        /// Length of the offset slice.
        offsets: usize,
    },
    /// A raw direction value did not name any [`GradientDirection`](crate::GradientDirection).
    InvalidDirection(u8),
}

impl GradientError {
    /// Returns `true` for errors caused by invalid arguments.
    ///
    /// This holds for every current variant.
    #[inline]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::EqualAnchors
                | Self::TooFewStops { .. }
                | Self::MismatchedLengths { .. }
                | Self::InvalidDirection(_)
        )
    }
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EqualAnchors => f.write_str("invalid argument: gradient anchors must differ"),
            Self::TooFewStops { count } => write!(
                f,
                "invalid argument: expected at least 2 color stops, got {count}"
            ),
            Self::MismatchedLengths { colors, offsets } => write!(
                f,
                "invalid argument: {colors} colors but {offsets} offsets"
            ),
            Self::InvalidDirection(raw) => {
                write!(f, "invalid argument: {raw} is not a gradient direction")
            }
        }
    }
}

impl core::error::Error for GradientError {}
