// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::GradientError;

/// Direction of a gradient laid across a rectangle.
///
/// Used by the rectangle constructors of
/// [`LinearGradientBrush`](crate::LinearGradientBrush) to pick two corners of
/// the rectangle as the gradient anchors.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum GradientDirection {
    /// Left to right, along the top edge.
    #[default]
    Horizontal = 0,
    /// Top to bottom, along the left edge.
    Vertical = 1,
    /// Top-left corner to bottom-right corner.
    ForwardDiagonal = 2,
    /// Top-right corner to bottom-left corner.
    BackwardDiagonal = 3,
}

impl GradientDirection {
    /// Every direction, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Horizontal,
        Self::Vertical,
        Self::ForwardDiagonal,
        Self::BackwardDiagonal,
    ];

    /// Returns the start and end anchors for this direction within `rect`.
    ///
    /// Corners are taken from the rectangle as stored: `(x0, y0)` is the
    /// top-left corner and `(x1, y1)` the bottom-right one.
    #[must_use]
    pub fn anchors(self, rect: Rect) -> (Point, Point) {
        let top_left = Point::new(rect.x0, rect.y0);
        let top_right = Point::new(rect.x1, rect.y0);
        let bottom_left = Point::new(rect.x0, rect.y1);
        let bottom_right = Point::new(rect.x1, rect.y1);
        match self {
            Self::Horizontal => (top_left, top_right),
            Self::Vertical => (top_left, bottom_left),
            Self::ForwardDiagonal => (top_left, bottom_right),
            Self::BackwardDiagonal => (top_right, bottom_left),
        }
    }
}

impl TryFrom<u8> for GradientDirection {
    type Error = GradientError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Horizontal),
            1 => Ok(Self::Vertical),
            2 => Ok(Self::ForwardDiagonal),
            3 => Ok(Self::BackwardDiagonal),
            _ => Err(GradientError::InvalidDirection(raw)),
        }
    }
}

impl From<GradientDirection> for u8 {
    #[inline]
    fn from(direction: GradientDirection) -> Self {
        direction as Self
    }
}
