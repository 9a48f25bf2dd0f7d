// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::{Color, ColorStop};
use smallvec::SmallVec;

/// Inline storage for stops; most gradients have only a handful.
pub(crate) type StopVec = SmallVec<[GradientStop; 4]>;

/// A single color sample along the gradient axis.
///
/// `offset` is conceptually in `[0, 1]`, but this is not enforced.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientStop {
    /// Color at this stop.
    pub color: Color,
    /// Position of the stop along the gradient axis.
    pub offset: f32,
}

impl GradientStop {
    /// Create a new stop.
    #[inline]
    pub const fn new(color: Color, offset: f32) -> Self {
        Self { color, offset }
    }
}

impl From<(f32, Color)> for GradientStop {
    #[inline]
    fn from((offset, color): (f32, Color)) -> Self {
        Self { color, offset }
    }
}

impl From<GradientStop> for ColorStop {
    #[inline]
    fn from(stop: GradientStop) -> Self {
        Self::from((stop.offset, stop.color))
    }
}

/// Pair up colors with offsets by index.
///
/// Callers must have checked that both slices have the same length.
pub(crate) fn pair_stops(colors: &[Color], offsets: &[f32]) -> StopVec {
    debug_assert_eq!(
        colors.len(),
        offsets.len(),
        "colors and offsets must be the same length"
    );
    colors
        .iter()
        .zip(offsets)
        .map(|(&color, &offset)| GradientStop { color, offset })
        .collect()
}

/// Sort stops ascending by offset.
///
/// The sort is stable, so stops sharing an offset keep their relative order,
/// and each color moves with its own offset. `NaN` offsets order after every
/// finite value (see [`f32::total_cmp`]).
pub(crate) fn sort_stops(stops: &mut [GradientStop]) {
    stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
}
