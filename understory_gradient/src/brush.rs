// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};
use peniko::{Color, ColorStop, Extend, Gradient, GradientKind, LinearGradientPosition};
use smallvec::SmallVec;

use crate::stop::{StopVec, pair_stops, sort_stops};
use crate::{GradientDirection, GradientError, GradientStop, MatrixOrder};

/// A linear color gradient described independently of any renderer.
///
/// A brush owns two anchor points that define the gradient axis, a list of
/// color stops kept sorted by offset, and a transform mapping brush space to
/// device space. Anchors and stops are fixed at construction; only the
/// transform changes afterwards.
///
/// Backends turn a brush into their own paint type through a
/// [`GradientRealizer`](crate::GradientRealizer).
///
/// The brush has no interior synchronization. Share it across threads only
/// behind whatever lock the caller already uses for the owning object.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradientBrush {
    start: Point,
    end: Point,
    stops: StopVec,
    transform: Affine,
}

impl LinearGradientBrush {
    /// Create a two-stop gradient from `color1` at offset `0.0` to `color2`
    /// at offset `1.0`.
    pub fn new(
        start: impl Into<Point>,
        end: impl Into<Point>,
        color1: Color,
        color2: Color,
    ) -> Result<Self, GradientError> {
        Self::with_stops(start, end, &[color1, color2], &[0.0, 1.0])
    }

    /// Create a gradient from parallel color and offset slices.
    ///
    /// The slices are copied; the brush never aliases caller storage. Stops
    /// are sorted ascending by offset with each color kept next to its own
    /// offset.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`GradientError::EqualAnchors`] if `start == end`.
    /// - [`GradientError::TooFewStops`] if fewer than two colors are given.
    /// - [`GradientError::MismatchedLengths`] if the slice lengths differ.
    pub fn with_stops(
        start: impl Into<Point>,
        end: impl Into<Point>,
        colors: &[Color],
        offsets: &[f32],
    ) -> Result<Self, GradientError> {
        let start = start.into();
        let end = end.into();
        if start == end {
            return Err(GradientError::EqualAnchors);
        }
        if colors.len() < 2 {
            return Err(GradientError::TooFewStops {
                count: colors.len(),
            });
        }
        if colors.len() != offsets.len() {
            return Err(GradientError::MismatchedLengths {
                colors: colors.len(),
                offsets: offsets.len(),
            });
        }
        Ok(Self::from_parts(start, end, pair_stops(colors, offsets)))
    }

    /// Create a gradient from already paired stops.
    ///
    /// # Errors
    ///
    /// [`GradientError::EqualAnchors`] or [`GradientError::TooFewStops`], as
    /// for [`with_stops`](Self::with_stops).
    pub fn from_gradient_stops(
        start: impl Into<Point>,
        end: impl Into<Point>,
        stops: impl IntoIterator<Item = GradientStop>,
    ) -> Result<Self, GradientError> {
        let start = start.into();
        let end = end.into();
        if start == end {
            return Err(GradientError::EqualAnchors);
        }
        let stops: StopVec = stops.into_iter().collect();
        if stops.len() < 2 {
            return Err(GradientError::TooFewStops { count: stops.len() });
        }
        Ok(Self::from_parts(start, end, stops))
    }

    /// Create a two-stop gradient across `rect` in the given direction.
    ///
    /// # Errors
    ///
    /// [`GradientError::EqualAnchors`] if the chosen corners coincide, which
    /// happens for rectangles that are empty along the gradient direction.
    pub fn from_rect(
        rect: Rect,
        color1: Color,
        color2: Color,
        direction: GradientDirection,
    ) -> Result<Self, GradientError> {
        Self::from_rect_with_stops(rect, &[color1, color2], &[0.0, 1.0], direction)
    }

    /// Create a gradient across `rect` in the given direction from parallel
    /// color and offset slices.
    ///
    /// Raw direction values from outside Rust are checked when they are
    /// converted with [`GradientDirection::try_from`].
    ///
    /// # Errors
    ///
    /// Same as [`with_stops`](Self::with_stops), applied to the anchors
    /// derived from `rect`.
    pub fn from_rect_with_stops(
        rect: Rect,
        colors: &[Color],
        offsets: &[f32],
        direction: GradientDirection,
    ) -> Result<Self, GradientError> {
        let (start, end) = direction.anchors(rect);
        Self::with_stops(start, end, colors, offsets)
    }

    fn from_parts(start: Point, end: Point, mut stops: StopVec) -> Self {
        sort_stops(&mut stops);
        log::debug!(
            "linear gradient {start:?} -> {end:?} with {} stops",
            stops.len()
        );
        Self {
            start,
            end,
            stops,
            transform: Affine::IDENTITY,
        }
    }

    /// Start anchor of the gradient axis.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// End anchor of the gradient axis.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Color stops, sorted ascending by offset. Always at least two.
    #[inline]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Colors of the stops, in stop order.
    pub fn colors(&self) -> impl ExactSizeIterator<Item = Color> + '_ {
        self.stops.iter().map(|s| s.color)
    }

    /// Offsets of the stops, in ascending order.
    pub fn offsets(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
        self.stops.iter().map(|s| s.offset)
    }

    /// Color of the stop with the lowest offset.
    #[inline]
    pub fn first_color(&self) -> Color {
        self.stops[0].color
    }

    /// Color of the stop with the highest offset.
    #[inline]
    pub fn last_color(&self) -> Color {
        self.stops[self.stops.len() - 1].color
    }

    /// Current total transform from brush space to device space.
    #[inline]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// The transform a backend should attach to its paint, or `None` when it
    /// is the identity and can be skipped.
    #[inline]
    pub fn paint_transform(&self) -> Option<Affine> {
        (self.transform != Affine::IDENTITY).then_some(self.transform)
    }

    /// Replace the transform outright.
    #[inline]
    pub fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    /// Translate the brush, prepending to the current transform.
    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.translate_with_order(dx, dy, MatrixOrder::Prepend);
    }

    /// Translate the brush in the given order.
    pub fn translate_with_order(&mut self, dx: f64, dy: f64, order: MatrixOrder) {
        self.compose(Affine::translate(Vec2::new(dx, dy)), order);
    }

    /// Scale the brush, prepending to the current transform.
    #[inline]
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.scale_with_order(sx, sy, MatrixOrder::Prepend);
    }

    /// Scale the brush in the given order.
    pub fn scale_with_order(&mut self, sx: f64, sy: f64, order: MatrixOrder) {
        self.compose(Affine::scale_non_uniform(sx, sy), order);
    }

    /// Rotate the brush by `degrees` about the origin, prepending to the
    /// current transform.
    #[inline]
    pub fn rotate(&mut self, degrees: f64) {
        self.rotate_with_order(degrees, MatrixOrder::Prepend);
    }

    /// Rotate the brush by `degrees` about the origin in the given order.
    pub fn rotate_with_order(&mut self, degrees: f64, order: MatrixOrder) {
        self.compose(Affine::rotate(degrees.to_radians()), order);
    }

    /// Multiply the brush transform by `matrix`, prepending it.
    #[inline]
    pub fn multiply(&mut self, matrix: Affine) {
        self.multiply_with_order(matrix, MatrixOrder::Prepend);
    }

    /// Multiply the brush transform by `matrix` in the given order.
    pub fn multiply_with_order(&mut self, matrix: Affine, order: MatrixOrder) {
        self.compose(matrix, order);
    }

    /// Reset the transform to identity, discarding all earlier composition.
    #[inline]
    pub fn reset_transform(&mut self) {
        self.transform = Affine::IDENTITY;
    }

    fn compose(&mut self, op: Affine, order: MatrixOrder) {
        self.transform = order.compose(self.transform, op);
    }

    /// Convert to a Peniko linear gradient with pad extend.
    ///
    /// The transform is not part of a Peniko gradient; pair the result with
    /// [`paint_transform`](Self::paint_transform).
    pub fn to_peniko(&self) -> Gradient {
        let stops: SmallVec<[ColorStop; 4]> =
            self.stops.iter().copied().map(ColorStop::from).collect();
        Gradient {
            kind: GradientKind::Linear(LinearGradientPosition::new(self.start, self.end)),
            extend: Extend::Pad,
            stops: stops.as_slice().into(),
            ..Gradient::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    const RED: Color = Color::from_rgba8(255, 0, 0, 255);
    const BLUE: Color = Color::from_rgba8(0, 0, 255, 255);
    const WHITE: Color = Color::from_rgba8(255, 255, 255, 255);
    const BLACK: Color = Color::from_rgba8(0, 0, 0, 255);

    fn red_blue() -> LinearGradientBrush {
        LinearGradientBrush::new((0.0, 0.0), (10.0, 0.0), RED, BLUE).unwrap()
    }

    #[test]
    fn equal_anchors_are_rejected() {
        for p in [(0.0, 0.0), (3.5, -2.0), (1e9, 1e9)] {
            assert_eq!(
                LinearGradientBrush::new(p, p, RED, BLUE),
                Err(GradientError::EqualAnchors)
            );
        }
    }

    #[test]
    fn too_few_stops_are_rejected() {
        assert_eq!(
            LinearGradientBrush::with_stops((0.0, 0.0), (1.0, 0.0), &[RED], &[0.0]),
            Err(GradientError::TooFewStops { count: 1 })
        );
        assert_eq!(
            LinearGradientBrush::with_stops((0.0, 0.0), (1.0, 0.0), &[], &[]),
            Err(GradientError::TooFewStops { count: 0 })
        );
        assert_eq!(
            LinearGradientBrush::from_gradient_stops(
                (0.0, 0.0),
                (1.0, 0.0),
                [GradientStop::new(RED, 0.0)]
            ),
            Err(GradientError::TooFewStops { count: 1 })
        );
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert_eq!(
            LinearGradientBrush::with_stops((0.0, 0.0), (1.0, 0.0), &[RED, BLUE], &[0.0]),
            Err(GradientError::MismatchedLengths {
                colors: 2,
                offsets: 1
            })
        );
    }

    #[test]
    fn anchors_are_checked_before_stops() {
        assert_eq!(
            LinearGradientBrush::with_stops((1.0, 1.0), (1.0, 1.0), &[RED], &[0.0, 1.0]),
            Err(GradientError::EqualAnchors)
        );
    }

    #[test]
    fn two_color_constructor_matches_array_form() {
        let sugar = red_blue();
        let explicit =
            LinearGradientBrush::with_stops((0.0, 0.0), (10.0, 0.0), &[RED, BLUE], &[0.0, 1.0])
                .unwrap();
        assert_eq!(sugar, explicit);
    }

    #[test]
    fn stops_are_sorted_and_keep_their_pairs() {
        let colors = [RED, WHITE, BLUE, BLACK];
        let offsets = [0.9, 0.1, 0.5, 0.0];
        let brush =
            LinearGradientBrush::with_stops((0.0, 0.0), (1.0, 1.0), &colors, &offsets).unwrap();

        let sorted: Vec<f32> = brush.offsets().collect();
        assert_eq!(sorted, [0.0, 0.1, 0.5, 0.9]);

        // Same multiset of pairs as the input.
        for (color, offset) in colors.iter().zip(offsets) {
            assert!(
                brush
                    .stops()
                    .iter()
                    .any(|s| s.color == *color && s.offset == offset),
                "missing pair ({color:?}, {offset})"
            );
        }
        assert_eq!(brush.first_color(), BLACK);
        assert_eq!(brush.last_color(), RED);
    }

    #[test]
    fn caller_slices_are_not_aliased() {
        let mut colors = [BLUE, RED];
        let mut offsets = [1.0, 0.0];
        let brush =
            LinearGradientBrush::with_stops((0.0, 0.0), (1.0, 0.0), &colors, &offsets).unwrap();

        // The caller's arrays are untouched by sorting...
        assert_eq!(offsets, [1.0, 0.0]);
        // ...and later edits do not reach the brush.
        colors[0] = WHITE;
        offsets[0] = 0.5;
        assert_eq!(brush.colors().collect::<Vec<_>>(), [RED, BLUE]);
        assert_eq!(brush.offsets().collect::<Vec<_>>(), [0.0, 1.0]);
    }

    #[test]
    fn rect_constructor_uses_direction_corners() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let brush =
            LinearGradientBrush::from_rect(rect, WHITE, BLACK, GradientDirection::BackwardDiagonal)
                .unwrap();
        assert_eq!(brush.start(), Point::new(10.0, 0.0));
        assert_eq!(brush.end(), Point::new(0.0, 10.0));

        for direction in GradientDirection::ALL {
            let brush = LinearGradientBrush::from_rect(rect, WHITE, BLACK, direction).unwrap();
            assert_eq!((brush.start(), brush.end()), direction.anchors(rect));
        }
    }

    #[test]
    fn flat_rect_rejects_horizontal_only_when_width_is_zero() {
        let rect = Rect::new(5.0, 0.0, 5.0, 10.0);
        assert_eq!(
            LinearGradientBrush::from_rect(rect, WHITE, BLACK, GradientDirection::Horizontal),
            Err(GradientError::EqualAnchors)
        );
        assert!(
            LinearGradientBrush::from_rect(rect, WHITE, BLACK, GradientDirection::Vertical).is_ok()
        );
    }

    #[test]
    fn transform_defaults_to_identity_and_is_skipped() {
        let brush = red_blue();
        assert_eq!(brush.transform(), Affine::IDENTITY);
        assert_eq!(brush.paint_transform(), None);
    }

    #[test]
    fn reset_transform_always_yields_identity() {
        let mut brush = red_blue();
        brush.translate(3.0, 4.0);
        brush.rotate_with_order(30.0, MatrixOrder::Append);
        brush.scale(2.0, 0.5);
        brush.multiply(Affine::skew(0.2, 0.0));
        assert!(brush.paint_transform().is_some());

        brush.reset_transform();
        assert_eq!(brush.transform(), Affine::IDENTITY);
        assert_eq!(brush.paint_transform(), None);
    }

    #[test]
    fn translation_order_matters_on_non_identity_transform() {
        let mut prepended = red_blue();
        prepended.scale(2.0, 3.0);
        let mut appended = prepended.clone();

        prepended.translate(1.0, 0.0);
        prepended.translate(0.0, 1.0);
        appended.translate_with_order(1.0, 0.0, MatrixOrder::Append);
        appended.translate_with_order(0.0, 1.0, MatrixOrder::Append);

        assert_ne!(prepended.transform(), appended.transform());
        // Prepended translation is scaled by the existing transform.
        assert_eq!(prepended.transform() * Point::ORIGIN, Point::new(2.0, 3.0));
        assert_eq!(appended.transform() * Point::ORIGIN, Point::new(1.0, 1.0));
    }

    #[test]
    fn rotate_takes_degrees() {
        let mut brush = red_blue();
        brush.rotate(90.0);
        let p = brush.transform() * Point::new(1.0, 0.0);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_arguments_pass_through() {
        let mut brush = red_blue();
        brush.translate(f64::NAN, 0.0);
        assert!(brush.transform().as_coeffs()[4].is_nan());

        brush.reset_transform();
        brush.scale(f64::INFINITY, 1.0);
        assert!(brush.transform().as_coeffs()[0].is_infinite());
    }

    #[test]
    fn to_peniko_carries_anchors_and_sorted_stops() {
        let brush =
            LinearGradientBrush::with_stops((0.0, 0.0), (8.0, 2.0), &[BLUE, RED], &[1.0, 0.0])
                .unwrap();
        let gradient = brush.to_peniko();
        match gradient.kind {
            GradientKind::Linear(pos) => {
                assert_eq!(pos.start, Point::new(0.0, 0.0));
                assert_eq!(pos.end, Point::new(8.0, 2.0));
            }
            ref other => panic!("expected linear gradient, got {other:?}"),
        }
        assert_eq!(gradient.extend, Extend::Pad);
        assert_eq!(gradient.stops.len(), 2);
        assert!((gradient.stops[0].offset - 0.0).abs() < f32::EPSILON);
        assert!((gradient.stops[1].offset - 1.0).abs() < f32::EPSILON);
    }
}
