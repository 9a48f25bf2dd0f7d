// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gradient_web_canvas --heading-base-level=0

//! Web Canvas (2D) realizer for Understory gradient brushes.
//!
//! [`WebCanvasRealizer`] turns a [`LinearGradientBrush`] into a
//! [`CanvasBrush`], a plain description of a Canvas 2D fill style. On
//! `wasm32` the description can be materialized on a
//! `web_sys::CanvasRenderingContext2d`; on other targets it is still useful
//! for tests and tooling.
//!
//! Notes:
//! - Canvas gradients have no transform of their own. A brush transform is
//!   folded into the gradient anchors instead, which is exact for any
//!   invertible affine transform since a transformed linear gradient is again
//!   a linear gradient.
//! - Canvas rejects stop offsets outside `[0, 1]`, so offsets (including
//!   infinite ones) are clamped and NaN offsets are dropped.
//! - [`CanvasGradientMode::Placeholder`] reproduces older behavior where this
//!   backend painted a fixed solid color instead of the gradient.
//!
//! ```rust
//! use peniko::Color;
//! use understory_gradient::{GradientRealizer, LinearGradientBrush};
//! use understory_gradient_web_canvas::{CanvasBrush, WebCanvasRealizer};
//!
//! let mut brush = LinearGradientBrush::new((0.0, 0.0), (10.0, 0.0), Color::WHITE, Color::BLACK)
//!     .unwrap();
//! brush.translate(5.0, 0.0);
//! let CanvasBrush::Gradient(gradient) = WebCanvasRealizer::default().realize(&brush).unwrap()
//! else {
//!     unreachable!();
//! };
//! assert_eq!(gradient.x0, 5.0);
//! assert!((gradient.x1 - 15.0).abs() < 1e-9);
//! ```

#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::convert::Infallible;
use kurbo::{Affine, Point, Vec2};
use peniko::Color;
use understory_gradient::{GradientRealizer, LinearGradientBrush};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

/// Solid color painted by [`CanvasGradientMode::Placeholder`] (CSS `royalblue`).
pub const PLACEHOLDER_COLOR: Color = Color::from_rgba8(65, 105, 225, 255);

/// How [`WebCanvasRealizer`] realizes gradients.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CanvasGradientMode {
    /// Build a real Canvas linear gradient from anchors, stops and transform.
    #[default]
    Full,
    /// Ignore the gradient and paint [`PLACEHOLDER_COLOR`].
    ///
    /// Kept for comparing output against renderers that never supported
    /// gradients on this backend.
    Placeholder,
}

/// A single `addColorStop` call.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasColorStop {
    /// Offset, clamped to `[0, 1]`.
    pub offset: f32,
    /// CSS color string.
    pub color: String,
}

/// Arguments for `createLinearGradient` plus its color stops.
///
/// Anchors are in the coordinate space of the canvas transform in effect at
/// fill time, with any brush transform already applied.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasLinearGradient {
    /// Start x.
    pub x0: f64,
    /// Start y.
    pub y0: f64,
    /// End x.
    pub x1: f64,
    /// End y.
    pub y1: f64,
    /// Stops in ascending offset order.
    pub stops: Vec<CanvasColorStop>,
}

/// A Canvas 2D fill or stroke style.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasBrush {
    /// A linear gradient.
    Gradient(CanvasLinearGradient),
    /// A CSS color string.
    Solid(String),
}

/// Realizer producing [`CanvasBrush`] values.
#[derive(Copy, Clone, Debug, Default)]
pub struct WebCanvasRealizer {
    mode: CanvasGradientMode,
}

impl WebCanvasRealizer {
    /// Create a realizer using `mode`.
    pub const fn new(mode: CanvasGradientMode) -> Self {
        Self { mode }
    }

    /// The configured mode.
    pub const fn mode(&self) -> CanvasGradientMode {
        self.mode
    }
}

impl GradientRealizer for WebCanvasRealizer {
    type Brush = CanvasBrush;
    type Error = Infallible;

    fn realize(&self, gradient: &LinearGradientBrush) -> Result<Self::Brush, Self::Error> {
        match self.mode {
            CanvasGradientMode::Placeholder => {
                log::warn!("canvas gradient realized as placeholder solid color");
                Ok(CanvasBrush::Solid(color_to_css(PLACEHOLDER_COLOR)))
            }
            CanvasGradientMode::Full => Ok(CanvasBrush::Gradient(canvas_gradient(gradient))),
        }
    }
}

fn canvas_gradient(gradient: &LinearGradientBrush) -> CanvasLinearGradient {
    let (start, end) = match gradient.paint_transform() {
        None => (gradient.start(), gradient.end()),
        Some(xf) => transformed_anchors(gradient.start(), gradient.end(), xf).unwrap_or_else(|| {
            log::warn!("non-invertible gradient transform {xf:?}; using untransformed anchors");
            (gradient.start(), gradient.end())
        }),
    };

    let mut stops = Vec::with_capacity(gradient.stops().len());
    for stop in gradient.stops() {
        if stop.offset.is_nan() {
            log::warn!("dropping canvas gradient stop with NaN offset");
            continue;
        }
        stops.push(CanvasColorStop {
            offset: stop.offset.clamp(0.0, 1.0),
            color: color_to_css(stop.color),
        });
    }
    log::trace!("realized canvas gradient with {} stops", stops.len());

    CanvasLinearGradient {
        x0: start.x,
        y0: start.y,
        x1: end.x,
        y1: end.y,
        stops,
    }
}

/// Anchors of the linear gradient equal to `(start, end)` seen through `xf`.
///
/// The gradient parameter `t(p) = (p - start) · d / |d|²` becomes
/// `t(xf⁻¹ p)`, which is again linear in `p` with gradient `g = L⁻ᵀ d / |d|²`
/// (`L` the linear part of `xf`). The new axis starts at `xf(start)` and runs
/// along `g / |g|²`.
///
/// Returns `None` when `xf` is not invertible.
fn transformed_anchors(start: Point, end: Point, xf: Affine) -> Option<(Point, Point)> {
    let det = xf.determinant();
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    let axis = end - start;
    let v = axis / axis.hypot2();
    let [a, b, c, d, _, _] = xf.inverse().as_coeffs();
    let g = Vec2::new(a * v.x + b * v.y, c * v.x + d * v.y);
    let g2 = g.hypot2();
    if g2 == 0.0 || !g2.is_finite() {
        return None;
    }
    let new_start = xf * start;
    Some((new_start, new_start + g / g2))
}

fn color_to_css(color: Color) -> String {
    // `Rgba8` formats as a CSS `rgb(...)`/`rgba(...)` string.
    color.to_rgba8().to_string()
}

#[cfg(target_arch = "wasm32")]
impl CanvasLinearGradient {
    /// Create the `CanvasGradient` on `ctx`.
    pub fn to_canvas_gradient(
        &self,
        ctx: &CanvasRenderingContext2d,
    ) -> Result<CanvasGradient, JsValue> {
        let grad = ctx.create_linear_gradient(self.x0, self.y0, self.x1, self.y1);
        for stop in &self.stops {
            grad.add_color_stop(stop.offset, &stop.color)?;
        }
        Ok(grad)
    }
}

#[cfg(target_arch = "wasm32")]
impl CanvasBrush {
    /// Install this brush as the fill style of `ctx`.
    pub fn apply_fill(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        match self {
            Self::Solid(css) => ctx.set_fill_style_str(css),
            Self::Gradient(gradient) => {
                let grad = gradient.to_canvas_gradient(ctx)?;
                ctx.set_fill_style_canvas_gradient(&grad);
            }
        }
        Ok(())
    }

    /// Install this brush as the stroke style of `ctx`.
    pub fn apply_stroke(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        match self {
            Self::Solid(css) => ctx.set_stroke_style_str(css),
            Self::Gradient(gradient) => {
                let grad = gradient.to_canvas_gradient(ctx)?;
                ctx.set_stroke_style_canvas_gradient(&grad);
            }
        }
        Ok(())
    }
}
