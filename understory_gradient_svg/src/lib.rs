// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gradient_svg --heading-base-level=0

//! SVG vector realizer for Understory gradient brushes.
//!
//! [`SvgRealizer`] turns a [`LinearGradientBrush`] into an
//! [`SvgLinearGradient`]: the retained-mode form of the gradient, one
//! [`SvgStop`] per color stop plus an optional `gradientTransform`. It can be
//! written out as a `<linearGradient>` definition and referenced from a
//! `fill` or `stroke` attribute.
//!
//! ```rust
//! use peniko::Color;
//! use understory_gradient::{GradientRealizer, LinearGradientBrush};
//! use understory_gradient_svg::{SvgLinearGradient, SvgRealizer};
//!
//! let brush = LinearGradientBrush::new((0.0, 0.0), (10.0, 0.0), Color::WHITE, Color::BLACK)
//!     .unwrap();
//! let gradient = SvgRealizer.realize(&brush).unwrap();
//! let def = gradient.to_svg_def("g0");
//! assert!(def.starts_with("<linearGradient id=\"g0\""));
//! assert!(!def.contains("gradientTransform"));
//! assert_eq!(SvgLinearGradient::fill_ref("g0"), "url(#g0)");
//! ```
//!
//! Gradient coordinates use `gradientUnits="userSpaceOnUse"`, so anchors are
//! interpreted in the coordinate system of the element being painted.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt::Write as _;
use kurbo::{Affine, Point, Rect};
use peniko::Color;
use understory_gradient::{GradientRealizer, LinearGradientBrush};

/// One `<stop>` of an SVG gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgStop {
    /// Stop offset. Realized stops are finite; infinite offsets are clamped
    /// to `0` or `1`.
    pub offset: f32,
    /// `#rrggbb` color.
    pub color: String,
    /// Stop opacity in `[0, 1]`.
    pub opacity: f32,
}

/// Retained-mode linear gradient, ready to be written as SVG.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgLinearGradient {
    /// Start anchor (`x1`, `y1`).
    pub start: Point,
    /// End anchor (`x2`, `y2`).
    pub end: Point,
    /// Stops in ascending offset order.
    pub stops: Vec<SvgStop>,
    /// `gradientTransform`, present only when not the identity.
    pub transform: Option<Affine>,
}

impl SvgLinearGradient {
    /// Paint reference to a gradient definition written with `id`.
    pub fn fill_ref(id: &str) -> String {
        format!("url(#{id})")
    }

    /// Write this gradient as a `<linearGradient>` element with the given `id`.
    ///
    /// `id` is written as-is and must already be a valid XML name.
    pub fn to_svg_def(&self, id: &str) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<linearGradient id=\"{id}\" gradientUnits=\"userSpaceOnUse\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
            fmt_f64(self.start.x),
            fmt_f64(self.start.y),
            fmt_f64(self.end.x),
            fmt_f64(self.end.y),
        );
        if let Some(xf) = self.transform {
            let _ = write!(out, " gradientTransform=\"{}\"", affine_to_svg_matrix(xf));
        }
        out.push('>');
        for stop in &self.stops {
            let _ = write!(
                out,
                "<stop offset=\"{}\" stop-color=\"{}\"",
                fmt_f32(stop.offset),
                stop.color
            );
            if stop.opacity < 1.0 {
                let _ = write!(out, " stop-opacity=\"{}\"", fmt_f32(stop.opacity));
            }
            out.push_str("/>");
        }
        out.push_str("</linearGradient>");
        out
    }

    /// Export a standalone SVG document that fills `rect` with this gradient.
    ///
    /// Handy for inspecting a realized brush in a browser.
    pub fn to_svg_document(&self, width: u32, height: u32, rect: Rect) -> String {
        const ID: &str = "gradient";
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        );
        let _ = write!(out, "<defs>{}</defs>", self.to_svg_def(ID));
        let _ = write!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            fmt_f64(rect.x0),
            fmt_f64(rect.y0),
            fmt_f64(rect.width()),
            fmt_f64(rect.height()),
            Self::fill_ref(ID)
        );
        out.push_str("</svg>");
        out
    }
}

/// Realizer producing [`SvgLinearGradient`] values.
#[derive(Copy, Clone, Debug, Default)]
pub struct SvgRealizer;

impl GradientRealizer for SvgRealizer {
    type Brush = SvgLinearGradient;
    type Error = Infallible;

    fn realize(&self, gradient: &LinearGradientBrush) -> Result<Self::Brush, Self::Error> {
        let mut stops = Vec::with_capacity(gradient.stops().len());
        for stop in gradient.stops() {
            if stop.offset.is_nan() {
                log::warn!("dropping svg gradient stop with NaN offset");
                continue;
            }
            let (color, opacity) = color_to_svg(stop.color);
            stops.push(SvgStop {
                // SVG clamps offsets to [0, 1] itself, but cannot parse `inf`.
                offset: if stop.offset.is_infinite() {
                    stop.offset.clamp(0.0, 1.0)
                } else {
                    stop.offset
                },
                color,
                opacity,
            });
        }
        log::trace!("realized svg gradient with {} stops", stops.len());
        Ok(SvgLinearGradient {
            start: gradient.start(),
            end: gradient.end(),
            stops,
            transform: gradient.paint_transform(),
        })
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn affine_to_svg_matrix(xf: Affine) -> String {
    // kurbo::Affine stores [a, b, c, d, e, f] corresponding to:
    // [ a c e ]
    // [ b d f ]
    // [ 0 0 1 ]
    let c = xf.as_coeffs();
    format!(
        "matrix({} {} {} {} {} {})",
        fmt_f64(c[0]),
        fmt_f64(c[1]),
        fmt_f64(c[2]),
        fmt_f64(c[3]),
        fmt_f64(c[4]),
        fmt_f64(c[5]),
    )
}

// Shortest round-trip form; `-0` is written as `0`.
fn fmt_f64(v: f64) -> String {
    if v == 0.0 {
        return String::from("0");
    }
    format!("{v}")
}

fn fmt_f32(v: f32) -> String {
    if v == 0.0 {
        return String::from("0");
    }
    format!("{v}")
}
