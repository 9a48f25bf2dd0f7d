// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gradient_backends --heading-base-level=0

//! Runtime selection between the Understory gradient realizers.
//!
//! Each backend crate has its own realizer with its own native brush type.
//! When the backend is only known at runtime (read from a settings file, a
//! command line flag, or a host capability probe) use [`AnyRealizer`], which
//! wraps all of them behind one [`GradientRealizer`] returning a
//! [`NativeBrush`].
//!
//! ```rust
//! use peniko::Color;
//! use understory_gradient::{GradientRealizer, LinearGradientBrush};
//! use understory_gradient_backends::{AnyRealizer, BackendKind, NativeBrush, RealizerConfig};
//!
//! let backend: BackendKind = "svg".parse().unwrap();
//! let realizer = AnyRealizer::new(RealizerConfig::default().with_backend(backend));
//!
//! let brush = LinearGradientBrush::new((0.0, 0.0), (10.0, 0.0), Color::WHITE, Color::BLACK)
//!     .unwrap();
//! let NativeBrush::Vector(svg) = realizer.realize(&brush).unwrap() else {
//!     unreachable!();
//! };
//! assert_eq!(svg.stops.len(), 2);
//! ```

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use understory_gradient::{GradientRealizer, LinearGradientBrush};
use understory_gradient_svg::{SvgLinearGradient, SvgRealizer};
use understory_gradient_vello_cpu::{VelloCpuGradientBrush, VelloCpuRealizer};
use understory_gradient_web_canvas::{CanvasBrush, CanvasGradientMode, WebCanvasRealizer};

/// Rendering backend family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum BackendKind {
    /// Immediate-mode raster rendering through Vello CPU.
    #[default]
    Raster,
    /// Retained-mode vector output as SVG.
    Vector,
    /// Browser Canvas 2D.
    Canvas,
}

impl BackendKind {
    /// Every backend, in declaration order.
    pub const ALL: [Self; 3] = [Self::Raster, Self::Vector, Self::Canvas];

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Raster => "raster",
            Self::Vector => "vector",
            Self::Canvas => "canvas",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = UnknownBackend;

    /// Parse a backend name, ignoring ASCII case.
    ///
    /// Accepts the canonical names plus the backend crate names
    /// (`vello_cpu`, `svg`, `web_canvas`, with `-` or `_`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMES: [(&str, BackendKind); 9] = [
            ("raster", BackendKind::Raster),
            ("vello_cpu", BackendKind::Raster),
            ("vello-cpu", BackendKind::Raster),
            ("vector", BackendKind::Vector),
            ("svg", BackendKind::Vector),
            ("canvas", BackendKind::Canvas),
            ("web_canvas", BackendKind::Canvas),
            ("web-canvas", BackendKind::Canvas),
            ("canvas2d", BackendKind::Canvas),
        ];
        let name = s.trim();
        NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, kind)| kind)
            .ok_or_else(|| UnknownBackend {
                name: name.to_owned(),
            })
    }
}

/// A backend name that [`BackendKind`] does not recognize.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownBackend {
    name: String,
}

impl UnknownBackend {
    /// The rejected name, with surrounding whitespace removed.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown gradient backend `{}` (expected raster, vector or canvas)",
            self.name
        )
    }
}

impl core::error::Error for UnknownBackend {}

/// Which realizer [`AnyRealizer`] uses, and how.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct RealizerConfig {
    /// Target backend.
    pub backend: BackendKind,
    /// Gradient support on the canvas backend.
    pub canvas_mode: CanvasGradientMode,
}

impl RealizerConfig {
    /// Set the target backend.
    #[must_use]
    pub const fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Set the canvas gradient mode. Ignored by other backends.
    #[must_use]
    pub const fn with_canvas_mode(mut self, mode: CanvasGradientMode) -> Self {
        self.canvas_mode = mode;
        self
    }
}

/// A native brush from whichever backend realized it.
#[derive(Clone, Debug)]
pub enum NativeBrush {
    /// Vello CPU paint.
    Raster(VelloCpuGradientBrush),
    /// SVG gradient definition.
    Vector(SvgLinearGradient),
    /// Canvas 2D style.
    Canvas(CanvasBrush),
}

impl NativeBrush {
    /// Backend that produced this brush.
    pub const fn kind(&self) -> BackendKind {
        match self {
            Self::Raster(_) => BackendKind::Raster,
            Self::Vector(_) => BackendKind::Vector,
            Self::Canvas(_) => BackendKind::Canvas,
        }
    }
}

/// Failure reported by a backend while realizing a gradient.
///
/// The built-in realizers are all infallible today, so [`AnyRealizer`] never
/// returns this. It is the error type for backends whose native layer can
/// fail, and lets callers handle such failures without matching on backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendError {
    backend: BackendKind,
    message: String,
}

impl BackendError {
    /// Wrap a native failure from `backend`.
    pub fn new(backend: BackendKind, err: impl fmt::Display) -> Self {
        Self {
            backend,
            message: err.to_string(),
        }
    }

    /// Backend that failed.
    pub const fn backend(&self) -> BackendKind {
        self.backend
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} backend failed: {}", self.backend, self.message)
    }
}

impl core::error::Error for BackendError {}

/// Realizer that picks a backend from a [`RealizerConfig`].
#[derive(Copy, Clone, Debug, Default)]
pub struct AnyRealizer {
    config: RealizerConfig,
}

impl AnyRealizer {
    /// Create a realizer for `config`.
    pub const fn new(config: RealizerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> RealizerConfig {
        self.config
    }
}

impl GradientRealizer for AnyRealizer {
    type Brush = NativeBrush;
    type Error = BackendError;

    fn realize(&self, gradient: &LinearGradientBrush) -> Result<Self::Brush, Self::Error> {
        let backend = self.config.backend;
        log::trace!("dispatching gradient realization to {backend} backend");
        let wrap = |err: Infallible| BackendError::new(backend, err);
        match backend {
            BackendKind::Raster => VelloCpuRealizer
                .realize(gradient)
                .map(NativeBrush::Raster)
                .map_err(wrap),
            BackendKind::Vector => SvgRealizer
                .realize(gradient)
                .map(NativeBrush::Vector)
                .map_err(wrap),
            BackendKind::Canvas => WebCanvasRealizer::new(self.config.canvas_mode)
                .realize(gradient)
                .map(NativeBrush::Canvas)
                .map_err(wrap),
        }
    }
}
