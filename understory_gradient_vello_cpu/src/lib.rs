// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gradient_vello_cpu --heading-base-level=0

//! Vello CPU raster realizer for Understory gradient brushes.
//!
//! [`VelloCpuRealizer`] turns a [`LinearGradientBrush`] into a
//! [`VelloCpuGradientBrush`]: a Peniko gradient plus an optional paint
//! transform, ready to install on a [`vello_cpu::RenderContext`].
//!
//! Realization is serialized process-wide through [`lock_raster`]. Callers
//! that drive the raster context from several threads can take the same lock
//! around their own native calls with [`with_raster_lock`].
//!
//! ```rust
//! use peniko::Color;
//! use understory_gradient::{GradientRealizer, LinearGradientBrush};
//! use understory_gradient_vello_cpu::VelloCpuRealizer;
//!
//! let brush = LinearGradientBrush::new((0.0, 0.0), (10.0, 0.0), Color::WHITE, Color::BLACK)
//!     .unwrap();
//! let native = VelloCpuRealizer.realize(&brush).unwrap();
//! assert_eq!(native.positions().collect::<Vec<_>>(), [0.0, 1.0]);
//! assert!(native.paint_transform.is_none());
//! ```

use core::convert::Infallible;
use core::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use kurbo::Affine;
use peniko::color::Srgb;
use peniko::{Color, Gradient};
use understory_gradient::{GradientRealizer, LinearGradientBrush};
use vello_cpu::RenderContext;
use vello_cpu::kurbo::Affine as CpuAffine;

/// Guards the raster subsystem, which is not reentrant across threads.
static RASTER_LOCK: Mutex<()> = Mutex::new(());

/// Scoped hold on the process-wide raster lock.
///
/// The lock is released when the guard is dropped, including during
/// unwinding.
#[must_use = "the raster lock is released as soon as the guard is dropped"]
pub struct RasterLockGuard {
    _guard: MutexGuard<'static, ()>,
}

impl fmt::Debug for RasterLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RasterLockGuard { .. }")
    }
}

/// Acquire the process-wide raster lock, blocking until it is free.
///
/// A lock poisoned by a panic in an earlier holder is recovered: the guarded
/// state is `()`, so there is nothing left inconsistent.
pub fn lock_raster() -> RasterLockGuard {
    let guard = RASTER_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    log::trace!("raster lock acquired");
    RasterLockGuard { _guard: guard }
}

/// Run `f` while holding the raster lock.
///
/// The lock is released when `f` returns, whether it returns an error value or
/// panics.
pub fn with_raster_lock<R>(f: impl FnOnce() -> R) -> R {
    let _guard = lock_raster();
    f()
}

fn affine_to_cpu(xf: Affine) -> CpuAffine {
    CpuAffine::new(xf.as_coeffs())
}

/// Native raster paint for a linear gradient.
#[derive(Clone, Debug)]
pub struct VelloCpuGradientBrush {
    /// Linear gradient with the full sorted stop list.
    pub gradient: Gradient,
    /// Paint transform, present only when the source brush transform is not
    /// the identity.
    pub paint_transform: Option<Affine>,
}

impl VelloCpuGradientBrush {
    /// Interpolation colors, in stop order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.gradient
            .stops
            .iter()
            .map(|stop| stop.color.to_alpha_color::<Srgb>())
    }

    /// Interpolation positions, ascending.
    pub fn positions(&self) -> impl Iterator<Item = f32> + '_ {
        self.gradient.stops.iter().map(|stop| stop.offset)
    }

    /// Install this brush as the current paint of `ctx`.
    ///
    /// The paint transform is always written so that a transform left by an
    /// earlier paint does not carry over; brushes without one reset it to
    /// identity.
    pub fn apply(&self, ctx: &mut RenderContext) {
        ctx.set_paint(self.gradient.clone());
        let xf = self.paint_transform.unwrap_or(Affine::IDENTITY);
        ctx.set_paint_transform(affine_to_cpu(xf));
    }
}

/// Realizer producing [`VelloCpuGradientBrush`] values.
#[derive(Copy, Clone, Debug, Default)]
pub struct VelloCpuRealizer;

impl GradientRealizer for VelloCpuRealizer {
    type Brush = VelloCpuGradientBrush;
    type Error = Infallible;

    fn realize(&self, gradient: &LinearGradientBrush) -> Result<Self::Brush, Self::Error> {
        let brush = with_raster_lock(|| VelloCpuGradientBrush {
            gradient: gradient.to_peniko(),
            paint_transform: gradient.paint_transform(),
        });
        log::trace!(
            "realized raster gradient with {} stops (transform: {})",
            brush.gradient.stops.len(),
            brush.paint_transform.is_some()
        );
        Ok(brush)
    }
}
