// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::LinearGradientBrush;

/// Turns a [`LinearGradientBrush`] into a backend's native paint.
///
/// Each backend crate provides one implementation. Realizing never caches:
/// every call builds a fresh native brush whose ownership passes to the
/// caller, so realizing the same gradient twice yields two independent values
/// describing the same paint.
pub trait GradientRealizer {
    /// Native brush produced by this backend.
    type Brush;
    /// Failure reported by the native layer while building the brush.
    type Error;

    /// Build a native brush from the current state of `gradient`.
    ///
    /// The transform is attached only when it is not the identity.
    fn realize(&self, gradient: &LinearGradientBrush) -> Result<Self::Brush, Self::Error>;
}

impl<R: GradientRealizer + ?Sized> GradientRealizer for &R {
    type Brush = R::Brush;
    type Error = R::Error;

    #[inline]
    fn realize(&self, gradient: &LinearGradientBrush) -> Result<Self::Brush, Self::Error> {
        (**self).realize(gradient)
    }
}
