// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Affine;

/// Where a new transform operation goes relative to an existing transform.
///
/// Transforms compose in kurbo's convention, where `a * b` maps a point
/// through `b` first and then through `a`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum MatrixOrder {
    /// The new operation maps points before the existing transform does.
    ///
    /// Use this to move, scale, or rotate along the brush's own local axes.
    #[default]
    Prepend,
    /// The new operation maps points after the existing transform does.
    ///
    /// Use this to operate in the already-transformed coordinate space.
    Append,
}

impl MatrixOrder {
    /// Compose `op` with `current` in this order.
    #[inline]
    #[must_use]
    pub fn compose(self, current: Affine, op: Affine) -> Affine {
        match self {
            Self::Prepend => current * op,
            Self::Append => op * current,
        }
    }
}
