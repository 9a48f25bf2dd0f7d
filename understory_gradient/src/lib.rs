// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gradient --heading-base-level=0

//! Understory Gradient: backend-agnostic linear gradient brushes.
//!
//! A [`LinearGradientBrush`] describes a linear color gradient once: two
//! anchor points (or a rectangle plus a [`GradientDirection`]), a list of
//! [`GradientStop`]s kept sorted by offset, and an affine transform. Backends
//! turn that description into their own paint type through the
//! [`GradientRealizer`] trait, so callers never write backend-specific code.
//!
//! # Position in the stack
//!
//! - **Callers** build brushes and adjust their transform.
//! - **This crate** validates and normalizes the gradient model.
//! - **Backend crates** (`understory_gradient_vello_cpu`,
//!   `understory_gradient_svg`, `understory_gradient_web_canvas`) implement
//!   [`GradientRealizer`] for their native paint types.
//!
//! # Transforms
//!
//! Transform operations compose with the current brush transform. By default
//! a new operation is *prepended* ([`MatrixOrder::Prepend`]): it applies in
//! the brush's local coordinates, before the existing transform. Use the
//! `*_with_order` variants with [`MatrixOrder::Append`] to operate in the
//! already-transformed space instead.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Rect;
//! use peniko::Color;
//! use understory_gradient::{GradientDirection, LinearGradientBrush, MatrixOrder};
//!
//! let mut brush = LinearGradientBrush::from_rect(
//!     Rect::new(0.0, 0.0, 10.0, 10.0),
//!     Color::WHITE,
//!     Color::BLACK,
//!     GradientDirection::BackwardDiagonal,
//! )
//! .unwrap();
//! assert_eq!(brush.start(), (10.0, 0.0).into());
//! assert_eq!(brush.end(), (0.0, 10.0).into());
//!
//! brush.rotate(45.0);
//! brush.translate_with_order(5.0, 0.0, MatrixOrder::Append);
//! assert!(brush.paint_transform().is_some());
//!
//! brush.reset_transform();
//! assert!(brush.paint_transform().is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod brush;
mod direction;
mod error;
mod order;
mod realize;
mod stop;

pub use brush::LinearGradientBrush;
pub use direction::GradientDirection;
pub use error::GradientError;
pub use order::MatrixOrder;
pub use realize::GradientRealizer;
pub use stop::GradientStop;

pub use kurbo::{Affine, Point, Rect};
pub use peniko::Color;
