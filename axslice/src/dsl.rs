/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Constructors for slices over the default [`Label`] set, and for
//! position slices built directly from integer positions.
//!
//! ```
//! use axslice::dsl::*;
//!
//! let cities = range("london", "rome");
//! let every_other_year = stepped_range(1990, 2020, 2).unwrap();
//! let whole = all();
//! let paris = squeeze("paris");
//! assert!(paris.as_squeeze().is_some());
//!
//! // Position ranges are half-open.
//! let first_five = position_range(0usize, 5).unwrap();
//! assert_eq!(first_five.size(), 5);
//! ```

use crate::Label;
use crate::axis_slice::AxisSlice;
use crate::position::Position;
use crate::slice::PositionSlice;
use crate::slice::SliceError;

/// The labels `first` through `last`, both inclusive.
pub fn range(first: impl Into<Label>, last: impl Into<Label>) -> AxisSlice {
    AxisSlice::range(first.into(), last.into())
}

/// Every `step`-th label from `first` through `last`, both inclusive.
/// Fails if `step` is zero.
pub fn stepped_range(
    first: impl Into<Label>,
    last: impl Into<Label>,
    step: usize,
) -> Result<AxisSlice, SliceError> {
    AxisSlice::stepped_range(first.into(), last.into(), step)
}

/// The whole axis.
pub fn all() -> AxisSlice {
    AxisSlice::all()
}

/// A single label, dropping the axis.
pub fn squeeze(label: impl Into<Label>) -> AxisSlice {
    AxisSlice::squeeze(label.into())
}

/// The positions `[first, last)`. Unlike [`range`], the upper bound is
/// excluded.
pub fn position_range<T: Position>(first: T, last: T) -> Result<PositionSlice<T>, SliceError> {
    PositionSlice::range(first, last)
}

/// Every `step`-th position of `[first, last)`.
pub fn position_stepped_range<T: Position>(
    first: T,
    last: T,
    step: T,
) -> Result<PositionSlice<T>, SliceError> {
    PositionSlice::stepped_range(first, last, step)
}
