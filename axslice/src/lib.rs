/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Label-based slicing for labeled multidimensional arrays.
//!
//! An [`AxisSlice`] describes a selection along one axis in terms of
//! its labels: an inclusive label range, a stepped label range, the
//! whole axis, or a single squeezed label. Resolving it against an
//! [`Axis`] (a read-only label to position lookup) produces a
//! [`PositionSlice`] in half-open integer position space, ready for a
//! dense array engine. [`ExtendedPositionSlice`] is the final per-axis
//! selection, covering both sub-range selection and dimension
//! dropping.
//!
//! The crate holds no state: every type is an immutable value and
//! every operation is a pure function of its inputs and the axis.

mod slice;
pub use slice::PositionAll;
pub use slice::PositionIter;
pub use slice::PositionRange;
pub use slice::PositionSlice;
pub use slice::PositionSteppedRange;
pub use slice::SliceError;

/// The label lookup slices are resolved against.
pub mod axis;
pub use axis::Axis;
pub use axis::AxisError;

/// Label-space slice descriptors.
pub mod range;
pub use range::LabelAll;
pub use range::LabelRange;
pub use range::LabelSteppedRange;

mod axis_slice;
pub use axis_slice::AxisSlice;

mod extended;
pub use extended::ExtendedPositionSlice;

mod label;
pub use label::Label;

mod opts;
pub use opts::ResolveOpts;

/// Integer types used as positions.
pub mod position;
pub use position::Position;

/// DSL-style constructors for building slices.
pub mod dsl;

/// Property-based generators for randomized test input.
#[cfg(test)]
pub mod strategy;

#[cfg(test)]
mod test_utils;
