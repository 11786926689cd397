/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The read-only label lookup that slices are resolved against.

use crate::position::Position;

/// Errors raised by an [`Axis`] lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AxisError {
    #[error("label `{label}` not found in axis")]
    LabelNotFound { label: String },
}

/// An ordered (or unordered) set of labels for one dimension of an
/// array, mapping each label to its zero-based position.
///
/// Implementations only need to offer read-only lookups. Slices hold
/// no reference to the axis they were resolved against.
pub trait Axis<L: ?Sized> {
    /// The integer type positions are expressed in.
    type Position: Position;

    /// The number of labels on this axis.
    fn size(&self) -> Self::Position;

    /// The position of `label`, or [`AxisError::LabelNotFound`].
    fn position_of(&self, label: &L) -> Result<Self::Position, AxisError>;
}

impl<L: ?Sized, A: Axis<L> + ?Sized> Axis<L> for &A {
    type Position = A::Position;

    fn size(&self) -> Self::Position {
        (**self).size()
    }

    fn position_of(&self, label: &L) -> Result<Self::Position, AxisError> {
        (**self).position_of(label)
    }
}
