/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;

use enum_as_inner::EnumAsInner;

use crate::SliceError;
use crate::position;
use crate::position::Position;
use crate::slice::PositionSlice;

/// The per-axis selection handed to an array engine. `Squeeze`
/// removes the axis, fixing it at one position; `All` and `Slice`
/// keep the axis, restricted to the selected positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumAsInner)]
pub enum ExtendedPositionSlice<T> {
    /// Keep every position of the axis.
    All,

    /// Drop the axis, fixing it at the given position.
    Squeeze(T),

    /// Keep the axis, restricted to the slice's positions.
    Slice(PositionSlice<T>),
}

impl<T: Position> ExtendedPositionSlice<T> {
    /// Whether the axis survives in the resulting view.
    pub fn keeps_axis(&self) -> bool {
        !self.is_squeeze()
    }

    /// Re-expresses the held selection in position type `S`,
    /// preserving its kind.
    pub fn convert<S: Position>(&self) -> Result<ExtendedPositionSlice<S>, SliceError> {
        Ok(match self {
            Self::All => ExtendedPositionSlice::All,
            Self::Squeeze(position) => ExtendedPositionSlice::Squeeze(position::cast(*position)?),
            Self::Slice(slice) => ExtendedPositionSlice::Slice(slice.convert()?),
        })
    }
}

impl<T> From<PositionSlice<T>> for ExtendedPositionSlice<T> {
    fn from(slice: PositionSlice<T>) -> Self {
        Self::Slice(slice)
    }
}

impl<T: fmt::Display> fmt::Display for ExtendedPositionSlice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, ".."),
            Self::Squeeze(position) => write!(f, "squeeze({})", position),
            Self::Slice(slice) => write!(f, "{}", slice),
        }
    }
}
