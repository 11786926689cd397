/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;
use std::iter::FusedIterator;
use std::ops;

use enum_as_inner::EnumAsInner;
use num_traits::ToPrimitive;

use crate::axis::AxisError;
use crate::position;
use crate::position::Position;

/// Errors that can occur while building, resolving, or converting
/// slices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SliceError {
    #[error(transparent)]
    Axis(#[from] AxisError),

    #[error("squeeze removes the axis and cannot be resolved to a position slice")]
    InvalidOperation,

    #[error("invalid step {step}: must be at least 1")]
    InvalidStep { step: String },

    #[error("negative position {position}")]
    NegativePosition { position: String },

    #[error("range start {start} exceeds stop {stop}")]
    ReversedRange { start: String, stop: String },

    #[error("position {position} out of range for axis of size {size}")]
    OutOfRange { position: String, size: String },

    #[error("position {value} does not fit in {target}")]
    PositionOverflow { value: String, target: &'static str },
}

/// A contiguous, half-open range of positions `[start, stop)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionRange<T> {
    start: T,
    stop: T,
}

impl<T: Position> PositionRange<T> {
    /// Creates a new range. Requires `0 <= start <= stop`.
    pub fn new(start: T, stop: T) -> Result<Self, SliceError> {
        let start = position::non_negative(start)?;
        if stop < start {
            return Err(SliceError::ReversedRange {
                start: start.to_string(),
                stop: stop.to_string(),
            });
        }
        Ok(Self { start, stop })
    }

    /// The first selected position.
    pub fn start(&self) -> T {
        self.start
    }

    /// One past the last selected position.
    pub fn stop(&self) -> T {
        self.stop
    }

    pub fn size(&self) -> T {
        self.stop - self.start
    }

    pub fn contains(&self, position: T) -> bool {
        self.start <= position && position < self.stop
    }

    pub fn at(&self, index: T) -> T {
        debug_assert!(index < self.size(), "index {} out of range", index);
        self.start + index
    }

    pub fn step_size(&self, _index: T, n: T) -> T {
        n
    }

    /// `size() - 1 - index`. See [`PositionRange::index_of`] for the
    /// position to index mapping.
    pub fn revert_index(&self, index: T) -> T {
        self.size() - T::one() - index
    }

    pub fn index_of(&self, position: T) -> Option<T> {
        self.contains(position).then(|| position - self.start)
    }

    fn convert<S: Position>(&self) -> Result<PositionRange<S>, SliceError> {
        Ok(PositionRange {
            start: position::cast(self.start)?,
            stop: position::cast(self.stop)?,
        })
    }
}

/// A half-open range of positions visiting every `step`-th position
/// from `start` up to (but excluding) `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionSteppedRange<T> {
    start: T,
    stop: T,
    step: T,
}

impl<T: Position> PositionSteppedRange<T> {
    /// Creates a new stepped range. Requires `0 <= start <= stop` and
    /// `step >= 1`.
    pub fn new(start: T, stop: T, step: T) -> Result<Self, SliceError> {
        if step < T::one() {
            return Err(SliceError::InvalidStep {
                step: step.to_string(),
            });
        }
        let PositionRange { start, stop } = PositionRange::new(start, stop)?;
        Ok(Self { start, stop, step })
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn stop(&self) -> T {
        self.stop
    }

    pub fn step(&self) -> T {
        self.step
    }

    /// The number of positions visited, `ceil((stop - start) / step)`.
    pub fn size(&self) -> T {
        let span = self.stop - self.start;
        let visited = span / self.step;
        if span % self.step == T::zero() {
            visited
        } else {
            visited + T::one()
        }
    }

    pub fn contains(&self, position: T) -> bool {
        self.start <= position
            && position < self.stop
            && (position - self.start) % self.step == T::zero()
    }

    pub fn at(&self, index: T) -> T {
        debug_assert!(index < self.size(), "index {} out of range", index);
        self.start + index * self.step
    }

    /// `n * step`, failing with [`SliceError::PositionOverflow`] when
    /// the distance does not fit in `T`.
    pub fn step_size(&self, _index: T, n: T) -> Result<T, SliceError> {
        position::product(n, self.step)
    }

    /// `size() - 1 - index`. See [`PositionSteppedRange::index_of`] for
    /// the position to index mapping.
    pub fn revert_index(&self, index: T) -> T {
        self.size() - T::one() - index
    }

    pub fn index_of(&self, position: T) -> Option<T> {
        self.contains(position)
            .then(|| (position - self.start) / self.step)
    }

    fn convert<S: Position>(&self) -> Result<PositionSteppedRange<S>, SliceError> {
        Ok(PositionSteppedRange {
            start: position::cast(self.start)?,
            stop: position::cast(self.stop)?,
            step: position::cast(self.step)?,
        })
    }
}

/// Every position of an axis of the given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionAll<T> {
    size: T,
}

impl<T: Position> PositionAll<T> {
    pub fn new(size: T) -> Result<Self, SliceError> {
        Ok(Self {
            size: position::non_negative(size)?,
        })
    }

    pub fn size(&self) -> T {
        self.size
    }

    pub fn contains(&self, position: T) -> bool {
        T::zero() <= position && position < self.size
    }

    pub fn at(&self, index: T) -> T {
        debug_assert!(index < self.size, "index {} out of range", index);
        index
    }

    pub fn step_size(&self, _index: T, n: T) -> T {
        n
    }

    /// `size() - 1 - index`. See [`PositionAll::index_of`] for the
    /// position to index mapping.
    pub fn revert_index(&self, index: T) -> T {
        self.size - T::one() - index
    }

    pub fn index_of(&self, position: T) -> Option<T> {
        self.contains(position).then_some(position)
    }

    fn convert<S: Position>(&self) -> Result<PositionAll<S>, SliceError> {
        Ok(PositionAll {
            size: position::cast(self.size)?,
        })
    }
}

/// A selection along one axis, expressed in position space. This is
/// what label-space slices resolve to.
///
/// Positions inside the slice are addressed by a local index in
/// `[0, size())`; [`PositionSlice::at`] maps a local index to the
/// absolute position it selects.
///
/// ```
/// use axslice::PositionSlice;
///
/// let slice = PositionSlice::stepped_range(2u32, 9, 3).unwrap();
/// assert_eq!(slice.size(), 3);
/// assert_eq!(slice.iter().collect::<Vec<_>>(), vec![2, 5, 8]);
/// assert!(slice.contains(5));
/// assert!(!slice.contains(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumAsInner)]
pub enum PositionSlice<T> {
    /// A contiguous range.
    Range(PositionRange<T>),

    /// A range visiting every n-th position.
    SteppedRange(PositionSteppedRange<T>),

    /// The whole axis.
    All(PositionAll<T>),
}

impl<T: Position> PositionSlice<T> {
    /// Selects `[start, stop)`.
    pub fn range(start: T, stop: T) -> Result<Self, SliceError> {
        PositionRange::new(start, stop).map(Self::Range)
    }

    /// Selects every `step`-th position of `[start, stop)`.
    pub fn stepped_range(start: T, stop: T, step: T) -> Result<Self, SliceError> {
        PositionSteppedRange::new(start, stop, step).map(Self::SteppedRange)
    }

    /// Selects every position of an axis of `size` positions.
    pub fn all(size: T) -> Result<Self, SliceError> {
        PositionAll::new(size).map(Self::All)
    }

    /// The number of positions selected.
    pub fn size(&self) -> T {
        match self {
            Self::Range(range) => range.size(),
            Self::SteppedRange(range) => range.size(),
            Self::All(all) => all.size(),
        }
    }

    /// Tests whether the absolute `position` is selected. Positions
    /// outside the axis are never selected.
    pub fn contains(&self, position: T) -> bool {
        match self {
            Self::Range(range) => range.contains(position),
            Self::SteppedRange(range) => range.contains(position),
            Self::All(all) => all.contains(position),
        }
    }

    /// The absolute position of local index `index`. The index must
    /// be less than [`PositionSlice::size`].
    pub fn at(&self, index: T) -> T {
        match self {
            Self::Range(range) => range.at(index),
            Self::SteppedRange(range) => range.at(index),
            Self::All(all) => all.at(index),
        }
    }

    /// The distance in position space covered by `n` consecutive
    /// local indices starting at `index`. Fails with
    /// [`SliceError::PositionOverflow`] if that distance does not fit
    /// in `T`.
    pub fn step_size(&self, index: T, n: T) -> Result<T, SliceError> {
        match self {
            Self::Range(range) => Ok(range.step_size(index, n)),
            Self::SteppedRange(range) => range.step_size(index, n),
            Self::All(all) => Ok(all.step_size(index, n)),
        }
    }

    /// The local index reached after walking `index` steps backward
    /// from the end of the slice, i.e. `size() - 1 - index`.
    ///
    /// This maps local indices to local indices. To find the local
    /// index of an absolute position, use [`PositionSlice::index_of`].
    pub fn revert_index(&self, index: T) -> T {
        match self {
            Self::Range(range) => range.revert_index(index),
            Self::SteppedRange(range) => range.revert_index(index),
            Self::All(all) => all.revert_index(index),
        }
    }

    /// The local index selecting `position`, if any. Inverse of
    /// [`PositionSlice::at`].
    pub fn index_of(&self, position: T) -> Option<T> {
        match self {
            Self::Range(range) => range.index_of(position),
            Self::SteppedRange(range) => range.index_of(position),
            Self::All(all) => all.index_of(position),
        }
    }

    /// Iterates over the selected absolute positions in order.
    pub fn iter(&self) -> PositionIter<T> {
        PositionIter {
            slice: *self,
            front: T::zero(),
            back: self.size(),
        }
    }

    /// Re-expresses this slice in position type `S`, failing if any
    /// bound does not fit.
    pub fn convert<S: Position>(&self) -> Result<PositionSlice<S>, SliceError> {
        Ok(match self {
            Self::Range(range) => PositionSlice::Range(range.convert()?),
            Self::SteppedRange(range) => PositionSlice::SteppedRange(range.convert()?),
            Self::All(all) => PositionSlice::All(all.convert()?),
        })
    }
}

/// Iterator over the positions selected by a [`PositionSlice`].
///
/// Yields local indices `[front, back)` mapped through
/// [`PositionSlice::at`], from either end.
#[derive(Debug, Clone)]
pub struct PositionIter<T> {
    slice: PositionSlice<T>,
    front: T,
    back: T,
}

impl<T: Position> Iterator for PositionIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let position = self.slice.at(self.front);
        self.front = self.front + T::one();
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Slices wider than usize (u128 on 64-bit targets) only get a
        // lower bound.
        match (self.back - self.front).to_usize() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Position> DoubleEndedIterator for PositionIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back = self.back - T::one();
        Some(self.slice.at(self.back))
    }
}

impl<T: Position> ExactSizeIterator for PositionIter<T> {}

impl<T: Position> FusedIterator for PositionIter<T> {}

impl<T: Position> IntoIterator for &PositionSlice<T> {
    type Item = T;
    type IntoIter = PositionIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Position> TryFrom<ops::Range<T>> for PositionSlice<T> {
    type Error = SliceError;

    fn try_from(range: ops::Range<T>) -> Result<Self, Self::Error> {
        Self::range(range.start, range.end)
    }
}

impl<T: Position> TryFrom<ops::RangeInclusive<T>> for PositionSlice<T> {
    type Error = SliceError;

    fn try_from(range: ops::RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (start, last) = range.into_inner();
        Self::range(start, position::successor(last)?)
    }
}

impl<T: fmt::Display> fmt::Display for PositionSlice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(range) => write!(f, "{}:{}", range.start, range.stop),
            Self::SteppedRange(range) => {
                write!(f, "{}:{}:{}", range.start, range.stop, range.step)
            }
            Self::All(_) => write!(f, ":"),
        }
    }
}
