/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;

use enum_as_inner::EnumAsInner;

use crate::ResolveOpts;
use crate::SliceError;
use crate::axis::Axis;
use crate::extended::ExtendedPositionSlice;
use crate::label::Label;
use crate::range::LabelAll;
use crate::range::LabelRange;
use crate::range::LabelSteppedRange;
use crate::slice::PositionSlice;

/// A selection along one axis, described with labels.
///
/// The first three variants select positions within the axis and
/// resolve to a [`PositionSlice`]. `Squeeze` instead removes the axis
/// altogether; callers check [`AxisSlice::as_squeeze`] first and route
/// such axes through [`AxisSlice::resolve_extended`].
///
/// ```
/// use axslice::axis::Axis;
/// use axslice::axis::AxisError;
/// use axslice::dsl::range;
/// use axslice::Label;
///
/// struct Letters;
///
/// impl Axis<Label> for Letters {
///     type Position = usize;
///
///     fn size(&self) -> usize {
///         26
///     }
///
///     fn position_of(&self, label: &Label) -> Result<usize, AxisError> {
///         match label {
///             Label::Char(c @ 'a'..='z') => Ok(*c as usize - 'a' as usize),
///             _ => Err(AxisError::LabelNotFound { label: label.to_string() }),
///         }
///     }
/// }
///
/// let slice = range('c', 'f').resolve(&Letters).unwrap();
/// assert_eq!(slice.iter().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumAsInner)]
pub enum AxisSlice<L = Label> {
    /// An inclusive label range.
    Range(LabelRange<L>),

    /// An inclusive label range with a stride.
    SteppedRange(LabelSteppedRange<L>),

    /// The whole axis.
    All(LabelAll),

    /// A single label; the axis is dropped from the result.
    Squeeze(L),
}

impl<L> AxisSlice<L> {
    /// Selects the labels `first` through `last`, both included.
    pub fn range(first: L, last: L) -> Self {
        Self::Range(LabelRange::new(first, last))
    }

    /// Selects every `step`-th label from `first` through `last`.
    pub fn stepped_range(first: L, last: L, step: usize) -> Result<Self, SliceError> {
        LabelSteppedRange::new(first, last, step).map(Self::SteppedRange)
    }

    pub fn all() -> Self {
        Self::All(LabelAll)
    }

    /// Fixes the axis at `label` and drops it.
    pub fn squeeze(label: L) -> Self {
        Self::Squeeze(label)
    }

    /// Resolves against `axis` with the default [`ResolveOpts`].
    pub fn resolve<A>(&self, axis: &A) -> Result<PositionSlice<A::Position>, SliceError>
    where
        A: Axis<L> + ?Sized,
    {
        self.resolve_with(&ResolveOpts::default(), axis)
    }

    /// Resolves this slice to the positions it selects on `axis`.
    ///
    /// Fails with [`SliceError::InvalidOperation`] for `Squeeze`,
    /// which drops a dimension rather than selecting within it.
    pub fn resolve_with<A>(
        &self,
        opts: &ResolveOpts,
        axis: &A,
    ) -> Result<PositionSlice<A::Position>, SliceError>
    where
        A: Axis<L> + ?Sized,
    {
        Ok(match self {
            Self::Range(range) => PositionSlice::Range(range.resolve_with(opts, axis)?),
            Self::SteppedRange(range) => {
                PositionSlice::SteppedRange(range.resolve_with(opts, axis)?)
            }
            Self::All(all) => PositionSlice::All(all.resolve::<L, A>(axis)?),
            Self::Squeeze(_) => return Err(SliceError::InvalidOperation),
        })
    }

    pub fn resolve_extended<A>(
        &self,
        axis: &A,
    ) -> Result<ExtendedPositionSlice<A::Position>, SliceError>
    where
        A: Axis<L> + ?Sized,
    {
        self.resolve_extended_with(&ResolveOpts::default(), axis)
    }

    /// Resolves to the per-axis selection consumed by an array engine:
    /// squeezed labels become [`ExtendedPositionSlice::Squeeze`] at the
    /// label's position, the whole axis becomes
    /// [`ExtendedPositionSlice::All`], and ranges are resolved as by
    /// [`AxisSlice::resolve_with`].
    pub fn resolve_extended_with<A>(
        &self,
        opts: &ResolveOpts,
        axis: &A,
    ) -> Result<ExtendedPositionSlice<A::Position>, SliceError>
    where
        A: Axis<L> + ?Sized,
    {
        match self {
            Self::Squeeze(label) => {
                let position = crate::position::non_negative(axis.position_of(label)?)?;
                let position = opts.check_position(position, axis.size())?;
                tracing::trace!(%position, "resolved squeeze");
                Ok(ExtendedPositionSlice::Squeeze(position))
            }
            Self::All(_) => Ok(ExtendedPositionSlice::All),
            _ => self.resolve_with(opts, axis).map(ExtendedPositionSlice::Slice),
        }
    }
}

impl<L> From<LabelRange<L>> for AxisSlice<L> {
    fn from(range: LabelRange<L>) -> Self {
        Self::Range(range)
    }
}

impl<L> From<LabelSteppedRange<L>> for AxisSlice<L> {
    fn from(range: LabelSteppedRange<L>) -> Self {
        Self::SteppedRange(range)
    }
}

impl<L> From<LabelAll> for AxisSlice<L> {
    fn from(all: LabelAll) -> Self {
        Self::All(all)
    }
}

impl<L: fmt::Display> fmt::Display for AxisSlice<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(range) => write!(f, "{}", range),
            Self::SteppedRange(range) => write!(f, "{}", range),
            Self::All(all) => write!(f, "{}", all),
            Self::Squeeze(label) => write!(f, "{}", label),
        }
    }
}

// Compile-time check: slices can be shared across threads.
fn _assert_axis_slice_traits()
where
    AxisSlice: Send + Sync + 'static,
    PositionSlice<usize>: Send + Sync + 'static,
    ExtendedPositionSlice<usize>: Send + Sync + 'static,
{
}
