/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Slices described in label space. Both endpoints of a label range
//! are inclusive; resolving one against an axis yields the half-open
//! position slice covering the same labels.

use std::fmt;

use num_traits::One;

use crate::ResolveOpts;
use crate::SliceError;
use crate::axis::Axis;
use crate::position;
use crate::slice::PositionAll;
use crate::slice::PositionRange;
use crate::slice::PositionSteppedRange;

/// Selects every position of an axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LabelAll;

impl LabelAll {
    pub fn resolve<L, A>(&self, axis: &A) -> Result<PositionAll<A::Position>, SliceError>
    where
        L: ?Sized,
        A: Axis<L> + ?Sized,
    {
        PositionAll::new(axis.size())
    }
}

/// The labels from `first` through `last`, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelRange<L> {
    first: L,
    last: L,
}

impl<L> LabelRange<L> {
    pub fn new(first: L, last: L) -> Self {
        Self { first, last }
    }

    pub fn first(&self) -> &L {
        &self.first
    }

    pub fn last(&self) -> &L {
        &self.last
    }

    /// Resolves this range against `axis` with the default
    /// [`ResolveOpts`].
    pub fn resolve<A>(&self, axis: &A) -> Result<PositionRange<A::Position>, SliceError>
    where
        A: Axis<L> + ?Sized,
    {
        self.resolve_with(&ResolveOpts::default(), axis)
    }

    /// Looks up both endpoints and returns `[position(first),
    /// position(last) + 1)`.
    pub fn resolve_with<A>(
        &self,
        opts: &ResolveOpts,
        axis: &A,
    ) -> Result<PositionRange<A::Position>, SliceError>
    where
        A: Axis<L> + ?Sized,
    {
        let (start, stop) = resolve_bounds(opts, axis, &self.first, &self.last)?;
        tracing::trace!(%start, %stop, "resolved label range");
        PositionRange::new(start, stop)
    }
}

/// The labels from `first` through `last`, both inclusive, keeping
/// every `step`-th position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelSteppedRange<L> {
    first: L,
    last: L,
    step: usize,
}

impl<L> LabelSteppedRange<L> {
    /// Creates a stepped range. A zero `step` is rejected with
    /// [`SliceError::InvalidStep`].
    pub fn new(first: L, last: L, step: usize) -> Result<Self, SliceError> {
        if step == 0 {
            return Err(SliceError::InvalidStep {
                step: step.to_string(),
            });
        }
        Ok(Self { first, last, step })
    }

    pub fn first(&self) -> &L {
        &self.first
    }

    pub fn last(&self) -> &L {
        &self.last
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn resolve<A>(&self, axis: &A) -> Result<PositionSteppedRange<A::Position>, SliceError>
    where
        A: Axis<L> + ?Sized,
    {
        self.resolve_with(&ResolveOpts::default(), axis)
    }

    /// Looks up both endpoints and returns every `step`-th position of
    /// `[position(first), position(last) + 1)`. A step too wide for the
    /// axis position type selects only the first label, so it is
    /// narrowed to the span of the range.
    pub fn resolve_with<A>(
        &self,
        opts: &ResolveOpts,
        axis: &A,
    ) -> Result<PositionSteppedRange<A::Position>, SliceError>
    where
        A: Axis<L> + ?Sized,
    {
        let (start, stop) = resolve_bounds(opts, axis, &self.first, &self.last)?;
        let step = match position::cast(self.step) {
            Ok(step) => step,
            Err(_) => (stop - start).max(<A::Position as One>::one()),
        };
        tracing::trace!(%start, %stop, %step, "resolved label stepped range");
        PositionSteppedRange::new(start, stop, step)
    }
}

/// Looks up the inclusive label bounds `[first, last]` and converts
/// them into half-open position bounds.
fn resolve_bounds<L, A>(
    opts: &ResolveOpts,
    axis: &A,
    first: &L,
    last: &L,
) -> Result<(A::Position, A::Position), SliceError>
where
    A: Axis<L> + ?Sized,
{
    let size = axis.size();
    let start = position::non_negative(axis.position_of(first)?)?;
    let start = opts.check_position(start, size)?;
    let last = position::non_negative(axis.position_of(last)?)?;
    let last = opts.check_position(last, size)?;

    if last < start {
        if opts.disallow_reversed_ranges {
            return Err(SliceError::ReversedRange {
                start: start.to_string(),
                stop: last.to_string(),
            });
        }
        tracing::debug!(%start, %last, "reversed label range resolves to an empty slice");
        return Ok((start, start));
    }

    Ok((start, position::successor(last)?))
}

impl<L: fmt::Display> fmt::Display for LabelRange<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.first, self.last)
    }
}

impl<L: fmt::Display> fmt::Display for LabelSteppedRange<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={};{}", self.first, self.last, self.step)
    }
}

impl fmt::Display for LabelAll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "..")
    }
}
