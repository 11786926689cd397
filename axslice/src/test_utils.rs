/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::collections::HashMap;

use num_traits::NumCast;

use crate::axis::Axis;
use crate::axis::AxisError;
use crate::label::Label;
use crate::position::Position;

/// An in-memory axis assigning each label its index in construction
/// order.
#[derive(Debug, Clone)]
pub struct TestAxis<T = usize> {
    positions: HashMap<Label, T>,
    size: T,
}

impl<T: Position> TestAxis<T> {
    pub fn new<L: Into<Label>>(labels: impl IntoIterator<Item = L>) -> Self {
        let positions: HashMap<Label, T> = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| (label.into(), <T as NumCast>::from(i).unwrap()))
            .collect();
        let size = <T as NumCast>::from(positions.len()).unwrap();
        Self { positions, size }
    }
}

impl<T: Position> Axis<Label> for TestAxis<T> {
    type Position = T;

    fn size(&self) -> T {
        self.size
    }

    fn position_of(&self, label: &Label) -> Result<T, AxisError> {
        self.positions
            .get(label)
            .copied()
            .ok_or_else(|| AxisError::LabelNotFound {
                label: label.to_string(),
            })
    }
}

/// An axis whose lookups return whatever position they were told to,
/// regardless of the axis size.
#[derive(Debug, Clone)]
pub struct FixedAxis<T> {
    pub size: T,
    pub positions: HashMap<Label, T>,
}

impl<T: Position> Axis<Label> for FixedAxis<T> {
    type Position = T;

    fn size(&self) -> T {
        self.size
    }

    fn position_of(&self, label: &Label) -> Result<T, AxisError> {
        self.positions
            .get(label)
            .copied()
            .ok_or_else(|| AxisError::LabelNotFound {
                label: label.to_string(),
            })
    }
}
