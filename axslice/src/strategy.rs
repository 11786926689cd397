/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use proptest::prelude::*;

use crate::label::Label;
use crate::slice::PositionSlice;
use crate::test_utils::TestAxis;

/// Position slices of every kind, with all positions below 1200.
pub fn position_slices() -> impl Strategy<Value = PositionSlice<u32>> {
    prop_oneof![
        (0u32..1000, 0u32..200)
            .prop_map(|(start, len)| PositionSlice::range(start, start + len).unwrap()),
        (0u32..1000, 0u32..200, 1u32..10).prop_map(|(start, len, step)| {
            PositionSlice::stepped_range(start, start + len, step).unwrap()
        }),
        (0u32..200).prop_map(|size| PositionSlice::all(size).unwrap()),
    ]
}

/// A shuffled axis of `1..64` integer labels, together with two
/// labels on it in position order (`first` at or before `last`).
pub fn axes_with_bounds() -> impl Strategy<Value = (TestAxis<u32>, Label, Label)> {
    (1usize..64)
        .prop_flat_map(|len| {
            (
                Just((0..len as i64).collect::<Vec<_>>()).prop_shuffle(),
                0..len,
                0..len,
            )
        })
        .prop_map(|(labels, a, b)| {
            let (first, last) = (a.min(b), a.max(b));
            let bounds = (Label::from(labels[first]), Label::from(labels[last]));
            (TestAxis::new(labels), bounds.0, bounds.1)
        })
}
