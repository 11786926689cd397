/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Integer types used to address positions along an axis.

use std::fmt;
use std::hash::Hash;

use num_traits::NumCast;
use num_traits::PrimInt;

use crate::SliceError;

/// A zero-based integer offset along an axis. Implemented for every
/// primitive integer type.
pub trait Position: PrimInt + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {}

impl<T> Position for T where T: PrimInt + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {}

/// Checked conversion of `value` into the position type `S`.
pub(crate) fn cast<T, S>(value: T) -> Result<S, SliceError>
where
    T: PrimInt + fmt::Display,
    S: Position,
{
    <S as NumCast>::from(value).ok_or_else(|| SliceError::PositionOverflow {
        value: value.to_string(),
        target: std::any::type_name::<S>(),
    })
}

/// Fails with [`SliceError::NegativePosition`] for values below zero.
pub(crate) fn non_negative<T: Position>(position: T) -> Result<T, SliceError> {
    if position < T::zero() {
        return Err(SliceError::NegativePosition {
            position: position.to_string(),
        });
    }
    Ok(position)
}

/// `position + 1`, reporting overflow instead of wrapping.
pub(crate) fn successor<T: Position>(position: T) -> Result<T, SliceError> {
    position
        .checked_add(&T::one())
        .ok_or_else(|| SliceError::PositionOverflow {
            value: format!("{} + 1", position),
            target: std::any::type_name::<T>(),
        })
}

/// `lhs * rhs`, reporting overflow instead of wrapping.
pub(crate) fn product<T: Position>(lhs: T, rhs: T) -> Result<T, SliceError> {
    lhs.checked_mul(&rhs)
        .ok_or_else(|| SliceError::PositionOverflow {
            value: format!("{} * {}", lhs, rhs),
            target: std::any::type_name::<T>(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast() {
        assert_eq!(cast::<u64, u8>(255).unwrap(), 255u8);
        assert_eq!(cast::<i32, usize>(7).unwrap(), 7usize);
        assert!(matches!(
            cast::<u64, u8>(256),
            Err(SliceError::PositionOverflow { ref value, target: "u8" }) if value == "256"
        ));
        assert!(matches!(
            cast::<i64, u32>(-1),
            Err(SliceError::PositionOverflow { .. })
        ));
    }

    #[test]
    fn test_successor() {
        assert_eq!(successor(4u16).unwrap(), 5);
        assert!(matches!(
            successor(u8::MAX),
            Err(SliceError::PositionOverflow { target: "u8", .. })
        ));
    }

    #[test]
    fn test_product() {
        assert_eq!(product(6u8, 40).unwrap(), 240);
        assert!(matches!(
            product(2u8, 200),
            Err(SliceError::PositionOverflow { ref value, target: "u8" }) if value == "2 * 200"
        ));
        assert!(matches!(
            product(i16::MIN, -1),
            Err(SliceError::PositionOverflow { target: "i16", .. })
        ));
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative(0i32).unwrap(), 0);
        assert!(matches!(
            non_negative(-3i64),
            Err(SliceError::NegativePosition { ref position }) if position == "-3"
        ));
    }
}
