/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use crate::SliceError;
use crate::position::Position;

/// `ResolveOpts` controls how label-space slices are resolved against
/// an axis by enforcing stricter validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOpts {
    /// Fail resolution when the first label of a range sits after
    /// its last label on the axis.
    pub disallow_reversed_ranges: bool,

    /// Fail resolution when the axis reports a position at or beyond
    /// its own size.
    pub disallow_out_of_range: bool,
}

impl ResolveOpts {
    // Reversed ranges resolve to empty slices; positions are trusted.
    pub fn lenient() -> Self {
        Self {
            disallow_reversed_ranges: false,
            disallow_out_of_range: false,
        }
    }

    pub fn strict() -> Self {
        Self {
            disallow_reversed_ranges: true,
            disallow_out_of_range: true,
        }
    }

    pub(crate) fn check_position<T: Position>(
        &self,
        position: T,
        size: T,
    ) -> Result<T, SliceError> {
        if self.disallow_out_of_range && position >= size {
            return Err(SliceError::OutOfRange {
                position: position.to_string(),
                size: size.to_string(),
            });
        }
        Ok(position)
    }
}

impl Default for ResolveOpts {
    fn default() -> Self {
        Self::lenient()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(ResolveOpts::default(), ResolveOpts::lenient());
        assert!(ResolveOpts::strict().disallow_reversed_ranges);
        assert!(ResolveOpts::strict().disallow_out_of_range);
    }

    #[test]
    fn test_check_position() {
        assert_eq!(ResolveOpts::lenient().check_position(9u32, 3).unwrap(), 9);
        assert_eq!(ResolveOpts::strict().check_position(2u32, 3).unwrap(), 2);
        assert_eq!(
            ResolveOpts::strict().check_position(3u32, 3).unwrap_err(),
            SliceError::OutOfRange {
                position: "3".to_string(),
                size: "3".to_string()
            }
        );
    }
}
