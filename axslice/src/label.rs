/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;

/// The default set of admissible label types. Axis slices are generic
/// over their label type; `Label` is used when none is given.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    Int(i64),
    Size(usize),
    Char(char),
    Str(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(value) => write!(f, "{}", value),
            Label::Size(value) => write!(f, "{}", value),
            Label::Char(value) => write!(f, "'{}'", value),
            Label::Str(value) => write!(f, "{}", value),
        }
    }
}

impl From<i32> for Label {
    fn from(value: i32) -> Self {
        Label::Int(value.into())
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Label::Int(value)
    }
}

impl From<usize> for Label {
    fn from(value: usize) -> Self {
        Label::Size(value)
    }
}

impl From<char> for Label {
    fn from(value: char) -> Self {
        Label::Char(value)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Str(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from() {
        assert_eq!(Label::from(3), Label::Int(3));
        assert_eq!(Label::from(3i64), Label::Int(3));
        assert_eq!(Label::from(3usize), Label::Size(3));
        assert_eq!(Label::from('c'), Label::Char('c'));
        assert_eq!(Label::from("x"), Label::Str("x".to_string()));
        assert_eq!(Label::from("x".to_string()), Label::from("x"));
        // Variants never compare equal across types.
        assert_ne!(Label::from(3), Label::from(3usize));
    }

    #[test]
    fn test_display() {
        assert_eq!(Label::from(-2).to_string(), "-2");
        assert_eq!(Label::from(9usize).to_string(), "9");
        assert_eq!(Label::from('q').to_string(), "'q'");
        assert_eq!(Label::from("paris").to_string(), "paris");
    }
}
