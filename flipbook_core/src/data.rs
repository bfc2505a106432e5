// Copyright 2026 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The aesthetic-bound data table.
//!
//! One [`AestheticData`] holds a single animation frame's worth of columns,
//! each bound to an [`Aesthetic`] channel. Presence of an optional channel is
//! an explicit [`AestheticData::has`] check, never probed by failure.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

use crate::bounds::Bounds4f;

/// A named data channel mapped into display space by a per-channel transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Aesthetic {
    /// Horizontal position.
    X,
    /// Vertical position.
    Y,
    /// Colormap position.
    Color,
    /// Glyph size.
    Size,
}

impl Aesthetic {
    /// The number of aesthetic channels.
    pub const COUNT: usize = 4;

    /// Every channel, in limit-axis order.
    pub const ALL: [Self; Self::COUNT] = [Self::X, Self::Y, Self::Color, Self::Size];

    /// The limit-axis index of this channel.
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Color => 2,
            Self::Size => 3,
        }
    }
}

/// Errors building an [`AestheticData`] table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataError {
    /// A column's length does not match the columns already bound.
    LengthMismatch {
        /// The channel being bound.
        aesthetic: Aesthetic,
        /// The row count of the existing columns.
        expected: usize,
        /// The row count of the rejected column.
        actual: usize,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                aesthetic,
                expected,
                actual,
            } => write!(
                f,
                "column for {aesthetic:?} has {actual} rows, expected {expected}"
            ),
        }
    }
}

/// One frame of columnar data, keyed by aesthetic channel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AestheticData {
    columns: SmallVec<[Aesthetic; Aesthetic::COUNT]>,
    data: SmallVec<[Vec<f32>; Aesthetic::COUNT]>,
}

impl AestheticData {
    /// Creates an empty table with no columns bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `values` to `aesthetic`, replacing any column already bound to it.
    ///
    /// Every bound column must have the same length.
    pub fn with(
        mut self,
        aesthetic: Aesthetic,
        values: impl Into<Vec<f32>>,
    ) -> Result<Self, DataError> {
        let values = values.into();
        let expected = self.row_count();
        if !self.columns.is_empty() && values.len() != expected {
            return Err(DataError::LengthMismatch {
                aesthetic,
                expected,
                actual: values.len(),
            });
        }
        match self.column_index(aesthetic) {
            Some(i) => self.data[i] = values,
            None => {
                self.columns.push(aesthetic);
                self.data.push(values);
            }
        }
        Ok(self)
    }

    /// Binds the x column.
    pub fn x(self, values: impl Into<Vec<f32>>) -> Result<Self, DataError> {
        self.with(Aesthetic::X, values)
    }

    /// Binds the y column.
    pub fn y(self, values: impl Into<Vec<f32>>) -> Result<Self, DataError> {
        self.with(Aesthetic::Y, values)
    }

    /// Binds the color column.
    pub fn color(self, values: impl Into<Vec<f32>>) -> Result<Self, DataError> {
        self.with(Aesthetic::Color, values)
    }

    /// Binds the size column.
    pub fn size(self, values: impl Into<Vec<f32>>) -> Result<Self, DataError> {
        self.with(Aesthetic::Size, values)
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    /// Returns true if a column is bound to `aesthetic`.
    pub fn has(&self, aesthetic: Aesthetic) -> bool {
        self.column_index(aesthetic).is_some()
    }

    /// Returns the column bound to `aesthetic`, if any.
    pub fn column(&self, aesthetic: Aesthetic) -> Option<&[f32]> {
        self.column_index(aesthetic).map(|i| self.data[i].as_slice())
    }

    /// Returns a single value, if both the column and the row exist.
    pub fn value(&self, row: usize, aesthetic: Aesthetic) -> Option<f32> {
        self.column(aesthetic)?.get(row).copied()
    }

    /// Returns per-channel min/max limits over the bound columns.
    ///
    /// Non-finite values are skipped, and the axes of unbound channels stay
    /// inverted (empty).
    pub fn limits(&self) -> Bounds4f {
        let mut out = Bounds4f::empty();
        for aesthetic in Aesthetic::ALL {
            let Some(column) = self.column(aesthetic) else {
                continue;
            };
            let i = aesthetic.index();
            for &v in column {
                if !v.is_finite() {
                    continue;
                }
                if v < out.min[i] {
                    out.min[i] = v;
                }
                if v > out.max[i] {
                    out.max[i] = v;
                }
            }
        }
        out
    }

    fn column_index(&self, aesthetic: Aesthetic) -> Option<usize> {
        self.columns.iter().position(|&c| c == aesthetic)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;

    use super::*;

    #[test]
    fn presence_is_an_explicit_check() {
        let data = AestheticData::new()
            .x(vec![1.0, 2.0])
            .unwrap()
            .y(vec![3.0, 4.0])
            .unwrap();
        assert!(data.has(Aesthetic::X) && data.has(Aesthetic::Y), "x/y bound");
        assert!(!data.has(Aesthetic::Color), "color not bound");
        assert_eq!(data.row_count(), 2);
        assert_eq!(data.value(1, Aesthetic::Y), Some(4.0));
        assert_eq!(data.value(0, Aesthetic::Size), None);
    }

    #[test]
    fn mismatched_column_lengths_are_rejected() {
        let err = AestheticData::new()
            .x(vec![1.0, 2.0])
            .unwrap()
            .y(vec![3.0])
            .unwrap_err();
        assert_eq!(
            err,
            DataError::LengthMismatch {
                aesthetic: Aesthetic::Y,
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn rebinding_a_channel_replaces_the_column() {
        let data = AestheticData::new()
            .x(vec![1.0])
            .unwrap()
            .x(vec![9.0])
            .unwrap();
        assert_eq!(data.column(Aesthetic::X), Some(&[9.0_f32][..]));
    }

    #[test]
    fn limits_cover_bound_channels_only() {
        let data = AestheticData::new()
            .x(vec![1.0, -2.0, 3.0])
            .unwrap()
            .y(vec![0.5, f32::NAN, 2.5])
            .unwrap();
        let limits = data.limits();
        assert_eq!(limits.min[0], -2.0);
        assert_eq!(limits.max[0], 3.0);
        assert_eq!(limits.min[1], 0.5);
        assert_eq!(limits.max[1], 2.5);
        assert!(limits.is_empty_axis(Aesthetic::Color.index()), "color unbound");
        assert!(limits.is_empty_axis(Aesthetic::Size.index()), "size unbound");
    }
}
