// Copyright 2026 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category palette and gradient colormaps.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;

/// The default category palette, cycled through as plots are added to an axis.
pub const DEFAULT_PALETTE: [Color; 10] = [
    Color::from_rgb8(31, 119, 180),
    Color::from_rgb8(255, 127, 14),
    Color::from_rgb8(44, 160, 44),
    Color::from_rgb8(214, 39, 40),
    Color::from_rgb8(148, 103, 189),
    Color::from_rgb8(140, 86, 75),
    Color::from_rgb8(227, 119, 194),
    Color::from_rgb8(127, 127, 127),
    Color::from_rgb8(188, 189, 34),
    Color::from_rgb8(23, 190, 207),
];

/// Returns the default color for the `index`-th plot on an axis.
///
/// Indexes past the palette wrap around to the start.
pub fn default_color(index: usize) -> Color {
    DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
}

/// A gradient over ordered color stops, sampled on `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Colormap {
    stops: Vec<Color>,
}

impl Colormap {
    /// Creates a colormap from explicit stops, spaced evenly over `[0, 1]`.
    pub fn from_stops(stops: impl Into<Vec<Color>>) -> Self {
        Self {
            stops: stops.into(),
        }
    }

    /// The viridis gradient (dark purple through teal to yellow).
    pub fn viridis() -> Self {
        Self::from_stops([
            Color::from_rgb8(68, 1, 84),
            Color::from_rgb8(59, 82, 139),
            Color::from_rgb8(33, 145, 140),
            Color::from_rgb8(94, 201, 98),
            Color::from_rgb8(253, 231, 37),
        ])
    }

    /// Looks up the color at position `position`.
    ///
    /// The position is clamped to `[0, 1]`; non-finite positions sample the
    /// bottom of the scale.
    pub fn to_color(&self, position: f32) -> Color {
        let Some((first, rest)) = self.stops.split_first() else {
            return Color::TRANSPARENT;
        };
        if rest.is_empty() {
            return *first;
        }

        let position = if position.is_finite() {
            position.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let scaled = position * (self.stops.len() - 1) as f32;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "scaled is clamped to the stop range"
        )]
        let lower = scaled as usize;
        if lower + 1 >= self.stops.len() {
            return self.stops[self.stops.len() - 1];
        }
        let t = scaled - lower as f32;

        let a = self.stops[lower].components;
        let b = self.stops[lower + 1].components;
        Color::new([
            a[0] + (b[0] - a[0]) * t,
            a[1] + (b[1] - a[1]) * t,
            a[2] + (b[2] - a[2]) * t,
            a[3] + (b[3] - a[3]) * t,
        ])
    }
}

impl Default for Colormap {
    fn default() -> Self {
        Self::viridis()
    }
}
