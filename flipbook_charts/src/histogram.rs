// Copyright 2026 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Histogram rendering: filled bars from the zero baseline.
//!
//! Histogram frames are produced by `Transform::Bin`, so rows hold bin
//! centers (x) and counts (y); the bar width is the spacing between adjacent
//! centers.

use flipbook_core::{Aesthetic, Backend, Bounds2f, vec2};

use crate::plot::{FrameBracket, Series};
use crate::scale::DisplayScales;

/// Draws one time-slice: one filled bar per bin, height-blended between the
/// bracketing frames.
pub(crate) fn draw_plot(
    series: &Series,
    scales: &DisplayScales,
    backend: &mut dyn Backend,
    bracket: FrameBracket,
) {
    let Some(frame) = series.frames.get(bracket.above) else {
        return;
    };
    let rows = frame.row_count();
    if rows == 0 {
        return;
    }

    // Bin width in data units, from the spacing of adjacent centers. A single
    // bin spans the whole data range of the x scale.
    let data_width = if rows > 1 {
        frame.value(1, Aesthetic::X).unwrap_or(0.0) - frame.value(0, Aesthetic::X).unwrap_or(0.0)
    } else {
        let (d0, d1) = scales.x.domain();
        d1 - d0
    };

    let baseline = scales.to_display(Aesthetic::Y, 0.0);
    backend.fill_color(series.color);
    for row in 0..rows {
        let x = frame.value(row, Aesthetic::X).unwrap_or(0.0);
        let mut y = frame.value(row, Aesthetic::Y).unwrap_or(0.0);
        if bracket.w2 != 0.0 {
            let below = &series.frames[bracket.above - 1];
            if let Some(prev) = below.value(row, Aesthetic::Y) {
                y = y * bracket.w1 + prev * bracket.w2;
            }
        }

        let x0 = scales.to_display(Aesthetic::X, x - data_width * 0.5);
        let x1 = scales.to_display(Aesthetic::X, x + data_width * 0.5);
        let top = scales.to_display(Aesthetic::Y, y);
        backend.rect(Bounds2f::new(
            vec2(x0.min(x1), top.min(baseline)),
            vec2(x0.max(x1), top.max(baseline)),
        ));
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;
    use std::vec::Vec;

    use flipbook_core::{AestheticData, DrawCommand, RecordingBackend};

    use super::*;
    use crate::plot::Plot;
    use crate::scale::LinearScale;
    use crate::transform::Transform;

    fn scales() -> DisplayScales {
        DisplayScales {
            x: LinearScale::new((0.0, 4.0), (0.0, 100.0)),
            y: LinearScale::new((0.0, 2.0), (100.0, 0.0)),
            color: LinearScale::new((0.0, 1.0), (0.0, 1.0)),
            size: LinearScale::new((0.0, 1.0), (1.0, 10.0)),
        }
    }

    #[test]
    fn one_bar_per_bin_from_the_baseline() {
        let mut plot = Plot::histogram();
        plot.set_transform(Transform::Bin { count: 4 });
        plot.add_frame(
            &AestheticData::new()
                .x(Vec::from([0.0, 1.5, 1.6, 4.0]))
                .unwrap(),
            0.0,
        );
        let mut backend = RecordingBackend::new();
        plot.draw_plot(&scales(), &mut backend, 0.0);

        let rects: Vec<Bounds2f> = backend
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect(b) => Some(*b),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 4, "one bar per bin");

        // First bin: center 0.5, width 1, one sample -> top at count 1.
        let first = rects[0];
        assert!((first.min[0] - 0.0).abs() < 1e-4, "bar left {}", first.min[0]);
        assert!((first.max[0] - 25.0).abs() < 1e-4, "bar right {}", first.max[0]);
        assert!((first.min[1] - 50.0).abs() < 1e-4, "bar top {}", first.min[1]);
        assert!((first.max[1] - 100.0).abs() < 1e-4, "baseline {}", first.max[1]);
    }

    #[test]
    fn bar_heights_blend_between_frames() {
        let mut plot = Plot::histogram();
        plot.add_frame(
            &AestheticData::new()
                .x(vec![1.0])
                .unwrap()
                .y(vec![0.0])
                .unwrap(),
            0.0,
        );
        plot.add_frame(
            &AestheticData::new()
                .x(vec![1.0])
                .unwrap()
                .y(vec![2.0])
                .unwrap(),
            1.0,
        );
        let mut backend = RecordingBackend::new();
        plot.draw_plot(&scales(), &mut backend, 0.5);

        let DrawCommand::Rect(bar) = backend.commands[1] else {
            panic!("expected a bar after the fill color");
        };
        // Count blends to 1.0, which maps to pixel y 50.
        assert!((bar.min[1] - 50.0).abs() < 1e-4, "bar top {}", bar.min[1]);
        assert!((bar.max[1] - 100.0).abs() < 1e-4, "baseline {}", bar.max[1]);
    }
}
