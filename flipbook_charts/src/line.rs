// Copyright 2026 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line rendering: one stroked polyline through the row sequence.

use flipbook_core::{Aesthetic, AestheticData, Backend, Vec2f, vec2};

use crate::plot::{FrameBracket, Series};
use crate::scale::DisplayScales;

fn display_xy(frame: &AestheticData, row: usize, scales: &DisplayScales) -> Vec2f {
    let x = frame.value(row, Aesthetic::X).unwrap_or(0.0);
    let y = frame.value(row, Aesthetic::Y).unwrap_or(0.0);
    vec2(
        scales.to_display(Aesthetic::X, x),
        scales.to_display(Aesthetic::Y, y),
    )
}

/// Draws one time-slice: a polyline through the display-space row positions,
/// vertex-blended between the bracketing frames.
pub(crate) fn draw_plot(
    series: &Series,
    scales: &DisplayScales,
    backend: &mut dyn Backend,
    bracket: FrameBracket,
) {
    let Some(frame) = series.frames.get(bracket.above) else {
        return;
    };
    if frame.row_count() == 0 {
        return;
    }

    backend.stroke_color(series.color);
    backend.stroke_width(series.line_width);
    backend.begin_path();
    for row in 0..frame.row_count() {
        let mut point = display_xy(frame, row, scales);
        if bracket.w2 != 0.0 {
            let below = &series.frames[bracket.above - 1];
            if row < below.row_count() {
                let prev = display_xy(below, row, scales);
                point = point * bracket.w1 + prev * bracket.w2;
            }
        }
        if row == 0 {
            backend.move_to(point);
        } else {
            backend.line_to(point);
        }
    }
    backend.stroke();
}
