// Copyright 2026 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scatter rendering: static, time-interpolated, and fully animated circles.

extern crate alloc;

use alloc::vec::Vec;

use flipbook_core::{Aesthetic, AestheticData, Backend, Vec4f, vec2, vec4};

use crate::plot::{FrameBracket, Series};
use crate::scale::DisplayScales;

/// Radius used when a frame has no size channel.
pub(crate) const DEFAULT_RADIUS: f32 = 1.0;

/// Maps one row into display space: `(pixel x, pixel y, colormap position,
/// radius)`.
///
/// An absent color channel maps to the bottom of the color scale; an absent
/// size channel maps to [`DEFAULT_RADIUS`].
fn display_row(
    frame: &AestheticData,
    row: usize,
    scales: &DisplayScales,
    has_color: bool,
    has_size: bool,
) -> Vec4f {
    let x = frame.value(row, Aesthetic::X).unwrap_or(0.0);
    let y = frame.value(row, Aesthetic::Y).unwrap_or(0.0);
    let color = if has_color {
        scales.to_display(
            Aesthetic::Color,
            frame.value(row, Aesthetic::Color).unwrap_or(0.0),
        )
    } else {
        0.0
    };
    let size = if has_size {
        scales.to_display(
            Aesthetic::Size,
            frame.value(row, Aesthetic::Size).unwrap_or(0.0),
        )
    } else {
        DEFAULT_RADIUS
    };
    vec4(
        scales.to_display(Aesthetic::X, x),
        scales.to_display(Aesthetic::Y, y),
        color,
        size,
    )
}

/// Draws one time-slice: one filled circle per row, blended between the
/// bracketing frames when the requested time falls between two of them.
pub(crate) fn draw_plot(
    series: &Series,
    scales: &DisplayScales,
    backend: &mut dyn Backend,
    bracket: FrameBracket,
) {
    let Some(frame) = series.frames.get(bracket.above) else {
        return;
    };
    let has_color = frame.has(Aesthetic::Color);
    let has_size = frame.has(Aesthetic::Size);

    for row in 0..frame.row_count() {
        let mut display = display_row(frame, row, scales, has_color, has_size);
        if bracket.w2 != 0.0 {
            let below = &series.frames[bracket.above - 1];
            if row < below.row_count() {
                let prev = display_row(below, row, scales, has_color, has_size);
                display = display * bracket.w1 + prev * bracket.w2;
            }
        }
        backend.fill_color(series.colormap.to_color(display[2]));
        backend.circle(vec2(display[0], display[1]), display[3]);
    }
}

/// Draws the full animation: one animated circle per row, with one keyframe
/// per frame in timestamp order, sealed after each row.
pub(crate) fn draw_frames(series: &Series, scales: &DisplayScales, backend: &mut dyn Backend) {
    let rows = series
        .frames
        .iter()
        .map(AestheticData::row_count)
        .max()
        .unwrap_or(0);
    let presence: Vec<(bool, bool)> = series
        .frames
        .iter()
        .map(|f| (f.has(Aesthetic::Color), f.has(Aesthetic::Size)))
        .collect();

    for row in 0..rows {
        for (f, frame) in series.frames.iter().enumerate() {
            if row >= frame.row_count() {
                continue;
            }
            let (has_color, has_size) = presence[f];
            let display = display_row(frame, row, scales, has_color, has_size);
            backend.fill_color(series.colormap.to_color(display[2]));
            backend.add_animated_circle(vec2(display[0], display[1]), display[3], series.times[f]);
        }
        backend.end_animated_circle();
    }
}
