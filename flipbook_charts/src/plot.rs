// Copyright 2026 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of plot kinds an axis can own.
//!
//! Plot kinds share one capability surface ([`Plot`]): frames are added with
//! timestamps, styling mutates in place, and the two render entry points are
//! [`Plot::draw_plot`] (one interpolated time-slice) and [`Plot::draw_frames`]
//! (native animated primitives). The kind is selected at construction and
//! never changes.

extern crate alloc;

use alloc::vec::Vec;

use flipbook_core::{AestheticData, Backend, Bounds2f, Bounds4f, Colormap};
use peniko::Color;

use crate::scale::DisplayScales;
use crate::transform::Transform;
use crate::{histogram, line, points};

/// A non-owning handle to a plot constructed on an axis.
///
/// The axis owns its plots; callers keep this copyable handle for later
/// styling through `Axis::plot_mut`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlotId(pub usize);

/// The state shared by every plot kind: one aesthetic table per animation
/// frame, the ordered frame timestamps, and styling.
#[derive(Clone, Debug)]
pub(crate) struct Series {
    pub(crate) frames: Vec<AestheticData>,
    pub(crate) times: Vec<f32>,
    pub(crate) transform: Transform,
    pub(crate) color: Color,
    pub(crate) colormap: Colormap,
    pub(crate) line_width: f32,
    pub(crate) pixels: Bounds2f,
}

impl Series {
    fn new() -> Self {
        Self {
            frames: Vec::new(),
            times: Vec::new(),
            transform: Transform::Identity,
            color: flipbook_core::default_color(0),
            colormap: Colormap::default(),
            line_width: 3.0,
            pixels: Bounds2f::empty(),
        }
    }

    fn add_frame(&mut self, data: &AestheticData, time: f32) {
        self.frames.push(self.transform.apply(data));
        self.times.push(time);
    }

    fn limits(&self) -> Bounds4f {
        let mut out = Bounds4f::empty();
        for frame in &self.frames {
            out.union(&frame.limits());
        }
        out
    }
}

/// Which two frames bracket a requested render time, and how to blend them.
///
/// `above` is the index of the frame at or after the time (clamped to the
/// frame range). `w1` weights frame `above` and `w2 = 1 - w1` weights frame
/// `above - 1`; `w2 == 0` means the time lands exactly on `above` and no
/// interpolation is needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameBracket {
    /// Index of the frame at or after the requested time.
    pub above: usize,
    /// Interpolation weight toward frame `above`.
    pub w1: f32,
    /// Interpolation weight toward frame `above - 1`.
    pub w2: f32,
}

impl FrameBracket {
    /// Computes the bracket for `time` over ordered frame `times`.
    ///
    /// Times outside the frame range clamp to the first or last frame with no
    /// interpolation.
    pub fn at(times: &[f32], time: f32) -> Self {
        let exact = |above| Self {
            above,
            w1: 1.0,
            w2: 0.0,
        };
        let Some((&first, _)) = times.split_first() else {
            return exact(0);
        };
        if time <= first {
            return exact(0);
        }
        let last = times.len() - 1;
        if time >= times[last] {
            return exact(last);
        }
        let above = times
            .iter()
            .position(|&t| t >= time)
            .expect("time is below the last frame time");
        let span = times[above] - times[above - 1];
        if span <= 0.0 {
            return exact(above);
        }
        let w1 = (time - times[above - 1]) / span;
        Self {
            above,
            w1,
            w2: 1.0 - w1,
        }
    }
}

/// A scatter plot of filled circles.
#[derive(Clone, Debug)]
pub struct PointsPlot {
    pub(crate) series: Series,
}

/// A stroked polyline through the row sequence.
#[derive(Clone, Debug)]
pub struct LinePlot {
    pub(crate) series: Series,
}

/// Filled bars over binned data, drawn from the zero baseline.
#[derive(Clone, Debug)]
pub struct HistogramPlot {
    pub(crate) series: Series,
}

/// A plot owned by an axis: one of the closed set of plot kinds.
#[derive(Clone, Debug)]
pub enum Plot {
    /// Scatter points.
    Points(PointsPlot),
    /// A polyline.
    Line(LinePlot),
    /// A histogram.
    Histogram(HistogramPlot),
}

impl Plot {
    /// Creates an empty scatter plot.
    pub fn points() -> Self {
        Self::Points(PointsPlot {
            series: Series::new(),
        })
    }

    /// Creates an empty line plot.
    pub fn line() -> Self {
        Self::Line(LinePlot {
            series: Series::new(),
        })
    }

    /// Creates an empty histogram plot.
    pub fn histogram() -> Self {
        Self::Histogram(HistogramPlot {
            series: Series::new(),
        })
    }

    pub(crate) fn series(&self) -> &Series {
        match self {
            Self::Points(p) => &p.series,
            Self::Line(p) => &p.series,
            Self::Histogram(p) => &p.series,
        }
    }

    pub(crate) fn series_mut(&mut self) -> &mut Series {
        match self {
            Self::Points(p) => &mut p.series,
            Self::Line(p) => &mut p.series,
            Self::Histogram(p) => &mut p.series,
        }
    }

    /// Appends one animation frame.
    ///
    /// The plot's transform is applied to `data` before storage. Frames must
    /// be added in non-decreasing time order.
    pub fn add_frame(&mut self, data: &AestheticData, time: f32) {
        self.series_mut().add_frame(data, time);
    }

    /// Sets the transform applied to subsequently added frames.
    pub fn set_transform(&mut self, transform: Transform) {
        self.series_mut().transform = transform;
    }

    /// Sets the plot color (line stroke / bar fill).
    pub fn set_color(&mut self, color: Color) {
        self.series_mut().color = color;
    }

    /// Returns the plot color.
    pub fn color(&self) -> Color {
        self.series().color
    }

    /// Sets the colormap used for the color aesthetic.
    pub fn set_colormap(&mut self, colormap: Colormap) {
        self.series_mut().colormap = colormap;
    }

    /// Sets the stroke width used by stroked kinds.
    pub fn set_line_width(&mut self, width: f32) {
        self.series_mut().line_width = width;
    }

    /// Resizes the plot to a new pixel rectangle.
    pub fn resize(&mut self, pixels: Bounds2f) {
        self.series_mut().pixels = pixels;
    }

    /// Returns the pixel rectangle the plot was last sized to.
    pub fn pixels(&self) -> Bounds2f {
        self.series().pixels
    }

    /// Returns the ordered frame timestamps.
    pub fn times(&self) -> &[f32] {
        &self.series().times
    }

    /// Returns per-channel data limits over every stored frame.
    pub fn limits(&self) -> Bounds4f {
        self.series().limits()
    }

    /// Renders one time-slice: the frame at `time`, or the blend of the two
    /// frames bracketing it.
    pub fn draw_plot(&self, scales: &DisplayScales, backend: &mut dyn Backend, time: f32) {
        let series = self.series();
        let bracket = FrameBracket::at(&series.times, time);
        match self {
            Self::Points(_) => points::draw_plot(series, scales, backend, bracket),
            Self::Line(_) => line::draw_plot(series, scales, backend, bracket),
            Self::Histogram(_) => histogram::draw_plot(series, scales, backend, bracket),
        }
    }

    /// Renders the full animation as native animated primitives.
    ///
    /// Only the scatter kind has an animated primitive on the backend
    /// surface; the other kinds render their first frame statically.
    pub fn draw_frames(&self, scales: &DisplayScales, backend: &mut dyn Backend) {
        let series = self.series();
        let first = FrameBracket::at(&series.times, f32::NEG_INFINITY);
        match self {
            Self::Points(_) => points::draw_frames(series, scales, backend),
            Self::Line(_) => line::draw_plot(series, scales, backend, first),
            Self::Histogram(_) => histogram::draw_plot(series, scales, backend, first),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn bracket_clamps_outside_the_time_range() {
        let times = [0.0, 1.0, 2.0];
        assert_eq!(
            FrameBracket::at(&times, -1.0),
            FrameBracket {
                above: 0,
                w1: 1.0,
                w2: 0.0,
            }
        );
        assert_eq!(
            FrameBracket::at(&times, 5.0),
            FrameBracket {
                above: 2,
                w1: 1.0,
                w2: 0.0,
            }
        );
    }

    #[test]
    fn bracket_is_exact_on_frame_boundaries() {
        let times = [0.0, 1.0, 2.0];
        let b = FrameBracket::at(&times, 1.0);
        assert_eq!(b.above, 1);
        assert_eq!(b.w2, 0.0);
    }

    #[test]
    fn bracket_weights_sum_to_one_between_frames() {
        let times = [0.0, 2.0];
        let b = FrameBracket::at(&times, 0.5);
        assert_eq!(b.above, 1);
        assert!((b.w1 - 0.25).abs() < 1e-6, "w1 = {}", b.w1);
        assert!((b.w1 + b.w2 - 1.0).abs() < 1e-6, "weights must sum to 1");
    }

    #[test]
    fn bracket_of_no_frames_is_the_zeroth_exact_frame() {
        let b = FrameBracket::at(&[], 3.0);
        assert_eq!(b.above, 0);
        assert_eq!(b.w2, 0.0);
    }
}
