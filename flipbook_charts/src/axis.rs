// Copyright 2026 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The axis: tick layout, plot construction, and grid drawing.
//!
//! An axis owns a pixel-space rectangle, the data-space limits it has
//! observed, and a list of child plots. Tick layout is rebuilt from scratch by
//! [`Axis::update_tick_information`]; it is never patched incrementally, so
//! the same inputs always produce the same layout.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use flipbook_core::{
    Aesthetic, AestheticData, Backend, Bounds2f, Bounds4f, Vec2f, default_color, vec2,
};
use peniko::color::palette::css;

use crate::plot::{Plot, PlotId};
use crate::scale::{DisplayScales, LinearScale};
use crate::transform::Transform;

/// Radius an absent or minimal size channel maps to, in pixels.
const MIN_POINT_RADIUS: f32 = 1.0;
/// Radius the top of the size channel maps to, in pixels.
const MAX_POINT_RADIUS: f32 = 10.0;

/// Tick layout: parallel ordered sequences of data values and pixel positions
/// for each axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickInfo {
    /// X tick values in data space.
    pub x_values: Vec<f32>,
    /// X tick positions in pixel space.
    pub x_positions: Vec<f32>,
    /// Y tick values in data space.
    pub y_values: Vec<f32>,
    /// Y tick positions in pixel space.
    pub y_positions: Vec<f32>,
}

impl TickInfo {
    fn clear(&mut self) {
        self.x_values.clear();
        self.x_positions.clear();
        self.y_values.clear();
        self.y_positions.clear();
    }
}

/// A plot area: pixel rectangle, observed data limits, tick layout, styling
/// defaults, and the child plots drawn inside it.
#[derive(Clone, Debug)]
pub struct Axis {
    pixels: Bounds2f,
    limits: Bounds4f,
    sig_digits: i32,
    x_tick_count: Option<usize>,
    y_tick_count: Option<usize>,
    tick_length: f32,
    line_width: f32,
    font_size: f32,
    font_face: String,
    legend: bool,
    tick_info: TickInfo,
    plots: Vec<Plot>,
}

impl Axis {
    /// Creates an axis over a pixel rectangle, with no data limits observed
    /// yet.
    pub fn new(pixels: Bounds2f) -> Self {
        Self {
            pixels,
            limits: Bounds4f::empty(),
            sig_digits: 2,
            x_tick_count: None,
            y_tick_count: None,
            tick_length: 10.0,
            line_width: 3.0,
            font_size: 18.0,
            font_face: String::from("Roboto"),
            legend: false,
            tick_info: TickInfo::default(),
            plots: Vec::new(),
        }
    }

    /// Requests an explicit number of x ticks.
    pub fn with_x_tick_count(mut self, count: usize) -> Self {
        self.x_tick_count = Some(count);
        self
    }

    /// Requests an explicit number of y ticks.
    pub fn with_y_tick_count(mut self, count: usize) -> Self {
        self.y_tick_count = Some(count);
        self
    }

    /// Sets the number of significant digits tick spacing is rounded to.
    pub fn with_sig_digits(mut self, digits: i32) -> Self {
        self.sig_digits = digits;
        self
    }

    /// Sets the tick mark length in pixels.
    pub fn with_tick_length(mut self, length: f32) -> Self {
        self.tick_length = length;
        self
    }

    /// Sets the default line width in pixels.
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Sets the label font face.
    pub fn with_font_face(mut self, face: impl Into<String>) -> Self {
        self.font_face = face.into();
        self
    }

    /// Enables or disables the legend flag.
    pub fn with_legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    /// Returns the axis pixel rectangle.
    pub fn pixels(&self) -> Bounds2f {
        self.pixels
    }

    /// Returns the observed per-channel data limits.
    pub fn limits(&self) -> Bounds4f {
        self.limits
    }

    /// Returns the current tick layout.
    pub fn tick_info(&self) -> &TickInfo {
        &self.tick_info
    }

    /// Returns the label font face.
    pub fn font_face(&self) -> &str {
        &self.font_face
    }

    /// Returns the label font size.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the tick mark length in pixels.
    pub fn tick_length(&self) -> f32 {
        self.tick_length
    }

    /// Returns true if a legend was requested.
    pub fn legend(&self) -> bool {
        self.legend
    }

    /// Returns the number of child plots.
    pub fn plot_count(&self) -> usize {
        self.plots.len()
    }

    /// Returns a child plot by handle.
    pub fn plot(&self, id: PlotId) -> Option<&Plot> {
        self.plots.get(id.0)
    }

    /// Returns a child plot by handle, for styling after construction.
    pub fn plot_mut(&mut self, id: PlotId) -> Option<&mut Plot> {
        self.plots.get_mut(id.0)
    }

    /// Constructs a scatter plot child from frame 0 of `data`.
    pub fn points(&mut self, data: &AestheticData, transform: Transform) -> PlotId {
        self.add_plot(Plot::points(), transform, data)
    }

    /// Constructs a line plot child from frame 0 of `data`.
    pub fn line(&mut self, data: &AestheticData, transform: Transform) -> PlotId {
        self.add_plot(Plot::line(), transform, data)
    }

    /// Constructs a histogram plot child from frame 0 of `data`.
    pub fn histogram(&mut self, data: &AestheticData, transform: Transform) -> PlotId {
        self.add_plot(Plot::histogram(), transform, data)
    }

    fn add_plot(&mut self, mut plot: Plot, transform: Transform, data: &AestheticData) -> PlotId {
        plot.set_transform(transform);
        plot.add_frame(data, 0.0);
        plot.set_color(default_color(self.plots.len()));
        plot.set_line_width(self.line_width);
        plot.resize(self.pixels);
        self.limits.union(&plot.limits());
        self.plots.push(plot);
        PlotId(self.plots.len() - 1)
    }

    /// Appends an animation frame to a child plot, folding its limits into
    /// the axis.
    pub fn add_frame(&mut self, id: PlotId, data: &AestheticData, time: f32) {
        let Some(plot) = self.plots.get_mut(id.0) else {
            return;
        };
        plot.add_frame(data, time);
        let limits = plot.limits();
        self.limits.union(&limits);
    }

    /// Moves the axis to a new pixel rectangle and resizes every child.
    pub fn resize(&mut self, pixels: Bounds2f) {
        self.pixels = pixels;
        for plot in &mut self.plots {
            plot.resize(pixels);
        }
    }

    /// Returns the per-channel display scales for the current limits and
    /// pixel rectangle.
    ///
    /// Channels that never observed a value get a unit domain, so everything
    /// on them maps to the bottom of the scale's range.
    pub fn display_scales(&self) -> DisplayScales {
        let (x0, x1) = self.channel_domain(Aesthetic::X);
        let (y0, y1) = self.channel_domain(Aesthetic::Y);
        let (c0, c1) = self.channel_domain(Aesthetic::Color);
        let (s0, s1) = self.channel_domain(Aesthetic::Size);
        DisplayScales {
            x: LinearScale::new((x0, x1), (self.pixels.min[0], self.pixels.max[0])),
            // Pixel y grows downward while data y grows upward.
            y: LinearScale::new((y0, y1), (self.pixels.max[1], self.pixels.min[1])),
            color: LinearScale::new((c0, c1), (0.0, 1.0)),
            size: LinearScale::new((s0, s1), (MIN_POINT_RADIUS, MAX_POINT_RADIUS)),
        }
    }

    fn channel_domain(&self, aesthetic: Aesthetic) -> (f32, f32) {
        let i = aesthetic.index();
        if self.limits.is_empty_axis(i) {
            (0.0, 1.0)
        } else {
            (self.limits.min[i], self.limits.max[i])
        }
    }

    /// Computes the number of ticks per axis.
    ///
    /// Explicitly configured counts are used as-is. When only one axis is
    /// configured, the other is derived through the on-screen aspect ratio so
    /// tick spacing looks uniform; when neither is, the y axis defaults to 5.
    pub fn calculate_num_ticks(&self) -> Vec2f {
        match (self.x_tick_count, self.y_tick_count) {
            (Some(nx), Some(ny)) => vec2(nx as f32, ny as f32),
            (nx, ny) => {
                let pixel_ratio = self.pixels.delta()[0] / self.pixels.delta()[1];
                match (nx, ny) {
                    (Some(nx), None) => {
                        let n = nx as f32;
                        vec2(n, (n / pixel_ratio).floor())
                    }
                    (None, Some(ny)) => {
                        let n = ny as f32;
                        vec2((n * pixel_ratio).floor(), n)
                    }
                    _ => vec2((5.0 * pixel_ratio).floor(), 5.0),
                }
            }
        }
    }

    /// Rebuilds the tick layout from the current limits and pixel rectangle.
    ///
    /// The previous layout is discarded entirely; calling this twice with the
    /// same state produces the same layout.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "tick counts are small non-negative integers"
    )]
    pub fn update_tick_information(&mut self) {
        let n_ticks = self.calculate_num_ticks();

        let mut xy_limits = Bounds2f::new(
            vec2(self.limits.min[0], self.limits.min[1]),
            vec2(self.limits.max[0], self.limits.max[1]),
        );

        // An inverted axis never observed a value; use a unit range there.
        for i in 0..2 {
            if xy_limits.max[i] < xy_limits.min[i] {
                xy_limits.min[i] = 0.0;
                xy_limits.max[i] = 1.0;
            }
        }

        // A presentable spacing between ticks, from the requested tick count.
        let tick_dx = (xy_limits.delta() / n_ticks).round_off(self.sig_digits);

        // The lowest tick at an exact multiple of the spacing, at or above the
        // data minimum.
        let tick_min = (xy_limits.min / tick_dx).ceil() * tick_dx;

        let tick_dx_pixels = tick_dx * self.pixels.delta() / xy_limits.delta();
        let x_scale = LinearScale::new(
            (xy_limits.min[0], xy_limits.max[0]),
            (self.pixels.min[0], self.pixels.max[0]),
        );
        let y_scale = LinearScale::new(
            (xy_limits.min[1], xy_limits.max[1]),
            (self.pixels.max[1], self.pixels.min[1]),
        );
        let tick_min_pixels = vec2(x_scale.map(tick_min[0]), y_scale.map(tick_min[1]));

        self.tick_info.clear();

        for i in 0..n_ticks[0] as usize {
            self.tick_info
                .x_values
                .push(tick_min[0] + i as f32 * tick_dx[0]);
            self.tick_info
                .x_positions
                .push(tick_min_pixels[0] + i as f32 * tick_dx_pixels[0]);
        }

        // Pixel y decreases as data y increases, so y steps are subtracted.
        for i in 0..n_ticks[1] as usize {
            self.tick_info
                .y_values
                .push(tick_min[1] + i as f32 * tick_dx[1]);
            self.tick_info
                .y_positions
                .push(tick_min_pixels[1] - i as f32 * tick_dx_pixels[1]);
        }
    }

    /// Renders one time-slice: grid lines at every tick, then every child
    /// plot interpolated at `time`.
    pub fn draw(&mut self, backend: &mut dyn Backend, time: f32) {
        self.update_tick_information();
        self.draw_grid(backend);
        let scales = self.display_scales();
        for plot in &self.plots {
            plot.draw_plot(&scales, backend, time);
        }
    }

    /// Renders the full animation for surfaces with native animated
    /// primitives (see [`Backend::supports_animation`]).
    pub fn draw_frames(&mut self, backend: &mut dyn Backend) {
        self.update_tick_information();
        self.draw_grid(backend);
        let scales = self.display_scales();
        for plot in &self.plots {
            plot.draw_frames(&scales, backend);
        }
    }

    fn draw_grid(&self, backend: &mut dyn Backend) {
        backend.stroke_color(css::BLACK.with_alpha(40.0 / 255.0));
        backend.stroke_width(self.line_width * 0.5);
        for &x in &self.tick_info.x_positions {
            self.grid_line(backend, vec2(x, self.pixels.min[1]), vec2(x, self.pixels.max[1]));
        }
        for &y in &self.tick_info.y_positions {
            self.grid_line(backend, vec2(self.pixels.min[0], y), vec2(self.pixels.max[0], y));
        }
    }

    fn grid_line(&self, backend: &mut dyn Backend, from: Vec2f, to: Vec2f) {
        backend.begin_path();
        backend.move_to(from);
        backend.line_to(to);
        backend.stroke();
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;

    use flipbook_core::{DrawCommand, RecordingBackend, default_color};

    use super::*;

    fn square_axis() -> Axis {
        Axis::new(Bounds2f::new(vec2(0.0, 0.0), vec2(100.0, 100.0)))
    }

    fn wide_axis() -> Axis {
        Axis::new(Bounds2f::new(vec2(0.0, 0.0), vec2(200.0, 100.0)))
    }

    fn unit_data() -> AestheticData {
        AestheticData::new()
            .x(vec![0.0, 1.0])
            .unwrap()
            .y(vec![0.0, 1.0])
            .unwrap()
    }

    #[test]
    fn configured_tick_counts_pass_through_unchanged() {
        let axis = wide_axis().with_x_tick_count(4).with_y_tick_count(6);
        assert_eq!(axis.calculate_num_ticks(), vec2(4.0, 6.0));
    }

    #[test]
    fn a_single_configured_count_derives_the_other_from_the_aspect_ratio() {
        let axis = wide_axis().with_y_tick_count(4);
        assert_eq!(axis.calculate_num_ticks(), vec2(8.0, 4.0));

        let axis = wide_axis().with_x_tick_count(4);
        assert_eq!(axis.calculate_num_ticks(), vec2(4.0, 2.0));
    }

    #[test]
    fn unconfigured_tick_counts_default_to_five_on_y() {
        assert_eq!(square_axis().calculate_num_ticks(), vec2(5.0, 5.0));
        assert_eq!(wide_axis().calculate_num_ticks(), vec2(10.0, 5.0));
    }

    #[test]
    fn tick_values_stay_within_one_step_of_the_data_range() {
        let mut axis = square_axis();
        axis.points(&unit_data(), Transform::Identity);
        axis.update_tick_information();

        let ticks = axis.tick_info();
        let n = axis.calculate_num_ticks();
        assert_eq!(ticks.x_values.len(), n[0] as usize);
        assert_eq!(ticks.y_values.len(), n[1] as usize);

        let step = 1.0 / n[1];
        for &v in ticks.x_values.iter().chain(&ticks.y_values) {
            assert!(v >= -step && v <= 1.0 + step, "tick {v} outside range");
        }
    }

    #[test]
    fn tick_update_is_idempotent() {
        let mut axis = square_axis();
        axis.points(&unit_data(), Transform::Identity);
        axis.update_tick_information();
        let first = axis.tick_info().clone();
        axis.update_tick_information();
        assert_eq!(*axis.tick_info(), first);
    }

    #[test]
    fn empty_limits_fall_back_to_the_unit_range() {
        let mut axis = square_axis();
        axis.update_tick_information();

        let ticks = axis.tick_info();
        assert_eq!(ticks.x_values[0], 0.0);
        assert_eq!(ticks.y_values[0], 0.0);
        // Data 0 sits at the left and bottom edges of the pixel rectangle.
        assert_eq!(ticks.x_positions[0], 0.0);
        assert_eq!(ticks.y_positions[0], 100.0);
    }

    #[test]
    fn y_tick_positions_climb_up_the_screen() {
        let mut axis = square_axis();
        axis.points(&unit_data(), Transform::Identity);
        axis.update_tick_information();

        let positions = &axis.tick_info().y_positions;
        for pair in positions.windows(2) {
            assert!(pair[1] < pair[0], "pixel y must decrease: {pair:?}");
        }
    }

    #[test]
    fn constructed_plots_take_successive_palette_colors() {
        let mut axis = square_axis();
        let first = axis.points(&unit_data(), Transform::Identity);
        let second = axis.line(&unit_data(), Transform::Identity);

        assert_eq!(axis.plot(first).unwrap().color(), default_color(0));
        assert_eq!(axis.plot(second).unwrap().color(), default_color(1));
        assert_eq!(axis.plot_count(), 2);
    }

    #[test]
    fn construction_merges_data_limits_into_the_axis() {
        let mut axis = square_axis();
        let data = AestheticData::new()
            .x(vec![-2.0, 3.0])
            .unwrap()
            .y(vec![1.0, 5.0])
            .unwrap();
        axis.points(&data, Transform::Identity);

        let limits = axis.limits();
        assert_eq!(limits.min[0], -2.0);
        assert_eq!(limits.max[0], 3.0);
        assert_eq!(limits.min[1], 1.0);
        assert_eq!(limits.max[1], 5.0);
    }

    #[test]
    fn plot_handles_allow_later_styling() {
        let mut axis = square_axis();
        let id = axis.points(&unit_data(), Transform::Identity);
        let color = default_color(7);
        axis.plot_mut(id).unwrap().set_color(color);
        assert_eq!(axis.plot(id).unwrap().color(), color);
    }

    #[test]
    fn draw_strokes_one_grid_line_per_tick() {
        let mut axis = square_axis();
        axis.points(&unit_data(), Transform::Identity);
        let mut backend = RecordingBackend::new();
        axis.draw(&mut backend, 0.0);

        let ticks = axis.tick_info();
        let grid_lines = backend
            .commands
            .iter()
            .filter(|c| **c == DrawCommand::BeginPath)
            .count();
        assert_eq!(
            grid_lines,
            ticks.x_positions.len() + ticks.y_positions.len()
        );
        // The child plot rendered too.
        assert_eq!(backend.circles().len(), 2);
    }

    #[test]
    fn resize_propagates_to_children() {
        let mut axis = square_axis();
        let id = axis.points(&unit_data(), Transform::Identity);
        let target = Bounds2f::new(vec2(10.0, 10.0), vec2(50.0, 50.0));
        axis.resize(target);
        assert_eq!(axis.pixels(), target);
        assert_eq!(axis.plot(id).unwrap().pixels(), target);
    }
}
