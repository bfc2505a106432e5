// Copyright 2026 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-surface interface plots render onto.
//!
//! Rendering is immediate-mode: a draw call walks its data once and issues a
//! bounded sequence of primitive calls, with no suspension or re-entry. The
//! animated-circle primitives are keyframe builders: each
//! [`Backend::add_animated_circle`] call appends one keyframe to the current
//! animated shape, and [`Backend::end_animated_circle`] seals it so the
//! surface can assemble a single animated glyph.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;

use crate::bounds::Bounds2f;
use crate::vector::Vec2f;

/// A drawing surface consuming plot primitives.
pub trait Backend {
    /// Sets the fill paint for subsequent filled primitives.
    fn fill_color(&mut self, color: Color);

    /// Sets the stroke paint for subsequent stroked primitives.
    fn stroke_color(&mut self, color: Color);

    /// Sets the stroke width for subsequent stroked primitives.
    fn stroke_width(&mut self, width: f32);

    /// Fills a circle at `center` with the current fill paint.
    fn circle(&mut self, center: Vec2f, radius: f32);

    /// Appends one keyframe to the animated circle under construction.
    fn add_animated_circle(&mut self, center: Vec2f, radius: f32, time: f32);

    /// Seals the animated circle under construction.
    fn end_animated_circle(&mut self);

    /// Starts a new path.
    fn begin_path(&mut self);

    /// Moves the path cursor without drawing.
    fn move_to(&mut self, point: Vec2f);

    /// Extends the path with a line segment.
    fn line_to(&mut self, point: Vec2f);

    /// Strokes the current path with the current stroke paint and width.
    fn stroke(&mut self);

    /// Fills an axis-aligned rectangle with the current fill paint.
    fn rect(&mut self, bounds: Bounds2f);

    /// Returns true if the surface assembles native animated primitives.
    ///
    /// Surfaces without native animation are rendered one interpolated
    /// time-slice at a time instead.
    fn supports_animation(&self) -> bool {
        false
    }
}

/// One recorded primitive call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// `fill_color(color)`.
    FillColor(Color),
    /// `stroke_color(color)`.
    StrokeColor(Color),
    /// `stroke_width(width)`.
    StrokeWidth(f32),
    /// `circle(center, radius)`.
    Circle {
        /// Circle center in pixels.
        center: Vec2f,
        /// Circle radius in pixels.
        radius: f32,
    },
    /// `add_animated_circle(center, radius, time)`.
    AnimatedCircle {
        /// Keyframe center in pixels.
        center: Vec2f,
        /// Keyframe radius in pixels.
        radius: f32,
        /// Keyframe time.
        time: f32,
    },
    /// `end_animated_circle()`.
    EndAnimatedCircle,
    /// `begin_path()`.
    BeginPath,
    /// `move_to(point)`.
    MoveTo(Vec2f),
    /// `line_to(point)`.
    LineTo(Vec2f),
    /// `stroke()`.
    Stroke,
    /// `rect(bounds)`.
    Rect(Bounds2f),
}

/// A [`Backend`] that records every call, for tests and golden comparisons.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    /// Every primitive call, in issue order.
    pub commands: Vec<DrawCommand>,
    animation: bool,
}

impl RecordingBackend {
    /// Creates a recorder without native animation support.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder that reports native animation support.
    pub fn with_animation() -> Self {
        Self {
            commands: Vec::new(),
            animation: true,
        }
    }

    /// Returns the recorded fill colors, in issue order.
    pub fn fill_colors(&self) -> Vec<Color> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillColor(color) => Some(*color),
                _ => None,
            })
            .collect()
    }

    /// Returns the recorded `(center, radius)` circles, in issue order.
    pub fn circles(&self) -> Vec<(Vec2f, f32)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, radius } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }
}

impl Backend for RecordingBackend {
    fn fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn stroke_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::StrokeWidth(width));
    }

    fn circle(&mut self, center: Vec2f, radius: f32) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    fn add_animated_circle(&mut self, center: Vec2f, radius: f32, time: f32) {
        self.commands.push(DrawCommand::AnimatedCircle {
            center,
            radius,
            time,
        });
    }

    fn end_animated_circle(&mut self) {
        self.commands.push(DrawCommand::EndAnimatedCircle);
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, point: Vec2f) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Vec2f) {
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn rect(&mut self, bounds: Bounds2f) {
        self.commands.push(DrawCommand::Rect(bounds));
    }

    fn supports_animation(&self) -> bool {
        self.animation
    }
}
