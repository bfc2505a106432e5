// Copyright 2026 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for the Flipbook plotting toolkit.
//!
//! This crate sits above `flipbook_core` and provides:
//! - **Display scales** mapping data values into pixel, colormap, and radius
//!   space, one per aesthetic channel.
//! - **The axis**, which computes tick layout for grid lines and labels and
//!   constructs child plots.
//! - **Plot kinds** (points, line, histogram) behind one capability surface,
//!   rendering static, time-interpolated, or natively animated frames onto a
//!   `flipbook_core::Backend`.
//!
//! Rendering is immediate-mode and single-threaded: every draw call walks
//! in-memory frames and issues a bounded, deterministic primitive sequence.

#![no_std]

extern crate alloc;

mod axis;
mod histogram;
mod line;
mod plot;
mod points;
mod scale;
mod transform;

pub use axis::{Axis, TickInfo};
pub use plot::{FrameBracket, HistogramPlot, LinePlot, Plot, PlotId, PointsPlot};
pub use scale::{DisplayScales, LinearScale};
pub use transform::Transform;
