// Copyright 2026 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core value types and collaborator interfaces for the Flipbook plotting
//! toolkit.
//!
//! This crate is the leaf layer under `flipbook_charts`:
//! - [`Vector`] is a fixed-size numeric tuple with element-wise operators.
//! - [`Bounds`] describes pixel rectangles and observed data limits.
//! - [`AestheticData`] is one animation frame's column table, keyed by
//!   [`Aesthetic`] channel.
//! - [`Colormap`] and the default palette map scalars and plot indexes to
//!   colors.
//! - [`Backend`] is the drawing surface plots render onto;
//!   [`RecordingBackend`] captures the primitive stream for tests.
//!
//! Rendering backends, text shaping, and input handling live downstream and
//! are out of scope here.

#![no_std]

extern crate alloc;

mod backend;
mod bounds;
mod color;
mod data;
mod vector;

pub use backend::{Backend, DrawCommand, RecordingBackend};
pub use bounds::{Bounds, Bounds2f, Bounds4f};
pub use color::{Colormap, DEFAULT_PALETTE, default_color};
pub use data::{Aesthetic, AestheticData, DataError};
pub use vector::{Truthy, Vec2b, Vec2f, Vec3f, Vec4f, Vector, vec2, vec3, vec4};
