// Copyright 2026 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame data transforms.
//!
//! A [`Transform`] is assigned to a plot at construction time and applied to
//! every frame as it is added. Scatter and line plots use [`Transform::Identity`];
//! histograms use [`Transform::Bin`] to turn raw x samples into bin centers
//! and counts.

extern crate alloc;

use alloc::vec::Vec;

use flipbook_core::{Aesthetic, AestheticData};

/// A transform from an incoming frame to the frame a plot stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Store the frame as-is.
    Identity,
    /// Bucket the x column into `count` equal-width bins over its range,
    /// producing bin centers (x) and per-bin counts (y).
    Bin {
        /// Number of bins.
        count: usize,
    },
}

impl Transform {
    /// Applies this transform to one frame.
    pub fn apply(&self, frame: &AestheticData) -> AestheticData {
        match *self {
            Self::Identity => frame.clone(),
            Self::Bin { count } => bin_x(frame, count),
        }
    }
}

fn bin_x(frame: &AestheticData, count: usize) -> AestheticData {
    let Some(xs) = frame.column(Aesthetic::X) else {
        return frame.clone();
    };
    if count == 0 {
        return AestheticData::new();
    }

    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &x in xs {
        if !x.is_finite() {
            continue;
        }
        min = min.min(x);
        max = max.max(x);
    }
    if min > max {
        return AestheticData::new();
    }

    let width = (max - min) / count as f32;
    let mut counts = Vec::new();
    counts.resize(count, 0.0_f32);
    for &x in xs {
        if !x.is_finite() {
            continue;
        }
        let bin = if width == 0.0 {
            0
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "the quotient is clamped below the bin count"
            )]
            {
                (((x - min) / width) as usize).min(count - 1)
            }
        };
        counts[bin] += 1.0;
    }

    let centers: Vec<f32> = (0..count)
        .map(|i| min + width * (i as f32 + 0.5))
        .collect();

    AestheticData::new()
        .x(centers)
        .expect("a fresh table accepts its first column")
        .y(counts)
        .expect("centers and counts have the same length")
}
