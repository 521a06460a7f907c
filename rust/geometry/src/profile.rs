// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 2D Profile definitions

use crate::bool2d::compute_signed_area;
use nalgebra::{Point2, Vector2};
use std::f64::consts::{FRAC_PI_2, PI};

/// 2D Profile with optional holes
#[derive(Debug, Clone, PartialEq)]
pub struct Profile2D {
    /// Outer boundary (counter-clockwise)
    pub outer: Vec<Point2<f64>>,
    /// Holes (clockwise)
    pub holes: Vec<Vec<Point2<f64>>>,
}

impl Profile2D {
    /// Create a new profile
    pub fn new(outer: Vec<Point2<f64>>) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Add a hole to the profile
    pub fn add_hole(&mut self, hole: Vec<Point2<f64>>) {
        self.holes.push(hole);
    }

    /// Copy of this profile moved by `offset`
    pub fn translated(&self, offset: Vector2<f64>) -> Self {
        let shift = |contour: &Vec<Point2<f64>>| -> Vec<Point2<f64>> {
            contour.iter().map(|p| *p + offset).collect()
        };
        Self {
            outer: shift(&self.outer),
            holes: self.holes.iter().map(shift).collect(),
        }
    }

    /// Enclosed area (outer minus holes)
    pub fn area(&self) -> f64 {
        let holes: f64 = self
            .holes
            .iter()
            .map(|h| compute_signed_area(h).abs())
            .sum();
        compute_signed_area(&self.outer).abs() - holes
    }

    /// Bounding box of the outer boundary
    pub fn bounds(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        crate::bool2d::contour_bounds(&self.outer)
    }
}

/// Create a rectangular profile centered at the origin
#[inline]
pub fn create_rectangle(width: f64, height: f64) -> Profile2D {
    let half_w = width / 2.0;
    let half_h = height / 2.0;

    Profile2D::new(vec![
        Point2::new(-half_w, -half_h),
        Point2::new(half_w, -half_h),
        Point2::new(half_w, half_h),
        Point2::new(-half_w, half_h),
    ])
}

/// Create a circular profile centered at the origin
///
/// The circle is approximated by a regular polygon with `segments` vertices
/// (at least 3) lying on the circle.
pub fn create_circle(radius: f64, segments: usize) -> Profile2D {
    let segments = segments.max(3);
    let outer = (0..segments)
        .map(|i| {
            let angle = 2.0 * PI * (i as f64) / (segments as f64);
            Point2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();

    Profile2D::new(outer)
}

/// Create a rectangle with rounded corners centered at the origin
///
/// `radius` is clamped to half the shorter side. Each corner arc uses
/// `corner_segments` edges.
pub fn create_rounded_rectangle(
    width: f64,
    height: f64,
    radius: f64,
    corner_segments: usize,
) -> Profile2D {
    let radius = radius.min(width.min(height) / 2.0);
    if radius <= 0.0 {
        return create_rectangle(width, height);
    }

    let corner_segments = corner_segments.max(1);
    let inset_x = width / 2.0 - radius;
    let inset_y = height / 2.0 - radius;

    // Counter-clockwise, starting with the bottom-right arc
    let corners = [
        (Point2::new(inset_x, -inset_y), -FRAC_PI_2),
        (Point2::new(inset_x, inset_y), 0.0),
        (Point2::new(-inset_x, inset_y), FRAC_PI_2),
        (Point2::new(-inset_x, -inset_y), PI),
    ];

    let mut outer = Vec::with_capacity(4 * (corner_segments + 1));
    for (center, start) in corners {
        for i in 0..=corner_segments {
            let angle = start + FRAC_PI_2 * (i as f64) / (corner_segments as f64);
            outer.push(center + Vector2::new(radius * angle.cos(), radius * angle.sin()));
        }
    }

    // Arcs meet without a straight edge when the radius spans the whole side
    outer.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if outer.len() > 1 && (outer[0] - outer[outer.len() - 1]).norm() < 1e-12 {
        outer.pop();
    }

    Profile2D::new(outer)
}
