// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry kernel abstraction
//!
//! The panel generator only needs a handful of solid-modeling primitives.
//! They are expressed as a trait so generation can run against the built-in
//! polygon kernel or any other backend (including test doubles).

use crate::bool2d::{is_valid_contour, subtract_all_2d};
use crate::error::{Error, Result};
use crate::extrusion::{extrude_shape, ExtrudedSolid};
use crate::profile::{create_circle, create_rectangle, create_rounded_rectangle};
use crate::shape::Shape2D;
use nalgebra::Vector2;

/// Default number of segments used to approximate a full circle
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 20;

/// Primitive operations the panel generator needs from a geometry backend.
///
/// All 2D primitives are created centered at the origin.
pub trait GeometryKernel {
    /// Planar region type
    type Shape2D: Clone;
    /// Solid type produced by extrusion
    type Shape3D;

    /// Axis-aligned rectangle
    fn rectangle(&mut self, width: f64, height: f64) -> Result<Self::Shape2D>;

    fn circle(&mut self, radius: f64) -> Result<Self::Shape2D>;

    /// Axis-aligned rectangle with all four corners rounded by `radius`
    fn rounded_rectangle(&mut self, width: f64, height: f64, radius: f64) -> Result<Self::Shape2D>;

    fn translate(&mut self, shape: &Self::Shape2D, offset: Vector2<f64>) -> Result<Self::Shape2D>;

    /// Remove every cutout from `base` in one operation.
    fn subtract(
        &mut self,
        base: &Self::Shape2D,
        cutouts: &[Self::Shape2D],
    ) -> Result<Self::Shape2D>;

    /// Sweep `shape` along +Z by `depth`.
    fn extrude(&mut self, shape: &Self::Shape2D, depth: f64) -> Result<Self::Shape3D>;
}

/// Polygon kernel backed by i_overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayKernel {
    /// Segments per full circle
    pub circle_segments: usize,
}

impl OverlayKernel {
    pub fn new(circle_segments: usize) -> Self {
        Self {
            circle_segments: circle_segments.max(3),
        }
    }

    #[inline]
    fn corner_segments(&self) -> usize {
        (self.circle_segments / 4).max(1)
    }
}

impl Default for OverlayKernel {
    fn default() -> Self {
        Self::new(DEFAULT_CIRCLE_SEGMENTS)
    }
}

fn check_dimension(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidProfile(format!("{} must be positive, got {}", name, value)))
    }
}

impl GeometryKernel for OverlayKernel {
    type Shape2D = Shape2D;
    type Shape3D = ExtrudedSolid;

    fn rectangle(&mut self, width: f64, height: f64) -> Result<Shape2D> {
        check_dimension("Width", width)?;
        check_dimension("Height", height)?;
        Ok(create_rectangle(width, height).into())
    }

    fn circle(&mut self, radius: f64) -> Result<Shape2D> {
        check_dimension("Radius", radius)?;
        Ok(create_circle(radius, self.circle_segments).into())
    }

    fn rounded_rectangle(&mut self, width: f64, height: f64, radius: f64) -> Result<Shape2D> {
        check_dimension("Width", width)?;
        check_dimension("Height", height)?;
        if !radius.is_finite() || radius < 0.0 {
            return Err(Error::InvalidProfile(format!(
                "Corner radius must be non-negative, got {}",
                radius
            )));
        }
        Ok(create_rounded_rectangle(width, height, radius, self.corner_segments()).into())
    }

    fn translate(&mut self, shape: &Shape2D, offset: Vector2<f64>) -> Result<Shape2D> {
        Ok(shape.translated(offset))
    }

    fn subtract(&mut self, base: &Shape2D, cutouts: &[Shape2D]) -> Result<Shape2D> {
        // Every cutout must reach the clip set
        let degenerate = cutouts
            .iter()
            .flat_map(|c| c.profiles.iter())
            .any(|p| !is_valid_contour(&p.outer));
        if degenerate {
            return Err(Error::InvalidProfile("Cutout is too small to subtract".to_string()));
        }

        let result = subtract_all_2d(base, cutouts);
        if result.is_empty() && !base.is_empty() {
            return Err(Error::EmptyGeometry("Cutouts remove the entire panel".to_string()));
        }
        Ok(result)
    }

    fn extrude(&mut self, shape: &Shape2D, depth: f64) -> Result<ExtrudedSolid> {
        extrude_shape(shape, depth)
    }
}
