// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extrusion operations - turning a 2D panel section into a prism
//!
//! The solid is kept exact: a planar section swept along +Z from `z = 0`
//! to `z = depth`. Nothing is tessellated here.

use crate::error::{Error, Result};
use crate::shape::Shape2D;
use nalgebra::Point3;

/// A right prism: `section` swept along the Z axis by `depth`
#[derive(Debug, Clone, PartialEq)]
pub struct ExtrudedSolid {
    pub section: Shape2D,
    pub depth: f64,
}

impl ExtrudedSolid {
    /// Thickness of the solid along Z
    #[inline]
    pub fn thickness(&self) -> f64 {
        self.depth
    }

    /// Area of the cross section
    pub fn section_area(&self) -> f64 {
        self.section.area()
    }

    pub fn volume(&self) -> f64 {
        self.section.area() * self.depth
    }

    /// Number of through-holes in the section
    pub fn hole_count(&self) -> usize {
        self.section.hole_count()
    }

    /// Axis-aligned bounding box
    pub fn bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        self.section.bounds().map(|(min, max)| {
            (
                Point3::new(min.x, min.y, 0.0),
                Point3::new(max.x, max.y, self.depth),
            )
        })
    }
}

/// Extrude a 2D shape along the Z axis
pub fn extrude_shape(shape: &Shape2D, depth: f64) -> Result<ExtrudedSolid> {
    if !depth.is_finite() || depth <= 0.0 {
        return Err(Error::InvalidExtrusion(format!("Depth must be positive, got {}", depth)));
    }

    if shape.is_empty() {
        return Err(Error::EmptyGeometry("Cannot extrude an empty section".to_string()));
    }

    Ok(ExtrudedSolid {
        section: shape.clone(),
        depth,
    })
}
