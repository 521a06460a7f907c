// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 2D Boolean Operations for Cutting Features out of a Panel Profile
//!
//! Polygon boolean operations using the i_overlay crate. All cutouts are
//! removed from the base region in a single difference. The non-zero fill
//! rule is used on both operands, so overlapping cutouts remove their union;
//! that is a property of this engine, callers should not depend on it.

use crate::profile::Profile2D;
use crate::shape::Shape2D;
use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;
use nalgebra::Point2;

/// Minimum area threshold - polygons smaller than this are considered degenerate
const MIN_AREA_THRESHOLD: f64 = 1e-10;

/// Perform 2D boolean difference: base - (cutout_1, cutout_2, ...)
///
/// Every resulting piece is kept, so a cutout that crosses the base and
/// splits it yields several profiles. An empty result means the cutouts
/// covered the whole base.
pub fn subtract_all_2d(base: &Shape2D, cutouts: &[Shape2D]) -> Shape2D {
    let subject = shape_to_paths(base);
    let clip: Vec<Vec<[f64; 2]>> = cutouts.iter().flat_map(shape_to_paths).collect();

    if subject.is_empty() || clip.is_empty() {
        return base.clone();
    }

    // Result is Vec<Vec<Vec<[f64; 2]>>> - Vec of shapes, each shape is Vec of contours
    let result = subject.overlay(&clip, OverlayRule::Difference, FillRule::NonZero);

    paths_to_shape(&result)
}

/// Check if a contour is valid (has area, not degenerate)
pub fn is_valid_contour(contour: &[Point2<f64>]) -> bool {
    if contour.len() < 3 {
        return false;
    }

    let area = compute_signed_area(contour).abs();
    area > MIN_AREA_THRESHOLD
}

/// Compute the signed area of a 2D contour
/// Positive = counter-clockwise, Negative = clockwise
pub fn compute_signed_area(contour: &[Point2<f64>]) -> f64 {
    if contour.len() < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    let n = contour.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area += contour[i].x * contour[j].y;
        area -= contour[j].x * contour[i].y;
    }

    area * 0.5
}

/// Ensure contour has counter-clockwise winding (positive area)
pub fn ensure_ccw(contour: &[Point2<f64>]) -> Vec<Point2<f64>> {
    if compute_signed_area(contour) < 0.0 {
        contour.iter().rev().cloned().collect()
    } else {
        contour.to_vec()
    }
}

/// Ensure contour has clockwise winding (for holes)
pub fn ensure_cw(contour: &[Point2<f64>]) -> Vec<Point2<f64>> {
    if compute_signed_area(contour) > 0.0 {
        contour.iter().rev().cloned().collect()
    } else {
        contour.to_vec()
    }
}

/// Compute bounding box of a contour
pub fn contour_bounds(contour: &[Point2<f64>]) -> Option<(Point2<f64>, Point2<f64>)> {
    let first = contour.first()?;
    let mut min = *first;
    let mut max = *first;

    for p in contour.iter().skip(1) {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }

    Some((min, max))
}

// ============================================================================
// Internal Helper Functions
// ============================================================================

/// Convert a shape to i_overlay path format
///
/// Outer boundaries are made counter-clockwise and holes clockwise so the
/// non-zero fill rule sees holes as empty.
fn shape_to_paths(shape: &Shape2D) -> Vec<Vec<[f64; 2]>> {
    shape.profiles.iter().flat_map(profile_to_paths).collect()
}

fn profile_to_paths(profile: &Profile2D) -> Vec<Vec<[f64; 2]>> {
    if !is_valid_contour(&profile.outer) {
        return Vec::new();
    }

    let mut paths = Vec::with_capacity(1 + profile.holes.len());
    paths.push(contour_to_path(&ensure_ccw(&profile.outer)));

    for hole in profile.holes.iter().filter(|h| is_valid_contour(h)) {
        paths.push(contour_to_path(&ensure_cw(hole)));
    }

    paths
}

/// Convert a Point2 contour to i_overlay path format
fn contour_to_path(contour: &[Point2<f64>]) -> Vec<[f64; 2]> {
    contour.iter().map(|p| [p.x, p.y]).collect()
}

fn path_to_contour(path: &[[f64; 2]]) -> Vec<Point2<f64>> {
    path.iter().map(|p| Point2::new(p[0], p[1])).collect()
}

/// Convert i_overlay result shapes back to a Shape2D
///
/// i_overlay returns Vec<Vec<Vec<[f64; 2]>>> where:
/// - Outer Vec: list of shapes
/// - Middle Vec: list of contours per shape (first is outer, rest are holes)
/// - Inner Vec: list of points per contour
fn paths_to_shape(shapes: &[Vec<Vec<[f64; 2]>>]) -> Shape2D {
    let mut profiles = Vec::with_capacity(shapes.len());

    for shape in shapes {
        let Some((outer, holes)) = shape.split_first() else {
            continue;
        };

        let outer = path_to_contour(outer);
        if !is_valid_contour(&outer) {
            continue;
        }

        let mut profile = Profile2D::new(ensure_ccw(&outer));
        for hole in holes {
            let hole = path_to_contour(hole);
            if is_valid_contour(&hole) {
                profile.add_hole(ensure_cw(&hole));
            }
        }
        profiles.push(profile);
    }

    Shape2D::new(profiles)
}
