// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Feature classification against the panel bounds.
//!
//! Only the feature's anchor point is tested, not its full footprint. A
//! large feature centred just inside the edge is still cut (and notches the
//! outline); one centred just outside is only previewed. Saved designs rely
//! on this, so it must stay a point test.

use crate::feature::Feature;
use crate::frame::resolve_absolute_position;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Whether a feature is physically cut from the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureClass {
    /// Inside the panel bounds; subtracted from the solid.
    Subtractive,
    /// Outside the panel bounds; shown as a flat preview only.
    OutOfBounds,
}

/// Classify an absolute position against a panel centered at the origin.
///
/// The boundary is inclusive: a point exactly on the outline is cut.
#[inline]
pub fn classify_point(point: &Point2<f64>, width: f64, height: f64) -> FeatureClass {
    if point.x.abs() <= width / 2.0 && point.y.abs() <= height / 2.0 {
        FeatureClass::Subtractive
    } else {
        FeatureClass::OutOfBounds
    }
}

/// Resolve a feature's position and classify it.
pub fn classify(feature: &Feature, width: f64, height: f64) -> FeatureClass {
    let pos = resolve_absolute_position(feature, width, height);
    classify_point(&pos, width, height)
}
