// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar regions made of one or more disjoint profiles.

use crate::profile::Profile2D;
use nalgebra::{Point2, Vector2};

/// A 2D region: a set of disjoint profiles, each with its own holes.
///
/// Primitive shapes hold a single profile. A boolean result may hold several
/// when a cutout splits the base apart, or none when it removes everything.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape2D {
    pub profiles: Vec<Profile2D>,
}

impl Shape2D {
    pub fn new(profiles: Vec<Profile2D>) -> Self {
        Self { profiles }
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Total enclosed area
    pub fn area(&self) -> f64 {
        self.profiles.iter().map(Profile2D::area).sum()
    }

    /// Total number of holes across all profiles
    pub fn hole_count(&self) -> usize {
        self.profiles.iter().map(|p| p.holes.len()).sum()
    }

    /// Bounding box over all profiles
    pub fn bounds(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        self.profiles
            .iter()
            .filter_map(Profile2D::bounds)
            .reduce(|(a_min, a_max), (b_min, b_max)| {
                (
                    Point2::new(a_min.x.min(b_min.x), a_min.y.min(b_min.y)),
                    Point2::new(a_max.x.max(b_max.x), a_max.y.max(b_max.y)),
                )
            })
    }

    /// Center of the bounding box
    pub fn center(&self) -> Option<Point2<f64>> {
        self.bounds().map(|(min, max)| nalgebra::center(&min, &max))
    }

    pub fn translated(&self, offset: Vector2<f64>) -> Self {
        Self {
            profiles: self.profiles.iter().map(|p| p.translated(offset)).collect(),
        }
    }
}

impl From<Profile2D> for Shape2D {
    fn from(profile: Profile2D) -> Self {
        Self {
            profiles: vec![profile],
        }
    }
}
