// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Frames of reference for feature placement.
//!
//! Panel coordinates have their origin at the panel center, +x to the right
//! and +y up. A frame names one of nine anchor points on the panel outline;
//! a feature's offset is measured from that anchor.

use crate::error::{Error, Result};
use crate::feature::Feature;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named anchor point on a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameName {
    #[default]
    Center,
    TopCenter,
    BottomCenter,
    LeftCenter,
    RightCenter,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl FrameName {
    /// All frames, in the order the designer lists them.
    pub const ALL: [FrameName; 9] = [
        FrameName::Center,
        FrameName::TopCenter,
        FrameName::BottomCenter,
        FrameName::LeftCenter,
        FrameName::RightCenter,
        FrameName::TopLeft,
        FrameName::TopRight,
        FrameName::BottomLeft,
        FrameName::BottomRight,
    ];

    /// Wire name used in panel documents.
    pub fn as_str(self) -> &'static str {
        match self {
            FrameName::Center => "center",
            FrameName::TopCenter => "topcenter",
            FrameName::BottomCenter => "bottomcenter",
            FrameName::LeftCenter => "leftcenter",
            FrameName::RightCenter => "rightcenter",
            FrameName::TopLeft => "topleft",
            FrameName::TopRight => "topright",
            FrameName::BottomLeft => "bottomleft",
            FrameName::BottomRight => "bottomright",
        }
    }

    /// Human-readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            FrameName::Center => "Center",
            FrameName::TopCenter => "Top side, center",
            FrameName::BottomCenter => "Bottom side, center",
            FrameName::LeftCenter => "Left side, center",
            FrameName::RightCenter => "Right side, center",
            FrameName::TopLeft => "Top left corner",
            FrameName::TopRight => "Top right corner",
            FrameName::BottomLeft => "Bottom left corner",
            FrameName::BottomRight => "Bottom right corner",
        }
    }

    /// Anchor of this frame on a `width` x `height` panel.
    #[inline]
    pub fn anchor(self, width: f64, height: f64) -> Point2<f64> {
        resolve_anchor(self, width, height)
    }
}

impl fmt::Display for FrameName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FrameName::ALL
            .into_iter()
            .find(|frame| frame.as_str() == s)
            .ok_or_else(|| Error::UnknownFrameName(s.to_string()))
    }
}

/// Resolve the anchor point of a frame on a panel centered at the origin.
pub fn resolve_anchor(frame: FrameName, width: f64, height: f64) -> Point2<f64> {
    let half_w = width / 2.0;
    let half_h = height / 2.0;

    match frame {
        FrameName::Center => Point2::new(0.0, 0.0),
        FrameName::TopCenter => Point2::new(0.0, half_h),
        FrameName::BottomCenter => Point2::new(0.0, -half_h),
        FrameName::LeftCenter => Point2::new(-half_w, 0.0),
        FrameName::RightCenter => Point2::new(half_w, 0.0),
        FrameName::TopLeft => Point2::new(-half_w, half_h),
        FrameName::TopRight => Point2::new(half_w, half_h),
        FrameName::BottomLeft => Point2::new(-half_w, -half_h),
        FrameName::BottomRight => Point2::new(half_w, -half_h),
    }
}

/// Absolute panel position of a feature: its frame anchor plus its offset.
pub fn resolve_absolute_position(feature: &Feature, width: f64, height: f64) -> Point2<f64> {
    let anchor = resolve_anchor(feature.position.relative_to, width, height);
    anchor + Vector2::new(feature.position.x, feature.position.y)
}
