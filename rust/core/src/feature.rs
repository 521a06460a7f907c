// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel features: the cutouts for jacks, pots, switches and LEDs.

use crate::error::{Error, Result};
use crate::frame::FrameName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of component a feature makes room for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureType {
    PatchPoint,
    #[serde(alias = "rotarypot")]
    RotaryPot,
    #[serde(alias = "slidepot")]
    SlidePot,
    ToggleSwitch,
    Led,
}

impl FeatureType {
    pub const ALL: [FeatureType; 5] = [
        FeatureType::PatchPoint,
        FeatureType::RotaryPot,
        FeatureType::SlidePot,
        FeatureType::ToggleSwitch,
        FeatureType::Led,
    ];

    /// Wire name used in panel documents.
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureType::PatchPoint => "patch_point",
            FeatureType::RotaryPot => "rotary_pot",
            FeatureType::SlidePot => "slide_pot",
            FeatureType::ToggleSwitch => "toggle_switch",
            FeatureType::Led => "led",
        }
    }

    /// Human-readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            FeatureType::PatchPoint => "Patch Point",
            FeatureType::RotaryPot => "Rotary Potentiometer",
            FeatureType::SlidePot => "Slide Potentiometer",
            FeatureType::ToggleSwitch => "Toggle Switch",
            FeatureType::Led => "LED",
        }
    }

    /// Slide pots are cut as a slot; everything else is a round hole.
    #[inline]
    pub fn is_slot(self) -> bool {
        matches!(self, FeatureType::SlidePot)
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "patch_point" => Ok(FeatureType::PatchPoint),
            "rotary_pot" | "rotarypot" => Ok(FeatureType::RotaryPot),
            "slide_pot" | "slidepot" => Ok(FeatureType::SlidePot),
            "toggle_switch" => Ok(FeatureType::ToggleSwitch),
            "led" => Ok(FeatureType::Led),
            other => Err(Error::UnknownFeatureType(other.to_string())),
        }
    }
}

/// Offset of a feature from a named anchor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "relativeTo", alias = "relative_to")]
    pub relative_to: FrameName,
}

impl Position {
    pub fn new(x: f64, y: f64, relative_to: FrameName) -> Self {
        Self { x, y, relative_to }
    }
}

/// A single cutout on the panel.
///
/// `size` is the hole diameter for round features and the travel length for
/// slide pots. Sizes outside the catalog options are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    pub size: f64,
    pub position: Position,
}

impl Feature {
    pub fn new(feature_type: FeatureType, size: f64, position: Position) -> Self {
        Self {
            feature_type,
            size,
            position,
        }
    }
}
