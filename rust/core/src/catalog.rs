// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reference catalog of panel presets.
//!
//! Static lookup tables for vertical pitch (rack units), horizontal pitch
//! (HP), screw hole layouts and feature size options. Dimensions are in
//! millimetres. The tables are never mutated; lookups by index fail with
//! [`Error::IndexOutOfRange`] naming the table.

use crate::error::{CatalogField, Error, Result};
use crate::feature::FeatureType;
use crate::frame::{resolve_anchor, FrameName};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size used when a feature type somehow has no size options.
const FALLBACK_FEATURE_SIZE: f64 = 5.0;

/// Tolerance when matching an HP value from an imported document.
const HP_MATCH_EPSILON: f64 = 1e-9;

/// Vertical pitch preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalPitch {
    pub display: &'static str,
    pub nominal_units: u32,
    pub panel_height: f64,
    /// Distance between the top and bottom screw hole rows.
    pub screw_span_height: f64,
}

/// Horizontal pitch preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPitch {
    pub hp: f64,
    pub screw_hole_count: u8,
    /// Real panel width, slightly under `hp * 5.08` to leave fitting clearance.
    pub actual_width: f64,
}

/// Corner position of a mounting screw hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HolePosition {
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "br")]
    BottomRight,
}

impl HolePosition {
    pub const ALL: [HolePosition; 4] = [
        HolePosition::TopLeft,
        HolePosition::TopRight,
        HolePosition::BottomLeft,
        HolePosition::BottomRight,
    ];

    /// Parse a wire name such as `"tl"`.
    pub fn from_name(name: &str) -> Option<Self> {
        HolePosition::ALL.into_iter().find(|pos| pos.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HolePosition::TopLeft => "tl",
            HolePosition::TopRight => "tr",
            HolePosition::BottomLeft => "bl",
            HolePosition::BottomRight => "br",
        }
    }

    /// Unit direction of this corner: (-1 | 1, -1 | 1).
    #[inline]
    pub fn signs(self) -> (f64, f64) {
        match self {
            HolePosition::TopLeft => (-1.0, 1.0),
            HolePosition::TopRight => (1.0, 1.0),
            HolePosition::BottomLeft => (-1.0, -1.0),
            HolePosition::BottomRight => (1.0, -1.0),
        }
    }
}

impl fmt::Display for HolePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screw hole layout preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleLayout {
    pub display: &'static str,
    pub positions: &'static [HolePosition],
}

/// One selectable size for a feature type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeOption {
    pub display: &'static str,
    pub size: f64,
}

#[rustfmt::skip]
pub static VERTICAL_PITCHES: &[VerticalPitch] = &[
    VerticalPitch { display: "1U Doepfer tiles", nominal_units: 1, panel_height: 128.50, screw_span_height: 122.5 },
    VerticalPitch { display: "1U Intellijel tiles", nominal_units: 1, panel_height: 128.50, screw_span_height: 122.5 },
    VerticalPitch { display: "3U Standard Eurorack Size", nominal_units: 3, panel_height: 128.50, screw_span_height: 122.5 },
    VerticalPitch { display: "5U Moog-format", nominal_units: 5, panel_height: 128.50, screw_span_height: 122.5 },
];

#[rustfmt::skip]
pub static HORIZONTAL_PITCHES: &[HorizontalPitch] = &[
    HorizontalPitch { hp: 1.0, screw_hole_count: 2, actual_width: 5.00 },
    HorizontalPitch { hp: 1.5, screw_hole_count: 2, actual_width: 7.50 },
    HorizontalPitch { hp: 2.0, screw_hole_count: 2, actual_width: 9.80 },
    HorizontalPitch { hp: 4.0, screw_hole_count: 2, actual_width: 20.00 },
    HorizontalPitch { hp: 6.0, screw_hole_count: 2, actual_width: 30.00 },
    HorizontalPitch { hp: 8.0, screw_hole_count: 2, actual_width: 40.30 },
    HorizontalPitch { hp: 10.0, screw_hole_count: 2, actual_width: 50.50 },
    HorizontalPitch { hp: 12.0, screw_hole_count: 4, actual_width: 60.60 },
    HorizontalPitch { hp: 14.0, screw_hole_count: 4, actual_width: 70.80 },
    HorizontalPitch { hp: 16.0, screw_hole_count: 4, actual_width: 80.90 },
    HorizontalPitch { hp: 18.0, screw_hole_count: 4, actual_width: 91.30 },
    HorizontalPitch { hp: 20.0, screw_hole_count: 4, actual_width: 101.30 },
    HorizontalPitch { hp: 21.0, screw_hole_count: 4, actual_width: 106.30 },
    HorizontalPitch { hp: 22.0, screw_hole_count: 4, actual_width: 111.40 },
    HorizontalPitch { hp: 24.0, screw_hole_count: 4, actual_width: 121.60 },
    HorizontalPitch { hp: 28.0, screw_hole_count: 4, actual_width: 141.90 },
    HorizontalPitch { hp: 42.0, screw_hole_count: 4, actual_width: 213.00 },
];

#[rustfmt::skip]
pub static HOLE_LAYOUTS: &[HoleLayout] = &[
    HoleLayout {
        display: "Top left + Bottom right",
        positions: &[HolePosition::TopLeft, HolePosition::BottomRight],
    },
    HoleLayout {
        display: "Top right + Bottom left",
        positions: &[HolePosition::TopRight, HolePosition::BottomLeft],
    },
    HoleLayout {
        display: "Top right + Bottom right",
        positions: &[HolePosition::TopRight, HolePosition::BottomRight],
    },
    HoleLayout {
        display: "Top left + Bottom left",
        positions: &[HolePosition::TopLeft, HolePosition::BottomLeft],
    },
    HoleLayout {
        display: "Two top + two bottom",
        positions: &[
            HolePosition::TopLeft,
            HolePosition::TopRight,
            HolePosition::BottomLeft,
            HolePosition::BottomRight,
        ],
    },
];

#[rustfmt::skip]
static PATCH_POINT_SIZES: &[SizeOption] = &[
    SizeOption { display: "3.5mm / 1/8\"", size: 3.5 },
    SizeOption { display: "6.35mm / 1/4\"", size: 6.35 },
];

#[rustfmt::skip]
static ROTARY_POT_SIZES: &[SizeOption] = &[
    SizeOption { display: "6mm shaft", size: 6.0 },
    SizeOption { display: "6.3mm shaft", size: 6.3 },
];

#[rustfmt::skip]
static SLIDE_POT_SIZES: &[SizeOption] = &[
    SizeOption { display: "20mm travel", size: 20.0 },
    SizeOption { display: "25mm travel", size: 25.0 },
    SizeOption { display: "30mm travel", size: 30.0 },
    SizeOption { display: "35mm travel", size: 35.0 },
    SizeOption { display: "40mm travel", size: 40.0 },
    SizeOption { display: "45mm travel", size: 45.0 },
];

#[rustfmt::skip]
static TOGGLE_SWITCH_SIZES: &[SizeOption] = &[
    SizeOption { display: "TS", size: 8.0 },
    SizeOption { display: "MTS", size: 6.0 },
    SizeOption { display: "SMTS", size: 6.3 },
];

#[rustfmt::skip]
static LED_SIZES: &[SizeOption] = &[
    SizeOption { display: "Standard 4mm", size: 4.0 },
    SizeOption { display: "Small 2mm", size: 2.0 },
    SizeOption { display: "Large 6mm", size: 6.0 },
];

/// Look up a vertical pitch preset.
pub fn vertical_pitch_at(index: usize) -> Result<&'static VerticalPitch> {
    lookup(VERTICAL_PITCHES, index, CatalogField::VerticalPitch)
}

/// Look up a horizontal pitch preset.
pub fn horizontal_pitch_at(index: usize) -> Result<&'static HorizontalPitch> {
    lookup(HORIZONTAL_PITCHES, index, CatalogField::HorizontalPitch)
}

/// Look up a screw hole layout preset.
pub fn hole_layout_at(index: usize) -> Result<&'static HoleLayout> {
    lookup(HOLE_LAYOUTS, index, CatalogField::HoleLayout)
}

/// Size options offered for a feature type, default first.
pub fn size_options(feature_type: FeatureType) -> &'static [SizeOption] {
    match feature_type {
        FeatureType::PatchPoint => PATCH_POINT_SIZES,
        FeatureType::RotaryPot => ROTARY_POT_SIZES,
        FeatureType::SlidePot => SLIDE_POT_SIZES,
        FeatureType::ToggleSwitch => TOGGLE_SWITCH_SIZES,
        FeatureType::Led => LED_SIZES,
    }
}

/// Default size of a new feature of the given type.
pub fn default_size_for(feature_type: FeatureType) -> f64 {
    size_options(feature_type)
        .first()
        .map(|opt| opt.size)
        .unwrap_or(FALLBACK_FEATURE_SIZE)
}

/// Default size for a feature type given by its wire name.
pub fn default_size_for_name(name: &str) -> Result<f64> {
    Ok(default_size_for(name.parse()?))
}

/// Anchor of a frame on a panel of the given size.
#[inline]
pub fn frame_anchor(frame: FrameName, width: f64, height: f64) -> Point2<f64> {
    resolve_anchor(frame, width, height)
}

/// Index of the first vertical preset with the given nominal unit count.
pub fn find_vertical_pitch(nominal_units: u32) -> Option<usize> {
    VERTICAL_PITCHES
        .iter()
        .position(|p| p.nominal_units == nominal_units)
}

/// Index of the horizontal preset with the given HP value.
pub fn find_horizontal_pitch(hp: f64) -> Option<usize> {
    HORIZONTAL_PITCHES
        .iter()
        .position(|p| (p.hp - hp).abs() < HP_MATCH_EPSILON)
}

/// Index of the hole layout containing exactly these positions, in any order.
pub fn find_hole_layout(positions: &[HolePosition]) -> Option<usize> {
    let wanted = sorted_unique(positions);
    HOLE_LAYOUTS
        .iter()
        .position(|layout| sorted_unique(layout.positions) == wanted)
}

fn sorted_unique(positions: &[HolePosition]) -> Vec<HolePosition> {
    let mut out = positions.to_vec();
    out.sort();
    out.dedup();
    out
}

fn lookup<T>(table: &'static [T], index: usize, field: CatalogField) -> Result<&'static T> {
    table.get(index).ok_or(Error::IndexOutOfRange {
        field,
        index,
        len: table.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_in_range() {
        let v = vertical_pitch_at(2).unwrap();
        assert_eq!(v.nominal_units, 3);
        assert_eq!(v.panel_height, 128.50);

        let h = horizontal_pitch_at(5).unwrap();
        assert_eq!(h.hp, 8.0);
        assert_eq!(h.actual_width, 40.30);

        let holes = hole_layout_at(0).unwrap();
        assert_eq!(holes.positions, &[HolePosition::TopLeft, HolePosition::BottomRight]);
    }

    #[test]
    fn test_lookup_out_of_range() {
        assert_eq!(
            vertical_pitch_at(4).unwrap_err(),
            Error::IndexOutOfRange { field: CatalogField::VerticalPitch, index: 4, len: 4 }
        );
        assert_eq!(
            horizontal_pitch_at(17).unwrap_err(),
            Error::IndexOutOfRange { field: CatalogField::HorizontalPitch, index: 17, len: 17 }
        );
        assert_eq!(
            hole_layout_at(5).unwrap_err(),
            Error::IndexOutOfRange { field: CatalogField::HoleLayout, index: 5, len: 5 }
        );
    }

    #[test]
    fn test_screw_span_inside_panel() {
        for preset in VERTICAL_PITCHES {
            assert!(preset.screw_span_height < preset.panel_height, "{}", preset.display);
        }
    }

    #[test]
    fn test_width_strictly_increasing_with_hp() {
        for pair in HORIZONTAL_PITCHES.windows(2) {
            assert!(pair[0].hp < pair[1].hp);
            assert!(pair[0].actual_width < pair[1].actual_width);
        }
        for preset in HORIZONTAL_PITCHES {
            assert!(matches!(preset.screw_hole_count, 2 | 4));
        }
    }

    #[test]
    fn test_hole_layouts_are_well_formed() {
        for layout in HOLE_LAYOUTS {
            let n = layout.positions.len();
            assert!(n == 2 || n == 4, "{}", layout.display);
            assert_eq!(sorted_unique(layout.positions).len(), n);
        }
    }

    #[test]
    fn test_default_sizes() {
        assert_eq!(default_size_for(FeatureType::PatchPoint), 3.5);
        assert_eq!(default_size_for(FeatureType::RotaryPot), 6.0);
        assert_eq!(default_size_for(FeatureType::SlidePot), 20.0);
        assert_eq!(default_size_for(FeatureType::ToggleSwitch), 8.0);
        assert_eq!(default_size_for(FeatureType::Led), 4.0);
        for ty in FeatureType::ALL {
            assert!(!size_options(ty).is_empty());
        }
    }

    #[test]
    fn test_default_size_for_name() {
        assert_eq!(default_size_for_name("slidepot").unwrap(), 20.0);
        assert_eq!(
            default_size_for_name("theremin").unwrap_err(),
            Error::UnknownFeatureType("theremin".to_string())
        );
    }

    #[test]
    fn test_find_presets() {
        assert_eq!(find_vertical_pitch(3), Some(2));
        assert_eq!(find_vertical_pitch(1), Some(0));
        assert_eq!(find_vertical_pitch(2), None);

        assert_eq!(find_horizontal_pitch(1.5), Some(1));
        assert_eq!(find_horizontal_pitch(42.0), Some(16));
        assert_eq!(find_horizontal_pitch(3.0), None);

        assert_eq!(
            find_hole_layout(&[HolePosition::BottomRight, HolePosition::TopLeft]),
            Some(0)
        );
        assert_eq!(find_hole_layout(&HolePosition::ALL), Some(4));
        assert_eq!(find_hole_layout(&[HolePosition::TopLeft]), None);
        assert_eq!(find_hole_layout(&[]), None);
    }

    #[test]
    fn test_frame_anchor_matches_resolver() {
        let anchor = frame_anchor(FrameName::TopRight, 100.0, 50.0);
        assert_eq!(anchor, Point2::new(50.0, 25.0));
    }
}
