// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON reports printed by the CLI.

use panelsmith_core::catalog::{
    size_options, HOLE_LAYOUTS, HORIZONTAL_PITCHES, VERTICAL_PITCHES,
};
use panelsmith_core::{FeatureClass, FeatureType, FrameName, HolePosition};
use panelsmith_geometry::{GeneratedPanel, OverlayKernel, Shape2D};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GenerateSummary {
    pub outline: OutlineSummary,
    pub screw_holes: Vec<ScrewHoleSummary>,
    pub features: Vec<FeatureSummary>,
    pub solid: SolidSummary,
    pub previews: Vec<BoundsSummary>,
}

#[derive(Debug, Serialize)]
pub struct OutlineSummary {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Serialize)]
pub struct ScrewHoleSummary {
    pub position: HolePosition,
    pub center: [f64; 2],
    pub radius: f64,
}

#[derive(Debug, Serialize)]
pub struct FeatureSummary {
    pub index: usize,
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    pub size: f64,
    pub center: [f64; 2],
    pub class: FeatureClass,
}

#[derive(Debug, Serialize)]
pub struct SolidSummary {
    pub thickness: f64,
    pub area: f64,
    pub volume: f64,
    pub holes: usize,
    pub pieces: usize,
}

#[derive(Debug, Serialize)]
pub struct BoundsSummary {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl GenerateSummary {
    pub fn from_panel(panel: &GeneratedPanel<OverlayKernel>) -> Self {
        let layout = &panel.layout;
        Self {
            outline: OutlineSummary {
                width: layout.width,
                height: layout.height,
            },
            screw_holes: layout
                .screw_holes
                .iter()
                .map(|h| ScrewHoleSummary {
                    position: h.position,
                    center: [h.center.x, h.center.y],
                    radius: h.radius,
                })
                .collect(),
            features: layout
                .features
                .iter()
                .map(|f| FeatureSummary {
                    index: f.index,
                    feature_type: f.feature.feature_type,
                    size: f.feature.size,
                    center: [f.center.x, f.center.y],
                    class: f.class,
                })
                .collect(),
            solid: SolidSummary {
                thickness: panel.solid.thickness(),
                area: panel.solid.section_area(),
                volume: panel.solid.volume(),
                holes: panel.solid.hole_count(),
                pieces: panel.solid.section.profiles.len(),
            },
            previews: panel.preview_shapes.iter().filter_map(bounds_of).collect(),
        }
    }
}

fn bounds_of(shape: &Shape2D) -> Option<BoundsSummary> {
    shape.bounds().map(|(min, max)| BoundsSummary {
        min: [min.x, min.y],
        max: [max.x, max.y],
    })
}

#[derive(Debug, Serialize)]
pub struct CatalogSummary {
    pub vertical_pitches: Vec<VerticalPitchEntry>,
    pub horizontal_pitches: Vec<HorizontalPitchEntry>,
    pub hole_layouts: Vec<HoleLayoutEntry>,
    pub feature_types: Vec<FeatureTypeEntry>,
    pub frames: Vec<FrameEntry>,
}

#[derive(Debug, Serialize)]
pub struct VerticalPitchEntry {
    pub index: usize,
    pub display: &'static str,
    pub units: u32,
    pub panel_height: f64,
    pub screw_span_height: f64,
}

#[derive(Debug, Serialize)]
pub struct HorizontalPitchEntry {
    pub index: usize,
    pub hp: f64,
    pub screw_holes: u8,
    pub width: f64,
}

#[derive(Debug, Serialize)]
pub struct HoleLayoutEntry {
    pub index: usize,
    pub display: &'static str,
    pub positions: &'static [HolePosition],
}

#[derive(Debug, Serialize)]
pub struct FeatureTypeEntry {
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    pub display: &'static str,
    pub sizes: Vec<SizeEntry>,
}

#[derive(Debug, Serialize)]
pub struct SizeEntry {
    pub display: &'static str,
    pub size: f64,
}

#[derive(Debug, Serialize)]
pub struct FrameEntry {
    pub name: FrameName,
    pub display: &'static str,
}

impl CatalogSummary {
    pub fn collect() -> Self {
        Self {
            vertical_pitches: VERTICAL_PITCHES
                .iter()
                .enumerate()
                .map(|(index, v)| VerticalPitchEntry {
                    index,
                    display: v.display,
                    units: v.nominal_units,
                    panel_height: v.panel_height,
                    screw_span_height: v.screw_span_height,
                })
                .collect(),
            horizontal_pitches: HORIZONTAL_PITCHES
                .iter()
                .enumerate()
                .map(|(index, h)| HorizontalPitchEntry {
                    index,
                    hp: h.hp,
                    screw_holes: h.screw_hole_count,
                    width: h.actual_width,
                })
                .collect(),
            hole_layouts: HOLE_LAYOUTS
                .iter()
                .enumerate()
                .map(|(index, l)| HoleLayoutEntry {
                    index,
                    display: l.display,
                    positions: l.positions,
                })
                .collect(),
            feature_types: FeatureType::ALL
                .into_iter()
                .map(|feature_type| FeatureTypeEntry {
                    feature_type,
                    display: feature_type.display_name(),
                    sizes: size_options(feature_type)
                        .iter()
                        .map(|o| SizeEntry {
                            display: o.display,
                            size: o.size,
                        })
                        .collect(),
                })
                .collect(),
            frames: FrameName::ALL
                .into_iter()
                .map(|name| FrameEntry {
                    name,
                    display: name.display_name(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelsmith_core::{Feature, PanelModel, Position};
    use panelsmith_geometry::PanelGenerator;

    #[test]
    fn test_generate_summary_json() {
        let model = PanelModel::new(2, 5, 0)
            .with_feature(Feature::new(FeatureType::Led, 4.0, Position::default()))
            .with_feature(Feature::new(
                FeatureType::Led,
                4.0,
                Position::new(1000.0, 0.0, FrameName::Center),
            ));
        let panel = PanelGenerator::new().generate(&model).unwrap();
        let json = serde_json::to_value(GenerateSummary::from_panel(&panel)).unwrap();

        assert_eq!(json["outline"]["width"], 40.30);
        assert_eq!(json["screw_holes"][0]["position"], "tl");
        assert_eq!(json["features"][0]["type"], "led");
        assert_eq!(json["features"][0]["class"], "subtractive");
        assert_eq!(json["features"][1]["class"], "out_of_bounds");
        assert_eq!(json["solid"]["holes"], 3);
        assert_eq!(json["previews"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_catalog_summary_tables() {
        let catalog = CatalogSummary::collect();
        assert_eq!(catalog.vertical_pitches.len(), 4);
        assert_eq!(catalog.horizontal_pitches.len(), 17);
        assert_eq!(catalog.hole_layouts.len(), 5);
        assert_eq!(catalog.feature_types.len(), 5);
        assert_eq!(catalog.frames.len(), 9);

        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["frames"][0]["name"], "center");
    }
}
