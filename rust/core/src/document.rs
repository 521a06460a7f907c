// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON import/export of panel models.
//!
//! Documents carry catalog *values* (`vp` rack units, `hp`, hole positions)
//! rather than indices, so they survive catalog reordering. On import the
//! values are matched back to indices; a value with no match keeps the
//! current model's index. Structural problems (unknown feature type or
//! frame, missing feature list) fail the whole import.

use crate::catalog::{self, HolePosition};
use crate::error::{Error, Result};
use crate::feature::{Feature, FeatureType, Position};
use crate::frame::FrameName;
use crate::model::PanelModel;
use serde::{Deserialize, Serialize};

/// Exported form of a panel model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelDocument {
    /// Nominal rack units of the vertical pitch preset.
    pub vp: u32,
    pub hp: f64,
    pub holes: Vec<HolePosition>,
    pub features: Vec<Feature>,
}

impl PanelDocument {
    /// Export a model. Fails if any catalog index is invalid.
    pub fn from_model(model: &PanelModel) -> Result<Self> {
        Ok(Self {
            vp: model.vertical_pitch()?.nominal_units,
            hp: model.horizontal_pitch()?.hp,
            holes: model.hole_layout()?.positions.to_vec(),
            features: model.features.clone(),
        })
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// Import side: every field optional so defaults can be applied per field.

#[derive(Debug, Deserialize)]
struct RawDocument {
    vp: Option<f64>,
    hp: Option<f64>,
    #[serde(alias = "hole_positions")]
    holes: Option<Vec<String>>,
    features: Option<Vec<RawFeature>>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(rename = "type")]
    feature_type: Option<String>,
    size: Option<f64>,
    position: Option<RawPosition>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPosition {
    x: Option<f64>,
    y: Option<f64>,
    #[serde(rename = "relativeTo", alias = "relative_to")]
    relative_to: Option<String>,
}

/// Import a JSON document on top of `current`.
///
/// Returns a new model; `current` only supplies fallback indices.
pub fn import_document(json: &str, current: &PanelModel) -> Result<PanelModel> {
    let raw: RawDocument = serde_json::from_str(json)?;

    let raw_features = raw.features.ok_or_else(|| {
        Error::MalformedImportDocument("missing `features` list".to_string())
    })?;

    let features = import_features(raw_features)?;

    Ok(PanelModel {
        vertical_pitch_index: match_vertical_pitch(raw.vp, current.vertical_pitch_index),
        horizontal_pitch_index: match_horizontal_pitch(raw.hp, current.horizontal_pitch_index),
        hole_layout_index: match_hole_layout(raw.holes.as_deref(), current.hole_layout_index),
        features,
    })
}

fn import_features(raw_features: Vec<RawFeature>) -> Result<Vec<Feature>> {
    let mut features = Vec::with_capacity(raw_features.len());

    for (index, raw) in raw_features.into_iter().enumerate() {
        let type_name = match raw.feature_type.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => {
                tracing::debug!(index, "Dropping imported feature without a type");
                continue;
            }
        };
        let feature_type: FeatureType = type_name.parse()?;

        let size = raw
            .size
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or_else(|| catalog::default_size_for(feature_type));

        let pos = raw.position.unwrap_or_default();
        let relative_to = match pos.relative_to.as_deref() {
            None | Some("") => FrameName::Center,
            Some(name) => name.parse()?,
        };

        features.push(Feature::new(
            feature_type,
            size,
            Position::new(pos.x.unwrap_or(0.0), pos.y.unwrap_or(0.0), relative_to),
        ));
    }

    Ok(features)
}

fn match_vertical_pitch(vp: Option<f64>, current: usize) -> usize {
    let nominal = match vp {
        Some(v) if v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 => v as u32,
        _ => {
            tracing::warn!(
                ?vp,
                current,
                "Imported vp is missing or not a unit count; keeping current"
            );
            return current;
        }
    };

    // Several presets share a unit count; keep the current one if it fits.
    let current_matches = catalog::vertical_pitch_at(current)
        .map(|p| p.nominal_units == nominal)
        .unwrap_or(false);
    if current_matches {
        return current;
    }

    catalog::find_vertical_pitch(nominal).unwrap_or_else(|| {
        tracing::warn!(vp = nominal, current, "No vertical pitch preset matches; keeping current");
        current
    })
}

fn match_horizontal_pitch(hp: Option<f64>, current: usize) -> usize {
    match hp.and_then(catalog::find_horizontal_pitch) {
        Some(index) => index,
        None => {
            tracing::warn!(?hp, current, "No horizontal pitch preset matches; keeping current");
            current
        }
    }
}

fn match_hole_layout(holes: Option<&[String]>, current: usize) -> usize {
    let positions: Option<Vec<HolePosition>> = holes.and_then(|names| {
        names
            .iter()
            .map(|name| HolePosition::from_name(name))
            .collect()
    });

    match positions.as_deref().and_then(catalog::find_hole_layout) {
        Some(index) => index,
        None => {
            tracing::warn!(?holes, current, "No hole layout matches; keeping current");
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogField;

    fn sample_model() -> PanelModel {
        PanelModel::new(2, 5, 0)
            .with_feature(Feature::new(
                FeatureType::Led,
                4.0,
                Position::new(0.0, 0.0, FrameName::Center),
            ))
            .with_feature(Feature::new(
                FeatureType::SlidePot,
                35.0,
                Position::new(-5.0, 12.5, FrameName::BottomCenter),
            ))
    }

    #[test]
    fn test_export_uses_catalog_values() {
        let doc = PanelDocument::from_model(&sample_model()).unwrap();
        assert_eq!(doc.vp, 3);
        assert_eq!(doc.hp, 8.0);
        assert_eq!(doc.holes, vec![HolePosition::TopLeft, HolePosition::BottomRight]);
        assert_eq!(doc.features.len(), 2);

        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(value["holes"], serde_json::json!(["tl", "br"]));
        assert_eq!(value["features"][1]["type"], "slide_pot");
        assert_eq!(value["features"][1]["position"]["relativeTo"], "bottomcenter");
    }

    #[test]
    fn test_export_rejects_bad_index() {
        let model = PanelModel::new(9, 0, 0);
        assert_eq!(
            PanelDocument::from_model(&model).unwrap_err(),
            Error::IndexOutOfRange { field: CatalogField::VerticalPitch, index: 9, len: 4 }
        );
    }

    #[test]
    fn test_round_trip() {
        let model = sample_model();
        let json = PanelDocument::from_model(&model).unwrap().to_json().unwrap();

        let imported = import_document(&json, &PanelModel::new(0, 0, 4)).unwrap();
        assert_eq!(imported, model);
    }

    #[test]
    fn test_round_trip_every_catalog_choice() {
        for hp_index in 0..catalog::HORIZONTAL_PITCHES.len() {
            for holes_index in 0..catalog::HOLE_LAYOUTS.len() {
                let model = PanelModel::new(3, hp_index, holes_index);
                let json = PanelDocument::from_model(&model).unwrap().to_json().unwrap();
                let imported = import_document(&json, &PanelModel::default()).unwrap();
                assert_eq!(imported, model);
            }
        }
    }

    #[test]
    fn test_shared_unit_count_keeps_current_preset() {
        // Index 1 (Intellijel) and index 0 (Doepfer) are both 1U.
        let json = r#"{"vp": 1, "hp": 4, "holes": ["tl", "br"], "features": []}"#;
        let from_intellijel = import_document(json, &PanelModel::new(1, 0, 0)).unwrap();
        assert_eq!(from_intellijel.vertical_pitch_index, 1);

        let from_3u = import_document(json, &PanelModel::new(2, 0, 0)).unwrap();
        assert_eq!(from_3u.vertical_pitch_index, 0);
    }

    #[test]
    fn test_unmatched_values_keep_current_indices() {
        let json = r#"{"vp": 7, "hp": 3, "holes": ["tl"], "features": []}"#;
        let current = PanelModel::new(3, 10, 2);
        let imported = import_document(json, &current).unwrap();
        assert_eq!(imported.vertical_pitch_index, 3);
        assert_eq!(imported.horizontal_pitch_index, 10);
        assert_eq!(imported.hole_layout_index, 2);
    }

    #[test]
    fn test_absent_values_keep_current_indices() {
        let imported = import_document(r#"{"features": []}"#, &PanelModel::new(0, 7, 4)).unwrap();
        assert_eq!(imported, PanelModel::new(0, 7, 4));
    }

    #[test]
    fn test_hole_order_does_not_matter() {
        let json = r#"{"vp": 3, "hp": 12, "holes": ["br", "bl", "tr", "tl"], "features": []}"#;
        let imported = import_document(json, &PanelModel::default()).unwrap();
        assert_eq!(imported.hole_layout_index, 4);
    }

    #[test]
    fn test_legacy_document_spellings() {
        let json = r#"{
            "vp": 3,
            "hp": 10,
            "hole_positions": ["tr", "bl"],
            "features": [
                {"type": "rotarypot", "size": 6.3, "position": {"x": 1, "y": 2, "relative_to": "topleft"}},
                {"type": "slidepot", "size": 25, "position": {"x": 0, "y": 0, "relative_to": "center"}}
            ]
        }"#;
        let imported = import_document(json, &PanelModel::default()).unwrap();
        assert_eq!(imported.horizontal_pitch_index, 6);
        assert_eq!(imported.hole_layout_index, 1);
        assert_eq!(imported.features[0].feature_type, FeatureType::RotaryPot);
        assert_eq!(imported.features[0].position.relative_to, FrameName::TopLeft);
        assert_eq!(imported.features[1].feature_type, FeatureType::SlidePot);
    }

    #[test]
    fn test_feature_without_type_is_dropped() {
        let json = r#"{"features": [
            {"size": 4, "position": {"x": 0, "y": 0, "relativeTo": "center"}},
            {"type": "", "size": 4},
            {"type": "led", "size": 4, "position": {"x": 3, "y": 0, "relativeTo": "center"}}
        ]}"#;
        let imported = import_document(json, &PanelModel::default()).unwrap();
        assert_eq!(imported.features.len(), 1);
        assert_eq!(imported.features[0].position.x, 3.0);
    }

    #[test]
    fn test_partial_feature_gets_defaults() {
        let json = r#"{"features": [
            {"type": "toggle_switch"},
            {"type": "patch_point", "size": 0, "position": {"y": 7.5}}
        ]}"#;
        let imported = import_document(json, &PanelModel::default()).unwrap();

        let switch = &imported.features[0];
        assert_eq!(switch.size, 8.0);
        assert_eq!(switch.position, Position::new(0.0, 0.0, FrameName::Center));

        let jack = &imported.features[1];
        assert_eq!(jack.size, 3.5);
        assert_eq!(jack.position, Position::new(0.0, 7.5, FrameName::Center));
    }

    #[test]
    fn test_unknown_names_fail_import() {
        let bad_type = r#"{"features": [{"type": "joystick", "size": 10}]}"#;
        assert_eq!(
            import_document(bad_type, &PanelModel::default()).unwrap_err(),
            Error::UnknownFeatureType("joystick".to_string())
        );

        let bad_frame = r#"{"features": [{"type": "led", "position": {"relativeTo": "middle"}}]}"#;
        assert_eq!(
            import_document(bad_frame, &PanelModel::default()).unwrap_err(),
            Error::UnknownFrameName("middle".to_string())
        );
    }

    #[test]
    fn test_malformed_documents() {
        let cases = [
            "",
            "not json",
            "[]",
            r#"{"vp": 3, "hp": 8}"#,
            r#"{"features": null}"#,
            r#"{"vp": "three", "features": []}"#,
        ];
        for json in cases {
            let err = import_document(json, &PanelModel::default()).unwrap_err();
            assert!(
                matches!(err, Error::MalformedImportDocument(_)),
                "{:?} -> {:?}",
                json,
                err
            );
        }
    }
}
