// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Declarative panel model.

use crate::catalog::{self, HoleLayout, HorizontalPitch, VerticalPitch};
use crate::error::Result;
use crate::feature::{Feature, FeatureType, Position};
use serde::{Deserialize, Serialize};

/// One faceplate design: catalog choices plus an ordered list of features.
///
/// Feature order is edit order only; it does not affect the cut geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelModel {
    pub vertical_pitch_index: usize,
    pub horizontal_pitch_index: usize,
    pub hole_layout_index: usize,
    pub features: Vec<Feature>,
}

impl Default for PanelModel {
    /// A 3U, 4 HP panel with top-left and bottom-right screws and no features.
    fn default() -> Self {
        Self {
            vertical_pitch_index: 2,
            horizontal_pitch_index: 3,
            hole_layout_index: 0,
            features: Vec::new(),
        }
    }
}

impl PanelModel {
    pub fn new(
        vertical_pitch_index: usize,
        horizontal_pitch_index: usize,
        hole_layout_index: usize,
    ) -> Self {
        Self {
            vertical_pitch_index,
            horizontal_pitch_index,
            hole_layout_index,
            features: Vec::new(),
        }
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    /// Append a feature of the given type at the panel center with its default size.
    ///
    /// Returns the index of the new feature.
    pub fn add_feature(&mut self, feature_type: FeatureType) -> usize {
        self.features.push(Feature::new(
            feature_type,
            catalog::default_size_for(feature_type),
            Position::default(),
        ));
        self.features.len() - 1
    }

    /// Remove the feature at `index`, if there is one.
    pub fn remove_feature(&mut self, index: usize) -> Option<Feature> {
        if index < self.features.len() {
            Some(self.features.remove(index))
        } else {
            None
        }
    }

    pub fn vertical_pitch(&self) -> Result<&'static VerticalPitch> {
        catalog::vertical_pitch_at(self.vertical_pitch_index)
    }

    pub fn horizontal_pitch(&self) -> Result<&'static HorizontalPitch> {
        catalog::horizontal_pitch_at(self.horizontal_pitch_index)
    }

    pub fn hole_layout(&self) -> Result<&'static HoleLayout> {
        catalog::hole_layout_at(self.hole_layout_index)
    }

    /// Check that every catalog index resolves.
    pub fn validate(&self) -> Result<()> {
        self.vertical_pitch()?;
        self.horizontal_pitch()?;
        self.hole_layout()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CatalogField, Error};
    use crate::frame::FrameName;

    #[test]
    fn test_default_model() {
        let model = PanelModel::default();
        assert_eq!(model.vertical_pitch().unwrap().nominal_units, 3);
        assert_eq!(model.horizontal_pitch().unwrap().hp, 4.0);
        assert_eq!(model.hole_layout().unwrap().positions.len(), 2);
        assert!(model.features.is_empty());
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_add_feature_uses_default_size() {
        let mut model = PanelModel::default();
        assert_eq!(model.add_feature(FeatureType::RotaryPot), 0);
        assert_eq!(model.add_feature(FeatureType::SlidePot), 1);

        let pot = &model.features[0];
        assert_eq!(pot.size, 6.0);
        assert_eq!(pot.position, Position::new(0.0, 0.0, FrameName::Center));
        assert_eq!(model.features[1].size, 20.0);
    }

    #[test]
    fn test_remove_feature() {
        let mut model = PanelModel::default();
        model.add_feature(FeatureType::Led);
        model.add_feature(FeatureType::PatchPoint);

        let removed = model.remove_feature(0).unwrap();
        assert_eq!(removed.feature_type, FeatureType::Led);
        assert_eq!(model.features.len(), 1);
        assert_eq!(model.features[0].feature_type, FeatureType::PatchPoint);

        assert!(model.remove_feature(5).is_none());
        assert_eq!(model.features.len(), 1);
    }

    #[test]
    fn test_validate_reports_first_bad_index() {
        let model = PanelModel::new(2, 40, 9);
        assert_eq!(
            model.validate().unwrap_err(),
            Error::IndexOutOfRange { field: CatalogField::HorizontalPitch, index: 40, len: 17 }
        );
    }

    #[test]
    fn test_serde_field_names() {
        let model = PanelModel::default();
        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value["verticalPitchIndex"], 2);
        assert_eq!(value["horizontalPitchIndex"], 3);
        assert_eq!(value["holeLayoutIndex"], 0);
    }
}
