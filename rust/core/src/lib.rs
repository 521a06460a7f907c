// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Panelsmith Core
//!
//! Declarative model of a modular-synth faceplate and the static catalog it
//! refers to.
//!
//! ## Overview
//!
//! - **Catalog**: vertical pitch (U), horizontal pitch (HP), screw hole
//!   layouts and feature size presets
//! - **Frames**: nine named anchor points that feature offsets are measured from
//! - **Classification**: decides whether a feature is cut or only previewed
//! - **Documents**: JSON import/export of a [`PanelModel`]
//!
//! ## Quick Start
//!
//! ```rust
//! use panelsmith_core::{classify, FeatureClass, FeatureType, PanelModel};
//!
//! let mut model = PanelModel::default();
//! let idx = model.add_feature(FeatureType::Led);
//!
//! let width = model.horizontal_pitch().unwrap().actual_width;
//! let height = model.vertical_pitch().unwrap().panel_height;
//! assert_eq!(classify(&model.features[idx], width, height), FeatureClass::Subtractive);
//! ```
//!
//! Geometry generation lives in `panelsmith-geometry`.

pub mod catalog;
pub mod classify;
pub mod document;
pub mod error;
pub mod feature;
pub mod frame;
pub mod model;

pub use catalog::{HoleLayout, HolePosition, HorizontalPitch, SizeOption, VerticalPitch};
pub use classify::{classify, classify_point, FeatureClass};
pub use document::{import_document, PanelDocument};
pub use error::{CatalogField, Error, Result};
pub use feature::{Feature, FeatureType, Position};
pub use frame::{resolve_absolute_position, resolve_anchor, FrameName};
pub use model::PanelModel;
