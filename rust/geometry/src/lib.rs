// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panelsmith Geometry
//!
//! Builds faceplate geometry from a [`panelsmith_core::PanelModel`]: the
//! outline rectangle, mounting screw holes and feature cutouts, subtracted
//! in one boolean pass and extruded to panel thickness. The boolean and
//! extrusion primitives sit behind [`GeometryKernel`]; [`OverlayKernel`]
//! implements them with i_overlay polygons.
//!
//! ```rust
//! use panelsmith_core::{FeatureType, PanelModel};
//! use panelsmith_geometry::PanelGenerator;
//!
//! let mut model = PanelModel::default();
//! model.add_feature(FeatureType::Led);
//!
//! let panel = PanelGenerator::new().generate(&model).unwrap();
//! assert_eq!(panel.layout.subtractive().count(), 1);
//! assert!(panel.preview_shapes.is_empty());
//! ```

pub mod bool2d;
pub mod error;
pub mod extrusion;
pub mod generator;
pub mod kernel;
pub mod outline;
pub mod profile;
pub mod shape;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2};

pub use error::{Error, Result};
pub use extrusion::{extrude_shape, ExtrudedSolid};
pub use generator::{GeneratedPanel, GeneratorOptions, PanelGenerator, PanelLayout, PlacedFeature};
pub use kernel::{GeometryKernel, OverlayKernel, DEFAULT_CIRCLE_SEGMENTS};
pub use outline::{build_outline, screw_hole_spacing_x, PanelOutline, ScrewHole};
pub use profile::Profile2D;
pub use shape::Shape2D;
