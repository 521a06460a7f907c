// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel Generator - turns a panel model into a solid plus preview shapes
//!
//! One pass per call:
//! 1. catalog lookups for the model's indices
//! 2. outline rectangle and screw holes
//! 3. resolve and classify every feature, keeping model order
//! 4. render cutouts and subtract them from the outline in one operation
//! 5. extrude the section
//! 6. render out-of-bounds features as flat preview shapes
//!
//! Generation reads the model and returns fresh values. Nothing is cached
//! between calls.

use crate::error::Result;
use crate::kernel::{GeometryKernel, OverlayKernel};
use crate::outline::{PanelOutline, ScrewHole};
use nalgebra::Point2;
use panelsmith_core::{
    classify_point, resolve_absolute_position, Feature, FeatureClass, FeatureType, PanelModel,
};

/// Fixed manufacturing constants (millimetres)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorOptions {
    /// Mounting screw hole radius (M3 clearance)
    pub screw_hole_radius: f64,
    /// Width of one HP
    pub horizontal_pitch_mm: f64,
    /// Slide potentiometer slot width
    pub slot_width: f64,
    /// Keeps slot fillets just short of a full semicircle
    pub fillet_epsilon: f64,
    /// Panel thickness
    pub thickness: f64,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            screw_hole_radius: 1.6,
            horizontal_pitch_mm: 5.08,
            slot_width: 2.0,
            fillet_epsilon: 0.01,
            thickness: 1.6,
        }
    }
}

impl GeneratorOptions {
    /// Corner radius for a slot of the given travel
    #[inline]
    pub fn slot_corner_radius(&self, travel: f64) -> f64 {
        (self.slot_width.min(travel) / 2.0 - self.fillet_epsilon).max(0.0)
    }
}

/// A model feature after position resolution and classification
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedFeature {
    /// Index in `PanelModel::features`
    pub index: usize,
    pub feature: Feature,
    /// Absolute center, origin at the panel center
    pub center: Point2<f64>,
    pub class: FeatureClass,
}

/// Plain-data description of one generation result
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub width: f64,
    pub height: f64,
    pub screw_holes: Vec<ScrewHole>,
    /// Every model feature, in model order
    pub features: Vec<PlacedFeature>,
}

impl PanelLayout {
    pub fn subtractive(&self) -> impl Iterator<Item = &PlacedFeature> {
        self.features
            .iter()
            .filter(|f| f.class == FeatureClass::Subtractive)
    }

    pub fn out_of_bounds(&self) -> impl Iterator<Item = &PlacedFeature> {
        self.features
            .iter()
            .filter(|f| f.class == FeatureClass::OutOfBounds)
    }
}

/// Output of [`PanelGenerator::generate`]
pub struct GeneratedPanel<K: GeometryKernel> {
    pub layout: PanelLayout,
    /// Extruded panel with all holes and cutouts removed
    pub solid: K::Shape3D,
    /// Out-of-bounds feature shapes, unextruded, in model order
    pub preview_shapes: Vec<K::Shape2D>,
}

/// Generates panel geometry through a [`GeometryKernel`]
pub struct PanelGenerator<K: GeometryKernel = OverlayKernel> {
    kernel: K,
    options: GeneratorOptions,
}

impl PanelGenerator<OverlayKernel> {
    /// Create a generator backed by the default polygon kernel
    pub fn new() -> Self {
        Self::with_kernel(OverlayKernel::default())
    }
}

impl Default for PanelGenerator<OverlayKernel> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: GeometryKernel> PanelGenerator<K> {
    pub fn with_kernel(kernel: K) -> Self {
        Self {
            kernel,
            options: GeneratorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Resolve, classify and measure a model without building geometry.
    pub fn layout(&self, model: &PanelModel) -> Result<PanelLayout> {
        let horizontal = model.horizontal_pitch()?;
        let vertical = model.vertical_pitch()?;
        let holes = model.hole_layout()?;

        let outline = PanelOutline::compute(
            horizontal,
            vertical,
            holes,
            self.options.screw_hole_radius,
            self.options.horizontal_pitch_mm,
        );

        let features = model
            .features
            .iter()
            .enumerate()
            .map(|(index, feature)| {
                let center = resolve_absolute_position(feature, outline.width, outline.height);
                PlacedFeature {
                    index,
                    feature: feature.clone(),
                    center,
                    class: classify_point(&center, outline.width, outline.height),
                }
            })
            .collect();

        Ok(PanelLayout {
            width: outline.width,
            height: outline.height,
            screw_holes: outline.screw_holes,
            features,
        })
    }

    /// Generate the panel solid and preview shapes for `model`.
    ///
    /// Any invalid catalog index or degenerate feature aborts the whole call;
    /// no partial geometry is returned.
    pub fn generate(&mut self, model: &PanelModel) -> Result<GeneratedPanel<K>> {
        let layout = self.layout(model)?;

        let outline = PanelOutline {
            width: layout.width,
            height: layout.height,
            screw_holes: layout.screw_holes.clone(),
        };
        let (panel, mut cutouts) = outline.build(&mut self.kernel)?;

        for placed in layout.subtractive() {
            cutouts.push(self.render_feature(placed)?);
        }

        let section = self.kernel.subtract(&panel, &cutouts)?;
        let solid = self.kernel.extrude(&section, self.options.thickness)?;

        let mut preview_shapes = Vec::new();
        for placed in layout.out_of_bounds() {
            preview_shapes.push(self.render_feature(placed)?);
        }

        tracing::debug!(
            width = layout.width,
            height = layout.height,
            screw_holes = layout.screw_holes.len(),
            subtractive = cutouts.len() - layout.screw_holes.len(),
            out_of_bounds = preview_shapes.len(),
            "Generated panel"
        );

        Ok(GeneratedPanel {
            layout,
            solid,
            preview_shapes,
        })
    }

    /// Feature shape centered on its resolved position
    fn render_feature(&mut self, placed: &PlacedFeature) -> Result<K::Shape2D> {
        let size = placed.feature.size;
        let shape = match placed.feature.feature_type {
            FeatureType::SlidePot => {
                let width = self.options.slot_width;
                let radius = self.options.slot_corner_radius(size);
                self.kernel.rounded_rectangle(width, size, radius)?
            }
            FeatureType::PatchPoint
            | FeatureType::RotaryPot
            | FeatureType::ToggleSwitch
            | FeatureType::Led => self.kernel.circle(size / 2.0)?,
        };
        self.kernel.translate(&shape, placed.center.coords)
    }
}
