// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel outline and mounting screw holes
//!
//! The outline is a rectangle centered at the origin. Screw holes sit on
//! four candidate corners `(±spacing_x/2, ±screw_span/2)`; only the corners
//! named by the hole layout are emitted.

use crate::error::Result;
use crate::kernel::GeometryKernel;
use nalgebra::Point2;
use panelsmith_core::{HoleLayout, HolePosition, HorizontalPitch, VerticalPitch};

/// Columns of mounting holes need this many HP before they separate
const SCREW_COLUMN_OFFSET_HP: f64 = 3.0;

/// Horizontal distance between the left and right screw hole columns.
///
/// Panels narrower than 3 HP get a single centered column.
#[inline]
pub fn screw_hole_spacing_x(hp: f64, pitch_mm: f64) -> f64 {
    (hp - SCREW_COLUMN_OFFSET_HP).max(0.0) * pitch_mm
}

/// A mounting hole placed on the panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrewHole {
    pub position: HolePosition,
    pub center: Point2<f64>,
    pub radius: f64,
}

/// Panel rectangle plus its mounting holes, as plain data
#[derive(Debug, Clone, PartialEq)]
pub struct PanelOutline {
    pub width: f64,
    pub height: f64,
    pub screw_holes: Vec<ScrewHole>,
}

impl PanelOutline {
    pub fn compute(
        horizontal: &HorizontalPitch,
        vertical: &VerticalPitch,
        layout: &HoleLayout,
        screw_hole_radius: f64,
        pitch_mm: f64,
    ) -> Self {
        let half_x = screw_hole_spacing_x(horizontal.hp, pitch_mm) / 2.0;
        let half_y = vertical.screw_span_height / 2.0;

        let screw_holes = layout
            .positions
            .iter()
            .map(|&position| {
                let (sx, sy) = position.signs();
                ScrewHole {
                    position,
                    center: Point2::new(sx * half_x, sy * half_y),
                    radius: screw_hole_radius,
                }
            })
            .collect();

        Self {
            width: horizontal.actual_width,
            height: vertical.panel_height,
            screw_holes,
        }
    }

    /// Render the outline rectangle and each screw hole with `kernel`.
    pub fn build<K: GeometryKernel>(
        &self,
        kernel: &mut K,
    ) -> Result<(K::Shape2D, Vec<K::Shape2D>)> {
        let outline = kernel.rectangle(self.width, self.height)?;

        let mut holes = Vec::with_capacity(self.screw_holes.len());
        for hole in &self.screw_holes {
            let circle = kernel.circle(hole.radius)?;
            holes.push(kernel.translate(&circle, hole.center.coords)?);
        }

        Ok((outline, holes))
    }
}

/// Build the outline rectangle and the selected screw hole shapes.
pub fn build_outline<K: GeometryKernel>(
    kernel: &mut K,
    horizontal: &HorizontalPitch,
    vertical: &VerticalPitch,
    layout: &HoleLayout,
    screw_hole_radius: f64,
    pitch_mm: f64,
) -> Result<(PanelOutline, K::Shape2D, Vec<K::Shape2D>)> {
    let outline = PanelOutline::compute(horizontal, vertical, layout, screw_hole_radius, pitch_mm);
    let (rect, holes) = outline.build(kernel)?;
    Ok((outline, rect, holes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::OverlayKernel;
    use approx::assert_relative_eq;
    use panelsmith_core::catalog::{hole_layout_at, horizontal_pitch_at, vertical_pitch_at};

    const PITCH: f64 = 5.08;

    #[test]
    fn test_spacing_collapses_below_three_hp() {
        assert_eq!(screw_hole_spacing_x(1.0, PITCH), 0.0);
        assert_eq!(screw_hole_spacing_x(1.5, PITCH), 0.0);
        assert_eq!(screw_hole_spacing_x(3.0, PITCH), 0.0);
    }

    #[test]
    fn test_spacing_ten_hp() {
        assert_relative_eq!(screw_hole_spacing_x(10.0, PITCH), 7.0 * PITCH);
    }

    #[test]
    fn test_eight_hp_three_u_top_left_bottom_right() {
        let outline = PanelOutline::compute(
            horizontal_pitch_at(5).unwrap(),
            vertical_pitch_at(2).unwrap(),
            hole_layout_at(0).unwrap(),
            1.6,
            PITCH,
        );

        assert_relative_eq!(outline.width, 40.30);
        assert_relative_eq!(outline.height, 128.50);
        assert_eq!(outline.screw_holes.len(), 2);

        let tl = outline.screw_holes[0];
        assert_eq!(tl.position, HolePosition::TopLeft);
        assert_relative_eq!(tl.center.x, -12.7, epsilon = 1e-9);
        assert_relative_eq!(tl.center.y, 61.25, epsilon = 1e-9);

        let br = outline.screw_holes[1];
        assert_eq!(br.position, HolePosition::BottomRight);
        assert_relative_eq!(br.center.x, 12.7, epsilon = 1e-9);
        assert_relative_eq!(br.center.y, -61.25, epsilon = 1e-9);
        assert_relative_eq!(br.radius, 1.6);
    }

    #[test]
    fn test_all_four_holes() {
        let layout = hole_layout_at(4).unwrap();
        let outline = PanelOutline::compute(
            horizontal_pitch_at(7).unwrap(),
            vertical_pitch_at(2).unwrap(),
            layout,
            1.6,
            PITCH,
        );
        let positions: Vec<_> = outline.screw_holes.iter().map(|h| h.position).collect();
        assert_eq!(positions, layout.positions.to_vec());
    }

    #[test]
    fn test_narrow_panel_holes_on_centerline() {
        let outline = PanelOutline::compute(
            horizontal_pitch_at(0).unwrap(),
            vertical_pitch_at(0).unwrap(),
            hole_layout_at(0).unwrap(),
            1.6,
            PITCH,
        );
        for hole in &outline.screw_holes {
            assert_eq!(hole.center.x.abs(), 0.0);
        }
    }

    #[test]
    fn test_build_with_overlay_kernel() {
        let mut kernel = OverlayKernel::default();
        let (outline, rect, holes) = build_outline(
            &mut kernel,
            horizontal_pitch_at(5).unwrap(),
            vertical_pitch_at(2).unwrap(),
            hole_layout_at(0).unwrap(),
            1.6,
            PITCH,
        )
        .unwrap();

        assert_relative_eq!(rect.area(), 40.30 * 128.50, epsilon = 1e-9);
        assert_eq!(holes.len(), outline.screw_holes.len());

        let center = holes[0].center().unwrap();
        assert_relative_eq!(center.x, -12.7, epsilon = 1e-9);
        assert_relative_eq!(center.y, 61.25, epsilon = 1e-9);
    }
}
