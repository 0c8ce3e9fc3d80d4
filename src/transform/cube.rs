//! Cube face transform for a single page.
//!
//! A page's face is driven entirely by `t = index - position`: the signed
//! distance, in pages, between the page and the current scroll offset. One
//! full page of travel turns a face by exactly 90 degrees and fully shades it.

use crate::{
    foundation::core::{Anchor, Axis, RotationAxis, TransformStyle},
    transform::{linear::lerp, non_linear::clamp01, non_linear::deg_to_rad},
};

/// Degrees a face turns per page of scroll travel.
pub const DEGREES_PER_PAGE: f64 = 90.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Transform for one page at one scroll position.
pub struct CubeTransform {
    /// Signed rotation; not clamped, pages further than one away over-rotate.
    pub rotation_degrees: f64,
    /// Projective depth term (matrix entry row 3, column 2).
    pub perspective: f64,
    /// Axis the face rotates around.
    pub axis: RotationAxis,
    /// Edge the face pivots on.
    pub anchor: Anchor,
    /// Opacity of the dark shading overlay, always in `[0, 1]`.
    pub overlay_opacity: f64,
}

impl CubeTransform {
    /// Rotation handed to the matrix primitive.
    pub fn rotation_radians(&self) -> f64 {
        deg_to_rad(self.rotation_degrees)
    }
}

/// Compute the face transform of page `index` when the view sits at `position`.
///
/// Horizontal faces pivot on their right edge while leaving and their left
/// edge while entering. Vertical faces pivot on the bottom edge while leaving
/// and the top edge otherwise. The two rules are deliberately not mirror
/// images of each other; both produce a closed cube for either swipe direction.
pub fn cube_transform(
    index: usize,
    position: f64,
    axis: Axis,
    style: TransformStyle,
) -> CubeTransform {
    let t = index as f64 - position;
    let is_leaving = t <= 0.0;

    let anchor = match (axis, is_leaving) {
        (Axis::Horizontal, true) => Anchor::Right,
        (Axis::Horizontal, false) => Anchor::Left,
        (Axis::Vertical, true) => Anchor::Bottom,
        (Axis::Vertical, false) => Anchor::Top,
    };

    CubeTransform {
        rotation_degrees: lerp(0.0, DEGREES_PER_PAGE, t) * style.sign(),
        perspective: axis.perspective(),
        axis: axis.rotation_axis(),
        anchor,
        overlay_opacity: clamp01(lerp(0.0, 1.0, t.abs())),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/cube.rs"]
mod tests;
