//! Projective matrices for cube faces.

use glam::{DMat4, DVec3, DVec4};

use crate::{
    foundation::core::{Point, RotationAxis, Size},
    transform::cube::CubeTransform,
};

const W_EPSILON: f64 = 1e-9;

impl CubeTransform {
    /// Page-local matrix: `T(pivot) * P * R * T(-pivot)`, with the pivot on the
    /// anchored edge of a page of size `page`.
    pub fn to_matrix(&self, page: Size) -> DMat4 {
        let pivot = self.anchor.resolve(page);
        let to_pivot = DMat4::from_translation(DVec3::new(pivot.x, pivot.y, 0.0));
        let from_pivot = DMat4::from_translation(DVec3::new(-pivot.x, -pivot.y, 0.0));

        let mut perspective = DMat4::IDENTITY;
        // Row 3, column 2: w picks up a share of z.
        perspective.z_axis.w = self.perspective;

        let rotation = match self.axis {
            RotationAxis::X => DMat4::from_rotation_x(self.rotation_radians()),
            RotationAxis::Y => DMat4::from_rotation_y(self.rotation_radians()),
        };

        to_pivot * perspective * rotation * from_pivot
    }

    /// Page corners after projection, clockwise from the top-left corner.
    pub fn project_quad(&self, page: Size) -> [Point; 4] {
        let m = self.to_matrix(page);
        [
            Point::new(0.0, 0.0),
            Point::new(page.width, 0.0),
            Point::new(page.width, page.height),
            Point::new(0.0, page.height),
        ]
        .map(|p| project_point(&m, p))
    }
}

/// Transform a point on the page plane (z = 0) and apply the perspective divide.
pub fn project_point(m: &DMat4, p: Point) -> Point {
    let v = *m * DVec4::new(p.x, p.y, 0.0, 1.0);
    if v.w.abs() < W_EPSILON {
        Point::new(v.x, v.y)
    } else {
        Point::new(v.x / v.w, v.y / v.w)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/projection.rs"]
mod tests;
