pub use kurbo::{Point, Size, Vec2};

/// Horizontal pages tilt around a vertical axis and need a stronger vanishing point.
pub const HORIZONTAL_PERSPECTIVE: f64 = 0.003;
/// Perspective strength used when pages are stacked vertically.
pub const VERTICAL_PERSPECTIVE: f64 = 0.001;

/// Scroll direction of the page view.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Pages are laid out left to right.
    #[default]
    Horizontal,
    /// Pages are laid out top to bottom.
    Vertical,
}

impl Axis {
    /// Projective depth term for this scroll direction.
    pub fn perspective(self) -> f64 {
        match self {
            Self::Horizontal => HORIZONTAL_PERSPECTIVE,
            Self::Vertical => VERTICAL_PERSPECTIVE,
        }
    }

    /// Rotation axis a page pivots around while this direction scrolls.
    pub fn rotation_axis(self) -> RotationAxis {
        match self {
            Self::Horizontal => RotationAxis::Y,
            Self::Vertical => RotationAxis::X,
        }
    }

    /// Extent of `size` along the scroll direction.
    pub fn main_extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Offset of `distance` pages along the scroll direction.
    pub fn offset(self, size: Size, distance: f64) -> Vec2 {
        let along = self.main_extent(size) * distance;
        match self {
            Self::Horizontal => Vec2::new(along, 0.0),
            Self::Vertical => Vec2::new(0.0, along),
        }
    }
}

/// Whether faces fold toward or away from the viewer.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TransformStyle {
    /// Faces fold inward, as if viewed from inside the cube.
    Inside,
    /// Faces fold outward, as if viewed from outside the cube.
    #[default]
    Outside,
}

impl TransformStyle {
    pub(crate) fn sign(self) -> f64 {
        match self {
            Self::Outside => 1.0,
            Self::Inside => -1.0,
        }
    }
}

/// Axis in page space about which a face rotates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RotationAxis {
    /// Horizontal axis; used by vertical scrolling.
    X,
    /// Vertical axis; used by horizontal scrolling.
    Y,
}

/// Edge of the page that stays fixed while the page rotates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Left,
    Right,
    Top,
    Bottom,
}

impl Anchor {
    /// Pivot point in page-local coordinates: the centre of the anchored edge.
    pub fn resolve(self, page: Size) -> Point {
        match self {
            Self::Left => Point::new(0.0, page.height / 2.0),
            Self::Right => Point::new(page.width, page.height / 2.0),
            Self::Top => Point::new(page.width / 2.0, 0.0),
            Self::Bottom => Point::new(page.width / 2.0, page.height),
        }
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: mul_div255(r, a),
            g: mul_div255(g, a),
            b: mul_div255(b, a),
            a,
        }
    }

    /// Scale every channel by `opacity`, clamped to `[0, 1]`.
    pub fn with_opacity(self, opacity: f64) -> Self {
        let k = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: mul_div255(self.r, k),
            g: mul_div255(self.g, k),
            b: mul_div255(self.b, k),
            a: mul_div255(self.a, k),
        }
    }
}

fn mul_div255(x: u8, y: u8) -> u8 {
    (((u16::from(x) * u16::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
