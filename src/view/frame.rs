use std::ops::Deref;

use glam::DMat4;

use crate::{
    foundation::core::{Axis, Point, Rgba8Premul, Size, Vec2},
    transform::cube::CubeTransform,
};

/// Shading colour laid over a face before it is modulated by the face's
/// overlay opacity: black at 87% alpha.
pub const SHADE_COLOR: Rgba8Premul = Rgba8Premul {
    r: 0,
    g: 0,
    b: 0,
    a: 221,
};

/// Information handed to lazy item builders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildContext {
    /// Size of the viewport the page fills.
    pub viewport: Size,
    /// Scroll direction of the view.
    pub axis: Axis,
    /// Total number of pages.
    pub item_count: usize,
}

/// Page content as materialized for one frame: borrowed from an explicit
/// children list or freshly produced by an item builder.
#[derive(Debug)]
pub enum PageContent<'a, P> {
    Borrowed(&'a P),
    Built(P),
}

impl<P> Deref for PageContent<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        match self {
            Self::Borrowed(p) => p,
            Self::Built(p) => p,
        }
    }
}

/// One page ready for compositing.
#[derive(Debug)]
pub struct PageLayer<'a, P> {
    pub index: usize,
    pub content: PageContent<'a, P>,
    pub transform: CubeTransform,
    /// Shade colour already scaled by the overlay opacity.
    pub overlay: Rgba8Premul,
    /// Top-left corner of the untransformed page in viewport coordinates.
    pub origin: Point,
}

impl<P> PageLayer<'_, P> {
    /// Full viewport matrix: the page's scroll offset applied after its face transform.
    pub fn matrix(&self, viewport: Size) -> DMat4 {
        let offset = glam::DVec3::new(self.origin.x, self.origin.y, 0.0);
        DMat4::from_translation(offset) * self.transform.to_matrix(viewport)
    }

    /// Projected corners in viewport coordinates.
    pub fn quad(&self, viewport: Size) -> [Point; 4] {
        let delta = self.origin.to_vec2();
        self.transform.project_quad(viewport).map(|p| p + delta)
    }
}

/// All layers of one frame, in painter's order (later pages on top).
#[derive(Debug)]
pub struct Frame<'a, P> {
    pub viewport: Size,
    pub position: f64,
    pub layers: Vec<PageLayer<'a, P>>,
}

pub(crate) fn page_origin(axis: Axis, viewport: Size, index: usize, position: f64) -> Point {
    let offset: Vec2 = axis.offset(viewport, index as f64 - position);
    Point::ORIGIN + offset
}

#[cfg(test)]
#[path = "../../tests/unit/view/frame.rs"]
mod tests;
