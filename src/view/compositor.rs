use crate::{
    foundation::{
        core::{Anchor, Point, RotationAxis, Size},
        error::{CubeError, CubeResult},
    },
    view::{frame::PageLayer, page_view::CubePageView},
};

/// Rendering backend for cube page layers.
///
/// Layers arrive in painter's order between `begin_frame` and `end_frame`.
pub trait PageCompositor<P> {
    fn begin_frame(&mut self, _viewport: Size, _position: f64) -> CubeResult<()> {
        Ok(())
    }

    fn draw_page(&mut self, layer: &PageLayer<'_, P>, viewport: Size) -> CubeResult<()>;

    fn end_frame(&mut self) -> CubeResult<()> {
        Ok(())
    }
}

/// Build the view's current frame and feed it to `backend`. Returns the
/// number of pages drawn.
pub fn render_frame<P, C: PageCompositor<P> + ?Sized>(
    view: &CubePageView<P>,
    viewport: Size,
    backend: &mut C,
) -> CubeResult<usize> {
    let frame = view.build_frame(viewport);
    backend.begin_frame(viewport, frame.position)?;
    for layer in &frame.layers {
        backend.draw_page(layer, viewport)?;
    }
    backend.end_frame()?;
    Ok(frame.layers.len())
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Content-free record of one drawn page.
pub struct PageSnapshot {
    pub index: usize,
    pub rotation_degrees: f64,
    pub axis: RotationAxis,
    pub anchor: Anchor,
    pub overlay_opacity: f64,
    /// Projected corners in viewport coordinates, clockwise from top-left.
    pub quad: [Point; 4],
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Content-free record of one frame.
pub struct FrameSnapshot {
    pub position: f64,
    pub viewport: Size,
    pub pages: Vec<PageSnapshot>,
}

impl FrameSnapshot {
    pub fn to_json_string(&self) -> CubeResult<String> {
        serde_json::to_string(self).map_err(|e| CubeError::serde(e.to_string()))
    }
}

/// Backend that records frames as [`FrameSnapshot`]s instead of drawing.
#[derive(Debug, Default)]
pub struct SnapshotCompositor {
    frames: Vec<FrameSnapshot>,
    open: Option<FrameSnapshot>,
}

impl SnapshotCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[FrameSnapshot] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<FrameSnapshot> {
        self.frames
    }
}

impl<P> PageCompositor<P> for SnapshotCompositor {
    fn begin_frame(&mut self, viewport: Size, position: f64) -> CubeResult<()> {
        if self.open.is_some() {
            return Err(CubeError::Other(anyhow::anyhow!(
                "begin_frame called twice without end_frame"
            )));
        }
        self.open = Some(FrameSnapshot {
            position,
            viewport,
            pages: Vec::new(),
        });
        Ok(())
    }

    fn draw_page(&mut self, layer: &PageLayer<'_, P>, viewport: Size) -> CubeResult<()> {
        let frame = self
            .open
            .as_mut()
            .ok_or_else(|| CubeError::Other(anyhow::anyhow!("draw_page outside of a frame")))?;
        frame.pages.push(PageSnapshot {
            index: layer.index,
            rotation_degrees: layer.transform.rotation_degrees,
            axis: layer.transform.axis,
            anchor: layer.transform.anchor,
            overlay_opacity: layer.transform.overlay_opacity,
            quad: layer.quad(viewport),
        });
        Ok(())
    }

    fn end_frame(&mut self) -> CubeResult<()> {
        let frame = self
            .open
            .take()
            .ok_or_else(|| CubeError::Other(anyhow::anyhow!("end_frame without begin_frame")))?;
        tracing::trace!(pages = frame.pages.len(), "frame recorded");
        self.frames.push(frame);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/compositor.rs"]
mod tests;
