use std::{cell::Cell, ops::Range, rc::Rc};

use crate::{
    bridge::scroll_bridge::PageScrollBridge,
    controller::page_controller::PageController,
    foundation::{
        core::{Axis, Size, TransformStyle},
        error::CubeResult,
    },
    observe::notifier::ListenerId,
    transform::cube::cube_transform,
    view::{
        builder::CubePageViewBuilder,
        frame::{BuildContext, Frame, PageContent, PageLayer, SHADE_COLOR, page_origin},
        options::CubeViewOptions,
    },
};

/// Lazy page factory: `(context, index, current position) -> page`.
pub type ItemBuilder<P> = Box<dyn Fn(&BuildContext, usize, f64) -> P>;

/// Callback fired with the new page index when the settled page changes.
pub type PageChanged = Rc<dyn Fn(usize)>;

pub(crate) enum ItemSource<P> {
    Children(Vec<P>),
    Builder { count: usize, build: ItemBuilder<P> },
}

impl<P> ItemSource<P> {
    fn len(&self) -> usize {
        match self {
            Self::Children(c) => c.len(),
            Self::Builder { count, .. } => *count,
        }
    }
}

/// Paged view whose pages turn like the faces of a cube.
///
/// The view never draws anything itself. Each [`CubePageView::build_frame`]
/// produces the layers of the pages around the current position; a
/// [`crate::PageCompositor`] turns them into pixels.
pub struct CubePageView<P> {
    source: ItemSource<P>,
    options: CubeViewOptions,
    bridge: PageScrollBridge,
    on_page_changed: Option<PageChanged>,
    subscription: Option<ListenerId>,
    settled_page: Rc<Cell<usize>>,
    needs_build: Rc<Cell<bool>>,
}

impl<P> CubePageView<P> {
    pub fn builder() -> CubePageViewBuilder<P> {
        CubePageViewBuilder::new()
    }

    pub(crate) fn from_parts(
        source: ItemSource<P>,
        options: CubeViewOptions,
        controller: Option<PageController>,
        on_page_changed: Option<PageChanged>,
    ) -> Self {
        // The surface clamps the start page, so that is where the view settles.
        let settled = options.start_page.min(source.len().saturating_sub(1));
        Self {
            source,
            options,
            bridge: PageScrollBridge::new(controller, options.start_page),
            on_page_changed,
            subscription: None,
            settled_page: Rc::new(Cell::new(settled)),
            needs_build: Rc::new(Cell::new(true)),
        }
    }

    pub fn item_count(&self) -> usize {
        self.source.len()
    }

    pub fn options(&self) -> &CubeViewOptions {
        &self.options
    }

    pub fn scroll_direction(&self) -> Axis {
        self.options.scroll_direction
    }

    pub fn transform_style(&self) -> TransformStyle {
        self.options.transform_style
    }

    pub fn controller(&self) -> &PageController {
        self.bridge.controller()
    }

    pub fn bridge(&self) -> &PageScrollBridge {
        &self.bridge
    }

    pub fn current_position(&self) -> f64 {
        self.bridge.current_position()
    }

    /// Whether the position moved since the last built frame.
    pub fn needs_build(&self) -> bool {
        self.needs_build.get()
    }

    /// Hook the view to the bridge once the first frame has been laid out.
    pub fn after_first_frame(&mut self) {
        if self.subscription.is_none() && !self.bridge.is_disposed() {
            let needs_build = Rc::clone(&self.needs_build);
            let settled = Rc::clone(&self.settled_page);
            let on_page_changed = self.on_page_changed.clone();
            let id = self.bridge.position().subscribe(move |position| {
                needs_build.set(true);
                let page = position.round().max(0.0) as usize;
                if settled.replace(page) != page {
                    tracing::debug!(page, "page changed");
                    if let Some(cb) = &on_page_changed {
                        cb(page);
                    }
                }
            });
            self.subscription = Some(id);
        }
        self.bridge.after_first_frame();
    }

    pub fn dependencies_changed(&mut self) {
        self.bridge.dependencies_changed();
    }

    /// Attach the host's laid-out scroll surface, sized to this view's pages,
    /// then give the pending start-page jump its chance to run.
    pub fn attach_surface(&mut self) -> CubeResult<()> {
        self.bridge.controller().attach(self.item_count())?;
        self.dependencies_changed();
        Ok(())
    }

    /// Indices kept alive around the current position: one page beyond each
    /// neighbour of the fractional position.
    pub fn materialized_range(&self) -> Range<usize> {
        let count = self.item_count();
        let position = self.current_position();
        if count == 0 || !position.is_finite() {
            return 0..0;
        }
        // Float-to-int casts saturate, so negative bounds land on 0.
        let lo = (position.floor() - 1.0) as usize;
        let hi = (position.ceil() + 2.0) as usize;
        lo.min(count)..hi.min(count)
    }

    /// Lay out every materialized page for `viewport`.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn build_frame(&self, viewport: Size) -> Frame<'_, P> {
        let position = self.current_position();
        let axis = self.options.scroll_direction;
        let style = self.options.transform_style;
        let ctx = BuildContext {
            viewport,
            axis,
            item_count: self.item_count(),
        };

        let layers = self
            .materialized_range()
            .map(|index| {
                let content = match &self.source {
                    ItemSource::Children(children) => PageContent::Borrowed(&children[index]),
                    ItemSource::Builder { build, .. } => {
                        PageContent::Built(build(&ctx, index, position))
                    }
                };
                let transform = cube_transform(index, position, axis, style);
                PageLayer {
                    index,
                    content,
                    overlay: SHADE_COLOR.with_opacity(transform.overlay_opacity),
                    transform,
                    origin: page_origin(axis, viewport, index, position),
                }
            })
            .collect();

        self.needs_build.set(false);
        Frame {
            viewport,
            position,
            layers,
        }
    }

    /// Unsubscribe from the bridge and tear it down. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.bridge.position().unsubscribe(id);
        }
        self.bridge.dispose();
    }
}

impl<P> Drop for CubePageView<P> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/page_view.rs"]
mod tests;
