use std::rc::Rc;

use crate::{
    controller::page_controller::PageController,
    foundation::{
        core::{Axis, TransformStyle},
        error::{CubeError, CubeResult},
    },
    view::{
        frame::BuildContext,
        options::CubeViewOptions,
        page_view::{CubePageView, ItemBuilder, ItemSource, PageChanged},
    },
};

/// Builder for [`CubePageView`].
///
/// Pages come from exactly one source: an explicit list via
/// [`CubePageViewBuilder::children`], or [`CubePageViewBuilder::item_count`]
/// together with [`CubePageViewBuilder::item_builder`].
pub struct CubePageViewBuilder<P> {
    children: Option<Vec<P>>,
    item_count: Option<usize>,
    item_builder: Option<ItemBuilder<P>>,
    on_page_changed: Option<PageChanged>,
    controller: Option<PageController>,
    options: CubeViewOptions,
}

impl<P> Default for CubePageViewBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> CubePageViewBuilder<P> {
    pub fn new() -> Self {
        Self {
            children: None,
            item_count: None,
            item_builder: None,
            on_page_changed: None,
            controller: None,
            options: CubeViewOptions::default(),
        }
    }

    pub fn children(mut self, children: impl IntoIterator<Item = P>) -> Self {
        self.children = Some(children.into_iter().collect());
        self
    }

    pub fn item_count(mut self, count: usize) -> Self {
        self.item_count = Some(count);
        self
    }

    pub fn item_builder(
        mut self,
        build: impl Fn(&BuildContext, usize, f64) -> P + 'static,
    ) -> Self {
        self.item_builder = Some(Box::new(build));
        self
    }

    pub fn on_page_changed(mut self, f: impl Fn(usize) + 'static) -> Self {
        self.on_page_changed = Some(Rc::new(f));
        self
    }

    /// Use a caller-owned controller. The view never disposes it.
    pub fn controller(mut self, controller: PageController) -> Self {
        self.controller = Some(controller);
        self
    }

    pub fn scroll_direction(mut self, axis: Axis) -> Self {
        self.options.scroll_direction = axis;
        self
    }

    pub fn start_page(mut self, page: usize) -> Self {
        self.options.start_page = page;
        self
    }

    pub fn transform_style(mut self, style: TransformStyle) -> Self {
        self.options.transform_style = style;
        self
    }

    /// Replace all presentation options at once.
    pub fn options(mut self, options: CubeViewOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> CubeResult<CubePageView<P>> {
        let source = match (self.children, self.item_builder) {
            (Some(_), Some(_)) => {
                return Err(CubeError::validation(
                    "cannot provide both `children` and `item_builder`",
                ));
            }
            (None, None) => {
                return Err(CubeError::validation(
                    "one of `children` or `item_builder` is required",
                ));
            }
            (Some(children), None) => {
                if self.item_count.is_some() {
                    return Err(CubeError::validation(
                        "`item_count` only applies to `item_builder`",
                    ));
                }
                ItemSource::Children(children)
            }
            (None, Some(build)) => {
                let count = self.item_count.ok_or_else(|| {
                    CubeError::validation("`item_builder` requires `item_count`")
                })?;
                ItemSource::Builder { count, build }
            }
        };

        Ok(CubePageView::from_parts(
            source,
            self.options,
            self.controller,
            self.on_page_changed,
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/builder.rs"]
mod tests;
