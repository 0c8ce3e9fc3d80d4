use std::{cell::Cell, fmt, rc::Rc};

use crate::{
    foundation::error::{CubeError, CubeResult},
    observe::notifier::{ListenerId, ListenerSet},
};

/// Handle to the paged scroll surface driven by the host.
///
/// The host's gesture and physics layer reports positions through
/// [`PageController::set_page`]; everything downstream observes them through
/// listeners. Positions are clamped to the attached page range, so the surface
/// never overscrolls. Clones share state.
#[derive(Clone)]
pub struct PageController {
    inner: Rc<ControllerInner>,
}

struct ControllerInner {
    initial_page: usize,
    page: Cell<Option<f64>>,
    page_count: Cell<Option<usize>>,
    reported: Cell<Option<f64>>,
    disposed: Cell<bool>,
    listeners: ListenerSet<f64>,
}

impl fmt::Debug for PageController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageController")
            .field("initial_page", &self.inner.initial_page)
            .field("page", &self.inner.page.get())
            .field("page_count", &self.inner.page_count.get())
            .field("disposed", &self.inner.disposed.get())
            .finish()
    }
}

impl PageController {
    pub fn new(initial_page: usize) -> Self {
        Self {
            inner: Rc::new(ControllerInner {
                initial_page,
                page: Cell::new(None),
                page_count: Cell::new(None),
                reported: Cell::new(None),
                disposed: Cell::new(false),
                listeners: ListenerSet::new(),
            }),
        }
    }

    pub fn initial_page(&self) -> usize {
        self.inner.initial_page
    }

    /// Whether a laid-out scroll surface is attached.
    pub fn has_clients(&self) -> bool {
        self.inner.page_count.get().is_some()
    }

    /// Fractional page position, or `None` while detached.
    pub fn page(&self) -> Option<f64> {
        self.inner.page.get()
    }

    pub fn page_count(&self) -> Option<usize> {
        self.inner.page_count.get()
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    /// Whether both handles refer to the same controller.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Attach a scroll surface holding `page_count` pages. The position starts
    /// at the initial page; listeners are notified only when that differs from
    /// the last position they were sent.
    pub fn attach(&self, page_count: usize) -> CubeResult<()> {
        if self.is_disposed() {
            return Err(CubeError::controller("cannot attach a disposed controller"));
        }
        self.inner.page_count.set(Some(page_count));
        let page = self.clamp_page(self.inner.initial_page as f64);
        self.inner.page.set(Some(page));
        tracing::debug!(page_count, page, "page controller attached");
        if self.inner.reported.get().is_some_and(|last| last != page) {
            self.report(page);
        }
        Ok(())
    }

    pub fn detach(&self) {
        self.inner.page_count.set(None);
        self.inner.page.set(None);
        tracing::debug!("page controller detached");
    }

    /// Report a new scroll position from the host. Returns whether the
    /// position moved; a detached or disposed controller ignores the call.
    pub fn set_page(&self, page: f64) -> bool {
        if self.is_disposed() || !self.has_clients() || !page.is_finite() {
            tracing::trace!(page, "ignored position report");
            return false;
        }
        let page = self.clamp_page(page);
        if self.inner.page.get() == Some(page) {
            return false;
        }
        self.inner.page.set(Some(page));
        self.report(page);
        true
    }

    /// Jump to `page` without animating. Returns `false` when the controller
    /// is disposed or has no surface to move.
    pub fn jump_to_page(&self, page: usize) -> bool {
        if self.is_disposed() || !self.has_clients() {
            return false;
        }
        tracing::debug!(page, "jump to page");
        self.set_page(page as f64);
        true
    }

    pub fn add_listener(&self, f: impl Fn(&f64) + 'static) -> ListenerId {
        self.inner.listeners.add(f)
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.inner.listeners.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }

    /// Release the controller. Remaining listeners are dropped and further
    /// position reports are ignored.
    pub fn dispose(&self) {
        if self.inner.disposed.replace(true) {
            tracing::warn!("page controller disposed twice");
            return;
        }
        self.inner.listeners.clear();
        tracing::debug!("page controller disposed");
    }

    fn report(&self, page: f64) {
        self.inner.reported.set(Some(page));
        self.inner.listeners.dispatch(&page);
    }

    fn clamp_page(&self, page: f64) -> f64 {
        let max = self.inner.page_count.get().unwrap_or(0).saturating_sub(1) as f64;
        page.clamp(0.0, max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/page_controller.rs"]
mod tests;
