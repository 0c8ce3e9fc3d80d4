use crate::{
    controller::page_controller::PageController,
    observe::notifier::{ListenerId, ValueNotifier},
};

/// Controller plus who is responsible for disposing it.
#[derive(Debug)]
enum ControllerHandle {
    /// Created by the bridge; disposed with it.
    Owned(PageController),
    /// Supplied by the caller, who keeps ownership.
    Borrowed(PageController),
}

impl ControllerHandle {
    fn controller(&self) -> &PageController {
        match self {
            Self::Owned(c) | Self::Borrowed(c) => c,
        }
    }
}

/// Republishes a [`PageController`]'s position as an observable scalar.
///
/// Lifecycle, in host order:
/// 1. [`PageScrollBridge::after_first_frame`] registers the controller
///    listener and attempts the start-page jump.
/// 2. [`PageScrollBridge::dependencies_changed`] retries the jump (it runs at
///    most once and only when the controller has a live surface) and resyncs
///    the published position.
/// 3. [`PageScrollBridge::dispose`] (or drop) removes the listener, then
///    disposes the controller if the bridge created it.
#[derive(Debug)]
pub struct PageScrollBridge {
    handle: ControllerHandle,
    start_page: usize,
    position: ValueNotifier<f64>,
    listener: Option<ListenerId>,
    jump_pending: bool,
    disposed: bool,
}

impl PageScrollBridge {
    pub fn new(controller: Option<PageController>, start_page: usize) -> Self {
        let handle = match controller {
            Some(c) => ControllerHandle::Borrowed(c),
            None => ControllerHandle::Owned(PageController::new(start_page)),
        };
        tracing::debug!(
            start_page,
            owned = matches!(handle, ControllerHandle::Owned(_)),
            "page scroll bridge created"
        );
        Self {
            handle,
            start_page,
            position: ValueNotifier::new(start_page as f64),
            listener: None,
            jump_pending: true,
            disposed: false,
        }
    }

    pub fn controller(&self) -> &PageController {
        self.handle.controller()
    }

    pub fn owns_controller(&self) -> bool {
        matches!(self.handle, ControllerHandle::Owned(_))
    }

    pub fn start_page(&self) -> usize {
        self.start_page
    }

    /// Latest known position; the start page until the controller reports one.
    pub fn current_position(&self) -> f64 {
        self.position.get()
    }

    /// Observable position for render-layer subscribers.
    pub fn position(&self) -> &ValueNotifier<f64> {
        &self.position
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    pub fn is_jump_pending(&self) -> bool {
        self.jump_pending
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Register the controller listener once the first frame is laid out.
    pub fn after_first_frame(&mut self) {
        if self.disposed || self.listener.is_some() {
            return;
        }
        let notifier = self.position.clone();
        let id = self.controller().add_listener(move |page| {
            notifier.set(*page);
        });
        self.listener = Some(id);
        tracing::debug!(?id, "position listener attached");

        self.try_start_jump();
        self.sync_from_controller();
    }

    /// Retry the start-page jump, then catch up with the controller's
    /// current position.
    pub fn dependencies_changed(&mut self) {
        if self.disposed {
            return;
        }
        self.try_start_jump();
        self.sync_from_controller();
    }

    /// Idempotent teardown: listener first, then the owned controller.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        if let Some(id) = self.listener.take() {
            self.controller().remove_listener(id);
            tracing::debug!(?id, "position listener detached");
        }
        if let ControllerHandle::Owned(c) = &self.handle {
            c.dispose();
        }
    }

    fn try_start_jump(&mut self) -> bool {
        if !self.jump_pending {
            return false;
        }
        if !self.controller().has_clients() {
            tracing::trace!(start_page = self.start_page, "start-page jump deferred");
            return false;
        }
        self.jump_pending = false;
        self.controller().jump_to_page(self.start_page);
        self.sync_from_controller();
        true
    }

    fn sync_from_controller(&self) {
        if let Some(page) = self.controller().page() {
            self.position.set(page);
        }
    }
}

impl Drop for PageScrollBridge {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bridge/scroll_bridge.rs"]
mod tests;
