use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

/// Handle returned when registering a listener; pass it back to unregister.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Callback<T> = Rc<dyn Fn(&T)>;

/// Ordered set of callbacks keyed by [`ListenerId`].
///
/// Dispatch walks a snapshot of the registered callbacks, so a callback may
/// add or remove listeners (itself included) while being notified. A listener
/// removed mid-dispatch is not called for the remainder of that dispatch.
pub(crate) struct ListenerSet<T> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(ListenerId, Callback<T>)>>,
}

impl<T> ListenerSet<T> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            entries: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn add(&self, f: impl Fn(&T) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((id, Rc::new(f)));
        id
    }

    pub(crate) fn remove(&self, id: ListenerId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(k, _)| *k != id);
        entries.len() != before
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.borrow().iter().any(|(k, _)| *k == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub(crate) fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub(crate) fn dispatch(&self, value: &T) {
        let snapshot: Vec<(ListenerId, Callback<T>)> = self
            .entries
            .borrow()
            .iter()
            .map(|(id, f)| (*id, Rc::clone(f)))
            .collect();

        for (id, f) in snapshot {
            if self.contains(id) {
                f(value);
            }
        }
    }
}

/// Observable value holder.
///
/// Cloning yields another handle to the same value. Subscribers run
/// synchronously inside [`ValueNotifier::set`] and only when the value
/// actually changes.
pub struct ValueNotifier<T> {
    inner: Rc<NotifierInner<T>>,
}

struct NotifierInner<T> {
    value: RefCell<T>,
    listeners: ListenerSet<T>,
}

impl<T> Clone for ValueNotifier<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueNotifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueNotifier")
            .field("value", &self.inner.value.borrow())
            .field("listeners", &self.inner.listeners.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> ValueNotifier<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(NotifierInner {
                value: RefCell::new(value),
                listeners: ListenerSet::new(),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Store `value`; returns whether listeners were notified.
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return false;
            }
            *current = value.clone();
        }
        self.inner.listeners.dispatch(&value);
        true
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> ListenerId {
        self.inner.listeners.add(f)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.inner.listeners.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/observe/notifier.rs"]
mod tests;
