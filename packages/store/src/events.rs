//! Listener registry with drop-to-unsubscribe handles.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::{Rc, Weak};

type Listener<E> = Box<dyn FnMut(&E)>;

struct Registry<E> {
    next_id: u64,
    listeners: BTreeMap<u64, Listener<E>>,
    // ids dropped while their listener was out of the map during `emit`
    dropped: BTreeSet<u64>,
}

/// Single-threaded fan-out of events to registered listeners.
pub struct Listeners<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: BTreeMap::new(),
                dropped: BTreeSet::new(),
            })),
        }
    }
}

impl<E: 'static> Listeners<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`. It stays registered until the returned
    /// [`Subscription`] is dropped or [`Subscription::cancel`]led.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, listener: impl FnMut(&E) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Box::new(listener));

        let weak: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                let Some(registry) = weak.upgrade() else {
                    return;
                };
                let removed = registry.borrow_mut().listeners.remove(&id);
                if removed.is_none() {
                    registry.borrow_mut().dropped.insert(id);
                }
                // the listener may own subscriptions of its own; drop it unborrowed
                drop(removed);
            })),
        }
    }

    /// Deliver `event` to every listener in registration order.
    ///
    /// Listeners may subscribe or drop subscriptions while being called.
    pub fn emit(&self, event: &E) {
        let mut running = std::mem::take(&mut self.registry.borrow_mut().listeners);
        for listener in running.values_mut() {
            listener(event);
        }

        let mut released = Vec::new();
        {
            let mut registry = self.registry.borrow_mut();
            let dropped = std::mem::take(&mut registry.dropped);
            for (id, listener) in running {
                if dropped.contains(&id) {
                    released.push(listener);
                } else {
                    registry.listeners.insert(id, listener);
                }
            }
        }
        drop(released);
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps a listener registered. Dropping it unregisters the listener.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}
