use std::sync::{Arc, Mutex, MutexGuard, Weak};

use tracing::debug;

type Handler<E> = Box<dyn FnMut(&E) + Send>;

struct Registry<E> {
    next_id: u64,
    handlers: Vec<(u64, Handler<E>)>,
    /// Ids whose handlers are checked out by a running `publish`.
    dispatching: Vec<u64>,
    /// Checked-out ids unsubscribed before their handlers came back.
    removed: Vec<u64>,
}

/// Fan-out point for platform events such as clipboard pastes.
///
/// Handlers stay registered only while the [`Subscription`] returned by
/// [`EventHub::subscribe`] is alive. Handlers run without the registry
/// lock held, so they may subscribe, unsubscribe or query the hub. A
/// `publish` issued from inside a handler is dropped.
pub struct EventHub<E> {
    registry: Arc<Mutex<Registry<E>>>,
}

/// Registration guard; dropping it removes the handler.
#[must_use = "dropping the subscription immediately unregisters the handler"]
pub struct Subscription<E> {
    id: u64,
    registry: Weak<Mutex<Registry<E>>>,
}

/// Handlers checked out for one `publish`. Returned to the registry on
/// drop, including when a handler panics.
struct Dispatch<'a, E> {
    registry: &'a Mutex<Registry<E>>,
    handlers: Vec<(u64, Handler<E>)>,
}

impl<E> Default for EventHub<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventHub<E> {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                handlers: Vec::new(),
                dispatching: Vec::new(),
                removed: Vec::new(),
            })),
        }
    }

    pub fn subscribe(&self, handler: impl FnMut(&E) + Send + 'static) -> Subscription<E> {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, Box::new(handler)));
        debug!("Listener {id} registered");
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every live handler. Returns how many ran.
    ///
    /// Handlers subscribed during delivery first see the next event.
    pub fn publish(&self, event: &E) -> usize {
        let mut dispatch = {
            let mut registry = lock(&self.registry);
            if !registry.dispatching.is_empty() {
                debug!("Nested publish ignored");
                return 0;
            }
            let handlers = std::mem::take(&mut registry.handlers);
            registry.dispatching = handlers.iter().map(|(id, _)| *id).collect();
            Dispatch {
                registry: &self.registry,
                handlers,
            }
        };

        let mut ran = 0;
        for (id, handler) in dispatch.handlers.iter_mut() {
            if lock(&self.registry).removed.contains(id) {
                continue;
            }
            handler(event);
            ran += 1;
        }
        ran
    }

    pub fn listener_count(&self) -> usize {
        let registry = lock(&self.registry);
        registry.handlers.len() + registry.dispatching.len() - registry.removed.len()
    }
}

impl<E> Drop for Dispatch<'_, E> {
    fn drop(&mut self) {
        let checked_out = std::mem::take(&mut self.handlers);
        let mut registry = lock(self.registry);
        let removed = std::mem::take(&mut registry.removed);
        registry.dispatching.clear();

        let (dead, mut live): (Vec<_>, Vec<_>) = checked_out
            .into_iter()
            .partition(|(id, _)| removed.contains(id));
        live.append(&mut registry.handlers);
        registry.handlers = live;
        drop(registry);

        // Closures may own subscriptions of their own; drop them unlocked.
        drop(dead);
    }
}

impl<E> Subscription<E> {
    pub fn is_active(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let registry = lock(&registry);
        let registered = registry.handlers.iter().any(|(id, _)| *id == self.id);
        let checked_out =
            registry.dispatching.contains(&self.id) && !registry.removed.contains(&self.id);
        registered || checked_out
    }
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let handler = {
            let mut registry = lock(&registry);
            if registry.dispatching.contains(&self.id) {
                registry.removed.push(self.id);
                None
            } else {
                registry
                    .handlers
                    .iter()
                    .position(|(id, _)| *id == self.id)
                    .map(|index| registry.handlers.remove(index))
            }
        };
        drop(handler);
        debug!("Listener {} removed", self.id);
    }
}

// A handler that panicked must not take the hub down with it.
fn lock<E>(registry: &Mutex<Registry<E>>) -> MutexGuard<'_, Registry<E>> {
    registry.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
