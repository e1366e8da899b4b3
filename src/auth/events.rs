use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::models::User;

/// External auth-state transition, as pushed by the provider layer.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthChange {
    SignedIn(User),
    SignedOut,
    TokenRefreshed,
}

type Listener = Box<dyn FnMut(&AuthChange)>;
type Registry = RefCell<Vec<(u64, Listener)>>;

/// Auth-state-change registry. `subscribe` returns a handle that must
/// be unsubscribed (explicitly or by drop) before the observer goes
/// away, so no dangling listener outlives its owner.
pub struct AuthEvents {
    listeners: Rc<Registry>,
    next_id: Cell<u64>,
}

impl AuthEvents {
    pub fn new() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
        }
    }

    pub fn subscribe(&self, listener: impl FnMut(&AuthChange) + 'static) -> AuthSubscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        AuthSubscription {
            id,
            registry: Rc::downgrade(&self.listeners),
        }
    }

    /// Invoke every live listener. Listeners must not subscribe or
    /// unsubscribe from inside the callback.
    pub fn emit(&self, change: &AuthChange) {
        for (_, listener) in self.listeners.borrow_mut().iter_mut() {
            listener(change);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl Default for AuthEvents {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AuthSubscription {
    id: u64,
    registry: Weak<Registry>,
}

impl AuthSubscription {
    pub fn unsubscribe(self) {
        // Drop does the actual removal.
    }

    fn remove(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        self.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listener_sees_emitted_changes() {
        let events = AuthEvents::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let sub = events.subscribe(move |change| sink.borrow_mut().push(change.clone()));

        events.emit(&AuthChange::SignedOut);
        events.emit(&AuthChange::TokenRefreshed);
        assert_eq!(
            *seen.borrow(),
            vec![AuthChange::SignedOut, AuthChange::TokenRefreshed]
        );
        sub.unsubscribe();
    }

    #[test]
    fn unsubscribed_listener_stops_firing() {
        let events = AuthEvents::new();
        let seen = Rc::new(RefCell::new(0u32));
        let sink = seen.clone();
        let sub = events.subscribe(move |_| *sink.borrow_mut() += 1);

        events.emit(&AuthChange::SignedOut);
        sub.unsubscribe();
        events.emit(&AuthChange::SignedOut);
        assert_eq!(*seen.borrow(), 1);
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn dropping_the_handle_unsubscribes() {
        let events = AuthEvents::new();
        {
            let _sub = events.subscribe(|_| {});
            assert_eq!(events.listener_count(), 1);
        }
        assert_eq!(events.listener_count(), 0);
    }
}
