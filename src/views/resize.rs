// src/views/resize.rs
//
// The host side of resize observation. The window's `resized` handler calls
// `notify`; components hold a `ResizeSubscription` for as long as they want
// to hear about it. Dropping the subscription deregisters the listener.
//
// Single-threaded. Listeners must not subscribe or unsubscribe from inside
// their own callback.

use nannou::prelude::*;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Box<dyn FnMut(Vec2)>;
type ListenerList = RefCell<Vec<(u64, Listener)>>;

#[derive(Default)]
pub struct ResizeChannel {
    listeners: Rc<ListenerList>,
    next_id: u64,
}

impl ResizeChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ResizeSubscription
    where
        F: FnMut(Vec2) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.borrow_mut().push((id, Box::new(listener)));

        ResizeSubscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Delivers `size` to every live listener, in subscription order.
    pub fn notify(&self, size: Vec2) {
        for (_, listener) in self.listeners.borrow_mut().iter_mut() {
            listener(size);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

#[must_use = "dropping the subscription deregisters the listener"]
pub struct ResizeSubscription {
    id: u64,
    listeners: Weak<ListenerList>,
}

impl ResizeSubscription {
    pub fn is_active(&self) -> bool {
        self.listeners
            .upgrade()
            .map(|list| list.borrow().iter().any(|(id, _)| *id == self.id))
            .unwrap_or(false)
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        // the channel may already be gone at app exit
        if let Some(list) = self.listeners.upgrade() {
            list.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
