//! Shared observable state.
//!
//! The session stores are constructed objects rather than process-wide
//! singletons. [`Reactive`] gives each instance its own value and
//! subscriber list, so UI layers can re-render on change and tests can
//! observe isolated instances.

use std::sync::{Arc, Mutex};

type Listener = Box<dyn FnMut()>;

/// A shared value with change notification.
///
/// Clones share the same value and subscriber list.
pub struct Reactive<T> {
    value: Arc<Mutex<T>>,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl<T: Clone> Reactive<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(Mutex::new(value)),
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.value.lock().unwrap().clone()
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        *self.value.lock().unwrap() = value;
        self.notify();
    }

    /// Mutate the value in place and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        {
            let mut value = self.value.lock().unwrap();
            f(&mut value);
        }
        self.notify();
    }

    /// Register a callback invoked after every change.
    ///
    /// Callbacks run with the listener list locked and so must not
    /// subscribe from within.
    pub fn subscribe(&self, listener: impl FnMut() + 'static) {
        self.listeners.lock().unwrap().push(Box::new(listener));
    }

    fn notify(&self) {
        for listener in self.listeners.lock().unwrap().iter_mut() {
            listener();
        }
    }
}

impl<T> Clone for Reactive<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            listeners: self.listeners.clone(),
        }
    }
}
