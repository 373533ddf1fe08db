//! Caller-owned observable values
//!
//! A [`Binding<T>`] is state that lives outside a component. The caller owns
//! every transition; components receive a [`BindingReader<T>`] which can read
//! the value and subscribe to changes but has no way to write it.
//!
//! ```rust
//! use motionkit_core::Binding;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let loading = Binding::new(false);
//! let seen = Arc::new(AtomicUsize::new(0));
//!
//! let counter = Arc::clone(&seen);
//! let _sub = loading.reader().subscribe(move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! loading.set(true);
//! loading.set(true); // unchanged, no notification
//! assert_eq!(seen.load(Ordering::SeqCst), 1);
//! ```

use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identifier of a registered change callback
    pub struct SubscriberId;
}

type ChangeCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Versioned<T> {
    value: T,
    version: u64,
}

struct BindingShared<T> {
    state: RwLock<Versioned<T>>,
    subscribers: Mutex<SlotMap<SubscriberId, ChangeCallback<T>>>,
}

impl<T> BindingShared<T> {
    fn notify(&self, value: &T) {
        // Snapshot so callbacks may subscribe/unsubscribe or read the binding
        let callbacks: Vec<ChangeCallback<T>> =
            self.subscribers.lock().values().cloned().collect();
        for callback in callbacks {
            callback(value);
        }
    }
}

/// Shared, caller-owned value with change notification
pub struct Binding<T> {
    shared: Arc<BindingShared<T>>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Binding<T> {
    pub fn new(initial: T) -> Self {
        Self {
            shared: Arc::new(BindingShared {
                state: RwLock::new(Versioned {
                    value: initial,
                    version: 0,
                }),
                subscribers: Mutex::new(SlotMap::with_key()),
            }),
        }
    }

    /// Get the current value
    pub fn get(&self) -> T {
        self.shared.state.read().value.clone()
    }

    /// Number of effective changes since creation
    pub fn version(&self) -> u64 {
        self.shared.state.read().version
    }

    /// Replace the value, notifying subscribers if it changed
    ///
    /// Returns `true` if the value was different from the previous one.
    pub fn set(&self, value: T) -> bool {
        {
            let mut state = self.shared.state.write();
            if state.value == value {
                return false;
            }
            state.value = value.clone();
            state.version += 1;
        }
        tracing::trace!(subscribers = self.subscriber_count(), "binding changed");
        self.shared.notify(&value);
        true
    }

    /// Update the value with a function of the previous one
    pub fn update<F: FnOnce(&T) -> T>(&self, f: F) -> bool {
        let next = f(&self.get());
        self.set(next)
    }

    /// Read-only view for handing to components
    pub fn reader(&self) -> BindingReader<T> {
        BindingReader {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Subscribe to changes
    pub fn subscribe<F>(&self, callback: F) -> Subscription<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.reader().subscribe(callback)
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.lock().len()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.state.read();
        f.debug_struct("Binding")
            .field("value", &state.value)
            .field("version", &state.version)
            .finish()
    }
}

/// Read-only handle to a [`Binding<T>`]
pub struct BindingReader<T> {
    shared: Arc<BindingShared<T>>,
}

impl<T> Clone for BindingReader<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> BindingReader<T> {
    pub fn get(&self) -> T {
        self.shared.state.read().value.clone()
    }

    pub fn version(&self) -> u64 {
        self.shared.state.read().version
    }

    /// Register `callback` to run after every effective change
    ///
    /// The callback stays registered until the returned [`Subscription`] drops.
    pub fn subscribe<F>(&self, callback: F) -> Subscription<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.shared.subscribers.lock().insert(Arc::new(callback));
        Subscription {
            shared: Arc::downgrade(&self.shared),
            id,
        }
    }
}

/// Keeps a change callback registered; unsubscribes on drop
pub struct Subscription<T> {
    shared: Weak<BindingShared<T>>,
    id: SubscriberId,
}

impl<T> Subscription<T> {
    pub fn id(&self) -> SubscriberId {
        self.id
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.subscribers.lock().remove(self.id);
        }
    }
}
