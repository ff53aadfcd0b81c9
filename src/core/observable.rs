//! Minimal publish-subscribe value cell.
//!
//! Containers and the controller expose their state through `Observable`
//! so a rendering layer can re-render when something changes. Notification
//! is synchronous: subscribers run inside the mutating call, after the new
//! value is in place, in the order they subscribed.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use rust_solitaire::core::Observable;
//!
//! let seen = Rc::new(Cell::new(0));
//! let mut clicks = Observable::new(0u32);
//!
//! let sink = Rc::clone(&seen);
//! let id = clicks.subscribe(move |v| sink.set(*v));
//!
//! clicks.update(|v| *v += 1);
//! assert_eq!(seen.get(), 1);
//!
//! assert!(clicks.unsubscribe(id));
//! clicks.set(5);
//! assert_eq!(seen.get(), 1);
//! ```

type Callback<T> = Box<dyn FnMut(&T)>;

/// Handle returned by [`Observable::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A value plus the callbacks interested in it.
pub struct Observable<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
    next_id: u64,
}

impl<T> Observable<T> {
    /// Create a cell holding `value` with no subscribers.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Mutate the value in place, then notify every subscriber.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.value);
        self.notify();
        result
    }

    /// Mutate the value without notifying.
    ///
    /// For multi-step mutations that publish once at the end via
    /// [`Observable::notify`].
    pub fn update_silent<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.value)
    }

    /// Register a callback. It is not invoked for the current value.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Invoke every subscriber with the current value.
    pub fn notify(&mut self) {
        let value = &self.value;
        for (_, callback) in &mut self.subscribers {
            callback(value);
        }
    }
}

impl<T: PartialEq> Observable<T> {
    /// Replace the value. Equal values are ignored and do not notify.
    pub fn set(&mut self, value: T) {
        if self.value == value {
            return;
        }
        self.value = value;
        self.notify();
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
