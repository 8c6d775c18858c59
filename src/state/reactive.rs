//! Observable value container
//!
//! A small reactive primitive: replacing or mutating the held value notifies
//! every subscriber with a reference to the new value. Views bind to it
//! without depending on any particular UI framework.

use std::fmt;

/// Handle returned by [`Observable::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// A value whose replacement notifies bound observers
pub struct Observable<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: u64,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current value
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value wholesale and notify subscribers
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Mutate the value in place and notify subscribers
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.value);
        self.notify();
        result
    }

    /// Register a callback invoked after every change, in subscription order
    pub fn subscribe(&mut self, subscriber: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns false if the id was not registered.
    #[cfg(test)]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self) {
        let value = &self.value;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(value);
        }
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
