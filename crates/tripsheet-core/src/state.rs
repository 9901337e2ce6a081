use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Observer<T> = Rc<dyn Fn(&T)>;

struct ObserverEntry<T> {
    id: u64,
    observer: Observer<T>,
}

struct StateInner<T> {
    value: RefCell<T>,
    observers: RefCell<SmallVec<[ObserverEntry<T>; 2]>>,
    next_observer_id: Cell<u64>,
}

/// Shared, observable value.
///
/// Cloning the handle shares the value. Writes that do not change the value
/// (by `PartialEq`) are not reported to observers.
pub struct MutableState<T> {
    inner: Rc<StateInner<T>>,
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableState")
            .field("value", &*self.inner.value.borrow())
            .field("observers", &self.inner.observers.borrow().len())
            .finish()
    }
}

impl<T: Default + Clone + PartialEq + 'static> Default for MutableState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> MutableState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(StateInner {
                value: RefCell::new(value),
                observers: RefCell::new(SmallVec::new()),
                next_observer_id: Cell::new(0),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Replace the value. Returns `true` when observers were notified.
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return false;
            }
            *current = value;
        }
        self.notify();
        true
    }

    /// Mutate the value in place. Returns `true` when observers were notified.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let changed = {
            let mut current = self.inner.value.borrow_mut();
            let before = current.clone();
            f(&mut current);
            *current != before
        };
        if changed {
            self.notify();
        }
        changed
    }

    /// Register `observer`, called after every change with the new value.
    ///
    /// The observer stays registered until the returned [`Subscription`] is
    /// dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_observer_id.get();
        self.inner.next_observer_id.set(id + 1);
        self.inner.observers.borrow_mut().push(ObserverEntry {
            id,
            observer: Rc::new(observer),
        });

        let weak: Weak<StateInner<T>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.observers.borrow_mut().retain(|entry| entry.id != id);
            }
        })
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    fn notify(&self) {
        // Snapshot both lists so observers may read or write this state.
        let value = self.get();
        let observers: SmallVec<[Observer<T>; 2]> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|entry| Rc::clone(&entry.observer))
            .collect();
        for observer in observers {
            observer(&value);
        }
    }
}

/// Keeps an observer registered; unsubscribes on drop.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Keep the observer registered for the lifetime of the state.
    pub fn detach(mut self) {
        self.unsubscribe = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
