use std::cell::RefCell;
use std::rc::Rc;

use super::invalidation::request_frame;
use super::runtime::{flush_effects, try_with_runtime, with_runtime, SignalId};

struct SignalInner<T> {
    id: SignalId,
    value: RefCell<T>,
}

/// A reactive cell owned by the UI thread.
///
/// Reading a signal inside an effect subscribes that effect; writing a
/// different value re-runs every subscriber and requests a new frame.
/// Writes that leave the value unchanged are dropped silently.
pub struct Signal<T> {
    inner: Rc<SignalInner<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        let id = with_runtime(|rt| rt.allocate_signal());
        Self {
            inner: Rc::new(SignalInner {
                id,
                value: RefCell::new(value),
            }),
        }
    }

    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        try_with_runtime(|rt| rt.track_read(self.inner.id));
        f(&self.inner.value.borrow())
    }

    pub fn with_untracked<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.value.borrow())
    }

    fn notify(&self) {
        try_with_runtime(|rt| rt.notify_write(self.inner.id));
        request_frame();
        flush_effects();
    }
}

impl<T: Clone> Signal<T> {
    pub fn get(&self) -> T {
        self.with(T::clone)
    }

    pub fn get_untracked(&self) -> T {
        self.with_untracked(T::clone)
    }
}

impl<T: PartialEq> Signal<T> {
    /// Sets the signal's value, only triggering updates if the value actually changed.
    pub fn set(&self, value: T) {
        {
            let mut guard = self.inner.value.borrow_mut();
            if *guard == value {
                return;
            }
            *guard = value;
        }
        self.notify();
    }
}

impl<T: PartialEq + Clone> Signal<T> {
    /// Updates the signal's value using a closure, only triggering updates if the value changed.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let changed = {
            let mut guard = self.inner.value.borrow_mut();
            let old_value = guard.clone();
            f(&mut guard);
            *guard != old_value
        };
        if changed {
            self.notify();
        }
    }
}

pub fn create_signal<T>(value: T) -> Signal<T> {
    Signal::new(value)
}
