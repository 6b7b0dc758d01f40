// ============================================================================
// REACTIVITY - Valor compartido con subscribers
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

/// Estado reactivo: los clones comparten valor y subscribers
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback<T>>>>,
}

impl<T: Clone> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Establecer nuevo valor y notificar
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&T) + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        // Sin borrows activos durante los callbacks: pueden llamar a set()
        let callbacks: Vec<Callback<T>> = self.subscribers.borrow().clone();
        let value = self.get();
        for callback in callbacks {
            callback(&value);
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_notifies_all_subscribers() {
        let state = ReactiveState::new(0);
        let seen = Rc::new(Cell::new(0));
        let calls = Rc::new(Cell::new(0));

        let seen_c = seen.clone();
        state.subscribe(move |v| seen_c.set(*v));
        let calls_c = calls.clone();
        state.subscribe(move |_| calls_c.set(calls_c.get() + 1));

        state.set(7);
        assert_eq!(seen.get(), 7);
        assert_eq!(calls.get(), 1);
        assert_eq!(state.get(), 7);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(String::from("a"));
        let other = state.clone();
        let hits = Rc::new(Cell::new(0));
        let hits_c = hits.clone();
        other.subscribe(move |_| hits_c.set(hits_c.get() + 1));

        state.set("b".into());
        assert_eq!(other.get(), "b");
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn subscriber_can_set_from_inside_callback() {
        let state = ReactiveState::new(0);
        let inner = state.clone();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_c = seen.clone();
        state.subscribe(move |v| {
            seen_c.borrow_mut().push(*v);
            // Corregir valores negativos a 0
            if *v < 0 {
                inner.set(0);
            }
        });

        state.set(-5);
        assert_eq!(state.get(), 0);
        assert_eq!(*seen.borrow(), vec![-5, 0]);
    }
}
