// Copyright 2026 The pact Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use log::debug;

use crate::cell::Cell;
use crate::continuation::drive;
use crate::error::Error;
use crate::state::StateRef;

/// Move-only producer handle paired with a [`Future`](crate::Future) over
/// one shared state.
///
/// Exactly one satisfaction is possible. Dropping an unsatisfied promise
/// rejects the paired future with the broken-promise error, which is the
/// only cancellation-like signal there is.
pub struct Promise<T: 'static>(Option<StateRef<T>>);

impl<T: 'static> Promise<T> {
    pub(crate) fn with_state(state: StateRef<T>) -> Promise<T> {
        Promise(Some(state))
    }

    /// Fulfill the paired future, dispatching the ready part of its chain
    /// before returning.
    ///
    /// # Panics
    ///
    /// Panics if the promise was already satisfied.
    pub fn set_value(&mut self, value: T) {
        self.satisfy(Cell::Value(value));
    }

    /// Reject the paired future.
    ///
    /// # Panics
    ///
    /// Panics if the promise was already satisfied.
    pub fn set_error(&mut self, error: Error) {
        self.satisfy(Cell::Error(error));
    }

    fn satisfy(&mut self, cell: Cell<T>) {
        let state = self.0.take().expect("promise already satisfied");
        drive(state.settle(cell));
    }
}

impl<T: 'static> Drop for Promise<T> {
    fn drop(&mut self) {
        if let Some(state) = self.0.take() {
            debug!("promise dropped while unsatisfied, rejecting downstream");
            drive(state.settle(Cell::Error(Error::broken_promise())));
        }
    }
}

#[cfg(test)]
mod test {
    use std::cell::Cell as Flag;
    use std::rc::Rc;

    use crate::error::ErrorKind;
    use crate::make_promise;

    #[test]
    #[should_panic(expected = "promise already satisfied")]
    fn double_satisfaction_panics() {
        let (mut promise, _future) = make_promise::<i32>();
        promise.set_value(1);
        promise.set_value(2);
    }

    #[test]
    fn drop_rejects_with_broken_promise() {
        let (promise, mut future) = make_promise::<i32>();
        drop(promise);
        assert!(future.ready());

        let seen = Rc::new(Flag::new(None));
        let sink = seen.clone();
        future.finally(move |outcome| sink.set(Some(outcome.unwrap_err().kind())));

        assert_eq!(seen.get(), Some(ErrorKind::BrokenPromise));
    }

    #[test]
    fn satisfied_promise_injects_nothing_on_drop() {
        let (mut promise, mut future) = make_promise::<i32>();
        promise.set_value(7);
        drop(promise);

        let seen = Rc::new(Flag::new(0));
        let sink = seen.clone();
        future.finally(move |outcome| sink.set(outcome.unwrap()));

        assert_eq!(seen.get(), 7);
    }
}
