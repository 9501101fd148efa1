use crate::cell::Cell;
use crate::chain::Chainable;
use crate::continuation::{drive, Catch, Finally, Step, Then};
use crate::error::Error;
use crate::state::{State, StateRef};

/// Move-only handle to the eventual result of an asynchronous computation.
///
/// A future is observed exclusively by attaching a continuation. Each of
/// [`then`](Future::then), [`catch`](Future::catch) and
/// [`finally`](Future::finally) consumes the handle, so a result is claimed
/// at most once; there is no blocking read.
pub struct Future<T: 'static>(Option<StateRef<T>>);

impl<T: 'static> Future<T> {
    pub(crate) fn with_state(state: StateRef<T>) -> Future<T> {
        Future(Some(state))
    }

    pub(crate) fn take_state(&mut self) -> Option<StateRef<T>> {
        self.0.take()
    }

    /// Ready future carrying `value`, converted into the carried type.
    pub fn resolved(value: impl Into<T>) -> Future<T> {
        Future::with_state(State::with_cell(Cell::Value(value.into())))
    }

    /// Ready future already rejected with `error`.
    pub fn rejected(error: Error) -> Future<T> {
        Future::with_state(State::with_cell(Cell::Error(error)))
    }

    /// Whether this handle still references a state. Chaining consumes the
    /// handle and leaves it invalid.
    pub fn valid(&self) -> bool {
        self.0.is_some()
    }

    /// Whether the result has already been produced.
    pub fn ready(&self) -> bool {
        self.0.as_ref().map_or(false, |state| state.ready())
    }

    /// Chain a success handler, consuming this handle.
    ///
    /// `func` runs when the source settles with a value; an error skips it
    /// and travels on unchanged. The handler's output completes the
    /// returned future under the [`Chainable`] contract. If the source has
    /// already settled, the whole ready part of the chain is dispatched
    /// before `then` returns.
    ///
    /// # Panics
    ///
    /// Panics if the handle was already consumed.
    pub fn then<U, R, F>(&mut self, func: F) -> Future<R>
    where
        U: Chainable<R> + 'static,
        R: 'static,
        F: FnOnce(T) -> U + 'static,
    {
        let source = self.0.take().expect("invalid future");
        let dest = State::new();

        let ready = source.chain(Box::new(Then::<U, R, F>::new(func, dest.clone())));
        drive(ready.map(|next| Step::new(next, source)));

        Future::with_state(dest)
    }

    /// Chain an error handler, consuming this handle.
    ///
    /// The mirror image of [`then`](Future::then): a value skips `func` and
    /// is forwarded verbatim, which is why the returned future carries the
    /// same value type as this one.
    ///
    /// # Panics
    ///
    /// Panics if the handle was already consumed.
    pub fn catch<U, F>(&mut self, func: F) -> Future<T>
    where
        U: Chainable<T> + 'static,
        F: FnOnce(Error) -> U + 'static,
    {
        let source = self.0.take().expect("invalid future");
        let dest = State::new();

        let ready = source.chain(Box::new(Catch::<U, T, F>::new(func, dest.clone())));
        drive(ready.map(|next| Step::new(next, source)));

        Future::with_state(dest)
    }

    /// Observe the settled outcome, consuming this handle and producing no
    /// downstream future.
    ///
    /// # Panics
    ///
    /// Panics if the handle was already consumed.
    pub fn finally<F>(&mut self, func: F)
    where
        F: FnOnce(Result<T, Error>) + 'static,
    {
        let source = self.0.take().expect("invalid future");

        let ready = source.chain(Box::new(Finally::new(func)));
        drive(ready.map(|next| Step::new(next, source)));
    }
}

#[cfg(test)]
mod test {
    use std::cell::Cell as Flag;
    use std::rc::Rc;

    use super::*;
    use crate::{make_promise, make_ready_value};

    #[test]
    #[should_panic(expected = "invalid future")]
    fn chaining_a_consumed_handle_panics() {
        let (_promise, mut future) = make_promise::<i32>();
        let _ = future.then(|n| n);
        let _ = future.then(|n| n);
    }

    #[test]
    fn chaining_invalidates_the_handle() {
        let mut future = make_ready_value(5);
        assert!(future.valid() && future.ready());

        let chained = future.then(|n| n + 1);
        assert!(!future.valid() && !future.ready());
        assert!(chained.valid() && chained.ready());
    }

    #[test]
    fn resolved_converts_into_the_carried_type() {
        let mut future: Future<i64> = Future::resolved(5i32);

        let seen = Rc::new(Flag::new(0i64));
        let sink = seen.clone();
        future.finally(move |outcome| sink.set(outcome.unwrap()));

        assert_eq!(seen.get(), 5);
    }
}
