// Copyright 2026 The pact Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::marker::PhantomData;

use crate::cell::Cell;
use crate::chain::Chainable;
use crate::continuation::{Continuation, Step};
use crate::state::StateRef;

/// Success mapper. An error in the source bypasses the handler entirely
/// and is forwarded verbatim; only `Catch` may reshape an error.
pub(crate) struct Then<U, R: 'static, F> {
    func: F,
    dest: StateRef<R>,
    _raw: PhantomData<U>,
}

impl<U, R: 'static, F> Then<U, R, F> {
    pub(crate) fn new(func: F, dest: StateRef<R>) -> Then<U, R, F> {
        Then {
            func,
            dest,
            _raw: PhantomData,
        }
    }
}

impl<T, U, R, F> Continuation<T> for Then<U, R, F>
where
    T: 'static,
    U: Chainable<R> + 'static,
    R: 'static,
    F: FnOnce(T) -> U + 'static,
{
    fn continue_with(self: Box<Self>, source: StateRef<T>) -> Option<Step> {
        let this = *self;

        match source.take_cell() {
            Cell::Value(value) => (this.func)(value).complete(this.dest),
            Cell::Error(error) => this.dest.settle(Cell::Error(error)),
            Cell::Empty => unreachable!("continuation dispatched on an empty cell"),
        }
    }
}
