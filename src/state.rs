// Copyright 2026 The pact Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The rendezvous shared between a promise and a future.

use std::any::TypeId;
use std::cell::RefCell;
use std::rc::Rc;

use log::trace;

use crate::cell::Cell;
use crate::continuation::{Continuation, Step};
use crate::error::Error;

pub type StateRef<T> = Rc<State<T>>;

/// Shared state carrying the result cell and at most one parked
/// continuation.
///
/// The two handles of a promise/future pair reference one `State`; a
/// continuation holds a strong reference to the state it will settle. This
/// type is public only because [`Chainable`](crate::Chainable) mentions it;
/// it exposes nothing callable from outside the crate.
pub struct State<T: 'static> {
    inner: RefCell<Inner<T>>,
}

struct Inner<T: 'static> {
    cell: Cell<T>,
    next: Option<Box<dyn Continuation<T>>>,
}

impl<T: 'static> State<T> {
    pub(crate) fn new() -> StateRef<T> {
        State::with_cell(Cell::Empty)
    }

    pub(crate) fn with_cell(cell: Cell<T>) -> StateRef<T> {
        assert_value_type::<T>();

        Rc::new(State {
            inner: RefCell::new(Inner { cell, next: None }),
        })
    }

    pub(crate) fn ready(&self) -> bool {
        self.inner.borrow().cell.is_set()
    }

    /// Write the result. Writing twice is a bug inside this crate, not in
    /// user code; the handles make a second satisfaction unreachable.
    pub(crate) fn set(&self, cell: Cell<T>) {
        let mut inner = self.inner.borrow_mut();
        assert!(!inner.cell.is_set(), "state settled twice");

        inner.cell = cell;
    }

    /// Move the settled result out for handoff to a continuation.
    pub(crate) fn take_cell(&self) -> Cell<T> {
        let mut inner = self.inner.borrow_mut();
        debug_assert!(inner.cell.is_set());

        inner.cell.take()
    }

    /// Park `next` if the cell is still empty. If the result is already
    /// there, the continuation is handed back so the caller can run it
    /// through the dispatch loop instead of recursing here.
    pub(crate) fn chain(
        &self,
        next: Box<dyn Continuation<T>>,
    ) -> Option<Box<dyn Continuation<T>>> {
        let mut inner = self.inner.borrow_mut();
        assert!(inner.next.is_none(), "state already has a continuation");

        if inner.cell.is_set() {
            return Some(next);
        }

        trace!("continuation parked until the state settles");
        inner.next = Some(next);
        None
    }

    /// Clear and return the continuation slot. The cell must already be
    /// set; a continuation is never run against a pending state.
    pub(crate) fn take_continuation(&self) -> Option<Box<dyn Continuation<T>>> {
        let mut inner = self.inner.borrow_mut();
        debug_assert!(inner.cell.is_set());

        inner.next.take()
    }

    /// Write the result and hand back the follow-up work unit, if any.
    pub(crate) fn settle(self: Rc<Self>, cell: Cell<T>) -> Option<Step> {
        self.set(cell);
        self.take_continuation().map(|next| Step::new(next, self))
    }
}

/// The error token is reserved; a future over it could not tell its own
/// failure channel from its payload. The tag for "pending" is a private
/// enum variant and needs no guard.
fn assert_value_type<T: 'static>() {
    debug_assert!(
        TypeId::of::<T>() != TypeId::of::<Error>(),
        "the error token cannot be a future's value type"
    );
}
