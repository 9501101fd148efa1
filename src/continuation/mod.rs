// Continuations connect a source state to the destination state of the
// future produced by chaining onto it. Type parameter convention for this
// module:
//
// T => the value type of the source state a continuation consumes
// U => the raw output of a user handler, before `Chainable` resolves it
// R => the value type of the destination state

mod attach;
mod catch;
mod finally;
mod then;

pub(crate) use self::attach::Attach;
pub(crate) use self::catch::Catch;
pub(crate) use self::finally::Finally;
pub(crate) use self::then::Then;

use log::trace;

use crate::state::StateRef;

/// A one-shot handler that consumes the source state's cell and settles a
/// destination state, returning at most one follow-up unit of work.
pub(crate) trait Continuation<T: 'static> {
    fn continue_with(self: Box<Self>, source: StateRef<T>) -> Option<Step>;
}

/// A pending `continue_with` call with its types erased, so that chains
/// running over differently-typed states can be walked by one loop.
pub struct Step(Box<dyn FnOnce() -> Option<Step>>);

impl Step {
    pub(crate) fn new<T: 'static>(next: Box<dyn Continuation<T>>, state: StateRef<T>) -> Step {
        Step(Box::new(move || next.continue_with(state)))
    }

    fn run(self) -> Option<Step> {
        (self.0)()
    }
}

/// The dispatch loop. Ready continuations frequently form long unbroken
/// chains when the producer settled before the consumer attached; each step
/// hands back its successor and the loop stays at constant stack depth, no
/// matter how deep the chain is.
pub(crate) fn drive(mut step: Option<Step>) {
    let mut drained = 0usize;

    while let Some(current) = step {
        step = current.run();
        drained += 1;
    }

    if drained > 0 {
        trace!("dispatch loop drained {} continuations", drained);
    }
}
