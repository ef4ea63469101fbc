//! Typed, synchronous publish/subscribe.
//!
//! Each [`EventBus`] is generic over one event type, usually an enum whose
//! variants carry that event's payload. [`Event::kind`] maps a value to the
//! key listeners subscribe under, so the set of events and their payload
//! shapes is closed and checked at compile time.
//!
//! Dispatch is single-threaded and runs to completion: `emit` calls every
//! listener registered at the moment it started, in registration order,
//! before returning.

mod bus;
mod token;


use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

pub use bus::{EventBus, DEFAULT_MAX_LISTENERS};
pub use token::EventToken;

/// A closed set of events that can flow through an [`EventBus`].
pub trait Event: 'static {
    /// Discriminant listeners subscribe to (the "event name").
    type Kind: Copy + Eq + Hash + fmt::Debug + 'static;

    fn kind(&self) -> Self::Kind;
}

/// A shared listener callable.
///
/// Identity is the allocation: registering clones of the same `Rc` twice
/// yields two entries that a single `off` removes together.
pub type Listener<T> = Rc<dyn Fn(&T)>;

/// Identity of a registered listener, as carried by [`Registration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

impl ListenerId {
    pub fn of<T: ?Sized>(listener: &Rc<T>) -> Self {
        Self(Rc::as_ptr(listener) as *const () as usize)
    }
}

/// What a registration was made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic<K> {
    Event(K),
    /// The registration meta-event itself.
    Registered,
}

/// Payload of the registration meta-event, emitted on every successful
/// `on`, `once` or `on_registered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration<K> {
    pub topic: Topic<K>,
    pub listener: ListenerId,
}

pub(crate) fn same_listener<T>(a: &Listener<T>, b: &Listener<T>) -> bool {
    ListenerId::of(a) == ListenerId::of(b)
}
