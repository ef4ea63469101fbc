use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use super::{same_listener, Event, EventToken, Listener, ListenerId, Registration, Topic};

/// Listener count above which `on` logs a warning.
pub const DEFAULT_MAX_LISTENERS: usize = 10;

struct Entry<T> {
    /// Registration order; strictly increasing within a list.
    seq: u64,
    listener: Listener<T>,
}

fn snapshot<T>(entries: &[Entry<T>]) -> Vec<(u64, Listener<T>)> {
    entries
        .iter()
        .map(|e| (e.seq, Rc::clone(&e.listener)))
        .collect()
}

fn contains_seq<T>(entries: &[Entry<T>], seq: u64) -> bool {
    entries.binary_search_by_key(&seq, |e| e.seq).is_ok()
}

/// Invokes each snapshotted listener that is still registered when reached.
fn dispatch<T>(
    snapshot: Vec<(u64, Listener<T>)>,
    payload: &T,
    is_live: impl Fn(u64) -> bool,
) -> usize {
    let mut invoked = 0;
    for (seq, listener) in snapshot {
        if !is_live(seq) {
            continue;
        }
        listener(payload);
        invoked += 1;
    }
    invoked
}

struct Registry<E: Event> {
    events: HashMap<E::Kind, Vec<Entry<E>>>,
    registered: Vec<Entry<Registration<E::Kind>>>,
    max_listeners: usize,
    next_seq: u64,
}

impl<E: Event> Registry<E> {
    fn next_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn push_event(&mut self, kind: E::Kind, listener: Listener<E>) -> (u64, usize) {
        let seq = self.next_seq();
        let list = self.events.entry(kind).or_default();
        list.push(Entry { seq, listener });
        (seq, list.len())
    }

    fn push_registered(&mut self, listener: Listener<Registration<E::Kind>>) -> usize {
        let seq = self.next_seq();
        self.registered.push(Entry { seq, listener });
        self.registered.len()
    }

    fn remove_event(&mut self, kind: E::Kind, listener: &Listener<E>) {
        if let Some(list) = self.events.get_mut(&kind) {
            list.retain(|e| !same_listener(&e.listener, listener));
        }
    }

    fn remove_seq(&mut self, kind: E::Kind, seq: u64) {
        if let Some(list) = self.events.get_mut(&kind) {
            list.retain(|e| e.seq != seq);
        }
    }

    fn remove_registered(&mut self, listener: &Listener<Registration<E::Kind>>) {
        self.registered
            .retain(|e| !same_listener(&e.listener, listener));
    }

    fn is_live_event(&self, kind: E::Kind, seq: u64) -> bool {
        self.events
            .get(&kind)
            .is_some_and(|list| contains_seq(list, seq))
    }

    fn is_live_registered(&self, seq: u64) -> bool {
        contains_seq(&self.registered, seq)
    }
}

/// A synchronous, typed event dispatcher owned by one component.
///
/// All methods take `&self`; listeners may call back into the bus (to
/// subscribe, unsubscribe, or emit) while a dispatch is in progress. The
/// registry is never borrowed while a listener runs.
///
/// A listener that panics aborts the rest of that dispatch and the panic
/// propagates to the caller of [`emit`](Self::emit).
pub struct EventBus<E: Event> {
    inner: Rc<RefCell<Registry<E>>>,
}

impl<E: Event> EventBus<E> {
    pub fn new() -> Self {
        Self::with_max_listeners(DEFAULT_MAX_LISTENERS)
    }

    pub fn with_max_listeners(max_listeners: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry {
                events: HashMap::new(),
                registered: Vec::new(),
                max_listeners,
                next_seq: 0,
            })),
        }
    }

    /// Appends `listener` to the list for `kind`.
    ///
    /// Logs a warning when the list grows past the configured maximum but
    /// never rejects the registration. Observers added with
    /// [`on_registered`](Self::on_registered) are notified afterwards.
    pub fn on(&self, kind: E::Kind, listener: Listener<E>) -> EventToken {
        self.subscribe(kind, listener).1
    }

    /// Like [`on`](Self::on), but the listener runs for at most one event.
    ///
    /// The wrapper deregisters itself before calling through, so a
    /// re-entrant emit from inside the listener does not reach it again.
    pub fn once(&self, kind: E::Kind, listener: Listener<E>) -> EventToken {
        let registry = Rc::downgrade(&self.inner);
        let slot: Rc<Cell<Option<u64>>> = Rc::new(Cell::new(None));
        let fired = Cell::new(false);

        let own_seq = Rc::clone(&slot);
        let wrapper: Listener<E> = Rc::new(move |event: &E| {
            if fired.replace(true) {
                return;
            }
            if let (Some(registry), Some(seq)) = (registry.upgrade(), own_seq.get()) {
                registry.borrow_mut().remove_seq(kind, seq);
            }
            listener(event);
        });

        let (seq, token) = self.subscribe(kind, wrapper);
        slot.set(Some(seq));
        token
    }

    /// Removes every entry for `kind` that is the same allocation as
    /// `listener`. Unknown listeners are ignored.
    pub fn off(&self, kind: E::Kind, listener: &Listener<E>) {
        self.inner.borrow_mut().remove_event(kind, listener);
    }

    /// Dispatches `event` to the listeners registered for its kind.
    ///
    /// Iterates a snapshot taken on entry: listeners added during this
    /// dispatch wait for the next one, and listeners removed before being
    /// reached are skipped. Returns how many listeners ran.
    pub fn emit(&self, event: &E) -> usize {
        let kind = event.kind();
        let listeners = match self.inner.borrow().events.get(&kind) {
            Some(list) if !list.is_empty() => snapshot(list),
            _ => return 0,
        };

        tracing::trace!("emit {kind:?} to {} listener(s)", listeners.len());
        dispatch(listeners, event, |seq| {
            self.inner.borrow().is_live_event(kind, seq)
        })
    }

    /// Subscribes to the registration meta-event.
    ///
    /// This is an ordinary registration: it counts toward the warning
    /// threshold and announces itself, so a new observer receives its own
    /// registration with [`Topic::Registered`].
    pub fn on_registered(&self, listener: Listener<Registration<E::Kind>>) -> EventToken {
        let count = self.inner.borrow_mut().push_registered(Rc::clone(&listener));
        let id = ListenerId::of(&listener);
        self.warn_if_crowded(&Topic::<E::Kind>::Registered, count);
        self.announce(Registration {
            topic: Topic::Registered,
            listener: id,
        });

        let registry = Rc::downgrade(&self.inner);
        EventToken::new(format!("{:?}", Topic::<E::Kind>::Registered), id, move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().remove_registered(&listener);
            }
        })
    }

    pub fn off_registered(&self, listener: &Listener<Registration<E::Kind>>) {
        self.inner.borrow_mut().remove_registered(listener);
    }

    /// Groups tokens so one `cancel` releases all of them, in order.
    pub fn depends(&self, tokens: Vec<EventToken>) -> EventToken {
        EventToken::composite(tokens)
    }

    /// Sets the warning threshold. Existing lists are not re-checked.
    pub fn set_max_listeners(&self, max_listeners: usize) -> &Self {
        self.inner.borrow_mut().max_listeners = max_listeners;
        self
    }

    pub fn max_listeners(&self) -> usize {
        self.inner.borrow().max_listeners
    }

    pub fn listener_count(&self, kind: E::Kind) -> usize {
        self.inner.borrow().events.get(&kind).map_or(0, Vec::len)
    }

    /// Drops every registration, meta-event observers included. Nothing
    /// is invoked.
    pub fn clear(&self) {
        let mut registry = self.inner.borrow_mut();
        registry.events.clear();
        registry.registered.clear();
    }

    fn subscribe(&self, kind: E::Kind, listener: Listener<E>) -> (u64, EventToken) {
        let (seq, count) = self
            .inner
            .borrow_mut()
            .push_event(kind, Rc::clone(&listener));
        let id = ListenerId::of(&listener);
        self.warn_if_crowded(&Topic::Event(kind), count);
        self.announce(Registration {
            topic: Topic::Event(kind),
            listener: id,
        });

        let registry: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.inner);
        let token = EventToken::new(format!("{kind:?}"), id, move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().remove_event(kind, &listener);
            }
        });
        (seq, token)
    }

    fn announce(&self, registration: Registration<E::Kind>) {
        let observers = {
            let registry = self.inner.borrow();
            if registry.registered.is_empty() {
                return;
            }
            snapshot(&registry.registered)
        };
        dispatch(observers, &registration, |seq| {
            self.inner.borrow().is_live_registered(seq)
        });
    }

    fn warn_if_crowded(&self, topic: &Topic<E::Kind>, count: usize) {
        let max = self.max_listeners();
        if count > max {
            tracing::warn!(
                "event {topic:?} has more than {max} listeners (total: {count}), this may cause performance issues"
            );
        }
    }
}

impl<E: Event> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.inner.borrow();
        f.debug_struct("EventBus")
            .field("events", &registry.events.len())
            .field("registration_observers", &registry.registered.len())
            .field("max_listeners", &registry.max_listeners)
            .finish()
    }
}
