use std::cell::Cell;
use std::fmt;

use super::ListenerId;

/// Cancellation handle returned by a subscription.
///
/// `cancel` takes effect before it returns and is idempotent. Dropping a
/// token does not cancel it. Tokens hold only a weak handle to their bus,
/// so cancelling after the bus is gone is a harmless no-op.
pub struct EventToken {
    topic: Option<String>,
    listener: Option<ListenerId>,
    cancelled: Cell<bool>,
    on_cancel: Box<dyn Fn()>,
}

impl EventToken {
    pub(crate) fn new(topic: String, listener: ListenerId, on_cancel: impl Fn() + 'static) -> Self {
        Self {
            topic: Some(topic),
            listener: Some(listener),
            cancelled: Cell::new(false),
            on_cancel: Box::new(on_cancel),
        }
    }

    /// A token that cancels every child, in order, when cancelled.
    pub fn composite(tokens: Vec<EventToken>) -> Self {
        Self {
            topic: None,
            listener: None,
            cancelled: Cell::new(false),
            on_cancel: Box::new(move || {
                for token in &tokens {
                    token.cancel();
                }
            }),
        }
    }

    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        (self.on_cancel)();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// The listener this token deregisters; `None` for composites.
    pub fn listener(&self) -> Option<ListenerId> {
        self.listener
    }

    /// Debug name of the subscribed event; `None` for composites.
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }
}

impl fmt::Debug for EventToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventToken")
            .field("topic", &self.topic)
            .field("listener", &self.listener)
            .field("cancelled", &self.cancelled.get())
            .finish_non_exhaustive()
    }
}
