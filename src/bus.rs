//! Event bus - synchronous in-process publish/subscribe
//!
//! Distant UI regions (header balance, cart badge) react to state changes
//! without sharing a component ancestry. Topics and payloads are typed: a
//! publish cannot carry the wrong payload shape for its topic.
//!
//! Handlers run synchronously, in registration order, on the publishing
//! thread. A panicking handler is caught and logged; it never prevents later
//! handlers on the same publish from running. The subscriber list is
//! snapshotted per publish, so handlers may subscribe or unsubscribe
//! reentrantly. Acyclic publish graphs are the caller's responsibility.

use crate::types::SubscriptionId;
use std::cell::RefCell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

/// Named channels on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Membership of the Pending column changed
    PendingCountChanged,
    /// The withdrawal collaborator updated the account balance
    BalanceChanged,
}

/// A typed event payload. The topic is derived from the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    PendingCountChanged { count: usize },
    BalanceChanged { balance: f64 },
}

impl Signal {
    /// The topic this signal is delivered on
    pub fn topic(&self) -> Topic {
        match self {
            Signal::PendingCountChanged { .. } => Topic::PendingCountChanged,
            Signal::BalanceChanged { .. } => Topic::BalanceChanged,
        }
    }
}

type Handler = Rc<dyn Fn(&Signal)>;

struct Subscription {
    id: SubscriptionId,
    topic: Topic,
    handler: Handler,
}

/// Synchronous publish/subscribe registry.
///
/// Not `Send`/`Sync` - the engine is single-threaded by design and the bus
/// lives on the UI thread alongside the store.
#[derive(Default)]
pub struct EventBus {
    subscriptions: RefCell<Vec<Subscription>>,
}

impl EventBus {
    /// Create a new bus with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `topic`.
    ///
    /// Handlers for the same topic are invoked in registration order.
    /// The returned id is the token for [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&self, topic: Topic, handler: impl Fn(&Signal) + 'static) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.subscriptions.borrow_mut().push(Subscription {
            id: id.clone(),
            topic,
            handler: Rc::new(handler),
        });
        id
    }

    /// Remove a subscription.
    ///
    /// After this returns, no publish that begins later will invoke the
    /// handler. Returns false if the token was already removed.
    pub fn unsubscribe(&self, id: &SubscriptionId) -> bool {
        let mut subs = self.subscriptions.borrow_mut();
        let before = subs.len();
        subs.retain(|s| &s.id != id);
        subs.len() != before
    }

    /// Deliver `signal` to every current subscriber of its topic.
    ///
    /// A publish with zero subscribers is a no-op. Per-handler panics are
    /// isolated and logged.
    pub fn publish(&self, signal: &Signal) {
        let topic = signal.topic();
        // Snapshot under the borrow, then release it so handlers can
        // subscribe/unsubscribe or publish on other topics.
        let handlers: Vec<Handler> = self
            .subscriptions
            .borrow()
            .iter()
            .filter(|s| s.topic == topic)
            .map(|s| Rc::clone(&s.handler))
            .collect();

        tracing::debug!(?topic, subscribers = handlers.len(), "publish");

        for handler in handlers {
            if catch_unwind(AssertUnwindSafe(|| handler(signal))).is_err() {
                tracing::error!(?topic, "event handler panicked; continuing with remaining handlers");
            }
        }
    }

    /// Number of live subscriptions for a topic
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.subscriptions
            .borrow()
            .iter()
            .filter(|s| s.topic == topic)
            .count()
    }
}
