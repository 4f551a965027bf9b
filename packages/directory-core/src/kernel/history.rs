//! In-memory address history with browser-like back/forward semantics.
//!
//! Handles are cheap to clone and share one stack, so a front end can keep a
//! handle for back/forward while the engine owns another.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;
use tracing::debug;

use super::traits::{AddressHost, NavigationSubscription, SubscriptionId};
use crate::domains::directory::events::NavigationEvent;

#[derive(Debug)]
struct HistoryInner {
    entries: Vec<String>,
    cursor: usize,
    next_subscription: u64,
    subscribers: Vec<(SubscriptionId, mpsc::UnboundedSender<NavigationEvent>)>,
}

#[derive(Debug, Clone)]
pub struct InMemoryHistory {
    inner: Arc<Mutex<HistoryInner>>,
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new("")
    }
}

impl InMemoryHistory {
    /// Start with a single entry holding `initial` (leading `?` optional)
    pub fn new(initial: &str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HistoryInner {
                entries: vec![normalize(initial)],
                cursor: 0,
                next_subscription: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HistoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Step back one entry. Returns false at the oldest entry.
    pub fn back(&self) -> bool {
        let mut inner = self.lock();
        if inner.cursor == 0 {
            return false;
        }
        inner.cursor -= 1;
        notify(&mut inner, NavigationEvent::Back);
        true
    }

    /// Step forward one entry. Returns false at the newest entry.
    pub fn forward(&self) -> bool {
        let mut inner = self.lock();
        if inner.cursor + 1 >= inner.entries.len() {
            return false;
        }
        inner.cursor += 1;
        notify(&mut inner, NavigationEvent::Forward);
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.lock().cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        let inner = self.lock();
        inner.cursor + 1 < inner.entries.len()
    }

    /// All entries, oldest first
    pub fn entries(&self) -> Vec<String> {
        self.lock().entries.clone()
    }

    /// Index of the current entry
    pub fn position(&self) -> usize {
        self.lock().cursor
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }
}

impl AddressHost for InMemoryHistory {
    fn current_address(&self) -> String {
        let inner = self.lock();
        inner.entries[inner.cursor].clone()
    }

    fn push_address(&mut self, query: &str) {
        let mut inner = self.lock();
        let cursor = inner.cursor;
        inner.entries.truncate(cursor + 1);
        inner.entries.push(normalize(query));
        inner.cursor = inner.entries.len() - 1;
        debug!(query, depth = inner.entries.len(), "Pushed history entry");
    }

    fn subscribe(&mut self) -> NavigationSubscription {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_subscription);
        inner.next_subscription += 1;

        let (tx, rx) = mpsc::unbounded_channel();
        inner.subscribers.push((id, tx));
        NavigationSubscription { id, events: rx }
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.lock().subscribers.retain(|(sub, _)| *sub != id);
    }
}

fn notify(inner: &mut HistoryInner, event: NavigationEvent) {
    inner.subscribers.retain(|(_, tx)| tx.send(event).is_ok());
}

fn normalize(query: &str) -> String {
    query.strip_prefix('?').unwrap_or(query).to_string()
}
