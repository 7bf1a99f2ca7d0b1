//! Access listeners.
//!
//! Every store round trip produces one [`AccessEvent`]. Listeners are held
//! in an explicit subscription list; `subscribe` hands back a handle that
//! `unsubscribe` takes to remove the listener again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use witsml_types::ObjectType;

use crate::transport::StoreStatus;

/// The store operation behind an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    GetVersion,
    GetCapabilities,
    GetFromStore,
    DeleteFromStore,
}

impl StoreOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreOperation::GetVersion => "GetVersion",
            StoreOperation::GetCapabilities => "GetCap",
            StoreOperation::GetFromStore => "GetFromStore",
            StoreOperation::DeleteFromStore => "DeleteFromStore",
        }
    }
}

/// One completed (or failed) round trip.
#[derive(Debug, Clone)]
pub struct AccessEvent {
    pub operation: StoreOperation,
    pub object_type: Option<ObjectType>,
    pub request: String,
    /// Response text. Empty when the transport failed.
    pub response: String,
    /// `None` when the transport failed before the server answered.
    pub status: Option<StoreStatus>,
    pub elapsed: Duration,
}

pub trait AccessListener: Send + Sync {
    fn on_access(&self, event: &AccessEvent);
}

impl<F> AccessListener for F
where
    F: Fn(&AccessEvent) + Send + Sync,
{
    fn on_access(&self, event: &AccessEvent) {
        self(event)
    }
}

/// Handle returned by [`Subscriptions::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The owned listener list.
#[derive(Default)]
pub struct Subscriptions {
    next: AtomicU64,
    listeners: Mutex<Vec<(SubscriptionId, Arc<dyn AccessListener>)>>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: Arc<dyn AccessListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next.fetch_add(1, Ordering::Relaxed));
        self.lock().push((id, listener));
        id
    }

    /// Removes a listener. Returns false when the handle was unknown.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Delivers `event` to every listener in subscription order.
    ///
    /// The list is snapshotted first, so a listener may subscribe or
    /// unsubscribe from inside its callback.
    pub fn notify(&self, event: &AccessEvent) {
        let snapshot: Vec<Arc<dyn AccessListener>> =
            self.lock().iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in snapshot {
            listener.on_access(event);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(SubscriptionId, Arc<dyn AccessListener>)>> {
        // Poisoning is ignored: no mutation of the list can panic midway.
        self.listeners
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Subscriptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriptions")
            .field("listeners", &self.len())
            .finish()
    }
}
