// Trait definitions for the engine's external collaborators
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for async service traits (e.g., BaseProviderSource)

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domains::directory::events::NavigationEvent;
use crate::domains::providers::ProviderRecord;
use crate::error::Result;

// =============================================================================
// Provider Source Trait (Infrastructure - one-shot record fetch)
// =============================================================================

#[async_trait]
pub trait BaseProviderSource: Send + Sync {
    /// Read the full provider collection once. Never retried by the engine.
    async fn fetch_providers(&self) -> Result<Vec<ProviderRecord>>;
}

// =============================================================================
// Address Host Trait (Infrastructure - navigable address history)
// =============================================================================

/// Identifies one navigation subscription on a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Navigation events delivered to one subscriber
#[derive(Debug)]
pub struct NavigationSubscription {
    pub id: SubscriptionId,
    pub events: mpsc::UnboundedReceiver<NavigationEvent>,
}

pub trait AddressHost {
    /// The query part of the current address (no leading `?`)
    fn current_address(&self) -> String;

    /// Push a new history entry and make it current
    fn push_address(&mut self, query: &str);

    /// Start receiving back/forward events
    fn subscribe(&mut self) -> NavigationSubscription;

    /// Stop delivering events to `id`
    fn unsubscribe(&mut self, id: SubscriptionId);
}
