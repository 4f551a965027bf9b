//! Navigation sync - keeps the address history in step with the filter state
//! without feedback loops.
//!
//! ```text
//! Startup ──► first change consumed by the one-shot flag (no push)
//! User    ──► PushAddress
//! History ──► no push (state came from the address itself)
//! ```

use crate::domains::directory::commands::NavigationCommand;
use crate::domains::directory::events::{ChangeOrigin, FilterStateChanged};
use crate::machine::Machine;

/// Navigation state machine
/// Pure decision logic - NO IO, only state transitions
#[derive(Debug, Default)]
pub struct NavigationMachine {
    /// Set once the first observed change has been swallowed
    already_synced: bool,
}

impl NavigationMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn already_synced(&self) -> bool {
        self.already_synced
    }
}

impl Machine for NavigationMachine {
    type Event = FilterStateChanged;
    type Command = NavigationCommand;

    fn decide(&mut self, event: &FilterStateChanged) -> Option<NavigationCommand> {
        // The current address already represents the first state we see
        if !self.already_synced {
            self.already_synced = true;
            return None;
        }

        match event.origin {
            ChangeOrigin::History => None,
            ChangeOrigin::Startup | ChangeOrigin::User => Some(NavigationCommand::PushAddress {
                query: event.query.clone(),
            }),
        }
    }
}
